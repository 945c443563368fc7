pub mod pool;
pub mod transfer;
