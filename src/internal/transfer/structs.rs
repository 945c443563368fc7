pub mod hook_adapters;
pub mod segment;
pub mod segment_plan;
pub mod segmented_transfer;
pub mod speed_sample;
pub mod throughput_sampler;
pub mod transfer_config;
pub mod transfer_error;
pub mod transfer_hooks_container;
pub mod transfer_progress;
pub mod transfer_report;
pub mod transfer_status;

// 重导出公共类型
pub use segment::Segment;
pub use segment_plan::SegmentPlan;
pub use segmented_transfer::SegmentedTransfer;
pub use speed_sample::{SpeedSample, SpeedUnit};
pub use throughput_sampler::ThroughputSampler;
pub use transfer_config::TransferConfig;
pub use transfer_error::TransferError;
pub use transfer_hooks_container::TransferHooksContainer;
pub use transfer_progress::TransferProgress;
pub use transfer_report::TransferReport;
pub use transfer_status::TransferStatus;
