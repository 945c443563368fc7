pub mod build_client;
pub mod fetch_range;
pub mod identity_headers;
pub mod monitor_throughput;
pub mod probe_content_length;
pub mod write_segment;

pub use build_client::build_client;
pub use fetch_range::{fetch_range, FetchRangeParams};
pub use identity_headers::{authority, identity_headers, parse_source_url};
pub use monitor_throughput::{monitor_throughput, MonitorThroughputParams};
pub use probe_content_length::{parse_content_length, probe_content_length};
pub use write_segment::{partial_path, preallocate, promote_partial, sync_file, write_at};
