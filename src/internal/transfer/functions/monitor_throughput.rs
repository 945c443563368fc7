//! 吞吐监控：每个周期读取一次累计字节数，输出周期内的增量。

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::internal::transfer::structs::{ThroughputSampler, TransferHooksContainer};

pub struct MonitorThroughputParams {
    pub bytes_done: Arc<AtomicU64>,
    pub interval: Duration,
    pub hooks: Arc<TransferHooksContainer>,
    pub stop: CancellationToken,
}

/// 运行到 `stop` 被触发为止；只读计数器，不影响传输。
pub async fn monitor_throughput(params: MonitorThroughputParams) {
    let mut sampler = ThroughputSampler::new(params.bytes_done.load(Ordering::Relaxed));
    let period = params.interval.max(Duration::from_millis(1));
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;

            _ = params.stop.cancelled() => break,
            _ = ticker.tick() => {
                let sample = sampler.sample(params.bytes_done.load(Ordering::Relaxed));
                info!(speed = %sample, "download speed");
                params.hooks.run_on_speed(&sample);
            }
        }
    }
}
