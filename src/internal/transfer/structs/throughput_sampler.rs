use super::speed_sample::SpeedSample;

/// 吞吐采样器：记住上一次的累计字节数，每次采样得到两次之间的增量。
#[derive(Debug, Clone, Default)]
pub struct ThroughputSampler {
    previous: u64,
}

impl ThroughputSampler {
    pub fn new(baseline: u64) -> Self {
        Self { previous: baseline }
    }

    /// 以当前累计值采样；累计值回退时记为 0，不会出现负速度。
    pub fn sample(&mut self, current: u64) -> SpeedSample {
        let delta = current.saturating_sub(self.previous);
        self.previous = self.previous.max(current);
        SpeedSample::new(delta)
    }
}
