use crate::internal::transfer::traits::transfer_hook::TransferHook;

use super::speed_sample::SpeedSample;
use super::segment::Segment;
use super::transfer_progress::TransferProgress;
use super::transfer_status::TransferStatus;

/// 钩子容器：按注册顺序依次调用。
#[derive(Default)]
pub struct TransferHooksContainer {
    hooks: Vec<Box<dyn TransferHook>>,
}

impl TransferHooksContainer {
    pub fn add(&mut self, hook: impl TransferHook + 'static) {
        self.hooks.push(Box::new(hook));
    }

    pub fn run_on_status(&self, status: &TransferStatus) {
        for h in &self.hooks {
            h.on_status(status);
        }
    }

    pub fn run_on_progress(&self, progress: &TransferProgress) {
        for h in &self.hooks {
            h.on_progress(progress);
        }
    }

    pub fn run_on_speed(&self, sample: &SpeedSample) {
        for h in &self.hooks {
            h.on_speed(sample);
        }
    }

    pub fn run_on_segment_dropped(&self, segment: &Segment, error: &str) {
        for h in &self.hooks {
            h.on_segment_dropped(segment, error);
        }
    }
}
