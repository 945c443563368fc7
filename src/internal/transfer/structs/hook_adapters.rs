//! 单项钩子适配器：将闭包包装成 [`TransferHook`]，供 `with_on_xx_hook` 使用。

use crate::internal::transfer::traits::transfer_hook::TransferHook;

use super::speed_sample::SpeedSample;
use super::transfer_progress::TransferProgress;
use super::transfer_status::TransferStatus;

pub(crate) struct OnStatusHookAdapter<F>(pub(crate) F);

impl<F> TransferHook for OnStatusHookAdapter<F>
where
    F: Fn(&TransferStatus) + Send + Sync + 'static,
{
    fn on_status(&self, status: &TransferStatus) {
        (self.0)(status)
    }
}

pub(crate) struct OnSpeedHookAdapter<F>(pub(crate) F);

impl<F> TransferHook for OnSpeedHookAdapter<F>
where
    F: Fn(&SpeedSample) + Send + Sync + 'static,
{
    fn on_speed(&self, sample: &SpeedSample) {
        (self.0)(sample)
    }
}

pub(crate) struct OnProgressHookAdapter<F>(pub(crate) F);

impl<F> TransferHook for OnProgressHookAdapter<F>
where
    F: Fn(&TransferProgress) + Send + Sync + 'static,
{
    fn on_progress(&self, progress: &TransferProgress) {
        (self.0)(progress)
    }
}
