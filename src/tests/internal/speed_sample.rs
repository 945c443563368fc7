use crate::transfer::{SpeedSample, SpeedUnit, ThroughputSampler, TransferProgress};

#[test]
fn zero_bytes_is_zero_byte_per_second() {
    let s = SpeedSample::new(0);
    assert_eq!(s.unit(), SpeedUnit::Byte);
    assert_eq!(s.value(), 0);
    assert_eq!(s.to_string(), "0 Byte/s");
}

#[test]
fn picks_largest_nonzero_unit() {
    assert_eq!(SpeedSample::new(1023).to_string(), "1023 Byte/s");
    assert_eq!(SpeedSample::new(1024).to_string(), "1 KB/s");
    assert_eq!(SpeedSample::new(5 * 1024 * 1024 + 17).to_string(), "5 MB/s");
    assert_eq!(SpeedSample::new(3 << 30).to_string(), "3 GB/s");
}

#[test]
fn sampler_reports_deltas() {
    let mut sampler = ThroughputSampler::new(0);
    assert_eq!(sampler.sample(2048).bytes_per_interval, 2048);
    assert_eq!(sampler.sample(2048).bytes_per_interval, 0);
    assert_eq!(sampler.sample(3072).bytes_per_interval, 1024);
}

#[test]
fn sampler_never_goes_negative() {
    let mut sampler = ThroughputSampler::new(500);
    assert_eq!(sampler.sample(100).bytes_per_interval, 0);
    // 回退后的基准仍是较大值，不会把回退量算成速度
    assert_eq!(sampler.sample(600).bytes_per_interval, 100);
}

#[test]
fn progress_percentage() {
    let p = TransferProgress {
        bytes_done: 25,
        total: 100,
    };
    assert_eq!(p.pct(), 25.0);
    assert!(TransferProgress::default().pct().is_nan());
}
