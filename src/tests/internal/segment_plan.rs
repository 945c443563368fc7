//! 分段规划测试：区间覆盖、末段长度、worker 数。

use std::path::Path;

use url::Url;

use crate::transfer::segment_plan::worker_count;
use crate::transfer::SegmentPlan;

const MB: u64 = 1024 * 1024;

fn plan(total: u64, segment_size: u64, max_workers: usize) -> SegmentPlan {
    let url = Url::parse("http://example.com/file.bin").unwrap();
    SegmentPlan::new(&url, Path::new("file.bin"), total, segment_size, max_workers)
}

#[test]
fn ten_bytes_in_fours() {
    let p = plan(10, 4, 10);
    let ranges: Vec<(u64, u64)> = p.segments.iter().map(|s| (s.start, s.end())).collect();
    assert_eq!(ranges, vec![(0, 4), (4, 8), (8, 10)]);

    let last = p.segments.last().unwrap();
    assert_eq!(last.length, 2);
    assert_eq!(last.last_byte(), 9);
    assert_eq!(last.range_header(), "bytes=8-9");
    assert_eq!(last.content_range_header(10), "bytes 8-9/10");
}

#[test]
fn segments_cover_exactly_without_overlap() {
    for total in [1u64, 2, 3, 7, 64, 100, 1023, 1024, 1025, 4097] {
        for size in [1u64, 2, 3, 16, 100, 1024, 5000] {
            let p = plan(total, size, 10);
            let mut expected_start = 0u64;
            for seg in &p.segments {
                assert_eq!(seg.start, expected_start, "L={total} S={size} 出现空洞或重叠");
                assert!(seg.length > 0 && seg.length <= size);
                expected_start = seg.end();
            }
            assert_eq!(expected_start, total, "L={total} S={size} 未恰好覆盖");
            assert_eq!(p.segment_count() as u64, total.div_ceil(size));
        }
    }
}

#[test]
fn exact_multiple_has_no_short_tail() {
    let p = plan(12, 4, 10);
    assert_eq!(p.segment_count(), 3);
    assert!(p.segments.iter().all(|s| s.length == 4));
}

#[test]
fn worker_count_examples() {
    assert_eq!(worker_count(5 * MB, 2 * MB, 10), 2);
    assert_eq!(worker_count(100 * MB, 2 * MB, 10), 10);
    assert_eq!(worker_count(10, 4, 10), 2);
    assert_eq!(worker_count(10, 4, 1), 1);
}

#[test]
fn resource_smaller_than_one_segment_still_gets_a_worker() {
    let p = plan(100, 2 * MB, 10);
    assert_eq!(p.worker_count, 1);
    assert_eq!(p.segment_count(), 1);
    assert_eq!(p.segments[0].length, 100);
}

#[test]
fn worker_count_formula_holds() {
    for total in 1u64..200 {
        for size in [1u64, 3, 7, 50, 250] {
            for max in [1usize, 2, 5, 10] {
                let expected = ((total / size) as usize).min(max).max(1);
                assert_eq!(worker_count(total, size, max), expected);
            }
        }
    }
}

#[test]
fn zero_length_produces_empty_plan() {
    let p = plan(0, 4, 10);
    assert_eq!(p.segment_count(), 0);
    assert_eq!(p.worker_count, 0);
}

#[test]
fn segments_share_source_and_destination() {
    let p = plan(9, 4, 10);
    assert!(p.segments.iter().all(|s| s.url.as_str() == "http://example.com/file.bin"));
    assert!(p.segments.iter().all(|s| s.save_path.as_path() == Path::new("file.bin")));
}
