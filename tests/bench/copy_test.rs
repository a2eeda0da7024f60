/*!
 * Copy Benchmark Tests
 * Iteration count, error taxonomy and region ownership through the public API
 */

use copy_bench::{
    measure_copy_duration, BenchError, CopyBenchmark, CopyPrimitive, ManualClock, MemoryError,
    Region, SystemCopy, COPY_ITERATIONS,
};
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Copier that counts calls and forwards to memcpy
#[derive(Default)]
struct CountingCopy {
    calls: AtomicUsize,
}

impl CountingCopy {
    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CopyPrimitive for CountingCopy {
    fn copy(&self, dst: &mut Region, src: &Region) -> Result<(), MemoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        SystemCopy.copy(dst, src)
    }
}

/// Copier that records the addresses it was handed
#[derive(Default)]
struct RecordingCopy {
    seen: Mutex<Vec<(usize, usize)>>,
}

impl CopyPrimitive for RecordingCopy {
    fn copy(&self, dst: &mut Region, src: &Region) -> Result<(), MemoryError> {
        self.seen
            .lock()
            .unwrap()
            .push((dst.as_ptr() as usize, src.as_ptr() as usize));
        SystemCopy.copy(dst, src)
    }
}

#[test]
fn test_counts_one_hundred_copies_per_call() {
    let counter = CountingCopy::default();
    let bench = CopyBenchmark::new().with_copier(&counter);

    for size in [0, 1, 4096, 1024 * 1024] {
        let before = counter.calls();
        bench.measure(size).unwrap();
        assert_eq!(counter.calls() - before, COPY_ITERATIONS);
    }
}

#[test]
fn test_same_region_pair_for_every_copy() {
    let recorder = RecordingCopy::default();
    CopyBenchmark::new()
        .with_copier(&recorder)
        .measure(2048)
        .unwrap();

    let seen = recorder.seen.lock().unwrap();
    assert_eq!(seen.len(), COPY_ITERATIONS);

    let (dst, src) = seen[0];
    assert_ne!(dst, src);
    assert!(seen.iter().all(|&pair| pair == (dst, src)));
}

#[test]
fn test_regions_do_not_overlap() {
    let recorder = RecordingCopy::default();
    let size = 8192;
    CopyBenchmark::new()
        .with_copier(&recorder)
        .measure(size)
        .unwrap();

    let (dst, src) = recorder.seen.lock().unwrap()[0];
    assert!(dst + size <= src || src + size <= dst);
}

#[test]
fn test_zero_size_completes() {
    let duration = measure_copy_duration(0).unwrap();
    assert!(duration >= 0.0);
    assert!(duration < 1.0);
}

#[test]
fn test_negative_size_is_invalid() {
    match measure_copy_duration(-4096) {
        Err(BenchError::InvalidSize { size }) => assert_eq!(size, -4096),
        other => panic!("Expected InvalidSize, got {:?}", other),
    }
}

#[test]
fn test_unallocatable_size_is_allocation_error() {
    let err = CopyBenchmark::new().measure(usize::MAX).unwrap_err();

    match err {
        BenchError::Allocation(MemoryError::InvalidLayout { size, .. }) => {
            assert_eq!(size, usize::MAX)
        }
        other => panic!("Expected Allocation, got {:?}", other),
    }
}

#[test]
fn test_refused_allocation_is_allocation_error() {
    let size = (isize::MAX as usize) & !7;
    let err = CopyBenchmark::new().measure(size).unwrap_err();

    assert!(err.is_allocation());
    assert_eq!(
        err,
        BenchError::Allocation(MemoryError::AllocationFailed { requested: size })
    );
}

#[test]
fn test_measurement_reports_request() {
    let bench = CopyBenchmark::new().with_clock(ManualClock::new(5_000_000));
    let measurement = bench.measure(777).unwrap();

    assert_eq!(measurement.size, 777);
    assert_eq!(measurement.iterations, COPY_ITERATIONS);
    assert!((measurement.duration_ms - 5.0).abs() < 1e-9);
}

#[test]
fn test_error_serialization() {
    let err = BenchError::InvalidSize { size: -3 };
    let json = serde_json::to_value(&err).unwrap();

    assert_eq!(
        json,
        serde_json::json!({ "error_type": "invalid_size", "details": { "size": -3 } })
    );
}

#[test]
fn test_measurement_serialization() {
    let measurement = CopyBenchmark::new()
        .with_clock(ManualClock::new(1_000_000))
        .measure(64)
        .unwrap();
    let json = serde_json::to_value(&measurement).unwrap();

    assert_eq!(json["size"].as_u64(), Some(64));
    assert_eq!(json["iterations"].as_u64(), Some(100));
    let duration_ms = json["duration_ms"].as_f64().unwrap();
    assert!((duration_ms - 1.0).abs() < 1e-9);
}

#[test]
fn test_concurrent_trials_use_independent_regions() {
    let bench = CopyBenchmark::new();

    std::thread::scope(|scope| {
        let handles: Vec<_> = [1024usize, 4096, 65536, 262144]
            .into_iter()
            .map(|size| {
                let bench = &bench;
                scope.spawn(move || bench.measure(size))
            })
            .collect();

        for handle in handles {
            let measurement = handle.join().unwrap().unwrap();
            assert!(measurement.duration_ms >= 0.0);
            assert_eq!(measurement.iterations, COPY_ITERATIONS);
        }
    });
}
