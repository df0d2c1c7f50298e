//! Unit tests for the bounded task pool

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use marketlens::config::PipelineConfig;
use marketlens::core::pool::TaskPool;
use marketlens::PipelineError;

#[test]
fn test_worker_count_clamped() {
    assert_eq!(TaskPool::new(0, Duration::from_secs(1)).workers(), 1);
    assert_eq!(TaskPool::new(100, Duration::from_secs(1)).workers(), 32);
    assert_eq!(TaskPool::new(8, Duration::from_secs(1)).workers(), 8);
}

#[test]
fn test_pool_from_config_uses_effective_concurrency() {
    let config = PipelineConfig {
        worker_concurrency: 64,
        ..PipelineConfig::default()
    };
    let pool = TaskPool::from_config(&config);
    assert_eq!(pool.workers(), config.effective_concurrency());
    assert_eq!(pool.workers(), 32);
}

#[tokio::test]
async fn test_results_keep_input_order() {
    let pool = TaskPool::new(4, Duration::from_secs(2));
    let results = pool
        .run((0..10u64).collect(), |i| async move {
            tokio::time::sleep(Duration::from_millis(10 - i)).await;
            Ok(i * 2)
        })
        .await;

    let values: Vec<u64> = results.into_iter().map(|r| r.unwrap()).collect();
    assert_eq!(values, (0..10).map(|i| i * 2).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_failure_does_not_abort_others() {
    let pool = TaskPool::new(3, Duration::from_secs(2));
    let results = pool
        .run(vec!["AAPL", "BAD", "MSFT"], |symbol| async move {
            if symbol == "BAD" {
                Err(PipelineError::upstream("quotes", "HTTP 500"))
            } else {
                Ok(symbol.len())
            }
        })
        .await;

    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert!(matches!(results[1], Err(PipelineError::Source { .. })));
    assert!(results[2].is_ok());
}

#[tokio::test]
async fn test_slow_task_times_out() {
    let pool = TaskPool::new(2, Duration::from_millis(20));
    let results = pool
        .run(vec![1u64, 200], |ms| async move {
            tokio::time::sleep(Duration::from_millis(ms)).await;
            Ok(ms)
        })
        .await;

    assert_eq!(results[0].as_ref().ok(), Some(&1));
    assert!(matches!(results[1], Err(PipelineError::Timeout(20))));
}

#[tokio::test]
async fn test_concurrency_is_bounded() {
    let pool = TaskPool::new(3, Duration::from_secs(2));
    let in_flight = Arc::new(AtomicUsize::new(0));
    let peak = Arc::new(AtomicUsize::new(0));

    let results = pool
        .run((0..12).collect::<Vec<u32>>(), |_| {
            let in_flight = Arc::clone(&in_flight);
            let peak = Arc::clone(&peak);
            async move {
                let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                peak.fetch_max(now, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(5)).await;
                in_flight.fetch_sub(1, Ordering::SeqCst);
                Ok(())
            }
        })
        .await;

    assert_eq!(results.len(), 12);
    assert!(peak.load(Ordering::SeqCst) <= 3);
    assert!(peak.load(Ordering::SeqCst) >= 2);
}

#[tokio::test]
async fn test_delay_between_batches() {
    let pool = TaskPool::new(4, Duration::from_secs(1)).with_batching(2, Duration::from_millis(40));
    let started = Instant::now();
    let results = pool.run(vec![1, 2, 3, 4, 5], |i| async move { Ok(i) }).await;

    assert_eq!(results.len(), 5);
    // three batches, two pauses
    assert!(started.elapsed() >= Duration::from_millis(80));
}
