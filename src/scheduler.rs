//! Slice scheduler.
//!
//! Partitions the page range into fixed-width batches and sequences them:
//! within a batch every page is fetched concurrently, and the next batch only
//! starts once the previous one has fully completed. This caps simultaneous
//! load on the remote service and bounds memory to one batch's worth of
//! in-flight enrichment fan-out, with the slice width as the concurrency
//! knob.
//!
//! Progress is reported once per completed batch as
//! `pages_processed / page_count`, never mid-batch, so observed values are
//! monotonically non-decreasing and driven only by finished work.

use std::future::Future;

use futures::future::try_join_all;
use log::debug;

use crate::error_handling::CrawlError;
use crate::events::ProgressSink;

/// Runs page fetches in consecutive batches of at most `slice_width` pages.
///
/// Pages `1..=page_count` are drawn lazily from the range; nothing is
/// materialized upfront. The final batch may be smaller. Per-page results are
/// collected in page order. The first fatal error cancels the batch's
/// remaining fetches and propagates.
pub async fn run_slices<T, F, Fut>(
    page_count: usize,
    slice_width: usize,
    fetch_page: F,
    progress: &dyn ProgressSink,
) -> Result<Vec<Vec<T>>, CrawlError>
where
    F: Fn(usize) -> Fut,
    Fut: Future<Output = Result<Vec<T>, CrawlError>>,
{
    debug_assert!(slice_width >= 1, "slice width is validated at startup");

    let mut rows_by_page = Vec::with_capacity(page_count);
    let mut pages = 1..=page_count;

    loop {
        let batch: Vec<usize> = pages.by_ref().take(slice_width).collect();
        if batch.is_empty() {
            break;
        }

        debug!("Fetching pages {}..={}", batch[0], batch[batch.len() - 1]);
        let fetched = try_join_all(batch.iter().map(|&page| fetch_page(page))).await?;
        rows_by_page.extend(fetched);

        progress.progress(rows_by_page.len() as f64 / page_count as f64);
    }

    Ok(rows_by_page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Progress sink recording every reported fraction.
    struct Recorder(Mutex<Vec<f64>>);

    impl Recorder {
        fn new() -> Self {
            Self(Mutex::new(Vec::new()))
        }
        fn values(&self) -> Vec<f64> {
            self.0.lock().unwrap().clone()
        }
    }

    impl ProgressSink for Recorder {
        fn progress(&self, fraction: f64) {
            self.0.lock().unwrap().push(fraction);
        }
    }

    #[tokio::test]
    async fn test_batches_partition_pages_without_overlap_or_gaps() {
        for (page_count, slice_width) in [(7usize, 3usize), (6, 2), (1, 10), (10, 1), (5, 5)] {
            let seen = Mutex::new(Vec::new());
            let progress = Recorder::new();
            let rows = run_slices(
                page_count,
                slice_width,
                |page| {
                    seen.lock().unwrap().push(page);
                    async move { Ok(vec![page]) }
                },
                &progress,
            )
            .await
            .unwrap();

            let mut fetched = seen.into_inner().unwrap();
            fetched.sort_unstable();
            assert_eq!(fetched, (1..=page_count).collect::<Vec<_>>());
            assert_eq!(rows.len(), page_count);
            assert_eq!(
                progress.values().len(),
                page_count.div_ceil(slice_width),
                "one progress report per batch"
            );
        }
    }

    #[tokio::test]
    async fn test_results_are_in_page_order() {
        let progress = Recorder::new();
        let rows = run_slices(5, 2, |page| async move { Ok(vec![page * 10]) }, &progress)
            .await
            .unwrap();
        assert_eq!(rows, vec![vec![10], vec![20], vec![30], vec![40], vec![50]]);
    }

    #[tokio::test]
    async fn test_progress_sequence_for_three_pages_width_two() {
        let progress = Recorder::new();
        run_slices(3, 2, |_page| async move { Ok(vec![()]) }, &progress)
            .await
            .unwrap();
        assert_eq!(progress.values(), vec![2.0 / 3.0, 1.0]);
    }

    #[tokio::test]
    async fn test_progress_is_monotonic_and_ends_at_one() {
        let progress = Recorder::new();
        run_slices(9, 4, |_page| async move { Ok(Vec::<()>::new()) }, &progress)
            .await
            .unwrap();
        let values = progress.values();
        for pair in values.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
        assert_eq!(*values.last().unwrap(), 1.0);
    }

    #[tokio::test]
    async fn test_zero_pages_reports_nothing() {
        let progress = Recorder::new();
        let rows = run_slices(
            0,
            3,
            |_page| async move { Ok(Vec::<()>::new()) },
            &progress,
        )
        .await
        .unwrap();
        assert!(rows.is_empty());
        assert!(progress.values().is_empty());
    }

    #[tokio::test]
    async fn test_fatal_error_stops_later_batches() {
        let attempted = Mutex::new(Vec::new());
        let progress = Recorder::new();
        let outcome = run_slices::<(), _, _>(
            6,
            2,
            |page| {
                attempted.lock().unwrap().push(page);
                async move {
                    if page == 2 {
                        Err(CrawlError::Cancelled)
                    } else {
                        Ok(Vec::new())
                    }
                }
            },
            &progress,
        )
        .await;

        assert!(matches!(outcome, Err(CrawlError::Cancelled)));
        // Only the first batch was attempted; no progress was reported for it.
        assert_eq!(attempted.into_inner().unwrap(), vec![1, 2]);
        assert!(progress.values().is_empty());
    }
}
