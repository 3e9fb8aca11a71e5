//! Sequential batch driver shared by both platforms.

use std::future::Future;

use crate::download::outcome::Outcome;
use crate::error::Result;
use crate::output::report::{print_item_counter, print_item_error, print_outcome};

/// Run one download per id, printing the running counter before each item
/// and its outcome (or error) after. A failed item is reported on its own
/// line and never stops the batch.
///
/// `start` is the number of items already processed in earlier batches;
/// the returned count continues from it, so the counter stays global
/// across platforms.
pub async fn run_batch<F, Fut>(ids: &[u64], start: usize, total: usize, mut download: F) -> usize
where
    F: FnMut(u64) -> Fut,
    Fut: Future<Output = Result<Outcome>>,
{
    let width = total.to_string().len();
    let mut done = start;

    for &id in ids {
        done += 1;
        print_item_counter(done, total, width);
        match download(id).await {
            Ok(outcome) => print_outcome(outcome),
            Err(e) => print_item_error(&e),
        }
    }

    done
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::sync::Mutex;

    #[tokio::test]
    async fn test_failing_item_does_not_stop_the_batch() {
        let attempted = Mutex::new(Vec::new());

        let done = run_batch(&[100, 200, 300], 0, 3, |id| {
            let attempted = &attempted;
            async move {
                attempted.lock().unwrap().push(id);
                if id == 200 {
                    Err(Error::Api(format!("post {} does not exist", id)))
                } else {
                    Ok(Outcome::Done)
                }
            }
        })
        .await;

        assert_eq!(done, 3);
        assert_eq!(*attempted.lock().unwrap(), vec![100, 200, 300]);
    }

    #[tokio::test]
    async fn test_counter_continues_across_batches() {
        let ok = |_id| async { Ok(Outcome::Done) };

        let done = run_batch(&[1], 0, 3, ok).await;
        let done = run_batch(&[2, 3], done, 3, ok).await;

        assert_eq!(done, 3);
    }
}
