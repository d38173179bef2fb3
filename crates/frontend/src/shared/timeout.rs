use futures::future::{self, Either};
use std::future::Future;

/// Race `work` against `deadline`
///
/// Returns `None` when the deadline resolves first. The losing future is dropped.
pub async fn with_timeout<F, D>(work: F, deadline: D) -> Option<F::Output>
where
    F: Future,
    D: Future<Output = ()>,
{
    futures::pin_mut!(work);
    futures::pin_mut!(deadline);

    match future::select(work, deadline).await {
        Either::Left((value, _)) => Some(value),
        Either::Right(((), _)) => None,
    }
}
