/// Single-use client scopes
///
/// Every remote operation acquires a fresh SDK client, hands it to exactly
/// one request closure, and drops it before returning. The handle moves into
/// the closure's future, so it is released on the success path and the error
/// path alike.
use std::future::Future;

pub(crate) async fn run_scoped<C, T, E, F, Fut>(client: C, op: F) -> Result<T, E>
where
    F: FnOnce(C) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    op(client).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Fake client that counts how many times it is released
    struct TrackingClient {
        releases: Arc<AtomicUsize>,
    }

    impl Drop for TrackingClient {
        fn drop(&mut self) {
            self.releases.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn test_client_released_once_on_success() {
        let releases = Arc::new(AtomicUsize::new(0));
        let client = TrackingClient {
            releases: releases.clone(),
        };

        let result: Result<u32, String> = run_scoped(client, |c| async move {
            let _held = c;
            Ok(42)
        })
        .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(releases.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_client_released_once_on_error() {
        let releases = Arc::new(AtomicUsize::new(0));
        let client = TrackingClient {
            releases: releases.clone(),
        };

        let result: Result<u32, String> = run_scoped(client, |c| async move {
            let _held = c;
            Err("remote failure".to_string())
        })
        .await;

        assert!(result.is_err());
        assert_eq!(releases.load(Ordering::SeqCst), 1);
    }
}
