//! Shared plumbing for the entity state containers.
//!
//! Each container owns one or more `Mutex<Collection<T>>` slots. The lock is
//! only ever taken for short, synchronous critical sections and never held
//! across an await, so a reader always observes either the state before or
//! after a request's completion, never a half-applied update.

use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};

use taskboard_core::{ApiError, ApiResult, Notify};

/// One entity collection with its loading flag and error slot.
#[derive(Debug)]
pub(crate) struct Collection<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

pub(crate) fn lock<T>(slot: &Mutex<Collection<T>>) -> MutexGuard<'_, Collection<T>> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Sets the loading flag and clears it again when dropped, whichever branch
/// the operation takes.
pub(crate) struct LoadingGuard<'a, T> {
    slot: &'a Mutex<Collection<T>>,
}

impl<'a, T> LoadingGuard<'a, T> {
    pub(crate) fn begin(slot: &'a Mutex<Collection<T>>) -> Self {
        lock(slot).loading = true;
        Self { slot }
    }
}

impl<T> Drop for LoadingGuard<'_, T> {
    fn drop(&mut self) {
        lock(self.slot).loading = false;
    }
}

/// The shared load protocol: flag up, error cleared, fetch, then either a
/// full replace of the collection or an error slot set. The collection is
/// left untouched on failure so stale data stays visible.
pub(crate) async fn run_load<T>(
    slot: &Mutex<Collection<T>>,
    notifier: &dyn Notify,
    failure_message: &str,
    fetch: impl Future<Output = ApiResult<Vec<T>>>,
) -> ApiResult<()> {
    {
        let mut collection = lock(slot);
        collection.loading = true;
        collection.error = None;
    }
    let result = fetch.await;
    let outcome = {
        let mut collection = lock(slot);
        collection.loading = false;
        match result {
            Ok(items) => {
                collection.items = items;
                Ok(())
            }
            Err(err) => {
                collection.error = Some(failure_message.to_string());
                Err(err)
            }
        }
    };
    if let Err(err) = &outcome {
        if !err.handled_centrally() {
            notifier.error(failure_message);
        }
    }
    outcome
}

/// Report a failed mutating operation to the user, unless the transport
/// already did. Validation failures carry the server message when present.
pub(crate) fn report_local_failure(notifier: &dyn Notify, err: &ApiError, fallback: &str) {
    match err {
        ApiError::Validation { message } => {
            notifier.error(message.as_deref().unwrap_or(fallback));
        }
        err if err.handled_centrally() => {}
        _ => notifier.error(fallback),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard_core::RecordingNotifier;

    #[test]
    fn test_loading_guard_clears_on_drop() {
        let slot: Mutex<Collection<i32>> = Mutex::new(Collection::default());
        {
            let _guard = LoadingGuard::begin(&slot);
            assert!(lock(&slot).loading);
        }
        assert!(!lock(&slot).loading);
    }

    #[tokio::test]
    async fn test_run_load_replaces_on_success() {
        let slot: Mutex<Collection<i32>> = Mutex::new(Collection::default());
        lock(&slot).items = vec![9];
        let notifier = RecordingNotifier::new();

        run_load(&slot, &notifier, "failed", async { Ok(vec![1, 2]) })
            .await
            .unwrap();

        let collection = lock(&slot);
        assert_eq!(collection.items, vec![1, 2]);
        assert!(!collection.loading);
        assert!(collection.error.is_none());
        drop(collection);
        assert!(notifier.entries().is_empty());
    }

    #[tokio::test]
    async fn test_run_load_keeps_stale_items_on_failure() {
        let slot: Mutex<Collection<i32>> = Mutex::new(Collection::default());
        lock(&slot).items = vec![7];
        let notifier = RecordingNotifier::new();

        let result = run_load(&slot, &notifier, "could not load", async {
            Err(ApiError::Unknown {
                status: 500,
                message: "boom".into(),
            })
        })
        .await;

        assert!(result.is_err());
        let collection = lock(&slot);
        assert_eq!(collection.items, vec![7]);
        assert_eq!(collection.error.as_deref(), Some("could not load"));
        assert!(!collection.loading);
        drop(collection);
        assert_eq!(notifier.messages(), vec!["could not load".to_string()]);
    }

    #[tokio::test]
    async fn test_run_load_skips_notification_for_central_categories() {
        let slot: Mutex<Collection<i32>> = Mutex::new(Collection::default());
        let notifier = RecordingNotifier::new();

        let _ = run_load(&slot, &notifier, "could not load", async {
            Err(ApiError::NotFound(String::new()))
        })
        .await;

        assert!(notifier.entries().is_empty());
        assert_eq!(lock(&slot).error.as_deref(), Some("could not load"));
    }

    #[test]
    fn test_report_local_failure_prefers_server_message() {
        let notifier = RecordingNotifier::new();
        report_local_failure(
            &notifier,
            &ApiError::Validation {
                message: Some("name taken".into()),
            },
            "generic",
        );
        report_local_failure(&notifier, &ApiError::Validation { message: None }, "generic");
        report_local_failure(&notifier, &ApiError::Forbidden("nope".into()), "generic");
        report_local_failure(
            &notifier,
            &ApiError::Unknown {
                status: 500,
                message: String::new(),
            },
            "generic",
        );

        assert_eq!(
            notifier.messages(),
            vec![
                "name taken".to_string(),
                "generic".to_string(),
                "generic".to_string()
            ]
        );
    }
}
