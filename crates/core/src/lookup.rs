//! Timeout-guarded lookups.
//!
//! [`race_lookup`] runs a store lookup as its own task and races it against a
//! timer. Whichever settles first decides the outcome. A lookup that loses the
//! race is detached, not cancelled: it keeps running and its result is
//! dropped when it eventually completes.

use std::future::Future;
use std::time::Duration;

/// Default time a single-record lookup may take before it is abandoned.
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_millis(5000);

/// Why a raced lookup produced no record.
#[derive(Debug, thiserror::Error)]
pub enum LookupError<E> {
    /// The timer fired before the lookup settled.
    #[error("lookup timed out after {0:?}")]
    TimedOut(Duration),

    /// The lookup itself failed.
    #[error("lookup failed: {0}")]
    Store(E),

    /// The lookup task panicked.
    #[error("lookup task failed: {0}")]
    Join(String),
}

/// Race `lookup` against a `timeout` timer.
///
/// Returns `Ok(Some(_))` or `Ok(None)` when the lookup settles first and
/// [`LookupError::TimedOut`] when the timer does. The lookup is spawned onto
/// the runtime, so dropping its handle on timeout leaves it running.
pub async fn race_lookup<F, T, E>(lookup: F, timeout: Duration) -> Result<Option<T>, LookupError<E>>
where
    F: Future<Output = Result<Option<T>, E>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    let handle = tokio::spawn(lookup);

    tokio::select! {
        joined = handle => match joined {
            Ok(result) => result.map_err(LookupError::Store),
            Err(e) => Err(LookupError::Join(e.to_string())),
        },
        () = tokio::time::sleep(timeout) => Err(LookupError::TimedOut(timeout)),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
