//! Throttle gate for high-frequency callbacks.

use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;

type Callback<A> = Box<dyn Fn(A) + Send + Sync>;

/// Rate-limits a callback to one immediate call per interval, plus a
/// trailing call after the last invocation of a burst.
///
/// Every [`invoke`](Self::invoke) replaces the pending trailing call, so the
/// trailing call always sees the arguments of the most recent invocation.
/// Trailing calls are scheduled on the ambient tokio runtime; without one the
/// gate still performs immediate calls and logs that the trailing call was
/// skipped.
///
/// Cloning is cheap and clones share the same timing state. The pending
/// trailing call is aborted when the last clone is dropped.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::time::Duration;
/// use ultralist::throttle::Throttle;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let hits = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&hits);
/// let gate = Throttle::new(Duration::from_millis(100), move |()| {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
///
/// gate.invoke(());
/// assert_eq!(hits.load(Ordering::SeqCst), 1);
/// gate.cancel();
/// # }
/// ```
pub struct Throttle<A> {
    inner: Arc<ThrottleInner<A>>,
}

struct ThrottleInner<A> {
    callback: Callback<A>,
    interval: Duration,
    state: Mutex<ThrottleState>,
}

#[derive(Default)]
struct ThrottleState {
    /// Time of the last immediate call.
    last_invoke: Option<Instant>,
    /// The scheduled trailing call.
    pending: Option<JoinHandle<()>>,
    /// Bumped on every schedule/cancel so a stale trailing call can tell it
    /// has been superseded.
    generation: u64,
}

impl<A: Send + 'static> Throttle<A> {
    /// Wrap `callback` so it runs at most once per `interval`.
    pub fn new<F>(interval: Duration, callback: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(ThrottleInner {
                callback: Box::new(callback),
                interval,
                state: Mutex::new(ThrottleState::default()),
            }),
        }
    }

    /// Get the configured interval.
    pub fn interval(&self) -> Duration {
        self.inner.interval
    }

    /// Check whether a trailing call is scheduled.
    pub fn is_pending(&self) -> bool {
        self.inner
            .state
            .lock()
            .map(|g| g.pending.as_ref().is_some_and(|h| !h.is_finished()))
            .unwrap_or(false)
    }

    /// Cancel the scheduled trailing call, if any.
    pub fn cancel(&self) {
        if let Ok(mut state) = self.inner.state.lock() {
            state.generation = state.generation.wrapping_add(1);
            if let Some(handle) = state.pending.take() {
                handle.abort();
                log::trace!("[throttle] cancelled trailing call");
            }
        }
    }
}

impl<A: Clone + Send + 'static> Throttle<A> {
    /// Call through the gate.
    ///
    /// Runs the callback now if the interval has elapsed since the last
    /// immediate call (or there has been none), and always reschedules the
    /// trailing call `interval` from now with `args`.
    pub fn invoke(&self, args: A) {
        let now = Instant::now();
        let interval = self.inner.interval;

        let fire_now = {
            let Ok(mut state) = self.inner.state.lock() else {
                return;
            };
            if let Some(handle) = state.pending.take() {
                handle.abort();
            }

            let due = state
                .last_invoke
                .is_none_or(|last| now.duration_since(last) >= interval);
            if due {
                state.last_invoke = Some(now);
            }

            state.generation = state.generation.wrapping_add(1);
            let generation = state.generation;
            state.pending = schedule(
                Arc::downgrade(&self.inner),
                interval,
                generation,
                args.clone(),
            );
            due
        };

        // Outside the lock: the callback may call back into the gate.
        if fire_now {
            (self.inner.callback)(args);
        }
    }
}

fn schedule<A: Send + 'static>(
    inner: Weak<ThrottleInner<A>>,
    interval: Duration,
    generation: u64,
    args: A,
) -> Option<JoinHandle<()>> {
    let Ok(runtime) = Handle::try_current() else {
        log::warn!("[throttle] no tokio runtime, trailing call skipped");
        return None;
    };

    let deadline = Instant::now() + interval;
    Some(runtime.spawn(async move {
        tokio::time::sleep_until(deadline).await;

        let Some(inner) = inner.upgrade() else {
            return;
        };
        {
            let Ok(mut state) = inner.state.lock() else {
                return;
            };
            if state.generation != generation {
                return;
            }
            state.pending = None;
        }
        log::trace!("[throttle] trailing call");
        (inner.callback)(args);
    }))
}

impl<A> Clone for Throttle<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A> std::fmt::Debug for Throttle<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Throttle")
            .field("interval", &self.inner.interval)
            .finish_non_exhaustive()
    }
}

impl<A> Drop for ThrottleInner<A> {
    fn drop(&mut self) {
        if let Ok(state) = self.state.get_mut()
            && let Some(handle) = state.pending.take()
        {
            handle.abort();
        }
    }
}
