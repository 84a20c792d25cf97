//! Debounced value propagation
//!
//! Holds at most one pending value at a time. Every submission replaces
//! the pending value and restarts its deadline; only a value left
//! unchanged for the full delay is ever emitted. The host drives time by
//! passing its current tick to [`Debouncer::submit`] and polling with
//! [`Debouncer::poll`] (or scheduling a single wakeup at
//! [`Debouncer::deadline`]).

/// Monotonic time unit supplied by the host
pub type Tick = u64;

/// Default settle delay in ticks
pub const DEFAULT_DELAY: Tick = 300;

#[derive(Debug, Clone)]
struct Pending {
    value: String,
    deadline: Tick,
}

/// Delays a rapidly-changing string value by a fixed interval
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Tick,
    pending: Option<Pending>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl Debouncer {
    /// Create a debouncer with the given settle delay
    pub fn new(delay: Tick) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Submit a new value, cancelling any pending one and restarting the
    /// timer. The cancelled value is never emitted.
    pub fn submit(&mut self, value: impl Into<String>, now: Tick) {
        self.pending = Some(Pending {
            value: value.into(),
            deadline: now + self.delay,
        });
    }

    /// Emit the pending value once its deadline has passed.
    ///
    /// Returns the settled value exactly once; later polls return `None`
    /// until a new submission settles.
    pub fn poll(&mut self, now: Tick) -> Option<String> {
        if self.pending.as_ref()?.deadline > now {
            return None;
        }
        self.pending.take().map(|p| p.value)
    }

    /// Drop the pending value without emitting it. Used on teardown so a
    /// settle can never fire against a disposed host.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Whether a value is waiting to settle
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Deadline of the pending value, if any
    pub fn deadline(&self) -> Option<Tick> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// The configured settle delay
    pub fn delay(&self) -> Tick {
        self.delay
    }
}
