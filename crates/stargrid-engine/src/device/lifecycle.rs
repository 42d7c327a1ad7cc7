//! Explicit ownership state for lazily created, device-bound resources.
//!
//! ```text
//!                 acquire ok
//!  Uninitialized ───────────▶ Ready ──invalidate──▶ Invalid
//!        ▲                      ▲                      │
//!        │                      └──────acquire ok──────┘
//!        └──────────── teardown (from any phase) ──────┘
//! ```
//!
//! A failed `acquire` leaves the phase unchanged, so the next attempt retries.

use std::fmt;

/// Observable phase of a [`Lifecycle`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    /// Never created, or torn down.
    Uninitialized,
    /// Resource exists and may be used.
    Ready,
    /// Resource was discarded after loss and awaits recreation.
    Invalid,
}

enum State<R> {
    Uninitialized,
    Ready(R),
    Invalid,
}

/// Result of [`Lifecycle::acquire`].
#[derive(Debug)]
pub enum Acquired<'a, R> {
    /// The resource already existed.
    Reused(&'a mut R),
    /// The resource was created by this call.
    Created(&'a mut R),
}

impl<'a, R> Acquired<'a, R> {
    #[inline]
    pub fn was_created(&self) -> bool {
        matches!(self, Acquired::Created(_))
    }

    #[inline]
    pub fn into_inner(self) -> &'a mut R {
        match self {
            Acquired::Reused(r) | Acquired::Created(r) => r,
        }
    }
}

/// Lazily created resource with explicit `Uninitialized / Ready / Invalid` phases.
pub struct Lifecycle<R> {
    state: State<R>,
}

impl<R> Lifecycle<R> {
    #[inline]
    pub const fn new() -> Self {
        Self { state: State::Uninitialized }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        match self.state {
            State::Uninitialized => Phase::Uninitialized,
            State::Ready(_) => Phase::Ready,
            State::Invalid => Phase::Invalid,
        }
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        matches!(self.state, State::Ready(_))
    }

    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut R> {
        match &mut self.state {
            State::Ready(r) => Some(r),
            _ => None,
        }
    }

    /// Returns the ready resource, creating it first when absent.
    ///
    /// On `Err` the phase is left as it was.
    pub fn acquire<E>(
        &mut self,
        create: impl FnOnce() -> Result<R, E>,
    ) -> Result<Acquired<'_, R>, E> {
        let created = if self.is_ready() {
            false
        } else {
            self.state = State::Ready(create()?);
            true
        };

        match &mut self.state {
            State::Ready(r) => Ok(if created { Acquired::Created(r) } else { Acquired::Reused(r) }),
            // `state` was set to `Ready` above.
            State::Uninitialized | State::Invalid => unreachable!("resource must be ready here"),
        }
    }

    /// Drops the resource after a loss. Returns `true` if one was ready.
    pub fn invalidate(&mut self) -> bool {
        if self.is_ready() {
            self.state = State::Invalid;
            true
        } else {
            false
        }
    }

    /// Drops the resource for good (window destruction).
    pub fn teardown(&mut self) {
        self.state = State::Uninitialized;
    }
}

impl<R> Default for Lifecycle<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for Lifecycle<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lifecycle").field("phase", &self.phase()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts live instances so tests can observe drops.
    #[derive(Debug)]
    struct Resource {
        id: u32,
        live: Rc<Cell<u32>>,
    }

    impl Resource {
        fn new(id: u32, live: &Rc<Cell<u32>>) -> Result<Self, &'static str> {
            live.set(live.get() + 1);
            Ok(Self { id, live: live.clone() })
        }
    }

    impl Drop for Resource {
        fn drop(&mut self) {
            self.live.set(self.live.get() - 1);
        }
    }

    // ── acquire ───────────────────────────────────────────────────────────

    #[test]
    fn starts_uninitialized() {
        let slot: Lifecycle<Resource> = Lifecycle::new();
        assert_eq!(slot.phase(), Phase::Uninitialized);
        assert!(!slot.is_ready());
    }

    #[test]
    fn first_acquire_creates_then_reuses() {
        let live = Rc::new(Cell::new(0));
        let mut slot = Lifecycle::new();

        let first = slot.acquire(|| Resource::new(1, &live)).unwrap();
        assert!(first.was_created());
        assert_eq!(first.into_inner().id, 1);

        let second = slot.acquire(|| Resource::new(2, &live)).unwrap();
        assert!(!second.was_created());
        assert_eq!(second.into_inner().id, 1);

        assert_eq!(slot.phase(), Phase::Ready);
        assert_eq!(live.get(), 1);
    }

    #[test]
    fn failed_acquire_keeps_phase() {
        let mut slot: Lifecycle<Resource> = Lifecycle::new();
        assert_eq!(slot.acquire(|| Err("no adapter")).unwrap_err(), "no adapter");
        assert_eq!(slot.phase(), Phase::Uninitialized);

        let live = Rc::new(Cell::new(0));
        slot.acquire(|| Resource::new(1, &live)).unwrap();
        slot.invalidate();
        assert!(slot.acquire(|| Err("still lost")).is_err());
        assert_eq!(slot.phase(), Phase::Invalid);
    }

    // ── invalidate / teardown ─────────────────────────────────────────────

    #[test]
    fn invalidate_drops_and_allows_recreation() {
        let live = Rc::new(Cell::new(0));
        let mut slot = Lifecycle::new();
        slot.acquire(|| Resource::new(1, &live)).unwrap();

        assert!(slot.invalidate());
        assert_eq!(slot.phase(), Phase::Invalid);
        assert_eq!(live.get(), 0);
        assert!(!slot.invalidate());

        let again = slot.acquire(|| Resource::new(2, &live)).unwrap();
        assert!(again.was_created());
        assert_eq!(slot.get_mut().map(|r| r.id), Some(2));
        assert_eq!(live.get(), 1);
    }

    #[test]
    fn teardown_returns_to_uninitialized_from_any_phase() {
        let live = Rc::new(Cell::new(0));
        let mut slot = Lifecycle::new();
        slot.acquire(|| Resource::new(1, &live)).unwrap();
        slot.teardown();
        assert_eq!(slot.phase(), Phase::Uninitialized);
        assert_eq!(live.get(), 0);

        slot.acquire(|| Resource::new(2, &live)).unwrap();
        slot.invalidate();
        slot.teardown();
        assert_eq!(slot.phase(), Phase::Uninitialized);
    }
}
