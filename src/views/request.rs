//! In-flight tracking shared by the request-issuing views.

/// Whether a view is waiting on the backend.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum RequestState {
    /// Nothing outstanding; the control is enabled.
    #[default]
    Idle,
    /// A request is outstanding; the control is disabled.
    Pending,
}

/// Token identifying one issued request.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Ticket(u64);

impl Ticket {
    /// Sequence number, starting at 1 for the first request of a view.
    #[must_use]
    pub const fn sequence(self) -> u64 {
        self.0
    }
}

/// Issues tickets and decides which responses may still be applied.
///
/// Only the most recently issued ticket is accepted; a response for an older
/// one arrived out of order and is dropped.
#[derive(Clone, Debug, Default)]
pub struct RequestTracker {
    state: RequestState,
    issued: u64,
}

impl RequestTracker {
    /// Create an idle tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: RequestState::Idle,
            issued: 0,
        }
    }

    /// Issue a new ticket and move to `Pending`.
    pub const fn begin(&mut self) -> Ticket {
        self.issued += 1;
        self.state = RequestState::Pending;
        Ticket(self.issued)
    }

    /// Accept `ticket` if it is the latest one, moving back to `Idle`.
    ///
    /// Returns `false` for a superseded ticket, leaving the state untouched.
    pub const fn finish(&mut self, ticket: Ticket) -> bool {
        if ticket.0 != self.issued {
            return false;
        }
        self.state = RequestState::Idle;
        true
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> RequestState {
        self.state
    }

    /// Whether a request is outstanding.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self.state, RequestState::Pending)
    }
}
