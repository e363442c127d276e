//! # Request sequencing
//!
//! Nothing cancels an in-flight request, so a slow response can land after a
//! newer one. Each logical slot (one list, one address level) owns a
//! [`Sequencer`]; every request carries the [`Ticket`] issued when it started,
//! and a response is applied only if its ticket is still the latest for that
//! slot.

use api::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sequencer {
    latest: u64,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request; every earlier ticket becomes stale.
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    /// Make every outstanding ticket stale without starting a request.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}

/// Outcome of feeding a response back into a controller.
#[derive(Clone, Debug, PartialEq)]
pub enum Completion {
    Applied,
    /// A newer request superseded this one; nothing changed.
    Stale,
    /// The current request failed; prior state is kept.
    Failed(ApiError),
}

impl Completion {
    pub fn error(self) -> Option<ApiError> {
        match self {
            Completion::Failed(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let mut seq = Sequencer::new();
        let first = seq.issue();
        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_invalidate_stales_outstanding() {
        let mut seq = Sequencer::new();
        let ticket = seq.issue();
        seq.invalidate();
        assert!(!seq.is_current(ticket));
    }

    #[test]
    fn test_completion_error() {
        let err = ApiError::Network("down".to_string());
        assert_eq!(Completion::Failed(err.clone()).error(), Some(err));
        assert_eq!(Completion::Stale.error(), None);
    }
}
