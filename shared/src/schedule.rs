//! Coalescing of filter changes into form submissions.

use std::cell::Cell;

use crate::config::DebounceScope;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Hands out a ticket per change and decides, when the delay elapses,
/// whether that ticket still submits.
///
/// Per-control scope never supersedes anything, so rapid changes across
/// several selects can submit several times. Per-form scope lets only the
/// newest ticket through.
#[derive(Debug, Default)]
pub struct AutoSubmitSchedule {
    scope: DebounceScope,
    generation: Cell<u64>,
}

impl AutoSubmitSchedule {
    pub fn new(scope: DebounceScope) -> Self {
        Self {
            scope,
            generation: Cell::new(0),
        }
    }

    pub fn scope(&self) -> DebounceScope {
        self.scope
    }

    pub fn schedule(&self) -> Ticket {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        Ticket(next)
    }

    pub fn should_submit(&self, ticket: Ticket) -> bool {
        match self.scope {
            DebounceScope::PerControl => true,
            DebounceScope::PerForm => ticket.0 == self.generation.get(),
        }
    }
}
