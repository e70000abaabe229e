//! Load state for one in-memory catalog.
//!
//! Loads are tagged with a generation number. Only the completion carrying
//! the latest ticket is applied, so a slow response to an earlier request
//! can never overwrite a newer one.

use dioxus_logger::tracing::debug;

use crate::error::CatalogError;

/// Proof that a load was started; hand it back to [`CatalogState::finish`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum LoadPhase<T> {
    /// Nothing requested yet.
    Idle,
    Loading,
    Ready(Vec<T>),
    Failed(CatalogError),
}

impl<T> LoadPhase<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState<T> {
    generation: u64,
    phase: LoadPhase<T>,
}

impl<T> Default for CatalogState<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            phase: LoadPhase::Idle,
        }
    }
}

impl<T> CatalogState<T> {
    pub fn phase(&self) -> &LoadPhase<T> {
        &self.phase
    }

    /// The loaded items; empty unless the last load succeeded.
    pub fn items(&self) -> &[T] {
        match &self.phase {
            LoadPhase::Ready(items) => items,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&CatalogError> {
        match &self.phase {
            LoadPhase::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    /// Starts a new load: clears the list and supersedes any load in flight.
    pub fn begin(&mut self) -> LoadTicket {
        self.generation += 1;
        self.phase = LoadPhase::Loading;
        LoadTicket(self.generation)
    }

    /// True if `ticket` belongs to the most recent load.
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Applies the outcome of the load identified by `ticket`.
    ///
    /// Returns false, leaving the state untouched, if a newer load has been
    /// started since.
    pub fn finish(&mut self, ticket: LoadTicket, result: Result<Vec<T>, CatalogError>) -> bool {
        if !self.is_current(ticket) {
            debug!(
                "discarding stale catalog load {} (latest is {})",
                ticket.0, self.generation
            );
            return false;
        }
        self.phase = match result {
            Ok(items) => LoadPhase::Ready(items),
            Err(err) => LoadPhase::Failed(err),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogKind;

    #[test]
    fn starts_idle_and_empty() {
        let state = CatalogState::<u32>::default();
        assert!(state.phase().is_idle());
        assert!(state.items().is_empty());
        assert!(state.error().is_none());
    }

    #[test]
    fn begin_clears_previous_items() {
        let mut state = CatalogState::default();
        let ticket = state.begin();
        assert!(state.is_loading());
        assert!(state.finish(ticket, Ok(vec![1, 2, 3])));
        assert_eq!(state.items(), &[1, 2, 3]);

        state.begin();
        assert!(state.is_loading());
        assert!(state.items().is_empty());
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut state = CatalogState::default();
        let animals = state.begin();
        let health = state.begin();

        assert!(state.finish(health, Ok(vec!["health"])));
        assert!(!state.finish(animals, Ok(vec!["animals"])));
        assert_eq!(state.items(), &["health"]);
    }

    #[test]
    fn stale_failure_does_not_clobber_newer_load() {
        let mut state = CatalogState::<&str>::default();
        let first = state.begin();
        let second = state.begin();

        assert!(!state.finish(first, Err(CatalogError::CacheEmpty)));
        assert!(state.is_loading());
        assert!(state.finish(second, Ok(vec!["ok"])));
        assert!(state.error().is_none());
    }

    #[test]
    fn failure_leaves_list_empty() {
        let mut state = CatalogState::<u8>::default();
        let ticket = state.begin();
        let err = CatalogError::Status {
            kind: CatalogKind::GiftCards,
            status: 500,
            message: Some("upstream down".into()),
        };
        assert!(state.finish(ticket, Err(err.clone())));
        assert_eq!(state.error(), Some(&err));
        assert!(state.items().is_empty());
        assert!(state.phase().is_failed());
    }
}
