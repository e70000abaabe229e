use std::future::Future;

use api::CatalogError;
use api::CatalogState;
use dioxus::prelude::*;

/// Handle to one screen's in-memory catalog.
pub struct CatalogHandle<T: 'static> {
    state: Signal<CatalogState<T>>,
}

// Copy for any `T`; the signal is the only field.
impl<T: 'static> Clone for CatalogHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for CatalogHandle<T> {}

impl<T: 'static> CatalogHandle<T> {
    /// Call `.read()` on this in a component to subscribe to load changes.
    pub fn state(&self) -> Signal<CatalogState<T>> {
        self.state
    }

    /// Clears the list and runs `fetch` in the background.
    ///
    /// If another load starts before `fetch` resolves, its result is dropped.
    pub fn load<F>(self, fetch: F)
    where
        F: Future<Output = Result<Vec<T>, CatalogError>> + 'static,
    {
        let mut state = self.state;
        let ticket = state.write().begin();
        spawn(async move {
            let result = fetch.await;
            state.write().finish(ticket, result);
        });
    }
}

pub fn use_catalog<T: 'static>() -> CatalogHandle<T> {
    let state = use_signal(CatalogState::default);
    CatalogHandle { state }
}
