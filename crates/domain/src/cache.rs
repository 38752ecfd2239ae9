//! Memoized exercise catalog
//!
//! The cache starts `Empty`. The first `prefetch` or `get` moves it to `Loading` and runs the
//! loader exactly once, either on a background thread (`prefetch`) or on the calling thread
//! (`get`). Every other caller waits for that load. The result is published as `Ready` or
//! `Failed` in a single step under the state lock. A failed load is not retried: callers receive
//! an empty catalog for the lifetime of the cache.

use std::{
    sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError},
    thread,
};

use log::{debug, error};

use crate::{Catalog, ResourceRepository, loader};

const PREFETCH_THREAD_NAME: &str = "catalog-prefetch";

pub struct CatalogCache<R> {
    shared: Arc<Shared<R>>,
}

struct Shared<R> {
    repository: R,
    resource: String,
    state: Mutex<State>,
    settled: Condvar,
}

enum State {
    Empty,
    Loading,
    Ready(Catalog),
    Failed,
}

impl<R: ResourceRepository + 'static> CatalogCache<R> {
    pub fn new(repository: R, resource: impl Into<String>) -> Self {
        Self {
            shared: Arc::new(Shared {
                repository,
                resource: resource.into(),
                state: Mutex::new(State::Empty),
                settled: Condvar::new(),
            }),
        }
    }

    /// Starts loading on a background thread if no load has been started yet.
    ///
    /// Returns immediately.
    pub fn prefetch(&self) {
        {
            let mut state = self.shared.lock();
            if !matches!(*state, State::Empty) {
                return;
            }
            *state = State::Loading;
        }
        debug!("prefetching exercise catalog");

        let shared = Arc::clone(&self.shared);
        if let Err(err) = thread::Builder::new()
            .name(PREFETCH_THREAD_NAME.to_string())
            .spawn(move || {
                shared.load();
            })
        {
            error!("failed to spawn exercise catalog prefetch: {err}");
            *self.shared.lock() = State::Empty;
            self.shared.settled.notify_all();
        }
    }

    /// Returns the catalog, loading it on the calling thread if necessary.
    ///
    /// Blocks while a load started by another caller is in progress. Returns an empty catalog if
    /// loading failed.
    #[must_use]
    pub fn get(&self) -> Catalog {
        let mut state = self.shared.lock();
        loop {
            match &*state {
                State::Ready(catalog) => return catalog.clone(),
                State::Failed => return Catalog::default(),
                State::Loading => state = self.shared.wait(state),
                State::Empty => {
                    *state = State::Loading;
                    drop(state);
                    return self.shared.load();
                }
            }
        }
    }

    /// Returns the catalog if it has been loaded successfully, without blocking.
    #[must_use]
    pub fn snapshot(&self) -> Option<Catalog> {
        match &*self.shared.lock() {
            State::Ready(catalog) => Some(catalog.clone()),
            State::Empty | State::Loading | State::Failed => None,
        }
    }

    /// Returns true if a load has completed, successfully or not.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        matches!(*self.shared.lock(), State::Ready(_) | State::Failed)
    }

    /// Blocks until an in-progress load has completed, without starting a new one.
    pub fn wait(&self) -> Option<Catalog> {
        let mut state = self.shared.lock();
        while matches!(*state, State::Loading) {
            state = self.shared.wait(state);
        }
        match &*state {
            State::Ready(catalog) => Some(catalog.clone()),
            State::Empty | State::Loading | State::Failed => None,
        }
    }
}

impl<R: ResourceRepository> Shared<R> {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn wait<'a>(&self, state: MutexGuard<'a, State>) -> MutexGuard<'a, State> {
        self.settled
            .wait(state)
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Must only be called by the caller that moved the state to `Loading`.
    fn load(&self) -> Catalog {
        let mut publication = Publication {
            shared: self,
            state: State::Failed,
        };

        match loader::load(&self.repository, &self.resource) {
            Ok(catalog) => {
                publication.state = State::Ready(catalog.clone());
                catalog
            }
            Err(err) => {
                error!("failed to load exercise catalog: {err}");
                Catalog::default()
            }
        }
    }
}

/// Publishes the load result when dropped, also if the loader panics.
struct Publication<'a, R: ResourceRepository> {
    shared: &'a Shared<R>,
    state: State,
}

impl<R: ResourceRepository> Drop for Publication<'_, R> {
    fn drop(&mut self) {
        let state = std::mem::replace(&mut self.state, State::Failed);
        debug!(
            "exercise catalog {}",
            if matches!(state, State::Ready(_)) {
                "ready"
            } else {
                "failed"
            }
        );
        *self.shared.lock() = state;
        self.shared.settled.notify_all();
    }
}
