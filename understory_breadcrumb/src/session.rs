// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Session scope: one owned store per UI session, shared through handles.
//!
//! ## Usage
//!
//! 1) Create a [`BreadcrumbSession`] when the UI session mounts and keep it alive for as long
//!    as the session lasts.
//! 2) Hand [`BreadcrumbHandle`]s to page components and render layers.
//! 3) Drop the session on teardown. Handles outlive it harmlessly, but any further
//!    operation through them is a wiring fault.
//!
//! Plain operations fail fast on a wiring fault with a panic. The `try_` forms return
//! [`SessionError`] instead.
//!
//! ```
//! use understory_breadcrumb::session::BreadcrumbSession;
//! use understory_breadcrumb::types::BreadcrumbItem;
//!
//! let session = BreadcrumbSession::new();
//! let handle = session.handle();
//! handle.start_breadcrumb(BreadcrumbItem::new("/deals", "deals"));
//! handle.append_breadcrumb(BreadcrumbItem::new("/deals/7", "deal").with_params(["7"]));
//! assert_eq!(handle.state().path.len(), 2);
//!
//! drop(session);
//! assert!(!handle.is_active());
//! assert!(handle.try_state().is_err());
//! ```

use alloc::rc::{Rc, Weak};
use core::cell::RefCell;

use crate::error::SessionError;
use crate::reconcile::{StartOutcome, Transition};
use crate::store::{BreadcrumbStore, SubscriptionId};
use crate::types::{BreadcrumbItem, BreadcrumbState, Changes, Snapshot};

/// Owner of the breadcrumb store for one UI session.
#[derive(Debug)]
pub struct BreadcrumbSession {
    store: Rc<RefCell<BreadcrumbStore>>,
}

impl Default for BreadcrumbSession {
    fn default() -> Self {
        Self::new()
    }
}

impl BreadcrumbSession {
    /// Open a session with an empty trail.
    pub fn new() -> Self {
        tracing::debug!("breadcrumb session opened");
        Self {
            store: Rc::new(RefCell::new(BreadcrumbStore::new())),
        }
    }

    /// Create a handle bound to this session.
    pub fn handle(&self) -> BreadcrumbHandle {
        BreadcrumbHandle {
            store: Rc::downgrade(&self.store),
        }
    }
}

impl Drop for BreadcrumbSession {
    fn drop(&mut self) {
        tracing::debug!("breadcrumb session closed");
    }
}

/// Non-owning access to a session's store.
///
/// Cloning is cheap. A handle never keeps its session alive.
#[derive(Clone, Debug, Default)]
pub struct BreadcrumbHandle {
    store: Weak<RefCell<BreadcrumbStore>>,
}

impl BreadcrumbHandle {
    /// A handle bound to no session. Every operation on it is a wiring fault.
    pub fn detached() -> Self {
        Self { store: Weak::new() }
    }

    /// Whether the session behind this handle is still alive.
    pub fn is_active(&self) -> bool {
        self.store.strong_count() > 0
    }

    /// Enter a top-level section. See [`BreadcrumbStore::start_breadcrumb`].
    pub fn try_start_breadcrumb(&self, item: BreadcrumbItem) -> Result<StartOutcome, SessionError> {
        self.with_mut("start_breadcrumb", |s| s.start_breadcrumb(item))
    }

    /// Descend into a sub-view. See [`BreadcrumbStore::append_breadcrumb`].
    pub fn try_append_breadcrumb(&self, item: BreadcrumbItem) -> Result<Transition, SessionError> {
        self.with_mut("append_breadcrumb", |s| s.append_breadcrumb(item))
    }

    /// Write the parent-only flag.
    pub fn try_set_navigate_to_parent_only(&self, value: bool) -> Result<(), SessionError> {
        self.with_mut("set_navigate_to_parent_only", |s| {
            s.set_navigate_to_parent_only(value);
        })
    }

    /// Copy out the current state.
    pub fn try_state(&self) -> Result<BreadcrumbState, SessionError> {
        let store = self.upgrade("state")?;
        let guard = store
            .try_borrow()
            .map_err(|_| SessionError::Busy { op: "state" })?;
        let state = guard.snapshot().to_state();
        Ok(state)
    }

    /// Register an observer on the session's store.
    pub fn try_subscribe<F>(&self, observer: F) -> Result<SubscriptionId, SessionError>
    where
        F: FnMut(&Snapshot<'_>, Changes) + 'static,
    {
        self.with_mut("subscribe", |s| s.subscribe(observer))
    }

    /// Remove an observer. Returns `false` if it was not registered.
    pub fn try_unsubscribe(&self, id: SubscriptionId) -> Result<bool, SessionError> {
        self.with_mut("unsubscribe", |s| s.unsubscribe(id))
    }

    /// Enter a top-level section.
    ///
    /// # Panics
    ///
    /// If the handle is not bound to a live session, or if called from an observer.
    #[track_caller]
    pub fn start_breadcrumb(&self, item: BreadcrumbItem) -> StartOutcome {
        fail_fast(self.try_start_breadcrumb(item))
    }

    /// Descend into a sub-view.
    ///
    /// # Panics
    ///
    /// If the handle is not bound to a live session, or if called from an observer.
    #[track_caller]
    pub fn append_breadcrumb(&self, item: BreadcrumbItem) -> Transition {
        fail_fast(self.try_append_breadcrumb(item))
    }

    /// Write the parent-only flag.
    ///
    /// # Panics
    ///
    /// If the handle is not bound to a live session, or if called from an observer.
    #[track_caller]
    pub fn set_navigate_to_parent_only(&self, value: bool) {
        fail_fast(self.try_set_navigate_to_parent_only(value));
    }

    /// Copy out the current state.
    ///
    /// # Panics
    ///
    /// If the handle is not bound to a live session, or if called from an observer.
    #[track_caller]
    pub fn state(&self) -> BreadcrumbState {
        fail_fast(self.try_state())
    }

    /// Register an observer on the session's store.
    ///
    /// # Panics
    ///
    /// If the handle is not bound to a live session, or if called from an observer.
    #[track_caller]
    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: FnMut(&Snapshot<'_>, Changes) + 'static,
    {
        fail_fast(self.try_subscribe(observer))
    }

    /// Remove an observer.
    ///
    /// # Panics
    ///
    /// If the handle is not bound to a live session, or if called from an observer.
    #[track_caller]
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        fail_fast(self.try_unsubscribe(id))
    }

    fn upgrade(&self, op: &'static str) -> Result<Rc<RefCell<BreadcrumbStore>>, SessionError> {
        self.store.upgrade().ok_or(SessionError::Closed { op })
    }

    fn with_mut<R>(
        &self,
        op: &'static str,
        f: impl FnOnce(&mut BreadcrumbStore) -> R,
    ) -> Result<R, SessionError> {
        let store = self.upgrade(op)?;
        let mut guard = store
            .try_borrow_mut()
            .map_err(|_| SessionError::Busy { op })?;
        let out = f(&mut guard);
        Ok(out)
    }
}

#[track_caller]
fn fail_fast<T>(result: Result<T, SessionError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            tracing::error!(%err, "breadcrumb wiring fault");
            panic!("{err}");
        }
    }
}
