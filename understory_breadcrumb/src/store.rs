// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Breadcrumb store: the trail, the parent-only flag, and observers.
//!
//! ## Overview
//!
//! The store performs no validation. It holds whatever trail it is given and notifies
//! observers exactly once per committed mutation, synchronously, in subscription order.
//! Callers that want to skip logically redundant updates must do so before calling in;
//! the [`reconcile`](crate::reconcile) operations already do.
//!
//! ```
//! use understory_breadcrumb::store::BreadcrumbStore;
//! use understory_breadcrumb::types::{BreadcrumbItem, Changes};
//!
//! let mut store = BreadcrumbStore::new();
//! store.subscribe(|snap, changes| {
//!     assert_eq!(changes, Changes::PATH);
//!     assert_eq!(snap.path.len(), 1);
//! });
//! store.replace(vec![BreadcrumbItem::new("/deals", "deals")]);
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::types::{BreadcrumbItem, Changes, Snapshot};

type Observer = Box<dyn FnMut(&Snapshot<'_>, Changes)>;

/// Token returned by [`BreadcrumbStore::subscribe`], used to unsubscribe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Holds the current trail and parent-only flag for one navigation session.
pub struct BreadcrumbStore {
    path: Vec<BreadcrumbItem>,
    navigate_to_parent_only: bool,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl core::fmt::Debug for BreadcrumbStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BreadcrumbStore")
            .field("path", &self.path)
            .field("navigate_to_parent_only", &self.navigate_to_parent_only)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl Default for BreadcrumbStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BreadcrumbStore {
    /// Create a store with an empty trail and the parent-only flag cleared.
    pub fn new() -> Self {
        Self {
            path: Vec::new(),
            navigate_to_parent_only: false,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// Current root→current trail.
    pub fn path(&self) -> &[BreadcrumbItem] {
        &self.path
    }

    /// Whether compact layouts should show only the immediate parent step.
    pub fn is_navigate_to_parent_only(&self) -> bool {
        self.navigate_to_parent_only
    }

    /// Borrow the current state.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            path: &self.path,
            navigate_to_parent_only: self.navigate_to_parent_only,
        }
    }

    /// Replace the whole trail and notify observers.
    pub fn replace(&mut self, path: Vec<BreadcrumbItem>) {
        self.path = path;
        self.notify(Changes::PATH);
    }

    /// Write the parent-only flag and notify observers.
    pub fn set_navigate_to_parent_only(&mut self, value: bool) {
        self.navigate_to_parent_only = value;
        self.notify(Changes::PARENT_ONLY);
    }

    /// Register an observer, called after every committed mutation.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&Snapshot<'_>, Changes) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(o, _)| *o != id);
        self.observers.len() != before
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Edit the trail in place, optionally write the flag, then notify once.
    ///
    /// This is the single commit point used by the reconciler so that a combined
    /// path-and-flag change still produces one notification.
    pub(crate) fn commit_with(
        &mut self,
        navigate_to_parent_only: Option<bool>,
        edit: impl FnOnce(&mut Vec<BreadcrumbItem>),
    ) {
        edit(&mut self.path);
        let mut changes = Changes::PATH;
        if let Some(flag) = navigate_to_parent_only {
            self.navigate_to_parent_only = flag;
            changes |= Changes::PARENT_ONLY;
        }
        self.notify(changes);
    }

    fn notify(&mut self, changes: Changes) {
        let snapshot = Snapshot {
            path: &self.path,
            navigate_to_parent_only: self.navigate_to_parent_only,
        };
        for (_, observer) in &mut self.observers {
            observer(&snapshot, changes);
        }
    }
}
