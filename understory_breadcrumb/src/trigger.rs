// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caller-driven triggers for page components.
//!
//! A page typically registers its step once when it mounts, and again whenever a
//! value shown in its label changes. [`BreadcrumbTrigger`] remembers the last item it
//! issued and skips re-issuing an identical one, so it can be called on every
//! update pass.
//!
//! ```
//! use understory_breadcrumb::session::BreadcrumbSession;
//! use understory_breadcrumb::trigger::BreadcrumbTrigger;
//! use understory_breadcrumb::types::BreadcrumbItem;
//!
//! let session = BreadcrumbSession::new();
//! let handle = session.handle();
//! let mut page = BreadcrumbTrigger::start();
//!
//! let deal = |name: &str| BreadcrumbItem::new("/deals/7", "deal").with_params([name]);
//! assert!(page.fire(&handle, deal("Acme")));
//! assert!(!page.fire(&handle, deal("Acme")));
//! assert!(page.fire(&handle, deal("Acme Corp")));
//! assert_eq!(handle.state().path[0].label_params, ["Acme Corp"]);
//! ```

use crate::error::SessionError;
use crate::session::BreadcrumbHandle;
use crate::types::BreadcrumbItem;

/// Which reconciler operation a trigger issues.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TriggerKind {
    /// Issue [`start_breadcrumb`](BreadcrumbHandle::start_breadcrumb).
    Start,
    /// Issue [`append_breadcrumb`](BreadcrumbHandle::append_breadcrumb).
    Append,
}

/// Per-component memo of the last issued breadcrumb event.
#[derive(Clone, Debug)]
pub struct BreadcrumbTrigger {
    kind: TriggerKind,
    last: Option<BreadcrumbItem>,
}

impl BreadcrumbTrigger {
    /// Create a trigger that issues the given operation.
    pub fn new(kind: TriggerKind) -> Self {
        Self { kind, last: None }
    }

    /// Trigger for a top-level section page.
    pub fn start() -> Self {
        Self::new(TriggerKind::Start)
    }

    /// Trigger for a sub-view page.
    pub fn append() -> Self {
        Self::new(TriggerKind::Append)
    }

    /// Operation this trigger issues.
    pub fn kind(&self) -> TriggerKind {
        self.kind
    }

    /// Last item issued, if any since creation or [`reset`](Self::reset).
    pub fn last(&self) -> Option<&BreadcrumbItem> {
        self.last.as_ref()
    }

    /// Issue `item` unless it equals the last issued item.
    ///
    /// Returns `Ok(true)` when the event was handed to the session. A failed attempt is
    /// not remembered, so the next call retries it.
    pub fn try_fire(
        &mut self,
        handle: &BreadcrumbHandle,
        item: BreadcrumbItem,
    ) -> Result<bool, SessionError> {
        if self.last.as_ref() == Some(&item) {
            return Ok(false);
        }
        let issued = item.clone();
        match self.kind {
            TriggerKind::Start => {
                handle.try_start_breadcrumb(item)?;
            }
            TriggerKind::Append => {
                handle.try_append_breadcrumb(item)?;
            }
        }
        self.last = Some(issued);
        Ok(true)
    }

    /// Issue `item` unless it equals the last issued item.
    ///
    /// # Panics
    ///
    /// If `handle` is not bound to a live session, or if called from an observer.
    #[track_caller]
    pub fn fire(&mut self, handle: &BreadcrumbHandle, item: BreadcrumbItem) -> bool {
        match self.try_fire(handle, item) {
            Ok(fired) => fired,
            Err(err) => {
                tracing::error!(%err, kind = ?self.kind, "breadcrumb trigger wiring fault");
                panic!("{err}");
            }
        }
    }

    /// Forget the last issued item, e.g. when the page unmounts.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
