// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for session wiring faults.
//!
//! Reconciliation itself is total and never fails. The only failures are usage
//! contract violations on a [`BreadcrumbHandle`](crate::session::BreadcrumbHandle).

use thiserror::Error;

/// A breadcrumb operation was invoked outside the scope it needs.
///
/// Both variants indicate an integration mistake rather than a runtime condition;
/// retrying does not help.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The handle is not attached to a live session.
    #[error("breadcrumb `{op}` called outside an active session")]
    Closed {
        /// Operation that was attempted.
        op: &'static str,
    },
    /// The store is committing and notifying observers.
    #[error("breadcrumb `{op}` called while the session is notifying observers")]
    Busy {
        /// Operation that was attempted.
        op: &'static str,
    },
}
