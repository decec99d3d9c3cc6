// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Breadcrumb: deterministic, `no_std` breadcrumb trails for UI navigation.
//!
//! ## Overview
//!
//! This crate keeps the root→current trail of a navigation session and decides how each
//! navigation event reshapes it.
//! It does not render anything and does not resolve label text.
//! Pages report where they are, the [`reconcile`] operations update the trail, and any
//! breadcrumb bar reads the result.
//!
//! ## Inputs
//!
//! A navigation event is a [`BreadcrumbItem`](crate::types::BreadcrumbItem): a route `path`,
//! a `label_key`, and positional `label_params`.
//! Two operations consume events:
//!
//! - `start_breadcrumb` when a page is a top-level section.
//! - `append_breadcrumb` when a page is a sub-view of whatever is current.
//!
//! A third input, the parent-only flag, is a hint for compact layouts and is only written
//! explicitly, or cleared when a fresh section starts.
//!
//! ## Reconciliation
//!
//! Steps are matched by label key.
//! Re-entering an ancestor collapses the trail back to it; re-entering the current step only
//! refreshes its params; equal params are a no-op so repeated lifecycle calls cost nothing.
//! See [`reconcile`] for the full table.
//!
//! ## Sessions and observers
//!
//! A [`BreadcrumbStore`](crate::store::BreadcrumbStore) holds the state and notifies observers
//! synchronously after each committed mutation, with [`Changes`](crate::types::Changes)
//! describing what moved.
//! For UI integration, a [`BreadcrumbSession`](crate::session::BreadcrumbSession) owns the
//! store and hands out non-owning [`BreadcrumbHandle`](crate::session::BreadcrumbHandle)s.
//! Using a handle after its session is gone is a wiring fault and fails fast.
//!
//! ## Workflow
//!
//! 1) Open a session when the UI mounts and pass handles down.
//! 2) Each page keeps a [`BreadcrumbTrigger`](crate::trigger::BreadcrumbTrigger) and fires it on
//!    mount and when its label params change.
//! 3) The breadcrumb bar subscribes, reads [`Snapshot::visible`](crate::types::Snapshot::visible),
//!    and turns steps into text with a [`LabelResolver`](crate::label::LabelResolver).
//!
//! ```
//! use understory_breadcrumb::label::resolve_trail;
//! use understory_breadcrumb::session::BreadcrumbSession;
//! use understory_breadcrumb::trigger::BreadcrumbTrigger;
//! use understory_breadcrumb::types::BreadcrumbItem;
//!
//! let session = BreadcrumbSession::new();
//! let handle = session.handle();
//!
//! let mut deals_page = BreadcrumbTrigger::start();
//! let mut deal_page = BreadcrumbTrigger::append();
//! deals_page.fire(&handle, BreadcrumbItem::new("/deals", "deals"));
//! deal_page.fire(&handle, BreadcrumbItem::new("/deals/7", "deal").with_params(["Acme"]));
//!
//! let state = handle.state();
//! let labels = resolve_trail(&state.path, &|key: &str, params: &[String]| {
//!     match params.first() {
//!         Some(p) => format!("{key}: {p}"),
//!         None => key.to_string(),
//!     }
//! });
//! assert_eq!(labels, ["deals", "deal: Acme"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod error;
pub mod label;
pub mod reconcile;
pub mod session;
pub mod store;
pub mod trigger;
pub mod types;
