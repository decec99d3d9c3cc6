// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for breadcrumb trails: items, change flags, and read views.
//!
//! ## Overview
//!
//! These types describe the trail held by a [`BreadcrumbStore`](crate::store::BreadcrumbStore)
//! and the values handed to observers and render layers.
//! They are produced by the [`reconcile`](crate::reconcile) operations and read by downstream toolkits.

use alloc::string::String;
use alloc::vec::Vec;

/// A single navigation step.
///
/// Items double as navigation events: [`start_breadcrumb`](crate::store::BreadcrumbStore::start_breadcrumb)
/// and [`append_breadcrumb`](crate::store::BreadcrumbStore::append_breadcrumb) take the step
/// the caller wants to land on.
///
/// An item built without [`with_params`](Self::with_params) carries an empty parameter list,
/// which is the same value as "no parameters supplied".
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct BreadcrumbItem {
    /// Opaque identifier of the screen or route for this step.
    pub path: String,
    /// Stable identifier of the human-readable label.
    ///
    /// Resolved to text by a [`LabelResolver`](crate::label::LabelResolver), never by this crate.
    pub label_key: String,
    /// Positional parameters substituted into the localized label. Order is significant.
    #[cfg_attr(feature = "serde", serde(default))]
    pub label_params: Vec<String>,
}

impl BreadcrumbItem {
    /// Create an item with no label parameters.
    pub fn new(path: impl Into<String>, label_key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label_key: label_key.into(),
            label_params: Vec::new(),
        }
    }

    /// Replace the label parameters.
    pub fn with_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.label_params = params.into_iter().map(Into::into).collect();
        self
    }
}

bitflags::bitflags! {
    /// Fields touched by a committed store mutation.
    ///
    /// Passed to every observer alongside the post-commit [`Snapshot`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Changes: u8 {
        /// The trail itself was replaced or edited.
        const PATH        = 0b0000_0001;
        /// The parent-only flag was written.
        const PARENT_ONLY = 0b0000_0010;
    }
}

/// Borrowed, read-only view of the store after a commit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Snapshot<'a> {
    /// Root→current trail. Index 0 is the top-level section.
    pub path: &'a [BreadcrumbItem],
    /// Hint for compact layouts to show only the immediate parent step.
    pub navigate_to_parent_only: bool,
}

impl<'a> Snapshot<'a> {
    /// The current (last) step, if any.
    pub fn current(&self) -> Option<&'a BreadcrumbItem> {
        self.path.last()
    }

    /// The step right before the current one, if any.
    pub fn parent(&self) -> Option<&'a BreadcrumbItem> {
        self.path.len().checked_sub(2).map(|i| &self.path[i])
    }

    /// Steps a breadcrumb bar should draw.
    ///
    /// When the parent-only flag is set and a parent exists this is just that parent;
    /// otherwise it is the whole trail.
    pub fn visible(&self) -> &'a [BreadcrumbItem] {
        match self.path.len().checked_sub(2) {
            Some(i) if self.navigate_to_parent_only => &self.path[i..=i],
            _ => self.path,
        }
    }

    /// Copy into an owned [`BreadcrumbState`].
    pub fn to_state(&self) -> BreadcrumbState {
        BreadcrumbState {
            path: self.path.to_vec(),
            navigate_to_parent_only: self.navigate_to_parent_only,
        }
    }
}

/// Owned copy of the session state, as handed to render layers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreadcrumbState {
    /// Root→current trail.
    #[cfg_attr(feature = "serde", serde(rename = "breadcrumbNavigation"))]
    pub path: Vec<BreadcrumbItem>,
    /// Parent-only hint for compact layouts.
    #[cfg_attr(feature = "serde", serde(rename = "isNavigateToParentOnly"))]
    pub navigate_to_parent_only: bool,
}

impl BreadcrumbState {
    /// Borrow as a [`Snapshot`].
    pub fn as_snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            path: &self.path,
            navigate_to_parent_only: self.navigate_to_parent_only,
        }
    }
}
