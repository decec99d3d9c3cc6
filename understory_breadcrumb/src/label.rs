// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label resolution seam.
//!
//! This crate never turns a label key into text. Implement [`LabelResolver`] on top of
//! your localization layer (or pass a closure) and use [`resolve_trail`] when drawing.

use alloc::string::String;
use alloc::vec::Vec;

use crate::types::BreadcrumbItem;

/// Map a label key and its positional params to display text.
pub trait LabelResolver {
    /// Returns the display text for `label_key` with `label_params` substituted in order.
    fn resolve(&self, label_key: &str, label_params: &[String]) -> String;
}

impl<F> LabelResolver for F
where
    F: Fn(&str, &[String]) -> String,
{
    #[inline]
    fn resolve(&self, label_key: &str, label_params: &[String]) -> String {
        self(label_key, label_params)
    }
}

/// Resolve every step of a trail, root first.
pub fn resolve_trail<R: LabelResolver + ?Sized>(
    items: &[BreadcrumbItem],
    resolver: &R,
) -> Vec<String> {
    items
        .iter()
        .map(|i| resolver.resolve(&i.label_key, &i.label_params))
        .collect()
}
