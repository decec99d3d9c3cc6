// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Breadcrumb basics: reconcile a few navigation events against a bare store.
//!
//! Run:
//! - `cargo run -p understory_breadcrumb_demos --example breadcrumb_basics`
//! - `RUST_LOG=understory_breadcrumb=debug` shows each committed transition.

use tracing_subscriber::EnvFilter;
use understory_breadcrumb::reconcile::{StartOutcome, Transition};
use understory_breadcrumb::store::BreadcrumbStore;
use understory_breadcrumb::types::BreadcrumbItem;

fn print_trail(title: &str, store: &BreadcrumbStore) {
    println!("== {title} ==");
    for (depth, item) in store.path().iter().enumerate() {
        println!(
            "  {}{} {:?} ({})",
            "  ".repeat(depth),
            item.label_key,
            item.label_params,
            item.path
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut store = BreadcrumbStore::new();

    // Enter a section, then drill down twice.
    assert_eq!(
        store.start_breadcrumb(BreadcrumbItem::new("/a", "root")),
        StartOutcome::StartedFresh
    );
    store.append_breadcrumb(BreadcrumbItem::new("/a/b", "child").with_params(["x"]));
    let t = store.append_breadcrumb(BreadcrumbItem::new("/a/b/c", "grandchild"));
    assert_eq!(t, Transition::AppendChild);
    print_trail("Descend", &store);

    // The leaf re-renders with a new label value: params change in place.
    let t =
        store.append_breadcrumb(BreadcrumbItem::new("/a/b/c", "grandchild").with_params(["2"]));
    assert_eq!(t, Transition::UpdateLeafParams);
    print_trail("Leaf params", &store);

    // Back to the section root: collapse to it.
    assert_eq!(
        store.start_breadcrumb(BreadcrumbItem::new("/a", "root")),
        StartOutcome::HandledByTruncation
    );
    print_trail("Collapse", &store);
    assert_eq!(store.path().len(), 1);
}
