// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Session wiring: pages fire triggers through handles, a breadcrumb bar observes.
//!
//! This example plays a short navigation: open the deals section, open a deal, rename it,
//! switch to the compact layout, then jump to payments.
//!
//! Run:
//! - `cargo run -p understory_breadcrumb_demos --example breadcrumb_session`

use std::cell::RefCell;
use std::rc::Rc;

use tracing_subscriber::EnvFilter;
use understory_breadcrumb::label::resolve_trail;
use understory_breadcrumb::session::BreadcrumbSession;
use understory_breadcrumb::trigger::BreadcrumbTrigger;
use understory_breadcrumb::types::BreadcrumbItem;

fn label(key: &str, params: &[String]) -> String {
    match (key, params) {
        ("deals", _) => "Deals".to_string(),
        ("payments", _) => "Payments".to_string(),
        ("deal", [name]) => format!("Deal \u{201c}{name}\u{201d}"),
        _ => key.to_string(),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let session = BreadcrumbSession::new();
    let handle = session.handle();

    // Breadcrumb bar: re-draw on every commit.
    let frames = Rc::new(RefCell::new(Vec::new()));
    let sink = frames.clone();
    handle.subscribe(move |snap, changes| {
        let text = resolve_trail(snap.visible(), &label).join(" / ");
        println!("  [{changes:?}] {text}");
        sink.borrow_mut().push(text);
    });

    let mut deals_page = BreadcrumbTrigger::start();
    let mut deal_page = BreadcrumbTrigger::append();
    let mut payments_page = BreadcrumbTrigger::start();

    println!("== Navigate ==");
    deals_page.fire(&handle, BreadcrumbItem::new("/deals", "deals"));
    deal_page.fire(&handle, BreadcrumbItem::new("/deals/7", "deal").with_params(["Acme"]));
    // Same render pass again: nothing to do.
    deal_page.fire(&handle, BreadcrumbItem::new("/deals/7", "deal").with_params(["Acme"]));
    deal_page.fire(&handle, BreadcrumbItem::new("/deals/7", "deal").with_params(["Acme Corp"]));

    println!("== Compact layout ==");
    handle.set_navigate_to_parent_only(true);

    println!("== Switch section ==");
    payments_page.fire(&handle, BreadcrumbItem::new("/payments", "payments"));

    let state = handle.state();
    println!("== Final state ==\n  {}", serde_json::to_string(&state).unwrap());

    assert_eq!(
        *frames.borrow(),
        vec![
            "Deals".to_string(),
            "Deals / Deal \u{201c}Acme\u{201d}".to_string(),
            "Deals / Deal \u{201c}Acme Corp\u{201d}".to_string(),
            "Deals".to_string(),
            "Payments".to_string(),
        ]
    );
    assert!(!state.navigate_to_parent_only);
}
