// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reconciler: decide how a navigation event changes the trail.
//!
//! ## Overview
//!
//! Two operations drive the trail:
//!
//! - [`start_breadcrumb`](BreadcrumbStore::start_breadcrumb) enters a top-level section.
//! - [`append_breadcrumb`](BreadcrumbStore::append_breadcrumb) descends into a sub-view.
//!
//! Both look for an existing step with the same label key first.
//! If it is the current step, only its params are refreshed (and nothing happens when they are equal).
//! If it is an ancestor, the trail is cut back to it.
//! Otherwise `start` discards the trail and `append` pushes a new step.
//!
//! | found at      | `start`                  | `append`                 |
//! |---------------|--------------------------|--------------------------|
//! | last          | update params or no-op   | update params or no-op   |
//! | ancestor `i`  | truncate to `i`          | truncate to `i`          |
//! | nowhere       | fresh start, clear flag  | append child             |
//!
//! Planning ([`plan_start`], [`plan_append`]) and application ([`apply`]) are pure;
//! the store methods combine them and commit once.
//!
//! ```
//! use understory_breadcrumb::reconcile::StartOutcome;
//! use understory_breadcrumb::store::BreadcrumbStore;
//! use understory_breadcrumb::types::BreadcrumbItem;
//!
//! let mut store = BreadcrumbStore::new();
//! store.start_breadcrumb(BreadcrumbItem::new("/a", "root"));
//! store.append_breadcrumb(BreadcrumbItem::new("/a/b", "child").with_params(["x"]));
//! assert_eq!(store.path().len(), 2);
//!
//! // Re-entering the section collapses back to it.
//! let outcome = store.start_breadcrumb(BreadcrumbItem::new("/a", "root"));
//! assert_eq!(outcome, StartOutcome::HandledByTruncation);
//! assert_eq!(store.path().len(), 1);
//! ```

use alloc::vec::Vec;

use crate::store::BreadcrumbStore;
use crate::types::BreadcrumbItem;

/// Order-sensitive equality of two label parameter lists.
///
/// Equal iff both have the same length and equal elements at every index.
pub fn params_eq<A: AsRef<str>, B: AsRef<str>>(a: &[A], b: &[B]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.as_ref() == y.as_ref())
}

/// A planned change to the trail.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Replace the trail with the single new step and clear the parent-only flag.
    FreshStart,
    /// Cut the trail after the step at this index and refresh that step's params.
    TruncateToAncestor(usize),
    /// Refresh the params of the current step.
    UpdateLeafParams,
    /// Push the new step after the current one.
    AppendChild,
    /// Leave the trail as it is.
    NoOp,
}

impl Transition {
    /// Whether applying this transition changes the store.
    pub fn is_mutation(self) -> bool {
        !matches!(self, Self::NoOp)
    }
}

/// How [`BreadcrumbStore::start_breadcrumb`] handled an event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StartOutcome {
    /// The section is the current step; its params were refreshed if they differed.
    HandledInPlace,
    /// The section was an ancestor; the trail was cut back to it.
    HandledByTruncation,
    /// The section was not on the trail; the trail now holds only it.
    StartedFresh,
}

impl StartOutcome {
    /// Classify a transition produced by [`plan_start`].
    fn of_start(t: Transition) -> Self {
        match t {
            Transition::TruncateToAncestor(_) => Self::HandledByTruncation,
            Transition::FreshStart => Self::StartedFresh,
            Transition::UpdateLeafParams | Transition::NoOp => Self::HandledInPlace,
            Transition::AppendChild => unreachable!("`plan_start` never appends"),
        }
    }
}

/// Shared lookup: `Some(t)` when the label key is already on the trail.
fn plan_existing(path: &[BreadcrumbItem], item: &BreadcrumbItem) -> Option<Transition> {
    let i = path.iter().position(|p| p.label_key == item.label_key)?;
    Some(if i + 1 < path.len() {
        Transition::TruncateToAncestor(i)
    } else if params_eq(&path[i].label_params, &item.label_params) {
        Transition::NoOp
    } else {
        Transition::UpdateLeafParams
    })
}

/// Plan a `start` event against `path`.
pub fn plan_start(path: &[BreadcrumbItem], item: &BreadcrumbItem) -> Transition {
    plan_existing(path, item).unwrap_or(Transition::FreshStart)
}

/// Plan an `append` event against `path`.
pub fn plan_append(path: &[BreadcrumbItem], item: &BreadcrumbItem) -> Transition {
    plan_existing(path, item).unwrap_or_else(|| {
        // A last step with this key would have been found above, so pushing here can
        // never put two equal keys next to each other.
        debug_assert!(
            path.last().is_none_or(|last| last.label_key != item.label_key),
            "append would duplicate the current label key"
        );
        Transition::AppendChild
    })
}

/// Apply a planned transition to `path`, consuming the event's item.
///
/// Truncation keeps the ancestor's `path` field and replaces only its params.
pub fn apply(path: &mut Vec<BreadcrumbItem>, transition: Transition, item: BreadcrumbItem) {
    match transition {
        Transition::FreshStart => {
            path.clear();
            path.push(item);
        }
        Transition::TruncateToAncestor(i) => {
            path.truncate(i + 1);
            if let Some(step) = path.last_mut() {
                step.label_params = item.label_params;
            }
        }
        Transition::UpdateLeafParams => {
            if let Some(step) = path.last_mut() {
                step.label_params = item.label_params;
            }
        }
        Transition::AppendChild => path.push(item),
        Transition::NoOp => {}
    }
}

impl BreadcrumbStore {
    /// Enter a top-level section.
    ///
    /// Collapses to the section if it is already on the trail, otherwise starts a
    /// fresh trail and clears the parent-only flag.
    pub fn start_breadcrumb(&mut self, item: BreadcrumbItem) -> StartOutcome {
        let transition = plan_start(self.path(), &item);
        self.commit_transition(transition, item);
        StartOutcome::of_start(transition)
    }

    /// Descend into a sub-view.
    ///
    /// Collapses to the step if it is already on the trail, otherwise pushes it.
    /// Leaves the parent-only flag untouched.
    pub fn append_breadcrumb(&mut self, item: BreadcrumbItem) -> Transition {
        let transition = plan_append(self.path(), &item);
        self.commit_transition(transition, item);
        transition
    }

    fn commit_transition(&mut self, transition: Transition, item: BreadcrumbItem) {
        if !transition.is_mutation() {
            tracing::trace!(label_key = item.label_key.as_str(), "breadcrumb unchanged");
            return;
        }
        tracing::debug!(
            ?transition,
            label_key = item.label_key.as_str(),
            depth = self.path().len(),
            "reconciling breadcrumb"
        );
        let flag = matches!(transition, Transition::FreshStart).then_some(false);
        self.commit_with(flag, |path| apply(path, transition, item));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::string::String;
    use alloc::vec;
    use core::cell::Cell;

    fn item(path: &str, key: &str, params: &[&str]) -> BreadcrumbItem {
        BreadcrumbItem::new(path, key).with_params(params.iter().copied())
    }

    fn root_child() -> Vec<BreadcrumbItem> {
        vec![item("/a", "root", &[]), item("/a/b", "child", &["x"])]
    }

    fn store_with(path: Vec<BreadcrumbItem>) -> (BreadcrumbStore, Rc<Cell<usize>>) {
        let mut store = BreadcrumbStore::new();
        store.replace(path);
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        store.subscribe(move |_, _| c.set(c.get() + 1));
        (store, count)
    }

    fn keys(path: &[BreadcrumbItem]) -> Vec<&str> {
        path.iter().map(|i| i.label_key.as_str()).collect()
    }

    #[test]
    fn params_eq_is_order_sensitive() {
        assert!(params_eq::<&str, &str>(&[], &[]));
        assert!(params_eq(&["a", "b"], &[String::from("a"), String::from("b")]));
        assert!(!params_eq(&["a", "b"], &["b", "a"]));
        assert!(!params_eq(&["a"], &["a", "a"]));
    }

    #[test]
    fn start_truncates_to_ancestor_and_keeps_flag() {
        let (mut store, count) = store_with(root_child());
        store.set_navigate_to_parent_only(true);
        let outcome = store.start_breadcrumb(item("/a", "root", &[]));
        assert_eq!(outcome, StartOutcome::HandledByTruncation);
        assert_eq!(store.path(), &[item("/a", "root", &[])]);
        assert!(store.is_navigate_to_parent_only());
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn start_unknown_key_starts_fresh_and_clears_flag() {
        let (mut store, count) = store_with(root_child());
        store.set_navigate_to_parent_only(true);
        let outcome = store.start_breadcrumb(item("/z", "other", &["1"]));
        assert_eq!(outcome, StartOutcome::StartedFresh);
        assert_eq!(store.path(), &[item("/z", "other", &["1"])]);
        assert!(!store.is_navigate_to_parent_only());
        // One for the flag write, one for the fresh start.
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn start_on_empty_trail_starts_fresh() {
        let (mut store, _) = store_with(Vec::new());
        assert_eq!(
            store.start_breadcrumb(item("/a", "root", &[])),
            StartOutcome::StartedFresh
        );
        assert_eq!(keys(store.path()), vec!["root"]);
    }

    #[test]
    fn start_fresh_for_any_trail_without_key() {
        let trails = [
            Vec::new(),
            vec![item("/a", "a", &[])],
            vec![item("/a", "a", &[]), item("/b", "b", &["1"]), item("/c", "c", &[])],
        ];
        for trail in trails {
            let (mut store, _) = store_with(trail);
            store.set_navigate_to_parent_only(true);
            store.start_breadcrumb(item("/n", "new", &["p"]));
            assert_eq!(store.path(), &[item("/n", "new", &["p"])]);
            assert!(!store.is_navigate_to_parent_only());
        }
    }

    #[test]
    fn start_on_current_step_with_equal_params_is_noop() {
        let (mut store, count) = store_with(root_child());
        let before = store.path().to_vec();
        let outcome = store.start_breadcrumb(item("/a/b", "child", &["x"]));
        assert_eq!(outcome, StartOutcome::HandledInPlace);
        assert_eq!(store.path(), &before[..]);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn start_on_current_step_with_new_params_updates_in_place() {
        let (mut store, count) = store_with(root_child());
        let outcome = store.start_breadcrumb(item("/ignored", "child", &["y"]));
        assert_eq!(outcome, StartOutcome::HandledInPlace);
        assert_eq!(store.path()[1], item("/a/b", "child", &["y"]));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn absent_params_match_empty_params() {
        let (mut store, count) = store_with(vec![item("/a", "root", &[])]);
        store.start_breadcrumb(BreadcrumbItem::new("/a", "root"));
        store.append_breadcrumb(BreadcrumbItem::new("/a", "root"));
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn append_pushes_novel_key() {
        let (mut store, count) = store_with(root_child());
        let t = store.append_breadcrumb(item("/a/b/c", "grandchild", &[]));
        assert_eq!(t, Transition::AppendChild);
        assert_eq!(
            store.path(),
            &[
                item("/a", "root", &[]),
                item("/a/b", "child", &["x"]),
                item("/a/b/c", "grandchild", &[]),
            ]
        );
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn append_on_empty_trail_pushes() {
        let (mut store, _) = store_with(Vec::new());
        let t = store.append_breadcrumb(item("/x", "first", &[]));
        assert_eq!(t, Transition::AppendChild);
        assert_eq!(store.path(), &[item("/x", "first", &[])]);
    }

    #[test]
    fn append_truncates_to_ancestor_with_new_params() {
        let mut trail = root_child();
        trail.push(item("/a/b/c", "grandchild", &[]));
        let (mut store, _) = store_with(trail);
        let t = store.append_breadcrumb(item("/elsewhere", "child", &["z"]));
        assert_eq!(t, Transition::TruncateToAncestor(1));
        assert_eq!(
            store.path(),
            &[item("/a", "root", &[]), item("/a/b", "child", &["z"])]
        );
    }

    #[test]
    fn append_same_key_updates_params_or_noops() {
        let (mut store, count) = store_with(root_child());
        assert_eq!(
            store.append_breadcrumb(item("/a/b", "child", &["x"])),
            Transition::NoOp
        );
        assert_eq!(count.get(), 0);
        assert_eq!(
            store.append_breadcrumb(item("/a/b", "child", &["y"])),
            Transition::UpdateLeafParams
        );
        assert_eq!(store.path()[1].label_params, vec!["y"]);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn append_leaves_flag_alone() {
        let (mut store, _) = store_with(root_child());
        store.set_navigate_to_parent_only(true);
        store.append_breadcrumb(item("/a/b/c", "grandchild", &[]));
        assert!(store.is_navigate_to_parent_only());
    }

    #[test]
    fn repeated_append_is_idempotent() {
        let (mut store, count) = store_with(root_child());
        for _ in 0..3 {
            store.append_breadcrumb(item("/a/b/c", "grandchild", &["q"]));
        }
        assert_eq!(keys(store.path()), vec!["root", "child", "grandchild"]);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn truncation_yields_prefix_for_every_ancestor() {
        let trail = vec![
            item("/1", "k1", &["a"]),
            item("/2", "k2", &["b"]),
            item("/3", "k3", &["c"]),
            item("/4", "k4", &["d"]),
        ];
        for i in 0..trail.len() - 1 {
            for start in [true, false] {
                let mut path = trail.clone();
                let event = item("/new", &trail[i].label_key, &["fresh"]);
                let t = if start {
                    plan_start(&path, &event)
                } else {
                    plan_append(&path, &event)
                };
                assert_eq!(t, Transition::TruncateToAncestor(i));
                apply(&mut path, t, event);
                assert_eq!(path.len(), i + 1);
                assert_eq!(&path[..i], &trail[..i]);
                assert_eq!(path[i].path, trail[i].path);
                assert_eq!(path[i].label_params, vec!["fresh"]);
            }
        }
    }

    #[test]
    fn appends_never_leave_adjacent_equal_keys() {
        let (mut store, _) = store_with(Vec::new());
        for key in ["a", "a", "b", "b", "c", "a", "c", "c"] {
            store.append_breadcrumb(item("/p", key, &[key]));
            assert!(
                store.path().windows(2).all(|w| w[0].label_key != w[1].label_key),
                "adjacent keys repeated after appending {key}"
            );
        }
        assert_eq!(keys(store.path()), vec!["a", "c"]);
    }

    #[test]
    fn repeated_key_matches_first_occurrence() {
        let trail = vec![item("/1", "a", &[]), item("/2", "b", &[]), item("/3", "a", &[])];

        let (mut store, _) = store_with(trail.clone());
        let t = store.append_breadcrumb(item("/x", "a", &["z"]));
        assert_eq!(t, Transition::TruncateToAncestor(0));
        assert_eq!(store.path(), &[item("/1", "a", &["z"])]);

        let (mut store, _) = store_with(trail);
        let outcome = store.start_breadcrumb(item("/x", "a", &[]));
        assert_eq!(outcome, StartOutcome::HandledByTruncation);
        assert_eq!(store.path(), &[item("/1", "a", &[])]);
    }

    #[test]
    fn empty_label_key_is_accepted() {
        let (mut store, _) = store_with(Vec::new());
        store.start_breadcrumb(item("", "", &[]));
        store.append_breadcrumb(item("/x", "x", &[]));
        assert_eq!(keys(store.path()), vec!["", "x"]);
    }

    #[test]
    fn start_outcome_classifies_start_transitions() {
        assert_eq!(
            StartOutcome::of_start(Transition::NoOp),
            StartOutcome::HandledInPlace
        );
        assert_eq!(
            StartOutcome::of_start(Transition::UpdateLeafParams),
            StartOutcome::HandledInPlace
        );
        assert_eq!(
            StartOutcome::of_start(Transition::TruncateToAncestor(0)),
            StartOutcome::HandledByTruncation
        );
        assert_eq!(
            StartOutcome::of_start(Transition::FreshStart),
            StartOutcome::StartedFresh
        );
        assert!(!Transition::NoOp.is_mutation());
        assert!(Transition::AppendChild.is_mutation());
    }
}
