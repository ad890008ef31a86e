// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host boundary: everything the engine needs from the UI layer.
//!
//! The engine never owns UI elements. It works with small, copyable,
//! host-defined handles ([`Host::Element`]) and asks the host for queries,
//! geometry, focus primitives, and event delivery. Handles may go stale at
//! any time (the element was removed from the document); the engine checks
//! [`Host::is_attached`] before acting on a stored handle and treats a dead
//! handle exactly as "no candidate", so hosts must keep `is_attached` cheap.
//!
//! Selector strings are opaque to the engine: whatever expression language
//! the host's [`Host::query`] and [`Host::matches`] understand is what
//! section selectors, default-element queries, and leave-for overrides are
//! written in.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;
use waypoint_geometry::Direction;

use crate::config::ScrollOptions;
use crate::events::{EventOutcome, NavEvent};

/// The engine's view of the hosting UI layer.
///
/// All methods are synchronous; the engine is single-threaded and
/// re-entrancy is handled by its own transition guard, so implementations
/// must not defer work that the engine observes through return values.
pub trait Host {
    /// Opaque, copyable element handle.
    type Element: Copy + Eq + core::fmt::Debug;

    /// All elements matching `selector`, in document order.
    fn query(&self, selector: &str) -> Vec<Self::Element>;

    /// Whether `element` matches `selector`.
    fn matches(&self, element: Self::Element, selector: &str) -> bool;

    /// The element's current layout box, freshly computed.
    fn bounding_box(&self, element: Self::Element) -> Rect;

    /// Whether the handle still refers to a live element in the document.
    fn is_attached(&self, element: Self::Element) -> bool;

    /// Whether the element is individually marked disabled.
    fn is_element_disabled(&self, element: Self::Element) -> bool {
        let _ = element;
        false
    }

    /// The element's per-direction navigation override, if it carries one.
    ///
    /// An empty string is the explicit "no destination" sentinel and makes
    /// the move fail immediately.
    fn direction_override(
        &self,
        element: Self::Element,
        direction: Direction,
    ) -> Option<String> {
        let _ = (element, direction);
        None
    }

    /// The element currently holding native focus, if any.
    fn focused_element(&self) -> Option<Self::Element>;

    /// Give `element` native focus.
    fn focus(&mut self, element: Self::Element);

    /// Remove native focus from `element`.
    fn blur(&mut self, element: Self::Element);

    /// Scroll `element` into view. Called before [`Host::focus`] when the
    /// effective configuration carries scroll options.
    fn scroll_into_view(&mut self, element: Self::Element, options: &ScrollOptions) {
        let _ = (element, options);
    }

    /// Deliver `event` to the listeners registered on `target` and report
    /// whether any of them vetoed it.
    ///
    /// The engine only honors [`EventOutcome::Cancelled`] when
    /// [`NavEvent::cancelable`] is true for the event.
    fn emit(&mut self, target: Self::Element, event: &NavEvent<Self::Element>) -> EventOutcome;

    /// Schedule a call to `Engine::apply_deferred_refocus` on the next turn
    /// of the host's event loop.
    ///
    /// Requested when a native blur was vetoed by policy: native blur cannot
    /// be synchronously cancelled, so the engine restores focus one turn
    /// later and keeps its transition guard engaged for the whole window.
    fn schedule_refocus(&mut self) {}
}
