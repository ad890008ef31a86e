// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared demo scaffolding: a simulated UI host for driving the engine
//! without a real toolkit.
//!
//! [`SimHost`] keeps an in-memory "document" of rectangles with tag lists.
//! Its selector language is deliberately tiny: a selector is a single tag,
//! and an element matches when it carries that tag. Focus, blur, scroll,
//! and every lifecycle event are appended to [`SimHost::log`] so demos can
//! print what the engine did.

use kurbo::Rect;
use waypoint_engine::{EventOutcome, Host, NavEvent, ScrollOptions};

/// Handle for a simulated element: its index in the host's element list.
pub type ElementId = u32;

/// One simulated element.
#[derive(Clone, Debug)]
pub struct SimElement {
    /// Layout box in a shared screen space.
    pub rect: Rect,
    /// Tags this element matches as selectors.
    pub tags: Vec<String>,
    /// Whether the element is still in the document.
    pub attached: bool,
}

/// An in-memory host: a flat list of rectangles with tag-based selectors.
#[derive(Clone, Debug, Default)]
pub struct SimHost {
    elements: Vec<SimElement>,
    focused: Option<ElementId>,
    /// Everything the engine did, in order: lifecycle events as
    /// `name:element`, actions as `focus:`/`blur:`/`scroll:` entries.
    pub log: Vec<String>,
}

impl SimHost {
    /// Create an empty host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element carrying `tags` at `rect`; returns its handle.
    pub fn add(&mut self, tags: &[&str], rect: Rect) -> ElementId {
        self.elements.push(SimElement {
            rect,
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            attached: true,
        });
        (self.elements.len() - 1) as ElementId
    }

    /// Remove an element from the simulated document.
    pub fn detach(&mut self, element: ElementId) {
        self.elements[element as usize].attached = false;
        if self.focused == Some(element) {
            self.focused = None;
        }
    }

    /// The currently focused element, if any.
    #[must_use]
    pub fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    /// Drain and return the accumulated log.
    pub fn take_log(&mut self) -> Vec<String> {
        core::mem::take(&mut self.log)
    }
}

impl Host for SimHost {
    type Element = ElementId;

    fn query(&self, selector: &str) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.attached && e.tags.iter().any(|t| t == selector))
            .map(|(i, _)| i as ElementId)
            .collect()
    }

    fn matches(&self, element: ElementId, selector: &str) -> bool {
        self.elements[element as usize]
            .tags
            .iter()
            .any(|t| t == selector)
    }

    fn bounding_box(&self, element: ElementId) -> Rect {
        self.elements[element as usize].rect
    }

    fn is_attached(&self, element: ElementId) -> bool {
        self.elements[element as usize].attached
    }

    fn focused_element(&self) -> Option<ElementId> {
        self.focused
    }

    fn focus(&mut self, element: ElementId) {
        self.focused = Some(element);
        self.log.push(format!("focus:{element}"));
    }

    fn blur(&mut self, element: ElementId) {
        if self.focused == Some(element) {
            self.focused = None;
        }
        self.log.push(format!("blur:{element}"));
    }

    fn scroll_into_view(&mut self, element: ElementId, _options: &ScrollOptions) {
        self.log.push(format!("scroll:{element}"));
    }

    fn emit(&mut self, target: ElementId, event: &NavEvent<ElementId>) -> EventOutcome {
        self.log.push(format!("{}:{target}", event.name()));
        EventOutcome::Allowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queries_respect_tags_and_attachment() {
        let mut host = SimHost::new();
        let a = host.add(&["grid"], Rect::new(0.0, 0.0, 10.0, 10.0));
        let b = host.add(&["grid", "hero"], Rect::new(20.0, 0.0, 30.0, 10.0));
        assert_eq!(host.query("grid"), vec![a, b]);
        assert_eq!(host.query("hero"), vec![b]);
        host.detach(a);
        assert_eq!(host.query("grid"), vec![b]);
    }
}
