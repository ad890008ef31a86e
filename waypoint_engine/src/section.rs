// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-section bookkeeping.

use alloc::string::String;

use waypoint_geometry::Direction;

use crate::config::ConfigPatch;

/// A retraceable record of the last successful move out of a section.
///
/// Stored on the *origin* section so that a later move from `destination`
/// along `reverse` can prefer `target` (the remember-source policy).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PreviousLink<E> {
    /// The element the move left from.
    pub target: E,
    /// The element the move landed on.
    pub destination: E,
    /// The direction that undoes the move.
    pub reverse: Direction,
}

/// A named, independently configurable group of focusable elements.
///
/// The stored element handles (`last_focused`, the [`PreviousLink`] ends)
/// are non-owning references to externally owned UI elements; the engine
/// treats a handle that is no longer attached exactly like an absent one.
#[derive(Clone, Debug)]
pub struct Section<E> {
    pub(crate) id: String,
    pub(crate) patch: ConfigPatch<E>,
    pub(crate) disabled: bool,
    pub(crate) last_focused: Option<E>,
    pub(crate) previous: Option<PreviousLink<E>>,
}

impl<E: Copy> Section<E> {
    pub(crate) fn new(id: String, patch: ConfigPatch<E>, disabled: bool) -> Self {
        Self {
            id,
            patch,
            disabled,
            last_focused: None,
            previous: None,
        }
    }

    /// The section's unique id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether navigation into and inside this section is disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// The element that last held focus in this section, if recorded.
    ///
    /// The handle may be stale; callers go through the engine's
    /// navigability checks before acting on it.
    #[must_use]
    pub fn last_focused(&self) -> Option<E> {
        self.last_focused
    }

    /// The record of the last successful move out of this section.
    #[must_use]
    pub fn previous(&self) -> Option<&PreviousLink<E>> {
        self.previous.as_ref()
    }

    /// Drop the remembered focus state (`last_focused` and `previous`).
    pub(crate) fn forget(&mut self) {
        self.last_focused = None;
        self.previous = None;
    }
}
