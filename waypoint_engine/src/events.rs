// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus-lifecycle events and their cancellation model.
//!
//! Cancellation is a typed result returned synchronously from event
//! emission, not a mutable flag on a shared event object: the host invokes
//! its listeners and reports back a single [`EventOutcome`]. A `Cancelled`
//! outcome is only honored for events where [`NavEvent::cancelable`] is
//! true; the engine ignores vetoes of non-cancelable notifications.

use alloc::string::String;

use waypoint_geometry::Direction;

/// The result of emitting an event to the host's listeners.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    /// No listener vetoed the event.
    Allowed,
    /// A listener vetoed the event ("prevented the default").
    Cancelled,
}

/// What triggered a move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cause {
    /// An explicit API call.
    Api,
    /// A translated key press.
    Keydown,
}

/// A lifecycle event fired on a navigated element.
///
/// Events carrying `native: true` were triggered by the host's own
/// focus/blur notifications rather than by an engine-driven transition.
#[derive(Clone, Debug, PartialEq)]
pub enum NavEvent<E> {
    /// Focus is about to move away from the element in `direction`.
    /// Cancelable; a veto aborts the move before any candidate search.
    WillMove {
        /// The requested direction.
        direction: Direction,
        /// Section of the element the move starts from.
        section: String,
        /// What triggered the move.
        cause: Cause,
    },
    /// The element is about to lose focus. Cancelable; a veto aborts the
    /// transition with focus untouched.
    WillUnfocus {
        /// The element about to receive focus, when known.
        next: Option<E>,
        /// Section of `next`, when known.
        next_section: Option<String>,
        /// Direction of the transition, when directional.
        direction: Option<Direction>,
        /// Whether a native blur triggered this.
        native: bool,
    },
    /// The element lost focus. Not cancelable.
    Unfocused {
        /// The element about to receive focus, when known.
        next: Option<E>,
        /// Section of `next`, when known.
        next_section: Option<String>,
        /// Direction of the transition, when directional.
        direction: Option<Direction>,
        /// Whether a native blur triggered this.
        native: bool,
    },
    /// The element is about to receive focus. Cancelable; see
    /// `Engine::focus_element` for the documented veto asymmetry.
    WillFocus {
        /// The element that held focus before the transition.
        previous: Option<E>,
        /// Section of the element receiving focus.
        section: String,
        /// Direction of the transition, when directional.
        direction: Option<Direction>,
        /// Whether a native focus triggered this.
        native: bool,
    },
    /// The element received focus. Not cancelable.
    Focused {
        /// The element that held focus before the transition.
        previous: Option<E>,
        /// Section of the element receiving focus.
        section: String,
        /// Direction of the transition, when directional.
        direction: Option<Direction>,
        /// Whether a native focus triggered this.
        native: bool,
    },
    /// A directional move found nothing to move to. Not cancelable; this is
    /// a routine terminal outcome, not a fault.
    NavigateFailed {
        /// The direction that failed.
        direction: Direction,
    },
    /// Enter was pressed on the element. Cancelable; a veto tells the host
    /// to suppress the key's default action.
    EnterDown,
    /// Enter was released on the element. Cancelable, like `EnterDown`.
    EnterUp,
}

impl<E> NavEvent<E> {
    /// Whether a `Cancelled` outcome is honored for this event.
    #[must_use]
    pub fn cancelable(&self) -> bool {
        matches!(
            self,
            Self::WillMove { .. }
                | Self::WillUnfocus { .. }
                | Self::WillFocus { .. }
                | Self::EnterDown
                | Self::EnterUp
        )
    }

    /// The conventional wire name of this event.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::WillMove { .. } => "willmove",
            Self::WillUnfocus { .. } => "willunfocus",
            Self::Unfocused { .. } => "unfocused",
            Self::WillFocus { .. } => "willfocus",
            Self::Focused { .. } => "focused",
            Self::NavigateFailed { .. } => "navigatefailed",
            Self::EnterDown => "enter-down",
            Self::EnterUp => "enter-up",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name: &str) -> NavEvent<u32> {
        match name {
            "willmove" => NavEvent::WillMove {
                direction: Direction::Up,
                section: "s".into(),
                cause: Cause::Api,
            },
            "willunfocus" => NavEvent::WillUnfocus {
                next: None,
                next_section: None,
                direction: None,
                native: false,
            },
            "unfocused" => NavEvent::Unfocused {
                next: None,
                next_section: None,
                direction: None,
                native: false,
            },
            "willfocus" => NavEvent::WillFocus {
                previous: None,
                section: "s".into(),
                direction: None,
                native: false,
            },
            "focused" => NavEvent::Focused {
                previous: None,
                section: "s".into(),
                direction: None,
                native: false,
            },
            "navigatefailed" => NavEvent::NavigateFailed {
                direction: Direction::Up,
            },
            "enter-down" => NavEvent::EnterDown,
            "enter-up" => NavEvent::EnterUp,
            other => panic!("unknown event {other}"),
        }
    }

    #[test]
    fn names_round_trip() {
        for name in [
            "willmove",
            "willunfocus",
            "unfocused",
            "willfocus",
            "focused",
            "navigatefailed",
            "enter-down",
            "enter-up",
        ] {
            assert_eq!(sample(name).name(), name);
        }
    }

    #[test]
    fn only_pre_events_and_enter_are_cancelable() {
        for name in ["willmove", "willunfocus", "willfocus", "enter-down", "enter-up"] {
            assert!(sample(name).cancelable(), "{name} must be cancelable");
        }
        for name in ["unfocused", "focused", "navigatefailed"] {
            assert!(!sample(name).cancelable(), "{name} must not be cancelable");
        }
    }
}
