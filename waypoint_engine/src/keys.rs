// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard input translation: key codes and modifier masks.
//!
//! The engine only cares about five keys. The host's input layer maps its
//! native key events onto [`KeyCode`] (or uses [`KeyCode::from_legacy_code`]
//! for DOM-style numeric codes) and reports the held [`Modifiers`]; any held
//! modifier makes the engine ignore the key outright.

use waypoint_geometry::Direction;

bitflags::bitflags! {
    /// Modifier keys held during a key event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Alt / Option.
        const ALT = 0b0000_0001;
        /// Control.
        const CTRL = 0b0000_0010;
        /// Meta / Command / Windows.
        const META = 0b0000_0100;
        /// Shift.
        const SHIFT = 0b0000_1000;
    }
}

/// A key the engine recognizes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Left arrow.
    ArrowLeft,
    /// Up arrow.
    ArrowUp,
    /// Right arrow.
    ArrowRight,
    /// Down arrow.
    ArrowDown,
    /// Enter / OK.
    Enter,
}

impl KeyCode {
    /// Map a DOM-style legacy `keyCode` to a recognized key.
    ///
    /// Unrecognized codes return `None` and must be treated as a no-op.
    #[must_use]
    pub const fn from_legacy_code(code: u32) -> Option<Self> {
        match code {
            13 => Some(Self::Enter),
            37 => Some(Self::ArrowLeft),
            38 => Some(Self::ArrowUp),
            39 => Some(Self::ArrowRight),
            40 => Some(Self::ArrowDown),
            _ => None,
        }
    }

    /// The navigation direction this key maps to, if any.
    #[must_use]
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::ArrowLeft => Some(Direction::Left),
            Self::ArrowUp => Some(Direction::Up),
            Self::ArrowRight => Some(Direction::Right),
            Self::ArrowDown => Some(Direction::Down),
            Self::Enter => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_codes_map_to_exactly_one_key() {
        assert_eq!(KeyCode::from_legacy_code(13), Some(KeyCode::Enter));
        assert_eq!(KeyCode::from_legacy_code(37), Some(KeyCode::ArrowLeft));
        assert_eq!(KeyCode::from_legacy_code(38), Some(KeyCode::ArrowUp));
        assert_eq!(KeyCode::from_legacy_code(39), Some(KeyCode::ArrowRight));
        assert_eq!(KeyCode::from_legacy_code(40), Some(KeyCode::ArrowDown));
        assert_eq!(KeyCode::from_legacy_code(65), None);
        assert_eq!(KeyCode::from_legacy_code(0), None);
    }

    #[test]
    fn arrows_carry_their_direction() {
        assert_eq!(KeyCode::ArrowLeft.direction(), Some(Direction::Left));
        assert_eq!(KeyCode::ArrowUp.direction(), Some(Direction::Up));
        assert_eq!(KeyCode::ArrowRight.direction(), Some(Direction::Right));
        assert_eq!(KeyCode::ArrowDown.direction(), Some(Direction::Down));
        assert_eq!(KeyCode::Enter.direction(), None);
    }
}
