// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waypoint Geometry: directional focus-candidate selection.
//!
//! This crate is the pure, side-effect-free half of the Waypoint navigation
//! engine. Given the rectangle of the currently focused element, a
//! [`Direction`], and a set of candidate rectangles, it answers one question:
//! *which candidate should receive focus?*
//!
//! The answer is computed in two steps:
//!
//! - **Partitioning** ([`partition`] / [`Sectors`]): every candidate is
//!   assigned, by the position of its center relative to the target
//!   rectangle's edges, to one of nine spatial sectors laid out as a 3×3
//!   grid around (and on) the target. Candidates in a corner sector that
//!   still overlap the target's span on the cross axis by at least a
//!   configurable fraction are additionally recorded in the adjacent
//!   straight sector, so a button that is "up and slightly to the right" can
//!   still be reached by a plain Up intent.
//! - **Ranking** ([`navigate`]): for each direction a fixed, ordered list of
//!   distance metrics is evaluated per candidate and compared
//!   lexicographically; the sector groups valid for the direction are tried
//!   in priority order (in-line with the target first, then the straight
//!   sector, then the diagonals) and the best-scoring member of the first
//!   non-empty group wins.
//!
//! The ranking is fully deterministic: identical rectangles, direction, and
//! query always select the identical candidate, and ties beyond the metric
//! tuple fall back to the first candidate in input order.
//!
//! ## Minimal example
//!
//! Three boxes in an L shape; from the top-left box, Right reaches the box in
//! the same horizontal band and Down reaches the one below:
//!
//! ```rust
//! use kurbo::Rect;
//! use waypoint_geometry::{Candidate, Direction, NavQuery, navigate};
//!
//! let a = Rect::new(0.0, 0.0, 10.0, 10.0);
//! let candidates = vec![
//!     Candidate { id: 'b', rect: Rect::new(20.0, 0.0, 30.0, 10.0) },
//!     Candidate { id: 'c', rect: Rect::new(0.0, 20.0, 10.0, 30.0) },
//! ];
//!
//! let right = NavQuery::new(Direction::Right);
//! assert_eq!(navigate(a, &right, &candidates, None), Some('b'));
//!
//! let down = NavQuery::new(Direction::Down);
//! assert_eq!(navigate(a, &down, &candidates, None), Some('c'));
//! ```
//!
//! The core types are generic over the candidate identifier `K`, so callers
//! can use any small, copyable handle (a DOM-ish element id, a scene-tree
//! node id, or an application-specific key). Geometry is expressed in terms
//! of [`kurbo::Rect`]; all candidates and the target must share one
//! coordinate space.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for
//!   floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use kurbo::Rect;

mod rank;
mod sectors;

pub use rank::{NavQuery, navigate};
pub use sectors::{Sectors, partition};

/// Direction of a navigation intent.
///
/// Each direction has a statically known reverse; [`Direction::reverse`] is
/// an involution (`d.reverse().reverse() == d`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Move upward (toward smaller `y`).
    Up,
    /// Move downward (toward larger `y`).
    Down,
    /// Move left (toward smaller `x`).
    Left,
    /// Move right (toward larger `x`).
    Right,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// The direction that undoes this one.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Whether this direction moves along the horizontal axis.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// A single focus candidate: an identifier plus its current bounds.
///
/// Bounds are expected to be freshly computed for each navigation attempt;
/// layout may change between attempts, so callers should not cache rects
/// across calls.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Candidate<K> {
    /// Identifier for this candidate.
    pub id: K,
    /// Bounds in the shared coordinate space.
    pub rect: Rect,
}
