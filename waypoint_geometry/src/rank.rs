// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Distance metrics and lexicographic candidate ranking.
//!
//! Each direction evaluates a fixed, ordered list of metrics per candidate;
//! tuples are compared lexicographically and the smaller tuple wins. The
//! metric lists are the algorithm's tie-break policy and their exact order
//! is a behavioral-compatibility requirement; changing it changes which
//! element a remote-control Right lands on.

use kurbo::Rect;

use crate::sectors::{IndexVec, Sectors};
use crate::{Candidate, Direction, partition};

/// A per-candidate distance metric relative to the target rectangle.
///
/// All metrics are clamped to zero when the candidate overlaps the relevant
/// reference line; they never go negative.
type Metric = fn(Rect, Rect) -> f64;

/// Distance from the candidate's near vertical edge to the vertical line
/// through the target's center.
fn near_plumb_line(candidate: Rect, target: Rect) -> f64 {
    let distance = if candidate.center().x < target.center().x {
        target.center().x - candidate.x1
    } else {
        candidate.x0 - target.center().x
    };
    distance.max(0.0)
}

/// Distance from the candidate's near horizontal edge to the horizontal line
/// through the target's center.
fn near_horizon(candidate: Rect, target: Rect) -> f64 {
    let distance = if candidate.center().y < target.center().y {
        target.center().y - candidate.y1
    } else {
        candidate.y0 - target.center().y
    };
    distance.max(0.0)
}

/// Distance from the candidate's near vertical edge to the target's left edge.
fn near_target_left(candidate: Rect, target: Rect) -> f64 {
    let distance = if candidate.center().x < target.center().x {
        target.x0 - candidate.x1
    } else {
        candidate.x0 - target.x0
    };
    distance.max(0.0)
}

/// Distance from the candidate's near horizontal edge to the target's top edge.
fn near_target_top(candidate: Rect, target: Rect) -> f64 {
    let distance = if candidate.center().y < target.center().y {
        target.y0 - candidate.y1
    } else {
        candidate.y0 - target.y0
    };
    distance.max(0.0)
}

/// Higher candidates rank first.
fn top_edge(candidate: Rect, _target: Rect) -> f64 {
    candidate.y0
}

/// Lower candidates rank first.
fn bottom_edge(candidate: Rect, _target: Rect) -> f64 {
    -candidate.y1
}

/// Leftmost candidates rank first.
fn left_edge(candidate: Rect, _target: Rect) -> f64 {
    candidate.x0
}

/// Rightmost candidates rank first.
fn right_edge(candidate: Rect, _target: Rect) -> f64 {
    -candidate.x1
}

/// Parameters of one directional ranking query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NavQuery {
    /// The requested movement direction.
    pub direction: Direction,
    /// Restrict the search to candidates directly in line with the target
    /// (drop the diagonal sectors).
    pub straight_only: bool,
    /// Minimum fractional cross-axis overlap (0–1) for a corner candidate to
    /// count as straight.
    pub straight_overlap_threshold: f64,
}

impl NavQuery {
    /// A query for `direction` with the default overlap threshold (0.5) and
    /// diagonals allowed.
    #[must_use]
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            straight_only: false,
            straight_overlap_threshold: 0.5,
        }
    }
}

/// One priority tier: the sector members valid for the direction and the
/// metric order used to rank them.
struct Tier {
    members: IndexVec,
    metrics: &'static [Metric],
}

fn concat(sectors: &Sectors, indices: &[usize]) -> IndexVec {
    let mut out = IndexVec::new();
    for &s in indices {
        out.extend_from_slice(sectors.sector(s));
    }
    out
}

fn tiers(sectors: &Sectors, inner: &Sectors, direction: Direction) -> [Tier; 3] {
    match direction {
        Direction::Left => [
            Tier {
                members: concat(inner, &[0, 3, 6]),
                metrics: &[near_plumb_line, top_edge],
            },
            Tier {
                members: concat(sectors, &[3]),
                metrics: &[near_plumb_line, top_edge],
            },
            Tier {
                members: concat(sectors, &[0, 6]),
                metrics: &[near_horizon, right_edge, near_target_top],
            },
        ],
        Direction::Right => [
            Tier {
                members: concat(inner, &[2, 5, 8]),
                metrics: &[near_plumb_line, top_edge],
            },
            Tier {
                members: concat(sectors, &[5]),
                metrics: &[near_plumb_line, top_edge],
            },
            Tier {
                members: concat(sectors, &[2, 8]),
                metrics: &[near_horizon, left_edge, near_target_top],
            },
        ],
        Direction::Up => [
            Tier {
                members: concat(inner, &[0, 1, 2]),
                metrics: &[near_horizon, left_edge],
            },
            Tier {
                members: concat(sectors, &[1]),
                metrics: &[near_horizon, left_edge],
            },
            Tier {
                members: concat(sectors, &[0, 2]),
                metrics: &[near_plumb_line, bottom_edge, near_target_left],
            },
        ],
        Direction::Down => [
            Tier {
                members: concat(inner, &[6, 7, 8]),
                metrics: &[near_horizon, left_edge],
            },
            Tier {
                members: concat(sectors, &[7]),
                metrics: &[near_horizon, left_edge],
            },
            Tier {
                members: concat(sectors, &[6, 8]),
                metrics: &[near_plumb_line, top_edge, near_target_left],
            },
        ],
    }
}

/// True when candidate `a` strictly outranks candidate `b` under `metrics`.
///
/// Equal tuples are not "better", so the earlier member of a tier survives
/// a full tie.
fn outranks<K>(
    metrics: &[Metric],
    candidates: &[Candidate<K>],
    target: Rect,
    a: usize,
    b: usize,
) -> bool {
    for metric in metrics {
        let da = metric(candidates[a].rect, target);
        let db = metric(candidates[b].rect, target);
        if da < db {
            return true;
        }
        if da > db {
            return false;
        }
    }
    false
}

/// Select the best candidate for one directional move, or `None` when no
/// candidate survives filtering.
///
/// `target` is the rectangle of the element focus is moving away from.
/// `preferred` is an optional caller-side preference (Waypoint's
/// remember-source retrace): when it names a member of the winning sector
/// group it is returned outright, bypassing the metric ranking.
///
/// Determinism: given identical inputs the same candidate is always
/// returned. Ranking ties are broken by the metric tuple; a full tie keeps
/// the first candidate in input order within the winning group.
#[must_use]
pub fn navigate<K: Copy + Eq>(
    target: Rect,
    query: &NavQuery,
    candidates: &[Candidate<K>],
    preferred: Option<K>,
) -> Option<K> {
    if candidates.is_empty() {
        return None;
    }

    let threshold = query.straight_overlap_threshold.clamp(0.0, 1.0);
    let sectors = partition(candidates, target, threshold);

    // Candidates overlapping the target are ranked by re-partitioning them
    // around the target's center point, so a move out of an enclosing
    // element behaves like a move from its center.
    let center = target.center();
    let center_rect = Rect::new(center.x, center.y, center.x, center.y);
    let inner = Sectors::of_indices(
        candidates,
        sectors.sector(4).iter().copied(),
        center_rect,
        threshold,
    );

    let all_tiers = tiers(&sectors, &inner, query.direction);
    let usable: &[Tier] = if query.straight_only {
        &all_tiers[..2]
    } else {
        &all_tiers[..]
    };

    let tier = usable.iter().find(|t| !t.members.is_empty())?;

    if let Some(p) = preferred {
        if tier.members.iter().any(|&i| candidates[i].id == p) {
            return Some(p);
        }
    }

    let mut best: Option<usize> = None;
    for &i in &tier.members {
        match best {
            None => best = Some(i),
            Some(b) if i != b && outranks(tier.metrics, candidates, target, i, b) => {
                best = Some(i);
            }
            _ => {}
        }
    }
    best.map(|i| candidates[i].id)
}
