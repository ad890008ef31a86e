// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nine-sector spatial partitioning of candidates around a target rectangle.

use kurbo::Rect;
use smallvec::SmallVec;

use crate::Candidate;

pub(crate) type IndexVec = SmallVec<[usize; 8]>;

/// The result of partitioning candidates around a target rectangle.
///
/// Sectors are laid out as a 3×3 grid in row-major order:
///
/// ```text
/// 0 | 1 | 2
/// --+---+--
/// 3 | 4 | 5
/// --+---+--
/// 6 | 7 | 8
/// ```
///
/// Sector 4 holds candidates whose center lies on or inside the target
/// rectangle. Each candidate is assigned to exactly one sector by its
/// center; a candidate in a corner sector (0, 2, 6, 8) that overlaps the
/// target's span on the cross axis by at least the overlap threshold is
/// *additionally* recorded in the adjacent straight sector (1, 3, 5, 7), so
/// straight navigation can reach it.
///
/// Each sector stores indices into the candidate slice that produced it, in
/// input order.
#[derive(Clone, Debug, Default)]
pub struct Sectors {
    groups: [IndexVec; 9],
}

impl Sectors {
    /// Indices of the candidates recorded in the given sector (0–8).
    ///
    /// # Panics
    ///
    /// Panics if `sector > 8`.
    #[must_use]
    pub fn sector(&self, sector: usize) -> &[usize] {
        &self.groups[sector]
    }

    /// Total number of recorded entries across all sectors.
    ///
    /// Can exceed the candidate count because of corner spill.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.len()).sum()
    }

    /// Whether no candidate was recorded in any sector.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|g| g.is_empty())
    }

    /// Partition a subset of `candidates` (given as indices) around `target`.
    ///
    /// The returned sectors contain the original indices, so the caller can
    /// re-partition one sector (for example, the "contains target" sector
    /// against the target's center point) without losing identity.
    pub(crate) fn of_indices<K>(
        candidates: &[Candidate<K>],
        subset: impl Iterator<Item = usize>,
        target: Rect,
        overlap_threshold: f64,
    ) -> Self {
        let threshold = overlap_threshold.clamp(0.0, 1.0);
        let mut groups: [IndexVec; 9] = core::array::from_fn(|_| IndexVec::new());

        for i in subset {
            let rect = candidates[i].rect;
            let center = rect.center();

            let column = if center.x < target.x0 {
                0
            } else if center.x <= target.x1 {
                1
            } else {
                2
            };
            let row = if center.y < target.y0 {
                0
            } else if center.y <= target.y1 {
                1
            } else {
                2
            };
            let sector = row * 3 + column;
            groups[sector].push(i);

            if matches!(sector, 0 | 2 | 6 | 8) {
                // Corner spill: enough cross-axis overlap with the target's
                // span counts as "straight" for the adjacent sector.
                if rect.x0 <= target.x1 - target.width() * threshold {
                    match sector {
                        2 => groups[1].push(i),
                        8 => groups[7].push(i),
                        _ => {}
                    }
                }
                if rect.x1 >= target.x0 + target.width() * threshold {
                    match sector {
                        0 => groups[1].push(i),
                        6 => groups[7].push(i),
                        _ => {}
                    }
                }
                if rect.y0 <= target.y1 - target.height() * threshold {
                    match sector {
                        6 => groups[3].push(i),
                        8 => groups[5].push(i),
                        _ => {}
                    }
                }
                if rect.y1 >= target.y0 + target.height() * threshold {
                    match sector {
                        0 => groups[3].push(i),
                        2 => groups[5].push(i),
                        _ => {}
                    }
                }
            }
        }

        Self { groups }
    }
}

/// Partition `candidates` into the nine [`Sectors`] around `target`.
///
/// `overlap_threshold` is the minimum fractional overlap (0–1) on the cross
/// axis for a corner candidate to also count as straight; values outside the
/// range behave like the nearest bound.
///
/// ```rust
/// use kurbo::Rect;
/// use waypoint_geometry::{Candidate, partition};
///
/// let target = Rect::new(10.0, 10.0, 20.0, 20.0);
/// let candidates = [
///     // Directly right of the target: sector 5.
///     Candidate { id: 0_u32, rect: Rect::new(30.0, 10.0, 40.0, 20.0) },
///     // Above and to the right: sector 2.
///     Candidate { id: 1_u32, rect: Rect::new(30.0, -10.0, 40.0, 0.0) },
/// ];
///
/// let sectors = partition(&candidates, target, 0.5);
/// assert_eq!(sectors.sector(5), &[0]);
/// assert_eq!(sectors.sector(2), &[1]);
/// ```
#[must_use]
pub fn partition<K>(
    candidates: &[Candidate<K>],
    target: Rect,
    overlap_threshold: f64,
) -> Sectors {
    Sectors::of_indices(candidates, 0..candidates.len(), target, overlap_threshold)
}
