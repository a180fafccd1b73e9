// SPDX-License-Identifier: MPL-2.0
//! Gallery navigation rules.
//!
//! Navigation is a pure function of the current selection, the requested
//! direction, and the catalog size `N`. Stepping past either end of the
//! catalog is rejected and leaves the selection unchanged; the UI prevents
//! such requests by disabling the matching control, which is what
//! [`can_step_prev`] and [`can_step_next`] report.

use crate::domain::artwork::ArtworkId;

/// Direction of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Navigate to the previous artwork.
    Previous,
    /// Navigate to the next artwork.
    Next,
}

/// Computes the selection after stepping once in `direction`.
///
/// Returns `current` unchanged when the candidate falls outside `[1, total]`.
#[must_use]
pub fn step(current: ArtworkId, direction: Direction, total: usize) -> ArtworkId {
    let candidate = match direction {
        Direction::Previous => current.value().checked_sub(1),
        Direction::Next => current.value().checked_add(1),
    };

    match candidate.and_then(ArtworkId::new) {
        Some(id) if id.index() < total => id,
        _ => current,
    }
}

/// Whether a step backward is possible from `current`.
#[must_use]
pub fn can_step_prev(current: ArtworkId) -> bool {
    current.value() > 1
}

/// Whether a step forward is possible from `current` in a catalog of `total` artworks.
#[must_use]
pub fn can_step_next(current: ArtworkId, total: usize) -> bool {
    (current.value() as usize) < total
}

/// Whether a step in `direction` is possible.
#[must_use]
pub fn can_step(current: ArtworkId, direction: Direction, total: usize) -> bool {
    match direction {
        Direction::Previous => can_step_prev(current),
        Direction::Next => can_step_next(current, total),
    }
}

/// Navigation state snapshot for UI rendering.
///
/// Contains everything the controls need without access to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationInfo {
    /// Whether the "Previous" control is enabled.
    pub has_previous: bool,
    /// Whether the "Next" control is enabled.
    pub has_next: bool,
    /// 1-based position of the current artwork.
    pub position: u32,
    /// Total number of artworks.
    pub total: usize,
}

impl NavigationInfo {
    #[must_use]
    pub fn new(current: ArtworkId, total: usize) -> Self {
        Self {
            has_previous: can_step_prev(current),
            has_next: can_step_next(current, total),
            position: current.value(),
            total,
        }
    }

    /// Whether the control for `direction` is enabled.
    #[must_use]
    pub fn is_enabled(&self, direction: Direction) -> bool {
        match direction {
            Direction::Previous => self.has_previous,
            Direction::Next => self.has_next,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX_TOTAL: usize = 16;

    fn id(value: u32) -> ArtworkId {
        ArtworkId::new(value).unwrap()
    }

    #[test]
    fn cannot_step_past_either_end() {
        for total in 1..=MAX_TOTAL {
            assert!(!can_step_prev(ArtworkId::FIRST));
            assert!(!can_step_next(id(total as u32), total));
        }
    }

    #[test]
    fn previous_decrements_inside_bounds() {
        for total in 2..=MAX_TOTAL {
            for current in 2..=total as u32 {
                assert_eq!(step(id(current), Direction::Previous, total), id(current - 1));
            }
        }
    }

    #[test]
    fn next_increments_inside_bounds() {
        for total in 2..=MAX_TOTAL {
            for current in 1..total as u32 {
                assert_eq!(step(id(current), Direction::Next, total), id(current + 1));
            }
        }
    }

    #[test]
    fn stepping_out_of_bounds_is_a_no_op() {
        for total in 1..=MAX_TOTAL {
            let last = id(total as u32);
            assert_eq!(step(ArtworkId::FIRST, Direction::Previous, total), ArtworkId::FIRST);
            assert_eq!(step(last, Direction::Next, total), last);
        }
    }

    #[test]
    fn next_then_previous_round_trips() {
        for total in 2..=MAX_TOTAL {
            for current in 1..total as u32 {
                let forward = step(id(current), Direction::Next, total);
                assert_eq!(step(forward, Direction::Previous, total), id(current));
            }
        }
    }

    #[test]
    fn single_artwork_catalog_disables_both_directions() {
        let info = NavigationInfo::new(ArtworkId::FIRST, 1);
        assert!(!info.has_previous);
        assert!(!info.has_next);
        assert_eq!(step(ArtworkId::FIRST, Direction::Next, 1), ArtworkId::FIRST);
    }

    #[test]
    fn can_step_matches_step_result() {
        for total in 1..=MAX_TOTAL {
            for current in 1..=total as u32 {
                for direction in [Direction::Previous, Direction::Next] {
                    let moved = step(id(current), direction, total) != id(current);
                    assert_eq!(can_step(id(current), direction, total), moved);
                }
            }
        }
    }

    #[test]
    fn navigation_info_reports_position() {
        let info = NavigationInfo::new(id(2), 3);
        assert_eq!(info.position, 2);
        assert_eq!(info.total, 3);
        assert!(info.is_enabled(Direction::Previous));
        assert!(info.is_enabled(Direction::Next));
    }
}
