// SPDX-License-Identifier: MPL-2.0
//! Selection state: which artwork the gallery currently shows.
//!
//! Each gallery session owns one [`Selection`]. It starts on the first
//! artwork and changes only through [`Selection::navigate`], which applies
//! the navigation rules and reports the transition to the caller.

use crate::application::query::navigation::{self, Direction, NavigationInfo};
use crate::catalog::Catalog;
use crate::domain::artwork::ArtworkId;

/// A selection transition, reported so the presentation can re-render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChange {
    pub previous: ArtworkId,
    pub current: ArtworkId,
    pub direction: Direction,
}

/// Invariant: `1 <= current <= total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    current: ArtworkId,
    total: usize,
}

impl Selection {
    /// Starts a session on the first artwork of `catalog`.
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            current: ArtworkId::FIRST,
            total: catalog.size(),
        }
    }

    #[must_use]
    pub fn current(&self) -> ArtworkId {
        self.current
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn can_navigate(&self, direction: Direction) -> bool {
        navigation::can_step(self.current, direction, self.total)
    }

    #[must_use]
    pub fn navigation_info(&self) -> NavigationInfo {
        NavigationInfo::new(self.current, self.total)
    }

    /// Steps once in `direction`.
    ///
    /// Returns `None` and leaves the selection untouched when the step would
    /// leave the catalog.
    pub fn navigate(&mut self, direction: Direction) -> Option<SelectionChange> {
        if !self.can_navigate(direction) {
            return None;
        }

        let previous = self.current;
        let current = navigation::step(previous, direction, self.total);

        self.current = current;
        Some(SelectionChange {
            previous,
            current,
            direction,
        })
    }
}
