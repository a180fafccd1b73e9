// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases on top of the domain types.
//!
//! - [`query`]: Query services (read-side), currently the gallery navigator
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Presentation layer uses application layer services
//! - Nothing here knows about the GUI toolkit
//!
//! # Example
//!
//! ```
//! use iced_gallery::application::query::navigation::{self, Direction};
//! use iced_gallery::domain::artwork::ArtworkId;
//!
//! let next = navigation::step(ArtworkId::FIRST, Direction::Next, 3);
//! assert_eq!(next.value(), 2);
//! ```

pub mod query;
