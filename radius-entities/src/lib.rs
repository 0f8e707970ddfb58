#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # radius-entities
//!
//! Reusable, agnostic domain entities of the radius map.
//!
//! The entities only contain generic functionality that does not reveal any application-specific logic.

pub mod geo;
pub mod map_style;
pub mod place;
pub mod position;
pub mod radius;
pub mod view_state;
pub mod zoom;
