//! Face-up card rows.
//!
//! The point row and merchant row are ordered `CardRow`s. Slot position
//! matters: the first two point-row slots carry coin bonuses.

pub mod row;

pub use row::{CardRow, RowCard};
