//! Domain model for persisted rectangles.
//!
//! # Responsibility
//! - Define the rectangle record and the value types guarding its storage.
//! - Keep type checks at the input boundary and value checks at save time.
//!
//! # Invariants
//! - Construction never validates; only persistence does.
//! - Storage writes accept `PositiveDimensions`, never raw integers.

pub mod rectangle;
