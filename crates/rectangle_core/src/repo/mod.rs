//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the storage contract rectangles are saved through.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Rectangle::validate()` before persistence.
//! - Repository APIs return semantic errors (`NotFound`, `InvalidData`) in
//!   addition to DB transport errors.

pub mod rectangle_repo;
