//! Core domain logic for the rectangle store.
//! This crate owns the rectangle record, its save guard, and SQLite storage.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, CoreConfig};
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::rectangle::{
    Fields, PositiveDimensions, Rectangle, RectangleField, RectangleId, RectangleInput,
    RectangleValidationError, ValidationErrorKind,
};
pub use repo::rectangle_repo::{
    RectangleListQuery, RectangleRepository, RepoError, RepoResult, SaveOptions,
    SqliteRectangleRepository,
};
pub use service::rectangle_service::RectangleService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
