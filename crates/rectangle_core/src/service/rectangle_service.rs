//! Rectangle use-case service.
//!
//! # Responsibility
//! - Offer `create`/`all` style entry points over any rectangle repository.
//! - Run the integral type check on raw input before the save guard.
//!
//! # Invariants
//! - Service APIs never bypass repository validation.
//! - For raw input, a type failure is reported before any value failure.

use crate::model::rectangle::{Rectangle, RectangleId, RectangleInput};
use crate::repo::rectangle_repo::{
    RectangleListQuery, RectangleRepository, RepoResult, SaveOptions,
};
use log::warn;

/// Use-case service wrapper for rectangle persistence.
pub struct RectangleService<R: RectangleRepository> {
    repo: R,
}

impl<R: RectangleRepository> RectangleService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates and stores a rectangle from typed dimensions.
    ///
    /// Fails with a value error when either dimension is not positive.
    pub fn create(&self, length: i64, width: i64) -> RepoResult<Rectangle> {
        self.repo.create_rectangle(length, width)
    }

    /// Creates and stores a rectangle from loosely typed input.
    ///
    /// # Contract
    /// - Non-integral `length` or `width` fails with a type error, whatever
    ///   the other value is.
    /// - Integral but non-positive values fail with a value error.
    /// - Any `id` in the input is kept and the row is force-inserted.
    pub fn create_from_input(&self, input: RectangleInput) -> RepoResult<Rectangle> {
        let mut rect = Rectangle::try_from(input).map_err(|err| {
            warn!(
                "event=rectangle_create module=service status=rejected kind={}",
                err.kind()
            );
            err
        })?;
        self.repo.save_rectangle(&mut rect, SaveOptions::insert())?;
        Ok(rect)
    }

    /// Saves `rect` with explicit options; see [`SaveOptions`].
    pub fn save(&self, rect: &mut Rectangle, options: SaveOptions) -> RepoResult<RectangleId> {
        self.repo.save_rectangle(rect, options)
    }

    pub fn get(&self, id: RectangleId) -> RepoResult<Option<Rectangle>> {
        self.repo.get_rectangle(id)
    }

    /// Returns every stored rectangle ordered by id.
    pub fn all(&self) -> RepoResult<Vec<Rectangle>> {
        self.repo.list_rectangles(&RectangleListQuery::default())
    }

    pub fn list(&self, query: &RectangleListQuery) -> RepoResult<Vec<Rectangle>> {
        self.repo.list_rectangles(query)
    }

    pub fn count(&self) -> RepoResult<u64> {
        self.repo.count_rectangles()
    }

    pub fn delete(&self, id: RectangleId) -> RepoResult<()> {
        self.repo.delete_rectangle(id)
    }
}
