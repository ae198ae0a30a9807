//! Rectangle repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the storage primitives behind rectangle persistence: save,
//!   create, get, fetch-all, count and delete.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Every write path runs `Rectangle::validate()` before any SQL mutation,
//!   and SQL helpers only accept `PositiveDimensions`.
//! - Save options are inspected only after the guard has passed.
//! - Read paths reject invalid persisted rows instead of masking them.

use crate::db::DbError;
use crate::model::rectangle::{
    PositiveDimensions, Rectangle, RectangleId, RectangleValidationError,
};
use log::{info, warn};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const RECTANGLE_SELECT_SQL: &str = "SELECT id, length, width FROM rectangles";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for rectangle persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(RectangleValidationError),
    Db(DbError),
    NotFound(RectangleId),
    InvalidData(String),
    InvalidSaveOptions(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "rectangle not found: {id}"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted rectangle data: {message}")
            }
            Self::InvalidSaveOptions(message) => write!(f, "{message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::InvalidData(_) | Self::InvalidSaveOptions(_) => None,
        }
    }
}

impl From<RectangleValidationError> for RepoError {
    fn from(value: RectangleValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Pass-through arguments for [`RectangleRepository::save_rectangle`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaveOptions {
    /// Always INSERT, even when the record already has an id.
    pub force_insert: bool,
    /// Only UPDATE; fail when no row matches the record id.
    pub force_update: bool,
}

impl SaveOptions {
    pub fn insert() -> Self {
        Self {
            force_insert: true,
            ..Self::default()
        }
    }

    pub fn update() -> Self {
        Self {
            force_update: true,
            ..Self::default()
        }
    }
}

/// Paging options for listing rectangles. Results are ordered by id.
#[derive(Debug, Clone, Default)]
pub struct RectangleListQuery {
    pub limit: Option<u32>,
    pub offset: u32,
}

/// Repository interface for rectangle persistence.
pub trait RectangleRepository {
    /// Validates `rect` and writes it; assigns `rect.id` on insert.
    fn save_rectangle(&self, rect: &mut Rectangle, options: SaveOptions)
        -> RepoResult<RectangleId>;
    /// Builds a rectangle and saves it with `force_insert`.
    fn create_rectangle(&self, length: i64, width: i64) -> RepoResult<Rectangle>;
    fn get_rectangle(&self, id: RectangleId) -> RepoResult<Option<Rectangle>>;
    fn list_rectangles(&self, query: &RectangleListQuery) -> RepoResult<Vec<Rectangle>>;
    fn count_rectangles(&self) -> RepoResult<u64>;
    fn delete_rectangle(&self, id: RectangleId) -> RepoResult<()>;
}

/// SQLite-backed rectangle repository.
pub struct SqliteRectangleRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRectangleRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn insert(&self, id: Option<RectangleId>, dims: PositiveDimensions) -> RepoResult<RectangleId> {
        self.conn.execute(
            "INSERT INTO rectangles (id, length, width) VALUES (?1, ?2, ?3);",
            params![id, dims.length(), dims.width()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn update(&self, id: RectangleId, dims: PositiveDimensions) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "UPDATE rectangles
             SET
                length = ?1,
                width = ?2,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?3;",
            params![dims.length(), dims.width(), id],
        )?;
        Ok(changed > 0)
    }
}

impl RectangleRepository for SqliteRectangleRepository<'_> {
    fn save_rectangle(
        &self,
        rect: &mut Rectangle,
        options: SaveOptions,
    ) -> RepoResult<RectangleId> {
        let dims = match rect.validate() {
            Ok(dims) => dims,
            Err(err) => {
                warn!(
                    "event=rectangle_save module=repo status=rejected kind={} length={} width={}",
                    err.kind(),
                    rect.length,
                    rect.width
                );
                return Err(err.into());
            }
        };

        if options.force_insert && options.force_update {
            return Err(RepoError::InvalidSaveOptions(
                "cannot force both insert and update when saving a rectangle",
            ));
        }

        let id = match (rect.id, options.force_insert) {
            (Some(id), false) => {
                if self.update(id, dims)? {
                    id
                } else if options.force_update {
                    return Err(RepoError::NotFound(id));
                } else {
                    self.insert(Some(id), dims)?
                }
            }
            (id, _) => {
                if options.force_update {
                    return Err(RepoError::InvalidSaveOptions(
                        "cannot force an update on a rectangle without an id",
                    ));
                }
                self.insert(id, dims)?
            }
        };

        rect.id = Some(id);
        info!(
            "event=rectangle_save module=repo status=ok id={} length={} width={}",
            id,
            dims.length(),
            dims.width()
        );
        Ok(id)
    }

    fn create_rectangle(&self, length: i64, width: i64) -> RepoResult<Rectangle> {
        let mut rect = Rectangle::new(length, width);
        self.save_rectangle(&mut rect, SaveOptions::insert())?;
        Ok(rect)
    }

    fn get_rectangle(&self, id: RectangleId) -> RepoResult<Option<Rectangle>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{RECTANGLE_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_rectangle_row(row)?));
        }
        Ok(None)
    }

    fn list_rectangles(&self, query: &RectangleListQuery) -> RepoResult<Vec<Rectangle>> {
        let mut sql = format!("{RECTANGLE_SELECT_SQL} ORDER BY id ASC");
        let mut bind_values: Vec<Value> = Vec::new();

        match (query.limit, query.offset) {
            (Some(limit), offset) => {
                sql.push_str(" LIMIT ? OFFSET ?");
                bind_values.push(Value::Integer(i64::from(limit)));
                bind_values.push(Value::Integer(i64::from(offset)));
            }
            (None, 0) => {}
            (None, offset) => {
                sql.push_str(" LIMIT -1 OFFSET ?");
                bind_values.push(Value::Integer(i64::from(offset)));
            }
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut rectangles = Vec::new();
        while let Some(row) = rows.next()? {
            rectangles.push(parse_rectangle_row(row)?);
        }
        Ok(rectangles)
    }

    fn count_rectangles(&self) -> RepoResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM rectangles;", [], |row| row.get(0))?;
        u64::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative row count {count}")))
    }

    fn delete_rectangle(&self, id: RectangleId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM rectangles WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        info!("event=rectangle_delete module=repo status=ok id={id}");
        Ok(())
    }
}

fn parse_rectangle_row(row: &Row<'_>) -> RepoResult<Rectangle> {
    let id: RectangleId = row.get("id")?;
    let rect = Rectangle {
        id: Some(id),
        length: integer_column(row, "length", id)?,
        width: integer_column(row, "width", id)?,
    };
    rect.validate().map_err(|err| {
        RepoError::InvalidData(format!("rectangle {id}: {err} (found {rect})"))
    })?;
    Ok(rect)
}

fn integer_column(row: &Row<'_>, column: &str, id: RectangleId) -> RepoResult<i64> {
    match row.get::<_, Value>(column)? {
        Value::Integer(value) => Ok(value),
        other => Err(RepoError::InvalidData(format!(
            "non-integer value {other:?} in rectangles.{column} for id {id}"
        ))),
    }
}
