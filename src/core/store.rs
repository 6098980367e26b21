//! Flat-file record store
//!
//! One JSON array file per record kind under the catalog directory. The
//! collection lives in memory and every mutation rewrites the whole file
//! synchronously, which is plenty at catalog scale (tens to low hundreds
//! of records). Mutations validate first, apply in memory, then persist;
//! a failed write rolls the in-memory change back so readers in the same
//! process never see a half-applied state.

use std::fs;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::core::entity::CatalogEntity;

/// Stable handle for a stored record, assigned at load or add.
///
/// The durable files carry no id column (their shape is fixed for
/// interchange), so handles are scoped to one `Store` instance: `open`
/// numbers records in file order and a handle stays valid until its
/// record is removed. A stale handle fails with
/// [`StoreError::UnknownRecord`]; the caller re-lists and retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(u64);

impl RecordId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RecordId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(RecordId)
    }
}

/// A record together with its handle.
#[derive(Debug, Clone)]
pub struct Row<E> {
    pub id: RecordId,
    pub entity: E,
}

/// Store behavior switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct StoreOptions {
    /// Reject adds and renames that would duplicate an existing name.
    /// Off by default: the catalog historically allows synonyms.
    pub unique_names: bool,
}

/// Field-level rejection, raised before any mutation is applied.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("{field} must not be negative (got {value})")]
    NegativeValue { field: String, value: Decimal },

    #[error("a record named '{0}' already exists")]
    DuplicateName(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Stale or never-issued handle. List again and retry.
    #[error("no {kind} with id {id}")]
    UnknownRecord { kind: &'static str, id: RecordId },

    /// The backing file exists but does not parse as this collection.
    /// Never degraded to an empty store: persisting over an unreadable
    /// file would destroy whatever records it held.
    #[error("{} is not a valid {kind} collection", path.display())]
    Corrupt {
        kind: &'static str,
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Ordered collection of records of one kind, backed by a JSON file.
#[derive(Debug)]
pub struct Store<E: CatalogEntity> {
    path: PathBuf,
    options: StoreOptions,
    rows: Vec<Row<E>>,
    next_id: u64,
}

impl<E: CatalogEntity> Store<E> {
    /// Read `dir/<kind file>` into a new store. A missing file is an
    /// empty collection; an unparseable one is [`StoreError::Corrupt`].
    pub fn open(dir: &Path, options: StoreOptions) -> Result<Self, StoreError> {
        let path = dir.join(E::FILE_NAME);
        let entities: Vec<E> = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).map_err(|source| StoreError::Corrupt {
                kind: E::KIND,
                path: path.clone(),
                source,
            })?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        let rows: Vec<Row<E>> = entities
            .into_iter()
            .zip(1u64..)
            .map(|(entity, id)| Row {
                id: RecordId(id),
                entity,
            })
            .collect();
        let next_id = rows.len() as u64 + 1;

        Ok(Self {
            path,
            options,
            rows,
            next_id,
        })
    }

    /// Validate and append a record, then persist. Returns its handle.
    pub fn add(&mut self, entity: E) -> Result<RecordId, StoreError> {
        entity.validate()?;
        if self.options.unique_names {
            self.check_unique(entity.name(), None)?;
        }

        let id = RecordId(self.next_id);
        self.rows.push(Row { id, entity });
        if let Err(err) = self.persist() {
            self.rows.pop();
            return Err(err);
        }
        self.next_id += 1;
        Ok(id)
    }

    /// Overwrite the record behind `id` in place, keeping its position.
    pub fn update(&mut self, id: RecordId, entity: E) -> Result<(), StoreError> {
        entity.validate()?;
        if self.options.unique_names {
            self.check_unique(entity.name(), Some(id))?;
        }

        let pos = self.position(id)?;
        let previous = std::mem::replace(&mut self.rows[pos].entity, entity);
        if let Err(err) = self.persist() {
            self.rows[pos].entity = previous;
            return Err(err);
        }
        Ok(())
    }

    /// Delete the record behind `id`. Later records keep their handles;
    /// only their list positions compact.
    pub fn remove(&mut self, id: RecordId) -> Result<(), StoreError> {
        let pos = self.position(id)?;
        let removed = self.rows.remove(pos);
        if let Err(err) = self.persist() {
            self.rows.insert(pos, removed);
            return Err(err);
        }
        Ok(())
    }

    /// Records in insertion order.
    pub fn rows(&self) -> &[Row<E>] {
        &self.rows
    }

    pub fn get(&self, id: RecordId) -> Option<&E> {
        self.rows
            .iter()
            .find(|row| row.id == id)
            .map(|row| &row.entity)
    }

    /// First record carrying `name`. With duplicates present this is the
    /// earliest-inserted one, matching how the catalog always resolved
    /// name lookups.
    pub fn find_by_name(&self, name: &str) -> Option<&E> {
        self.rows
            .iter()
            .find(|row| row.entity.name() == name)
            .map(|row| &row.entity)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn position(&self, id: RecordId) -> Result<usize, StoreError> {
        self.rows
            .iter()
            .position(|row| row.id == id)
            .ok_or(StoreError::UnknownRecord { kind: E::KIND, id })
    }

    fn check_unique(&self, name: &str, exclude: Option<RecordId>) -> Result<(), ValidationError> {
        let clash = self
            .rows
            .iter()
            .any(|row| Some(row.id) != exclude && row.entity.name() == name);
        if clash {
            return Err(ValidationError::DuplicateName(name.to_string()));
        }
        Ok(())
    }

    fn persist(&self) -> Result<(), StoreError> {
        let entities: Vec<&E> = self.rows.iter().map(|row| &row.entity).collect();
        serde_json::to_string_pretty(&entities)
            .map_err(std::io::Error::other)
            .and_then(|json| fs::write(&self.path, json))
            .map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::LaborResource;
    use rust_decimal::Decimal;
    use tempfile::tempdir;

    fn open_labor(dir: &Path) -> Store<LaborResource> {
        Store::open(dir, StoreOptions::default()).unwrap()
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = open_labor(dir.path());
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_appends_and_grows_by_one() {
        let dir = tempdir().unwrap();
        let mut store = open_labor(dir.path());

        store
            .add(LaborResource::new("Welder", Decimal::from(50)))
            .unwrap();
        store
            .add(LaborResource::new("Painter", Decimal::from(30)))
            .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.rows().last().unwrap().entity.name, "Painter");
    }

    #[test]
    fn test_add_rejects_invalid_without_persisting() {
        let dir = tempdir().unwrap();
        let mut store = open_labor(dir.path());

        let err = store
            .add(LaborResource::new("", Decimal::from(10)))
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::EmptyName)
        ));

        let err = store
            .add(LaborResource::new("Welder", Decimal::from(-1)))
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::NegativeValue { .. })
        ));

        assert!(store.is_empty());
        assert!(!dir.path().join(LaborResource::FILE_NAME).exists());
    }

    #[test]
    fn test_round_trip_preserves_records_and_order() {
        let dir = tempdir().unwrap();
        let mut store = open_labor(dir.path());
        store
            .add(LaborResource::new("Welder", Decimal::from(50)))
            .unwrap();
        store
            .add(LaborResource::new("Painter", Decimal::from(30)))
            .unwrap();
        store
            .add(LaborResource::new("Assembler", Decimal::from(25)))
            .unwrap();

        let reopened = open_labor(dir.path());
        let names: Vec<&str> = reopened
            .rows()
            .iter()
            .map(|row| row.entity.name.as_str())
            .collect();
        assert_eq!(names, ["Welder", "Painter", "Assembler"]);
        assert_eq!(
            reopened.rows()[0].entity.hourly_cost,
            Decimal::from(50)
        );
    }

    #[test]
    fn test_remove_compacts_and_keeps_other_handles() {
        let dir = tempdir().unwrap();
        let mut store = open_labor(dir.path());
        let a = store
            .add(LaborResource::new("Welder", Decimal::from(50)))
            .unwrap();
        let b = store
            .add(LaborResource::new("Painter", Decimal::from(30)))
            .unwrap();
        let c = store
            .add(LaborResource::new("Assembler", Decimal::from(25)))
            .unwrap();

        store.remove(b).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.rows()[0].id, a);
        assert_eq!(store.rows()[1].id, c);
        assert_eq!(store.rows()[1].entity.name, "Assembler");
        assert_eq!(store.get(c).unwrap().name, "Assembler");
        assert!(store.get(b).is_none());
    }

    #[test]
    fn test_remove_same_id_twice_fails_second_time() {
        let dir = tempdir().unwrap();
        let mut store = open_labor(dir.path());
        let id = store
            .add(LaborResource::new("Welder", Decimal::from(50)))
            .unwrap();

        store.remove(id).unwrap();
        let err = store.remove(id).unwrap_err();
        assert!(matches!(err, StoreError::UnknownRecord { .. }));
    }

    #[test]
    fn test_update_overwrites_in_place() {
        let dir = tempdir().unwrap();
        let mut store = open_labor(dir.path());
        let a = store
            .add(LaborResource::new("Welder", Decimal::from(50)))
            .unwrap();
        store
            .add(LaborResource::new("Painter", Decimal::from(30)))
            .unwrap();

        store
            .update(a, LaborResource::new("Master Welder", Decimal::from(65)))
            .unwrap();

        assert_eq!(store.rows()[0].entity.name, "Master Welder");
        assert_eq!(store.rows()[0].entity.hourly_cost, Decimal::from(65));
        assert_eq!(store.rows()[1].entity.name, "Painter");
    }

    #[test]
    fn test_update_stale_id_fails() {
        let dir = tempdir().unwrap();
        let mut store = open_labor(dir.path());
        let id = store
            .add(LaborResource::new("Welder", Decimal::from(50)))
            .unwrap();
        store.remove(id).unwrap();

        let err = store
            .update(id, LaborResource::new("Welder", Decimal::from(60)))
            .unwrap_err();
        assert!(matches!(err, StoreError::UnknownRecord { .. }));
    }

    #[test]
    fn test_corrupt_file_is_reported_not_emptied() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(LaborResource::FILE_NAME);
        fs::write(&path, "{ not an array").unwrap();

        let err = Store::<LaborResource>::open(dir.path(), StoreOptions::default()).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));

        // the unreadable file is left untouched for external repair
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not an array");
    }

    #[test]
    fn test_duplicate_names_allowed_by_default() {
        let dir = tempdir().unwrap();
        let mut store = open_labor(dir.path());
        store
            .add(LaborResource::new("Welder", Decimal::from(50)))
            .unwrap();
        store
            .add(LaborResource::new("Welder", Decimal::from(55)))
            .unwrap();

        assert_eq!(store.len(), 2);
        // lookups resolve to the earliest insertion
        assert_eq!(
            store.find_by_name("Welder").unwrap().hourly_cost,
            Decimal::from(50)
        );
    }

    #[test]
    fn test_unique_names_option_rejects_duplicate_add() {
        let dir = tempdir().unwrap();
        let mut store: Store<LaborResource> = Store::open(
            dir.path(),
            StoreOptions { unique_names: true },
        )
        .unwrap();
        store
            .add(LaborResource::new("Welder", Decimal::from(50)))
            .unwrap();

        let err = store
            .add(LaborResource::new("Welder", Decimal::from(55)))
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::DuplicateName(_))
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_unique_names_option_rejects_rename_collision() {
        let dir = tempdir().unwrap();
        let mut store: Store<LaborResource> = Store::open(
            dir.path(),
            StoreOptions { unique_names: true },
        )
        .unwrap();
        store
            .add(LaborResource::new("Welder", Decimal::from(50)))
            .unwrap();
        let b = store
            .add(LaborResource::new("Painter", Decimal::from(30)))
            .unwrap();

        let err = store
            .update(b, LaborResource::new("Welder", Decimal::from(30)))
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::DuplicateName(_))
        ));

        // a name-preserving update of the same record is not a collision
        store
            .update(b, LaborResource::new("Painter", Decimal::from(35)))
            .unwrap();
        assert_eq!(store.get(b).unwrap().hourly_cost, Decimal::from(35));
    }
}
