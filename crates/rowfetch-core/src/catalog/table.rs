use crate::{
    catalog::{
        CatalogColumn, CatalogIndex, CatalogTable,
        column::ColumnDescriptor,
        family::ColumnFamily,
        index::{IndexDescriptor, IndexKind, SortDirection},
    },
    error::InternalError,
    fetch::{FetchColumn, KeyColumn},
    types::{ColumnId, TableId},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

///
/// TableDescriptor
///
/// Runtime descriptor for one table: columns, column families, and indexes.
/// Family order and index key-column order are declaration order and are
/// significant.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TableDescriptor {
    pub name: String,
    pub id: TableId,
    pub columns: Vec<ColumnDescriptor>,
    pub families: Vec<ColumnFamily>,
    pub indexes: Vec<IndexDescriptor>,
}

impl TableDescriptor {
    pub fn new(name: impl Into<String>, id: TableId) -> Self {
        Self {
            name: name.into(),
            id,
            columns: Vec::new(),
            families: Vec::new(),
            indexes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_columns(mut self, columns: Vec<ColumnDescriptor>) -> Self {
        self.columns = columns;
        self
    }

    #[must_use]
    pub fn with_families(mut self, families: Vec<ColumnFamily>) -> Self {
        self.families = families;
        self
    }

    #[must_use]
    pub fn with_indexes(mut self, indexes: Vec<IndexDescriptor>) -> Self {
        self.indexes = indexes;
        self
    }

    /// Validate descriptor-level invariants.
    ///
    /// Checks identity uniqueness and that every column id referenced by a
    /// family or index exists on the table. Descriptors are expected to be
    /// validated once at construction, not on every read.
    pub fn validate(&self) -> Result<(), InternalError> {
        let mut column_ids = BTreeSet::new();
        for column in &self.columns {
            if !column_ids.insert(column.id) {
                return Err(InternalError::catalog_invariant(format!(
                    "table {}: duplicate column id {}",
                    self.name, column.id
                )));
            }
        }

        let mut family_ids = BTreeSet::new();
        for family in &self.families {
            if !family_ids.insert(family.id) {
                return Err(InternalError::catalog_invariant(format!(
                    "table {}: duplicate family id {}",
                    self.name, family.id
                )));
            }
            if let Some(column_id) = family.default_column
                && !column_ids.contains(&column_id)
            {
                return Err(InternalError::catalog_invariant(format!(
                    "table {}: family {} default column {column_id} does not exist",
                    self.name, family.name
                )));
            }
        }

        let mut index_ids = BTreeSet::new();
        for index in &self.indexes {
            if !index_ids.insert(index.id) {
                return Err(InternalError::catalog_invariant(format!(
                    "table {}: duplicate index id {}",
                    self.name, index.id
                )));
            }
            if index.key_column_directions.len() != index.key_column_ids.len() {
                return Err(InternalError::catalog_invariant(format!(
                    "table {}: index {} has {} directions for {} key columns",
                    self.name,
                    index.name,
                    index.key_column_directions.len(),
                    index.key_column_ids.len()
                )));
            }
            if index.kind == IndexKind::Inverted && index.key_column_ids.is_empty() {
                return Err(InternalError::catalog_invariant(format!(
                    "table {}: inverted index {} has no key columns",
                    self.name, index.name
                )));
            }

            let referenced = index
                .key_column_ids
                .iter()
                .chain(&index.stored_column_ids)
                .chain(&index.key_suffix_column_ids);
            for column_id in referenced {
                if !column_ids.contains(column_id) {
                    return Err(InternalError::catalog_invariant(format!(
                        "table {}: index {} references unknown column {column_id}",
                        self.name, index.name
                    )));
                }
            }
        }

        Ok(())
    }

    fn key_column(
        &self,
        index: &IndexDescriptor,
        column_id: ColumnId,
        direction: SortDirection,
        inverted_column_id: Option<ColumnId>,
    ) -> Result<KeyColumn, InternalError> {
        let column = self.column_by_id(column_id)?;
        let kind = if inverted_column_id == Some(column_id) {
            index.inverted_column_key_kind()
        } else {
            column.kind.clone()
        };

        Ok(KeyColumn {
            column: FetchColumn {
                name: column.name.clone(),
                column_id,
                kind,
                is_non_nullable: !column.nullable && column.state.is_public(),
            },
            direction,
        })
    }
}

impl CatalogTable for TableDescriptor {
    type Column = ColumnDescriptor;
    type Index = IndexDescriptor;

    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> TableId {
        self.id
    }

    fn families(&self) -> &[ColumnFamily] {
        &self.families
    }

    /// Physical key-value pairs one logical row produces through `index`.
    /// Primary encoding splits a row across its column families; secondary
    /// encoding always yields one pair.
    #[expect(clippy::cast_possible_truncation)]
    fn index_keys_per_row(&self, index: &Self::Index) -> u32 {
        if index.is_primary() {
            self.families.len().max(1) as u32
        } else {
            1
        }
    }

    fn column_by_id(&self, column_id: ColumnId) -> Result<&Self::Column, InternalError> {
        self.columns
            .iter()
            .find(|column| column.id == column_id)
            .ok_or_else(|| InternalError::catalog_column_not_found(column_id))
    }

    fn key_and_suffix_columns(&self, index: &Self::Index) -> Result<Vec<KeyColumn>, InternalError> {
        let inverted_column_id = index.inverted_column_id();
        let mut columns =
            Vec::with_capacity(index.key_column_ids.len() + index.key_suffix_column_ids.len());

        for (i, &column_id) in index.key_column_ids.iter().enumerate() {
            let direction = index
                .key_column_directions
                .get(i)
                .copied()
                .unwrap_or_default();
            columns.push(self.key_column(index, column_id, direction, inverted_column_id)?);
        }

        // Suffix columns make non-unique secondary keys unique; they are
        // always encoded ascending.
        for &column_id in &index.key_suffix_column_ids {
            columns.push(self.key_column(index, column_id, SortDirection::Asc, None)?);
        }

        Ok(columns)
    }
}

///
/// TESTS
///
