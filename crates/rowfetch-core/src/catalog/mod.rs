//! Module: catalog
//! Responsibility: the capability surface fetch-spec construction reads
//! metadata through, plus the runtime descriptors implementing it.
//! Does not own: catalog persistence, schema evolution, or row decoding.
//! Boundary: everything the fetch builder knows about tables, indexes, and
//! columns passes through the traits below, so synthetic metadata can stand
//! in for a full catalog.

pub mod column;
pub mod family;
pub mod index;
pub mod table;

pub use column::{ColumnDescriptor, ColumnKind, ColumnState};
pub use family::ColumnFamily;
pub use index::{IndexDescriptor, IndexKind, KeyEncoding, SortDirection};
pub use table::TableDescriptor;

use crate::{
    error::InternalError,
    fetch::KeyColumn,
    types::{ColumnId, IndexId, TableId},
};

///
/// CatalogColumn
///

pub trait CatalogColumn {
    fn name(&self) -> &str;
    fn id(&self) -> ColumnId;
    fn kind(&self) -> &ColumnKind;
    fn is_nullable(&self) -> bool;

    /// Whether the column is in the public/active schema state.
    /// Mutating and dropped columns are treated as nullable by readers.
    fn is_public(&self) -> bool;
}

///
/// CatalogIndex
///

pub trait CatalogIndex {
    fn name(&self) -> &str;
    fn id(&self) -> IndexId;
    fn is_primary(&self) -> bool;
    fn is_unique(&self) -> bool;
    fn kind(&self) -> IndexKind;
    fn encoding(&self) -> KeyEncoding;
    fn num_key_suffix_columns(&self) -> usize;

    /// The column an inverted index decomposes; `None` for forward indexes.
    fn inverted_column_id(&self) -> Option<ColumnId>;

    /// The key kind the inverted column decodes as.
    fn inverted_column_key_kind(&self) -> ColumnKind;

    fn key_column_ids(&self) -> &[ColumnId];
    fn stored_column_ids(&self) -> &[ColumnId];
    fn key_suffix_column_ids(&self) -> &[ColumnId];
}

///
/// CatalogTable
///

pub trait CatalogTable {
    type Column: CatalogColumn;
    type Index: CatalogIndex;

    fn name(&self) -> &str;
    fn id(&self) -> TableId;

    /// Column families in declaration order.
    fn families(&self) -> &[ColumnFamily];

    /// Physical key-value pairs one logical row produces through `index`.
    fn index_keys_per_row(&self, index: &Self::Index) -> u32;

    /// Resolve a column by id; a miss is a recoverable NotFound error.
    fn column_by_id(&self, column_id: ColumnId) -> Result<&Self::Column, InternalError>;

    /// The columns forming the index key plus any key-suffix columns, with
    /// sort directions and inverted-key substitution already applied.
    fn key_and_suffix_columns(&self, index: &Self::Index) -> Result<Vec<KeyColumn>, InternalError>;
}

impl CatalogColumn for ColumnDescriptor {
    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> ColumnId {
        self.id
    }

    fn kind(&self) -> &ColumnKind {
        &self.kind
    }

    fn is_nullable(&self) -> bool {
        self.nullable
    }

    fn is_public(&self) -> bool {
        self.state.is_public()
    }
}

impl CatalogIndex for IndexDescriptor {
    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> IndexId {
        self.id
    }

    fn is_primary(&self) -> bool {
        self.primary
    }

    fn is_unique(&self) -> bool {
        self.unique
    }

    fn kind(&self) -> IndexKind {
        self.kind
    }

    fn encoding(&self) -> KeyEncoding {
        IndexDescriptor::encoding(self)
    }

    fn num_key_suffix_columns(&self) -> usize {
        self.key_suffix_column_ids.len()
    }

    fn inverted_column_id(&self) -> Option<ColumnId> {
        IndexDescriptor::inverted_column_id(self)
    }

    fn inverted_column_key_kind(&self) -> ColumnKind {
        IndexDescriptor::inverted_column_key_kind(self)
    }

    fn key_column_ids(&self) -> &[ColumnId] {
        &self.key_column_ids
    }

    fn stored_column_ids(&self) -> &[ColumnId] {
        &self.stored_column_ids
    }

    fn key_suffix_column_ids(&self) -> &[ColumnId] {
        &self.key_suffix_column_ids
    }
}
