use crate::{
    catalog::column::ColumnKind,
    types::{ColumnId, IndexId},
};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

///
/// IndexKind
///
/// Forward indexes key on column values directly. Inverted indexes key on a
/// decomposed representation of one container-shaped column; that column is
/// encoded with a special key kind distinct from its declared value kind.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum IndexKind {
    Forward,
    Inverted,
}

///
/// KeyEncoding
///
/// Encoding-type tag consumed by the row decoder. Primary encoding carries
/// full rows split across column families; secondary encoding carries one
/// key-value pair per logical row.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum KeyEncoding {
    #[default]
    Primary,
    Secondary,
}

impl Display for KeyEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        };
        write!(f, "{label}")
    }
}

///
/// SortDirection
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        };
        write!(f, "{label}")
    }
}

///
/// IndexDescriptor
///
/// Runtime descriptor for one table index.
///
/// Invariants (enforced by `TableDescriptor::validate`):
/// - `key_column_directions.len() == key_column_ids.len()`
/// - an inverted index has at least one key column; its last key column is
///   the inverted column
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct IndexDescriptor {
    pub name: String,
    pub id: IndexId,
    pub primary: bool,
    pub unique: bool,
    pub kind: IndexKind,
    pub key_column_ids: Vec<ColumnId>,
    pub key_column_directions: Vec<SortDirection>,
    pub stored_column_ids: Vec<ColumnId>,
    pub key_suffix_column_ids: Vec<ColumnId>,
}

impl IndexDescriptor {
    /// Construct a non-unique forward secondary index with ascending key
    /// columns and no stored or suffix columns.
    pub fn new(name: impl Into<String>, id: IndexId, key_column_ids: Vec<ColumnId>) -> Self {
        let key_column_directions = vec![SortDirection::Asc; key_column_ids.len()];
        Self {
            name: name.into(),
            id,
            primary: false,
            unique: false,
            kind: IndexKind::Forward,
            key_column_ids,
            key_column_directions,
            stored_column_ids: Vec::new(),
            key_suffix_column_ids: Vec::new(),
        }
    }

    /// Construct a table's primary index. Primary indexes are unique and
    /// carry no key-suffix columns.
    pub fn primary(name: impl Into<String>, id: IndexId, key_column_ids: Vec<ColumnId>) -> Self {
        let mut index = Self::new(name, id, key_column_ids);
        index.primary = true;
        index.unique = true;
        index
    }

    #[must_use]
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    #[must_use]
    pub fn inverted(mut self) -> Self {
        self.kind = IndexKind::Inverted;
        self
    }

    #[must_use]
    pub fn storing(mut self, column_ids: Vec<ColumnId>) -> Self {
        self.stored_column_ids = column_ids;
        self
    }

    #[must_use]
    pub fn with_key_suffix(mut self, column_ids: Vec<ColumnId>) -> Self {
        self.key_suffix_column_ids = column_ids;
        self
    }

    #[must_use]
    pub fn with_directions(mut self, directions: Vec<SortDirection>) -> Self {
        self.key_column_directions = directions;
        self
    }

    /// The encoding-type tag the row decoder must use for this index.
    #[must_use]
    pub const fn encoding(&self) -> KeyEncoding {
        if self.primary {
            KeyEncoding::Primary
        } else {
            KeyEncoding::Secondary
        }
    }

    /// The column an inverted index decomposes: its last key column.
    /// `None` for forward indexes.
    #[must_use]
    pub fn inverted_column_id(&self) -> Option<ColumnId> {
        match self.kind {
            IndexKind::Inverted => self.key_column_ids.last().copied(),
            IndexKind::Forward => None,
        }
    }

    /// The key kind an inverted column decodes as.
    ///
    /// Decomposed container elements are stored as opaque ordered bytes,
    /// regardless of the column's declared kind.
    #[must_use]
    pub const fn inverted_column_key_kind(&self) -> ColumnKind {
        ColumnKind::Bytes
    }
}

impl Display for IndexDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids = self
            .key_column_ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        if self.unique {
            write!(f, "UNIQUE {}({ids})", self.name)
        } else {
            write!(f, "{}({ids})", self.name)
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_index_uses_primary_encoding() {
        let index = IndexDescriptor::primary("pk", IndexId(1), vec![ColumnId(1)]);
        assert_eq!(index.encoding(), KeyEncoding::Primary);
        assert!(index.unique);
    }

    #[test]
    fn secondary_index_uses_secondary_encoding() {
        let index = IndexDescriptor::new("by_name", IndexId(2), vec![ColumnId(2)]);
        assert_eq!(index.encoding(), KeyEncoding::Secondary);
        assert!(!index.unique);
    }

    #[test]
    fn inverted_column_is_last_key_column() {
        let index =
            IndexDescriptor::new("by_tags", IndexId(3), vec![ColumnId(2), ColumnId(4)]).inverted();
        assert_eq!(index.inverted_column_id(), Some(ColumnId(4)));
        assert_eq!(index.inverted_column_key_kind(), ColumnKind::Bytes);
    }

    #[test]
    fn forward_index_has_no_inverted_column() {
        let index = IndexDescriptor::new("by_name", IndexId(2), vec![ColumnId(2)]);
        assert_eq!(index.inverted_column_id(), None);
    }

    #[test]
    fn new_defaults_directions_to_ascending() {
        let index = IndexDescriptor::new("by_ab", IndexId(4), vec![ColumnId(1), ColumnId(2)]);
        assert_eq!(
            index.key_column_directions,
            vec![SortDirection::Asc, SortDirection::Asc]
        );
    }
}
