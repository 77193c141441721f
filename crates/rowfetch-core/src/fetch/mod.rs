//! Module: fetch
//! Responsibility: the index fetch specification record and its builder.
//! Does not own: catalog metadata, key-prefix encoding, or row decoding.
//! Boundary: the filled [`IndexFetchSpec`] is the entire contract with the
//! downstream key-value row decoder; it must be consumable without catalog
//! access.

mod build;

#[cfg(test)]
mod tests;

pub use build::init_index_fetch_spec;

use crate::{
    catalog::{ColumnKind, KeyEncoding, SortDirection},
    error::InternalError,
    serialize::{self, SerializeError},
    types::{ColumnId, FamilyId, TableId},
};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Version tag of the initial [`IndexFetchSpec`] field layout. Bumped when
/// the record's field layout changes in a way decoders must detect.
pub const INDEX_FETCH_SPEC_VERSION_INITIAL: u32 = 1;

/// Upper bound on a serialized spec payload. Specs scale with column count,
/// not row data; anything larger is corrupt.
pub const MAX_SPEC_BYTES: usize = 1 << 20;

///
/// IndexFetchSpec
///
/// Flat, serializable description of which columns to read from one
/// index's key-value encoding and how to interpret them. Long-lived and
/// rebuilt in place: [`init_index_fetch_spec`] overwrites every field and
/// reuses the growable buffers' capacity across builds.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct IndexFetchSpec {
    pub version: u32,

    pub table_name: String,
    pub table_id: TableId,
    pub index_name: String,

    pub is_secondary_index: bool,
    pub is_unique_index: bool,
    pub encoding: KeyEncoding,

    /// Number of key-suffix columns appended to the index key.
    pub num_key_suffix_columns: u32,

    /// Maximum physical key-value pairs one logical row produces.
    pub max_keys_per_row: u32,

    /// Byte length of the key prefix shared by every row of this index.
    pub key_prefix_length: u32,

    /// Maximum family id across all of the table's families, whether or
    /// not they declare a default column.
    pub max_family_id: FamilyId,

    /// One entry per family declaring a default column, in
    /// family-declaration order.
    pub family_default_columns: Vec<FamilyDefaultColumn>,

    /// Index key columns plus key-suffix columns, in key order.
    pub key_and_suffix_columns: Vec<KeyColumn>,

    /// One entry per requested column id, in request order.
    pub fetched_columns: Vec<FetchColumn>,
}

impl IndexFetchSpec {
    /// Serialize into the workspace wire format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, InternalError> {
        serialize::serialize(self).map_err(InternalError::from)
    }

    /// Decode a spec produced by [`Self::to_bytes`].
    ///
    /// Payloads beyond [`MAX_SPEC_BYTES`] and undecodable payloads classify
    /// as corruption: specs only travel between trusted components.
    pub fn try_from_bytes(bytes: &[u8]) -> Result<Self, InternalError> {
        serialize::deserialize_bounded(bytes, MAX_SPEC_BYTES).map_err(map_decode_error)
    }
}

impl Display for IndexFetchSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{} ({} fetched)",
            self.table_name,
            self.index_name,
            self.fetched_columns.len()
        )
    }
}

// Convert format-level decode errors into spec-boundary classification.
fn map_decode_error(source: SerializeError) -> InternalError {
    InternalError::serialize_corruption(format!("index fetch spec decode failed: {source}"))
}

///
/// FetchColumn
///
/// Everything the row decoder needs to know about one column it reads.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FetchColumn {
    pub name: String,
    pub column_id: ColumnId,

    /// Value kind the decoder materializes. For an inverted index's
    /// inverted column this is the index's key kind, not the column's
    /// declared kind.
    pub kind: ColumnKind,

    /// True only if the column is declared non-nullable and is in the
    /// public schema state.
    pub is_non_nullable: bool,
}

///
/// KeyColumn
///
/// A [`FetchColumn`] in key position, paired with its sort direction.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct KeyColumn {
    pub column: FetchColumn,
    pub direction: SortDirection,
}

///
/// FamilyDefaultColumn
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FamilyDefaultColumn {
    pub family_id: FamilyId,
    pub default_column_id: ColumnId,
}
