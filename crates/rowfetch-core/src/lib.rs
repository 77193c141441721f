//! Core runtime for rowfetch: catalog capability traits, the key-prefix
//! codec, and the index fetch specification builder exported via the
//! `prelude`.

// public exports are one module level down
pub mod catalog;
pub mod codec;
pub mod error;
pub mod fetch;
pub mod obs;
pub mod serialize;
pub mod types;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, serializers, or sinks are re-exported here.
///

pub mod prelude {
    pub use crate::{
        catalog::{
            CatalogColumn, CatalogIndex, CatalogTable, ColumnDescriptor, ColumnFamily, ColumnKind,
            ColumnState, IndexDescriptor, IndexKind, KeyEncoding, SortDirection, TableDescriptor,
        },
        codec::{KeyCodec, KeyPrefixCodec},
        fetch::{
            FamilyDefaultColumn, FetchColumn, IndexFetchSpec, KeyColumn, init_index_fetch_spec,
        },
        types::{ColumnId, FamilyId, IndexId, TableId, TenantId},
    };
}
