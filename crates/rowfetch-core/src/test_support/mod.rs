//! Shared synthetic catalog fixtures for unit tests.

use crate::{
    catalog::{
        ColumnDescriptor, ColumnFamily, ColumnKind, ColumnState, IndexDescriptor, TableDescriptor,
    },
    types::{ColumnId, FamilyId, IndexId, TableId},
};

/// A bank accounts table exercising every fact the fetch builder reads:
/// a multi-family layout with one default column and a gap in family ids,
/// a primary index, a storing secondary index with a key suffix, and an
/// inverted index over a container column.
///
/// Column ids: 1 id, 2 name, 3 balance, 4 tags, 5 memo (mutating).
/// Index ids: 1 primary, 2 by-name secondary, 3 tags inverted.
pub(crate) fn bank_table() -> TableDescriptor {
    TableDescriptor::new("bank", TableId(53))
        .with_columns(vec![
            ColumnDescriptor::new("id", ColumnId(1), ColumnKind::Uint).non_nullable(),
            ColumnDescriptor::new("name", ColumnId(2), ColumnKind::Text).non_nullable(),
            ColumnDescriptor::new("balance", ColumnId(3), ColumnKind::Decimal),
            ColumnDescriptor::new(
                "tags",
                ColumnId(4),
                ColumnKind::Set(Box::new(ColumnKind::Text)),
            ),
            ColumnDescriptor::new("memo", ColumnId(5), ColumnKind::Text)
                .non_nullable()
                .with_state(ColumnState::Mutating),
        ])
        .with_families(vec![
            ColumnFamily::new("primary", FamilyId(0)),
            ColumnFamily::new("meta", FamilyId(1)).with_default_column(ColumnId(3)),
            ColumnFamily::new("audit", FamilyId(7)),
        ])
        .with_indexes(vec![
            IndexDescriptor::primary("bank_pkey", IndexId(1), vec![ColumnId(1)]),
            IndexDescriptor::new("bank_name_idx", IndexId(2), vec![ColumnId(2)])
                .storing(vec![ColumnId(3)])
                .with_key_suffix(vec![ColumnId(1)]),
            IndexDescriptor::new("bank_tags_idx", IndexId(3), vec![ColumnId(4)])
                .inverted()
                .with_key_suffix(vec![ColumnId(1)]),
        ])
}
