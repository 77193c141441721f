use crate::{
    catalog::{CatalogTable, ColumnKind, KeyEncoding, TableDescriptor},
    codec::{KeyCodec, KeyPrefixCodec},
    error::{ErrorClass, ErrorOrigin},
    fetch::{
        FamilyDefaultColumn, INDEX_FETCH_SPEC_VERSION_INITIAL, IndexFetchSpec, MAX_SPEC_BYTES,
        init_index_fetch_spec,
    },
    obs,
    test_support,
    types::{ColumnId, FamilyId},
};
use proptest::prelude::*;

fn build(table: &TableDescriptor, index_pos: usize, ids: &[ColumnId]) -> IndexFetchSpec {
    let mut spec = IndexFetchSpec::default();
    build_into(&mut spec, table, index_pos, ids);
    spec
}

fn build_into(spec: &mut IndexFetchSpec, table: &TableDescriptor, index_pos: usize, ids: &[ColumnId]) {
    let index = table.indexes[index_pos].clone();
    init_index_fetch_spec(spec, &KeyCodec::system(), table, &index, ids).unwrap();
}

#[test]
fn fetched_columns_match_request_order_and_ids() {
    let table = test_support::bank_table();
    let ids = [ColumnId(3), ColumnId(1), ColumnId(3)];

    let spec = build(&table, 0, &ids);

    assert_eq!(spec.fetched_columns.len(), ids.len());
    for (column, &requested) in spec.fetched_columns.iter().zip(&ids) {
        assert_eq!(column.column_id, requested);
    }
    assert_eq!(spec.fetched_columns[0].name, "balance");
    assert_eq!(spec.fetched_columns[1].name, "id");
}

#[test]
fn scalar_fields_reflect_table_and_index() {
    let table = test_support::bank_table();
    let spec = build(&table, 1, &[ColumnId(2), ColumnId(3)]);

    assert_eq!(spec.version, INDEX_FETCH_SPEC_VERSION_INITIAL);
    assert_eq!(spec.table_name, "bank");
    assert_eq!(spec.table_id, table.id);
    assert_eq!(spec.index_name, "bank_name_idx");
    assert!(spec.is_secondary_index);
    assert!(!spec.is_unique_index);
    assert_eq!(spec.encoding, KeyEncoding::Secondary);
    assert_eq!(spec.num_key_suffix_columns, 1);
    assert_eq!(spec.max_keys_per_row, 1);
}

#[test]
fn primary_spec_counts_family_keys() {
    let table = test_support::bank_table();
    let spec = build(&table, 0, &[ColumnId(1)]);

    assert!(!spec.is_secondary_index);
    assert!(spec.is_unique_index);
    assert_eq!(spec.encoding, KeyEncoding::Primary);
    assert_eq!(spec.num_key_suffix_columns, 0);
    assert_eq!(spec.max_keys_per_row, 3);
}

#[test]
fn key_prefix_length_matches_codec_output() {
    let table = test_support::bank_table();
    let codec = KeyCodec::system();
    let index = table.indexes[1].clone();

    let mut spec = IndexFetchSpec::default();
    init_index_fetch_spec(&mut spec, &codec, &table, &index, &[ColumnId(2)]).unwrap();

    let prefix = codec.index_key_prefix(table.id, index.id);
    assert_eq!(spec.key_prefix_length as usize, prefix.len());
    assert_eq!(spec.key_prefix_length as usize, codec.prefix_len(table.id, index.id));
}

#[test]
fn family_defaults_in_declaration_order() {
    let table = test_support::bank_table();
    let spec = build(&table, 0, &[ColumnId(1)]);

    assert_eq!(
        spec.family_default_columns,
        vec![FamilyDefaultColumn {
            family_id: FamilyId(1),
            default_column_id: ColumnId(3),
        }]
    );
}

#[test]
fn max_family_id_covers_families_without_defaults() {
    let table = test_support::bank_table();
    let spec = build(&table, 0, &[ColumnId(1)]);

    // Family 7 declares no default column but still owns the maximum id.
    assert_eq!(spec.max_family_id, FamilyId(7));
}

#[test]
fn key_and_suffix_columns_copied_from_table() {
    let table = test_support::bank_table();
    let index = table.indexes[1].clone();
    let spec = build(&table, 1, &[ColumnId(2)]);

    let expected = table.key_and_suffix_columns(&index).unwrap();
    assert_eq!(spec.key_and_suffix_columns, expected);
}

#[test]
fn inverted_column_fetch_carries_key_kind() {
    let table = test_support::bank_table();
    let spec = build(&table, 2, &[ColumnId(4), ColumnId(1)]);

    assert_eq!(spec.fetched_columns[0].kind, ColumnKind::Bytes);
    assert_eq!(spec.fetched_columns[1].kind, ColumnKind::Uint);
}

#[test]
fn inverted_column_keeps_declared_kind_through_other_indexes() {
    let table = test_support::bank_table();
    let spec = build(&table, 0, &[ColumnId(4)]);

    assert_eq!(
        spec.fetched_columns[0].kind,
        ColumnKind::Set(Box::new(ColumnKind::Text))
    );
}

#[test]
fn non_nullability_requires_public_state() {
    let table = test_support::bank_table();
    let spec = build(&table, 0, &[ColumnId(1), ColumnId(3), ColumnId(5)]);

    // id: declared non-nullable, public.
    assert!(spec.fetched_columns[0].is_non_nullable);
    // balance: nullable.
    assert!(!spec.fetched_columns[1].is_non_nullable);
    // memo: declared non-nullable but still mutating.
    assert!(!spec.fetched_columns[2].is_non_nullable);
}

#[test]
fn rebuild_equals_fresh_build() {
    let table = test_support::bank_table();
    let ids = [ColumnId(2), ColumnId(3), ColumnId(1)];

    let mut reused = IndexFetchSpec::default();
    build_into(&mut reused, &table, 1, &ids);
    build_into(&mut reused, &table, 1, &ids);

    let fresh = build(&table, 1, &ids);
    assert_eq!(reused, fresh);
}

#[test]
fn rebuild_across_indexes_fully_overwrites() {
    let table = test_support::bank_table();

    let mut spec = IndexFetchSpec::default();
    build_into(&mut spec, &table, 1, &[ColumnId(2), ColumnId(3), ColumnId(1)]);
    build_into(&mut spec, &table, 0, &[ColumnId(1)]);

    let fresh = build(&table, 0, &[ColumnId(1)]);
    assert_eq!(spec, fresh);
}

#[test]
fn shrinking_rebuild_reuses_fetched_buffer() {
    let table = test_support::bank_table();

    let mut spec = IndexFetchSpec::default();
    build_into(&mut spec, &table, 0, &[ColumnId(1), ColumnId(2), ColumnId(3)]);

    let ptr = spec.fetched_columns.as_ptr();
    let capacity = spec.fetched_columns.capacity();

    build_into(&mut spec, &table, 0, &[ColumnId(2), ColumnId(3)]);

    assert_eq!(spec.fetched_columns.len(), 2);
    assert_eq!(spec.fetched_columns.as_ptr(), ptr);
    assert_eq!(spec.fetched_columns.capacity(), capacity);
}

#[test]
fn unknown_column_id_fails_with_not_found() {
    let table = test_support::bank_table();
    let index = table.indexes[0].clone();

    let mut spec = IndexFetchSpec::default();
    let err = init_index_fetch_spec(
        &mut spec,
        &KeyCodec::system(),
        &table,
        &index,
        &[ColumnId(1), ColumnId(1000)],
    )
    .expect_err("unassigned column id must not silently succeed");

    assert!(err.is_not_found());
    assert_eq!(err.class, ErrorClass::NotFound);
    assert_eq!(err.origin, ErrorOrigin::Catalog);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "not available in index")]
fn secondary_index_rejects_unavailable_column() {
    let table = test_support::bank_table();
    // tags (4) exists on the table but the by-name index cannot produce it.
    let _ = build(&table, 1, &[ColumnId(4)]);
}

#[test]
fn primary_index_skips_availability_check() {
    let table = test_support::bank_table();
    // Same membership situation as the secondary case: tags (4) is in none
    // of the primary index's column lists. Primary encoding carries every
    // family, so the build must succeed.
    let spec = build(&table, 0, &[ColumnId(4)]);
    assert_eq!(spec.fetched_columns[0].column_id, ColumnId(4));
}

#[test]
fn wire_roundtrip_preserves_spec() {
    let table = test_support::bank_table();
    let spec = build(&table, 1, &[ColumnId(2), ColumnId(3)]);

    let bytes = spec.to_bytes().unwrap();
    let decoded = IndexFetchSpec::try_from_bytes(&bytes).unwrap();
    assert_eq!(spec, decoded);
}

#[test]
fn wire_field_names_are_stable() {
    let table = test_support::bank_table();
    let spec = build(&table, 1, &[ColumnId(2)]);

    // Decoders key on these names; renames are a version bump.
    let json = serde_json::to_value(&spec).unwrap();
    assert_eq!(json["version"], 1u64);
    assert_eq!(json["table_name"], "bank");
    assert_eq!(json["index_name"], "bank_name_idx");
    assert!(json["fetched_columns"].is_array());
    assert!(json["key_and_suffix_columns"].is_array());
    assert!(json["family_default_columns"].is_array());
}

#[test]
fn oversized_wire_payload_is_corruption() {
    let bytes = vec![0u8; MAX_SPEC_BYTES + 1];
    let err = IndexFetchSpec::try_from_bytes(&bytes).expect_err("oversized payload must fail");

    assert_eq!(err.class, ErrorClass::Corruption);
    assert_eq!(err.origin, ErrorOrigin::Serialize);
    assert!(
        err.message.contains("index fetch spec decode failed"),
        "unexpected error: {err:?}"
    );
}

#[test]
fn builds_are_observable() {
    let table = test_support::bank_table();

    obs::metrics_reset();

    let mut spec = IndexFetchSpec::default();
    build_into(&mut spec, &table, 0, &[ColumnId(1), ColumnId(2)]);
    build_into(&mut spec, &table, 0, &[ColumnId(3)]);

    let report = obs::metrics_report();
    assert_eq!(report.spec_builds, 2);
    assert_eq!(report.fetched_columns, 3);
    // Only the second build found a warm buffer.
    assert_eq!(report.fetched_buffer_reuses, 1);
}

proptest! {
    #[test]
    fn request_order_is_always_preserved(
        ids in proptest::collection::vec(1u32..=5, 1..8)
    ) {
        let table = test_support::bank_table();
        let ids: Vec<ColumnId> = ids.into_iter().map(ColumnId).collect();

        let spec = build(&table, 0, &ids);

        prop_assert_eq!(spec.fetched_columns.len(), ids.len());
        for (column, requested) in spec.fetched_columns.iter().zip(&ids) {
            prop_assert_eq!(column.column_id, *requested);
        }
    }
}
