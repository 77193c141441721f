use crate::{
    catalog::{CatalogColumn, CatalogIndex, CatalogTable, IndexKind},
    codec::KeyPrefixCodec,
    error::InternalError,
    fetch::{FamilyDefaultColumn, FetchColumn, INDEX_FETCH_SPEC_VERSION_INITIAL, IndexFetchSpec},
    obs::{self, MetricsEvent},
    types::ColumnId,
};
use std::mem;

/// Fill in an [`IndexFetchSpec`] for the given index and fetch columns.
/// All fields are reinitialized; the growable buffers are reused if they
/// have enough capacity.
///
/// The fetch columns are assumed to be available in the index, and
/// `fetch_column_ids` is assumed non-empty; duplicates and arbitrary order
/// are permitted and preserved. If the index is inverted and the inverted
/// column is fetched, the corresponding [`FetchColumn`] carries the
/// inverted key kind.
///
/// On failure the record is left partially overwritten; construction is
/// not transactional.
#[expect(clippy::cast_possible_truncation)]
pub fn init_index_fetch_spec<T, C>(
    spec: &mut IndexFetchSpec,
    codec: &C,
    table: &T,
    index: &T::Index,
    fetch_column_ids: &[ColumnId],
) -> Result<(), InternalError>
where
    T: CatalogTable + ?Sized,
    C: KeyPrefixCodec + ?Sized,
{
    let old_fetched = mem::take(&mut spec.fetched_columns);
    let old_families = mem::take(&mut spec.family_default_columns);
    let fetched_buffer_reused = old_fetched.capacity() >= fetch_column_ids.len();

    *spec = IndexFetchSpec {
        version: INDEX_FETCH_SPEC_VERSION_INITIAL,
        table_name: table.name().to_string(),
        table_id: table.id(),
        index_name: index.name().to_string(),
        is_secondary_index: !index.is_primary(),
        is_unique_index: index.is_unique(),
        encoding: index.encoding(),
        num_key_suffix_columns: index.num_key_suffix_columns() as u32,
        ..IndexFetchSpec::default()
    };

    spec.max_keys_per_row = table.index_keys_per_row(index);

    // Measured from the bytes the codec actually writes; must equal the
    // length of every real key of this index up to the key columns.
    spec.key_prefix_length = codec.index_key_prefix(table.id(), index.id()).len() as u32;

    let mut family_defaults = old_families;
    family_defaults.clear();
    for family in table.families() {
        if let Some(default_column_id) = family.default_column {
            family_defaults.push(FamilyDefaultColumn {
                family_id: family.id,
                default_column_id,
            });
        }
        if family.id > spec.max_family_id {
            spec.max_family_id = family.id;
        }
    }
    spec.family_default_columns = family_defaults;

    spec.key_and_suffix_columns = table.key_and_suffix_columns(index)?;

    let inverted_column_id = match index.kind() {
        IndexKind::Inverted => index.inverted_column_id(),
        IndexKind::Forward => None,
    };

    spec.fetched_columns = old_fetched;
    spec.fetched_columns.clear();
    spec.fetched_columns.reserve(fetch_column_ids.len());
    for &column_id in fetch_column_ids {
        let column = table.column_by_id(column_id)?;
        let kind = if inverted_column_id == Some(column_id) {
            index.inverted_column_key_kind()
        } else {
            column.kind().clone()
        };

        spec.fetched_columns.push(FetchColumn {
            name: column.name().to_string(),
            column_id,
            kind,
            is_non_nullable: !column.is_nullable() && column.is_public(),
        });
    }

    // In debug builds, verify that we aren't trying to fetch columns that
    // are not available in the index.
    #[cfg(debug_assertions)]
    assert_fetched_columns_available(spec, index);

    obs::sink::record(MetricsEvent::SpecBuild {
        fetched_columns: spec.fetched_columns.len() as u64,
        fetched_buffer_reused,
    });

    Ok(())
}

/// A secondary index can only produce its key, stored, and key-suffix
/// columns; anything else in `fetched_columns` is a caller bug, not bad
/// input data. Release builds skip this entirely.
#[cfg(debug_assertions)]
fn assert_fetched_columns_available<I>(spec: &IndexFetchSpec, index: &I)
where
    I: CatalogIndex + ?Sized,
{
    use std::collections::BTreeSet;

    if !spec.is_secondary_index {
        return;
    }

    let mut available: BTreeSet<ColumnId> = index.key_column_ids().iter().copied().collect();
    available.extend(index.stored_column_ids().iter().copied());
    available.extend(index.key_suffix_column_ids().iter().copied());

    for column in &spec.fetched_columns {
        assert!(
            available.contains(&column.column_id),
            "requested column {} not available in index {}",
            column.name,
            spec.index_name
        );
    }
}
