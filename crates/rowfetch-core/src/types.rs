//! Copy-sized identifier newtypes shared across catalog, codec, and fetch
//! layers. Identifiers are opaque: ordering is numeric and carries no
//! schema meaning.

use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// TableId
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd,
    Serialize,
)]
pub struct TableId(pub u32);

///
/// IndexId
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd,
    Serialize,
)]
pub struct IndexId(pub u32);

///
/// ColumnId
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd,
    Serialize,
)]
pub struct ColumnId(pub u32);

///
/// FamilyId
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd,
    Serialize,
)]
pub struct FamilyId(pub u32);

///
/// TenantId
///
/// Namespace component of the key codec. Tenant zero is the system tenant
/// and encodes with an empty prefix.
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd,
    Serialize,
)]
pub struct TenantId(pub u64);
