use crate::types::ColumnId;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

///
/// ColumnKind
///
/// Minimal value-type surface needed by fetch planning and key decoding.
/// This is a lossy projection of full column types: only the facts a
/// key-value row decoder needs survive.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ColumnKind {
    // Scalar primitives
    Bool,
    Bytes,
    Date,
    Decimal,
    Float32,
    Float64,
    Int,
    Json,
    Text,
    Timestamp,
    Uint,
    Uuid,

    // Collections
    List(Box<Self>),
    Set(Box<Self>),
    Map {
        key: Box<Self>,
        value: Box<Self>,
    },
}

impl ColumnKind {
    /// Whether a column of this kind can back an inverted index.
    ///
    /// Inverted indexes decompose container-shaped values into multiple
    /// index keys; scalar kinds cannot be decomposed.
    #[must_use]
    pub const fn is_invertible(&self) -> bool {
        matches!(
            self,
            Self::Json | Self::List(_) | Self::Set(_) | Self::Map { .. }
        )
    }
}

impl Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => write!(f, "bool"),
            Self::Bytes => write!(f, "bytes"),
            Self::Date => write!(f, "date"),
            Self::Decimal => write!(f, "decimal"),
            Self::Float32 => write!(f, "float32"),
            Self::Float64 => write!(f, "float64"),
            Self::Int => write!(f, "int"),
            Self::Json => write!(f, "json"),
            Self::Text => write!(f, "text"),
            Self::Timestamp => write!(f, "timestamp"),
            Self::Uint => write!(f, "uint"),
            Self::Uuid => write!(f, "uuid"),
            Self::List(inner) => write!(f, "list<{inner}>"),
            Self::Set(inner) => write!(f, "set<{inner}>"),
            Self::Map { key, value } => write!(f, "map<{key}, {value}>"),
        }
    }
}

///
/// ColumnState
///
/// Schema lifecycle state of a column. Only `Public` columns participate in
/// non-nullability decisions; mutating and dropped columns are always
/// treated as nullable by readers.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ColumnState {
    Public,
    Mutating,
    Dropped,
}

impl ColumnState {
    #[must_use]
    pub const fn is_public(self) -> bool {
        matches!(self, Self::Public)
    }
}

///
/// ColumnDescriptor
///
/// Runtime descriptor for one table column.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ColumnDescriptor {
    pub name: String,
    pub id: ColumnId,
    pub kind: ColumnKind,
    pub nullable: bool,
    pub state: ColumnState,
}

impl ColumnDescriptor {
    /// Construct a public, nullable column.
    pub fn new(name: impl Into<String>, id: ColumnId, kind: ColumnKind) -> Self {
        Self {
            name: name.into(),
            id,
            kind,
            nullable: true,
            state: ColumnState::Public,
        }
    }

    /// Mark the column as declared non-nullable.
    #[must_use]
    pub const fn non_nullable(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Override the schema lifecycle state.
    #[must_use]
    pub const fn with_state(mut self, state: ColumnState) -> Self {
        self.state = state;
        self
    }
}

///
/// TESTS
///
