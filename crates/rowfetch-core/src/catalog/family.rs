use crate::types::{ColumnId, FamilyId};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

///
/// ColumnFamily
///
/// A group of columns stored together in one key-value pair per logical
/// row. A family may declare a default column: when the family's stored
/// value is a single column, the value bytes belong to that column and the
/// column id is omitted from the encoding.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ColumnFamily {
    pub name: String,
    pub id: FamilyId,
    pub default_column: Option<ColumnId>,
}

impl ColumnFamily {
    pub fn new(name: impl Into<String>, id: FamilyId) -> Self {
        Self {
            name: name.into(),
            id,
            default_column: None,
        }
    }

    /// Declare the family's default column.
    #[must_use]
    pub const fn with_default_column(mut self, column_id: ColumnId) -> Self {
        self.default_column = Some(column_id);
        self
    }
}

impl Display for ColumnFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.default_column {
            Some(column_id) => write!(f, "{} (id {}, default {column_id})", self.name, self.id),
            None => write!(f, "{} (id {})", self.name, self.id),
        }
    }
}
