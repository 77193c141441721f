use crate::types::ColumnId;
use std::fmt;
use thiserror::Error as ThisError;

///
/// InternalError
///
/// Structured runtime error with a stable internal classification.
/// Not a stable API; intended for internal use and may change without notice.
///

#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct InternalError {
    pub class: ErrorClass,
    pub origin: ErrorOrigin,
    pub message: String,

    /// Optional structured error detail.
    /// The variant (if present) must correspond to `origin`.
    pub detail: Option<ErrorDetail>,
}

impl InternalError {
    /// Construct an InternalError without origin-specific detail.
    pub fn new(class: ErrorClass, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            class,
            origin,
            message: message.into(),
            detail: None,
        }
    }

    /// Construct a catalog-origin not-found error for a missing column id.
    #[must_use]
    pub fn catalog_column_not_found(column_id: ColumnId) -> Self {
        Self {
            class: ErrorClass::NotFound,
            origin: ErrorOrigin::Catalog,
            message: format!("column {column_id} does not exist on the table"),
            detail: Some(ErrorDetail::Catalog(CatalogError::ColumnNotFound {
                column_id,
            })),
        }
    }

    /// Construct a catalog-origin invariant violation.
    pub(crate) fn catalog_invariant(message: impl Into<String>) -> Self {
        Self::new(
            ErrorClass::InvariantViolation,
            ErrorOrigin::Catalog,
            message.into(),
        )
    }

    /// Construct a serialize-origin corruption error.
    pub(crate) fn serialize_corruption(message: impl Into<String>) -> Self {
        Self::new(
            ErrorClass::Corruption,
            ErrorOrigin::Serialize,
            message.into(),
        )
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self.detail,
            Some(ErrorDetail::Catalog(CatalogError::ColumnNotFound { .. }))
        )
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}:{}: {}", self.origin, self.class, self.message)
    }
}

///
/// ErrorDetail
///
/// Structured, origin-specific error detail carried by [`InternalError`].
/// This enum is intentionally extensible.
///

#[derive(Debug, ThisError)]
pub enum ErrorDetail {
    #[error("{0}")]
    Catalog(CatalogError),
}

///
/// CatalogError
///
/// Catalog-specific structured error detail.
/// Never returned directly; always wrapped in [`ErrorDetail::Catalog`].
///

#[derive(Debug, ThisError)]
pub enum CatalogError {
    #[error("column not found: {column_id}")]
    ColumnNotFound { column_id: ColumnId },
}

///
/// ErrorClass
/// Internal error taxonomy for runtime classification.
/// Not a stable API; may change without notice.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    Corruption,
    NotFound,
    Internal,
    InvariantViolation,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Corruption => "corruption",
            Self::NotFound => "not_found",
            Self::Internal => "internal",
            Self::InvariantViolation => "invariant_violation",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorOrigin
/// Internal origin taxonomy for runtime classification.
/// Not a stable API; may change without notice.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorOrigin {
    Catalog,
    Serialize,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Catalog => "catalog",
            Self::Serialize => "serialize",
        };
        write!(f, "{label}")
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_not_found_is_not_found() {
        let err = InternalError::catalog_column_not_found(ColumnId(42));
        assert!(err.is_not_found());
        assert_eq!(err.class, ErrorClass::NotFound);
        assert_eq!(err.origin, ErrorOrigin::Catalog);
        assert!(err.message.contains("42"), "unexpected error: {err:?}");
    }

    #[test]
    fn display_with_class_uses_stable_labels() {
        let err = InternalError::serialize_corruption("payload truncated");
        assert_eq!(
            err.display_with_class(),
            "serialize:corruption: payload truncated"
        );
    }

    #[test]
    fn invariant_violations_are_not_not_found() {
        let err = InternalError::catalog_invariant("duplicate column id");
        assert!(!err.is_not_found());
        assert_eq!(err.class, ErrorClass::InvariantViolation);
    }
}
