//! ## Crate layout
//! - `core`: catalog capability traits, runtime descriptors, the key-prefix
//!   codec, the fetch-spec builder, and observability counters.
//!
//! The `prelude` module mirrors the surface a query planner or row decoder
//! integration uses; error and wire-format types stay one level down under
//! `core::error` and `core::serialize`.

pub use rowfetch_core as core;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use rowfetch_core::error::InternalError as Error;

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::prelude::*;
}
