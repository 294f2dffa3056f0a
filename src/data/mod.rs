/// Data layer: core types, file resolution, loading, and filtering.
///
/// Architecture:
/// ```text
///  export directory (network share)
///        │
///        ▼
///   ┌──────────┐
///   │ resolver  │  newest file matching PREFIX_*.EXT
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → ProviderTable (all fields text)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  substring query + search mode → matching row indices
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod resolver;
