//! Built-in pluggable services.
//!
//! These are registered in [`ServiceCatalog::with_builtins`](crate::core::ServiceCatalog::with_builtins)
//! and resolved by name from the options.

pub mod cache;
pub mod comparator;
pub mod highlight;
pub mod hydrator;
pub mod logger;
pub mod metadata;
pub mod naming;

pub use cache::{FileCacheAdapter, MemoryCacheAdapter, NullCacheAdapter};
pub use comparator::EntityComparator;
pub use highlight::{colors_enabled, KeywordHighlighter, NullHighlighter};
pub use hydrator::ObjectHydrator;
pub use logger::{default_writer, DefaultLogger};
pub use metadata::{ReflectMetadataProvider, StaticMetadataProvider};
pub use naming::{EntityCaseNamingStrategy, MongoNamingStrategy, UnderscoreNamingStrategy};
