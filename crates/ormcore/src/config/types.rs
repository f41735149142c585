//! Typed option schema.
//!
//! Every struct here deserializes with `#[serde(default)]`, so a partial tree
//! fills the gaps from [`Default`]. The `Default` impls live in
//! [`super::defaults`] and together form the Option Defaults Table.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fully merged option set owned by a [`Configuration`](super::Configuration).
///
/// Connection fields (`db_name`, `client_url`, credentials) may legitimately
/// stay `None` until they are derived during initialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigurationOptions {
    /// Platform tag selecting an entry of the platform registry.
    pub r#type: Option<String>,
    pub db_name: Option<String>,
    pub client_url: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<Secret>,
    pub schema: Option<String>,
    pub charset: Option<String>,
    pub timezone: Option<String>,
    pub base_dir: PathBuf,

    /// Entity sources (paths or globs) for compiled entities.
    pub entities: Vec<String>,
    /// Entity sources used when running from source.
    pub entities_ts: Vec<String>,

    pub replicas: Vec<ReplicaOptions>,
    pub prefer_read_replicas: bool,
    /// Driver specific pool settings, passed through untouched.
    pub pool: Map<String, Value>,
    /// Driver specific options, passed through untouched.
    pub driver_options: Map<String, Value>,
    pub filters: BTreeMap<String, FilterOptions>,

    pub strict: bool,
    pub validate: bool,
    pub validate_required: bool,
    pub context_name: String,
    pub allow_global_context: bool,
    pub colors: bool,
    pub flush_mode: FlushMode,
    pub load_strategy: LoadStrategy,
    pub dataloader: DataloaderType,
    pub populate_where: PopulateWhere,
    pub connect: bool,
    pub ignore_undefined_in_query: bool,
    pub auto_join_one_to_one_owner: bool,
    pub auto_join_refs_for_filters: bool,
    pub propagation_on_prototype: bool,
    pub populate_after_flush: bool,
    pub persist_on_create: bool,
    pub upsert_managed: bool,
    pub force_entity_constructor: bool,
    pub force_undefined: bool,
    pub force_utc_timezone: bool,
    pub ensure_database: bool,
    pub ensure_indexes: bool,
    pub debug: DebugMode,
    pub ignore_deprecations: bool,
    pub verbose: bool,
    pub batch_size: usize,
    /// Derived from the platform when left unset.
    pub implicit_transactions: Option<bool>,

    /// Repository class used when an entity does not declare its own.
    pub entity_repository: Option<String>,
    /// Naming strategy name; the platform default applies when unset.
    pub naming_strategy: Option<String>,
    pub hydrator: String,
    pub metadata_provider: String,

    pub serialization: SerializationOptions,
    pub assign: AssignOptions,
    pub embeddables: EmbeddablesOptions,
    pub discovery: DiscoveryOptions,
    pub migrations: MigrationsOptions,
    pub seeder: SeederOptions,
    pub schema_generator: SchemaGeneratorOptions,
    pub entity_generator: EntityGeneratorOptions,
    pub cache: MetadataCacheOptions,
    pub result_cache: ResultCacheOptions,
}

/// String that never shows up in `Debug` output.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Access the underlying value.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

/// Read replica connection settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplicaOptions {
    pub name: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<Secret>,
    pub db_name: Option<String>,
    pub client_url: Option<String>,
}

/// Named query filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    /// Filter condition, interpreted by the query layer.
    pub cond: Value,
    /// Whether the filter applies without being requested; `true` when unset.
    pub default: Option<bool>,
    /// Entities the filter is restricted to (all when empty).
    pub entity: Vec<String>,
    /// Whether the filter requires arguments.
    pub args: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlushMode {
    Commit,
    #[default]
    Auto,
    Always,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadStrategy {
    SelectIn,
    #[default]
    Joined,
    Balanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataloaderType {
    #[default]
    None,
    Reference,
    Collection,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PopulateWhere {
    #[default]
    All,
    Infer,
}

/// Logger namespaces that can be toggled through the `debug` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoggerNamespace {
    Query,
    QueryParams,
    Schema,
    Discovery,
    Info,
    Deprecated,
}

impl LoggerNamespace {
    pub const ALL: [LoggerNamespace; 6] = [
        LoggerNamespace::Query,
        LoggerNamespace::QueryParams,
        LoggerNamespace::Schema,
        LoggerNamespace::Discovery,
        LoggerNamespace::Info,
        LoggerNamespace::Deprecated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LoggerNamespace::Query => "query",
            LoggerNamespace::QueryParams => "query-params",
            LoggerNamespace::Schema => "schema",
            LoggerNamespace::Discovery => "discovery",
            LoggerNamespace::Info => "info",
            LoggerNamespace::Deprecated => "deprecated",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|ns| ns.as_str() == value.trim())
    }
}

impl fmt::Display for LoggerNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `debug: true`, `debug: false` or `debug: [query, schema]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DebugMode {
    Enabled(bool),
    Namespaces(Vec<LoggerNamespace>),
}

impl Default for DebugMode {
    fn default() -> Self {
        DebugMode::Enabled(false)
    }
}

impl DebugMode {
    /// Whether messages in `namespace` should be logged.
    pub fn is_enabled(&self, namespace: LoggerNamespace) -> bool {
        match self {
            DebugMode::Enabled(enabled) => *enabled,
            DebugMode::Namespaces(namespaces) => namespaces.contains(&namespace),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializationOptions {
    pub include_primary_keys: bool,
    pub force_object: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignOptions {
    pub update_nested_entities: bool,
    pub update_by_primary_key: bool,
    pub merge_object_properties: bool,
    pub merge_embedded_properties: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrefixMode {
    #[default]
    Absolute,
    Relative,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddablesOptions {
    pub prefix_mode: PrefixMode,
}

/// Entity discovery behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryOptions {
    /// Fail validation when no entity source is configured.
    pub warn_when_no_entities: bool,
    pub require_entities_array: bool,
    pub check_duplicate_table_names: bool,
    pub check_duplicate_field_names: bool,
    pub check_duplicate_entities: bool,
    pub check_non_persistent_composite_props: bool,
    pub always_analyse_properties: bool,
    pub disable_dynamic_file_access: bool,
    pub infer_default_values: bool,
}

/// File flavour produced by generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmitKind {
    #[default]
    Sql,
    Rust,
}

/// Migration runner settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MigrationsOptions {
    pub table_name: String,
    /// Runtime path of migration files, relative to `base_dir`.
    pub path: String,
    /// Source path used when generating migrations.
    pub path_ts: Option<String>,
    pub glob: String,
    pub silent: bool,
    pub transactional: bool,
    pub disable_foreign_keys: bool,
    pub all_or_nothing: bool,
    pub drop_tables: bool,
    pub safe: bool,
    pub snapshot: bool,
    pub snapshot_name: Option<String>,
    pub emit: EmitKind,
}

/// Seeder settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeederOptions {
    pub path: String,
    pub path_ts: Option<String>,
    pub default_seeder: String,
    pub glob: String,
    pub emit: EmitKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaGeneratorOptions {
    pub disable_foreign_keys: bool,
    pub create_foreign_key_constraints: bool,
    pub ignore_schema: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarPropertiesForRelations {
    #[default]
    Never,
    Always,
    Smart,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityGeneratorOptions {
    pub force_undefined: bool,
    pub undefined_defaults: bool,
    pub bidirectional_relations: bool,
    pub identified_references: bool,
    pub scalar_type_in_decorator: bool,
    pub scalar_properties_for_relations: ScalarPropertiesForRelations,
    pub only_pure_pivot_tables: bool,
    pub output_pure_pivot_tables: bool,
    pub read_only_pivot_tables: bool,
    pub use_core_base_entity: bool,
}

/// Metadata cache settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataCacheOptions {
    /// Follows the metadata provider when unset.
    pub enabled: Option<bool>,
    pub pretty: bool,
    /// Cache adapter name in the service catalog.
    pub adapter: String,
    /// Adapter specific options.
    pub options: Map<String, Value>,
}

/// Query result cache settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultCacheOptions {
    pub adapter: String,
    /// Default expiration in milliseconds.
    pub expiration: u64,
    pub options: Map<String, Value>,
}
