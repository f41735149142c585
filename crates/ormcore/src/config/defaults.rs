//! Option Defaults Table.
//!
//! The `Default` impls of the option schema are the single source of default
//! values. [`table`] exposes them as a nested JSON tree, which is what user
//! options are merged over and what [`Configuration::reset`] restores from.
//!
//! [`Configuration::reset`]: super::Configuration::reset

use std::path::PathBuf;
use std::sync::LazyLock;

use serde_json::{Map, Value};

use super::types::*;

/// Default migrations directory, relative to `base_dir`.
pub const DEFAULT_MIGRATIONS_PATH: &str = "./migrations";

/// Default seeders directory, relative to `base_dir`.
pub const DEFAULT_SEEDERS_PATH: &str = "./seeders";

/// Default metadata cache directory, relative to `base_dir`.
pub const DEFAULT_CACHE_DIR: &str = "temp";

static DEFAULTS: LazyLock<Value> =
    LazyLock::new(|| serde_json::to_value(ConfigurationOptions::default()).unwrap_or_default());

/// The defaults as a nested tree. Unset optional values appear as `null`.
pub fn table() -> &'static Value {
    &DEFAULTS
}

impl Default for ConfigurationOptions {
    fn default() -> Self {
        Self {
            r#type: None,
            db_name: None,
            client_url: None,
            host: None,
            port: None,
            user: None,
            password: None,
            schema: None,
            charset: None,
            timezone: None,
            base_dir: PathBuf::from("."),
            entities: Vec::new(),
            entities_ts: Vec::new(),
            replicas: Vec::new(),
            prefer_read_replicas: true,
            pool: Map::new(),
            driver_options: Map::new(),
            filters: Default::default(),
            strict: false,
            validate: false,
            validate_required: true,
            context_name: "default".to_string(),
            allow_global_context: false,
            colors: true,
            flush_mode: FlushMode::Auto,
            load_strategy: LoadStrategy::Joined,
            dataloader: DataloaderType::None,
            populate_where: PopulateWhere::All,
            connect: true,
            ignore_undefined_in_query: false,
            auto_join_one_to_one_owner: true,
            auto_join_refs_for_filters: true,
            propagation_on_prototype: true,
            populate_after_flush: true,
            persist_on_create: true,
            upsert_managed: true,
            force_entity_constructor: false,
            force_undefined: false,
            force_utc_timezone: false,
            ensure_database: true,
            ensure_indexes: false,
            debug: DebugMode::Enabled(false),
            ignore_deprecations: false,
            verbose: false,
            batch_size: 300,
            implicit_transactions: None,
            entity_repository: None,
            naming_strategy: None,
            hydrator: "object".to_string(),
            metadata_provider: "reflect".to_string(),
            serialization: SerializationOptions::default(),
            assign: AssignOptions::default(),
            embeddables: EmbeddablesOptions::default(),
            discovery: DiscoveryOptions::default(),
            migrations: MigrationsOptions::default(),
            seeder: SeederOptions::default(),
            schema_generator: SchemaGeneratorOptions::default(),
            entity_generator: EntityGeneratorOptions::default(),
            cache: MetadataCacheOptions::default(),
            result_cache: ResultCacheOptions::default(),
        }
    }
}

impl Default for SerializationOptions {
    fn default() -> Self {
        Self {
            include_primary_keys: true,
            force_object: false,
        }
    }
}

impl Default for AssignOptions {
    fn default() -> Self {
        Self {
            update_nested_entities: true,
            update_by_primary_key: true,
            merge_object_properties: false,
            merge_embedded_properties: true,
        }
    }
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            warn_when_no_entities: true,
            require_entities_array: false,
            check_duplicate_table_names: true,
            check_duplicate_field_names: true,
            check_duplicate_entities: true,
            check_non_persistent_composite_props: true,
            always_analyse_properties: true,
            disable_dynamic_file_access: false,
            infer_default_values: true,
        }
    }
}

impl Default for MigrationsOptions {
    fn default() -> Self {
        Self {
            table_name: "orm_migrations".to_string(),
            path: DEFAULT_MIGRATIONS_PATH.to_string(),
            path_ts: None,
            glob: "*.{rs,sql}".to_string(),
            silent: false,
            transactional: true,
            disable_foreign_keys: false,
            all_or_nothing: true,
            drop_tables: true,
            safe: false,
            snapshot: true,
            snapshot_name: None,
            emit: EmitKind::Sql,
        }
    }
}

impl Default for SeederOptions {
    fn default() -> Self {
        Self {
            path: DEFAULT_SEEDERS_PATH.to_string(),
            path_ts: None,
            default_seeder: "DatabaseSeeder".to_string(),
            glob: "*.{rs,sql}".to_string(),
            emit: EmitKind::Sql,
        }
    }
}

impl Default for SchemaGeneratorOptions {
    fn default() -> Self {
        Self {
            disable_foreign_keys: false,
            create_foreign_key_constraints: true,
            ignore_schema: Vec::new(),
        }
    }
}

impl Default for EntityGeneratorOptions {
    fn default() -> Self {
        Self {
            force_undefined: true,
            undefined_defaults: false,
            bidirectional_relations: false,
            identified_references: false,
            scalar_type_in_decorator: false,
            scalar_properties_for_relations: ScalarPropertiesForRelations::Never,
            only_pure_pivot_tables: false,
            output_pure_pivot_tables: false,
            read_only_pivot_tables: false,
            use_core_base_entity: false,
        }
    }
}

impl Default for MetadataCacheOptions {
    fn default() -> Self {
        let mut options = Map::new();
        options.insert("cache_dir".to_string(), Value::from(DEFAULT_CACHE_DIR));
        Self {
            enabled: None,
            pretty: false,
            adapter: "file".to_string(),
            options,
        }
    }
}

impl Default for ResultCacheOptions {
    fn default() -> Self {
        Self {
            adapter: "memory".to_string(),
            expiration: 1000,
            options: Map::new(),
        }
    }
}
