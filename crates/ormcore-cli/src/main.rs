//! ormcore CLI - inspect ORM configurations.

use clap::{Parser, Subcommand};
use ormcore::config::defaults;
use ormcore::{ConfigLoader, Configuration, OrmError, PlatformRegistry, PLATFORMS};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "ormcore")]
#[command(about = "Inspect ORM configurations and platform drivers")]
#[command(version)]
struct Cli {
    /// Path to YAML configuration file (ORM_* environment variables override it)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip validation of the options
    #[arg(long)]
    no_validate: bool,

    /// Log format: text or json
    #[arg(long, default_value = "text")]
    log_format: String,

    /// Log verbosity: debug, info, warn, error
    #[arg(long, default_value = "info")]
    verbosity: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the configuration and print what was resolved
    Debug {
        /// Print the resolved option tree as JSON
        #[arg(long)]
        json: bool,
    },

    /// List supported platforms and whether their drivers are available
    Platforms,

    /// Print the option defaults as YAML
    Defaults,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.format_detailed());
            ExitCode::from(e.exit_code())
        }
    }
}

fn run() -> Result<(), OrmError> {
    let cli = Cli::parse();

    setup_logging(&cli.verbosity, &cli.log_format).map_err(OrmError::Config)?;

    match cli.command {
        Commands::Platforms => {
            print_platforms();
            Ok(())
        }
        Commands::Defaults => {
            print!("{}", serde_yaml::to_string(defaults::table())?);
            Ok(())
        }
        Commands::Debug { json } => {
            let options = ConfigLoader::load(cli.config.as_ref(), std::env::vars())?;
            if let Some(path) = &cli.config {
                info!("Loaded configuration from {:?}", path);
            }
            let config = Configuration::new(options, !cli.no_validate)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&masked_tree(&config)?)?);
            } else {
                print_summary(&config)?;
            }
            Ok(())
        }
    }
}

fn print_platforms() {
    println!("{:<15} {:<20} {:<24} AVAILABLE", "TYPE", "DRIVER", "PACKAGE");
    for descriptor in PLATFORMS {
        let available = if PlatformRegistry::is_available(descriptor.tag) {
            "yes"
        } else {
            "no"
        };
        println!(
            "{:<15} {:<20} {:<24} {}",
            descriptor.tag, descriptor.driver_class, descriptor.package, available
        );
    }
}

fn print_summary(config: &Configuration) -> Result<(), OrmError> {
    let options = config.get_all();
    let platform = config.get_platform();
    let naming = options
        .naming_strategy
        .clone()
        .unwrap_or_else(|| platform.naming_strategy().to_string());
    let cache_state = if options.cache.enabled.unwrap_or(false) {
        "enabled"
    } else {
        "disabled"
    };
    let entities = if options.entities.is_empty() {
        "-".to_string()
    } else {
        options.entities.join(", ")
    };

    println!("Platform:        {} ({})", platform.name(), config.get_driver().name());
    println!("Client URL:      {}", config.get_client_url(true)?);
    println!("Database:        {}", options.db_name.as_deref().unwrap_or("-"));
    println!("Base dir:        {}", config.base_dir().display());
    println!("Entities:        {}", entities);
    println!(
        "Migrations:      {}",
        with_marker(config.base_dir(), &options.migrations.path)
    );
    println!("Seeders:         {}", with_marker(config.base_dir(), &options.seeder.path));
    println!("Metadata cache:  {} ({})", options.cache.adapter, cache_state);
    println!(
        "Result cache:    {} ({} ms)",
        options.result_cache.adapter, options.result_cache.expiration
    );
    println!("Naming strategy: {}", naming);
    println!("Fingerprint:     {}", config.fingerprint());
    Ok(())
}

fn with_marker(base_dir: &Path, path: &str) -> String {
    let marker = if base_dir.join(path).is_dir() {
        "found"
    } else {
        "missing"
    };
    format!("{} [{}]", path, marker)
}

/// Resolved options with credentials hidden.
fn masked_tree(config: &Configuration) -> Result<Value, OrmError> {
    let mut tree = serde_json::to_value(config.get_all())?;
    if let Some(object) = tree.as_object_mut() {
        object.insert("client_url".into(), Value::from(config.get_client_url(true)?));
        mask_password(object);
        if let Some(Value::Array(replicas)) = object.get_mut("replicas") {
            for replica in replicas.iter_mut().filter_map(Value::as_object_mut) {
                mask_password(replica);
            }
        }
    }
    Ok(tree)
}

fn mask_password(object: &mut serde_json::Map<String, Value>) {
    if object.get("password").is_some_and(|p| !p.is_null()) {
        object.insert("password".into(), Value::from("*****"));
    }
}

fn setup_logging(verbosity: &str, format: &str) -> Result<(), String> {
    let level = match verbosity.to_lowercase().as_str() {
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false);

    if format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    Ok(())
}
