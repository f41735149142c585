//! Source-folder detection.
//!
//! When the project has a `src` directory, migrations and seeders most
//! likely live under the build output (`dist`, then `build`) at runtime and
//! under `src` when generating. Paths the user set explicitly, and default
//! paths that already exist, are never changed.
//!
//! Every filesystem probe treats an error as "does not exist".

use std::path::Path;

use serde_json::Value;
use tracing::info;

use super::merge;
use super::types::ConfigurationOptions;

/// Adjust `migrations.path`/`path_ts` and `seeder.path`/`path_ts`.
///
/// `user` is the value tree the application supplied, used to tell explicit
/// settings apart from defaults.
pub fn detect_source_folder(user: &Value, options: &mut ConfigurationOptions) {
    let base_dir = options.base_dir.clone();
    if !base_dir.join("src").is_dir() {
        return;
    }

    let preferred = if base_dir.join("dist").is_dir() {
        "./dist"
    } else if base_dir.join("build").is_dir() {
        "./build"
    } else {
        "./src"
    };

    if should_adjust(user, "migrations", &base_dir, &options.migrations.path) {
        options.migrations.path = format!("{preferred}/migrations");
        options.migrations.path_ts = Some("./src/migrations".to_string());
        info!(
            "Detected source folder, migrations path set to {}",
            options.migrations.path
        );
    }

    if should_adjust(user, "seeder", &base_dir, &options.seeder.path) {
        options.seeder.path = format!("{preferred}/seeders");
        options.seeder.path_ts = Some("./src/seeders".to_string());
        info!(
            "Detected source folder, seeders path set to {}",
            options.seeder.path
        );
    }
}

fn should_adjust(user: &Value, domain: &str, base_dir: &Path, current_path: &str) -> bool {
    let explicit = merge::is_provided(user, &format!("{domain}.path"))
        || merge::is_provided(user, &format!("{domain}.path_ts"));
    !explicit && !base_dir.join(current_path).is_dir()
}
