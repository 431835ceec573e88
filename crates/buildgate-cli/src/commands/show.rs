// Rust guideline compliant 2026-10-16

//! Implementation of the `bgate show` command.

use anyhow::Result;
use buildgate_core::{BuildNumberFile, Config};
use std::path::Path;

/// Prints the current build number.
///
/// # Arguments
///
/// * `root` - Repository work-tree root
/// * `json` - Emit a JSON object instead of plain text
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the version file has
/// no readable build number.
pub fn execute(root: &Path, json: bool) -> Result<()> {
    let config = Config::load(root)?;
    let file = BuildNumberFile::new(root.join(&config.version_file), config.build_key.clone());
    let build = file.read()?;

    if json {
        let value = serde_json::json!({
            "version_file": config.version_file.display().to_string(),
            "build_key": config.build_key,
            "build": build,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{} = {}", config.build_key, build);
    }

    Ok(())
}
