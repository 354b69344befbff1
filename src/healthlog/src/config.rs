use std::path::Path;

use anyhow::Context;
use healthlog_algos::WeightTables;

/// Reads weight overrides from `path`, or returns the built-in tables.
pub fn load_weight_tables(path: Option<&Path>) -> anyhow::Result<WeightTables> {
    let Some(path) = path else {
        debug!("using built-in weight tables");
        return Ok(WeightTables::default());
    };

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read weight tables {}", path.display()))?;
    let tables = WeightTables::from_json(&json)
        .with_context(|| format!("invalid weight tables in {}", path.display()))?;

    info!(
        "loaded weight tables from {} ({} symptoms, {} diagnoses)",
        path.display(),
        tables.symptoms.len(),
        tables.diagnoses.len()
    );
    Ok(tables)
}

/// Loads the tables and makes them the process-wide configuration. Call once
/// at startup.
pub fn install_weight_tables(path: Option<&Path>) -> anyhow::Result<()> {
    let tables = load_weight_tables(path)?;
    WeightTables::install(tables)?;
    Ok(())
}
