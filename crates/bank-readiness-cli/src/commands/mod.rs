pub mod assessment;
pub mod catalog;

use log::info;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

use bank_readiness_core::bank_readiness::catalog::{BankCatalog, BankProfile};
use bank_readiness_core::bank_readiness::engine::BankReadinessEngine;

use crate::input;

/// Flags shared by every subcommand.
pub struct GlobalOptions {
    pub catalog: Option<String>,
    pub strict: bool,
}

/// Engine over the built-in catalog, or over `--catalog <file>` when given.
pub fn load_engine(opts: &GlobalOptions) -> Result<BankReadinessEngine, Box<dyn std::error::Error>> {
    match opts.catalog {
        Some(ref path) => {
            let banks: Vec<BankProfile> = input::file::read_document(path)?;
            let catalog = BankCatalog::from_profiles(banks)?;
            info!("loaded {} bank(s) from {}", catalog.len(), path);
            Ok(BankReadinessEngine::new(Arc::new(catalog)))
        }
        None => Ok(BankReadinessEngine::default()),
    }
}

/// Parse a flag value through the type's serde names, so `free-zone`,
/// `Freezone` and `freezone` all land on the same variant.
pub fn parse_choice<T: DeserializeOwned>(
    flag: &str,
    raw: &str,
) -> Result<T, Box<dyn std::error::Error>> {
    let normalized = raw.trim().to_lowercase().replace(['-', ' '], "_");
    let normalized = match normalized.as_str() {
        "free_zone" => "freezone".to_string(),
        _ => normalized,
    };
    let parsed = serde_json::from_value(Value::String(normalized))
        .map_err(|e| format!("invalid value '{}' for --{}: {}", raw, flag, e))?;
    Ok(parsed)
}
