use crate::error::ConfigError;
use config::builder::{ConfigBuilder, DefaultState};
use config::{File, FileFormat};
use std::collections::HashSet;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{
    AnnualPnlParams, BasketOrderParams, BlendedMarginParams, BridgeStepParams, CategoryWeights,
    CompetitionParams, Config, DashboardParams, EbitdaBridgeParams, SeasonalParams,
    SimulatorParams, SkuMatrixParams, StandaloneOrderParams, SupplyChainParams,
    UnitEconomicsParams,
};

/// The audited default parameters, compiled into the binary.
pub const DEFAULT_CONFIG: &str = include_str!("../default.toml");

/// Loads the application configuration.
///
/// The embedded defaults are always loaded first. When `path` is given, that TOML file
/// is layered on top, so it only needs to contain the values it changes.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let mut builder = defaults();
    if let Some(path) = path {
        tracing::debug!(path = %path.display(), "Layering configuration file over defaults.");
        builder = builder.add_source(File::from(path));
    }
    finish(builder)
}

fn defaults() -> ConfigBuilder<DefaultState> {
    config::Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
}

fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Config, ConfigError> {
    let config = builder.build()?.try_deserialize::<Config>()?;
    validate(&config)?;
    Ok(config)
}

/// Checks the shape of the tables. Values themselves are trusted.
fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_months("seasonal.months", &config.seasonal.months)?;
    validate_months("dashboard.seasonal", &config.dashboard.seasonal)?;

    for sku in &config.sku_matrix.skus {
        let split = config.sku_matrix.split_for(sku.category).ok_or_else(|| {
            ConfigError::ValidationError(format!(
                "SKU '{}' belongs to category {} which has no volume split",
                sku.name, sku.category
            ))
        })?;
        if split.pack_share(sku.pack_size).is_none() {
            return Err(ConfigError::ValidationError(format!(
                "SKU '{}' has pack size {} which has no share in the {} split",
                sku.name, sku.pack_size, sku.category
            )));
        }
    }

    Ok(())
}

fn validate_months(
    section: &str,
    months: &[core_types::SeasonalFactor],
) -> Result<(), ConfigError> {
    if months.len() != 12 {
        return Err(ConfigError::ValidationError(format!(
            "{section} must list 12 months, found {}",
            months.len()
        )));
    }
    let mut seen = HashSet::new();
    for entry in months {
        if !seen.insert(entry.month) {
            return Err(ConfigError::ValidationError(format!(
                "{section} lists {} more than once",
                entry.month
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{Category, Month};
    use rust_decimal_macros::dec;

    #[test]
    fn embedded_defaults_load() {
        let config = load_config(None).unwrap();
        assert_eq!(config.supply_chain.farm_gate_rate, dec!(4.75));
        assert_eq!(config.supply_chain.tray_size, 30);
        assert_eq!(config.sku_matrix.skus.len(), 9);
        assert_eq!(config.sku_matrix.monthly_orders, 100_000);
        assert_eq!(config.annual_pnl.aov, dec!(150));
        assert_eq!(config.ebitda_bridge.base, dec!(83.72));
        assert_eq!(config.ebitda_bridge.ad_engine.delta, dec!(12));
        assert_eq!(config.competition.rows.len(), 3);
        assert_eq!(config.simulator.ad_rate_pct, dec!(15));
    }

    #[test]
    fn seasonal_months_keep_their_configured_order() {
        let config = load_config(None).unwrap();
        let months: Vec<Month> = config.seasonal.months.iter().map(|m| m.month).collect();
        assert_eq!(months, Month::FISCAL_ORDER.to_vec());
        assert_eq!(config.seasonal.months[8].factor, dec!(1.20));
    }

    #[test]
    fn volume_split_and_blend_tables_are_independent_copies() {
        let config = load_config(None).unwrap();
        let white = config.sku_matrix.split_for(Category::White).unwrap();
        assert_eq!(white.share, config.blended_margin.current_mix.white);
        assert_eq!(white.pack_share(10), Some(dec!(0.40)));
        assert_eq!(config.blended_margin.margins.get(Category::Brown), dec!(0.33));
    }

    #[test]
    fn overlay_overrides_only_what_it_sets() {
        let overlay = "[simulator]\ndaily_orders = 150000\n";
        let config =
            finish(defaults().add_source(File::from_str(overlay, FileFormat::Toml))).unwrap();
        assert_eq!(config.simulator.daily_orders, 150_000);
        assert_eq!(config.simulator.wastage_rate_pct, dec!(2));
        assert_eq!(config.annual_pnl.daily_orders, 100_000);
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let result = load_config(Some(Path::new("does-not-exist.toml")));
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn short_seasonal_table_is_rejected() {
        let overlay = "[seasonal]\nmonths = [{ month = \"Apr\", factor = 0.92 }]\n";
        let result = finish(defaults().add_source(File::from_str(overlay, FileFormat::Toml)));
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }
}
