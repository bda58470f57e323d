use crate::annual_pnl::build_annual_pnl;
use crate::blended_margin::calculate_blended_margin;
use crate::competition::benchmark_competitors;
use crate::ebitda_bridge::build_ebitda_bridge;
use crate::error::AnalyticsError;
use crate::report::ValidationReport;
use crate::seasonal::build_seasonal_table;
use crate::simulator::{SimulatorInputs, simulate};
use crate::sku_matrix::build_sku_matrix;
use crate::supply_chain::build_landed_cost;
use crate::unit_economics::calculate_unit_economics;
use configuration::Config;

/// A stateless evaluator for the full set of business figures.
#[derive(Debug, Default)]
pub struct ValidationEngine {}

impl ValidationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs every calculation group once, in dependency order.
    ///
    /// # Arguments
    ///
    /// * `config` - The loaded business parameters.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `ValidationReport` or the first `AnalyticsError` hit.
    /// Nothing partial is returned.
    #[tracing::instrument(name = "validation_run", skip_all)]
    pub fn run(&self, config: &Config) -> Result<ValidationReport, AnalyticsError> {
        let supply_chain = build_landed_cost(&config.supply_chain);
        tracing::info!(landed_cost = %supply_chain.landed_cost, "[1] Supply chain cost built.");

        let sku_matrix = build_sku_matrix(&config.sku_matrix)?;
        tracing::info!(
            skus = sku_matrix.lines.len(),
            total_net = %sku_matrix.total_net,
            "[2] SKU matrix computed."
        );

        let blended_margin = calculate_blended_margin(&config.blended_margin);
        tracing::info!(
            current = %blended_margin.current,
            target = %blended_margin.target,
            "[3] Blended margin computed."
        );

        let annual_pnl = build_annual_pnl(&config.annual_pnl, supply_chain.landed_cost)?;
        tracing::info!(gmv = %annual_pnl.gmv, net_ebitda = %annual_pnl.net_ebitda, "[4] Annual P&L computed.");

        let unit_economics = calculate_unit_economics(&config.unit_economics);
        tracing::info!("[5] Unit economics computed.");

        let ebitda_bridge =
            build_ebitda_bridge(&config.ebitda_bridge, &supply_chain, &blended_margin, &annual_pnl)?;
        tracing::info!(target = %ebitda_bridge.target, "[6] EBITDA bridge built.");

        let competition = benchmark_competitors(&config.competition)?;
        tracing::info!(rows = competition.len(), "[7] Competitor variance computed.");

        let seasonal = build_seasonal_table(&config.seasonal);
        tracing::info!(months = seasonal.entries.len(), "[8] Seasonal table built.");

        let inputs = SimulatorInputs::from_defaults(
            &config.simulator,
            &config.annual_pnl,
            blended_margin.current,
        );
        let simulator = simulate(&inputs)?;
        tracing::info!(ebitda = %simulator.ebitda, "[9] Simulator defaults verified.");

        Ok(ValidationReport {
            supply_chain,
            sku_matrix,
            blended_margin,
            annual_pnl,
            unit_economics,
            ebitda_bridge,
            competition,
            seasonal,
            simulator,
        })
    }
}
