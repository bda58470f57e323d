use crate::annual_pnl::AnnualPnl;
use crate::blended_margin::BlendedMargin;
use crate::competition::PriceVariance;
use crate::ebitda_bridge::EbitdaBridge;
use crate::seasonal::SeasonalTable;
use crate::simulator::SimulatorOutcome;
use crate::sku_matrix::SkuMatrix;
use crate::supply_chain::SupplyChainCost;
use crate::unit_economics::UnitEconomics;
use serde::Serialize;

/// Every figure produced by one run of the validation pipeline.
///
/// This struct is the final output of the `ValidationEngine`. The text report and the
/// export payload are both rendered from it and never recompute anything themselves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub supply_chain: SupplyChainCost,
    pub sku_matrix: SkuMatrix,
    pub blended_margin: BlendedMargin,
    pub annual_pnl: AnnualPnl,
    pub unit_economics: UnitEconomics,
    pub ebitda_bridge: EbitdaBridge,
    pub competition: Vec<PriceVariance>,
    pub seasonal: SeasonalTable,
    pub simulator: SimulatorOutcome,
}
