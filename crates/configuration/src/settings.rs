use core_types::{Category, CategorySplit, CompetitorRow, SeasonalFactor, Sku};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub supply_chain: SupplyChainParams,
    pub sku_matrix: SkuMatrixParams,
    pub blended_margin: BlendedMarginParams,
    pub annual_pnl: AnnualPnlParams,
    pub unit_economics: UnitEconomicsParams,
    pub ebitda_bridge: EbitdaBridgeParams,
    pub competition: CompetitionParams,
    pub seasonal: SeasonalParams,
    pub simulator: SimulatorParams,
    pub dashboard: DashboardParams,
}

/// Per-egg rates for the farm gate to dark store supply chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyChainParams {
    /// NECC farm-gate rate at Barwala, per egg.
    pub farm_gate_rate: Decimal,
    /// Delhi wholesale rate, per egg.
    pub wholesale_rate: Decimal,
    pub transport_handling: Decimal,
    pub packaging_per_egg: Decimal,
    /// Breakage fraction with plastic crates (0.04 corresponds to 4%).
    pub breakage_old_pct: Decimal,
    /// Breakage fraction with molded pulp trays.
    pub breakage_new_pct: Decimal,
    pub trader_margin: Decimal,
    pub transport_spread: Decimal,
    pub breakage_spread: Decimal,
    pub direct_sourcing_savings: Decimal,
    /// Eggs per pulp tray.
    pub tray_size: u32,
}

/// Inputs for the nine-SKU monthly P&L.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkuMatrixParams {
    pub monthly_orders: u64,
    /// Last-mile cost charged against every order.
    pub delivery_cost: Decimal,
    /// Average ad income earned on every order.
    pub ad_revenue_per_order: Decimal,
    pub skus: Vec<Sku>,
    pub volume_split: Vec<CategorySplit>,
}

impl SkuMatrixParams {
    pub fn split_for(&self, category: Category) -> Option<&CategorySplit> {
        self.volume_split.iter().find(|s| s.category == category)
    }
}

/// One value per category. Used for both share tables and the margin table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryWeights {
    pub white: Decimal,
    pub protein: Decimal,
    pub brown: Decimal,
}

impl CategoryWeights {
    pub fn get(&self, category: Category) -> Decimal {
        match category {
            Category::White => self.white,
            Category::Protein => self.protein,
            Category::Brown => self.brown,
        }
    }
}

/// Category mixes before and after the Q2 shift, and the margin earned per category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlendedMarginParams {
    pub current_mix: CategoryWeights,
    pub target_mix: CategoryWeights,
    pub margins: CategoryWeights,
}

/// Volume assumptions and cost lines of the annualized category P&L.
/// Every `*_pct` is a fraction of GMV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualPnlParams {
    pub daily_orders: u64,
    /// Average order value for the egg category.
    pub aov: Decimal,
    pub days: u32,
    pub cogs_pct: Decimal,
    pub wastage_pct: Decimal,
    pub last_mile_pct: Decimal,
    pub dark_store_pct: Decimal,
    pub payment_tech_pct: Decimal,
    pub ad_revenue_pct: Decimal,
    pub platform_fee_pct: Decimal,
    /// Per-egg realization quoted in the COGS note.
    pub blended_realization: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitEconomicsParams {
    pub standalone: StandaloneOrderParams,
    pub basket: BasketOrderParams,
}

/// A branded six-egg order placed on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandaloneOrderParams {
    pub price: Decimal,
    pub cogs: Decimal,
    pub delivery_cost: Decimal,
    pub small_cart_fee: Decimal,
}

/// An average basket that contains eggs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasketOrderParams {
    pub delivery_cost: Decimal,
    pub category_margin: Decimal,
    pub ad_revenue: Decimal,
}

/// One headline step of the EBITDA bridge. `delta` is in crores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeStepParams {
    pub label: String,
    pub delta: Decimal,
    pub rationale: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EbitdaBridgeParams {
    /// Starting EBITDA in crores.
    pub base: Decimal,
    pub supply_fix: BridgeStepParams,
    pub mix_shift: BridgeStepParams,
    pub winter_hedge: BridgeStepParams,
    pub ad_engine: BridgeStepParams,
    /// Average eggs per order, used for the Q1 breakage estimate.
    pub eggs_per_order: u64,
    pub current_ad_fill: Decimal,
    pub new_ad_fill: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitionParams {
    pub rows: Vec<CompetitorRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalParams {
    /// Base farm-gate price per egg that the factors scale.
    pub base_price: Decimal,
    /// Monthly multipliers, in the order they are reported.
    pub months: Vec<SeasonalFactor>,
}

/// Default slider positions of the dashboard's P&L simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorParams {
    pub daily_orders: u64,
    /// Ad income as a percent of GMV (15.0 means 15%).
    pub ad_rate_pct: Decimal,
    /// Wastage as a percent of GMV.
    pub wastage_rate_pct: Decimal,
    pub delivery_cost: Decimal,
}

/// Constants the dashboard engine hardcodes as already validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardParams {
    /// Largest absolute difference accepted between a dashboard figure and ours.
    pub tolerance: Decimal,
    pub landed_cost: Decimal,
    pub blended_margin: Decimal,
    pub gmv_cr: Decimal,
    pub base_ebitda: Decimal,
    pub q1_impact: Decimal,
    pub q2_impact: Decimal,
    pub q3_impact: Decimal,
    pub q4_impact: Decimal,
    pub target_ebitda: Decimal,
    pub seasonal: Vec<SeasonalFactor>,
}
