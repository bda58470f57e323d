use configuration::SupplyChainParams;
use rust_decimal::Decimal;
use serde::Serialize;

/// Per-egg cost build-up from the Barwala farm gate to the dark store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplyChainCost {
    pub farm_gate_rate: Decimal,
    pub wholesale_rate: Decimal,
    /// Wholesale minus farm gate.
    pub farm_to_wholesale_spread: Decimal,
    pub transport_spread: Decimal,
    pub breakage_spread: Decimal,
    pub trader_margin: Decimal,
    pub direct_sourcing_savings: Decimal,
    pub transport_handling: Decimal,
    pub packaging_per_egg: Decimal,
    /// Farm gate + transport & handling + packaging.
    pub landed_cost: Decimal,
    /// What is left of the wholesale spread once its known components are removed.
    pub arbitrage_per_egg: Decimal,
    pub breakage_old_pct: Decimal,
    pub breakage_new_pct: Decimal,
    /// Farm-gate value no longer lost to breakage after the pulp tray switch.
    pub breakage_savings_per_egg: Decimal,
    pub tray_size: u32,
    pub tray_cost: Decimal,
}

pub fn build_landed_cost(params: &SupplyChainParams) -> SupplyChainCost {
    let landed_cost = params.farm_gate_rate + params.transport_handling + params.packaging_per_egg;
    let arbitrage_per_egg = params.wholesale_rate
        - params.farm_gate_rate
        - params.transport_spread
        - params.breakage_spread
        - params.trader_margin;
    let breakage_savings_per_egg =
        (params.breakage_old_pct - params.breakage_new_pct) * params.farm_gate_rate;

    tracing::debug!(%landed_cost, %arbitrage_per_egg, %breakage_savings_per_egg, "Supply chain cost built.");

    SupplyChainCost {
        farm_gate_rate: params.farm_gate_rate,
        wholesale_rate: params.wholesale_rate,
        farm_to_wholesale_spread: params.wholesale_rate - params.farm_gate_rate,
        transport_spread: params.transport_spread,
        breakage_spread: params.breakage_spread,
        trader_margin: params.trader_margin,
        direct_sourcing_savings: params.direct_sourcing_savings,
        transport_handling: params.transport_handling,
        packaging_per_egg: params.packaging_per_egg,
        landed_cost,
        arbitrage_per_egg,
        breakage_old_pct: params.breakage_old_pct,
        breakage_new_pct: params.breakage_new_pct,
        breakage_savings_per_egg,
        tray_size: params.tray_size,
        tray_cost: params.packaging_per_egg * Decimal::from(params.tray_size),
    }
}
