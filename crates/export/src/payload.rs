use crate::error::ExportError;
use analytics::ValidationReport;
use core_types::{Month, round_crore};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::ser::{Error as _, SerializeMap, Serializer};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplyChainExport {
    #[serde(with = "rust_decimal::serde::float")]
    pub barwala_rate: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub delhi_rate: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub transport: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub packaging: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub landed_cost: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub breakage_old: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub breakage_new: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub direct_sourcing_savings: Decimal,
}

/// `*_cr` fields are crores rounded to 2 places; `*_pct` fields are fractions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnualizedPnlExport {
    #[serde(with = "rust_decimal::serde::float")]
    pub gmv_cr: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub cogs_pct: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub wastage_pct: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub last_mile_pct: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub dark_store_pct: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub payment_pct: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub ad_revenue_pct: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub platform_fee_pct: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub net_ebitda_cr: Decimal,
}

/// Bridge figures in crores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EbitdaBridgeExport {
    #[serde(with = "rust_decimal::serde::float")]
    pub base: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub q1: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub q2: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub q3: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub q4: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub target: Decimal,
}

/// Month → factor, serialized as a JSON object in the table's own order.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalFactors(Vec<(Month, Decimal)>);

impl SeasonalFactors {
    pub fn get(&self, month: Month) -> Option<Decimal> {
        self.0.iter().find(|(m, _)| *m == month).map(|(_, f)| *f)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Month, Decimal)> {
        self.0.iter()
    }
}

#[derive(Serialize)]
struct AsFloat(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Serialize for SeasonalFactors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (month, factor) in &self.0 {
            map.serialize_entry(month.abbrev(), &AsFloat(*factor))?;
        }
        map.end()
    }
}

/// Whole-rupee amounts are written as JSON integers (`150`), anything else as a float.
fn whole_or_float<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract().is_zero() {
        if let Some(whole) = value.to_i64() {
            return serializer.serialize_i64(whole);
        }
    }
    let float = value
        .to_f64()
        .ok_or_else(|| S::Error::custom(format!("{value} is not representable as f64")))?;
    serializer.serialize_f64(float)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulatorDefaultsExport {
    pub daily_orders: u64,
    #[serde(serialize_with = "whole_or_float")]
    pub aov: Decimal,
    /// Percent, e.g. 15.0.
    #[serde(with = "rust_decimal::serde::float")]
    pub ad_rate: Decimal,
    /// Percent, e.g. 2.0.
    #[serde(with = "rust_decimal::serde::float")]
    pub wastage_rate: Decimal,
    #[serde(serialize_with = "whole_or_float")]
    pub delivery_cost: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub ebitda_cr: Decimal,
}

/// The validated data handed to the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportPayload {
    pub supply_chain: SupplyChainExport,
    #[serde(with = "rust_decimal::serde::float")]
    pub blended_margin: Decimal,
    pub annualized_pnl: AnnualizedPnlExport,
    pub ebitda_bridge: EbitdaBridgeExport,
    pub seasonal_factors: SeasonalFactors,
    pub simulator_defaults: SimulatorDefaultsExport,
}

impl ExportPayload {
    /// Collects the exported fields from a finished report.
    pub fn assemble(report: &ValidationReport) -> Result<Self, ExportError> {
        let supply = &report.supply_chain;
        let pnl = &report.annual_pnl;
        let bridge = &report.ebitda_bridge;
        let sim = &report.simulator;

        let step = |key: &str| {
            bridge
                .step(key)
                .map(|s| s.delta)
                .ok_or_else(|| ExportError::MissingValue(format!("ebitda_bridge.{key}")))
        };

        Ok(Self {
            supply_chain: SupplyChainExport {
                barwala_rate: supply.farm_gate_rate,
                delhi_rate: supply.wholesale_rate,
                transport: supply.transport_handling,
                packaging: supply.packaging_per_egg,
                landed_cost: supply.landed_cost,
                breakage_old: supply.breakage_old_pct,
                breakage_new: supply.breakage_new_pct,
                direct_sourcing_savings: supply.direct_sourcing_savings,
            },
            blended_margin: report.blended_margin.current,
            annualized_pnl: AnnualizedPnlExport {
                gmv_cr: round_crore(pnl.gmv),
                cogs_pct: pnl.assumptions.cogs_pct,
                wastage_pct: pnl.assumptions.wastage_pct,
                last_mile_pct: pnl.assumptions.last_mile_pct,
                dark_store_pct: pnl.assumptions.dark_store_pct,
                payment_pct: pnl.assumptions.payment_tech_pct,
                ad_revenue_pct: pnl.assumptions.ad_revenue_pct,
                platform_fee_pct: pnl.assumptions.platform_fee_pct,
                net_ebitda_cr: round_crore(pnl.net_ebitda),
            },
            ebitda_bridge: EbitdaBridgeExport {
                base: bridge.base,
                q1: step("q1")?,
                q2: step("q2")?,
                q3: step("q3")?,
                q4: step("q4")?,
                target: bridge.target,
            },
            seasonal_factors: SeasonalFactors(
                report
                    .seasonal
                    .entries
                    .iter()
                    .map(|e| (e.month, e.factor))
                    .collect(),
            ),
            simulator_defaults: SimulatorDefaultsExport {
                daily_orders: sim.inputs.daily_orders,
                aov: sim.inputs.aov,
                ad_rate: sim.inputs.ad_rate_pct,
                wastage_rate: sim.inputs.wastage_rate_pct,
                delivery_cost: sim.inputs.delivery_cost,
                ebitda_cr: round_crore(sim.ebitda),
            },
        })
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
