//! The one-year EBITDA plan, Q1 through Q4.
//!
//! Headline step deltas are audited literals. Each step also carries a "detailed math"
//! derivation computed from earlier groups. The derivations are reported next to the
//! deltas and never replace them, even when the two disagree.

use crate::annual_pnl::AnnualPnl;
use crate::blended_margin::BlendedMargin;
use crate::error::AnalyticsError;
use crate::supply_chain::SupplyChainCost;
use configuration::{BridgeStepParams, EbitdaBridgeParams};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BridgeStep {
    /// Export key: `q1` .. `q4`.
    pub key: &'static str,
    pub label: String,
    /// Change in EBITDA, in crores.
    pub delta: Decimal,
    pub rationale: String,
}

impl BridgeStep {
    fn from_params(key: &'static str, params: &BridgeStepParams) -> Self {
        Self {
            key,
            label: params.label.clone(),
            delta: params.delta,
            rationale: params.rationale.clone(),
        }
    }
}

/// Q1: annual value of lower breakage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplyFixMath {
    pub eggs_per_day: u64,
    pub annual_eggs: u64,
    pub savings_per_egg: Decimal,
    pub annual_savings: Decimal,
}

/// Q2: GMV times the margin uplift of the mix shift.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MixShiftMath {
    pub current_blend: Decimal,
    pub new_blend: Decimal,
    pub margin_uplift: Decimal,
    pub revenue_impact: Decimal,
}

/// Q4: GMV times the ad fill-rate increase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdEngineMath {
    pub current_fill: Decimal,
    pub new_fill: Decimal,
    pub incremental_ad_revenue: Decimal,
}

/// A bar of the waterfall chart: it floats `offset` above zero and is `value` tall.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaterfallBar {
    pub label: String,
    pub offset: Decimal,
    pub value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EbitdaBridge {
    pub base: Decimal,
    pub steps: Vec<BridgeStep>,
    /// `base + Σ step deltas`.
    pub target: Decimal,
    pub supply_fix: SupplyFixMath,
    pub mix_shift: MixShiftMath,
    pub ad_engine: AdEngineMath,
}

impl EbitdaBridge {
    pub fn step(&self, key: &str) -> Option<&BridgeStep> {
        self.steps.iter().find(|s| s.key == key)
    }

    /// Bars as the dashboard draws them: base, one per step stacked on the running
    /// total, then the target from zero.
    pub fn waterfall(&self) -> Vec<WaterfallBar> {
        let mut bars = Vec::with_capacity(self.steps.len() + 2);
        bars.push(WaterfallBar {
            label: "Current Profit".to_string(),
            offset: Decimal::ZERO,
            value: self.base,
        });

        let mut running = self.base;
        for step in &self.steps {
            bars.push(WaterfallBar {
                label: step.label.clone(),
                offset: running,
                value: step.delta,
            });
            running += step.delta;
        }

        bars.push(WaterfallBar {
            label: "Target EBITDA".to_string(),
            offset: Decimal::ZERO,
            value: self.target,
        });
        bars
    }
}

pub fn build_ebitda_bridge(
    params: &EbitdaBridgeParams,
    supply: &SupplyChainCost,
    blend: &BlendedMargin,
    pnl: &AnnualPnl,
) -> Result<EbitdaBridge, AnalyticsError> {
    let steps = vec![
        BridgeStep::from_params("q1", &params.supply_fix),
        BridgeStep::from_params("q2", &params.mix_shift),
        BridgeStep::from_params("q3", &params.winter_hedge),
        BridgeStep::from_params("q4", &params.ad_engine),
    ];
    let target = params.base + steps.iter().map(|s| s.delta).sum::<Decimal>();

    let eggs_per_day = pnl
        .assumptions
        .daily_orders
        .checked_mul(params.eggs_per_order)
        .ok_or_else(|| AnalyticsError::OutOfRange("eggs per day".to_string()))?;
    let annual_eggs = eggs_per_day
        .checked_mul(u64::from(pnl.assumptions.days))
        .ok_or_else(|| AnalyticsError::OutOfRange("annual eggs".to_string()))?;
    let savings_per_egg = (supply.breakage_old_pct - supply.breakage_new_pct) * supply.farm_gate_rate;
    let supply_fix = SupplyFixMath {
        eggs_per_day,
        annual_eggs,
        savings_per_egg,
        annual_savings: Decimal::from(annual_eggs) * savings_per_egg,
    };

    let mix_shift = MixShiftMath {
        current_blend: blend.current,
        new_blend: blend.target,
        margin_uplift: blend.target - blend.current,
        revenue_impact: pnl.gmv * (blend.target - blend.current),
    };

    let ad_engine = AdEngineMath {
        current_fill: params.current_ad_fill,
        new_fill: params.new_ad_fill,
        incremental_ad_revenue: pnl.gmv * (params.new_ad_fill - params.current_ad_fill),
    };

    tracing::debug!(
        %target,
        q1_derived = %supply_fix.annual_savings,
        q2_derived = %mix_shift.revenue_impact,
        q4_derived = %ad_engine.incremental_ad_revenue,
        "EBITDA bridge built."
    );

    Ok(EbitdaBridge {
        base: params.base,
        steps,
        target,
        supply_fix,
        mix_shift,
        ad_engine,
    })
}
