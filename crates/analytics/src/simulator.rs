use crate::error::AnalyticsError;
use crate::util::percent_of;
use configuration::{AnnualPnlParams, SimulatorParams};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Inputs of the dashboard's P&L simulator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulatorInputs {
    pub daily_orders: u64,
    pub aov: Decimal,
    pub days: u32,
    pub blended_margin: Decimal,
    /// Percent of GMV, e.g. 15.0.
    pub ad_rate_pct: Decimal,
    /// Percent of GMV, e.g. 2.0.
    pub wastage_rate_pct: Decimal,
    pub delivery_cost: Decimal,
}

impl SimulatorInputs {
    /// Slider defaults, with AOV and day count taken from the category P&L.
    pub fn from_defaults(
        simulator: &SimulatorParams,
        pnl: &AnnualPnlParams,
        blended_margin: Decimal,
    ) -> Self {
        Self {
            daily_orders: simulator.daily_orders,
            aov: pnl.aov,
            days: pnl.days,
            blended_margin,
            ad_rate_pct: simulator.ad_rate_pct,
            wastage_rate_pct: simulator.wastage_rate_pct,
            delivery_cost: simulator.delivery_cost,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulatorOutcome {
    pub inputs: SimulatorInputs,
    pub gmv: Decimal,
    pub gross_profit: Decimal,
    pub ad_income: Decimal,
    pub wastage_loss: Decimal,
    pub logistics_cost: Decimal,
    pub ebitda: Decimal,
    /// EBITDA as a percent of GMV. `None` when GMV is zero.
    pub ebitda_margin_pct: Option<Decimal>,
}

fn in_range(value: Option<Decimal>, line: &str) -> Result<Decimal, AnalyticsError> {
    value.ok_or_else(|| AnalyticsError::OutOfRange(format!("simulator {line}")))
}

/// Annual EBITDA for the given simulator settings.
///
/// Every step is checked; an overflow surfaces as `AnalyticsError::OutOfRange`.
pub fn simulate(inputs: &SimulatorInputs) -> Result<SimulatorOutcome, AnalyticsError> {
    let orders = Decimal::from(inputs.daily_orders);
    let days = Decimal::from(inputs.days);
    let order_days = in_range(orders.checked_mul(days), "order days")?;

    let gmv = in_range(order_days.checked_mul(inputs.aov), "GMV")?;
    let gross_profit = in_range(gmv.checked_mul(inputs.blended_margin), "gross profit")?;
    let ad_income = in_range(
        (inputs.ad_rate_pct / dec!(100)).checked_mul(gmv),
        "ad income",
    )?;
    let wastage_loss = in_range(
        (inputs.wastage_rate_pct / dec!(100)).checked_mul(gmv),
        "wastage loss",
    )?;
    let logistics_cost = in_range(order_days.checked_mul(inputs.delivery_cost), "logistics cost")?;
    let ebitda = in_range(
        gross_profit
            .checked_add(ad_income)
            .and_then(|v| v.checked_sub(wastage_loss))
            .and_then(|v| v.checked_sub(logistics_cost)),
        "EBITDA",
    )?;

    let ebitda_margin_pct = if gmv.is_zero() {
        None
    } else {
        Some(percent_of(ebitda, gmv, "simulator EBITDA margin")?)
    };

    Ok(SimulatorOutcome {
        inputs: inputs.clone(),
        gmv,
        gross_profit,
        ad_income,
        wastage_loss,
        logistics_cost,
        ebitda,
        ebitda_margin_pct,
    })
}
