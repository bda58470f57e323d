//! The dashboard's simulator is a separate implementation in floating point. These
//! tests re-implement its formula independently and require the pipeline to agree.

use analytics::{SimulatorInputs, ValidationEngine, simulate};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

const AOV: f64 = 150.0;
const DAYS: f64 = 365.0;
const DELIVERY_COST: f64 = 30.0;
const BLENDED_MARGIN: f64 = 0.70 * 0.15 + 0.20 * 0.30 + 0.10 * 0.33;

struct DashboardOutcome {
    total_revenue: f64,
    gross_profit: f64,
    ad_income: f64,
    wastage_loss: f64,
    logistics_cost: f64,
    ebitda: f64,
}

fn dashboard_calculate_ebitda(daily_orders: f64, ad_rate: f64, wastage_rate: f64) -> DashboardOutcome {
    let total_revenue = daily_orders * AOV * DAYS;
    let gross_profit = total_revenue * BLENDED_MARGIN;
    let ad_income = total_revenue * (ad_rate / 100.0);
    let wastage_loss = total_revenue * (wastage_rate / 100.0);
    let logistics_cost = daily_orders * DELIVERY_COST * DAYS;
    DashboardOutcome {
        total_revenue,
        gross_profit,
        ad_income,
        wastage_loss,
        logistics_cost,
        ebitda: gross_profit + ad_income - wastage_loss - logistics_cost,
    }
}

fn assert_close(ours: Decimal, theirs: f64) {
    let ours = ours.to_f64().unwrap();
    // Rupee amounts in the billions; a paisa of float noise is acceptable.
    assert!((ours - theirs).abs() < 0.01, "{ours} != {theirs}");
}

#[test]
fn default_scenario_matches_the_dashboard_engine() {
    let config = configuration::load_config(None).unwrap();
    let report = ValidationEngine::new().run(&config).unwrap();
    let theirs = dashboard_calculate_ebitda(100_000.0, 15.0, 2.0);

    let ours = &report.simulator;
    assert_close(ours.gmv, theirs.total_revenue);
    assert_close(ours.gross_profit, theirs.gross_profit);
    assert_close(ours.ad_income, theirs.ad_income);
    assert_close(ours.wastage_loss, theirs.wastage_loss);
    assert_close(ours.logistics_cost, theirs.logistics_cost);
    assert_close(ours.ebitda, theirs.ebitda);
}

#[test]
fn slider_positions_match_the_dashboard_engine() {
    let config = configuration::load_config(None).unwrap();
    let base = SimulatorInputs::from_defaults(&config.simulator, &config.annual_pnl, dec!(0.198));

    for (orders, ad_rate, wastage) in [(50_000u64, 10.0, 1.0), (150_000, 25.0, 4.5), (10_000, 0.0, 8.0)] {
        let inputs = SimulatorInputs {
            daily_orders: orders,
            ad_rate_pct: Decimal::try_from(ad_rate).unwrap(),
            wastage_rate_pct: Decimal::try_from(wastage).unwrap(),
            ..base.clone()
        };
        let ours = simulate(&inputs).unwrap();
        let theirs = dashboard_calculate_ebitda(orders as f64, ad_rate, wastage);
        assert_close(ours.ebitda, theirs.ebitda);
    }
}
