use analytics::{ValidationEngine, ValidationReport};
use core_types::{Month, round_crore};
use export::{ExportPayload, verify_dashboard};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde_json::Value;

fn run() -> (configuration::Config, ValidationReport) {
    let config = configuration::load_config(None).unwrap();
    let report = ValidationEngine::new().run(&config).unwrap();
    (config, report)
}

fn number(value: &Value, path: &[&str]) -> f64 {
    let mut current = value;
    for key in path {
        current = &current[*key];
    }
    current
        .as_f64()
        .unwrap_or_else(|| panic!("{} is not a number", path.join(".")))
}

fn float(d: Decimal) -> f64 {
    d.to_f64().unwrap()
}

#[test]
fn top_level_keys_are_in_contract_order() {
    let (_, report) = run();
    let json = ExportPayload::assemble(&report).unwrap().to_json().unwrap();
    let keys = [
        "\"supply_chain\"",
        "\"blended_margin\"",
        "\"annualized_pnl\"",
        "\"ebitda_bridge\"",
        "\"seasonal_factors\"",
        "\"simulator_defaults\"",
    ];
    let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(json.starts_with("{\n  \"supply_chain\": {\n    \"barwala_rate\": 4.75,"));
}

#[test]
fn seasonal_months_are_serialized_apr_to_mar() {
    let (_, report) = run();
    let json = ExportPayload::assemble(&report).unwrap().to_json().unwrap();
    let positions: Vec<usize> = Month::FISCAL_ORDER
        .iter()
        .map(|m| json.find(&format!("\"{}\":", m.abbrev())).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn every_exported_scalar_equals_the_report() {
    let (_, report) = run();
    let json = ExportPayload::assemble(&report).unwrap().to_json().unwrap();
    let parsed: Value = serde_json::from_str(&json).unwrap();

    let supply = &report.supply_chain;
    assert_eq!(number(&parsed, &["supply_chain", "barwala_rate"]), float(supply.farm_gate_rate));
    assert_eq!(number(&parsed, &["supply_chain", "delhi_rate"]), float(supply.wholesale_rate));
    assert_eq!(number(&parsed, &["supply_chain", "landed_cost"]), float(supply.landed_cost));
    assert_eq!(number(&parsed, &["supply_chain", "breakage_new"]), 0.015);
    assert_eq!(number(&parsed, &["blended_margin"]), float(report.blended_margin.current));

    let pnl = &report.annual_pnl;
    assert_eq!(number(&parsed, &["annualized_pnl", "gmv_cr"]), 547.5);
    assert_eq!(
        number(&parsed, &["annualized_pnl", "net_ebitda_cr"]),
        float(round_crore(pnl.net_ebitda))
    );
    assert_eq!(number(&parsed, &["annualized_pnl", "net_ebitda_cr"]), 104.03);
    assert_eq!(number(&parsed, &["annualized_pnl", "cogs_pct"]), 0.75);
    assert_eq!(number(&parsed, &["annualized_pnl", "payment_pct"]), 0.02);

    let bridge = &report.ebitda_bridge;
    assert_eq!(number(&parsed, &["ebitda_bridge", "base"]), float(bridge.base));
    assert_eq!(number(&parsed, &["ebitda_bridge", "q4"]), 12.0);
    assert_eq!(number(&parsed, &["ebitda_bridge", "target"]), 108.22);

    for entry in &report.seasonal.entries {
        assert_eq!(
            number(&parsed, &["seasonal_factors", entry.month.abbrev()]),
            float(entry.factor)
        );
    }

    assert_eq!(parsed["simulator_defaults"]["daily_orders"].as_u64(), Some(100_000));
    assert_eq!(number(&parsed, &["simulator_defaults", "ad_rate"]), 15.0);
    assert_eq!(number(&parsed, &["simulator_defaults", "wastage_rate"]), 2.0);
    assert_eq!(number(&parsed, &["simulator_defaults", "ebitda_cr"]), 70.08);
    assert_eq!(parsed["simulator_defaults"]["aov"].as_u64(), Some(150));
    assert_eq!(parsed["simulator_defaults"]["delivery_cost"].as_u64(), Some(30));
}

#[test]
fn dashboard_constants_match_the_defaults() {
    let (config, report) = run();
    let payload = ExportPayload::assemble(&report).unwrap();
    let parity = verify_dashboard(&payload, &config.dashboard);
    assert_eq!(parity.checks.len(), 9 + 12);
    assert!(parity.is_consistent());
}

#[test]
fn a_stale_dashboard_constant_is_reported() {
    let (mut config, report) = run();
    config.dashboard.target_ebitda = dec!(110.00);
    config.dashboard.seasonal[9].factor = dec!(1.30);
    let payload = ExportPayload::assemble(&report).unwrap();
    let parity = verify_dashboard(&payload, &config.dashboard);

    assert!(!parity.is_consistent());
    let failed: Vec<&str> = parity.failures().map(|c| c.name.as_str()).collect();
    assert_eq!(failed, vec!["target_ebitda", "seasonal.Jan"]);
}
