use crate::payload::ExportPayload;
use configuration::DashboardParams;
use rust_decimal::Decimal;
use serde::Serialize;

/// One dashboard constant compared with the value we export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParityCheck {
    pub name: String,
    pub dashboard: Decimal,
    /// `None` when the payload has no such value.
    pub computed: Option<Decimal>,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParityReport {
    pub checks: Vec<ParityCheck>,
}

impl ParityReport {
    pub fn is_consistent(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &ParityCheck> {
        self.checks.iter().filter(|c| !c.passed)
    }
}

/// Compares every constant the dashboard hardcodes against the payload.
pub fn verify_dashboard(payload: &ExportPayload, dashboard: &DashboardParams) -> ParityReport {
    let tolerance = dashboard.tolerance.abs();
    let mut checks = Vec::new();
    let mut check = |name: String, expected: Decimal, computed: Option<Decimal>| {
        let passed = computed.is_some_and(|c| (c - expected).abs() <= tolerance);
        if !passed {
            tracing::warn!(check = %name, dashboard = %expected, computed = ?computed, "Dashboard constant disagrees with the pipeline.");
        }
        checks.push(ParityCheck {
            name,
            dashboard: expected,
            computed,
            passed,
        });
    };

    let bridge = &payload.ebitda_bridge;
    check("landed_cost".into(), dashboard.landed_cost, Some(payload.supply_chain.landed_cost));
    check("blended_margin".into(), dashboard.blended_margin, Some(payload.blended_margin));
    check("gmv_cr".into(), dashboard.gmv_cr, Some(payload.annualized_pnl.gmv_cr));
    check("base_ebitda".into(), dashboard.base_ebitda, Some(bridge.base));
    check("q1_impact".into(), dashboard.q1_impact, Some(bridge.q1));
    check("q2_impact".into(), dashboard.q2_impact, Some(bridge.q2));
    check("q3_impact".into(), dashboard.q3_impact, Some(bridge.q3));
    check("q4_impact".into(), dashboard.q4_impact, Some(bridge.q4));
    check("target_ebitda".into(), dashboard.target_ebitda, Some(bridge.target));

    for entry in &dashboard.seasonal {
        check(
            format!("seasonal.{}", entry.month),
            entry.factor,
            payload.seasonal_factors.get(entry.month),
        );
    }

    ParityReport { checks }
}
