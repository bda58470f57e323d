//! Text rendering of a `ValidationReport`.
//!
//! Everything here is presentation: figures are taken from the report as computed and
//! only rounded for display.

use analytics::annual_pnl::PnlLine;
use analytics::{
    AnnualPnl, BlendedMargin, EbitdaBridge, PriceVariance, SeasonalTable, SimulatorOutcome,
    SkuMatrix, SupplyChainCost, UnitEconomics, ValidationReport,
};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, Table};
use core_types::{CRORE, MarginView, round_crore, to_lakh};
use export::ParityReport;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use std::fmt::Write;

const RULE_WIDTH: usize = 70;

/// Renders sections [1] to [9] of the validation report.
pub fn render_report(report: &ValidationReport, view: MarginView) -> anyhow::Result<String> {
    let mut out = String::new();
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "YOLK EGG CATEGORY: FINANCIAL VALIDATION")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

    supply_chain_section(&mut out, &report.supply_chain)?;
    sku_matrix_section(&mut out, &report.sku_matrix, view)?;
    blended_margin_section(&mut out, &report.blended_margin)?;
    annual_pnl_section(&mut out, &report.annual_pnl)?;
    unit_economics_section(&mut out, &report.unit_economics)?;
    ebitda_bridge_section(&mut out, &report.ebitda_bridge)?;
    competition_section(&mut out, &report.competition)?;
    seasonal_section(&mut out, &report.seasonal)?;

    section(&mut out, 9, "P&L SIMULATOR DEFAULTS")?;
    simulation_body(&mut out, &report.simulator)?;
    Ok(out)
}

/// Section [10]: the pretty-printed payload, then the closing banner.
pub fn render_export_section(json: &str) -> anyhow::Result<String> {
    let mut out = String::new();
    section(&mut out, 10, "JSON EXPORT FOR DASHBOARD")?;
    writeln!(out, "{json}")?;
    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "ALL VALIDATIONS COMPLETE")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    Ok(out)
}

pub fn render_simulation(outcome: &SimulatorOutcome) -> anyhow::Result<String> {
    let mut out = String::new();
    writeln!(out, "P&L SIMULATION")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    simulation_body(&mut out, outcome)?;
    Ok(out)
}

pub fn render_parity(parity: &ParityReport) -> anyhow::Result<String> {
    let mut out = String::new();
    writeln!(out, "DASHBOARD PARITY CHECK")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    let mut table = new_table(vec!["Constant", "Dashboard", "Computed", "Status"]);
    for check in &parity.checks {
        let computed = check
            .computed
            .map(|c| c.normalize().to_string())
            .unwrap_or_else(|| "missing".to_string());
        let status = if check.passed { "OK" } else { "MISMATCH" };
        table.add_row(vec![
            Cell::new(&check.name),
            Cell::new(check.dashboard.normalize()),
            Cell::new(computed),
            Cell::new(status),
        ]);
    }
    align_right(&mut table, &[1, 2]);
    writeln!(out, "{table}")?;

    let failures = parity.failures().count();
    if failures == 0 {
        writeln!(out, "All {} constants match.", parity.checks.len())?;
    } else {
        writeln!(out, "{failures} of {} constants are stale.", parity.checks.len())?;
    }
    Ok(out)
}

// ==============================================================================
// Sections
// ==============================================================================

fn supply_chain_section(out: &mut String, sc: &SupplyChainCost) -> anyhow::Result<()> {
    section(out, 1, "SUPPLY CHAIN: LANDED COST")?;
    writeln!(out, "  Barwala farm-gate rate:    Rs {:.2}/egg", fixed(sc.farm_gate_rate, 2))?;
    writeln!(out, "  Delhi wholesale rate:      Rs {:.2}/egg", fixed(sc.wholesale_rate, 2))?;
    writeln!(
        out,
        "  Farm-to-wholesale spread:  Rs {:.2} (transport {:.2}, breakage {:.2}, trader {:.2})",
        fixed(sc.farm_to_wholesale_spread, 2),
        fixed(sc.transport_spread, 2),
        fixed(sc.breakage_spread, 2),
        fixed(sc.trader_margin, 2)
    )?;
    writeln!(out, "  Direct sourcing saves:     Rs {:.2}/egg", fixed(sc.direct_sourcing_savings, 2))?;
    writeln!(out, "  Transport + handling:      Rs {:.2}/egg", fixed(sc.transport_handling, 2))?;
    writeln!(out, "  Packaging:                 Rs {:.2}/egg", fixed(sc.packaging_per_egg, 2))?;
    writeln!(out, "  LANDED COST:               Rs {:.2}/egg", fixed(sc.landed_cost, 2))?;
    writeln!(out, "  Arbitrage vs wholesale:    Rs {:.2}/egg", fixed(sc.arbitrage_per_egg, 2))?;
    writeln!(
        out,
        "  Breakage {}% -> {}% saves:  Rs {:.4}/egg",
        sc.breakage_old_pct.normalize(),
        sc.breakage_new_pct.normalize(),
        fixed(sc.breakage_savings_per_egg, 4)
    )?;
    writeln!(out, "  {}-egg tray cost:          Rs {:.2}", sc.tray_size, fixed(sc.tray_cost, 2))?;
    Ok(())
}

fn sku_matrix_section(out: &mut String, m: &SkuMatrix, view: MarginView) -> anyhow::Result<()> {
    let (heading, labels, blended_label, blended_pct) = match view {
        MarginView::Gross => (
            "SKU P&L MATRIX (GROSS VIEW)",
            ["Gross Margin", "GP/Order", "Gross Contribution"],
            "Blended gross margin",
            m.gross_margin_pct,
        ),
        MarginView::Net => (
            "SKU P&L MATRIX (NET VIEW)",
            ["Net Margin", "Net/Order", "Net Contribution"],
            "Blended net margin",
            m.net_margin_pct,
        ),
    };
    section(out, 2, heading)?;
    writeln!(
        out,
        "  {} orders/month, delivery Rs {} and ad revenue Rs {} per order",
        grouped(Decimal::from(m.monthly_orders), 0),
        m.delivery_cost.normalize(),
        m.ad_revenue_per_order.normalize()
    )?;

    let [margin_label, profit_label, contribution_label] = labels;
    let mut table = new_table(vec![
        "SKU",
        "Price",
        margin_label,
        profit_label,
        "Orders",
        contribution_label,
        "",
    ]);
    for line in &m.lines {
        let shown = line.view(view);
        let flag = if line.is_loss_making() { "LOSS" } else { "" };
        table.add_row(vec![
            Cell::new(&line.sku.name),
            Cell::new(format!("{:.0}", fixed(line.sku.unit_price, 0))),
            Cell::new(percent(shown.margin, 1)),
            Cell::new(format!("{:.1}", fixed(shown.profit_per_order, 1))),
            Cell::new(grouped(Decimal::from(line.order_volume), 0)),
            Cell::new(grouped(shown.contribution, 0)),
            Cell::new(flag),
        ]);
    }
    align_right(&mut table, &[1, 2, 3, 4, 5]);
    writeln!(out, "{table}")?;

    writeln!(out, "  {blended_label}: {:.2}%", fixed(blended_pct, 2))?;
    writeln!(out, "  Total Revenue:        Rs {}", grouped(m.total_revenue, 0))?;
    writeln!(
        out,
        "  Total Gross Profit:   Rs {} ({:.2}%)",
        grouped(m.total_gross, 0),
        fixed(m.gross_margin_pct, 2)
    )?;
    writeln!(
        out,
        "  Total Net Profit:     Rs {} ({:.2}%)",
        grouped(m.total_net, 0),
        fixed(m.net_margin_pct, 2)
    )?;
    if m.allocated_orders != m.monthly_orders {
        writeln!(
            out,
            "  Allocated orders:     {} of {}",
            grouped(Decimal::from(m.allocated_orders), 0),
            grouped(Decimal::from(m.monthly_orders), 0)
        )?;
    }
    Ok(())
}

fn blended_margin_section(out: &mut String, b: &BlendedMargin) -> anyhow::Result<()> {
    section(out, 3, "BLENDED MARGIN")?;
    writeln!(out, "  Current mix:")?;
    for term in &b.current_terms {
        writeln!(
            out,
            "    {:<8} {:>4.0}% x {:>5.1}% = {:.4}",
            term.category,
            fixed(term.share * dec!(100), 0),
            fixed(term.margin * dec!(100), 1),
            fixed(term.weighted, 4)
        )?;
    }
    writeln!(out, "    Blended: {}", percent(b.current, 1))?;
    writeln!(out, "  Target mix:")?;
    for term in &b.target_terms {
        writeln!(
            out,
            "    {:<8} {:>4.0}% x {:>5.1}% = {:.4}",
            term.category,
            fixed(term.share * dec!(100), 0),
            fixed(term.margin * dec!(100), 1),
            fixed(term.weighted, 4)
        )?;
    }
    writeln!(out, "    Blended: {}", percent(b.target, 1))?;
    writeln!(out, "  Margin uplift: {} pts", signed(b.uplift * dec!(100), 1))?;
    Ok(())
}

fn annual_pnl_section(out: &mut String, pnl: &AnnualPnl) -> anyhow::Result<()> {
    section(out, 4, "ANNUALIZED P&L")?;
    let a = &pnl.assumptions;
    writeln!(
        out,
        "  {} orders/day x AOV Rs {} x {} days, realization Rs {:.2}/egg",
        grouped(Decimal::from(a.daily_orders), 0),
        a.aov.normalize(),
        a.days,
        fixed(a.blended_realization, 2)
    )?;

    let mut table = new_table(vec!["Line", "Amount", "% of GMV", "Note"]);
    for line in &pnl.lines {
        match line {
            PnlLine::Item {
                label,
                amount,
                note,
            } => {
                table.add_row(vec![
                    Cell::new(label),
                    Cell::new(format_cr(*amount)),
                    Cell::new(format!("{:.1}%", fixed(pnl.pct_of_gmv(*amount)?, 1))),
                    Cell::new(note),
                ]);
            }
            PnlLine::Separator => {
                table.add_row(vec!["", "", "", ""]);
            }
        }
    }
    align_right(&mut table, &[1, 2]);
    writeln!(out, "{table}")?;
    writeln!(
        out,
        "  Net EBITDA: {:.2} Cr",
        round_crore(pnl.net_ebitda)
    )?;
    Ok(())
}

fn unit_economics_section(out: &mut String, ue: &UnitEconomics) -> anyhow::Result<()> {
    section(out, 5, "UNIT ECONOMICS")?;
    let s = &ue.standalone;
    writeln!(out, "  Scenario A: standalone tray order")?;
    writeln!(out, "    Revenue:          Rs {:.2}", fixed(s.revenue, 2))?;
    writeln!(out, "    COGS:             Rs {:.2}", fixed(s.cogs, 2))?;
    writeln!(out, "    Gross margin:     Rs {:.2}", fixed(s.gross_margin, 2))?;
    writeln!(out, "    Delivery:         Rs {:.2}", fixed(s.delivery_cost, 2))?;
    writeln!(out, "    Before cart fee:  Rs {}", signed(s.net_before_fee, 2))?;
    writeln!(out, "    Small-cart fee:   Rs {:.2}", fixed(s.small_cart_fee, 2))?;
    writeln!(out, "    Net profit:       Rs {}", signed(s.net_profit, 2))?;

    let b = &ue.basket;
    writeln!(out, "  Scenario B: eggs inside a basket")?;
    writeln!(out, "    Delivery:         Rs {:.2} (absorbed by basket)", fixed(b.delivery_cost, 2))?;
    writeln!(out, "    Category margin:  Rs {:.2}", fixed(b.category_margin, 2))?;
    writeln!(out, "    Trading result:   Rs {}", signed(b.trading_result, 2))?;
    writeln!(out, "    Ad revenue:       Rs {:.2}", fixed(b.ad_revenue, 2))?;
    writeln!(out, "    Final profit:     Rs {}", signed(b.final_profit, 2))?;
    Ok(())
}

fn ebitda_bridge_section(out: &mut String, bridge: &EbitdaBridge) -> anyhow::Result<()> {
    section(out, 6, "EBITDA BRIDGE")?;

    let mut table = new_table(vec!["Step", "Delta (Cr)", "Offset (Cr)", "Rationale"]);
    table.add_row(vec![
        Cell::new("Current Profit"),
        Cell::new(format!("{:.2}", fixed(bridge.base, 2))),
        Cell::new(""),
        Cell::new(""),
    ]);
    let bars = bridge.waterfall();
    for (step, bar) in bridge.steps.iter().zip(bars.iter().skip(1)) {
        table.add_row(vec![
            Cell::new(&step.label),
            Cell::new(signed(step.delta, 2)),
            Cell::new(format!("{:.2}", fixed(bar.offset, 2))),
            Cell::new(&step.rationale),
        ]);
    }
    table.add_row(vec![
        Cell::new("Target EBITDA"),
        Cell::new(format!("{:.2}", fixed(bridge.target, 2))),
        Cell::new(""),
        Cell::new(""),
    ]);
    align_right(&mut table, &[1, 2]);
    writeln!(out, "{table}")?;

    let q1 = &bridge.supply_fix;
    writeln!(
        out,
        "  Supply fix: {} eggs/day, {} eggs/year x Rs {} = {}",
        grouped(Decimal::from(q1.eggs_per_day), 0),
        grouped(Decimal::from(q1.annual_eggs), 0),
        q1.savings_per_egg.normalize(),
        format_cr(q1.annual_savings)
    )?;
    let q2 = &bridge.mix_shift;
    writeln!(
        out,
        "  Mix shift: {} -> {} blend, uplift {} pts = {}",
        percent(q2.current_blend, 1),
        percent(q2.new_blend, 1),
        signed(q2.margin_uplift * dec!(100), 1),
        format_cr(q2.revenue_impact)
    )?;
    let q4 = &bridge.ad_engine;
    writeln!(
        out,
        "  Ad engine: fill {} -> {} = {}",
        percent(q4.current_fill, 0),
        percent(q4.new_fill, 0),
        format_cr(q4.incremental_ad_revenue)
    )?;
    Ok(())
}

fn competition_section(out: &mut String, rows: &[PriceVariance]) -> anyhow::Result<()> {
    section(out, 7, "COMPETITOR PRICE VARIANCE")?;
    let mut table = new_table(vec![
        "SKU", "Blinkit", "Zepto", "Swiggy", "Average", "Variance", "Analysis",
    ]);
    for v in rows {
        table.add_row(vec![
            Cell::new(&v.row.sku),
            Cell::new(v.row.blinkit.normalize()),
            Cell::new(v.row.zepto.normalize()),
            Cell::new(v.row.swiggy.normalize()),
            Cell::new(format!("{:.2}", fixed(v.average, 2))),
            Cell::new(format!("{:.1}%", fixed(v.variance_pct, 1))),
            Cell::new(&v.row.analysis),
        ]);
    }
    align_right(&mut table, &[1, 2, 3, 4, 5]);
    writeln!(out, "{table}")?;
    Ok(())
}

fn seasonal_section(out: &mut String, table_data: &SeasonalTable) -> anyhow::Result<()> {
    section(out, 8, "SEASONAL PRICING")?;
    writeln!(out, "  Base price: Rs {:.2}/egg", fixed(table_data.base_price, 2))?;

    let mut table = new_table(vec!["Month", "Factor", "Price", "vs Base", ""]);
    for entry in &table_data.entries {
        let flag = if entry.is_spike { "SPIKE" } else { "" };
        table.add_row(vec![
            Cell::new(entry.month),
            Cell::new(format!("{:.2}", fixed(entry.factor, 2))),
            Cell::new(format!("{:.2}", fixed(entry.price, 2))),
            Cell::new(format!("{}%", signed(entry.deviation_pct, 1))),
            Cell::new(flag),
        ]);
    }
    align_right(&mut table, &[1, 2, 3]);
    writeln!(out, "{table}")?;
    Ok(())
}

fn simulation_body(out: &mut String, outcome: &SimulatorOutcome) -> anyhow::Result<()> {
    let i = &outcome.inputs;
    writeln!(out, "  Daily orders:     {}", grouped(Decimal::from(i.daily_orders), 0))?;
    writeln!(out, "  AOV:              Rs {}", i.aov.normalize())?;
    writeln!(out, "  Blended margin:   {}", percent(i.blended_margin, 1))?;
    writeln!(out, "  Ad rate:          {}%", i.ad_rate_pct.normalize())?;
    writeln!(out, "  Wastage rate:     {}%", i.wastage_rate_pct.normalize())?;
    writeln!(out, "  Delivery cost:    Rs {}", i.delivery_cost.normalize())?;
    writeln!(out, "  GMV:              {}", format_cr(outcome.gmv))?;
    writeln!(out, "  Gross profit:     {}", format_cr(outcome.gross_profit))?;
    writeln!(out, "  Ad income:        {}", format_cr(outcome.ad_income))?;
    writeln!(out, "  Wastage loss:     {}", format_cr(-outcome.wastage_loss))?;
    writeln!(out, "  Logistics:        {}", format_cr(-outcome.logistics_cost))?;
    match outcome.ebitda_margin_pct {
        Some(pct) => writeln!(
            out,
            "  EBITDA:           {} ({:.1}% of GMV)",
            format_cr(outcome.ebitda),
            fixed(pct, 1)
        )?,
        None => writeln!(out, "  EBITDA:           {}", format_cr(outcome.ebitda))?,
    }
    Ok(())
}

// ==============================================================================
// Formatting helpers
// ==============================================================================

fn section(out: &mut String, number: u8, title: &str) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "[{number}] {title}")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED).set_header(header);
    table
}

fn align_right(table: &mut Table, columns: &[usize]) {
    for &index in columns {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
}

/// Rupee amount in crores when at least one crore, otherwise in lakhs.
pub fn format_cr(amount: Decimal) -> String {
    let sign = if amount.is_sign_negative() && !amount.is_zero() { "-" } else { "" };
    let magnitude = amount.abs();
    if magnitude >= CRORE {
        format!("{sign}Rs {:.2} Cr", round_crore(magnitude))
    } else {
        format!("{sign}Rs {:.2} L", fixed(to_lakh(magnitude), 2))
    }
}

/// Rounds half away from zero ahead of a `{:.N}` format.
fn fixed(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// A fraction shown as a percentage, e.g. 0.198 -> "19.8%".
fn percent(fraction: Decimal, dp: usize) -> String {
    format!("{:.*}%", dp, fixed(fraction * dec!(100), dp as u32))
}

/// Explicit sign on positive values, e.g. "+20" or "-8".
fn signed(value: Decimal, dp: usize) -> String {
    let rounded = value.round_dp_with_strategy(dp as u32, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("{rounded:.dp$}")
    } else {
        format!("+{:.dp$}", rounded.abs())
    }
}

/// Thousands-separated, e.g. 14396000 -> "14,396,000".
fn grouped(value: Decimal, dp: usize) -> String {
    let rounded = value.round_dp_with_strategy(dp as u32, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.dp$}", rounded.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + int_part.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac_part) = frac_part {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics::ValidationEngine;

    fn default_report() -> ValidationReport {
        let config = configuration::load_config(None).unwrap();
        ValidationEngine::new().run(&config).unwrap()
    }

    #[test]
    fn crore_and_lakh_formatting() {
        assert_eq!(format_cr(dec!(5475000000)), "Rs 547.50 Cr");
        assert_eq!(format_cr(dec!(10000000)), "Rs 1.00 Cr");
        assert_eq!(format_cr(dec!(9999999)), "Rs 100.00 L");
        assert_eq!(format_cr(dec!(250000)), "Rs 2.50 L");
        assert_eq!(format_cr(dec!(-109500000)), "-Rs 10.95 Cr");
        assert_eq!(format_cr(dec!(1040250000)), "Rs 104.03 Cr");
    }

    #[test]
    fn grouping_inserts_thousands_separators() {
        assert_eq!(grouped(dec!(14396000), 0), "14,396,000");
        assert_eq!(grouped(dec!(999), 0), "999");
        assert_eq!(grouped(dec!(1000), 0), "1,000");
        assert_eq!(grouped(dec!(-1542600.4), 1), "-1,542,600.4");
    }

    #[test]
    fn signed_values_carry_explicit_sign() {
        assert_eq!(signed(dec!(20), 0), "+20");
        assert_eq!(signed(dec!(-8), 0), "-8");
        assert_eq!(signed(dec!(0), 0), "+0");
        assert_eq!(signed(dec!(2.5), 2), "+2.50");
    }

    #[test]
    fn report_lists_sections_in_order() {
        let text = render_report(&default_report(), MarginView::Gross).unwrap();
        let positions: Vec<usize> = (1..=9)
            .map(|n| text.find(&format!("[{n}] ")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(text.contains("LANDED COST:               Rs 5.18/egg"));
        assert!(text.contains("Total Revenue:        Rs 14,396,000"));
        assert!(text.contains("(21.14%)"));
    }

    #[test]
    fn report_flags_loss_making_skus_and_spikes() {
        let text = render_report(&default_report(), MarginView::Net).unwrap();
        assert!(text.contains("NET VIEW"));
        assert_eq!(text.matches("LOSS").count(), 2);
        assert_eq!(text.matches("SPIKE").count(), 3);
    }

    #[test]
    fn margin_view_switches_profit_and_contribution_columns() {
        let report = default_report();
        let gross = render_report(&report, MarginView::Gross).unwrap();
        let net = render_report(&report, MarginView::Net).unwrap();

        assert!(gross.contains("GP/Order") && !gross.contains("Net/Order"));
        assert!(net.contains("Net/Order") && !net.contains("GP/Order"));
        assert!(gross.contains("Blended gross margin: 21.14%"));
        assert!(net.contains("Blended net margin: 10.72%"));

        let loss_line = report.sku_matrix.loss_making().next().unwrap();
        let net_contribution = grouped(loss_line.net_contribution, 0);
        assert!(net.contains(&net_contribution));
        assert!(!gross.contains(&net_contribution));
        assert!(gross.contains(&grouped(loss_line.contribution, 0)));
    }

    #[test]
    fn seasonal_deviation_has_one_decimal() {
        let text = render_report(&default_report(), MarginView::Gross).unwrap();
        assert!(text.contains("+20.0%"));
        assert!(text.contains("-8.0%"));
    }

    #[test]
    fn printed_crore_figures_match_the_payload() {
        let report = default_report();
        let payload = export::ExportPayload::assemble(&report).unwrap();
        let text = render_report(&report, MarginView::Gross).unwrap();

        let printed: Decimal = text
            .lines()
            .find_map(|l| l.trim().strip_prefix("Net EBITDA: "))
            .and_then(|rest| rest.strip_suffix(" Cr"))
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(printed, payload.annualized_pnl.net_ebitda_cr);
        assert_eq!(printed, dec!(104.03));
        assert!(text.contains(&format!("Rs {:.2} Cr", payload.annualized_pnl.net_ebitda_cr)));
        assert!(text.contains(&format!("Rs {:.2} Cr", payload.simulator_defaults.ebitda_cr)));
    }

    #[test]
    fn simulation_reports_margin_of_gmv() {
        let text = render_simulation(&default_report().simulator).unwrap();
        assert!(text.contains("EBITDA:           Rs 70.08 Cr (12.8% of GMV)"));
    }

    #[test]
    fn export_section_closes_the_report() {
        let text = render_export_section("{}").unwrap();
        assert!(text.starts_with("\n[10] JSON EXPORT FOR DASHBOARD"));
        assert!(text.trim_end().ends_with(&"=".repeat(RULE_WIDTH)));
    }
}
