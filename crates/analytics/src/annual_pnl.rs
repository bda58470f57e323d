use crate::error::AnalyticsError;
use crate::util::percent_of;
use configuration::AnnualPnlParams;
use rust_decimal::Decimal;
use serde::Serialize;

/// A row of the annualized P&L table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PnlLine {
    Item {
        label: String,
        /// Signed: costs are negative.
        amount: Decimal,
        note: String,
    },
    /// A visual divider with no numeric meaning.
    Separator,
}

impl PnlLine {
    fn item(label: &str, amount: Decimal, note: impl Into<String>) -> Self {
        PnlLine::Item {
            label: label.to_string(),
            amount,
            note: note.into(),
        }
    }
}

/// Annualized egg-category P&L (Table 6.1).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnualPnl {
    pub assumptions: AnnualPnlParams,
    pub gmv: Decimal,
    pub cogs: Decimal,
    pub gross_profit_trading: Decimal,
    pub wastage: Decimal,
    pub net_gross: Decimal,
    pub last_mile: Decimal,
    pub dark_store_ops: Decimal,
    pub payment_tech: Decimal,
    pub total_opex: Decimal,
    pub operational_contribution: Decimal,
    pub ad_revenue: Decimal,
    pub platform_fees: Decimal,
    pub total_monetization: Decimal,
    pub net_ebitda: Decimal,
    pub lines: Vec<PnlLine>,
}

impl AnnualPnl {
    /// `amount` as a percent of GMV, recomputed on every call.
    pub fn pct_of_gmv(&self, amount: Decimal) -> Result<Decimal, AnalyticsError> {
        percent_of(amount, self.gmv, "percent of GMV")
    }
}

/// Builds the P&L waterfall. `landed_cost` only appears in the COGS note.
pub fn build_annual_pnl(
    params: &AnnualPnlParams,
    landed_cost: Decimal,
) -> Result<AnnualPnl, AnalyticsError> {
    let gmv = Decimal::from(params.daily_orders) * params.aov * Decimal::from(params.days);
    if gmv.is_zero() {
        return Err(AnalyticsError::DivisionByZero("annual GMV".to_string()));
    }

    let cogs = gmv * params.cogs_pct;
    let gross_profit_trading = gmv - cogs;
    let wastage = gmv * params.wastage_pct;
    let net_gross = gross_profit_trading - wastage;

    let last_mile = gmv * params.last_mile_pct;
    let dark_store_ops = gmv * params.dark_store_pct;
    let payment_tech = gmv * params.payment_tech_pct;
    let total_opex = last_mile + dark_store_ops + payment_tech;
    let operational_contribution = net_gross - total_opex;

    let ad_revenue = gmv * params.ad_revenue_pct;
    let platform_fees = gmv * params.platform_fee_pct;
    let total_monetization = ad_revenue + platform_fees;
    let net_ebitda = operational_contribution + total_monetization;

    let lines = vec![
        PnlLine::item("Gross Merchandise Value (GMV)", gmv, "Full recognition under 1P model"),
        PnlLine::item(
            "Cost of Goods Sold (COGS)",
            -cogs,
            format!(
                "Landed cost Rs {:.2}/egg vs Rs {:.2} blended realization",
                landed_cost, params.blended_realization
            ),
        ),
        PnlLine::item("Gross Profit (Trading)", gross_profit_trading, "Base trading margin"),
        PnlLine::item("Wastage & Shrinkage", -wastage, "Expired stock / In store breakage"),
        PnlLine::item("Net Gross Profit", net_gross, ""),
        PnlLine::Separator,
        PnlLine::item("Allocated Last Mile Delivery", -last_mile, "Allocated cost (part of basket)"),
        PnlLine::item("Dark Store Operations", -dark_store_ops, "Picking, Packing, Rent, Utilities"),
        PnlLine::item("Payment Gateway & Tech", -payment_tech, "2% MDR average"),
        PnlLine::item("Operational Contribution", operational_contribution, "Operationally Breakeven"),
        PnlLine::Separator,
        PnlLine::item("Ad Revenue (Search/Display)", ad_revenue, "15% of GMV"),
        PnlLine::item("Platform/Handling Fees", platform_fees, "Allocated fee income"),
        PnlLine::item("NET CATEGORY EBITDA", net_ebitda, "Profit driven by Ads & Fees"),
    ];

    Ok(AnnualPnl {
        assumptions: params.clone(),
        gmv,
        cogs,
        gross_profit_trading,
        wastage,
        net_gross,
        last_mile,
        dark_store_ops,
        payment_tech,
        total_opex,
        operational_contribution,
        ad_revenue,
        platform_fees,
        total_monetization,
        net_ebitda,
        lines,
    })
}
