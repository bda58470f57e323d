use crate::error::AnalyticsError;
use crate::util::{percent_of, ratio};
use configuration::SkuMatrixParams;
use core_types::{MarginView, Sku};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

/// Monthly economics of one SKU.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkuLine {
    pub sku: Sku,
    /// Orders per month, truncated to whole orders.
    pub order_volume: u64,
    pub gross_profit: Decimal,
    /// Gross profit after delivery cost and ad revenue.
    pub net_profit: Decimal,
    pub net_margin: Decimal,
    pub contribution: Decimal,
    pub net_contribution: Decimal,
    pub revenue: Decimal,
}

/// The figures shown for a SKU under a given `MarginView`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkuView {
    pub margin: Decimal,
    pub profit_per_order: Decimal,
    pub contribution: Decimal,
}

impl SkuLine {
    /// Net profit per order is below zero. This is a label only.
    pub fn is_loss_making(&self) -> bool {
        self.net_profit < Decimal::ZERO
    }

    pub fn view(&self, view: MarginView) -> SkuView {
        match view {
            MarginView::Gross => SkuView {
                margin: self.sku.margin,
                profit_per_order: self.gross_profit,
                contribution: self.contribution,
            },
            MarginView::Net => SkuView {
                margin: self.net_margin,
                profit_per_order: self.net_profit,
                contribution: self.net_contribution,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkuMatrix {
    pub lines: Vec<SkuLine>,
    pub monthly_orders: u64,
    pub delivery_cost: Decimal,
    pub ad_revenue_per_order: Decimal,
    /// Sum of the truncated per-SKU volumes.
    pub allocated_orders: u64,
    pub total_revenue: Decimal,
    pub total_gross: Decimal,
    pub total_net: Decimal,
    pub gross_margin_pct: Decimal,
    pub net_margin_pct: Decimal,
}

impl SkuMatrix {
    pub fn loss_making(&self) -> impl Iterator<Item = &SkuLine> {
        self.lines.iter().filter(|l| l.is_loss_making())
    }
}

pub fn build_sku_matrix(params: &SkuMatrixParams) -> Result<SkuMatrix, AnalyticsError> {
    let monthly_orders = Decimal::from(params.monthly_orders);

    let mut lines = Vec::with_capacity(params.skus.len());
    let mut allocated_orders = 0u64;
    let mut total_revenue = Decimal::ZERO;
    let mut total_gross = Decimal::ZERO;
    let mut total_net = Decimal::ZERO;

    for sku in &params.skus {
        let split = params.split_for(sku.category).ok_or_else(|| {
            AnalyticsError::Configuration(format!("no volume split for category {}", sku.category))
        })?;
        let pack_share = split.pack_share(sku.pack_size).ok_or_else(|| {
            AnalyticsError::Configuration(format!(
                "no {} pack share for category {}",
                sku.pack_size, sku.category
            ))
        })?;

        // Fractional orders are dropped, not rounded.
        let order_volume = (monthly_orders * split.share * pack_share)
            .trunc()
            .to_u64()
            .ok_or_else(|| AnalyticsError::OutOfRange(format!("{} order volume", sku.name)))?;
        let orders = Decimal::from(order_volume);

        let gross_profit = sku.unit_price * sku.margin;
        let net_profit = gross_profit - params.delivery_cost + params.ad_revenue_per_order;
        let net_margin = ratio(net_profit, sku.unit_price, &format!("{} net margin", sku.name))?;

        let line = SkuLine {
            sku: sku.clone(),
            order_volume,
            gross_profit,
            net_profit,
            net_margin,
            contribution: gross_profit * orders,
            net_contribution: net_profit * orders,
            revenue: sku.unit_price * orders,
        };

        if line.is_loss_making() {
            tracing::info!(sku = %sku.name, net_profit = %net_profit, "SKU loses money on every order.");
        }

        allocated_orders += order_volume;
        total_revenue += line.revenue;
        total_gross += line.contribution;
        total_net += line.net_contribution;
        lines.push(line);
    }

    Ok(SkuMatrix {
        lines,
        monthly_orders: params.monthly_orders,
        delivery_cost: params.delivery_cost,
        ad_revenue_per_order: params.ad_revenue_per_order,
        allocated_orders,
        total_revenue,
        total_gross,
        total_net,
        gross_margin_pct: percent_of(total_gross, total_revenue, "gross_margin_pct")?,
        net_margin_pct: percent_of(total_net, total_revenue, "net_margin_pct")?,
    })
}
