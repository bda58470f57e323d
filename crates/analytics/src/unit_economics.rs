use configuration::UnitEconomicsParams;
use rust_decimal::Decimal;
use serde::Serialize;

/// Scenario A: a branded six-egg order on its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandaloneOrder {
    pub revenue: Decimal,
    pub cogs: Decimal,
    pub gross_margin: Decimal,
    pub delivery_cost: Decimal,
    /// Gross margin less delivery, before the small-cart fee.
    pub net_before_fee: Decimal,
    pub small_cart_fee: Decimal,
    pub net_profit: Decimal,
}

/// Scenario B: an average basket that happens to contain eggs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasketOrder {
    pub delivery_cost: Decimal,
    pub category_margin: Decimal,
    /// Category margin less delivery.
    pub trading_result: Decimal,
    pub ad_revenue: Decimal,
    pub final_profit: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitEconomics {
    pub standalone: StandaloneOrder,
    pub basket: BasketOrder,
}

pub fn calculate_unit_economics(params: &UnitEconomicsParams) -> UnitEconomics {
    let a = &params.standalone;
    let gross_margin = a.price - a.cogs;
    let net_before_fee = gross_margin - a.delivery_cost;

    let b = &params.basket;
    let trading_result = b.category_margin - b.delivery_cost;

    UnitEconomics {
        standalone: StandaloneOrder {
            revenue: a.price,
            cogs: a.cogs,
            gross_margin,
            delivery_cost: a.delivery_cost,
            net_before_fee,
            small_cart_fee: a.small_cart_fee,
            net_profit: net_before_fee + a.small_cart_fee,
        },
        basket: BasketOrder {
            delivery_cost: b.delivery_cost,
            category_margin: b.category_margin,
            trading_result,
            ad_revenue: b.ad_revenue,
            final_profit: trading_result + b.ad_revenue,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn small_cart_fee_turns_the_standalone_order_positive() {
        let config = configuration::load_config(None).unwrap();
        let u = calculate_unit_economics(&config.unit_economics);
        assert_eq!(u.standalone.gross_margin, dec!(20));
        assert_eq!(u.standalone.net_before_fee, dec!(-10));
        assert_eq!(u.standalone.net_profit, dec!(5));
    }

    #[test]
    fn ads_rescue_the_basket() {
        let config = configuration::load_config(None).unwrap();
        let u = calculate_unit_economics(&config.unit_economics);
        assert_eq!(u.basket.trading_result, dec!(-5));
        assert_eq!(u.basket.final_profit, dec!(10));
    }
}
