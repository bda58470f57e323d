use crate::error::AnalyticsError;
use crate::util::percent_of;
use configuration::CompetitionParams;
use core_types::CompetitorRow;
use rust_decimal::Decimal;
use serde::Serialize;

/// Price dispersion of one SKU across competitors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceVariance {
    pub row: CompetitorRow,
    pub average: Decimal,
    pub min: Decimal,
    pub max: Decimal,
    /// `(max - min) / average * 100`.
    pub variance_pct: Decimal,
}

pub fn price_variance(row: &CompetitorRow) -> Result<PriceVariance, AnalyticsError> {
    let prices = row.prices();
    let average = prices.iter().sum::<Decimal>() / Decimal::from(prices.len());
    let min = prices.iter().copied().fold(Decimal::MAX, Decimal::min);
    let max = prices.iter().copied().fold(Decimal::MIN, Decimal::max);
    let variance_pct = percent_of(max - min, average, &format!("{} price variance", row.sku))?;

    Ok(PriceVariance {
        row: row.clone(),
        average,
        min,
        max,
        variance_pct,
    })
}

pub fn benchmark_competitors(
    params: &CompetitionParams,
) -> Result<Vec<PriceVariance>, AnalyticsError> {
    params.rows.iter().map(price_variance).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn row(blinkit: Decimal, zepto: Decimal, swiggy: Decimal) -> CompetitorRow {
        CompetitorRow {
            sku: "test".to_string(),
            blinkit,
            zepto,
            swiggy,
            analysis: String::new(),
        }
    }

    #[test]
    fn commodity_white_stays_under_two_percent() {
        let v = price_variance(&row(dec!(228), dec!(230), dec!(232))).unwrap();
        assert_eq!(v.average, dec!(230));
        assert_eq!(v.variance_pct.round_dp(3), dec!(1.739));
    }

    #[test]
    fn brown_eggs_show_the_widest_spread() {
        let config = configuration::load_config(None).unwrap();
        let rows = benchmark_competitors(&config.competition).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].min, dec!(127));
        assert_eq!(rows[2].max, dec!(143));
        assert_eq!(rows[2].variance_pct.round_dp(1), dec!(12.1));
        assert!(rows[1].variance_pct > rows[0].variance_pct);
    }

    #[test]
    fn all_zero_prices_are_rejected() {
        let err = price_variance(&row(dec!(0), dec!(0), dec!(0))).unwrap_err();
        assert!(matches!(err, AnalyticsError::DivisionByZero(_)));
    }
}
