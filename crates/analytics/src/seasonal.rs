use configuration::SeasonalParams;
use core_types::Month;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Factors above this are flagged as a seasonal price spike.
pub const SPIKE_THRESHOLD: Decimal = dec!(1.10);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalEntry {
    pub month: Month,
    pub factor: Decimal,
    pub price: Decimal,
    /// `(factor - 1) * 100`.
    pub deviation_pct: Decimal,
    pub is_spike: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalTable {
    pub base_price: Decimal,
    /// In configured order, never sorted.
    pub entries: Vec<SeasonalEntry>,
}

pub fn build_seasonal_table(params: &SeasonalParams) -> SeasonalTable {
    let entries = params
        .months
        .iter()
        .map(|m| SeasonalEntry {
            month: m.month,
            factor: m.factor,
            price: params.base_price * m.factor,
            deviation_pct: (m.factor - Decimal::ONE) * dec!(100),
            is_spike: m.factor > SPIKE_THRESHOLD,
        })
        .collect();

    SeasonalTable {
        base_price: params.base_price,
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> SeasonalTable {
        let config = configuration::load_config(None).unwrap();
        build_seasonal_table(&config.seasonal)
    }

    #[test]
    fn price_is_base_times_factor_in_fiscal_order() {
        let t = table();
        let months: Vec<Month> = t.entries.iter().map(|e| e.month).collect();
        assert_eq!(months, Month::FISCAL_ORDER.to_vec());
        for e in &t.entries {
            assert_eq!(e.price, dec!(4.75) * e.factor);
        }
    }

    #[test]
    fn december_runs_twenty_percent_over_base() {
        let t = table();
        let dec_entry = t.entries.iter().find(|e| e.month == Month::Dec).unwrap();
        assert_eq!(dec_entry.price, dec!(5.70));
        assert_eq!(dec_entry.deviation_pct, dec!(20.0));
    }

    #[test]
    fn winter_months_are_spikes() {
        let spikes: Vec<Month> = table()
            .entries
            .iter()
            .filter(|e| e.is_spike)
            .map(|e| e.month)
            .collect();
        assert_eq!(spikes, vec![Month::Dec, Month::Jan, Month::Feb]);
    }

    #[test]
    fn configured_order_is_preserved_even_when_unsorted() {
        let mut config = configuration::load_config(None).unwrap();
        config.seasonal.months.reverse();
        let t = build_seasonal_table(&config.seasonal);
        assert_eq!(t.entries[0].month, Month::Mar);
        assert_eq!(t.entries[11].month, Month::Apr);
    }
}
