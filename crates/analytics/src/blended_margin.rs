use configuration::{BlendedMarginParams, CategoryWeights};
use core_types::Category;
use rust_decimal::Decimal;
use serde::Serialize;

/// One category's term in a blended-margin sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryTerm {
    pub category: Category,
    pub share: Decimal,
    pub margin: Decimal,
    pub weighted: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlendedMargin {
    pub current_terms: Vec<CategoryTerm>,
    /// Blended margin of the current mix, as a fraction.
    pub current: Decimal,
    pub target_terms: Vec<CategoryTerm>,
    /// Blended margin after the mix shift.
    pub target: Decimal,
    /// `target - current`.
    pub uplift: Decimal,
}

/// Volume-weighted margin `Σ share × margin`. Shares are not normalized.
pub fn blended(shares: &CategoryWeights, margins: &CategoryWeights) -> Decimal {
    terms(shares, margins).iter().map(|t| t.weighted).sum()
}

fn terms(shares: &CategoryWeights, margins: &CategoryWeights) -> Vec<CategoryTerm> {
    Category::ALL
        .iter()
        .map(|&category| {
            let share = shares.get(category);
            let margin = margins.get(category);
            CategoryTerm {
                category,
                share,
                margin,
                weighted: share * margin,
            }
        })
        .collect()
}

pub fn calculate_blended_margin(params: &BlendedMarginParams) -> BlendedMargin {
    let current = blended(&params.current_mix, &params.margins);
    let target = blended(&params.target_mix, &params.margins);

    BlendedMargin {
        current_terms: terms(&params.current_mix, &params.margins),
        current,
        target_terms: terms(&params.target_mix, &params.margins),
        target,
        uplift: target - current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn params() -> BlendedMarginParams {
        configuration::load_config(None).unwrap().blended_margin
    }

    #[test]
    fn current_and_target_mixes() {
        let b = calculate_blended_margin(&params());
        assert_eq!(b.current, dec!(0.198));
        assert_eq!(b.target, dec!(0.213));
        assert_eq!(b.uplift, dec!(0.015));
    }

    #[test]
    fn terms_sum_to_the_blend() {
        let b = calculate_blended_margin(&params());
        assert_eq!(b.current_terms[0].weighted, dec!(0.105));
        let sum: Decimal = b.current_terms.iter().map(|t| t.weighted).sum();
        assert_eq!(sum, b.current);
    }

    #[test]
    fn moving_share_to_the_richest_category_raises_the_blend() {
        let p = params();
        let mut previous = blended(&p.current_mix, &p.margins);
        for step in 1..=5 {
            let moved = dec!(0.1) * Decimal::from(step);
            let shares = CategoryWeights {
                white: p.current_mix.white - moved,
                protein: p.current_mix.protein,
                brown: p.current_mix.brown + moved,
            };
            let next = blended(&shares, &p.margins);
            assert!(next > previous);
            previous = next;
        }
    }

    #[test]
    fn shares_are_not_normalized() {
        let p = params();
        let doubled = CategoryWeights {
            white: dec!(1.4),
            protein: dec!(0.4),
            brown: dec!(0.2),
        };
        assert_eq!(blended(&doubled, &p.margins), dec!(0.396));
    }
}
