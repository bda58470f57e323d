use crate::enums::{Category, Month};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single sellable pack in the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sku {
    pub name: String,
    /// Eggs per pack (6, 10 or 30).
    pub pack_size: u32,
    pub unit_price: Decimal,
    /// Gross margin as a fraction of the unit price.
    pub margin: Decimal,
    pub category: Category,
}

/// Share of a category's orders that go to one pack size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackShare {
    pub pack_size: u32,
    pub share: Decimal,
}

/// How a category's orders are distributed.
///
/// `share` is the category's fraction of all orders; `packs` splits that fraction
/// across pack sizes. Neither is normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySplit {
    pub category: Category,
    pub share: Decimal,
    pub packs: Vec<PackShare>,
}

impl CategorySplit {
    pub fn pack_share(&self, pack_size: u32) -> Option<Decimal> {
        self.packs
            .iter()
            .find(|p| p.pack_size == pack_size)
            .map(|p| p.share)
    }
}

/// Shelf prices for one SKU across the three quick-commerce competitors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorRow {
    pub sku: String,
    pub blinkit: Decimal,
    pub zepto: Decimal,
    pub swiggy: Decimal,
    #[serde(default)]
    pub analysis: String,
}

impl CompetitorRow {
    pub fn prices(&self) -> [Decimal; 3] {
        [self.blinkit, self.zepto, self.swiggy]
    }
}

/// Price multiplier for one month relative to the base farm-gate rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalFactor {
    pub month: Month,
    pub factor: Decimal,
}
