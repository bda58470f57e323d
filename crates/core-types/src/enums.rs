use serde::{Deserialize, Serialize};
use std::fmt;

/// The three egg categories the catalogue is split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    White,
    Protein,
    Brown,
}

impl Category {
    /// All categories in catalogue order.
    pub const ALL: [Category; 3] = [Category::White, Category::Protein, Category::Brown];

    pub fn label(&self) -> &'static str {
        match self {
            Category::White => "White",
            Category::Protein => "Protein",
            Category::Brown => "Brown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Calendar months in fiscal-year order (April first).
///
/// The variant order is the fiscal order; the seasonal table keeps whatever order it
/// was configured with, so this ordering is only used where a canonical one is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Month {
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
    Jan,
    Feb,
    Mar,
}

impl Month {
    pub const FISCAL_ORDER: [Month; 12] = [
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
        Month::Jan,
        Month::Feb,
        Month::Mar,
    ];

    /// The three-letter abbreviation used as the export key.
    pub fn abbrev(&self) -> &'static str {
        match self {
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.abbrev())
    }
}

/// Which margin the SKU matrix presents.
///
/// `Gross` shows the catalogue margin and gross profit per order. `Net` shows the
/// margin left after last-mile delivery and ad revenue are applied to each order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum MarginView {
    #[default]
    Gross,
    Net,
}
