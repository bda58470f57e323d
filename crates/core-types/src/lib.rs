pub mod enums;
pub mod structs;
pub mod units;

// Re-export the core types to provide a clean public API.
pub use enums::{Category, MarginView, Month};
pub use structs::{CategorySplit, CompetitorRow, PackShare, SeasonalFactor, Sku};
pub use units::{CRORE, LAKH, round_crore, to_crore, to_lakh};
