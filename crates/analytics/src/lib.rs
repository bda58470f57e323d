//! # Yolk Analytics Engine
//!
//! The calculation pipeline behind the egg-category financials: landed cost, the nine
//! SKU P&L, blended margins, the annualized category P&L, unit economics, the EBITDA
//! bridge, competitor price variance, seasonal pricing and the simulator defaults.
//!
//! ## Architectural Principles
//!
//! - **Pure logic:** no I/O. Inputs come from `configuration::Config`, outputs are plain
//!   data. Formatting and export live in other crates.
//! - **Stateless calculation:** `ValidationEngine` evaluates each group once in
//!   dependency order and returns a `ValidationReport`.
//! - **Exact arithmetic:** all figures are `Decimal`, so waterfall identities hold to
//!   the last digit.
//!
//! ## Public API
//!
//! - `ValidationEngine`: runs the whole pipeline.
//! - `ValidationReport`: everything one run produced.
//! - The per-group builders, for callers that need a single figure (e.g. `simulate`).
//! - `AnalyticsError`: the error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod annual_pnl;
pub mod blended_margin;
pub mod competition;
pub mod ebitda_bridge;
pub mod engine;
pub mod error;
pub mod report;
pub mod seasonal;
pub mod simulator;
pub mod sku_matrix;
pub mod supply_chain;
pub mod unit_economics;
pub mod util;

// Re-export the key components to create a clean, public-facing API.
pub use annual_pnl::{AnnualPnl, PnlLine};
pub use blended_margin::BlendedMargin;
pub use competition::PriceVariance;
pub use ebitda_bridge::{EbitdaBridge, WaterfallBar};
pub use engine::ValidationEngine;
pub use error::AnalyticsError;
pub use report::ValidationReport;
pub use seasonal::{SeasonalEntry, SeasonalTable};
pub use simulator::{SimulatorInputs, SimulatorOutcome, simulate};
pub use sku_matrix::{SkuLine, SkuMatrix};
pub use supply_chain::SupplyChainCost;
pub use unit_economics::UnitEconomics;
