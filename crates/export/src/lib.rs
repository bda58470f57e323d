//! # Yolk Export
//!
//! Turns a `ValidationReport` into the JSON payload the dashboard consumes, and checks
//! the dashboard's own hardcoded constants against it.
//!
//! The payload field names and nesting are the wire contract with the dashboard.
//! Assembly only copies and rounds; it never recomputes a figure.

pub mod error;
pub mod parity;
pub mod payload;

pub use error::ExportError;
pub use parity::{ParityCheck, ParityReport, verify_dashboard};
pub use payload::{
    AnnualizedPnlExport, EbitdaBridgeExport, ExportPayload, SeasonalFactors,
    SimulatorDefaultsExport, SupplyChainExport,
};
