//! Per-cell MCS trace plotting for LTE handover simulations
//!
//! Reads a DlMacStats-style MAC-layer trace, partitions (time, MCS)
//! observations by serving cell, and renders a scatter plot comparing
//! the two cells over time.

pub mod config;
pub mod error;
pub mod plot;
pub mod trace;

pub use config::PlotConfig;
pub use error::{Result, TraceError};
pub use plot::render_scatter;
pub use trace::{load_trace, CellId, CellSeries, McsPoint};
