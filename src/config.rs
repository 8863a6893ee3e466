//! Plot run configuration

use std::path::PathBuf;

/// Configuration for one plotting run, assembled from CLI flags and passed
/// by reference into the loader and the renderer.
#[derive(Clone, Debug)]
pub struct PlotConfig {
    /// Input trace file path
    pub file_name: PathBuf,
    /// Output PNG path
    pub plot_name: PathBuf,
    /// Plot title text
    pub title: String,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            file_name: PathBuf::from("DlMacStats.txt"),
            plot_name: PathBuf::from("mcs.png"),
            title: "LTE handover MCS".to_string(),
        }
    }
}
