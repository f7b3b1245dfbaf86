pub mod analyzer;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod ui;
pub mod warnings;

pub use analyzer::{AnalysisResult, ReleaseAnalyzer, SelectedTag, DEFAULT_VERSION};
pub use error::{ReleaseScoutError, Result};
