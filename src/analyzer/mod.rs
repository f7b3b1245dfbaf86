//! Analysis engine: find the last release tag and the commits since it

pub mod release_analyzer;

pub use release_analyzer::{AnalysisResult, ReleaseAnalyzer, SelectedTag, DEFAULT_VERSION};
