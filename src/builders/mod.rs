pub mod class_analysis;

pub use class_analysis::{analyze_solution, AnalysisOptions};
