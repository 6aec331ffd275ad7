//! PGPlan Report - Renderers for analysis results
//!
//! Pure string producers for the analyzer's value objects: console-style
//! text blocks, Markdown tables, and JSON documents. No renderer performs
//! I/O; callers decide where the output goes.

pub mod json;
pub mod markdown;
pub mod text;

pub use json::{AnalysisReport, render_analysis};
