pub mod cost_report;
pub mod engine;
pub mod selection;
