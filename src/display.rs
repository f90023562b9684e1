use crate::calculation::cost_report::CostReport;
use crate::prelude::*;

/// Terminal output side of the app.
pub struct Display {
    unformatted: bool,
}

impl Display {
    pub fn new(unformatted: bool) -> Self {
        Display { unformatted }
    }

    pub fn print(&self, report: &CostReport) -> AppResult {
        println!("{}", report.render(self.unformatted)?);

        Ok(())
    }
}

/// Formats a dollar amount for humans.
///
/// Sub-cent values get four decimals so tiny per-run costs don't collapse
/// to $0.00; everything else gets the usual two.
pub fn format_currency(value: f64) -> String {
    if value < 0.01 {
        // example: $0.0003
        return format!("${:.4}", value);
    }

    // example: $1.06
    format!("${:.2}", value)
}
