use crate::app::App;
use crate::calculation::cost_report::CostReport;
use crate::calculation::engine;
use crate::cli::Commands;
use crate::prelude::*;

/// Turns the parsed command into a renderable report.
pub fn route(ctx: &App) -> AppResult<CostReport> {
    let report: CostReport = match &ctx.cli.command {
        // geocost estimate.
        Commands::Estimate(args) => {
            let input = args.try_into_input()?;
            let result = engine::compute(&input)?;

            if args.total {
                result.grand_total_per_period.into()
            } else {
                result.into()
            }
        }

        // geocost models.
        Commands::Models => CostReport::Catalog,

        // geocost raw.
        Commands::Raw(args) => {
            let input = args.try_into_input()?;
            let result = engine::compute(&input)?;

            let json = if ctx.cli.unformatted {
                serde_json::to_string(&result).into_diagnostic()?
            } else {
                serde_json::to_string_pretty(&result).into_diagnostic()?
            };

            CostReport::Raw(json)
        }
    };

    Ok(report)
}
