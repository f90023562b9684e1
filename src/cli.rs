use clap::{Parser, Subcommand, ValueEnum};
use itertools::Itertools;

use crate::calculation::engine::CalculationInput;
use crate::calculation::selection::Selection;
use crate::config::presets;
use crate::prelude::*;

impl Cli {
    /// Convenience constructor to avoid redundant `Parser` imports in main.
    pub fn new() -> Self {
        Cli::parse()
    }
}

// Structs

#[derive(Parser, Debug)]
#[command(
    name = "geocost",
    version,
    about = "Estimate LLM spend for a two-pass prompt pipeline with optional web search."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    //
    // Global args start here..
    //

    //
    /// No currency formatting, compact JSON. Good for piping.
    #[arg(long, default_value_t = false, global = true)]
    pub unformatted: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate spend for the selected models.
    Estimate(EstimateArgs),

    /// List every model in the catalog, grouped by provider.
    Models,

    /// Dump the full calculation result as JSON.
    ///
    /// This outputs every per-model field the engine computes, including the
    /// field-by-field pass breakdown. Useful for piping into tools like `jq`
    /// or for building custom analysis scripts.
    Raw(EstimateArgs),
}

#[derive(clap::Args, Debug)]
#[command(after_help = presets_help())]
pub struct EstimateArgs {
    /// Number of prompts per run.
    #[arg(long, default_value_t = 100)]
    pub prompts: u64,

    /// Models to price, comma separated, at most one per provider.
    /// Naming two models of the same provider keeps the last one, exactly
    /// like toggling in the interactive picker.
    #[arg(long, value_delimiter = ',', default_value = "gpt-5-nano")]
    pub models: Vec<String>,

    /// Share of prompts that trigger web search / grounding, in percent.
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub web_search: u8,

    /// Refresh cadence: daily, weekly or monthly.
    #[arg(long, default_value = "weekly")]
    pub frequency: String,

    /// Accounting period the totals accumulate over.
    #[arg(long, value_enum, default_value_t = AccountingPeriod::Month)]
    pub period: AccountingPeriod,

    /// Number of projects running this pipeline.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub projects: u32,

    /// Print only the grand total for the period.
    #[arg(long, default_value_t = false)]
    pub total: bool,
}

impl EstimateArgs {
    /// Builds the engine input.
    ///
    /// Model ids run through the selection controller one by one, so the
    /// one-model-per-provider rule applies to cli input exactly as it does
    /// to interactive toggling. Unknown ids fail here, before the engine.
    pub fn try_into_input(&self) -> AppResult<CalculationInput> {
        let mut selection = Selection::new();

        for model_id in &self.models {
            selection.toggle(model_id)?;
        }

        Ok(CalculationInput {
            prompt_count: self.prompts,
            selection,
            web_search_percent: self.web_search,
            frequency: self.frequency.clone(),
            period: self.period,
            projects: self.projects,
        })
    }
}

/// Whether per-period totals accumulate over a month or a year. Decides
/// which frequency table base applies.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccountingPeriod {
    #[default]
    Month,
    Year,
}

impl AccountingPeriod {
    /// The period as a plain noun, for report labels.
    pub fn noun(&self) -> &'static str {
        match self {
            AccountingPeriod::Month => "month",
            AccountingPeriod::Year => "year",
        }
    }
}

// The quick-pick values from the interactive variants, as a help footer.
fn presets_help() -> String {
    format!(
        "Quick picks:\n  prompts (month): {}\n  prompts (year):  {}\n  projects:        {}",
        presets::MONTHLY_PROMPT_PRESETS.iter().join(", "),
        presets::YEARLY_PROMPT_PRESETS.iter().join(", "),
        presets::PROJECT_PRESETS.iter().join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn args(models: &str) -> EstimateArgs {
        EstimateArgs {
            prompts: 100,
            models: models.split(',').map(str::to_owned).collect(),
            web_search: 100,
            frequency: "weekly".to_owned(),
            period: AccountingPeriod::Month,
            projects: 1,
            total: false,
        }
    }

    #[test]
    fn cli_assembles_input_through_the_selection_controller() {
        let input = args("gpt-5-nano,gemini-3-pro-preview").try_into_input().unwrap();

        assert_eq!(input.selection.len(), 2);
        assert!(input.selection.contains("gpt-5-nano"));
        assert!(input.selection.contains("gemini-3-pro-preview"));
    }

    #[test]
    fn last_model_of_a_provider_wins() {
        let input = args("gpt-5-nano,gpt-5.2").try_into_input().unwrap();

        assert_eq!(input.selection.len(), 1);
        assert!(input.selection.contains("gpt-5.2"));
    }

    #[test]
    fn unknown_model_fails_before_the_engine() {
        let error = args("gpt-2").try_into_input().unwrap_err();

        assert!(matches!(
            error.downcast_ref::<Error>(),
            Some(Error::UnknownModel(_))
        ));
    }

    #[test]
    fn period_nouns() {
        assert_eq!(AccountingPeriod::Month.noun(), "month");
        assert_eq!(AccountingPeriod::Year.noun(), "year");
    }
}
