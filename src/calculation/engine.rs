use crate::calculation::selection::Selection;
use crate::cli::AccountingPeriod;
use crate::config::frequency_table;
use crate::config::model_catalog::ModelDefinition;
use crate::config::token_assumptions::{AVG_TOKENS, TokenAssumptions};
use crate::error::Error;
use crate::prelude::*;

/// Every knob for a single estimate.
///
/// Rebuilt from scratch for each invocation; the result is always a full
/// re-derivation, never an incremental update of a previous one.
#[derive(Debug, Clone)]
pub struct CalculationInput {
    pub prompt_count: u64,
    pub selection: Selection,
    /// Share of prompts that trigger a web search, 0-100.
    pub web_search_percent: u8,
    /// Cadence key, resolved against the period's frequency table.
    pub frequency: String,
    pub period: AccountingPeriod,
    /// Number of projects running the pipeline. 1 for the single-project
    /// variant.
    pub projects: u32,
}

/// Field-by-field detail behind the pass totals.
#[derive(Debug, Clone, Serialize)]
pub struct PassBreakdown {
    pub pass1_input: f64,
    pub pass1_output: f64,
    pub pass2_input: f64,
    pub pass2_output: f64,
}

/// Costs for one selected model.
///
/// `total_per_run` covers a single project; `total_per_period` is scaled by
/// both the frequency multiplier and the project count.
#[derive(Debug, Clone, Serialize)]
pub struct ModelCost {
    pub model_id: &'static str,
    pub model_name: &'static str,
    pub provider: &'static str,
    pub pass1_cost: f64,
    pub pass2_cost: f64,
    pub web_search_calls: f64,
    pub web_search_cost: f64,
    pub total_per_run: f64,
    pub total_per_period: f64,
    pub breakdown: PassBreakdown,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalculationResult {
    pub models: Vec<ModelCost>,
    pub runs_per_period: u32,
    pub period: AccountingPeriod,
    pub projects: u32,
    /// Sum over selected models, one project, one run.
    pub per_project_per_run: f64,
    pub per_project_per_period: f64,
    /// The per-project figures times the project count. Equal to them when
    /// projects is 1, reported separately regardless.
    pub grand_total_per_run: f64,
    pub grand_total_per_period: f64,
}

/// Prices the whole selection. Pure: static tables in, numbers out.
///
/// No rounding happens here; formatting to 2 or 4 decimals is the
/// renderer's business and never feeds back into these fields.
pub fn compute(input: &CalculationInput) -> AppResult<CalculationResult> {
    validate(input)?;

    let frequency = frequency_table::lookup(input.period, &input.frequency)?;

    let models: Vec<ModelCost> = input
        .selection
        .models()
        .iter()
        .map(|model| price_model(model, input, frequency.runs_per_period, &AVG_TOKENS))
        .collect();

    // Empty selection folds to all-zero totals, which is a valid result.
    let per_project_per_run: f64 = models.iter().map(|cost| cost.total_per_run).sum();
    let per_project_per_period = per_project_per_run * f64::from(frequency.runs_per_period);

    Ok(CalculationResult {
        per_project_per_run,
        per_project_per_period,
        grand_total_per_run: per_project_per_run * f64::from(input.projects),
        grand_total_per_period: per_project_per_period * f64::from(input.projects),
        runs_per_period: frequency.runs_per_period,
        period: input.period,
        projects: input.projects,
        models,
    })
}

// Callers clamp before calling, so these are precondition checks, not
// clamps. A violation here is a caller bug.
fn validate(input: &CalculationInput) -> Result<(), Error> {
    if input.web_search_percent > 100 {
        return Err(Error::InvalidInput(format!(
            "web search percentage {} exceeds 100",
            input.web_search_percent
        )));
    }

    if input.projects == 0 {
        return Err(Error::InvalidInput(
            "project count must be at least 1".to_owned(),
        ));
    }

    Ok(())
}

fn price_model(
    model: &'static ModelDefinition,
    input: &CalculationInput,
    runs_per_period: u32,
    tokens: &TokenAssumptions,
) -> ModelCost {
    let prompts = input.prompt_count as f64;

    let pass1_input = token_cost(prompts, tokens.pass1_input, model.input);
    let pass1_output = token_cost(prompts, tokens.pass1_output, model.output);

    // Pass 2 always bills at the pass2 rates, even when the delegate is the
    // model itself.
    let pass2_input = token_cost(prompts, tokens.pass2_input, model.pass2_input);
    let pass2_output = token_cost(prompts, tokens.pass2_output, model.pass2_output);

    let pass1_cost = pass1_input + pass1_output;
    let pass2_cost = pass2_input + pass2_output;

    // Billed per bucket of 1,000 calls. Calls may be fractional.
    let web_search_calls = prompts * (f64::from(input.web_search_percent) / 100.0);
    let web_search_cost = web_search_calls / 1000.0 * model.web_search_cost;

    let total_per_run = pass1_cost + pass2_cost + web_search_cost;
    let total_per_period =
        total_per_run * f64::from(runs_per_period) * f64::from(input.projects);

    ModelCost {
        model_id: model.id,
        model_name: model.name,
        provider: model.provider,
        pass1_cost,
        pass2_cost,
        web_search_calls,
        web_search_cost,
        total_per_run,
        total_per_period,
        breakdown: PassBreakdown {
            pass1_input,
            pass1_output,
            pass2_input,
            pass2_output,
        },
    }
}

fn token_cost(prompts: f64, avg_tokens: u32, price_per_million: f64) -> f64 {
    prompts * (f64::from(avg_tokens) / 1_000_000.0) * price_per_million
}
