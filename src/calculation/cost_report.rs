use crate::calculation::engine::CalculationResult;
use crate::config::model_catalog;
use crate::display;
use crate::prelude::*;

/// A rendered-output shape for one command.
///
/// Can hold a single dollar figure, a full estimate, the catalog listing,
/// or a prebuilt JSON dump for the raw command.
#[derive(Serialize)]
pub enum CostReport {
    /// One total, nothing else.
    Money(f64),
    /// Per-model breakdown plus the totals block.
    Estimate(CalculationResult),
    /// The model catalog, grouped by provider.
    Catalog,
    /// Raw JSON dump for the raw command.
    Raw(String),
}

impl CostReport {
    /// Renders the report into a printable string.
    /// - Estimate and Catalog become CSV data.
    /// - Money becomes a formatted currency string.
    pub fn render(&self, unformatted: bool) -> AppResult<String> {
        match self {
            CostReport::Money(value) => Ok(render_money(*value, unformatted)),
            CostReport::Estimate(result) => format_estimate_csv(result, unformatted),
            CostReport::Catalog => format_catalog_csv(),
            CostReport::Raw(json) => Ok(json.clone()),
        }
    }
}

fn render_money(value: f64, unformatted: bool) -> String {
    if unformatted {
        // example: 1.05525
        return value.to_string();
    }

    display::format_currency(value)
}

/// Serializes an estimate into CSV: one row per model, then totals rows.
///
/// The totals rows have fewer cells than the model rows, hence the
/// flexible writer.
fn format_estimate_csv(result: &CalculationResult, unformatted: bool) -> AppResult<String> {
    /// Column layout for the per-model rows.
    #[derive(Serialize)]
    struct ModelRow {
        /// example: "GPT-5 Nano (OpenAI)"
        display_name: String,
        pass1: String,
        pass2: String,
        web_search: String,
        per_run: String,
        per_period: String,
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_writer(vec![]);

    let period = result.period.noun();
    let per_period_header = format!("per {period}");

    writer
        .write_record([
            "model",
            "pass 1",
            "pass 2",
            "web search",
            "per run",
            per_period_header.as_str(),
        ])
        .into_diagnostic()?;

    for cost in &result.models {
        let row = ModelRow {
            display_name: format!("{} ({})", cost.model_name, cost.provider),
            pass1: render_money(cost.pass1_cost, unformatted),
            pass2: render_money(cost.pass2_cost, unformatted),
            web_search: render_money(cost.web_search_cost, unformatted),
            per_run: render_money(cost.total_per_run, unformatted),
            per_period: render_money(cost.total_per_period, unformatted),
        };

        writer
            .serialize(row)
            .into_diagnostic()
            .wrap_err("Failed to serialize model cost row to CSV format")?;
    }

    writer
        .write_record([
            format!("total per project ({}x/{period})", result.runs_per_period),
            render_money(result.per_project_per_run, unformatted),
            render_money(result.per_project_per_period, unformatted),
        ])
        .into_diagnostic()?;

    // The grand total line only earns its place when it differs.
    if result.projects > 1 {
        writer
            .write_record([
                format!("grand total ({} projects)", result.projects),
                render_money(result.grand_total_per_run, unformatted),
                render_money(result.grand_total_per_period, unformatted),
            ])
            .into_diagnostic()?;
    }

    finish_csv(writer)
}

/// Serializes the full catalog into CSV, provider by provider.
fn format_catalog_csv() -> AppResult<String> {
    /// Column layout for one catalog entry.
    #[derive(Serialize)]
    struct CatalogRow {
        provider: &'static str,
        id: &'static str,
        name: &'static str,
        /// Pass 1 prices, example: "$0.05/M in, $0.40/M out".
        pricing: String,
        pass2_model: &'static str,
        /// example: "$10/1k calls".
        web_search: String,
    }

    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(vec![]);

    for provider in model_catalog::providers() {
        for model in model_catalog::list_by_provider(provider) {
            let row = CatalogRow {
                provider: model.provider,
                id: model.id,
                name: model.name,
                pricing: format!("${}/M in, ${}/M out", model.input, model.output),
                pass2_model: model.pass2_model,
                web_search: format!("${}/1k calls", model.web_search_cost),
            };

            writer
                .serialize(row)
                .into_diagnostic()
                .wrap_err("Failed to serialize catalog row to CSV format")?;
        }
    }

    finish_csv(writer)
}

fn finish_csv(writer: csv::Writer<Vec<u8>>) -> AppResult<String> {
    let data = writer
        .into_inner()
        .into_diagnostic()
        .wrap_err("Failed to get writer data.")?;

    let csv_string = String::from_utf8(data).into_diagnostic().wrap_err("Invalid utf-8")?;

    Ok(csv_string)
}

/// Converts a bare total into a Money report.
impl From<f64> for CostReport {
    fn from(value: f64) -> Self {
        CostReport::Money(value)
    }
}

/// Converts an engine result into a full estimate report.
impl From<CalculationResult> for CostReport {
    fn from(result: CalculationResult) -> Self {
        CostReport::Estimate(result)
    }
}
