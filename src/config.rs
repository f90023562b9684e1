pub mod frequency_table;
pub mod model_catalog;
pub mod presets;
pub mod token_assumptions;
