use itertools::Itertools;

use crate::error::Error;
use crate::prelude::*;

/// Price card for one catalog entry.
///
/// Dollar figures are per 1M tokens, except `web_search_cost` which is per
/// 1,000 calls. Pass 2 is the structured-extraction step and always bills
/// at the `pass2_*` rates, which belong to `pass2_model` and are usually
/// cheaper than the pass 1 rates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub provider: &'static str,

    /// Pass 1 input, $/1M tokens.
    pub input: f64,
    /// Pass 1 output, $/1M tokens.
    pub output: f64,

    /// The model pass 2 is delegated to. May be this model itself.
    pub pass2_model: &'static str,
    pub pass2_input: f64,
    pub pass2_output: f64,

    /// Web search / grounding surcharge, $/1,000 calls.
    pub web_search_cost: f64,
}

// Declaration order is display order: models stay grouped by provider, and
// `list_by_provider` keeps this ordering within a family.
pub static MODELS: &[ModelDefinition] = &[
    // OpenAI
    ModelDefinition {
        id: "gpt-5-nano",
        name: "GPT-5 Nano",
        provider: "OpenAI",
        input: 0.05,
        output: 0.40,
        pass2_model: "gpt-5-mini",
        pass2_input: 0.25,
        pass2_output: 2.00,
        web_search_cost: 10.00,
    },
    ModelDefinition {
        id: "gpt-5-mini",
        name: "GPT-5 Mini",
        provider: "OpenAI",
        input: 0.25,
        output: 2.00,
        pass2_model: "gpt-5-mini",
        pass2_input: 0.25,
        pass2_output: 2.00,
        web_search_cost: 10.00,
    },
    ModelDefinition {
        id: "gpt-5.2",
        name: "GPT-5.2",
        provider: "OpenAI",
        input: 1.75,
        output: 14.00,
        pass2_model: "gpt-5-mini",
        pass2_input: 0.25,
        pass2_output: 2.00,
        web_search_cost: 10.00,
    },
    // Google
    ModelDefinition {
        id: "gemini-2.5-flash-lite",
        name: "Gemini 2.5 Flash Lite",
        provider: "Google",
        input: 0.10,
        output: 0.40,
        pass2_model: "gemini-2.5-flash-lite",
        pass2_input: 0.10,
        pass2_output: 0.40,
        web_search_cost: 35.00,
    },
    ModelDefinition {
        id: "gemini-3-flash-preview",
        name: "Gemini 3 Flash",
        provider: "Google",
        input: 0.50,
        output: 3.00,
        pass2_model: "gemini-2.5-flash-lite",
        pass2_input: 0.10,
        pass2_output: 0.40,
        web_search_cost: 35.00,
    },
    ModelDefinition {
        id: "gemini-3-pro-preview",
        name: "Gemini 3 Pro",
        provider: "Google",
        input: 2.00,
        output: 12.00,
        pass2_model: "gemini-2.5-flash-lite",
        pass2_input: 0.10,
        pass2_output: 0.40,
        web_search_cost: 35.00,
    },
    // Mistral
    ModelDefinition {
        id: "mistral-small-latest",
        name: "Mistral Small",
        provider: "Mistral AI",
        input: 0.10,
        output: 0.30,
        pass2_model: "mistral-small-latest",
        pass2_input: 0.10,
        pass2_output: 0.30,
        web_search_cost: 30.00,
    },
    ModelDefinition {
        id: "mistral-medium-3",
        name: "Mistral Medium 3",
        provider: "Mistral AI",
        input: 0.40,
        output: 2.00,
        pass2_model: "mistral-small-latest",
        pass2_input: 0.10,
        pass2_output: 0.30,
        web_search_cost: 30.00,
    },
    ModelDefinition {
        id: "mistral-large-3",
        name: "Mistral Large 3",
        provider: "Mistral AI",
        input: 0.50,
        output: 1.50,
        pass2_model: "mistral-small-latest",
        pass2_input: 0.10,
        pass2_output: 0.30,
        web_search_cost: 30.00,
    },
];

/// Finds a model by its exact identifier.
pub fn lookup(model_id: &str) -> Result<&'static ModelDefinition, Error> {
    MODELS
        .iter()
        .find(|model| model.id == model_id)
        .ok_or_else(|| Error::UnknownModel(model_id.to_owned()))
}

/// Every model of one provider, in declaration order.
pub fn list_by_provider(provider: &str) -> Vec<&'static ModelDefinition> {
    MODELS
        .iter()
        .filter(|model| model.provider == provider)
        .collect()
}

/// Provider names, deduped, in first-appearance order.
pub fn providers() -> Vec<&'static str> {
    MODELS.iter().map(|model| model.provider).unique().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_finds_known_model() {
        let model = lookup("gpt-5-nano").unwrap();

        assert_eq!(model.name, "GPT-5 Nano");
        assert_eq!(model.provider, "OpenAI");
        assert_eq!(model.input, 0.05);
    }

    #[test]
    fn lookup_rejects_unknown_model() {
        let error = lookup("gpt-2").unwrap_err();

        assert!(matches!(error, Error::UnknownModel(id) if id == "gpt-2"));
    }

    #[test]
    fn providers_are_deduped_in_declaration_order() {
        assert_eq!(providers(), vec!["OpenAI", "Google", "Mistral AI"]);
    }

    #[test]
    fn list_by_provider_keeps_declaration_order() {
        let openai = list_by_provider("OpenAI");

        let ids: Vec<&str> = openai.iter().map(|model| model.id).collect();
        assert_eq!(ids, vec!["gpt-5-nano", "gpt-5-mini", "gpt-5.2"]);
    }

    #[test]
    fn list_by_provider_is_empty_for_unknown_provider() {
        assert!(list_by_provider("Acme").is_empty());
    }

    #[test]
    fn pass2_references_resolve_and_prices_match() {
        // Every pass2 delegate must itself be in the catalog, and the pass2
        // rates must equal that delegate's pass 1 rates.
        for model in MODELS {
            let delegate = lookup(model.pass2_model).unwrap();

            assert_eq!(model.pass2_input, delegate.input, "{}", model.id);
            assert_eq!(model.pass2_output, delegate.output, "{}", model.id);
        }
    }

    #[test]
    fn prices_are_non_negative() {
        for model in MODELS {
            assert!(model.input >= 0.0);
            assert!(model.output >= 0.0);
            assert!(model.pass2_input >= 0.0);
            assert!(model.pass2_output >= 0.0);
            assert!(model.web_search_cost >= 0.0);
        }
    }
}
