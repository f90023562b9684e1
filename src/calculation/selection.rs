use crate::config::model_catalog::{self, ModelDefinition};
use crate::error::Error;

/// The set of models being priced, at most one per provider.
///
/// Same rule as the interactive picker: choosing a second model from a
/// family replaces the first, choosing the same model again deselects it.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    // Insertion-ordered. The catalog is single-digit sized, so a linear
    // provider scan on toggle beats keeping a provider-keyed map in sync.
    selected: Vec<&'static ModelDefinition>,
}

impl Selection {
    pub fn new() -> Self {
        Selection::default()
    }

    /// Selects or deselects one model.
    ///
    /// Toggling a selected id removes it. Toggling a new id first evicts
    /// any same-provider entry (0 or 1 of them), then appends. Unknown ids
    /// are rejected before anything mutates.
    pub fn toggle(&mut self, model_id: &str) -> Result<(), Error> {
        let model = model_catalog::lookup(model_id)?;

        if let Some(position) = self.selected.iter().position(|m| m.id == model.id) {
            self.selected.remove(position);
            return Ok(());
        }

        self.selected.retain(|m| m.provider != model.provider);
        self.selected.push(model);

        Ok(())
    }

    /// Selected models in selection order.
    pub fn models(&self) -> &[&'static ModelDefinition] {
        &self.selected
    }

    pub fn contains(&self, model_id: &str) -> bool {
        self.selected.iter().any(|m| m.id == model_id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn toggle_adds_then_removes() {
        let mut selection = Selection::new();

        selection.toggle("gpt-5-nano").unwrap();
        assert!(selection.contains("gpt-5-nano"));
        assert_eq!(selection.len(), 1);

        selection.toggle("gpt-5-nano").unwrap();
        assert!(selection.is_empty());
    }

    #[test]
    fn toggle_replaces_same_provider_model() {
        let mut selection = Selection::new();

        selection.toggle("gpt-5-nano").unwrap();
        selection.toggle("gpt-5-mini").unwrap();

        assert!(!selection.contains("gpt-5-nano"));
        assert!(selection.contains("gpt-5-mini"));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn toggle_keeps_other_providers_untouched() {
        let mut selection = Selection::new();

        selection.toggle("gpt-5-nano").unwrap();
        selection.toggle("gemini-2.5-flash-lite").unwrap();
        selection.toggle("mistral-small-latest").unwrap();
        assert_eq!(selection.len(), 3);

        // Swapping the Google pick leaves OpenAI and Mistral alone.
        selection.toggle("gemini-3-pro-preview").unwrap();

        assert_eq!(selection.len(), 3);
        assert!(selection.contains("gpt-5-nano"));
        assert!(selection.contains("gemini-3-pro-preview"));
        assert!(selection.contains("mistral-small-latest"));
    }

    #[test]
    fn toggle_rejects_unknown_model() {
        let mut selection = Selection::new();

        let error = selection.toggle("gpt-2").unwrap_err();

        assert!(matches!(error, Error::UnknownModel(id) if id == "gpt-2"));
        assert!(selection.is_empty());
    }

    #[test]
    fn models_keep_selection_order() {
        let mut selection = Selection::new();

        selection.toggle("mistral-small-latest").unwrap();
        selection.toggle("gpt-5-nano").unwrap();

        let ids: Vec<&str> = selection.models().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["mistral-small-latest", "gpt-5-nano"]);
    }

    #[test]
    fn invariant_survives_a_toggle_storm() {
        let mut selection = Selection::new();
        let storm = [
            "gpt-5-nano",
            "gemini-3-flash-preview",
            "gpt-5.2",
            "mistral-large-3",
            "gpt-5.2",
            "gemini-2.5-flash-lite",
            "mistral-medium-3",
            "gpt-5-mini",
            "mistral-medium-3",
        ];

        for id in storm {
            selection.toggle(id).unwrap();
        }

        // No two selected models may share a provider, ever.
        let provider_count = selection
            .models()
            .iter()
            .map(|m| m.provider)
            .unique()
            .count();
        assert_eq!(provider_count, selection.len());
    }
}
