use crate::api::{ModelStatus, SwitchReply};

/// Models the operator may select. Matches the set the server accepts.
pub const SELECTABLE_MODELS: &[&str] = &["auto", "openai", "gemini", "nltk"];

/// Returns `true` if `name` is one of the selectable model identifiers.
pub fn is_selectable(name: &str) -> bool {
    SELECTABLE_MODELS.contains(&name)
}

/// Model selection state for one session.
///
/// The selected model always reflects the last value confirmed by the
/// server. The fields are private so callers cannot set an optimistic
/// client-side guess; updates only happen through server replies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionModelState {
    selected_model: String,
    openai_available: bool,
    gemini_available: bool,
    fallback_available: bool,
}

impl Default for SessionModelState {
    fn default() -> Self {
        Self {
            selected_model: "auto".to_string(),
            openai_available: false,
            gemini_available: false,
            fallback_available: false,
        }
    }
}

impl SessionModelState {
    /// Updates the full state from a status reply.
    pub fn apply_status(&mut self, status: &ModelStatus) {
        self.selected_model = status.current_model.clone();
        self.openai_available = status.openai_available;
        self.gemini_available = status.gemini_available;
        self.fallback_available = status.nltk_available;
    }

    /// Updates the selected model from a switch confirmation.
    pub fn confirm_switch(&mut self, reply: &SwitchReply) {
        self.selected_model = reply.current_model.clone();
    }

    pub fn selected_model(&self) -> &str {
        &self.selected_model
    }

    pub const fn openai_available(&self) -> bool {
        self.openai_available
    }

    pub const fn gemini_available(&self) -> bool {
        self.gemini_available
    }

    pub const fn fallback_available(&self) -> bool {
        self.fallback_available
    }

    /// The providers the server reported as usable, in selection order.
    pub fn available_providers(&self) -> Vec<&'static str> {
        let mut providers = Vec::new();
        if self.openai_available {
            providers.push("openai");
        }
        if self.gemini_available {
            providers.push("gemini");
        }
        if self.fallback_available {
            providers.push("nltk");
        }
        providers
    }

    /// The selected model with its first letter upper-cased, for display.
    pub fn display_model(&self) -> String {
        let mut chars = self.selected_model.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_selects_auto() {
        let state = SessionModelState::default();
        assert_eq!(state.selected_model(), "auto");
        assert_eq!(state.display_model(), "Auto");
    }

    #[test]
    fn test_selectable_models() {
        assert!(is_selectable("auto"));
        assert!(is_selectable("openai"));
        assert!(is_selectable("gemini"));
        assert!(is_selectable("nltk"));
        assert!(!is_selectable("gpt-4o"));
        assert!(!is_selectable(""));
        assert!(!is_selectable("Gemini"));
    }

    #[test]
    fn test_apply_status_updates_all_fields() {
        let mut state = SessionModelState::default();
        state.apply_status(&ModelStatus {
            current_model: "openai".to_string(),
            openai_available: true,
            gemini_available: false,
            nltk_available: true,
        });

        assert_eq!(state.selected_model(), "openai");
        assert!(state.openai_available());
        assert!(!state.gemini_available());
        assert!(state.fallback_available());
    }

    #[test]
    fn test_available_providers_lists_reported_ones() {
        let mut state = SessionModelState::default();
        assert!(state.available_providers().is_empty());

        state.apply_status(&ModelStatus {
            current_model: "auto".to_string(),
            openai_available: true,
            gemini_available: false,
            nltk_available: true,
        });

        assert_eq!(state.available_providers(), vec!["openai", "nltk"]);
    }

    #[test]
    fn test_confirm_switch_takes_server_value() {
        let mut state = SessionModelState::default();

        // The server may answer with a different model than requested
        state.confirm_switch(&SwitchReply {
            current_model: "nltk".to_string(),
        });

        assert_eq!(state.selected_model(), "nltk");
        assert_eq!(state.display_model(), "Nltk");
    }

    #[test]
    fn test_display_model_capitalizes_first_letter() {
        let mut state = SessionModelState::default();
        state.confirm_switch(&SwitchReply {
            current_model: "gemini".to_string(),
        });

        assert_eq!(state.display_model(), "Gemini");
    }
}
