use std::fmt::Display;

/// Progress of one report generation.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationState<T> {
    Idle,
    Pending {
        message: String,
    },
    Succeeded(T),
    Failed {
        message: String,
    },
}

impl<T> Default for GenerationState<T> {
    fn default() -> Self {
        GenerationState::Idle
    }
}

impl<T> GenerationState<T> {
    /// Start a new generation, dropping any previous result or error.
    pub fn begin(&mut self, message: impl Into<String>) {
        *self = GenerationState::Pending {
            message: message.into(),
        };
    }

    /// Record the outcome of the pending generation. A failure reads
    /// `"Failed to generate {subject}: {error}"`.
    ///
    /// Outcomes that arrive while nothing is pending are ignored.
    pub fn resolve<E: Display>(&mut self, subject: &str, outcome: Result<T, E>) {
        if !self.is_pending() {
            tracing::warn!("ignoring generation result with no pending request");
            return;
        }
        *self = match outcome {
            Ok(value) => GenerationState::Succeeded(value),
            Err(e) => GenerationState::Failed {
                message: format!("Failed to generate {subject}: {e}"),
            },
        };
    }

    pub fn reset(&mut self) {
        *self = GenerationState::Idle;
    }

    /// Drop a recorded failure; any other state is kept.
    pub fn clear_error(&mut self) {
        if self.error().is_some() {
            self.reset();
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, GenerationState::Pending { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            GenerationState::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Take the value out of a successful generation, leaving `Idle` behind.
    pub fn take_success(&mut self) -> Option<T> {
        match std::mem::replace(self, GenerationState::Idle) {
            GenerationState::Succeeded(value) => Some(value),
            other => {
                *self = other;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_path() {
        let mut state: GenerationState<u32> = GenerationState::default();
        assert_eq!(state, GenerationState::Idle);

        state.begin("Generating report...");
        assert!(state.is_pending());

        state.resolve::<String>("report", Ok(7));
        assert_eq!(state, GenerationState::Succeeded(7));
        assert_eq!(state.take_success(), Some(7));
        assert_eq!(state, GenerationState::Idle);
    }

    #[test]
    fn test_failure_message() {
        let mut state: GenerationState<u32> = GenerationState::Idle;
        state.begin("Generating report...");
        state.resolve("report", Err("AI service returned no text"));
        assert_eq!(
            state.error(),
            Some("Failed to generate report: AI service returned no text")
        );
        assert_eq!(state.take_success(), None);
        assert!(state.error().is_some());
    }

    #[test]
    fn test_begin_discards_previous_outcome() {
        let mut state: GenerationState<u32> = GenerationState::Failed {
            message: "boom".to_string(),
        };
        state.begin("again");
        assert_eq!(state.error(), None);
        assert!(state.is_pending());

        state.reset();
        assert_eq!(state, GenerationState::Idle);
    }

    #[test]
    fn test_failure_message_names_subject() {
        let mut state: GenerationState<()> = GenerationState::Idle;
        state.begin("Generating assessment report...");
        state.resolve("assessment", Err("timed out"));
        assert_eq!(state.error(), Some("Failed to generate assessment: timed out"));
    }

    #[test]
    fn test_clear_error_keeps_other_states() {
        let mut state: GenerationState<u32> = GenerationState::Succeeded(3);
        state.clear_error();
        assert_eq!(state, GenerationState::Succeeded(3));

        state = GenerationState::Failed {
            message: "boom".to_string(),
        };
        state.clear_error();
        assert_eq!(state, GenerationState::Idle);
    }

    #[test]
    fn test_resolve_without_pending_is_ignored() {
        let mut state: GenerationState<u32> = GenerationState::Idle;
        state.resolve::<String>("report", Ok(1));
        assert_eq!(state, GenerationState::Idle);
    }
}
