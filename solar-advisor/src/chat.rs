//! The assistant chat transcript.

use solar_model::chat::ChatMessage;
use solar_model::feasibility::GeneratedReport;

use crate::error::ServiceError;
use crate::report::client::TextGenerator;
use crate::report::service::chat_reply;

/// Shown in place of a reply when the service call fails.
pub const CHAT_ERROR_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// Opening line of a session, naming the company the report was requested for.
pub fn greeting(report_context: Option<&GeneratedReport>) -> String {
    let client = report_context
        .map(|report| report.form_data.company_name.trim())
        .filter(|client| !client.is_empty())
        .unwrap_or("your project");
    format!("Hello! I'm your Unite Solar AI Assistant. How can I help you with the report for {client}?")
}

/// Ordered transcript of one conversation, optionally about a specific report.
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    report_context: Option<GeneratedReport>,
    pending: bool,
}

impl ChatSession {
    /// Open a session seeded with the assistant's greeting.
    pub fn open(report_context: Option<GeneratedReport>) -> Self {
        ChatSession {
            messages: vec![ChatMessage::ai(greeting(report_context.as_ref()))],
            report_context,
            pending: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn report_context(&self) -> Option<&GeneratedReport> {
        self.report_context.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Append the user's turn and mark a reply as pending.
    ///
    /// Returns `false` (and changes nothing) for blank input or while an
    /// earlier reply is still pending.
    pub fn push_user_message(&mut self, input: &str) -> bool {
        let text = input.trim();
        if text.is_empty() || self.pending {
            return false;
        }
        self.messages.push(ChatMessage::user(text));
        self.pending = true;
        true
    }

    /// Record the outcome of the pending reply. Failures become the fixed
    /// apology message rather than an error.
    pub fn complete_reply(&mut self, reply: Result<String, ServiceError>) -> &ChatMessage {
        let text = match reply {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "chat reply failed, showing apology");
                CHAT_ERROR_REPLY.to_string()
            }
        };
        self.pending = false;
        self.messages.push(ChatMessage::ai(text));
        &self.messages[self.messages.len() - 1]
    }

    /// Send `input` and wait for the assistant's answer.
    ///
    /// Returns the appended reply, or `None` when the input was ignored.
    pub async fn send(
        &mut self,
        generator: &dyn TextGenerator,
        input: &str,
    ) -> Option<&ChatMessage> {
        if !self.push_user_message(input) {
            return None;
        }
        let report_data = self.report_context.as_ref().map(|report| &report.report_data);
        let reply = chat_reply(generator, &self.messages, report_data).await;
        Some(self.complete_reply(reply))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::service::tests::{FakeGenerator, sample_report_json};
    use solar_model::chat::Sender;
    use solar_model::feasibility::FeasibilityFormData;

    fn sample_report() -> GeneratedReport {
        GeneratedReport {
            form_data: FeasibilityFormData::default(),
            report_data: serde_json::from_value(sample_report_json()).unwrap(),
        }
    }

    #[test]
    fn test_greeting_names_client() {
        let session = ChatSession::open(Some(sample_report()));
        assert_eq!(
            session.messages(),
            &[ChatMessage::ai(
                "Hello! I'm your Unite Solar AI Assistant. How can I help you with the report for SRVS Industries?"
            )]
        );

        let session = ChatSession::open(None);
        assert!(session.messages()[0].text.ends_with("the report for your project?"));
    }

    #[test]
    fn test_greeting_uses_requested_company_not_generated_text() {
        let mut report = sample_report();
        report.form_data.company_name = "Acme Agro Foods".to_string();
        report.report_data.project_overview.client = "Acme Agro Foods Pvt. Ltd. (Unit 2)".to_string();

        let session = ChatSession::open(Some(report));
        assert!(session.messages()[0].text.ends_with("the report for Acme Agro Foods?"));
    }

    #[tokio::test]
    async fn test_send_appends_user_and_reply() {
        let generator = FakeGenerator::replying("About 4.6 years.");
        let mut session = ChatSession::open(Some(sample_report()));

        let reply = session.send(&generator, "  What is the payback?  ").await.cloned();

        assert_eq!(reply, Some(ChatMessage::ai("About 4.6 years.")));
        assert_eq!(session.messages().len(), 3);
        assert_eq!(session.messages()[1], ChatMessage::user("What is the payback?"));
        assert!(!session.is_pending());

        let histories = generator.histories.lock().unwrap();
        assert_eq!(histories[0].len(), 2);
        assert_eq!(histories[0][0].sender, Sender::Ai);
        assert!(generator.instructions.lock().unwrap()[0].contains("SRVS Industries"));
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let generator = FakeGenerator::replying("unused");
        let mut session = ChatSession::open(None);

        assert!(session.send(&generator, "   ").await.is_none());
        assert_eq!(session.messages().len(), 1);
        assert!(generator.histories.lock().unwrap().is_empty());
    }

    #[test]
    fn test_input_ignored_while_pending() {
        let mut session = ChatSession::open(None);
        assert!(session.push_user_message("first"));
        assert!(!session.push_user_message("second"));
        assert_eq!(session.messages().len(), 2);

        session.complete_reply(Ok("done".to_string()));
        assert!(session.push_user_message("second"));
    }

    #[tokio::test]
    async fn test_service_failure_appends_apology() {
        let generator = FakeGenerator::failing(500);
        let mut session = ChatSession::open(None);

        let reply = session.send(&generator, "hello").await.cloned();

        assert_eq!(reply, Some(ChatMessage::ai(CHAT_ERROR_REPLY)));
        assert!(!session.is_pending());
    }
}
