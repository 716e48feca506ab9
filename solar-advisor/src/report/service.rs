//! Report generation and chat replies on top of a [`TextGenerator`].
//!
//! Replies are validated strictly: the text must be JSON, carry the required
//! top-level sections, and deserialize into the typed report. Anything else
//! is an error and no partial report is returned.

use serde::de::DeserializeOwned;
use serde_json::Value;
use solar_model::assessment::{AssessmentFormData, AssessmentReportData};
use solar_model::chat::ChatMessage;
use solar_model::feasibility::{FeasibilityFormData, ReportData};

use crate::error::ServiceError;
use crate::report::client::TextGenerator;
use crate::report::prompts::{assessment_prompt, chat_system_instruction, feasibility_prompt};
use crate::report::schema::{
    ASSESSMENT_REQUIRED_SECTIONS, FEASIBILITY_REQUIRED_SECTIONS, assessment_report_schema,
    feasibility_report_schema,
};

const FEASIBILITY_REPORT: &str = "feasibility report";
const ASSESSMENT_REPORT: &str = "assessment report";

/// Parse `text` as a report of type `T`.
fn parse_report<T: DeserializeOwned>(
    text: &str,
    report: &'static str,
    required_sections: &[&'static str],
) -> Result<T, ServiceError> {
    let value: Value = serde_json::from_str(text.trim()).map_err(ServiceError::MalformedJson)?;

    for &section in required_sections {
        if value.get(section).is_none() {
            return Err(ServiceError::IncompleteResponse { report, section });
        }
    }

    serde_json::from_value(value).map_err(|source| ServiceError::SchemaMismatch { report, source })
}

pub async fn generate_feasibility_report(
    generator: &dyn TextGenerator,
    form: &FeasibilityFormData,
) -> Result<ReportData, ServiceError> {
    tracing::info!(company = %form.company_name, capacity_kw = form.plant_capacity, "generating feasibility report");

    let text = generator
        .generate_json(&feasibility_prompt(form), &feasibility_report_schema())
        .await
        .inspect_err(|e| tracing::error!(error = %e, "feasibility report request failed"))?;

    parse_report(&text, FEASIBILITY_REPORT, &FEASIBILITY_REQUIRED_SECTIONS)
        .inspect_err(|e| tracing::error!(error = %e, "rejected feasibility report"))
}

pub async fn generate_assessment_report(
    generator: &dyn TextGenerator,
    form: &AssessmentFormData,
) -> Result<AssessmentReportData, ServiceError> {
    tracing::info!(client = %form.client_name, state = %form.state, "generating assessment report");

    let text = generator
        .generate_json(&assessment_prompt(form), &assessment_report_schema())
        .await
        .inspect_err(|e| tracing::error!(error = %e, "assessment report request failed"))?;

    parse_report(&text, ASSESSMENT_REPORT, &ASSESSMENT_REQUIRED_SECTIONS)
        .inspect_err(|e| tracing::error!(error = %e, "rejected assessment report"))
}

/// Ask for the next assistant turn. `history` must already end with the
/// user's message.
pub async fn chat_reply(
    generator: &dyn TextGenerator,
    history: &[ChatMessage],
    report_context: Option<&ReportData>,
) -> Result<String, ServiceError> {
    let instruction = chat_system_instruction(report_context);
    let reply = generator.chat(&instruction, history).await?;
    Ok(reply.trim().to_string())
}
