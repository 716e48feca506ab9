pub mod assessment;
pub mod chat;
pub mod feasibility;
pub mod roi;
pub mod session;

pub use assessment::{AssessmentFormData, AssessmentReportData, GeneratedAssessmentReport};
pub use chat::{ChatMessage, Sender};
pub use feasibility::{FeasibilityFormData, GeneratedReport, ReportData};
pub use roi::{CalculationInputs, CalculationResults, PaybackPeriod, YearlyData};
pub use session::{Page, Role, Theme, User};

/// Finds the option whose label matches `value`, ignoring case and surrounding whitespace.
pub(crate) fn option_from_label<T: Copy>(
    options: &[T],
    value: &str,
    label: impl Fn(&T) -> &'static str,
) -> Result<T, String> {
    let value = value.trim();
    options
        .iter()
        .find(|option| label(*option).eq_ignore_ascii_case(value))
        .copied()
        .ok_or_else(|| {
            let allowed: Vec<&str> = options.iter().map(&label).collect();
            format!("'{}' is not one of: {}", value, allowed.join(", "))
        })
}
