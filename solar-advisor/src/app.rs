//! Application state of the dashboard as one explicit record.
//!
//! Every screen reads from and writes to [`AppState`]; there is no other
//! shared mutable state.

use solar_model::assessment::{AssessmentFormData, AssessmentReportData, GeneratedAssessmentReport};
use solar_model::feasibility::{FeasibilityFormData, GeneratedReport, ReportData};
use solar_model::roi::{CalculationInputs, CalculationResults};
use solar_model::session::{Page, Theme, User};

use crate::error::ServiceError;
use crate::general::finance::project;
use crate::report::state::GenerationState;

const FEASIBILITY_PENDING: &str = "Generating feasibility report...";
const ASSESSMENT_PENDING: &str = "Generating assessment report...";

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub user: Option<User>,
    pub theme: Theme,
    pub page: Page,
    pub sidebar_collapsed: bool,
    pub assistant_open: bool,
    pub reports: Vec<GeneratedReport>,
    pub current_report: Option<GeneratedReport>,
    pub assessment_reports: Vec<GeneratedAssessmentReport>,
    pub current_assessment: Option<GeneratedAssessmentReport>,
    pub feasibility: GenerationState<()>,
    pub assessment: GenerationState<()>,
    pub last_roi: Option<CalculationResults>,
    pending_feasibility_form: Option<FeasibilityFormData>,
    pending_assessment_form: Option<AssessmentFormData>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login(&mut self, user: User) {
        tracing::info!(name = %user.name, role = ?user.role, "user logged in");
        self.user = Some(user);
        self.page = Page::Dashboard;
    }

    /// Sign out and drop everything tied to the session.
    pub fn logout(&mut self) {
        let theme = self.theme;
        *self = AppState {
            theme,
            ..AppState::default()
        };
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn toggle_assistant(&mut self) {
        self.assistant_open = !self.assistant_open;
    }

    pub fn navigate(&mut self, page: Page) {
        self.page = page;
    }

    /// Start generating a feasibility report for `form`. Any error left by
    /// an earlier generation of either kind is cleared.
    pub fn begin_feasibility(&mut self, form: FeasibilityFormData) {
        self.assessment.clear_error();
        self.feasibility.begin(FEASIBILITY_PENDING);
        self.pending_feasibility_form = Some(form);
    }

    /// Record the feasibility result. Success stores and selects the report
    /// and shows it; failure clears the current report.
    pub fn finish_feasibility(&mut self, outcome: Result<ReportData, ServiceError>) {
        let form = self.pending_feasibility_form.take();
        match (outcome, form) {
            (Ok(report_data), Some(form_data)) => {
                let report = GeneratedReport {
                    form_data,
                    report_data,
                };
                self.reports.push(report.clone());
                self.current_report = Some(report);
                self.feasibility.resolve::<ServiceError>("report", Ok(()));
                self.page = Page::ReportDisplay;
            }
            (Ok(_), None) => {
                tracing::warn!("feasibility result arrived with no request in flight");
            }
            (Err(e), _) => {
                self.current_report = None;
                self.feasibility.resolve("report", Err(e));
            }
        }
    }

    pub fn begin_assessment(&mut self, form: AssessmentFormData) {
        self.feasibility.clear_error();
        self.assessment.begin(ASSESSMENT_PENDING);
        self.pending_assessment_form = Some(form);
    }

    pub fn finish_assessment(&mut self, outcome: Result<AssessmentReportData, ServiceError>) {
        let form = self.pending_assessment_form.take();
        match (outcome, form) {
            (Ok(report_data), Some(form_data)) => {
                let report = GeneratedAssessmentReport {
                    form_data,
                    report_data,
                };
                self.assessment_reports.push(report.clone());
                self.current_assessment = Some(report);
                self.assessment.resolve::<ServiceError>("assessment", Ok(()));
                self.page = Page::AssessmentReportDisplay;
            }
            (Ok(_), None) => {
                tracing::warn!("assessment result arrived with no request in flight");
            }
            (Err(e), _) => {
                self.current_assessment = None;
                self.assessment.resolve("assessment", Err(e));
            }
        }
    }

    /// Error message of a failed generation, if any.
    pub fn generation_error(&self) -> Option<&str> {
        self.feasibility.error().or_else(|| self.assessment.error())
    }

    /// Leave a failed generation: clear the error and go back to the form it
    /// came from.
    pub fn retry_after_failure(&mut self) {
        if self.feasibility.error().is_some() {
            self.feasibility.reset();
            self.page = Page::Generator;
        } else if self.assessment.error().is_some() {
            self.assessment.reset();
            self.page = Page::Assessment;
        }
    }

    /// Show a previously generated feasibility report.
    pub fn view_report(&mut self, report: GeneratedReport) {
        self.current_report = Some(report);
        self.page = Page::ReportDisplay;
    }

    pub fn view_assessment(&mut self, report: GeneratedAssessmentReport) {
        self.current_assessment = Some(report);
        self.page = Page::AssessmentReportDisplay;
    }

    /// Run the ROI projection, replacing any earlier result.
    pub fn calculate_roi(&mut self, inputs: &CalculationInputs) -> &CalculationResults {
        self.last_roi.insert(project(inputs))
    }

    pub fn report_count(&self) -> usize {
        self.reports.len()
    }

    /// Generated feasibility reports whose company name or location contains
    /// `term`, ignoring case. A blank term matches every report.
    pub fn search_reports(&self, term: &str) -> Vec<&GeneratedReport> {
        let term = term.trim().to_lowercase();
        self.reports
            .iter()
            .filter(|report| {
                term.is_empty()
                    || report.form_data.company_name.to_lowercase().contains(&term)
                    || report.form_data.location.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Page to actually show. Report pages without a report fall back to
    /// their form.
    pub fn resolve_page(&self) -> Page {
        match self.page {
            Page::ReportDisplay if self.current_report.is_none() => Page::Generator,
            Page::AssessmentReportDisplay if self.current_assessment.is_none() => {
                Page::Assessment
            }
            page => page,
        }
    }
}
