use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export, export_to = "./session.ts")]
pub enum Role {
    Admin,
    Franchise,
    Client,
    Guest,
    Investor,
    Partner,
    Advisor,
}

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export, export_to = "./session.ts")]
pub struct User {
    pub name: String,
    pub role: Role,
}

impl User {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        User {
            name: name.into(),
            role,
        }
    }
}

/// Pages of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export, export_to = "./session.ts")]
pub enum Page {
    #[default]
    Dashboard,
    Generator,
    Assessment,
    Clients,
    #[serde(rename = "reportDisplay")]
    ReportDisplay,
    #[serde(rename = "assessmentReportDisplay")]
    AssessmentReportDisplay,
    RoiCalculator,
    ProjectTracker,
    Franchise,
    BioCng,
}

impl Page {
    /// Form page a report display page returns to.
    pub fn originating_form(&self) -> Option<Page> {
        match self {
            Page::ReportDisplay => Some(Page::Generator),
            Page::AssessmentReportDisplay => Some(Page::Assessment),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "./session.ts")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_names_match_dashboard_routes() {
        assert_eq!(serde_json::to_value(Page::RoiCalculator).unwrap(), "roi-calculator");
        assert_eq!(serde_json::to_value(Page::BioCng).unwrap(), "bio-cng");
        assert_eq!(serde_json::to_value(Page::ReportDisplay).unwrap(), "reportDisplay");
    }

    #[test]
    fn test_originating_form() {
        assert_eq!(Page::ReportDisplay.originating_form(), Some(Page::Generator));
        assert_eq!(
            Page::AssessmentReportDisplay.originating_form(),
            Some(Page::Assessment)
        );
        assert_eq!(Page::Clients.originating_form(), None);
    }
}
