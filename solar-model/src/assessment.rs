use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;
use utoipa::ToSchema;

use crate::option_from_label;

/// States with a dedicated entry in the assessment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, TS)]
#[ts(export, export_to = "./assessment.ts")]
pub enum IndianState {
    #[serde(rename = "Andhra Pradesh")]
    AndhraPradesh,
    Telangana,
    Maharashtra,
    Karnataka,
    #[serde(rename = "Tamil Nadu")]
    TamilNadu,
    Gujarat,
    Rajasthan,
    Other,
}

impl IndianState {
    pub const ALL: [IndianState; 8] = [
        IndianState::AndhraPradesh,
        IndianState::Telangana,
        IndianState::Maharashtra,
        IndianState::Karnataka,
        IndianState::TamilNadu,
        IndianState::Gujarat,
        IndianState::Rajasthan,
        IndianState::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IndianState::AndhraPradesh => "Andhra Pradesh",
            IndianState::Telangana => "Telangana",
            IndianState::Maharashtra => "Maharashtra",
            IndianState::Karnataka => "Karnataka",
            IndianState::TamilNadu => "Tamil Nadu",
            IndianState::Gujarat => "Gujarat",
            IndianState::Rajasthan => "Rajasthan",
            IndianState::Other => "Other",
        }
    }

    /// Permitted solar capacity as a fraction of the contract demand (CMD)
    /// under the state's net-metering policy.
    pub fn cmd_policy_fraction(&self) -> f64 {
        match self {
            IndianState::AndhraPradesh => 1.00,
            IndianState::Telangana => 0.80,
            _ => 0.80,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export, export_to = "./assessment.ts")]
pub enum FinancingOption {
    #[serde(rename = "Bank Loan")]
    BankLoan,
    #[serde(rename = "UDB Zero Investment")]
    UdbZeroInvestment,
}

impl FinancingOption {
    pub const ALL: [FinancingOption; 2] =
        [FinancingOption::BankLoan, FinancingOption::UdbZeroInvestment];

    pub fn label(&self) -> &'static str {
        match self {
            FinancingOption::BankLoan => "Bank Loan",
            FinancingOption::UdbZeroInvestment => "UDB Zero Investment",
        }
    }
}

impl fmt::Display for IndianState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for IndianState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        option_from_label(&Self::ALL, s, |o| o.label())
    }
}

impl fmt::Display for FinancingOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FinancingOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        option_from_label(&Self::ALL, s, |o| o.label())
    }
}

/// Site data collected by a sales agent for the on-site assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "./assessment.ts")]
pub struct AssessmentFormData {
    pub client_name: String,
    pub state: IndianState,
    pub pincode: String,
    /// Contract maximum demand in kVA.
    pub contract_demand: f64,
    /// Average net units consumed per month in kWh.
    pub net_units_consumed: f64,
    /// ₹ per kWh.
    pub power_tariff: f64,
    /// Available installation space in sq. ft.
    pub available_space: f64,
    /// kVA
    pub transformer_capacity: f64,
    pub financing_option: FinancingOption,
    /// ₹ per kVA of CMD enhancement.
    pub cmd_enhancement_cost: f64,
}

impl Default for AssessmentFormData {
    fn default() -> Self {
        Self {
            client_name: String::new(),
            state: IndianState::Telangana,
            pincode: String::new(),
            contract_demand: 0.0,
            net_units_consumed: 0.0,
            power_tariff: 0.0,
            available_space: 0.0,
            transformer_capacity: 0.0,
            financing_option: FinancingOption::BankLoan,
            cmd_enhancement_cost: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "./assessment.ts")]
pub struct CapacityAnalysis {
    /// kW permitted by state policy and CMD.
    #[serde(rename = "permittedCapacityCMD")]
    pub permitted_capacity_cmd: f64,
    /// kW the available space supports.
    pub permitted_capacity_space: f64,
    /// Minimum of the CMD and space based capacities, in kW.
    pub recommended_capacity: f64,
    /// kWh per year.
    pub annual_generation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "./assessment.ts")]
pub struct AssessmentFinancials {
    pub estimated_system_cost: f64,
    pub monthly_savings: f64,
    pub loan_principal: f64,
    /// Zero for UDB financing.
    pub advance_payment: f64,
    #[serde(rename = "monthlyEMI")]
    pub monthly_emi: f64,
    pub payback_period: f64,
    pub loan_type: String,
    /// Rate and type, e.g. `8.9% Diminishing`.
    pub interest_rate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "./assessment.ts")]
pub struct EnhancementPotential {
    pub is_enhancement_possible: bool,
    pub potential_capacity: f64,
    #[serde(rename = "estimatedCMDCost")]
    pub estimated_cmd_cost: f64,
    pub transformer_upgrade_required: bool,
    pub recommendation_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "./assessment.ts")]
pub struct AssessmentSummary {
    pub conclusion: String,
}

/// Assessment report as returned by the AI service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "./assessment.ts")]
pub struct AssessmentReportData {
    pub analysis: CapacityAnalysis,
    pub financials: AssessmentFinancials,
    pub enhancement_potential: EnhancementPotential,
    pub summary: AssessmentSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "./assessment.ts")]
pub struct GeneratedAssessmentReport {
    pub form_data: AssessmentFormData,
    pub report_data: AssessmentReportData,
}
