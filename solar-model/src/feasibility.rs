use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;
use utoipa::ToSchema;

use crate::option_from_label;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export, export_to = "./feasibility.ts")]
pub enum InstallationType {
    Rooftop,
    #[serde(rename = "Ground Mount")]
    GroundMount,
    Carport,
}

impl InstallationType {
    pub const ALL: [InstallationType; 3] = [
        InstallationType::Rooftop,
        InstallationType::GroundMount,
        InstallationType::Carport,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InstallationType::Rooftop => "Rooftop",
            InstallationType::GroundMount => "Ground Mount",
            InstallationType::Carport => "Carport",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export, export_to = "./feasibility.ts")]
pub enum RoofType {
    #[serde(rename = "RCC")]
    Rcc,
    #[serde(rename = "Metal Sheet")]
    MetalSheet,
    Other,
}

impl RoofType {
    pub const ALL: [RoofType; 3] = [RoofType::Rcc, RoofType::MetalSheet, RoofType::Other];

    pub fn label(&self) -> &'static str {
        match self {
            RoofType::Rcc => "RCC",
            RoofType::MetalSheet => "Metal Sheet",
            RoofType::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export, export_to = "./feasibility.ts")]
pub enum ModuleBrand {
    Waree,
    Vikram,
    Goldi,
    #[serde(rename = "Any Tier-1")]
    AnyTier1,
}

impl ModuleBrand {
    pub const ALL: [ModuleBrand; 4] = [
        ModuleBrand::Waree,
        ModuleBrand::Vikram,
        ModuleBrand::Goldi,
        ModuleBrand::AnyTier1,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ModuleBrand::Waree => "Waree",
            ModuleBrand::Vikram => "Vikram",
            ModuleBrand::Goldi => "Goldi",
            ModuleBrand::AnyTier1 => "Any Tier-1",
        }
    }
}

/// Commercial model under which the plant is operated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export, export_to = "./feasibility.ts")]
pub enum OperationMode {
    #[serde(rename = "CAPEX")]
    Capex,
    #[serde(rename = "RESCO")]
    Resco,
    Lease,
}

impl OperationMode {
    pub const ALL: [OperationMode; 3] = [
        OperationMode::Capex,
        OperationMode::Resco,
        OperationMode::Lease,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OperationMode::Capex => "CAPEX",
            OperationMode::Resco => "RESCO",
            OperationMode::Lease => "Lease",
        }
    }
}

/// Duration of the annual maintenance contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export, export_to = "./feasibility.ts")]
pub enum AmcPreference {
    #[serde(rename = "1 Year")]
    OneYear,
    #[serde(rename = "3 Years")]
    ThreeYears,
    #[serde(rename = "5 Years")]
    FiveYears,
}

impl AmcPreference {
    pub const ALL: [AmcPreference; 3] = [
        AmcPreference::OneYear,
        AmcPreference::ThreeYears,
        AmcPreference::FiveYears,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AmcPreference::OneYear => "1 Year",
            AmcPreference::ThreeYears => "3 Years",
            AmcPreference::FiveYears => "5 Years",
        }
    }
}

impl fmt::Display for InstallationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for InstallationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        option_from_label(&Self::ALL, s, |o| o.label())
    }
}

impl fmt::Display for RoofType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RoofType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        option_from_label(&Self::ALL, s, |o| o.label())
    }
}

impl fmt::Display for ModuleBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ModuleBrand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        option_from_label(&Self::ALL, s, |o| o.label())
    }
}

impl fmt::Display for OperationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OperationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        option_from_label(&Self::ALL, s, |o| o.label())
    }
}

impl fmt::Display for AmcPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AmcPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        option_from_label(&Self::ALL, s, |o| o.label())
    }
}

/// Client data collected by the feasibility report form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "./feasibility.ts")]
pub struct FeasibilityFormData {
    pub company_name: String,
    pub contact_person: String,
    pub location: String,
    /// Proposed plant capacity in kW.
    pub plant_capacity: f64,
    pub installation_type: InstallationType,
    pub roof_type: RoofType,
    pub module_brand: ModuleBrand,
    pub operation_mode: OperationMode,
    /// Average power tariff in ₹ per kWh.
    pub power_tariff: f64,
    pub amc_preference: AmcPreference,
    /// Whether insurance is included.
    pub insurance: bool,
    #[serde(default)]
    pub additional_notes: String,
}

impl Default for FeasibilityFormData {
    fn default() -> Self {
        Self {
            company_name: "SRVS Industries".to_string(),
            contact_person: "Mr. Ramesh".to_string(),
            location: "Balanagar, Telangana".to_string(),
            plant_capacity: 60.0,
            installation_type: InstallationType::Rooftop,
            roof_type: RoofType::Rcc,
            module_brand: ModuleBrand::AnyTier1,
            operation_mode: OperationMode::Capex,
            power_tariff: 8.0,
            amc_preference: AmcPreference::ThreeYears,
            insurance: true,
            additional_notes: "Net metering and subsidy applicable.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "./feasibility.ts")]
pub struct ProjectOverview {
    pub client: String,
    pub location: String,
    /// Capacity in kW.
    pub capacity: f64,
    pub installation_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "./feasibility.ts")]
pub struct EnergyGeneration {
    /// kWh per year.
    pub annual_generation: f64,
    /// kWh/m²/day.
    pub solar_irradiation: f64,
    pub performance_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "./feasibility.ts")]
pub struct SpaceRequirement {
    /// Shadow-free area in sq. ft.
    pub area: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "./feasibility.ts")]
pub struct SystemComponents {
    pub modules: String,
    pub inverter: String,
    pub structure: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "./feasibility.ts")]
pub struct WarrantiesAndAmc {
    pub module_warranty: String,
    pub inverter_warranty: String,
    pub amc: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "./feasibility.ts")]
pub struct FinancialSummary {
    /// ₹
    pub estimated_cost: f64,
    /// ₹ per year
    pub annual_savings: f64,
    /// Percent.
    pub roi: f64,
    /// Years.
    pub payback_period: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "./feasibility.ts")]
pub struct EnvironmentalBenefits {
    /// Tonnes of CO2 per year.
    pub co2_reduction: f64,
    pub trees_equivalent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "./feasibility.ts")]
pub struct ExecutionSchedule {
    pub design_and_engineering: String,
    pub procurement: String,
    pub installation: String,
    pub commissioning: String,
}

/// Feasibility report as returned by the AI service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "./feasibility.ts")]
pub struct ReportData {
    pub project_overview: ProjectOverview,
    pub energy_generation: EnergyGeneration,
    pub space_requirement: SpaceRequirement,
    pub system_components: SystemComponents,
    pub warranties_and_amc: WarrantiesAndAmc,
    pub technical_compliance: Vec<String>,
    pub financial_summary: FinancialSummary,
    pub environmental_benefits: EnvironmentalBenefits,
    pub execution_schedule: ExecutionSchedule,
    pub conclusion: String,
}

/// A generated report together with the form it was generated from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "./feasibility.ts")]
pub struct GeneratedReport {
    pub form_data: FeasibilityFormData,
    pub report_data: ReportData,
}
