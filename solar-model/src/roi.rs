use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

/// Number of years every ROI projection covers.
pub const PROJECTION_YEARS: u32 = 25;

/// Parameters of a single ROI calculation.
///
/// Percentages are given in percent (e.g. `0.8` for 0.8 %), not as fractions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "./roi.ts")]
pub struct CalculationInputs {
    /// Installed capacity in kW.
    pub system_capacity_kw: f64,
    /// Capital cost per installed kW.
    pub cost_per_kw: f64,
    /// Yearly loss of generation in percent.
    pub annual_degradation_pct: f64,
    /// Grid tariff in currency per kWh for the first year.
    pub electricity_tariff: f64,
    /// Yearly tariff increase in percent.
    pub tariff_escalation_pct: f64,
    /// Share of the project cost that is financed, 0 to 100.
    pub loan_amount_percentage: f64,
    /// Annual interest rate in percent.
    pub interest_rate_pct: f64,
    /// Loan tenure in whole years.
    pub loan_tenure_years: u32,
}

impl Default for CalculationInputs {
    fn default() -> Self {
        Self {
            system_capacity_kw: 50.0,
            cost_per_kw: 50_000.0,
            annual_degradation_pct: 0.8,
            electricity_tariff: 8.0,
            tariff_escalation_pct: 3.0,
            loan_amount_percentage: 80.0,
            interest_rate_pct: 9.0,
            loan_tenure_years: 7,
        }
    }
}

/// One simulated year of the projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "./roi.ts")]
pub struct YearlyData {
    /// 1-based year index.
    pub year: u32,
    pub energy_generation_kwh: f64,
    pub savings_currency: f64,
    /// Zero once the loan is retired.
    pub loan_payment_currency: f64,
    /// `savings_currency - loan_payment_currency`
    pub net_savings_currency: f64,
    /// Running total of net savings, seeded with the negative down payment.
    pub cumulative_savings_currency: f64,
}

/// When the project pays for itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[serde(tag = "kind", rename_all = "camelCase")]
#[ts(export, export_to = "./roi.ts")]
pub enum PaybackPeriod {
    /// Recovered after a fractional number of years.
    Within { years: f64 },
    /// Not recovered within the projection horizon.
    BeyondHorizon,
}

impl PaybackPeriod {
    pub fn years(&self) -> Option<f64> {
        match self {
            PaybackPeriod::Within { years } => Some(*years),
            PaybackPeriod::BeyondHorizon => None,
        }
    }

    pub fn is_recovered(&self) -> bool {
        matches!(self, PaybackPeriod::Within { .. })
    }

    /// Short label such as `6.3 Yrs` or `> 25 Yrs`.
    pub fn label(&self) -> String {
        match self {
            PaybackPeriod::Within { years } => format!("{:.1} Yrs", years),
            PaybackPeriod::BeyondHorizon => format!("> {} Yrs", PROJECTION_YEARS),
        }
    }
}

/// How the project cost is split between loan and down payment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "./roi.ts")]
pub struct LoanSummary {
    pub loan_amount: f64,
    pub down_payment: f64,
    pub monthly_emi: f64,
    pub annual_loan_payment: f64,
}

/// Output of an ROI projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "./roi.ts")]
pub struct CalculationResults {
    pub total_project_cost: f64,
    pub payback_period: PaybackPeriod,
    /// Cumulative net savings over the horizon, not reduced by the down payment.
    pub net_25_year_savings: f64,
    pub loan: LoanSummary,
    /// Exactly [`PROJECTION_YEARS`] entries in chronological order.
    pub yearly_breakdown: Vec<YearlyData>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payback_label() {
        assert_eq!(PaybackPeriod::Within { years: 6.31 }.label(), "6.3 Yrs");
        assert_eq!(PaybackPeriod::BeyondHorizon.label(), "> 25 Yrs");
        assert_eq!(PaybackPeriod::BeyondHorizon.years(), None);
    }

    #[test]
    fn test_payback_serializes_with_kind_tag() {
        let json = serde_json::to_value(PaybackPeriod::BeyondHorizon).unwrap();
        assert_eq!(json["kind"], "beyondHorizon");

        let json = serde_json::to_value(PaybackPeriod::Within { years: 4.5 }).unwrap();
        assert_eq!(json["kind"], "within");
        assert_eq!(json["years"], 4.5);
    }
}
