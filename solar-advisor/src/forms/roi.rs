use solar_model::roi::CalculationInputs;

use super::{
    FormFields, normalize_field_name, parse_number, parse_whole_number, require_non_negative,
    require_positive,
};
use crate::error::FormError;

impl FormFields for CalculationInputs {
    fn set_field(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        match normalize_field_name(name).as_str() {
            "systemcapacity" | "systemcapacitykw" => {
                self.system_capacity_kw = parse_number("systemCapacity", value)?
            }
            "costperkw" => self.cost_per_kw = parse_number("costPerKw", value)?,
            "annualdegradation" | "annualdegradationpct" => {
                self.annual_degradation_pct = parse_number("annualDegradation", value)?
            }
            "electricitytariff" => {
                self.electricity_tariff = parse_number("electricityTariff", value)?
            }
            "tariffescalation" | "tariffescalationpct" => {
                self.tariff_escalation_pct = parse_number("tariffEscalation", value)?
            }
            "loanamountpercentage" => {
                self.loan_amount_percentage = parse_number("loanAmountPercentage", value)?
            }
            "interestrate" | "interestratepct" => {
                self.interest_rate_pct = parse_number("interestRate", value)?
            }
            "loantenure" | "loantenureyears" => {
                self.loan_tenure_years = parse_whole_number("loanTenure", value)?
            }
            _ => return Err(FormError::UnknownField(name.to_string())),
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), FormError> {
        require_positive("systemCapacity", self.system_capacity_kw)?;
        require_positive("costPerKw", self.cost_per_kw)?;
        require_non_negative("annualDegradation", self.annual_degradation_pct)?;
        if self.annual_degradation_pct >= 100.0 {
            return Err(FormError::OutOfRange {
                field: "annualDegradation",
                reason: "must be below 100",
            });
        }
        require_positive("electricityTariff", self.electricity_tariff)?;
        if !(0.0..=100.0).contains(&self.loan_amount_percentage) {
            return Err(FormError::OutOfRange {
                field: "loanAmountPercentage",
                reason: "must be between 0 and 100",
            });
        }
        require_non_negative("interestRate", self.interest_rate_pct)?;
        if self.loan_tenure_years == 0 {
            return Err(FormError::OutOfRange {
                field: "loanTenure",
                reason: "must be at least one year",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(CalculationInputs::default().validate().is_ok());
    }

    #[test]
    fn test_set_field_aliases() {
        let mut inputs = CalculationInputs::default();
        inputs.set_field("systemCapacity", "75").unwrap();
        inputs.set_field("loan_tenure", "5").unwrap();
        inputs.set_field("interest-rate", "10.5").unwrap();

        assert_eq!(inputs.system_capacity_kw, 75.0);
        assert_eq!(inputs.loan_tenure_years, 5);
        assert_eq!(inputs.interest_rate_pct, 10.5);
        assert!(inputs.set_field("loanTenure", "5.5").is_err());
    }

    #[test]
    fn test_validate_ranges() {
        let inputs = CalculationInputs {
            loan_amount_percentage: 120.0,
            ..CalculationInputs::default()
        };
        assert!(matches!(
            inputs.validate(),
            Err(FormError::OutOfRange { field: "loanAmountPercentage", .. })
        ));

        let inputs = CalculationInputs {
            loan_tenure_years: 0,
            ..CalculationInputs::default()
        };
        assert!(inputs.validate().is_err());

        // escalation may be zero or negative
        let inputs = CalculationInputs {
            tariff_escalation_pct: 0.0,
            ..CalculationInputs::default()
        };
        assert!(inputs.validate().is_ok());
    }
}
