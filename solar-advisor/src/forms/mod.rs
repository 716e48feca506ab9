//! Typed form handling.
//!
//! Every form is a plain struct from `solar_model`. Raw string input (CLI
//! `--set key=value` pairs, text boxes) is applied one field at a time through
//! [`FormFields::set_field`], which knows the type of each field, and the
//! finished form is checked with [`FormFields::validate`].

pub mod assessment;
pub mod feasibility;
pub mod roi;

use anyhow::Context;
use std::path::Path;
use std::str::FromStr;

use crate::error::FormError;

pub trait FormFields {
    /// Parse `value` into the field called `name`.
    ///
    /// Field names are matched ignoring case, `_` and `-`, so `plantCapacity`,
    /// `plant_capacity` and `plant-capacity` all address the same field.
    fn set_field(&mut self, name: &str, value: &str) -> Result<(), FormError>;

    /// Required-field and range checks for the whole form.
    fn validate(&self) -> Result<(), FormError>;
}

/// Apply a list of `key=value` assignments to a form.
pub fn apply_assignments<F: FormFields>(
    form: &mut F,
    assignments: &[String],
) -> Result<(), FormError> {
    for assignment in assignments {
        let (name, value) = parse_assignment(assignment)?;
        form.set_field(name, value)?;
    }
    Ok(())
}

/// Apply every key of a flat TOML file to a form.
///
/// Values keep their TOML spelling, except booleans which become `Yes`/`No`.
pub fn load_form_file<F: FormFields>(form: &mut F, path: &Path) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("could not read form file {}", path.display()))?;
    let table: toml::Table = toml::from_str(&content)
        .with_context(|| format!("could not parse form file {}", path.display()))?;

    for (name, value) in &table {
        let raw = match value {
            toml::Value::String(text) => text.clone(),
            toml::Value::Boolean(true) => "Yes".to_string(),
            toml::Value::Boolean(false) => "No".to_string(),
            other => other.to_string(),
        };
        form.set_field(name, &raw)
            .with_context(|| format!("in form file {}", path.display()))?;
    }
    Ok(())
}

pub fn parse_assignment(assignment: &str) -> Result<(&str, &str), FormError> {
    match assignment.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => Ok((name.trim(), value.trim())),
        _ => Err(FormError::InvalidValue {
            field: "assignment",
            value: assignment.to_string(),
            reason: "expected key=value".to_string(),
        }),
    }
}

pub(crate) fn normalize_field_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(|c| c.to_lowercase())
        .collect()
}

pub(crate) fn parse_number(field: &'static str, value: &str) -> Result<f64, FormError> {
    let parsed = value
        .trim()
        .replace(',', "")
        .parse::<f64>()
        .map_err(|e| FormError::InvalidValue {
            field,
            value: value.to_string(),
            reason: e.to_string(),
        })?;
    if !parsed.is_finite() {
        return Err(FormError::InvalidValue {
            field,
            value: value.to_string(),
            reason: "must be a finite number".to_string(),
        });
    }
    Ok(parsed)
}

pub(crate) fn parse_whole_number(field: &'static str, value: &str) -> Result<u32, FormError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|e| FormError::InvalidValue {
            field,
            value: value.to_string(),
            reason: e.to_string(),
        })
}

pub(crate) fn parse_option<T: FromStr<Err = String>>(
    field: &'static str,
    value: &str,
) -> Result<T, FormError> {
    value.parse::<T>().map_err(|reason| FormError::InvalidValue {
        field,
        value: value.to_string(),
        reason,
    })
}

pub(crate) fn parse_yes_no(field: &'static str, value: &str) -> Result<bool, FormError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" => Ok(true),
        "no" | "n" | "false" => Ok(false),
        _ => Err(FormError::InvalidValue {
            field,
            value: value.to_string(),
            reason: "expected Yes or No".to_string(),
        }),
    }
}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        return Err(FormError::Missing(field));
    }
    Ok(())
}

pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<(), FormError> {
    if !(value > 0.0) {
        return Err(FormError::OutOfRange {
            field,
            reason: "must be greater than zero",
        });
    }
    Ok(())
}

pub(crate) fn require_non_negative(field: &'static str, value: f64) -> Result<(), FormError> {
    if !(value >= 0.0) {
        return Err(FormError::OutOfRange {
            field,
            reason: "must not be negative",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_field_name() {
        assert_eq!(normalize_field_name("plantCapacity"), "plantcapacity");
        assert_eq!(normalize_field_name("plant_capacity"), "plantcapacity");
        assert_eq!(normalize_field_name("Plant-Capacity"), "plantcapacity");
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(parse_assignment("powerTariff = 8.5"), Ok(("powerTariff", "8.5")));
        assert_eq!(
            parse_assignment("additionalNotes=a=b"),
            Ok(("additionalNotes", "a=b"))
        );
        assert!(parse_assignment("powerTariff").is_err());
        assert!(parse_assignment("=8").is_err());
    }

    #[test]
    fn test_parse_number_accepts_grouping_commas() {
        assert_eq!(parse_number("costPerKw", "50,000"), Ok(50_000.0));
        assert!(parse_number("costPerKw", "fifty").is_err());
        assert!(parse_number("costPerKw", "inf").is_err());
    }

    #[test]
    fn test_load_form_file() {
        use solar_model::assessment::{AssessmentFormData, FinancingOption, IndianState};
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
clientName = "Sri Lakshmi Foods"
state = "Andhra Pradesh"
pincode = "520001"
contractDemand = 150
powerTariff = 7.5
financingOption = "UDB Zero Investment"
"#
        )
        .unwrap();

        let mut form = AssessmentFormData::default();
        load_form_file(&mut form, file.path()).unwrap();

        assert_eq!(form.client_name, "Sri Lakshmi Foods");
        assert_eq!(form.state, IndianState::AndhraPradesh);
        assert_eq!(form.contract_demand, 150.0);
        assert_eq!(form.power_tariff, 7.5);
        assert_eq!(form.financing_option, FinancingOption::UdbZeroInvestment);
    }

    #[test]
    fn test_load_form_file_reports_bad_field() {
        use solar_model::feasibility::FeasibilityFormData;
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "insurance = true\nroofColour = \"red\"").unwrap();

        let mut form = FeasibilityFormData::default();
        let err = load_form_file(&mut form, file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("unknown field 'roofColour'"));
    }

    #[test]
    fn test_parse_yes_no() {
        assert_eq!(parse_yes_no("insurance", "Yes"), Ok(true));
        assert_eq!(parse_yes_no("insurance", "no"), Ok(false));
        assert!(parse_yes_no("insurance", "maybe").is_err());
    }
}
