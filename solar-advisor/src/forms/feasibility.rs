use solar_model::feasibility::FeasibilityFormData;

use super::{
    FormFields, normalize_field_name, parse_number, parse_option, parse_yes_no, require_positive,
    require_text,
};
use crate::error::FormError;

impl FormFields for FeasibilityFormData {
    fn set_field(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        match normalize_field_name(name).as_str() {
            "companyname" => self.company_name = value.to_string(),
            "contactperson" => self.contact_person = value.to_string(),
            "location" => self.location = value.to_string(),
            "plantcapacity" => self.plant_capacity = parse_number("plantCapacity", value)?,
            "installationtype" => {
                self.installation_type = parse_option("installationType", value)?
            }
            "rooftype" => self.roof_type = parse_option("roofType", value)?,
            "modulebrand" => self.module_brand = parse_option("moduleBrand", value)?,
            "operationmode" => self.operation_mode = parse_option("operationMode", value)?,
            "powertariff" => self.power_tariff = parse_number("powerTariff", value)?,
            "amcpreference" => self.amc_preference = parse_option("amcPreference", value)?,
            "insurance" => self.insurance = parse_yes_no("insurance", value)?,
            "additionalnotes" => self.additional_notes = value.to_string(),
            _ => return Err(FormError::UnknownField(name.to_string())),
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), FormError> {
        require_text("companyName", &self.company_name)?;
        require_text("contactPerson", &self.contact_person)?;
        require_text("location", &self.location)?;
        require_positive("plantCapacity", self.plant_capacity)?;
        require_positive("powerTariff", self.power_tariff)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solar_model::feasibility::{InstallationType, ModuleBrand};

    #[test]
    fn test_set_field_parses_by_field_type() {
        let mut form = FeasibilityFormData::default();
        form.set_field("companyName", "Acme Textiles").unwrap();
        form.set_field("plant_capacity", "120").unwrap();
        form.set_field("installationType", "ground mount").unwrap();
        form.set_field("moduleBrand", "Waree").unwrap();
        form.set_field("insurance", "No").unwrap();

        assert_eq!(form.company_name, "Acme Textiles");
        assert_eq!(form.plant_capacity, 120.0);
        assert_eq!(form.installation_type, InstallationType::GroundMount);
        assert_eq!(form.module_brand, ModuleBrand::Waree);
        assert!(!form.insurance);
    }

    #[test]
    fn test_set_field_rejects_bad_input() {
        let mut form = FeasibilityFormData::default();
        assert_eq!(
            form.set_field("roofColour", "red"),
            Err(FormError::UnknownField("roofColour".to_string()))
        );
        assert!(matches!(
            form.set_field("powerTariff", "cheap"),
            Err(FormError::InvalidValue { field: "powerTariff", .. })
        ));
        assert!(form.set_field("operationMode", "Rental").is_err());
    }

    #[test]
    fn test_validate_required_fields() {
        assert!(FeasibilityFormData::default().validate().is_ok());

        let mut form = FeasibilityFormData::default();
        form.company_name = "  ".to_string();
        assert_eq!(form.validate(), Err(FormError::Missing("companyName")));

        let mut form = FeasibilityFormData::default();
        form.plant_capacity = 0.0;
        assert!(matches!(
            form.validate(),
            Err(FormError::OutOfRange { field: "plantCapacity", .. })
        ));
    }
}
