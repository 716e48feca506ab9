use solar_model::assessment::AssessmentFormData;

use super::{
    FormFields, normalize_field_name, parse_number, parse_option, require_non_negative,
    require_positive, require_text,
};
use crate::error::FormError;

impl FormFields for AssessmentFormData {
    fn set_field(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        match normalize_field_name(name).as_str() {
            "clientname" => self.client_name = value.to_string(),
            "state" => self.state = parse_option("state", value)?,
            "pincode" => self.pincode = value.trim().to_string(),
            "contractdemand" => self.contract_demand = parse_number("contractDemand", value)?,
            "netunitsconsumed" => {
                self.net_units_consumed = parse_number("netUnitsConsumed", value)?
            }
            "powertariff" => self.power_tariff = parse_number("powerTariff", value)?,
            "availablespace" => self.available_space = parse_number("availableSpace", value)?,
            "transformercapacity" => {
                self.transformer_capacity = parse_number("transformerCapacity", value)?
            }
            "financingoption" => self.financing_option = parse_option("financingOption", value)?,
            "cmdenhancementcost" => {
                self.cmd_enhancement_cost = parse_number("cmdEnhancementCost", value)?
            }
            _ => return Err(FormError::UnknownField(name.to_string())),
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), FormError> {
        require_text("clientName", &self.client_name)?;
        require_text("pincode", &self.pincode)?;
        if self.pincode.len() != 6 || !self.pincode.chars().all(|c| c.is_ascii_digit()) {
            return Err(FormError::InvalidValue {
                field: "pincode",
                value: self.pincode.clone(),
                reason: "must be 6 digits".to_string(),
            });
        }
        require_positive("contractDemand", self.contract_demand)?;
        require_non_negative("netUnitsConsumed", self.net_units_consumed)?;
        require_positive("powerTariff", self.power_tariff)?;
        require_positive("availableSpace", self.available_space)?;
        require_positive("transformerCapacity", self.transformer_capacity)?;
        require_non_negative("cmdEnhancementCost", self.cmd_enhancement_cost)?;
        Ok(())
    }
}
