//! Response-schema contract sent along with every report request.
//!
//! The schema is serialized in the text-generation service's format
//! (`OBJECT`/`STRING`/`NUMBER`/`BOOLEAN`/`ARRAY` nodes). Properties keep their
//! insertion order, which the service uses as the output order.

use indexmap::IndexMap;
use serde::Serialize;

/// Top-level sections without which a feasibility report is rejected.
pub const FEASIBILITY_REQUIRED_SECTIONS: [&str; 2] = ["projectOverview", "financialSummary"];
/// Top-level sections without which an assessment report is rejected.
pub const ASSESSMENT_REQUIRED_SECTIONS: [&str; 2] = ["analysis", "financials"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    Object,
    String,
    Number,
    Boolean,
    Array,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "type")]
    pub kind: SchemaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, Schema>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub property_ordering: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
}

impl Schema {
    fn of(kind: SchemaType) -> Self {
        Schema {
            kind,
            description: None,
            properties: IndexMap::new(),
            property_ordering: Vec::new(),
            required: Vec::new(),
            items: None,
        }
    }

    pub fn object() -> Self {
        Self::of(SchemaType::Object)
    }

    pub fn string() -> Self {
        Self::of(SchemaType::String)
    }

    pub fn number() -> Self {
        Self::of(SchemaType::Number)
    }

    pub fn boolean() -> Self {
        Self::of(SchemaType::Boolean)
    }

    pub fn array(items: Schema) -> Self {
        Schema {
            items: Some(Box::new(items)),
            ..Self::of(SchemaType::Array)
        }
    }

    pub fn describe(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Add a required property.
    pub fn property(mut self, name: &str, schema: Schema) -> Self {
        self.properties.insert(name.to_string(), schema);
        self.property_ordering.push(name.to_string());
        self.required.push(name.to_string());
        self
    }
}

pub fn feasibility_report_schema() -> Schema {
    Schema::object()
        .property(
            "projectOverview",
            Schema::object()
                .property("client", Schema::string())
                .property("location", Schema::string())
                .property("capacity", Schema::number())
                .property("installationType", Schema::string()),
        )
        .property(
            "energyGeneration",
            Schema::object()
                .property("annualGeneration", Schema::number().describe("in kWh"))
                .property(
                    "solarIrradiation",
                    Schema::number().describe("in kWh/m²/day"),
                )
                .property("performanceRatio", Schema::number()),
        )
        .property(
            "spaceRequirement",
            Schema::object().property("area", Schema::number().describe("in sq. ft.")),
        )
        .property(
            "systemComponents",
            Schema::object()
                .property("modules", Schema::string())
                .property("inverter", Schema::string())
                .property("structure", Schema::string()),
        )
        .property(
            "warrantiesAndAmc",
            Schema::object()
                .property("moduleWarranty", Schema::string())
                .property("inverterWarranty", Schema::string())
                .property("amc", Schema::string()),
        )
        .property("technicalCompliance", Schema::array(Schema::string()))
        .property(
            "financialSummary",
            Schema::object()
                .property("estimatedCost", Schema::number().describe("in INR"))
                .property("annualSavings", Schema::number().describe("in INR"))
                .property("roi", Schema::number().describe("in %"))
                .property("paybackPeriod", Schema::number().describe("in years")),
        )
        .property(
            "environmentalBenefits",
            Schema::object()
                .property(
                    "co2Reduction",
                    Schema::number().describe("in tonnes per year"),
                )
                .property("treesEquivalent", Schema::number()),
        )
        .property(
            "executionSchedule",
            Schema::object()
                .property("designAndEngineering", Schema::string())
                .property("procurement", Schema::string())
                .property("installation", Schema::string())
                .property("commissioning", Schema::string()),
        )
        .property(
            "conclusion",
            Schema::string().describe(
                "A detailed, optimistic, and encouraging conclusion for the client in 2-3 paragraphs.",
            ),
        )
}

pub fn assessment_report_schema() -> Schema {
    Schema::object()
        .property(
            "analysis",
            Schema::object()
                .property(
                    "permittedCapacityCMD",
                    Schema::number()
                        .describe("Permitted solar capacity in kW based on state policy and CMD."),
                )
                .property(
                    "permittedCapacitySpace",
                    Schema::number().describe(
                        "Solar capacity in kW that can be installed in the available space.",
                    ),
                )
                .property(
                    "recommendedCapacity",
                    Schema::number().describe(
                        "The final recommended capacity in kW, which is the minimum of CMD and space-based capacities.",
                    ),
                )
                .property(
                    "annualGeneration",
                    Schema::number().describe("Estimated annual energy generation in kWh."),
                ),
        )
        .property(
            "financials",
            Schema::object()
                .property(
                    "estimatedSystemCost",
                    Schema::number()
                        .describe("Total estimated cost of the solar system in INR."),
                )
                .property(
                    "monthlySavings",
                    Schema::number()
                        .describe("Estimated average monthly savings on the power bill in INR."),
                )
                .property(
                    "loanPrincipal",
                    Schema::number().describe("The total loan amount in INR."),
                )
                .property(
                    "advancePayment",
                    Schema::number()
                        .describe("The upfront advance payment required (0 for UDB), in INR."),
                )
                .property(
                    "monthlyEMI",
                    Schema::number().describe("The calculated monthly EMI for the loan in INR."),
                )
                .property(
                    "paybackPeriod",
                    Schema::number().describe("The calculated payback period in years."),
                )
                .property(
                    "loanType",
                    Schema::string().describe("The name of the financing option."),
                )
                .property(
                    "interestRate",
                    Schema::string().describe(
                        "The interest rate and type (e.g., \"8.9% Diminishing\").",
                    ),
                ),
        )
        .property(
            "enhancementPotential",
            Schema::object()
                .property(
                    "isEnhancementPossible",
                    Schema::boolean().describe(
                        "True if available space supports more capacity than CMD allows.",
                    ),
                )
                .property(
                    "potentialCapacity",
                    Schema::number()
                        .describe("The maximum capacity possible if CMD is enhanced, in kW."),
                )
                .property(
                    "estimatedCMDCost",
                    Schema::number().describe(
                        "Estimated cost to enhance the CMD to support the potential capacity.",
                    ),
                )
                .property(
                    "transformerUpgradeRequired",
                    Schema::boolean().describe(
                        "True if the current transformer cannot support the enhanced CMD.",
                    ),
                )
                .property(
                    "recommendationText",
                    Schema::string().describe(
                        "A detailed recommendation for the client if enhancement is possible.",
                    ),
                ),
        )
        .property(
            "summary",
            Schema::object().property(
                "conclusion",
                Schema::string()
                    .describe("A compelling summary of the assessment for the client."),
            ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schema_serializes_in_service_format() {
        let schema = Schema::object()
            .property("area", Schema::number().describe("in sq. ft."))
            .property("tags", Schema::array(Schema::string()));
        let value = serde_json::to_value(&schema).unwrap();

        assert_eq!(
            value,
            json!({
                "type": "OBJECT",
                "properties": {
                    "area": { "type": "NUMBER", "description": "in sq. ft." },
                    "tags": { "type": "ARRAY", "items": { "type": "STRING" } }
                },
                "propertyOrdering": ["area", "tags"],
                "required": ["area", "tags"]
            })
        );
    }

    #[test]
    fn test_feasibility_schema_keeps_section_order() {
        let schema = feasibility_report_schema();
        let sections: Vec<&str> = schema.properties.keys().map(|k| k.as_str()).collect();
        assert_eq!(sections.first(), Some(&"projectOverview"));
        assert_eq!(sections.last(), Some(&"conclusion"));
        assert_eq!(sections.len(), 10);
        for section in FEASIBILITY_REQUIRED_SECTIONS {
            assert!(schema.required.iter().any(|r| r == section));
        }
    }

    #[test]
    fn test_assessment_schema_uses_acronym_keys() {
        let schema = assessment_report_schema();
        let analysis = &schema.properties["analysis"];
        assert!(analysis.properties.contains_key("permittedCapacityCMD"));
        assert_eq!(
            schema.properties["enhancementPotential"].properties["isEnhancementPossible"].kind,
            SchemaType::Boolean
        );
        for section in ASSESSMENT_REQUIRED_SECTIONS {
            assert!(schema.properties.contains_key(section));
        }
    }
}
