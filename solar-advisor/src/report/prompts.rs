//! Prompt templates for the text-generation service.

use solar_model::assessment::AssessmentFormData;
use solar_model::feasibility::{FeasibilityFormData, ReportData};

use crate::general::finance::{PEAK_SUN_HOURS, PERFORMANCE_RATIO};

/// Shadow-free roof area needed per installed kW, in sq. ft.
pub const AREA_PER_KW_SQFT: f64 = 100.0;
/// Base system cost per kW used for feasibility reports, in ₹.
pub const FEASIBILITY_COST_PER_KW: f64 = 50_000.0;
/// Base system cost per kW used for assessment reports, in ₹.
pub const ASSESSMENT_COST_PER_KW: f64 = 55_000.0;
/// Daily yield per kW assumed for assessment reports.
pub const ASSESSMENT_DAILY_YIELD_KWH_PER_KW: f64 = 4.75;
/// kg of CO2 avoided per kWh of solar generation.
pub const CO2_KG_PER_KWH: f64 = 0.82;
/// kg of CO2 one tree absorbs per year.
pub const CO2_KG_PER_TREE_YEAR: f64 = 21.0;

const ANALYST_ROLE: &str = "You are a senior solar technical-commercial analyst at Unite Solar.";

const JSON_ONLY: &str = "Return ONLY the JSON object matching the provided schema. Do not add any explanatory text, markdown, or comments.";

pub const ASSISTANT_PERSONA: &str = "You are a helpful and friendly AI assistant for Unite Solar, a solar energy company. Your name is Sparky. Answer the user's questions. If the question is about a specific report, use the provided JSON context to answer. If there's no context or the question is general, answer based on your knowledge of solar energy in India.";

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

pub fn feasibility_prompt(form: &FeasibilityFormData) -> String {
    format!(
        r#"{role} Your task is to create a detailed and professional solar feasibility report for a potential client in India based on the following data.

Client Data:
- Company Name: {company}
- Contact Person: {contact}
- Location: {location}
- Proposed Plant Capacity: {capacity} kW
- Type of Installation: {installation}
- Roof Type: {roof}
- Preferred Module Brand: {brand}
- Mode of Operation: {mode}
- Average Power Tariff: ₹{tariff} per kWh
- AMC Preference: {amc}
- Insurance Included: {insurance}
- Additional Notes from Client: {notes}

Calculation Rules & Assumptions (Strictly Follow):
1.  **Project Overview:** Use the client data directly.
2.  **Energy Generation:**
    -   Assume an average daily solar irradiation of {irradiation} kWh/m²/day for the location.
    -   Assume a system Performance Ratio of {pr} ({pr_pct}%).
    -   Calculate Annual Generation (kWh) = Plant Capacity (kW) * {irradiation} * 365 * {pr}.
3.  **Space Requirement:**
    -   Assume {area} sq. ft. of shadow-free area is required per kW for rooftop installations.
    -   Area (sq. ft.) = Plant Capacity * {area}.
4.  **System Components:**
    -   Modules: State the preferred brand. If 'Any Tier-1', mention "High-efficiency Tier-1 Solar Modules".
    -   Inverter: Mention "String Inverter from a reputed brand like SMA/SolarEdge/Huawei".
    -   Structure: Mention "Hot-dip galvanized iron mounting structures".
5.  **Warranties & AMC:**
    -   Module Warranty: "25-30 Years Performance Warranty".
    -   Inverter Warranty: "5-10 Years Standard Warranty".
    -   AMC: Use the client's preference.
6.  **Technical Compliance:** List common Indian standards like "IEC 61215, IEC 61730, MNRE guidelines, Local DISCOM regulations".
7.  **Financial Summary:**
    -   Estimated Cost: Assume a base cost of ₹{cost_per_kw} per kW. Total Cost = Plant Capacity * {cost_per_kw}.
    -   Annual Savings: Annual Generation * Power Tariff.
    -   ROI (%): (Annual Savings / Estimated Cost) * 100.
    -   Payback Period (years): Estimated Cost / Annual Savings.
8.  **Environmental Benefits:**
    -   CO2 Reduction (tonnes/year): Assume 1 kWh of solar energy reduces {co2} kg of CO2. So, (Annual Generation * {co2}) / 1000.
    -   Trees Equivalent: Assume 1 tree absorbs {tree} kg of CO2 per year. So, (CO2 Reduction in kg) / {tree}.
9.  **Execution Schedule:** Provide realistic timelines for a project of this size. (e.g., Design: 1 week, Procurement: 2 weeks, Installation: 3 weeks, Commissioning: 1 week).
10. **Conclusion:** Write a compelling, optimistic, and professional conclusion summarizing the benefits and encouraging the client to proceed.

{json_only}"#,
        role = ANALYST_ROLE,
        company = form.company_name,
        contact = form.contact_person,
        location = form.location,
        capacity = form.plant_capacity,
        installation = form.installation_type,
        roof = form.roof_type,
        brand = form.module_brand,
        mode = form.operation_mode,
        tariff = form.power_tariff,
        amc = form.amc_preference,
        insurance = yes_no(form.insurance),
        notes = form.additional_notes,
        irradiation = PEAK_SUN_HOURS,
        pr = PERFORMANCE_RATIO,
        pr_pct = PERFORMANCE_RATIO * 100.0,
        area = AREA_PER_KW_SQFT,
        cost_per_kw = FEASIBILITY_COST_PER_KW,
        co2 = CO2_KG_PER_KWH,
        tree = CO2_KG_PER_TREE_YEAR,
        json_only = JSON_ONLY,
    )
}

pub fn assessment_prompt(form: &AssessmentFormData) -> String {
    let policy_pct = form.state.cmd_policy_fraction() * 100.0;

    format!(
        r#"{role} Your task is to create a preliminary on-site assessment report for a potential client in India based on the data provided by a sales agent.

Client & Site Data:
- Client Name: {client}
- State: {state}
- Pincode: {pincode}
- Contract Maximum Demand (CMD): {cmd} kVA
- Average Net Monthly Units Consumed: {units} kWh
- Average Power Tariff: ₹{tariff} per kWh
- Available Installation Space: {space} sq. ft.
- Transformer Capacity: {transformer} kVA
- Preferred Financing Option: {financing}
- Cost for CMD Enhancement: ₹{enhancement} per kVA

Calculation Rules & Logic (Strictly Follow):
1.  **Capacity Analysis:**
    -   **Permitted Capacity (CMD-based):** Calculate as {policy_pct}% of the client's CMD. Note: CMD is in kVA, but for solar (power factor ~1), we can treat kVA ≈ kW. Result should be in kW.
    -   **Permitted Capacity (Space-based):** Calculate the maximum capacity the available space can support. Use the rule of {area} sq. ft. per 1 kW.
    -   **Recommended Capacity:** This is the **minimum** of the CMD-based and Space-based capacities. This is the system size we will use for all subsequent calculations.

2.  **Energy Generation:**
    -   Estimate annual generation for the **Recommended Capacity**.
    -   Assume an average daily solar irradiation of {yield_} kWh/kW for the location (pincode: {pincode}).
    -   Formula: Annual Generation (kWh) = Recommended Capacity (kW) * {yield_} * 365.

3.  **Financial Analysis:**
    -   **System Cost:** Assume a base cost of ₹{cost_per_kw} per kW. Total Cost = Recommended Capacity * {cost_per_kw}.
    -   **Monthly Savings:** (Annual Generation / 12) * Power Tariff.
    -   **Analyze the chosen financing option ({financing}):**
        -   **If 'Bank Loan':**
            -   Loan term is 6 years (<100 kW) or 5 years (>=100 kW).
            -   Advance payment is 10% of System Cost. Loan Principal is 90%.
            -   Interest rate is 8.9% per annum (diminishing).
            -   Calculate monthly EMI using the formula: P * r * (1+r)^n / ((1+r)^n - 1), where P=Loan Principal, r = monthly interest rate (0.089 / 12), n = loan term in months.
        -   **If 'UDB Zero Investment':**
            -   Loan term is 7 years (<100 kW) or 6 years (>=100 kW).
            -   Advance payment is 0. Loan Principal is 100% of System Cost.
            -   Interest rate is 8.75% per annum (flat rate).
            -   Calculate monthly EMI using the formula: (Principal + (Principal * Annual Rate * Term in Years)) / (Term in Months).
    -   **Payback Period:** System Cost / (Annual Savings).

4.  **Enhancement Potential:**
    -   Check if the Space-based capacity is greater than the CMD-based capacity.
    -   If yes, 'isEnhancementPossible' is true. The 'potentialCapacity' is the Space-based capacity.
    -   Calculate the required CMD enhancement: Potential Capacity - Current CMD.
    -   Calculate the estimated cost for this enhancement using the provided enhancement cost per kVA.
    -   Check if the enhanced CMD would exceed 80% of the transformer capacity. If so, 'transformerUpgradeRequired' is true.
    -   Write a compelling recommendation text explaining the benefits of enhancing the CMD to utilize the full available space for maximum savings.

5.  **Summary:**
    -   Write a professional and encouraging conclusion summarizing the key findings and next steps.

{json_only}"#,
        role = ANALYST_ROLE,
        client = form.client_name,
        state = form.state,
        pincode = form.pincode,
        cmd = form.contract_demand,
        units = form.net_units_consumed,
        tariff = form.power_tariff,
        space = form.available_space,
        transformer = form.transformer_capacity,
        financing = form.financing_option,
        enhancement = form.cmd_enhancement_cost,
        policy_pct = policy_pct,
        area = AREA_PER_KW_SQFT,
        yield_ = ASSESSMENT_DAILY_YIELD_KWH_PER_KW,
        cost_per_kw = ASSESSMENT_COST_PER_KW,
        json_only = JSON_ONLY,
    )
}

/// System instruction for the chat assistant, with the report the user is
/// looking at appended as pretty-printed JSON.
pub fn chat_system_instruction(report_context: Option<&ReportData>) -> String {
    let mut instruction = ASSISTANT_PERSONA.to_string();

    if let Some(report) = report_context {
        match serde_json::to_string_pretty(report) {
            Ok(json) => {
                instruction.push_str(
                    "\n\nHere is the JSON data for the current feasibility report the user is viewing:\n",
                );
                instruction.push_str(&json);
            }
            Err(e) => tracing::warn!(error = %e, "could not serialize report context for chat"),
        }
    }

    instruction
}

#[cfg(test)]
mod tests {
    use super::*;
    use solar_model::assessment::IndianState;

    #[test]
    fn test_feasibility_prompt_embeds_form_and_rules() {
        let form = FeasibilityFormData::default();
        let prompt = feasibility_prompt(&form);

        assert!(prompt.contains("- Company Name: SRVS Industries"));
        assert!(prompt.contains("- Proposed Plant Capacity: 60 kW"));
        assert!(prompt.contains("- Roof Type: RCC"));
        assert!(prompt.contains("- Preferred Module Brand: Any Tier-1"));
        assert!(prompt.contains("- Insurance Included: Yes"));
        assert!(prompt.contains("Plant Capacity (kW) * 4.5 * 365 * 0.78"));
        assert!(prompt.contains("₹50000 per kW"));
        assert!(prompt.trim_end().ends_with("markdown, or comments."));
    }

    #[test]
    fn test_assessment_prompt_uses_state_policy() {
        let mut form = AssessmentFormData {
            client_name: "Sri Lakshmi Foods".to_string(),
            state: IndianState::AndhraPradesh,
            pincode: "520001".to_string(),
            ..AssessmentFormData::default()
        };
        assert!(assessment_prompt(&form).contains("Calculate as 100% of the client's CMD"));

        form.state = IndianState::Karnataka;
        let prompt = assessment_prompt(&form);
        assert!(prompt.contains("Calculate as 80% of the client's CMD"));
        assert!(prompt.contains("(pincode: 520001)"));
        assert!(prompt.contains("Preferred Financing Option: Bank Loan"));
    }

    #[test]
    fn test_chat_instruction_without_context_is_persona() {
        assert_eq!(chat_system_instruction(None), ASSISTANT_PERSONA);
    }
}
