//! Plain-text rendering of generated reports and export file naming.

use std::fmt::Write;

use solar_model::assessment::GeneratedAssessmentReport;
use solar_model::feasibility::GeneratedReport;
use solar_model::roi::CalculationResults;

use crate::general::currency::{format_inr, format_indian_number};

/// File name for a feasibility report PDF.
pub fn feasibility_export_file_name(company_name: &str) -> String {
    format!("Feasibility-Report-{}.pdf", sanitize_file_stem(company_name))
}

/// File name for an assessment quotation PDF. Falls back to `Assessment`
/// when the client name is blank.
pub fn assessment_export_file_name(client_name: &str) -> String {
    let stem = sanitize_file_stem(client_name);
    if stem.is_empty() {
        "Quotation-Assessment.pdf".to_string()
    } else {
        format!("Quotation-{stem}.pdf")
    }
}

/// Collapse whitespace runs into `_` and drop characters that are not
/// allowed in file names.
fn sanitize_file_stem(name: &str) -> String {
    let mut stem = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for c in name.trim().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                stem.push('_');
            }
            in_whitespace = true;
            continue;
        }
        if c.is_control() || matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|') {
            continue;
        }
        in_whitespace = false;
        stem.push(c);
    }
    stem
}

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{title}\n{}", "-".repeat(title.chars().count()));
}

pub fn render_feasibility_report(report: &GeneratedReport) -> String {
    let form = &report.form_data;
    let data = &report.report_data;
    let mut out = String::new();

    let _ = writeln!(out, "Solar Feasibility Report: {}", form.company_name);
    let _ = writeln!(out, "Prepared for {} ({})", form.contact_person, form.location);

    heading(&mut out, "Project Overview");
    let overview = &data.project_overview;
    let _ = writeln!(out, "Client:             {}", overview.client);
    let _ = writeln!(out, "Location:           {}", overview.location);
    let _ = writeln!(out, "Capacity:           {} kW", overview.capacity);
    let _ = writeln!(out, "Installation Type:  {}", overview.installation_type);

    heading(&mut out, "Energy Generation");
    let energy = &data.energy_generation;
    let _ = writeln!(
        out,
        "Annual Generation:  {} kWh",
        format_indian_number(energy.annual_generation)
    );
    let _ = writeln!(out, "Solar Irradiation:  {} kWh/m²/day", energy.solar_irradiation);
    let _ = writeln!(out, "Performance Ratio:  {}", energy.performance_ratio);

    heading(&mut out, "Space Requirement");
    let _ = writeln!(
        out,
        "Shadow-free Area:   {} sq. ft.",
        format_indian_number(data.space_requirement.area)
    );

    heading(&mut out, "System Components");
    let components = &data.system_components;
    let _ = writeln!(out, "Modules:            {}", components.modules);
    let _ = writeln!(out, "Inverter:           {}", components.inverter);
    let _ = writeln!(out, "Structure:          {}", components.structure);

    heading(&mut out, "Warranties & AMC");
    let warranties = &data.warranties_and_amc;
    let _ = writeln!(out, "Module Warranty:    {}", warranties.module_warranty);
    let _ = writeln!(out, "Inverter Warranty:  {}", warranties.inverter_warranty);
    let _ = writeln!(out, "AMC:                {}", warranties.amc);

    heading(&mut out, "Technical Compliance");
    for standard in &data.technical_compliance {
        let _ = writeln!(out, "- {standard}");
    }

    heading(&mut out, "Financial Summary");
    let finance = &data.financial_summary;
    let _ = writeln!(out, "Estimated Cost:     {}", format_inr(finance.estimated_cost));
    let _ = writeln!(out, "Annual Savings:     {}", format_inr(finance.annual_savings));
    let _ = writeln!(out, "ROI:                {:.1}%", finance.roi);
    let _ = writeln!(out, "Payback Period:     {:.1} years", finance.payback_period);

    heading(&mut out, "Environmental Benefits");
    let environment = &data.environmental_benefits;
    let _ = writeln!(out, "CO2 Reduction:      {:.1} tonnes/year", environment.co2_reduction);
    let _ = writeln!(
        out,
        "Trees Equivalent:   {}",
        format_indian_number(environment.trees_equivalent)
    );

    heading(&mut out, "Execution Schedule");
    let schedule = &data.execution_schedule;
    let _ = writeln!(out, "Design & Engineering: {}", schedule.design_and_engineering);
    let _ = writeln!(out, "Procurement:          {}", schedule.procurement);
    let _ = writeln!(out, "Installation:         {}", schedule.installation);
    let _ = writeln!(out, "Commissioning:        {}", schedule.commissioning);

    heading(&mut out, "Conclusion");
    let _ = writeln!(out, "{}", data.conclusion);

    out
}

pub fn render_assessment_report(report: &GeneratedAssessmentReport) -> String {
    let form = &report.form_data;
    let data = &report.report_data;
    let mut out = String::new();

    let _ = writeln!(out, "On-site Assessment: {}", form.client_name);
    let _ = writeln!(out, "{} - {}", form.state, form.pincode);

    heading(&mut out, "Capacity Analysis");
    let analysis = &data.analysis;
    let _ = writeln!(out, "Permitted (CMD):    {} kW", analysis.permitted_capacity_cmd);
    let _ = writeln!(out, "Permitted (Space):  {} kW", analysis.permitted_capacity_space);
    let _ = writeln!(out, "Recommended:        {} kW", analysis.recommended_capacity);
    let _ = writeln!(
        out,
        "Annual Generation:  {} kWh",
        format_indian_number(analysis.annual_generation)
    );

    heading(&mut out, "Financials");
    let finance = &data.financials;
    let _ = writeln!(out, "System Cost:        {}", format_inr(finance.estimated_system_cost));
    let _ = writeln!(out, "Monthly Savings:    {}", format_inr(finance.monthly_savings));
    let _ = writeln!(out, "Financing:          {} @ {}", finance.loan_type, finance.interest_rate);
    let _ = writeln!(out, "Loan Principal:     {}", format_inr(finance.loan_principal));
    let _ = writeln!(out, "Advance Payment:    {}", format_inr(finance.advance_payment));
    let _ = writeln!(out, "Monthly EMI:        {}", format_inr(finance.monthly_emi));
    let _ = writeln!(out, "Payback Period:     {:.1} years", finance.payback_period);

    let enhancement = &data.enhancement_potential;
    if enhancement.is_enhancement_possible {
        heading(&mut out, "Enhancement Potential");
        let _ = writeln!(out, "Potential Capacity: {} kW", enhancement.potential_capacity);
        let _ = writeln!(out, "CMD Enhancement:    {}", format_inr(enhancement.estimated_cmd_cost));
        let _ = writeln!(
            out,
            "Transformer:        {}",
            if enhancement.transformer_upgrade_required {
                "upgrade required"
            } else {
                "no upgrade needed"
            }
        );
        let _ = writeln!(out, "{}", enhancement.recommendation_text);
    }

    heading(&mut out, "Summary");
    let _ = writeln!(out, "{}", data.summary.conclusion);

    out
}

/// Year-by-year ROI table.
pub fn render_roi_table(results: &CalculationResults) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Total Project Cost:  {}", format_inr(results.total_project_cost));
    let _ = writeln!(out, "Down Payment:        {}", format_inr(results.loan.down_payment));
    let _ = writeln!(out, "Loan Amount:         {}", format_inr(results.loan.loan_amount));
    let _ = writeln!(out, "Monthly EMI:         {}", format_inr(results.loan.monthly_emi));
    let _ = writeln!(out, "Payback Period:      {}", results.payback_period.label());
    let _ = writeln!(out, "25-Year Net Savings: {}", format_inr(results.net_25_year_savings));
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:>4}  {:>14}  {:>14}  {:>14}  {:>14}  {:>16}",
        "Year", "Generation kWh", "Savings", "Loan Payment", "Net Savings", "Cumulative"
    );
    for row in &results.yearly_breakdown {
        let _ = writeln!(
            out,
            "{:>4}  {:>14}  {:>14}  {:>14}  {:>14}  {:>16}",
            row.year,
            format_indian_number(row.energy_generation_kwh),
            format_inr(row.savings_currency),
            format_inr(row.loan_payment_currency),
            format_inr(row.net_savings_currency),
            format_inr(row.cumulative_savings_currency),
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::service::tests::{sample_assessment_json, sample_report_json};
    use solar_model::assessment::AssessmentFormData;
    use solar_model::feasibility::FeasibilityFormData;

    #[test]
    fn test_feasibility_file_name() {
        assert_eq!(
            feasibility_export_file_name("SRVS Industries"),
            "Feasibility-Report-SRVS_Industries.pdf"
        );
        assert_eq!(
            feasibility_export_file_name("  A  B\tC "),
            "Feasibility-Report-A_B_C.pdf"
        );
        assert_eq!(
            feasibility_export_file_name("Foo/Bar: \"Ltd\"?"),
            "Feasibility-Report-FooBar_Ltd.pdf"
        );
    }

    #[test]
    fn test_quotation_file_name_falls_back() {
        assert_eq!(
            assessment_export_file_name("Sri Lakshmi Foods"),
            "Quotation-Sri_Lakshmi_Foods.pdf"
        );
        assert_eq!(assessment_export_file_name(""), "Quotation-Assessment.pdf");
        assert_eq!(assessment_export_file_name("   "), "Quotation-Assessment.pdf");
    }

    #[test]
    fn test_feasibility_sections_in_schema_order() {
        let report = GeneratedReport {
            form_data: FeasibilityFormData::default(),
            report_data: serde_json::from_value(sample_report_json()).unwrap(),
        };
        let text = render_feasibility_report(&report);

        let positions: Vec<usize> = [
            "Project Overview",
            "Energy Generation",
            "Space Requirement",
            "System Components",
            "Warranties & AMC",
            "Technical Compliance",
            "Financial Summary",
            "Environmental Benefits",
            "Execution Schedule",
            "Conclusion",
        ]
        .iter()
        .map(|title| text.find(title).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(text.contains("Estimated Cost:     ₹30,00,000"));
        assert!(text.contains("- IEC 61730"));
    }

    #[test]
    fn test_assessment_rendering() {
        let report = GeneratedAssessmentReport {
            form_data: AssessmentFormData {
                client_name: "Sri Lakshmi Foods".to_string(),
                pincode: "500037".to_string(),
                ..AssessmentFormData::default()
            },
            report_data: serde_json::from_value(sample_assessment_json()).unwrap(),
        };
        let text = render_assessment_report(&report);

        assert!(text.starts_with("On-site Assessment: Sri Lakshmi Foods"));
        assert!(text.contains("Telangana - 500037"));
        assert!(text.contains("Loan Principal:     ₹39,60,000"));
        assert!(text.contains("Enhancement Potential"));
        assert!(text.contains("Bank Loan @ 8.9% Diminishing"));
    }
}
