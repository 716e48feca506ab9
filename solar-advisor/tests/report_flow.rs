use async_trait::async_trait;
use serde_json::json;
use solar_advisor::ServiceError;
use solar_advisor::app::AppState;
use solar_advisor::chat::{CHAT_ERROR_REPLY, ChatSession};
use solar_advisor::forms::{FormFields, apply_assignments};
use solar_advisor::report::render::{feasibility_export_file_name, render_feasibility_report};
use solar_advisor::report::schema::Schema;
use solar_advisor::report::{TextGenerator, generate_feasibility_report};
use solar_model::chat::ChatMessage;
use solar_model::feasibility::FeasibilityFormData;
use solar_model::session::{Page, Role, User};

/// Replies with the same text to every request, or fails every request.
struct CannedService(Option<String>);

#[async_trait]
impl TextGenerator for CannedService {
    async fn generate_json(&self, _prompt: &str, _schema: &Schema) -> Result<String, ServiceError> {
        self.0.clone().ok_or(ServiceError::EmptyResponse)
    }

    async fn chat(&self, _instruction: &str, _history: &[ChatMessage]) -> Result<String, ServiceError> {
        self.0.clone().ok_or(ServiceError::EmptyResponse)
    }
}

fn report_reply(client: &str) -> String {
    json!({
        "projectOverview": { "client": client, "location": "Pune", "capacity": 120, "installationType": "Ground Mount" },
        "energyGeneration": { "annualGeneration": 153738, "solarIrradiation": 4.5, "performanceRatio": 0.78 },
        "spaceRequirement": { "area": 12000 },
        "systemComponents": { "modules": "Waree", "inverter": "String Inverter", "structure": "HDG" },
        "warrantiesAndAmc": { "moduleWarranty": "25 Years", "inverterWarranty": "5 Years", "amc": "5 Years" },
        "technicalCompliance": ["IEC 61215"],
        "financialSummary": { "estimatedCost": 6000000, "annualSavings": 1229904, "roi": 20.5, "paybackPeriod": 4.88 },
        "environmentalBenefits": { "co2Reduction": 126.07, "treesEquivalent": 6003 },
        "executionSchedule": { "designAndEngineering": "1 week", "procurement": "2 weeks", "installation": "4 weeks", "commissioning": "1 week" },
        "conclusion": "Proceed."
    })
    .to_string()
}

#[tokio::test]
async fn feasibility_report_end_to_end() {
    let mut form = FeasibilityFormData::default();
    apply_assignments(
        &mut form,
        &[
            "companyName=Acme Agro Foods".to_string(),
            "plantCapacity=120".to_string(),
            "installationType=Ground Mount".to_string(),
        ],
    )
    .unwrap();
    form.validate().unwrap();

    let service = CannedService(Some(report_reply("Acme Agro Foods Pvt. Ltd.")));
    let mut state = AppState::new();
    state.login(User::new("Ravi", Role::Partner));
    state.navigate(Page::Generator);

    state.begin_feasibility(form.clone());
    state.finish_feasibility(generate_feasibility_report(&service, &form).await);

    assert_eq!(state.resolve_page(), Page::ReportDisplay);
    assert_eq!(state.report_count(), 1);
    let report = state.current_report.clone().unwrap();
    assert_eq!(report.form_data.plant_capacity, 120.0);
    assert_eq!(
        feasibility_export_file_name(&report.form_data.company_name),
        "Feasibility-Report-Acme_Agro_Foods.pdf"
    );
    assert!(render_feasibility_report(&report).contains("Estimated Cost:     ₹60,00,000"));

    let chat = ChatSession::open(Some(report));
    assert!(chat.messages()[0].text.ends_with("the report for Acme Agro Foods?"));
}

#[tokio::test]
async fn failed_generation_returns_to_form() {
    let form = FeasibilityFormData::default();
    let service = CannedService(None);
    let mut state = AppState::new();
    state.navigate(Page::Generator);

    state.begin_feasibility(form.clone());
    state.finish_feasibility(generate_feasibility_report(&service, &form).await);

    assert_eq!(state.report_count(), 0);
    assert!(state.generation_error().unwrap().starts_with("Failed to generate report: "));

    state.retry_after_failure();
    assert_eq!(state.page, Page::Generator);
    assert!(state.generation_error().is_none());
}

#[tokio::test]
async fn chat_falls_back_to_apology() {
    let service = CannedService(None);
    let mut chat = ChatSession::open(None);

    let reply = chat.send(&service, "Is net metering available?").await.cloned();

    assert_eq!(reply.map(|m| m.text), Some(CHAT_ERROR_REPLY.to_string()));
    assert_eq!(chat.messages().len(), 3);
}
