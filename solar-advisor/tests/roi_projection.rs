use solar_advisor::general::finance::{calculate_emi, project};
use solar_model::roi::{CalculationInputs, PROJECTION_YEARS, PaybackPeriod};

fn sample_inputs() -> Vec<CalculationInputs> {
    let base = CalculationInputs::default();
    vec![
        base.clone(),
        CalculationInputs {
            annual_degradation_pct: 0.0,
            ..base.clone()
        },
        CalculationInputs {
            loan_amount_percentage: 0.0,
            ..base.clone()
        },
        CalculationInputs {
            loan_amount_percentage: 100.0,
            interest_rate_pct: 0.0,
            loan_tenure_years: 10,
            ..base.clone()
        },
        CalculationInputs {
            system_capacity_kw: 3.5,
            cost_per_kw: 62_000.0,
            annual_degradation_pct: 2.5,
            electricity_tariff: 5.2,
            tariff_escalation_pct: 0.0,
            loan_amount_percentage: 50.0,
            interest_rate_pct: 11.5,
            loan_tenure_years: 30,
        },
    ]
}

#[test]
fn breakdown_covers_years_one_to_twenty_five() {
    for inputs in sample_inputs() {
        let results = project(&inputs);
        let years: Vec<u32> = results.yearly_breakdown.iter().map(|y| y.year).collect();
        assert_eq!(years, (1..=PROJECTION_YEARS).collect::<Vec<_>>());
    }
}

#[test]
fn generation_never_increases() {
    for inputs in sample_inputs() {
        let results = project(&inputs);
        for pair in results.yearly_breakdown.windows(2) {
            let (this, next) = (&pair[0], &pair[1]);
            if inputs.annual_degradation_pct == 0.0 {
                assert_eq!(next.energy_generation_kwh, this.energy_generation_kwh);
            } else {
                assert!(next.energy_generation_kwh < this.energy_generation_kwh);
            }
        }
    }
}

#[test]
fn loan_payment_is_a_step_function() {
    for inputs in sample_inputs() {
        let results = project(&inputs);
        let annual = results.loan.monthly_emi * 12.0;
        assert_eq!(results.loan.annual_loan_payment, annual);

        for row in &results.yearly_breakdown {
            if row.year <= inputs.loan_tenure_years {
                assert_eq!(row.loan_payment_currency, annual, "year {}", row.year);
            } else {
                assert_eq!(row.loan_payment_currency, 0.0, "year {}", row.year);
            }
        }
    }
}

#[test]
fn no_loan_means_full_down_payment() {
    let inputs = CalculationInputs {
        loan_amount_percentage: 0.0,
        ..CalculationInputs::default()
    };
    let results = project(&inputs);

    assert_eq!(results.loan.down_payment, results.total_project_cost);
    assert_eq!(results.loan.loan_amount, 0.0);
    assert!(
        results
            .yearly_breakdown
            .iter()
            .all(|row| row.loan_payment_currency == 0.0)
    );
}

#[test]
fn net_savings_is_savings_minus_payment() {
    let results = project(&CalculationInputs::default());
    for row in &results.yearly_breakdown {
        assert_eq!(
            row.net_savings_currency,
            row.savings_currency - row.loan_payment_currency
        );
    }
}

#[test]
fn zero_tenure_uses_single_period_fallback() {
    let inputs = CalculationInputs {
        loan_tenure_years: 0,
        ..CalculationInputs::default()
    };
    let results = project(&inputs);

    assert_eq!(results.loan.monthly_emi, results.loan.loan_amount);
    assert_eq!(results.loan.monthly_emi, calculate_emi(2_000_000.0, 9.0, 0));
    assert_eq!(results.yearly_breakdown.len(), 25);
    assert!(results.yearly_breakdown.iter().all(|row| row.loan_payment_currency == 0.0));
}

#[test]
fn losing_project_never_pays_back() {
    let inputs = CalculationInputs {
        electricity_tariff: 0.01,
        loan_amount_percentage: 100.0,
        loan_tenure_years: 25,
        ..CalculationInputs::default()
    };
    let results = project(&inputs);

    assert!(
        results
            .yearly_breakdown
            .iter()
            .all(|row| row.net_savings_currency < 0.0)
    );
    assert_eq!(results.payback_period, PaybackPeriod::BeyondHorizon);
    assert_eq!(results.payback_period.label(), "> 25 Yrs");
}

#[test]
fn projection_is_deterministic() {
    for inputs in sample_inputs() {
        let first = project(&inputs);
        let second = project(&inputs);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
