use solar_model::roi::{
    CalculationInputs, CalculationResults, LoanSummary, PROJECTION_YEARS, PaybackPeriod,
    YearlyData,
};

/// Assumed peak sun hours per day.
pub const PEAK_SUN_HOURS: f64 = 4.5;
/// Assumed system performance ratio.
pub const PERFORMANCE_RATIO: f64 = 0.78;
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Monthly installment of an amortizing loan.
///
/// EMI = P × r × (1 + r)^n / [(1 + r)^n - 1]
///
/// When the term or the rate is zero the principal is divided by
/// `max(months, 1)` instead. That branch only avoids a division by zero and
/// is not a correct amortization for a zero term. Terms long enough for the
/// growth factor to overflow pay interest only.
pub fn calculate_emi(principal: f64, annual_rate_pct: f64, tenure_months: u32) -> f64 {
    let monthly_rate = annual_rate_pct / 100.0 / 12.0;

    if tenure_months > 0 && monthly_rate > 0.0 {
        let exponent = i32::try_from(tenure_months).unwrap_or(i32::MAX);
        let factor = (1.0 + monthly_rate).powi(exponent);
        if factor.is_infinite() {
            return principal * monthly_rate;
        }
        principal * monthly_rate * factor / (factor - 1.0)
    } else {
        principal / tenure_months.max(1) as f64
    }
}

/// First-year generation in kWh for a plant of the given capacity.
pub fn initial_annual_generation_kwh(system_capacity_kw: f64) -> f64 {
    system_capacity_kw * PEAK_SUN_HOURS * DAYS_PER_YEAR * PERFORMANCE_RATIO
}

/// Project generation, savings and loan repayment over [`PROJECTION_YEARS`].
///
/// Two running totals are kept: the per-year `cumulative_savings_currency`
/// starts at minus the down payment, while the payback total (also reported
/// as `net_25_year_savings`) starts at zero and is compared against the full
/// project cost.
pub fn project(inputs: &CalculationInputs) -> CalculationResults {
    let total_project_cost = inputs.system_capacity_kw * inputs.cost_per_kw;
    let loan_amount = total_project_cost * (inputs.loan_amount_percentage / 100.0);
    let down_payment = total_project_cost - loan_amount;

    let monthly_emi = calculate_emi(
        loan_amount,
        inputs.interest_rate_pct,
        inputs.loan_tenure_years.saturating_mul(12),
    );
    let annual_loan_payment = monthly_emi * 12.0;

    let initial_generation = initial_annual_generation_kwh(inputs.system_capacity_kw);
    let degradation_factor = 1.0 - inputs.annual_degradation_pct / 100.0;
    let escalation_factor = 1.0 + inputs.tariff_escalation_pct / 100.0;

    let mut yearly_breakdown = Vec::with_capacity(PROJECTION_YEARS as usize);
    let mut cumulative_savings = -down_payment;
    let mut cumulative_net_for_payback = 0.0;
    let mut payback_period = None;

    for i in 0..PROJECTION_YEARS {
        let year = i + 1;
        let energy_generation = initial_generation * degradation_factor.powi(i as i32);
        let tariff = inputs.electricity_tariff * escalation_factor.powi(i as i32);
        let savings = energy_generation * tariff;
        let loan_payment = if year <= inputs.loan_tenure_years {
            annual_loan_payment
        } else {
            0.0
        };
        let net_savings = savings - loan_payment;

        cumulative_savings += net_savings;

        let previous_net = cumulative_net_for_payback;
        cumulative_net_for_payback += net_savings;

        if payback_period.is_none() && cumulative_net_for_payback >= total_project_cost {
            let amount_needed = total_project_cost - previous_net;
            if net_savings > 0.0 {
                payback_period = Some(i as f64 + amount_needed / net_savings);
            } else if amount_needed <= 0.0 {
                payback_period = Some(i as f64);
            }
        }

        yearly_breakdown.push(YearlyData {
            year,
            energy_generation_kwh: energy_generation,
            savings_currency: savings,
            loan_payment_currency: loan_payment,
            net_savings_currency: net_savings,
            cumulative_savings_currency: cumulative_savings,
        });
    }

    CalculationResults {
        total_project_cost,
        payback_period: match payback_period {
            Some(years) => PaybackPeriod::Within { years },
            None => PaybackPeriod::BeyondHorizon,
        },
        net_25_year_savings: cumulative_net_for_payback,
        loan: LoanSummary {
            loan_amount,
            down_payment,
            monthly_emi,
            annual_loan_payment,
        },
        yearly_breakdown,
    }
}
