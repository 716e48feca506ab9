use plotters::prelude::*;
use plotters_backend::FontFamily;
use solar_model::roi::CalculationResults;
use std::ops::Range;
use std::path::Path;

/// Value range covering every net and cumulative savings figure, always
/// including zero, with a little headroom on both sides.
fn value_range(results: &CalculationResults) -> Range<f64> {
    let (min, max) = results
        .yearly_breakdown
        .iter()
        .flat_map(|row| [row.net_savings_currency, row.cumulative_savings_currency])
        .filter(|v| v.is_finite())
        .fold((0f64, 0f64), |(lo, hi), v| (lo.min(v), hi.max(v)));

    let padding = ((max - min) * 0.05).max(1.0);
    (min - padding)..(max + padding)
}

/// Draw yearly net savings as bars and cumulative savings as a line, saved as a PNG.
pub fn plot_cashflow(results: &CalculationResults, path: &Path) -> anyhow::Result<()> {
    let years = results.yearly_breakdown.len() as f64;
    let root = BitMapBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!(
                "Cash Flow (payback {})",
                results.payback_period.label()
            ),
            (FontFamily::SansSerif, 30),
        )
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(90)
        .build_cartesian_2d(0f64..years + 1.0, value_range(results))?;

    chart
        .configure_mesh()
        .x_desc("Year")
        .y_desc("₹")
        .y_label_formatter(&|v| crate::general::currency::format_indian_number(*v))
        .draw()?;

    chart
        .draw_series(results.yearly_breakdown.iter().map(|row| {
            let x = row.year as f64;
            let color = if row.net_savings_currency >= 0.0 {
                BLUE
            } else {
                RED
            };
            Rectangle::new(
                [(x - 0.35, 0.0), (x + 0.35, row.net_savings_currency)],
                color.mix(0.6).filled(),
            )
        }))?
        .label("Net savings")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], &BLUE));

    chart
        .draw_series(LineSeries::new(
            results
                .yearly_breakdown
                .iter()
                .map(|row| (row.year as f64, row.cumulative_savings_currency)),
            &GREEN,
        ))?
        .label("Cumulative savings")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], &GREEN));

    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(0.0, 0.0), (years + 1.0, 0.0)],
            BLACK.stroke_width(1),
        )))?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    root.present()?;

    tracing::info!(path = %path.display(), "cash-flow chart written");
    Ok(())
}
