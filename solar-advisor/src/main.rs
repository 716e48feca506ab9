use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use solar_advisor::app::AppState;
use solar_advisor::chat::ChatSession;
use solar_advisor::config::AppConfig;
use solar_advisor::forms::{FormFields, apply_assignments, load_form_file};
use solar_advisor::logging;
use solar_advisor::plot::plot_cashflow;
use solar_advisor::report::render::{
    assessment_export_file_name, feasibility_export_file_name, render_assessment_report,
    render_feasibility_report, render_roi_table,
};
use solar_advisor::report::{GeminiClient, generate_assessment_report, generate_feasibility_report};
use solar_model::assessment::AssessmentFormData;
use solar_model::feasibility::{FeasibilityFormData, GeneratedReport};
use solar_model::roi::CalculationInputs;
use std::fs;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Debug, Parser)]
#[command(name = "solar-advisor", version, about = "Solar ROI projections and AI feasibility reports")]
struct Cli {
    /// Configuration file (defaults to ./solar-advisor.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Project 25 years of generation, savings and loan repayment
    Roi {
        /// Override an input, e.g. --set systemCapacityKw=75
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,
        /// Also draw the cash-flow chart into the output directory
        #[arg(long)]
        plot: bool,
        /// Print the results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Generate a feasibility report
    Feasibility(ReportArgs),
    /// Generate an on-site assessment report
    Assessment(ReportArgs),
    /// Chat with the assistant, optionally about a saved feasibility report
    Chat {
        /// Feasibility report JSON saved by `feasibility --save`
        #[arg(long)]
        report: Option<PathBuf>,
    },
}

#[derive(Debug, Args)]
struct ReportArgs {
    /// TOML file with form fields
    #[arg(long)]
    form: Option<PathBuf>,
    /// Override a form field, e.g. --set plantCapacity=120
    #[arg(long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,
    /// Save the generated report as JSON in the output directory
    #[arg(long)]
    save: bool,
}

fn fill_form<F: FormFields>(form: &mut F, args: &ReportArgs) -> anyhow::Result<()> {
    if let Some(path) = &args.form {
        load_form_file(form, path)?;
    }
    apply_assignments(form, &args.set)?;
    form.validate().context("form is incomplete")?;
    Ok(())
}

fn save_json<T: serde::Serialize>(dir: &Path, pdf_name: &str, value: &T) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("could not create output directory {}", dir.display()))?;
    let path = dir.join(pdf_name).with_extension("json");
    fs::write(&path, serde_json::to_string_pretty(value)?)
        .with_context(|| format!("could not write {}", path.display()))?;
    Ok(path)
}

fn run_roi(config: &AppConfig, set: &[String], plot: bool, json: bool) -> anyhow::Result<()> {
    let mut inputs = CalculationInputs::default();
    apply_assignments(&mut inputs, set)?;
    inputs.validate().context("invalid ROI inputs")?;

    let mut state = AppState::new();
    let results = state.calculate_roi(&inputs);

    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
    } else {
        print!("{}", render_roi_table(results));
    }

    if plot {
        fs::create_dir_all(&config.output_dir).with_context(|| {
            format!("could not create output directory {}", config.output_dir.display())
        })?;
        let path = config.output_dir.join("roi-cashflow.png");
        plot_cashflow(results, &path)?;
        println!("Plot saved as {}", path.display());
    }
    Ok(())
}

async fn run_feasibility(config: &AppConfig, args: &ReportArgs) -> anyhow::Result<()> {
    let mut form = FeasibilityFormData::default();
    fill_form(&mut form, args)?;
    let client = GeminiClient::from_config(&config.ai)?;

    let mut state = AppState::new();
    state.begin_feasibility(form.clone());
    println!("Generating feasibility report for {}...", form.company_name);
    state.finish_feasibility(generate_feasibility_report(&client, &form).await);

    if let Some(message) = state.generation_error() {
        bail!("{message}");
    }
    let Some(report) = state.current_report.as_ref() else {
        bail!("no report was generated");
    };

    print!("{}", render_feasibility_report(report));
    let export_name = feasibility_export_file_name(&report.form_data.company_name);
    println!("\nExport file: {export_name}");
    if args.save {
        let path = save_json(&config.output_dir, &export_name, report)?;
        println!("Report saved as {}", path.display());
    }
    Ok(())
}

async fn run_assessment(config: &AppConfig, args: &ReportArgs) -> anyhow::Result<()> {
    let mut form = AssessmentFormData::default();
    fill_form(&mut form, args)?;
    let client = GeminiClient::from_config(&config.ai)?;

    let mut state = AppState::new();
    state.begin_assessment(form.clone());
    println!("Generating assessment report for {}...", form.client_name);
    state.finish_assessment(generate_assessment_report(&client, &form).await);

    if let Some(message) = state.generation_error() {
        bail!("{message}");
    }
    let Some(report) = state.current_assessment.as_ref() else {
        bail!("no report was generated");
    };

    print!("{}", render_assessment_report(report));
    let export_name = assessment_export_file_name(&report.form_data.client_name);
    println!("\nExport file: {export_name}");
    if args.save {
        let path = save_json(&config.output_dir, &export_name, report)?;
        println!("Report saved as {}", path.display());
    }
    Ok(())
}

async fn run_chat(config: &AppConfig, report: Option<&Path>) -> anyhow::Result<()> {
    let context = match report {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("could not read report {}", path.display()))?;
            let report: GeneratedReport = serde_json::from_str(&content)
                .with_context(|| format!("{} is not a saved feasibility report", path.display()))?;
            Some(report)
        }
        None => None,
    };
    let client = GeminiClient::from_config(&config.ai)?;
    let mut session = ChatSession::open(context);

    if let Some(greeting) = session.messages().first() {
        println!("AI: {}", greeting.text);
    }
    println!("(type 'exit' to quit)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
            break;
        }
        if let Some(reply) = session.send(&client, line).await {
            println!("AI: {}", reply.text);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load_or_default(cli.config.as_deref()).context("loading configuration")?;
    logging::init(&config.log_filter);

    match &cli.command {
        Command::Roi { set, plot, json } => run_roi(&config, set, *plot, *json),
        Command::Feasibility(args) => run_feasibility(&config, args).await,
        Command::Assessment(args) => run_assessment(&config, args).await,
        Command::Chat { report } => run_chat(&config, report.as_deref()).await,
    }
}
