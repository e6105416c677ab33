use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nutri_scan_rs::analysis::analyze;
use nutri_scan_rs::catalog::{FoodSourceCatalog, ReferenceCatalog};
use nutri_scan_rs::cli::{Cli, Command, PromptKind};
use nutri_scan_rs::error::Result;
use nutri_scan_rs::interface::{
    choose_option, display_report, prompt_adjust_intakes, prompt_manual_intakes,
};
use nutri_scan_rs::models::{AnalysisReport, IntakeSet};
use nutri_scan_rs::oracle::{
    estimate_intakes, estimation_system_prompt, meal_plan_prompt, MEAL_PLAN_SYSTEM_PROMPT,
};
use nutri_scan_rs::state::{load_intakes, save_intakes, save_report};
use nutri_scan_rs::survey::SurveyTable;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let reference = ReferenceCatalog::from_csv_path(&cli.reference)?;
    let sources = match &cli.sources {
        Some(path) => FoodSourceCatalog::from_csv_path(path)?,
        None => FoodSourceCatalog::builtin(),
    };
    info!(
        nutrients = reference.len(),
        food_sources = sources.len(),
        "catalogs loaded"
    );

    match cli.command.unwrap_or_default() {
        Command::Manual { report } => cmd_manual(&reference, &sources, report),
        Command::Survey {
            data,
            country,
            subpopulation,
            adjust,
            report,
        } => cmd_survey(
            &reference,
            &sources,
            &data,
            country.as_deref(),
            subpopulation.as_deref(),
            adjust,
            report,
        ),
        Command::Estimate {
            response,
            adjust,
            save_intakes,
            report,
        } => cmd_estimate(&reference, &sources, &response, adjust, save_intakes, report),
        Command::Analyze { intakes, report } => {
            let intakes = load_intakes(&intakes)?;
            analyze_and_display(&intakes, &reference, &sources, report)
        }
        Command::Prompt { kind } => cmd_prompt(&reference, kind),
    }
}

/// Analyze intakes, print the report and optionally save it.
fn analyze_and_display(
    intakes: &IntakeSet,
    reference: &ReferenceCatalog,
    sources: &FoodSourceCatalog,
    report_path: Option<PathBuf>,
) -> Result<()> {
    let report = AnalysisReport::build(intakes, reference, sources);
    display_report(&report, reference);

    if let Some(path) = report_path {
        save_report(&path, &report)?;
        println!("Report saved to {}", path.display());
    }

    Ok(())
}

/// Manual channel: prompt for every nutrient.
fn cmd_manual(
    reference: &ReferenceCatalog,
    sources: &FoodSourceCatalog,
    report: Option<PathBuf>,
) -> Result<()> {
    if reference.is_empty() {
        println!("The reference catalog is empty; nothing to enter.");
        return Ok(());
    }

    let intakes = prompt_manual_intakes(reference)?;
    analyze_and_display(&intakes, reference, sources, report)
}

/// Tabular channel: pick a survey profile.
fn cmd_survey(
    reference: &ReferenceCatalog,
    sources: &FoodSourceCatalog,
    data: &Path,
    country: Option<&str>,
    subpopulation: Option<&str>,
    adjust: bool,
    report: Option<PathBuf>,
) -> Result<()> {
    let table = SurveyTable::from_csv_path(data)?;

    let country = choose_option("country", &table.countries(), country)?;
    let subpopulation =
        choose_option("subpopulation", &table.subpopulations(&country), subpopulation)?;

    let mut intakes = table.profile(&country, &subpopulation, reference)?;
    println!(
        "Loaded dietary profile for {} - {} ({} nutrients)",
        country,
        subpopulation,
        intakes.len()
    );

    if adjust {
        intakes = prompt_adjust_intakes(&intakes, reference)?;
    }

    analyze_and_display(&intakes, reference, sources, report)
}

/// Free-text channel: parse a model response.
fn cmd_estimate(
    reference: &ReferenceCatalog,
    sources: &FoodSourceCatalog,
    response: &str,
    adjust: bool,
    save_path: Option<PathBuf>,
    report: Option<PathBuf>,
) -> Result<()> {
    let text = if response == "-" {
        io::read_to_string(io::stdin())?
    } else {
        fs::read_to_string(response)?
    };

    let mut intakes = estimate_intakes(&text, reference)?;
    println!("Nutrient content estimated for {} nutrients.", intakes.len());

    if adjust {
        intakes = prompt_adjust_intakes(&intakes, reference)?;
    }

    if let Some(path) = save_path {
        save_intakes(&path, &intakes)?;
        println!("Intakes saved to {}", path.display());
    }

    analyze_and_display(&intakes, reference, sources, report)
}

fn cmd_prompt(reference: &ReferenceCatalog, kind: PromptKind) -> Result<()> {
    match kind {
        PromptKind::Estimate => {
            println!("{}", estimation_system_prompt(reference));
        }
        PromptKind::MealPlan { intakes, country } => {
            let intakes = load_intakes(&intakes)?;
            let results = analyze(&intakes, reference);
            println!("{}", MEAL_PLAN_SYSTEM_PROMPT);
            println!();
            println!("{}", meal_plan_prompt(&results, &country));
        }
    }
    Ok(())
}
