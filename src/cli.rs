use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// NutriScan: analyze nutrient intake against reference values and suggest
/// corrective foods.
#[derive(Parser, Debug)]
#[command(name = "nutri_scan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the nutrient reference CSV (Indicator, Value, Unit).
    #[arg(short, long, global = true, default_value = "data/Indicators_brief.csv")]
    pub reference: PathBuf,

    /// Path to a food-source CSV (Nutrient, Food, Content, Unit).
    /// Uses the built-in table when omitted.
    #[arg(short, long, global = true)]
    pub sources: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Enter every nutrient intake by hand.
    Manual {
        /// Save the analysis report as JSON.
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Load an intake profile from dietary survey data.
    Survey {
        /// Path to the survey CSV (Survey, Geographic Level, Indicator, Value).
        #[arg(long)]
        data: PathBuf,

        /// Survey country; fuzzy-matched, or chosen from a menu when omitted.
        #[arg(long)]
        country: Option<String>,

        /// Subpopulation (geographic level) within the country.
        #[arg(long)]
        subpopulation: Option<String>,

        /// Review and edit the profile before analysis.
        #[arg(long)]
        adjust: bool,

        /// Save the analysis report as JSON.
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Parse a model's free-text nutrient estimate and analyze it.
    Estimate {
        /// File holding the model response, or "-" for stdin.
        #[arg(long, default_value = "-")]
        response: String,

        /// Review and edit the estimates before analysis.
        #[arg(long)]
        adjust: bool,

        /// Save the parsed intakes as JSON for later `analyze` runs.
        #[arg(long)]
        save_intakes: Option<PathBuf>,

        /// Save the analysis report as JSON.
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Analyze intakes saved as JSON.
    Analyze {
        /// JSON array of {"nutrient", "intake"} records.
        #[arg(long)]
        intakes: PathBuf,

        /// Save the analysis report as JSON.
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Print the prompts sent to the text-generation model.
    Prompt {
        #[command(subcommand)]
        kind: PromptKind,
    },
}

#[derive(Subcommand, Debug)]
pub enum PromptKind {
    /// Instructions for estimating nutrient content from a diet description.
    Estimate,

    /// Weekly meal-plan request built from an analysis of saved intakes.
    MealPlan {
        /// JSON array of {"nutrient", "intake"} records.
        #[arg(long)]
        intakes: PathBuf,

        /// Country of residence, to steer the cuisine.
        #[arg(long, default_value = "United States")]
        country: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Manual { report: None }
    }
}
