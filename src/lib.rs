pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod oracle;
pub mod parser;
pub mod state;
pub mod survey;

pub use analysis::{analyze, classify, plan_adjustments, recommend};
pub use catalog::{FoodSourceCatalog, NutrientSet, ReferenceCatalog};
pub use error::{NutriError, Result};
pub use models::{
    AnalysisReport, AnalysisResult, IntakeSet, Recommendation, RecommendationSet, Status,
};
pub use parser::parse_response;
