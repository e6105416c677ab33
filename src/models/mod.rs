pub mod analysis;
pub mod intake;
pub mod recommendation;
pub mod report;

pub use analysis::{AnalysisResult, Classification, ColorTag, Status};
pub use intake::{IntakeRecord, IntakeSet};
pub use recommendation::{Action, Recommendation, RecommendationSet};
pub use report::AnalysisReport;
