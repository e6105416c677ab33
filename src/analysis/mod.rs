pub mod adjustments;
pub mod classifier;
pub mod constants;
pub mod engine;
pub mod recommend;

pub use adjustments::{nutrient_tips, plan_adjustments, NutrientAdjustment};
pub use classifier::{classify, percentage_of_reference};
pub use constants::*;
pub use engine::analyze;
pub use recommend::{is_actionable, recommend};
