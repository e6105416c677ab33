pub mod prompts;
pub mod render;

pub use prompts::{
    choose_option, match_choice, parse_intake, prompt_adjust_intakes, prompt_intake,
    prompt_manual_intakes, prompt_yes_no, ChoiceMatch, FUZZY_MATCH_THRESHOLD,
};
pub use render::{display_adjustments, display_report, display_results};
