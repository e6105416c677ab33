mod persistence;

pub use persistence::{load_intakes, load_report, save_intakes, save_report};
