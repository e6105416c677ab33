pub mod response;

pub use response::{find_answer_line, parse_response, FIELD_SEPARATOR, NAME_VALUE_SEPARATOR};
