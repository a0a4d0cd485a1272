// Utils compartidos

pub mod constants;
pub mod storage;
pub mod frequency;
pub mod relationship;
pub mod password;
pub mod js_json;

pub use constants::*;
pub use storage::*;
pub use frequency::{frequency_label, FREQUENCY_CODES};
pub use relationship::relationship_label;
pub use js_json::{js_to_json, json_to_js};
