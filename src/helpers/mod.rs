pub mod config_helper;
pub mod json_value;
pub mod language_detector;
