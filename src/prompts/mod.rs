pub mod language_guidance;
pub mod output_schemas;
pub mod system_prompt;
