pub mod groq_choice;
pub mod groq_message;
pub mod groq_request;
pub mod groq_response;
pub mod groq_usage;
