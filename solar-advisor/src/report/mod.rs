//! AI-generated feasibility and assessment reports.

pub mod client;
pub mod prompts;
pub mod render;
pub mod schema;
pub mod service;
pub mod state;

pub use client::{GeminiClient, TextGenerator};
pub use service::{chat_reply, generate_assessment_report, generate_feasibility_report};
pub use state::GenerationState;
