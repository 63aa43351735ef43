pub mod gemini;
pub mod tutor;
