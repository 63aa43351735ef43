use crate::{
    AppState,
    models::gemini::{GenerateContentRequest, GenerateContentResponse},
    services::gemini::generate_content,
    utils::tutor_prompt,
};
use thiserror::Error;
use tracing::{debug, error, warn};

pub const NO_REPLY_FALLBACK: &str =
    "AI Tutor: I'm sorry, I couldn't generate a response. Please try again.";
pub const UPSTREAM_FALLBACK: &str =
    "AI Tutor: I encountered an error. Please check your API key or try again later.";

#[derive(Debug, Error)]
pub enum TutorError {
    #[error("gemini call failed: {0}")]
    Upstream(String),
    #[error("gemini returned no usable text")]
    NoReply,
}

impl TutorError {
    pub fn fallback(&self) -> &'static str {
        match self {
            TutorError::Upstream(_) => UPSTREAM_FALLBACK,
            TutorError::NoReply => NO_REPLY_FALLBACK,
        }
    }
}

/// Asks Gemini for the tutor's reply. Never fails: errors become a fallback sentence.
pub async fn get_tutor_response(state: &AppState, user_message: &str) -> String {
    match try_tutor_response(state, user_message).await {
        Ok(reply) => reply,
        Err(e) => {
            match &e {
                TutorError::Upstream(_) => error!("Error calling Gemini API for tutor: {e}"),
                TutorError::NoReply => warn!("{e}"),
            }
            e.fallback().to_string()
        }
    }
}

async fn try_tutor_response(state: &AppState, user_message: &str) -> Result<String, TutorError> {
    let req = GenerateContentRequest::from_prompt(tutor_prompt(user_message));

    let res: GenerateContentResponse = generate_content(&state.http, &state.cfg, &req)
        .await
        .map_err(TutorError::Upstream)?;

    if let Some(reason) = res.block_reason() {
        warn!("Gemini blocked the prompt (reason={reason})");
    }
    if let Some(reason) = res
        .first_candidate()
        .and_then(|c| c.finish_reason.as_deref())
    {
        debug!("Gemini finish reason: {reason}");
    }

    res.first_text()
        .map(|text| text.to_string())
        .ok_or(TutorError::NoReply)
}
