use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "English Tutor Backend",
        version = "0.1.0",
        description = "Relays a learner's sentence to Gemini with a tutor prompt and returns the reply as plain text."
    ),
    servers(
        (url = "http://localhost:8080", description = "Local dev")
    ),
    tags(
        (name = "tutor", description = "Conversation with the AI English tutor")
    ),
    // Handlers (paths)
    paths(
        crate::routes::tutor::converse,
    ),
    // Schemas used in requests/responses
    components(
        schemas(
            crate::models::tutor::IncomingMessage,
            crate::models::gemini::GenerateContentRequest,
            crate::models::gemini::GenerateContentResponse
        )
    )
)]
pub struct ApiDoc;
