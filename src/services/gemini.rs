use crate::{
    config::Config,
    models::gemini::{GenerateContentRequest, GenerateContentResponse},
};
use url::Url;

/// `{base}{model}:generateContent`, without the key.
pub fn generate_content_url(cfg: &Config) -> Result<Url, String> {
    // "./" keeps the colon in the model segment from being read as a scheme
    cfg.gemini_base_url
        .join(&format!("./{}:generateContent", cfg.gemini_model))
        .map_err(|e| e.to_string())
}

/// Single POST to Gemini. Error strings never carry the request URL, which holds the key.
pub async fn generate_content(
    http: &reqwest::Client,
    cfg: &Config,
    body: &GenerateContentRequest,
) -> Result<GenerateContentResponse, String> {
    let url = generate_content_url(cfg)?;
    let res = http
        .post(url)
        .query(&[("key", cfg.gemini_api_key.expose())])
        .json(body)
        .send()
        .await
        .map_err(|e| format!("request error: {}", e.without_url()))?;
    if !res.status().is_success() {
        return Err(format!("gemini status {}", res.status()));
    }
    res.json::<GenerateContentResponse>()
        .await
        .map_err(|e| format!("json error: {}", e.without_url()))
}
