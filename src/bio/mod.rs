//! Personalized biography generation
//!
//! A single prompt-template call to a hosted model: given the artist's
//! general biography and the visitor's location, ask for a localized
//! rewrite. Any failure on this path falls back to the stored biography at
//! the call site; the public page never depends on the model being up.

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::config::BioConfig;
use crate::error::{Error, Result};

/// Inputs to the biography prompt
#[derive(Debug, Clone, Deserialize)]
pub struct BioInput {
    pub artist_name: String,
    pub artist_bio: String,
    pub visitor_location: String,
}

/// The generated biography
#[derive(Debug, Clone, Serialize)]
pub struct BioOutput {
    pub personalized_bio: String,
}

/// Render the biographer prompt
pub fn build_prompt(input: &BioInput) -> String {
    format!(
        "You are a seasoned music biographer, adept at connecting artists with their \
         audiences on a personal level.\n\
         \n\
         Given the following information about an artist and a website visitor, craft a \
         biography that highlights the artist's relevance to the visitor's location. \
         Mention any connections, influences, or experiences that would resonate with \
         someone from that area.\n\
         \n\
         Artist Name: {}\n\
         Artist Bio: {}\n\
         Visitor Location: {}\n\
         \n\
         Personalized Biography:",
        input.artist_name, input.artist_bio, input.visitor_location
    )
}

/// Call the configured model endpoint with the biography prompt
///
/// Speaks the common chat-completions shape: a `messages` list in, the
/// first choice's message text out.
pub async fn generate_personalized_bio(
    http: &reqwest::Client,
    config: &BioConfig,
    input: &BioInput,
) -> Result<BioOutput> {
    if config.endpoint.is_empty() || config.api_key.is_empty() {
        return Err(Error::NotConfigured(
            "Biography generation is not configured on the server.".to_string(),
        ));
    }

    let payload = json!({
        "model": config.model,
        "messages": [
            { "role": "user", "content": build_prompt(input) }
        ],
    });

    let response = http
        .post(&config.endpoint)
        .bearer_auth(&config.api_key)
        .json(&payload)
        .send()
        .await
        .map_err(|e| Error::Upstream(format!("bio request failed: {e}")))?;

    if !response.status().is_success() {
        return Err(Error::Upstream(format!(
            "bio service returned {}",
            response.status()
        )));
    }

    let body: serde_json::Value = response
        .json()
        .await
        .map_err(|e| Error::Upstream(format!("bio response was not JSON: {e}")))?;

    let text = body["choices"][0]["message"]["content"]
        .as_str()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| Error::Upstream("bio response had no text".to_string()))?;

    debug!("Generated personalized bio for {}", input.visitor_location);
    Ok(BioOutput {
        personalized_bio: text,
    })
}
