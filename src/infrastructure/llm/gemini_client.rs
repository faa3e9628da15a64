use super::traits::LanguageModel;
use async_trait::async_trait;
use eventsource_stream::{EventStreamError, Eventsource};
use futures_util::StreamExt;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

/// Sampling parameters sent with every request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationSettings {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
    pub response_mime_type: String,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            temperature: 0.2,
            top_p: 0.95,
            top_k: 40,
            max_output_tokens: 8192,
            response_mime_type: "application/json".to_string(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: &'a GenerationSettings,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: Option<i64>,
    message: String,
}

/// Streams completions from the Gemini `streamGenerateContent` endpoint.
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
    settings: GenerationSettings,
}

impl GeminiClient {
    pub fn new(
        base_url: String,
        model: String,
        api_key: String,
        settings: GenerationSettings,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            api_key,
            settings,
        })
    }

    fn stream_url(&self) -> String {
        format!(
            "{}/models/{}:streamGenerateContent?alt=sse",
            self.base_url, self.model
        )
    }

    fn request_body<'a>(&'a self, prompt: &'a str) -> GenerateContentRequest<'a> {
        GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: &self.settings,
        }
    }
}

/// Appends the text parts of one streamed event to `out`.
fn append_event(event: &str, out: &mut String) -> anyhow::Result<()> {
    let response: GenerateContentResponse = serde_json::from_str(event)
        .map_err(|e| anyhow::anyhow!("Malformed stream chunk from model: {}", e))?;

    if let Some(err) = response.error {
        match err.code {
            Some(code) => anyhow::bail!("Model error {}: {}", code, err.message),
            None => anyhow::bail!("Model error: {}", err.message),
        }
    }

    for candidate in response.candidates {
        let parts = candidate.content.map(|c| c.parts).unwrap_or_default();
        for text in parts.into_iter().filter_map(|p| p.text) {
            out.push_str(&text);
        }
    }
    Ok(())
}

#[async_trait]
impl LanguageModel for GeminiClient {
    #[instrument(skip(self, prompt), fields(model = %self.model, prompt_len = prompt.len()))]
    async fn stream_text(&self, prompt: &str) -> anyhow::Result<String> {
        let response = self
            .client
            .post(self.stream_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&self.request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body: String = body.chars().take(500).collect();
            anyhow::bail!("Model endpoint returned {}: {}", status, body.trim());
        }

        let mut events = std::pin::pin!(response.bytes_stream().eventsource());
        let mut text = String::new();
        let mut chunks = 0usize;

        while let Some(event) = events.next().await {
            let event = match event {
                Ok(event) => event,
                Err(EventStreamError::Transport(err)) => return Err(err.into()),
                Err(err) => anyhow::bail!("Malformed event stream from model: {}", err),
            };
            if event.data.trim().is_empty() {
                continue;
            }
            append_event(&event.data, &mut text)?;
            chunks += 1;
        }

        debug!(chunks, reply_len = text.len(), "Model stream complete");
        Ok(text)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
