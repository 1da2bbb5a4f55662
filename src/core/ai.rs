// claude integration - one completion request per turn

use crate::Error;
use crate::core::chat::Message;
use serde::{Deserialize, Serialize};

pub const MODEL: &str = "claude-sonnet-4-20250514";

const MAX_REPLY_TOKENS: u32 = 500;
const TEMPERATURE: f32 = 0.7;

/// The provider seam. The router only needs a way to turn a system prompt
/// plus an ordered list of turns into one completion.
pub trait Complete {
    fn complete(
        &self,
        system: &str,
        messages: &[Message],
    ) -> impl Future<Output = Result<String, Error>> + Send;
}

pub struct Claude {
    client: reqwest::Client,
    api_key: String,
}

// what we send to claude
#[derive(Serialize)]
struct Request<'a> {
    model: &'static str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: Vec<WireMessage<'a>>,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

// what claude sends back
#[derive(Deserialize)]
struct Response {
    content: Vec<Content>,
}

#[derive(Deserialize)]
struct Content {
    text: String,
}

impl Claude {
    /// Build the client, resolving the API key up front. A missing key is
    /// reported here, before any turn is accepted.
    pub fn new(api_key: Option<String>) -> Result<Self, Error> {
        // flag wins, then the common env var names
        let api_key = match api_key {
            Some(key) => key,
            None => std::env::var("ANTHROPIC_API_KEY")
                .or_else(|_| std::env::var("CLAUDE_API_KEY"))
                .or_else(|_| std::env::var("CLAUDE_KEY"))
                .map_err(|_| Error::MissingApiKey)?,
        };

        Ok(Self {
            client: reqwest::Client::new(),
            api_key,
        })
    }
}

impl Complete for Claude {
    async fn complete(&self, system: &str, messages: &[Message]) -> Result<String, Error> {
        let request = Request {
            model: MODEL,
            max_tokens: MAX_REPLY_TOKENS,
            temperature: TEMPERATURE,
            system,
            messages: messages
                .iter()
                .map(|m| WireMessage {
                    role: m.role.as_str(),
                    content: &m.content,
                })
                .collect(),
        };

        let response = self
            .client
            .post("https://api.anthropic.com/v1/messages")
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let error = response.text().await?;
            return Err(Error::Api(error));
        }

        let body = response.text().await?;
        let response: Response = serde_json::from_str(&body)?;

        // reply text is returned verbatim, no post-processing
        response
            .content
            .first()
            .map(|c| c.text.clone())
            .ok_or_else(|| Error::Api("response contained no text".to_string()))
    }
}
