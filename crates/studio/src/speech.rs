use crate::error::{GenerationError, Result};
use async_trait::async_trait;
use base64::Engine;
use serde_json::{json, Value};

const GOOGLE_API_KEY_VAR: &str = "GOOGLE_API_KEY";
const TTS_URL: &str = "https://texttospeech.googleapis.com/v1/text:synthesize";

/// Boundary trait for text-to-speech backends
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Render `text` as MP3 bytes
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>>;
}

/// Google Cloud Text-to-Speech client.
///
/// Sends the REST `text:synthesize` request keyed by `GOOGLE_API_KEY` and
/// decodes the base64 `audioContent` payload into MP3 bytes.
pub struct GoogleTts {
    api_key: String,
    language_code: String,
    voice: String,
    client: reqwest::Client,
}

impl GoogleTts {
    /// Client keyed from `GOOGLE_API_KEY`, speaking `en-US-Neural2-F`
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(GOOGLE_API_KEY_VAR)
            .map_err(|_| GenerationError::ApiKeyMissing(GOOGLE_API_KEY_VAR))?;
        Ok(Self::new(api_key))
    }

    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            language_code: "en-US".to_string(),
            voice: "en-US-Neural2-F".to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Override the voice name (keeps the language code prefix of the name)
    #[must_use]
    pub fn with_voice(mut self, language_code: impl Into<String>, voice: impl Into<String>) -> Self {
        self.language_code = language_code.into();
        self.voice = voice.into();
        self
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleTts {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>> {
        let payload = json!({
            "input": { "text": text },
            "voice": {
                "languageCode": self.language_code,
                "name": self.voice,
            },
            "audioConfig": { "audioEncoding": "MP3" },
        });

        log::debug!("Synthesizing {} characters of speech", text.chars().count());

        let response = self
            .client
            .post(format!("{TTS_URL}?key={}", self.api_key))
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let result: Value = response.json().await?;
        let audio_base64 = result["audioContent"]
            .as_str()
            .ok_or(GenerationError::NoAudioContent)?;

        Ok(base64::engine::general_purpose::STANDARD.decode(audio_base64)?)
    }
}
