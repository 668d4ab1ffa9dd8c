use super::IMessageGateway;
use anyhow::{anyhow, Context};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use relance_domain::MessageRef;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

const TELEGRAM_API_HOST: &str = "https://api.telegram.org";

/// Telegram Bot API gateway posting into the venue group chat.
pub struct TelegramGateway {
    client: Client,
    token: String,
    chat_id: String,
}

impl TelegramGateway {
    pub fn new(token: String, chat_id: String) -> Self {
        Self {
            client: Client::new(),
            token,
            chat_id,
        }
    }

    fn url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", TELEGRAM_API_HOST, self.token, method)
    }
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'static str,
    disable_web_page_preview: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to_message_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct TelegramResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    result: Option<TelegramMessage>,
}

#[derive(Debug, Deserialize)]
struct TelegramMessage {
    message_id: i64,
}

impl TelegramResponse {
    fn into_message_ref(self) -> anyhow::Result<MessageRef> {
        match self.result {
            Some(message) if self.ok => Ok(MessageRef(message.message_id)),
            _ => Err(anyhow!(
                "telegram send failed: {}",
                self.description.unwrap_or_else(|| "unknown error".into())
            )),
        }
    }
}

#[async_trait::async_trait]
impl IMessageGateway for TelegramGateway {
    async fn send_text(
        &self,
        text: &str,
        reply_to: Option<MessageRef>,
    ) -> anyhow::Result<MessageRef> {
        let request = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
            parse_mode: "HTML",
            disable_web_page_preview: true,
            reply_to_message_id: reply_to.map(|r| r.0),
        };

        let response: TelegramResponse = self
            .client
            .post(self.url("sendMessage"))
            .json(&request)
            .send()
            .await
            .context("sendMessage request failed")?
            .json()
            .await
            .context("sendMessage response was not valid json")?;

        let message = response.into_message_ref()?;
        debug!("reminder posted (message={})", message);
        Ok(message)
    }

    async fn send_image(&self, image: &str) -> anyhow::Result<MessageRef> {
        let photo = STANDARD
            .decode(image)
            .context("image payload is not valid base64")?;
        let part = Part::bytes(photo)
            .file_name("event.jpg")
            .mime_str("image/jpeg")?;
        let form = Form::new()
            .text("chat_id", self.chat_id.clone())
            .part("photo", part);

        let response: TelegramResponse = self
            .client
            .post(self.url("sendPhoto"))
            .multipart(form)
            .send()
            .await
            .context("sendPhoto request failed")?
            .json()
            .await
            .context("sendPhoto response was not valid json")?;

        response.into_message_ref()
    }
}
