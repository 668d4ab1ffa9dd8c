mod inmemory;
mod telegram;

pub use inmemory::{InMemoryMessageGateway, SentMessage};
pub use telegram::TelegramGateway;

use relance_domain::MessageRef;

/// Outbound messaging channel. Both sends return a reference to the
/// delivered message that later reminders can thread replies under.
#[async_trait::async_trait]
pub trait IMessageGateway: Send + Sync {
    /// Send `text` in the channel's rich-text subset, threaded under
    /// `reply_to` when given.
    async fn send_text(
        &self,
        text: &str,
        reply_to: Option<MessageRef>,
    ) -> anyhow::Result<MessageRef>;

    /// Send an already prepared image (base64 JPEG).
    async fn send_image(&self, image: &str) -> anyhow::Result<MessageRef>;
}
