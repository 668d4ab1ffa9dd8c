mod messenger;

pub use messenger::{IMessageGateway, InMemoryMessageGateway, SentMessage, TelegramGateway};
