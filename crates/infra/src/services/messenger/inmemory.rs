use super::IMessageGateway;
use anyhow::bail;
use relance_domain::MessageRef;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Mutex;

/// One recorded delivery, for test assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct SentMessage {
    pub text: Option<String>,
    pub image: bool,
    pub reply_to: Option<MessageRef>,
}

/// Recording gateway used in tests in place of the real channel. Message
/// references are handed out sequentially starting at 1.
pub struct InMemoryMessageGateway {
    sent: Mutex<Vec<SentMessage>>,
    next_ref: AtomicI64,
    fail_texts: AtomicBool,
    fail_images: AtomicBool,
}

impl InMemoryMessageGateway {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            next_ref: AtomicI64::new(1),
            fail_texts: AtomicBool::new(false),
            fail_images: AtomicBool::new(false),
        }
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }

    /// Make subsequent text sends fail, to exercise delivery failure paths.
    pub fn fail_texts(&self, fail: bool) {
        self.fail_texts.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent image sends fail.
    pub fn fail_images(&self, fail: bool) {
        self.fail_images.store(fail, Ordering::SeqCst);
    }

    fn next(&self) -> MessageRef {
        MessageRef(self.next_ref.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for InMemoryMessageGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IMessageGateway for InMemoryMessageGateway {
    async fn send_text(
        &self,
        text: &str,
        reply_to: Option<MessageRef>,
    ) -> anyhow::Result<MessageRef> {
        if self.fail_texts.load(Ordering::SeqCst) {
            bail!("text delivery disabled by test");
        }
        self.sent.lock().unwrap().push(SentMessage {
            text: Some(text.to_string()),
            image: false,
            reply_to,
        });
        Ok(self.next())
    }

    async fn send_image(&self, _image: &str) -> anyhow::Result<MessageRef> {
        if self.fail_images.load(Ordering::SeqCst) {
            bail!("image delivery disabled by test");
        }
        self.sent.lock().unwrap().push(SentMessage {
            text: None,
            image: true,
            reply_to: None,
        });
        Ok(self.next())
    }
}
