use relance_api::Application;
use relance_infra::{InMemoryMessageGateway, RelanceContext};
use relance_sdk::RelanceSDK;
use std::sync::Arc;

pub struct TestApp {
    pub messenger: Arc<InMemoryMessageGateway>,
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, RelanceSDK, String) {
    let mut ctx = RelanceContext::create_inmemory();
    ctx.config.port = 0; // Random port

    let messenger = Arc::new(InMemoryMessageGateway::new());
    ctx.messenger = messenger.clone();

    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp { messenger };
    let sdk = RelanceSDK::new(address.clone());
    (app, sdk, address)
}
