use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

/// Error returned by the SDK: either the transport failed (no status code)
/// or the server answered with something other than the expected status.
#[derive(Debug)]
pub struct APIError {
    pub status_code: Option<StatusCode>,
    pub message: String,
}

pub type APIResponse<T> = Result<T, APIError>;

pub(crate) struct BaseClient {
    address: String,
    client: Client,
}

impl BaseClient {
    pub fn new(address: String) -> Self {
        Self {
            address,
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1/{}", self.address, path)
    }

    async fn handle<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = request.send().await.map_err(|e| APIError {
            status_code: None,
            message: e.to_string(),
        })?;

        let status = res.status();
        if status != expected_status_code {
            let message = res.text().await.unwrap_or_default();
            return Err(APIError {
                status_code: Some(status),
                message,
            });
        }

        res.json().await.map_err(|e| APIError {
            status_code: Some(status),
            message: e.to_string(),
        })
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        self.handle(self.client.get(self.url(&path)), expected_status_code)
            .await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        self.handle(self.client.delete(self.url(&path)), expected_status_code)
            .await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        body: B,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        self.handle(
            self.client.post(self.url(&path)).json(&body),
            expected_status_code,
        )
        .await
    }
}
