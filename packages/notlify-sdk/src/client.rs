use crate::SdkResult;
use crate::error::*;
use notlify_core::*;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use std::time::Duration;
use url::Url;

#[derive(Clone)]
pub struct NotlifyClient {
    client: Client,
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl NotlifyClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let client = Self::new(&config.server_url);
        match config.timeout_seconds {
            Some(secs) => client.with_timeout(Duration::from_secs(secs)),
            None => client,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn endpoint(&self, path: &str) -> SdkResult<Url> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        Ok(Url::parse(&url)?)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let request = self.client.request(method, url);
        // unset means reqwest's own default
        match self.timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        }
    }

    /// Turns a non-2xx response into `SdkError::Rejected`, pulling the
    /// backend's `detail` string out of the body when it has one.
    async fn check_status(response: Response) -> SdkResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.bytes().await.unwrap_or_default();
        let detail = serde_json::from_slice::<serde_json::Value>(&body)
            .ok()
            .and_then(|value| {
                value
                    .get("detail")
                    .and_then(|detail| detail.as_str())
                    .map(str::to_string)
            });

        Err(SdkError::Rejected {
            status: status.as_u16(),
            detail,
        })
    }

    /// POST `notify`. Any 2xx counts as accepted; the receipt is parsed when
    /// the body allows it and is `None` otherwise.
    pub async fn send_notification(
        &self,
        input: &NotificationRequest,
    ) -> SdkResult<Option<NotificationReceipt>> {
        let url = self.endpoint("notify")?;
        let response = self.request(Method::POST, url).json(input).send().await?;
        let response = Self::check_status(response).await?;

        let body = response.bytes().await.unwrap_or_default();
        Ok(serde_json::from_slice(&body).ok())
    }

    pub async fn list_notifications(&self, limit: u32) -> SdkResult<NotificationList> {
        self.list_notifications_page(limit, None).await
    }

    pub async fn list_notifications_page(
        &self,
        limit: u32,
        offset: Option<u32>,
    ) -> SdkResult<NotificationList> {
        let url = self.endpoint("notifications")?;
        let mut request = self.request(Method::GET, url).query(&[("limit", limit)]);
        if let Some(offset) = offset {
            request = request.query(&[("offset", offset)]);
        }

        let response = Self::check_status(request.send().await?).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    pub async fn get_notification(&self, id: &str) -> SdkResult<NotificationRecord> {
        let mut url = self.endpoint("notifications")?;
        url.path_segments_mut()
            .map_err(|_| SdkError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .push(id);

        let response = self.request(Method::GET, url).send().await?;
        let response = match Self::check_status(response).await {
            Err(SdkError::Rejected { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                return Err(SdkError::NotFound(id.to_string()));
            }
            other => other?,
        };

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    pub async fn health(&self) -> SdkResult<HealthResponse> {
        let url = self.endpoint("health")?;
        let response = Self::check_status(self.request(Method::GET, url).send().await?).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_client_creation() {
        let client = NotlifyClient::new("http://localhost:8000/api");
        assert_eq!(client.base_url, "http://localhost:8000/api");
        assert!(client.timeout.is_none());
    }

    #[test]
    fn test_client_url_trimming() {
        let client = NotlifyClient::new("http://localhost:8000/api/");
        assert_eq!(client.base_url, "http://localhost:8000/api");

        // trim_end_matches removes all trailing slashes
        let client = NotlifyClient::new("http://localhost:8000/api///");
        assert_eq!(client.base_url, "http://localhost:8000/api");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = NotlifyClient::new("http://localhost:8000/api");
        let url = client.endpoint("/notify").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/notify");
    }

    #[test]
    fn test_endpoint_invalid_base() {
        let client = NotlifyClient::new("not a url");
        assert!(matches!(
            client.endpoint("health"),
            Err(SdkError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_from_config() {
        let config = AppConfig {
            server_url: "http://example.com/api/".to_string(),
            timeout_seconds: Some(5),
            list_limit: 10,
        };
        let client = NotlifyClient::from_config(&config);
        assert_eq!(client.base_url, "http://example.com/api");
        assert_eq!(client.timeout, Some(Duration::from_secs(5)));

        let client = NotlifyClient::from_config(&AppConfig::default());
        assert!(client.timeout.is_none());
    }

    #[test]
    fn test_sdk_error_display() {
        let error = SdkError::NotFound("notify_1".to_string());
        assert_eq!(error.to_string(), "Notification not found: notify_1");

        let error = SdkError::Rejected {
            status: 422,
            detail: Some("Invalid email".to_string()),
        };
        assert_eq!(error.to_string(), "Backend rejected request with status 422");
        assert_eq!(error.detail(), Some("Invalid email"));
    }
}
