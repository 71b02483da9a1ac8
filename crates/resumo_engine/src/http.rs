use std::sync::Arc;
use std::time::Duration;

use app_logging::{app_debug, app_info};
use reqwest::header::HeaderMap;
use reqwest::{Method, Request, RequestBuilder, Response, StatusCode};
use url::Url;

use crate::signal::{toast_from_headers, toast_from_meta};
use crate::{ApiError, ToastCenter, ToastId};

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub demo_analysis_delay: Duration,
    pub demo_optimize_delay: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            demo_analysis_delay: Duration::from_millis(2000),
            demo_optimize_delay: Duration::from_millis(1000),
        }
    }
}

/// Observes every response delivered by [`HttpClient`]. Called once the
/// response head has arrived, before the caller gets the response.
pub trait ResponseInterceptor: Send + Sync {
    fn on_response(&self, url: &Url, status: StatusCode, headers: &HeaderMap);
}

/// Raises a toast for any response carrying the `X-Toast-*` headers.
pub struct ToastInterceptor {
    toasts: ToastCenter,
}

impl ToastInterceptor {
    pub fn new(toasts: ToastCenter) -> Self {
        Self { toasts }
    }
}

impl ResponseInterceptor for ToastInterceptor {
    fn on_response(&self, url: &Url, _status: StatusCode, headers: &HeaderMap) {
        if let Some(toast) = toast_from_headers(headers) {
            app_info!("Toast signalled by {} kind={}", url, toast.kind);
            self.toasts.notify(toast);
        }
    }
}

/// `reqwest::Client` with an explicit interceptor chain, registered once at
/// startup.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: Url,
    interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl HttpClient {
    pub fn new(settings: &ClientSettings) -> Result<Self, ApiError> {
        let base_url = Url::parse(&settings.base_url)
            .map_err(|err| ApiError::InvalidUrl(format!("{}: {err}", settings.base_url)))?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Ok(Self {
            client,
            base_url,
            interceptors: Vec::new(),
        })
    }

    pub fn with_interceptor(mut self, interceptor: Arc<dyn ResponseInterceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends percent-encoded path segments to the base url.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Resolves an absolute path such as `/resume/42/optimize` against the base url.
    pub fn resolve(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|err| ApiError::InvalidUrl(format!("{path}: {err}")))
    }

    pub fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client.request(method, url)
    }

    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await.map_err(map_reqwest_error)?;
        self.intercept(&response);
        Ok(response)
    }

    pub async fn execute(&self, request: Request) -> Result<Response, ApiError> {
        let response = self
            .client
            .execute(request)
            .await
            .map_err(map_reqwest_error)?;
        self.intercept(&response);
        Ok(response)
    }

    /// Loads a page after a navigation and shows any toast announced in its
    /// meta tags. Header toasts are handled by the interceptors as usual.
    pub async fn load_page(
        &self,
        path: &str,
        toasts: &ToastCenter,
    ) -> Result<Option<ToastId>, ApiError> {
        let url = self.resolve(path)?;
        let response = self.send(self.request(Method::GET, url)).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus(status.as_u16()));
        }
        let html = response.text().await.map_err(map_reqwest_error)?;
        Ok(toast_from_meta(&html).map(|toast| toasts.notify(toast)))
    }

    fn intercept(&self, response: &Response) {
        app_debug!(
            "Response {} {} ({} interceptors)",
            response.status(),
            response.url(),
            self.interceptors.len()
        );
        for interceptor in &self.interceptors {
            interceptor.on_response(response.url(), response.status(), response.headers());
        }
    }
}

pub(crate) fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::Timeout(err.to_string());
    }
    if err.is_decode() {
        return ApiError::Decode(err.to_string());
    }
    ApiError::Network(err.to_string())
}
