//! HTTP client for the tracker API.

use core_types::User;
use gloo_net::http::{Request, Response};
use screen_state::SaveRequest;
use serde::de::DeserializeOwned;
use web_sys::AbortSignal;
use web_types::{ApiConfig, Endpoint, FetchError, check_status, decode_list, decode_record};

/// Thin typed client shared by every screen through context.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Client configured from the environment the bundle was built with.
    ///
    /// `OCTOFIT_API_BASE` sets the full base URL; otherwise `CODESPACE_NAME`
    /// selects the Codespaces forwarding host.
    pub fn from_build_env() -> Self {
        Self::new(ApiConfig::resolve(
            option_env!("OCTOFIT_API_BASE"),
            option_env!("CODESPACE_NAME"),
        ))
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// GET a collection, unwrapping the `results` envelope if present.
    pub async fn get_list<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        signal: Option<&AbortSignal>,
    ) -> Result<Vec<T>, FetchError> {
        let url = self.config.url(endpoint);
        tracing::debug!(%url, "fetching {}", endpoint.label());

        let response = Request::get(&url)
            .abort_signal(signal)
            .send()
            .await
            .map_err(into_fetch_error)?;
        let body = read_body(response).await?;
        tracing::debug!(bytes = body.len(), "{} payload received", endpoint.label());

        let records = decode_list::<T>(&body)?;
        tracing::debug!(count = records.len(), "{} decoded", endpoint.label());
        Ok(records)
    }

    /// PATCH a user with the edited fields and return the stored record.
    pub async fn update_user(&self, request: &SaveRequest) -> Result<User, FetchError> {
        let url = self.config.url(&request.endpoint);
        tracing::info!(%url, "updating user");

        let response = Request::patch(&url)
            .json(&request.body)
            .map_err(into_fetch_error)?
            .send()
            .await
            .map_err(into_fetch_error)?;
        let body = read_body(response).await?;

        decode_record(&body)
    }
}

async fn read_body(response: Response) -> Result<String, FetchError> {
    check_status(response.status())?;
    response.text().await.map_err(into_fetch_error)
}

fn into_fetch_error(err: gloo_net::Error) -> FetchError {
    match err {
        gloo_net::Error::JsError(e) if e.name == "AbortError" => FetchError::Aborted,
        gloo_net::Error::JsError(e) => FetchError::Transport(e.message),
        gloo_net::Error::SerdeError(e) => FetchError::Decode(e.to_string()),
        other => FetchError::Transport(other.to_string()),
    }
}

/// Log a failed request unless it was cancelled.
pub fn log_failure(what: &str, err: &FetchError) {
    if err.is_aborted() {
        tracing::debug!("{what} request aborted");
    } else {
        tracing::error!(error = %err, "error fetching {what}");
    }
}
