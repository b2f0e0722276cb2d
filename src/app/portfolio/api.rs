use bytes::Bytes;
use http::{
    header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE},
    Method, StatusCode,
};
use itertools::Itertools;
use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;

use super::{
    Achievement, ApiConfig, CreativeWork, EducationEntry, Envelope, ItemId, Keyed,
    PhotographyItem, Profile, ProfileUpdate, Project, ProjectType, Skills,
};

/// Used when a failed response does not say what went wrong.
pub const GENERIC_FAILURE: &str = "API request failed";

#[derive(Debug, thiserror::Error)]
pub enum ApiErr {
    #[error("reqwest error: {0}")]
    Reqwest(reqwest::Error),
    #[error("json parse error: {0}")]
    Json(serde_json::Error),
    #[error("{message}")]
    Application { status: StatusCode, message: String },
    #[error("{0}")]
    Rejected(String),
    #[error("duplicate {resource} id `{id}`")]
    DuplicateId { resource: &'static str, id: ItemId },
}

impl ApiErr {
    /// The call never produced a usable body: the network failed, it timed
    /// out, or what came back was not the expected JSON.
    pub fn is_transport_or_decode(&self) -> bool {
        matches!(self, ApiErr::Reqwest(_) | ApiErr::Json(_))
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiErr::Reqwest(err) if err.is_timeout())
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiErr::Application { status, .. } => Some(*status),
            ApiErr::Reqwest(err) => err.status(),
            _ => None,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

pub type ApiResult<T> = Result<T, ApiErr>;

/// Per-call knobs for [`PortfolioClient::request`].
#[derive(Debug, Default, Clone)]
pub struct RequestOptions {
    pub method: Method,
    /// Applied over the default `Content-Type: application/json`.
    pub headers: HeaderMap,
    /// Already serialized request payload.
    pub body: Option<String>,
}

impl RequestOptions {
    pub fn put(body: String) -> Self {
        Self {
            method: Method::PUT,
            body: Some(body),
            ..Default::default()
        }
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

impl<T> Envelope<T> {
    pub fn into_data(self) -> ApiResult<T> {
        match self.data {
            Some(data) => Ok(data),
            None => Err(ApiErr::Rejected(
                self.message
                    .filter(|message| !message.is_empty())
                    .unwrap_or_else(|| GENERIC_FAILURE.to_string()),
            )),
        }
    }
}

/// Message to report for a failed response, given its decoded body.
pub fn failure_message(body: &serde_json::Value) -> String {
    body.get("message")
        .and_then(serde_json::Value::as_str)
        .filter(|message| !message.is_empty())
        .unwrap_or(GENERIC_FAILURE)
        .to_string()
}

/// Ids are compared by their text form, so `1` and `"1"` collide.
fn ensure_unique<T: Keyed>(
    endpoint: &str,
    resource: &'static str,
    items: Vec<T>,
) -> ApiResult<Vec<T>> {
    if let Some(item) = items.iter().duplicates_by(|item| item.key().to_string()).next() {
        let err = ApiErr::DuplicateId {
            resource,
            id: item.key().clone(),
        };
        tracing::error!(endpoint, error = %err, "API returned duplicate ids");
        return Err(err);
    }

    Ok(items)
}

/// Typed client for the portfolio backend.
///
/// Holds nothing but the immutable configuration and a connection pool,
/// so one instance can be shared behind an `Arc` by every request.
#[derive(Debug)]
pub struct PortfolioClient {
    http: Client,
    config: ApiConfig,
}

impl PortfolioClient {
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

        let http = ClientBuilder::default()
            .user_agent(user_agent)
            .timeout(config.timeout())
            .build()
            .map_err(ApiErr::Reqwest)?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Performs one round trip to `endpoint` (relative to the API base) and
    /// returns the decoded envelope. A missing leading `/` is added.
    ///
    /// The body is decoded before the status is looked at, so a non-JSON
    /// body is a [`ApiErr::Json`] even on error statuses. A non-2xx status
    /// becomes [`ApiErr::Application`] carrying the body's `message`.
    pub async fn request<T>(&self, endpoint: &str, options: RequestOptions) -> ApiResult<Envelope<T>>
    where
        T: DeserializeOwned,
    {
        self.execute(endpoint, options).await.inspect_err(|err| {
            tracing::error!(endpoint, error = %err, "API request failed");
        })
    }

    async fn execute<T>(&self, endpoint: &str, options: RequestOptions) -> ApiResult<Envelope<T>>
    where
        T: DeserializeOwned,
    {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (name, value) in options.headers.iter() {
            headers.insert(name.clone(), value.clone());
        }

        let mut request = self
            .http
            .request(options.method, self.url(endpoint))
            .headers(headers);
        if let Some(body) = options.body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(ApiErr::Reqwest)?;
        let status = response.status();
        let body: Bytes = response.bytes().await.map_err(ApiErr::Reqwest)?;

        let value: serde_json::Value = serde_json::from_slice(&body).map_err(ApiErr::Json)?;

        if !status.is_success() {
            return Err(ApiErr::Application {
                status,
                message: failure_message(&value),
            });
        }

        serde_json::from_value(value).map_err(ApiErr::Json)
    }

    fn url(&self, endpoint: &str) -> String {
        let separator = if endpoint.starts_with('/') { "" } else { "/" };

        format!("{}{separator}{endpoint}", self.config.api_base())
    }

    async fn get_data<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        self.request(endpoint, RequestOptions::default())
            .await?
            .into_data()
            .inspect_err(|err| {
                tracing::error!(endpoint, error = %err, "API response carried no data");
            })
    }

    pub async fn get_profile(&self) -> ApiResult<Profile> {
        self.get_data("/profile").await
    }

    /// Unlike the read accessors this hands back the whole envelope, since
    /// the server's `message` is the interesting part of the answer.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> ApiResult<Envelope<Profile>> {
        let body = serde_json::to_string(update).map_err(ApiErr::Json)?;

        self.request("/profile", RequestOptions::put(body)).await
    }

    pub async fn get_education(&self) -> ApiResult<Vec<EducationEntry>> {
        self.get_data("/education").await
    }

    pub async fn get_skills(&self) -> ApiResult<Skills> {
        self.get_data("/skills").await
    }

    /// `None` lists every project type.
    pub async fn get_projects(&self, project_type: Option<ProjectType>) -> ApiResult<Vec<Project>> {
        let endpoint = match project_type {
            Some(project_type) => format!("/projects?project_type={project_type}"),
            None => "/projects".to_string(),
        };

        let projects = self.get_data(&endpoint).await?;

        ensure_unique(&endpoint, "project", projects)
    }

    pub async fn get_achievements(&self) -> ApiResult<Vec<Achievement>> {
        self.get_data("/achievements").await
    }

    pub async fn get_creative_works(&self) -> ApiResult<Vec<CreativeWork>> {
        let works = self.get_data("/creative-works").await?;

        ensure_unique("/creative-works", "creative work", works)
    }

    pub async fn get_photography(&self) -> ApiResult<Vec<PhotographyItem>> {
        let photos = self.get_data("/photography").await?;

        ensure_unique("/photography", "photography", photos)
    }
}
