//! `reqwest`-backed implementation of [`RegistryClient`].
//!
//! | Operation | Request |
//! |-----------|---------|
//! | login | `POST /auth/login` JSON `{username, password}` → `{token}` |
//! | categories | `GET /categories` → `[{name}]` or `["name"]` |
//! | publish | `POST /blocks` multipart `name`, `category`, `bundle`, `thumbnail?` |
//! | update | `PUT /blocks/{id}` multipart `bundle`, `thumbnail?`, `togglePublic` |
//!
//! Authenticated calls carry `Authorization: Bearer <token>`. No retries.

use std::time::Duration;

use reqwest::{
    StatusCode,
    blocking::{Client, RequestBuilder, Response, multipart},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use element_core::{
    application::{ApplicationError, ports::RegistryClient},
    domain::{
        BlockBundle, Category, Credentials, PublishedBlock, Session, SessionToken, Thumbnail,
        TogglePublic,
    },
    error::{ElementError, ElementResult},
};

#[derive(Serialize)]
struct LoginBody<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    token: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CategoryEntry {
    Named { name: String },
    Bare(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(alias = "error")]
    message: String,
}

#[derive(Debug, Clone)]
pub struct HttpRegistryClient {
    base_url: String,
    http: Client,
}

impl HttpRegistryClient {
    /// Create a client targeting `base_url`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ElementResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("element-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ElementError::Configuration {
                message: format!("could not build HTTP client: {e}"),
            })?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            http,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn send(&self, operation: &str, request: RequestBuilder) -> ElementResult<Response> {
        let response = request
            .send()
            .map_err(|e| transport_error(operation, &e))?;
        check_status(operation, response)
    }

    fn bundle_form(&self, operation: &str, bundle: &BlockBundle) -> ElementResult<multipart::Form> {
        let archive = multipart::Part::bytes(bundle.archive.clone())
            .file_name(bundle.archive_name.clone())
            .mime_str("application/gzip")
            .map_err(|e| transport_error(operation, &e))?;
        let mut form = multipart::Form::new().part("bundle", archive);

        if let Some(thumbnail) = &bundle.thumbnail {
            let part = multipart::Part::bytes(thumbnail.bytes.clone())
                .file_name(thumbnail.file_name.clone())
                .mime_str(thumbnail_mime(thumbnail))
                .map_err(|e| transport_error(operation, &e))?;
            form = form.part("thumbnail", part);
        }
        Ok(form)
    }
}

impl RegistryClient for HttpRegistryClient {
    #[instrument(skip_all, fields(username = %credentials.username))]
    fn login(&self, credentials: &Credentials) -> ElementResult<Session> {
        let body = LoginBody {
            username: &credentials.username,
            password: &credentials.password,
        };
        let response = self.send("login", self.http.post(self.url("/auth/login")).json(&body))?;
        let token: TokenResponse = parse("login", response)?;

        Ok(Session::new(
            credentials.username.clone(),
            SessionToken::new(token.token),
        ))
    }

    #[instrument(skip_all)]
    fn categories(&self) -> ElementResult<Vec<Category>> {
        let response = self.send("categories", self.http.get(self.url("/categories")))?;
        let entries: Vec<CategoryEntry> = parse("categories", response)?;

        // Blank labels are dropped rather than failing the whole list.
        let categories: Vec<Category> = entries
            .into_iter()
            .filter_map(|entry| match entry {
                CategoryEntry::Named { name } | CategoryEntry::Bare(name) => {
                    Category::new(name).ok()
                }
            })
            .collect();
        debug!(count = categories.len(), "Fetched categories");
        Ok(categories)
    }

    #[instrument(skip_all, fields(name = %name, category = %category))]
    fn publish(
        &self,
        session: &Session,
        name: &str,
        category: &Category,
        bundle: &BlockBundle,
    ) -> ElementResult<PublishedBlock> {
        let form = self
            .bundle_form("publish", bundle)?
            .text("name", name.to_owned())
            .text("category", category.as_str().to_owned());

        let request = self
            .http
            .post(self.url("/blocks"))
            .bearer_auth(session.token.expose())
            .multipart(form);
        parse("publish", self.send("publish", request)?)
    }

    #[instrument(skip_all, fields(id = %block.id, toggle = toggle_public.is_toggle()))]
    fn update(
        &self,
        session: &Session,
        block: &PublishedBlock,
        bundle: &BlockBundle,
        toggle_public: TogglePublic,
    ) -> ElementResult<PublishedBlock> {
        let form = self
            .bundle_form("update", bundle)?
            .text("togglePublic", toggle_public.is_toggle().to_string());

        let request = self
            .http
            .put(self.url(&format!("/blocks/{}", block.id)))
            .bearer_auth(session.token.expose())
            .multipart(form);
        parse("update", self.send("update", request)?)
    }
}

fn check_status(operation: &str, response: Response) -> ElementResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|e| e.message)
        .unwrap_or_else(|_| body.trim().to_owned());
    let message = if message.is_empty() {
        status.canonical_reason().unwrap_or("no details").to_owned()
    } else {
        message
    };

    debug!(operation, status = status.as_u16(), "Registry rejected request");
    let err = match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            ApplicationError::Unauthorized { reason: message }
        }
        _ => ApplicationError::RemoteRejected {
            operation: operation.to_owned(),
            status: status.as_u16(),
            message,
        },
    };
    Err(err.into())
}

fn parse<T: serde::de::DeserializeOwned>(operation: &str, response: Response) -> ElementResult<T> {
    response.json().map_err(|e| {
        ApplicationError::Registry {
            operation: operation.to_owned(),
            reason: format!("unexpected response: {e}"),
        }
        .into()
    })
}

fn transport_error(operation: &str, e: &reqwest::Error) -> ElementError {
    ApplicationError::Registry {
        operation: operation.to_owned(),
        reason: e.to_string(),
    }
    .into()
}

fn thumbnail_mime(thumbnail: &Thumbnail) -> &'static str {
    let lower = thumbnail.file_name.to_ascii_lowercase();
    if lower.ends_with(".png") {
        "image/png"
    } else if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
        "image/jpeg"
    } else {
        "application/octet-stream"
    }
}
