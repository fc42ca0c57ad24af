//! Blocking REST client for the ontology API.

use reqwest::blocking::Client as HttpClient;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::{Error, Result};
use crate::transport::records::{ListOntologiesResponse, ObjectTypeRecord, Page};
use crate::types::Context;

/// Path prefix of the ontology API on every Foundry host.
const API_ROOT: &str = "/api/v1";

/// Synchronous HTTP access to the ontology endpoints.
///
/// Hostname and auth are resolved from the [`Context`] per request, not at
/// construction time, so a context whose providers read the environment
/// observes changes between calls.
pub struct ApiService {
    http: HttpClient,
    ctx: Context,
}

impl ApiService {
    /// Creates a service over a fresh HTTP client.
    pub fn new(ctx: Context) -> Result<Self> {
        let http = HttpClient::builder()
            .user_agent(concat!("palantir-rust-sdk/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, ctx })
    }

    /// Returns the context this service resolves configuration from.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Lists the ontologies visible to the user.
    ///
    /// Endpoint: `GET /ontologies`
    pub fn list_ontologies(&self) -> Result<ListOntologiesResponse> {
        self.get_json("ontologies", &[])
    }

    /// Fetches one page of the object types of an ontology.
    ///
    /// Endpoint: `GET /ontologies/{rid}/objectTypes[?pageToken=…]`
    pub fn list_object_types(
        &self,
        ontology_rid: &str,
        page_token: Option<&str>,
    ) -> Result<Page<ObjectTypeRecord>> {
        let path = format!("ontologies/{}/objectTypes", urlencoding::encode(ontology_rid));
        let mut query = Vec::new();
        if let Some(token) = page_token {
            query.push(("pageToken", token));
        }
        self.get_json(&path, &query)
    }

    /// Fetches a single object type by API name.
    ///
    /// Endpoint: `GET /ontologies/{rid}/objectTypes/{apiName}`
    pub fn get_object_type(
        &self,
        ontology_rid: &str,
        api_name: &str,
    ) -> Result<ObjectTypeRecord> {
        let path = format!(
            "ontologies/{}/objectTypes/{}",
            urlencoding::encode(ontology_rid),
            urlencoding::encode(api_name)
        );
        self.get_json(&path, &[])
    }

    /// Resolves the base URL from the context's hostname.
    ///
    /// A hostname already carrying a scheme is used verbatim; otherwise
    /// `https://` is assumed.
    fn base_url(&self) -> Result<Url> {
        let hostname = self.ctx.hostname()?;
        let root = if hostname.starts_with("http://") || hostname.starts_with("https://") {
            hostname
        } else {
            format!("https://{}", hostname)
        };
        let url = Url::parse(&format!("{}{}/", root.trim_end_matches('/'), API_ROOT))?;
        Ok(url)
    }

    /// Executes a GET request and decodes the JSON response body.
    fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = self.base_url()?.join(path)?;
        let authorization = self.ctx.authorization()?;

        debug!(method = "GET", %url, "sending ontology api request");

        let mut request = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, authorization);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(map_status_error(status.as_u16(), &body));
        }
        Ok(response.json()?)
    }
}

impl std::fmt::Debug for ApiService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiService").finish_non_exhaustive()
    }
}

/// Maps HTTP status codes to SDK errors.
fn map_status_error(status: u16, body: &str) -> Error {
    let message = if body.is_empty() {
        format!("HTTP {}", status)
    } else if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        value
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or(body)
            .to_string()
    } else {
        body.to_string()
    };

    match status {
        400 => Error::invalid_argument(message),
        401 => Error::unauthorized(message),
        403 => Error::forbidden(message),
        404 => Error::not_found(message),
        500..=599 => Error::unavailable(message),
        _ => Error::internal(message),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_map_status_error() {
        assert_eq!(map_status_error(400, "").kind(), ErrorKind::InvalidArgument);
        assert_eq!(map_status_error(401, "").kind(), ErrorKind::Unauthorized);
        assert_eq!(map_status_error(403, "").kind(), ErrorKind::Forbidden);
        assert_eq!(map_status_error(404, "").kind(), ErrorKind::NotFound);
        for status in [500, 502, 503] {
            assert_eq!(map_status_error(status, "").kind(), ErrorKind::Unavailable);
        }
        assert_eq!(map_status_error(418, "").kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_map_status_error_extracts_json_message() {
        let err = map_status_error(404, "{\"message\":\"OntologyNotFound\"}");
        assert!(err.to_string().contains("OntologyNotFound"));
    }

    #[test]
    fn test_map_status_error_falls_back_to_body() {
        let err = map_status_error(503, "upstream offline");
        assert!(err.to_string().contains("upstream offline"));
    }
}
