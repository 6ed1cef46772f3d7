//! Low-level JSON-over-HTTP client.

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, RequestBuilder, Response};
use serde_json::Value;
use tracing::{debug, instrument, trace};

use cattle_core::error::{ApiError, InvalidInputError, TransportError};
use cattle_core::{ApiUrl, Error, Result};

use crate::opts::{ClientOpts, Credentials};

/// Header the API root uses to advertise its schema document.
pub(crate) const SCHEMAS_HEADER: &str = "X-API-Schemas";

/// Sends JSON requests with the configured authentication and turns
/// responses into JSON values or API errors.
#[derive(Clone)]
pub(crate) struct RestClient {
    http: reqwest::Client,
    base: ApiUrl,
    basic_auth: Option<(String, String)>,
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("base", &self.base.as_str())
            .field("basic_auth", &self.basic_auth.is_some())
            .finish_non_exhaustive()
    }
}

impl RestClient {
    pub(crate) fn new(opts: &ClientOpts) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("cattle/", env!("CARGO_PKG_VERSION")))
            .default_headers(default_headers(opts)?)
            .timeout(opts.timeout)
            .danger_accept_invalid_certs(opts.insecure);

        if let Some(pem) = &opts.ca_certs {
            let certs = reqwest::Certificate::from_pem_bundle(pem.as_bytes()).map_err(tls)?;
            if certs.is_empty() {
                return Err(TransportError::Tls {
                    message: "no certificates found in CA bundle".to_string(),
                }
                .into());
            }
            for cert in certs {
                builder = builder.add_root_certificate(cert);
            }
        }

        let http = builder.build().map_err(tls)?;

        let basic_auth = match &opts.credentials {
            Some(Credentials::Keys {
                access_key,
                secret_key,
            }) => Some((access_key.clone(), secret_key.clone())),
            _ => None,
        };

        Ok(Self {
            http,
            base: opts.url.clone(),
            basic_auth,
        })
    }

    pub(crate) fn base(&self) -> &ApiUrl {
        &self.base
    }

    /// Issue a GET and return the raw response, for callers that need headers.
    #[instrument(skip(self), fields(base = %self.base))]
    pub(crate) async fn get_response(&self, url: &str) -> Result<Response> {
        debug!(%url, "GET");
        let response = self.request(Method::GET, url).send().await.map_err(transport)?;
        check_status(response).await
    }

    #[instrument(skip(self, query), fields(base = %self.base))]
    pub(crate) async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<Value> {
        debug!(%url, "GET");
        trace!(?query, "query parameters");
        let response = self
            .request(Method::GET, url)
            .query(query)
            .send()
            .await
            .map_err(transport)?;
        handle_response(response).await
    }

    #[instrument(skip(self, body), fields(base = %self.base))]
    pub(crate) async fn post(&self, url: &str, body: &Value) -> Result<Value> {
        debug!(%url, "POST");
        trace!(%body, "request body");
        let response = self
            .request(Method::POST, url)
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        handle_response(response).await
    }

    #[instrument(skip(self, body), fields(base = %self.base))]
    pub(crate) async fn put(&self, url: &str, body: &Value) -> Result<Value> {
        debug!(%url, "PUT");
        trace!(%body, "request body");
        let response = self
            .request(Method::PUT, url)
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        handle_response(response).await
    }

    #[instrument(skip(self), fields(base = %self.base))]
    pub(crate) async fn delete(&self, url: &str) -> Result<Value> {
        debug!(%url, "DELETE");
        let response = self
            .request(Method::DELETE, url)
            .send()
            .await
            .map_err(transport)?;
        handle_response(response).await
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let request = self.http.request(method, url);
        match &self.basic_auth {
            Some((access_key, secret_key)) => request.basic_auth(access_key, Some(secret_key)),
            None => request,
        }
    }
}

fn default_headers(opts: &ClientOpts) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    for (name, value) in &opts.headers {
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid_header(name, e))?;
        let mut value = HeaderValue::from_str(value).map_err(|e| invalid_header(name.as_str(), e))?;
        value.set_sensitive(true);
        headers.insert(name, value);
    }

    if let Some(Credentials::Token(token)) = &opts.credentials {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| invalid_header("Authorization", e))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    Ok(headers)
}

fn invalid_header(name: &str, err: impl std::fmt::Display) -> Error {
    InvalidInputError::Other {
        message: format!("invalid header '{name}': {err}"),
    }
    .into()
}

/// Turn a response into its JSON body, or an API error.
///
/// An empty success body decodes as `null`.
async fn handle_response(response: Response) -> Result<Value> {
    let response = check_status(response).await?;
    let text = response.text().await.map_err(transport)?;
    trace!(len = text.len(), "response body");

    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&text)?)
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    trace!(%status, "response");

    if status.is_success() {
        Ok(response)
    } else {
        Err(parse_error_response(response).await.into())
    }
}

/// Parse the server's error body, falling back to the bare status.
async fn parse_error_response(response: Response) -> ApiError {
    let status = response.status().as_u16();
    let text = response.text().await.unwrap_or_default();

    let mut error = serde_json::from_str::<ApiError>(&text).unwrap_or_default();
    error.status = status;
    if error.message.is_none() && error.code.is_none() && !text.trim().is_empty() {
        error.message = Some(text.trim().to_string());
    }
    debug!(%error, "API error");
    error
}

pub(crate) fn transport(err: reqwest::Error) -> Error {
    let message = err.to_string();
    let transport = if err.is_timeout() {
        TransportError::Timeout { message }
    } else if err.is_connect() {
        TransportError::Connection { message }
    } else {
        TransportError::Http { message }
    };
    Error::Transport(transport)
}

fn tls(err: reqwest::Error) -> Error {
    Error::Transport(TransportError::Tls {
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> ClientOpts {
        ClientOpts::new(ApiUrl::new("https://rancher.test/v3").unwrap())
    }

    #[test]
    fn bearer_token_goes_into_default_headers() {
        let headers = default_headers(&opts().with_token("t0ken")).unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer t0ken");
        assert!(headers[AUTHORIZATION].is_sensitive());
        assert_eq!(headers[ACCEPT], "application/json");
    }

    #[test]
    fn custom_headers_are_added() {
        let headers = default_headers(&opts().header("X-Tenant", "blue")).unwrap();
        assert_eq!(headers["x-tenant"], "blue");
    }

    #[test]
    fn invalid_header_name_is_rejected() {
        let err = default_headers(&opts().header("bad header", "x")).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn key_pair_uses_basic_auth() {
        let client = RestClient::new(&opts().with_keys("access", "secret")).unwrap();
        assert_eq!(
            client.basic_auth,
            Some(("access".to_string(), "secret".to_string()))
        );
    }

    #[test]
    fn bad_ca_bundle_is_a_tls_error() {
        let err = RestClient::new(&opts().ca_certs("not a certificate")).unwrap_err();
        assert!(matches!(err, Error::Transport(TransportError::Tls { .. })));
    }
}
