//! Request framing and response mapping.
//!
//! [`Dispatcher`] turns one logical operation into exactly one HTTP call:
//! it joins path segments onto the base URL, attaches the shared headers
//! and an optional idempotency key, sends the request, and runs
//! [`check_response`] on whatever comes back. Nothing is retried.

use http::header::{AUTHORIZATION, CONTENT_TYPE, HeaderName, HeaderValue, USER_AGENT};
use http::{HeaderMap, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{Error, error_from_response};
use crate::transport::{HttpClient, HttpRequest, HttpResponse};

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;

/// Header carrying the caller's idempotency token.
pub const IDEMPOTENCY_KEY: HeaderName = HeaderName::from_static("idempotency-key");

const USER_AGENT_VALUE: &str = concat!("fetcherpay-rust/", env!("CARGO_PKG_VERSION"));

/// Issues authenticated requests against one base URL.
///
/// All state is fixed at construction, so a shared reference can serve
/// any number of concurrent calls.
#[derive(Debug)]
pub struct Dispatcher<H> {
    client: H,
    base_url: Url,
    headers: HeaderMap,
}

impl<H: HttpClient> Dispatcher<H> {
    /// Creates a dispatcher sending `api_key` as a bearer credential.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidBaseUrl`] if `base_url` cannot take path segments
    /// - [`Error::InvalidApiKey`] if the key is not a valid header value
    pub fn new(client: H, base_url: Url, api_key: &str) -> Result<Self, Error> {
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|_| Error::InvalidApiKey)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        Ok(Self {
            client,
            base_url,
            headers,
        })
    }

    /// Returns the base URL requests are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET` without query parameters.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &[&str]) -> Result<T, Error> {
        let url = self.url(path)?;
        self.execute(HttpRequest::get(url)).await.and_then(decode)
    }

    /// `GET` with `params` serialized into the query string.
    pub(crate) async fn get_with_query<Q, T>(&self, path: &[&str], params: &Q) -> Result<T, Error>
    where
        Q: Serialize + Sync,
        T: DeserializeOwned,
    {
        let mut url = self.url(path)?;
        append_query(&mut url, params)?;
        self.execute(HttpRequest::get(url)).await.and_then(decode)
    }

    /// `POST` with a JSON body and an optional idempotency key.
    pub(crate) async fn post<B, T>(
        &self,
        path: &[&str],
        body: &B,
        idempotency_key: Option<&str>,
    ) -> Result<T, Error>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let mut req = HttpRequest::post(self.url(path)?).with_body(encode(body)?);

        if let Some(key) = idempotency_key.filter(|key| !key.is_empty()) {
            let value = HeaderValue::from_str(key)
                .map_err(|_| Error::InvalidIdempotencyKey(key.to_string()))?;
            req = req.with_header(IDEMPOTENCY_KEY, value);
        }

        self.execute(req).await.and_then(decode)
    }

    /// `PUT` with a JSON body.
    pub(crate) async fn put<B, T>(&self, path: &[&str], body: &B) -> Result<T, Error>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let req = HttpRequest::put(self.url(path)?).with_body(encode(body)?);
        self.execute(req).await.and_then(decode)
    }

    /// `DELETE`; the success body is ignored.
    pub(crate) async fn delete(&self, path: &[&str]) -> Result<(), Error> {
        self.execute(HttpRequest::delete(self.url(path)?))
            .await
            .map(|_| ())
    }

    async fn execute(&self, req: HttpRequest) -> Result<HttpResponse, Error> {
        let req = req.with_headers(&self.headers);
        tracing::debug!(method = %req.method, path = req.url.path(), "Dispatching request");

        let response = self.client.request(req).await?;
        check_response(response)
    }

    /// Joins `path` onto the base URL, one percent-encoded segment each.
    ///
    /// Empty and dot-only segments are rejected, since URL joining would
    /// drop or resolve them and address a different resource.
    fn url(&self, path: &[&str]) -> Result<Url, Error> {
        if let Some(segment) = path
            .iter()
            .find(|segment| matches!(**segment, "" | "." | ".."))
        {
            return Err(Error::InvalidId((*segment).to_string()));
        }

        let mut url = self.base_url.clone();
        // Infallible: `new` rejects cannot-be-a-base URLs
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(path);
        }
        Ok(url)
    }
}

/// Passes 2xx responses through and maps everything else to an [`Error`].
///
/// # Errors
///
/// Returns the structured error for any non-2xx status, see
/// [`error_from_response`].
pub fn check_response(response: HttpResponse) -> Result<HttpResponse, Error> {
    if response.is_success() {
        return Ok(response);
    }

    let error = error_from_response(response.status, &response.body);
    tracing::warn!(
        status = response.status.as_u16(),
        error = %error,
        "Provider returned an error"
    );
    Err(error)
}

fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T, Error> {
    // Bodiless successes decode like JSON `null` so unit results still work
    let body: &[u8] = if response.body.is_empty() || response.status == StatusCode::NO_CONTENT {
        b"null"
    } else {
        &response.body
    };
    serde_json::from_slice(body).map_err(Error::Decode)
}

fn encode<B: Serialize>(body: &B) -> Result<Vec<u8>, Error> {
    serde_json::to_vec(body).map_err(Error::Encode)
}

/// Appends every present field of `params` to the query string.
///
/// `params` must serialize to a JSON object; `null` fields are skipped,
/// strings are sent verbatim and other scalars in their JSON text form.
fn append_query<Q: Serialize>(url: &mut Url, params: &Q) -> Result<(), Error> {
    let value = serde_json::to_value(params).map_err(Error::Encode)?;
    let serde_json::Value::Object(fields) = value else {
        return Ok(());
    };

    let mut pairs = url.query_pairs_mut();
    for (name, value) in fields {
        match value {
            serde_json::Value::Null => {}
            serde_json::Value::String(s) => {
                pairs.append_pair(&name, &s);
            }
            other => {
                pairs.append_pair(&name, &other.to_string());
            }
        }
    }
    drop(pairs);

    // An empty serializer still leaves a trailing `?`
    if url.query() == Some("") {
        url.set_query(None);
    }
    Ok(())
}
