use crate::models::{Livre, LivreId, NouveauLivre};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ApiErrorKind {
    Network,
    Http,
    Parse,
}

#[derive(Clone, Debug)]
pub(crate) struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ApiError {
    fn network(e: reqwest::Error) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: e.to_string(),
        }
    }

    fn parse(e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            message: e.to_string(),
        }
    }

    fn http(status: reqwest::StatusCode, body: &str) -> Self {
        Self {
            kind: ApiErrorKind::Http,
            message: remote_message(status, body),
        }
    }
}

/// Failure detail shown to the user: the backend's structured `message`
/// field when the body carries one, otherwise the status line.
fn remote_message(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .and_then(|m| m.as_str())
                .map(|s| s.to_string())
        })
        .unwrap_or_else(|| format!("Request failed ({status})"))
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct EnvConfig {
    pub api_url: String,
}

impl EnvConfig {
    pub fn new() -> Self {
        let default_api_url = "http://localhost:3000".to_string();

        // We support BOTH `window.ENV.API_URL` (documented in README) and
        // `window.ENV.api_url` (legacy/implementation detail) for compatibility.
        if let Some(window) = web_sys::window() {
            if let Some(env) = window.get("ENV") {
                if !env.is_undefined() && env.is_object() {
                    // 1) Prefer README style: API_URL
                    if let Ok(api_url) = js_sys::Reflect::get(&env, &"API_URL".into()) {
                        if let Some(url_str) = api_url.as_string() {
                            return Self { api_url: url_str };
                        }
                    }

                    // 2) Fallback: api_url
                    if let Ok(api_url) = js_sys::Reflect::get(&env, &"api_url".into()) {
                        if let Some(url_str) = api_url.as_string() {
                            return Self { api_url: url_str };
                        }
                    }
                }
            }
        }

        Self {
            api_url: default_api_url,
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Thin client over the remote book store. No auth, no retries: every
/// failure is surfaced to the calling view as an [`ApiError`].
#[derive(Clone)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    pub fn from_env() -> Self {
        Self::new(EnvConfig::new().api_url)
    }

    fn livres_url(&self) -> String {
        format!("{}/listLivres", self.base_url)
    }

    fn livre_url(&self, id: &LivreId) -> String {
        format!("{}/listLivres/{}", self.base_url, id)
    }

    /// Full catalog, in remote storage order.
    pub async fn list_livres(&self) -> ApiResult<Vec<Livre>> {
        let client = reqwest::Client::new();
        let res = client
            .get(self.livres_url())
            .send()
            .await
            .map_err(ApiError::network)?;

        if res.status().is_success() {
            res.json().await.map_err(ApiError::parse)
        } else {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            Err(ApiError::http(status, &body))
        }
    }

    /// Creates a book and returns the stored record with its assigned id.
    /// The caller validates the payload before invoking this.
    pub async fn create_livre(&self, nouveau: &NouveauLivre) -> ApiResult<Livre> {
        let client = reqwest::Client::new();
        let res = client
            .post(self.livres_url())
            .json(nouveau)
            .send()
            .await
            .map_err(ApiError::network)?;

        if res.status().is_success() {
            res.json().await.map_err(ApiError::parse)
        } else {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            Err(ApiError::http(status, &body))
        }
    }

    /// Removes one record. The response body is ignored; only the status
    /// matters. Failure messages carry the deletion prefix so views can
    /// surface them as-is.
    pub async fn delete_livre(&self, id: &LivreId) -> ApiResult<()> {
        let client = reqwest::Client::new();
        let res = client
            .delete(self.livre_url(id))
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| ApiError {
                kind: ApiErrorKind::Network,
                message: format!("Erreur lors de la suppression du livre : {}", e),
            })?;

        if res.status().is_success() {
            Ok(())
        } else {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            Err(ApiError {
                kind: ApiErrorKind::Http,
                message: format!(
                    "Erreur lors de la suppression du livre : {}",
                    remote_message(status, &body)
                ),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_client_new() {
        let client = ApiClient::new("http://localhost:3000".to_string());
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_endpoint_urls() {
        let client = ApiClient::new("http://localhost:3000".to_string());
        assert_eq!(client.livres_url(), "http://localhost:3000/listLivres");
        assert_eq!(
            client.livre_url(&LivreId::Num(12)),
            "http://localhost:3000/listLivres/12"
        );
        assert_eq!(
            client.livre_url(&LivreId::Text("a1b2".to_string())),
            "http://localhost:3000/listLivres/a1b2"
        );
    }

    #[test]
    fn test_remote_message_prefers_structured_field() {
        let msg = remote_message(
            reqwest::StatusCode::NOT_FOUND,
            r#"{"message": "Livre introuvable"}"#,
        );
        assert_eq!(msg, "Livre introuvable");
    }

    #[test]
    fn test_remote_message_falls_back_to_status() {
        let msg = remote_message(reqwest::StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
        assert_eq!(msg, "Request failed (500 Internal Server Error)");

        // JSON body without a `message` string falls back too.
        let msg = remote_message(reqwest::StatusCode::BAD_REQUEST, r#"{"code": 42}"#);
        assert_eq!(msg, "Request failed (400 Bad Request)");
    }

    #[test]
    fn test_http_error_keeps_kind() {
        let e = ApiError::http(reqwest::StatusCode::BAD_GATEWAY, "");
        assert_eq!(e.kind, ApiErrorKind::Http);
        assert_eq!(e.to_string(), "Request failed (502 Bad Gateway)");
    }
}
