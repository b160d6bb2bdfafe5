//! The REST client. One method per backend operation.

use reqwest::{RequestBuilder, Response};
use serde_json::Value;

use crate::error::Error;
use crate::models::{
    Identity, MarketplaceConfig, MarketplaceShort, Period, PricePoint, Product, SubscribeOutcome,
    SubscriptionPage, TokenResponse,
};
use crate::token;

/// Stateless HTTP wrapper for the backend. Cheap to construct; views build
/// one per call site.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    /// Client for the same-origin backend (paths like `/api/...`).
    pub fn new() -> Self {
        Self::with_base_url(String::new())
    }

    /// Client for an explicit backend origin. Used by tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach `Authorization: Bearer <token>` when a token is present.
    fn with_optional_token(&self, request: RequestBuilder) -> RequestBuilder {
        match token::get() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Token required up front: fail with `Unauthenticated` before any
    /// network traffic when it is absent.
    fn require_token(&self) -> Result<String, Error> {
        token::get().ok_or(Error::Unauthenticated)
    }

    // ── identity ────────────────────────────────────────────────────────

    /// `GET /api/protected` — who am I, according to the backend.
    pub async fn check_auth(&self) -> Result<Identity, Error> {
        let request = self.with_optional_token(self.http.get(self.url("/api/protected")));
        let response = check_status(request.send().await?).await?;
        Ok(response.json().await?)
    }

    /// `POST /api/register/`.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), Error> {
        let body = serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
        });
        let response = self.http.post(self.url("/api/register/")).json(&body).send().await?;
        check_status(response).await?;
        Ok(())
    }

    /// `POST /api/login` — exchange credentials for a bearer token. The
    /// caller (session handle) is responsible for persisting it.
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, Error> {
        let body = serde_json::json!({ "username": username, "password": password });
        let response = self.http.post(self.url("/api/login")).json(&body).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    // ── products ────────────────────────────────────────────────────────

    /// `POST /api/products/by_url` — look up (or live-parse) a product.
    pub async fn product_by_url(&self, url: &str) -> Result<Product, Error> {
        let body = serde_json::json!({ "url": url });
        let response = self.http.post(self.url("/api/products/by_url")).json(&body).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// `GET /api/products/{id}`.
    pub async fn product_by_id(&self, id: i64) -> Result<Product, Error> {
        let response = self.http.get(self.url(&format!("/api/products/{id}"))).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// `GET /api/products/{id}/price_history?period=`.
    pub async fn price_history(&self, id: i64, period: Period) -> Result<Vec<PricePoint>, Error> {
        let response = self
            .http
            .get(self.url(&format!("/api/products/{id}/price_history")))
            .query(&[("period", period.as_query())])
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// `GET /api/marketplace-configs/short` — public marketplace list.
    pub async fn marketplace_short_list(&self) -> Result<Vec<MarketplaceShort>, Error> {
        let response = self.http.get(self.url("/api/marketplace-configs/short")).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    // ── subscriptions ───────────────────────────────────────────────────

    /// `POST /api/subscriptions`. A 400 whose detail is exactly
    /// "Already subscribed" is a recoverable duplicate and reported as
    /// [`SubscribeOutcome::AlreadySubscribed`], not an error.
    pub async fn subscribe(&self, product_id: i64) -> Result<SubscribeOutcome, Error> {
        let token = self.require_token()?;
        let body = serde_json::json!({ "product_id": product_id });
        let response = self
            .http
            .post(self.url("/api/subscriptions"))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        if response.status().is_success() {
            return Ok(SubscribeOutcome::Subscribed);
        }
        if status == 400 {
            let detail = extract_detail(&response.text().await.unwrap_or_default());
            if detail == "Already subscribed" {
                return Ok(SubscribeOutcome::AlreadySubscribed);
            }
            return Err(Error::RequestFailed { status, detail });
        }
        Err(error_for_status(status, response.text().await.unwrap_or_default()))
    }

    /// `DELETE /api/subscriptions?product_id=`.
    pub async fn unsubscribe(&self, product_id: i64) -> Result<(), Error> {
        let token = self.require_token()?;
        let response = self
            .http
            .delete(self.url("/api/subscriptions"))
            .query(&[("product_id", product_id)])
            .bearer_auth(token)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    /// `GET /api/subscriptions/check?product_id=`.
    pub async fn check_subscribed(&self, product_id: i64) -> Result<bool, Error> {
        let token = self.require_token()?;
        let response = self
            .http
            .get(self.url("/api/subscriptions/check"))
            .query(&[("product_id", product_id)])
            .bearer_auth(token)
            .send()
            .await?;
        let response = check_status(response).await?;
        let value: Value = response.json().await?;
        Ok(value.get("subscribed").and_then(Value::as_bool).unwrap_or(false))
    }

    /// `GET /api/subscriptions?page=&per_page=`.
    pub async fn list_subscriptions(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<SubscriptionPage, Error> {
        let token = self.require_token()?;
        let response = self
            .http
            .get(self.url("/api/subscriptions"))
            .query(&[("page", page), ("per_page", per_page)])
            .bearer_auth(token)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    // ── marketplace configurations (admin) ──────────────────────────────

    /// `GET /api/marketplace-configurations`.
    pub async fn list_configs(&self) -> Result<Vec<MarketplaceConfig>, Error> {
        let token = self.require_token()?;
        let response = self
            .http
            .get(self.url("/api/marketplace-configurations"))
            .bearer_auth(token)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// `GET /api/marketplace-configurations/{name}` — raw JSON, the editor
    /// works on the unmodified document.
    pub async fn get_config(&self, name: &str) -> Result<Value, Error> {
        let token = self.require_token()?;
        let response = self
            .http
            .get(self.url(&format!("/api/marketplace-configurations/{name}")))
            .bearer_auth(token)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// `POST /api/marketplace-configurations`.
    pub async fn create_config(&self, config: &Value) -> Result<(), Error> {
        let token = self.require_token()?;
        let response = self
            .http
            .post(self.url("/api/marketplace-configurations"))
            .bearer_auth(token)
            .json(config)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    /// `PUT /api/marketplace-configurations/{name}`.
    pub async fn update_config(&self, name: &str, config: &Value) -> Result<(), Error> {
        let token = self.require_token()?;
        let response = self
            .http
            .put(self.url(&format!("/api/marketplace-configurations/{name}")))
            .bearer_auth(token)
            .json(config)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    /// `DELETE /api/marketplace-configurations/{name}`.
    pub async fn delete_config(&self, name: &str) -> Result<(), Error> {
        let token = self.require_token()?;
        let response = self
            .http
            .delete(self.url(&format!("/api/marketplace-configurations/{name}")))
            .bearer_auth(token)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}

/// Pass successful responses through; normalize everything else.
async fn check_status(response: Response) -> Result<Response, Error> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    match status.as_u16() {
        // The backend answers some admin routes with 403 instead of 401;
        // both mean "go log in" to this client.
        401 | 403 => Err(Error::Unauthenticated),
        404 => Err(Error::NotFound),
        code => Err(error_for_status(code, response.text().await.unwrap_or_default())),
    }
}

fn error_for_status(status: u16, body: String) -> Error {
    match status {
        401 | 403 => Error::Unauthenticated,
        404 => Error::NotFound,
        _ => Error::RequestFailed {
            status,
            detail: extract_detail(&body),
        },
    }
}

/// FastAPI-style error bodies carry a `detail` field; fall back to the raw
/// body for anything else.
fn extract_detail(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| value.get("detail").and_then(Value::as_str).map(str::to_owned))
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_detail_prefers_json_field() {
        assert_eq!(extract_detail(r#"{"detail": "Already subscribed"}"#), "Already subscribed");
    }

    #[test]
    fn extract_detail_falls_back_to_raw_body() {
        assert_eq!(extract_detail("gateway exploded"), "gateway exploded");
        assert_eq!(extract_detail(r#"{"message": "other shape"}"#), r#"{"message": "other shape"}"#);
    }

    #[test]
    fn status_mapping() {
        assert!(matches!(error_for_status(401, String::new()), Error::Unauthenticated));
        assert!(matches!(error_for_status(403, String::new()), Error::Unauthenticated));
        assert!(matches!(error_for_status(404, String::new()), Error::NotFound));
        assert!(matches!(
            error_for_status(502, "bad gateway".into()),
            Error::RequestFailed { status: 502, .. }
        ));
    }
}
