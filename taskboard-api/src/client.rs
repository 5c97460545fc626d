use crate::endpoints::auth::{RefreshTokens, TOKEN_PATH_PREFIXES};
use crate::endpoints::{Request, RequestData};
use crate::error::{AuthFailure, ClientError, ErrorPayload};
use crate::events::{SessionEvent, EVENT_CAPACITY};
use crate::token_store::{Credentials, TokenPair, TokenStore};
use futures::future::{BoxFuture, FutureExt, Shared};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, Response, StatusCode};
use serde_json::Value;
use std::borrow::Cow;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::broadcast;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

type RefreshFlight = Shared<BoxFuture<'static, Result<String, ClientError>>>;

/// Method and JSON body of an untyped call
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Value>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    pub fn new(method: Method) -> Self {
        Self { method, body: None }
    }

    pub fn json(method: Method, body: Value) -> Self {
        Self {
            method,
            body: Some(body),
        }
    }

    fn for_request<R: Request>(request: &R) -> Result<Self, ClientError> {
        let body = match request.data() {
            RequestData::Empty => None,
            RequestData::Json(data) => Some(serde_json::to_value(data)?),
        };
        Ok(Self {
            method: R::METHOD,
            body,
        })
    }
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::get()
    }
}

/// Authenticated client for the backend API.
///
/// Attaches the stored access token to every call and, when the backend
/// reports it expired, refreshes it once and retries. Concurrent refreshes
/// are coalesced into a single network call. Cheap to clone.
#[derive(Clone)]
pub struct Client {
    inner: Arc<Inner>,
}

struct Inner {
    http: reqwest::Client,
    base_url: String,
    store: Arc<dyn TokenStore>,
    events: broadcast::Sender<SessionEvent>,
    refresh_flight: Mutex<Option<RefreshFlight>>,
}

impl Client {
    pub fn new(base_url: &str, store: Arc<dyn TokenStore>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Ok(Self::with_http_client(http, base_url, store))
    }

    /// Use a preconfigured HTTP client (timeouts, proxies, TLS).
    pub fn with_http_client(
        http: reqwest::Client,
        base_url: &str,
        store: Arc<dyn TokenStore>,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            inner: Arc::new(Inner {
                http,
                base_url: base_url.trim_end_matches('/').to_string(),
                store,
                events,
                refresh_flight: Mutex::new(None),
            }),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Receive [`SessionEvent`]s emitted from now on
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.inner.events.subscribe()
    }

    pub fn credentials(&self) -> Credentials {
        self.inner.store.get()
    }

    pub fn set_credentials(&self, pair: &TokenPair) -> Result<(), ClientError> {
        self.inner.store.set(pair).map_err(From::from)
    }

    pub fn clear_credentials(&self) -> Result<(), ClientError> {
        self.inner.store.clear().map_err(From::from)
    }

    /// Send a typed request and decode its response
    pub async fn send<R>(&self, request: R) -> Result<R::Response, ClientError>
    where
        R: Request,
    {
        self.send_inner(&request, None).await
    }

    /// Like [`Client::send`], authenticating with `token` instead of the stored access token
    pub async fn send_with_token<R>(&self, request: R, token: &str) -> Result<R::Response, ClientError>
    where
        R: Request,
    {
        self.send_inner(&request, Some(token)).await
    }

    async fn send_inner<R>(&self, request: &R, token: Option<&str>) -> Result<R::Response, ClientError>
    where
        R: Request,
    {
        let options = RequestOptions::for_request(request)?;
        let body = self.request(&request.endpoint(), options, token).await?;
        Ok(serde_json::from_value(body.unwrap_or(Value::Null))?)
    }

    /// Perform a call against `path`.
    ///
    /// Resolves to `None` for an empty body, the decoded JSON otherwise, or
    /// the raw text as a JSON string when the body is not JSON.
    pub async fn request(
        &self,
        path: &str,
        options: RequestOptions,
        token: Option<&str>,
    ) -> Result<Option<Value>, ClientError> {
        let stored = match token {
            Some(_) => None,
            None => self.inner.store.get().access_token,
        };
        let token = token.or(stored.as_deref());

        let response = self.inner.execute(path, &options, token).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return read_body(response).await;
        }

        let payload = ErrorPayload::parse(&response.text().await?);
        if !payload.signals_expiry() {
            return Err(payload.into_api_error(StatusCode::UNAUTHORIZED).into());
        }

        tracing::debug!(path = %redact(path), "Access token expired");
        let fresh = match self.refreshed_elsewhere(stored.as_deref()) {
            Some(current) => current,
            None => match self.refresh().await {
                Err(ClientError::Auth(AuthFailure::NoRefreshToken)) => {
                    // Nothing left to renew the session with
                    self.inner.expire();
                    return Err(AuthFailure::NoRefreshToken.into());
                }
                outcome => outcome?,
            },
        };

        let retry = self.inner.execute(path, &options, Some(&fresh)).await?;
        read_body(retry).await
    }

    /// A request authenticated with a stored token that has since been
    /// replaced by another caller's refresh can retry with the replacement.
    fn refreshed_elsewhere(&self, sent: Option<&str>) -> Option<String> {
        let sent = sent?;
        self.inner
            .store
            .get()
            .access_token
            .filter(|current| current != sent)
    }

    /// Exchange the stored refresh token for a new pair.
    ///
    /// Callers arriving while a refresh is in flight share its outcome.
    pub async fn refresh(&self) -> Result<String, ClientError> {
        let flight = {
            let mut slot = self.inner.lock_flight();
            match slot.as_ref() {
                Some(flight) => flight.clone(),
                None => {
                    let refresh_token = self
                        .inner
                        .store
                        .get()
                        .refresh_token
                        .ok_or(AuthFailure::NoRefreshToken)?;

                    let inner = Arc::clone(&self.inner);
                    let flight = async move {
                        let outcome = inner.exchange(refresh_token).await;
                        inner.lock_flight().take();
                        outcome
                    }
                    .boxed()
                    .shared();

                    *slot = Some(flight.clone());
                    flight
                }
            }
        };

        flight.await
    }
}

impl Inner {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn lock_flight(&self) -> MutexGuard<'_, Option<RefreshFlight>> {
        self.refresh_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    async fn execute(
        &self,
        path: &str,
        options: &RequestOptions,
        token: Option<&str>,
    ) -> Result<Response, ClientError> {
        tracing::debug!(method = %options.method, path = %redact(path), "Sending request");

        let mut builder = self
            .http
            .request(options.method.clone(), self.url(path))
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &options.body {
            builder = builder.json(body);
        }

        Ok(builder.send().await?)
    }

    async fn exchange(&self, refresh_token: String) -> Result<String, ClientError> {
        let request = RefreshTokens::new(refresh_token);
        let response = self
            .http
            .request(RefreshTokens::METHOD, self.url(&request.endpoint()))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "Refresh token rejected");
            self.expire();
            return Err(AuthFailure::SessionExpired.into());
        }

        let pair: TokenPair = response.json().await?;
        self.store.set(&pair)?;
        tracing::info!("Access token refreshed");
        let _ = self.events.send(SessionEvent::TokenRefreshed(pair.clone()));

        Ok(pair.access_token)
    }

    /// Drop the stored session and tell subscribers it is gone
    fn expire(&self) {
        if let Err(e) = self.store.clear() {
            tracing::error!("Failed to clear credentials: {}", e);
        }
        // No receivers is fine
        let _ = self.events.send(SessionEvent::TokenExpired);
    }
}

/// `path` with single-use tokens masked, for logging
fn redact(path: &str) -> Cow<'_, str> {
    for prefix in TOKEN_PATH_PREFIXES {
        if path.len() > prefix.len() && path.starts_with(prefix) {
            return format!("{}:token", prefix).into();
        }
    }
    path.into()
}

async fn read_body(response: Response) -> Result<Option<Value>, ClientError> {
    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        return Err(ErrorPayload::parse(&text).into_api_error(status).into());
    }

    if text.is_empty() {
        return Ok(None);
    }

    Ok(Some(
        serde_json::from_str(&text).unwrap_or(Value::String(text)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::projects::ListProjects;
    use crate::token_store::MemoryTokenStore;
    use mockito::{Matcher, Server, ServerGuard};
    use serde_json::json;

    const EXPIRED_BODY: &str = r#"{"message":"Token has expired","code":"TOKEN_EXPIRED"}"#;

    fn client_for(server: &ServerGuard, store: Arc<MemoryTokenStore>) -> Client {
        Client::new(&server.url(), store).unwrap()
    }

    fn signed_in(access: &str, refresh: &str) -> Arc<MemoryTokenStore> {
        Arc::new(MemoryTokenStore::with_tokens(&TokenPair::new(access, refresh)))
    }

    #[tokio::test]
    async fn test_request_attaches_stored_access_token() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/projects")
            .match_header("authorization", "Bearer a1")
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_body("[]")
            .expect(1)
            .create_async()
            .await;

        let client = client_for(&server, signed_in("a1", "r1"));
        let body = client
            .request("/api/projects", RequestOptions::get(), None)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(body, Some(json!([])));
    }

    #[tokio::test]
    async fn test_request_without_token_omits_authorization_header() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/auth/forgot-password")
            .match_header("authorization", Matcher::Missing)
            .match_body(Matcher::Json(json!({"email": "ada@example.com"})))
            .with_status(200)
            .expect(1)
            .create_async()
            .await;

        let client = client_for(&server, Arc::new(MemoryTokenStore::new()));
        let options = RequestOptions::json(Method::POST, json!({"email": "ada@example.com"}));
        let body = client
            .request("/api/auth/forgot-password", options, None)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(body, None);
    }

    #[tokio::test]
    async fn test_explicit_token_overrides_stored_token() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/auth/profile")
            .match_header("authorization", "Bearer explicit")
            .with_status(200)
            .with_body(r#"{"_id":"u1","name":"Ada","email":"ada@example.com"}"#)
            .expect(1)
            .create_async()
            .await;

        let client = client_for(&server, signed_in("stored", "r1"));
        let user = client
            .send_with_token(crate::endpoints::auth::GetProfile, "explicit")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(user.name, "Ada");
    }

    #[tokio::test]
    async fn test_success_bodies() {
        let mut server = Server::new_async().await;
        let _empty = server
            .mock("GET", "/empty")
            .with_status(204)
            .create_async()
            .await;
        let _json = server
            .mock("GET", "/json")
            .with_status(200)
            .with_body(r#"{"a":1}"#)
            .create_async()
            .await;
        let _text = server
            .mock("GET", "/text")
            .with_status(200)
            .with_body("pong")
            .create_async()
            .await;

        let client = client_for(&server, Arc::new(MemoryTokenStore::new()));

        let empty = client.request("/empty", RequestOptions::get(), None).await;
        assert_eq!(empty.unwrap(), None);

        let json = client.request("/json", RequestOptions::get(), None).await;
        assert_eq!(json.unwrap(), Some(json!({"a": 1})));

        let text = client.request("/text", RequestOptions::get(), None).await;
        assert_eq!(text.unwrap(), Some(json!("pong")));
    }

    #[tokio::test]
    async fn test_error_status_carries_extracted_message() {
        let mut server = Server::new_async().await;
        let _missing = server
            .mock("GET", "/api/projects/missing")
            .with_status(404)
            .with_body(r#"{"message":"Project not found"}"#)
            .create_async()
            .await;
        let _broken = server
            .mock("GET", "/api/projects/broken")
            .with_status(502)
            .with_body("upstream unavailable")
            .create_async()
            .await;

        let client = client_for(&server, signed_in("a1", "r1"));

        let err = client
            .request("/api/projects/missing", RequestOptions::get(), None)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::Api(ref e) if e.status == 404 && e.message == "Project not found"
        ));

        let err = client
            .request("/api/projects/broken", RequestOptions::get(), None)
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(502));
        assert!(matches!(err, ClientError::Api(ref e) if e.message == "upstream unavailable"));
    }

    #[tokio::test]
    async fn test_expired_token_is_refreshed_and_retried_once() {
        let mut server = Server::new_async().await;
        let expired = server
            .mock("GET", "/api/projects")
            .match_header("authorization", "Bearer stale")
            .with_status(401)
            .with_body(r#"{"message":"Token has expired"}"#)
            .expect(1)
            .create_async()
            .await;
        let refresh = server
            .mock("POST", "/api/auth/refresh")
            .match_body(Matcher::Json(json!({"refreshToken": "r1"})))
            .with_status(200)
            .with_body(r#"{"accessToken":"fresh","refreshToken":"r2"}"#)
            .expect(1)
            .create_async()
            .await;
        let retried = server
            .mock("GET", "/api/projects")
            .match_header("authorization", "Bearer fresh")
            .with_status(200)
            .with_body(r#"[{"_id":"p1","name":"Roadmap","status":"active"}]"#)
            .expect(1)
            .create_async()
            .await;

        let store = signed_in("stale", "r1");
        let client = client_for(&server, store.clone());
        let projects = client.send(ListProjects).await.unwrap();

        expired.assert_async().await;
        refresh.assert_async().await;
        retried.assert_async().await;
        assert_eq!(projects[0].name, "Roadmap");
        assert_eq!(store.get(), Credentials::from(TokenPair::new("fresh", "r2")));
    }

    #[tokio::test]
    async fn test_unauthorized_without_expiry_signal_is_not_retried() {
        let mut server = Server::new_async().await;
        let login = server
            .mock("POST", "/api/auth/login")
            .with_status(401)
            .with_body(r#"{"message":"Invalid credentials"}"#)
            .expect(1)
            .create_async()
            .await;
        let refresh = server
            .mock("POST", "/api/auth/refresh")
            .expect(0)
            .create_async()
            .await;

        let client = client_for(&server, signed_in("a1", "r1"));
        let err = client
            .send(crate::endpoints::auth::Login::new("ada@example.com", "wrong"))
            .await
            .unwrap_err();

        login.assert_async().await;
        refresh.assert_async().await;
        assert!(matches!(
            err,
            ClientError::Api(ref e) if e.status == 401 && e.message == "Invalid credentials"
        ));
    }

    #[tokio::test]
    async fn test_failed_retry_surfaces_retry_status() {
        let mut server = Server::new_async().await;
        let _expired = server
            .mock("DELETE", "/api/projects/p1")
            .match_header("authorization", "Bearer stale")
            .with_status(401)
            .with_body(EXPIRED_BODY)
            .create_async()
            .await;
        let _refresh = server
            .mock("POST", "/api/auth/refresh")
            .with_status(200)
            .with_body(r#"{"accessToken":"fresh","refreshToken":"r2"}"#)
            .expect(1)
            .create_async()
            .await;
        let retried = server
            .mock("DELETE", "/api/projects/p1")
            .match_header("authorization", "Bearer fresh")
            .with_status(403)
            .with_body(r#"{"error":"Only owners can delete projects"}"#)
            .expect(1)
            .create_async()
            .await;

        let client = client_for(&server, signed_in("stale", "r1"));
        let err = client
            .request("/api/projects/p1", RequestOptions::new(Method::DELETE), None)
            .await
            .unwrap_err();

        retried.assert_async().await;
        assert!(matches!(
            err,
            ClientError::Api(ref e) if e.status == 403 && e.message == "Only owners can delete projects"
        ));
    }

    #[tokio::test]
    async fn test_refresh_without_refresh_token_makes_no_call() {
        let mut server = Server::new_async().await;
        let refresh = server
            .mock("POST", "/api/auth/refresh")
            .expect(0)
            .create_async()
            .await;

        let client = client_for(&server, Arc::new(MemoryTokenStore::new()));
        let err = client.refresh().await.unwrap_err();

        refresh.assert_async().await;
        assert!(matches!(err, ClientError::Auth(AuthFailure::NoRefreshToken)));
        assert!(err.is_session_lost());
    }

    #[tokio::test]
    async fn test_expired_request_without_refresh_token_ends_session() {
        let mut server = Server::new_async().await;
        let _expired = server
            .mock("GET", "/api/projects")
            .with_status(401)
            .with_body(EXPIRED_BODY)
            .expect(1)
            .create_async()
            .await;
        let refresh = server
            .mock("POST", "/api/auth/refresh")
            .expect(0)
            .create_async()
            .await;

        let store = Arc::new(MemoryTokenStore::new());
        let client = client_for(&server, store.clone());
        let mut events = client.subscribe();

        let err = client.send_with_token(ListProjects, "stale").await.unwrap_err();

        refresh.assert_async().await;
        assert!(matches!(err, ClientError::Auth(AuthFailure::NoRefreshToken)));
        assert_eq!(store.get(), Credentials::default());
        assert_eq!(events.try_recv().unwrap(), SessionEvent::TokenExpired);
    }

    #[tokio::test]
    async fn test_rejected_refresh_clears_store_and_broadcasts_expiry() {
        let mut server = Server::new_async().await;
        let _rejected = server
            .mock("POST", "/api/auth/refresh")
            .with_status(401)
            .with_body(r#"{"message":"Invalid refresh token"}"#)
            .expect(1)
            .create_async()
            .await;

        let store = signed_in("a1", "revoked");
        let client = client_for(&server, store.clone());
        let mut events = client.subscribe();

        let err = client.refresh().await.unwrap_err();

        assert!(matches!(err, ClientError::Auth(AuthFailure::SessionExpired)));
        assert_eq!(store.get(), Credentials::default());
        assert_eq!(events.try_recv().unwrap(), SessionEvent::TokenExpired);
    }

    #[tokio::test]
    async fn test_successful_refresh_broadcasts_new_pair() {
        let mut server = Server::new_async().await;
        let _refresh = server
            .mock("POST", "/api/auth/refresh")
            .with_status(200)
            .with_body(r#"{"accessToken":"a2","refreshToken":"r2"}"#)
            .create_async()
            .await;

        let client = client_for(&server, signed_in("a1", "r1"));
        let mut events = client.subscribe();

        assert_eq!(client.refresh().await.unwrap(), "a2");
        assert_eq!(
            events.try_recv().unwrap(),
            SessionEvent::TokenRefreshed(TokenPair::new("a2", "r2"))
        );
    }

    #[tokio::test]
    async fn test_concurrent_refreshes_share_one_call() {
        let mut server = Server::new_async().await;
        let refresh = server
            .mock("POST", "/api/auth/refresh")
            .with_status(200)
            .with_body(r#"{"accessToken":"a2","refreshToken":"r2"}"#)
            .expect(1)
            .create_async()
            .await;

        let client = client_for(&server, signed_in("a1", "r1"));
        let results = futures::future::join_all((0..5).map(|_| client.refresh())).await;

        refresh.assert_async().await;
        for result in results {
            assert_eq!(result.unwrap(), "a2");
        }
    }

    #[tokio::test]
    async fn test_concurrent_expired_requests_refresh_once() {
        let mut server = Server::new_async().await;
        let expired = server
            .mock("GET", "/api/notifications/unread-count")
            .match_header("authorization", "Bearer stale")
            .with_status(401)
            .with_body(EXPIRED_BODY)
            .expect(4)
            .create_async()
            .await;
        let refresh = server
            .mock("POST", "/api/auth/refresh")
            .with_status(200)
            .with_body(r#"{"accessToken":"fresh","refreshToken":"r2"}"#)
            .expect(1)
            .create_async()
            .await;
        let retried = server
            .mock("GET", "/api/notifications/unread-count")
            .match_header("authorization", "Bearer fresh")
            .with_status(200)
            .with_body(r#"{"count":3}"#)
            .expect(4)
            .create_async()
            .await;

        let client = client_for(&server, signed_in("stale", "r1"));
        let requests = (0..4).map(|_| {
            client.send(crate::endpoints::notifications::GetUnreadCount)
        });
        let results = futures::future::join_all(requests).await;

        expired.assert_async().await;
        refresh.assert_async().await;
        retried.assert_async().await;
        for result in results {
            assert_eq!(result.unwrap().count, 3);
        }
    }

    #[tokio::test]
    async fn test_refresh_can_start_again_after_failure() {
        let mut server = Server::new_async().await;
        let _rejected = server
            .mock("POST", "/api/auth/refresh")
            .match_body(Matcher::Json(json!({"refreshToken": "revoked"})))
            .with_status(401)
            .expect(1)
            .create_async()
            .await;
        let accepted = server
            .mock("POST", "/api/auth/refresh")
            .match_body(Matcher::Json(json!({"refreshToken": "r9"})))
            .with_status(200)
            .with_body(r#"{"accessToken":"a10","refreshToken":"r10"}"#)
            .expect(1)
            .create_async()
            .await;

        let store = signed_in("a1", "revoked");
        let client = client_for(&server, store.clone());
        assert!(client.refresh().await.is_err());

        store.set(&TokenPair::new("a9", "r9")).unwrap();
        assert_eq!(client.refresh().await.unwrap(), "a10");
        accepted.assert_async().await;
    }

    #[tokio::test]
    async fn test_refresh_can_start_again_after_success() {
        let mut server = Server::new_async().await;
        let first = server
            .mock("POST", "/api/auth/refresh")
            .match_body(Matcher::Json(json!({"refreshToken": "r1"})))
            .with_status(200)
            .with_body(r#"{"accessToken":"a2","refreshToken":"r2"}"#)
            .expect(1)
            .create_async()
            .await;
        let second = server
            .mock("POST", "/api/auth/refresh")
            .match_body(Matcher::Json(json!({"refreshToken": "r2"})))
            .with_status(200)
            .with_body(r#"{"accessToken":"a3","refreshToken":"r3"}"#)
            .expect(1)
            .create_async()
            .await;

        let client = client_for(&server, signed_in("a1", "r1"));

        assert_eq!(client.refresh().await.unwrap(), "a2");
        assert_eq!(client.refresh().await.unwrap(), "a3");
        first.assert_async().await;
        second.assert_async().await;
    }

    #[tokio::test]
    async fn test_transport_error_is_surfaced_without_refresh() {
        // Nothing listens on a port once its listener is dropped
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let store = signed_in("a1", "r1");
        let client = Client::new(&base_url, store.clone()).unwrap();
        let mut events = client.subscribe();

        let err = client.send(ListProjects).await.unwrap_err();

        assert!(matches!(err, ClientError::Transport(_)));
        assert!(!err.is_session_lost());
        assert_eq!(store.get(), Credentials::from(TokenPair::new("a1", "r1")));
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn test_redact_masks_single_use_tokens() {
        assert_eq!(
            redact("/api/auth/reset-password/abc123"),
            "/api/auth/reset-password/:token"
        );
        assert_eq!(redact("/api/auth/verify-email/xyz"), "/api/auth/verify-email/:token");
        assert_eq!(redact("/api/projects/p1/tasks"), "/api/projects/p1/tasks");
    }
}
