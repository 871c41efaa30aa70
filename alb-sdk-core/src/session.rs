//! Authenticated session with an Avi Controller.

use std::{fmt, str::FromStr};

use http::{Method, Request, header};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::json;
use tokio::sync::RwLock;
use url::Url;

use crate::config::{Credentials, SessionConfig};
use crate::error::{AviError, AviResult, error_message};
use crate::options::ApiOptions;
use crate::transport::{ReqwestTransport, Transport};

const APPLICATION_JSON: &str = "application/json";
const X_AVI_VERSION: &str = "X-Avi-Version";
const X_AVI_TENANT: &str = "X-Avi-Tenant";
const X_CSRF_TOKEN: &str = "X-CSRFToken";
const CSRF_COOKIE: &str = "csrftoken";
const SESSION_COOKIES: [&str; 2] = ["sessionid", "avi-sessionid"];

/// Operation of a `PATCH` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOp {
    /// Append to list fields, set scalar fields.
    Add,
    Replace,
    /// Remove the given elements from list fields.
    Delete,
}

impl PatchOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatchOp::Add => "add",
            PatchOp::Replace => "replace",
            PatchOp::Delete => "delete",
        }
    }
}

impl fmt::Display for PatchOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatchOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(PatchOp::Add),
            "replace" => Ok(PatchOp::Replace),
            "delete" => Ok(PatchOp::Delete),
            _ => Err(format!("unknown patch operation '{s}', expected add, replace or delete")),
        }
    }
}

/// One page of a collection response.
#[derive(Debug, Deserialize)]
struct CollectionPage<T> {
    #[serde(default = "Vec::new")]
    results: Vec<T>,
    next: Option<String>,
}

#[derive(Debug, Default)]
struct SessionState {
    tenant: String,
    version: String,
    logged_in: bool,
    /// Bumped on every login, so a stale 401 does not discard a newer session.
    generation: u64,
    csrf_token: Option<String>,
    cookies: Vec<(String, String)>,
}

/// What a single request needs to know about the session.
struct SessionSnapshot {
    generation: u64,
    tenant: String,
    version: String,
    csrf_token: Option<String>,
    cookie: Option<String>,
}

impl SessionSnapshot {
    fn of(state: &SessionState) -> Self {
        let cookie = (!state.cookies.is_empty()).then(|| {
            state
                .cookies
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join("; ")
        });
        Self {
            generation: state.generation,
            tenant: state.tenant.clone(),
            version: state.version.clone(),
            csrf_token: state.csrf_token.clone(),
            cookie,
        }
    }
}

/// `name=value` of a `Set-Cookie` header.
fn parse_set_cookie(value: &str) -> Option<(String, String)> {
    let pair = value.split(';').next()?;
    let (name, value) = pair.split_once('=')?;
    let name = name.trim();
    (!name.is_empty()).then(|| (name.to_string(), value.trim().to_string()))
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> AviResult<T> {
    // DELETE and some PUTs answer with an empty body
    if body.iter().all(u8::is_ascii_whitespace) {
        Ok(serde_json::from_slice(b"null")?)
    } else {
        Ok(serde_json::from_slice(body)?)
    }
}

/// An authenticated session with a controller.
///
/// The session logs in lazily on first use and again whenever the controller
/// reports it as expired (401 or 419). Requests failing with 502, 503, 504 or
/// below HTTP are retried with exponential backoff. A session is meant to be
/// shared, typically behind an `Arc`; all methods take `&self`.
pub struct AviSession {
    config: SessionConfig,
    base_url: Url,
    transport: Box<dyn Transport>,
    state: RwLock<SessionState>,
}

impl fmt::Debug for AviSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AviSession")
            .field("config", &self.config)
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl AviSession {
    /// Creates a session talking HTTP through reqwest. Nothing is sent yet.
    pub fn new(config: SessionConfig) -> AviResult<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Self::with_transport(config, transport)
    }

    pub fn with_transport(
        config: SessionConfig,
        transport: impl Transport + 'static,
    ) -> AviResult<Self> {
        config.validate()?;
        let base_url = config.base_url()?;
        let state = SessionState {
            tenant: config.tenant.clone(),
            version: config.version.clone(),
            ..Default::default()
        };
        Ok(Self {
            config,
            base_url,
            transport: Box::new(transport),
            state: RwLock::new(state),
        })
    }

    /// Creates a session and logs in right away.
    pub async fn connect(config: SessionConfig) -> AviResult<Self> {
        let session = Self::new(config)?;
        session.login().await?;
        Ok(session)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn tenant(&self) -> String {
        self.state.read().await.tenant.clone()
    }

    /// Tenant for all following requests that do not override it.
    pub async fn set_tenant(&self, tenant: impl Into<String>) {
        self.state.write().await.tenant = tenant.into();
    }

    pub async fn version(&self) -> String {
        self.state.read().await.version.clone()
    }

    pub async fn set_version(&self, version: impl Into<String>) {
        self.state.write().await.version = version.into();
    }

    pub async fn is_logged_in(&self) -> bool {
        self.state.read().await.logged_in
    }

    /// Logs in with the configured credentials, replacing any previous session.
    pub async fn login(&self) -> AviResult<()> {
        let mut state = self.state.write().await;
        self.login_locked(&mut state).await
    }

    async fn login_locked(&self, state: &mut SessionState) -> AviResult<()> {
        let username = &self.config.username;
        let credentials = match &self.config.credentials {
            Some(Credentials::Password(password)) => {
                json!({"username": username, "password": password})
            }
            Some(Credentials::Token(token)) => json!({"username": username, "token": token}),
            None => {
                return Err(AviError::Config(format!(
                    "neither password nor auth token given for user '{username}'"
                )));
            }
        };

        let url = self.base_url.join("login")?;
        debug!("POST {url}");
        let request = Request::post(url.as_str())
            .header(header::ACCEPT, APPLICATION_JSON)
            .header(header::CONTENT_TYPE, APPLICATION_JSON)
            .header(header::REFERER, self.base_url.as_str())
            .header(X_AVI_VERSION, state.version.as_str())
            .body(serde_json::to_vec(&credentials)?)?;
        let response = self.transport.execute(request).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AviError::LoginFailed {
                controller: self.config.controller.clone(),
                status: status.as_u16(),
                message: error_message(response.body()),
            });
        }

        state.cookies = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .filter_map(parse_set_cookie)
            .collect();
        state.csrf_token = state
            .cookies
            .iter()
            .find(|(name, _)| name == CSRF_COOKIE)
            .map(|(_, value)| value.clone());
        if !state
            .cookies
            .iter()
            .any(|(name, _)| SESSION_COOKIES.contains(&name.as_str()))
        {
            warn!("controller {} did not set a session cookie", self.config.controller);
        }
        state.logged_in = true;
        state.generation += 1;
        info!("logged in to {} as {username}", self.config.controller);
        Ok(())
    }

    /// Ends the session at the controller. The next request logs in again.
    pub async fn logout(&self) -> AviResult<()> {
        let mut state = self.state.write().await;
        if !state.logged_in {
            return Ok(());
        }
        let url = self.base_url.join("logout")?;
        let request = self.build_request(&Method::POST, &url, None, None, &SessionSnapshot::of(&state))?;
        let response = self.transport.execute(request).await;

        state.logged_in = false;
        state.csrf_token = None;
        state.cookies.clear();
        match response {
            Ok(response) if response.status().is_success() => {
                info!("logged out of {}", self.config.controller)
            }
            Ok(response) => warn!("logout failed with status {}", response.status()),
            Err(e) => warn!("logout failed: {e}"),
        }
        Ok(())
    }

    async fn authenticated(&self) -> AviResult<SessionSnapshot> {
        {
            let state = self.state.read().await;
            if state.logged_in {
                return Ok(SessionSnapshot::of(&state));
            }
        }
        let mut state = self.state.write().await;
        // another request may have logged in while we waited for the lock
        if !state.logged_in {
            self.login_locked(&mut state).await?;
        }
        Ok(SessionSnapshot::of(&state))
    }

    async fn invalidate(&self, generation: u64) {
        let mut state = self.state.write().await;
        if state.generation == generation {
            state.logged_in = false;
        }
    }

    fn build_request(
        &self,
        method: &Method,
        url: &Url,
        body: Option<&[u8]>,
        tenant: Option<&str>,
        session: &SessionSnapshot,
    ) -> AviResult<Request<Vec<u8>>> {
        let mut builder = Request::builder()
            .method(method.clone())
            .uri(url.as_str())
            .header(header::ACCEPT, APPLICATION_JSON)
            .header(header::CONTENT_TYPE, APPLICATION_JSON)
            .header(header::REFERER, self.base_url.as_str())
            .header(X_AVI_VERSION, session.version.as_str())
            .header(X_AVI_TENANT, tenant.unwrap_or(&session.tenant));
        if let Some(csrf_token) = &session.csrf_token {
            builder = builder.header(X_CSRF_TOKEN, csrf_token.as_str());
        }
        if let Some(cookie) = &session.cookie {
            builder = builder.header(header::COOKIE, cookie.as_str());
        }
        Ok(builder.body(body.map(<[u8]>::to_vec).unwrap_or_default())?)
    }

    /// Sends a request, logging in and retrying as needed, and returns the response body.
    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
        options: &ApiOptions,
    ) -> AviResult<Vec<u8>> {
        let verb = method.as_str();
        let max_retries = self.config.max_retries;
        let mut backoff: u32 = 0;
        let mut last_error = None;

        for attempt in 0..=max_retries {
            if backoff > 0 {
                let delay = self
                    .config
                    .retry_base_delay
                    .saturating_mul(2u32.saturating_pow(backoff - 1));
                tokio::time::sleep(delay).await;
            }
            let last_attempt = attempt == max_retries;

            let session = match self.authenticated().await {
                Ok(session) => session,
                Err(e) if e.is_transient() && !last_attempt => {
                    warn!("login to {} failed, retrying: {e}", self.config.controller);
                    backoff += 1;
                    last_error = Some(e);
                    continue;
                }
                Err(e) => return Err(e),
            };

            let request =
                self.build_request(&method, &url, body.as_deref(), options.tenant(), &session)?;
            debug!("{verb} {url}");
            match self.transport.execute(request).await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response.into_body());
                    }
                    let error = AviError::api(verb, url.as_str(), status.as_u16(), response.body());
                    if last_attempt {
                        return Err(error);
                    }
                    match status.as_u16() {
                        401 | 419 => {
                            warn!("{verb} {url}: session expired ({status}), logging in again");
                            self.invalidate(session.generation).await;
                        }
                        502..=504 => {
                            warn!("{verb} {url} failed with {status}, retrying");
                            backoff += 1;
                        }
                        _ => return Err(error),
                    }
                    last_error = Some(error);
                }
                Err(e) if e.is_transient() && !last_attempt => {
                    warn!("{verb} {url} failed, retrying: {e}");
                    backoff += 1;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| AviError::Transport(format!("{verb} {url} was never sent"))))
    }

    /// Resolves an API path like `api/pool/pool-1` against the controller and
    /// appends the query parameters of `options`.
    pub fn url_for(&self, path: &str, options: &ApiOptions) -> AviResult<Url> {
        let mut url = self.base_url.join(path.trim_start_matches('/'))?;
        let pairs = options.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }

    /// Maps a `next` link onto our base URL. Controllers behind a proxy
    /// report their own address in it.
    fn follow(&self, next: &str) -> AviResult<Url> {
        let next = match Url::parse(next) {
            Ok(url) => url,
            Err(_) => return Ok(self.base_url.join(next.trim_start_matches('/'))?),
        };
        if next.origin() == self.base_url.origin() {
            return Ok(next);
        }
        let mut url = self.base_url.join(next.path().trim_start_matches('/'))?;
        url.set_query(next.query());
        Ok(url)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, options: &ApiOptions) -> AviResult<T> {
        let url = self.url_for(path, options)?;
        decode(&self.send(Method::GET, url, None, options).await?)
    }

    pub async fn post<B, T>(&self, path: &str, payload: &B, options: &ApiOptions) -> AviResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url_for(path, options)?;
        let body = serde_json::to_vec(payload)?;
        decode(&self.send(Method::POST, url, Some(body), options).await?)
    }

    pub async fn put<B, T>(&self, path: &str, payload: &B, options: &ApiOptions) -> AviResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url_for(path, options)?;
        let body = serde_json::to_vec(payload)?;
        decode(&self.send(Method::PUT, url, Some(body), options).await?)
    }

    /// Sends `{"<op>": patch}` as a `PATCH` request.
    pub async fn patch<B, T>(
        &self,
        path: &str,
        patch: &B,
        op: PatchOp,
        options: &ApiOptions,
    ) -> AviResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url_for(path, options)?;
        let mut body = serde_json::Map::new();
        body.insert(op.as_str().to_string(), serde_json::to_value(patch)?);
        let body = serde_json::to_vec(&body)?;
        decode(&self.send(Method::PATCH, url, Some(body), options).await?)
    }

    pub async fn delete(&self, path: &str) -> AviResult<()> {
        self.delete_object(path, &ApiOptions::default()).await
    }

    pub async fn delete_object(&self, path: &str, options: &ApiOptions) -> AviResult<()> {
        let url = self.url_for(path, options)?;
        self.send(Method::DELETE, url, None, options).await?;
        Ok(())
    }

    /// Fetches every page of a collection and concatenates the results.
    pub async fn get_collection<T: DeserializeOwned>(
        &self,
        path: &str,
        options: &ApiOptions,
    ) -> AviResult<Vec<T>> {
        let mut url = self.url_for(path, options)?;
        let mut results = Vec::new();
        loop {
            let page: CollectionPage<T> =
                decode(&self.send(Method::GET, url.clone(), None, options).await?)?;
            results.extend(page.results);

            let Some(next) = page.next.filter(|next| !next.is_empty()) else {
                break;
            };
            let next = self.follow(&next)?;
            if next == url {
                warn!("collection {url} links to itself, stopping");
                break;
            }
            url = next;
        }
        debug!("fetched {} objects from {path}", results.len());
        Ok(results)
    }

    /// First object of `object_type` matching the filters in `options`.
    pub async fn get_object<T: DeserializeOwned>(
        &self,
        object_type: &str,
        options: &ApiOptions,
    ) -> AviResult<T> {
        let url = self.url_for(&format!("api/{object_type}"), options)?;
        let page: CollectionPage<T> = decode(&self.send(Method::GET, url, None, options).await?)?;
        page.results
            .into_iter()
            .next()
            .ok_or_else(|| AviError::NotFound {
                object_type: object_type.to_string(),
                name: options
                    .name()
                    .map(str::to_string)
                    .unwrap_or_else(|| options.query_string()),
            })
    }

    pub async fn get_object_by_name<T: DeserializeOwned>(
        &self,
        object_type: &str,
        name: &str,
        options: &ApiOptions,
    ) -> AviResult<T> {
        let options = options.clone().with_name(name);
        self.get_object(object_type, &options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::testing::*;
    use serde_json::Value;
    use std::time::Duration;

    fn config() -> SessionConfig {
        SessionConfig::new("10.10.10.10")
            .with_password("secret")
            .with_retry_delay(Duration::from_millis(1))
    }

    fn session(transport: &FakeTransport) -> AviSession {
        AviSession::with_transport(config(), transport.clone()).unwrap()
    }

    #[test]
    fn test_parse_set_cookie() {
        assert_eq!(
            Some(("csrftoken".to_string(), "abc".to_string())),
            parse_set_cookie("csrftoken=abc; expires=Thu, 01 Jan 2026 00:00:00 GMT; Path=/")
        );
        assert_eq!(
            Some(("sessionid".to_string(), "".to_string())),
            parse_set_cookie("sessionid=; Path=/")
        );
        assert_eq!(None, parse_set_cookie("garbage"));
    }

    #[test]
    fn test_patch_op() {
        assert_eq!(Ok(PatchOp::Delete), "delete".parse());
        assert_eq!("replace", PatchOp::Replace.to_string());
        assert!("remove".parse::<PatchOp>().is_err());
    }

    #[test]
    fn test_session_requires_credentials() {
        let err = AviSession::with_transport(SessionConfig::new("c"), FakeTransport::new())
            .unwrap_err();
        assert!(matches!(err, AviError::Config(_)));
    }

    #[test_log::test(tokio::test)]
    async fn test_login_and_headers() {
        let transport = FakeTransport::logged_in().with_response(
            "GET",
            "/api/techsupportprofile",
            CannedResponse::ok(json!({"count": 0, "results": []})),
        );
        let session = session(&transport);
        assert!(!session.is_logged_in().await);

        let _: Value = session
            .get("api/techsupportprofile", &ApiOptions::default())
            .await
            .unwrap();
        assert!(session.is_logged_in().await);

        let requests = transport.requests();
        assert_eq!(2, requests.len());
        assert_eq!("https://10.10.10.10/login", requests[0].uri);
        assert_eq!(json!({"username": "admin", "password": "secret"}), requests[0].body);

        let get = &requests[1];
        assert_eq!(Method::GET, get.method);
        assert_eq!("https://10.10.10.10/api/techsupportprofile", get.uri);
        assert_eq!(Some("application/json"), get.header("accept"));
        assert_eq!(Some("18.2.6"), get.header("x-avi-version"));
        assert_eq!(Some("admin"), get.header("x-avi-tenant"));
        assert_eq!(Some("https://10.10.10.10/"), get.header("referer"));
        assert_eq!(Some("csrf-1"), get.header("x-csrftoken"));
        assert_eq!(
            Some("csrftoken=csrf-1; avi-sessionid=session-1"),
            get.header("cookie")
        );
    }

    #[test_log::test(tokio::test)]
    async fn test_token_login() {
        let transport = FakeTransport::logged_in();
        let config = config().with_username("amko").with_token("token-1");
        let session = AviSession::with_transport(config, transport.clone()).unwrap();
        session.login().await.unwrap();
        assert_eq!(json!({"username": "amko", "token": "token-1"}), transport.requests()[0].body);
    }

    #[test_log::test(tokio::test)]
    async fn test_login_failure() {
        let transport = FakeTransport::new().with_response(
            "POST",
            "/login",
            CannedResponse::status(401, json!({"error": "Invalid credentials"})),
        );
        let session = session(&transport);
        let err = session
            .get::<Value>("api/pool", &ApiOptions::default())
            .await
            .unwrap_err();
        match err {
            AviError::LoginFailed { status, message, .. } => {
                assert_eq!(401, status);
                assert_eq!("Invalid credentials", message);
            }
            other => panic!("unexpected error {other}"),
        }
        assert_eq!(1, transport.requests().len());
    }

    #[test_log::test(tokio::test)]
    async fn test_login_happens_once() {
        let transport = FakeTransport::logged_in()
            .with_response("GET", "/api/pool", CannedResponse::ok(json!({"results": []})));
        let session = session(&transport);
        for _ in 0..3 {
            let _: Value = session.get("api/pool", &ApiOptions::default()).await.unwrap();
        }
        assert_eq!(1, transport.requests_to("/login").len());
    }

    #[test_log::test(tokio::test)]
    async fn test_expired_session_logs_in_again() {
        let transport = FakeTransport::logged_in()
            .with_response("GET", "/api/pool", CannedResponse::status(401, json!({})))
            .with_response("GET", "/api/pool", CannedResponse::ok(json!({"uuid": "pool-1"})));
        let session = session(&transport);
        let pool: Value = session.get("api/pool", &ApiOptions::default()).await.unwrap();
        assert_eq!("pool-1", pool["uuid"]);
        assert_eq!(2, transport.requests_to("/login").len());
        assert_eq!(2, transport.requests_to("/api/pool").len());
    }

    #[test_log::test(tokio::test)]
    async fn test_session_timeout_logs_in_again() {
        let transport = FakeTransport::logged_in()
            .with_response("GET", "/api/pool", CannedResponse::status(419, json!({})))
            .with_response("GET", "/api/pool", CannedResponse::ok(json!({"uuid": "pool-1"})));
        let session = session(&transport);
        let pool: Value = session.get("api/pool", &ApiOptions::default()).await.unwrap();
        assert_eq!("pool-1", pool["uuid"]);
        assert_eq!(2, transport.requests_to("/login").len());
        assert_eq!(2, transport.requests_to("/api/pool").len());
    }

    #[test_log::test(tokio::test)]
    async fn test_login_retried_while_controller_restarts() {
        let transport = FakeTransport::new()
            .with_response("POST", "/login", CannedResponse::status(503, json!({})))
            .with_response(
                "POST",
                "/login",
                CannedResponse::ok(json!({"success": "true"}))
                    .with_cookie("csrftoken=csrf-1; Path=/")
                    .with_cookie("avi-sessionid=session-1; Path=/; HttpOnly"),
            )
            .with_response("GET", "/api/pool", CannedResponse::ok(json!({"uuid": "pool-1"})));
        let session = session(&transport);
        let pool: Value = session.get("api/pool", &ApiOptions::default()).await.unwrap();
        assert_eq!("pool-1", pool["uuid"]);
        assert_eq!(2, transport.requests_to("/login").len());
        assert_eq!(1, transport.requests_to("/api/pool").len());
    }

    #[test_log::test(tokio::test)]
    async fn test_retry_on_service_unavailable() {
        let transport = FakeTransport::logged_in()
            .with_response("GET", "/api/pool", CannedResponse::status(503, json!({})))
            .with_response("GET", "/api/pool", CannedResponse::status(502, json!({})))
            .with_response("GET", "/api/pool", CannedResponse::ok(json!({"uuid": "pool-1"})));
        let session = session(&transport);
        let _: Value = session.get("api/pool", &ApiOptions::default()).await.unwrap();
        assert_eq!(3, transport.requests_to("/api/pool").len());
        assert_eq!(1, transport.requests_to("/login").len());
    }

    #[test_log::test(tokio::test)]
    async fn test_retries_exhausted() {
        let transport = FakeTransport::logged_in().with_response(
            "GET",
            "/api/pool",
            CannedResponse::status(504, json!({"error": "Gateway Timeout"})),
        );
        let session =
            AviSession::with_transport(config().with_max_retries(2), transport.clone()).unwrap();
        let err = session
            .get::<Value>("api/pool", &ApiOptions::default())
            .await
            .unwrap_err();
        assert_eq!(Some(504), err.status());
        assert_eq!(3, transport.requests_to("/api/pool").len());
    }

    #[test_log::test(tokio::test)]
    async fn test_client_errors_are_not_retried() {
        let transport = FakeTransport::logged_in().with_response(
            "POST",
            "/api/pool",
            CannedResponse::status(400, json!({"error": "field 'name' is required"})),
        );
        let session = session(&transport);
        let err = session
            .post::<_, Value>("api/pool", &json!({}), &ApiOptions::default())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("field 'name' is required"));
        assert_eq!(1, transport.requests_to("/api/pool").len());
    }

    #[test_log::test(tokio::test)]
    async fn test_retry_on_transport_failure() {
        let transport = FakeTransport::logged_in()
            .with_response("GET", "/api/pool", CannedResponse::Fail("connection reset".into()))
            .with_response("GET", "/api/pool", CannedResponse::ok(json!({})));
        let session = session(&transport);
        let _: Value = session.get("api/pool", &ApiOptions::default()).await.unwrap();
        assert_eq!(2, transport.requests_to("/api/pool").len());
    }

    #[test_log::test(tokio::test)]
    async fn test_patch_body() {
        let transport = FakeTransport::logged_in().with_response(
            "PATCH",
            "/api/trustedhostprofile/thp-1",
            CannedResponse::ok(json!({"uuid": "thp-1"})),
        );
        let session = session(&transport);
        let patch = json!({"hosts": [{"host": {"addr": "10.0.0.1", "type": "V4"}}]});
        let _: Value = session
            .patch("api/trustedhostprofile/thp-1", &patch, PatchOp::Add, &ApiOptions::default())
            .await
            .unwrap();
        let request = &transport.requests_to("/api/trustedhostprofile")[0];
        assert_eq!(Method::PATCH, request.method);
        assert_eq!(json!({"add": patch}), request.body);
    }

    #[test_log::test(tokio::test)]
    async fn test_get_collection_follows_next() {
        let transport = FakeTransport::logged_in()
            .with_response(
                "GET",
                "/api/pool",
                CannedResponse::ok(json!({
                    "count": 3,
                    "results": [{"name": "p1"}, {"name": "p2"}],
                    "next": "https://192.168.1.10/api/pool?page=2",
                })),
            )
            .with_response(
                "GET",
                "/api/pool?page=2",
                CannedResponse::ok(json!({"count": 3, "results": [{"name": "p3"}]})),
            );
        let session = session(&transport);
        let pools: Vec<Value> = session
            .get_collection("api/pool", &ApiOptions::default())
            .await
            .unwrap();
        let names: Vec<&str> = pools.iter().filter_map(|p| p["name"].as_str()).collect();
        assert_eq!(vec!["p1", "p2", "p3"], names);

        // the next link is rebased onto the configured controller
        let requests = transport.requests_to("/api/pool");
        assert_eq!("https://10.10.10.10/api/pool?page=2", requests[1].uri);
    }

    #[test_log::test(tokio::test)]
    async fn test_get_object_by_name() {
        let transport = FakeTransport::logged_in()
            .with_response(
                "GET",
                "/api/techsupportprofile?name=default",
                CannedResponse::ok(json!({"count": 1, "results": [{"name": "default", "uuid": "tsp-1"}]})),
            )
            .with_response(
                "GET",
                "/api/techsupportprofile?name=other",
                CannedResponse::ok(json!({"count": 0, "results": []})),
            );
        let session = session(&transport);
        let options = ApiOptions::new().with_tenant("*");
        let profile: Value = session
            .get_object_by_name("techsupportprofile", "default", &options)
            .await
            .unwrap();
        assert_eq!("tsp-1", profile["uuid"]);
        assert_eq!(Some("*"), transport.requests_to("name=default")[0].header("x-avi-tenant"));

        let err = session
            .get_object_by_name::<Value>("techsupportprofile", "other", &options)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(matches!(err, AviError::NotFound { name, .. } if name == "other"));
    }

    #[test_log::test(tokio::test)]
    async fn test_tenant_and_version() {
        let transport = FakeTransport::logged_in()
            .with_response("DELETE", "/api/pool/pool-1", CannedResponse::ok(Value::Null));
        let session = session(&transport);
        session.set_tenant("t1").await;
        session.set_version("22.1.3").await;
        assert_eq!("t1", session.tenant().await);
        assert_eq!("22.1.3", session.version().await);

        session.delete("api/pool/pool-1").await.unwrap();
        let request = &transport.requests_to("/api/pool")[0];
        assert_eq!(Method::DELETE, request.method);
        assert_eq!(Some("t1"), request.header("x-avi-tenant"));
        assert_eq!(Some("22.1.3"), request.header("x-avi-version"));
    }

    #[test_log::test(tokio::test)]
    async fn test_logout() {
        let transport = FakeTransport::logged_in()
            .with_response("POST", "/logout", CannedResponse::ok(Value::Null))
            .with_response("GET", "/api/pool", CannedResponse::ok(json!({})));
        let session = session(&transport);
        session.login().await.unwrap();
        session.logout().await.unwrap();
        assert!(!session.is_logged_in().await);

        let _: Value = session.get("api/pool", &ApiOptions::default()).await.unwrap();
        assert_eq!(2, transport.requests_to("/login").len());
        assert_eq!(1, transport.requests_to("/logout").len());
    }

    #[test]
    fn test_url_for() {
        let session = session(&FakeTransport::new());
        let url = session
            .url_for("/api/pool", &ApiOptions::new().with_cloud("Default-Cloud"))
            .unwrap();
        assert_eq!("https://10.10.10.10/api/pool?cloud_ref.name=Default-Cloud", url.as_str());
    }
}
