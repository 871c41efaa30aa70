//! HTTP transport abstraction.
//!
//! The session speaks plain `http` requests and responses through the
//! [Transport] trait so that the wire can be swapped out in tests. The
//! production implementation is backed by reqwest.

use async_trait::async_trait;
use http::{Request, Response};

use crate::config::SessionConfig;
use crate::error::AviResult;

/// Executes one HTTP exchange with the controller.
///
/// Implementations only move bytes. Authentication, retries and status
/// handling are the session's business.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: Request<Vec<u8>>) -> AviResult<Response<Vec<u8>>>;
}

/// Transport backed by a reqwest client.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(config: &SessionConfig) -> AviResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .danger_accept_invalid_certs(config.insecure)
            .build()?;
        Ok(Self { client })
    }

    /// Wraps an existing client, e.g. one configured with a custom root certificate.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: Request<Vec<u8>>) -> AviResult<Response<Vec<u8>>> {
        let (parts, body) = request.into_parts();
        let response = self
            .client
            .request(parts.method, parts.uri.to_string())
            .headers(parts.headers)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.bytes().await?;

        let mut out = Response::new(bytes.to_vec());
        *out.status_mut() = status;
        *out.headers_mut() = headers;
        Ok(out)
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use crate::error::AviError;
    use http::{HeaderMap, HeaderValue, Method, StatusCode, header};
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    /// Canned response for the fake transport.
    #[derive(Clone)]
    pub enum CannedResponse {
        Reply {
            status: u16,
            body: serde_json::Value,
            cookies: Vec<String>,
        },
        /// Fails below HTTP, like a dropped connection.
        Fail(String),
    }

    impl CannedResponse {
        pub fn ok(body: serde_json::Value) -> Self {
            Self::status(200, body)
        }

        pub fn status(status: u16, body: serde_json::Value) -> Self {
            CannedResponse::Reply {
                status,
                body,
                cookies: Vec::new(),
            }
        }

        pub fn with_cookie(mut self, cookie: &str) -> Self {
            if let CannedResponse::Reply { cookies, .. } = &mut self {
                cookies.push(cookie.to_string());
            }
            self
        }
    }

    /// A request as seen by the fake transport.
    #[derive(Debug, Clone)]
    pub struct RecordedRequest {
        pub method: Method,
        pub uri: String,
        pub headers: HeaderMap,
        pub body: serde_json::Value,
    }

    impl RecordedRequest {
        pub fn header(&self, name: &str) -> Option<&str> {
            self.headers.get(name).and_then(|v| v.to_str().ok())
        }
    }

    struct Route {
        method: Method,
        path_contains: String,
        responses: VecDeque<CannedResponse>,
    }

    /// A fake transport that answers from canned responses and records every request.
    ///
    /// Responses registered for the same route are handed out in order; the
    /// last one repeats. Unknown routes get a 404.
    #[derive(Clone, Default)]
    pub struct FakeTransport {
        routes: Arc<Mutex<Vec<Route>>>,
        requests: Arc<Mutex<Vec<RecordedRequest>>>,
    }

    impl FakeTransport {
        pub fn new() -> Self {
            Self::default()
        }

        /// Fake that accepts any login and hands out session cookies.
        pub fn logged_in() -> Self {
            Self::new().with_response(
                "POST",
                "/login",
                CannedResponse::ok(serde_json::json!({"success": "true"}))
                    .with_cookie("csrftoken=csrf-1; Path=/")
                    .with_cookie("avi-sessionid=session-1; Path=/; HttpOnly"),
            )
        }

        pub fn with_response(self, method: &str, path_contains: &str, response: CannedResponse) -> Self {
            {
                let mut routes = self.routes.lock().unwrap();
                let method = Method::from_bytes(method.as_bytes()).unwrap();
                match routes
                    .iter_mut()
                    .find(|r| r.method == method && r.path_contains == path_contains)
                {
                    Some(route) => route.responses.push_back(response),
                    None => routes.push(Route {
                        method,
                        path_contains: path_contains.to_string(),
                        responses: VecDeque::from([response]),
                    }),
                }
            }
            self
        }

        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.requests.lock().unwrap().clone()
        }

        /// Requests whose URI contains `path_contains`.
        pub fn requests_to(&self, path_contains: &str) -> Vec<RecordedRequest> {
            self.requests()
                .into_iter()
                .filter(|r| r.uri.contains(path_contains))
                .collect()
        }

        fn find_response(&self, method: &Method, uri: &str) -> Option<CannedResponse> {
            let mut routes = self.routes.lock().unwrap();
            // longest match wins, so `/api/pool/pool-1` beats `/api/pool`
            let route = routes
                .iter_mut()
                .filter(|r| &r.method == method && uri.contains(&r.path_contains))
                .max_by_key(|r| r.path_contains.len())?;
            if route.responses.len() > 1 {
                route.responses.pop_front()
            } else {
                route.responses.front().cloned()
            }
        }
    }

    #[async_trait]
    impl Transport for FakeTransport {
        async fn execute(&self, request: Request<Vec<u8>>) -> AviResult<Response<Vec<u8>>> {
            let (parts, body) = request.into_parts();
            let uri = parts.uri.to_string();
            self.requests.lock().unwrap().push(RecordedRequest {
                method: parts.method.clone(),
                uri: uri.clone(),
                headers: parts.headers.clone(),
                body: serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null),
            });

            let canned = self.find_response(&parts.method, &uri).unwrap_or_else(|| {
                CannedResponse::status(404, serde_json::json!({"error": "resource not found"}))
            });
            match canned {
                CannedResponse::Reply {
                    status,
                    body,
                    cookies,
                } => {
                    let mut response = Response::new(serde_json::to_vec(&body)?);
                    *response.status_mut() = StatusCode::from_u16(status).unwrap();
                    for cookie in cookies {
                        response
                            .headers_mut()
                            .append(header::SET_COOKIE, HeaderValue::from_str(&cookie).unwrap());
                    }
                    Ok(response)
                }
                CannedResponse::Fail(message) => Err(AviError::Transport(message)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use serde_json::json;

    fn get(uri: &str) -> Request<Vec<u8>> {
        Request::get(uri).body(Vec::new()).unwrap()
    }

    #[test]
    fn test_reqwest_transport_creation() {
        let config = SessionConfig::new("10.10.10.10").with_insecure(true);
        assert!(ReqwestTransport::new(&config).is_ok());
    }

    #[tokio::test]
    async fn test_fake_transport_hands_out_responses_in_order() {
        let transport = FakeTransport::new()
            .with_response("GET", "/api/pool", CannedResponse::status(503, json!({})))
            .with_response("GET", "/api/pool", CannedResponse::ok(json!({"count": 0})));

        let first = transport.execute(get("https://c/api/pool")).await.unwrap();
        assert_eq!(503, first.status().as_u16());
        for _ in 0..2 {
            let next = transport.execute(get("https://c/api/pool")).await.unwrap();
            assert_eq!(200, next.status().as_u16());
        }
        assert_eq!(3, transport.requests_to("/api/pool").len());
    }

    #[tokio::test]
    async fn test_fake_transport_unknown_route() {
        let transport = FakeTransport::new();
        let response = transport.execute(get("https://c/api/nothing")).await.unwrap();
        assert_eq!(404, response.status().as_u16());
    }

    #[tokio::test]
    async fn test_fake_transport_failure() {
        let transport =
            FakeTransport::new().with_response("GET", "/api", CannedResponse::Fail("reset".into()));
        let err = transport.execute(get("https://c/api/pool")).await.unwrap_err();
        assert!(err.is_transient());
    }
}
