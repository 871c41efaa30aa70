use std::time::Duration;

use alb_sdk_core::{ApiOptions, AviClient, AviError, AviSession, PatchOp, SessionConfig};
use alb_sdk_model::{admin::TechSupportMessage, security::TrustedHostProfile};
use mockito::{Matcher, Server, ServerGuard};
use serde_json::{Value, json};
use std::sync::Arc;

fn config(server: &ServerGuard) -> SessionConfig {
    SessionConfig::new(server.url())
        .with_username("admin")
        .with_password("secret")
        .with_max_retries(1)
        .with_retry_delay(Duration::from_millis(1))
}

async fn mock_login(server: &mut ServerGuard) -> mockito::Mock {
    server
        .mock("POST", "/login")
        .match_body(Matcher::Json(json!({"username": "admin", "password": "secret"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_header("set-cookie", "csrftoken=csrf-abc; Path=/")
        .with_header("set-cookie", "sessionid=session-abc; Path=/; HttpOnly")
        .with_body(r#"{"success": "true"}"#)
        .create_async()
        .await
}

#[test_log::test(tokio::test)]
async fn test_get_with_session_headers() {
    let mut server = Server::new_async().await;
    let login = mock_login(&mut server).await;
    let get = server
        .mock("GET", "/api/techsupportmessage/techsupportmessage-1")
        .match_header("x-csrftoken", "csrf-abc")
        .match_header("x-avi-version", "18.2.6")
        .match_header("x-avi-tenant", "admin")
        .match_header("cookie", Matcher::Regex("sessionid=session-abc".to_string()))
        .with_status(200)
        .with_body(
            json!({
                "uuid": "techsupportmessage-1",
                "status": "Collecting",
                "_last_modified": "1714032123456789",
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = AviClient::connect(config(&server)).await.unwrap();
    let message: TechSupportMessage = client
        .tech_support_message()
        .get("techsupportmessage-1", &ApiOptions::default())
        .await
        .unwrap();
    assert_eq!(Some("Collecting"), message.status.as_deref());

    login.assert_async().await;
    get.assert_async().await;
}

#[test_log::test(tokio::test)]
async fn test_login_rejected() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/login")
        .with_status(401)
        .with_body(r#"{"error": "Invalid credentials"}"#)
        .create_async()
        .await;

    let err = AviSession::connect(config(&server)).await.unwrap_err();
    assert!(matches!(err, AviError::LoginFailed { status: 401, .. }));
    assert!(err.to_string().contains("Invalid credentials"));
}

#[test_log::test(tokio::test)]
async fn test_collection_pages() {
    let mut server = Server::new_async().await;
    mock_login(&mut server).await;
    let next = format!("{}/api/trustedhostprofile?page=2", server.url());
    let first = server
        .mock("GET", "/api/trustedhostprofile")
        .match_query(Matcher::UrlEncoded("include_name".into(), "true".into()))
        .with_body(
            json!({
                "count": 2,
                "results": [{"name": "a", "uuid": "thp-a"}],
                "next": next,
            })
            .to_string(),
        )
        .create_async()
        .await;
    let second = server
        .mock("GET", "/api/trustedhostprofile")
        .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
        .with_body(json!({"count": 2, "results": [{"name": "b", "uuid": "thp-b"}]}).to_string())
        .create_async()
        .await;

    let client = AviClient::connect(config(&server)).await.unwrap();
    let profiles: Vec<TrustedHostProfile> = client
        .trusted_host_profile()
        .get_all(&ApiOptions::new().with_include_name(true))
        .await
        .unwrap();
    let names: Vec<_> = profiles.iter().filter_map(|p| p.name.as_deref()).collect();
    assert_eq!(vec!["a", "b"], names);

    first.assert_async().await;
    second.assert_async().await;
}

#[test_log::test(tokio::test)]
async fn test_not_found() {
    let mut server = Server::new_async().await;
    mock_login(&mut server).await;
    server
        .mock("GET", "/api/trustedhostprofile/thp-gone")
        .with_status(404)
        .with_body(r#"{"error": "TrustedHostProfile object not found!"}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/api/trustedhostprofile")
        .match_query(Matcher::UrlEncoded("name".into(), "gone".into()))
        .with_body(r#"{"count": 0, "results": []}"#)
        .create_async()
        .await;

    let session = Arc::new(AviSession::connect(config(&server)).await.unwrap());
    let client = AviClient::from_session(session);
    let profiles = client.trusted_host_profile();

    let err = profiles.get("thp-gone", &ApiOptions::default()).await.unwrap_err();
    assert_eq!(Some(404), err.status());
    assert!(err.to_string().contains("TrustedHostProfile object not found!"));

    let err = profiles.get_by_name("gone", &ApiOptions::default()).await.unwrap_err();
    assert!(matches!(err, AviError::NotFound { .. }));
}

#[test_log::test(tokio::test)]
async fn test_patch_and_delete() {
    let mut server = Server::new_async().await;
    mock_login(&mut server).await;
    let patch = server
        .mock("PATCH", "/api/trustedhostprofile/thp-1")
        .match_header("x-avi-tenant", "*")
        .match_body(Matcher::Json(json!({"delete": {"hosts": [{"host": {"addr": "10.0.0.1", "type": "V4"}}]}})))
        .with_body(r#"{"name": "controllers", "uuid": "thp-1"}"#)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/api/trustedhostprofile/thp-1")
        .with_status(204)
        .create_async()
        .await;

    let client = AviClient::connect(config(&server)).await.unwrap();
    let options = ApiOptions::new().with_tenant("*");
    let removal = json!({"hosts": [{"host": {"addr": "10.0.0.1", "type": "V4"}}]});
    let _: Value = client
        .session()
        .patch("api/trustedhostprofile/thp-1", &removal, PatchOp::Delete, &options)
        .await
        .unwrap();
    client
        .trusted_host_profile()
        .delete("thp-1", &options)
        .await
        .unwrap();

    patch.assert_async().await;
    delete.assert_async().await;
}

#[test_log::test(tokio::test)]
async fn test_server_errors_are_retried() {
    let mut server = Server::new_async().await;
    mock_login(&mut server).await;
    let unavailable = server
        .mock("GET", "/api/upgradeprofile")
        .with_status(503)
        .expect(2)
        .create_async()
        .await;

    let session = AviSession::connect(config(&server)).await.unwrap();
    let err = session
        .get::<Value>("api/upgradeprofile", &ApiOptions::default())
        .await
        .unwrap_err();
    assert_eq!(Some(503), err.status());

    // one retry configured
    unavailable.assert_async().await;
}
