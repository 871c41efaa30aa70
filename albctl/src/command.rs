use std::{fmt, path::Path};

use alb_sdk::{ApiOptions, AviSession, PatchOp};
use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use futures::stream::{self, StreamExt};
use log::{error, info};
use serde_json::Value;
use tokio::fs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Json,
    Yaml,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }
}

/// How a single object is picked out on the command line.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Selector {
    Uuid(String),
    Name(String),
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Uuid(uuid) => write!(f, "with uuid {uuid}"),
            Selector::Name(name) => write!(f, "named '{name}'"),
        }
    }
}

pub(crate) fn render(value: &Value, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    })
}

fn object_path(object_type: &str, uuid: &str) -> String {
    format!("api/{object_type}/{uuid}")
}

/// Reads an object from a JSON or YAML file.
pub(crate) async fn load_object(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    // YAML is a superset of JSON, so one parser covers both
    let value: Value = serde_yaml::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    if !value.is_object() {
        bail!("{} does not contain an object", path.display());
    }
    Ok(value)
}

pub(crate) async fn list(
    session: &AviSession,
    object_type: &str,
    options: &ApiOptions,
) -> Result<Value> {
    let objects: Vec<Value> = session
        .get_collection(&format!("api/{object_type}"), options)
        .await
        .with_context(|| format!("failed to list {object_type} objects"))?;
    info!("found {} {object_type} objects", objects.len());
    Ok(Value::Array(objects))
}

pub(crate) async fn get(session: &AviSession, object_type: &str, selector: &Selector) -> Result<Value> {
    let options = ApiOptions::default();
    let object = match selector {
        Selector::Uuid(uuid) => session.get(&object_path(object_type, uuid), &options).await,
        Selector::Name(name) => session.get_object_by_name(object_type, name, &options).await,
    };
    object.with_context(|| format!("failed to fetch {object_type} {selector}"))
}

pub(crate) async fn create(session: &AviSession, object_type: &str, file: &Path) -> Result<Value> {
    let object = load_object(file).await?;
    session
        .post(&format!("api/{object_type}"), &object, &ApiOptions::default())
        .await
        .with_context(|| format!("failed to create {object_type} from {}", file.display()))
}

pub(crate) async fn update(session: &AviSession, object_type: &str, file: &Path) -> Result<Value> {
    let object = load_object(file).await?;
    let Some(uuid) = object.get("uuid").and_then(Value::as_str) else {
        bail!("{} has no uuid, use create for new objects", file.display());
    };
    session
        .put(&object_path(object_type, uuid), &object, &ApiOptions::default())
        .await
        .with_context(|| format!("failed to update {object_type} {uuid}"))
}

pub(crate) async fn patch(
    session: &AviSession,
    object_type: &str,
    uuid: &str,
    op: PatchOp,
    file: &Path,
) -> Result<Value> {
    let patch = load_object(file).await?;
    session
        .patch(&object_path(object_type, uuid), &patch, op, &ApiOptions::default())
        .await
        .with_context(|| format!("failed to {op} {object_type} {uuid}"))
}

pub(crate) async fn delete(session: &AviSession, object_type: &str, selector: &Selector) -> Result<()> {
    let uuid = match selector {
        Selector::Uuid(uuid) => uuid.clone(),
        Selector::Name(_) => {
            let object = get(session, object_type, selector).await?;
            match object.get("uuid").and_then(Value::as_str) {
                Some(uuid) => uuid.to_string(),
                None => bail!("{object_type} {selector} has no uuid"),
            }
        }
    };
    session
        .delete(&object_path(object_type, &uuid))
        .await
        .with_context(|| format!("failed to delete {object_type} {uuid}"))?;
    info!("deleted {object_type} {uuid}");
    Ok(())
}

async fn export_one(
    session: &AviSession,
    object_type: &str,
    output_dir: &Path,
    format: OutputFormat,
) -> Result<usize> {
    let objects = list(session, object_type, &ApiOptions::default()).await?;
    let count = objects.as_array().map_or(0, Vec::len);
    let path = output_dir.join(format!("{object_type}.{}", format.extension()));
    fs::write(&path, render(&objects, format)?)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(count)
}

/// Writes every object of each type into `<output_dir>/<type>.<ext>`,
/// fetching up to `concurrency` collections at once.
pub(crate) async fn export(
    session: &AviSession,
    object_types: &[String],
    concurrency: usize,
    output_dir: &Path,
    format: OutputFormat,
) -> Result<()> {
    fs::create_dir_all(output_dir)
        .await
        .with_context(|| format!("failed to create directory {}", output_dir.display()))?;

    let results = stream::iter(object_types)
        .map(|object_type| async move {
            let result = export_one(session, object_type, output_dir, format).await;
            (object_type, result)
        })
        .buffer_unordered(concurrency.max(1))
        .collect::<Vec<_>>()
        .await;

    let mut failed = 0;
    for (object_type, result) in results {
        match result {
            Ok(count) => info!("exported {count} {object_type} objects"),
            Err(e) => {
                error!("{e:#}");
                failed += 1;
            }
        }
    }
    if failed > 0 {
        bail!("{failed} of {} exports failed", object_types.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alb_sdk::SessionConfig;
    use mockito::{Matcher, Server, ServerGuard};
    use serde_json::json;
    use std::time::Duration;

    async fn session(server: &mut ServerGuard) -> AviSession {
        server
            .mock("POST", "/login")
            .with_header("set-cookie", "csrftoken=csrf-1; Path=/")
            .with_header("set-cookie", "sessionid=session-1; Path=/")
            .with_body(r#"{"success": "true"}"#)
            .create_async()
            .await;
        let config = SessionConfig::new(server.url())
            .with_password("secret")
            .with_max_retries(0)
            .with_retry_delay(Duration::from_millis(1));
        AviSession::new(config).unwrap()
    }

    #[test]
    fn test_render() {
        let value = json!({"name": "vs-1", "enabled": true});
        let yaml = render(&value, OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("name: vs-1"));
        assert!(yaml.contains("enabled: true"));

        let json = render(&value, OutputFormat::Json).unwrap();
        assert_eq!(value, serde_json::from_str::<Value>(&json).unwrap());
    }

    #[test_log::test(tokio::test)]
    async fn test_load_object() {
        let dir = tempfile::tempdir().unwrap();
        let yaml = dir.path().join("profile.yaml");
        std::fs::write(&yaml, "name: controllers\nhosts:\n  - host:\n      addr: 10.0.0.1\n      type: V4\n").unwrap();
        assert_eq!(
            json!({"name": "controllers", "hosts": [{"host": {"addr": "10.0.0.1", "type": "V4"}}]}),
            load_object(&yaml).await.unwrap()
        );

        let json_file = dir.path().join("profile.json");
        std::fs::write(&json_file, r#"{"name": "controllers"}"#).unwrap();
        assert_eq!(json!({"name": "controllers"}), load_object(&json_file).await.unwrap());

        let list = dir.path().join("list.json");
        std::fs::write(&list, "[1, 2]").unwrap();
        assert!(load_object(&list).await.is_err());
        assert!(load_object(&dir.path().join("missing.json")).await.is_err());
    }

    #[test_log::test(tokio::test)]
    async fn test_update_requires_uuid() {
        let mut server = Server::new_async().await;
        let session = session(&mut server).await;
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("profile.json");
        std::fs::write(&file, r#"{"name": "controllers"}"#).unwrap();

        let err = update(&session, "trustedhostprofile", &file).await.unwrap_err();
        assert!(err.to_string().contains("has no uuid"));
    }

    #[test_log::test(tokio::test)]
    async fn test_delete_by_name() {
        let mut server = Server::new_async().await;
        let session = session(&mut server).await;
        server
            .mock("GET", "/api/techsupportprofile")
            .match_query(Matcher::UrlEncoded("name".into(), "default".into()))
            .with_body(r#"{"count": 1, "results": [{"uuid": "tsp-1"}]}"#)
            .create_async()
            .await;
        let delete_mock = server
            .mock("DELETE", "/api/techsupportprofile/tsp-1")
            .with_status(204)
            .create_async()
            .await;

        delete(&session, "techsupportprofile", &Selector::Name("default".to_string()))
            .await
            .unwrap();
        delete_mock.assert_async().await;
    }

    #[test_log::test(tokio::test)]
    async fn test_export() {
        let mut server = Server::new_async().await;
        let session = session(&mut server).await;
        server
            .mock("GET", "/api/gslbsmruntime")
            .with_body(r#"{"count": 1, "results": [{"name": "gslb-1", "uuid": "gslbsmruntime-1"}]}"#)
            .create_async()
            .await;
        server
            .mock("GET", "/api/report")
            .with_body(r#"{"count": 0, "results": []}"#)
            .create_async()
            .await;

        let dir = tempfile::tempdir().unwrap();
        let object_types = vec!["gslbsmruntime".to_string(), "report".to_string()];
        export(&session, &object_types, 2, dir.path(), OutputFormat::Json)
            .await
            .unwrap();

        let exported: Value =
            serde_json::from_str(&std::fs::read_to_string(dir.path().join("gslbsmruntime.json")).unwrap())
                .unwrap();
        assert_eq!(json!([{"name": "gslb-1", "uuid": "gslbsmruntime-1"}]), exported);
        assert!(dir.path().join("report.json").exists());
    }

    #[test_log::test(tokio::test)]
    async fn test_export_reports_failures() {
        let mut server = Server::new_async().await;
        let session = session(&mut server).await;
        server
            .mock("GET", "/api/report")
            .with_body(r#"{"count": 0, "results": []}"#)
            .create_async()
            .await;

        // everything else is answered with mockito's default 501
        let dir = tempfile::tempdir().unwrap();
        let object_types = vec!["report".to_string(), "nosuchtype".to_string()];
        let err = export(&session, &object_types, 1, dir.path(), OutputFormat::Yaml)
            .await
            .unwrap_err();
        assert_eq!("1 of 2 exports failed", err.to_string());
        assert!(dir.path().join("report.yaml").exists());
    }
}
