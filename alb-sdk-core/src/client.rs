//! Typed clients for controller objects.

use std::{marker::PhantomData, sync::Arc};

use alb_sdk_model::{
    AviObject,
    admin::{
        LocalWorkerFdsVersion, TechSupport, TechSupportMessage, TechSupportProfile, UpgradeProfile,
    },
    analytics::{Report, ReportProfile, RetentionPolicy},
    application::ApplicationInsightsPolicy,
    gslb::{GslbCrmRuntime, GslbHsmRuntime, GslbSmRuntime},
    security::{
        ApiRateLimitProfile, PositiveSecurityPolicy, RateLimitConfiguration, TrustedHostProfile,
    },
};
use log::debug;
use serde::Serialize;

use crate::config::SessionConfig;
use crate::error::{AviError, AviResult};
use crate::options::ApiOptions;
use crate::session::{AviSession, PatchOp};

/// CRUD operations on one object type, e.g. `ResourceClient<TrustedHostProfile>`
/// for everything under `/api/trustedhostprofile`.
pub struct ResourceClient<T> {
    session: Arc<AviSession>,
    _object: PhantomData<fn() -> T>,
}

impl<T> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            session: self.session.clone(),
            _object: PhantomData,
        }
    }
}

impl<T: AviObject> ResourceClient<T> {
    pub fn new(session: Arc<AviSession>) -> Self {
        Self {
            session,
            _object: PhantomData,
        }
    }

    pub fn session(&self) -> &Arc<AviSession> {
        &self.session
    }

    fn check_required(obj: &T) -> AviResult<()> {
        let fields = obj.missing_required();
        if fields.is_empty() {
            Ok(())
        } else {
            Err(AviError::MissingRequired {
                object_type: T::OBJECT_TYPE.to_string(),
                fields,
            })
        }
    }

    /// All objects of this type, across all pages.
    pub async fn get_all(&self, options: &ApiOptions) -> AviResult<Vec<T>> {
        self.session
            .get_collection(&T::api_path(None), options)
            .await
    }

    pub async fn get(&self, uuid: &str, options: &ApiOptions) -> AviResult<T> {
        self.session.get(&T::api_path(Some(uuid)), options).await
    }

    pub async fn get_by_name(&self, name: &str, options: &ApiOptions) -> AviResult<T> {
        self.session
            .get_object_by_name(T::OBJECT_TYPE, name, options)
            .await
    }

    /// First object matching the filters in `options`.
    pub async fn get_object(&self, options: &ApiOptions) -> AviResult<T> {
        self.session.get_object(T::OBJECT_TYPE, options).await
    }

    /// Creates the object and returns it as stored by the controller.
    pub async fn create(&self, obj: &T, options: &ApiOptions) -> AviResult<T> {
        Self::check_required(obj)?;
        let created: T = self.session.post(&T::api_path(None), obj, options).await?;
        debug!(
            "created {} {}",
            T::OBJECT_TYPE,
            created.uuid().unwrap_or_default()
        );
        Ok(created)
    }

    /// Replaces the object with the same uuid.
    pub async fn update(&self, obj: &T, options: &ApiOptions) -> AviResult<T> {
        let uuid = obj
            .uuid()
            .filter(|uuid| !uuid.is_empty())
            .ok_or_else(|| AviError::MissingUuid {
                object_type: T::OBJECT_TYPE.to_string(),
            })?;
        Self::check_required(obj)?;
        self.session.put(&T::api_path(Some(uuid)), obj, options).await
    }

    /// Applies a partial update, e.g. `{"hosts": [...]}` with [PatchOp::Add].
    pub async fn patch<P>(
        &self,
        uuid: &str,
        patch: &P,
        op: PatchOp,
        options: &ApiOptions,
    ) -> AviResult<T>
    where
        P: Serialize + ?Sized,
    {
        self.session
            .patch(&T::api_path(Some(uuid)), patch, op, options)
            .await
    }

    pub async fn delete(&self, uuid: &str, options: &ApiOptions) -> AviResult<()> {
        self.session
            .delete_object(&T::api_path(Some(uuid)), options)
            .await
    }

    pub async fn delete_by_name(&self, name: &str, options: &ApiOptions) -> AviResult<()> {
        let obj = self.get_by_name(name, options).await?;
        let uuid = obj.uuid().ok_or_else(|| AviError::MissingUuid {
            object_type: T::OBJECT_TYPE.to_string(),
        })?;
        self.delete(uuid, options).await
    }
}

macro_rules! resource_clients {
    ($($(#[$doc:meta])* $method:ident => $object:ty,)*) => {
        impl AviClient {
            $(
                $(#[$doc])*
                pub fn $method(&self) -> ResourceClient<$object> {
                    self.resource()
                }
            )*
        }
    };
}

/// Entry point of the SDK: a shared session plus typed clients for its objects.
///
/// ```no_run
/// # async fn run() -> alb_sdk_core::AviResult<()> {
/// use alb_sdk_core::{ApiOptions, AviClient, SessionConfig};
///
/// let client = AviClient::connect(SessionConfig::from_env()?).await?;
/// for profile in client.trusted_host_profile().get_all(&ApiOptions::default()).await? {
///     println!("{:?}", profile.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AviClient {
    session: Arc<AviSession>,
}

impl AviClient {
    /// Creates a session with the given configuration and logs in.
    pub async fn connect(config: SessionConfig) -> AviResult<Self> {
        let session = AviSession::connect(config).await?;
        Ok(Self::from_session(Arc::new(session)))
    }

    pub fn from_session(session: Arc<AviSession>) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Arc<AviSession> {
        &self.session
    }

    /// Client for any object type.
    pub fn resource<T: AviObject>(&self) -> ResourceClient<T> {
        ResourceClient::new(self.session.clone())
    }
}

resource_clients! {
    api_rate_limit_profile => ApiRateLimitProfile,
    application_insights_policy => ApplicationInsightsPolicy,
    /// Runtime of the GSLB cloud resource manager.
    gslb_crm_runtime => GslbCrmRuntime,
    /// Runtime of the GSLB health monitor service.
    gslb_hsm_runtime => GslbHsmRuntime,
    /// Runtime of the GSLB service manager.
    gslb_sm_runtime => GslbSmRuntime,
    local_worker_fds_version => LocalWorkerFdsVersion,
    positive_security_policy => PositiveSecurityPolicy,
    rate_limit_configuration => RateLimitConfiguration,
    report => Report,
    report_profile => ReportProfile,
    retention_policy => RetentionPolicy,
    tech_support => TechSupport,
    tech_support_message => TechSupportMessage,
    tech_support_profile => TechSupportProfile,
    trusted_host_profile => TrustedHostProfile,
    upgrade_profile => UpgradeProfile,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::testing::*;
    use alb_sdk_model::{Validate, common::TrustedHost};
    use serde_json::json;
    use std::time::Duration;

    fn client(transport: &FakeTransport) -> AviClient {
        let config = SessionConfig::new("10.10.10.10")
            .with_password("secret")
            .with_retry_delay(Duration::from_millis(1));
        let session = AviSession::with_transport(config, transport.clone()).unwrap();
        AviClient::from_session(Arc::new(session))
    }

    fn profile() -> TrustedHostProfile {
        let mut host = TrustedHost::default();
        host.insert("host".to_string(), json!({"addr": "10.0.0.1", "type": "V4"}));
        TrustedHostProfile {
            name: Some("controllers".to_string()),
            hosts: vec![host],
            ..Default::default()
        }
    }

    #[test]
    fn test_named_clients_hit_their_collections() {
        fn path<T: AviObject>(_: ResourceClient<T>) -> String {
            T::api_path(None)
        }
        let client = client(&FakeTransport::new());
        assert_eq!("api/apiratelimitprofile", path(client.api_rate_limit_profile()));
        assert_eq!("api/gslbcrmruntime", path(client.gslb_crm_runtime()));
        assert_eq!("api/gslbhsmruntime", path(client.gslb_hsm_runtime()));
        assert_eq!("api/localworkerfdsversion", path(client.local_worker_fds_version()));
        assert_eq!("api/report", path(client.report()));
        assert_eq!("api/techsupportmessage", path(client.tech_support_message()));
        assert_eq!("api/upgradeprofile", path(client.upgrade_profile()));
    }

    #[test_log::test(tokio::test)]
    async fn test_create() {
        let transport = FakeTransport::logged_in().with_response(
            "POST",
            "/api/trustedhostprofile",
            CannedResponse::ok(json!({
                "name": "controllers",
                "hosts": [{"host": {"addr": "10.0.0.1", "type": "V4"}}],
                "uuid": "trustedhostprofile-1",
                "url": "https://10.10.10.10/api/trustedhostprofile/trustedhostprofile-1",
            })),
        );
        let client = client(&transport);
        let created = client
            .trusted_host_profile()
            .create(&profile(), &ApiOptions::default())
            .await
            .unwrap();
        assert_eq!(Some("trustedhostprofile-1"), created.uuid.as_deref());

        let request = &transport.requests_to("/api/trustedhostprofile")[0];
        assert_eq!(serde_json::to_value(profile()).unwrap(), request.body);
    }

    #[test_log::test(tokio::test)]
    async fn test_create_checks_required_fields() {
        let transport = FakeTransport::logged_in();
        let client = client(&transport);
        let incomplete = TrustedHostProfile {
            name: Some("controllers".to_string()),
            ..Default::default()
        };
        assert!(!incomplete.is_complete());

        let err = client
            .trusted_host_profile()
            .create(&incomplete, &ApiOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AviError::MissingRequired { ref fields, .. } if fields == &["hosts"]));
        // nothing was sent, not even a login
        assert!(transport.requests().is_empty());
    }

    #[test_log::test(tokio::test)]
    async fn test_update() {
        let transport = FakeTransport::logged_in().with_response(
            "PUT",
            "/api/trustedhostprofile/trustedhostprofile-1",
            CannedResponse::ok(json!({"name": "controllers", "uuid": "trustedhostprofile-1"})),
        );
        let client = client(&transport);

        let err = client
            .trusted_host_profile()
            .update(&profile(), &ApiOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AviError::MissingUuid { .. }));

        let mut profile = profile();
        profile.uuid = Some("trustedhostprofile-1".to_string());
        client
            .trusted_host_profile()
            .update(&profile, &ApiOptions::default())
            .await
            .unwrap();
        assert_eq!(1, transport.requests_to("/api/trustedhostprofile/").len());
    }

    #[test_log::test(tokio::test)]
    async fn test_get_all_and_get() {
        let transport = FakeTransport::logged_in()
            .with_response(
                "GET",
                "/api/apiratelimitprofile",
                CannedResponse::ok(json!({
                    "count": 1,
                    "results": [{"name": "default", "uuid": "arlp-1"}],
                })),
            )
            .with_response(
                "GET",
                "/api/apiratelimitprofile/arlp-1",
                CannedResponse::ok(json!({"name": "default", "uuid": "arlp-1"})),
            );
        let client = client(&transport);
        let profiles = client
            .api_rate_limit_profile()
            .get_all(&ApiOptions::default())
            .await
            .unwrap();
        assert_eq!(1, profiles.len());
        assert_eq!(Some("default"), profiles[0].name.as_deref());

        let profile = client
            .api_rate_limit_profile()
            .get("arlp-1", &ApiOptions::default())
            .await
            .unwrap();
        assert_eq!(profiles[0], profile);
    }

    #[test_log::test(tokio::test)]
    async fn test_delete_by_name() {
        let transport = FakeTransport::logged_in()
            .with_response(
                "GET",
                "/api/retentionpolicy?name=weekly",
                CannedResponse::ok(json!({"count": 1, "results": [{"name": "weekly", "uuid": "rp-7"}]})),
            )
            .with_response("DELETE", "/api/retentionpolicy/rp-7", CannedResponse::ok(json!(null)));
        let client = client(&transport);
        client
            .retention_policy()
            .delete_by_name("weekly", &ApiOptions::default())
            .await
            .unwrap();
        let deletes: Vec<_> = transport
            .requests()
            .into_iter()
            .filter(|r| r.method == http::Method::DELETE)
            .collect();
        assert_eq!(1, deletes.len());
        assert_eq!("https://10.10.10.10/api/retentionpolicy/rp-7", deletes[0].uri);
    }

    #[test_log::test(tokio::test)]
    async fn test_patch() {
        let transport = FakeTransport::logged_in().with_response(
            "PATCH",
            "/api/retentionpolicy/rp-1",
            CannedResponse::ok(json!({"uuid": "rp-1", "name": "rp"})),
        );
        let client = client(&transport);
        let policy = client
            .retention_policy()
            .patch("rp-1", &json!({"name": "rp"}), PatchOp::Replace, &ApiOptions::default())
            .await
            .unwrap();
        assert_eq!(Some("rp"), policy.name.as_deref());
        assert_eq!(
            json!({"replace": {"name": "rp"}}),
            transport.requests_to("/api/retentionpolicy")[0].body
        );
    }
}
