//! Pools, servers and health monitoring.

use alb_sdk_macro::{AviObject, Validate};
use serde::{Deserialize, Serialize};

use crate::admin::OperationalStatus;
use crate::common::{
    ConfigPbAttributes, DiscoveredNetwork, FailActionHttpLocalResponse, GeoLocation,
    HealthMonitorSslAttributes, HealthScoreEntity, HorizonProfile, Http2PoolProperties,
    HttpReselectRespCode, IpAddr, KeyValue, NetworkFilter, PlacementNetwork,
    PoolAnalyticsPolicy, RoleFilterMatchLabel, ShmSummary, SpGslbServiceInfo,
};
use crate::gslb::GslbServiceSrvRdata;
use crate::security::{PgDeploymentRuleResult, RateProfile};
use crate::serde_util::null_as_default;
use crate::virtual_service::ScheduledScaling;

/// Conn pool properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ConnPoolProperties {
    /// Connection idle timeout. Allowed values are 0-86400000. Special values are 0- Infinite idle
    /// time.. Field introduced in 18.2.1. Unit is MILLISECONDS. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials (Allowed values-
    /// 60000), Basic (Allowed values- 60000) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_connpool_conn_idle_tmo: Option<u32>,
    /// Connection life timeout. Allowed values are 0-86400000. Special values are 0- Infinite life
    /// time.. Field introduced in 18.2.1. Unit is MILLISECONDS. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials (Allowed values-
    /// 600000), Basic (Allowed values- 600000) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_connpool_conn_life_tmo: Option<u32>,
    /// Maximum number of times a connection can be reused. Special values are 0- unlimited. Field
    /// introduced in 18.2.1. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition. Allowed in Essentials (Allowed values- 0), Basic (Allowed values- 0) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_connpool_conn_max_reuse: Option<u32>,
    /// Maximum number of connections a server can cache. Special values are 0- unlimited. Field
    /// introduced in 18.2.1. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_connpool_server_max_cache: Option<u32>,
}

/// Connpool filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ConnpoolFilter {
    /// Backend or SE IP address. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_addr: Option<String>,
    /// Backend or SE IP address mask. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_mask: Option<String>,
    /// Backend or SE port. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    /// cache type. Enum options - CP_ALL, CP_FREE, CP_BIND, CP_CACHED. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}

/// Fail action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct FailAction {
    /// Local response to HTTP requests when pool experiences a failure. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub local_rsp: Option<FailActionHttpLocalResponse>,
    /// URL to redirect HTTP requests to when pool experiences a failure. Allowed with any value in
    /// Enterprise, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub redirect: Option<FailActionHttpRedirect>,
    /// Enables a response to client when pool experiences a failure. By default TCP connection is
    /// closed. Enum options - FAIL_ACTION_HTTP_REDIRECT, FAIL_ACTION_HTTP_LOCAL_RSP,
    /// FAIL_ACTION_CLOSE_CONN, FAIL_ACTION_BACKUP_POOL. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition. Allowed in Essentials (Allowed values-
    /// FAIL_ACTION_CLOSE_CONN), Basic (Allowed values-
    /// FAIL_ACTION_CLOSE_CONN,FAIL_ACTION_HTTP_REDIRECT) edition.
    ///
    /// Required.
    #[avi(required)]
    pub r#type: Option<String>,
}

/// Fail action HTTP redirect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct FailActionHttpRedirect {
    /// The host to which the redirect request is sent.
    ///
    /// Required.
    #[avi(required)]
    pub host: Option<String>,
    /// Path configuration for the redirect request. If not set the path from the original request's
    /// URI is preserved in the redirect on pool failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Enum options - HTTP, HTTPS. Allowed in Basic(Allowed values- HTTP) edition, Enterprise
    /// edition. Special default for Basic edition is HTTP, Enterprise is HTTPS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    /// Query configuration for the redirect request URI. If not set, the query from the original
    /// request's URI is preserved in the redirect on pool failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Enum options - HTTP_REDIRECT_STATUS_CODE_301, HTTP_REDIRECT_STATUS_CODE_302,
    /// HTTP_REDIRECT_STATUS_CODE_307. Allowed in Basic(Allowed values-
    /// HTTP_REDIRECT_STATUS_CODE_302) edition, Enterprise edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<String>,
}

/// Health monitor HTTP.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct HealthMonitorHttp {
    /// Type of the authentication method. Enum options - AUTH_BASIC, AUTH_NTLM. Field introduced in
    /// 20.1.1. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<String>,
    /// Use the exact http_request *string as specified by user, without any automatic insert of
    /// headers like Host header. Field introduced in 17.1.6,17.2.2. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact_http_request: Option<bool>,
    /// For HTTP2 and HTTP2S health monitor, send an HTTP request to the server. Extended with
    /// additional headers or information when exact request is marked false. For instance Host
    /// www.site.com Connection Close. Field introduced in 31.1.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub http_headers: Vec<String>,
    /// HTTP method for HTTP2 and HTTP2S health monitor. Enum options - HTTP_METHOD_GET,
    /// HTTP_METHOD_HEAD, HTTP_METHOD_PUT, HTTP_METHOD_DELETE, HTTP_METHOD_POST,
    /// HTTP_METHOD_OPTIONS, HTTP_METHOD_TRACE, HTTP_METHOD_CONNECT, HTTP_METHOD_PATCH,
    /// HTTP_METHOD_PROPFIND, HTTP_METHOD_PROPPATCH, HTTP_METHOD_MKCOL, HTTP_METHOD_COPY,
    /// HTTP_METHOD_MOVE, HTTP_METHOD_LOCK, HTTP_METHOD_UNLOCK. Field introduced in 31.1.1. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials
    /// (Allowed values- HTTP_METHOD_GET,HTTP_METHOD_POST,HTTP_METHOD_HEAD), Basic (Allowed values-
    /// HTTP_METHOD_GET,HTTP_METHOD_POST,HTTP_METHOD_HEAD) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_method: Option<String>,
    /// Send an HTTP request to the server. The default GET / HTTP/1.0 may be extended with
    /// additional headers or information. For instance, GET /index.htm HTTP/1.1 Host www.site.com
    /// Connection Close. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_request: Option<String>,
    /// HTTP request body. Field introduced in 20.1.1. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_request_body: Option<String>,
    /// HTTP client request header path for HTTP2 and HTTP2S health monitor. Field introduced in
    /// 31.1.1. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_request_header_path: Option<String>,
    /// Match for a keyword in the first 2Kb of the server header and body response. Allowed with
    /// any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_response: Option<String>,
    /// List of HTTP response codes to match as successful. Default is 2xx. Enum options - HTTP_ANY,
    /// HTTP_1XX, HTTP_2XX, HTTP_3XX, HTTP_4XX, HTTP_5XX. Minimum of 1 items required. Allowed with
    /// any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub http_response_code: Vec<String>,
    /// Match or look for this HTTP response code indicating server maintenance. A successful match
    /// results in the server being marked down. Allowed values are 101-599. Maximum of 4 items
    /// allowed. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub maintenance_code: Vec<i64>,
    /// Match or look for this keyword in the first 2KB of server header and body response
    /// indicating server maintenance. A successful match results in the server being marked down.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_response: Option<String>,
    /// Expected http/https response page size. Allowed values are 2048-16384. Field introduced in
    /// 20.1.1. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_size: Option<u32>,
    /// SSL attributes for HTTPS health monitor. Field introduced in 17.1.1. Allowed with any value
    /// in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub ssl_attributes: Option<HealthMonitorSslAttributes>,
}

/// Httpserver reselect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct HttpserverReselect {
    /// Enable HTTP request reselect when server responds with specific response codes. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials
    /// (Allowed values- false), Basic (Allowed values- false) edition.
    ///
    /// Required.
    #[avi(required)]
    pub enabled: Option<bool>,
    /// Number of times to retry an HTTP request when server responds with configured status codes.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_retries: Option<u32>,
    /// Allow retry of non-idempotent HTTP requests. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_nonidempotent: Option<bool>,
    /// Timeout per retry attempt, for a given request. Value of 0 indicates default timeout.
    /// Allowed values are 0-3600000. Field introduced in 18.1.5,18.2.1. Unit is MILLISECONDS.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_timeout: Option<u32>,
    /// Server response codes which will trigger an HTTP request retry. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub svr_resp_code: Option<HttpReselectRespCode>,
}

/// Micro service group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct MicroServiceGroup {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Protobuf versioning for config pbs. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    /// Creator name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    /// User defined description for the object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Name of the MicroService group.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// Configure MicroService(es). It is a reference to an object of type MicroService.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub service_refs: Vec<String>,
    /// It is a reference to an object of type Tenant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// UUID of the MicroService group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Persistence filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PersistenceFilter {
    /// Persistence cookie. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistence_cookie: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub persistence_end_ip: Option<IpAddr>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub persistence_ip: Option<IpAddr>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistence_mask: Option<i32>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub server_end_ip: Option<IpAddr>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub server_ip: Option<IpAddr>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_mask: Option<i32>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_port: Option<i32>,
}

/// Pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct Pool {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Determines analytics settings for the pool. Field introduced in 18.1.5, 18.2.1. Allowed with
    /// any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub analytics_policy: Option<PoolAnalyticsPolicy>,
    /// Specifies settings related to analytics. It is a reference to an object of type
    /// AnalyticsProfile. Field introduced in 18.1.4,18.2.1. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics_profile_ref: Option<String>,
    /// Allows the option to append port to hostname in the host header while sending a request to
    /// the server. By default, port is appended for non-default ports. This setting will apply for
    /// Pool's 'Rewrite Host Header to Server Name', 'Rewrite Host Header to SNI' features and
    /// Server's 'Rewrite Host Header' settings as well as HTTP healthmonitors attached to pools.
    /// Enum options - NON_DEFAULT_80_443, NEVER, ALWAYS. Field introduced in 21.1.1. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials
    /// (Allowed values- NEVER), Basic (Allowed values- NEVER) edition. Special default for
    /// Essentials edition is NEVER, Basic edition is NEVER, Enterprise edition is
    /// NON_DEFAULT_80_443.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub append_port: Option<String>,
    /// Persistence will ensure the same user sticks to the same server for a desired duration of
    /// time. It is a reference to an object of type ApplicationPersistenceProfile. Allowed with any
    /// value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_persistence_profile_ref: Option<String>,
    /// If configured then Avi will trigger orchestration of pool server creation and deletion. It
    /// is a reference to an object of type AutoScaleLaunchConfig. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoscale_launch_config_ref: Option<String>,
    /// Network Ids for the launch configuration. Allowed with any value in Enterprise, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub autoscale_networks: Vec<String>,
    /// Reference to Server Autoscale Policy. It is a reference to an object of type
    /// ServerAutoScalePolicy. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoscale_policy_ref: Option<String>,
    /// Inline estimation of capacity of servers. Allowed with any value in Enterprise, Enterprise
    /// with Cloud Services edition. Allowed in Essentials (Allowed values- false), Basic (Allowed
    /// values- false) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_estimation: Option<bool>,
    /// The maximum time-to-first-byte of a server. Allowed values are 1-5000. Special values are 0
    /// - Automatic. Unit is MILLISECONDS. Allowed with any value in Enterprise, Enterprise with
    /// Cloud Services edition. Allowed in Essentials (Allowed values- 0), Basic (Allowed values- 0)
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_estimation_ttfb_thresh: Option<u32>,
    /// Checksum of cloud configuration for Pool. Internally set by cloud connector. Allowed with
    /// any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_config_cksum: Option<String>,
    /// It is a reference to an object of type Cloud. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_ref: Option<String>,
    /// Protobuf versioning for config pbs. Field introduced in 21.1.1. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    /// Connnection pool properties. Field introduced in 18.2.1. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub conn_pool_properties: Option<ConnPoolProperties>,
    /// Duration for which new connections will be gradually ramped up to a server recently brought
    /// online. Useful for LB algorithms that are least connection based. Allowed values are 1-300.
    /// Special values are 0 - Immediate. Unit is MIN. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition. Allowed in Essentials (Allowed values- 0), Basic
    /// (Allowed values- 0) edition. Special default for Essentials edition is 0, Basic edition is
    /// 0, Enterprise edition is 10.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_ramp_duration: Option<i32>,
    /// Creator name. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    /// Traffic sent to servers will use this destination server port unless overridden by the
    /// server's specific port attribute. The SSL checkbox enables Avi to server encryption. Allowed
    /// values are 1-65535. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_server_port: Option<i32>,
    /// Indicates whether existing IPs are disabled(false) or deleted(true) on dns hostname
    /// refreshDetail -- On a dns refresh, some IPs set on pool may no longer be returned by the
    /// resolver. These IPs are deleted from the pool when this knob is set to true. They are
    /// disabled, if the knob is set to false. Field introduced in 18.2.3. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials (Allowed values-
    /// true), Basic (Allowed values- true) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_server_on_dns_refresh: Option<bool>,
    /// A description of the pool. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Comma separated list of domain names which will be used to verify the common names or
    /// subject alternative names presented by server certificates. It is performed only when common
    /// name check host_check_enabled is enabled. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub domain_name: Vec<String>,
    /// Inherited config from VirtualService. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub east_west: Option<bool>,
    /// Enable HTTP/2 for traffic from VirtualService to all backend servers in this pool. Field
    /// introduced in 20.1.1. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition. Allowed in Essentials (Allowed values- false), Basic (Allowed values- false)
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_http2: Option<bool>,
    /// Enable or disable the pool. Disabling will terminate all open connections and pause health
    /// monitors. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Names of external auto-scale groups for pool servers. Currently available only for AWS and
    /// Azure. Field introduced in 17.1.2. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub external_autoscale_groups: Vec<String>,
    /// Enable an action - Close Connection, HTTP Redirect or Local HTTP Response - when a pool
    /// failure happens. By default, a connection will be closed, in case the pool experiences a
    /// failure. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub fail_action: Option<FailAction>,
    /// Periodicity of feedback for fewest tasks server selection algorithm. Allowed values are
    /// 1-300. Unit is SEC. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fewest_tasks_feedback_delay: Option<u32>,
    /// Used to gracefully disable a server. Deprecated from version 31.2.1. Please use
    /// graceful_disable_timeout_sec instead. Allowed values are 1-7200. Special values are 0 -
    /// Immediate, -1 - Infinite. Field deprecated in 31.2.1. Unit is MIN. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graceful_disable_timeout: Option<i32>,
    /// Used to gracefully disable a server. Virtual service waits for the specified time before
    /// terminating the existing connections to the servers that are disabled. Allowed values are
    /// 1-432000. Special values are 0 - Immediate, -1 - Infinite. Field introduced in 31.2.1. Unit
    /// is SEC. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graceful_disable_timeout_sec: Option<i32>,
    /// Time interval for gracefully closing the connections on server, When health monitoring marks
    /// the server down. Allowed values are 1-432000. Special values are 0 - Immediate, -1 -
    /// Infinite. Field introduced in 30.2.1. Unit is SEC. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graceful_hm_down_disable_timeout: Option<i32>,
    /// Specifies the pool type (GENERIC/PRIVATE/PUBLIC). The public IPs of the members can be
    /// specified in seperate pool of type PUBLIC.This would allow features like health monitoring
    /// to be enabled independantly for the public IPs.This is only applicable for GSLB pools. Enum
    /// options - GSLB_POOL_TYPE_GENERIC, GSLB_POOL_TYPE_PRIVATE, GSLB_POOL_TYPE_PUBLIC. Field
    /// introduced in 31.2.1. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gslb_pool_type: Option<String>,
    /// Indicates if the pool is a site-persistence pool. . Field introduced in 17.2.1. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition.
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gslb_sp_enabled: Option<bool>,
    /// Verify server health by applying one or more health monitors. Active monitors generate
    /// synthetic traffic from each Service Engine and mark a server up or down based on the
    /// response. The Passive monitor listens only to client to server communication. It raises or
    /// lowers the ratio of traffic destined to a server based on successful responses. It is a
    /// reference to an object of type HealthMonitor. Maximum of 50 items allowed. Allowed with any
    /// value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub health_monitor_refs: Vec<String>,
    /// Horizon UAG configuration. Field introduced in 21.1.3. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub horizon_profile: Option<HorizonProfile>,
    /// Enable common name check for server certificate. If enabled and no explicit domain name is
    /// specified, Avi will use the incoming host header to do the match. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_check_enabled: Option<bool>,
    /// HTTP2 pool properties. Field introduced in 21.1.1. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub http2_properties: Option<Http2PoolProperties>,
    /// Ignore the server port in building the load balancing state.Applicable only for consistent
    /// hash load balancing algorithm or Disable Port translation (use_service_port) use cases.
    /// Field introduced in 20.1.1. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_server_port: Option<bool>,
    /// The Passive monitor will monitor client to server connections and requests and adjust
    /// traffic load to servers based on successful responses. This may alter the expected behavior
    /// of the LB method, such as Round Robin. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_health_monitor: Option<bool>,
    /// Use list of servers from Ip Address Group. It is a reference to an object of type
    /// IpAddrGroup. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipaddrgroup_ref: Option<String>,
    /// Do load balancing at SE level instead of the default per core load balancing. Field
    /// introduced in 21.1.5, 22.1.3. Allowed with any value in Enterprise, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lb_algo_rr_per_se: Option<bool>,
    /// The load balancing algorithm will pick a server within the pool's list of available servers.
    /// Values LB_ALGORITHM_NEAREST_SERVER and LB_ALGORITHM_TOPOLOGY are only allowed for GSLB pool.
    /// Enum options - LB_ALGORITHM_LEAST_CONNECTIONS, LB_ALGORITHM_ROUND_ROBIN,
    /// LB_ALGORITHM_FASTEST_RESPONSE, LB_ALGORITHM_CONSISTENT_HASH, LB_ALGORITHM_LEAST_LOAD,
    /// LB_ALGORITHM_FEWEST_SERVERS, LB_ALGORITHM_RANDOM, LB_ALGORITHM_FEWEST_TASKS,
    /// LB_ALGORITHM_NEAREST_SERVER, LB_ALGORITHM_CORE_AFFINITY, LB_ALGORITHM_TOPOLOGY. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials
    /// (Allowed values-
    /// LB_ALGORITHM_LEAST_CONNECTIONS,LB_ALGORITHM_ROUND_ROBIN,LB_ALGORITHM_CONSISTENT_HASH), Basic
    /// (Allowed values-
    /// LB_ALGORITHM_LEAST_CONNECTIONS,LB_ALGORITHM_ROUND_ROBIN,LB_ALGORITHM_CONSISTENT_HASH)
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lb_algorithm: Option<String>,
    /// HTTP header name to be used for the hash key. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lb_algorithm_consistent_hash_hdr: Option<String>,
    /// Degree of non-affinity for core affinity based server selection. Allowed values are 1-65535.
    /// Field introduced in 17.1.3. Allowed with any value in Enterprise, Enterprise with Cloud
    /// Services edition. Allowed in Essentials (Allowed values- 2), Basic (Allowed values- 2)
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lb_algorithm_core_nonaffinity: Option<u32>,
    /// Criteria used as a key for determining the hash between the client and server. Enum options
    /// - LB_ALGORITHM_CONSISTENT_HASH_SOURCE_IP_ADDRESS,
    /// LB_ALGORITHM_CONSISTENT_HASH_SOURCE_IP_ADDRESS_AND_PORT, LB_ALGORITHM_CONSISTENT_HASH_URI,
    /// LB_ALGORITHM_CONSISTENT_HASH_CUSTOM_HEADER, LB_ALGORITHM_CONSISTENT_HASH_CUSTOM_STRING,
    /// LB_ALGORITHM_CONSISTENT_HASH_CALLID. Allowed with any value in Enterprise, Enterprise with
    /// Cloud Services edition. Allowed in Essentials (Allowed values-
    /// LB_ALGORITHM_CONSISTENT_HASH_SOURCE_IP_ADDRESS), Basic (Allowed values-
    /// LB_ALGORITHM_CONSISTENT_HASH_SOURCE_IP_ADDRESS) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lb_algorithm_hash: Option<String>,
    /// Allow server lookup by name. Field introduced in 17.1.11,17.2.4. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials (Allowed values-
    /// false), Basic (Allowed values- false) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lookup_server_by_name: Option<bool>,
    /// List of labels to be used for granular RBAC. Field introduced in 20.1.5. Allowed with any
    /// value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub markers: Vec<RoleFilterMatchLabel>,
    /// The maximum number of concurrent connections allowed to each server within the pool. NOTE
    /// applied value will be no less than the number of service engines that the pool is placed on.
    /// If set to 0, no limit is applied. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrent_connections_per_server: Option<i32>,
    /// Rate Limit connections to each server. Allowed with any value in Enterprise, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub max_conn_rate_per_server: Option<RateProfile>,
    /// Minimum number of health monitors in UP state to mark server UP. Field introduced in 18.2.1,
    /// 17.2.12. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_health_monitors_up: Option<u32>,
    /// Minimum number of servers in UP state for marking the pool UP. Field introduced in 18.2.1,
    /// 17.2.12. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_servers_up: Option<u32>,
    /// The name of the pool. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// (internal-use) Networks designated as containing servers for this pool. The servers may be
    /// further narrowed down by a filter. This field is used internally by Avi, not editable by the
    /// user. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub networks: Vec<NetworkFilter>,
    /// A list of NSX Groups where the Servers for the Pool are created . Field introduced in
    /// 17.1.1. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub nsx_securitygroup: Vec<String>,
    /// Avi will validate the SSL certificate present by a server against the selected PKI Profile.
    /// It is a reference to an object of type PKIProfile. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pki_profile_ref: Option<String>,
    /// Manually select the networks and subnets used to provide reachability to the pool's servers.
    /// Specify the Subnet using the following syntax 10-1-1-0/24. Use static routes in VRF
    /// configuration when pool servers are not directly connected but routable from the service
    /// engine. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub placement_networks: Vec<PlacementNetwork>,
    /// Type or Purpose, the Pool is to be used for. Enum options - POOL_TYPE_GENERIC_APP,
    /// POOL_TYPE_OAUTH. Field introduced in 22.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_type: Option<String>,
    /// Minimum number of requests to be queued when pool is full. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials (Allowed values-
    /// 128), Basic (Allowed values- 128) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_queue_depth: Option<u32>,
    /// Enable request queue when pool is full. Allowed with any value in Enterprise, Enterprise
    /// with Cloud Services edition. Allowed in Essentials (Allowed values- false), Basic (Allowed
    /// values- false) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_queue_enabled: Option<bool>,
    /// This field is used as a flag to create a job for JobManager. Field introduced in
    /// 18.2.10,20.1.2. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_pool_by_dns: Option<bool>,
    /// Rewrite incoming Host Header to server name of the server to which the request is proxied.
    /// Enabling this feature rewrites Host Header for requests to all servers in the pool. Allowed
    /// with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewrite_host_header_to_server_name: Option<bool>,
    /// If SNI server name is specified, rewrite incoming host header to the SNI server name.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewrite_host_header_to_sni: Option<bool>,
    /// Enable to do routing when this pool is selected to send traffic. No servers present in
    /// routing pool. Field introduced in 20.1.1. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_pool: Option<bool>,
    /// Server graceful disable timeout behaviour. Enum options - DISALLOW_NEW_CONNECTION,
    /// ALLOW_NEW_CONNECTION_IF_PERSISTENCE_PRESENT. Field introduced in 21.1.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_disable_type: Option<String>,
    /// Fully qualified DNS hostname which will be used in the TLS SNI extension in server
    /// connections if SNI is enabled. If no value is specified, Avi will use the incoming host
    /// header instead. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_name: Option<String>,
    /// Server reselect configuration for HTTP requests. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub server_reselect: Option<HttpserverReselect>,
    /// Server timeout value specifies the time within which a server connection needs to be
    /// established and a request-response exchange completes between AVI and the server. Value of 0
    /// results in using default timeout of 60 minutes. Allowed values are 0-21600000. Field
    /// introduced in 18.1.5,18.2.1. Unit is MILLISECONDS. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_timeout: Option<u32>,
    /// The pool directs load balanced traffic to this list of destination servers. The servers can
    /// be configured by IP address, name, network or via IP Address Group. Maximum of 5000 items
    /// allowed. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub servers: Vec<Server>,
    /// Metadata pertaining to the service provided by this Pool. In Openshift/Kubernetes
    /// environments, app metadata info is stored. Any user input to this field will be overwritten
    /// by Avi Vantage. Field introduced in 17.2.14,18.1.5,18.2.1. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_metadata: Option<String>,
    /// Enable TLS SNI for server connections. If disabled, Avi will not send the SNI extension as
    /// part of the handshake. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sni_enabled: Option<bool>,
    /// GSLB service associated with the site persistence pool. Field introduced in 22.1.3. Allowed
    /// with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub sp_gs_info: Option<SpGslbServiceInfo>,
    /// Service Engines will present a client SSL certificate to the server. It is a reference to an
    /// object of type SSLKeyAndCertificate. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_key_and_certificate_ref: Option<String>,
    /// When enabled, Avi re-encrypts traffic to the backend servers. The specific SSL profile
    /// defines which ciphers and SSL versions will be supported. It is a reference to an object of
    /// type SSLProfile. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_profile_ref: Option<String>,
    /// It is a reference to an object of type Tenant. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// This tier1_lr field should be set same as VirtualService associated for NSX-T. Field
    /// introduced in 20.1.1. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier1_lr: Option<String>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Do not translate the client's destination port when sending the connection to the server.
    /// Monitor port needs to be specified for health monitors. Allowed with any value in
    /// Enterprise, Basic, Enterprise with Cloud Services edition. Allowed in Essentials (Allowed
    /// values- false) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_service_port: Option<bool>,
    /// This applies only when use_service_port is set to true. If enabled, SSL mode of the
    /// connection to the server is decided by the SSL mode on the Virtualservice service port, on
    /// which the request was received. Field introduced in 21.1.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_service_ssl_mode: Option<bool>,
    /// UUID of the pool. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// Virtual Routing Context that the pool is bound to. This is used to provide the isolation of
    /// the set of networks the pool is attached to. The pool inherits the Virtual Routing Context
    /// of the Virtual Service, and this field is used only internally, and is set by pb-transform.
    /// It is a reference to an object of type VrfContext. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vrf_ref: Option<String>,
}

/// Pool deployment update info.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PoolDeploymentUpdateInfo {
    /// Pool deployment state used with the PG deployment policy. Enum options -
    /// EVALUATION_IN_PROGRESS, IN_SERVICE, OUT_OF_SERVICE, EVALUATION_FAILED. Allowed with any
    /// value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_state: Option<String>,
    /// Evaluation period for deployment update. Unit is SEC. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation_duration: Option<u32>,
    /// Operational traffic ratio for the pool. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratio: Option<u32>,
    /// List of results for each deployment rule. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub results: Vec<PgDeploymentRuleResult>,
    /// Member Pool's ID. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// Reason returned in webhook callback when configured. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_reason: Option<String>,
    /// Result of webhook callback when configured. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_result: Option<bool>,
}

/// Pool group member.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PoolGroupMember {
    /// Pool deployment state used with the PG deployment policy. Enum options -
    /// EVALUATION_IN_PROGRESS, IN_SERVICE, OUT_OF_SERVICE, EVALUATION_FAILED. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_state: Option<String>,
    /// UUID of the pool. It is a reference to an object of type Pool. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub pool_ref: Option<String>,
    /// All pools with same priority are treated similarly in a pool group. The higher the number,
    /// the higher the priority.A pool with a higher priority is selected, as long as the pool is
    /// eligible or an explicit policy chooses a different pool. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_label: Option<String>,
    /// Ratio of selecting eligible pools in the pool group. . Allowed values are 1-1000. Special
    /// values are 0 - Do not select this pool for new connections. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials (Allowed values-
    /// 1), Basic (Allowed values- 1) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratio: Option<u32>,
}

/// Pool performance score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PoolPerformanceScore {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required, nested)]
    pub hs_entity: Option<HealthScoreEntity>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub reason: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub score_data: Option<PoolPerformanceScoreData>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub value: Option<f64>,
}

/// Pool performance score data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PoolPerformanceScoreData {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apdexc: Option<f64>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apdexr: Option<f64>,
    /// Enum options - OPER_UP, OPER_DOWN, OPER_CREATING, OPER_RESOURCES, OPER_INACTIVE,
    /// OPER_DISABLED, OPER_UNUSED, OPER_UNKNOWN, OPER_PROCESSING, OPER_INITIALIZING,
    /// OPER_ERROR_DISABLED, OPER_AWAIT_MANUAL_PLACEMENT, OPER_UPGRADING, OPER_SE_PROCESSING,
    /// OPER_PARTITIONED, OPER_DISABLING, OPER_FAILED, OPER_UNAVAIL, OPER_AGGREGATE_DOWN. Allowed
    /// with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oper_state: Option<String>,
    /// It is a reference to an object of type Pool. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub pool_ref: Option<String>,
    /// Reason for the Health Score. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub reason: Option<String>,
    /// Attribute that is dominating the health score. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_attr: Option<String>,
    /// It is a reference to an object of type VirtualService. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#ref: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_finished_conns: Option<f64>,
}

/// Pool runtime summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PoolRuntimeSummary {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub num_servers: Option<i64>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub num_servers_enabled: Option<i64>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub num_servers_up: Option<i64>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required, nested)]
    pub oper_status: Option<OperationalStatus>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_servers_up_enabled: Option<i32>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_servers_up_total: Option<i32>,
}

/// Server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Server {
    /// Name of autoscaling group this server belongs to. Field introduced in 17.1.2. Allowed with
    /// any value in Enterprise, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoscaling_group_name: Option<String>,
    /// Availability-zone of the server VM. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    /// A description of the Server. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// (internal-use) Discovered networks providing reachability for server IP. This field is used
    /// internally by Avi, not editable by the user. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub discovered_networks: Vec<DiscoveredNetwork>,
    /// Enable, Disable or Graceful Disable determine if new or existing connections to the server
    /// are allowed. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// UID of server in external orchestration systems. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_orchestration_id: Option<String>,
    /// UUID identifying VM in OpenStack and other external compute. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_uuid: Option<String>,
    /// Verify server health by applying one or more health monitors. Active monitors generate
    /// synthetic traffic from each Service Engine and mark a server up or down based on the
    /// response. . It is a reference to an object of type HealthMonitor. Field introduced in
    /// 31.1.1. Maximum of 10 items allowed. Allowed with any value in Enterprise, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub health_monitor_refs: Vec<String>,
    /// DNS resolvable name of the server. May be used in place of the IP address. Allowed with any
    /// value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// IP Address of the server. Required if there is no resolvable host name. Allowed with any
    /// value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required, nested)]
    pub ip: Option<IpAddr>,
    /// (internal-use) Geographic location of the server.Currently only for internal usage. Field
    /// introduced in 17.1.1. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub location: Option<GeoLocation>,
    /// MAC address of server. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    /// (internal-use) This field is used internally by Avi, not editable by the user. It is a
    /// reference to an object of type VIMgrNWRuntime. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nw_ref: Option<String>,
    /// Optionally specify the servers port number. This will override the pool's default server
    /// port attribute. Allowed values are 1-65535. Special values are 0- use backend port in pool.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    /// Preference order of this member in the group. The DNS Service chooses the member with the
    /// lowest preference that is operationally up. Allowed values are 1-128. Field introduced in
    /// 22.1.1. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preference_order: Option<u32>,
    /// Header value for custom header persistence. . Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prst_hdr_val: Option<String>,
    /// Ratio of selecting eligible servers in the pool. Allowed values are 1-20. Allowed with any
    /// value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratio: Option<i32>,
    /// Auto resolve server's IP using DNS name. Allowed with any value in Enterprise, Enterprise
    /// with Cloud Services edition. Allowed in Essentials (Allowed values- false), Basic (Allowed
    /// values- false) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_server_by_dns: Option<bool>,
    /// Rewrite incoming Host Header to server name. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewrite_host_header: Option<bool>,
    /// Hostname of the node where the server VM or container resides. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_node: Option<String>,
    /// SRV record parameters for GSLB Service member. Field introduced in 31.1.1. Allowed with any
    /// value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub srv_rdata: Option<GslbServiceSrvRdata>,
    /// If statically learned. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#static: Option<bool>,
    /// Verify server belongs to a discovered network or reachable via a discovered network. Verify
    /// reachable network isn't the OpenStack management network. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_network: Option<bool>,
    /// (internal-use) This field is used internally by Avi, not editable by the user. It is a
    /// reference to an object of type VIMgrVMRuntime. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vm_ref: Option<String>,
}

/// Server auto scale policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct ServerAutoScalePolicy {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Protobuf versioning for config pbs. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    /// Delay in minutes after which a down server will be removed from Pool. Value 0 disables this
    /// functionality. Field introduced in 20.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_for_server_garbage_collection: Option<i32>,
    /// User defined description for the object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Use Avi intelligent autoscale algorithm where autoscale is performed by comparing load on
    /// the pool against estimated capacity of all the servers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intelligent_autoscale: Option<bool>,
    /// Maximum extra capacity as percentage of load used by the intelligent scheme. Scale-in is
    /// triggered when available capacity is more than this margin. Allowed values are 1-99.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intelligent_scalein_margin: Option<i32>,
    /// Minimum extra capacity as percentage of load used by the intelligent scheme. Scale-out is
    /// triggered when available capacity is less than this margin. Allowed values are 1-99.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intelligent_scaleout_margin: Option<i32>,
    /// Key value pairs for granular object access control. Also allows for classification and
    /// tagging of similar objects. Field deprecated in 20.1.5. Field introduced in 20.1.3. Maximum
    /// of 4 items allowed.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub labels: Vec<KeyValue>,
    /// List of labels to be used for granular RBAC. Field introduced in 20.1.5. Allowed in Basic
    /// edition, Essentials edition, Enterprise edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub markers: Vec<RoleFilterMatchLabel>,
    /// Maximum number of servers to scale-in simultaneously. The actual number of servers to
    /// scale-in is chosen such that target number of servers is always more than or equal to the
    /// min_size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_scalein_adjustment_step: Option<i32>,
    /// Maximum number of servers to scale-out simultaneously. The actual number of servers to
    /// scale-out is chosen such that target number of servers is always less than or equal to the
    /// max_size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_scaleout_adjustment_step: Option<i32>,
    /// Maximum number of servers after scale-out. Allowed values are 0-400.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size: Option<i32>,
    /// No scale-in happens once number of operationally up servers reach min_servers. Allowed
    /// values are 0-400.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_size: Option<i32>,
    /// Name of the object.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// Trigger scale-in when alerts due to any of these Alert configurations are raised. It is a
    /// reference to an object of type AlertConfig.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub scalein_alertconfig_refs: Vec<String>,
    /// Cooldown period during which no new scale-in is triggered to allow previous scale-in to
    /// successfully complete. Unit is SEC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scalein_cooldown: Option<i32>,
    /// Trigger scale-out when alerts due to any of these Alert configurations are raised. It is a
    /// reference to an object of type AlertConfig.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub scaleout_alertconfig_refs: Vec<String>,
    /// Cooldown period during which no new scale-out is triggered to allow previous scale-out to
    /// successfully complete. Unit is SEC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaleout_cooldown: Option<i32>,
    /// Scheduled-based scale-in/out policy. During scheduled intervals, metrics based autoscale is
    /// not enabled and number of servers will be solely derived from ScheduleScale policy. Field
    /// introduced in 21.1.1. Maximum of 1 items allowed.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub scheduled_scalings: Vec<ScheduledScaling>,
    /// It is a reference to an object of type Tenant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Use predicted load rather than current load.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_predicted_load: Option<bool>,
    /// Unique object identifier of the object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Server health monitor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ServerHealthMonitor {
    /// Average health monitor response time from server in milli-seconds. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_response_time: Option<u64>,
    /// Enum options - ARP_UNRESOLVED, CONNECTION_REFUSED, CONNECTION_TIMEOUT,
    /// RESPONSE_CODE_MISMATCH, PAYLOAD_CONTENT_MISMATCH, SERVER_UNREACHABLE, CONNECTION_RESET,
    /// CONNECTION_ERROR, HOST_ERROR, ADDRESS_ERROR, NO_PORT, PAYLOAD_TIMEOUT, NO_RESPONSE,
    /// NO_RESOURCES, SSL_ERROR, SSL_CERT_ERROR, PORT_UNREACHABLE, SCRIPT_ERROR, OTHER_ERROR,
    /// SERVER_DISABLED, REMOTE_STATE, MAINTENANCE_RESPONSE_CODE_MATCH,
    /// MAINTENANCE_PAYLOAD_CONTENT_MATCH, CHUNKED_RESPONSE_PAYLOAD_NOT_FOUND,
    /// GSLB_POOL_MEMBER_DOWN, GSLB_POOL_MEMBER_DISABLED, GSLB_POOL_MEMBER_STATE_UNKNOWN,
    /// INSUFFICIENT_HEALTH_MONITORS_UP, GSLB_POOL_MEMBER_REMOTE_STATE_UNKNOWN,
    /// RESPONSE_BUFFER_OVERFLOW, REQUEST_BUFFER_OVERFLOW, SERVER_AUTHENTICATION_ERR,
    /// INITIALIZATION_ERR, EXT_HM_ERROR, HTTP2_NOT_SUPPORTED. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_code: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Average health monitor response time from server in milli-seconds in the last few health
    /// monitor instances. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_response_time: Option<u64>,
    /// Enum options - OPER_UP, OPER_DOWN, OPER_CREATING, OPER_RESOURCES, OPER_INACTIVE,
    /// OPER_DISABLED, OPER_UNUSED, OPER_UNKNOWN, OPER_PROCESSING, OPER_INITIALIZING,
    /// OPER_ERROR_DISABLED, OPER_AWAIT_MANUAL_PLACEMENT, OPER_UPGRADING, OPER_SE_PROCESSING,
    /// OPER_PARTITIONED, OPER_DISABLING, OPER_FAILED, OPER_UNAVAIL, OPER_AGGREGATE_DOWN. Allowed
    /// with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub state: Option<String>,
}

/// Server runtime summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ServerRuntimeSummary {
    /// Flag set by the non-owner Service Engines to indicate that they need to get state for this
    /// server from Controller. Field introduced in 18.2.3. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get_state: Option<bool>,
    /// Health monitor name, state and reason if down. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub health_monitor_list: Option<ShmSummary>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required, nested)]
    pub ip_addr: Option<IpAddr>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_local: Option<bool>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_standby: Option<bool>,
    /// VirtualService member in case this server is a member of GS group, and Geo Location
    /// available. Field introduced in 17.1.1. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub location: Option<GeoLocation>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required, nested)]
    pub oper_status: Option<OperationalStatus>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub port: Option<i32>,
    /// Flag used to indicate if server or GS member hostname is resolved by DNS. Field introduced
    /// in 31.1.1. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_server_by_dns: Option<bool>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_uuid: Option<String>,
    /// VirtualService member in case this server is a member of GS group. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vs_uuid: Option<String>,
}
