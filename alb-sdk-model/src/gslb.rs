//! Global server load balancing configuration and runtime.

use alb_sdk_macro::{AviObject, Validate};
use serde::{Deserialize, Serialize};

use crate::admin::{OperationalStatus, RemoteInfo, VersionInfo};
use crate::common::{
    AutoTuneSendInterval, CfgState, ConfigPbAttributes, ConfigVersionStatus, DnsConfig,
    EventCache, FdsInfo, GslbClientIpAddrGroup, GslbDnsGsStatus, GslbPerDnsState, GslbSite,
    GslbSiteRuntime, GslbThirdPartySite, GslbThirdPartySiteRuntime, LocalInfo,
    ReplicationPolicy, SeHmEventGslbPoolMemberDetails, ServerConfig, TimeStamp, VsGs,
};
use crate::events::{EventInfo, LeaderChangeInfo};
use crate::pool::ServerRuntimeSummary;
use crate::serde_util::null_as_default;
use crate::service_engine::SeResources;

/// Gslb.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct Gslb {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Frequency with which messages are propagated to Vs Mgr. Value of 0 disables async behavior
    /// and RPC are sent inline. Allowed values are 0-5. Field introduced in 18.2.3. Unit is SEC.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub async_interval: Option<u32>,
    /// Automatically set the send interval value based on the load. Field introduced in 30.2.5,
    /// 31.2.1. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub auto_tune_send_interval: Option<AutoTuneSendInterval>,
    /// Max retries after which the remote site is treated as a fresh start. In fresh start all the
    /// configs are downloaded. Allowed values are 1-1024. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clear_on_max_retries: Option<u32>,
    /// Group to specify if the client ip addresses are public or private. Field introduced in
    /// 17.1.2. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub client_ip_addr_group: Option<GslbClientIpAddrGroup>,
    /// Protobuf versioning for config pbs. Field introduced in 21.1.1. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Sub domain configuration for the GSLB. GSLB service's FQDN must be a match one of these
    /// subdomains. . Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub dns_configs: Vec<DnsConfig>,
    /// Allows enable/disable of GslbService pool groups and pool members from the gslb follower
    /// members. Field introduced in 20.1.5. Allowed with any value in Enterprise, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_config_by_members: Option<bool>,
    /// Frequency with which errored messages are resynced to follower sites. Value of 0 disables
    /// resync behavior. Allowed values are 60-3600. Special values are 0 - Disable. Field
    /// introduced in 18.2.3. Unit is SEC. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_resync_interval: Option<u32>,
    /// This is the max number of file versions that will be retained for a file referenced by the
    /// federated FileObject. Subsequent uploads of file will result in the file rotation of the
    /// older version and the latest version retained. Example When a file Upload is done for the
    /// first time, there will be a v1 version. Subsequent uploads will get mapped to v1, v2 and v3
    /// versions. On the fourth upload of the file, the v1 will be file rotated and v2, v3 and v4
    /// will be retained. Allowed values are 1-5. Field introduced in 30.2.1. Allowed with any value
    /// in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fileobject_max_file_versions: Option<u32>,
    /// If this knob is enabled, GSLB Service member FQDN will be resolved by the service engines
    /// hosting the GSLB service. Each service engine will resolve and consume the resolved IP
    /// addresses locally. Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gs_member_fqdn_resolution_on_se: Option<bool>,
    /// This field indicates that this object is replicated across GSLB federation. Field introduced
    /// in 17.1.3. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_federated: Option<bool>,
    /// This field has leader change configuration info including mode, leader designate sites and
    /// other configurations for auto leader change like max short probe failures. Field introduced
    /// in 31.2.1. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub leader_change_info: Option<LeaderChangeInfo>,
    /// Mark this Site as leader of GSLB configuration. This site is the one among the Avi sites.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub leader_cluster_uuid: Option<String>,
    /// This field disables the configuration operations on the leader for all federated objects.
    /// CUD operations on Gslb, GslbService, GslbGeoDbProfile and other federated objects will be
    /// rejected. The rest-api disabling helps in upgrade scenarios where we don't want
    /// configuration sync operations to the Gslb member when the member is being upgraded. This
    /// configuration programmatically blocks the leader from accepting new Gslb configuration when
    /// member sites are undergoing upgrade. . Field introduced in 17.2.1. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_mode: Option<bool>,
    /// Name for the GSLB object. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// Policy for replicating configuration to the active follower sites. Field deprecated in
    /// 31.2.1. Field introduced in 20.1.1. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub replication_policy: Option<ReplicationPolicy>,
    /// Frequency with which group members communicate. Allowed values are 1-3600. Unit is SEC.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_interval: Option<u32>,
    /// The user can specify a send-interval while entering maintenance mode. The validity of this
    /// 'maintenance send-interval' is only during maintenance mode. When the user leaves
    /// maintenance mode, the original send-interval is reinstated. This internal variable is used
    /// to store the original send-interval. . Field introduced in 18.2.3. Unit is SEC. Allowed with
    /// any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_interval_prior_to_maintenance_mode: Option<u32>,
    /// Wait time between two consecutive short probe health checks. Allowed values are 1-3600.
    /// Field introduced in 31.1.1. Unit is SEC. Allowed with any value in Enterprise, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_probe_interval: Option<u32>,
    /// Select Avi site member belonging to this Gslb. Minimum of 1 items required. Allowed with any
    /// value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub sites: Vec<GslbSite>,
    /// It is a reference to an object of type Tenant. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// This field indicates tenant visibility for GS pool member selection across the Gslb
    /// federated objects.Tenant scope can be set only during the Gslb create and cannot be changed
    /// once it is set. Field introduced in 18.2.12,20.1.4. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_scoped: Option<bool>,
    /// Third party site member belonging to this Gslb. Field introduced in 17.1.1. Allowed with any
    /// value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub third_party_sites: Vec<GslbThirdPartySite>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// UUID of the GSLB object. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// The view-id is used in change-leader mode to differentiate partitioned groups while they
    /// have the same GSLB namespace. Each partitioned group will be able to operate independently
    /// by using the view-id. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_id: Option<u64>,
}

/// Gslb CRM runtime.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct GslbCrmRuntime {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// This field tracks the site_uuid for local/remote site. Field introduced in 31.1.1. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_uuid: Option<String>,
    /// Events Captured wrt to config replication. Field introduced in 31.1.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub events: Vec<EventInfo>,
    /// Federated data store related info. Field introduced in 31.1.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub fds_info: Option<FdsInfo>,
    /// Represents Local Info for the site. Field introduced in 31.1.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub local_info: Option<LocalInfo>,
    /// The name of DB entry. Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// GSLB CRM Runtime object uuid. Points to the GSLB to which this belongs. Field introduced in
    /// 31.1.1. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obj_uuid: Option<String>,
    /// Respresents Remote Site's info wrt to replication. Field introduced in 31.1.1. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub remote_info: Option<RemoteInfo>,
    /// Policy for replicating configuration to the active follower sites. Field introduced in
    /// 31.1.1. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub replication_policy: Option<ReplicationPolicy>,
    /// This field tracks the site name. Field introduced in 31.1.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    /// CRM operational status. Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub status_info: Option<OperationalStatus>,
    /// Uuid of the tenant. It is a reference to an object of type Tenant. Field introduced in
    /// 31.1.1. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// The uuid of DB entry. Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Gslb DNS info.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GslbDnsInfo {
    /// This field indicates that atleast one DNS is active at the site. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_active: Option<bool>,
    /// This field tracks the service engine resource hosting the DNS virtual service. Field
    /// introduced in 31.2.1. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub dns_se_resource: Option<SeResources>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub dns_vs_states: Vec<GslbPerDnsState>,
    /// This field encapsulates the Gs-status edge-triggered framework. . Field deprecated in
    /// 31.1.1. Field introduced in 17.1.1. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub gs_status: Option<GslbDnsGsStatus>,
    /// This field is used to track the retry attempts for SE download errors. . Field deprecated in
    /// 31.1.1. Field introduced in 17.1.1. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_count: Option<u32>,
}

/// Gslb HSM runtime.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct GslbHsmRuntime {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// The site controller cluster UUID. Field introduced in 31.1.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_uuid: Option<String>,
    /// Represents whether HSM is Enabled/disabled. Field introduced in 31.1.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Events Captured wrt to config replication. Field introduced in 31.1.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub events: Vec<EventInfo>,
    /// Represents Local Info for the site. Field introduced in 31.1.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub local_info: Option<LocalInfo>,
    /// The name of DB entry. Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// GSLB HSM Runtime object uuid. Points to the GSLB to which this belongs. Field introduced in
    /// 31.1.1. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obj_uuid: Option<String>,
    /// Gslb site operational status, represents whether site is UP or DOWN. Field introduced in
    /// 31.1.1. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub oper_status: Option<OperationalStatus>,
    /// Remote info is basically updated by GRW. Field introduced in 31.1.1. Allowed with any value
    /// in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub remote_info: Option<RemoteInfo>,
    /// Frequency with which group members communicate. This field shadows glb_cfg.send_interval.
    /// Field introduced in 31.1.1. Allowed with any value in Enterprise, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_interval: Option<u32>,
    /// The Gslb site name. Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    /// Uuid of the tenant. It is a reference to an object of type Tenant. Field introduced in
    /// 31.1.1. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// The uuid of DB entry. Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Gslb runtime.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GslbRuntime {
    /// Field introduced in 17.1.3. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    /// This field indicates delete is in progress for this Gslb instance. . Field introduced in
    /// 17.2.5. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_in_progress: Option<bool>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_enabled: Option<bool>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub event_cache: Option<EventCache>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub flr_state: Vec<CfgState>,
    /// Contains the replication Details. Field introduced in 31.1.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub gslb_crm_runtime: Vec<GslbCrmRuntime>,
    /// Contains the health status Details. Field introduced in 31.1.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub gslb_hsm_runtime: Vec<GslbHsmRuntime>,
    /// Contains the Site Details. Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub gslb_sm_runtime: Vec<GslbSmRuntime>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub ldr_state: Option<CfgState>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub site: Vec<GslbSiteRuntime>,
    /// Remap the tenant_uuid to its tenant-name so that we can use the tenant_name directly in
    /// remote-site ops. . Field introduced in 17.2.3. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_name: Option<String>,
    /// Field introduced in 17.1.1. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub third_party_sites: Vec<GslbThirdPartySiteRuntime>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Gslb service site persistence pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GslbServiceSitePersistencePool {
    /// Site persistence pool's http2 state. . Field introduced in 20.1.6. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_http2: Option<bool>,
    /// Site persistence pool's name. . Field introduced in 17.2.2. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Number of servers configured in the pool. . Field introduced in 17.2.2. Allowed with any
    /// value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_servers: Option<i64>,
    /// Number of servers operationally up in the pool. . Field introduced in 17.2.2. Allowed with
    /// any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_servers_up: Option<i64>,
    /// Detailed information of the servers in the pool. . Field introduced in 31.1.1. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub server_info: Vec<ServerRuntimeSummary>,
    /// Detailed information of the servers in the pool. . Field deprecated in 31.1.1. Field
    /// introduced in 17.2.8. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub servers: Vec<ServerConfig>,
    /// Site persistence pool's uuid. . Field introduced in 17.2.2. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Gslb service srv rdata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GslbServiceSrvRdata {
    /// Service port. Allowed values are 0-65535. Field introduced in 31.1.1. Allowed with any value
    /// in Enterprise, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub port: Option<u32>,
    /// Priority of the target hosting the service, low value implies higher priority for this
    /// service record. Allowed values are 0-65535. Field introduced in 31.1.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub priority: Option<u32>,
    /// Relative weight for service records with same priority, high value implies higher preference
    /// for this service record. Allowed values are 0-65535. Field introduced in 31.1.1. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub weight: Option<u32>,
}

/// Gslb site cfg sync info.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GslbSiteCfgSyncInfo {
    /// Objects that could NOT be synced to the site .
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub errored_objects: Vec<VersionInfo>,
    /// Placeholder for description of property last_changed_time of obj type GslbSiteCfgSyncInfo
    /// field type str type object
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub last_changed_time: Option<TimeStamp>,
    /// Last object having replication issue. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub last_fail_obj: Option<ConfigVersionStatus>,
    /// Reason for the replication issues. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Recommended way to resolve replication issue. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    /// Configuration sync-state of the site . Enum options - GSLB_SITE_CFG_IN_SYNC,
    /// GSLB_SITE_CFG_OUT_OF_SYNC, GSLB_SITE_CFG_SYNC_DISABLED, GSLB_SITE_CFG_SYNC_IN_PROGRESS,
    /// GSLB_SITE_CFG_SYNC_NOT_APPLICABLE, GSLB_SITE_CFG_SYNCED_TILL_CHECKPOINT,
    /// GSLB_SITE_CFG_SYNC_SUSPENDED, GSLB_SITE_CFG_SYNC_STALLED.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_state: Option<String>,
}

/// Gslb site runtime info.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GslbSiteRuntimeInfo {
    /// The Leader-IP/VIP/FQDN of the site-cluster. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_leader: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_uuid: Option<String>,
    /// operational dns state at the site. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub dns_info: Option<GslbDnsInfo>,
    /// Enable/disable state retrieved from the cfg . Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// event-cache used for event throttling. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub event_cache: Option<EventCache>,
    /// Health-status monitoring enable or disable. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_state: Option<bool>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub last_changed_time: Option<TimeStamp>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Number of retry attempts to reach the remote site. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_of_retries: Option<i32>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub oper_status: Option<OperationalStatus>,
    /// Site Role Leader or Follower. Enum options - GSLB_LEADER, GSLB_MEMBER, GSLB_NOT_A_MEMBER.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Current outstanding request-response token of the message to this site. Allowed with any
    /// value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub rrtoken: Vec<String>,
    /// Indicates if it is Avi Site or third-party. Enum options - GSLB_AVI_SITE,
    /// GSLB_THIRD_PARTY_SITE. Field introduced in 17.1.1. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_type: Option<String>,
    /// Enum options - SITE_STATE_NULL, SITE_STATE_JOIN_IN_PROGRESS, SITE_STATE_LEAVE_IN_PROGRESS,
    /// SITE_STATE_INIT, SITE_STATE_UNREACHABLE, SITE_STATE_MMODE, SITE_STATE_DISABLE_IN_PROGRESS,
    /// SITE_STATE_DISABLED, SITE_STATE_HS_IN_PROGRESS. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// State - Reason. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_reason: Option<String>,
    /// Current Software version of the site. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sw_version: Option<String>,
}

/// Gslb SM runtime.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct GslbSmRuntime {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// The controller cluster leader node UUID. Field introduced in 31.1.1. Allowed with any value
    /// in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_leader: Option<String>,
    /// The site controller cluster UUID. Field introduced in 31.1.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_uuid: Option<String>,
    /// Controller flavor of the peer site controller. Enum options - CONTROLLER_ESSENTIALS,
    /// CONTROLLER_SMALL, CONTROLLER_MEDIUM, CONTROLLER_LARGE, CONTROLLER_EXTRA_LARGE. Field
    /// introduced in 31.2.1. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller_flavor: Option<String>,
    /// Sub domain configuration for the GSLB. GSLB service's FQDN must be a match one of these
    /// subdomains. . Field introduced in 31.1.1. Allowed with any value in Enterprise, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub dns_configs: Vec<DnsConfig>,
    /// DNS info at the site. Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub dns_info: Option<GslbDnsInfo>,
    /// Activate/de-activate state retrieved from the cfg. Field introduced in 31.1.1. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Captures SM related events. Field introduced in 31.1.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub events: Vec<EventInfo>,
    /// This field will provide information on origin(site name) of the health monitoring
    /// information. Field introduced in 31.1.1. Allowed with any value in Enterprise, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_monitor_info: Option<String>,
    /// Mark this Site as leader of GSLB configuration. This site is the one among the Avi sites.
    /// Field introduced in 31.1.1. Allowed with any value in Enterprise, Enterprise with Cloud
    /// Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub leader_cluster_uuid: Option<String>,
    /// The site's member type A leader is set to ACTIVE while all members are set to passive. .
    /// Enum options - GSLB_ACTIVE_MEMBER, GSLB_PASSIVE_MEMBER. Field introduced in 31.1.1. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_type: Option<String>,
    /// The name of DB entry. Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The controller cluster node UUID that processes the site.Sites are sharded across the
    /// cluster nodes. Field introduced in 31.1.1. Allowed with any value in Enterprise, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_uuid: Option<String>,
    /// Number of retry attempts to reach the remote site. Field introduced in 31.1.1. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_of_retries: Option<i32>,
    /// GSLB SM Runtime object uuid. Points to the GSLB to which this belongs. Field introduced in
    /// 31.1.1. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obj_uuid: Option<String>,
    /// Gslb site operational status, represents whether site is UP or DOWN. Field introduced in
    /// 31.1.1. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub oper_status: Option<OperationalStatus>,
    /// Remote info is basically updated by GRW. Field introduced in 31.1.1. Allowed with any value
    /// in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub remote_info: Option<RemoteInfo>,
    /// Site Role Leader or Follower. Enum options - GSLB_LEADER, GSLB_MEMBER, GSLB_NOT_A_MEMBER.
    /// Field introduced in 31.1.1. Allowed with any value in Enterprise, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// The Gslb site name. Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    /// Indicates if it is Avi Site or third-party. Enum options - GSLB_AVI_SITE,
    /// GSLB_THIRD_PARTY_SITE. Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_type: Option<String>,
    /// Represents the state of the site. Enum options - SITE_STATE_NULL,
    /// SITE_STATE_JOIN_IN_PROGRESS, SITE_STATE_LEAVE_IN_PROGRESS, SITE_STATE_INIT,
    /// SITE_STATE_UNREACHABLE, SITE_STATE_MMODE, SITE_STATE_DISABLE_IN_PROGRESS,
    /// SITE_STATE_DISABLED, SITE_STATE_HS_IN_PROGRESS. Field introduced in 31.1.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Current Software version of the site. Field introduced in 31.1.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sw_version: Option<String>,
    /// Uuid of the tenant. It is a reference to an object of type Tenant. Field introduced in
    /// 31.1.1. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// The uuid of DB entry. Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// The view-id is used in change-leader mode to differentiate partitioned groups while they
    /// have the same GSLB namespace. Each partitioned group will be able to operate independently
    /// by using the view-id. Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_id: Option<u64>,
}

/// Se hm event gslb pool details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SeHmEventGslbPoolDetails {
    /// GslbService Pool name. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gsgroup: Option<String>,
    /// Gslb service name. It is a reference to an object of type GslbService. Allowed with any
    /// value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gslb_service: Option<String>,
    /// GslbService member details. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub gsmember: Option<SeHmEventGslbPoolMemberDetails>,
    /// HA Compromised reason. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ha_reason: Option<String>,
    /// Service Engine. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_name: Option<String>,
    /// UUID of the event generator. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_uuid: Option<String>,
}

/// Vs gs status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct VsGsStatus {
    /// Details of the event. Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub details: Vec<String>,
    /// Config object name. Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Config object uuid. Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// VsGs config object data. Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub vsgs_obj: Option<VsGs>,
}

/// Vsgs ops info.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct VsgsOpsInfo {
    /// DNSVS UUID associated with the object(GSLB, GSLBSERVICE, GSLBGEODB). Field introduced in
    /// 31.1.1. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dnsvs_uuid: Option<String>,
    /// VSGS operation type, Changed or deleted. Enum options - GSLB_OBJECT_CHANGED,
    /// GSLB_OBJECT_UNCHANGED, GSLB_OBJECT_DELETE. Field introduced in 31.1.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ops: Option<String>,
    /// Timestamp for VSGS CUD operation. Field introduced in 31.1.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub timestamp: Option<TimeStamp>,
}
