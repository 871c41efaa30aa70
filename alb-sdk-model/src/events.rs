//! Event detail payloads attached to controller events.

use alb_sdk_macro::{AviObject, Validate};
use serde::{Deserialize, Serialize};

use crate::common::{IpAddr, Postsnapshot, Presnapshot, SiteInfo, TimeStamp};
use crate::serde_util::null_as_default;

/// Apic agent generic event details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ApicAgentGenericEventDetails {
    /// Field deprecated in 21.1.1.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub contract_graphs: Vec<String>,
    /// Field deprecated in 21.1.1.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub lif_cif_attachment: Vec<String>,
    /// Field deprecated in 21.1.1.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub lifs: Vec<String>,
    /// Field deprecated in 21.1.1.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub networks: Vec<String>,
    /// Field deprecated in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_uuid: Option<String>,
    /// Field deprecated in 21.1.1.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub service_engine_vnics: Vec<String>,
    /// Field deprecated in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_name: Option<String>,
    /// Field deprecated in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_uuid: Option<String>,
    /// Field deprecated in 21.1.1.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub vnic_network_attachment: Vec<String>,
    /// Field deprecated in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vs_name: Option<String>,
    /// Field deprecated in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vs_uuid: Option<String>,
}

/// Cluster node db failed event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ClusterNodeDbFailedEvent {
    /// Number of failures. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_count: Option<u32>,
    /// IPv4 address of the controller VM. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub ip: Option<IpAddr>,
    /// IPv6 address of the controller VM. Field introduced in 30.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub ip6: Option<IpAddr>,
    /// Name of controller node. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_name: Option<String>,
}

/// Cluster node remove event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ClusterNodeRemoveEvent {
    /// IPv4 address of the controller VM. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub ip: Option<IpAddr>,
    /// IPv6 address of the controller VM. Field introduced in 30.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub ip6: Option<IpAddr>,
    /// Name of controller node. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_name: Option<String>,
    /// Role of the node when it left the controller cluster. Enum options - CLUSTER_LEADER,
    /// CLUSTER_FOLLOWER, CLUSTER_UNKNOWN. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Config action details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ConfigActionDetails {
    /// Name of the action. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_name: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_ip: Option<String>,
    /// Error message if request failed. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Parameter data. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_data: Option<String>,
    /// API path. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Name of the resource. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    /// Config type of the resource. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    /// Status. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Request user. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// Config create details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ConfigCreateDetails {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_ip: Option<String>,
    /// Error message if request failed. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// API path. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Request data if request failed. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_data: Option<String>,
    /// Data of the created resource. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_data: Option<String>,
    /// Name of the created resource. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    /// Config type of the created resource. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    /// Status. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Request user. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// Config update details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ConfigUpdateDetails {
    /// Error message if request failed. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// New updated data of the resource. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_resource_data: Option<String>,
    /// Old & overwritten data of the resource. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_resource_data: Option<String>,
    /// API path. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Request data if request failed. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_data: Option<String>,
    /// Name of the created resource. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    /// Config type of the updated resource. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    /// Status. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Request user. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

/// Config user authrz by rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ConfigUserAuthrzByRule {
    /// Comma separated list of policies assigned to the user. Field introduced in 18.2.7, 20.1.1.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policies: Option<String>,
    /// assigned roles. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<String>,
    /// matching rule string. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    /// assigned tenants. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenants: Option<String>,
    /// Request user. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// assigned user account profile name. Field introduced in 20.1.3. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub userprofile: Option<String>,
}

/// Config user logout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ConfigUserLogout {
    /// client ip. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_ip: Option<String>,
    /// error message if logging out failed. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Local user. Field introduced in 17.1.1. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local: Option<bool>,
    /// Status. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Request user. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

/// Config user password change request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ConfigUserPasswordChangeRequest {
    /// client ip. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_ip: Option<String>,
    /// Password link is sent or rejected. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Matched username of email address. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Email address of user. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
}

/// Event info.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct EventInfo {
    /// Remote Site Watcher Agent ID. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<u32>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub msg: Vec<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Event creation time. Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub timestamp: Option<TimeStamp>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// File object event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct FileObjectEvent {
    /// Time taken to complete the event in seconds. Field introduced in 31.1.1. Unit is SEC.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// End time of the event. . Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Event message if any. Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Start time of the event. . Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// Event status. Field introduced in 31.1.1. Allowed with any value in Enterprise, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Image event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ImageEvent {
    /// Time taken to complete event in seconds. Field introduced in 21.1.3. Unit is SEC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    /// Task end time. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Ip of the node. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub ip: Option<IpAddr>,
    /// Event message if any. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Task start time. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// Event status. Enum options - SYSERR_SUCCESS, SYSERR_FAILURE, SYSERR_OUT_OF_MEMORY,
    /// SYSERR_NO_ENT, SYSERR_INVAL, SYSERR_ACCESS, SYSERR_FAULT, SYSERR_IO, SYSERR_TIMEOUT,
    /// SYSERR_NOT_SUPPORTED, SYSERR_NOT_READY, SYSERR_UPGRADE_IN_PROGRESS,
    /// SYSERR_WARM_START_IN_PROGRESS, SYSERR_TRY_AGAIN, SYSERR_NOT_UPGRADING, SYSERR_PENDING,
    /// SYSERR_EVENT_GEN_FAILURE, SYSERR_CONFIG_PARAM_MISSING, SYSERR_RANGE, SYSERR_BAD_REQUEST....
    /// Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Sub tasks executed on each node. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub sub_tasks: Vec<String>,
}

/// Leader change info.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LeaderChangeInfo {
    /// Leader change mechanism can be disabled in the federation for administration purposes. This
    /// would effectively disable Gslb disaster recovery possibilities. The best practice is to
    /// change the mode (Auto to manual or vice-versa) rather than disabling the leader change
    /// mechanism. Field introduced in 31.2.1. Allowed with any value in Enterprise, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Sites that can be the future Gslb Leader in federation. These sites should be enabled active
    /// follower sites.A site that is deactivated or passive or a third-party site cannot be a
    /// leader candidate. Field introduced in 31.2.1. Maximum of 1 items allowed. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub leader_candidates: Vec<SiteInfo>,
    /// Leader change mode, can be auto or manual. Enum options - GSLB_LC_MODE_MANUAL,
    /// GSLB_LC_MODE_AUTO. Field introduced in 31.2.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leader_change_mode: Option<String>,
    /// Maximum number of probe failures before considering other site as down for auto leader
    /// change. Allowed values are 1-3600. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_unsuccessful_probes: Option<u32>,
}

/// Scheduler action details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SchedulerActionDetails {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub backup_uri: Vec<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_script_output: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_datestamp: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduler_uuid: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Statediff event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct StatediffEvent {
    /// Time taken to complete Statediff event in seconds. Field introduced in 21.1.3. Unit is SEC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    /// Task end time. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Statediff event message if any. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Task start time. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// Statediff event status. Enum options - FB_INIT, FB_IN_PROGRESS, FB_COMPLETED, FB_FAILED,
    /// FB_COMPLETED_WITH_ERRORS. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Name of Statediff task. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_name: Option<String>,
}

/// Statediff operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct StatediffOperation {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Info for each Statediff event. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub events: Vec<StatediffEvent>,
    /// Name of Statediff operation. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Uuid of node for Statediff operation entry. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_uuid: Option<String>,
    /// Type of Statediff operation. Enum options - FB_UPGRADE, FB_ROLLBACK, FB_PATCH,
    /// FB_ROLLBACK_PATCH. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    /// Phase of Statediff operation. Enum options - FB_PRE_SNAPSHOT, FB_POST_SNAPSHOT. Field
    /// introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    /// Status of Statediff operation. Enum options - FB_INIT, FB_IN_PROGRESS, FB_COMPLETED,
    /// FB_FAILED, FB_COMPLETED_WITH_ERRORS. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Tenant that this object belongs to. It is a reference to an object of type Tenant. Field
    /// introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// unique identifier for Statediff entry. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Statediff snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct StatediffSnapshot {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Name of GSLB object. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gslb_name: Option<String>,
    /// Reference to base gslb object. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gslb_uuid: Option<String>,
    /// Name of Statediff operation. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Name of POOL object. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_name: Option<String>,
    /// Reference to base pool object. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_uuid: Option<String>,
    /// Post-Upgrade snapshot for VS. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub post_snapshot: Option<Postsnapshot>,
    /// Pre-Upgrade snapshot for VS. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub pre_snapshot: Option<Presnapshot>,
    /// Name of SEG object. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_group_name: Option<String>,
    /// Reference to base SEG object. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_group_uuid: Option<String>,
    /// Name of SEG object. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_name: Option<String>,
    /// Reference to base SE object. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_uuid: Option<String>,
    /// Type of snapshot eg. VS_SNAPSHOT, SE_SNAPSHOT etc. Enum options - FB_VS_SNAPSHOT,
    /// FB_SE_SNAPSHOT, FB_GSLB_SNAPSHOT, FB_POOL_SNAPSHOT. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_type: Option<String>,
    /// Statediff Operation uuid for identifying the operation. It is a reference to an object of
    /// type StatediffOperation. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statediff_operation_ref: Option<String>,
    /// Tenant that this object belongs to. It is a reference to an object of type Tenant. Field
    /// introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// unique identifier for Statediff entry. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// Name of VS object. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vs_name: Option<String>,
    /// Reference to base VS object. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vs_uuid: Option<String>,
}
