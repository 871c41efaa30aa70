//! Virtual services, VIPs and their placement.

use alb_sdk_macro::Validate;
use serde::{Deserialize, Serialize};

use crate::admin::OperationalStatus;
use crate::common::{
    HealthScoreEntity, IpAddr, L4RuleProtocolMatch, PortMatch,
    VirtualServicePerformanceScoreData, VirtualServiceResource,
};
use crate::serde_util::null_as_default;

/// DNS service domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DnsServiceDomain {
    /// Service domain *string used for FQDN. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub domain_name: Option<String>,
    /// Third-party Authoritative domain requests are delegated toDNS VirtualService's pool of
    /// nameservers. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_through: Option<bool>,
    /// TTL value for DNS records. Allowed values are 1-604800. Unit is SEC. Allowed with any value
    /// in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_ttl: Option<u32>,
}

/// L 7 limits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct L7Limits {
    /// Number of HTTPPolicies attached to a VS. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_policies_per_vs: Option<i32>,
    /// Number of Compression Filters. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_compression_filters: Option<i32>,
    /// Number of Custom strings per match/action. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_custom_str: Option<i32>,
    /// Number of Matches per Rule. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_matches_per_rule: Option<i32>,
    /// Number of rules per HTTPRequest/HTTPResponse/HTTPSecurity Policy. Field introduced in
    /// 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_rules_per_http_policy: Option<i32>,
    /// Number of Stringgroups/IPgroups per match. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_strgroups_per_match: Option<i32>,
    /// Number of implicit strings for Cacheable MIME types. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub str_cache_mime: Option<i32>,
    /// Number of String groups for Cacheable MIME types. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub str_groups_cache_mime: Option<i32>,
    /// Number of String groups for non Cacheable MIME types. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub str_groups_no_cache_mime: Option<i32>,
    /// Number of String groups for non Cacheable URI. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub str_groups_no_cache_uri: Option<i32>,
    /// Number of implicit strings for non Cacheable MIME types. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub str_no_cache_mime: Option<i32>,
    /// Number of implicit strings for non Cacheable URI. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub str_no_cache_uri: Option<i32>,
}

/// Scheduled scaling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ScheduledScaling {
    /// Scheduled autoscale duration (in hours). Allowed values are 1-24. Field introduced in
    /// 21.1.1. Unit is HOURS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoscaling_duration: Option<i32>,
    /// The cron expression describing desired time for the scheduled autoscale. Field introduced in
    /// 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cron_expression: Option<String>,
    /// Desired number of servers during scheduled intervals, it may cause scale-in or scale-out
    /// based on the value. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_capacity: Option<i32>,
    /// Enables the scheduled autoscale. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
    /// Scheduled autoscale end date in ISO8601 format, said day will be included in scheduled and
    /// have to be in future and greater than start date. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Deprecated.Frequency of the Scheduled autoscale. Enum options - ONCE, EVERY_DAY, EVERY_WEEK,
    /// EVERY_MONTH. Field deprecated in 21.1.3. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<String>,
    /// Maximum number of simultaneous scale-in/out servers for scheduled autoscale. If this value
    /// is 0, regular autoscale policy dictates this. . Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_max_step: Option<i32>,
    /// Scheduled autoscale start date in ISO8601 format, said day will be included in scheduled and
    /// have to be in future. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
}

/// Service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Service {
    /// Enable HTTP2 on this port. Field introduced in 20.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition. Allowed in Essentials (Allowed values- false), Basic
    /// (Allowed values- false) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_http2: Option<bool>,
    /// Enable SSL termination and offload for traffic from clients. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_ssl: Option<bool>,
    /// Used for Horizon deployment. If set used for L7 redirect. Field introduced in 21.1.3.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizon_internal_ports: Option<bool>,
    /// Source port used by VS for active FTP data connections. Field introduced in 22.1.1. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active_ftp_data_port: Option<bool>,
    /// Source port used by VS for passive FTP data connections.Change in this flag is disruptive
    /// update. Field introduced in 31.1.1. Allowed with any value in Enterprise, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_passive_ftp_data_port: Option<bool>,
    /// Enable application layer specific features for the this specific service. It is a reference
    /// to an object of type ApplicationProfile. Field introduced in 17.2.4. Allowed with any value
    /// in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_application_profile_ref: Option<String>,
    /// Override the network profile for this specific service port. It is a reference to an object
    /// of type NetworkProfile. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_network_profile_ref: Option<String>,
    /// The Virtual Service's port number. Allowed values are 0-65535. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub port: Option<u32>,
    /// The end of the Virtual Service's port number range. Allowed values are 1-65535. Special
    /// values are 0- single port. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_range_end: Option<u32>,
}

/// Service match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ServiceMatch {
    /// Destination Port of the packet. Field introduced in 18.2.5. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub destination_port: Option<PortMatch>,
    /// Protocol to match. Supported protocols are TCP, UDP and ICMP. Field introduced in 20.1.1.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub protocol: Option<L4RuleProtocolMatch>,
    /// Source Port of the packet. Field introduced in 18.2.5. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub source_port: Option<PortMatch>,
}

/// Vip action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct VipAction {
    /// Enum options - PLACEMENT_ORCHESTRATOR_VIP_MIGRATE, PLACEMENT_ORCHESTRATOR_VIP_SCALEOUT,
    /// PLACEMENT_ORCHESTRATOR_VIP_SCALEIN, PLACEMENT_ORCHESTRATOR_VIP_FORCE_SCALEIN. Allowed with
    /// any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_se: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_vcpus: Option<u32>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub se_list: Vec<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_new_se: Option<bool>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_se: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vip_id: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vip_uuid: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vs_uuid: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waiting_for_sibling: Option<bool>,
}

/// Vip scale details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct VipScaleDetails {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_uuid: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vip_id: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vsvip_uuid: Option<String>,
}

/// Vip se assigned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct VipSeAssigned {
    /// Vip is Active on Cloud. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_on_cloud: Option<bool>,
    /// Vip is Active on this ServiceEngine. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_on_se: Option<bool>,
    /// Placeholder for description of property admin_down_requested of obj type VipSeAssigned field
    /// type str type boolean
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_down_requested: Option<bool>,
    /// Attach IP is in progress. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attach_ip_in_progress: Option<bool>,
    /// Placeholder for description of property connected of obj type VipSeAssigned field type str
    /// type boolean
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connected: Option<bool>,
    /// Detach IP is in progress. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detach_ip_in_progress: Option<bool>,
    /// Management IPv4 address of SE. Field introduced in 20.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub mgmt_ip: Option<IpAddr>,
    /// Management IPv6 address of SE. Field introduced in 20.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub mgmt_ip6: Option<IpAddr>,
    /// Name of the object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Placeholder for description of property oper_status of obj type VipSeAssigned field type str
    /// type object
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub oper_status: Option<OperationalStatus>,
    /// Placeholder for description of property primary of obj type VipSeAssigned field type str
    /// type boolean
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<bool>,
    /// It is a reference to an object of type ServiceEngine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#ref: Option<String>,
    /// Placeholder for description of property scalein_in_progress of obj type VipSeAssigned field
    /// type str type boolean
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scalein_in_progress: Option<bool>,
    /// Vip is awaiting scaleout response from this ServiceEngine. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaleout_in_progress: Option<bool>,
    /// Vip is awaiting response from this ServiceEngine. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_ready_in_progress: Option<bool>,
    /// Placeholder for description of property snat_ip of obj type VipSeAssigned field type str
    /// type object
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub snat_ip: Option<IpAddr>,
    /// Placeholder for description of property standby of obj type VipSeAssigned field type str
    /// type boolean
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standby: Option<bool>,
}

/// Vip symmetry details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct VipSymmetryDetails {
    /// Maximum number of SEs assigned across all Virtual Services sharing this VIP. Field
    /// introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_num_se_assigned: Option<i32>,
    /// Maximum number of SEs requested across all Virtual Services sharing this VIP. Field
    /// introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_num_se_requested: Option<i32>,
    /// Minimum number of SEs assigned across all Virtual Services sharing this VIP. Field
    /// introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_num_se_assigned: Option<i32>,
    /// Minimum number of SEs requested across all Virtual Services sharing this VIP. Field
    /// introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_num_se_requested: Option<i32>,
    /// Number of Virtual Services sharing VsVip. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_vs: Option<i32>,
    /// Reason for symmetric/asymmetric shared VIP event. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// VIP ID. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vip_id: Option<String>,
    /// VsVip Name. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vsvip_name: Option<String>,
    /// VsVip UUID. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vsvip_uuid: Option<String>,
}

/// Virtual service performance score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct VirtualServicePerformanceScore {
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
    pub score_data: Option<VirtualServicePerformanceScoreData>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub value: Option<f64>,
}

/// Vs awaiting se event details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct VsAwaitingSeEventDetails {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub awaitingse_timeout: Option<i32>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub se_assigned: Vec<VipSeAssigned>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub se_requested: Option<VirtualServiceResource>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub vs_uuid: Option<String>,
}

/// Vs initial placement event details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct VsInitialPlacementEventDetails {
    /// error_message of VsInitialPlacementEventDetails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// ip of VsInitialPlacementEventDetails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// VIP IPv6 address. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip6: Option<String>,
    /// Number of rpc_status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpc_status: Option<i64>,
    /// Placeholder for description of property se_assigned of obj type
    /// VsInitialPlacementEventDetails field type str type object
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub se_assigned: Vec<VipSeAssigned>,
    /// Placeholder for description of property se_requested of obj type
    /// VsInitialPlacementEventDetails field type str type object
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub se_requested: Option<VirtualServiceResource>,
    /// Unique object identifier of vs.
    ///
    /// Required.
    #[avi(required)]
    pub vs_uuid: Option<String>,
}

/// Vs migrate params.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct VsMigrateParams {
    /// It is a reference to an object of type ServiceEngine. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_se_ref: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_vcpus: Option<u32>,
    /// source from where this request has originated. Field introduced in 31.2.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// It is a reference to an object of type VIMgrHostRuntime. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_host_ref: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_new_se: Option<bool>,
    /// It is a reference to an object of type ServiceEngine. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_se_ref: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// Field introduced in 17.1.1. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub vip_id: Option<String>,
}

/// Vs scalein params.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct VsScaleinParams {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_down: Option<bool>,
    /// It is a reference to an object of type ServiceEngine. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_se_ref: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scalein_primary: Option<bool>,
    /// actuator which initiated this scalein. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// Field introduced in 17.1.1. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub vip_id: Option<String>,
}

/// Vs scaleout params.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct VsScaleoutParams {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_up: Option<bool>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_vcpus: Option<u32>,
    /// actuator which initiated this scaleout. Field introduced in 31.2.1. Allowed with any value
    /// in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// It is a reference to an object of type VIMgrHostRuntime. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_host_ref: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_new_se: Option<bool>,
    /// It is a reference to an object of type ServiceEngine. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_se_ref: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// Field introduced in 17.1.1. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub vip_id: Option<String>,
}

/// Vserver l 7 metrics obj.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct VserverL7MetricsObj {
    /// Client Apdex measures quality of server response based on latency. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apdexr: Option<f64>,
    /// Average server/application response latency. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_application_response_time: Option<f64>,
    /// Average time client was blocked as reported by client. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_blocking_time: Option<f64>,
    /// Average browser rendering latency. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_browser_rendering_time: Option<f64>,
    /// Average cache bytes. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_cache_bytes: Option<f64>,
    /// Average cache hit of requests. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_cache_hits: Option<f64>,
    /// Average cacheable bytes. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_cacheable_bytes: Option<f64>,
    /// Average cacheable hit of requests. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_cacheable_hits: Option<f64>,
    /// Average client data transfer time that represents latency of sending response to the client
    /// excluding the RTT time . Higher client data transfer time signifies lower bandwidth between
    /// client and Avi Service Engine. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_client_data_transfer_time: Option<f64>,
    /// Average client Round Trip Time. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_client_rtt: Option<f64>,
    /// Average client transaction latency computed by adding response latencies across all HTTP
    /// requests. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_client_txn_latency: Option<f64>,
    /// Rate of HTTP responses sent per second. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_complete_responses: Option<f64>,
    /// Average client connection latency reported by client. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_connection_time: Option<f64>,
    /// Average domain lookup latency reported by client. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_dns_lookup_time: Option<f64>,
    /// Average Dom content Load Time reported by clients. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_dom_content_load_time: Option<f64>,
    /// Rate of HTTP error responses sent per second. It does not include errors excluded in
    /// analytics profile. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_error_responses: Option<f64>,
    /// Rate of HTTP responses excluded as errors based on analytics profile. Allowed with any value
    /// in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_errors_excluded: Option<f64>,
    /// Avg number of HTTP requests that completed within frustrated latency. Allowed with any value
    /// in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_frustrated_responses: Option<f64>,
    /// Average size of HTTP headers per request. Field introduced in 17.2.12, 18.1.2. Allowed with
    /// any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_http_headers_bytes: Option<f64>,
    /// Average number of HTTP headers per request. Field introduced in 17.2.12, 18.1.2. Allowed
    /// with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_http_headers_count: Option<f64>,
    /// Average number of HTTP request parameters per request. Field introduced in 17.2.12, 18.1.2.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_http_params_count: Option<f64>,
    /// Average Page Load time reported by clients. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_page_download_time: Option<f64>,
    /// Average Page Load Time reported by client. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_page_load_time: Option<f64>,
    /// Average number of HTTP request parameters per request, taking into account only requests
    /// with parameters. Field introduced in 17.2.12, 18.1.3. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_params_per_req: Option<f64>,
    /// Average size of HTTP POST request. Field introduced in 17.2.12, 18.1.2. Allowed with any
    /// value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_post_bytes: Option<f64>,
    /// Average post compression bytes. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_post_compression_bytes: Option<f64>,
    /// Average pre compression bytes. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_pre_compression_bytes: Option<f64>,
    /// Average redirect latency reported by client. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_redirection_time: Option<f64>,
    /// Average requests per session measured for closed sessions. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_reqs_per_session: Option<f64>,
    /// Rate of 1xx HTTP responses sent per second. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_resp_1xx: Option<f64>,
    /// Rate of 2xx HTTP responses sent per second. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_resp_2xx: Option<f64>,
    /// Rate of 3xx HTTP responses sent per second. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_resp_3xx: Option<f64>,
    /// Rate of 4xx HTTP responses sent per second. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_resp_4xx: Option<f64>,
    /// Rate of 4xx HTTP responses as errors sent by avi. It does not include any error codes
    /// excluded in the analytics profile and pool server errors. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_resp_4xx_avi_errors: Option<f64>,
    /// Rate of 5xx HTTP responses sent per second. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_resp_5xx: Option<f64>,
    /// Rate of 5xx HTTP responses as errors sent by avi. It does not include any error codes
    /// excluded in the analytics profile and pool server errors. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_resp_5xx_avi_errors: Option<f64>,
    /// Total client data transfer time by client. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_rum_client_data_transfer_time: Option<f64>,
    /// Avg number of HTTP requests that completed within satisfactory latency. Allowed with any
    /// value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_satisfactory_responses: Option<f64>,
    /// Average server Round Trip Time. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_server_rtt: Option<f64>,
    /// Average latency from receipt of request to start of response. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_service_time: Option<f64>,
    /// Average SSL Sessions using DSA certificate. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_ssl_auth_dsa: Option<f64>,
    /// Average SSL Sessions using Elliptic Curve DSA (ECDSA) certificates. Allowed with any value
    /// in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_ssl_auth_ecdsa: Option<f64>,
    /// Average SSL Sessions using mldsa44 certificate. Field introduced in 31.2.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_ssl_auth_mldsa44: Option<f64>,
    /// Average SSL Sessions using mldsa65 certificate. Field introduced in 31.2.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_ssl_auth_mldsa65: Option<f64>,
    /// Average SSL Sessions using mldsa87 certificate. Field introduced in 31.2.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_ssl_auth_mldsa87: Option<f64>,
    /// Average SSL Sessions using RSA certificate. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_ssl_auth_rsa: Option<f64>,
    /// Average SSL Sessions. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_ssl_connections: Option<f64>,
    /// Average SSL Exchanges using EC Cerificates without PFS. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_ssl_ecdsa_non_pfs: Option<f64>,
    /// Average SSL Exchanges using EC Cerificates and PFS. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_ssl_ecdsa_pfs: Option<f64>,
    /// Average SSL errors due to clients, protocol errors,network errors and handshake timeouts.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_ssl_errors: Option<f64>,
    /// Average SSL connections failed due to protocol , network or timeout reasons. Allowed with
    /// any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_ssl_failed_connections: Option<f64>,
    /// Average SSL handshakes failed due to network errors. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_ssl_handshake_network_errors: Option<f64>,
    /// Average SSL handshake failed due to clients or protocol errors. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_ssl_handshake_protocol_errors: Option<f64>,
    /// Average new successful SSL sessions. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_ssl_handshakes_new: Option<f64>,
    /// Average SSL Exchanges using Non-PFS. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_ssl_handshakes_non_pfs: Option<f64>,
    /// Average SSL Exchanges using PFS. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_ssl_handshakes_pfs: Option<f64>,
    /// Average new successful resumed SSL sessions. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_ssl_handshakes_reused: Option<f64>,
    /// Average SSL handshakes timed out. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_ssl_handshakes_timedout: Option<f64>,
    /// Average SSL Exchanges using Diffie-Hellman. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_ssl_kx_dh: Option<f64>,
    /// Average SSL Exchanges using RSA. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_ssl_kx_ecdh: Option<f64>,
    /// Average SSL Exchanges using RSA. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_ssl_kx_rsa: Option<f64>,
    /// Average SSL Exchanges using RSA Cerificates without PFS. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_ssl_rsa_non_pfs: Option<f64>,
    /// Average SSL Exchanges using RSA Cerificates and PFS. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_ssl_rsa_pfs: Option<f64>,
    /// Average SSL Sessions with version 3.0. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_ssl_ver_ssl30: Option<f64>,
    /// Average SSL Sessions with TLS version 1.0. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_ssl_ver_tls10: Option<f64>,
    /// Average SSL Sessions with TLS version 1.1. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_ssl_ver_tls11: Option<f64>,
    /// Average SSL Sessions with TLS version 1.2. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_ssl_ver_tls12: Option<f64>,
    /// Average SSL Sessions with TLS version 1.3. Field introduced in 18.2.6. Allowed with any
    /// value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_ssl_ver_tls13: Option<f64>,
    /// Avg number of HTTP requests that completed within tolerated latency. Allowed with any value
    /// in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_tolerated_responses: Option<f64>,
    /// Average number of client HTTP2 requests received by the Virtual Service per second. Field
    /// introduced in 18.2.5. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_total_http2_requests: Option<f64>,
    /// Average rate of client HTTP requests received by the virtual service per second. Allowed
    /// with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_total_requests: Option<f64>,
    /// Average length of HTTP URI per request. Field introduced in 17.2.12, 18.1.2. Allowed with
    /// any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_uri_length: Option<f64>,
    /// Average number of transactions per second identified by WAF as attacks. Field introduced in
    /// 17.2.3. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_waf_attacks: Option<f64>,
    /// Average number of transactions per second bypassing WAF. Field introduced in 17.2.12,
    /// 18.1.2. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_waf_disabled: Option<f64>,
    /// Average number of transactions per second evaluated by WAF. Field introduced in 17.2.2.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_waf_evaluated: Option<f64>,
    /// Average number of requests per second evaluated by WAF in Request Body Phase. Field
    /// introduced in 17.2.2. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_waf_evaluated_request_body_phase: Option<f64>,
    /// Average number of requests per second evaluated by WAF in Request Header Phase. Field
    /// introduced in 17.2.2. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_waf_evaluated_request_header_phase: Option<f64>,
    /// Average number of responses per second evaluated by WAF in Response Body Phase. Field
    /// introduced in 17.2.2. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_waf_evaluated_response_body_phase: Option<f64>,
    /// Average number of responsess per second evaluated by WAF in Response Header Phase. Field
    /// introduced in 17.2.2. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_waf_evaluated_response_header_phase: Option<f64>,
    /// Average number of transactions per second flagged by WAF. Field introduced in 17.2.2.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_waf_flagged: Option<f64>,
    /// Average number of requests per second flagged (but not rejected) by WAF in Request Body
    /// Phase. Field introduced in 17.2.2. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_waf_flagged_request_body_phase: Option<f64>,
    /// Average number of requests per second flagged (but not rejected) by WAF in Request Header
    /// Phase. Field introduced in 17.2.2. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_waf_flagged_request_header_phase: Option<f64>,
    /// Average number of responses per second flagged (but not rejected) by WAF in Response Body
    /// Phase. Field introduced in 17.2.2. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_waf_flagged_response_body_phase: Option<f64>,
    /// Average number of responses per second flagged (but not rejected) by WAF in Response Header
    /// Phase. Field introduced in 17.2.2. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_waf_flagged_response_header_phase: Option<f64>,
    /// Average waf latency seen due to WAF Request Body processing. Field introduced in 17.2.2.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_waf_latency_request_body_phase: Option<f64>,
    /// Average waf latency seen due to WAF Request Header processing. Field introduced in 17.2.2.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_waf_latency_request_header_phase: Option<f64>,
    /// Average waf latency seen due to WAF Response Body processing. Field introduced in 17.2.2.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_waf_latency_response_body_phase: Option<f64>,
    /// Average waf latency seen due to WAF Response Header processing. Field introduced in 17.2.2.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_waf_latency_response_header_phase: Option<f64>,
    /// Average number of transactions per second matched by WAF rule/rules. Field introduced in
    /// 17.2.2. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_waf_matched: Option<f64>,
    /// Average number of requests per second matched by WAF in Request Body Phase. Field introduced
    /// in 17.2.2. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_waf_matched_request_body_phase: Option<f64>,
    /// Average number of requests per second matched by WAF in Request Header Phase. Field
    /// introduced in 17.2.2. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_waf_matched_request_header_phase: Option<f64>,
    /// Average number of responses per second matched by WAF in Response Body Phase. Field
    /// introduced in 17.2.2. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_waf_matched_response_body_phase: Option<f64>,
    /// Average number of responses per second matched by WAF in Response Header Phase. Field
    /// introduced in 17.2.2. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_waf_matched_response_header_phase: Option<f64>,
    /// Average number of transactions per second rejected by WAF. Field introduced in 17.2.2.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_waf_rejected: Option<f64>,
    /// Average number of requests per second rejected by WAF in Request Body Phase. Field
    /// introduced in 17.2.2. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_waf_rejected_request_body_phase: Option<f64>,
    /// Average number of requests per second rejected by WAF in Request Header Phase. Field
    /// introduced in 17.2.2. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_waf_rejected_request_header_phase: Option<f64>,
    /// Average number of responses per second rejected by WAF in Response Body Phase. Field
    /// introduced in 17.2.2. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_waf_rejected_response_body_phase: Option<f64>,
    /// Average number of responses per second rejected by WAF in Response Header Phase. Field
    /// introduced in 17.2.2. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_waf_rejected_response_header_phase: Option<f64>,
    /// Average Waiting Time reported by client. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_waiting_time: Option<f64>,
    /// The effective sampling rate, i.e., the percentage of optional requests admitted. Field
    /// introduced in 31.2.1. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_sampling_rate: Option<f64>,
    /// Maximum number of concurrent HTTP sessions. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrent_sessions: Option<f64>,
    /// Maximum number of open SSL sessions. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_ssl_open_sessions: Option<f64>,
    /// Max rate of client HTTP requests received by the virtual service per second. Allowed with
    /// any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_total_requests: Option<f64>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub node_obj_id: Option<String>,
    /// Percentage cache hit of requests. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pct_cache_hits: Option<f64>,
    /// Percentage cacheable hit of requests. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pct_cacheable_hits: Option<f64>,
    /// Number of HTTP GET requests as a percentage of total requests received. Field introduced in
    /// 17.2.12, 18.1.2. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pct_get_reqs: Option<f64>,
    /// Number of HTTP POST requests as a percentage of total requests received. Field introduced in
    /// 17.2.12, 18.1.2. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pct_post_reqs: Option<f64>,
    /// Percent of 4xx and 5xx responses. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pct_response_errors: Option<f64>,
    /// Percent of SSL connections failured due to protocol , network or timeout reasons. Allowed
    /// with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pct_ssl_failed_connections: Option<f64>,
    /// Malicious transactions (Attacks) identified by WAF as the pecentage of total requests
    /// received. Field introduced in 17.2.3. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pct_waf_attacks: Option<f64>,
    /// Transactions bypassing WAF as the percentage of total requests received. Field introduced in
    /// 17.2.12, 18.1.2. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pct_waf_disabled: Option<f64>,
    /// WAF evaluated transactions as the pecentage of total requests received. Field introduced in
    /// 17.2.2. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pct_waf_evaluated: Option<f64>,
    /// WAF flagged transactions as the percentage of total WAF evaluated transactions. Field
    /// introduced in 17.2.2. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pct_waf_flagged: Option<f64>,
    /// WAF matched requests as the percentage of total WAF evaluated requests. Field introduced in
    /// 17.2.2. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pct_waf_matched: Option<f64>,
    /// WAF rejected transactions as the percentage of total WAF evaluated transactions. Field
    /// introduced in 17.2.2. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pct_waf_rejected: Option<f64>,
    /// Apdex measures quality of server response based on Real User Metric. Allowed with any value
    /// in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rum_apdexr: Option<f64>,
    /// Protocol strength of SSL ciphers used. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_protocol_strength: Option<f64>,
    /// Total time taken by server to respond to requesti. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_application_response_time: Option<f64>,
    /// Total time client was blocked. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_blocking_time: Option<f64>,
    /// Total browser rendering latency reported by client. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_browser_rendering_time: Option<f64>,
    /// Average client data transfer time computed by adding response latencies across all HTTP
    /// requests. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_client_data_transfer_time: Option<f64>,
    /// Sum of all client Round Trip Times for all samples. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_client_rtt: Option<f64>,
    /// Total client connection latency reported by client. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_connection_time: Option<f64>,
    /// Total domain lookup latency reported by client. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_dns_lookup_time: Option<f64>,
    /// Total dom content latency reported by client. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_dom_content_load_time: Option<f64>,
    /// Count of HTTP 400 and 500 errors for a virtual service in a time interval. Allowed with any
    /// value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_errors: Option<f64>,
    /// Number of server sessions closed in this interval. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_finished_sessions: Option<f64>,
    /// Total latency from responses to all the GET requests. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_get_client_txn_latency: Option<f64>,
    /// Total number of HTTP GET requests that were responded satisfactorily within latency
    /// threshold. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_get_client_txn_latency_bucket1: Option<f64>,
    /// Total number of HTTP GET requests that were responded beyond latency threshold but within
    /// tolerated limits. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_get_client_txn_latency_bucket2: Option<f64>,
    /// Total number of HTTP GET requests. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_get_reqs: Option<f64>,
    /// Total size of HTTP request headers. Field introduced in 17.2.12, 18.1.2. Allowed with any
    /// value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_http_headers_bytes: Option<f64>,
    /// Total number of HTTP headers across all requests in a given metrics interval. Field
    /// introduced in 17.2.12, 18.1.2. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_http_headers_count: Option<f64>,
    /// Total number of HTTP request parameters. Field introduced in 17.2.12, 18.1.2. Allowed with
    /// any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_http_params_count: Option<f64>,
    /// The number of requests admitted for optional processing. Field introduced in 31.2.1. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_num_optional_processing_admitted: Option<f64>,
    /// The number of requests refused for optional processing. Field introduced in 31.2.1. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_num_optional_processing_refused: Option<f64>,
    /// Total samples that had satisfactory page load time. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_num_page_load_time_bucket1: Option<f64>,
    /// Total samples that had tolerated page load time. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_num_page_load_time_bucket2: Option<f64>,
    /// Total samples used for rum metrics. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_num_rum_samples: Option<f64>,
    /// Total CPU in microseconds used for optional processing. Field introduced in 31.2.1. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_optional_cpu_usage: Option<f64>,
    /// Total latency from responses to all the requests other than GET or POST. Allowed with any
    /// value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_other_client_txn_latency: Option<f64>,
    /// Total number of HTTP requests other than GET or POST that were responded satisfactorily
    /// within latency threshold. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_other_client_txn_latency_bucket1: Option<f64>,
    /// Total number of HTTP requests other than GET or POST that were responded beyond latency
    /// threshold but within tolerated limits. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_other_client_txn_latency_bucket2: Option<f64>,
    /// Total number of HTTP requests that are not GET or POST requests. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_other_reqs: Option<f64>,
    /// Total time to transfer response to client. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_page_download_time: Option<f64>,
    /// Total Page Load Time reported by client. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_page_load_time: Option<f64>,
    /// Total size of HTTP POST requests. Field introduced in 17.2.12, 18.1.2. Allowed with any
    /// value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_post_bytes: Option<f64>,
    /// Total latency from responses to all the POST requests. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_post_client_txn_latency: Option<f64>,
    /// Total number of HTTP POST requests that were responded satisfactorily within latency
    /// threshold. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_post_client_txn_latency_bucket1: Option<f64>,
    /// Total number of HTTP POST requests that were responded beyond latency threshold but within
    /// tolerated limits. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_post_client_txn_latency_bucket2: Option<f64>,
    /// Total number of HTTP POST requests. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_post_reqs: Option<f64>,
    /// Total redirect latency reported by client. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_redirection_time: Option<f64>,
    /// Total number of requests served across server sessions closed in the interval. Allowed with
    /// any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_reqs_finished_sessions: Option<f64>,
    /// Total number of HTTP requests containing at least one parameter. Field introduced in
    /// 17.2.12, 18.1.3. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_reqs_with_params: Option<f64>,
    /// Total number of HTTP 1XX responses. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_resp_1xx: Option<f64>,
    /// Total number of HTTP 2XX responses. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_resp_2xx: Option<f64>,
    /// Total number of HTTP 3XX responses. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_resp_3xx: Option<f64>,
    /// Total number of HTTP 4XX error responses. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_resp_4xx: Option<f64>,
    /// Total number of HTTP 5XX error responses. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_resp_5xx: Option<f64>,
    /// Total client data transfer time by client. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_rum_client_data_transfer_time: Option<f64>,
    /// Sum of all server Round Trip Times for all samples. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_server_rtt: Option<f64>,
    /// Total time from receipt of request to start of response. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_service_time: Option<f64>,
    /// Total number of HTTP responses sent. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_total_responses: Option<f64>,
    /// Total length of HTTP request URIs. Field introduced in 17.2.12, 18.1.2. Allowed with any
    /// value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_uri_length: Option<f64>,
    /// Total number of transactions identified by WAF as attacks. Field introduced in 17.2.3.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_waf_attacks: Option<f64>,
    /// Total number of requests bypassing WAF. Field introduced in 17.2.12, 18.1.2. Allowed with
    /// any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_waf_disabled: Option<f64>,
    /// Total number of requests evaluated by WAF in Request Body Phase. Field introduced in 17.2.2.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_waf_evaluated_request_body_phase: Option<f64>,
    /// Total number of requests evaluated by WAF in Request Header Phase. Field introduced in
    /// 17.2.2. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_waf_evaluated_request_header_phase: Option<f64>,
    /// Total number of responses evaluated by WAF in Response Body Phase. Field introduced in
    /// 17.2.2. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_waf_evaluated_response_body_phase: Option<f64>,
    /// Total number of responses evaluated by WAF in Response Header Phase. Field introduced in
    /// 17.2.2. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_waf_evaluated_response_header_phase: Option<f64>,
    /// Total number of transactions (requests or responses) flagged as attack by WAF. Field
    /// introduced in 17.2.3. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_waf_flagged: Option<f64>,
    /// Total number of requests flagged (but not rejected) by WAF in Request Body Phase. Field
    /// introduced in 17.2.2. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_waf_flagged_request_body_phase: Option<f64>,
    /// Total number of requests flagged (but not rejected) by WAF in Request Header Phase. Field
    /// introduced in 17.2.2. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_waf_flagged_request_header_phase: Option<f64>,
    /// Total number of responses flagged (but not rejected) by WAF in Response Body Phase. Field
    /// introduced in 17.2.2. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_waf_flagged_response_body_phase: Option<f64>,
    /// Total number of responses flagged (but not rejected) by WAF in Response Header Phase. Field
    /// introduced in 17.2.2. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_waf_flagged_response_header_phase: Option<f64>,
    /// Total latency seen by all evaluated requests in Request Body Phase. Field introduced in
    /// 17.2.2. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_waf_latency_request_body_phase: Option<f64>,
    /// Total latency seen by all transactions evaluated by WAF in Request Header Phase. Field
    /// introduced in 17.2.2. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_waf_latency_request_header_phase: Option<f64>,
    /// Total latency seen by all evaluated responses in Response Body Phase. Field introduced in
    /// 17.2.2. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_waf_latency_response_body_phase: Option<f64>,
    /// Total latency seen by all evaluated responsess in WAF Response Header Phase. Field
    /// introduced in 17.2.2. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_waf_latency_response_header_phase: Option<f64>,
    /// Total number of requests matched by WAF in Request Body Phase. Field introduced in 17.2.2.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_waf_matched_request_body_phase: Option<f64>,
    /// Total number of requests matched by WAF in Request Header Phase. Field introduced in 17.2.2.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_waf_matched_request_header_phase: Option<f64>,
    /// Total number of responses matched by WAF in Response Body Phase. Field introduced in 17.2.2.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_waf_matched_response_body_phase: Option<f64>,
    /// Total number of responses matched by WAF in Response Header Phase. Field introduced in
    /// 17.2.2. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_waf_matched_response_header_phase: Option<f64>,
    /// Total number of transactions (requests or responses) rejected by WAF. Field introduced in
    /// 17.2.3. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_waf_rejected: Option<f64>,
    /// Total number of requests rejected by WAF in Request Body Phase. Field introduced in 17.2.2.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_waf_rejected_request_body_phase: Option<f64>,
    /// Total number of requests rejected by WAF in Request Header Phase. Field introduced in
    /// 17.2.2. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_waf_rejected_request_header_phase: Option<f64>,
    /// Total number of responses rejected by WAF in Response Body Phase. Field introduced in
    /// 17.2.2. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_waf_rejected_response_body_phase: Option<f64>,
    /// Total number of responses rejected by WAF in Response Header Phase. Field introduced in
    /// 17.2.2. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_waf_rejected_response_header_phase: Option<f64>,
    /// Total waiting reported by client. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_waiting_time: Option<f64>,
}
