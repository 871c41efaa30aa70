//! Service engines, their groups and the events they raise.

use alb_sdk_macro::{AviObject, Validate};
use serde::{Deserialize, Serialize};

use crate::common::{
    ChildProcessInfo, ConfigPbAttributes, ControllerInfo, IpAddr, IpAddrPrefix, KeyValue,
    PortRange, RmModifyVnic, SeAgentProperties, SeBootupProperties, SeRuntimeProperties, Vnic,
    VnicNetwork,
};
use crate::serde_util::null_as_default;
use crate::virtual_service::VipAction;

/// Iptable rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct IptableRule {
    /// Enum options - ACCEPT, DROP, REJECT, DNAT, MASQUERADE. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub action: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub dnat_ip: Option<IpAddr>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub dst_ip: Option<IpAddrPrefix>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub dst_port: Option<PortRange>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_interface: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_interface: Option<String>,
    /// Enum options - PROTO_TCP, PROTO_UDP, PROTO_ICMP, PROTO_ALL. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proto: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub src_ip: Option<IpAddrPrefix>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub src_port: Option<PortRange>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// Marathon se deployment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct MarathonSeDeployment {
    /// Docker image to be used for Avi SE installation e.g. fedora, ubuntu. Allowed with any value
    /// in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_image: Option<String>,
    /// Host OS distribution e.g. COREOS, UBUNTU, REDHAT. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_os: Option<String>,
    /// Accepted resource roles for SEs. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub resource_roles: Vec<String>,
    /// URIs to be resolved for starting the application. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub uris: Vec<String>,
}

/// Memory balancer info.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct MemoryBalancerInfo {
    /// Child process information.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub child: Vec<ChildProcessInfo>,
    /// Current controller memory (in GB) usage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller_memory: Option<i32>,
    /// Percent usage of total controller memory. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller_memory_usage_percent: Option<f64>,
    /// Holder for debug message. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_message: Option<String>,
    /// Limit on the memory (in KB) for the Process.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    /// Amount of memory (in KB) used by the Process.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_used: Option<i32>,
    /// PID of the Process.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid: Option<i32>,
    /// Name of the Process.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process: Option<String>,
    /// Current mode of the process. Enum options - REGULAR, DEBUG, DEGRADED, STOP. Field introduced
    /// in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_mode: Option<String>,
    /// Current usage trend of the process. Enum options - UPWARD, DOWNWARD, NEUTRAL. Field
    /// introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_trend: Option<String>,
    /// Percent usage of the process limit. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold_percent: Option<f64>,
}

/// Memory balancer request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct MemoryBalancerRequest {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Protobuf versioning for config pbs. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    /// Current details regarding controller. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub controller_info: Option<ControllerInfo>,
    /// Name of controller process. Field introduced in 21.1.1.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// UUID of Node. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_uuid: Option<String>,
    /// Current process information of the controller process. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub process_info: Option<ProcessInfo>,
    /// Instance of the controller process. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_instance: Option<String>,
    /// UUID of Tenant Object. It is a reference to an object of type Tenant. Field introduced in
    /// 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// Time at which Memory Balancer Request was created/updated. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// UUID of Memory Balancer Request object. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Mesos se resources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct MesosSeResources {
    /// Attribute (Fleet or Mesos) key of Hosts. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub attribute_key: Option<String>,
    /// Attribute (Fleet or Mesos) value of Hosts. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub attribute_value: Option<String>,
    /// Obsolete - ignored. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<f32>,
    /// Obsolete - ignored. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<u32>,
}

/// Process info.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ProcessInfo {
    /// Current Process ID. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_process_id: Option<f64>,
    /// Total memory usage of process in KBs. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_process_mem_usage: Option<f64>,
    /// Number of times the process has been in current ProcessMode. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intimation_count: Option<f64>,
    /// Memory limit for process in KBs. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_limit: Option<f64>,
    /// Current usage trend of process memory. Enum options - UPWARD, DOWNWARD, NEUTRAL. Field
    /// introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_trend_usage: Option<String>,
    /// Current mode of process. Enum options - REGULAR, DEBUG, DEGRADED, STOP. Field introduced in
    /// 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_mode: Option<String>,
    /// Percentage of memory used out of given limits. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold_percent: Option<f64>,
}

/// Rm bind vs se event details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RmBindVsSeEventDetails {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip6: Option<String>,
    /// List of placement_networks configured on this interface. Field introduced in 20.1.5. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub networks: Vec<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<bool>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_name: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standby: Option<bool>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub vip_vnics: Vec<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vs_name: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vs_uuid: Option<String>,
}

/// Rm modify networks event details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RmModifyNetworksEventDetails {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub networks: Vec<RmModifyVnic>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_name: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_uuid: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub vs_name: Vec<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub vs_uuid: Vec<String>,
}

/// Rm unbind vs se event details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RmUnbindVsSeEventDetails {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip6: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_name: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vs_name: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vs_uuid: Option<String>,
}

/// Se auto scaler event details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SeAutoScalerEventDetails {
    /// Actions generated for the request. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub actions: Vec<VipAction>,
    /// Source of the rebalance request i.e SE autoscaler auto rebalance, SE autoscaler user manual
    /// rebalance etc. Enum options - SE_AUTOSCALER_AUTO_REBALANCE,
    /// SE_AUTOSCALER_USER_MANUAL_REBALANCE. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub request_source: Option<String>,
    /// SeGroup Uuid. Field introduced in 31.2.1. Allowed with any value in Enterprise, Enterprise
    /// with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub se_group_uuid: Option<String>,
}

/// Se dupip event details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SeDupipEventDetails {
    /// Mac Address. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_mac: Option<String>,
    /// Mac Address. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_mac: Option<String>,
    /// Vnic IP. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vnic_ip: Option<String>,
    /// Vnic name. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vnic_name: Option<String>,
}

/// Se high ingress proc latency event details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SeHighIngressProcLatencyEventDetails {
    /// Dispatcher core which received the packet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dispatcher_core: Option<i32>,
    /// Dispatcher processing latency. Unit is MILLISECONDS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dispatcher_latency_ingress: Option<i32>,
    /// Number of events in a 30 second interval.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_count: Option<i64>,
    /// Proxy core which processed the packet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow_core: Option<i32>,
    /// Proxy dequeue latency. Unit is MILLISECONDS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_latency_ingress: Option<i32>,
    /// SE name. It is a reference to an object of type ServiceEngine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_name: Option<String>,
    /// SE UUID. It is a reference to an object of type ServiceEngine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_ref: Option<String>,
    /// VS name. It is a reference to an object of type VirtualService.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vs_name: Option<String>,
    /// VS UUID. It is a reference to an object of type VirtualService.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vs_ref: Option<String>,
}

/// Se hm event vs details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SeHmEventVsDetails {
    /// HA Compromised reason. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ha_reason: Option<String>,
    /// Reason for Virtual Service Down. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Service Engine name. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_name: Option<String>,
    /// UUID of the event generator. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_uuid: Option<String>,
    /// VIP address. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub vip6_address: Option<IpAddr>,
    /// VIP address. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub vip_address: Option<IpAddr>,
    /// VIP id. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vip_id: Option<String>,
    /// Virtual Service name. It is a reference to an object of type VirtualService. Allowed with
    /// any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_service: Option<String>,
}

/// Se IP removed event details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SeIpRemovedEventDetails {
    /// Vnic name. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub if_name: Option<String>,
    /// IP added. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// Vnic linux name. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linux_name: Option<String>,
    /// Mac Address. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac: Option<String>,
    /// Mask . Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask: Option<i32>,
    /// DCHP or Static. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Network UUID. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_uuid: Option<String>,
    /// Namespace. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ns: Option<String>,
    /// UUID of the SE responsible for this event. It is a reference to an object of type
    /// ServiceEngine. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_ref: Option<String>,
}

/// Se ipfailure event details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SeIpfailureEventDetails {
    /// Mac Address. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac: Option<String>,
    /// Network UUID. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_uuid: Option<String>,
    /// UUID of the SE responsible for this event. It is a reference to an object of type
    /// ServiceEngine. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_ref: Option<String>,
    /// Vnic name. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vnic_name: Option<String>,
}

/// Se migrate event details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SeMigrateEventDetails {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_vs: Option<u32>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub reason: Vec<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_name: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub se_uuid: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vs_name: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vs_uuid: Option<String>,
}

/// Se process crashed details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SeProcessCrashedDetails {
    /// Number of times the process has crashed. Field introduced in 31.1.1. Allowed with any value
    /// in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crash_counter: Option<u32>,
    /// Name of the process that crashed. Field introduced in 31.1.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_name: Option<String>,
    /// Name of the SE reporting this event. It is a reference to an object of type ServiceEngine.
    /// Field introduced in 31.1.1. Allowed with any value in Enterprise, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_name: Option<String>,
}

/// Se properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct SeProperties {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Protobuf versioning for config pbs. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    /// Placeholder for description of property se_agent_properties of obj type SeProperties field
    /// type str type object
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub se_agent_properties: Option<SeAgentProperties>,
    /// Placeholder for description of property se_bootup_properties of obj type SeProperties field
    /// type str type object
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub se_bootup_properties: Option<SeBootupProperties>,
    /// Placeholder for description of property se_runtime_properties of obj type SeProperties field
    /// type str type object
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub se_runtime_properties: Option<SeRuntimeProperties>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Unique object identifier of the object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Se resources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SeResources {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cores_per_socket: Option<i32>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub disk: Option<i32>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyper_threading: Option<bool>,
    /// Indicates that the SE is running on a Virtual Machine. Field introduced in 20.1.1. Allowed
    /// with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hypervisor_mode: Option<bool>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub memory: Option<i32>,
    /// Indicates the number of active datapath processes. Field introduced in 20.1.1. Allowed with
    /// any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_datapath_processes: Option<u32>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub num_vcpus: Option<i32>,
    /// Usage of Intel QAT for crypto offloads. Enum options - QAT_OFF, QAT_SW_ACCELERATION,
    /// QAT_HW_OFFLOAD. Field introduced in 31.1.1. Allowed with any value in Enterprise, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qat_mode: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sockets: Option<i32>,
}

/// Se upgrade params.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SeUpgradeParams {
    /// This field is used to disable scale-in/scale out operations during upgrade operations. .
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disruptive: Option<bool>,
    /// Upgrade System with patch upgrade. Field introduced in 17.2.2. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<bool>,
    /// Rollback System with patch upgrade. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch_rollback: Option<bool>,
    /// Resume from suspended state. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_from_suspend: Option<bool>,
    /// It is used in rollback operations. . Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rollback: Option<bool>,
    /// It is a reference to an object of type ServiceEngineGroup. Field introduced in 17.2.2.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub se_group_refs: Vec<String>,
    /// When set, this will skip upgrade on the Service Engine which is upgrade suspended state.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_suspended: Option<bool>,
    /// When set to true, if there is any failure during the SE upgrade, upgrade will be suspended
    /// for this SE group and manual intervention would be needed to resume the upgrade. Field
    /// introduced in 17.1.4. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspend_on_failure: Option<bool>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Se vs config se datastore download failed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SeVsConfigSeDatastoreDownloadFailed {
    /// Name of the failed config Object where Downlaod Fails. Field introduced in 31.1.1. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_obj_name: Option<String>,
    /// UUID of the failed config object. Field introduced in 31.1.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_obj_uuid: Option<String>,
    /// Reason for config download failure. Field introduced in 31.1.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_reason: Option<String>,
    /// UUID of the Top Level Object where Config Downlaod Failed. Field introduced in 31.1.1.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_obj_uuid: Option<String>,
    /// UUID of the SE responsible for this event. It is a reference to an object of type
    /// ServiceEngine. Field introduced in 31.1.1. Allowed with any value in Enterprise, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_ref: Option<String>,
    /// UUID of the VS where Config Downlaod Failed. It is a reference to an object of type
    /// VirtualService. Field introduced in 31.1.1. Allowed with any value in Enterprise, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vs_ref: Option<String>,
}

/// Se vs pkt buf high event details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SeVsPktBufHighEventDetails {
    /// Current packet buffer usage of the VS. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_value: Option<u32>,
    /// Buffer usage threshold value. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<u32>,
    /// Virtual Service name. It is a reference to an object of type VirtualService. Allowed with
    /// any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_service: Option<String>,
}

/// Service engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct ServiceEngine {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    /// It is a reference to an object of type Cloud. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_ref: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_mode: Option<bool>,
    /// Enum options - CONTAINER_TYPE_BRIDGE, CONTAINER_TYPE_HOST, CONTAINER_TYPE_HOST_DPDK. Allowed
    /// with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_type: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller_created: Option<bool>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller_ip: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub data_vnics: Vec<Vnic>,
    /// inorder to disable SE set this field appropriately. Enum options - SE_STATE_ENABLED,
    /// SE_STATE_DISABLED_FOR_PLACEMENT, SE_STATE_DISABLED, SE_STATE_DISABLED_FORCE,
    /// SE_STATE_DISABLED_WITH_SCALEIN, SE_STATE_DISABLED_NO_TRAFFIC,
    /// SE_STATE_DISABLED_FORCE_WITH_MIGRATE. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_state: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavor: Option<String>,
    /// It is a reference to an object of type VIMgrHostRuntime. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_ref: Option<String>,
    /// Enum options - DEFAULT, VMWARE_ESX, KVM, VMWARE_VSAN, XEN. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hypervisor: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub mgmt_vnic: Option<Vnic>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// If set to true, controller does not hotplugg the vNICs. Field introduced in 30.2.1. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsxt_no_hotplug: Option<bool>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub resources: Option<SeResources>,
    /// It is a reference to an object of type ServiceEngineGroup. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_group_ref: Option<String>,
    /// It is a reference to an object of type Tenant. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Service engine config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct ServiceEngineConfig {
    /// It is a reference to an object of type Cloud. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_ref: Option<String>,
    /// inorder to disable SE set this field appropriately. Enum options - SE_STATE_ENABLED,
    /// SE_STATE_DISABLED_FOR_PLACEMENT, SE_STATE_DISABLED, SE_STATE_DISABLED_FORCE,
    /// SE_STATE_DISABLED_WITH_SCALEIN, SE_STATE_DISABLED_NO_TRAFFIC,
    /// SE_STATE_DISABLED_FORCE_WITH_MIGRATE. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_state: Option<String>,
    /// It is a reference to an object of type VIMgrHostRuntime. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_ref: Option<String>,
    /// Management IPv6 Address of the service engine. Field introduced in 22.1.3. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub mgmt_ip6_address: Option<IpAddr>,
    /// Management IP Address of the service engine. Field introduced in 22.1.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub mgmt_ip_address: Option<IpAddr>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// It is a reference to an object of type ServiceEngineGroup. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_group_ref: Option<String>,
    /// It is a reference to an object of type Tenant. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// URL of the Service Engine. Field introduced in 22.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// Field introduced in 22.1.1. Allowed with any value in Enterprise, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub virtualservice_refs: Vec<String>,
    /// Field introduced in 22.1.1. Allowed with any value in Enterprise, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub vs_per_se_refs: Vec<String>,
}

/// Service engine params.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ServiceEngineParams {
    /// This parameter is used to control the number of concurrent segroup upgrades. This field
    /// value takes affect upon controller warm reboot. The value is modified based on flavor size
    /// of controller. Allowed values are 1-24. Field introduced in 31.1.1. Allowed with any value
    /// in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concurrent_segroup_upgrades: Option<u32>,
    /// This parameter defines the buffer size during ServiceEngine image downloads in a
    /// ServiceEngineGroup.It is used to pace the ServiceEngine upgrade package downloads so that
    /// controller network/CPU/Memory bandwidth is a bounded operation. It generally specifies the
    /// buffer size used for data transfer. Allowed values are 64-2048. Field introduced in 31.1.1.
    /// Unit is KB. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_data_transfer_size: Option<u32>,
    /// Amount of time Controller waits for a large-sized SE (>=128GB memory)to reconnect after it
    /// is rebooted during upgrade. Allowed values are 1200-2400. Field introduced in 31.1.1. Unit
    /// is SEC. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_se_connect_timeout: Option<u32>,
    /// Amount of time Controller waits for a regular-sized SE (<128GB memory)to reconnect after it
    /// is rebooted during upgrade. Allowed values are 600-1200. Field introduced in 31.1.1. Unit is
    /// SEC. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_connect_timeout: Option<u32>,
    /// Number of simultaneous ServiceEngine image downloads in a ServiceEngineGroup. It is used to
    /// pace ServiceEngine upgrade package downloads so that controller network/CPU bandwidth is a
    /// bounded operation. Allowed values are 1-20. Field introduced in 31.1.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simultaneous_image_downloads: Option<u32>,
    /// Base timeout value for all service engine upgrade operation tasks. The timeout for certain
    /// tasks is a multiple of this field. For example, in the CopyAndInstallImage task, the
    /// ServiceEngine has a maximum wait time to install an image or package, i.e., timeout =
    /// [scaling factor] * task_base_timeout. Allowed values are 300-3600. Field introduced in
    /// 31.1.1. Unit is SEC. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_base_timeout: Option<u32>,
}

/// Static route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct StaticRoute {
    /// Disable the gateway monitor for default gateway. They are monitored by default. Field
    /// introduced in 17.1.1. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_gateway_monitor: Option<bool>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub if_name: Option<String>,
    /// Labels associated with this route. Field introduced in 20.1.1. Maximum of 1 items allowed.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub labels: Vec<KeyValue>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required, nested)]
    pub next_hop: Option<IpAddr>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required, nested)]
    pub prefix: Option<IpAddrPrefix>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub route_id: Option<String>,
}

/// Vlan interface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct VlanInterface {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dhcp_enabled: Option<bool>,
    /// Enable the interface. Field introduced in 18.2.5. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub if_name: Option<String>,
    /// Enable IPv6 auto configuration. Field introduced in 18.1.1. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip6_autocfg_enabled: Option<bool>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_mgmt: Option<bool>,
    /// VLAN ID. Allowed values are 0-4096. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlan_id: Option<u32>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub vnic_networks: Vec<VnicNetwork>,
    /// It is a reference to an object of type VrfContext. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vrf_ref: Option<String>,
}
