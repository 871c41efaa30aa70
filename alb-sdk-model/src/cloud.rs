//! Cloud connector setup and infrastructure discovery.

use alb_sdk_macro::{AviObject, Validate};
use serde::{Deserialize, Serialize};

use crate::common::{
    AzureInfo, CdpLldpInfo, ConfigPbAttributes, ContentLibConfig, CorfuTimestamp, CustomParams,
    DataNetworkConfig, HostAttributes, IpAddr, IpAddrPrefix, KeyValue, ManagementNetworkConfig,
    NsxtTier1SegmentAutomaticMode, NsxtTier1SegmentManualMode, PortRange, RoleFilterMatchLabel,
    RoutingService, SeImageStatus, Subnet, SubnetRuntime, ViMgrIpSubnetRuntime,
};
use crate::serde_util::null_as_default;

/// APIC configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ApicConfiguration {
    /// Name of the Avi specific tenant created within APIC. Field deprecated in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apic_admin_tenant: Option<String>,
    /// vCenter's virtual machine manager domain within APIC. Field deprecated in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apic_domain: Option<String>,
    /// The hostname or IP address of the APIC controller. Field deprecated in 21.1.1.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub apic_name: Vec<String>,
    /// The password Avi Vantage will use when authenticating with APIC. Field deprecated in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apic_password: Option<String>,
    /// Field deprecated in 17.2.10,18.1.2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apic_product: Option<String>,
    /// The username Avi Vantage will use when authenticating with APIC. Field deprecated in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apic_username: Option<String>,
    /// Field deprecated in 17.2.10,18.1.2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apic_vendor: Option<String>,
    /// The password APIC will use when authenticating with Avi Vantage. Field deprecated in
    /// 17.2.10,18.1.2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avi_controller_password: Option<String>,
    /// The username APIC will use when authenticating with Avi Vantage. Field deprecated in
    /// 17.2.10,18.1.2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avi_controller_username: Option<String>,
    /// Context aware for supporting Service Graphs across VRFs. Enum options - SINGLE_CONTEXT,
    /// MULTI_CONTEXT. Field deprecated in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_aware: Option<String>,
    /// Field deprecated in 17.2.10,18.1.2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment: Option<String>,
    /// Use Managed Mode for APIC Service Insertion. Field deprecated in 17.2.10,18.1.2. Field
    /// introduced in 17.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_mode: Option<bool>,
    /// AVI Device Package Minor Version. Field deprecated in 17.2.10,18.1.2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minor: Option<String>,
    /// Determines if DSR from secondary SE is active or not False DSR active. Please ensure that
    /// APIC BD's Endpoint Dataplane Learning is disabled True Disable DSR unconditionally. . Field
    /// deprecated in 21.1.1. Field introduced in 17.2.10,18.1.2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_tunnel_mode: Option<bool>,
    /// AVI Device Package Version. Field deprecated in 17.2.10,18.1.2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// AWS setup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AwsSetup {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_key_id: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc_id: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_string: Option<String>,
    /// Enum options - NO_ACCESS, READ_ACCESS, WRITE_ACCESS. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privilege: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub region: Option<String>,
    /// Field introduced in 17.1.3. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
}

/// Azure setup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AzureSetup {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alb_id: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc_id: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nic_id: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub vips: Vec<IpAddr>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vnet_id: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub vs_uuids: Vec<String>,
}

/// Cloud stack setup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CloudStackSetup {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_key_id: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc_id: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_string: Option<String>,
    /// Enum options - NO_ACCESS, READ_ACCESS, WRITE_ACCESS. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privilege: Option<String>,
}

/// Cloud status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CloudStatus {
    /// Cloud Id. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc_id: Option<String>,
    /// If integration with NSX-T streaming service is enabled, this field will contain the state of
    /// connection. Applicable to NSX clouds only. Field introduced in 31.1.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub nsxt_streaming_server_status: Option<NsxtStreamingServerStatus>,
    /// Reason message for the current state. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// ServiceEngine image state. Field introduced in 18.2.6. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub se_image_state: Vec<SeImageStatus>,
    /// Cloud State. Enum options - CLOUD_STATE_UNKNOWN, CLOUD_STATE_IN_PROGRESS,
    /// CLOUD_STATE_FAILED, CLOUD_STATE_PLACEMENT_READY, CLOUD_STATE_DELETING,
    /// CLOUD_STATE_NOT_CONNECTED. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Cloud tenant cleanup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CloudTenantCleanup {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_ports: Option<u32>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_se: Option<u32>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_secgrp: Option<u32>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_svrgrp: Option<u32>,
}

/// Cloud vip parking intf.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CloudVipParkingIntf {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc_id: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_string: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intf_id: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub subnet_id: Option<String>,
    /// Enum options - CLOUD_NONE, CLOUD_VCENTER, CLOUD_OPENSTACK, CLOUD_AWS, CLOUD_VCA, CLOUD_APIC,
    /// CLOUD_MESOS, CLOUD_LINUXSERVER, CLOUD_DOCKER_UCP, CLOUD_RANCHER, CLOUD_OSHIFT_K8S,
    /// CLOUD_AZURE, CLOUD_GCP, CLOUD_NSXT. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vtype: Option<String>,
}

/// Container cloud service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ContainerCloudService {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc_id: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Custom IPAMDNS profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct CustomIpamdnsProfile {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Protobuf versioning for config pbs. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    /// Name of the Custom IPAM DNS Profile. Field introduced in 17.1.1.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// Parameters that are always passed to the IPAM/DNS script. Field introduced in 17.1.1.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub script_params: Vec<CustomParams>,
    /// Script URI of form controller //ipamdnsscripts/<file-name>, file-name must have a .py
    /// extension and conform to PEP8 naming convention. Field introduced in 17.1.1.
    ///
    /// Required.
    #[avi(required)]
    pub script_uri: Option<String>,
    /// It is a reference to an object of type Tenant. Field introduced in 17.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Field introduced in 17.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Gcp info.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GcpInfo {
    /// Hostname of this SE. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// Instance type of this SE. Field introduced in 22.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub machine_type: Option<String>,
    /// Network this SE is assigned. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub network: Option<String>,
    /// Project this SE belongs to. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub project: Option<String>,
    /// Subnet assigned to this SE. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet: Option<String>,
    /// Zone this SE is part of. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub zone: Option<String>,
}

/// IPAMDNS openstack profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct IpamdnsOpenstackProfile {
    /// Keystone's hostname or IP address. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keystone_host: Option<String>,
    /// The password Avi will use when authenticating to Keystone. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Region name. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// OpenStack tenant name. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant: Option<String>,
    /// The username Avi will use when authenticating to Keystone. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Network to be used for VIP allocation. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vip_network_name: Option<String>,
}

/// Linux server host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LinuxServerHost {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub host_attr: Vec<HostAttributes>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required, nested)]
    pub host_ip: Option<IpAddr>,
    /// Node's availability zone. ServiceEngines belonging to the availability zone will be rebooted
    /// during a manual DR failover. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_availability_zone: Option<String>,
    /// The SE Group association for the SE. If None, then 'Default-Group' SEGroup is associated
    /// with the SE. It is a reference to an object of type ServiceEngineGroup. Field introduced in
    /// 17.2.1. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_group_ref: Option<String>,
}

/// Marathon configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct MarathonConfiguration {
    /// Framework tag to be used in Virtualservice name. Default is framework name from Mesos. If
    /// this tag is altered atruntime, Virtualservices will be deleted and re-created. Allowed with
    /// any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework_tag: Option<String>,
    /// Password for Marathon authentication. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marathon_password: Option<String>,
    /// Marathon API URL of the form http //host port. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marathon_url: Option<String>,
    /// Username for Marathon authentication. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marathon_username: Option<String>,
    /// Private port range allocated to this Marathon framework instance. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub private_port_range: Option<PortRange>,
    /// Public port range allocated to this Marathon framework instance. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub public_port_range: Option<PortRange>,
    /// Tenant to pin this Marathon instance to. If set, a tenant object will be created in Avi
    /// bearing this name and all applications created in this marathon will be associated with this
    /// tenant regardless of, if any, tenant configuration in marathon label for this application.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant: Option<String>,
    /// Use Token based authentication instead of basic authentication. Token is refreshed every 5
    /// minutes. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_token_auth: Option<bool>,
    /// Tag VS name with framework name or framework_tag. Useful in deployments with multiple
    /// frameworks. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vs_name_tag_framework: Option<bool>,
}

/// Network.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct Network {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Key/value network attributes. Field introduced in 20.1.1. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub attrs: Vec<KeyValue>,
    /// It is a reference to an object of type Cloud. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_ref: Option<String>,
    /// Protobuf versioning for config pbs. Field introduced in 21.1.1. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub configured_subnets: Vec<Subnet>,
    /// Select the IP address management scheme for this Network. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dhcp_enabled: Option<bool>,
    /// When selected, excludes all discovered subnets in this network from consideration for
    /// virtual service placement. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_discovered_subnets: Option<bool>,
    /// Enable IPv6 auto configuration. Field introduced in 18.1.1. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip6_autocfg_enabled: Option<bool>,
    /// List of labels to be used for granular RBAC. Field introduced in 20.1.5. Allowed with any
    /// value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub markers: Vec<RoleFilterMatchLabel>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synced_from_se: Option<bool>,
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
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vcenter_dvs: Option<bool>,
    /// It is a reference to an object of type VIMgrNWRuntime. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vimgrnw_ref: Option<String>,
    /// It is a reference to an object of type VrfContext. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vrf_context_ref: Option<String>,
}

/// Network runtime.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct NetworkRuntime {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// Objects using static IPs in this network. Field introduced in 20.1.3. Allowed with any value
    /// in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub obj_uuids: Vec<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub subnet_runtime: Vec<SubnetRuntime>,
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

/// Network service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct NetworkService {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// It is a reference to an object of type Cloud. Field introduced in 18.2.5.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_ref: Option<String>,
    /// Protobuf versioning for config pbs. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    /// Key value pairs for granular object access control. Also allows for classification and
    /// tagging of similar objects. Field deprecated in 20.1.5. Field introduced in 20.1.2. Maximum
    /// of 4 items allowed.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub labels: Vec<KeyValue>,
    /// List of labels to be used for granular RBAC. Field introduced in 20.1.5. Allowed in Basic
    /// edition, Essentials edition, Enterprise edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub markers: Vec<RoleFilterMatchLabel>,
    /// Name of the NetworkService. Field introduced in 18.2.5.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// Routing Information of the NetworkService. Field introduced in 18.2.5.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub routing_service: Option<RoutingService>,
    /// Service Engine Group to which the service is applied. It is a reference to an object of type
    /// ServiceEngineGroup. Field introduced in 18.2.5.
    ///
    /// Required.
    #[avi(required)]
    pub se_group_ref: Option<String>,
    /// Indicates the type of NetworkService. Enum options - ROUTING_SERVICE. Field introduced in
    /// 18.2.5.
    ///
    /// Required.
    #[avi(required)]
    pub service_type: Option<String>,
    /// It is a reference to an object of type Tenant. Field introduced in 18.2.5.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// UUID of the NetworkService. Field introduced in 18.2.5.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// VRF context to which the service is scoped. It is a reference to an object of type
    /// VrfContext. Field introduced in 18.2.5.
    ///
    /// Required.
    #[avi(required)]
    pub vrf_ref: Option<String>,
}

/// Nsx configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct NsxConfiguration {
    /// This prefix will be added to the names of all NSX objects created by Avi Controller. It
    /// should be unique across all the Avi Controller clusters. Field deprecated in 21.1.1. Field
    /// introduced in 17.1.1.
    ///
    /// Required.
    #[avi(required)]
    pub avi_nsx_prefix: Option<String>,
    /// The hostname or IP address of the NSX MGr. Field deprecated in 21.1.1. Field introduced in
    /// 17.1.1.
    ///
    /// Required.
    #[avi(required)]
    pub nsx_manager_name: Option<String>,
    /// The password Avi Vantage will use when authenticating with NSX Mgr. Field deprecated in
    /// 21.1.1. Field introduced in 17.1.1.
    ///
    /// Required.
    #[avi(required)]
    pub nsx_manager_password: Option<String>,
    /// The username Avi Vantage will use when authenticating with NSX Mgr. Field deprecated in
    /// 21.1.1. Field introduced in 17.1.1.
    ///
    /// Required.
    #[avi(required)]
    pub nsx_manager_username: Option<String>,
    /// The interval (in secs) with which Avi Controller polls the NSX Manager for updates. Field
    /// deprecated in 21.1.1. Field introduced in 17.1.1. Unit is SECONDS.
    ///
    /// Required.
    #[avi(required)]
    pub nsx_poll_time: Option<i32>,
}

/// Nsxt configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct NsxtConfiguration {
    /// Automatically create/delete DFW objects such as NSGroups and NSServices in NSX-T Manager.
    /// Field introduced in 30.2.1. Allowed with any value in Enterprise, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automate_dfw_objects: Option<bool>,
    /// Automatically create DFW rules for VirtualService in NSX-T Manager. Field introduced in
    /// 20.1.1. Allowed with any value in Enterprise, Essentials, Enterprise with Cloud Services
    /// edition. Allowed in Basic (Allowed values- false) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automate_dfw_rules: Option<bool>,
    /// Data network configuration for Avi Service Engines. Field introduced in 20.1.5. Allowed with
    /// any value in Enterprise, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub data_network_config: Option<DataNetworkConfig>,
    /// Domain where NSGroup objects belongs to. Field introduced in 20.1.1. Allowed with any value
    /// in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<String>,
    /// Enforcement point is where the rules of a policy to apply. Field introduced in 20.1.1.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enforcementpoint_id: Option<String>,
    /// Management network configuration for Avi Service Engines. Field introduced in 20.1.5.
    /// Allowed with any value in Enterprise, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub management_network_config: Option<ManagementNetworkConfig>,
    /// Credentials to access NSX-T manager. It is a reference to an object of type
    /// CloudConnectorUser. Field introduced in 20.1.1. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsxt_credentials_ref: Option<String>,
    /// NSX-T manager hostname or IP address. Field introduced in 20.1.1. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsxt_url: Option<String>,
    /// Site where transport zone belongs to. Field introduced in 20.1.1. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
    /// Flag to identify the DFW scheme implemented by cloud connector, If enabled, the DFW scheme
    /// will group and reduce the number of DFW objects created on NSX. The objects will be grouped
    /// per Tier-1/Segment. Field introduced in 31.2.1. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub streamline_dfw_objects: Option<bool>,
    /// Flag is used to indicate whether TLS certificate verificationbe done when establishing a
    /// connection to a vCenter and NSX-T Manager. Field introduced in 31.1.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_certificate: Option<bool>,
    /// VMC mode. Field introduced in 30.1.1. Allowed with any value in Enterprise, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vmc_mode: Option<bool>,
    /// VPC Mode. Field introduced in 30.1.1. Allowed with any value in Enterprise, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_mode: Option<bool>,
}

/// Nsxt image details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct NsxtImageDetails {
    /// Cloud Id. Field introduced in 20.1.1. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc_id: Option<String>,
    /// Error message. Field introduced in 20.1.1. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_string: Option<String>,
    /// Image version. Field introduced in 20.1.1. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_version: Option<String>,
    /// VC url. Field introduced in 20.1.1. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vc_url: Option<String>,
}

/// Nsxt SI rule details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct NsxtSiRuleDetails {
    /// Rule Action. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Destinatios excluded or not. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destexclude: Option<bool>,
    /// Destination of redirection rule. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub dests: Vec<String>,
    /// Rule Direction. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    /// Error message. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_string: Option<String>,
    /// Pool name. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool: Option<String>,
    /// ServiceEngineGroup name. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segroup: Option<String>,
    /// Services of redirection rule. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub services: Vec<String>,
    /// Sources of redirection rule. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub sources: Vec<String>,
}

/// Nsxt streaming server status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct NsxtStreamingServerStatus {
    /// Timestamp (unix time since epoch) of last message received from NSX-T streaming service.
    /// Field introduced in 31.1.1. Allowed with any value in Enterprise, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub cursor: Option<CorfuTimestamp>,
    /// Error encountered while processing updates fromstreaming agent. This will be empty if the
    /// last update was successful. This message should also indicate if the failure was in
    /// full-sync or delta-sync processing. Field introduced in 31.1.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update_err: Option<String>,
    /// Human readable timestamp of last successful update done in Avi. Field introduced in 31.1.1.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update_time: Option<String>,
    /// Hostname or IP of NSX-T manager as given in cloud config. Field introduced in 31.1.1.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsxt_manager_url: Option<String>,
    /// State of the connection to NSX-T manager streaming service gRPC client. Field introduced in
    /// 31.1.1. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Nsxt tier 1 segment config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct NsxtTier1SegmentConfig {
    /// Avi controller creates and manages logical segments for a Tier-1 LR. Field introduced in
    /// 20.1.1. Allowed with any value in Enterprise, Essentials, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub automatic: Option<NsxtTier1SegmentAutomaticMode>,
    /// Avi Admin selects an available logical segment (created by NSX-T admin) associated with a
    /// Tier-1 LR. Field introduced in 20.1.1. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub manual: Option<NsxtTier1SegmentManualMode>,
    /// Config Mode for selecting the placement logical segments for Avi ServiceEngine data path.
    /// Enum options - TIER1_SEGMENT_MANUAL, TIER1_SEGMENT_AUTOMATIC. Field introduced in 20.1.1.
    /// Allowed with any value in Enterprise, Essentials, Enterprise with Cloud Services edition.
    /// Allowed in Basic (Allowed values- TIER1_SEGMENT_MANUAL) edition.
    ///
    /// Required.
    #[avi(required)]
    pub segment_config_mode: Option<String>,
}

/// Nuage SDN controller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct NuageSdnController {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nuage_organization: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nuage_password: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nuage_port: Option<u32>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nuage_username: Option<String>,
    /// Nuage VSD host name or IP address. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nuage_vsd_host: Option<String>,
    /// Domain to be used for SE creation. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_domain: Option<String>,
    /// Enterprise to be used for SE creation. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_enterprise: Option<String>,
    /// Network to be used for SE creation. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_network: Option<String>,
    /// Policy Group to be used for SE creation. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_policy_group: Option<String>,
    /// User to be used for SE creation. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_user: Option<String>,
    /// Zone to be used for SE creation. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_zone: Option<String>,
}

/// OCI setup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct OciSetup {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc_id: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenancy: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vcn_id: Option<String>,
}

/// Open stack cluster setup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct OpenStackClusterSetup {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_tenant: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_url: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc_id: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_string: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub keystone_host: Option<String>,
    /// Enum options - NO_ACCESS, READ_ACCESS, WRITE_ACCESS. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privilege: Option<String>,
}

/// Open stack IP change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct OpenStackIpChange {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_string: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required, nested)]
    pub ip: Option<IpAddr>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_addr: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_uuid: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_vm_uuid: Option<String>,
}

/// Proxy configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ProxyConfiguration {
    /// Proxy hostname or IP address. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub host: Option<String>,
    /// Password for proxy. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Proxy port. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub port: Option<u32>,
    /// Username for proxy. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// V center configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct VCenterConfiguration {
    /// vCenter content library where Service Engine images are stored. Field introduced in 22.1.1.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub content_lib: Option<ContentLibConfig>,
    /// Datacenter for virtual infrastructure discovery. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datacenter: Option<String>,
    /// Managed object id of the datacenter. Field introduced in 30.2.1. Allowed with any value in
    /// Enterprise, Essentials, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datacenter_managed_object_id: Option<String>,
    /// If true, NSX-T segment spanning multiple VDS with vCenter cloud are merged to a single
    /// network in Avi. Field introduced in 22.1.3. Allowed with any value in Enterprise, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_nsx_environment: Option<bool>,
    /// Management subnet to use for Avi Service Engines. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub management_ip_subnet: Option<IpAddrPrefix>,
    /// Management network to use for Avi Service Engines. It is a reference to an object of type
    /// VIMgrNWRuntime. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management_network: Option<String>,
    /// The password Avi Vantage will use when authenticating with vCenter. Allowed with any value
    /// in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Set the access mode to vCenter as either Read, which allows Avi to discover networks and
    /// servers, or Write, which also allows Avi to create Service Engines and configure their
    /// network properties. Enum options - NO_ACCESS, READ_ACCESS, WRITE_ACCESS. Allowed with any
    /// value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub privilege: Option<String>,
    /// If false, Service Engine image will not be pushed to content library. Field introduced in
    /// 22.1.1. Allowed with any value in Enterprise, Essentials, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_content_lib: Option<bool>,
    /// The username Avi Vantage will use when authenticating with vCenter. Allowed with any value
    /// in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Avi Service Engine Template in vCenter to be used for creating Service Engines. Allowed with
    /// any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vcenter_template_se_location: Option<String>,
    /// vCenter hostname or IP address. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vcenter_url: Option<String>,
    /// Flag is used to indicate whether TLS certificate verificationbe done when establishing a
    /// connection to a vCenter server. Field introduced in 31.1.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_certificate: Option<bool>,
}

/// VCA setup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct VcaSetup {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc_id: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_string: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub instance: Option<String>,
    /// Enum options - NO_ACCESS, READ_ACCESS, WRITE_ACCESS. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privilege: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// Vcenter non drs cluster details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct VcenterNonDrsClusterDetails {
    /// Cloud id. Field introduced in 31.2.1. Allowed with any value in Enterprise, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc_id: Option<String>,
    /// A list of cluster IDs having DRS disabled. Field introduced in 31.2.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub non_drs_cluster_ids: Vec<String>,
    /// The UUID of the Service Engine whose placement triggered this event. Field introduced in
    /// 31.2.1. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_vm_uuid: Option<String>,
}

/// VI mgr guest nic runtime.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ViMgrGuestNicRuntime {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avi_internal_network: Option<bool>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connected: Option<bool>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub del_pending: Option<bool>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub guest_ip: Vec<ViMgrIpSubnetRuntime>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub mac_addr: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mgmt_vnic: Option<bool>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_name: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_uuid: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_port_uuid: Option<String>,
    /// Segment port of the vnic assigned to SE. Field introduced in 31.2.1. Allowed with any value
    /// in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_port: Option<String>,
    /// Enum options - CLOUD_NONE, CLOUD_VCENTER, CLOUD_OPENSTACK, CLOUD_AWS, CLOUD_VCA, CLOUD_APIC,
    /// CLOUD_MESOS, CLOUD_LINUXSERVER, CLOUD_DOCKER_UCP, CLOUD_RANCHER, CLOUD_OSHIFT_K8S,
    /// CLOUD_AZURE, CLOUD_GCP, CLOUD_NSXT. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub r#type: Option<String>,
}

/// VI mgr host runtime.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct ViMgrHostRuntime {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// It is a reference to an object of type Cloud. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_ref: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_uuid: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cntlr_accessible: Option<bool>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_state: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_hz: Option<i64>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_mode: Option<bool>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub managed_object_id: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mem: Option<i64>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mgmt_portgroup: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub network_uuids: Vec<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_cpu_cores: Option<i32>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_cpu_packages: Option<i32>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_cpu_threads: Option<i32>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub pnics: Vec<CdpLldpInfo>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub powerstate: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quarantine_start_ts: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quarantined: Option<bool>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quarantined_periods: Option<i32>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_fail_cnt: Option<i32>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_success_cnt: Option<i32>,
    /// It is a reference to an object of type Tenant. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// Enum options - CLOUD_NONE, CLOUD_VCENTER, CLOUD_OPENSTACK, CLOUD_AWS, CLOUD_VCA, CLOUD_APIC,
    /// CLOUD_MESOS, CLOUD_LINUXSERVER, CLOUD_DOCKER_UCP, CLOUD_RANCHER, CLOUD_OSHIFT_K8S,
    /// CLOUD_AZURE, CLOUD_GCP, CLOUD_NSXT. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub r#type: Option<String>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// It is a reference to an object of type VIMgrVMRuntime. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub vm_refs: Vec<String>,
}

/// VI mgr SEVM runtime.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct ViMgrSevmRuntime {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// availability_zone of VIMgrSEVMRuntime.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    /// Field introduced in 17.2.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub azure_info: Option<AzureInfo>,
    /// cloud_name of VIMgrSEVMRuntime.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_name: Option<String>,
    /// It is a reference to an object of type Cloud.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_ref: Option<String>,
    /// ServiceEngine deployed on cluster.Ex MOB domain-c23. Field introduced in 20.1.7, 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,
    /// ServiceEngine added to cluster vmgroup. Field introduced in 20.1.7, 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_vmgroup: Option<String>,
    /// connection_state of VIMgrSEVMRuntime.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_state: Option<String>,
    /// Unique object identifier of controller_cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller_cluster_uuid: Option<String>,
    /// controller_ip_addr of VIMgrSEVMRuntime.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller_ip_addr: Option<String>,
    /// Service Engine Cookie set by the resource manager. Field introduced in 18.2.2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie: Option<String>,
    /// Placeholder for description of property creation_in_progress of obj type VIMgrSEVMRuntime
    /// field type str type boolean
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_in_progress: Option<bool>,
    /// Placeholder for description of property deletion_in_progress of obj type VIMgrSEVMRuntime
    /// field type str type boolean
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_in_progress: Option<bool>,
    /// discovery_response of VIMgrSEVMRuntime.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discovery_response: Option<String>,
    /// Number of discovery_status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discovery_status: Option<i32>,
    /// Disk space in GB for each service engine VM. Field introduced in 18.2.2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_gb: Option<i32>,
    /// flavor of VIMgrSEVMRuntime.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavor: Option<String>,
    /// GCP Project ID in which SE is created. This field is applicable for GCP cloud type only.
    /// Field introduced in 20.1.7, 21.1.2, 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcp_se_project_id: Option<String>,
    /// Placeholder for description of property guest_nic of obj type VIMgrSEVMRuntime field type
    /// str type object
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub guest_nic: Vec<ViMgrGuestNicRuntime>,
    /// host of VIMgrSEVMRuntime.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// It is a reference to an object of type VIMgrHostRuntime.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_ref: Option<String>,
    /// hostid of VIMgrSEVMRuntime.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostid: Option<String>,
    /// Enum options - DEFAULT, VMWARE_ESX, KVM, VMWARE_VSAN, XEN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hypervisor: Option<String>,
    /// Number of init_vnics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_vnics: Option<i32>,
    /// Number of last_discovery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_discovery: Option<i32>,
    /// managed_object_id of VIMgrSEVMRuntime.
    ///
    /// Required.
    #[avi(required)]
    pub managed_object_id: Option<String>,
    /// Memory in MB for each service engine VM. Field introduced in 18.2.2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_mb: Option<i32>,
    /// Name of the object.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// powerstate of VIMgrSEVMRuntime.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub powerstate: Option<String>,
    /// Unique object identifier of security_group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_group_uuid: Option<String>,
    /// It is a reference to an object of type ServiceEngineGroup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segroup_ref: Option<String>,
    /// Unique object identifier of server_group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_group_uuid: Option<String>,
    /// It is a reference to an object of type Tenant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// Enum options - CLOUD_NONE, CLOUD_VCENTER, CLOUD_OPENSTACK, CLOUD_AWS, CLOUD_VCA, CLOUD_APIC,
    /// CLOUD_MESOS, CLOUD_LINUXSERVER, CLOUD_DOCKER_UCP, CLOUD_RANCHER, CLOUD_OSHIFT_K8S,
    /// CLOUD_AZURE, CLOUD_GCP, CLOUD_NSXT.
    ///
    /// Required.
    #[avi(required)]
    pub r#type: Option<String>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Unique object identifier of the object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// Unique object identifier of vcenter_datacenter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vcenter_datacenter_uuid: Option<String>,
    /// ServiceEngine host connection state in vCenter. Field introduced in 20.1.7, 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vcenter_host_connection_state: Option<String>,
    /// VCenter Host HA state.Ex election, fdmUnreachable, hostDown, initializationError,
    /// networkIsolated, uninitializationError, uninitialized. Field introduced in 20.1.7, 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vcenter_host_ha_state: Option<String>,
    /// ServiceEngine instance uuid from vCenter. Field introduced in 20.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vcenter_instance_uuid: Option<String>,
    /// ServiceEngine belongs to VCenter. It is a reference to an object of type VCenterServer.
    /// Field introduced in 20.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vcenter_ref: Option<String>,
    /// vcenter_rm_cookie of VIMgrSEVMRuntime.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vcenter_rm_cookie: Option<String>,
    /// Enum options - VIMGR_SE_NETWORK_ADMIN, VIMGR_SE_UNIFIED_ADMIN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vcenter_se_type: Option<String>,
    /// Placeholder for description of property vcenter_template_vm of obj type VIMgrSEVMRuntime
    /// field type str type boolean
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vcenter_template_vm: Option<bool>,
    /// Service Engine deployed in vcenter. Field introduced in 20.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vcenter_url: Option<String>,
    /// vcenter_vAppName of VIMgrSEVMRuntime.
    #[serde(rename = "vcenter_vAppName", skip_serializing_if = "Option::is_none")]
    pub vcenter_v_app_name: Option<String>,
    /// vcenter_vAppVendor of VIMgrSEVMRuntime.
    #[serde(rename = "vcenter_vAppVendor", skip_serializing_if = "Option::is_none")]
    pub vcenter_v_app_vendor: Option<String>,
    /// Enum options - VMTYPE_SE_VM, VMTYPE_POOL_SRVR.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vcenter_vm_type: Option<String>,
    /// Count of vcpus for each service engine VM. Field introduced in 18.2.2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vcpus: Option<i32>,
    /// VSphere HA on cluster enabled or not. Field introduced in 20.1.7, 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vsphere_ha_enabled: Option<bool>,
    /// If this flag is set to True, vCenter vSphere HA handles ServiceEngine failure. This flag is
    /// set dynamiclly based on underlying ESX HA state(connected, hostDown..etc). Field introduced
    /// in 20.1.7, 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vsphere_ha_inprogress: Option<bool>,
}

/// Vinfra disc summary details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct VinfraDiscSummaryDetails {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_clusters: Option<i64>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_dcs: Option<i64>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_hosts: Option<i64>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_nws: Option<i64>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_vms: Option<i64>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub vcenter: Option<String>,
}
