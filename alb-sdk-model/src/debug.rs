//! Debug filters for controller and service engine subsystems.

use alb_sdk_macro::{AviObject, Validate};
use serde::{Deserialize, Serialize};

use crate::common::{
    AlertMgrDebugFilter, CaptureIpc, CloudConnectorDebugFilter, DebugDnsOptions, DebugIpAddr,
    DebugVirtualServiceCapture, DebugVirtualServiceObjSync, DebugVirtualServiceSeParams,
    DebugVsDataplane, MetricsApiSrvDebugFilter, MetricsMgrDebugFilter, SeMgrDebugFilter,
    SeRpcProxyDebugFilter, StateCacheMgrDebugFilter, VsDebugFilter,
};
use crate::serde_util::null_as_default;

/// Auto scale mgr debug filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AutoScaleMgrDebugFilter {
    /// Enable aws autoscale integration. This is an alpha feature. Field introduced in 17.1.1.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_aws_autoscale_integration: Option<bool>,
    /// period of running intelligent autoscale check. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intelligent_autoscale_period: Option<u32>,
    /// uuid of the Pool. It is a reference to an object of type Pool. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_ref: Option<String>,
}

/// Capture filters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CaptureFilters {
    /// Per packet IP filter. Matches with source and destination address. Curently not applicable
    /// for DebugServiceEngine. Field introduced in 18.2.5.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub capture_ip: Option<DebugIpAddr>,
    /// Capture filter for SE IPC. Not applicable for Debug Virtual Service. Field introduced in
    /// 18.2.5.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub capture_ipc: Option<CaptureIpc>,
    /// Destination Port range filter. Field introduced in 18.2.5.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dst_port_end: Option<i32>,
    /// Destination Port range filter. Field introduced in 18.2.5.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dst_port_start: Option<i32>,
    /// Ethernet Proto filter. Enum options - ETH_TYPE_IPV4. Field introduced in 18.2.5.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eth_proto: Option<String>,
    /// IP Proto filter. Support for TCP only for now. Enum options - IP_TYPE_TCP. Field introduced
    /// in 18.2.5.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_proto: Option<String>,
    /// Source Port filter. Field introduced in 18.2.5.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_port: Option<i32>,
    /// Source Port range end filter. If specified, the source port filter will be a range. The
    /// filter range will be between src_port and src_port_range_end. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_port_range_end: Option<i32>,
    /// TCP ACK flag filter. Field introduced in 18.2.5.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tcp_ack: Option<bool>,
    /// TCP FIN flag filter. Field introduced in 18.2.5.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tcp_fin: Option<bool>,
    /// TCP PUSH flag filter. Field introduced in 18.2.5.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tcp_push: Option<bool>,
    /// TCP SYN flag filter. Field introduced in 18.2.5.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tcp_syn: Option<bool>,
}

/// Debug controller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct DebugController {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub filters: Option<DebugFilterUnion>,
    /// Global logging level for the application. Enum options - LOG_LEVEL_DISABLED, LOG_LEVEL_INFO,
    /// LOG_LEVEL_WARNING, LOG_LEVEL_ERROR, LOG_LEVEL_DEBUG. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub log_level: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// Enum options - TASK_QUEUE_DEBUG, RPC_INFRA_DEBUG, JOB_MGR_DEBUG, TRANSACTION_DEBUG,
    /// SE_AGENT_DEBUG, SE_AGENT_METRICS_DEBUG, VIRTUALSERVICE_DEBUG, RES_MGR_DEBUG, SE_MGR_DEBUG,
    /// VI_MGR_DEBUG, METRICS_MANAGER_DEBUG, METRICS_MGR_DEBUG, EVENT_API_DEBUG, HS_MGR_DEBUG,
    /// ALERT_MGR_DEBUG, AUTOSCALE_MGR_DEBUG, APIC_AGENT_DEBUG, REDIS_INFRA_DEBUG,
    /// CLOUD_CONNECTOR_DEBUG, MESOS_METRICS_DEBUG, STATECACHE_MGR_DEBUG, NSX_AGENT_DEBUG,
    /// SE_AGENT_CPU_UTIL_DEBUG, SE_AGENT_MEM_UTIL_DEBUG, SE_RPC_PROXY_DEBUG, SE_AGENT_GSLB_DEBUG,
    /// METRICSAPI_SRV_DEBUG, SECURITYMGR_DEBUG, RES_MGR_READ_DEBUG, LICENSE_VMWSRVR_DEBUG,
    /// SE_AGENT_RESOLVERDB_DEBUG, LOGMANAGER_DEBUG, OSYNC_DEBUG, EVENTMANAGER_DEBUG,
    /// SHARD_ORCHESTRATOR_DEBUG, RUNNOTIFICATIONS_DEBUG, JOBMANAGER_DEBUG, DNS_MANAGER_DEBUG,
    /// SECURE_KEY_EXCHANGE_DEBUG, SE_DATASTORE_DEBUG, FEDERATED_DATASTORE_DEBUG,
    /// SHARD_SERVER_DEBUG, SE_GRPC_AUTH_SERVER_DEBUG, SE_CONTROLLER_INTF_DEBUG,
    /// CLUSTER_SERVICES_WATCHER_DEBUG, SEUPGRADE_PARENT_DEBUG, PORTALCONNECTOR_DEBUG,
    /// PROCESS_EVENT_FORWARDER_DEBUG, DIFF_COMPACTOR_DEBUG, RES_MGR_GO_DEBUG,
    /// PLACEMENT_ORCHESTRATOR_DEBUG, LICENSE_MGR_DEBUG, OCTAVIUS_DEBUG, GSLB_LOCAL_WORKER_DEBUG,
    /// GSLB_REMOTE_WORKER_DEBUG, IMAGE_MANAGER_DEBUG, STATEDIFF_SERVICE_DEBUG,
    /// REMOTE_TASK_MANAGER_DEBUG, REMOTE_TASK_MANAGER_CLIENT_DEBUG, AVISCP_SERVER_DEBUG,
    /// UPGRADE_PORTAL_DEBUG, AUTHSERVER_DEBUG, APISERVER_DEBUG, GSLBPORTAL_DEBUG,
    /// ANALYTICS_ENGINE_LOGRECEIVER_DEBUG, CLUSTIFY_DEBUG, IPGEOLOCATIONSERVER_DEBUG,
    /// SYSTEM_HEALTH_AGENT_DEBUG, SYSTEM_HEALTH_SERVICE_DEBUG, TECH_SUPPORT_HANDLER_DEBUG,
    /// SE_AUTOSCALER_DEBUG, REPORTING_SERVER_DEBUG. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub sub_module: Option<String>,
    /// It is a reference to an object of type Tenant. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// Application specific customization of trace level for logs. Enum options -
    /// TRACE_LEVEL_DISABLED, TRACE_LEVEL_ERROR, TRACE_LEVEL_DEBUG, TRACE_LEVEL_DEBUG_DETAIL.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub trace_level: Option<String>,
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

/// Debug filter union.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DebugFilterUnion {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub alert_debug_filter: Option<AlertMgrDebugFilter>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub autoscale_mgr_debug_filter: Option<AutoScaleMgrDebugFilter>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub cloud_connector_debug_filter: Option<CloudConnectorDebugFilter>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub hs_debug_filter: Option<HsMgrDebugFilter>,
    /// Add filter to Log Manager Debug. Field introduced in 21.1.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub logmanager_debug_filter: Option<LogManagerDebugFilter>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub mesos_metrics_debug_filter: Option<MesosMetricsDebugFilter>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub metrics_debug_filter: Option<MetricsMgrDebugFilter>,
    /// Add Metricsapi Server filter. Field introduced in 18.2.3. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub metricsapi_srv_debug_filter: Option<MetricsApiSrvDebugFilter>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub se_mgr_debug_filter: Option<SeMgrDebugFilter>,
    /// Add SE RPC Proxy Filter. Field introduced in 18.1.5, 18.2.1. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub se_rpc_proxy_filter: Option<SeRpcProxyDebugFilter>,
    /// Add Metricsapi Server filter. Field introduced in 18.2.6. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub securitymgr_debug_filter: Option<SecurityMgrDebugFilter>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub state_cache_mgr_debug_filter: Option<StateCacheMgrDebugFilter>,
    /// Enum options - TASK_QUEUE_DEBUG, RPC_INFRA_DEBUG, JOB_MGR_DEBUG, TRANSACTION_DEBUG,
    /// SE_AGENT_DEBUG, SE_AGENT_METRICS_DEBUG, VIRTUALSERVICE_DEBUG, RES_MGR_DEBUG, SE_MGR_DEBUG,
    /// VI_MGR_DEBUG, METRICS_MANAGER_DEBUG, METRICS_MGR_DEBUG, EVENT_API_DEBUG, HS_MGR_DEBUG,
    /// ALERT_MGR_DEBUG, AUTOSCALE_MGR_DEBUG, APIC_AGENT_DEBUG, REDIS_INFRA_DEBUG,
    /// CLOUD_CONNECTOR_DEBUG, MESOS_METRICS_DEBUG, STATECACHE_MGR_DEBUG, NSX_AGENT_DEBUG,
    /// SE_AGENT_CPU_UTIL_DEBUG, SE_AGENT_MEM_UTIL_DEBUG, SE_RPC_PROXY_DEBUG, SE_AGENT_GSLB_DEBUG,
    /// METRICSAPI_SRV_DEBUG, SECURITYMGR_DEBUG, RES_MGR_READ_DEBUG, LICENSE_VMWSRVR_DEBUG,
    /// SE_AGENT_RESOLVERDB_DEBUG, LOGMANAGER_DEBUG, OSYNC_DEBUG, EVENTMANAGER_DEBUG,
    /// SHARD_ORCHESTRATOR_DEBUG, RUNNOTIFICATIONS_DEBUG, JOBMANAGER_DEBUG, DNS_MANAGER_DEBUG,
    /// SECURE_KEY_EXCHANGE_DEBUG, SE_DATASTORE_DEBUG, FEDERATED_DATASTORE_DEBUG,
    /// SHARD_SERVER_DEBUG, SE_GRPC_AUTH_SERVER_DEBUG, SE_CONTROLLER_INTF_DEBUG,
    /// CLUSTER_SERVICES_WATCHER_DEBUG, SEUPGRADE_PARENT_DEBUG, PORTALCONNECTOR_DEBUG,
    /// PROCESS_EVENT_FORWARDER_DEBUG, DIFF_COMPACTOR_DEBUG, RES_MGR_GO_DEBUG,
    /// PLACEMENT_ORCHESTRATOR_DEBUG, LICENSE_MGR_DEBUG, OCTAVIUS_DEBUG, GSLB_LOCAL_WORKER_DEBUG,
    /// GSLB_REMOTE_WORKER_DEBUG, IMAGE_MANAGER_DEBUG, STATEDIFF_SERVICE_DEBUG,
    /// REMOTE_TASK_MANAGER_DEBUG, REMOTE_TASK_MANAGER_CLIENT_DEBUG, AVISCP_SERVER_DEBUG,
    /// UPGRADE_PORTAL_DEBUG, AUTHSERVER_DEBUG, APISERVER_DEBUG, GSLBPORTAL_DEBUG,
    /// ANALYTICS_ENGINE_LOGRECEIVER_DEBUG, CLUSTIFY_DEBUG, IPGEOLOCATIONSERVER_DEBUG,
    /// SYSTEM_HEALTH_AGENT_DEBUG, SYSTEM_HEALTH_SERVICE_DEBUG, TECH_SUPPORT_HANDLER_DEBUG,
    /// SE_AUTOSCALER_DEBUG, REPORTING_SERVER_DEBUG. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub r#type: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub vs_debug_filter: Option<VsDebugFilter>,
}

/// Debug service engine sustained CPU spike.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DebugServiceEngineSustainedCpuSpike {
    /// cpu(s) filter for which high load will trigger debug data collection. Should be comma
    /// seperated with no space ( eg 0,1,4 ). Ranges can be given ( eg 2,4-6 ). Field introduced in
    /// 31.1.2. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_filter: Option<String>,
    /// Average Percent usage of CPU ( either total and/or percpu ) to be considered for CPU to be
    /// under high load. Allowed values are 0-100. Field introduced in 31.1.2. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_spike_percent: Option<u32>,
    /// Toggle High CPU Trigger action. Set to true, to dis-enable High CPU Data Collection Script
    /// invocation. Field introduced in 31.1.2. Allowed with any value in Enterprise, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dis_enable: Option<bool>,
    /// Invokes High CPU Data Collection on SE for duration of an hour. Alert Operator will have to
    /// manually dis-enable this and manage SE disk-space!. Field introduced in 31.1.2. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_start: Option<bool>,
    /// List of process' pid(s) for which debug data should be recorded. Field introduced in 31.1.2.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub pids: Vec<i64>,
    /// List of process' name(s) for which debug data should be recorded. Field introduced in
    /// 31.1.2. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub process_names: Vec<String>,
    /// Interval between each such script invocation. Should be >= 60. Allowed values are 60-864000.
    /// Field introduced in 31.1.2. Unit is SEC. Allowed with any value in Enterprise, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_cooldown: Option<u32>,
    /// Duration of debug data to be collected. Should be >= 11. Allowed values are 11-864000. Field
    /// introduced in 31.1.2. Unit is SEC. Allowed with any value in Enterprise, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_duration: Option<u32>,
    /// Time Duration ( in seconds ) to be considered for CPU to be consistently under high load.
    /// Should be >= 60s. CPU usage data is collected every 5s. Allowed values are 60-864000. Field
    /// introduced in 31.1.2. Unit is SEC. Allowed with any value in Enterprise, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spike_duration: Option<u32>,
}

/// Debug virtual service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct DebugVirtualService {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Placeholder for description of property capture of obj type DebugVirtualService field type
    /// str type boolean
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture: Option<bool>,
    /// Per packet capture filters for Debug Virtual Service. Applies to both frontend and backend
    /// packets. Field introduced in 18.2.7.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub capture_filters: Option<CaptureFilters>,
    /// Placeholder for description of property capture_params of obj type DebugVirtualService field
    /// type str type object
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub capture_params: Option<DebugVirtualServiceCapture>,
    /// It is a reference to an object of type Cloud.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_ref: Option<String>,
    /// This option controls the capture of Health Monitor flows. Enum options - DEBUG_VS_HM_NONE,
    /// DEBUG_VS_HM_ONLY, DEBUG_VS_HM_INCLUDE.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_hm: Option<String>,
    /// Filters all packets of a complete transaction (client and server side), based on client ip.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub debug_ip: Option<DebugIpAddr>,
    /// Dns debug options. Field introduced in 18.2.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub dns_options: Option<DebugDnsOptions>,
    /// Placeholder for description of property flags of obj type DebugVirtualService field type str
    /// type object
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub flags: Vec<DebugVsDataplane>,
    /// Filters for latency audit. Supported only for ingress. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub latency_audit_filters: Option<CaptureFilters>,
    /// Name of the object.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// Object sync debug options. Field introduced in 20.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub objsync: Option<DebugVirtualServiceObjSync>,
    /// This option re-synchronizes flows between Active-Standby service engines for all the virtual
    /// services placed on them. It should be used with caution because as it can cause a flood
    /// between Active-Standby. Field introduced in 18.1.3,18.2.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resync_flows: Option<bool>,
    /// Placeholder for description of property se_params of obj type DebugVirtualService field type
    /// str type object
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub se_params: Option<DebugVirtualServiceSeParams>,
    /// It is a reference to an object of type Tenant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Unique object identifier of the object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// HS mgr debug filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct HsMgrDebugFilter {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
    /// Enum options - VSERVER_METRICS_ENTITY, VM_METRICS_ENTITY, SE_METRICS_ENTITY,
    /// CONTROLLER_METRICS_ENTITY, APPLICATION_METRICS_ENTITY, TENANT_METRICS_ENTITY,
    /// POOL_METRICS_ENTITY. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_entity: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<i32>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_hs_db_writes: Option<bool>,
}

/// Log manager debug filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LogManagerDebugFilter {
    /// Delete protection time for ADF indices in minutes. Field introduced in 31.2.1. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adf_protection_time_minutes: Option<u32>,
    /// Buffer size for batch queues. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_queue_buffer_size: Option<u32>,
    /// Number of workers for batch processing. Field introduced in 31.2.1. Allowed with any value
    /// in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_worker_count: Option<u32>,
    /// Size of bulk payload buffer. This is the max bulk payload size. Field introduced in 31.2.1.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bulk_payload_string_size: Option<u32>,
    /// Cache cleanup delay in milliseconds. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_cleanup_delay_ms: Option<u32>,
    /// Timeout for the client to create an index in seconds. Field introduced in 31.2.1. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_index_op_timeout_seconds: Option<u32>,
    /// Database notification channel capacity. Field introduced in 31.2.1. Allowed with any value
    /// in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_notifn_chan_capacity: Option<u32>,
    /// UUID of the entity. It is a reference to an object of type Virtualservice. Field introduced
    /// in 21.1.1. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_ref: Option<String>,
    /// Go garbage collection percentage. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub go_gc_percent: Option<u32>,
    /// Incremental timeout buffer in milliseconds. Field introduced in 31.2.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incremental_timeout_buffer_ms: Option<u32>,
    /// Index cleaner interval in minutes. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_cleaner_interval_minutes: Option<u32>,
    /// Base path for Search Engine Mappings and Settings. Field introduced in 31.2.1. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_config_path: Option<String>,
    /// Index retention period in minutes. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_retention_period_minutes: Option<u32>,
    /// Buffer size for index status queue. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_status_queue_buffer_size: Option<u32>,
    /// Renderer configuration - JSON all *string builder size. Field introduced in 31.2.1. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_all_str_builder_size: Option<u32>,
    /// Renderer configuration - JSON everything *string builder size. Field introduced in 31.2.1.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_everything_str_builder_size: Option<u32>,
    /// Renderer configuration - JSON *string builder size. Field introduced in 31.2.1. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_str_builder_size: Option<u32>,
    /// Log indexer task timeout in milliseconds. Field introduced in 31.2.1. Allowed with any value
    /// in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_indexer_task_timeout_ms: Option<u32>,
    /// Log records incremental timeout in milliseconds. Field introduced in 31.2.1. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_records_incremental_timeout_ms: Option<u32>,
    /// Log records task timeout in milliseconds. Field introduced in 31.2.1. Allowed with any value
    /// in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_records_task_timeout_ms: Option<u32>,
    /// Maximum duration to wait for batching files to indexer. Field introduced in 31.2.1. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_batch_duration_ms: Option<u32>,
    /// Maximum number of files in a batch to indexer. Field introduced in 31.2.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_batch_size: Option<u32>,
    /// Maximum number of files per index. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_files_per_index: Option<u32>,
    /// Maximum number of indices for events. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_indices_events: Option<u32>,
    /// Maximum number of indices per VS. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_indices_per_vs: Option<u32>,
    /// Maximum number of indices for system. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_indices_system: Option<u32>,
    /// Maximum number of logs per index. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_logs_per_index: Option<u32>,
    /// Number of goroutines for indexer_worker. Field introduced in 31.2.1. Allowed with any value
    /// in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_num_workers: Option<u32>,
    /// Max number of index task requests taken by indexer. Field introduced in 31.2.1. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_queue_size: Option<u32>,
    /// Maximum size per index in MB. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size_per_index_mb: Option<u32>,
    /// Delete protection time for NF indices in minutes. Field introduced in 31.2.1. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nf_protection_time_minutes: Option<u32>,
    /// OpenSearch host. Field introduced in 31.2.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opensearch_host: Option<String>,
    /// Number of replicas for OpenSearch. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opensearch_num_replicas: Option<u32>,
    /// Number of shards for OpenSearch. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opensearch_num_shards: Option<u32>,
    /// OpenSearch port. Field introduced in 31.2.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opensearch_port: Option<String>,
    /// Buffer size for query queues. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_queue_buffer_size: Option<u32>,
    /// Number of workers for query processing. Field introduced in 31.2.1. Allowed with any value
    /// in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_worker_count: Option<u32>,
    /// Buffer size for records status queue. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records_status_queue_buffer_size: Option<u32>,
    /// Number of workers for records status processing. Field introduced in 31.2.1. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records_status_worker_count: Option<u32>,
    /// Reserved field for future use. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_1: Option<String>,
    /// Reserved field for future use. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_2: Option<String>,
    /// Reserved field for future use. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_3: Option<u32>,
    /// Reserved field for future use. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_4: Option<u32>,
    /// Search query timeout in milliseconds. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_query_timeout_ms: Option<u32>,
    /// Wait time before re-enqueueing failed tasks in seconds. Field introduced in 31.2.1. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_re_enqueue_wait_time_seconds: Option<u32>,
    /// Set the log level for telemetry trace logs. Enum options - LOG_LEVEL_DISABLED,
    /// LOG_LEVEL_INFO, LOG_LEVEL_WARNING, LOG_LEVEL_ERROR, LOG_LEVEL_DEBUG. Field introduced in
    /// 31.2.1. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telemetry_trace_log_level: Option<String>,
    /// Telemetry trace percentage. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telemetry_trace_percentage: Option<u32>,
    /// Delete protection time for UDF indices in minutes. Field introduced in 31.2.1. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub udf_protection_time_minutes: Option<u32>,
}

/// Mesos metrics debug filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct MesosMetricsDebugFilter {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mesos_master: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mesos_slave: Option<String>,
    /// Enum options - VSERVER_METRICS_ENTITY, VM_METRICS_ENTITY, SE_METRICS_ENTITY,
    /// CONTROLLER_METRICS_ENTITY, APPLICATION_METRICS_ENTITY, TENANT_METRICS_ENTITY,
    /// POOL_METRICS_ENTITY. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_entity: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics_collection_frq: Option<u32>,
}

/// Security mgr debug filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SecurityMgrDebugFilter {
    /// HTTP methods to accumulate for consolidated learning (e.g., GET, POST, PUT). If empty, all
    /// methods are accumulated. Field introduced in 30.2.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub accumulate_http_methods: Vec<String>,
    /// Dynamically adapt configuration parameters for Application Learning feature. Field
    /// introduced in 20.1.1. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_adaptive_config: Option<bool>,
    /// uuid of the entity. It is a reference to an object of type Virtualservice. Field introduced
    /// in 18.2.6. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_ref: Option<String>,
    /// Dynamically update the interval for rule generation in PSM programming. Allowed values are
    /// 1-60. Field introduced in 31.2.1. Unit is MIN. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub psm_programming_interval: Option<u32>,
    /// Dynamically update the multiplier for rule ID generation in PSM programming for Learning
    /// feature. Allowed values are 10-100000. Field introduced in 30.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub psm_rule_id_multiplier: Option<u32>,
}
