//! Controller administration: system configuration, upgrades, tech support, users and roles.

use alb_sdk_macro::{AviObject, Validate};
use serde::{Deserialize, Serialize};

use crate::application::CaseConfig;
use crate::cloud::ProxyConfiguration;
use crate::common::{
    AdminAuthConfiguration, AlbServicesUser, AppSignatureConfig, ArchiveRules,
    ConfigPbAttributes, ControllerAnalyticsPolicy, ControllerParams,
    ControllerSizingCloudLimits, Crl, DnsConfiguration, EmailConfiguration, EventMap,
    FileObjectEventMap, GslbObjInfo, GslbReplicationStats, ImageCloudData, ImageEventMap,
    ImageParams, ImageUploadOpsStatus, IpAddr, IpAddrPrefix, JournalError, JournalInfo,
    LicenseServiceUpdate, LinuxConfiguration, MgmtIpAccessControl, NtpConfiguration, OpsInfo,
    PackageDetails, Permission, PortalConfiguration, PreChecksParams, QuotaConfig, RoleFilter,
    SaasLicensingInfo, SeGroupOptions, SeGroupResumeOptions, SeGroupStatus, SeUpgradeEvents,
    SecureChannelConfiguration, SnmpConfiguration, SubJob, SupportedMigrations,
    TelemetryConfiguration, TenantConfiguration, TimeStamp, UpgradeEvent, UpgradeOpsState,
    UserAgentDbConfig,
};
use crate::gslb::GslbSiteCfgSyncInfo;
use crate::security::{IpReputationConfig, WafCrsConfig};
use crate::serde_util::null_as_default;
use crate::service_engine::ServiceEngineParams;

/// ALB services config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct AlbServicesConfig {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Default values to be used for Application Signature sync. Field introduced in 20.1.4.
    /// Allowed in Basic edition, Essentials edition, Enterprise edition.
    ///
    /// Required.
    #[avi(required, nested)]
    pub app_signature_config: Option<AppSignatureConfig>,
    /// Information about the default contact for this controller cluster. Field introduced in
    /// 20.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub asset_contact: Option<AlbServicesUser>,
    /// Default values to be used for pulse case management. Field introduced in 21.1.1. Allowed in
    /// Basic edition, Essentials edition, Enterprise edition.
    ///
    /// Required.
    #[avi(required, nested)]
    pub case_config: Option<CaseConfig>,
    /// Protobuf versioning for config pbs. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    /// Information about the portal features opted in for controller. Field introduced in 20.1.1.
    /// Allowed in Enterprise edition, Enterprise edition.
    ///
    /// Required.
    #[avi(required, nested)]
    pub feature_opt_in_status: Option<PortalFeatureOptIn>,
    /// Default values to be used for IP Reputation sync. Field introduced in 20.1.1.
    ///
    /// Required.
    #[avi(required, nested)]
    pub ip_reputation_config: Option<IpReputationConfig>,
    /// Mode helps log collection and upload. Enum options - MODE_UNKNOWN, SALESFORCE, SYSTEST,
    /// MYVMWARE. Field introduced in 20.1.2. Allowed in Basic(Allowed values-
    /// SALESFORCE,MYVMWARE,SYSTEST) edition, Essentials(Allowed values-
    /// SALESFORCE,MYVMWARE,SYSTEST) edition, Enterprise edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Time interval in minutes. Allowed values are 5-60. Field introduced in 18.2.6.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polling_interval: Option<i32>,
    /// The FQDN or IP address of the customer portal. Field introduced in 18.2.6.
    ///
    /// Required.
    #[avi(required)]
    pub portal_url: Option<String>,
    /// Saas licensing configuration. Field introduced in 21.1.3. Allowed in Basic edition,
    /// Essentials edition, Enterprise edition.
    ///
    /// Required.
    #[avi(required, nested)]
    pub saas_licensing_config: Option<SaasLicensingInfo>,
    /// Split proxy configuration to connect external pulse services. Field introduced in 20.1.1.
    ///
    /// Required.
    #[avi(required, nested)]
    pub split_proxy_configuration: Option<ProxyConfiguration>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// By default, pulse uses proxy added in system configuration. If pulse needs to use a seperate
    /// proxy, set this flag to true and configure split proxy configuration. Field introduced in
    /// 20.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_split_proxy: Option<bool>,
    /// Secure the controller to PULSE communication over TLS. Field introduced in 20.1.3. Allowed
    /// in Basic edition, Enterprise edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_tls: Option<bool>,
    /// Default values to be used for user agent DB Service. Field introduced in 21.1.1. Allowed in
    /// Basic edition, Essentials edition, Enterprise edition.
    ///
    /// Required.
    #[avi(required, nested)]
    pub user_agent_db_config: Option<UserAgentDbConfig>,
    /// Field introduced in 18.2.6.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// Default values to be used for pulse waf management. Field introduced in 21.1.1. Allowed in
    /// Basic edition, Essentials edition, Enterprise edition.
    ///
    /// Required.
    #[avi(required, nested)]
    pub waf_config: Option<WafCrsConfig>,
}

/// ALB services job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct AlbServicesJob {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// The command to be triggered by the albservicesjob. Field introduced in 21.1.3.
    ///
    /// Required.
    #[avi(required)]
    pub command: Option<String>,
    /// Protobuf versioning for config pbs. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    /// The time at which the albservicesjob is ended. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub end_time: Option<TimeStamp>,
    /// The name of the albservicesjob. Field introduced in 21.1.3.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// A unique identifier for this job entry on the Pulse portal. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pulse_job_id: Option<String>,
    /// The time at which the albservicesjob is started. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub start_time: Option<TimeStamp>,
    /// The status of the albservicesjob. Enum options - UNDETERMINED, PENDING, IN_PROGRESS,
    /// COMPLETED, FAILED. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// The unique identifier of the tenant to which this albservicesjob belongs. It is a reference
    /// to an object of type Tenant. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// A unique identifier for this albservicesjob entry. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Backup configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct BackupConfiguration {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// AWS Access Key ID. Field introduced in 18.2.3. Allowed in Basic edition, Essentials edition,
    /// Enterprise edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_access_key: Option<String>,
    /// AWS bucket. Field introduced in 18.2.3. Allowed in Basic edition, Essentials edition,
    /// Enterprise edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_bucket_id: Option<String>,
    /// AWS Secret Access Key. Field introduced in 18.2.3. Allowed in Basic edition, Essentials
    /// edition, Enterprise edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_secret_access: Option<String>,
    /// Prefix of the exported configuration file. Field introduced in 17.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_file_prefix: Option<String>,
    /// Default passphrase for configuration export and periodic backup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_passphrase: Option<String>,
    /// Protobuf versioning for config pbs. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    /// Rotate the backup files based on this count. Allowed values are 1-20.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_backups_stored: Option<i32>,
    /// Name of backup configuration.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// Directory at remote destination with write permission for ssh user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_directory: Option<String>,
    /// Remote file transfer protocol type. Enum options - SCP, SFTP. Field introduced in 22.1.1.
    /// Allowed in Basic(Allowed values- SCP,SFTP) edition, Enterprise edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_file_transfer_protocol: Option<String>,
    /// Remote Destination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_hostname: Option<String>,
    /// Local Backup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_local: Option<bool>,
    /// Access Credentials for remote destination. It is a reference to an object of type
    /// CloudConnectorUser.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_user_ref: Option<String>,
    /// It is a reference to an object of type Tenant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// Remote Backup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_to_remote_host: Option<bool>,
    /// Cloud Backup. Field introduced in 18.2.3. Allowed in Basic edition, Essentials edition,
    /// Enterprise edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_to_s3: Option<bool>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Unique object identifier of the object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Burst license details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct BurstLicenseDetails {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cores: Option<u32>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
}

/// Controller interface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ControllerInterface {
    /// Default gateway of the mgmt interface. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub gateway: Option<IpAddr>,
    /// Interface name. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub if_name: Option<String>,
    /// IP address of the interface. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub ip: Option<IpAddrPrefix>,
    /// Interface label like mgmt, secure channel or HSM. Enum options - MGMT, SE_SECURE_CHANNEL,
    /// HSM. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub labels: Vec<String>,
    /// Mac address of interface. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    /// IP address mode DHCP/STATIC. Enum options - DHCP, STATIC, VIP, DOCKER_HOST. Field introduced
    /// in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Public IP of interface. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub public_ip_or_name: Option<IpAddr>,
}

/// Controller site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct ControllerSite {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// IP Address or a DNS resolvable, fully qualified domain name of the Site Controller Cluster.
    /// Field introduced in 18.2.5.
    ///
    /// Required.
    #[avi(required)]
    pub address: Option<String>,
    /// Protobuf versioning for config pbs. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    /// Name for the Site Controller Cluster. Field introduced in 18.2.5.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// The Controller Site Cluster's REST API port number. Allowed values are 1-65535. Field
    /// introduced in 18.2.5.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    /// Reference for the Tenant. It is a reference to an object of type Tenant. Field introduced in
    /// 18.2.5.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Reference for the Site Controller Cluster. Field introduced in 18.2.5.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Controller sizing limits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ControllerSizingLimits {
    /// Controller system limits specific to cloud type for this controller sizing. Field introduced
    /// in 20.1.1. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub controller_sizing_cloud_limits: Vec<ControllerSizingCloudLimits>,
    /// Controller flavor for this sizing limit. Enum options - CONTROLLER_ESSENTIALS,
    /// CONTROLLER_SMALL, CONTROLLER_MEDIUM, CONTROLLER_LARGE, CONTROLLER_EXTRA_LARGE. Field
    /// introduced in 20.1.1. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavor: Option<String>,
    /// Maximum number of clouds. Field introduced in 20.1.1. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_clouds: Option<i32>,
    /// Maximum number of east-west virtualservices. Field introduced in 20.1.1. Allowed with any
    /// value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_east_west_virtualservices: Option<i32>,
    /// Maximum number of pools with realtime metrics enabled. Field introduced in 31.1.1. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_pool_rt_metrics: Option<i32>,
    /// Maximum number of Serviceengine with realtime metrics enabled. Field introduced in 31.1.1.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_se_rt_metrics: Option<i32>,
    /// Maximum number of servers. Field introduced in 20.1.1. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_servers: Option<i32>,
    /// Maximum number of serviceengines. Field introduced in 20.1.1. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_serviceengines: Option<i32>,
    /// Maximum number of tenants. Field introduced in 20.1.1. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_tenants: Option<i32>,
    /// Maximum number of virtualservices. Field introduced in 20.1.1. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_virtualservices: Option<i32>,
    /// Maximum number of virtualservices configured with Application Insights. Field introduced in
    /// 31.2.1. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_virtualservices_application_insights: Option<i32>,
    /// Maximum number of virtualservices configured with Positive Security Policy. Field introduced
    /// in 31.2.1. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_virtualservices_positive_security: Option<i32>,
    /// Maximum number of virtualservices with realtime metrics enabled. Field introduced in 20.1.1.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_virtualservices_rt_metrics: Option<i32>,
    /// Number of virtualservices with both real-time metrics and WAF enabled together. Field
    /// introduced in 31.1.1. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_virtualservices_rtmetrics_waf: Option<i32>,
    /// Maximum number of vrfcontexts. Field introduced in 20.1.1. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_vrfs: Option<i32>,
    /// Maximum number of virtualservices configured with WAF. Field introduced in 30.2.1. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_waf_virtualservices: Option<i32>,
}

/// Dry run params.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DryRunParams {
    /// Allow dry-run operation on single node controller. Field introduced in 31.1.1. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_single_node: Option<bool>,
    /// Amount of memory allocated for dry-run. Field introduced in 31.1.1. Unit is GB. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<f32>,
    /// Number of CPU(s) allocated for dry-run. Field introduced in 31.1.1. Allowed with any value
    /// in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_cpu: Option<u32>,
    /// VM hostname of the preferred worker node. Example node2.controller.local. When configured,
    /// dry-run is performed on specified node. When not configured, one of the follower node is
    /// elected for dry-run. Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_worker: Option<String>,
}

/// Dryrun info.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DryrunInfo {
    /// Duration of dry-run operation in seconds. Field introduced in 31.1.1. Unit is SEC. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    /// End time of dry-run operation. Field introduced in 31.1.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Dryrun operations requested. Enum options - UPGRADE, PATCH, ROLLBACK, ROLLBACKPATCH,
    /// SEGROUP_RESUME, EVAL_UPGRADE, EVAL_PATCH, EVAL_ROLLBACK, EVAL_ROLLBACKPATCH,
    /// EVAL_SEGROUP_RESUME, EVAL_RESTORE, RESTORE, UPGRADE_DRYRUN. Field introduced in 31.1.1.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    /// Parameters for performing the dry-run operation. Field introduced in 31.1.1. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub params: Option<UpgradeParams>,
    /// Dry-run operations progress which holds value between 0-100. Allowed values are 0-100. Field
    /// introduced in 31.1.1. Unit is PERCENT. Allowed with any value in Enterprise, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u32>,
    /// Start time of dry-run operation. Field introduced in 31.1.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// Current status of the dry-run operation. Field introduced in 31.1.1. Allowed with any value
    /// in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub state: Option<UpgradeOpsState>,
    /// Completed set of tasks in the Upgrade operation. Field introduced in 31.1.1. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks_completed: Option<i32>,
    /// Total number of tasks in the Upgrade operation. Field introduced in 31.1.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tasks: Option<i32>,
    /// Controller events for dry-run operation. Field introduced in 31.1.1. Allowed with any value
    /// in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub upgrade_events: Vec<EventMap>,
    /// Node on which the dry-run is performed. Field introduced in 31.1.1. Allowed with any value
    /// in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker: Option<String>,
}

/// File object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct FileObject {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// SHA1 checksum of the file. . Field introduced in 20.1.1. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    /// AVI internal formatted/converted files. It is a reference to an object of type FileObject.
    /// Field introduced in 31.1.1. Allowed with any value in Enterprise, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub child_refs: Vec<String>,
    /// This field indicates whether the file is gzip-compressed. Field introduced in 20.1.1.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compressed: Option<bool>,
    /// Protobuf versioning for config pbs. Field introduced in 30.2.1. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    /// Timestamp of creation for the file. . Field introduced in 20.1.1. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    /// This field contains CRL metadata. . Field introduced in 30.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub crl_info: Option<Crl>,
    /// Description of the file. . Field introduced in 20.1.1. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// List of all FileObject events. Field introduced in 31.1.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub events: Vec<FileObjectEventMap>,
    /// Timestamp when the CRL contents are no longer valid and hence CRL-file will be no longer
    /// needed and can be removed by the system. If this is set, a garbage collector process shall
    /// remove the CRL-file after this time. This field is applicable in the CRL context. Field
    /// introduced in 20.1.1. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    /// This field indicates the file format(Avi/Maxmind and v4/v6/v4-v6) of GSLB geodb file type. .
    /// Enum options - GSLB_GEODB_FILE_FORMAT_AVI, GSLB_GEODB_FILE_FORMAT_MAXMIND_CITY,
    /// GSLB_GEODB_FILE_FORMAT_MAXMIND_CITY_V6, GSLB_GEODB_FILE_FORMAT_MAXMIND_CITY_V4_AND_V6,
    /// GSLB_GEODB_FILE_FORMAT_AVI_V6, GSLB_GEODB_FILE_FORMAT_AVI_V4_AND_V6. Field introduced in
    /// 31.1.1. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gslb_geodb_format: Option<String>,
    /// This field indicates if the the given FileObjecthas a parent FileObject or not. . Field
    /// introduced in 31.1.1. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_parent: Option<bool>,
    /// This field describes the object's replication scope. If the field is set to false, then the
    /// object is visible within the controller-cluster and its associated service-engines. If the
    /// field is set to true, then the object is replicated across the Gslb federation. Field
    /// introduced in 20.1.1. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_federated: Option<bool>,
    /// Name of the file object. . Field introduced in 20.1.1. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// Path to the file. . Field introduced in 20.1.1. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Enforce Read-Only on the file. Field introduced in 20.1.1. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    /// Flag to allow/restrict download of the file. Field introduced in 20.1.1. Allowed with any
    /// value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrict_download: Option<bool>,
    /// Size of the file. . Field introduced in 20.1.1. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Tenant that this object belongs to. It is a reference to an object of type Tenant. Field
    /// introduced in 20.1.1. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// Type of the file. . Enum options - OTHER_FILE_TYPES, IP_REPUTATION, GEO_DB, TECH_SUPPORT,
    /// HSMPACKAGES, IPAMDNSSCRIPTS, CONTROLLER_IMAGE, CRL_DATA, IP_REPUTATION_IPV6, GSLB_GEO_DB,
    /// CSRF_JS. Field introduced in 20.1.1. Allowed with any value in Enterprise, Enterprise with
    /// Cloud Services edition. Allowed in Essentials (Allowed values- OTHER_FILE_TYPES), Basic
    /// (Allowed values- OTHER_FILE_TYPES) edition.
    ///
    /// Required.
    #[avi(required)]
    pub r#type: Option<String>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// UUID of the file. Field introduced in 20.1.1. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// Version of the file. . Field introduced in 20.1.1. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct Image {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// This field describes the cloud info specific to the base image. Field introduced in 20.1.1.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub cloud_info_values: Vec<ImageCloudData>,
    /// Controller package details. Field introduced in 18.2.6.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub controller_info: Option<PackageDetails>,
    /// Mandatory Controller patch name that is applied along with this base image. Field introduced
    /// in 18.2.10, 20.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller_patch_name: Option<String>,
    /// It references the controller-patch associated with the Uber image. It is a reference to an
    /// object of type Image. Field introduced in 18.2.8, 20.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller_patch_ref: Option<String>,
    /// Time taken to upload the image in seconds. Field introduced in 21.1.3. Unit is SEC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    /// Image upload end time. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Image events for image upload operation. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub events: Vec<ImageEventMap>,
    /// Status of the image. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub img_state: Option<ImageUploadOpsStatus>,
    /// This field describes the api migration related information. Field introduced in 18.2.6.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub migrations: Option<SupportedMigrations>,
    /// Name of the image. Field introduced in 18.2.6.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// Image upload progress which holds value between 0-100. Allowed values are 0-100. Field
    /// introduced in 21.1.3. Unit is PERCENT.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<i32>,
    /// SE package details. Field introduced in 18.2.6.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub se_info: Option<PackageDetails>,
    /// Mandatory ServiceEngine patch name that is applied along with this base image. Field
    /// introduced in 18.2.10, 20.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_patch_name: Option<String>,
    /// It references the Service Engine patch associated with the Uber Image. It is a reference to
    /// an object of type Image. Field introduced in 18.2.8, 20.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_patch_ref: Option<String>,
    /// Image upload start time. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// Status to check if the image is present. Enum options - SYSERR_SUCCESS, SYSERR_FAILURE,
    /// SYSERR_OUT_OF_MEMORY, SYSERR_NO_ENT, SYSERR_INVAL, SYSERR_ACCESS, SYSERR_FAULT, SYSERR_IO,
    /// SYSERR_TIMEOUT, SYSERR_NOT_SUPPORTED, SYSERR_NOT_READY, SYSERR_UPGRADE_IN_PROGRESS,
    /// SYSERR_WARM_START_IN_PROGRESS, SYSERR_TRY_AGAIN, SYSERR_NOT_UPGRADING, SYSERR_PENDING,
    /// SYSERR_EVENT_GEN_FAILURE, SYSERR_CONFIG_PARAM_MISSING, SYSERR_RANGE, SYSERR_BAD_REQUEST....
    /// Field deprecated in 21.1.3. Field introduced in 18.2.6.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Completed set of tasks for Image upload. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks_completed: Option<i32>,
    /// Tenant that this object belongs to. It is a reference to an object of type Tenant. Field
    /// introduced in 18.2.6.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// Total number of tasks for Image upload. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tasks: Option<i32>,
    /// Type of the image patch/system. Enum options - IMAGE_TYPE_PATCH, IMAGE_TYPE_SYSTEM,
    /// IMAGE_TYPE_MUST_CHECK. Field introduced in 18.2.6.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    /// Status to check if the image is an uber bundle. Field introduced in 18.2.8, 20.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uber_bundle: Option<bool>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// UUID of the image. Field introduced in 18.2.6.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Job entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct JobEntry {
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
    pub expires_at: Option<String>,
    /// Field introduced in 18.1.2. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub obj_key: Option<String>,
    /// Field introduced in 18.1.1. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub subjobs: Vec<SubJob>,
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

/// Journal summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct JournalSummary {
    /// Description of the process. Field introduced in 30.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Duration of the process in seconds. Field introduced in 30.2.1. Unit is SEC. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// End time of the process. Field introduced in 30.2.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Number of errors in the process. Field introduced in 30.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_count: Option<u32>,
    /// Summary reason for process. Field introduced in 30.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Start time of the process. Field introduced in 30.2.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// State of the Journal Summary. Enum options - TASK_STATE_SUCCESS, TASK_STATE_WARNING,
    /// TASK_STATE_ERROR. Field introduced in 31.2.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Status of the process. Field introduced in 30.2.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Process Type. Field introduced in 30.2.1. Allowed with any value in Enterprise, Enterprise
    /// with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub r#type: Option<String>,
    /// Number of warnings in the process. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning_count: Option<u32>,
}

/// Journal task.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct JournalTask {
    /// Time taken to complete task in seconds. Field introduced in 31.1.1. Unit is SEC. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// Time at which execution of task was completed. Field introduced in 31.1.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Details of executed task. Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub messages: Vec<String>,
    /// Reason for the status of the executed task. Field introduced in 31.1.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Time at which execution of task was started. Field introduced in 31.1.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// State of the Journal Task. Enum options - TASK_STATE_SUCCESS, TASK_STATE_WARNING,
    /// TASK_STATE_ERROR. Field introduced in 31.2.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Status of the executed task. Field introduced in 31.1.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
    /// Description of the executed task. Field introduced in 31.1.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_description: Option<String>,
    /// Name of the executed task. Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_name: Option<String>,
}

/// License details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LicenseDetails {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_servers: Option<u32>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_at: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_id: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_type: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// License status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct LicenseStatus {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Protobuf versioning for config pbs. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    /// Saas licensing status. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub saas_status: Option<SaasLicensingStatus>,
    /// Pulse license service update. Field introduced in 21.1.4.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub service_update: Option<LicenseServiceUpdate>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Uuid. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Local worker fds version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct LocalWorkerFdsVersion {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Default GLW fds version name. Field introduced in 31.1.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Uuid of the tenant. It is a reference to an object of type Tenant. Field introduced in
    /// 31.1.1. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// Fds timeline maintained by GLW. Field introduced in 31.1.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Default GLW fds version uuid. Field introduced in 31.1.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// Fds version maintained by GLW. Field introduced in 31.1.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
}

/// NTP authentication key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct NtpAuthenticationKey {
    /// Message Digest Algorithm used for NTP authentication. Default is NTP_AUTH_ALGORITHM_MD5.
    /// Enum options - NTP_AUTH_ALGORITHM_MD5, NTP_AUTH_ALGORITHM_SHA1. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
    /// NTP Authentication key. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub key: Option<String>,
    /// Key number to be assigned to the authentication-key. Allowed values are 1-65534. Allowed
    /// with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub key_number: Option<u32>,
}

/// Operational status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct OperationalStatus {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub last_changed_time: Option<TimeStamp>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_vs_completed: Option<u32>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_vs_failed: Option<u32>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_vs_total: Option<u32>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub reason: Vec<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<u64>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_code_string: Option<String>,
    /// Enum options - OPER_UP, OPER_DOWN, OPER_CREATING, OPER_RESOURCES, OPER_INACTIVE,
    /// OPER_DISABLED, OPER_UNUSED, OPER_UNKNOWN, OPER_PROCESSING, OPER_INITIALIZING,
    /// OPER_ERROR_DISABLED, OPER_AWAIT_MANUAL_PLACEMENT, OPER_UPGRADING, OPER_SE_PROCESSING,
    /// OPER_PARTITIONED, OPER_DISABLING, OPER_FAILED, OPER_UNAVAIL, OPER_AGGREGATE_DOWN. Allowed
    /// with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Ops history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct OpsHistory {
    /// Duration of Upgrade operation in seconds. Field introduced in 20.1.4. Unit is SEC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    /// End time of Upgrade operation. Field introduced in 20.1.4.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Upgrade operation performed. Enum options - UPGRADE, PATCH, ROLLBACK, ROLLBACKPATCH,
    /// SEGROUP_RESUME. Field introduced in 20.1.4.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ops: Option<String>,
    /// Patch after the upgrade operation. . Field introduced in 20.1.4.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch_version: Option<String>,
    /// ServiceEngineGroup/SE events for upgrade operation. Field introduced in 20.1.4.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub se_upgrade_events: Vec<SeUpgradeEvents>,
    /// SeGroup status for the upgrade operation. Field introduced in 20.1.4.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub seg_status: Option<SeGroupStatus>,
    /// Start time of Upgrade operation. Field introduced in 20.1.4.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// Upgrade operation status. Field introduced in 20.1.4.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub state: Option<UpgradeOpsState>,
    /// Record of Pre/Post snapshot captured for current upgrade operation. It is a reference to an
    /// object of type StatediffOperation. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statediff_ref: Option<String>,
    /// Controller events for Upgrade operation. Field introduced in 20.1.4.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub upgrade_events: Vec<EventMap>,
    /// Image after the upgrade operation. Field introduced in 20.1.4.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Portal feature opt in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PortalFeatureOptIn {
    /// Enable to receive Application specific signature updates. Field introduced in 20.1.4.
    /// Allowed in Basic(Allowed values- false) edition, Essentials(Allowed values- false) edition,
    /// Enterprise(Allowed values- false) edition, Enterprise edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_appsignature_sync: Option<bool>,
    /// Enable to receive IP reputation updates. Field introduced in 20.1.1. Allowed in
    /// Basic(Allowed values- false) edition, Essentials(Allowed values- false) edition,
    /// Enterprise(Allowed values- false) edition, Enterprise edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_ip_reputation: Option<bool>,
    /// Enable Pulse Case Management. Field introduced in 21.1.1. Allowed in Basic(Allowed values-
    /// false) edition, Essentials(Allowed values- false) edition, Enterprise(Allowed values- false)
    /// edition, Enterprise edition. Special default for Basic edition is false, Essentials edition
    /// is false, Enterprise edition is false, Enterprise is True.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_pulse_case_management: Option<bool>,
    /// Enable to receive WAF CRS updates. Field introduced in 21.1.1. Allowed in Basic(Allowed
    /// values- false) edition, Essentials(Allowed values- false) edition, Enterprise(Allowed
    /// values- false) edition, Enterprise edition. Special default for Basic edition is false,
    /// Essentials edition is false, Enterprise edition is false, Enterprise is True.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_pulse_waf_management: Option<bool>,
    /// Enable to receive Bot Management updates. Field introduced in 21.1.1. Allowed in
    /// Basic(Allowed values- false) edition, Essentials(Allowed values- false) edition, Enterprise
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_user_agent_db_sync: Option<bool>,
}

/// Pre check ops state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PreCheckOpsState {
    /// The last time the state changed. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub last_changed_time: Option<TimeStamp>,
    /// Reason for the pre-check state. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// State of the report generation pre-checks. Enum options - PRECHECK_FSM_STARTED,
    /// PRECHECK_FSM_IN_PROGRESS, PRECHECK_FSM_SUCCESS, PRECHECK_FSM_WARNING, PRECHECK_FSM_ERROR.
    /// Field introduced in 31.2.1. Allowed with any value in Enterprise, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Pre checks info.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PreChecksInfo {
    /// Syserr status code of the must check. Enum options - SYSERR_SUCCESS, SYSERR_FAILURE,
    /// SYSERR_OUT_OF_MEMORY, SYSERR_NO_ENT, SYSERR_INVAL, SYSERR_ACCESS, SYSERR_FAULT, SYSERR_IO,
    /// SYSERR_TIMEOUT, SYSERR_NOT_SUPPORTED, SYSERR_NOT_READY, SYSERR_UPGRADE_IN_PROGRESS,
    /// SYSERR_WARM_START_IN_PROGRESS, SYSERR_TRY_AGAIN, SYSERR_NOT_UPGRADING, SYSERR_PENDING,
    /// SYSERR_EVENT_GEN_FAILURE, SYSERR_CONFIG_PARAM_MISSING, SYSERR_RANGE, SYSERR_FAILED.... Field
    /// introduced in 31.2.1. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_code: Option<String>,
    /// Reason for must check failure. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Additional details of the must check. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub details: Vec<String>,
    /// Duration of the must check in seconds. Field introduced in 31.2.1. Unit is SEC. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// End time of the must check. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Error/Failure details of the must check. Field introduced in 31.2.1. Allowed with any value
    /// in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub error_details: Vec<String>,
    /// Start time of the must check. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// The must check operations current fsm-state. Enum options - PRECHECK_FSM_STARTED,
    /// PRECHECK_FSM_IN_PROGRESS, PRECHECK_FSM_SUCCESS, PRECHECK_FSM_WARNING, PRECHECK_FSM_ERROR.
    /// Field introduced in 31.2.1. Allowed with any value in Enterprise, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Proactive support defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ProactiveSupportDefaults {
    /// Opt-in to attach core dump with support case. Field introduced in 20.1.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials (Allowed
    /// values- false), Basic (Allowed values- false) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attach_core_dump: Option<bool>,
    /// Opt-in to attach tech support with support case. Field introduced in 20.1.1. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials
    /// (Allowed values- false), Basic (Allowed values- false) edition. Special default for
    /// Essentials edition is false, Basic edition is false, Enterprise edition is True.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attach_tech_support: Option<bool>,
    /// Case severity to be used for proactive support case creation. Field introduced in 20.1.1.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_severity: Option<String>,
}

/// Readiness check obj.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ReadinessCheckObj {
    /// List of readiness checks information. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub checks: Vec<PreChecksInfo>,
    /// No. of checks completed. Field introduced in 31.2.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks_completed: Option<i32>,
    /// Time taken to complete readiness checks in seconds. Field introduced in 31.2.1. Unit is SEC.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// End time of the readiness check operations. Field introduced in 31.2.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Checks progress which holds value between 0-100. Allowed values are 0-100. Field introduced
    /// in 31.2.1. Unit is PERCENT. Allowed with any value in Enterprise, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u32>,
    /// Start time of the readiness check operations. Field introduced in 31.2.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// The readiness check operations current fsm-state. Field introduced in 31.2.1. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub state: Option<PreCheckOpsState>,
    /// Total no. of checks. Field introduced in 31.2.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_checks: Option<i32>,
}

/// Remote info.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RemoteInfo {
    /// Gslb object related information in the site. Field introduced in 31.1.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub gslb_info: Option<GslbObjInfo>,
    /// Operational information of the site. Field introduced in 31.1.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub ops_info: Option<OpsInfo>,
    /// Configuration sync-info of the site . Field introduced in 31.1.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub sync_info: Option<GslbSiteCfgSyncInfo>,
    /// Site replication specific statistic. Field introduced in 31.1.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub sync_stats: Option<GslbReplicationStats>,
}

/// Role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct Role {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Allow access to unlabelled objects. Field introduced in 20.1.5. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_unlabelled_access: Option<bool>,
    /// Protobuf versioning for config pbs. Field introduced in 21.1.1. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    /// Filters for granular object access control based on object labels. Multiple filters are
    /// merged using the AND operator. If empty, all objects according to the privileges will be
    /// accessible to the user. Field introduced in 20.1.3. Maximum of 4 items allowed. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub filters: Vec<RoleFilter>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub privileges: Vec<Permission>,
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

/// Saas licensing status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SaasLicensingStatus {
    /// Portal connectivity status. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connected: Option<bool>,
    /// Status of saas licensing subscription. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Saas license expiry status. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expired: Option<bool>,
    /// Message. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Name. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Public key. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    /// Service units reserved on controller. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserve_service_units: Option<f64>,
}

/// SC fault options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ScFaultOptions {
    /// Delay CREATE in config path (seconds). Field introduced in 31.1.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_create: Option<u32>,
    /// Delay DELETES in Config, SE paths (seconds). Field introduced in 31.1.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_delete: Option<u32>,
    /// Delay UPDATES in ResMgr, Config, SE paths (seconds). Field introduced in 31.1.1. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_update: Option<u32>,
    /// Type of fault to injection. Enum options - DELAY_NOTIF, DELAY_SE, DELAY_RM. Field introduced
    /// in 31.1.1. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fault_type: Option<String>,
    /// Introduce faults for specific object UUID. Field introduced in 31.1.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obj: Option<String>,
    /// Introduce faults for objects of specified type. Enum options - VIRTUALSERVICE, POOL,
    /// HEALTHMONITOR, NETWORKPROFILE, APPLICATIONPROFILE, HTTPPOLICYSET, DNSPOLICY, SECURITYPOLICY,
    /// IPADDRGROUP, STRINGGROUP, SSLPROFILE, SSLKEYANDCERTIFICATE, NETWORKSECURITYPOLICY,
    /// APPLICATIONPERSISTENCEPROFILE, ANALYTICSPROFILE, VSDATASCRIPTSET, TENANT, PKIPROFILE,
    /// AUTHPROFILE, CLOUD.... Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,
    /// Introduce faults in SE path of specific SE UUID. Field introduced in 31.1.1. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se: Option<String>,
}

/// System configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct SystemConfiguration {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub admin_auth_configuration: Option<AdminAuthConfiguration>,
    /// Password for avi_email_login user. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avi_email_login_password: Option<String>,
    /// Common criteria mode's current state. Field introduced in 20.1.3. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_criteria_mode: Option<bool>,
    /// Protobuf versioning for config pbs. Field introduced in 21.1.1. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    /// Controller metrics event dynamic thresholds can be set here. CONTROLLER_CPU_HIGH and
    /// CONTROLLER_MEM_HIGH evets can take configured dynamic thresholds. Field introduced in
    /// 21.1.3. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub controller_analytics_policy: Option<ControllerAnalyticsPolicy>,
    /// Specifies the default license tier which would be used by new Clouds. Enum options -
    /// ENTERPRISE_16, ENTERPRISE, ENTERPRISE_18, BASIC, ESSENTIALS, ENTERPRISE_WITH_CLOUD_SERVICES.
    /// Field introduced in 17.2.5. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition. Special default for Essentials edition is
    /// ESSENTIALS, Basic edition is BASIC, Enterprise edition is ENTERPRISE_WITH_CLOUD_SERVICES.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_license_tier: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub dns_configuration: Option<DnsConfiguration>,
    /// DNS virtualservices hosting FQDN records for applications across Avi Vantage. If no
    /// virtualservices are provided, Avi Vantage will provide DNS services for configured
    /// applications. Switching back to Avi Vantage from DNS virtualservices is not allowed. It is a
    /// reference to an object of type VirtualService. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub dns_virtualservice_refs: Vec<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_mode: Option<bool>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub email_configuration: Option<EmailConfiguration>,
    /// Enable CORS Header. Field introduced in 20.1.3. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_cors: Option<bool>,
    /// Validates the host header against a list of trusted domains. Field introduced in 31.1.1.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_host_header_check: Option<bool>,
    /// Enable license quota for the system. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_license_quota: Option<bool>,
    /// FIPS mode current state. Field introduced in 20.1.1. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fips_mode: Option<bool>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub global_tenant_config: Option<TenantConfiguration>,
    /// Users can specify comma separated list of deprecated host key algorithm.If nothing is
    /// specified, all known algorithms provided by OpenSSH will be supported.This change could only
    /// apply on the controller node. Field introduced in 22.1.3. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_key_algorithm_exclude: Option<String>,
    /// Users can specify comma separated list of deprecated key exchange algorithm.If nothing is
    /// specified, all known algorithms provided by OpenSSH will be supported.This change could only
    /// apply on the controller node. Field introduced in 22.1.3. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kex_algorithm_exclude: Option<String>,
    /// Allow Outgoing Connections from Controller to Servers Using TLS 1.0/1.1. Field introduced in
    /// 31.1.1. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legacy_ssl_support: Option<bool>,
    /// License quota for the system. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub license_quota: Option<QuotaConfig>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub linux_configuration: Option<LinuxConfiguration>,
    /// Configure Ip Access control for controller to restrict open access. Allowed with any value
    /// in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub mgmt_ip_access_control: Option<MgmtIpAccessControl>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub ntp_configuration: Option<NtpConfiguration>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub portal_configuration: Option<PortalConfiguration>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub proxy_configuration: Option<ProxyConfiguration>,
    /// Users can specify and update the time limit of RekeyLimit in sshd_config.If nothing is
    /// specified, the default setting will be none. Field introduced in 30.2.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rekey_time_limit: Option<String>,
    /// Users can specify and update the size/volume limit of RekeyLimit in sshd_config.If nothing
    /// is specified, the default setting will be default. Field introduced in 30.2.1. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rekey_volume_limit: Option<String>,
    /// FQDN of SDDC Manager in VCF responsible for management of this ALB Controller Cluster. Field
    /// introduced in 22.1.6,31.1.1. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sddcmanager_fqdn: Option<String>,
    /// Configure Secure Channel properties. Field introduced in 18.1.4, 18.2.1. Allowed with any
    /// value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub secure_channel_configuration: Option<SecureChannelConfiguration>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub snmp_configuration: Option<SnmpConfiguration>,
    /// Allowed Ciphers list for SSH to the management interface on the Controller and Service
    /// Engines. If this is not specified, all the default ciphers are allowed. Allowed with any
    /// value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub ssh_ciphers: Vec<String>,
    /// Allowed HMAC list for SSH to the management interface on the Controller and Service Engines.
    /// If this is not specified, all the default HMACs are allowed. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub ssh_hmacs: Vec<String>,
    /// Ability to sync the KexAlgorithms & HostKeyAlgorithms to SEs. Field introduced in 31.2.1.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_kex_host_to_se: Option<bool>,
    /// Ability to sync the syslog server config to SEs. Field introduced in 31.2.1. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_syslog_to_se: Option<bool>,
    /// The destination Syslog server IP(v4/v6) address or FQDN. Field introduced in 31.2.1. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub syslog_servers: Vec<IpAddr>,
    /// Telemetry configuration. Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub telemetry_configuration: Option<TelemetryConfiguration>,
    /// Trusted Host Profiles for host header validation. Only works when host_header_check is set
    /// to true. It is a reference to an object of type TrustedHostProfile. Field introduced in
    /// 31.1.1. Maximum of 20 items allowed. Allowed with any value in Enterprise, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub trusted_host_profiles_refs: Vec<String>,
    /// Reference to PKIProfile used for validating the CA certificates for external comminications
    /// from Avi Load Balancer Controller This acts as trust store for Avi Load Balancer Controller.
    /// It is a reference to an object of type PKIProfile. Field introduced in 31.1.1. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truststore_pkiprofile_ref: Option<String>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// This flag is set once the Initial Controller Setup workflow is complete. Field introduced in
    /// 18.2.3. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub welcome_workflow_complete: Option<bool>,
}

/// System limit object count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SystemLimitObjectCount {
    /// Current value for the system limit. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_count: Option<i32>,
    /// Enum of the system limit. Enum options - NUM_VIRTUALSERVICES,
    /// NUM_VIRTUALSERVICES_RT_METRICS, NUM_EW_VIRTUALSERVICES, NUM_SERVERS, NUM_SERVICEENGINES,
    /// NUM_VRFS, NUM_CLOUDS, NUM_TENANTS, POOLS_PER_VS, POOLGROUPS_PER_VS, CERTIFICATES_PER_VS,
    /// POOLS_PER_POOLGROUP, RULES_PER_HTTPPOLICY, RULES_PER_NSP, SERVERS_PER_POOL, ROUTES_PER_VRF,
    /// DEF_ROUTES_PER_VRF, SNI_CHILD_PER_PARENT_VS, IPS_PER_IPADDRGROUP,
    /// STRINGS_PER_STRINGGROUP.... Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
    /// Description of the system limit. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_description: Option<String>,
    /// Name of the system limit. Field introduced in 31.2.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_name: Option<String>,
    /// Name of the system limit object. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Recommended max limit value for the system limit. Field introduced in 31.2.1. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_max_limit: Option<i32>,
    /// UUID of the system limit object. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Task journal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct TaskJournal {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// List of errors in the process. Field introduced in 30.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub errors: Vec<JournalError>,
    /// Image uuid for identifying the current base image. It is a reference to an object of type
    /// Image. Field introduced in 30.2.1. Allowed with any value in Enterprise, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
    /// Detailed Information of Journal. Field introduced in 30.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub info: Option<JournalInfo>,
    /// Name for the task journal. Field introduced in 30.2.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Cloud that this object belongs to. It is a reference to an object of type Cloud. Field
    /// introduced in 30.2.1. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obj_cloud_ref: Option<String>,
    /// Operation for which the task journal created. Field introduced in 30.2.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    /// Image uuid for identifying the current patch. It is a reference to an object of type Image.
    /// Field introduced in 30.2.1. Allowed with any value in Enterprise, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch_image_ref: Option<String>,
    /// Summary of Journal. Field introduced in 30.2.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required, nested)]
    pub summary: Option<JournalSummary>,
    /// List of all the tasks executed with details. For example, details of tasks to be executed
    /// for upgrade filecopy. Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub tasks: Vec<JournalTask>,
    /// Tenant UUID associated with the Object. It is a reference to an object of type Tenant. Field
    /// introduced in 30.2.1. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// UUID Identifier for the task journal. Field introduced in 30.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// List of warnings in the process. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub warnings: Vec<JournalError>,
}

/// Tech support.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct TechSupport {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// 'Customer case number for which this techsupport is generated. ''Useful for connected portal
    /// and other use-cases.'. Field introduced in 31.2.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_number: Option<String>,
    /// User provided description to capture additional details and context regarding the
    /// techsupport invocation. Field introduced in 31.2.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Total time taken for techsupport collection. Field introduced in 31.2.1. Unit is SEC.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// End timestamp of techsupport collection. Field introduced in 31.2.1. Allowed with any value
    /// in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Error logged during techsupport collection. Field introduced in 31.2.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub errors: Vec<String>,
    /// Name of the techsupport level. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    /// Name of techsupport invocation. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Cluster member node on which the techsupport tarball bundle is saved. Field introduced in
    /// 31.2.1. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,
    /// Object name if one exists. Field introduced in 31.2.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obj_name: Option<String>,
    /// Techsupport collection object uuid specified for different objects such as SE/VS/Pool etc.
    /// Field introduced in 31.2.1. Allowed with any value in Enterprise, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obj_uuid: Option<String>,
    /// Techsupport collection output file path. Field introduced in 31.2.1. Allowed with any value
    /// in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Techsupport params associated with latest techsupport collection. User passed params will
    /// have more preference. Field introduced in 31.2.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub params: Option<TechSupportParams>,
    /// Techsupport collection progress which holds value between 0-100. Allowed values are 0-100.
    /// Field introduced in 31.2.1. Unit is PERCENT. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u32>,
    /// Size of collected techsupport tarball. Field introduced in 31.2.1. Unit is MB. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    /// Start timestamp of techsupport collection. Field introduced in 31.2.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// State of current/last techsupport invocation. Field introduced in 31.2.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub state: Option<TechSupportState>,
    /// Events performed for techsupport collection. Field introduced in 31.2.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub tasks: Vec<TechSupportEventMap>,
    /// Completed set of tasks in the techsupport collection. Field introduced in 31.2.1. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks_completed: Option<i32>,
    /// Techsupport readiness checks execution details. Field introduced in 31.2.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub techsupport_readiness: Option<ReadinessCheckObj>,
    /// Tenant UUID associated with the techsupport. It is a reference to an object of type Tenant.
    /// Field introduced in 31.2.1. Allowed with any value in Enterprise, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// Total number of tasks in the techsupport collection. Field introduced in 31.2.1. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tasks: Option<i32>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// UUID Identifier for the techsupport invocation. Field introduced in 31.2.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// Warning logged during techsupport collection. Field introduced in 31.2.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub warnings: Vec<String>,
}

/// Tech support event map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TechSupportEventMap {
    /// Task description if any. Field introduced in 31.2.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Additional details of the task. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub details: Vec<String>,
    /// Duration of techsupport collection. Field introduced in 31.2.1. Unit is SEC. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// End timestamp of techsupport collection. Field introduced in 31.2.1. Allowed with any value
    /// in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Start timestamp of techsupport collection. Field introduced in 31.2.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// Task status. Enum options - SYSERR_SUCCESS, SYSERR_FAILURE, SYSERR_OUT_OF_MEMORY,
    /// SYSERR_NO_ENT, SYSERR_INVAL, SYSERR_ACCESS, SYSERR_FAULT, SYSERR_IO, SYSERR_TIMEOUT,
    /// SYSERR_NOT_SUPPORTED, SYSERR_NOT_READY, SYSERR_UPGRADE_IN_PROGRESS,
    /// SYSERR_WARM_START_IN_PROGRESS, SYSERR_TRY_AGAIN, SYSERR_NOT_UPGRADING, SYSERR_PENDING,
    /// SYSERR_EVENT_GEN_FAILURE, SYSERR_CONFIG_PARAM_MISSING, SYSERR_RANGE, SYSERR_FAILED.... Field
    /// introduced in 31.2.1. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// List of all events node wise. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub sub_events: Vec<UpgradeEvent>,
    /// Name of the task. Field introduced in 31.2.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_name: Option<String>,
}

/// Tech support event params.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TechSupportEventParams {
    /// Collect all events agnostic of duration, days and files. This flag will have higher
    /// precedence over duration, files and days. If flag is false then precedence given to duration
    /// passed while invocation. Field introduced in 31.2.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collect_all_events: Option<bool>,
    /// Collect events for the specified number of past days. e.g. User specified 3, collect events
    /// for past 3 days. If have 20 files with 3 days old then collect on basis of specified number
    /// of files. Allowed values are 1-5. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,
    /// Collect events for the specified number of files. e.g. User specified 5, collect atmost 5
    /// events files. If have 10 files with 2 days old then collect only specified number of files.
    /// Allowed values are 1-10. Field introduced in 31.2.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<u32>,
}

/// Tech support message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct TechSupportMessage {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// 'Techsupport status for the current invocation.'. Field introduced in 18.2.3. Allowed with
    /// any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// 'Techsupport status code for the current invocation.'. Enum options - SYSERR_SUCCESS,
    /// SYSERR_FAILURE, SYSERR_OUT_OF_MEMORY, SYSERR_NO_ENT, SYSERR_INVAL, SYSERR_ACCESS,
    /// SYSERR_FAULT, SYSERR_IO, SYSERR_TIMEOUT, SYSERR_NOT_SUPPORTED, SYSERR_NOT_READY,
    /// SYSERR_UPGRADE_IN_PROGRESS, SYSERR_WARM_START_IN_PROGRESS, SYSERR_TRY_AGAIN,
    /// SYSERR_NOT_UPGRADING, SYSERR_PENDING, SYSERR_EVENT_GEN_FAILURE, SYSERR_CONFIG_PARAM_MISSING,
    /// SYSERR_RANGE, SYSERR_FAILED.... Field introduced in 18.2.3. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<String>,
    /// 'Techsupport object ref.'. It is a reference to an object of type TechSupport. Field
    /// introduced in 31.2.1. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_support_ref: Option<String>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Uuid for techsupport message. Field deprecated in 31.2.1. Field introduced in 18.2.3.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Tech support params.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TechSupportParams {
    /// 'Customer case number for which this techsupport is generated. ''Useful for connected portal
    /// and other use-cases.'. Field introduced in 18.2.3. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_number: Option<String>,
    /// User provided description to capture additional details and context regarding the
    /// techsupport invocation. Field introduced in 31.2.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Collect events based on duration, specify one from choices [m, h, d, w]. i.e. minutes,
    /// hours, days, weeks. e.g. 10m, 5h, 2d, 1w. e.g. techsupport debuglogs duration 30m. Field
    /// introduced in 18.2.3. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Specify this params to set threshold for all event files. User provided parameters will take
    /// precedence over the profile parameters. Field introduced in 31.2.1. Allowed with any value
    /// in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub event_params: Option<TechSupportEventParams>,
    /// Techsupport collection level. Field introduced in 18.2.3. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    /// Name of the objects like service engine, vs, pool etc. Field introduced in 31.2.1. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Specify pattern to collect specific info in techsupport. User can specify error patterns to
    /// filter files based on pattern only. This way will reduce unnecessary collection. Field
    /// introduced in 31.2.1. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Use this flag for skippable warnings. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_warnings: Option<bool>,
    /// Techsupport collection slug; Typically uuid of a vs, gslb etc. Field introduced in 18.2.3.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Start timestamp of techsupport collection. Field introduced in 18.2.3. Allowed with any
    /// value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_timestamp: Option<String>,
    /// X-Avi-Tenant of HTTP POST request for authentication. Always admin for now, can be override
    /// in the future. Field introduced in 31.2.1. Allowed with any value in Enterprise, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant: Option<String>,
    /// Techsupport uuid for RPC related requirements. Field introduced in 18.2.3. Allowed with any
    /// value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Tech support profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct TechSupportProfile {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Define the policy for techsupport archive rules. These rules allow you to specify files that
    /// should be collected in the techsupport bundle, even if they exceed the default file size
    /// threshold. e.g. To ensure a 450MB file, such as /var/sample.log, is collected with every
    /// invocation, configure and add its path to the TechSupportProfile. Field introduced in
    /// 31.2.1. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub archive_rules: Option<ArchiveRules>,
    /// Specify this params to set threshold for event files. User provided parameters will take
    /// precedence over the profile parameters. Field introduced in 31.2.1. Allowed with any value
    /// in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub event_params: Option<TechSupportEventParams>,
    /// Max file size threshold to archive in techsupport collection. files above this threshold
    /// will not be collected and an warning will be flagged. Allowed values are 128-512. Field
    /// introduced in 31.2.1. Unit is MB. Allowed with any value in Enterprise, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size_threshold: Option<u32>,
    /// Max disk size in percent of total disk size reserved for the techsupport. The value is in
    /// Percentage to make it agnostic of controller flavors. e.g. small [disk=5 GB, TS space
    /// available = 500MB] Large [ disk= 100Gb, TS Space available= 10GB] XL [disk=1TB, TS space
    /// available=100GB]. Allowed values are 10-25. Field introduced in 31.2.1. Unit is PERCENT.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_disk_size_percent: Option<u32>,
    /// Min free disk required for the techsupport invocation. The value is in Percentage to make it
    /// agnostic of controller flavors. e.g. small [disk=5 GB, TS space available = 250MB] Large [
    /// disk= 100Gb, TS Space available= 5GB] XL [disk=1TB, TS space available=50GB]. Allowed values
    /// are 5-10. Field introduced in 31.2.1. Unit is PERCENT. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_free_disk_required: Option<u32>,
    /// Number of techsupport to retain from techsupport cleanup policy. Allowed values are 1-5.
    /// Field introduced in 31.2.1. Allowed with any value in Enterprise, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_of_techsupport_retentions: Option<u32>,
    /// Number of simultaneous techsupport invocation allowed. Allowed values are 1-2. Field
    /// introduced in 31.2.1. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simultaneous_invocations: Option<u32>,
    /// Generic timeout for techsupport task collection. This can be used for task, script
    /// executions etc. Tweak the timeout value in cases of timeout observation in the logs. Field
    /// introduced in 31.2.1. Unit is SEC. Allowed with any value in Enterprise, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_timeout: Option<u32>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// UUID Identifier for the techsupport profile. Field introduced in 31.2.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Tech support state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TechSupportState {
    /// The last time the state changed. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub last_changed_time: Option<TimeStamp>,
    /// Descriptive reason for the techsupport state-change. Field introduced in 31.2.1. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// The upgrade operations current fsm-state. Enum options - TECHSUPPORT_FSM_STARTED,
    /// TECHSUPPORT_FSM_IN_PROGRESS, TECHSUPPORT_FSM_COMPLETED,
    /// TECHSUPPORT_FSM_COMPLETED_WITH_WARNINGS, TECHSUPPORT_FSM_WARNING, TECHSUPPORT_FSM_ERROR.
    /// Field introduced in 31.2.1. Allowed with any value in Enterprise, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Upgrade ops param.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct UpgradeOpsParam {
    /// This field holds the configurable Controller params required in upgrade flows for current
    /// request. Field introduced in 31.1.1. Allowed with any value in Enterprise, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub controller: Option<ControllerParams>,
    /// Image uuid for identifying base image. It is a reference to an object of type Image. Field
    /// introduced in 18.2.6. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
    /// Image uuid for identifying patch. It is a reference to an object of type Image. Field
    /// introduced in 18.2.6. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch_ref: Option<String>,
    /// This field identifies SE group options that need to be applied during the upgrade
    /// operations. Field introduced in 18.2.6. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub se_group_options: Option<SeGroupOptions>,
    /// Apply options while resuming SE group upgrade operations. Field introduced in 18.2.6.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub se_group_resume_options: Option<SeGroupResumeOptions>,
    /// This field holds the configurable ServiceEngineGroup params required in upgrade flows for
    /// current request. Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub service_engine: Option<ServiceEngineParams>,
}

/// Upgrade params.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct UpgradeParams {
    /// Image uuid for identifying Controller patch. It is a reference to an object of type Image.
    /// Field introduced in 18.2.6. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller_patch_ref: Option<String>,
    /// This flag is set to perform the upgrade dry-run operations. Field introduced in 31.1.1.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dryrun: Option<bool>,
    /// Image uuid for identifying base image. It is a reference to an object of type Image. Field
    /// introduced in 18.2.6. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
    /// This flag is set to run the pre-checks without the subsequent upgrade operations. Field
    /// introduced in 22.1.6, 30.2.1. Allowed with any value in Enterprise, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prechecks_only: Option<bool>,
    /// This field identifies SE group options that need to be applied during the upgrade
    /// operations. Field introduced in 18.2.6. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub se_group_options: Option<SeGroupOptions>,
    /// This field identifies the list of SE groups for which the upgrade operations are applicable.
    /// This field is ignored if the 'system' is enabled. It is a reference to an object of type
    /// ServiceEngineGroup. Field introduced in 18.2.6. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub se_group_refs: Vec<String>,
    /// Image uuid for identifying Service Engine patch. It is a reference to an object of type
    /// Image. Field introduced in 18.2.6. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_patch_ref: Option<String>,
    /// This is flag when set as true skips few optional must check. Field introduced in 18.2.6.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_warnings: Option<bool>,
    /// Apply upgrade operations such as Upgrade/Patch to Controller and ALL SE groups. Field
    /// introduced in 18.2.6. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<bool>,
}

/// Upgrade profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct UpgradeProfile {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// List of controller upgrade related configurable parameters. Field deprecated in 31.2.1.
    /// Field introduced in 31.1.1. Allowed with any value in Enterprise, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub controller: Option<ControllerParams>,
    /// List of controller upgrade related configurable parameters. Field introduced in 31.2.1.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub controller_params: Option<ControllerParams>,
    /// List of dryrun related configurable parameters. Field introduced in 31.1.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub dry_run: Option<DryRunParams>,
    /// List of image related configurable parameters. Field introduced in 31.1.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub image: Option<ImageParams>,
    /// List of upgrade pre-checks related configurable parameters. Field introduced in 31.1.1.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub pre_checks: Option<PreChecksParams>,
    /// List of service engine upgrade related configurable parameters. Field introduced in 31.1.1.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub service_engine: Option<ServiceEngineParams>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// UUID Identifier for the UpgradeProfile object. Field introduced in 31.1.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// User account profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct UserAccountProfile {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Lock timeout period (in minutes). Default is 30 minutes. Unit is MIN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_lock_timeout: Option<i32>,
    /// Protobuf versioning for config pbs. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    /// The time period after which credentials expire. Default is 180 days. Unit is DAYS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials_timeout_threshold: Option<i32>,
    /// The configurable time window beyond which we need to pop all the login failure timestamps
    /// from the login_failure_timestamps. Special values are 0 - Do not reset login_failure_counts
    /// on the basis of time.. Field introduced in 22.1.1. Unit is MIN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_failure_count_expiry_window: Option<i32>,
    /// Maximum number of concurrent sessions allowed. There are unlimited sessions by default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrent_sessions: Option<i32>,
    /// Number of login attempts before lockout. Default is 3 attempts. Allowed values are 3-20.
    /// Special values are 0- Unlimited login attempts allowed..
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_login_failure_count: Option<i32>,
    /// Maximum number of passwords to be maintained in the password history. Default is 4
    /// passwords.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_password_history_count: Option<i32>,
    /// Name of the object.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Unique object identifier of the object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// User activity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct UserActivity {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Number of concurrent user sessions open.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concurrent_sessions: Option<i32>,
    /// Number of failed login attempts before a successful login.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_login_attempts: Option<i32>,
    /// IP of the machine the user was last logged in from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_ip: Option<String>,
    /// Timestamp of last login.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_timestamp: Option<String>,
    /// Timestamp of last password update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_password_update: Option<String>,
    /// Indicates whether the user is logged in or not.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logged_in: Option<bool>,
    /// Its a queue that store the timestamps for past login_failures. Field introduced in 22.1.1.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub login_failure_timestamps: Vec<String>,
    /// Name of the user this object refers to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Stores the previous n passwords where n is ControllerProperties.max_password_history_count.
    /// .
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub previous_password: Vec<String>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Unique object identifier of the object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Version info.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct VersionInfo {
    /// Identifies the datastore table . Field introduced in 17.2.7. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ds_name: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Enum options - GSLB_NONE, GSLB_CREATE, GSLB_UPDATE, GSLB_DELETE, GSLB_PURGE, GSLB_DECL.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ops: Option<String>,
    /// Describes the reason for the object in this state. Field introduced in 30.2.1. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Represents the state of the object. Field introduced in 30.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u32>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}
