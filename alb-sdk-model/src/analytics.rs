//! Alerting, metrics, reports and log retention.

use alb_sdk_macro::{AviObject, Validate};
use serde::{Deserialize, Serialize};

use crate::admin::ReadinessCheckObj;
use crate::application::{IpAddrMatch, StringMatch};
use crate::common::{
    ActionArgs, AlertFilter, AlertRuleEvent, AlertRuleMetric, AlertSyslogServer, AuthnRuleMatch,
    AuthzRuleMatch, ConfigPbAttributes, MetricsDataSeries, OauthSubRequestLog, PaaRequestLog,
    PolicySpec, ReportParameter, ReportSection, SnmpTrapServer, TaskEventMap, TimeStamp,
};
use crate::serde_util::null_as_default;

/// Action group config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct ActionGroupConfig {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// reference of the action script configuration to be used. It is a reference to an object of
    /// type AlertScriptConfig. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_script_config_ref: Option<String>,
    /// Trigger Notification to AutoScale Manager. Allowed with any value in Enterprise, Enterprise
    /// with Cloud Services edition. Allowed in Essentials (Allowed values- false), Basic (Allowed
    /// values- false) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoscale_trigger_notification: Option<bool>,
    /// Protobuf versioning for config pbs. Field introduced in 21.1.1. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Select the Email Notification configuration to use when sending alerts via email. It is a
    /// reference to an object of type AlertEmailConfig. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_config_ref: Option<String>,
    /// Generate Alert only to external destinations. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition. Allowed in Essentials (Allowed values- false), Basic
    /// (Allowed values- false) edition.
    ///
    /// Required.
    #[avi(required)]
    pub external_only: Option<bool>,
    /// When an alert is generated, mark its priority via the Alert Level. Enum options - ALERT_LOW,
    /// ALERT_MEDIUM, ALERT_HIGH. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub level: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// Select the SNMP Trap Notification to use when sending alerts via SNMP Trap. It is a
    /// reference to an object of type SnmpTrapProfile. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snmp_trap_profile_ref: Option<String>,
    /// Select the Syslog Notification configuration to use when sending alerts via Syslog. It is a
    /// reference to an object of type AlertSyslogConfig. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syslog_config_ref: Option<String>,
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

/// Alert email config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct AlertEmailConfig {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Alerts are copied to the comma separated list of email recipients. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc_emails: Option<String>,
    /// Protobuf versioning for config pbs. Field introduced in 21.1.1. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// A user-friendly name of the email notification service. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// It is a reference to an object of type Tenant. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// Alerts are sent to the comma separated list of email recipients. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub to_emails: Option<String>,
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

/// Alert object list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct AlertObjectList {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Protobuf versioning for config pbs. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    /// Name of the object.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// Enum options - VIRTUALSERVICE. POOL. HEALTHMONITOR. NETWORKPROFILE. APPLICATIONPROFILE.
    /// HTTPPOLICYSET. DNSPOLICY. SECURITYPOLICY. IPADDRGROUP. STRINGGROUP. SSLPROFILE.
    /// SSLKEYANDCERTIFICATE. NETWORKSECURITYPOLICY. APPLICATIONPERSISTENCEPROFILE.
    /// ANALYTICSPROFILE. VSDATASCRIPTSET. TENANT. PKIPROFILE. AUTHPROFILE. CLOUD...
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub objects: Vec<String>,
    /// Enum options - CONN_LOGS, APP_LOGS, EVENT_LOGS, METRICS.
    ///
    /// Required.
    #[avi(required)]
    pub source: Option<String>,
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

/// Alert rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AlertRule {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub conn_app_log_rule: Option<AlertFilter>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_match_filter: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub metrics_rule: Vec<AlertRuleMetric>,
    /// Enum options - OPERATOR_AND, OPERATOR_OR. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub sys_event_rule: Vec<AlertRuleEvent>,
}

/// Alert syslog config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct AlertSyslogConfig {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Protobuf versioning for config pbs. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    /// User defined description for alert syslog config.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// A user-friendly name of the syslog notification.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// The list of syslog servers.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub syslog_servers: Vec<AlertSyslogServer>,
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

/// Avg uptime change details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AvgUptimeChangeDetails {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_value: Option<f64>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_id: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_name: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_str: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
}

/// Client log filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ClientLogFilter {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_headers: Option<bool>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub client_ip: Option<IpAddrMatch>,
    /// Special values are 0 - infinite. Unit is MIN. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub enabled: Option<bool>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub index: Option<u32>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub uri: Option<StringMatch>,
}

/// Collection rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CollectionRules {
    /// The period for report generation. Enum options - REPORT_PERIOD_LAST_24_HOURS,
    /// REPORT_PERIOD_LAST_7_DAYS, REPORT_PERIOD_LAST_30_DAYS. Field introduced in 31.2.1. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enforced_report_period: Option<String>,
    /// Minimum data samples required for report generation. Allowed values are 200-5000. Field
    /// introduced in 31.2.1. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enforced_report_samples: Option<u32>,
    /// Maximum number of concurrent workers used for data collection during report generation.
    /// Allowed values are 1-10. Field introduced in 31.2.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrent_workers: Option<u32>,
    /// Minimum free disk required for report generation in GB. Allowed values are 0.1-20. Field
    /// introduced in 31.2.1. Unit is GB. Allowed with any value in Enterprise, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_free_disk_required: Option<f32>,
    /// Timeout for report generation in seconds. Allowed values are 300-3600. Field introduced in
    /// 31.2.1. Unit is SEC. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
}

/// Diameter log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DiameterLog {
    /// Field to identify which application the message is applicable for. Field introduced in
    /// 31.1.1. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<u32>,
    /// AvpKey type. Enum options - SESSION_ID, ORIGIN_HOST, ORIGIN_REALM, DESTINATION_HOST,
    /// DESTINATION_REALM, APPLICATION_ID. Field introduced in 31.1.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avp_key_type: Option<String>,
    /// Field to indicate command associated with message. Field introduced in 31.1.1. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_code: Option<u32>,
    /// Field to identify the target server for the message. Field introduced in 31.1.1. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_host: Option<String>,
    /// Field to identify the realm where receiving server resides. Field introduced in 31.1.1.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_realm: Option<String>,
    /// Field to detect duplicate messages. Field introduced in 31.1.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_to_end_identifier: Option<u32>,
    /// Field to match requests and responses. Field introduced in 31.1.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hop_by_hop_identifier: Option<u32>,
    /// Field to identify endpoint that originated the message. Field introduced in 31.1.1. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_host: Option<String>,
    /// Field to identify realm that originated the message. Field introduced in 31.1.1. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_realm: Option<String>,
}

/// Disk threshold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DiskThreshold {
    /// Action to trigger when policy conditions are met. Field introduced in 31.1.1. Allowed with
    /// any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    ///
    /// Read only. Required.
    #[avi(required, nested)]
    pub action: Option<RetentionAction>,
    /// Path against which disk usage is measured, user cannot modify the path. Field introduced in
    /// 31.1.1. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filepath: Option<String>,
    /// Trigger the action when disk usage percent exceeds on the specified path. Allowed values are
    /// 1-25. Field introduced in 31.1.1. Unit is PERCENT. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_disk_percent: Option<u64>,
    /// Trigger the action when total available diskspace falls below this level. Allowed values are
    /// 5-50. Field introduced in 31.1.1. Unit is PERCENT. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_free_disk_percent: Option<u64>,
    /// When number of files at this path does not exceed this limit, skip renteion action
    /// regardless of other disk criteria. Trigger the action when no other disk criteria is
    /// specified and number of files exceed the retain limit. Subdirectories do not count. Field
    /// introduced in 31.1.1. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retain: Option<u64>,
}

/// Full client logs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct FullClientLogs {
    /// How long should the system capture all logs, measured in minutes. Set to 0 for infinite.
    /// Special values are 0 - infinite. Unit is MIN. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// Capture all client logs including connections and requests. When deactivated, only errors
    /// will be logged. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition. Allowed in Essentials (Allowed values- false), Basic (Allowed values- false)
    /// edition. Special default for Essentials edition is false, Basic edition is false, Enterprise
    /// edition is False.
    ///
    /// Required.
    #[avi(required)]
    pub enabled: Option<bool>,
    /// This setting limits the number of non-significant logs generated per second for this VS on
    /// each SE. Default is 10 logs per second. Set it to zero (0) to deactivate throttling. Note
    /// that the SE group's throttle value takes precedence over this setting. Field introduced in
    /// 17.1.3. Unit is PER_SECOND. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throttle: Option<u32>,
}

/// Health score details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct HealthScoreDetails {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anomaly_penalty: Option<u32>,
    /// Reason for Anomaly Penalty. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anomaly_reason: Option<String>,
    /// Reason for Performance Score. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_reason: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_score: Option<u32>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub previous_value: Option<f64>,
    /// Reason for the Health Score Change. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources_penalty: Option<u32>,
    /// Reason for Resources Penalty. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources_reason: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_penalty: Option<u32>,
    /// Reason for Security Threat Level. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_reason: Option<String>,
    /// The step interval in seconds. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<u32>,
    /// Resource prefix containing entity information. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_resource_prefix: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub timestamp: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub value: Option<f64>,
}

/// Inventory metric statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct InventoryMetricStatistics {
    /// Maximum value in time series requested. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Arithmetic mean. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,
    /// Minimum value in time series requested. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Number of actual data samples. It excludes fake data. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_samples: Option<u32>,
}

/// Metric log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct MetricLog {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_timestamp: Option<f64>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub metric_id: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_timestamp: Option<f64>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<u32>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub time_series: Option<MetricsQueryResponse>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub value: Option<f64>,
}

/// Metric thresold up details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct MetricThresoldUpDetails {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_value: Option<f64>,
    /// ID of the object whose metric has hit the threshold. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_uuid: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_id: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub metric_name: Option<String>,
    /// Identity of the Pool. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_uuid: Option<String>,
    /// Server IP Port on which event was generated. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    /// VM at which Metric thresold details collected. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vm_type: Option<String>,
}

/// Metrics query response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct MetricsQueryResponse {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_uuid: Option<String>,
    /// returns the ID specified in the query. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    /// Enum options - VSERVER_METRICS_ENTITY, VM_METRICS_ENTITY, SE_METRICS_ENTITY,
    /// CONTROLLER_METRICS_ENTITY, APPLICATION_METRICS_ENTITY, TENANT_METRICS_ENTITY,
    /// POOL_METRICS_ENTITY. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_entity: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_id: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub series: Vec<MetricsDataSeries>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<i32>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<String>,
}

/// Oauth log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct OauthLog {
    /// Authentication policy rule match. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub authn_rule_match: Option<AuthnRuleMatch>,
    /// Authorization policy rule match. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub authz_rule_match: Option<AuthzRuleMatch>,
    /// OAuth SessionCookie expired. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_session_cookie_expired: Option<bool>,
    /// Subrequest info related to fetching jwks keys from jwks uri endpoint. Field introduced in
    /// 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub jwks_subrequest: Option<OauthSubRequestLog>,
    /// OAuth state. Enum options - OAUTH_STATE_CLIENT_IDP_HANDSHAKE_REDIRECT,
    /// OAUTH_STATE_CLIENT_IDP_HANDSHAKE_FAIL, OAUTH_STATE_TOKEN_EXCHANGE_REQUEST,
    /// OAUTH_STATE_TOKEN_EXCHANGE_RESPONSE, OAUTH_STATE_TOKEN_INTROSPECTION_REQUEST,
    /// OAUTH_STATE_TOKEN_INTROSPECTION_RESPONSE, OAUTH_STATE_REFRESH_TOKEN_REQUEST,
    /// OAUTH_STATE_REFRESH_TOKEN_RESPONSE, OAUTH_STATE_JWKS_URI_REQUEST,
    /// OAUTH_STATE_JWKS_URI_RESPONSE, OAUTH_STATE_USERINFO_REQUEST, OAUTH_STATE_USERINFO_RESPONSE.
    /// Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth_state: Option<String>,
    /// OAuth request State to avoid CSRF atatcks. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Subrequest info related to the code exchange flow. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub token_exchange_subrequest: Option<OauthSubRequestLog>,
    /// Subrequest info related to Token Introspection. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub token_introspection_subrequest: Option<OauthSubRequestLog>,
    /// Subrequest info related to refresh access Token flow. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub token_refresh_subrequest: Option<OauthSubRequestLog>,
    /// Subrequest info related to fetching userinfo from userinfo endpoint. Field introduced in
    /// 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub userinfo_subrequest: Option<OauthSubRequestLog>,
}

/// Paa log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PaaLog {
    /// PingAccess Agent cache was used for authentication. Field introduced in 18.2.3. Allowed with
    /// any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_hit: Option<bool>,
    /// The PingAccess server required the client request body for authentication. Field introduced
    /// in 18.2.3. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_request_body_sent: Option<bool>,
    /// Logs for each request sent to PA server to completeauthentication for the initial request.
    /// Field introduced in 18.2.3. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub request_logs: Vec<PaaRequestLog>,
}

/// Report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct Report {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Time taken to complete report generation in seconds. Field introduced in 31.2.1. Unit is
    /// SEC. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// End time of the report generation. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Name of the report artifact on reports repository. Field introduced in 31.2.1. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Name of the report. Field introduced in 31.2.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Cluster member node on which the report is processed. Field introduced in 31.2.1. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,
    /// Pre-check details for the report generation. Field introduced in 31.2.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub pre_check: Option<ReadinessCheckObj>,
    /// Percentage of tasks completed. Allowed values are 0-100. Field introduced in 31.2.1. Unit is
    /// PERCENT. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u32>,
    /// Request for the report generation. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub request: Option<ReportGenerationRequest>,
    /// Start time of the report generation. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// State of the report generation. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub state: Option<ReportGenState>,
    /// List of tasks associated with the report generation. Field introduced in 31.2.1. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub tasks: Vec<TaskEventMap>,
    /// No. of tasks completed. Field introduced in 31.2.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks_completed: Option<u32>,
    /// Tenant UUID of the report generation. It is a reference to an object of type Tenant. Field
    /// introduced in 31.2.1. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// Total no. of tasks. Field introduced in 31.2.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tasks: Option<u32>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// UUID Identifier for the report generation. Field introduced in 31.2.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Report duration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ReportDuration {
    /// The end timestamp of the report when period is custom. Field introduced in 31.2.1. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub end_time: Option<TimeStamp>,
    /// The period for report generation. Enum options - REPORT_PERIOD_LAST_24_HOURS,
    /// REPORT_PERIOD_LAST_7_DAYS, REPORT_PERIOD_LAST_30_DAYS. Field introduced in 31.2.1. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    /// The start timestamp of the report when period is custom. Field introduced in 31.2.1. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub start_time: Option<TimeStamp>,
}

/// Report gen state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ReportGenState {
    /// The last time the state changed. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub last_changed_time: Option<TimeStamp>,
    /// Reason for the state. Field introduced in 31.2.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// State of the report generation. Enum options - REPORT_FSM_STARTED, REPORT_FSM_IN_PROGRESS,
    /// REPORT_FSM_COMPLETED, REPORT_FSM_FAILED. Field introduced in 31.2.1. Allowed with any value
    /// in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Report generation request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ReportGenerationRequest {
    /// The duration of the report. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub duration: Option<ReportDuration>,
    /// Custom name for the report. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The parameters of the report. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub parameters: Vec<ReportParameter>,
    /// The report to be generated. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub report: Option<String>,
    /// IDs of specified sections are collected as part of the report. Field introduced in 31.2.1.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub sections: Vec<ReportSection>,
}

/// Report profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct ReportProfile {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Collection rules for the report. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub collection_rules: Option<CollectionRules>,
    /// Maximum number of concurrent reports allowed to be generated. Allowed values are 1-10. Field
    /// introduced in 31.2.1. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrent_reports: Option<u32>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// UUID Identifier for the ReportProfile object. Field introduced in 31.1.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Retention action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RetentionAction {
    /// Arguments for the action. Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    ///
    /// Read only. Required.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(required, nested)]
    pub args: Vec<ActionArgs>,
    /// Path to invoke for the action. For example, for API action, this would be an API endpoint.
    /// Field introduced in 31.1.1. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    ///
    /// Read only. Required.
    #[avi(required)]
    pub path: Option<String>,
    /// Type of action to perform such as API, RPC, Script, etc. Enum options - ACTION_API,
    /// ACTION_GRPC, ACTION_SCRIPT, ACTION_RPC. Field introduced in 31.1.1. Allowed with any value
    /// in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    ///
    /// Read only. Required.
    #[avi(required)]
    pub r#type: Option<String>,
}

/// Retention policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct RetentionPolicy {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Enables the policy. Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// History of previous runs. Field introduced in 31.1.1. Maximum of 10 items allowed. Allowed
    /// with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub history: Vec<RetentionSummary>,
    /// Name of the policy. Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Policy specification. Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required, nested)]
    pub policy: Option<PolicySpec>,
    /// Details of most recent run. Field introduced in 31.1.1. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub summary: Option<RetentionSummary>,
    /// Tenant UUID associated with the Object. It is a reference to an object of type Tenant. Field
    /// introduced in 31.1.1. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// UUID Identifier for the policy. Field introduced in 31.1.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Retention summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RetentionSummary {
    /// Action duration. Field introduced in 31.1.1. Unit is SEC. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
    /// Action end time. Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Action messages. Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub messages: Vec<String>,
    /// Action start time. Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// Action status. Enum options - SYSERR_SUCCESS, SYSERR_FAILURE, SYSERR_OUT_OF_MEMORY,
    /// SYSERR_NO_ENT, SYSERR_INVAL, SYSERR_ACCESS, SYSERR_FAULT, SYSERR_IO, SYSERR_TIMEOUT,
    /// SYSERR_NOT_SUPPORTED, SYSERR_NOT_READY, SYSERR_UPGRADE_IN_PROGRESS,
    /// SYSERR_WARM_START_IN_PROGRESS, SYSERR_TRY_AGAIN, SYSERR_NOT_UPGRADING, SYSERR_PENDING,
    /// SYSERR_EVENT_GEN_FAILURE, SYSERR_CONFIG_PARAM_MISSING, SYSERR_RANGE, SYSERR_FAILED.... Field
    /// introduced in 31.1.1. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Snmp trap profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct SnmpTrapProfile {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Protobuf versioning for config pbs. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    /// A user-friendly name of the SNMP trap configuration.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// It is a reference to an object of type Tenant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// The IP address or hostname of the SNMP trap destination server.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub trap_servers: Vec<SnmpTrapServer>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// UUID of the SNMP trap profile object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}
