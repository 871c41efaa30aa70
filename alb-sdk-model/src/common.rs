//! Shapes shared across the topic modules.
//!
//! A handful of small, ubiquitous objects are spelled out field by field. All
//! other shapes the schema references but this crate does not model in detail
//! are pass-through objects: they keep every JSON member verbatim, so reading
//! an object and writing it back never loses data.

use std::ops::{Deref, DerefMut};

use alb_sdk_macro::Validate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::serde_util::null_as_default;

/// Protobuf versioning attributes of config objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ConfigPbAttributes {
    /// Protobuf version number. Gets incremented if there is any change in the configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
}

/// An IPv4, IPv6 or DNS address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct IpAddr {
    /// IP address.
    ///
    /// Required.
    #[avi(required)]
    pub addr: Option<String>,
    /// Enum options - V4, DNS, V6.
    ///
    /// Required.
    #[avi(required)]
    pub r#type: Option<String>,
}

impl IpAddr {
    pub const V4: &'static str = "V4";
    pub const V6: &'static str = "V6";
    pub const DNS: &'static str = "DNS";

    /// Builds an address, picking `V4` or `V6` from the literal and `DNS` otherwise.
    pub fn new(addr: impl Into<String>) -> Self {
        let addr = addr.into();
        let type_ = match addr.parse::<std::net::IpAddr>() {
            Ok(std::net::IpAddr::V4(_)) => Self::V4,
            Ok(std::net::IpAddr::V6(_)) => Self::V6,
            Err(_) => Self::DNS,
        };
        Self {
            addr: Some(addr),
            r#type: Some(type_.to_string()),
        }
    }

    /// The address as a std IP address, if it is one.
    pub fn to_std(&self) -> Option<std::net::IpAddr> {
        self.addr.as_deref()?.parse().ok()
    }
}

/// An address prefix in CIDR notation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct IpAddrPrefix {
    /// Required.
    #[avi(required, nested)]
    pub ip_addr: Option<IpAddr>,
    /// Required.
    #[avi(required)]
    pub mask: Option<i32>,
}

/// An inclusive range of addresses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct IpAddrRange {
    /// Starting IP address of the range.
    ///
    /// Required.
    #[avi(required, nested)]
    pub begin: Option<IpAddr>,
    /// Ending IP address of the range.
    ///
    /// Required.
    #[avi(required, nested)]
    pub end: Option<IpAddr>,
}

/// Seconds and microseconds since the UNIX epoch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TimeStamp {
    /// Required.
    #[avi(required)]
    pub secs: Option<i64>,
    /// Required.
    #[avi(required)]
    pub usecs: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct KeyValue {
    /// Key.
    ///
    /// Required.
    #[avi(required)]
    pub key: Option<String>,
    /// Value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Label filter restricting a role to objects carrying the label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RoleFilterMatchLabel {
    /// Key for filter match.
    ///
    /// Required.
    #[avi(required)]
    pub key: Option<String>,
    /// Values for filter match. Multiple values will be evaluated as OR.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub values: Vec<String>,
}

/// Inclusive port range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PortRange {
    /// TCP/UDP port range end (inclusive). Allowed values are 1-65535.
    ///
    /// Required.
    #[avi(required)]
    pub end: Option<i32>,
    /// TCP/UDP port range start (inclusive). Allowed values are 1-65535.
    ///
    /// Required.
    #[avi(required)]
    pub start: Option<i32>,
}

impl PortRange {
    pub fn new(start: i32, end: i32) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Whether `port` lies within the range. An incomplete range contains nothing.
    pub fn contains(&self, port: i32) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => (start..=end).contains(&port),
            _ => false,
        }
    }
}

macro_rules! passthrough_objects {
    ($($name:ident),* $(,)?) => {
        $(
            /// Pass-through object; members are kept as raw JSON.
            #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
            #[serde(transparent)]
            pub struct $name(pub Map<String, Value>);

            impl Deref for $name {
                type Target = Map<String, Value>;

                fn deref(&self) -> &Self::Target {
                    &self.0
                }
            }

            impl DerefMut for $name {
                fn deref_mut(&mut self) -> &mut Self::Target {
                    &mut self.0
                }
            }

            impl From<Map<String, Value>> for $name {
                fn from(members: Map<String, Value>) -> Self {
                    Self(members)
                }
            }

            impl crate::Validate for $name {
                fn collect_missing(&self, _prefix: &str, _missing: &mut Vec<String>) {}
            }
        )*
    };
}

passthrough_objects!(
    AlbServicesUser,
    ActionArgs,
    AdminAuthConfiguration,
    AlertFilter,
    AlertMgrDebugFilter,
    AlertRuleEvent,
    AlertRuleMetric,
    AlertSyslogServer,
    AppLearningConfidenceOverride,
    AppSignatureConfig,
    ApplicationSamplingConfig,
    ArchiveRules,
    AuthnRuleMatch,
    AuthorizationAction,
    AuthorizationMatch,
    AuthzRuleMatch,
    AutoTuneSendInterval,
    AzureInfo,
    BotAllowList,
    BotClassMatcher,
    BotClassification,
    BotConfigIpLocation,
    BotConfigIpReputation,
    BotConfigUserAgent,
    BotDetectionMatch,
    BotTypeMatcher,
    Crl,
    CsrfRule,
    CaptureIpc,
    CdpLldpInfo,
    CfgState,
    ChildProcessInfo,
    ClientLogConfiguration,
    ClientLogStreamingConfig,
    CloudConnectorDebugFilter,
    ConfigVersionStatus,
    ContentLibConfig,
    ControllerAnalyticsPolicy,
    ControllerInfo,
    ControllerParams,
    ControllerSizingCloudLimits,
    CookieMatch,
    CorfuTimestamp,
    CustomParams,
    DnsClientIpMatch,
    DnsClientPortMatch,
    DnsConfig,
    DnsConfiguration,
    DnsGeoLocationMatch,
    DnsQueryNameMatch,
    DnsQueryTypeMatch,
    DnsTransportProtocolMatch,
    DataNetworkConfig,
    DebugDnsOptions,
    DebugIpAddr,
    DebugVirtualServiceCapture,
    DebugVirtualServiceObjSync,
    DebugVirtualServiceSeParams,
    DebugVsDataplane,
    DiscoveredNetwork,
    DsrProfile,
    EmailConfiguration,
    EventCache,
    EventMap,
    FtpProfile,
    FailActionHttpLocalResponse,
    FdsInfo,
    FileObjectEventMap,
    GeoLocation,
    GeoMatch,
    GslbClientIpAddrGroup,
    GslbDnsGsStatus,
    GslbObjInfo,
    GslbPerDnsState,
    GslbReplicationStats,
    GslbSite,
    GslbSiteRuntime,
    GslbThirdPartySite,
    GslbThirdPartySiteRuntime,
    HsmAwsCloudHsm,
    HsmSafenetLuna,
    HsmThalesNetHsm,
    HsmThalesRfs,
    HttpCookiePersistenceKey,
    HttpHdrAction,
    HttpLocalFile,
    HttpRedirectAction,
    HttpRequestPolicy,
    HttpReselectRespCode,
    HttpResponsePolicy,
    HeaderInfoInUri,
    HealthMonitorSslAttributes,
    HealthScoreEntity,
    HorizonProfile,
    HostAttributes,
    HostHdrMatch,
    Http2PoolProperties,
    HttpsecurityAction,
    HttpsecurityPolicy,
    HttpstatusMatch,
    HttpstatusRange,
    IpReputationServiceStatus,
    IpReputationTypeMapping,
    IpReputationTypeMatch,
    ImageCloudData,
    ImageEventMap,
    ImageParams,
    ImageUploadOpsStatus,
    JournalError,
    JournalInfo,
    L4RuleProtocolMatch,
    LicenseServiceUpdate,
    LinuxConfiguration,
    LocalInfo,
    LocationHdrMatch,
    ManagementNetworkConfig,
    MethodMatch,
    MetricsApiSrvDebugFilter,
    MetricsDataSeries,
    MetricsMgrDebugFilter,
    MgmtIpAccessControl,
    MicroServiceMatch,
    NtpConfiguration,
    NetworkFilter,
    NetworkSecurityPolicyActionRlParam,
    NsxtTier1SegmentAutomaticMode,
    NsxtTier1SegmentManualMode,
    OAuthSettings,
    OauthSubRequestLog,
    OpsInfo,
    PgDeploymentRule,
    PaaRequestLog,
    PackageDetails,
    ParamInfo,
    ParamsInUri,
    PathMatch,
    Permission,
    PlacementNetwork,
    PolicySpec,
    PoolAnalyticsPolicy,
    PortMatch,
    PortMatchGeneric,
    PortalConfiguration,
    Postsnapshot,
    PreChecksParams,
    Presnapshot,
    ProtocolMatch,
    QueryMatch,
    QuotaConfig,
    ReplicationPolicy,
    ReportParameter,
    ReportSection,
    RmModifyVnic,
    RoleFilter,
    RoutingService,
    RspContentRewriteRule,
    RuleInfo,
    SctpFastPathProfile,
    SctpProxyProfile,
    SeImageStatus,
    ShmSummary,
    SslCertificate,
    SslKeyEcParams,
    SslKeyMldsaParams,
    SslKeyRsaParams,
    SaasLicensingInfo,
    SeAgentProperties,
    SeBootupProperties,
    SeGroupOptions,
    SeGroupResumeOptions,
    SeGroupStatus,
    SeHmEventGslbPoolMemberDetails,
    SeMgrDebugFilter,
    SeRpcProxyDebugFilter,
    SeRuntimeProperties,
    SeUpgradeEvents,
    SearchReplacePair,
    SecureChannelConfiguration,
    SecureChannelMetadata,
    SensitiveLogProfile,
    ServerConfig,
    SiteInfo,
    SnmpConfiguration,
    SnmpTrapServer,
    SpGslbServiceInfo,
    StateCacheMgrDebugFilter,
    SubJob,
    Subnet,
    SubnetRuntime,
    SupportedMigrations,
    TcpOptions,
    TcpProxyProfile,
    TaskEventMap,
    TelemetryConfiguration,
    TenantConfiguration,
    TimeTrackerProperties,
    TokenRefillRate,
    TrustedHost,
    UdpFastPathProfile,
    UdpProxyProfile,
    UriParam,
    UpgradeEvent,
    UpgradeOpsState,
    UserAgentDbConfig,
    ViMgrIpSubnetRuntime,
    Vnic,
    VnicNetwork,
    VirtualServicePerformanceScoreData,
    VirtualServiceResource,
    VsDebugFilter,
    VsGs,
    WafConfig,
    WafDataFile,
    WafPsmLocation,
    WafRuleGroup
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Validate;
    use serde_json::json;
    use test_log::test;

    #[test]
    fn test_ip_addr_kind() {
        assert_eq!(Some("V4"), IpAddr::new("10.10.10.10").r#type.as_deref());
        assert_eq!(Some("V6"), IpAddr::new("fd00::1").r#type.as_deref());
        assert_eq!(Some("DNS"), IpAddr::new("ctrl.example.com").r#type.as_deref());
        assert!(IpAddr::new("ctrl.example.com").to_std().is_none());
    }

    #[test]
    fn test_ip_addr_type_field_name() {
        let value = serde_json::to_value(IpAddr::new("10.0.0.1")).unwrap();
        assert_eq!(json!({"addr": "10.0.0.1", "type": "V4"}), value);
    }

    #[test]
    fn test_required_fields_serialize_as_null() {
        let value = serde_json::to_value(TimeStamp::default()).unwrap();
        assert_eq!(json!({"secs": null, "usecs": null}), value);
    }

    #[test]
    fn test_nested_missing_paths() {
        let prefix = IpAddrPrefix {
            ip_addr: Some(IpAddr {
                addr: Some("10.0.0.0".to_string()),
                r#type: None,
            }),
            mask: None,
        };
        assert_eq!(
            vec!["ip_addr.type".to_string(), "mask".to_string()],
            prefix.missing_required()
        );
    }

    #[test]
    fn test_port_range() {
        let range = PortRange::new(8000, 8080);
        assert!(range.contains(8000));
        assert!(range.contains(8080));
        assert!(!range.contains(8081));
        assert!(!PortRange::default().contains(0));
    }

    #[test]
    fn test_passthrough_keeps_members() {
        let input = json!({"site_uuid": "site-1", "oper_status": {"state": "OPER_UP"}, "x": [1, 2]});
        let site: GslbSiteRuntime = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(Some(&json!("site-1")), site.get("site_uuid"));
        assert!(site.missing_required().is_empty());
        assert_eq!(input, serde_json::to_value(&site).unwrap());
    }
}
