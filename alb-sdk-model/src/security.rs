//! WAF, bot management, rate limiting, HSM and other security policies.

use alb_sdk_macro::{AviObject, Validate};
use serde::{Deserialize, Serialize};

use crate::analytics::RetentionAction;
use crate::application::{HdrMatch, IpAddrMatch, MatchTarget, StringMatch};
use crate::common::{
    AppLearningConfidenceOverride, AuthorizationAction, AuthorizationMatch, BotAllowList,
    BotClassMatcher, BotClassification, BotConfigIpLocation, BotConfigIpReputation,
    BotConfigUserAgent, BotTypeMatcher, ConfigPbAttributes, CsrfRule, GeoMatch, HeaderInfoInUri,
    HostHdrMatch, HsmAwsCloudHsm, HsmSafenetLuna, HsmThalesNetHsm, HsmThalesRfs,
    HttpCookiePersistenceKey, HttpLocalFile, HttpRedirectAction, HttpsecurityAction,
    IpReputationServiceStatus, IpReputationTypeMapping, IpReputationTypeMatch, KeyValue,
    MethodMatch, MicroServiceMatch, NetworkSecurityPolicyActionRlParam, OAuthSettings,
    ParamsInUri, PathMatch, PgDeploymentRule, PortMatch, PortMatchGeneric, RoleFilterMatchLabel,
    RuleInfo, SecureChannelMetadata, SslCertificate, SslKeyEcParams, SslKeyMldsaParams,
    SslKeyRsaParams, TokenRefillRate, TrustedHost, WafConfig, WafDataFile, WafPsmLocation,
    WafRuleGroup,
};
use crate::serde_util::null_as_default;

/// API rate limit profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct ApiRateLimitProfile {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Protobuf versioning for config pbs. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    /// Description for the Api Rate Limit Profile. Field introduced in 31.2.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Activate/Deactivate the Api Rate Limit Profile. Field introduced in 31.2.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Name of the Api Rate Limit Profile. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// List of the Rate Limiter configuration UUIDs. It is a reference to an object of type
    /// RateLimitConfiguration. Field introduced in 31.2.1. Minimum of 1 items required. Maximum of
    /// 100 items allowed. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub rate_limit_configuration_refs: Vec<String>,
    /// Tenant ref for the Api Rate Limit Profile. It is a reference to an object of type Tenant.
    /// Field introduced in 31.2.1. Allowed with any value in Enterprise, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// UUID of the Api Rate Limit Profile. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Authorization rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AuthorizationRule {
    /// Authorization action when rule is matched. Field introduced in 18.2.5. Allowed with any
    /// value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required, nested)]
    pub action: Option<AuthorizationAction>,
    /// Enable or disable the rule. Field introduced in 18.2.5. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub enable: Option<bool>,
    /// Index of the Authorization Policy rule. Field introduced in 18.2.5. Allowed with any value
    /// in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub index: Option<i32>,
    /// Authorization match criteria for the rule. Field introduced in 18.2.5. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required, nested)]
    pub r#match: Option<AuthorizationMatch>,
    /// Name of the rule. Field introduced in 18.2.5. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
}

/// Bot detection policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct BotDetectionPolicy {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Allow the user to skip BotManagement for selected requests. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub allow_list: Option<BotAllowList>,
    /// Human-readable description of this Bot Detection Policy. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The IP location configuration used in this policy. Field introduced in 21.1.1.
    ///
    /// Required.
    #[avi(required, nested)]
    pub ip_location_detector: Option<BotConfigIpLocation>,
    /// The IP reputation configuration used in this policy. Field introduced in 21.1.1.
    ///
    /// Required.
    #[avi(required, nested)]
    pub ip_reputation_detector: Option<BotConfigIpReputation>,
    /// The name of this Bot Detection Policy. Field introduced in 21.1.1.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// System-defined rules for classification. It is a reference to an object of type BotMapping.
    /// Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_bot_mapping_ref: Option<String>,
    /// The installation provides an updated ruleset for consolidating the results of different
    /// decider phases. It is a reference to an object of type BotConfigConsolidator. Field
    /// introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_consolidator_ref: Option<String>,
    /// The unique identifier of the tenant to which this policy belongs. It is a reference to an
    /// object of type Tenant. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// The User-Agent configuration used in this policy. Field introduced in 21.1.1.
    ///
    /// Required.
    #[avi(required, nested)]
    pub user_agent_detector: Option<BotConfigUserAgent>,
    /// User-defined rules for classification. These are applied before the system classification
    /// rules. If a rule matches, processing terminates and the system-defined rules will not run.
    /// It is a reference to an object of type BotMapping. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_bot_mapping_ref: Option<String>,
    /// The user-provided ruleset for consolidating the results of different decider phases. This
    /// runs before the system consolidator. If it successfully sets a consolidation, the system
    /// consolidator will not change it. It is a reference to an object of type
    /// BotConfigConsolidator. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_consolidator_ref: Option<String>,
    /// A unique identifier to this Bot Detection Policy. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Bot identification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct BotIdentification {
    /// The Bot Client Class of this identification. Enum options - UNDETERMINED_CLIENT,
    /// HUMAN_CLIENT, BOT_CLIENT. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// A free-form *string to identify the client. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// The Bot Client Type of this identification. Enum options - UNDETERMINED_CLIENT_TYPE,
    /// WEB_BROWSER, IN_APP_BROWSER, SEARCH_ENGINE, IMPERSONATOR, SPAM_SOURCE, WEB_ATTACKS, BOTNET,
    /// SCANNER, DENIAL_OF_SERVICE, CLOUD_SOURCE, SECURITY_SCANNER, SITE_MONITOR,
    /// GENERIC_APPLICATION. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}

/// Bot IP reputation type mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct BotIpReputationTypeMapping {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Map every IPReputationType to a bot type (can be unknown). Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub ip_reputation_mappings: Vec<IpReputationTypeMapping>,
    /// The name of this mapping. Field introduced in 21.1.1.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// The unique identifier of the tenant to which this mapping belongs. It is a reference to an
    /// object of type Tenant. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// A unique identifier of this mapping. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Bot mapping rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct BotMappingRule {
    /// How to match the BotClientClass. Field deprecated in 21.1.3. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub class_matcher: Option<BotClassMatcher>,
    /// The assigned classification for this client. Field introduced in 21.1.1.
    ///
    /// Required.
    #[avi(required, nested)]
    pub classification: Option<BotClassification>,
    /// The component for which this mapping is used. Enum options - BOT_DECIDER_CONSOLIDATION,
    /// BOT_DECIDER_USER_AGENT, BOT_DECIDER_IP_REPUTATION, BOT_DECIDER_IP_NETWORK_LOCATION. Field
    /// deprecated in 21.1.3. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_matcher: Option<String>,
    /// The list of bot identifier names and how they're matched. Field deprecated in 21.1.3. Field
    /// introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub identifier_matcher: Option<StringMatch>,
    /// Rules are processed in order of this index field. Field introduced in 21.1.1.
    ///
    /// Required.
    #[avi(required)]
    pub index: Option<i32>,
    /// How to match the request all the specified properties must be fulfilled. Field introduced in
    /// 21.1.3.
    ///
    /// Required.
    #[avi(required, nested)]
    pub r#match: Option<BotMappingRuleMatchTarget>,
    /// A name describing the rule in a short form. Field introduced in 21.1.1.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// How to match the BotClientType. Field deprecated in 21.1.3. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub type_matcher: Option<BotTypeMatcher>,
}

/// Bot mapping rule match target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct BotMappingRuleMatchTarget {
    /// How to match the BotClientClass. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub class_matcher: Option<BotClassMatcher>,
    /// Configure client ip addresses. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub client_ip: Option<IpAddrMatch>,
    /// The component for which this mapping is used. Enum options - BOT_DECIDER_CONSOLIDATION,
    /// BOT_DECIDER_USER_AGENT, BOT_DECIDER_IP_REPUTATION, BOT_DECIDER_IP_NETWORK_LOCATION. Field
    /// introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_matcher: Option<String>,
    /// Configure HTTP header(s). All configured headers must match. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub hdrs: Vec<HdrMatch>,
    /// Configure the host header. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub host_hdr: Option<HostHdrMatch>,
    /// The list of bot identifier names and how they're matched. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub identifier_matcher: Option<StringMatch>,
    /// Configure HTTP methods. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub method: Option<MethodMatch>,
    /// Configure request paths. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub path: Option<PathMatch>,
    /// How to match the BotClientType. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub type_matcher: Option<BotTypeMatcher>,
}

/// CSRF policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct CsrfPolicy {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Protobuf versioning for config pbs. Field introduced in 30.2.1. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    /// Name of the cookie to be used for CSRF token. Field introduced in 30.2.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_name: Option<String>,
    /// The file object that contains csrf javascript content. Must be of type 'CSRF'. It is a
    /// reference to an object of type FileObject. Field introduced in 31.1.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csrf_file_ref: Option<String>,
    /// Human-readable description of this CSRF Protection Policy. Field introduced in 30.2.1.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The name of this CSRF Protection Policy. Field introduced in 30.2.1. Allowed with any value
    /// in Enterprise, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// Rules to control which requests undergo CSRF Protection.If the client's request doesn't
    /// match with any rules MatchTarget, BYPASS_CSRF action is applied. Field introduced in 30.2.1.
    /// Minimum of 1 items required. Allowed with any value in Enterprise, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub rules: Vec<CsrfRule>,
    /// The unique identifier of the tenant to which this policy belongs. It is a reference to an
    /// object of type Tenant. Field introduced in 30.2.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// A CSRF token is rotated when this amount of time has passed. Even after that, tokens will be
    /// accepted until twice this amount of time has passed. Note, however, that other timeouts from
    /// the underlying session layer also affect how long a given token can be used. A token will be
    /// invalidated (rotated or deleted) after one of 'token_validity_time_min' (this value),
    /// 'session_establishment_timeout', 'session_idle_timeout', 'session_maximum_timeout' is
    /// reached, whichever occurs first. Allowed values are 10-1440. Special values are 0-
    /// unlimited. Field introduced in 30.2.1. Unit is MIN. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_validity_time_min: Option<u32>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// A unique identifier to this CSRF Protection Policy. Field introduced in 30.2.1. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// False positive result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct FalsePositiveResult {
    /// Whether this URI is always fail. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub always_fail: Option<bool>,
    /// This flag indicates whether this result is identifying an attack. Field introduced in
    /// 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attack: Option<bool>,
    /// Confidence on false positive detection. Allowed values are 0-100. Field introduced in
    /// 21.1.1. Unit is PERCENT.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    /// This flag indicates whether this result is identifying a false positive. Field introduced in
    /// 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub false_positive: Option<bool>,
    /// Header info if URI hit signature rule and match element is REQUEST_HEADERS. Field introduced
    /// in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub header_info: Option<HeaderInfoInUri>,
    /// HTTP method for URIs did false positive detection. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_method: Option<String>,
    /// This flag indicates that system is not confident about this result. Field introduced in
    /// 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_sure: Option<bool>,
    /// Params info if URI hit signature rule and match element is ARGS. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub params_info: Option<ParamsInUri>,
    /// Signature rule info hitted by URI. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub rule_info: Option<RuleInfo>,
    /// Whether this URI is sometimes fail. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sometimes_fail: Option<bool>,
    /// URIs did false positive detection. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

/// Hardware security module.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct HardwareSecurityModule {
    /// AWS CloudHSM specific configuration. Field introduced in 17.2.7. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub cloudhsm: Option<HsmAwsCloudHsm>,
    /// Thales netHSM specific configuration. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub nethsm: Vec<HsmThalesNetHsm>,
    /// Thales Remote File Server (RFS), used for the netHSMs, configuration. Allowed with any value
    /// in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub rfs: Option<HsmThalesRfs>,
    /// Thales Luna HSM/Gem specific configuration. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub sluna: Option<HsmSafenetLuna>,
    /// HSM type to use. Enum options - HSM_TYPE_THALES_NETHSM, HSM_TYPE_SAFENET_LUNA,
    /// HSM_TYPE_AWS_CLOUDHSM. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub r#type: Option<String>,
}

/// Hardware security module group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct HardwareSecurityModuleGroup {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// List of certificates present in the CA chain that were used to sign custom client
    /// certificate. Field introduced in 31.2.1. Allowed with any value in Enterprise, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub ca_certs: Vec<SslCertificate>,
    /// Protobuf versioning for config pbs. Field introduced in 21.1.1. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    /// Hardware Security Module configuration. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required, nested)]
    pub hsm: Option<HardwareSecurityModule>,
    /// List of labels to be used for granular RBAC. Field introduced in 20.1.5. Allowed with any
    /// value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub markers: Vec<RoleFilterMatchLabel>,
    /// Name of the HSM Group configuration object. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// It is a reference to an object of type Tenant. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// UUID of the HSM Group configuration object. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// HSM safenet luna server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct HsmSafenetLunaServer {
    /// Field introduced in 16.5.2,17.2.3. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub index: Option<u32>,
    /// Password of the partition assigned to this client. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition_passwd: Option<String>,
    /// Serial number of the partition assigned to this client. Field introduced in 16.5.2,17.2.3.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition_serial_number: Option<String>,
    /// IP address of the Thales Luna HSM device. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub remote_ip: Option<String>,
    /// CA certificate of the server. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub server_cert: Option<String>,
}

/// Httpsecurity rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct HttpsecurityRule {
    /// Action to be performed upon successful matching. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub action: Option<HttpsecurityAction>,
    /// Enable or disable the rule. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub enable: Option<bool>,
    /// Index of the rule. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with
    /// Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub index: Option<i32>,
    /// Log HTTP request upon rule match. Allowed with any value in Enterprise, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log: Option<bool>,
    /// Add match criteria to the rule. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub r#match: Option<MatchTarget>,
    /// Name of the rule. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with
    /// Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
}

/// IP addr limits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct IpAddrLimits {
    /// Number of IP address groups for match criteria. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address_group_per_match_criteria: Option<i32>,
    /// Number of IP address prefixes for match criteria. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address_prefix_per_match_criteria: Option<i32>,
    /// Number of IP address ranges for match criteria. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address_range_per_match_criteria: Option<i32>,
    /// Number of IP addresses for match criteria. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_addresses_per_match_criteria: Option<i32>,
}

/// IP reputation config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct IpReputationConfig {
    /// Enable IPv4 Reputation. Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_ipv4_reputation: Option<bool>,
    /// Enable IPv6 Reputation. Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_ipv6_reputation: Option<bool>,
    /// IP reputation db file object expiry duration in days. Allowed values are 1-7. Field
    /// introduced in 20.1.1. Unit is DAYS. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_reputation_file_object_expiry_duration: Option<u32>,
    /// IP reputation db sync interval in minutes. Allowed values are 30-1440. Field introduced in
    /// 20.1.1. Unit is MIN. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition. Allowed in Essentials (Allowed values- 60), Basic (Allowed values- 60) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_reputation_sync_interval: Option<u32>,
}

/// IP reputation DB.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct IpReputationDb {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// IP reputation DB base file. It is a reference to an object of type FileObject. Field
    /// introduced in 20.1.1. Maximum of 1 items allowed. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub base_file_refs: Vec<String>,
    /// IP reputation DB base file for IPv6. It is a reference to an object of type FileObject.
    /// Field introduced in 31.1.1. Maximum of 1 items allowed. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub base_file_v6_refs: Vec<String>,
    /// Protobuf versioning for config pbs. Field introduced in 21.1.1. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    /// Description. Field introduced in 20.1.1. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// IP reputation DB incremental update files. It is a reference to an object of type
    /// FileObject. Field introduced in 20.1.1. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub incremental_file_refs: Vec<String>,
    /// IP reputation DB incremental update files for IPv6. It is a reference to an object of type
    /// FileObject. Field introduced in 31.1.1. Allowed with any value in Enterprise, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub incremental_file_v6_refs: Vec<String>,
    /// List of labels to be used for granular RBAC. Field introduced in 20.1.5. Allowed with any
    /// value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub markers: Vec<RoleFilterMatchLabel>,
    /// IP reputation DB name. Field introduced in 20.1.1. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// If this object is managed by the IP reputation service, this field contain the status of
    /// this syncronization. Field introduced in 20.1.1. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub service_status: Option<IpReputationServiceStatus>,
    /// Tenant that this object belongs to. It is a reference to an object of type Tenant. Field
    /// introduced in 20.1.1. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// UUID of this object. Field introduced in 20.1.1. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// A version number for IPv6 files for the object. Field introduced in 31.1.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v6_version: Option<String>,
    /// Organization providing IP reputation data. Enum options - IP_REPUTATION_VENDOR_WEBROOT.
    /// Field introduced in 20.1.1. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub vendor: Option<String>,
    /// A version number for this database object. This is informal for the consumer of this API
    /// only, a tool which manages this object can store version information here. Field introduced
    /// in 20.1.1. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// JSON parsing limits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct JsonParsingLimits {
    /// Maximum nesting level of a json document. 0 means no restriction. Allowed values are 0-256.
    /// Special values are 0- Do not apply this restriction.. Field introduced in 31.2.1. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_nesting_level: Option<u32>,
    /// Maximum number of elements in an array or object. 0 means no restriction. Allowed values are
    /// 0-1048576. Special values are 0- Do not apply this restriction.. Field introduced in 31.2.1.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_subelements: Option<u32>,
    /// Maximum number of all elements in the whole document. 0 means no restriction. Allowed values
    /// are 0-1048576. Special values are 0- Do not apply this restriction.. Field introduced in
    /// 31.2.1. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_total_elements: Option<u32>,
    /// Maximum length of a single value (string). 0 means no restriction. Allowed values are
    /// 0-1048576. Special values are 0- Do not apply this restriction.. Field introduced in 31.2.1.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value_length: Option<u32>,
}

/// Ldap user bind settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LdapUserBindSettings {
    /// LDAP user DN pattern is used to bind LDAP user after replacing the user token with real
    /// username. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub dn_template: Option<String>,
    /// LDAP token is replaced with real user name in the user DN pattern. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub token: Option<String>,
    /// LDAP user attributes to fetch on a successful user bind. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub user_attributes: Vec<String>,
    /// LDAP user id attribute is the login attribute that uniquely identifies a single user record.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub user_id_attribute: Option<String>,
}

/// Network security match target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct NetworkSecurityMatchTarget {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub client_ip: Option<IpAddrMatch>,
    /// Matches the source port of incoming packets in the client side traffic. Field introduced in
    /// 20.1.3. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub client_port: Option<PortMatchGeneric>,
    /// Matches the geo information of incoming packets in the client side traffic. Field introduced
    /// in 21.1.1. Maximum of 1 items allowed. Allowed with any value in Enterprise, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub geo_matches: Vec<GeoMatch>,
    /// Field introduced in 20.1.1. Allowed with any value in Enterprise, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub ip_reputation_type: Option<IpReputationTypeMatch>,
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub microservice: Option<MicroServiceMatch>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub vs_port: Option<PortMatch>,
}

/// Network security policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct NetworkSecurityPolicy {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Checksum of cloud configuration for Network Sec Policy. Internally set by cloud connector.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_config_cksum: Option<String>,
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
    /// Geo database. It is a reference to an object of type GeoDB. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_db_ref: Option<String>,
    /// Network Security Policy is created and modified by internal modules only. Should not be
    /// modified by users. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal: Option<bool>,
    /// IP reputation database. It is a reference to an object of type IPReputationDB. Field
    /// introduced in 20.1.1. Allowed in Basic edition, Essentials edition, Enterprise edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_reputation_db_ref: Option<String>,
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
    /// Name of the object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Placeholder for description of property rules of obj type NetworkSecurityPolicy field type
    /// str type object
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub rules: Vec<NetworkSecurityRule>,
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

/// Network security rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct NetworkSecurityRule {
    /// Enum options - NETWORK_SECURITY_POLICY_ACTION_TYPE_ALLOW,
    /// NETWORK_SECURITY_POLICY_ACTION_TYPE_DENY, NETWORK_SECURITY_POLICY_ACTION_TYPE_RATE_LIMIT.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition. Allowed in
    /// Essentials (Allowed values- NETWORK_SECURITY_POLICY_ACTION_TYPE_DENY), Basic (Allowed
    /// values- NETWORK_SECURITY_POLICY_ACTION_TYPE_DENY) edition.
    ///
    /// Required.
    #[avi(required)]
    pub action: Option<String>,
    /// Time in minutes after which rule will be deleted. Allowed values are 1-4294967295. Special
    /// values are 0- blocked for ever. Unit is MIN. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition. Allowed in Essentials (Allowed values- 0), Basic
    /// (Allowed values- 0) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Creator name. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub enable: Option<bool>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub index: Option<u32>,
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition. Allowed in
    /// Essentials (Allowed values- false), Basic (Allowed values- false) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log: Option<bool>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required, nested)]
    pub r#match: Option<NetworkSecurityMatchTarget>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub rl_param: Option<NetworkSecurityPolicyActionRlParam>,
}

/// O auth profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct OAuthProfile {
    /// URL of authorization server. Field introduced in 21.1.3.
    ///
    /// Required.
    #[avi(required)]
    pub authorization_endpoint: Option<String>,
    /// URL of token introspection server. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub introspection_endpoint: Option<String>,
    /// Uniquely identifiable name of the Token Issuer. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    /// Lifetime of the cached JWKS keys. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jwks_timeout: Option<i32>,
    /// JWKS URL of the endpoint that hosts the public keys that can be used to verify any JWT
    /// issued by the authorization server. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jwks_uri: Option<String>,
    /// Buffering size for the responses from the OAUTH enpoints. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth_resp_buffer_sz: Option<i32>,
    /// Pool object to interface with Authorization Server endpoints. It is a reference to an object
    /// of type Pool. Field introduced in 21.1.3.
    ///
    /// Required.
    #[avi(required)]
    pub pool_ref: Option<String>,
    /// URL of token exchange server. Field introduced in 21.1.3.
    ///
    /// Required.
    #[avi(required)]
    pub token_endpoint: Option<String>,
    /// URL of the Userinfo Endpoint. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub userinfo_endpoint: Option<String>,
}

/// O auth VS config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct OAuthVsConfig {
    /// HTTP cookie name for authorized session. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_name: Option<String>,
    /// HTTP cookie timeout for authorized session. Allowed values are 1-1440. Field introduced in
    /// 21.1.3. Unit is MIN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_timeout: Option<i32>,
    /// Key to generate the cookie. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub key: Vec<HttpCookiePersistenceKey>,
    /// Application and IDP settings for OAuth/OIDC. Field introduced in 21.1.3. Maximum of 1 items
    /// allowed.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub oauth_settings: Vec<OAuthSettings>,
    /// Redirect URI specified in the request to Authorization Server. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,
}

/// Object rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ObjectRule {
    /// Action to trigger when policy conditions are met. Field introduced in 31.1.1. Allowed with
    /// any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    ///
    /// Read only. Required.
    #[avi(required, nested)]
    pub action: Option<RetentionAction>,
    /// Maximum number of objects allowed in the system. When the limit exceeds, action is invoked
    /// for the oldest objects. Allowed values are 1-100. Field introduced in 31.1.1. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    /// Name of the object model. Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
}

/// PG deployment rule result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PgDeploymentRuleResult {
    /// Metric value that is used as the pass fail. If it is not provided then it will simply
    /// compare it with current pool vs new pool. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_value: Option<f64>,
    /// Whether rule passed or failed. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<bool>,
    /// Rule used for evaluation. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required, nested)]
    pub rule: Option<PgDeploymentRule>,
}

/// Positive security params.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PositiveSecurityParams {
    /// Configure thresholds for the confidence labels defined by AppLearningConfidenceLabel. Field
    /// introduced in 31.2.1. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub confidence_override: Option<AppLearningConfidenceOverride>,
    /// Maximum number of parameters per URI programmed for an application. Allowed values are
    /// 10-1000. Field introduced in 31.2.1. Allowed with any value in Enterprise, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_params: Option<u32>,
    /// Maximum number of URIs programmed for an application. Allowed values are 10-10000. Field
    /// introduced in 31.2.1. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_uris: Option<u32>,
    /// Minimum confidence label required for positive security rule updates. Enum options -
    /// CONFIDENCE_VERY_HIGH, CONFIDENCE_HIGH, CONFIDENCE_PROBABLE, CONFIDENCE_LOW, CONFIDENCE_NONE.
    /// Field introduced in 31.2.1. Allowed with any value in Enterprise, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_confidence: Option<String>,
    /// Minimum number of occurances required for a Param to qualify for programming into a PSM
    /// rule. Field introduced in 31.2.1. Allowed with any value in Enterprise, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_hits_to_program: Option<u64>,
}

/// Positive security policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct PositiveSecurityPolicy {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Protobuf versioning for config pbs. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    /// Details of the Positive Security Configuration. Field introduced in 31.2.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Enable Positive Security rule generation using the application learning data Rules will be
    /// programmed in a dedicated learning group. Field introduced in 31.2.1. Allowed with any value
    /// in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_positive_security_rule_updates: Option<bool>,
    /// Enable dynamic regex generation for positive security rules. This is an experimental feature
    /// and shouldn't be used in production. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_regex_programming: Option<bool>,
    /// The name of the PositiveSecurity Configuration. Field introduced in 31.2.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Parameters for generating positive security rules. Field introduced in 31.2.1. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub positive_security_params: Option<PositiveSecurityParams>,
    /// Details of the tenant for positive security policy. It is a reference to an object of type
    /// Tenant. Field introduced in 31.2.1. Allowed with any value in Enterprise, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// UUID of the Positive Security Configuration. Field introduced in 31.2.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Rate limit configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct RateLimitConfiguration {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// The maximum request per second(RPS) user intends to support for this category.This is not
    /// guaranteed as this will be the minimum of the RPS supported by the resources in the category
    /// and this value.If user doesn't provide then it will be minimum value of the resources in
    /// this category. Allowed values are 1-1000. Field introduced in 31.2.1. Allowed with any value
    /// in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub burst: Option<u32>,
    /// Protobuf versioning for config pbs. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    /// Description for the Rate Limit Configuration. Field introduced in 31.2.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// List of HTTP method(s) of the resources that need to be rate limited. Enum options -
    /// HTTP_METHOD_GET, HTTP_METHOD_HEAD, HTTP_METHOD_PUT, HTTP_METHOD_DELETE, HTTP_METHOD_POST,
    /// HTTP_METHOD_OPTIONS, HTTP_METHOD_TRACE, HTTP_METHOD_CONNECT, HTTP_METHOD_PATCH,
    /// HTTP_METHOD_PROPFIND, HTTP_METHOD_PROPPATCH, HTTP_METHOD_MKCOL, HTTP_METHOD_COPY,
    /// HTTP_METHOD_MOVE, HTTP_METHOD_LOCK, HTTP_METHOD_UNLOCK. Field introduced in 31.2.1. Minimum
    /// of 1 items required. Maximum of 5 items allowed. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub http_methods: Vec<String>,
    /// Name of the Rate Limit Configuration(unique). Field introduced in 31.2.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// RateLimitResource which needs to be rate limited. Enum options - RATE_LIMIT_VIRTUALSERVICE,
    /// RATE_LIMIT_POOL, RATE_LIMIT_LOGIN, RATE_LIMIT_AUTHTOKEN, RATE_LIMIT_HEALTHMONITOR. Field
    /// introduced in 31.2.1. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub resource: Option<String>,
    /// Tenant ref for the auth Rate Limit Configuration. It is a reference to an object of type
    /// Tenant. Field introduced in 31.2.1. Allowed with any value in Enterprise, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// Token Refill Rate. Field introduced in 31.2.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required, nested)]
    pub token_refill_rate: Option<TokenRefillRate>,
    /// Type of the Rate Limiter, for now we only support api categorization based. Enum options -
    /// RATE_LIMITER_API_CATEGORY. Field introduced in 31.2.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// UUID of the Rate Limit Configuration. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Rate limiter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RateLimiter {
    /// Maximum number of connections, requests or packets to be let through instantaneously. If
    /// this is less than count, it will have no effect. Allowed values are 0-1000000000. Field
    /// introduced in 18.2.9. Allowed with any value in Enterprise, Essentials, Enterprise with
    /// Cloud Services edition. Allowed in Basic (Allowed values- 0) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub burst_sz: Option<u32>,
    /// Maximum number of connections, requests or packets permitted each period. Allowed values are
    /// 1-1000000000. Field introduced in 18.2.9. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub count: Option<u32>,
    /// Identifier for Rate Limit. Constructed according to context. Field introduced in 18.2.9.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Time value in seconds to enforce rate count. Allowed values are 1-1000000000. Field
    /// introduced in 18.2.9. Unit is SEC. Allowed with any value in Enterprise, Essentials,
    /// Enterprise with Cloud Services edition. Allowed in Basic (Allowed values- 1) edition.
    ///
    /// Required.
    #[avi(required)]
    pub period: Option<u32>,
}

/// Rate limiter action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RateLimiterAction {
    /// File to be used for HTTP Local response rate limit action.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub file: Option<HttpLocalFile>,
    /// Parameters for HTTP Redirect rate limit action.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub redirect: Option<HttpRedirectAction>,
    /// HTTP status code for Local Response rate limit action. Enum options -
    /// HTTP_LOCAL_RESPONSE_STATUS_CODE_200, HTTP_LOCAL_RESPONSE_STATUS_CODE_204,
    /// HTTP_LOCAL_RESPONSE_STATUS_CODE_403, HTTP_LOCAL_RESPONSE_STATUS_CODE_404,
    /// HTTP_LOCAL_RESPONSE_STATUS_CODE_429, HTTP_LOCAL_RESPONSE_STATUS_CODE_501. Allowed in
    /// Basic(Allowed values- HTTP_LOCAL_RESPONSE_STATUS_CODE_429) edition, Enterprise edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<String>,
    /// Type of action to be enforced upon hitting the rate limit. Enum options - RL_ACTION_NONE,
    /// RL_ACTION_DROP_CONN, RL_ACTION_RESET_CONN, RL_ACTION_CLOSE_CONN, RL_ACTION_LOCAL_RSP,
    /// RL_ACTION_REDIRECT. Allowed in Basic(Allowed values- RL_ACTION_NONE,RL_ACTION_DROP_CONN)
    /// edition, Enterprise edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}

/// Rate profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RateProfile {
    /// Action to perform upon rate limiting.
    ///
    /// Required.
    #[avi(required, nested)]
    pub action: Option<RateLimiterAction>,
    /// Maximum number of connections or requests or packets to be let through instantaneously.
    /// Allowed values are 10-2500. Special values are 0- automatic. Field deprecated in 18.2.9.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub burst_sz: Option<i32>,
    /// Maximum number of connections or requests or packets. Allowed values are 1-1000000000.
    /// Special values are 0- unlimited. Field deprecated in 18.2.9.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
    /// Explicitly tracks an attacker across rate periods. Allowed in Basic(Allowed values- false)
    /// edition, Enterprise edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explicit_tracking: Option<bool>,
    /// Enable fine granularity. Allowed in Basic(Allowed values- false) edition, Enterprise
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fine_grain: Option<bool>,
    /// HTTP cookie name. Field introduced in 17.1.1. Allowed in Basic edition, Enterprise edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_cookie: Option<String>,
    /// HTTP header name. Field introduced in 17.1.1. Allowed in Basic edition, Enterprise edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_header: Option<String>,
    /// Time value in seconds to enforce rate count. Allowed values are 1-300. Field deprecated in
    /// 18.2.9. Unit is SEC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<i32>,
    /// The rate limiter configuration for this rate profile. Field introduced in 18.2.9.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub rate_limiter: Option<RateLimiter>,
}

/// Request limiter event info.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RequestLimiterEventInfo {
    /// Ip of the client from which request has been received. Field introduced in 31.1.1. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_ip: Option<String>,
    /// Http error response code for the throttled request. Allowed values are 200-504. Field
    /// introduced in 31.1.1. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_status_code: Option<u32>,
    /// Error/Warning/alert message describing the event. Field introduced in 31.1.1. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub message: Option<String>,
    /// Http request method. Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub method: Option<String>,
    /// Whether the request has been processed(true) or not(false). Field introduced in 31.1.1.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed: Option<bool>,
    /// Http request url. Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub url: Option<String>,
    /// User agent of the client from which request has been received. Field introduced in 31.1.1.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// Secure channel available local ips.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct SecureChannelAvailableLocalIps {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Number of end.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<i32>,
    /// Field deprecated in 21.1.1.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub free_controller_ips: Vec<String>,
    /// Number of free_ips.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub free_ips: Vec<i64>,
    /// Name of the object.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// Number of start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<i32>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Unique object identifier of the object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Secure channel mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct SecureChannelMapping {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Auth_token used for SE authorization. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
    /// IP of SE.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// Whether this entry used for controller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_controller: Option<bool>,
    /// Local ip on controller side reserved for SE.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_ip: Option<String>,
    /// Whether this entry is marked for delete (first step of deletion).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marked_for_delete: Option<bool>,
    /// Metadata associated with auth_token. Field introduced in 20.1.3.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub metadata: Vec<SecureChannelMetadata>,
    /// Uuid of SE.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// Public key of SE.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pub_key: Option<String>,
    /// Public key pem of SE.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pub_key_pem: Option<String>,
    /// Authorization status of current secure channel. Enum options - SECURE_CHANNEL_NONE,
    /// SECURE_CHANNEL_CONNECTED, SECURE_CHANNEL_AUTH_SSH_SUCCESS, SECURE_CHANNEL_AUTH_SSH_FAILED,
    /// SECURE_CHANNEL_AUTH_TOKEN_SUCCESS, SECURE_CHANNEL_AUTH_TOKEN_FAILED,
    /// SECURE_CHANNEL_AUTH_ERRORS, SECURE_CHANNEL_AUTH_IGNORED.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Uuid of SE.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Secure channel token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct SecureChannelToken {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Expiry time for auth_token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_time: Option<f64>,
    /// Whether this auth_token is used by some node(SE/controller). Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_use: Option<bool>,
    /// Metadata associated with auth_token.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub metadata: Vec<SecureChannelMetadata>,
    /// Auth_token used for SE/controller authorization.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// Deprecated Uuid of SE or controller who is using this auth_token. Field deprecated in
    /// 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_uuid: Option<String>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Auth_token used for SE/controller authorization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// SSL certificate description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SslCertificateDescription {
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distinguished_name: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_unit: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// SSL key params.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SslKeyParams {
    /// Enum options - SSL_KEY_ALGORITHM_RSA, SSL_KEY_ALGORITHM_EC, SSL_KEY_ALGORITHM_MLDSA. Allowed
    /// with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub algorithm: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub ec_params: Option<SslKeyEcParams>,
    /// Mldsa keys. Field introduced in 31.2.1. Allowed with any value in Enterprise, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub mldsa_params: Option<SslKeyMldsaParams>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub rsa_params: Option<SslKeyRsaParams>,
}

/// Trusted host profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct TrustedHostProfile {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Protobuf versioning for config pbs. Field introduced in 31.1.1. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    /// List of Host IP(v4/v6) addresses or FQDNs. Field introduced in 31.1.1. Minimum of 1 items
    /// required. Maximum of 20 items allowed. Allowed with any value in Enterprise, Enterprise with
    /// Cloud Services edition.
    ///
    /// Required.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(required, nested)]
    pub hosts: Vec<TrustedHost>,
    /// TrustedHostProfile name. Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// Tenant ref for trusted host profile. It is a reference to an object of type Tenant. Field
    /// introduced in 31.1.1. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// TrustedHostProfile UUID. Field introduced in 31.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// User agent cache config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct UserAgentCacheConfig {
    /// How many unknown User-Agents to batch up before querying Controller - unless max_wait_time
    /// is reached first. Allowed values are 1-500. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<i32>,
    /// The number of User-Agent entries to cache on the Controller. Allowed values are
    /// 500-10000000. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller_cache_size: Option<i32>,
    /// How often at most to query controller for a given User-Agent. Allowed values are 2-100.
    /// Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_upstream_queries: Option<i32>,
    /// The time interval in seconds after which to make a request to the Controller, even if the
    /// 'batch_size' hasn't been reached yet. Allowed values are 20-100000. Field introduced in
    /// 21.1.1. Unit is SEC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_wait_time: Option<i32>,
    /// How many BotUACacheResult elements to include in an upstream update message. Allowed values
    /// are 1-10000. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_entries_upstream_update: Option<i32>,
    /// How much space to reserve in percent for known bad bots. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_reserved_for_bad_bots: Option<i32>,
    /// How much space to reserve in percent for browsers. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_reserved_for_browsers: Option<i32>,
    /// How much space to reserve in percent for known good bots. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_reserved_for_good_bots: Option<i32>,
    /// How much space to reserve in percent for outstanding upstream requests. Field introduced in
    /// 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_reserved_for_outstanding: Option<i32>,
    /// The number of User-Agent entries to cache on each Service Engine. Allowed values are
    /// 500-10000000. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_cache_size: Option<i32>,
    /// How often in seconds to send updates about User-Agent cache entries to the next upstream
    /// cache. Field introduced in 21.1.1. Unit is SEC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_update_interval: Option<i32>,
}

/// Waf CRS.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct WafCrs {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Protobuf versioning for config pbs. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    /// A short description of this ruleset. Field introduced in 18.1.1.
    ///
    /// Required.
    #[avi(required)]
    pub description: Option<String>,
    /// WAF Rules are sorted in groups based on their characterization. Field introduced in 18.1.1.
    /// Maximum of 64 items allowed.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub groups: Vec<WafRuleGroup>,
    /// Integrity protection value. Field introduced in 18.2.1.
    ///
    /// Required.
    #[avi(required)]
    pub integrity: Option<String>,
    /// List of labels to be used for granular RBAC. Field introduced in 20.1.6. Allowed in Basic
    /// edition, Essentials edition, Enterprise edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub markers: Vec<RoleFilterMatchLabel>,
    /// The name of this ruleset object. Field introduced in 18.2.1.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// The release date of this version in RFC 3339 / ISO 8601 format. Field introduced in 18.1.1.
    ///
    /// Required.
    #[avi(required)]
    pub release_date: Option<String>,
    /// Tenant that this object belongs to. It is a reference to an object of type Tenant. Field
    /// introduced in 18.2.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Field introduced in 18.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// The version of this ruleset object. Field introduced in 18.1.1.
    ///
    /// Required.
    #[avi(required)]
    pub version: Option<String>,
}

/// Waf crs config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct WafCrsConfig {
    /// Enable to automatically download new WAF signatures/CRS version to the Controller. Field
    /// introduced in 21.1.1. Allowed in Basic(Allowed values- false) edition, Essentials(Allowed
    /// values- false) edition, Enterprise(Allowed values- false) edition, Enterprise edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_auto_download_waf_signatures: Option<bool>,
    /// Enable event notifications when new WAF signatures/CRS versions are available. Field
    /// introduced in 21.1.1. Allowed in Basic(Allowed values- false) edition, Essentials(Allowed
    /// values- false) edition, Enterprise edition. Special default for Basic edition is false,
    /// Essentials edition is false, Enterprise is True.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_waf_signatures_notifications: Option<bool>,
}

/// WAF limits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct WafLimits {
    /// Number of WAF allowed Content Types. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_allowed_content_types: Option<i32>,
    /// Number of allowed request content type character sets in WAF. Field introduced in 22.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_allowed_request_content_type_charsets: Option<i32>,
    /// Number of rules used in WAF allowlist policy. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_allowlist_policy_rules: Option<i32>,
    /// Number of applications for which we use rules from sig provider. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_applications: Option<i32>,
    /// Number of datafiles used in WAF. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_data_files: Option<i32>,
    /// Number of pre, post CRS groups. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_pre_post_crs_groups: Option<i32>,
    /// Number of total PSM groups in WAF. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_psm_groups: Option<i32>,
    /// Number of match elements used in WAF PSM. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_psm_match_elements: Option<i32>,
    /// Number of match rules per location. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_psm_match_rules_per_loc: Option<i32>,
    /// Number of locations used in WAF PSM. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_psm_total_locations: Option<i32>,
    /// Number of restricted extensions in WAF. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_restricted_extensions: Option<i32>,
    /// Number of restricted HTTP headers in WAF. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_restricted_headers: Option<i32>,
    /// Number of tags for waf rule . Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_rule_tags: Option<i32>,
    /// Number of rules as per modsec language. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_rules_per_rulegroup: Option<i32>,
    /// Number of restricted static extensions in WAF. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_static_extensions: Option<i32>,
}

/// Waf match element sub parser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct WafMatchElementSubParser {
    /// Determine the order of the rules. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub index: Option<u32>,
    /// Case sensitivity to use for the matching. Enum options - SENSITIVE, INSENSITIVE. Field
    /// introduced in 31.2.1. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_case: Option<String>,
    /// The match element for which a subparser can be specified. Allowed values are of the form
    /// 'ARGS name' where name can be any *string or a regular expression. Field introduced in
    /// 31.2.1. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub match_element: Option<String>,
    /// String Operation to use for matching the match element name. Allowed values are EQUALS and
    /// REGEX_MATCH. Enum options - BEGINS_WITH, DOES_NOT_BEGIN_WITH, CONTAINS, DOES_NOT_CONTAIN,
    /// ENDS_WITH, DOES_NOT_END_WITH, EQUALS, DOES_NOT_EQUAL, REGEX_MATCH, REGEX_DOES_NOT_MATCH.
    /// Field introduced in 31.2.1. Allowed with any value in Enterprise, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_op: Option<String>,
    /// Select the parser for this element. Allowed values are JSON, XML and AUTO_DETECT. Enum
    /// options - WAF_REQUEST_PARSER_URLENCODED, WAF_REQUEST_PARSER_MULTIPART,
    /// WAF_REQUEST_PARSER_JSON, WAF_REQUEST_PARSER_XML, WAF_REQUEST_PARSER_HANDLE_AS_STRING,
    /// WAF_REQUEST_PARSER_DO_NOT_PARSE, WAF_REQUEST_PARSER_AUTO_DETECT. Field introduced in 31.2.1.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_parser: Option<String>,
}

/// Waf policy PSM group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct WafPolicyPsmGroup {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// A list of all match element collections which are completely described in the PSM Group.
    /// Every input value which matches one of the elements in this list but is not handled by a WAF
    /// PSM rule, will run the match_element miss_action. Allowed values are WAF_VARIABLE_ARGS. Enum
    /// options - WAF_VARIABLE_ARGS, WAF_VARIABLE_ARGS_GET, WAF_VARIABLE_ARGS_POST,
    /// WAF_VARIABLE_ARGS_NAMES, WAF_VARIABLE_REQUEST_COOKIES, WAF_VARIABLE_QUERY_STRING,
    /// WAF_VARIABLE_REQUEST_BASENAME, WAF_VARIABLE_REQUEST_URI, WAF_VARIABLE_PATH_INFO,
    /// WAF_VARIABLE_REQUEST_HEADERS. Field introduced in 31.2.1. Maximum of 1 items allowed.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub completely_described_match_elements: Vec<String>,
    /// Protobuf versioning for config pbs. Field introduced in 21.1.1. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    /// Free-text comment about this group. Field introduced in 18.2.3. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Enable or disable this WAF rule group. Field introduced in 18.2.3. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
    /// If a rule in this group matches the match_value pattern, this action will be executed.
    /// Allowed actions are WAF_ACTION_NO_OP and WAF_ACTION_ALLOW_PARAMETER. Enum options -
    /// WAF_ACTION_NO_OP, WAF_ACTION_BLOCK, WAF_ACTION_ALLOW_PARAMETER. Field introduced in 18.2.3.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hit_action: Option<String>,
    /// This field indicates that this group is used for learning. Field introduced in 18.2.3.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_learning_group: Option<bool>,
    /// If there is no location matching the request, this action will be executed. Allowed actions
    /// are WAF_ACTION_NO_OP and WAF_ACTION_BLOCK. Enum options - WAF_ACTION_NO_OP,
    /// WAF_ACTION_BLOCK, WAF_ACTION_ALLOW_PARAMETER. Field introduced in 31.2.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_match_miss_action: Option<String>,
    /// Positive Security Model locations. These are used to partition the application name space.
    /// Field introduced in 18.2.3. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub locations: Vec<WafPsmLocation>,
    /// List of labels to be used for granular RBAC. Field introduced in 20.1.5. Allowed with any
    /// value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub markers: Vec<RoleFilterMatchLabel>,
    /// If a rule in this group does not match the match_value pattern, this action will be
    /// executed. Allowed actions are WAF_ACTION_NO_OP and WAF_ACTION_BLOCK. Enum options -
    /// WAF_ACTION_NO_OP, WAF_ACTION_BLOCK, WAF_ACTION_ALLOW_PARAMETER. Field introduced in 18.2.3.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub miss_action: Option<String>,
    /// User defined name of the group. Field introduced in 18.2.3. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// Tenant that this object belongs to. It is a reference to an object of type Tenant. Field
    /// introduced in 18.2.3. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// UUID of this object. Field introduced in 18.2.3. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Waf profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct WafProfile {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Config params for WAF. Field introduced in 17.2.1.
    ///
    /// Required.
    #[avi(required, nested)]
    pub config: Option<WafConfig>,
    /// Protobuf versioning for config pbs. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    /// Field introduced in 17.2.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// List of Data Files Used for WAF Rules. Field introduced in 17.2.1.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub files: Vec<WafDataFile>,
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
    /// Field introduced in 17.2.1.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// It is a reference to an object of type Tenant. Field introduced in 17.2.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Field introduced in 17.2.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}
