//! Application, network and HTTP profiles together with their match targets.

use alb_sdk_macro::{AviObject, Validate};
use serde::{Deserialize, Serialize};

use crate::common::{
    ApplicationSamplingConfig, BotDetectionMatch, ClientLogConfiguration,
    ClientLogStreamingConfig, ConfigPbAttributes, CookieMatch, DnsClientIpMatch,
    DnsClientPortMatch, DnsGeoLocationMatch, DnsQueryNameMatch, DnsQueryTypeMatch,
    DnsTransportProtocolMatch, DsrProfile, FtpProfile, GeoMatch, HostHdrMatch, HttpHdrAction,
    HttpRequestPolicy, HttpResponsePolicy, HttpsecurityPolicy, HttpstatusMatch, HttpstatusRange,
    IpAddr, IpAddrPrefix, IpAddrRange, IpReputationTypeMatch, KeyValue, LocationHdrMatch,
    MethodMatch, ParamInfo, PathMatch, PortMatch, ProtocolMatch, QueryMatch,
    RoleFilterMatchLabel, RspContentRewriteRule, SctpFastPathProfile, SctpProxyProfile,
    SearchReplacePair, SensitiveLogProfile, TcpOptions, TcpProxyProfile, TimeTrackerProperties,
    UdpFastPathProfile, UdpProxyProfile, UriParam,
};
use crate::serde_util::null_as_default;

/// Analytics profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct AnalyticsProfile {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// If a client receives an HTTP response in less than the Satisfactory Latency Threshold, the
    /// request is considered Satisfied. It is considered Tolerated if it is not Satisfied and less
    /// than Tolerated Latency Factor multiplied by the Satisfactory Latency Threshold. Greater than
    /// this number and the client's request is considered Frustrated. Allowed values are 1-30000.
    /// Unit is MILLISECONDS. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition. Allowed in Essentials (Allowed values- 500), Basic (Allowed values- 500) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apdex_response_threshold: Option<u32>,
    /// Client tolerated response latency factor. Client must receive a response within this factor
    /// times the satisfactory threshold (apdex_response_threshold) to be considered tolerated.
    /// Allowed values are 1-1000. Allowed with any value in Enterprise, Enterprise with Cloud
    /// Services edition. Allowed in Essentials (Allowed values- 4), Basic (Allowed values- 4)
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apdex_response_tolerated_factor: Option<f64>,
    /// Satisfactory client to Avi Round Trip Time(RTT). Allowed values are 1-2000. Unit is
    /// MILLISECONDS. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    /// Allowed in Essentials (Allowed values- 250), Basic (Allowed values- 250) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apdex_rtt_threshold: Option<u32>,
    /// Tolerated client to Avi Round Trip Time(RTT) factor. It is a multiple of
    /// apdex_rtt_tolerated_factor. Allowed values are 1-1000. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition. Allowed in Essentials (Allowed values- 4), Basic
    /// (Allowed values- 4) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apdex_rtt_tolerated_factor: Option<f64>,
    /// If a client is able to load a page in less than the Satisfactory Latency Threshold, the
    /// PageLoad is considered Satisfied. It is considered tolerated if it is greater than Satisfied
    /// but less than the Tolerated Latency multiplied by Satisifed Latency. Greater than this
    /// number and the client's request is considered Frustrated. A PageLoad includes the time for
    /// DNS lookup, download of all HTTP objects, and page render time. Allowed values are 1-30000.
    /// Unit is MILLISECONDS. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition. Allowed in Essentials (Allowed values- 5000), Basic (Allowed values- 5000) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apdex_rum_threshold: Option<u32>,
    /// Virtual service threshold factor for tolerated Page Load Time (PLT) as multiple of
    /// apdex_rum_threshold. Allowed values are 1-1000. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition. Allowed in Essentials (Allowed values- 4), Basic
    /// (Allowed values- 4) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apdex_rum_tolerated_factor: Option<f64>,
    /// A server HTTP response is considered Satisfied if latency is less than the Satisfactory
    /// Latency Threshold. The response is considered tolerated when it is greater than Satisfied
    /// but less than the Tolerated Latency Factor * S_Latency. Greater than this number and the
    /// server response is considered Frustrated. Allowed values are 1-30000. Unit is MILLISECONDS.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition. Allowed in
    /// Essentials (Allowed values- 400), Basic (Allowed values- 400) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apdex_server_response_threshold: Option<u32>,
    /// Server tolerated response latency factor. Servermust response within this factor times the
    /// satisfactory threshold (apdex_server_response_threshold) to be considered tolerated. Allowed
    /// values are 1-1000. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition. Allowed in Essentials (Allowed values- 4), Basic (Allowed values- 4) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apdex_server_response_tolerated_factor: Option<f64>,
    /// Satisfactory client to Avi Round Trip Time(RTT). Allowed values are 1-2000. Unit is
    /// MILLISECONDS. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    /// Allowed in Essentials (Allowed values- 125), Basic (Allowed values- 125) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apdex_server_rtt_threshold: Option<u32>,
    /// Tolerated client to Avi Round Trip Time(RTT) factor. It is a multiple of
    /// apdex_rtt_tolerated_factor. Allowed values are 1-1000. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition. Allowed in Essentials (Allowed values- 4), Basic
    /// (Allowed values- 4) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apdex_server_rtt_tolerated_factor: Option<f64>,
    /// Configure which logs are sent to the Avi Controller from SEs and how they are processed.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub client_log_config: Option<ClientLogConfiguration>,
    /// Configure to stream logs to an external server. Field introduced in 17.1.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub client_log_streaming_config: Option<ClientLogStreamingConfig>,
    /// Protobuf versioning for config pbs. Field introduced in 21.1.1. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    /// A connection between client and Avi is considered lossy when more than this percentage of
    /// out of order packets are received. Allowed values are 1-100. Unit is PERCENT. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials
    /// (Allowed values- 50), Basic (Allowed values- 50) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conn_lossy_ooo_threshold: Option<u32>,
    /// A connection between client and Avi is considered lossy when more than this percentage of
    /// packets are retransmitted due to timeout. Allowed values are 1-100. Unit is PERCENT. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials
    /// (Allowed values- 20), Basic (Allowed values- 20) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conn_lossy_timeo_rexmt_threshold: Option<u32>,
    /// A connection between client and Avi is considered lossy when more than this percentage of
    /// packets are retransmitted. Allowed values are 1-100. Unit is PERCENT. Allowed with any value
    /// in Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials (Allowed
    /// values- 50), Basic (Allowed values- 50) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conn_lossy_total_rexmt_threshold: Option<u32>,
    /// A client connection is considered lossy when percentage of times a packet could not be
    /// trasmitted due to TCP zero window is above this threshold. Allowed values are 0-100. Unit is
    /// PERCENT. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    /// Allowed in Essentials (Allowed values- 2), Basic (Allowed values- 2) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conn_lossy_zero_win_size_event_threshold: Option<u32>,
    /// A connection between Avi and server is considered lossy when more than this percentage of
    /// out of order packets are received. Allowed values are 1-100. Unit is PERCENT. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials
    /// (Allowed values- 50), Basic (Allowed values- 50) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conn_server_lossy_ooo_threshold: Option<u32>,
    /// A connection between Avi and server is considered lossy when more than this percentage of
    /// packets are retransmitted due to timeout. Allowed values are 1-100. Unit is PERCENT. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials
    /// (Allowed values- 20), Basic (Allowed values- 20) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conn_server_lossy_timeo_rexmt_threshold: Option<u32>,
    /// A connection between Avi and server is considered lossy when more than this percentage of
    /// packets are retransmitted. Allowed values are 1-100. Unit is PERCENT. Allowed with any value
    /// in Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials (Allowed
    /// values- 50), Basic (Allowed values- 50) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conn_server_lossy_total_rexmt_threshold: Option<u32>,
    /// A server connection is considered lossy when percentage of times a packet could not be
    /// trasmitted due to TCP zero window is above this threshold. Allowed values are 0-100. Unit is
    /// PERCENT. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    /// Allowed in Essentials (Allowed values- 2), Basic (Allowed values- 2) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conn_server_lossy_zero_win_size_event_threshold: Option<u32>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Enable adaptive configuration for optimizing resource usage. Field introduced in 20.1.1.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_adaptive_config: Option<bool>,
    /// Enables Advanced Analytics features like Anomaly detection. If set to false, anomaly
    /// computation (and associated rules/events) for VS, Pool and Server metrics will be
    /// deactivated. However, setting it to false reduces cpu and memory requirements for Analytics
    /// subsystem. Field introduced in 17.2.13, 18.1.5, 18.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials (Allowed values-
    /// false), Basic (Allowed values- false) edition. Special default for Essentials edition is
    /// false, Basic edition is false, Enterprise edition is True.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_advanced_analytics: Option<bool>,
    /// Virtual Service (VS) metrics are processed only when there is live data traffic on the VS.
    /// In case, VS is idle for a period of time as specified by ondemand_metrics_idle_timeout then
    /// metrics processing is suspended for that VS. Field introduced in 20.1.3. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_ondemand_metrics: Option<bool>,
    /// Enable node (service engine) level analytics forvs metrics. Field introduced in 20.1.3.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_se_analytics: Option<bool>,
    /// Enables analytics on backend servers. This may be desired in container environment when
    /// there are large number of ephemeral servers. Additionally, no healthscore of servers is
    /// computed when server analytics is enabled. Field introduced in 20.1.3. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_server_analytics: Option<bool>,
    /// Enable VirtualService (frontend) Analytics. This flag enables metrics and healthscore for
    /// Virtualservice. Field introduced in 20.1.3. Allowed with any value in Enterprise, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_vs_analytics: Option<bool>,
    /// Exclude client closed connection before an HTTP request could be completed from being
    /// classified as an error. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition. Allowed in Essentials (Allowed values- false), Basic (Allowed values- false)
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_client_close_before_request_as_error: Option<bool>,
    /// Exclude Connection dropped by VS due to client advertises a very small window size from the
    /// errors. Field introduced in 31.2.1. Allowed with any value in Enterprise, Enterprise with
    /// Cloud Services edition. Allowed in Essentials (Allowed values- true), Basic (Allowed values-
    /// true) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_conn_drop_client_small_window_as_error: Option<bool>,
    /// Exclude dns policy drops from the list of errors. Field introduced in 17.2.2. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials
    /// (Allowed values- false), Basic (Allowed values- false) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_dns_policy_drop_as_significant: Option<bool>,
    /// Exclude queries to GSLB services that are operationally down from the list of errors.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition. Allowed in
    /// Essentials (Allowed values- false), Basic (Allowed values- false) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_gs_down_as_error: Option<bool>,
    /// List of HTTP status codes to be excluded from being classified as an error. Error
    /// connections or responses impacts health score, are included as significant logs, and may be
    /// classified as part of a DoS attack. Allowed with any value in Enterprise, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub exclude_http_error_codes: Vec<i64>,
    /// Exclude dns queries to domains outside the domains configured in the DNS application profile
    /// from the list of errors. Allowed with any value in Enterprise, Enterprise with Cloud
    /// Services edition. Allowed in Essentials (Allowed values- false), Basic (Allowed values-
    /// false) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_invalid_dns_domain_as_error: Option<bool>,
    /// Exclude invalid dns queries from the list of errors. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition. Allowed in Essentials (Allowed values- false), Basic
    /// (Allowed values- false) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_invalid_dns_query_as_error: Option<bool>,
    /// Exclude the Issuer-Revoked OCSP Responses from the list of errors. Field introduced in
    /// 20.1.1. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    /// Allowed in Essentials (Allowed values- true), Basic (Allowed values- true) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_issuer_revoked_ocsp_responses_as_error: Option<bool>,
    /// Exclude queries to domains that did not have configured services/records from the list of
    /// errors. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    /// Allowed in Essentials (Allowed values- false), Basic (Allowed values- false) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_no_dns_record_as_error: Option<bool>,
    /// Exclude queries to GSLB services that have no available members from the list of errors.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition. Allowed in
    /// Essentials (Allowed values- false), Basic (Allowed values- false) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_no_valid_gs_member_as_error: Option<bool>,
    /// Exclude persistence server changed while load balancing' from the list of errors. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials
    /// (Allowed values- false), Basic (Allowed values- false) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_persistence_change_as_error: Option<bool>,
    /// Exclude the Revoked OCSP certificate status responses from the list of errors. Field
    /// introduced in 20.1.1. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition. Allowed in Essentials (Allowed values- true), Basic (Allowed values- true) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_revoked_ocsp_responses_as_error: Option<bool>,
    /// Exclude server dns error response from the list of errors. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials (Allowed values-
    /// false), Basic (Allowed values- false) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_server_dns_error_as_error: Option<bool>,
    /// Exclude server TCP reset from errors. It is common for applications like MS Exchange.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition. Allowed in
    /// Essentials (Allowed values- false), Basic (Allowed values- false) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_server_tcp_reset_as_error: Option<bool>,
    /// List of SIP status codes to be excluded from being classified as an error. Field introduced
    /// in 17.2.13, 18.1.5, 18.2.1. Allowed with any value in Enterprise, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub exclude_sip_error_codes: Vec<i64>,
    /// Exclude the Stale OCSP certificate status responses from the list of errors. Field
    /// introduced in 20.1.1. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition. Allowed in Essentials (Allowed values- true), Basic (Allowed values- true) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_stale_ocsp_responses_as_error: Option<bool>,
    /// Exclude 'server unanswered syns' from the list of errors. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials (Allowed values-
    /// false), Basic (Allowed values- false) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_syn_retransmit_as_error: Option<bool>,
    /// Exclude TCP resets by client from the list of potential errors. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials (Allowed values-
    /// false), Basic (Allowed values- false) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_tcp_reset_as_error: Option<bool>,
    /// Exclude the unavailable OCSP Responses from the list of errors. Field introduced in 20.1.1.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition. Allowed in
    /// Essentials (Allowed values- true), Basic (Allowed values- true) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_unavailable_ocsp_responses_as_error: Option<bool>,
    /// Exclude unsupported dns queries from the list of errors. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials (Allowed values-
    /// false), Basic (Allowed values- false) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_unsupported_dns_query_as_error: Option<bool>,
    /// Skips health score computation of pool servers when number of servers in a pool is more than
    /// this setting. Allowed values are 0-5000. Special values are 0- server health score is
    /// deactivated. Field introduced in 17.2.13, 18.1.4. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition. Allowed in Essentials (Allowed values- 0), Basic
    /// (Allowed values- 0) edition. Special default for Essentials edition is 0, Basic edition is
    /// 0, Enterprise edition is 20.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub healthscore_max_server_limit: Option<u32>,
    /// Time window (in secs) within which only unique health change events should occur. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials
    /// (Allowed values- 1209600), Basic (Allowed values- 1209600) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_event_throttle_window: Option<u32>,
    /// Maximum penalty that may be deducted from health score for anomalies. Allowed values are
    /// 0-100. Allowed with any value in Enterprise, Enterprise with Cloud Services edition. Allowed
    /// in Essentials (Allowed values- 10), Basic (Allowed values- 10) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_max_anomaly_penalty: Option<u32>,
    /// Maximum penalty that may be deducted from health score for high resource utilization.
    /// Allowed values are 0-100. Allowed with any value in Enterprise, Enterprise with Cloud
    /// Services edition. Allowed in Essentials (Allowed values- 25), Basic (Allowed values- 25)
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_max_resources_penalty: Option<u32>,
    /// Maximum penalty that may be deducted from health score based on security assessment. Allowed
    /// values are 0-100. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition. Allowed in Essentials (Allowed values- 100), Basic (Allowed values- 100) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_max_security_penalty: Option<u32>,
    /// DoS connection rate below which the DoS security assessment will not kick in. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials
    /// (Allowed values- 1000), Basic (Allowed values- 1000) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_min_dos_rate: Option<u32>,
    /// Adds free performance score credits to health score. It can be used for compensating health
    /// score for known slow applications. Allowed values are 0-100. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials (Allowed values-
    /// 0), Basic (Allowed values- 0) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_performance_boost: Option<u32>,
    /// Threshold number of connections in 5min, below which apdexr, apdexc, rum_apdex, and other
    /// network quality metrics are not computed. Allowed with any value in Enterprise, Enterprise
    /// with Cloud Services edition. Allowed in Essentials (Allowed values- 10), Basic (Allowed
    /// values- 10) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_pscore_traffic_threshold_l4_client: Option<f64>,
    /// Threshold number of connections in 5min, below which apdexr, apdexc, rum_apdex, and other
    /// network quality metrics are not computed. Allowed with any value in Enterprise, Enterprise
    /// with Cloud Services edition. Allowed in Essentials (Allowed values- 10), Basic (Allowed
    /// values- 10) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_pscore_traffic_threshold_l4_server: Option<f64>,
    /// Score assigned when the certificate has expired. Allowed values are 0-5. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials (Allowed
    /// values- 0.0), Basic (Allowed values- 0.0) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_security_certscore_expired: Option<f64>,
    /// Score assigned when the certificate expires in more than 30 days. Allowed values are 0-5.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition. Allowed in
    /// Essentials (Allowed values- 5.0), Basic (Allowed values- 5.0) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_security_certscore_gt30d: Option<f64>,
    /// Score assigned when the certificate expires in less than or equal to 7 days. Allowed values
    /// are 0-5. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    /// Allowed in Essentials (Allowed values- 2.0), Basic (Allowed values- 2.0) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_security_certscore_le07d: Option<f64>,
    /// Score assigned when the certificate expires in less than or equal to 30 days. Allowed values
    /// are 0-5. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    /// Allowed in Essentials (Allowed values- 4.0), Basic (Allowed values- 4.0) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_security_certscore_le30d: Option<f64>,
    /// Penalty for allowing certificates with invalid chain. Allowed values are 0-5. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials
    /// (Allowed values- 1.0), Basic (Allowed values- 1.0) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_security_chain_invalidity_penalty: Option<f64>,
    /// Score assigned when the minimum cipher strength is 0 bits. Allowed values are 0-5. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials
    /// (Allowed values- 0.0), Basic (Allowed values- 0.0) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_security_cipherscore_eq000b: Option<f64>,
    /// Score assigned when the minimum cipher strength is greater than equal to 128 bits. Allowed
    /// values are 0-5. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition. Allowed in Essentials (Allowed values- 5.0), Basic (Allowed values- 5.0) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_security_cipherscore_ge128b: Option<f64>,
    /// Score assigned when the minimum cipher strength is less than 128 bits. Allowed values are
    /// 0-5. Allowed with any value in Enterprise, Enterprise with Cloud Services edition. Allowed
    /// in Essentials (Allowed values- 3.5), Basic (Allowed values- 3.5) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_security_cipherscore_lt128b: Option<f64>,
    /// Score assigned when no algorithm is used for encryption. Allowed values are 0-5. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials
    /// (Allowed values- 0.0), Basic (Allowed values- 0.0) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_security_encalgo_score_none: Option<f64>,
    /// Score assigned when RC4 algorithm is used for encryption. Allowed values are 0-5. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials
    /// (Allowed values- 2.5), Basic (Allowed values- 2.5) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_security_encalgo_score_rc4: Option<f64>,
    /// Penalty for not enabling HSTS. Allowed values are 0-5. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition. Allowed in Essentials (Allowed values- 1.0), Basic
    /// (Allowed values- 1.0) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_security_hsts_penalty: Option<f64>,
    /// Penalty for allowing non-PFS handshakes. Allowed values are 0-5. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials (Allowed values-
    /// 1.0), Basic (Allowed values- 1.0) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_security_nonpfs_penalty: Option<f64>,
    /// Score assigned when OCSP Certificate Status is set to Revoked or Issuer Revoked. Allowed
    /// values are 0.0-5.0. Field introduced in 20.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition. Allowed in Essentials (Allowed values- 0.0), Basic
    /// (Allowed values- 0.0) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_security_ocsp_revoked_score: Option<f64>,
    /// Deprecated. Allowed values are 0-5. Allowed with any value in Enterprise, Enterprise with
    /// Cloud Services edition. Allowed in Essentials (Allowed values- 1.0), Basic (Allowed values-
    /// 1.0) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_security_selfsignedcert_penalty: Option<f64>,
    /// Score assigned when supporting SSL3.0 encryption protocol. Allowed values are 0-5. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials
    /// (Allowed values- 3.5), Basic (Allowed values- 3.5) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_security_ssl30_score: Option<f64>,
    /// Score assigned when supporting TLS1.0 encryption protocol. Allowed values are 0-5. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials
    /// (Allowed values- 5.0), Basic (Allowed values- 5.0) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_security_tls10_score: Option<f64>,
    /// Score assigned when supporting TLS1.1 encryption protocol. Allowed values are 0-5. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials
    /// (Allowed values- 5.0), Basic (Allowed values- 5.0) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_security_tls11_score: Option<f64>,
    /// Score assigned when supporting TLS1.2 encryption protocol. Allowed values are 0-5. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials
    /// (Allowed values- 5.0), Basic (Allowed values- 5.0) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_security_tls12_score: Option<f64>,
    /// Score assigned when supporting TLS1.3 encryption protocol. Allowed values are 0-5. Field
    /// introduced in 18.2.6. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition. Allowed in Essentials (Allowed values- 5.0), Basic (Allowed values- 5.0) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_security_tls13_score: Option<f64>,
    /// Penalty for allowing weak signature algorithm(s). Allowed values are 0-5. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials (Allowed
    /// values- 1.0), Basic (Allowed values- 1.0) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_security_weak_signature_algo_penalty: Option<f64>,
    /// Deprecated in 22.1.1. Field introduced in 21.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub latency_audit_props: Option<LatencyAuditProperties>,
    /// List of labels to be used for granular RBAC. Field introduced in 20.1.5. Allowed with any
    /// value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub markers: Vec<RoleFilterMatchLabel>,
    /// The name of the analytics profile. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// This flag sets the time duration of no live data traffic after which Virtual Service metrics
    /// processing is suspended. It is applicable only when enable_ondemand_metrics is set to false.
    /// Field introduced in 18.1.1. Unit is SECONDS. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ondemand_metrics_idle_timeout: Option<u32>,
    /// List of HTTP status code ranges to be excluded from being classified as an error. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub ranges: Vec<HttpstatusRange>,
    /// Block of HTTP response codes to be excluded from being classified as an error. Enum options
    /// - AP_HTTP_RSP_4XX, AP_HTTP_RSP_5XX. Allowed with any value in Enterprise, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub resp_code_block: Vec<String>,
    /// Rules applied to the HTTP application log for filtering sensitive information. Field
    /// introduced in 17.2.10, 18.1.2. Allowed with any value in Enterprise, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub sensitive_log_profile: Option<SensitiveLogProfile>,
    /// Maximum number of SIP messages added in logs for a SIP transaction. By default, this value
    /// is 20. Allowed values are 1-1000. Field introduced in 17.2.13, 18.1.5, 18.2.1. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials
    /// (Allowed values- 20), Basic (Allowed values- 20) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sip_log_depth: Option<u32>,
    /// It is a reference to an object of type Tenant. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// Time Tracker Properties for connection establishment audit. Field introduced in 22.1.1.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub time_tracker_props: Option<TimeTrackerProperties>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// UUID of the analytics profile. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// App hdr.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AppHdr {
    /// Enum options - SENSITIVE, INSENSITIVE. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub hdr_match_case: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub hdr_name: Option<String>,
    /// Enum options - BEGINS_WITH, DOES_NOT_BEGIN_WITH, CONTAINS, DOES_NOT_CONTAIN, ENDS_WITH,
    /// DOES_NOT_END_WITH, EQUALS, DOES_NOT_EQUAL, REGEX_MATCH, REGEX_DOES_NOT_MATCH. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials
    /// (Allowed values-
    /// BEGINS_WITH,DOES_NOT_BEGIN_WITH,CONTAINS,DOES_NOT_CONTAIN,ENDS_WITH,DOES_NOT_END_WITH,EQUALS,DOES_NOT_EQUAL),
    /// Basic (Allowed values-
    /// BEGINS_WITH,DOES_NOT_BEGIN_WITH,CONTAINS,DOES_NOT_CONTAIN,ENDS_WITH,DOES_NOT_END_WITH,EQUALS,DOES_NOT_EQUAL)
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub hdr_string_op: Option<String>,
}

/// Application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct Application {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Protobuf versioning for config pbs. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    /// User defined description for the object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Name of the object.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
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
    /// It is a reference to an object of type VirtualService.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub virtualservice_refs: Vec<String>,
}

/// Application insights params.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ApplicationInsightsParams {
    /// If set to true, limit application learning only from clients which match the learn_from_bots
    /// specification. The settings learn_from_authenticated_clients_only and trusted_ip_groups
    /// always take precedence. Field introduced in 31.2.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_learn_from_bots: Option<bool>,
    /// If true, learns the params per URI path. Field introduced in 31.2.1. Allowed with any value
    /// in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_per_uri_learning: Option<bool>,
    /// Limit Application Learning only from Authenticated clients. Field introduced in 31.2.1.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learn_from_authenticated_clients_only: Option<bool>,
    /// If Bot detection is active for this Virtual Service, learning will only be performed on
    /// application data from clients within the configured bot classification types. Field
    /// introduced in 31.2.1. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub learn_from_bots: Option<BotDetectionMatch>,
    /// When true, the WAF includes argument-less URIs in its learning process. Field introduced in
    /// 31.2.1. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learn_from_urls_without_args: Option<bool>,
    /// Maximum number of parameters per URI programmed for Application Insights. Allowed values are
    /// 10-1000. Field introduced in 31.2.1. Allowed with any value in Enterprise, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_params: Option<u32>,
    /// Maximum number of URIs for Application Insights. Allowed values are 10-10000. Field
    /// introduced in 31.2.1. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_uris: Option<u32>,
    /// Limits Application Learning from client IPs within the configured IP Address Group. It is a
    /// reference to an object of type IpAddrGroup. Field introduced in 31.2.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trusted_ipgroup_ref: Option<String>,
}

/// Application insights policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct ApplicationInsightsPolicy {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Application insights parameters to filter application learning from clients. Field
    /// introduced in 31.2.1. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub application_insights_params: Option<ApplicationInsightsParams>,
    /// Application sampling configuration to control rate and volume of data ingestion for
    /// Application Insights that the ServiceEngines are expected to send to the controller. Field
    /// introduced in 31.2.1. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub application_sampling_config: Option<ApplicationSamplingConfig>,
    /// Protobuf versioning for config pbs. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    /// Details of the Application Insights Configuration. Field introduced in 31.2.1. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Enable Application Insights, formerly called learning for this virtual service. Field
    /// introduced in 31.2.1. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_application_insights: Option<bool>,
    /// The name of the Application Insights Configuration. Field introduced in 31.2.1. Allowed with
    /// any value in Enterprise, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// Details of the Tenant for the Application Insights Configuration. It is a reference to an
    /// object of type Tenant. Field introduced in 31.2.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// UUID of the Application Insights Configuration. Field introduced in 31.2.1. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Case config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CaseConfig {
    /// Additional emails to get notified when the case gets created. Field introduced in 30.2.1.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub additional_emails: Vec<String>,
    /// Enable pro-active support case creation when a controller failure occurs. Field introduced
    /// in 21.1.1. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    /// Allowed in Essentials (Allowed values- false), Basic (Allowed values- false) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_auto_case_creation_on_controller_failure: Option<bool>,
    /// Enable pro-active support case creation when a service engine failure occurs. Field
    /// introduced in 21.1.1. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition. Allowed in Essentials (Allowed values- false), Basic (Allowed values- false)
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_auto_case_creation_on_se_failure: Option<bool>,
    /// Enable cleanup of successfully attached files to support case. Field introduced in 21.1.1.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition. Allowed in
    /// Essentials (Allowed values- false), Basic (Allowed values- false) edition. Special default
    /// for Essentials edition is false, Basic edition is false, Enterprise edition is True.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_cleanup_of_attached_files: Option<bool>,
}

/// Content rewrite profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ContentRewriteProfile {
    /// Content Rewrite rules to be enabled on therequest body. Field introduced in 31.2.1. Maximum
    /// of 1 items allowed. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub req_rewrite_rules: Vec<ReqContentRewriteRule>,
    /// Rewrite only content types listed in this *string group. Content types not present in this
    /// list are not rewritten. It is a reference to an object of type StringGroup. Field deprecated
    /// in 31.2.1. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewritable_content_ref: Option<String>,
    /// Content Rewrite rules to be enabled on theresponse body. Field introduced in 21.1.3. Maximum
    /// of 1 items allowed. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub rsp_rewrite_rules: Vec<RspContentRewriteRule>,
}

/// Diameter service application profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DiameterServiceApplicationProfile {
    /// Origin-Host AVP towards client. Field introduced in 31.1.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_origin_host: Option<String>,
    /// Origin-Realm AVP towards client. Field introduced in 31.1.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_origin_realm: Option<String>,
    /// Rwrite Host-IP-Address AVP. Field introduced in 31.1.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_ip_addr_rewrite: Option<bool>,
    /// Max number of outstanding request waiting for response. Allowed values are 1-1048576. Field
    /// introduced in 31.1.1. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_outstanding_req: Option<u32>,
    /// Response waiting time for the request sent. Allowed values are 1-1800. Field introduced in
    /// 31.1.1. Unit is SEC. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub req_timeout: Option<u32>,
    /// Origin-Host AVP towards server. Field introduced in 31.1.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_origin_host: Option<String>,
    /// Origin-Realm AVP towards server. Field introduced in 31.1.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_origin_realm: Option<String>,
}

/// DNS rule match target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DnsRuleMatchTarget {
    /// IP addresses to match against client IP. From 17.1.6 release onwards, IP addresses needs to
    /// be configured in the client_ip_address field of this message. Field deprecated in
    /// 17.1.6,17.2.2. Field introduced in 17.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub client_ip: Option<IpAddrMatch>,
    /// IP addresses to match against client IP or the EDNS client subnet IP. Field introduced in
    /// 17.1.6,17.2.2.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub client_ip_address: Option<DnsClientIpMatch>,
    /// Port number to match against client port number. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub client_port_numbers: Option<DnsClientPortMatch>,
    /// Geographical location attribute to match against that of the client IP. Field introduced in
    /// 17.1.5.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub geo_location: Option<DnsGeoLocationMatch>,
    /// DNS transport protocol match. Field introduced in 17.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub protocol: Option<DnsTransportProtocolMatch>,
    /// Domain names to match against query name. Field introduced in 17.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub query_name: Option<DnsQueryNameMatch>,
    /// DNS query types to match against request query type. Field introduced in 17.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub query_type: Option<DnsQueryTypeMatch>,
}

/// Error page body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct ErrorPageBody {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Protobuf versioning for config pbs. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    /// Error page body sent to client when match. Field introduced in 17.2.4.
    ///
    /// Required.
    #[avi(required)]
    pub error_page_body: Option<String>,
    /// Format of an error page body HTML or JSON. Enum options - ERROR_PAGE_FORMAT_HTML,
    /// ERROR_PAGE_FORMAT_JSON. Field introduced in 18.2.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
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
    /// Field introduced in 17.2.4.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// It is a reference to an object of type Tenant. Field introduced in 17.2.4.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Field introduced in 17.2.4.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Hdr match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct HdrMatch {
    /// Name of the HTTP header whose value is to be matched. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub hdr: Option<String>,
    /// Case sensitivity to use for the match. Enum options - SENSITIVE, INSENSITIVE. Allowed with
    /// any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_case: Option<String>,
    /// Criterion to use for matching headers in the HTTP request. Enum options - HDR_EXISTS,
    /// HDR_DOES_NOT_EXIST, HDR_BEGINS_WITH, HDR_DOES_NOT_BEGIN_WITH, HDR_CONTAINS,
    /// HDR_DOES_NOT_CONTAIN, HDR_ENDS_WITH, HDR_DOES_NOT_END_WITH, HDR_EQUALS, HDR_DOES_NOT_EQUAL.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub match_criteria: Option<String>,
    /// UUID of the *string group(s). It is a reference to an object of type StringGroup. Field
    /// introduced in 31.1.1. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub string_group_refs: Vec<String>,
    /// String values to match in the HTTP header. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub value: Vec<String>,
}

/// HTTP client authentication params.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct HttpClientAuthenticationParams {
    /// Auth Profile to use for validating users. It is a reference to an object of type
    /// AuthProfile. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_profile_ref: Option<String>,
    /// Basic authentication realm to present to a user along with the prompt for credentials.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realm: Option<String>,
    /// Rrequest URI path when the authentication applies. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub request_uri_path: Option<StringMatch>,
    /// type of client authentication. Enum options - HTTP_BASIC_AUTH. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}

/// HTTP policy set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct HttpPolicySet {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Checksum of cloud configuration for Pool. Internally set by cloud connector. Allowed with
    /// any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_config_cksum: Option<String>,
    /// Protobuf versioning for config pbs. Field introduced in 21.1.1. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    /// Creator name. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Geo database. It is a reference to an object of type GeoDB. Field introduced in 21.1.1.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_db_ref: Option<String>,
    /// HTTP request policy for the virtual service. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub http_request_policy: Option<HttpRequestPolicy>,
    /// HTTP response policy for the virtual service. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub http_response_policy: Option<HttpResponsePolicy>,
    /// HTTP security policy for the virtual service. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub http_security_policy: Option<HttpsecurityPolicy>,
    /// IP reputation database. It is a reference to an object of type IPReputationDB. Field
    /// introduced in 20.1.3. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_reputation_db_ref: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_internal_policy: Option<bool>,
    /// List of labels to be used for granular RBAC. Field introduced in 20.1.5. Allowed with any
    /// value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub markers: Vec<RoleFilterMatchLabel>,
    /// Name of the HTTP Policy Set. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
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
    /// UUID of the HTTP Policy Set. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// HTTP response rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct HttpResponseRule {
    /// Log all HTTP headers upon rule match. Allowed with any value in Enterprise, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_headers: Option<bool>,
    /// Enable or disable the rule. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub enable: Option<bool>,
    /// HTTP header rewrite action. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub hdr_action: Vec<HttpHdrAction>,
    /// Index of the rule. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with
    /// Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub index: Option<i32>,
    /// Location header rewrite action. Allowed with any value in Enterprise, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub loc_hdr_action: Option<HttpRewriteLocHdrAction>,
    /// Log HTTP request upon rule match. Allowed with any value in Enterprise, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log: Option<bool>,
    /// Add match criteria to the rule. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub r#match: Option<ResponseMatchTarget>,
    /// Name of the rule. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with
    /// Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
}

/// HTTP rewrite loc hdr action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct HttpRewriteLocHdrAction {
    /// Host config. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub host: Option<UriParam>,
    /// Keep or drop the query from the server side redirect URI. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_query: Option<bool>,
    /// Path config. Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud
    /// Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub path: Option<UriParam>,
    /// Port to use in the redirected URI. Allowed values are 1-65535. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u32>,
    /// HTTP protocol type. Enum options - HTTP, HTTPS. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub protocol: Option<String>,
}

/// HTTP version match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct HttpVersionMatch {
    /// Criterion to use for HTTP version matching the version used in the HTTP request. Enum
    /// options - IS_IN, IS_NOT_IN. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub match_criteria: Option<String>,
    /// HTTP protocol version. Enum options - ZERO_NINE, ONE_ZERO, ONE_ONE, TWO_ZERO. Minimum of 1
    /// items required. Maximum of 8 items allowed. Allowed with any value in Enterprise, Enterprise
    /// with Cloud Services edition. Allowed in Essentials (Allowed values- ONE_ZERO,ONE_ONE), Basic
    /// (Allowed values- ONE_ZERO,ONE_ONE) edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub versions: Vec<String>,
}

/// IP addr match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct IpAddrMatch {
    /// IP address(es). Allowed with any value in Enterprise, Essentials, Basic, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub addrs: Vec<IpAddr>,
    /// UUID of IP address group(s). It is a reference to an object of type IpAddrGroup. Allowed
    /// with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub group_refs: Vec<String>,
    /// Criterion to use for IP address matching the HTTP request. Enum options - IS_IN, IS_NOT_IN.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub match_criteria: Option<String>,
    /// IP address prefix(es). Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub prefixes: Vec<IpAddrPrefix>,
    /// IP address range(s). Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub ranges: Vec<IpAddrRange>,
}

/// IP addr port.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct IpAddrPort {
    /// Hostname of server. One of IP address or hostname should be set. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// IP Address of host. One of IP address or hostname should be set. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub ip: Option<IpAddr>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Port number of server. Allowed values are 1-65535. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub port: Option<u32>,
}

/// IP network subnet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct IpNetworkSubnet {
    /// IPv6 reserved range of IPs for VirtualService IP allocation with Infoblox as the IPAM
    /// provider. Field introduced in 31.1.1. Allowed with any value in Enterprise, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub ipv6_range: Option<IpAddrRange>,
    /// Network for VirtualService IP allocation with Vantage as the IPAM provider. Network should
    /// be created before this is configured. It is a reference to an object of type Network.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_ref: Option<String>,
    /// IPv4 reserved range of IPs for VirtualService IP allocation with Infoblox as the IPAM
    /// provider. Field introduced in 31.1.1. Allowed with any value in Enterprise, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub range: Option<IpAddrRange>,
    /// Subnet for VirtualService IP allocation with Vantage or Infoblox as the IPAM provider. Only
    /// one of subnet or subnet_uuid configuration is allowed. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub subnet: Option<IpAddrPrefix>,
    /// Subnet for VirtualService IPv6 allocation with Vantage or Infoblox as the IPAM provider.
    /// Only one of subnet or subnet_uuid configuration is allowed. Field introduced in 18.1.1.
    /// Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub subnet6: Option<IpAddrPrefix>,
    /// Subnet UUID or Name or Prefix for VirtualService IPv6 allocation with AWS or OpenStack as
    /// the IPAM provider. Only one of subnet or subnet_uuid configuration is allowed. Field
    /// introduced in 18.1.1. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet6_uuid: Option<String>,
    /// Subnet UUID or Name or Prefix for VirtualService IP allocation with AWS or OpenStack as the
    /// IPAM provider. Only one of subnet or subnet_uuid configuration is allowed. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_uuid: Option<String>,
}

/// Latency audit properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LatencyAuditProperties {
    /// Audit TCP connection establishment time. Enum options - LATENCY_AUDIT_OFF, LATENCY_AUDIT_ON,
    /// LATENCY_AUDIT_ON_WITH_SIG. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conn_est_audit_mode: Option<String>,
    /// Maximum threshold for connection establishment time. Field introduced in 21.1.1. Unit is
    /// MILLISECONDS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conn_est_threshold: Option<i32>,
    /// Audit dispatcher to proxy latency. Enum options - LATENCY_AUDIT_OFF, LATENCY_AUDIT_ON,
    /// LATENCY_AUDIT_ON_WITH_SIG. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_audit_mode: Option<String>,
    /// Maximum latency threshold between dispatcher and proxy. Field introduced in 21.1.1. Unit is
    /// MILLISECONDS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_threshold: Option<i32>,
}

/// Match target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct MatchTarget {
    /// Configure the bot classification result. Field introduced in 21.1.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub bot_detection_result: Option<BotDetectionMatch>,
    /// Configure client ip addresses.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub client_ip: Option<IpAddrMatch>,
    /// Configure HTTP cookie(s).
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub cookie: Option<CookieMatch>,
    /// Configure the geo information. Field introduced in 21.1.1. Maximum of 1 items allowed.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub geo_matches: Vec<GeoMatch>,
    /// Configure HTTP header(s). All configured headers must match.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub hdrs: Vec<HdrMatch>,
    /// Configure the host header.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub host_hdr: Option<HostHdrMatch>,
    /// Configure IP reputation. Field introduced in 20.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub ip_reputation_type: Option<IpReputationTypeMatch>,
    /// Configure HTTP methods.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub method: Option<MethodMatch>,
    /// Configure request paths.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub path: Option<PathMatch>,
    /// Configure the type of HTTP protocol.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub protocol: Option<ProtocolMatch>,
    /// Configure request query.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub query: Option<QueryMatch>,
    /// Configure source ip addresses. Field introduced in 21.1.3.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub source_ip: Option<IpAddrMatch>,
    /// Configure versions of the HTTP protocol.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub version: Option<HttpVersionMatch>,
    /// Configure virtual service ports.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub vs_port: Option<PortMatch>,
}

/// Network profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, AviObject)]
#[serde(default)]
pub struct NetworkProfile {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    ///
    /// Read only.
    #[serde(rename = "_last_modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Protobuf versioning for config pbs. Field introduced in 21.1.1. Allowed with any value in
    /// Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub configpb_attributes: Option<ConfigPbAttributes>,
    /// When enabled, Avi mirrors all TCP fastpath connections to standby. Applicable only in Legacy
    /// HA Mode. Field introduced in 18.1.3,18.2.1. Allowed with any value in Enterprise, Basic,
    /// Enterprise with Cloud Services edition. Allowed in Essentials (Allowed values- false)
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_mirror: Option<bool>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// List of labels to be used for granular RBAC. Field introduced in 20.1.5. Allowed with any
    /// value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub markers: Vec<RoleFilterMatchLabel>,
    /// The name of the network profile. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    ///
    /// Required.
    #[avi(required)]
    pub name: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    ///
    /// Required.
    #[avi(required, nested)]
    pub profile: Option<NetworkProfileUnion>,
    /// It is a reference to an object of type Tenant. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ref: Option<String>,
    /// url
    ///
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// UUID of the network profile. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Network profile union.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct NetworkProfileUnion {
    /// Configure SCTP FastPath network profile. Field introduced in 22.1.3. Allowed with any value
    /// in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub sctp_fast_path_profile: Option<SctpFastPathProfile>,
    /// Configure SCTP Proxy network profile. Field introduced in 22.1.3. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub sctp_proxy_profile: Option<SctpProxyProfile>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub tcp_fast_path_profile: Option<TcpFastPathProfile>,
    /// Allowed with any value in Enterprise, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub tcp_proxy_profile: Option<TcpProxyProfile>,
    /// Configure one of either proxy or fast path profiles. Enum options - PROTOCOL_TYPE_TCP_PROXY,
    /// PROTOCOL_TYPE_TCP_FAST_PATH, PROTOCOL_TYPE_UDP_FAST_PATH, PROTOCOL_TYPE_UDP_PROXY,
    /// PROTOCOL_TYPE_SCTP_PROXY, PROTOCOL_TYPE_SCTP_FAST_PATH. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials (Allowed values-
    /// PROTOCOL_TYPE_TCP_FAST_PATH,PROTOCOL_TYPE_UDP_FAST_PATH), Basic (Allowed values-
    /// PROTOCOL_TYPE_TCP_PROXY,PROTOCOL_TYPE_TCP_FAST_PATH,PROTOCOL_TYPE_UDP_FAST_PATH) edition.
    ///
    /// Required.
    #[avi(required)]
    pub r#type: Option<String>,
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub udp_fast_path_profile: Option<UdpFastPathProfile>,
    /// Configure UDP Proxy network profile. Field introduced in 17.2.8, 18.1.3, 18.2.1. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub udp_proxy_profile: Option<UdpProxyProfile>,
}

/// Req content rewrite rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ReqContentRewriteRule {
    /// Enable rewrite rule on request body. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
    /// Index of the request rewrite rule. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<i32>,
    /// Name of the request rewrite rule. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// List of search-and-replace *string pairs for the request body. For eg. Strings 'foo' and
    /// 'bar', where all searches of 'foo' in the request body will be replaced with 'bar'. Field
    /// introduced in 31.2.1. Allowed with any value in Enterprise, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub pairs: Vec<SearchReplacePair>,
    /// Rewrite only content types listed in this *string group. Content types not present in this
    /// list are not rewritten. It is a reference to an object of type StringGroup. Field introduced
    /// in 31.2.1. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewritable_content_ref: Option<String>,
}

/// Response match target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ResponseMatchTarget {
    /// Configure client ip addresses. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub client_ip: Option<IpAddrMatch>,
    /// Configure HTTP cookie(s). Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub cookie: Option<CookieMatch>,
    /// Configure HTTP headers. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub hdrs: Vec<HdrMatch>,
    /// Configure the host header. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub host_hdr: Option<HostHdrMatch>,
    /// Configure the location header. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub loc_hdr: Option<LocationHdrMatch>,
    /// Configure HTTP methods. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub method: Option<MethodMatch>,
    /// Configure request paths. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub path: Option<PathMatch>,
    /// Configure the type of HTTP protocol. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub protocol: Option<ProtocolMatch>,
    /// Configure request query. Allowed with any value in Enterprise, Essentials, Basic, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub query: Option<QueryMatch>,
    /// Configure the HTTP headers in response. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub rsp_hdrs: Vec<HdrMatch>,
    /// Configure source ip addresses. Field introduced in 21.1.3. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub source_ip: Option<IpAddrMatch>,
    /// Configure the HTTP status code(s). Allowed with any value in Enterprise, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub status: Option<HttpstatusMatch>,
    /// Configure versions of the HTTP protocol. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub version: Option<HttpVersionMatch>,
    /// Configure virtual service ports. Allowed with any value in Enterprise, Essentials, Basic,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub vs_port: Option<PortMatch>,
}

/// String match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct StringMatch {
    /// Criterion to use for *string matching the HTTP request. Enum options - BEGINS_WITH,
    /// DOES_NOT_BEGIN_WITH, CONTAINS, DOES_NOT_CONTAIN, ENDS_WITH, DOES_NOT_END_WITH, EQUALS,
    /// DOES_NOT_EQUAL, REGEX_MATCH, REGEX_DOES_NOT_MATCH. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition. Allowed in Essentials (Allowed values-
    /// BEGINS_WITH,DOES_NOT_BEGIN_WITH,CONTAINS,DOES_NOT_CONTAIN,ENDS_WITH,DOES_NOT_END_WITH,EQUALS,DOES_NOT_EQUAL),
    /// Basic (Allowed values-
    /// BEGINS_WITH,DOES_NOT_BEGIN_WITH,CONTAINS,DOES_NOT_CONTAIN,ENDS_WITH,DOES_NOT_END_WITH,EQUALS,DOES_NOT_EQUAL)
    /// edition.
    ///
    /// Required.
    #[avi(required)]
    pub match_criteria: Option<String>,
    /// String value(s). Allowed with any value in Enterprise, Essentials, Basic, Enterprise with
    /// Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub match_str: Vec<String>,
    /// UUID of the *string group(s). It is a reference to an object of type StringGroup. Allowed
    /// with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub string_group_refs: Vec<String>,
}

/// TCP application profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TcpApplicationProfile {
    /// FTP profile configuration. Field introduced in 22.1.1. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub ftp_profile: Option<FtpProfile>,
    /// Select the PKI profile to be associated with the Virtual Service. This profile defines the
    /// Certificate Authority and Revocation List. It is a reference to an object of type
    /// PKIProfile. Field introduced in 18.2.3. Allowed with any value in Enterprise, Enterprise
    /// with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pki_profile_ref: Option<String>,
    /// Enable/Disable the usage of proxy protocol to convey client connection information to the
    /// back-end servers. Valid only for L4 application profiles and TCP proxy. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials (Allowed
    /// values- false), Basic (Allowed values- false) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_protocol_enabled: Option<bool>,
    /// Version of proxy protocol to be used to convey client connection information to the back-end
    /// servers. Enum options - PROXY_PROTOCOL_VERSION_1, PROXY_PROTOCOL_VERSION_2. Allowed with any
    /// value in Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials (Allowed
    /// values- PROXY_PROTOCOL_VERSION_1), Basic (Allowed values- PROXY_PROTOCOL_VERSION_1) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_protocol_version: Option<String>,
    /// Specifies whether the client side verification is set to none, request or require. Enum
    /// options - SSL_CLIENT_CERTIFICATE_NONE, SSL_CLIENT_CERTIFICATE_REQUEST,
    /// SSL_CLIENT_CERTIFICATE_REQUIRE. Field introduced in 18.2.3. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition. Allowed in Essentials (Allowed values-
    /// SSL_CLIENT_CERTIFICATE_NONE), Basic (Allowed values- SSL_CLIENT_CERTIFICATE_NONE) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_client_certificate_mode: Option<String>,
}

/// TCP fast path profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TcpFastPathProfile {
    /// DSR profile information. Field introduced in 18.2.3. Allowed with any value in Enterprise,
    /// Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub dsr_profile: Option<DsrProfile>,
    /// When enabled, Avi will complete the 3-way handshake with the client before forwarding any
    /// packets to the server. This will protect the server from SYN flood and half open SYN
    /// connections. Allowed with any value in Enterprise, Enterprise with Cloud Services edition.
    /// Allowed in Essentials (Allowed values- false), Basic (Allowed values- false) edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_syn_protection: Option<bool>,
    /// The amount of time (in sec) for which a connection needs to be idle before it is eligible to
    /// be deleted. Allowed values are 5-14400. Special values are 0 - infinite. Unit is SEC.
    /// Allowed with any value in Enterprise, Essentials, Basic, Enterprise with Cloud Services
    /// edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_idle_timeout: Option<i32>,
    /// TCP_Fast_PATH Network profile options. Field introduced in 31.1.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[avi(nested)]
    pub tcp_fastpath_options: Option<TcpOptions>,
}

/// URI info.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct UriInfo {
    /// The HTTP method. Together with name and parser it describes the HTTP endpoint. Enum options
    /// - HTTP_METHOD_GET, HTTP_METHOD_HEAD, HTTP_METHOD_PUT, HTTP_METHOD_DELETE, HTTP_METHOD_POST,
    /// HTTP_METHOD_OPTIONS, HTTP_METHOD_TRACE, HTTP_METHOD_CONNECT, HTTP_METHOD_PATCH,
    /// HTTP_METHOD_PROPFIND, HTTP_METHOD_PROPPATCH, HTTP_METHOD_MKCOL, HTTP_METHOD_COPY,
    /// HTTP_METHOD_MOVE, HTTP_METHOD_LOCK, HTTP_METHOD_UNLOCK. Field introduced in 31.2.1. Allowed
    /// with any value in Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Information about various params under a URI. Field introduced in 20.1.1. Allowed with any
    /// value in Enterprise, Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    #[avi(nested)]
    pub param_info: Vec<ParamInfo>,
    /// The Parser used to parse the request body. Together with name and method it describes the
    /// HTTP endpoint. If there was no parser, for example on a GET request, this is set to
    /// WAF_REQUEST_PARSER_DO_NOT_PARSE. Enum options - WAF_REQUEST_PARSER_URLENCODED,
    /// WAF_REQUEST_PARSER_MULTIPART, WAF_REQUEST_PARSER_JSON, WAF_REQUEST_PARSER_XML,
    /// WAF_REQUEST_PARSER_HANDLE_AS_STRING, WAF_REQUEST_PARSER_DO_NOT_PARSE,
    /// WAF_REQUEST_PARSER_AUTO_DETECT. Field introduced in 31.2.1. Allowed with any value in
    /// Enterprise, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser: Option<String>,
    /// Total number of URI hits. Field introduced in 20.1.1. Allowed with any value in Enterprise,
    /// Essentials, Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri_hits: Option<u64>,
    /// URI name. Field introduced in 20.1.1. Allowed with any value in Enterprise, Essentials,
    /// Basic, Enterprise with Cloud Services edition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri_key: Option<String>,
}
