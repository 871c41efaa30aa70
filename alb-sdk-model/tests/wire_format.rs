use alb_sdk_model::{
    AviObject, Validate,
    admin::TechSupportMessage,
    cloud::ViMgrSevmRuntime,
    common::{ConfigPbAttributes, GslbSiteRuntime, IpAddr, KeyValue, RoleFilterMatchLabel, TrustedHost},
    gslb::GslbRuntime,
    security::{AuthorizationRule, NetworkSecurityPolicy, TrustedHostProfile},
};
use serde_json::json;
use test_log::test;

#[test]
pub fn test_trusted_host_profile() {
    // first, construct an instance
    let mut host = TrustedHost::default();
    host.insert("host".to_string(), json!({"addr": "10.10.10.1", "type": "V4"}));
    let profile = TrustedHostProfile {
        name: Some("controllers".to_string()),
        hosts: vec![host],
        configpb_attributes: Some(ConfigPbAttributes { version: Some(3) }),
        uuid: Some("trustedhostprofile-5f0b".to_string()),
        ..Default::default()
    };

    // serialize that instance to a JSON value and compare
    // with an expected JSON representation
    let value = serde_json::to_value(&profile).unwrap();
    let expected_value = json!({
        "configpb_attributes": {"version": 3},
        "hosts": [{"host": {"addr": "10.10.10.1", "type": "V4"}}],
        "name": "controllers",
        "uuid": "trustedhostprofile-5f0b",
    });
    assert_eq!(expected_value, value);

    // try round-trip: deserialize the serialized value back into a profile
    let other_profile = serde_json::from_value::<TrustedHostProfile>(value).unwrap();
    assert_eq!(profile, other_profile);
}

#[test]
pub fn test_required_name_is_always_written() {
    // `name` carries no omitempty in the schema, so an unset name is written as null
    let value = serde_json::to_value(TrustedHostProfile::default()).unwrap();
    assert_eq!(json!({"name": null}), value);
}

#[test]
pub fn test_controller_response() {
    let response = json!({
        "_last_modified": "1714032123456789",
        "status": "Collecting",
        "status_code": "SYSERR_TECHSUPPORT_COLLECTING",
        "tech_support_ref": "https://10.10.10.10/api/techsupport/techsupport-1",
        "url": "https://10.10.10.10/api/techsupportmessage/techsupportmessage-1",
        "uuid": "techsupportmessage-1",
        "a_field_from_a_newer_release": true,
    });
    let message: TechSupportMessage = serde_json::from_value(response).unwrap();
    assert_eq!(Some("1714032123456789"), message.last_modified.as_deref());
    assert_eq!(Some("techsupportmessage-1"), message.uuid());
    assert_eq!(None, message.name());
    assert_eq!("techsupportmessage", TechSupportMessage::OBJECT_TYPE);

    // unknown members are dropped, the leading underscore survives
    let value = serde_json::to_value(&message).unwrap();
    assert!(value.get("a_field_from_a_newer_release").is_none());
    assert_eq!(json!("1714032123456789"), value["_last_modified"]);
}

#[test]
pub fn test_mixed_case_field_names() {
    let runtime: ViMgrSevmRuntime = serde_json::from_value(json!({
        "name": "se-1",
        "vcenter_vAppName": "avi-se",
        "vcenter_vAppVendor": "VMware",
    }))
    .unwrap();
    assert_eq!(Some("avi-se"), runtime.vcenter_v_app_name.as_deref());
    assert_eq!(Some("VMware"), runtime.vcenter_v_app_vendor.as_deref());

    let value = serde_json::to_value(&runtime).unwrap();
    assert_eq!(json!("avi-se"), value["vcenter_vAppName"]);
}

#[test]
pub fn test_null_and_missing_arrays() {
    let runtime: GslbRuntime = serde_json::from_value(json!({
        "name": "Default",
        "site": null,
        "dns_enabled": true,
    }))
    .unwrap();
    assert!(runtime.site.is_empty());
    assert!(runtime.gslb_sm_runtime.is_empty());
    assert_eq!(Some(true), runtime.dns_enabled);

    // empty arrays are omitted again on the way out
    let value = serde_json::to_value(&runtime).unwrap();
    assert_eq!(json!({"name": "Default", "dns_enabled": true}), value);
}

#[test]
pub fn test_passthrough_members_round_trip() {
    let input = json!({
        "name": "Default",
        "site": [{"site_uuid": "site-1", "role": "GSLB_LEADER", "rrt": {"enabled": true}}],
    });
    let runtime: GslbRuntime = serde_json::from_value(input.clone()).unwrap();
    let site: &GslbSiteRuntime = &runtime.site[0];
    assert_eq!(Some(&json!("GSLB_LEADER")), site.get("role"));
    assert_eq!(input, serde_json::to_value(&runtime).unwrap());
}

#[test]
pub fn test_keyword_field() {
    let addr = IpAddr::new("10.0.0.1");
    let value = serde_json::to_value(&addr).unwrap();
    assert_eq!(json!({"addr": "10.0.0.1", "type": "V4"}), value);
}

#[test]
pub fn test_missing_required_fields() {
    let rule = AuthorizationRule {
        name: Some("allow-admins".to_string()),
        enable: Some(true),
        ..Default::default()
    };
    assert_eq!(
        vec!["action".to_string(), "index".to_string(), "match".to_string()],
        rule.missing_required()
    );

    let value = serde_json::to_value(&rule).unwrap();
    assert_eq!(
        json!({
            "action": null,
            "enable": true,
            "index": null,
            "match": null,
            "name": "allow-admins",
        }),
        value
    );
}

#[test]
pub fn test_missing_required_in_arrays() {
    let policy = NetworkSecurityPolicy {
        name: Some("block-scanners".to_string()),
        labels: vec![
            KeyValue {
                key: Some("env".to_string()),
                value: Some("prod".to_string()),
            },
            KeyValue {
                key: None,
                value: Some("blue".to_string()),
            },
        ],
        markers: vec![RoleFilterMatchLabel {
            key: None,
            values: vec!["dev".to_string()],
        }],
        ..Default::default()
    };
    assert_eq!(
        vec!["labels[1].key".to_string(), "markers[0].key".to_string()],
        policy.missing_required()
    );
    assert!(!policy.is_complete());
}
