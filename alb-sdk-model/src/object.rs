use serde::{Serialize, de::DeserializeOwned};

use crate::reference::ObjectRef;

/// Reports required fields that are not set.
///
/// The schema marks some fields as required, but the controller is the only
/// party enforcing that. Implementations are derived with
/// `#[derive(Validate)]`, which checks fields tagged `#[avi(required)]` and
/// descends into fields tagged `#[avi(nested)]`.
pub trait Validate {
    /// Appends the dotted path of every missing required field to `missing`,
    /// each prefixed with `prefix`.
    fn collect_missing(&self, prefix: &str, missing: &mut Vec<String>);

    /// Paths of all required fields that are unset, e.g. `labels[0].key`.
    fn missing_required(&self) -> Vec<String> {
        let mut missing = Vec::new();
        self.collect_missing("", &mut missing);
        missing
    }

    fn is_complete(&self) -> bool {
        self.missing_required().is_empty()
    }
}

/// A top-level controller object, addressable as `/api/<type>/<uuid>`.
pub trait AviObject: Validate + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Collection name in API paths, e.g. `trustedhostprofile`.
    const OBJECT_TYPE: &'static str;

    fn uuid(&self) -> Option<&str>;

    fn name(&self) -> Option<&str>;

    /// `api/<type>` for the collection, `api/<type>/<uuid>` for a single object.
    fn api_path(uuid: Option<&str>) -> String {
        match uuid {
            Some(uuid) if !uuid.is_empty() => format!("api/{}/{uuid}", Self::OBJECT_TYPE),
            _ => format!("api/{}", Self::OBJECT_TYPE),
        }
    }

    /// Reference to this object, or `None` while it has no uuid.
    fn object_ref(&self) -> Option<ObjectRef> {
        let uuid = self.uuid()?;
        Some(ObjectRef::by_uuid(Self::OBJECT_TYPE, uuid).with_name(self.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gslb::GslbSmRuntime;
    use crate::security::{TrustedHostProfile, WafProfile};
    use test_log::test;

    #[test]
    fn test_object_type() {
        assert_eq!("trustedhostprofile", TrustedHostProfile::OBJECT_TYPE);
        assert_eq!("gslbsmruntime", GslbSmRuntime::OBJECT_TYPE);
        assert_eq!("wafprofile", WafProfile::OBJECT_TYPE);
    }

    #[test]
    fn test_api_path() {
        assert_eq!("api/trustedhostprofile", TrustedHostProfile::api_path(None));
        assert_eq!("api/trustedhostprofile", TrustedHostProfile::api_path(Some("")));
        assert_eq!(
            "api/trustedhostprofile/trustedhostprofile-1234",
            TrustedHostProfile::api_path(Some("trustedhostprofile-1234"))
        );
    }

    #[test]
    fn test_object_ref() {
        let mut profile = TrustedHostProfile {
            name: Some("hosts".to_string()),
            ..Default::default()
        };
        assert!(profile.object_ref().is_none());

        profile.uuid = Some("trustedhostprofile-1234".to_string());
        let r = profile.object_ref().unwrap();
        assert_eq!("trustedhostprofile", r.object_type());
        assert_eq!(Some("trustedhostprofile-1234"), r.uuid());
        assert_eq!(Some("hosts"), r.name());
    }

    #[test]
    fn test_missing_required() {
        let profile = TrustedHostProfile::default();
        assert_eq!(vec!["hosts".to_string(), "name".to_string()], profile.missing_required());
        assert!(!profile.is_complete());
    }
}
