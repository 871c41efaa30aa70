use std::{fmt, str::FromStr};

use lazy_static::lazy_static;
use regex::Regex;
use url::form_urlencoded;

use crate::AviObject;

lazy_static! {
    // [scheme://host]/api/<type>[/<uuid>][?<query>][#<name>]
    static ref REF_PATTERN: Regex = Regex::new(
        r"^(?:https?://[^/]+)?/api/(?P<type>[A-Za-z0-9_-]+)/?(?P<uuid>[^/?#]+)?(?:\?(?P<query>[^#]*))?(?:#(?P<name>.*))?$"
    )
    .unwrap();
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ParseRefError {
    #[error("'{0}' is not an object reference of the form /api/<type>/<uuid>")]
    Malformed(String),
    #[error("object reference '{0}' names neither a uuid nor a name")]
    Unqualified(String),
}

/// Reference from one controller object to another.
///
/// The controller hands out references as
/// `https://<host>/api/<type>/<uuid>#<name>` and accepts them on input either
/// in that form or by name, as `/api/<type>?name=<name>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectRef {
    object_type: String,
    uuid: Option<String>,
    name: Option<String>,
}

impl ObjectRef {
    pub fn by_uuid(object_type: &str, uuid: &str) -> Self {
        Self {
            object_type: object_type.to_string(),
            uuid: Some(uuid.to_string()),
            name: None,
        }
    }

    pub fn by_name(object_type: &str, name: &str) -> Self {
        Self {
            object_type: object_type.to_string(),
            uuid: None,
            name: Some(name.to_string()),
        }
    }

    /// Same reference with the display name set (or cleared, for `None`).
    pub fn with_name(mut self, name: Option<&str>) -> Self {
        self.name = name.map(str::to_string);
        self
    }

    pub fn parse(s: &str) -> Result<Self, ParseRefError> {
        let captures = REF_PATTERN
            .captures(s)
            .ok_or_else(|| ParseRefError::Malformed(s.to_string()))?;
        let group = |name| {
            captures
                .name(name)
                .map(|m| m.as_str())
                .filter(|s| !s.is_empty())
        };

        let object_type = group("type").ok_or_else(|| ParseRefError::Malformed(s.to_string()))?;
        let uuid = group("uuid");
        let name = match group("name") {
            Some(name) => Some(name.to_string()),
            None => group("query").and_then(query_name),
        };
        if uuid.is_none() && name.is_none() {
            return Err(ParseRefError::Unqualified(s.to_string()));
        }

        Ok(Self {
            object_type: object_type.to_string(),
            uuid: uuid.map(str::to_string),
            name,
        })
    }

    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    pub fn uuid(&self) -> Option<&str> {
        self.uuid.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether this reference points at an object of type `T`.
    pub fn refers_to<T: AviObject>(&self) -> bool {
        self.object_type == T::OBJECT_TYPE
    }
}

/// The decoded `name` parameter of a reference's query string.
fn query_name(query: &str) -> Option<String> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "name")
        .map(|(_, value)| value.into_owned())
        .filter(|name| !name.is_empty())
}

impl FromStr for ObjectRef {
    type Err = ParseRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.uuid, &self.name) {
            (Some(uuid), Some(name)) => write!(f, "/api/{}/{uuid}#{name}", self.object_type),
            (Some(uuid), None) => write!(f, "/api/{}/{uuid}", self.object_type),
            (None, Some(name)) => {
                let name: String = form_urlencoded::byte_serialize(name.as_bytes()).collect();
                write!(f, "/api/{}?name={name}", self.object_type)
            }
            (None, None) => write!(f, "/api/{}", self.object_type),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Pool;
    use crate::security::TrustedHostProfile;

    #[test]
    fn test_full_url() {
        let r = ObjectRef::parse(
            "https://10.79.111.29/api/healthmonitor/healthmonitor-dfe63e98-2e8c-41c7-9390-6992ed71106f#System-GSLB-TCP",
        )
        .unwrap();
        assert_eq!("healthmonitor", r.object_type());
        assert_eq!(
            Some("healthmonitor-dfe63e98-2e8c-41c7-9390-6992ed71106f"),
            r.uuid()
        );
        assert_eq!(Some("System-GSLB-TCP"), r.name());
    }

    #[test]
    fn test_path_only() {
        let r: ObjectRef = "/api/pool/pool-1234".parse().unwrap();
        assert_eq!(ObjectRef::by_uuid("pool", "pool-1234"), r);
        assert!(r.refers_to::<Pool>());
        assert!(!r.refers_to::<TrustedHostProfile>());
    }

    #[test]
    fn test_by_name() {
        let r = ObjectRef::parse("/api/tenant?name=admin").unwrap();
        assert_eq!(ObjectRef::by_name("tenant", "admin"), r);
        assert_eq!("/api/tenant?name=admin", r.to_string());

        // trailing slash before the query is tolerated
        let r = ObjectRef::parse("/api/tenant/?name=admin").unwrap();
        assert_eq!(ObjectRef::by_name("tenant", "admin"), r);
    }

    #[test]
    fn test_display_roundtrip() {
        let r = ObjectRef::by_uuid("cloud", "cloud-1").with_name(Some("Default-Cloud"));
        let s = r.to_string();
        assert_eq!("/api/cloud/cloud-1#Default-Cloud", s);
        assert_eq!(r, s.parse().unwrap());
    }

    #[test]
    fn test_by_name_is_encoded() {
        for name in ["a&b", "a#b", "web pool", "50%/x?y=z"] {
            let r = ObjectRef::by_name("pool", name);
            let s = r.to_string();
            assert!(!s.contains(' ') && !s.contains('#'), "{s}");
            assert_eq!(r, s.parse().unwrap(), "{s}");
        }
        assert_eq!("/api/pool?name=a%26b", ObjectRef::by_name("pool", "a&b").to_string());

        // other query parameters are skipped
        let r = ObjectRef::parse("/api/pool?tenant=admin&name=web+pool").unwrap();
        assert_eq!(Some("web pool"), r.name());
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            Err(ParseRefError::Malformed("pool-1234".to_string())),
            ObjectRef::parse("pool-1234")
        );
        assert_eq!(
            Err(ParseRefError::Unqualified("/api/pool".to_string())),
            ObjectRef::parse("/api/pool")
        );
    }
}
