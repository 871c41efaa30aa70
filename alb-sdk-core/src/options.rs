use indexmap::IndexMap;

/// Per-request options: object filters, a tenant override and extra query parameters.
///
/// ```
/// use alb_sdk_core::ApiOptions;
///
/// let options = ApiOptions::new()
///     .with_name("vs-1")
///     .with_cloud("Default-Cloud")
///     .with_param("fields", "uuid,name");
/// assert_eq!(
///     "name=vs-1&cloud_ref.name=Default-Cloud&fields=uuid%2Cname",
///     options.query_string()
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiOptions {
    name: Option<String>,
    cloud: Option<String>,
    cloud_uuid: Option<String>,
    tenant: Option<String>,
    skip_default: bool,
    include_name: bool,
    params: IndexMap<String, String>,
}

impl ApiOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Only objects with this name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Only objects in the cloud with this name.
    #[must_use]
    pub fn with_cloud(mut self, cloud: impl Into<String>) -> Self {
        self.cloud = Some(cloud.into());
        self
    }

    #[must_use]
    pub fn with_cloud_uuid(mut self, cloud_uuid: impl Into<String>) -> Self {
        self.cloud_uuid = Some(cloud_uuid.into());
        self
    }

    /// Send this request in the given tenant instead of the session's.
    #[must_use]
    pub fn with_tenant(mut self, tenant: impl Into<String>) -> Self {
        self.tenant = Some(tenant.into());
        self
    }

    /// Leave fields at their default values out of the response.
    #[must_use]
    pub const fn with_skip_default(mut self, skip_default: bool) -> Self {
        self.skip_default = skip_default;
        self
    }

    /// Have the controller append `#<name>` to every reference in the response.
    #[must_use]
    pub const fn with_include_name(mut self, include_name: bool) -> Self {
        self.include_name = include_name;
        self
    }

    /// Adds a query parameter. Setting the same key again replaces its value in place.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn tenant(&self) -> Option<&str> {
        self.tenant.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Query parameters in the order they are sent.
    pub fn query_pairs(&self) -> Vec<(&str, &str)> {
        let mut pairs = Vec::new();
        if let Some(name) = &self.name {
            pairs.push(("name", name.as_str()));
        }
        if let Some(cloud) = &self.cloud {
            pairs.push(("cloud_ref.name", cloud.as_str()));
        }
        if let Some(cloud_uuid) = &self.cloud_uuid {
            pairs.push(("cloud_ref.uuid", cloud_uuid.as_str()));
        }
        if self.skip_default {
            pairs.push(("skip_default", "true"));
        }
        if self.include_name {
            pairs.push(("include_name", "true"));
        }
        pairs.extend(self.params.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        pairs
    }

    /// The query parameters, form-encoded.
    pub fn query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query_pairs())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let options = ApiOptions::new();
        assert!(options.is_empty());
        assert!(options.query_pairs().is_empty());
        assert_eq!("", options.query_string());
        assert!(!options.with_tenant("t1").is_empty());
    }

    #[test]
    fn test_query_order() {
        let options = ApiOptions::new()
            .with_param("page_size", "50")
            .with_include_name(true)
            .with_skip_default(true)
            .with_cloud_uuid("cloud-1")
            .with_name("gslb sm")
            .with_param("fields", "name")
            .with_param("page_size", "100");
        assert_eq!(
            vec![
                ("name", "gslb sm"),
                ("cloud_ref.uuid", "cloud-1"),
                ("skip_default", "true"),
                ("include_name", "true"),
                ("page_size", "100"),
                ("fields", "name"),
            ],
            options.query_pairs()
        );
        assert_eq!(
            "name=gslb+sm&cloud_ref.uuid=cloud-1&skip_default=true&include_name=true&page_size=100&fields=name",
            options.query_string()
        );
    }

    #[test]
    fn test_tenant_is_not_a_query_parameter() {
        let options = ApiOptions::new().with_tenant("*");
        assert_eq!(Some("*"), options.tenant());
        assert!(options.query_pairs().is_empty());
    }
}
