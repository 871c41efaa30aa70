//! Connection settings for a controller session.

use std::time::Duration;

use url::Url;

use crate::error::{AviError, AviResult};

/// API version sent in `X-Avi-Version` unless configured otherwise.
pub const DEFAULT_API_VERSION: &str = "18.2.6";

pub const DEFAULT_TENANT: &str = "admin";

/// How the session authenticates at `/login`.
#[derive(Clone, PartialEq)]
pub enum Credentials {
    Password(String),
    Token(String),
}

// keep secrets out of logs
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::Password(_) => f.write_str("Password(***)"),
            Credentials::Token(_) => f.write_str("Token(***)"),
        }
    }
}

/// Configuration for an [AviSession](crate::AviSession).
///
/// ```
/// use alb_sdk_core::SessionConfig;
/// use std::time::Duration;
///
/// let config = SessionConfig::new("10.10.10.10")
///     .with_username("admin")
///     .with_password("secret")
///     .with_tenant("prod")
///     .with_timeout(Duration::from_secs(30));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Host, `host:port` or full URL of the controller
    pub(crate) controller: String,
    pub(crate) username: String,
    pub(crate) credentials: Option<Credentials>,
    pub(crate) tenant: String,
    pub(crate) version: String,
    /// Skip certificate verification, for controllers with self-signed certificates
    pub(crate) insecure: bool,
    pub(crate) timeout: Duration,
    /// Maximum number of retry attempts for transient errors
    pub(crate) max_retries: u8,
    /// Base delay for exponential backoff
    pub(crate) retry_base_delay: Duration,
    pub(crate) user_agent: String,
}

impl SessionConfig {
    #[must_use]
    pub fn new(controller: impl Into<String>) -> Self {
        Self {
            controller: controller.into(),
            username: "admin".to_string(),
            credentials: None,
            tenant: DEFAULT_TENANT.to_string(),
            version: DEFAULT_API_VERSION.to_string(),
            insecure: false,
            timeout: Duration::from_secs(60),
            max_retries: 5,
            retry_base_delay: Duration::from_millis(500),
            user_agent: concat!("alb-sdk/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Reads the configuration from `ALB_*` environment variables.
    ///
    /// `ALB_CONTROLLER` is mandatory, as is one of `ALB_PASSWORD` and
    /// `ALB_AUTH_TOKEN`. `ALB_USERNAME`, `ALB_TENANT`, `ALB_API_VERSION` and
    /// `ALB_INSECURE` are optional.
    pub fn from_env() -> AviResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AviResult<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let controller = var("ALB_CONTROLLER")
            .ok_or_else(|| AviError::Config("ALB_CONTROLLER is not set".to_string()))?;

        let mut config = Self::new(controller);
        if let Some(username) = var("ALB_USERNAME") {
            config = config.with_username(username);
        }
        if let Some(token) = var("ALB_AUTH_TOKEN") {
            config = config.with_token(token);
        }
        // a password wins over a token when both are given
        if let Some(password) = var("ALB_PASSWORD") {
            config = config.with_password(password);
        }
        if let Some(tenant) = var("ALB_TENANT") {
            config = config.with_tenant(tenant);
        }
        if let Some(version) = var("ALB_API_VERSION") {
            config = config.with_version(version);
        }
        if let Some(insecure) = var("ALB_INSECURE") {
            config = config.with_insecure(matches!(
                insecure.to_ascii_lowercase().as_str(),
                "1" | "true" | "yes"
            ));
        }
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::Password(password.into()));
        self
    }

    /// Authenticate with an auth token instead of a password.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::Token(token.into()));
        self
    }

    /// Tenant sent with every request unless overridden per call.
    ///
    /// Defaults to `admin`. `*` addresses all tenants.
    #[must_use]
    pub fn with_tenant(mut self, tenant: impl Into<String>) -> Self {
        self.tenant = tenant.into();
        self
    }

    /// Defaults to [DEFAULT_API_VERSION].
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    #[must_use]
    pub const fn with_insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }

    /// Defaults to 60 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of retry attempts for transient errors.
    ///
    /// Defaults to 5 retries.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u8) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the base delay for exponential backoff retries.
    ///
    /// Defaults to 500ms.
    #[must_use]
    pub const fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn controller(&self) -> &str {
        &self.controller
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn tenant(&self) -> &str {
        &self.tenant
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Checks that the configuration can be used to log in.
    pub fn validate(&self) -> AviResult<()> {
        if self.controller.trim().is_empty() {
            return Err(AviError::Config("no controller given".to_string()));
        }
        if self.username.is_empty() {
            return Err(AviError::Config("no username given".to_string()));
        }
        if self.credentials.is_none() {
            return Err(AviError::Config(format!(
                "neither password nor auth token given for user '{}'",
                self.username
            )));
        }
        self.base_url().map(|_| ())
    }

    /// Root URL of the controller, always ending in `/`.
    pub fn base_url(&self) -> AviResult<Url> {
        let controller = self.controller.trim();
        let mut url = if controller.contains("://") {
            Url::parse(controller)?
        } else {
            Url::parse(&format!("https://{controller}"))?
        };
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::new("10.10.10.10");
        assert_eq!(config.controller(), "10.10.10.10");
        assert_eq!(config.username(), "admin");
        assert_eq!(config.tenant(), "admin");
        assert_eq!(config.version(), "18.2.6");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.retry_base_delay, Duration::from_millis(500));
        assert!(config.user_agent.starts_with("alb-sdk/"));
        assert!(!config.insecure);
        assert!(config.credentials.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SessionConfig::new("ctrl.example.com")
            .with_username("amko")
            .with_token("token-1")
            .with_tenant("*")
            .with_version("22.1.3")
            .with_insecure(true)
            .with_max_retries(2)
            .with_retry_delay(Duration::from_millis(10))
            .with_user_agent("amko/1.0");

        assert_eq!(config.username(), "amko");
        assert_eq!(config.credentials, Some(Credentials::Token("token-1".to_string())));
        assert_eq!(config.tenant(), "*");
        assert_eq!(config.version(), "22.1.3");
        assert!(config.insecure);
        assert_eq!(config.max_retries, 2);
        assert_eq!(config.user_agent, "amko/1.0");
    }

    #[test]
    fn test_credentials_are_required() {
        let config = SessionConfig::new("10.10.10.10");
        assert!(matches!(config.validate(), Err(AviError::Config(_))));
        assert!(config.with_password("secret").validate().is_ok());
        assert!(
            SessionConfig::new(" ")
                .with_password("secret")
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_credentials_are_not_printed() {
        let config = SessionConfig::new("10.10.10.10").with_password("hunter2");
        assert!(!format!("{config:?}").contains("hunter2"));
    }

    #[test]
    fn test_base_url() {
        let url = |controller: &str| SessionConfig::new(controller).base_url().unwrap().to_string();
        assert_eq!("https://10.10.10.10/", url("10.10.10.10"));
        assert_eq!("https://10.10.10.10:8443/", url("10.10.10.10:8443"));
        assert_eq!("http://127.0.0.1:1234/", url("http://127.0.0.1:1234"));
        assert_eq!("https://lb.example.com/avi/", url("https://lb.example.com/avi"));
    }

    #[test]
    fn test_from_lookup() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("ALB_CONTROLLER", "10.10.10.10"),
            ("ALB_USERNAME", "amko"),
            ("ALB_PASSWORD", "secret"),
            ("ALB_TENANT", "*"),
            ("ALB_API_VERSION", "20.1.1"),
            ("ALB_INSECURE", "True"),
        ]);
        let config = SessionConfig::from_lookup(|k| env.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.controller(), "10.10.10.10");
        assert_eq!(config.username(), "amko");
        assert_eq!(config.credentials, Some(Credentials::Password("secret".to_string())));
        assert_eq!(config.tenant(), "*");
        assert_eq!(config.version(), "20.1.1");
        assert!(config.insecure);
    }

    #[test]
    fn test_from_lookup_errors() {
        let err = SessionConfig::from_lookup(|_| None).unwrap_err();
        assert!(err.to_string().contains("ALB_CONTROLLER"));

        let env = HashMap::from([("ALB_CONTROLLER", "10.10.10.10"), ("ALB_PASSWORD", "")]);
        let err = SessionConfig::from_lookup(|k| env.get(k).map(|v| v.to_string())).unwrap_err();
        assert!(matches!(err, AviError::Config(_)));
    }
}
