//! Rust SDK for the Avi Controller (VMware NSX Advanced Load Balancer) REST API.
//!
//! ```no_run
//! use alb_sdk::{ApiOptions, AviClient, SessionConfig, models::security::TrustedHostProfile};
//!
//! # async fn run() -> alb_sdk::AviResult<()> {
//! let client = AviClient::connect(
//!     SessionConfig::new("10.10.10.10")
//!         .with_username("admin")
//!         .with_password("secret"),
//! )
//! .await?;
//! let profile: TrustedHostProfile = client
//!     .trusted_host_profile()
//!     .get_by_name("controllers", &ApiOptions::default())
//!     .await?;
//! println!("{:?}", profile.hosts);
//! # Ok(())
//! # }
//! ```

pub use alb_sdk_core::*;

/// The object model, one module per area of the controller.
pub mod models {
    pub use alb_sdk_model::{
        admin, analytics, application, cloud, common, debug, events, gslb, pool, security,
        service_engine, virtual_service,
    };
}

pub use alb_sdk_model::{AviObject, ObjectRef, ParseRefError, Validate};

#[cfg(test)]
mod tests {
    use super::*;
    use models::security::TrustedHostProfile;
    use test_log::test;

    #[test]
    fn test_reexports() {
        assert_eq!("18.2.6", DEFAULT_API_VERSION);
        assert_eq!("trustedhostprofile", TrustedHostProfile::OBJECT_TYPE);

        let profile: TrustedHostProfile = serde_json::from_value(serde_json::json!({
            "name": "controllers",
            "uuid": "trustedhostprofile-1",
        }))
        .unwrap();
        assert_eq!(
            "/api/trustedhostprofile/trustedhostprofile-1#controllers",
            profile.object_ref().unwrap().to_string()
        );
        assert_eq!(vec!["hosts".to_string()], profile.missing_required());
    }
}
