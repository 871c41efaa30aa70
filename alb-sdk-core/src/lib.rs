//! Session handling and typed CRUD clients for the Avi Controller REST API.
//!
//! An [AviSession] logs in, keeps the CSRF token and session cookies, and
//! retries requests the controller could not serve. [AviClient] hands out a
//! [ResourceClient] per object type on top of a shared session.

mod client;
mod config;
mod error;
mod options;
mod session;
mod transport;

pub use client::{AviClient, ResourceClient};
pub use config::{Credentials, DEFAULT_API_VERSION, DEFAULT_TENANT, SessionConfig};
pub use error::{AviError, AviResult};
pub use options::ApiOptions;
pub use session::{AviSession, PatchOp};
pub use transport::{ReqwestTransport, Transport};
