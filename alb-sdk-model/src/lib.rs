//! Data model of the Avi Controller REST API.
//!
//! Every struct mirrors one object of the controller's swagger schema and
//! (de)serializes to exactly the JSON the controller speaks. Top-level objects
//! that can be addressed under `/api/<type>` additionally implement
//! [AviObject].

// the derive macros refer to this crate by its external name
extern crate self as alb_sdk_model;

pub mod admin;
pub mod analytics;
pub mod application;
pub mod cloud;
pub mod common;
pub mod debug;
pub mod events;
pub mod gslb;
pub mod pool;
pub mod security;
pub mod service_engine;
pub mod virtual_service;

mod object;
mod reference;
mod serde_util;

pub use object::{AviObject, Validate};
pub use reference::{ObjectRef, ParseRefError};

pub use alb_sdk_macro::{AviObject, Validate};
