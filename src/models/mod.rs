//! Request values built from inbound HTTP requests.
//!
//! - `request`: ContributorRequest, the value the router hands to the handler

pub mod request;

pub use request::ContributorRequest;
