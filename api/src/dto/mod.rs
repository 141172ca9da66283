//! Data transfer objects for the HTTP surface

pub mod auth;

pub use auth::{
    length_violation, CustomerSignupRequest, ProfileResponse, ServiceProviderSignupRequest,
    SigninRequest, SigninResponse,
};
pub use prown_shared::{ErrorResponse, MessageResponse};
