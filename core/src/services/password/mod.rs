//! Password hashing service
//!
//! One-way salted hashing of account passwords with bcrypt. Hashing runs on
//! the blocking thread pool so request workers are never stalled by the
//! work factor.

mod service;

pub use service::PasswordService;
