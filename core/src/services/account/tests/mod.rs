//! Tests for account service

mod mocks;
