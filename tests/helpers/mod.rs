//! Test helpers module
//!
//! This module provides utilities and helpers for testing the console core.
//! It includes a mock backend server and builders for signed-in clients and
//! sample payloads.

#![allow(dead_code)]

pub mod backend_mock;
pub mod test_data;

pub use backend_mock::*;
pub use test_data::*;
