//! Integration tests against a running server
//!
//! These need the server and its database. Run with: cargo test -- --ignored

mod api_tests;
