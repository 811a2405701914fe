//! HTTP API tests

mod chat_tests;
mod health_tests;
mod message_tests;
mod scenario_tests;
