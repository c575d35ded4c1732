//! Integration test harness
//!
//! `api_tests` run against a live server and `repository_tests` against
//! the development database; both are ignored by default.
//! `router_tests` drive the router in-process and always run.

mod api_tests;
mod repository_tests;
mod router_tests;
