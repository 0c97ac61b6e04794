//! Networking modules for the backend and the hosted auth provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` speaks the backend's three dashboard operations; `auth` speaks
//! the hosted auth provider. Both are thin request/response glue: no
//! retries, no caching, no cancellation.

pub mod api;
pub mod auth;
