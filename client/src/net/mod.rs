//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single `POST /query` exchange with the advisor backend.
//! The wire schema itself lives in `advisor::wire`.

pub mod api;
