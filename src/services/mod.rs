//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the behavior behind each page so route handlers can
//! stay focused on protocol translation.

pub mod contact;
