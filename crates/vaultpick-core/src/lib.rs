//! Vaultpick Core Library
//!
//! Sampling, folder exclusion and orphan detection for markdown note vaults.

pub mod config;
pub mod eligibility;
pub mod error;
pub mod format;
pub mod inspector;
pub mod logging;
pub mod orphan;
pub mod sampler;
pub mod state;
pub mod vault;
