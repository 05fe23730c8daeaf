//! Core components of the `fin-summary` crate.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The [`FsClient`] and its builder, which carry every piece of request configuration.
//! - The primary [`FsError`] type.
//! - Shared data models like [`EntityCode`], [`AuthTokens`] and [`Frequency`].

/// The client (`FsClient`), builder, and configuration.
pub mod client;
/// The primary error type (`FsError`) for the crate.
pub mod error;
/// Shared data models used across the pipeline.
pub mod models;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::FsClient`
pub use client::{FsClient, FsClientBuilder};
pub use error::{FsError, Stage};
pub use models::{AuthTokens, EntityCode, Frequency};
