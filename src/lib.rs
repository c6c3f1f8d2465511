#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod resolver;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client and the port trait the resolver consumes
pub use client::{DefaultWorkspaceClient, WorkspaceApi, WorkspaceClient};

// Configuration
pub use config::ClientConfig;

// Errors
pub use error::{ApiError, ApiResult, ResolveError, ResolveResult};

// Workspace snapshot types
pub use models::{DEV_SERVER_TYPE, Machine, Runtime, SERVER_TYPE_ATTRIBUTE, Server, Workspace};

// Resolver
pub use resolver::{DefaultUriResolver, UriResolver};

// Silence unused dev-dependency warnings
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use tokio_test as _;
