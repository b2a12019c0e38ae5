// SPDX-License-Identifier: MIT OR Apache-2.0

//! Kubeconfig loading and resolution
//!
//! This module provides the typed view of a kubeconfig document: named
//! clusters, named user credentials, and named contexts pairing the two,
//! with content fields (certificate material) resolvable from inline data
//! or from a file on disk.
//!
//! # Example
//!
//! ```no_run
//! use kubeconfig_rs::Config;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::load_default()?;
//!
//! if let Some(ctx) = config.active_context() {
//!     println!("Using cluster: {:?}", ctx.cluster);
//! }
//! # Ok(())
//! # }
//! ```

mod content;
mod entities;
mod kubeconfig;

pub use content::Content;
pub use entities::{Cluster, Context, User};
pub use kubeconfig::Config;
