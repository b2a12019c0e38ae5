// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod config;
pub mod error;

pub use config::{Cluster, Config, Content, Context, User};
pub use error::{KubeconfigError, Result};
