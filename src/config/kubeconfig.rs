// SPDX-License-Identifier: MIT OR Apache-2.0

//! Kubeconfig file parser
//!
//! This module provides functionality to parse the kubectl config file
//! (typically `~/.kube/config`) which describes named clusters, named user
//! credentials, and named contexts pairing the two.
//!
//! # Example
//!
//! ```no_run
//! use kubeconfig_rs::Config;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load from default location (~/.kube/config)
//! let config = Config::load_default()?;
//!
//! // Get the selected context
//! if let Some(name) = &config.current_context {
//!     if let Some(ctx) = config.contexts.get(name) {
//!         println!("Cluster: {:?}", ctx.cluster);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::content::Content;
use crate::config::entities::{Cluster, Context, User};
use crate::error::{KubeconfigError, Result};

/// The merged, typed view of one kubeconfig document.
///
/// `current_context`, when present, is a name callers may look up in
/// [`contexts`](Config::contexts); the loader does not require it to exist.
/// A dangling reference loads fine, and lookup failure is the caller's
/// concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Map of cluster names to cluster descriptions.
    pub clusters: HashMap<String, Cluster>,

    /// Map of context names to contexts.
    pub contexts: HashMap<String, Context>,

    /// Map of user names to credential material.
    pub users: HashMap<String, User>,

    /// The currently selected context name, if any.
    pub current_context: Option<String>,
}

impl Config {
    /// Load configuration from the default location (`~/.kube/config`).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The home directory cannot be determined
    /// - The config file cannot be read
    /// - The config file is malformed
    pub fn load_default() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the kubeconfig file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The file is malformed YAML
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!(
            target: "kubeconfig::load",
            "loading kubeconfig from {}",
            path.as_ref().display()
        );
        let content = fs::read_to_string(path.as_ref())?;
        Self::load_from_string(&content)
    }

    /// Parse configuration from a YAML string.
    ///
    /// Each top-level list of named cluster/context/user entries becomes a
    /// mapping from name to entity. Duplicate names: the last entry wins.
    /// Omitted sections yield empty maps; an omitted `current-context`
    /// yields `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or does not match the
    /// expected document shape.
    pub fn load_from_string(raw: &str) -> Result<Self> {
        let doc: RawConfig = serde_yaml::from_str(raw).map_err(KubeconfigError::Yaml)?;
        Ok(Self::from_raw(doc))
    }

    /// Get the default config file path (`~/.kube/config`).
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(KubeconfigError::Homeless)?;

        Ok(home.join(".kube").join("config"))
    }

    /// Get the currently selected context.
    ///
    /// # Returns
    ///
    /// Returns `None` if no current context is set or if the named context
    /// doesn't exist.
    pub fn active_context(&self) -> Option<&Context> {
        self.current_context
            .as_ref()
            .and_then(|name| self.contexts.get(name))
    }

    /// Get a context by name.
    pub fn get_context(&self, name: &str) -> Option<&Context> {
        self.contexts.get(name)
    }

    /// Get a cluster by name.
    pub fn get_cluster(&self, name: &str) -> Option<&Cluster> {
        self.clusters.get(name)
    }

    /// Get a user by name.
    pub fn get_user(&self, name: &str) -> Option<&User> {
        self.users.get(name)
    }

    /// List all available context names.
    pub fn context_names(&self) -> Vec<&String> {
        self.contexts.keys().collect()
    }

    fn from_raw(doc: RawConfig) -> Self {
        let mut clusters = HashMap::new();
        for entry in doc.clusters {
            // Duplicate names: last entry wins.
            clusters.insert(entry.name, entry.cluster.into_cluster());
        }

        let mut contexts = HashMap::new();
        for entry in doc.contexts {
            contexts.insert(entry.name, entry.context.into_context());
        }

        let mut users = HashMap::new();
        for entry in doc.users {
            users.insert(entry.name, entry.user.into_user());
        }

        debug!(
            target: "kubeconfig::load",
            "parsed {} clusters, {} contexts, {} users",
            clusters.len(),
            contexts.len(),
            users.len()
        );

        Config {
            clusters,
            contexts,
            users,
            current_context: doc.current_context,
        }
    }
}

/// On-disk document shape. Unknown fields (`apiVersion`, `kind`,
/// `preferences`) are ignored; named entry lists are converted into maps
/// during load.
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(rename = "current-context")]
    current_context: Option<String>,

    #[serde(default)]
    clusters: Vec<NamedCluster>,

    #[serde(default)]
    contexts: Vec<NamedContext>,

    #[serde(default)]
    users: Vec<NamedUser>,
}

#[derive(Debug, Deserialize)]
struct NamedCluster {
    name: String,
    #[serde(default)]
    cluster: RawCluster,
}

#[derive(Debug, Default, Deserialize)]
struct RawCluster {
    #[serde(rename = "api-version")]
    api_version: Option<String>,

    server: Option<String>,

    #[serde(rename = "insecure-skip-tls-verify")]
    insecure_skip_tls_verify: Option<bool>,

    #[serde(rename = "certificate-authority")]
    certificate_authority: Option<String>,

    #[serde(rename = "certificate-authority-data")]
    certificate_authority_data: Option<String>,
}

impl RawCluster {
    fn into_cluster(self) -> Cluster {
        Cluster::new(
            self.api_version,
            self.server,
            self.insecure_skip_tls_verify,
            content_of(self.certificate_authority_data, self.certificate_authority),
        )
    }
}

#[derive(Debug, Deserialize)]
struct NamedContext {
    name: String,
    #[serde(default)]
    context: RawContext,
}

#[derive(Debug, Default, Deserialize)]
struct RawContext {
    cluster: Option<String>,
    namespace: Option<String>,
    user: Option<String>,
}

impl RawContext {
    fn into_context(self) -> Context {
        Context::new(self.cluster, self.namespace, self.user)
    }
}

#[derive(Debug, Deserialize)]
struct NamedUser {
    name: String,
    #[serde(default)]
    user: RawUser,
}

#[derive(Debug, Default, Deserialize)]
struct RawUser {
    #[serde(rename = "client-certificate")]
    client_certificate: Option<String>,

    #[serde(rename = "client-certificate-data")]
    client_certificate_data: Option<String>,

    #[serde(rename = "client-key")]
    client_key: Option<String>,

    #[serde(rename = "client-key-data")]
    client_key_data: Option<String>,

    token: Option<String>,

    username: Option<String>,

    password: Option<String>,
}

impl RawUser {
    fn into_user(self) -> User {
        User::new(
            content_of(self.client_certificate_data, self.client_certificate),
            content_of(self.client_key_data, self.client_key),
            self.token,
            self.username,
            self.password,
        )
    }
}

/// Inline data wins over a path reference when both are present.
fn content_of(data: Option<String>, path: Option<String>) -> Option<Content> {
    data.map(Content::Data).or_else(|| path.map(Content::Path))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CONFIG: &str = r#"
current-context: federal-context
apiVersion: v1
clusters:
- cluster:
    api-version: v1
    server: http://cow.org:8080
  name: cow-cluster
- cluster:
    certificate-authority: path/to/my/cafile
    server: https://horse.org:4443
  name: horse-cluster
- cluster:
    insecure-skip-tls-verify: true
    server: https://pig.org:443
  name: pig-cluster
contexts:
- context:
    cluster: horse-cluster
    namespace: chisel-ns
    user: green-user
  name: federal-context
- context:
    cluster: pig-cluster
    namespace: saw-ns
    user: black-user
  name: queen-anne-context
kind: Config
preferences:
  colors: true
users:
- name: blue-user
  user:
    token: blue-token
- name: green-user
  user:
    client-certificate: path/to/my/client/cert
    client-key: path/to/my/client/key
"#;

    #[test]
    fn test_parse_basic_config() {
        let config = Config::load_from_string(SAMPLE_CONFIG).unwrap();

        assert_eq!(config.current_context, Some("federal-context".to_string()));
        assert_eq!(config.clusters.len(), 3);
        assert_eq!(config.contexts.len(), 2);
        assert_eq!(config.users.len(), 2);
    }

    #[test]
    fn test_active_context() {
        let config = Config::load_from_string(SAMPLE_CONFIG).unwrap();

        let active = config.active_context().unwrap();
        assert_eq!(active.cluster.as_deref(), Some("horse-cluster"));
        assert_eq!(active.namespace.as_deref(), Some("chisel-ns"));
        assert_eq!(active.user.as_deref(), Some("green-user"));
    }

    #[test]
    fn test_get_cluster() {
        let config = Config::load_from_string(SAMPLE_CONFIG).unwrap();

        let horse = config.get_cluster("horse-cluster").unwrap();
        assert_eq!(horse.server.as_deref(), Some("https://horse.org:4443"));
        assert_eq!(
            horse.certificate_authority,
            Some(Content::Path("path/to/my/cafile".to_string()))
        );
        assert_eq!(horse.api_version, None);
        assert_eq!(horse.insecure_skip_tls_verify, None);

        let cow = config.get_cluster("cow-cluster").unwrap();
        assert_eq!(cow.api_version.as_deref(), Some("v1"));

        let pig = config.get_cluster("pig-cluster").unwrap();
        assert_eq!(pig.insecure_skip_tls_verify, Some(true));
    }

    #[test]
    fn test_get_user() {
        let config = Config::load_from_string(SAMPLE_CONFIG).unwrap();

        let blue = config.get_user("blue-user").unwrap();
        assert_eq!(blue.token.as_deref(), Some("blue-token"));
        assert_eq!(blue.client_certificate, None);

        let green = config.get_user("green-user").unwrap();
        assert_eq!(
            green.client_certificate,
            Some(Content::Path("path/to/my/client/cert".to_string()))
        );
        assert_eq!(
            green.client_key,
            Some(Content::Path("path/to/my/client/key".to_string()))
        );
        assert_eq!(green.token, None);
    }

    #[test]
    fn test_context_names() {
        let config = Config::load_from_string(SAMPLE_CONFIG).unwrap();

        let mut names = config.context_names();
        names.sort();

        assert_eq!(names, vec!["federal-context", "queen-anne-context"]);
    }

    #[test]
    fn test_inline_data_wins_over_path() {
        let yaml = r#"
clusters:
- cluster:
    certificate-authority: path/to/my/cafile
    certificate-authority-data: aW5saW5lLWNh
  name: both
users:
- name: both-user
  user:
    client-certificate: path/to/cert
    client-certificate-data: aW5saW5lLWNlcnQ=
"#;

        let config = Config::load_from_string(yaml).unwrap();
        assert_eq!(
            config.get_cluster("both").unwrap().certificate_authority,
            Some(Content::Data("aW5saW5lLWNh".to_string()))
        );
        assert_eq!(
            config.get_user("both-user").unwrap().client_certificate,
            Some(Content::Data("aW5saW5lLWNlcnQ=".to_string()))
        );
    }

    #[test]
    fn test_duplicate_names_last_wins() {
        let yaml = r#"
clusters:
- cluster:
    server: http://first.org:8080
  name: prod
- cluster:
    server: http://second.org:8080
  name: prod
"#;

        let config = Config::load_from_string(yaml).unwrap();
        assert_eq!(config.clusters.len(), 1);
        assert_eq!(
            config.get_cluster("prod").unwrap().server.as_deref(),
            Some("http://second.org:8080")
        );
    }

    #[test]
    fn test_multiple_clusters() {
        let yaml = r#"
clusters:
- cluster:
    server: https://prod.example.org:6443
  name: prod
- cluster:
    server: https://staging.example.org:6443
  name: staging
"#;

        let config = Config::load_from_string(yaml).unwrap();
        let mut names: Vec<&String> = config.clusters.keys().collect();
        names.sort();

        assert_eq!(names, vec!["prod", "staging"]);
        assert_eq!(
            config.get_cluster("staging").unwrap().server.as_deref(),
            Some("https://staging.example.org:6443")
        );
    }

    #[test]
    fn test_missing_current_context() {
        let yaml = r#"
clusters:
- cluster:
    server: http://cow.org:8080
  name: cow-cluster
"#;

        let config = Config::load_from_string(yaml).unwrap();
        assert_eq!(config.current_context, None);
        assert_eq!(config.active_context(), None);
    }

    #[test]
    fn test_dangling_current_context() {
        let yaml = r#"
current-context: ghost-context
contexts:
- context:
    cluster: cow-cluster
  name: real-context
"#;

        // A dangling reference is a valid parse result; lookup failure is
        // the caller's responsibility.
        let config = Config::load_from_string(yaml).unwrap();
        assert_eq!(config.current_context, Some("ghost-context".to_string()));
        assert_eq!(config.active_context(), None);
    }

    #[test]
    fn test_empty_document() {
        let config = Config::load_from_string("{}").unwrap();

        assert!(config.clusters.is_empty());
        assert!(config.contexts.is_empty());
        assert!(config.users.is_empty());
        assert_eq!(config.current_context, None);
    }

    #[test]
    fn test_malformed_yaml() {
        let err = Config::load_from_string("not: [valid, yaml: structure").unwrap_err();
        assert!(matches!(err, KubeconfigError::Yaml(_)));
    }

    #[test]
    fn test_wrong_shape_is_yaml_error() {
        // `clusters` must be a sequence, not a scalar.
        let err = Config::load_from_string("clusters: 42").unwrap_err();
        assert!(matches!(err, KubeconfigError::Yaml(_)));
    }

    #[test]
    fn test_loaded_config_equals_constructed_config() {
        let yaml = r#"
current-context: minimal
clusters:
- cluster:
    server: https://horse.org:4443
    certificate-authority-data: Y2EtZGF0YQ==
  name: horse-cluster
contexts:
- context:
    cluster: horse-cluster
    user: green-user
  name: minimal
users:
- name: green-user
  user:
    username: green
    password: grass
"#;

        let loaded = Config::load_from_string(yaml).unwrap();

        let mut clusters = HashMap::new();
        clusters.insert(
            "horse-cluster".to_string(),
            Cluster::new(
                None,
                Some("https://horse.org:4443".to_string()),
                None,
                Some(Content::Data("Y2EtZGF0YQ==".to_string())),
            ),
        );

        let mut contexts = HashMap::new();
        contexts.insert(
            "minimal".to_string(),
            Context::new(Some("horse-cluster".to_string()), None, Some("green-user".to_string())),
        );

        let mut users = HashMap::new();
        users.insert(
            "green-user".to_string(),
            User::new(
                None,
                None,
                None,
                Some("green".to_string()),
                Some("grass".to_string()),
            ),
        );

        let expected = Config {
            clusters,
            contexts,
            users,
            current_context: Some("minimal".to_string()),
        };

        assert_eq!(loaded, expected);
    }
}
