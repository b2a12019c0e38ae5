// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed records for the entities named in a kubeconfig document.
//!
//! All three types are immutable value objects: they are constructed once
//! (by the loader or programmatically) and carry no behavior beyond
//! construction, structural equality, and debug formatting. Fields absent
//! in the source document stay `None`; no placeholder values are
//! substituted.

use url::Url;

use crate::config::content::Content;

/// A named pairing of cluster, namespace, and user identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    /// The name of a cluster.
    pub cluster: Option<String>,
    /// The name of a namespace.
    pub namespace: Option<String>,
    /// The name of a user.
    pub user: Option<String>,
}

impl Context {
    /// Create a new context.
    #[must_use]
    pub fn new(
        cluster: Option<String>,
        namespace: Option<String>,
        user: Option<String>,
    ) -> Context {
        Context {
            cluster,
            namespace,
            user,
        }
    }
}

/// Describes how to reach and trust one cluster endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cluster {
    /// The cluster's supported api version.
    pub api_version: Option<String>,
    /// The server URI.
    pub server: Option<String>,
    /// Predicate used to determine if a client should skip TLS verification.
    /// Left optional here; the connection layer decides the default.
    pub insecure_skip_tls_verify: Option<bool>,
    /// Content used by a client to certify the server is authentic.
    pub certificate_authority: Option<Content>,
}

impl Cluster {
    /// Create a new cluster description.
    ///
    /// Absent fields stay absent; no placeholder values are substituted.
    #[must_use]
    pub fn new(
        api_version: Option<String>,
        server: Option<String>,
        insecure_skip_tls_verify: Option<bool>,
        certificate_authority: Option<Content>,
    ) -> Cluster {
        Cluster {
            api_version,
            server,
            insecure_skip_tls_verify,
            certificate_authority,
        }
    }

    /// Parse the `server` field as a URL.
    ///
    /// Returns `None` when the field is absent or not a valid URL.
    #[must_use]
    pub fn server_url(&self) -> Option<Url> {
        self.server.as_deref().and_then(|s| Url::parse(s).ok())
    }
}

/// One identity's credential material for authenticating to a cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Client certificate, inline or on disk.
    pub client_certificate: Option<Content>,
    /// Client private key, inline or on disk.
    pub client_key: Option<Content>,
    /// Bearer token.
    pub token: Option<String>,
    /// Basic-auth username.
    pub username: Option<String>,
    /// Basic-auth password.
    pub password: Option<String>,
}

impl User {
    /// Create a new user credential record.
    #[must_use]
    pub fn new(
        client_certificate: Option<Content>,
        client_key: Option<Content>,
        token: Option<String>,
        username: Option<String>,
        password: Option<String>,
    ) -> User {
        User {
            client_certificate,
            client_key,
            token,
            username,
            password,
        }
    }
}
