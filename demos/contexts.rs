// SPDX-License-Identifier: MIT OR Apache-2.0

//! Example demonstrating kubeconfig parsing
//!
//! This example shows how to:
//! - Load and parse ~/.kube/config
//! - List available contexts
//! - Check which credential material each user carries

use kubeconfig_rs::Config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    println!("=== Kubeconfig Parsing Example ===\n");

    let config = Config::load_default()?;

    println!("=== Available Contexts ===");
    for name in config.context_names() {
        println!("  - {}", name);
        if let Some(ctx) = config.get_context(name) {
            println!("    Cluster:   {:?}", ctx.cluster);
            println!("    Namespace: {:?}", ctx.namespace);
            println!("    User:      {:?}", ctx.user);
        }
    }

    println!("\n=== Users ===");
    for (name, user) in &config.users {
        println!("  - {}", name);
        println!("    Has client cert: {}", user.client_certificate.is_some());
        println!("    Has client key:  {}", user.client_key.is_some());
        println!("    Has token:       {}", user.token.is_some());
    }

    println!("\n=== Clusters ===");
    for (name, cluster) in &config.clusters {
        println!("  - {}", name);
        println!("    Server: {:?}", cluster.server);
        if let Some(url) = cluster.server_url() {
            println!("    Host:   {:?}", url.host_str());
        }
        println!("    Has CA: {}", cluster.certificate_authority.is_some());
    }

    Ok(())
}
