// SPDX-License-Identifier: MIT OR Apache-2.0

//! Example demonstrating how to load a kubeconfig and inspect the current
//! context's cluster.

use kubeconfig_rs::Config;

fn main() {
    match Config::load_default() {
        Ok(config) => {
            println!("✓ Loaded kubeconfig");

            match &config.current_context {
                Some(name) => {
                    println!("  Current context: {}", name);

                    if let Some(ctx) = config.active_context() {
                        if let Some(cluster_name) = &ctx.cluster {
                            match config.get_cluster(cluster_name) {
                                Some(cluster) => println!("{:#?}", cluster),
                                None => println!("  Cluster '{}' not found", cluster_name),
                            }
                        }
                    } else {
                        println!("  Context '{}' not found", name);
                    }
                }
                None => println!("  No current context set"),
            }
        }
        Err(e) => {
            println!("✗ Failed to load kubeconfig: {}", e);
            println!("\nNote: This example requires a valid config at ~/.kube/config.");
        }
    }
}
