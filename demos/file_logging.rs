//! File logging example
//!
//! Demonstrates registry-managed loggers writing to the shared log file.
//!
//! Run with: cargo run --example file_logging

use applog::prelude::*;
use serde_json::json;
use std::sync::Arc;

fn main() {
    println!("=== applog - File Logging Example ===\n");

    // Writable base directory; a packaged desktop build would use SystemPaths
    let base = std::env::temp_dir().join("applog-example");
    let registry = LoggerRegistry::new(Arc::new(FixedPaths::new(base, true)));

    println!("1. Logging through the default logger:");
    let app = registry.default_logger();
    app.info("Application started");
    app.info("Configuration loaded successfully");
    app.warn("Using default settings for some options");

    println!("\n2. Module loggers share the same log file:");
    let db = registry.module_logger("db");
    let net = registry.module_logger("net");
    db.info("Database connection established");
    net.info_with("request complete", json!({ "status": 200, "ms": 42 }));
    net.error("Failed to load optional plugin");

    println!("\n3. Performing some operations:");
    for i in 1..=5 {
        db.info(format!("Processing item {}/5", i));
        if i == 3 {
            db.warn("Item 3 took longer than expected");
        }
    }

    // Flush buffered lines before exit
    registry.flush_all();

    println!("\n=== Example completed successfully! ===");
    if let Some(path) = app.log_file_path() {
        println!("Check '{}' for the full log output", path.display());
    }
}
