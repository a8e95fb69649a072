//! Basic logger usage example
//!
//! Demonstrates module-scoped console logging and level filtering.
//!
//! Run with: cargo run --example basic_usage

use applog::prelude::*;
use serde_json::json;
use std::sync::Arc;

fn main() {
    println!("=== applog - Basic Usage Example ===\n");

    // Console-only logger for the auth module
    let platform = Arc::new(FixedPaths::new(
        std::env::temp_dir().join("applog-example"),
        false,
    ));
    let logger = Logger::new(
        "auth",
        LoggerConfig::new().with_level(LogLevel::Debug),
        platform,
    );

    println!("1. Logging at different levels:");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");

    println!("\n2. Logging with structured context:");
    logger.info_with("login ok", json!({ "user": "u1", "attempts": 1 }));

    println!("\n3. Raising the minimum level to WARN:");
    logger.set_level(LogLevel::Warn);
    logger.debug("Debug message (hidden)");
    logger.info("Info message (hidden)");
    logger.warn("Warning message (visible)");

    println!("\n=== Example completed successfully! ===");
}
