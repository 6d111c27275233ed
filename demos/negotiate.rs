//! New Session negotiation demonstration.
//!
//! Demonstrates:
//! - Building implementation capabilities
//! - Processing a New Session request from JSON text
//! - Rendering the success or error response body
//!
//! Usage:
//!   cargo run --example negotiate
//!   cargo run --example negotiate -- '{"capabilities": {"alwaysMatch": {"browserName": "chrome"}}}'
//!   cargo run --example negotiate -- --debug

// ============================================================================
// Imports
// ============================================================================

use serde_json::Value;
use tracing_subscriber::EnvFilter;

use webdriver_capabilities::{ImplementationCapabilities, Negotiator};

// ============================================================================
// Constants
// ============================================================================

const DEFAULT_REQUEST: &str = r#"{
    "capabilities": {
        "alwaysMatch": {"acceptInsecureCerts": true, "timeouts": {"implicit": 250}},
        "firstMatch": [{"browserName": "chrome"}, {"browserName": "ladybird"}]
    }
}"#;

// ============================================================================
// Main
// ============================================================================

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let debug = args.iter().any(|a| a == "--debug");
    init_logging(debug);

    let request = args
        .iter()
        .find(|a| !a.starts_with("--"))
        .map_or(DEFAULT_REQUEST, String::as_str);

    if let Err(e) = run(request) {
        eprintln!("\n[ERROR] {e}");
        std::process::exit(1);
    }
}

fn run(request: &str) -> anyhow::Result<()> {
    println!("=== New Session Negotiation ===\n");

    let negotiator = Negotiator::new(
        ImplementationCapabilities::builder()
            .browser_name("ladybird")
            .browser_version("1.0")
            .build()?,
    );
    println!("[1] Endpoint: {negotiator:?}");

    let parameters: Value = serde_json::from_str(request)?;
    println!("[2] Request:\n{}", serde_json::to_string_pretty(&parameters)?);

    let body = match negotiator.respond(&parameters, "demo-session") {
        Ok(response) => response.to_value()?,
        Err(response) => {
            println!("[3] Status: {}", response.value.http_status());
            serde_json::to_value(&response)?
        }
    };
    println!("[3] Response:\n{}", serde_json::to_string_pretty(&body)?);

    Ok(())
}

/// Initialize tracing/logging.
fn init_logging(debug: bool) {
    let filter = if debug {
        "webdriver_capabilities=trace"
    } else {
        "webdriver_capabilities=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();
}
