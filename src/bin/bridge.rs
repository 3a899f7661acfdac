//! Single-shot bridge: one JSON request on stdin, one JSON response on
//! stdout. Exit 1 only for missing/invalid input or a failed initialization;
//! logical failures ride inside the response body with exit 0.

use std::io::Read;

use serde_json::{json, Value};

use yieldbridge::bridge::Bridge;
use yieldbridge::state::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cfg = Config::from_env();
    let mut bridge = Bridge::new(&cfg);

    if let Err(err) = bridge.initialize() {
        println!("{}", json!({"success": false, "error": err.to_string()}));
        std::process::exit(1);
    }

    let mut input = String::new();
    if let Err(err) = std::io::stdin().read_to_string(&mut input) {
        println!(
            "{}",
            json!({"success": false, "error": format!("Failed to read stdin: {}", err)})
        );
        std::process::exit(1);
    }
    let input = input.trim();
    if input.is_empty() {
        println!("{}", json!({"success": false, "error": "No input provided"}));
        std::process::exit(1);
    }

    let request: Value = match serde_json::from_str(input) {
        Ok(value) => value,
        Err(err) => {
            println!(
                "{}",
                json!({"success": false, "error": format!("Invalid JSON: {}", err)})
            );
            std::process::exit(1);
        }
    };

    let response = bridge.process(&request).await;
    println!("{}", response);
}
