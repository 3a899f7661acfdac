//! Single-shot request bridge: validate, sanitize, dispatch.
//!
//! Each process serves exactly one request. Validation failures are answered
//! in the response body and never reach dispatch; dispatch failures are
//! counted against the health threshold and converted into failure envelopes.
//! After initialization succeeds, no path escapes as a crash.

use serde_json::{json, Map, Value};

use crate::error::BridgeError;
use crate::logging::{self, obj, v_num, v_str, Domain, Level};
use crate::ops::Operation;
use crate::sanitize::sanitize_value;
use crate::state::Config;

/// Outcome of shape-checking a raw request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Shape-check a raw request before any domain logic runs.
///
/// A non-object input short-circuits; otherwise every violation is collected
/// so the caller sees the full list in one pass.
pub fn validate_request(data: &Value) -> ValidationReport {
    let Some(map) = data.as_object() else {
        return ValidationReport {
            valid: false,
            errors: vec!["Input must be a dictionary".to_string()],
        };
    };

    let mut errors = Vec::new();

    match map.get("operation") {
        None => errors.push("Operation is required".to_string()),
        Some(Value::String(op)) => {
            if Operation::parse(op).is_none() {
                errors.push("Invalid operation type".to_string());
            }
        }
        Some(_) => errors.push("Operation must be a string".to_string()),
    }

    if let Some(params) = map.get("params") {
        if !params.is_object() {
            errors.push("Parameters must be a dictionary".to_string());
        }
    }

    ValidationReport { valid: errors.is_empty(), errors }
}

/// A validated, sanitized request in tagged form. Raw JSON never travels past
/// this point.
#[derive(Debug, Clone)]
pub struct Request {
    pub operation: Operation,
    pub params: Map<String, Value>,
}

impl Request {
    pub fn decode(data: &Value) -> Result<Self, BridgeError> {
        let map = data.as_object().ok_or(BridgeError::NotAnObject)?;
        let op = map
            .get("operation")
            .and_then(Value::as_str)
            .ok_or(BridgeError::MissingOperation)?;
        let operation =
            Operation::parse(op).ok_or_else(|| BridgeError::UnknownOperation(op.to_string()))?;
        let params = map
            .get("params")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();
        Ok(Self { operation, params })
    }
}

/// Process-wide bridge state: one per invocation, passed explicitly, never a
/// hidden singleton. `error_count` only grows within a process lifetime.
pub struct Bridge {
    initialized: bool,
    error_count: u32,
    max_errors: u32,
}

impl Bridge {
    pub fn new(cfg: &Config) -> Self {
        Self {
            initialized: false,
            error_count: 0,
            max_errors: cfg.max_errors,
        }
    }

    pub fn initialize(&mut self) -> Result<(), BridgeError> {
        self.initialized = true;
        logging::log(Level::Info, Domain::Bridge, "initialized", obj(&[]));
        Ok(())
    }

    /// Validate -> sanitize -> dispatch. Always returns a response envelope.
    pub async fn process(&mut self, data: &Value) -> Value {
        let report = validate_request(data);
        if !report.valid {
            logging::log(
                Level::Warn,
                Domain::Bridge,
                "validation_failed",
                obj(&[("errors", json!(report.errors.clone()))]),
            );
            return json!({
                "success": false,
                "error": "Validation failed",
                "details": report.errors,
            });
        }

        let sanitized = sanitize_value(data.clone());
        let request = match Request::decode(&sanitized) {
            Ok(req) => req,
            Err(err) => return self.failure_response(err),
        };

        logging::log(
            Level::Debug,
            Domain::Bridge,
            "dispatch",
            obj(&[
                ("operation", v_str(request.operation.as_str())),
                ("param_count", v_num(request.params.len() as f64)),
            ]),
        );

        match request.operation.run(&request.params).await {
            Ok(data) => json!({ "success": true, "data": data }),
            Err(err) => self.failure_response(err),
        }
    }

    /// Count a dispatch failure and wrap it in a failure envelope.
    fn failure_response(&mut self, err: BridgeError) -> Value {
        self.error_count = self.error_count.saturating_add(1);
        logging::log(
            Level::Error,
            Domain::Bridge,
            "request_failed",
            obj(&[
                ("error", v_str(&err.to_string())),
                ("error_count", v_num(self.error_count as f64)),
            ]),
        );
        json!({
            "success": false,
            "error": err.to_string(),
            "timestamp": logging::ts_now(),
        })
    }

    /// No-op safeguard: nothing acts on `healthy` yet, it is only reported.
    pub fn health_status(&self) -> Value {
        json!({
            "initialized": self.initialized,
            "error_count": self.error_count,
            "max_errors": self.max_errors,
            "healthy": self.error_count < self.max_errors,
            "timestamp": logging::ts_now(),
        })
    }

    pub fn error_count(&self) -> u32 {
        self.error_count
    }
}
