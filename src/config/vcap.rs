//! Cloud Foundry metadata overlay.
//!
//! Cloud Foundry hands a deployed application two JSON environment
//! variables: `VCAP_APPLICATION` (deployment metadata such as the
//! application and space names) and `VCAP_SERVICES` (bound service
//! instances with their credentials). Both are flattened into the
//! configuration map so they resolve like any other key:
//!
//! - `vcap.application.<field>`
//! - `vcap.services.<instance-name>.<field>`
//!
//! Credential entries are additionally lifted to the instance root, so
//! `vcap.services.my-custom-service.username` resolves without the
//! `credentials.` segment.

use std::collections::HashMap;

use super::value::ConfigValue;

const VCAP_APPLICATION_VAR: &str = "VCAP_APPLICATION";
const VCAP_SERVICES_VAR: &str = "VCAP_SERVICES";

/// Overlay VCAP metadata from the process environment, if present.
pub(crate) fn overlay_from_env(values: &mut HashMap<String, ConfigValue>) {
    if let Ok(raw) = std::env::var(VCAP_APPLICATION_VAR) {
        overlay_application(&raw, values);
    }
    if let Ok(raw) = std::env::var(VCAP_SERVICES_VAR) {
        overlay_services(&raw, values);
    }
}

/// Flatten a `VCAP_APPLICATION` payload under `vcap.application.*`.
///
/// Malformed payloads contribute nothing; startup never fails on them.
pub(crate) fn overlay_application(raw: &str, values: &mut HashMap<String, ConfigValue>) {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(serde_json::Value::Object(fields)) => {
            for (key, value) in &fields {
                flatten_json(&format!("vcap.application.{key}"), value, values);
            }
        }
        Ok(_) => tracing::warn!("VCAP_APPLICATION is not a JSON object, ignoring"),
        Err(err) => tracing::warn!(%err, "failed to parse VCAP_APPLICATION, ignoring"),
    }
}

/// Flatten a `VCAP_SERVICES` payload under `vcap.services.<name>.*`.
///
/// The payload maps service labels to arrays of bound instances; instances
/// are keyed by their `name` field. Malformed payloads contribute nothing.
pub(crate) fn overlay_services(raw: &str, values: &mut HashMap<String, ConfigValue>) {
    let parsed: serde_json::Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(err) => {
            tracing::warn!(%err, "failed to parse VCAP_SERVICES, ignoring");
            return;
        }
    };
    let Some(labels) = parsed.as_object() else {
        tracing::warn!("VCAP_SERVICES is not a JSON object, ignoring");
        return;
    };
    for instances in labels.values() {
        let Some(instances) = instances.as_array() else {
            continue;
        };
        for instance in instances {
            let Some(fields) = instance.as_object() else {
                continue;
            };
            let Some(name) = fields.get("name").and_then(|n| n.as_str()) else {
                continue;
            };
            let base = format!("vcap.services.{name}");
            for (field, value) in fields {
                flatten_json(&format!("{base}.{field}"), value, values);
            }
            if let Some(credentials) = fields.get("credentials").and_then(|c| c.as_object()) {
                for (field, value) in credentials {
                    flatten_json(&format!("{base}.{field}"), value, values);
                }
            }
        }
    }
}

fn flatten_json(prefix: &str, value: &serde_json::Value, out: &mut HashMap<String, ConfigValue>) {
    match value {
        serde_json::Value::Object(map) => {
            for (k, v) in map {
                flatten_json(&format!("{prefix}.{k}"), v, out);
            }
        }
        serde_json::Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                flatten_json(&format!("{prefix}.{i}"), item, out);
            }
        }
        leaf => {
            out.insert(prefix.to_string(), ConfigValue::from_json(leaf));
        }
    }
}
