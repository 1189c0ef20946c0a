//! Field-by-field recovery of scan reports that fail strict decoding.
//!
//! A value of the wrong type zeroes only the field (or list element) that
//! holds it; everything else in the document is kept. Keys follow the same
//! case-sensitive names as [`crate::model::source`].

use serde_json::{Map, Value};
use tracing::warn;

use crate::model::{NvdFinding, Package, ScanFinding, ScanReport};

/// Rebuild a report from an arbitrary JSON value, dropping mistyped fields.
pub(crate) fn salvage_report(value: &Value) -> ScanReport {
    let Some(object) = value.as_object() else {
        warn!(found = json_kind(value), "scan report is not a JSON object, using an empty report");
        return ScanReport::default();
    };

    let image_key = if object.contains_key("ImageName") {
        "ImageName"
    } else {
        "image_name"
    };

    ScanReport {
        image_name: text(object, image_key),
        findings: list(object, "Findings", salvage_finding),
    }
}

fn salvage_finding(value: &Value) -> ScanFinding {
    let Some(object) = nested_object(value, "Findings") else {
        return ScanFinding::default();
    };

    ScanFinding {
        nvd_finding: object
            .get("NvdFinding")
            .and_then(|nvd| nested_object(nvd, "NvdFinding"))
            .map(salvage_nvd_finding)
            .unwrap_or_default(),
        packages: list(object, "Packages", salvage_package),
    }
}

fn salvage_nvd_finding(object: &Map<String, Value>) -> NvdFinding {
    NvdFinding {
        title: text(object, "Title"),
        description: text(object, "Description"),
        status: text(object, "Status"),
        cvss_vector: text(object, "cvss_vector"),
        cvss_score: score(object),
        cve: text(object, "Cve"),
        remediation: text(object, "Remediation"),
        references: list(object, "References", |item| match item {
            Value::String(reference) => reference.clone(),
            Value::Null => String::new(),
            other => {
                dropped("References", other);
                String::new()
            }
        }),
    }
}

fn salvage_package(value: &Value) -> Package {
    let Some(object) = nested_object(value, "Packages") else {
        return Package::default();
    };

    Package {
        name: text(object, "Name"),
        version: text(object, "Version"),
        kind: text(object, "Type"),
    }
}

fn text(object: &Map<String, Value>, key: &str) -> String {
    match object.get(key) {
        Some(Value::String(value)) => value.clone(),
        None | Some(Value::Null) => String::new(),
        Some(other) => {
            dropped(key, other);
            String::new()
        }
    }
}

fn score(object: &Map<String, Value>) -> String {
    match object.get("cvss_score") {
        Some(Value::Number(number)) => number.to_string(),
        _ => text(object, "cvss_score"),
    }
}

fn list<T, F>(object: &Map<String, Value>, key: &str, item: F) -> Vec<T>
where
    F: Fn(&Value) -> T,
{
    match object.get(key) {
        Some(Value::Array(values)) => values.iter().map(item).collect(),
        None | Some(Value::Null) => Vec::new(),
        Some(other) => {
            dropped(key, other);
            Vec::new()
        }
    }
}

/// Objects nested under a key; `null` is an empty value, not a type error.
fn nested_object<'a>(value: &'a Value, key: &str) -> Option<&'a Map<String, Value>> {
    match value {
        Value::Object(object) => Some(object),
        Value::Null => None,
        other => {
            dropped(key, other);
            None
        }
    }
}

fn dropped(key: &str, value: &Value) {
    warn!(field = key, found = json_kind(value), "ignoring scan report field with unexpected type");
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
