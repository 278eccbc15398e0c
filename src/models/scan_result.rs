use std::fmt;

use serde_json::Value;

/// Parsed body of a successful scan. Kept untyped: only the quota is read,
/// everything else is passed through for display.
#[derive(Clone, Debug, PartialEq)]
pub struct ScanResult(pub Value);

impl ScanResult {
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body).map(ScanResult)
    }

    pub fn quota(&self) -> Quota {
        let quota = self.0.get("quota");
        let field = |name: &str| quota.and_then(|q| q.get(name)).cloned().unwrap_or(Value::Null);
        Quota {
            remaining: field("remaining"),
            limit: field("limit"),
        }
    }

    /// Body re-serialized with two-space indentation, keys in server order.
    pub fn to_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}

/// Remaining/limit pair reported by the service. Absent values are `null`.
#[derive(Clone, Debug, PartialEq)]
pub struct Quota {
    pub remaining: Value,
    pub limit: Value,
}

impl fmt::Display for Quota {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", display_value(&self.remaining), display_value(&self.limit))
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
