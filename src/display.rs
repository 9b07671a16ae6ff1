use serde_json::Value;

use crate::env::Environment;

pub fn render_body(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        _ => serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()),
    }
}

pub fn format_env_line(environment: Environment, base_url: &str) -> String {
    format!("{}  {}", environment, base_url)
}
