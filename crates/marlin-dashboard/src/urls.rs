//! Route paths and action-link assembly.

use crate::templates::escape_html;

pub const DB_ROUTINES: &str = "/database/routines";
pub const DB_TRIGGERS: &str = "/database/triggers";
pub const TABLE_TRIGGERS: &str = "/table/triggers";
pub const DB_EVENTS: &str = "/database/events";
pub const SQL: &str = "/sql";

/// Percent-encoded `key=value&...` string, without a leading `?`.
pub fn query_string(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// A route URL with its query parameters.
pub fn build(route: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        route.to_string()
    } else {
        format!("{}?{}", route, query_string(params))
    }
}

/// Hidden form fields carrying the database and table scope.
pub fn hidden_form_fields(db: &str, table: Option<&str>) -> String {
    let mut fields = format!(
        "<input type=\"hidden\" name=\"db\" value=\"{}\">\n",
        escape_html(db)
    );
    if let Some(table) = table {
        fields.push_str(&format!(
            "<input type=\"hidden\" name=\"table\" value=\"{}\">\n",
            escape_html(table)
        ));
    }
    fields
}
