//! Table row records and their stable column headers
//!
//! The header names and their order are the wire contract between the
//! flattener and the writer adapters. Downstream spreadsheets key on these
//! exact strings, so they must not drift.

use serde::{Deserialize, Serialize};

/// Column headers for the request parameters table
pub const PARAMS_HEADERS: [&str; 6] = [
    "Name",
    "Mandatory",
    "Expected Value(s)",
    "In",
    "Description",
    "Examples",
];

/// Column headers for the request body table
pub const REQUEST_HEADERS: [&str; 6] = [
    "Path",
    "Property",
    "Mandatory",
    "Expected Value(s)",
    "Description",
    "Examples",
];

/// Column headers for the response body table
pub const RESPONSE_HEADERS: [&str; 7] = [
    "Status",
    "Path",
    "Property",
    "Mandatory",
    "Expected Value(s)",
    "Description",
    "Examples",
];

/// One row of the request parameters table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamRow {
    /// Parameter name
    pub name: String,

    /// Whether the parameter is declared required
    pub mandatory: bool,

    /// Compact constraint encoding ("Expected Value(s)")
    pub expected: String,

    /// Parameter location: query, header, path, cookie
    pub location: String,

    /// Parameter description
    pub description: String,

    /// Example value, rendered as text
    pub examples: String,
}

impl ParamRow {
    /// Render the row in `PARAMS_HEADERS` column order
    pub fn to_record(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.mandatory.to_string(),
            self.expected.clone(),
            self.location.clone(),
            self.description.clone(),
            self.examples.clone(),
        ]
    }
}

/// One row describing a single leaf value or array-item placeholder
/// inside a request or response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyRow {
    /// Slash-delimited structural location; array elements use a `[0]` suffix
    pub path: String,

    /// Property name; empty for array-item placeholder rows
    pub property: String,

    /// Required by declaration, or inherited from a non-empty enclosing array
    pub mandatory: bool,

    /// Compact constraint encoding ("Expected Value(s)")
    pub expected: String,

    /// Property description
    pub description: String,

    /// Example value(s), rendered as text
    pub examples: String,
}

impl BodyRow {
    /// Render the row in `REQUEST_HEADERS` column order
    pub fn to_record(&self) -> Vec<String> {
        vec![
            self.path.clone(),
            self.property.clone(),
            self.mandatory.to_string(),
            self.expected.clone(),
            self.description.clone(),
            self.examples.clone(),
        ]
    }
}

/// A body row tagged with the response status it belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseRow {
    /// HTTP status code (or `default`) of the enclosing response
    pub status: String,

    /// The flattened body row
    #[serde(flatten)]
    pub body: BodyRow,
}

impl ResponseRow {
    /// Render the row in `RESPONSE_HEADERS` column order
    pub fn to_record(&self) -> Vec<String> {
        let mut record = Vec::with_capacity(RESPONSE_HEADERS.len());
        record.push(self.status.clone());
        record.extend(self.body.to_record());
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_body_record_matches_header_order() {
        let row = BodyRow {
            path: "/item".to_string(),
            property: "id".to_string(),
            mandatory: true,
            expected: "integer min=1".to_string(),
            description: "identifier".to_string(),
            examples: "7".to_string(),
        };
        let record = row.to_record();
        assert_eq!(record.len(), REQUEST_HEADERS.len());
        assert_eq!(record[0], "/item");
        assert_eq!(record[2], "true");
        assert_eq!(record[3], "integer min=1");
    }

    #[test]
    fn test_response_record_prepends_status() {
        let row = ResponseRow {
            status: "200".to_string(),
            body: BodyRow {
                path: String::new(),
                property: "name".to_string(),
                mandatory: false,
                expected: "string".to_string(),
                description: String::new(),
                examples: String::new(),
            },
        };
        let record = row.to_record();
        assert_eq!(record.len(), RESPONSE_HEADERS.len());
        assert_eq!(record[0], "200");
        assert_eq!(record[2], "name");
    }
}
