//! Schema document writer
//!
//! Formats contract models back into schema documents.

use super::parser::{SchemaError, SchemaFile};

/// Header placed at the top of generated TOML documents
const HEADER: &str = "# rsdef resource contract schema\n\n";

/// Format a `SchemaFile` as TOML
pub fn format_schema(file: &SchemaFile) -> Result<String, SchemaError> {
    let body = toml::to_string_pretty(file).map_err(|e| SchemaError::Format(e.to_string()))?;
    Ok(format!("{HEADER}{body}"))
}

/// Format a `SchemaFile` as pretty-printed JSON
pub fn format_schema_json(file: &SchemaFile) -> Result<String, SchemaError> {
    serde_json::to_string_pretty(file).map_err(|e| SchemaError::Format(e.to_string()))
}

/// A commented starter document for `rsdef init`
#[must_use]
pub fn starter_schema(namespace: &str) -> String {
    format!(
        r#"# rsdef resource contract schema
#
# Each [[resource]] describes one addressable resource: its states and the
# transitions (link relations) available from them, and the operations it
# supports with their status codes.

[[data_type]]
name = "Thing"
namespace = "{namespace}"

[[resource]]
name = "Thing"
namespace = "{namespace}"
element = "Thing"
description = "An example resource."

[[resource.state]]
name = "Thing"
rel = "thing"
description = "A thing."

# [[resource.state.transition]]
# rel = "related-thing"
# description = "A related thing."
# scope = ["Thing"]
# conditional = true

[[resource.operation]]
method = "GET"
description = "Read a thing."
responses = [
  {{ code = 200, condition = "Upon a successful read." }},
  {{ code = 404, condition = "If the requested thing is not found." }},
]
"#
    )
}
