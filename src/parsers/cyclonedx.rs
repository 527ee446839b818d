//! CycloneDX JSON reader.

use crate::error::{DocumentErrorKind, ErrorContext, Result, SummaryError};
use crate::model::{AuthorEntry, Component, DependencyEdge, SbomDocument};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Parse an SBOM document from a JSON string.
///
/// Absent or `null` sections are empty. Each component and dependency entry
/// must be a JSON object; its known fields are read leniently (see
/// [`lenient_string`]) and the original object is kept for verbatim echo.
pub fn parse_document_str(content: &str) -> Result<SbomDocument> {
    let root = match serde_json::from_str::<Value>(content)? {
        Value::Object(map) => map,
        other => {
            return Err(SummaryError::document(
                "document root",
                DocumentErrorKind::NotAnObject(json_kind(&other)),
            ));
        }
    };

    let components = section_entries(&root, "components")?
        .iter()
        .enumerate()
        .map(|(idx, raw)| {
            convert_component(raw).with_context(|| format!("component #{idx}"))
        })
        .collect::<Result<Vec<_>>>()?;

    let dependencies = section_entries(&root, "dependencies")?
        .iter()
        .enumerate()
        .map(|(idx, raw)| {
            convert_dependency(raw).with_context(|| format!("dependency #{idx}"))
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        components = components.len(),
        dependencies = dependencies.len(),
        "Parsed SBOM document"
    );

    Ok(SbomDocument::new(components, dependencies))
}

/// Entries of a top-level array section; absent or `null` is empty.
fn section_entries<'a>(root: &'a Map<String, Value>, section: &str) -> Result<&'a [Value]> {
    match root.get(section) {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(entries)) => Ok(entries),
        Some(other) => Err(SummaryError::invalid_section(
            section,
            format!("expected an array, found {}", json_kind(other)),
        )),
    }
}

fn convert_component(raw: &Value) -> Result<Component> {
    require_object(raw, "components")?;
    let cdx = CdxComponent::deserialize(raw)
        .map_err(|e| SummaryError::invalid_section("components", e.to_string()))?;

    Ok(Component {
        name: cdx.name,
        component_type: cdx.component_type,
        bom_ref: cdx.bom_ref,
        author: cdx.author,
        authors: cdx.authors.map(|authors| {
            authors
                .into_iter()
                .map(|a| AuthorEntry { name: a.name })
                .collect()
        }),
        raw: raw.clone(),
    })
}

fn convert_dependency(raw: &Value) -> Result<DependencyEdge> {
    require_object(raw, "dependencies")?;
    let cdx = CdxDependency::deserialize(raw)
        .map_err(|e| SummaryError::invalid_section("dependencies", e.to_string()))?;

    Ok(DependencyEdge {
        dependent: cdx.ref_field,
        depends_on: cdx.depends_on.unwrap_or_default(),
        raw: raw.clone(),
    })
}

fn require_object(raw: &Value, section: &str) -> Result<()> {
    if raw.is_object() {
        Ok(())
    } else {
        Err(SummaryError::invalid_section(
            section,
            format!("expected an object, found {}", json_kind(raw)),
        ))
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ============================================================================
// CycloneDX serde structures
// ============================================================================

#[derive(Debug, Deserialize)]
struct CdxComponent {
    #[serde(default, deserialize_with = "lenient_string")]
    name: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    component_type: Option<String>,
    #[serde(rename = "bom-ref", default, deserialize_with = "lenient_string")]
    bom_ref: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    author: Option<String>,
    #[serde(default)]
    authors: Option<Vec<CdxAuthor>>,
}

#[derive(Debug, Deserialize)]
struct CdxAuthor {
    #[serde(default, deserialize_with = "lenient_string")]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CdxDependency {
    #[serde(rename = "ref", default, deserialize_with = "lenient_string")]
    ref_field: Option<String>,
    #[serde(default, deserialize_with = "lenient_string_list")]
    depends_on: Option<Vec<String>>,
}

/// Accept any JSON value for a string field.
///
/// Strings are taken as-is, `null` counts as absent, and anything else is
/// kept as its compact JSON text.
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(value_text))
}

/// Like [`lenient_string`] for each element of an array; `null` elements are dropped.
fn lenient_string_list<'de, D>(deserializer: D) -> std::result::Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(values.map(|values| values.into_iter().filter_map(value_text).collect()))
}

fn value_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}
