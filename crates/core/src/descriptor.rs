//! Static node descriptors.
//!
//! A descriptor is the form schema a node exposes to the host: display
//! metadata, declared input properties with defaults and visibility
//! conditions, and the credential the node requires. Descriptors are
//! immutable values returned by explicit constructor functions; nothing
//! here relies on load-time statics.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Static metadata for one node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDescriptor {
    /// Internal identifier, unique within the pack.
    pub name: String,
    /// Human-readable name shown by the host UI.
    pub display_name: String,
    /// Short description of what the node does.
    pub description: String,
    /// Name of the credential type this node requires.
    pub credential: String,
    /// Declared input properties in display order.
    pub properties: Vec<Property>,
}

impl NodeDescriptor {
    pub fn new(name: &str, display_name: &str, description: &str, credential: &str) -> Self {
        NodeDescriptor {
            name: name.to_string(),
            display_name: display_name.to_string(),
            description: description.to_string(),
            credential: credential.to_string(),
            properties: Vec::new(),
        }
    }

    /// Appends a declared property.
    pub fn property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Looks up a property by name.
    pub fn find_property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }
}

/// Value kind of a declared property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    String,
    Number,
    Boolean,
    /// Fixed choice list rendered as a dropdown.
    Options,
    /// Free-form JSON input.
    Json,
}

/// One selectable choice of an options property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyOption {
    pub name: String,
    pub value: String,
}

/// Visibility condition: the property is shown only when the referenced
/// parameter currently holds one of the listed values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowCondition {
    pub parameter: String,
    pub values: Vec<String>,
}

/// Declared numeric bounds. Informational: the host UI validates them, the
/// node does not re-check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumberRange {
    pub min: i64,
    pub max: i64,
}

/// One declared input property of a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub display_name: String,
    pub kind: PropertyKind,
    /// Default value applied by the host when the field is left untouched.
    pub default: Option<Value>,
    pub required: bool,
    pub description: Option<String>,
    /// Choices for `PropertyKind::Options`.
    pub options: Vec<PropertyOption>,
    /// All conditions must hold for the property to be visible.
    pub show: Vec<ShowCondition>,
    pub range: Option<NumberRange>,
}

impl Property {
    fn new(name: &str, display_name: &str, kind: PropertyKind) -> Self {
        Property {
            name: name.to_string(),
            display_name: display_name.to_string(),
            kind,
            default: None,
            required: false,
            description: None,
            options: Vec::new(),
            show: Vec::new(),
            range: None,
        }
    }

    pub fn string(name: &str, display_name: &str) -> Self {
        Property::new(name, display_name, PropertyKind::String)
    }

    pub fn number(name: &str, display_name: &str) -> Self {
        Property::new(name, display_name, PropertyKind::Number)
    }

    pub fn boolean(name: &str, display_name: &str) -> Self {
        Property::new(name, display_name, PropertyKind::Boolean)
    }

    pub fn options(name: &str, display_name: &str) -> Self {
        Property::new(name, display_name, PropertyKind::Options)
    }

    pub fn json(name: &str, display_name: &str) -> Self {
        Property::new(name, display_name, PropertyKind::Json)
    }

    pub fn default_value(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Adds one selectable choice (options properties only).
    pub fn choice(mut self, name: &str, value: &str) -> Self {
        self.options.push(PropertyOption {
            name: name.to_string(),
            value: value.to_string(),
        });
        self
    }

    /// Restricts visibility to the given values of another parameter.
    pub fn show_when(mut self, parameter: &str, values: &[&str]) -> Self {
        self.show.push(ShowCondition {
            parameter: parameter.to_string(),
            values: values.iter().map(|v| (*v).to_string()).collect(),
        });
        self
    }

    pub fn range(mut self, min: i64, max: i64) -> Self {
        self.range = Some(NumberRange { min, max });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_descriptor() -> NodeDescriptor {
        NodeDescriptor::new("dns", "DNS", "Manage DNS zones and records", "gatewayApiKey")
            .property(
                Property::options("resource", "Resource")
                    .choice("Zone", "zone")
                    .choice("Record", "record")
                    .default_value(json!("zone")),
            )
            .property(
                Property::string("zoneId", "Zone ID")
                    .required()
                    .show_when("resource", &["zone"])
                    .show_when("operation", &["get", "delete"]),
            )
            .property(
                Property::number("limit", "Limit")
                    .default_value(json!(50))
                    .range(1, 1000),
            )
    }

    #[test]
    fn test_descriptor_property_order() {
        let descriptor = sample_descriptor();
        let names: Vec<&str> = descriptor
            .properties
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["resource", "zoneId", "limit"]);
    }

    #[test]
    fn test_find_property() {
        let descriptor = sample_descriptor();
        let limit = descriptor.find_property("limit").unwrap();
        assert_eq!(limit.kind, PropertyKind::Number);
        assert_eq!(limit.range, Some(NumberRange { min: 1, max: 1000 }));
        assert!(descriptor.find_property("absent").is_none());
    }

    #[test]
    fn test_show_conditions_accumulate() {
        let descriptor = sample_descriptor();
        let zone_id = descriptor.find_property("zoneId").unwrap();
        assert_eq!(zone_id.show.len(), 2);
        assert_eq!(zone_id.show[0].parameter, "resource");
        assert_eq!(zone_id.show[1].values, vec!["get", "delete"]);
        assert!(zone_id.required);
    }

    #[test]
    fn test_options_choices() {
        let descriptor = sample_descriptor();
        let resource = descriptor.find_property("resource").unwrap();
        assert_eq!(resource.options.len(), 2);
        assert_eq!(resource.options[1].value, "record");
        assert_eq!(resource.default, Some(json!("zone")));
    }

    #[test]
    fn test_descriptor_serialization() {
        let descriptor = sample_descriptor();
        let value = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(value["name"], "dns");
        assert_eq!(value["credential"], "gatewayApiKey");
        assert_eq!(value["properties"][0]["kind"], "options");
    }
}
