//! # Company Profile Model
//!
//! The display-ready record for one company. Every field is optional:
//! the agent service returns whatever its research produced, and absence
//! is valid and distinct from an empty value. The profile is immutable
//! once produced and replaced wholesale by the next successful request.

use serde_yaml::Value;

/// Structured research profile for a single company
///
/// Produced only by [`CompanyProfile::from_document`]; the renderer never
/// mutates it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyProfile {
    pub name: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub founded: Option<String>,
    pub headquarters: Option<String>,
    pub employees: Option<String>,
    pub industry: Option<String>,
    pub products: Option<Vec<String>>,
    pub competitors: Option<Vec<String>>,
    pub revenue: Option<String>,
}

impl CompanyProfile {
    /// Extract the recognized fields from a decoded document
    ///
    /// This is the single defensive step between the untyped decoder
    /// output and the renderer: unknown keys are dropped, wrong-typed
    /// values are treated as absent, and extraction itself never fails.
    /// A document that is not a mapping yields an all-absent profile.
    pub fn from_document(document: &Value) -> Self {
        Self {
            name: scalar_field(document, "name"),
            website: scalar_field(document, "website"),
            description: scalar_field(document, "description"),
            founded: scalar_field(document, "founded"),
            headquarters: scalar_field(document, "headquarters"),
            employees: scalar_field(document, "employees"),
            industry: scalar_field(document, "industry"),
            products: sequence_field(document, "products"),
            competitors: sequence_field(document, "competitors"),
            revenue: scalar_field(document, "revenue"),
        }
    }
}

/// Read a scalar value as text; sequences, mappings and null are absent
fn scalar_field(document: &Value, key: &str) -> Option<String> {
    document.get(key).and_then(scalar_to_text)
}

/// Read a sequence of scalars; a non-sequence value is absent, non-scalar
/// items within a sequence are skipped
fn sequence_field(document: &Value, key: &str) -> Option<Vec<String>> {
    document
        .get(key)
        .and_then(Value::as_sequence)
        .map(|items| items.iter().filter_map(scalar_to_text).collect())
}

fn scalar_to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(yaml: &str) -> Value {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn from_document_should_extract_recognized_fields() {
        let doc = document(
            "name: Zomato\n\
             website: zomato.com\n\
             founded: 2008\n\
             products:\n  - Food delivery\n  - Dining\n\
             competitors: []\n",
        );

        let profile = CompanyProfile::from_document(&doc);
        assert_eq!(profile.name.as_deref(), Some("Zomato"));
        assert_eq!(profile.website.as_deref(), Some("zomato.com"));
        // numeric scalars render as their text form
        assert_eq!(profile.founded.as_deref(), Some("2008"));
        assert_eq!(
            profile.products,
            Some(vec!["Food delivery".to_string(), "Dining".to_string()])
        );
        // empty sequence is present and empty, not absent
        assert_eq!(profile.competitors, Some(Vec::new()));
        assert!(profile.description.is_none());
    }

    #[test]
    fn from_document_should_drop_unknown_keys() {
        let doc = document("name: Acme\nmarket_share: 12%\nexists: true\n");
        let profile = CompanyProfile::from_document(&doc);
        assert_eq!(profile.name.as_deref(), Some("Acme"));
        assert!(profile.industry.is_none());
    }

    #[test]
    fn wrong_typed_values_should_be_absent() {
        let doc = document(
            "name:\n  nested: mapping\n\
             website: [not, text]\n\
             products: just text\n",
        );

        let profile = CompanyProfile::from_document(&doc);
        assert!(profile.name.is_none());
        assert!(profile.website.is_none());
        assert!(profile.products.is_none());
    }

    #[test]
    fn non_scalar_sequence_items_should_be_skipped() {
        let doc = document("products:\n  - Food delivery\n  - {nested: item}\n  - Dining\n");
        let profile = CompanyProfile::from_document(&doc);
        assert_eq!(
            profile.products,
            Some(vec!["Food delivery".to_string(), "Dining".to_string()])
        );
    }

    #[test]
    fn non_mapping_document_should_yield_empty_profile() {
        let profile = CompanyProfile::from_document(&document("- a\n- b\n"));
        assert_eq!(profile, CompanyProfile::default());

        let profile = CompanyProfile::from_document(&Value::Null);
        assert_eq!(profile, CompanyProfile::default());
    }

    #[test]
    fn sequence_order_should_be_preserved() {
        let doc = document("competitors:\n  - Swiggy\n  - Uber Eats\n  - DoorDash\n");
        let profile = CompanyProfile::from_document(&doc);
        assert_eq!(
            profile.competitors,
            Some(vec![
                "Swiggy".to_string(),
                "Uber Eats".to_string(),
                "DoorDash".to_string()
            ])
        );
    }
}
