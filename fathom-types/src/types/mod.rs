use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

mod field;

pub use field::{Field, FieldType};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConceptType {
    Dimension,
    Metric,
}

impl Display for ConceptType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConceptType::Dimension => f.write_str("DIMENSION"),
            ConceptType::Metric => f.write_str("METRIC"),
        }
    }
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct FieldSemantics {
    pub concept_type: ConceptType,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub name: String,
    #[serde(rename = "dataType")]
    pub typ: FieldType,
    pub semantics: FieldSemantics,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, typ: FieldType, concept_type: ConceptType) -> Self {
        Self {
            name: name.into(),
            typ,
            semantics: FieldSemantics { concept_type },
        }
    }

    pub fn dimension(name: impl Into<String>, typ: FieldType) -> Self {
        Self::new(name, typ, ConceptType::Dimension)
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct Schema {
    /// Column definitions, in output order.
    pub fields: Vec<FieldDefinition>,
}

impl Schema {
    pub fn field(&mut self, field: FieldDefinition) -> &mut Self {
        self.fields.push(field);
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Default)]
pub struct Row {
    /// One value per requested field, positionally aligned with the schema.
    pub values: Vec<Field>,
}

impl Row {
    pub fn new(values: Vec<Field>) -> Row {
        Row { values }
    }
}
