use fathom_types::types::{FieldDefinition, FieldType, Schema};
use std::sync::OnceLock;

/// Fields this connector knows how to fill from a `page_stats` row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KnownField {
    Timestamp,
    Pageviews,
    AverageDuration,
    BounceRate,
}

impl KnownField {
    pub const ALL: [KnownField; 4] = [
        KnownField::Timestamp,
        KnownField::Pageviews,
        KnownField::AverageDuration,
        KnownField::BounceRate,
    ];

    pub fn id(self) -> &'static str {
        match self {
            KnownField::Timestamp => "timestamp",
            KnownField::Pageviews => "pageviews",
            KnownField::AverageDuration => "average_duration",
            KnownField::BounceRate => "bounce_rate",
        }
    }

    /// Column of the remote `page_stats` table the value is read from.
    pub fn source_column(self) -> &'static str {
        match self {
            KnownField::Timestamp => "ts",
            KnownField::Pageviews => "pageviews",
            KnownField::AverageDuration => "avg_duration",
            KnownField::BounceRate => "bounce_rate",
        }
    }

    pub fn field_type(self) -> FieldType {
        match self {
            KnownField::Timestamp => FieldType::YearMonthDaySecond,
            KnownField::Pageviews | KnownField::AverageDuration | KnownField::BounceRate => {
                FieldType::Number
            }
        }
    }

    pub fn from_id(id: &str) -> Option<KnownField> {
        Self::ALL.into_iter().find(|field| field.id() == id)
    }

    pub fn from_source_column(column: &str) -> Option<KnownField> {
        Self::ALL
            .into_iter()
            .find(|field| field.source_column() == column)
    }

    /// Every catalog field is declared as a dimension.
    pub fn definition(self) -> FieldDefinition {
        FieldDefinition::dimension(self.id(), self.field_type())
    }
}

/// One position of a caller's field request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestedColumn {
    Known(KnownField),
    Unknown(String),
}

impl RequestedColumn {
    pub fn id(&self) -> &str {
        match self {
            RequestedColumn::Known(field) => field.id(),
            RequestedColumn::Unknown(id) => id,
        }
    }

    /// Unknown ids are described as text columns; they only ever hold `""`.
    pub fn definition(&self) -> FieldDefinition {
        match self {
            RequestedColumn::Known(field) => field.definition(),
            RequestedColumn::Unknown(id) => FieldDefinition::dimension(id.clone(), FieldType::Text),
        }
    }
}

/// Ordered field ids of a single data request, resolved against the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FieldRequest {
    columns: Vec<RequestedColumn>,
}

impl FieldRequest {
    pub fn columns(&self) -> &[RequestedColumn] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Catalog definitions of the recognized ids, in request order.
    pub fn definitions(&self) -> impl Iterator<Item = FieldDefinition> + '_ {
        self.columns.iter().filter_map(|column| match column {
            RequestedColumn::Known(field) => Some(field.definition()),
            RequestedColumn::Unknown(_) => None,
        })
    }

    pub fn unknown_ids(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().filter_map(|column| match column {
            RequestedColumn::Known(_) => None,
            RequestedColumn::Unknown(id) => Some(id.as_str()),
        })
    }

    /// One definition per requested position, so the schema always lines up
    /// with projected rows.
    pub fn schema(&self) -> Schema {
        Schema {
            fields: self.columns.iter().map(RequestedColumn::definition).collect(),
        }
    }
}

#[derive(Debug)]
pub struct FieldCatalog {
    fields: Vec<FieldDefinition>,
}

impl FieldCatalog {
    pub fn global() -> &'static FieldCatalog {
        static CATALOG: OnceLock<FieldCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| FieldCatalog {
            fields: KnownField::ALL.into_iter().map(KnownField::definition).collect(),
        })
    }

    pub fn list_fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    pub fn get(&self, id: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|field| field.name == id)
    }

    pub fn schema(&self) -> Schema {
        Schema {
            fields: self.fields.clone(),
        }
    }

    pub fn resolve<I, S>(&self, ids: I) -> FieldRequest
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let columns = ids
            .into_iter()
            .map(|id| {
                let id = id.as_ref();
                match KnownField::from_id(id) {
                    Some(field) => RequestedColumn::Known(field),
                    None => RequestedColumn::Unknown(id.to_string()),
                }
            })
            .collect();
        FieldRequest { columns }
    }
}
