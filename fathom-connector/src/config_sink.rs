use fathom_types::host_types::{ConfigEntry, ConfigResponse, SchemaResponse};
use fathom_types::types::{FieldDefinition, Schema};

/// Receives what a connector declares to the host: configuration inputs and
/// the fields it can provide.
pub trait ConfigSchemaSink {
    fn info(&mut self, id: &str, text: &str);

    fn text_input(&mut self, id: &str, name: &str, help_text: Option<&str>);

    fn set_date_range_required(&mut self, required: bool);

    fn field(&mut self, definition: FieldDefinition);
}

/// Collects declarations into the platform's response objects.
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    entries: Vec<ConfigEntry>,
    date_range_required: bool,
    schema: Schema,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build_config(self) -> ConfigResponse {
        ConfigResponse {
            config_params: self.entries,
            date_range_required: self.date_range_required,
        }
    }

    pub fn build_schema(self) -> SchemaResponse {
        SchemaResponse {
            schema: self.schema,
        }
    }
}

impl ConfigSchemaSink for ConfigBuilder {
    fn info(&mut self, id: &str, text: &str) {
        self.entries.push(ConfigEntry::Info {
            name: id.to_string(),
            text: text.to_string(),
        });
    }

    fn text_input(&mut self, id: &str, name: &str, help_text: Option<&str>) {
        self.entries.push(ConfigEntry::TextInput {
            name: id.to_string(),
            display_name: name.to_string(),
            help_text: help_text.map(str::to_string),
        });
    }

    fn set_date_range_required(&mut self, required: bool) {
        self.date_range_required = required;
    }

    fn field(&mut self, definition: FieldDefinition) {
        self.schema.field(definition);
    }
}
