use serde::Deserialize;

/// Placeholder rendered for a field the API left out or sent as null.
pub const MISSING_FIELD: &str = "undefined";

/// Organizer nested inside an event record
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Organizer {
    #[serde(rename = "nombre", default)]
    pub name: Option<String>,
}

/// Event record as served by `GET /eventos`.
///
/// Nothing here is validated. Absent or null fields deserialize to `None`
/// and display as [`MISSING_FIELD`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EventRecord {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(rename = "nombre", default)]
    pub name: Option<String>,

    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,

    /// Passed through exactly as the API formats it.
    #[serde(rename = "fecha", default)]
    pub date: Option<String>,

    #[serde(rename = "lugar", default)]
    pub place: Option<String>,

    #[serde(rename = "organizador", default)]
    pub organizer: Option<Organizer>,

    #[serde(rename = "organizador_id", default)]
    pub organizer_id: Option<i64>,

    /// Flattened organizer name, sent by the API instead of `organizador`.
    #[serde(rename = "organizador_nombre", default)]
    pub organizer_name: Option<String>,
}

impl EventRecord {
    pub fn display_name(&self) -> &str {
        or_missing(&self.name)
    }

    pub fn display_description(&self) -> &str {
        or_missing(&self.description)
    }

    pub fn display_date(&self) -> &str {
        or_missing(&self.date)
    }

    pub fn display_place(&self) -> &str {
        or_missing(&self.place)
    }

    /// Nested `organizador.nombre` wins over the flat `organizador_nombre`.
    pub fn display_organizer(&self) -> &str {
        self.organizer
            .as_ref()
            .and_then(|o| o.name.as_deref())
            .or(self.organizer_name.as_deref())
            .unwrap_or(MISSING_FIELD)
    }
}

fn or_missing(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or(MISSING_FIELD)
}
