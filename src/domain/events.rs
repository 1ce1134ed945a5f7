// src/domain/events.rs

use crate::filter::{FieldValue, Record};
use serde::Deserialize;

/// A concert, rehearsal or other date on the orchestra calendar.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EventRecord {
    pub id_evento: i64,
    pub nombre: String,
    pub descripcion: Option<String>,
    /// "concierto", "ensayo", "audicion"... whatever the backend has
    pub tipo: Option<String>,
    pub fecha: Option<String>,
    pub hora: Option<String>,
    pub lugar: Option<String>,
    #[serde(default, deserialize_with = "crate::domain::flag")]
    pub publico: Option<bool>,
}

impl Record for EventRecord {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "id_evento" => FieldValue::Int(self.id_evento),
            "nombre" => (&self.nombre).into(),
            "descripcion" => (&self.descripcion).into(),
            "tipo" => (&self.tipo).into(),
            "fecha" => (&self.fecha).into(),
            "hora" => (&self.hora).into(),
            "lugar" => (&self.lugar).into(),
            "publico" => self.publico.into(),
            _ => FieldValue::Missing,
        }
    }
}
