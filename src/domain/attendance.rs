use crate::filter::{FieldValue, Record};
use serde::Deserialize;

/// One student's attendance at one rehearsal or event.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AttendanceRecord {
    pub id_asistencia: i64,
    pub alumno: String,
    pub instrumento: Option<String>,
    pub evento: Option<String>,
    pub fecha: Option<String>,
    // stored as TINYINT on the backend
    #[serde(default, deserialize_with = "crate::domain::flag")]
    pub asistio: Option<bool>,
    pub observaciones: Option<String>,
}

impl Record for AttendanceRecord {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "id_asistencia" => FieldValue::Int(self.id_asistencia),
            "alumno" => (&self.alumno).into(),
            "instrumento" => (&self.instrumento).into(),
            "evento" => (&self.evento).into(),
            "fecha" => (&self.fecha).into(),
            "asistio" => self.asistio.into(),
            "observaciones" => (&self.observaciones).into(),
            _ => FieldValue::Missing,
        }
    }
}
