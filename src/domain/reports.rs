use crate::filter::{FieldValue, Record};
use serde::Deserialize;

pub const REPORT_TYPES: &[(&str, &str)] = &[
    ("evaluacion", "Evaluación"),
    ("prestamo", "Préstamo de instrumento"),
    ("asistencia", "Asistencia"),
];

/// A row of the reports listing: evaluations, loan reports and attendance
/// summaries share the same shape.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ReportRecord {
    pub id_informe: i64,
    pub tipo: String,
    pub titulo: String,
    pub alumno: Option<String>,
    pub profesor: Option<String>,
    pub fecha: Option<String>,
    pub resumen: Option<String>,
    pub calificacion: Option<f64>,
}

impl ReportRecord {
    pub fn tipo_label(&self) -> &str {
        REPORT_TYPES
            .iter()
            .find(|(v, _)| *v == self.tipo)
            .map(|(_, label)| *label)
            .unwrap_or(self.tipo.as_str())
    }
}

impl Record for ReportRecord {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "id_informe" => FieldValue::Int(self.id_informe),
            "tipo" => (&self.tipo).into(),
            "titulo" => (&self.titulo).into(),
            "alumno" => (&self.alumno).into(),
            "profesor" => (&self.profesor).into(),
            "fecha" => (&self.fecha).into(),
            "resumen" => (&self.resumen).into(),
            "calificacion" => self.calificacion.map_or(FieldValue::Missing, FieldValue::Float),
            _ => FieldValue::Missing,
        }
    }
}
