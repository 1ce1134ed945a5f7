use crate::filter::{FieldValue, Record};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NewsRecord {
    pub id_noticia: i64,
    pub titulo: String,
    pub contenido: Option<String>,
    pub autor: Option<String>,
    pub categoria: Option<String>,
    pub fecha_publicacion: Option<String>,
    pub imagen_principal: Option<String>,
    #[serde(default, deserialize_with = "crate::domain::flag")]
    pub destacada: Option<bool>,
}

impl NewsRecord {
    /// First `max` characters of the body, for table cells.
    pub fn excerpt(&self, max: usize) -> String {
        let body = self.contenido.as_deref().unwrap_or("").trim();
        if body.chars().count() <= max {
            return body.to_string();
        }
        let cut: String = body.chars().take(max).collect();
        format!("{}…", cut.trim_end())
    }
}

impl Record for NewsRecord {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "id_noticia" => FieldValue::Int(self.id_noticia),
            "titulo" => (&self.titulo).into(),
            "contenido" => (&self.contenido).into(),
            "autor" => (&self.autor).into(),
            "categoria" => (&self.categoria).into(),
            "fecha_publicacion" => (&self.fecha_publicacion).into(),
            "imagen_principal" => (&self.imagen_principal).into(),
            "destacada" => self.destacada.into(),
            _ => FieldValue::Missing,
        }
    }
}
