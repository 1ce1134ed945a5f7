use crate::api::Resource;
use crate::domain::{display_date, display_flag, NewsRecord};
use crate::filter::{ChoiceOptions, FilterDef, FilterSet};
use crate::views::{Column, ListView};

pub fn filters() -> FilterSet {
    FilterSet::new(vec![
        FilterDef::text("buscar", "Buscar", &["titulo", "contenido", "autor"]),
        FilterDef::choice("categoria", "Categoría", "categoria", ChoiceOptions::FromRecords),
        FilterDef::date_range(
            "publicacion",
            "Publicación",
            "fecha_publicacion",
            "fechaDesde",
            "fechaHasta",
        ),
        FilterDef::flag("destacada", "Destacada", "destacada"),
    ])
}

pub fn view() -> ListView<NewsRecord> {
    ListView {
        title: "Noticias",
        path: "/noticias",
        resource: Resource::News,
        requires_login: false,
        filters: filters(),
        columns: vec![
            Column { header: "Fecha", cell: |n: &NewsRecord, _| display_date(&n.fecha_publicacion) },
            Column { header: "Título", cell: |n: &NewsRecord, _| n.titulo.clone() },
            Column { header: "Categoría", cell: |n: &NewsRecord, _| n.categoria.clone().unwrap_or_default() },
            Column { header: "Autor", cell: |n: &NewsRecord, _| n.autor.clone().unwrap_or_default() },
            Column { header: "Resumen", cell: |n: &NewsRecord, _| n.excerpt(120) },
            Column { header: "Destacada", cell: |n: &NewsRecord, _| display_flag(n.destacada).to_string() },
        ],
        export_path: None,
    }
}
