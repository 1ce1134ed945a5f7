// src/views/events.rs

use crate::api::Resource;
use crate::domain::{display_date, display_flag, EventRecord};
use crate::filter::matchers::{derive_date_status, parse_record_date};
use crate::filter::{ChoiceOptions, FilterDef, FilterSet};
use crate::views::{Column, ListView};

pub fn filters() -> FilterSet {
    FilterSet::new(vec![
        FilterDef::text("buscar", "Buscar", &["nombre", "descripcion", "lugar"]),
        FilterDef::choice("tipo", "Tipo", "tipo", ChoiceOptions::FromRecords),
        FilterDef::timing("estado", "Estado", "fecha"),
        FilterDef::date_range("fecha", "Fecha", "fecha", "fechaDesde", "fechaHasta"),
        FilterDef::flag("publico", "Abierto al público", "publico"),
    ])
}

pub fn view() -> ListView<EventRecord> {
    ListView {
        title: "Eventos",
        path: "/eventos",
        resource: Resource::Events,
        requires_login: false,
        filters: filters(),
        columns: vec![
            Column { header: "Fecha", cell: |e: &EventRecord, _| display_date(&e.fecha) },
            Column { header: "Hora", cell: |e: &EventRecord, _| e.hora.clone().unwrap_or_default() },
            Column { header: "Evento", cell: |e: &EventRecord, _| e.nombre.clone() },
            Column { header: "Tipo", cell: |e: &EventRecord, _| e.tipo.clone().unwrap_or_default() },
            Column { header: "Lugar", cell: |e: &EventRecord, _| e.lugar.clone().unwrap_or_default() },
            Column {
                header: "Estado",
                cell: |e: &EventRecord, ctx| {
                    e.fecha
                        .as_deref()
                        .and_then(parse_record_date)
                        .map(|d| derive_date_status(d, ctx.today).label().to_string())
                        .unwrap_or_default()
                },
            },
            Column { header: "Público", cell: |e: &EventRecord, _| display_flag(e.publico).to_string() },
        ],
        export_path: None,
    }
}
