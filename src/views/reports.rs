// src/views/reports.rs

use crate::api::{RecordSource, Resource, SessionAuth};
use crate::domain::reports::REPORT_TYPES;
use crate::domain::{display_date, ReportRecord};
use crate::filter::{apply_filters, ChoiceOptions, FilterContext, FilterDef, FilterSet};
use crate::responses::ResultResp;
use crate::spreadsheets::export_reports_xlsx;
use crate::views::{Column, ListView};
use astra::Request;
use tracing::info;

pub fn filters() -> FilterSet {
    FilterSet::new(vec![
        FilterDef::text("buscar", "Buscar", &["alumno", "profesor", "titulo"]),
        FilterDef::choice("tipo", "Tipo", "tipo", ChoiceOptions::Fixed(REPORT_TYPES)),
        FilterDef::date_range("fecha", "Fecha", "fecha", "fechaDesde", "fechaHasta"),
    ])
}

pub fn view() -> ListView<ReportRecord> {
    ListView {
        title: "Informes",
        path: "/informes",
        resource: Resource::Reports,
        requires_login: true,
        filters: filters(),
        columns: vec![
            Column { header: "Fecha", cell: |r: &ReportRecord, _| display_date(&r.fecha) },
            Column { header: "Tipo", cell: |r: &ReportRecord, _| r.tipo_label().to_string() },
            Column { header: "Título", cell: |r: &ReportRecord, _| r.titulo.clone() },
            Column { header: "Alumno", cell: |r: &ReportRecord, _| r.alumno.clone().unwrap_or_default() },
            Column { header: "Profesor", cell: |r: &ReportRecord, _| r.profesor.clone().unwrap_or_default() },
            Column {
                header: "Calificación",
                cell: |r: &ReportRecord, _| r.calificacion.map(|c| format!("{c:.1}")).unwrap_or_default(),
            },
        ],
        export_path: Some("/informes/export"),
    }
}

/// Same rows as the list view, as a spreadsheet download.
pub fn export(req: &Request, source: &dyn RecordSource) -> ResultResp {
    let view = view();
    let auth = SessionAuth::from_request(req);
    let records = view.load(source, &auth)?;
    let criteria = view.criteria(req);

    let ctx = FilterContext::now();
    let shown = apply_filters(&view.filters, &records, &criteria, &ctx);
    info!("Exporting {} of {} reports", shown.len(), records.len());

    let filename = format!("informes_{}.xlsx", ctx.today.format("%Y-%m-%d"));
    export_reports_xlsx(&shown, &filename)
}
