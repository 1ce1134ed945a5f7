use crate::api::Resource;
use crate::domain::{display_date, AttendanceRecord};
use crate::filter::{ChoiceOptions, FilterDef, FilterSet};
use crate::views::{Column, ListView};

pub fn filters() -> FilterSet {
    FilterSet::new(vec![
        FilterDef::text("buscar", "Alumno o evento", &["alumno", "evento"]),
        FilterDef::choice("instrumento", "Instrumento", "instrumento", ChoiceOptions::FromRecords),
        FilterDef::date_range("fecha", "Fecha", "fecha", "fechaDesde", "fechaHasta"),
        FilterDef::flag("asistio", "Asistió", "asistio"),
    ])
}

pub fn view() -> ListView<AttendanceRecord> {
    ListView {
        title: "Asistencia",
        path: "/asistencias",
        resource: Resource::Attendance,
        requires_login: true,
        filters: filters(),
        columns: vec![
            Column { header: "Fecha", cell: |a: &AttendanceRecord, _| display_date(&a.fecha) },
            Column { header: "Alumno", cell: |a: &AttendanceRecord, _| a.alumno.clone() },
            Column { header: "Instrumento", cell: |a: &AttendanceRecord, _| a.instrumento.clone().unwrap_or_default() },
            Column { header: "Evento", cell: |a: &AttendanceRecord, _| a.evento.clone().unwrap_or_default() },
            Column {
                header: "Asistencia",
                cell: |a: &AttendanceRecord, _| {
                    match a.asistio {
                        Some(true) => "Presente",
                        Some(false) => "Ausente",
                        None => "Sin registrar",
                    }
                    .to_string()
                },
            },
            Column { header: "Observaciones", cell: |a: &AttendanceRecord, _| a.observaciones.clone().unwrap_or_default() },
        ],
        export_path: None,
    }
}
