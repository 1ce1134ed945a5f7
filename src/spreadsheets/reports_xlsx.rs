use crate::domain::{display_date, ReportRecord};
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

const HEADERS: [&str; 8] = [
    "ID",
    "Fecha",
    "Tipo",
    "Título",
    "Alumno",
    "Profesor",
    "Calificación",
    "Resumen",
];

pub fn export_reports_xlsx(reports: &[&ReportRecord], filename: &str) -> ResultResp {
    let buffer = reports_workbook(reports)
        .map_err(|e| ServerError::XlsxError(format!("Failed to build workbook: {e}")))?;
    xlsx_response(buffer, filename)
}

/// Header row plus one row per report, in the order given.
pub fn reports_workbook(reports: &[&ReportRecord]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Informes")?;

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (i, report) in reports.iter().enumerate() {
        write_row(worksheet, (i + 1) as u32, report)?;
    }

    workbook.save_to_buffer()
}

fn write_row(ws: &mut Worksheet, r: u32, report: &ReportRecord) -> Result<(), XlsxError> {
    let opt = |v: &Option<String>| v.clone().unwrap_or_default();

    ws.write_number(r, 0, report.id_informe as f64)?;
    ws.write_string(r, 1, display_date(&report.fecha))?;
    ws.write_string(r, 2, report.tipo_label())?;
    ws.write_string(r, 3, &report.titulo)?;
    ws.write_string(r, 4, opt(&report.alumno))?;
    ws.write_string(r, 5, opt(&report.profesor))?;
    if let Some(c) = report.calificacion {
        ws.write_number(r, 6, c)?;
    }
    ws.write_string(r, 7, opt(&report.resumen))?;
    Ok(())
}
