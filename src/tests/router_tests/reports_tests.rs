use crate::api::Resource;
use crate::tests::utils::{body_string, get, send, FixtureSource};
use serde_json::json;

fn source() -> FixtureSource {
    FixtureSource::default().with(
        Resource::Reports,
        json!([
            { "id_informe": 1, "tipo": "evaluacion", "titulo": "Evaluación trimestral",
              "alumno": "Marta Ruiz", "fecha": "2025-03-15", "calificacion": 8.5 },
            { "id_informe": 2, "tipo": "prestamo", "titulo": "Préstamo de viola",
              "alumno": "Pablo Gil", "fecha": "2025-04-02" }
        ]),
    )
}

#[test]
fn reports_need_a_token() {
    let resp = send(get("/informes", None), &source());
    assert_eq!(resp.status(), 401);

    let resp = send(get("/informes/export", None), &source());
    assert_eq!(resp.status(), 401);
}

#[test]
fn fixed_type_filter_uses_labels() {
    let mut resp = send(get("/informes?tipo=prestamo", Some("t")), &source());
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Préstamo de viola"));
    assert!(!body.contains("Evaluación trimestral"));
    // export link keeps the active filters
    assert!(body.contains("/informes/export?tipo=prestamo"));
}

#[test]
fn export_is_an_xlsx_download() {
    let mut resp = send(get("/informes/export?tipo=evaluacion", Some("t")), &source());
    assert_eq!(resp.status(), 200);

    let content_type = resp
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.contains("spreadsheetml"));

    let disposition = resp
        .headers()
        .get("Content-Disposition")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(disposition.contains("informes_"));

    let mut bytes = Vec::new();
    std::io::Read::read_to_end(&mut resp.body_mut().reader(), &mut bytes).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}
