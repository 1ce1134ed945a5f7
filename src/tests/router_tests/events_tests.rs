use crate::api::Resource;
use crate::tests::utils::{body_string, get, send, FixtureSource};
use serde_json::json;

fn source() -> FixtureSource {
    FixtureSource::default().with(
        Resource::Events,
        json!([
            { "id_evento": 1, "nombre": "Concierto de Primavera", "tipo": "concierto",
              "fecha": "2000-04-10", "lugar": "Auditorio", "publico": 1 },
            { "id_evento": 2, "nombre": "Ensayo general", "tipo": "ensayo",
              "fecha": "2999-06-01", "lugar": "Sala 2", "publico": 0 },
            { "id_evento": 3, "nombre": "Gran Concierto de Verano", "tipo": "concierto",
              "fecha": "2999-07-20T20:00:00", "lugar": "Plaza Mayor", "publico": true },
            { "id_evento": "roto" }
        ]),
    )
}

#[test]
fn lists_every_valid_event_without_filters() {
    let mut resp = send(get("/eventos", None), &source());
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Concierto de Primavera"));
    assert!(body.contains("Ensayo general"));
    assert!(body.contains("Gran Concierto de Verano"));
    assert!(!body.contains("Limpiar filtros ("));
}

#[test]
fn text_and_choice_filters_combine() {
    let mut resp = send(get("/eventos?buscar=CONCIERTO&tipo=concierto", None), &source());
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Concierto de Primavera"));
    assert!(body.contains("Gran Concierto de Verano"));
    assert!(!body.contains("Ensayo general"));
    assert!(body.contains("Limpiar filtros (2)"));
}

#[test]
fn upcoming_public_events_only() {
    let mut resp = send(get("/eventos?estado=proximo&publico=true", None), &source());
    let body = body_string(&mut resp);

    assert!(body.contains("Gran Concierto de Verano"));
    assert!(!body.contains("Concierto de Primavera"));
    assert!(!body.contains("Ensayo general"));
}

#[test]
fn date_range_is_inclusive() {
    let mut resp = send(
        get("/eventos?fechaDesde=2999-06-01&fechaHasta=2999-07-20", None),
        &source(),
    );
    let body = body_string(&mut resp);

    assert!(body.contains("Ensayo general"));
    assert!(body.contains("Gran Concierto de Verano"));
    assert!(!body.contains("Concierto de Primavera"));
    assert!(body.contains("01/06/2999 – 20/07/2999"));
}

#[test]
fn malformed_params_are_ignored() {
    let mut resp = send(get("/eventos?fechaDesde=ayer&estado=pronto&otro=1", None), &source());
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Concierto de Primavera"));
    assert!(body.contains("Ensayo general"));
}

#[test]
fn no_match_shows_empty_state() {
    let mut resp = send(get("/eventos?buscar=zarzuela", None), &source());
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(!body.contains("Concierto de Primavera"));
    assert!(body.contains("Limpiar filtros (1)"));
}
