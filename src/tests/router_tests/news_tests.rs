use crate::api::Resource;
use crate::tests::utils::{body_string, get, send, FixtureSource};
use serde_json::json;

fn source() -> FixtureSource {
    FixtureSource::default().with(
        Resource::News,
        json!([
            { "id_noticia": 1, "titulo": "Gira por Andalucía", "categoria": "Giras",
              "fecha_publicacion": "2025-05-10T09:30:00", "destacada": 1 },
            { "id_noticia": 2, "titulo": "Nuevo director titular", "categoria": "Prensa",
              "fecha_publicacion": "2025-05-20", "destacada": 0 },
            { "id_noticia": 3, "titulo": "Audiciones abiertas", "categoria": "Prensa",
              "fecha_publicacion": "2025-07-01", "destacada": true },
            { "id_noticia": 4, "titulo": "Nota sin fecha", "destacada": "1" }
        ]),
    )
}

#[test]
fn publication_range_and_featured_flag() {
    let mut resp = send(
        get("/noticias?fechaDesde=2025-05-01&fechaHasta=2025-05-31&destacada=true", None),
        &source(),
    );
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Gira por Andalucía"));
    assert!(!body.contains("Nuevo director titular"));
    assert!(!body.contains("Audiciones abiertas"));
    assert!(!body.contains("Nota sin fecha"));

    assert!(body.contains("Publicación: 01/05/2025 – 31/05/2025"));
    assert!(body.contains("Destacada: Sí"));
    assert!(body.contains("Limpiar filtros (2)"));
}

#[test]
fn category_choices_come_from_the_news() {
    let mut resp = send(get("/noticias?categoria=Prensa", None), &source());
    let body = body_string(&mut resp);

    assert!(body.contains("Nuevo director titular"));
    assert!(body.contains("Audiciones abiertas"));
    assert!(!body.contains("Gira por Andalucía"));
    assert!(body.contains(r#"<option value="Giras">Giras</option>"#));
}
