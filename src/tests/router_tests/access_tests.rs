use crate::api::{ApiError, Resource};
use crate::tests::utils::{body_string, get, send, FixtureSource};
use serde_json::json;

fn attendance() -> FixtureSource {
    FixtureSource::default().with(
        Resource::Attendance,
        json!([
            { "id_asistencia": 1, "alumno": "Marta Ruiz", "instrumento": "Violín",
              "fecha": "2025-03-01", "asistio": 1 },
            { "id_asistencia": 2, "alumno": "Pablo Gil", "instrumento": "Oboe",
              "fecha": "2025-03-01", "asistio": 0 }
        ]),
    )
}

#[test]
fn home_page_is_public() {
    let resp = send(get("/", None), &FixtureSource::default());
    assert_eq!(resp.status(), 200);
}

#[test]
fn unknown_path_is_404() {
    let resp = send(get("/no-existe", None), &FixtureSource::default());
    assert_eq!(resp.status(), 404);
}

#[test]
fn attendance_without_token_is_401_and_never_fetched() {
    let source = attendance();
    let mut resp = send(get("/asistencias", None), &source);

    assert_eq!(resp.status(), 401);
    assert!(body_string(&mut resp).contains("Inicia sesión"));
    assert!(source.tokens.lock().unwrap().is_empty());
}

#[test]
fn token_cookie_is_forwarded_to_the_backend() {
    let source = attendance();
    let mut resp = send(get("/asistencias", Some("abc.def.ghi")), &source);

    assert_eq!(resp.status(), 200);
    assert!(body_string(&mut resp).contains("Marta Ruiz"));
    assert_eq!(
        source.tokens.lock().unwrap().as_slice(),
        [Some("abc.def.ghi".to_string())]
    );
}

#[test]
fn bearer_header_works_like_the_cookie() {
    let source = attendance();
    let req = http::Request::builder()
        .uri("/asistencias?buscar=pablo")
        .header("Authorization", "Bearer t0k3n")
        .body(astra::Body::empty())
        .unwrap();

    let mut resp = send(req, &source);
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Pablo Gil"));
    assert!(!body.contains("Marta Ruiz"));
}

#[test]
fn rejected_token_is_401() {
    let source = FixtureSource::failing(ApiError::Unauthorized);
    let mut resp = send(get("/asistencias", Some("caducado")), &source);

    assert_eq!(resp.status(), 401);
    assert!(body_string(&mut resp).contains("Vuelve a iniciar sesión"));
}

#[test]
fn backend_failure_is_502() {
    let source = FixtureSource::failing(ApiError::Network("connection refused".into()));
    let mut resp = send(get("/eventos", None), &source);

    assert_eq!(resp.status(), 502);
    assert!(body_string(&mut resp).contains("No se pudieron cargar los datos"));
}

#[test]
fn backend_status_page_shows_only_the_code() {
    let source = FixtureSource::failing(ApiError::Status(500));
    let mut resp = send(get("/noticias", None), &source);

    assert_eq!(resp.status(), 502);
    assert!(body_string(&mut resp).contains("No se pudieron cargar los datos: Backend responded 500</p>"));
}
