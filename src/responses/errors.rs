use crate::errors::ServerError;
use crate::templates::components::error_page;
use astra::{Body, Response, ResponseBuilder};
use tracing::{error, warn};

pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into a proper HTML response
pub fn error_to_response(err: ServerError) -> Response {
    let status = err.status();
    if status >= 500 {
        error!("{err}");
    } else {
        warn!("{err}");
    }

    let message = match &err {
        ServerError::NotFound => "Página no encontrada".to_string(),
        ServerError::Unauthorized(msg) => msg.clone(),
        ServerError::Upstream(crate::api::ApiError::Unauthorized) => {
            "Tu sesión no es válida. Vuelve a iniciar sesión.".to_string()
        }
        ServerError::Upstream(e) => format!("No se pudieron cargar los datos: {e}"),
        other => other.to_string(),
    };

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(error_page(status, &message).into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
