use actix_cors::Cors;

/// The wheel frontend may be served from anywhere, so every origin is allowed.
pub fn create_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_any_header()
        .max_age(3600)
}
