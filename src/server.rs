use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, get, post, web};
use tracing::info;

use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::relay::RelayState;

#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().body("Ok")
}

/// Single chat route: the raw request body is the query string.
#[post("/api/v1/chat/ask")]
pub async fn ask(
    body: web::Bytes,
    app_state: web::Data<RelayState>,
) -> Result<HttpResponse, RelayError> {
    let query = std::str::from_utf8(&body).map_err(|_| RelayError::InvalidRequest)?;
    let response = app_state.process_chat(query).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// CORS for the local frontends: any method, any header, credentials allowed.
pub fn cors(origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600);
    for origin in origins {
        cors = cors.allowed_origin(origin);
    }
    cors
}

pub async fn startup(config: RelayConfig, relay_state: RelayState) -> std::io::Result<()> {
    info!("Starting relay on {}:{}", config.host, config.port);
    info!("Upstream chat service at {}", config.upstream_url);
    info!("CORS origins: {:?}", config.cors_origins);

    let app_state = web::Data::new(relay_state);
    let cors_origins = config.cors_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(cors(&cors_origins))
            .app_data(app_state.clone())
            .service(health)
            .service(ask)
    })
    .bind((config.host, config.port))?
    .run()
    .await
}
