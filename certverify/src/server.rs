use actix_web::{http::header::ContentType, web, App, HttpResponse, HttpServer};
use chrono::Local;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{
    utils::{CERTIFICATE_PATH, CERTIFICATE_QUERY_PARAM},
    view::CertificateView,
};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    pub listen_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: "127.0.0.1:3000".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CertificateQuery {
    data: Option<String>,
}

/// Serves the certificate page. Everything it shows comes from the `data`
/// query parameter; the server keeps no state between requests.
pub struct ServerApp {
    config: ServerConfig,
}

impl ServerApp {
    pub fn new(config: ServerConfig) -> Self {
        debug!("Creating new ServerApp instance");
        Self { config }
    }

    async fn certificate_handler(
        query: Result<web::Query<CertificateQuery>, actix_web::Error>,
    ) -> HttpResponse {
        let data = query.ok().and_then(|q| q.into_inner().data);
        let token = data.as_deref().filter(|t| !t.is_empty());
        let view = CertificateView::from_token(token, Local::now());
        match &view {
            CertificateView::Certificate(details) => info!(
                "Rendering certificate with verdict {}",
                details.result.final_verdict
            ),
            CertificateView::NoData => debug!(
                "No usable `{}` parameter, rendering empty certificate page",
                CERTIFICATE_QUERY_PARAM
            ),
        }
        HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(view.render_html())
    }

    async fn health_handler() -> HttpResponse {
        HttpResponse::Ok().body("ok")
    }

    /// Registers the certificate routes on an actix-web service config.
    pub fn configure(cfg: &mut web::ServiceConfig) {
        cfg.route(CERTIFICATE_PATH, web::get().to(Self::certificate_handler))
            .route("/health", web::get().to(Self::health_handler));
    }

    pub async fn run(self) -> std::io::Result<()> {
        let address = self.config.listen_address.clone();
        info!("Starting certificate server on {}", address);

        HttpServer::new(|| App::new().configure(Self::configure))
            .bind(address)?
            .run()
            .await
    }

    pub fn get_listen_address(&self) -> &str {
        &self.config.listen_address
    }
}
