use axum::{Router, routing::get};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use crate::config::app_conf::AppConfig;
use crate::config::mongo_conf::MongoConfig;
use crate::config::revolut_conf::RevolutConfig;
use crate::repository::directory_repo::MongoDirectoryRepository;
use crate::router::directory_router::directory_router;
use crate::router::payment_router::payment_router;
use crate::router::quote_router::quote_router;
use crate::service::payment_service::RevolutPaymentService;
use crate::service::quote_service::QuoteServiceImpl;

pub struct App {
    config: AppConfig,
    router: Router,
    pub quote_service: Arc<QuoteServiceImpl>,
    pub payment_service: Arc<RevolutPaymentService>,
    pub directory_repo: Arc<MongoDirectoryRepository>,
}

impl App {
    pub async fn new() -> Self {
        let config = AppConfig::from_env().expect("App config error");
        let mongo_config = MongoConfig::from_env().expect("Mongo config error");
        let revolut_config = RevolutConfig::from_env().expect("Revolut config error");

        let quote_service = Arc::new(
            QuoteServiceImpl::new(&mongo_config)
                .await
                .expect("Quote service error"),
        );
        let payment_service = Arc::new(RevolutPaymentService::new(revolut_config));
        let directory_repo = Arc::new(
            MongoDirectoryRepository::new(&mongo_config)
                .await
                .expect("Directory repo error"),
        );

        let mut app = App {
            config,
            router: Router::new(),
            quote_service,
            payment_service,
            directory_repo,
        };
        app.router = app.create_router();
        app
    }

    fn create_router(&self) -> Router {
        Router::new()
            .merge(quote_router(self.quote_service.clone()))
            .merge(payment_router(self.payment_service.clone()))
            .merge(directory_router(self.directory_repo.clone()))
            .route("/health", get(|| async { "OK" }))
    }

    pub async fn start(self) {
        let addr = SocketAddr::new(self.config.host.parse().expect("Invalid host"), self.config.port);
        info!("🚀 Server running at http://{}", addr);
        let listener = tokio::net::TcpListener::bind(addr).await.expect("Failed to bind address");
        axum::serve(listener, self.router).await.expect("Failed to start server");
    }
}
