mod middlewares;
mod routes;

use crate::common::mock_server::middlewares::MiddlewareFn;
use actix_web::{web, App, HttpServer};
use reqwest::Url;
use serde_json::Value;
use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};
use tokio::sync::oneshot;

#[derive(Clone)]
struct MockServerConfiguration {
    merchant_id: String,
    public_key: String,
    private_key: String,
}

#[derive(Clone, Default)]
struct MockServerStorageInner {
    customers: HashMap<String, Value>,
    /// Vaulted cards, in creation order.
    credit_cards: Vec<Value>,
    transactions: HashMap<String, Value>,
}

/// In-memory storage for the entities created on the mock server.
type MockServerStorage = Arc<RwLock<MockServerStorageInner>>;

/// Simple in-memory gateway used in local integration tests.
///
/// Settlement is simulated: a transaction submitted for settlement moves one step
/// towards `settled` every time it is fetched.
pub struct BraintreeMockServer {
    url: Url,
    shutdown: Option<oneshot::Sender<()>>,
}

impl BraintreeMockServer {
    pub async fn start(merchant_id: &str, public_key: &str, private_key: &str) -> Self {
        let configuration = MockServerConfiguration {
            merchant_id: merchant_id.to_string(),
            public_key: public_key.to_string(),
            private_key: private_key.to_string(),
        };
        let storage = MockServerStorage::default();

        // Setup the mock HTTP server and bind it to a random port
        let http_server_factory = HttpServer::new(move || {
            App::new()
                .app_data(web::Data::new(storage.clone()))
                // Every request must identify the client and the API version
                .wrap(MiddlewareFn::new(middlewares::validate_user_agent))
                .wrap(MiddlewareFn::new(middlewares::validate_api_version))
                .service(
                    web::scope(&format!("/merchants/{}", configuration.merchant_id))
                        .wrap(MiddlewareFn::new(middlewares::validate_authorization(
                            configuration.clone(),
                        )))
                        .service(
                            web::resource("/customers")
                                .route(web::post().to(routes::create_customer)),
                        )
                        .service(
                            web::resource("/customers/{id}")
                                .route(web::get().to(routes::find_customer))
                                .route(web::put().to(routes::update_customer))
                                .route(web::delete().to(routes::delete_customer)),
                        )
                        .service(
                            web::resource("/payment_methods")
                                .route(web::post().to(routes::create_credit_card)),
                        )
                        .service(
                            web::resource("/payment_methods/credit_card/{token}")
                                .route(web::get().to(routes::find_credit_card))
                                .route(web::put().to(routes::update_credit_card))
                                .route(web::delete().to(routes::delete_credit_card)),
                        )
                        .service(
                            web::resource("/transactions")
                                .route(web::post().to(routes::create_transaction)),
                        )
                        .service(
                            web::resource("/transactions/{id}")
                                .route(web::get().to(routes::find_transaction)),
                        )
                        .service(
                            web::resource("/transactions/{id}/void")
                                .route(web::put().to(routes::void_transaction)),
                        )
                        .service(
                            web::resource("/transactions/{id}/submit_for_settlement")
                                .route(web::put().to(routes::submit_for_settlement)),
                        )
                        .service(
                            web::resource("/transactions/{id}/refund")
                                .route(web::post().to(routes::refund_transaction)),
                        ),
                )
        })
        .workers(1)
        .bind("127.0.0.1:0")
        .unwrap();

        // Retrieve the address and port the server was bound to
        let addr = http_server_factory.addrs().first().cloned().unwrap();

        // Prepare a oneshot channel to kill the HTTP server when this struct is dropped
        let (shutdown_sender, shutdown_recv) = oneshot::channel();

        // Start the server in another task
        let http_server = http_server_factory.run();
        tokio::spawn(async move {
            tokio::select! {
                _ = http_server => panic!("HTTP server crashed"),
                _ = shutdown_recv => { /* Intentional shutdown */ }
            }
        });

        Self {
            url: Url::parse(&format!("http://{}", addr)).unwrap(),
            shutdown: Some(shutdown_sender),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl Drop for BraintreeMockServer {
    fn drop(&mut self) {
        // Send a shutdown signal to the actix server on drop
        let _ = self.shutdown.take().unwrap().send(());
    }
}
