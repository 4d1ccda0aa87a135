//! Builders wiring the Mongo adapters into HTTP state.

use std::sync::Arc;

use actix_web::web;

use product_service::domain::ProductService;
use product_service::inbound::http::state::{HttpState, HttpStatePorts};
use product_service::outbound::persistence::MongoProductRepository;

use super::ServerConfig;

/// Build handler state backed by the configured document store.
///
/// One [`ProductService`] serves both the query and the command port.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let repository = Arc::new(MongoProductRepository::new(&config.store));
    let service = Arc::new(ProductService::new(repository));
    let state = HttpState::new(HttpStatePorts {
        product_query: service.clone(),
        product_command: service,
    })
    .with_status_policy(config.status_policy);
    web::Data::new(state)
}
