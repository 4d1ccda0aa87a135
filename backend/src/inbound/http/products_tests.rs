//! Tests for product HTTP handlers.

use super::*;
use crate::domain::ports::{MockProductCommand, MockProductQuery};
use crate::domain::{Error, Product, ProductService, ResponseEnvelope};
use crate::inbound::http::json_config;
use crate::inbound::http::state::HttpStatePorts;
use crate::inbound::http::StatusPolicy;
use crate::test_support::InMemoryProductRepository;
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::sync::Arc;

const PEN_ID: &str = "65f0c0ffee00000000000001";

fn pen() -> Product {
    Product {
        id: ProductId::new(PEN_ID),
        name: "Pen".to_owned(),
        price: Decimal::new(25, 1),
        quantity: 10,
    }
}

#[fixture]
fn seeded_state() -> HttpState {
    let service = Arc::new(ProductService::new(Arc::new(
        InMemoryProductRepository::with_products([pen()]),
    )));
    HttpState::new(HttpStatePorts {
        product_query: service.clone(),
        product_command: service,
    })
}

fn test_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(json_config())
        .service(web::scope("/api").configure(configure))
}

async fn call(state: HttpState, request: actix_test::TestRequest) -> (StatusCode, Value) {
    let app = actix_test::init_service(test_app(state)).await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body: Value = actix_test::read_body_json(response).await;
    (status, body)
}

#[rstest]
#[actix_web::test]
async fn list_products_returns_envelope(seeded_state: HttpState) {
    let (status, body) = call(seeded_state, actix_test::TestRequest::get().uri("/api/products")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "data": [{"id": PEN_ID, "name": "Pen", "price": 2.5, "quantity": 10}],
            "errors": []
        })
    );
}

#[rstest]
#[actix_web::test]
async fn get_product_returns_stored_product(seeded_state: HttpState) {
    let (status, body) = call(
        seeded_state,
        actix_test::TestRequest::get().uri(&format!("/api/products/{PEN_ID}")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Pen");
}

#[rstest]
#[actix_web::test]
async fn get_product_reports_unknown_id(seeded_state: HttpState) {
    let (status, body) = call(
        seeded_state,
        actix_test::TestRequest::get().uri("/api/products/not-an-object-id"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "data": null,
            "errors": [{"field": "Id", "errorMessage": "Produto não encontrado"}]
        })
    );
}

#[rstest]
#[actix_web::test]
async fn create_product_returns_created_envelope(seeded_state: HttpState) {
    let (status, body) = call(
        seeded_state,
        actix_test::TestRequest::post()
            .uri("/api/products")
            .set_json(json!({"name": "Lamp", "price": 19.99, "quantity": 3})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["errors"], json!([]));
    assert_eq!(body["data"]["name"], "Lamp");
    assert_eq!(body["data"]["price"], json!(19.99));
    assert_eq!(body["data"]["id"].as_str().map(str::len), Some(24));
}

#[rstest]
#[actix_web::test]
async fn create_product_accepts_string_prices(seeded_state: HttpState) {
    let (status, body) = call(
        seeded_state,
        actix_test::TestRequest::post()
            .uri("/api/products")
            .set_json(json!({"name": "Lamp", "price": "19.99", "quantity": 3})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["price"], json!(19.99));
}

#[rstest]
#[case(json!("12345678901234567.89"))]
#[case(serde_json::from_str::<Value>("12345678901234567.89").expect("number literal"))]
#[actix_web::test]
async fn create_product_echoes_high_precision_price_exactly(#[case] price: Value) {
    let repository = Arc::new(InMemoryProductRepository::new());
    let service = Arc::new(ProductService::new(repository.clone()));
    let state = HttpState::new(HttpStatePorts {
        product_query: service.clone(),
        product_command: service,
    });

    let (status, body) = call(
        state,
        actix_test::TestRequest::post()
            .uri("/api/products")
            .set_json(json!({"name": "Yacht", "price": price, "quantity": 1})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["data"]["price"].is_number());
    assert_eq!(body["data"]["price"].to_string(), "12345678901234567.89");
    assert_eq!(
        repository.products()[0].price.to_string(),
        "12345678901234567.89"
    );
}

#[rstest]
#[case(json!({"name": "", "price": 5, "quantity": 1}), "Name", "O nome do produto é obrigatório.")]
#[case(json!({"name": "Pen", "price": 0, "quantity": 1}), "Price", "O preço do produto deve ser maior que zero.")]
#[case(json!({}), "Price", "O preço do produto deve ser maior que zero.")]
#[case(json!({"name": null, "price": 1}), "Name", "O nome do produto é obrigatório.")]
#[actix_web::test]
async fn create_product_reports_validation_errors(
    seeded_state: HttpState,
    #[case] payload: Value,
    #[case] field: &str,
    #[case] message: &str,
) {
    let (status, body) = call(
        seeded_state,
        actix_test::TestRequest::post()
            .uri("/api/products")
            .set_json(payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"data": null, "errors": [{"field": field, "errorMessage": message}]})
    );
}

#[rstest]
#[actix_web::test]
async fn malformed_json_is_an_invalid_request(seeded_state: HttpState) {
    let (status, body) = call(
        seeded_state,
        actix_test::TestRequest::post()
            .uri("/api/products")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"name\": "),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_request");
}

#[rstest]
#[actix_web::test]
async fn legacy_policy_answers_ok_for_validation_failures(seeded_state: HttpState) {
    let state = seeded_state.with_status_policy(StatusPolicy::AlwaysOk);

    let (status, body) = call(
        state,
        actix_test::TestRequest::delete()
            .uri("/api/products")
            .set_json(json!({"id": "65f0c0ffee00000000000099"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["errors"][0]["field"], "Id");
    assert_eq!(
        body["errors"][0]["errorMessage"],
        "Produto não encontrado para exclusão"
    );
}

#[rstest]
#[actix_web::test]
async fn update_product_replaces_fields(seeded_state: HttpState) {
    let (status, body) = call(
        seeded_state,
        actix_test::TestRequest::put().uri("/api/products").set_json(json!({
            "id": PEN_ID,
            "name": "Fountain pen",
            "price": 12.5,
            "quantity": 4
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!({"id": PEN_ID, "name": "Fountain pen", "price": 12.5, "quantity": 4})
    );
}

#[rstest]
#[actix_web::test]
async fn delete_product_returns_empty_envelope(seeded_state: HttpState) {
    let (status, body) = call(
        seeded_state,
        actix_test::TestRequest::delete()
            .uri("/api/products")
            .set_json(json!({"id": PEN_ID})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"data": null, "errors": []}));
}

#[rstest]
#[actix_web::test]
async fn store_outage_surfaces_as_service_unavailable() {
    let mut query = MockProductQuery::new();
    query
        .expect_get_all()
        .times(1)
        .return_once(|| Err(Error::service_unavailable("product repository unavailable")));
    let state = HttpState::new(HttpStatePorts {
        product_query: Arc::new(query),
        product_command: Arc::new(MockProductCommand::new()),
    });

    let (status, body) = call(state, actix_test::TestRequest::get().uri("/api/products")).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "service_unavailable");
    assert_eq!(body["message"], "Service temporarily unavailable");
}

#[rstest]
#[actix_web::test]
async fn handlers_pass_request_fields_to_the_command_port() {
    let mut command = MockProductCommand::new();
    command
        .expect_create()
        .withf(|request: &CreateProductRequest| {
            request.name == "Pen" && request.price == Decimal::new(25, 1) && request.quantity == 10
        })
        .times(1)
        .return_once(|_| Ok(ResponseEnvelope::with_data(pen())));
    let state = HttpState::new(HttpStatePorts {
        product_query: Arc::new(MockProductQuery::new()),
        product_command: Arc::new(command),
    });

    let (status, body) = call(
        state,
        actix_test::TestRequest::post()
            .uri("/api/products")
            .set_json(json!({"name": "Pen", "price": 2.5, "quantity": 10})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], PEN_ID);
}
