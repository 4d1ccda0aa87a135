//! Product HTTP handlers.
//!
//! ```text
//! GET    /api/products
//! GET    /api/products/{id}
//! POST   /api/products
//! PUT    /api/products
//! DELETE /api/products
//! ```
//!
//! Every handler answers with the response envelope. Validation failures
//! are part of the envelope; only infrastructure failures become an
//! [`Error`](crate::domain::Error) response.

use actix_web::{HttpResponse, delete, get, post, put, web};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ProductId;
use crate::domain::ports::{CreateProductRequest, DeleteProductRequest, UpdateProductRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{
    EmptyEnvelope, ErrorSchema, ProductEnvelope, ProductListEnvelope,
};
use crate::inbound::http::state::HttpState;

/// Request payload for creating a product.
///
/// Missing fields default to their zero value so that they reach business
/// validation instead of failing deserialisation.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateProductRequestBody {
    #[schema(example = "Pen")]
    pub name: Option<String>,
    #[schema(value_type = f64, example = 2.5)]
    pub price: Decimal,
    #[schema(example = 10)]
    pub quantity: i32,
}

impl From<CreateProductRequestBody> for CreateProductRequest {
    fn from(body: CreateProductRequestBody) -> Self {
        Self {
            name: body.name.unwrap_or_default(),
            price: body.price,
            quantity: body.quantity,
        }
    }
}

/// Request payload replacing an existing product.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateProductRequestBody {
    #[schema(example = "65f0c0ffee00000000000001")]
    pub id: Option<String>,
    pub name: Option<String>,
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub quantity: i32,
}

impl From<UpdateProductRequestBody> for UpdateProductRequest {
    fn from(body: UpdateProductRequestBody) -> Self {
        Self {
            id: ProductId::new(body.id.unwrap_or_default()),
            name: body.name.unwrap_or_default(),
            price: body.price,
            quantity: body.quantity,
        }
    }
}

/// Request payload naming the product to delete.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct DeleteProductRequestBody {
    #[schema(example = "65f0c0ffee00000000000001")]
    pub id: Option<String>,
}

impl From<DeleteProductRequestBody> for DeleteProductRequest {
    fn from(body: DeleteProductRequestBody) -> Self {
        Self {
            id: ProductId::new(body.id.unwrap_or_default()),
        }
    }
}

/// List every product.
#[utoipa::path(
    get,
    path = "/api/products",
    tags = ["products"],
    responses(
        (status = 200, description = "All stored products", body = ProductListEnvelope),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Document store unavailable", body = ErrorSchema)
    )
)]
#[get("/products")]
pub async fn list_products(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let envelope = state.product_query.get_all().await?;
    Ok(state.status_policy.respond(&envelope))
}

/// Fetch one product by identifier.
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tags = ["products"],
    params(("id" = String, Path, description = "Product identifier")),
    responses(
        (status = 200, description = "Product found", body = ProductEnvelope),
        (status = 400, description = "Product not found", body = ProductEnvelope),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Document store unavailable", body = ErrorSchema)
    )
)]
#[get("/products/{id}")]
pub async fn get_product(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = ProductId::new(path.into_inner());
    let envelope = state.product_query.get_by_id(&id).await?;
    Ok(state.status_policy.respond(&envelope))
}

/// Validate and create a product.
#[utoipa::path(
    post,
    path = "/api/products",
    tags = ["products"],
    request_body = CreateProductRequestBody,
    responses(
        (status = 201, description = "Product created", body = ProductEnvelope),
        (status = 400, description = "Validation failed or malformed body", body = ProductEnvelope),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Document store unavailable", body = ErrorSchema)
    )
)]
#[post("/products")]
pub async fn create_product(
    state: web::Data<HttpState>,
    payload: web::Json<CreateProductRequestBody>,
) -> ApiResult<HttpResponse> {
    let envelope = state
        .product_command
        .create(payload.into_inner().into())
        .await?;
    Ok(state.status_policy.respond(&envelope))
}

/// Validate and replace an existing product.
#[utoipa::path(
    put,
    path = "/api/products",
    tags = ["products"],
    request_body = UpdateProductRequestBody,
    responses(
        (status = 200, description = "Product replaced", body = ProductEnvelope),
        (status = 400, description = "Validation failed or malformed body", body = ProductEnvelope),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Document store unavailable", body = ErrorSchema)
    )
)]
#[put("/products")]
pub async fn update_product(
    state: web::Data<HttpState>,
    payload: web::Json<UpdateProductRequestBody>,
) -> ApiResult<HttpResponse> {
    let envelope = state
        .product_command
        .update(payload.into_inner().into())
        .await?;
    Ok(state.status_policy.respond(&envelope))
}

/// Delete an existing product.
#[utoipa::path(
    delete,
    path = "/api/products",
    tags = ["products"],
    request_body = DeleteProductRequestBody,
    responses(
        (status = 200, description = "Product deleted", body = EmptyEnvelope),
        (status = 400, description = "Product not found or malformed body", body = EmptyEnvelope),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Document store unavailable", body = ErrorSchema)
    )
)]
#[delete("/products")]
pub async fn delete_product(
    state: web::Data<HttpState>,
    payload: web::Json<DeleteProductRequestBody>,
) -> ApiResult<HttpResponse> {
    let envelope = state
        .product_command
        .delete(payload.into_inner().into())
        .await?;
    Ok(state.status_policy.respond(&envelope))
}

/// Register the product routes on `cfg`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_products)
        .service(get_product)
        .service(create_product)
        .service(update_product)
        .service(delete_product);
}

#[cfg(test)]
#[path = "products_tests.rs"]
mod tests;
