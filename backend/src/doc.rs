//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer (products,
//! health) and the schema wrappers that describe domain types without
//! coupling them to utoipa. Swagger UI serves it in debug builds.

use crate::inbound::http::products::{
    CreateProductRequestBody, DeleteProductRequestBody, UpdateProductRequestBody,
};
use crate::inbound::http::schemas::{
    EmptyEnvelope, ErrorCodeSchema, ErrorSchema, ProductEnvelope, ProductListEnvelope,
    ProductSchema, ValidationErrorSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product catalogue API",
        description = "CRUD access to catalogue products, wrapped in a uniform response envelope."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::products::list_products,
        crate::inbound::http::products::get_product,
        crate::inbound::http::products::create_product,
        crate::inbound::http::products::update_product,
        crate::inbound::http::products::delete_product,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ProductSchema,
        ValidationErrorSchema,
        ProductEnvelope,
        ProductListEnvelope,
        EmptyEnvelope,
        ErrorSchema,
        ErrorCodeSchema,
        CreateProductRequestBody,
        UpdateProductRequestBody,
        DeleteProductRequestBody,
    )),
    tags(
        (name = "products", description = "Product catalogue operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
