//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their serialised shape and live in the inbound
//! adapter layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request body could not be parsed.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The document store could not be reached.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// Infrastructure failure payload. Validation problems are reported inside
/// the envelope instead.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "service_unavailable")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Service temporarily unavailable")]
    message: String,
    /// Correlation identifier, also sent as the `trace-id` header.
    #[schema(rename = "traceId", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
}

/// OpenAPI schema for [`crate::domain::Product`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Product)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ProductSchema {
    /// Store-assigned identifier (24 hexadecimal characters).
    #[schema(example = "65f0c0ffee00000000000001")]
    id: String,
    #[schema(example = "Pen")]
    name: String,
    /// Unit price; always greater than zero for products created here.
    #[schema(example = 2.5)]
    price: f64,
    #[schema(example = 10)]
    quantity: i32,
}

/// OpenAPI schema for [`crate::domain::ValidationError`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ValidationError)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ValidationErrorSchema {
    /// Input field or identifier the error refers to.
    #[schema(example = "Name")]
    field: String,
    #[schema(rename = "errorMessage", example = "O nome do produto é obrigatório.")]
    error_message: String,
}

/// Envelope carrying a single product.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ProductEnvelope {
    /// Absent when `errors` is non-empty.
    data: Option<ProductSchema>,
    errors: Vec<ValidationErrorSchema>,
}

/// Envelope carrying every product.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ProductListEnvelope {
    data: Option<Vec<ProductSchema>>,
    errors: Vec<ValidationErrorSchema>,
}

/// Envelope with no payload, returned by delete.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EmptyEnvelope {
    /// Always `null`.
    #[schema(value_type = Option<Object>)]
    data: Option<()>,
    errors: Vec<ValidationErrorSchema>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn property_names<T: PartialSchema>() -> Vec<String> {
        match T::schema() {
            RefOr::T(Schema::Object(object)) => object.properties.keys().cloned().collect(),
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn error_schema_uses_wire_field_names() {
        let names = property_names::<ErrorSchema>();
        assert!(names.contains(&"traceId".to_owned()));
        assert!(names.contains(&"code".to_owned()));
    }

    #[test]
    fn validation_error_schema_uses_wire_field_names() {
        let names = property_names::<ValidationErrorSchema>();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"field".to_owned()));
        assert!(names.contains(&"errorMessage".to_owned()));
    }
}
