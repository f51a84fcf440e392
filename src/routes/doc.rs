use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::products::ProductRequest,
    models::Product,
    response::{ErrorResponse, FieldError},
    routes::{self, health, params, products},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Beauty Products API",
        description = "API for managing beauty products",
        version = "1.0.0"
    ),
    paths(
        routes::welcome_message,
        health::health_check,
        products::list_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product
    ),
    components(
        schemas(
            Product,
            ProductRequest,
            params::ListProductsQuery,
            health::HealthData,
            FieldError,
            ErrorResponse<String>,
            ErrorResponse<Vec<FieldError>>
        )
    ),
    tags(
        (name = "Health", description = "Service endpoints"),
        (name = "Products", description = "Product endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_product_route() {
        let spec = ApiDoc::openapi();
        let paths = &spec.paths.paths;
        assert!(paths.contains_key("/products"));
        assert!(paths.contains_key("/products/{id}"));
        assert!(paths.contains_key("/health"));
        assert_eq!(spec.info.title, "Beauty Products API");
    }

    #[test]
    fn list_response_is_documented_as_array() {
        let spec = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let schema = &spec["paths"]["/products"]["get"]["responses"]["200"]["content"]
            ["application/json"]["schema"];
        assert_eq!(schema["type"], "array");
        assert_eq!(schema["items"]["$ref"], "#/components/schemas/Product");
    }
}
