use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use validator::Validate;

use crate::{
    dto::products::ProductRequest,
    error::{AppError, AppResult},
    extract::{AppJson, AppPath, AppQuery},
    models::Product,
    response::{ErrorResponse, FieldError},
    routes::params::ListProductsQuery,
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}

#[utoipa::path(
    get,
    path = "/products",
    params(ListProductsQuery),
    responses(
        (status = 200, description = "List products", body = Vec<Product>),
        (status = 422, description = "Invalid query parameters", body = ErrorResponse<Vec<FieldError>>),
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ListProductsQuery>,
) -> AppResult<Json<Vec<Product>>> {
    let products = product_service::list_products(&state, query).await?;
    Ok(Json(products))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Get product", body = Product),
        (status = 404, description = "Product not found", body = ErrorResponse<String>),
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<Json<Product>> {
    let product = product_service::get_product(&state, id).await?;
    Ok(Json(product))
}

#[utoipa::path(
    post,
    path = "/products",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 422, description = "Validation failed", body = ErrorResponse<Vec<FieldError>>),
    ),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ProductRequest>,
) -> AppResult<(StatusCode, Json<Product>)> {
    payload
        .validate()
        .map_err(|errors| AppError::invalid("body", &errors))?;
    let product = product_service::create_product(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    put,
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product replaced", body = Product),
        (status = 404, description = "Product not found", body = ErrorResponse<String>),
        (status = 422, description = "Validation failed", body = ErrorResponse<Vec<FieldError>>),
    ),
    tag = "Products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<ProductRequest>,
) -> AppResult<Json<Product>> {
    payload
        .validate()
        .map_err(|errors| AppError::invalid("body", &errors))?;
    let product = product_service::update_product(&state, id, payload).await?;
    Ok(Json(product))
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found", body = ErrorResponse<String>),
    ),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<StatusCode> {
    product_service::delete_product(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
