//! HTTP handlers for Products API

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
    AppError, Envelope, JsonBody, QueryParams,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{ProductError, ProductResult};
use crate::models::{
    ListQuery, Pagination, Product, ProductInput, ProductListResponse, SearchQuery,
    SearchResponse,
};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        search_products,
        get_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(Product, ProductInput, Pagination, ProductListResponse, SearchResponse),
        responses(
            NotFoundResponse,
            BadRequestResponse,
            BadRequestValidationResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/search", get(search_products))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(shared_service)
}

/// Path ids that are not non-negative integers name no product
fn parse_id(raw: &str) -> ProductResult<u64> {
    raw.parse::<u64>()
        .map_err(|_| ProductError::NotFound(raw.to_string()))
}

/// List products, one page at a time
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ListQuery),
    responses(
        (status = 200, description = "One page of products", body = ProductListResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    pairs: Result<QueryParams<Vec<(String, String)>>, AppError>,
) -> ProductResult<Json<ProductListResponse>> {
    let query: ListQuery = pairs
        .map(|QueryParams(pairs)| pairs.into_iter().collect())
        .unwrap_or_default();
    let response = service.list_products(query.page(), query.limit()).await?;
    Ok(Json(response))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = ProductInput,
    responses(
        (status = 201, description = "Product created successfully", body = Envelope<Product>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    JsonBody(input): JsonBody<ProductInput>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok(Envelope::ok(product)
        .with_message("Product created successfully")
        .with_status(StatusCode::CREATED))
}

/// Search products by name or description
#[utoipa::path(
    get,
    path = "/search",
    tag = "Products",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching products", body = SearchResponse),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn search_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    QueryParams(query): QueryParams<SearchQuery>,
) -> ProductResult<Json<SearchResponse>> {
    let products = service.search_products(query.q.as_deref()).await?;
    Ok(Json(SearchResponse {
        success: true,
        total_results: products.len(),
        data: products,
        search_query: query.q.unwrap_or_default(),
    }))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = u64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Envelope<Product>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<Envelope<Product>> {
    let product = service.get_product(parse_id(&id)?).await?;
    Ok(Envelope::ok(product))
}

/// Replace a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = u64, Path, description = "Product ID")
    ),
    request_body = ProductInput,
    responses(
        (status = 200, description = "Product updated successfully", body = Envelope<Product>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
    body: Result<JsonBody<ProductInput>, AppError>,
) -> Result<Envelope<Product>, AppError> {
    let id = parse_id(&id)?;
    // An unknown id wins over an unreadable body
    service.ensure_exists(id, "update").await?;
    let JsonBody(input) = body?;

    let product = service.update_product(id, input).await?;
    Ok(Envelope::ok(product).with_message("Product updated successfully"))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = u64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted successfully", body = Envelope<Product>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<Envelope<Product>> {
    let product = service.delete_product(parse_id(&id)?).await?;
    Ok(Envelope::ok(product).with_message("Product deleted successfully"))
}
