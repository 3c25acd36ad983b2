//! HTTP handlers for Products API

use axum::{
    Extension, Json, Router,
    extract::State,
    http::StatusCode,
    middleware,
    routing::{delete, post},
};
use axum_helpers::{
    AppError, ErrorResponse, JwtAuth, JwtClaims, PathParam, QueryParams, ValidatedJson,
    errors::handlers::not_found,
    errors::responses::{
        BadRequestResponse, InternalServerErrorResponse, NotFoundResponse, UnauthorizedResponse,
    },
    jwt_auth_middleware,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{CreateProduct, Product, ProductCreated, ProductFilter, ProductList};
use crate::repository::ProductRepository;
use crate::service::ProductService;

pub const PRODUCT_CREATED: &str = "Product listing created.";
const CREATE_FAILED: &str = "Product listing failed.";
const LIST_FAILED: &str = "Failed to fetch products.";
const DELETE_FAILED: &str = "An error occurred while deleting the product.";

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(create_product, list_products, delete_product),
    components(
        schemas(Product, CreateProduct, ProductFilter, ProductCreated, ProductList, ErrorResponse),
        responses(
            BadRequestResponse,
            UnauthorizedResponse,
            NotFoundResponse,
            InternalServerErrorResponse
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "Products", description = "Product listings")
    )
)]
pub struct ApiDoc;

/// Registers the `bearer` security scheme used by the protected routes.
struct BearerAuth;

impl utoipa::Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};

        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Create the products router.
///
/// `POST /products` and `DELETE /{id}` sit behind the JWT gate, `GET /products` is open.
pub fn router<R: ProductRepository + 'static>(
    service: ProductService<R>,
    jwt_auth: JwtAuth,
) -> Router {
    let shared_service = Arc::new(service);
    let auth = middleware::from_fn_with_state(jwt_auth, jwt_auth_middleware);

    Router::new()
        .route(
            "/products",
            post(create_product)
                .route_layer(auth.clone())
                .get(list_products),
        )
        // Other methods on a bare id answer like an unknown route.
        .route(
            "/{id}",
            delete(delete_product)
                .route_layer(auth)
                .fallback(not_found),
        )
        .with_state(shared_service)
}

/// Create a product listing
#[utoipa::path(
    post,
    path = "/products",
    tag = "Products",
    request_body = CreateProduct,
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Listing created", body = ProductCreated),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Extension(claims): Extension<JwtClaims>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> Result<(StatusCode, Json<ProductCreated>), AppError> {
    let product = service
        .create_product(input)
        .await
        .map_err(|e| e.into_app_error(CREATE_FAILED))?;

    tracing::info!(user_id = %claims.sub, product_id = %product.id, "Product listed");
    Ok((
        StatusCode::CREATED,
        Json(ProductCreated {
            message: PRODUCT_CREATED.to_string(),
            product,
        }),
    ))
}

/// List products, optionally filtered by a name search
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    params(ProductFilter),
    responses(
        (status = 200, description = "Matching products in creation order", body = ProductList),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    QueryParams(filter): QueryParams<ProductFilter>,
) -> Result<Json<ProductList>, AppError> {
    let products = service
        .list_products(filter)
        .await
        .map_err(|e| e.into_app_error(LIST_FAILED))?;

    Ok(Json(ProductList { products }))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "The deleted product", body = Product),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Extension(claims): Extension<JwtClaims>,
    PathParam(id): PathParam<String>,
) -> Result<Json<Product>, AppError> {
    let product = service
        .delete_product(&id)
        .await
        .map_err(|e| e.into_app_error(DELETE_FAILED))?;

    tracing::info!(user_id = %claims.sub, product_id = %product.id, "Product deleted");
    Ok(Json(product))
}
