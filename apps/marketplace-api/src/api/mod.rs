//! HTTP routes served by the binary.

pub mod health;

use axum::Router;
use axum_helpers::JwtAuth;
use domain_products::{ProductRepository, ProductService};
use domain_users::{AuthState, UserRepository, UserService};

/// Auth and product routes, all mounted at the root.
///
/// Generic over the repositories so the same wiring runs against MongoDB in
/// production and the in-memory stores in tests.
pub fn routes<U, P>(users: UserService<U>, products: ProductService<P>, jwt_auth: JwtAuth) -> Router
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
{
    Router::new()
        .merge(domain_users::auth_router(AuthState::new(users, jwt_auth.clone())))
        .merge(domain_products::handlers::router(products, jwt_auth))
}
