//! OpenAPI documentation configuration

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Marketplace API",
        version = "0.1.0",
        description = "Accounts, JWT login and product listings backed by MongoDB"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    )
)]
struct InfoDoc;

/// Combined documentation for every route the binary serves.
///
/// The domain documents are merged rather than nested: both mount their
/// routes at the root.
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = InfoDoc::openapi();
        doc.merge(domain_users::ApiDoc::openapi());
        doc.merge(domain_products::ApiDoc::openapi());
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_routes_documented() {
        let doc = ApiDoc::openapi();
        for path in ["/register", "/login", "/products", "/{id}"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
        assert_eq!(doc.info.title, "Marketplace API");
    }

    #[test]
    fn test_bearer_scheme_survives_merge() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer"));
    }
}
