// web_app/routes.rs - Route segments and link builders
//
// Shop-scoped admin pages live under `/{shop}/...`. Builders strip stray
// slashes from the slug so links never contain `//`.

pub const MANUFACTURERS: &str = "manufacturers";
pub const LOGIN: &str = "/login";

/// Path parameter holding the shop slug
pub const SHOP_PARAM: &str = "shop";

fn shop_segment(shop: &str) -> &str {
    shop.trim_matches('/')
}

/// `/{shop}/manufacturers`
pub fn manufacturers_path(shop: &str) -> String {
    format!("/{}/{}", shop_segment(shop), MANUFACTURERS)
}

/// `/{shop}/manufacturers/create`
pub fn manufacturer_create_path(shop: &str) -> String {
    format!("{}/create", manufacturers_path(shop))
}

/// `/{shop}/manufacturers/{slug}/edit`
pub fn manufacturer_edit_path(shop: &str, slug: &str) -> String {
    format!("{}/{}/edit", manufacturers_path(shop), slug.trim_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_path() {
        assert_eq!(manufacturer_create_path("acme-books"), "/acme-books/manufacturers/create");
    }

    #[test]
    fn test_slashes_are_stripped() {
        assert_eq!(manufacturer_create_path("/acme/"), "/acme/manufacturers/create");
        assert_eq!(manufacturers_path("acme/"), "/acme/manufacturers");
    }

    #[test]
    fn test_edit_path() {
        assert_eq!(
            manufacturer_edit_path("acme", "penguin-books"),
            "/acme/manufacturers/penguin-books/edit"
        );
    }
}
