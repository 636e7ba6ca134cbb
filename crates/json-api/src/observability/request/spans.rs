//! Route templates for request spans.

use uuid::Uuid;

/// Replace uuid path segments with `{uuid}` so cart item routes group together.
pub(super) fn route_template(path: &str) -> String {
    let segments: Vec<&str> = path
        .trim_start_matches('/')
        .split('/')
        .map(|segment| {
            if Uuid::parse_str(segment).is_ok() {
                "{uuid}"
            } else {
                segment
            }
        })
        .collect();

    format!("/{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_segments_are_templated() {
        let path = format!("/cart/items/{}", Uuid::now_v7());

        assert_eq!(route_template(&path), "/cart/items/{uuid}");
    }

    #[test]
    fn plain_paths_are_unchanged() {
        assert_eq!(route_template("/products/1"), "/products/1");
        assert_eq!(route_template("/"), "/");
    }
}
