//! Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::{carts::CartsServiceError, users::records::UserRecord};

pub(crate) fn into_status_error(error: CartsServiceError, user: &UserRecord) -> StatusError {
    match error {
        CartsServiceError::Storage(source) => {
            error!(user_uuid = %user.uuid, "cart storage failure: {source}");

            StatusError::internal_server_error()
        }
        client_error => StatusError::bad_request().brief(client_error.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use storefront_app::domain::carts::CartsRepositoryError;

    use crate::test_helpers::test_user;

    use super::*;

    #[test]
    fn test_cart_not_found_is_a_bad_request() {
        let error = into_status_error(CartsServiceError::CartNotFound, &test_user());

        assert_eq!(error.code, StatusCode::BAD_REQUEST, "unexpected status");
        assert_eq!(error.brief, "Cart not found", "unexpected brief");
    }

    #[test]
    fn test_storage_failure_is_an_internal_error() {
        let error = into_status_error(
            CartsServiceError::Storage(CartsRepositoryError::Unavailable("down".to_string())),
            &test_user(),
        );

        assert_eq!(error.code, StatusCode::INTERNAL_SERVER_ERROR, "unexpected status");
    }
}
