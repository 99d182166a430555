//! HTTP status taxonomy for API errors.
//!
//! Only these six codes can ever leave the error adapter.

use actix_web::http::StatusCode;

/// Status codes an [`ApiError`](super::error::ApiError) may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ApiStatus {
    /// 400: malformed or invalid request.
    BadRequest = 400,
    /// 401: missing or failed authentication. No mapping produces this yet.
    Authentication = 401,
    /// 403: authenticated but not permitted. No mapping produces this yet.
    Forbidden = 403,
    /// 404: resource does not exist.
    NotFound = 404,
    /// 409: conflicting state.
    Conflict = 409,
    /// 500: unexpected internal failure.
    ServerError = 500,
}

impl ApiStatus {
    /// Numeric HTTP status.
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }
}

impl From<ApiStatus> for StatusCode {
    fn from(status: ApiStatus) -> Self {
        match status {
            ApiStatus::BadRequest => Self::BAD_REQUEST,
            ApiStatus::Authentication => Self::UNAUTHORIZED,
            ApiStatus::Forbidden => Self::FORBIDDEN,
            ApiStatus::NotFound => Self::NOT_FOUND,
            ApiStatus::Conflict => Self::CONFLICT,
            ApiStatus::ServerError => Self::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ApiStatus::BadRequest, 400, StatusCode::BAD_REQUEST)]
    #[case(ApiStatus::Authentication, 401, StatusCode::UNAUTHORIZED)]
    #[case(ApiStatus::Forbidden, 403, StatusCode::FORBIDDEN)]
    #[case(ApiStatus::NotFound, 404, StatusCode::NOT_FOUND)]
    #[case(ApiStatus::Conflict, 409, StatusCode::CONFLICT)]
    #[case(ApiStatus::ServerError, 500, StatusCode::INTERNAL_SERVER_ERROR)]
    fn numeric_and_actix_codes_agree(
        #[case] status: ApiStatus,
        #[case] code: u16,
        #[case] expected: StatusCode,
    ) {
        assert_eq!(status.as_u16(), code);
        let actix: StatusCode = status.into();
        assert_eq!(actix, expected);
        assert_eq!(actix.as_u16(), code);
    }
}
