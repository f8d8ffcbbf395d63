use std::borrow::Cow;

use axum::response::IntoResponse;
use axum::Json;
use hyper::StatusCode;

use crate::types::UnknownCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct ApiErrorCode(pub u16);

impl ApiErrorCode {
	/// The requested route does not exist.
	pub const ROUTE_NOT_FOUND: Self = Self(404);
	/// The category slug is not one of the known categories.
	pub const UNKNOWN_CATEGORY: Self = Self(1000);
	/// The article id in the path is not a number.
	pub const INVALID_NEWS_ID: Self = Self(1001);
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct ApiError {
	#[serde(skip)]
	pub status_code: StatusCode,
	pub status: Cow<'static, str>,
	pub error_code: ApiErrorCode,
	pub error: Cow<'static, str>,
}

impl ApiError {
	pub fn new(status_code: StatusCode, error_code: ApiErrorCode, error: impl Into<Cow<'static, str>>) -> Self {
		let error = error.into();
		tracing::debug!(status = status_code.as_u16(), code = error_code.0, %error, "api error");

		Self {
			status_code,
			status: status_code.canonical_reason().unwrap_or("unknown").into(),
			error_code,
			error,
		}
	}

	pub fn bad_request(error_code: ApiErrorCode, error: impl Into<Cow<'static, str>>) -> Self {
		Self::new(StatusCode::BAD_REQUEST, error_code, error)
	}

	pub fn not_found(error_code: ApiErrorCode, error: impl Into<Cow<'static, str>>) -> Self {
		Self::new(StatusCode::NOT_FOUND, error_code, error)
	}

	/// The `:id` path segment of a publish request did not parse.
	pub fn invalid_news_id(raw: &str) -> Self {
		Self::bad_request(ApiErrorCode::INVALID_NEWS_ID, format!("invalid news id `{raw}`"))
	}
}

impl From<UnknownCategory> for ApiError {
	fn from(err: UnknownCategory) -> Self {
		Self::bad_request(ApiErrorCode::UNKNOWN_CATEGORY, err.to_string())
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> axum::http::Response<axum::body::Body> {
		(self.status_code, Json(self)).into_response()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::Category;

	#[test]
	fn unknown_category_maps_to_its_code() {
		let err: ApiError = "weather".parse::<Category>().unwrap_err().into();
		assert_eq!(err.status_code, StatusCode::BAD_REQUEST);
		assert_eq!(err.error_code, ApiErrorCode::UNKNOWN_CATEGORY);
		assert!(err.error.contains("weather"));
	}

	#[test]
	fn invalid_news_id_names_the_segment() {
		let err = ApiError::invalid_news_id("abc");
		assert_eq!(err.error_code, ApiErrorCode::INVALID_NEWS_ID);
		assert_eq!(err.error, "invalid news id `abc`");
	}
}
