use thiserror::Error;

/// Failure taxonomy for controller requests.
///
/// Parse failures are kept distinct from transport failures so the log tells
/// a malformed payload apart from a dead network.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
	/// The request never completed (network, DNS, CORS).
	#[error("transport failure: {0}")]
	Transport(String),
	/// The controller answered but rejected the request, either with a non-2xx
	/// HTTP status or a non-OK status in the response body.
	#[error("controller rejected request: {0}")]
	Server(String),
	/// The response body did not match the expected shape.
	#[error("malformed response: {0}")]
	Parse(String),
}

impl From<reqwest::Error> for ApiError {
	fn from(err: reqwest::Error) -> Self {
		if err.is_decode() {
			ApiError::Parse(err.to_string())
		} else {
			ApiError::Transport(err.to_string())
		}
	}
}

impl From<serde_json::Error> for ApiError {
	fn from(err: serde_json::Error) -> Self {
		ApiError::Parse(err.to_string())
	}
}
