use log::debug;

use crate::config::DashboardConfig;

use super::error::ApiError;
use super::types::{CommandEnvelope, CommandResponse};

/// Posts control operations (headlight, bell, ...) to a single train.
#[derive(Clone)]
pub struct CommandClient {
	http: reqwest::Client,
	config: DashboardConfig,
}

impl CommandClient {
	/// Build a client against the given controller configuration.
	pub fn new(config: DashboardConfig) -> Self {
		Self {
			http: reqwest::Client::new(),
			config,
		}
	}

	/// POST one named operation with a value for the given locomotive.
	///
	/// An HTTP-level success with a non-OK body status is still a failure;
	/// the caller raises exactly one notification per settled send.
	pub async fn send_command(
		&self,
		loco_id: &str,
		operation: &str,
		value: &str,
	) -> Result<(), ApiError> {
		let envelope = CommandEnvelope::new(loco_id, operation, value);
		debug!("sending {operation}={value} to loco {loco_id}");

		let response = self
			.http
			.post(&self.config.operation_url)
			.basic_auth(&self.config.username, Some(&self.config.password))
			.header("Content-Type", "application/json")
			.json(&envelope)
			.send()
			.await
			.map_err(|err| ApiError::Transport(err.to_string()))?;

		let status = response.status();
		if !status.is_success() {
			return Err(ApiError::Server(status.to_string()));
		}

		let body = response
			.text()
			.await
			.map_err(|err| ApiError::Transport(err.to_string()))?;
		let parsed: CommandResponse = serde_json::from_str(&body)?;
		interpret(&parsed)
	}
}

/// Map the controller's response body onto the failure taxonomy.
fn interpret(response: &CommandResponse) -> Result<(), ApiError> {
	if response.is_ok() {
		Ok(())
	} else {
		Err(ApiError::Server(format!(
			"operation status {}",
			response.output.status
		)))
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn ok_status_is_success() {
		let response: CommandResponse =
			serde_json::from_value(json!({ "output": { "status": "OK" } })).unwrap();
		assert_eq!(interpret(&response), Ok(()));
	}

	#[test]
	fn non_ok_status_is_a_server_failure() {
		let response: CommandResponse =
			serde_json::from_value(json!({ "output": { "status": "FAIL" } })).unwrap();
		assert_eq!(
			interpret(&response),
			Err(ApiError::Server("operation status FAIL".into()))
		);
	}

	#[test]
	fn missing_output_block_is_a_parse_failure() {
		let err = serde_json::from_value::<CommandResponse>(json!({ "status": "OK" }))
			.map_err(ApiError::from)
			.unwrap_err();
		assert!(matches!(err, ApiError::Parse(_)));
	}
}
