use log::debug;

use crate::config::DashboardConfig;
use crate::topology::{transform, GraphModel};

use super::error::ApiError;
use super::types::RawTopologyResponse;

/// Fetches the raw train topology and reshapes it into a [`GraphModel`].
#[derive(Clone)]
pub struct TopologyClient {
	http: reqwest::Client,
	config: DashboardConfig,
}

impl TopologyClient {
	/// Build a client against the given controller configuration.
	pub fn new(config: DashboardConfig) -> Self {
		Self {
			http: reqwest::Client::new(),
			config,
		}
	}

	/// GET the topology document and transform it.
	///
	/// Returns an explicit result rather than signalling failure out of band;
	/// the caller decides how to surface errors and when to clear its loading
	/// state. No timeout or cancellation is applied to the request.
	pub async fn fetch_topology(&self) -> Result<GraphModel, ApiError> {
		let response = self
			.http
			.get(&self.config.topology_url)
			.basic_auth(&self.config.username, Some(&self.config.password))
			.header("Content-Type", "application/json")
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
		let raw: RawTopologyResponse = serde_json::from_str(&body)?;
		debug!("received topology: {raw:?}");

		Ok(transform(&raw, &self.config.anchor_name))
	}
}
