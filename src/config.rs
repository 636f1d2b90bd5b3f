//! Dashboard configuration: controller endpoints, credentials, anchor name.

/// Connection settings for the train controller, passed explicitly to the
/// API clients instead of living in globals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardConfig {
	/// URL the train topology document is fetched from.
	pub topology_url: String,
	/// URL control operations are posted to.
	pub operation_url: String,
	/// Basic auth username.
	pub username: String,
	/// Basic auth password.
	pub password: String,
	/// Name of the synthetic hub node; also drives icon classification.
	pub anchor_name: String,
}

impl Default for DashboardConfig {
	fn default() -> Self {
		Self {
			topology_url: "http://localhost:8181/restconf/operational/choochoo:train-topology"
				.into(),
			operation_url: "http://localhost:8181/restconf/operations/choochoo:control-train"
				.into(),
			username: "admin".into(),
			password: "admin".into(),
			anchor_name: "Controller".into(),
		}
	}
}
