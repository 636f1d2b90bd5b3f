//! Wire types for the controller's REST interface.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of the topology GET response.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RawTopologyResponse {
	/// The fleet's single train record, absent when no train is registered.
	#[serde(rename = "train-topology", default)]
	pub train_topology: Option<RawTrainRecord>,
}

/// One train record as received; vendor fields ride along untouched.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RawTrainRecord {
	/// Train name, if the controller set one.
	#[serde(default)]
	pub name: Option<String>,
	/// Identifier of the train's default locomotive.
	#[serde(rename = "default-loco-id")]
	pub default_loco_id: String,
	/// Any further attributes the controller sends, kept verbatim.
	#[serde(flatten)]
	pub vendor: Map<String, Value>,
}

/// Body of the control-operation POST request.
///
/// The controller expects the operation doubly encoded: the envelope is JSON,
/// and the `content-json-string` field holds a JSON document as a string.
/// That quirk is part of the wire contract and must survive byte-exact.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct CommandEnvelope {
	input: CommandInput,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
struct CommandInput {
	#[serde(rename = "loco-id")]
	loco_id: String,
	#[serde(rename = "control-parm")]
	control_parm: Vec<ControlParm>,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
struct ControlParm {
	name: String,
	#[serde(rename = "content-json-string")]
	content_json_string: String,
}

impl CommandEnvelope {
	/// Build the envelope for one named operation against one locomotive.
	pub fn new(loco_id: &str, operation: &str, value: &str) -> Self {
		let mut content = Map::new();
		content.insert(operation.to_owned(), Value::String(value.to_owned()));

		Self {
			input: CommandInput {
				loco_id: loco_id.to_owned(),
				control_parm: vec![ControlParm {
					name: operation.to_owned(),
					content_json_string: Value::Object(content).to_string(),
				}],
			},
		}
	}
}

/// Body of the control-operation POST response.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct CommandResponse {
	/// Result block; `status` is `"OK"` on success.
	pub output: CommandOutput,
}

/// Inner result block of a [`CommandResponse`].
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct CommandOutput {
	/// Controller-reported status string.
	pub status: String,
}

impl CommandResponse {
	/// Whether the controller accepted the operation.
	pub fn is_ok(&self) -> bool {
		self.output.status == "OK"
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn embedded_content_string_is_exact() {
		let envelope = CommandEnvelope::new("42", "headlight", "on");
		assert_eq!(
			envelope.input.control_parm[0].content_json_string,
			r#"{"headlight":"on"}"#
		);
	}

	#[test]
	fn envelope_serialises_to_wire_shape() {
		let envelope = CommandEnvelope::new("42", "bell", "off");
		let value = serde_json::to_value(&envelope).unwrap();
		assert_eq!(
			value,
			json!({
				"input": {
					"loco-id": "42",
					"control-parm": [
						{ "name": "bell", "content-json-string": "{\"bell\":\"off\"}" }
					]
				}
			})
		);
	}

	#[test]
	fn topology_response_keeps_vendor_fields() {
		let raw: RawTopologyResponse = serde_json::from_value(json!({
			"train-topology": {
				"name": "T1",
				"default-loco-id": "42",
				"firmware": "2.1.0",
				"cars": 6
			}
		}))
		.unwrap();
		let record = raw.train_topology.unwrap();
		assert_eq!(record.default_loco_id, "42");
		assert_eq!(record.vendor["firmware"], json!("2.1.0"));
		assert_eq!(record.vendor["cars"], json!(6));
	}

	#[test]
	fn topology_response_without_record_parses() {
		let raw: RawTopologyResponse = serde_json::from_value(json!({})).unwrap();
		assert!(raw.train_topology.is_none());
	}

	#[test]
	fn status_ok_is_success_anything_else_is_not() {
		let ok: CommandResponse =
			serde_json::from_value(json!({ "output": { "status": "OK" } })).unwrap();
		assert!(ok.is_ok());

		let fail: CommandResponse =
			serde_json::from_value(json!({ "output": { "status": "FAIL" } })).unwrap();
		assert!(!fail.is_ok());
	}
}
