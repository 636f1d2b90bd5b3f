//! Turns the raw topology response into the star graph the view renders.

use crate::api::{RawTopologyResponse, RawTrainRecord};

use super::model::{FleetLink, FleetNode, GraphModel};

/// Anchor position in simulation coordinates, offset from the canvas centre.
const ANCHOR_POS: (f32, f32) = (75.0, 0.0);
const ANCHOR_SCALE: f32 = 2.0;
const TRAIN_SCALE: f32 = 1.0;

/// Reshape a raw topology response into a star graph: the anchor at index 0,
/// one node per train record, one link from the anchor to each train.
///
/// Pure and deterministic; a response with no train record yields an
/// anchor-only graph with zero links.
pub fn transform(raw: &RawTopologyResponse, anchor_name: &str) -> GraphModel {
	let records: Vec<&RawTrainRecord> = raw.train_topology.iter().collect();
	build_star(&records, anchor_name)
}

/// Star builder over an arbitrary number of train records. The wire format
/// currently carries at most one record, but the shape generalises.
fn build_star(records: &[&RawTrainRecord], anchor_name: &str) -> GraphModel {
	let mut nodes = Vec::with_capacity(records.len() + 1);
	let mut links = Vec::with_capacity(records.len());

	nodes.push(FleetNode {
		name: anchor_name.to_owned(),
		label: anchor_name.to_owned(),
		scale: ANCHOR_SCALE,
		loco_id: None,
		fixed_pos: Some(ANCHOR_POS),
	});

	for (i, record) in records.iter().enumerate() {
		nodes.push(FleetNode {
			name: record.name.clone().unwrap_or_default(),
			label: format!("Train (ID: {})", record.default_loco_id),
			scale: TRAIN_SCALE,
			loco_id: Some(record.default_loco_id.clone()),
			fixed_pos: None,
		});
		links.push(FleetLink {
			source: 0,
			target: i + 1,
		});
	}

	GraphModel { nodes, links }
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	fn record(id: &str) -> RawTrainRecord {
		serde_json::from_value(json!({ "name": format!("t-{id}"), "default-loco-id": id }))
			.unwrap()
	}

	#[test]
	fn empty_response_yields_anchor_only() {
		let raw: RawTopologyResponse = serde_json::from_value(json!({})).unwrap();
		let model = transform(&raw, "Controller");
		assert_eq!(model.nodes.len(), 1);
		assert!(model.links.is_empty());
		assert_eq!(model.nodes[0].label, "Controller");
		assert!(model.nodes[0].loco_id.is_none());
	}

	#[test]
	fn single_record_scenario() {
		let raw: RawTopologyResponse = serde_json::from_value(json!({
			"train-topology": { "name": "T1", "default-loco-id": "42" }
		}))
		.unwrap();
		let model = transform(&raw, "Controller");

		assert_eq!(model.nodes.len(), 2);
		assert_eq!(model.links.len(), 1);

		let anchor = &model.nodes[0];
		assert_eq!(anchor.name, "Controller");
		assert_eq!(anchor.scale, 2.0);
		assert_eq!(anchor.fixed_pos, Some((75.0, 0.0)));

		let train = &model.nodes[1];
		assert_eq!(train.label, "Train (ID: 42)");
		assert_eq!(train.loco_id.as_deref(), Some("42"));
		assert_eq!(train.scale, 1.0);

		assert_eq!(model.links[0], FleetLink { source: 0, target: 1 });
	}

	#[test]
	fn star_shape_holds_for_many_records() {
		let records = [record("1"), record("2"), record("3")];
		let refs: Vec<&RawTrainRecord> = records.iter().collect();
		let model = build_star(&refs, "Controller");

		assert_eq!(model.nodes.len(), refs.len() + 1);
		assert_eq!(model.links.len(), refs.len());
		for (i, link) in model.links.iter().enumerate() {
			assert_eq!(link.source, 0);
			assert_eq!(link.target, i + 1);
		}
		for (node, rec) in model.nodes[1..].iter().zip(&records) {
			assert_eq!(node.label, format!("Train (ID: {})", rec.default_loco_id));
		}
	}

	#[test]
	fn label_template_is_exact() {
		let raw: RawTopologyResponse = serde_json::from_value(json!({
			"train-topology": { "default-loco-id": "0xBEEF" }
		}))
		.unwrap();
		let model = transform(&raw, "Controller");
		assert_eq!(model.nodes[1].label, "Train (ID: 0xBEEF)");
		// a record with no name still classifies as a train, not the anchor
		assert_eq!(model.nodes[1].name, "");
	}

	#[test]
	fn link_count_matches_node_count_minus_one() {
		for k in 0..5usize {
			let records: Vec<RawTrainRecord> =
				(0..k).map(|i| record(&i.to_string())).collect();
			let refs: Vec<&RawTrainRecord> = records.iter().collect();
			let model = build_star(&refs, "Controller");
			assert_eq!(model.links.len(), model.nodes.len() - 1);
		}
	}
}
