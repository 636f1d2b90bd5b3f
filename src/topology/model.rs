//! Node-link model consumed by the graph view and the side panels.

/// A rendered graph node: the anchor hub or one train.
#[derive(Clone, Debug, PartialEq)]
pub struct FleetNode {
	/// Raw name as received; the icon classifier keys on this.
	pub name: String,
	/// Display label.
	pub label: String,
	/// Visual scale multiplier (anchor 2, trains 1).
	pub scale: f32,
	/// Locomotive identifier; `None` for the anchor.
	pub loco_id: Option<String>,
	/// Pinned simulation position, if any.
	pub fixed_pos: Option<(f32, f32)>,
}

impl FleetNode {
	/// Whether this node represents a controllable train.
	pub fn is_train(&self) -> bool {
		self.loco_id.is_some()
	}
}

/// A link between two nodes, by index into [`GraphModel::nodes`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FleetLink {
	/// Index of the source node (always 0 in a star graph).
	pub source: usize,
	/// Index of the target node.
	pub target: usize,
}

/// The full topology handed to the graph view. Replaced wholesale on every
/// refresh; nothing mutates it after construction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphModel {
	/// Anchor first, then train nodes in received order.
	pub nodes: Vec<FleetNode>,
	/// One link per train node, anchor to train.
	pub links: Vec<FleetLink>,
}

impl GraphModel {
	/// Side-panel entries: every node except the anchor, in order.
	pub fn train_entries(&self) -> Vec<TrainListEntry> {
		self.nodes
			.iter()
			.filter_map(|node| {
				node.loco_id.as_ref().map(|id| TrainListEntry {
					loco_id: id.clone(),
					label: node.label.clone(),
				})
			})
			.collect()
	}
}

/// Read-only view of a train node shown in the left panel list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrainListEntry {
	/// Locomotive identifier, shared with the corresponding [`FleetNode`].
	pub loco_id: String,
	/// Display label, identical to the node's.
	pub label: String,
}

#[cfg(test)]
mod tests {
	use super::*;

	fn anchor() -> FleetNode {
		FleetNode {
			name: "Controller".into(),
			label: "Controller".into(),
			scale: 2.0,
			loco_id: None,
			fixed_pos: Some((75.0, 0.0)),
		}
	}

	fn train(id: &str) -> FleetNode {
		FleetNode {
			name: format!("train-{id}"),
			label: format!("Train (ID: {id})"),
			scale: 1.0,
			loco_id: Some(id.into()),
			fixed_pos: None,
		}
	}

	#[test]
	fn train_entries_skip_anchor_and_keep_order() {
		let model = GraphModel {
			nodes: vec![anchor(), train("7"), train("42")],
			links: vec![
				FleetLink { source: 0, target: 1 },
				FleetLink { source: 0, target: 2 },
			],
		};
		let entries = model.train_entries();
		assert_eq!(entries.len(), 2);
		assert_eq!(entries[0].loco_id, "7");
		assert_eq!(entries[1].loco_id, "42");
		assert_eq!(entries[1].label, "Train (ID: 42)");
	}

	#[test]
	fn empty_model_has_no_entries() {
		assert!(GraphModel::default().train_entries().is_empty());
	}
}
