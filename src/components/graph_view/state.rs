use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use crate::topology::{FleetNode, GraphModel};

/// Base glyph half-extent in graph units, multiplied by each node's scale.
pub const GLYPH_SIZE: f64 = 14.0;
/// Radius used for cursor hit testing, multiplied by each node's scale.
pub const HIT_RADIUS: f64 = 20.0;
/// Mouse travel below this counts as a click, not a drag.
pub const CLICK_SLOP: f64 = 3.0;

/// Ring radius the train nodes start out on before the simulation relaxes.
const SPAWN_RADIUS: f64 = 150.0;

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub moved: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Live simulation and interaction state behind one canvas.
///
/// Rebuilt from scratch on every model change; there is no diffing against
/// the previous topology.
pub struct FleetGraphState {
	pub graph: ForceGraph<FleetNode, ()>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hovered: Option<DefaultNodeIdx>,
	pub anchor_name: String,
	pub width: f64,
	pub height: f64,
}

impl FleetGraphState {
	pub fn new(model: &GraphModel, anchor_name: &str, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut indices = Vec::with_capacity(model.nodes.len());

		for (i, node) in model.nodes.iter().enumerate() {
			// Pinned nodes keep their configured position; the rest spawn on
			// a ring around the origin and let the simulation settle.
			let (x, y, pinned) = match node.fixed_pos {
				Some((fx, fy)) => (fx, fy, true),
				None => {
					let angle = (i as f64) * 2.0 * PI / model.nodes.len().max(1) as f64;
					(
						(SPAWN_RADIUS * angle.cos()) as f32,
						(SPAWN_RADIUS * angle.sin()) as f32,
						false,
					)
				}
			};
			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: pinned,
				user_data: node.clone(),
			});
			indices.push(idx);
		}

		for link in &model.links {
			if let (Some(&src), Some(&tgt)) =
				(indices.get(link.source), indices.get(link.target))
			{
				graph.add_edge(src, tgt, EdgeData::default());
			}
		}

		Self {
			graph,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hovered: None,
			anchor_name: anchor_name.to_owned(),
			width,
			height,
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			let radius = HIT_RADIUS * node.data.user_data.scale as f64;
			if (dx * dx + dy * dy).sqrt() < radius {
				found = Some(node.index());
			}
		});
		found
	}

	/// Full attribute set of a node, as handed to click handlers.
	pub fn node_attrs(&self, idx: DefaultNodeIdx) -> Option<FleetNode> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some(node.data.user_data.clone());
			}
		});
		found
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.transform.x += (width - self.width) / 2.0;
		self.transform.y += (height - self.height) / 2.0;
		self.width = width;
		self.height = height;
	}
}
