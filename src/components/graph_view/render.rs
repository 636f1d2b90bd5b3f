use web_sys::CanvasRenderingContext2d;

use super::state::{FleetGraphState, GLYPH_SIZE};

const LINK_COLOR: &str = "#00bcd4";
const NODE_COLOR: &str = "#00bcd4";
const NODE_DETAIL_COLOR: &str = "#006064";
const LABEL_COLOR: &str = "#37474f";
const BACKGROUND_COLOR: &str = "#fafafa";

pub fn render(state: &FleetGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND_COLOR);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_links(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_links(state: &FleetGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str(LINK_COLOR);
	ctx.set_line_width(1.5 / state.transform.k);
	state.graph.visit_edges(|n1, n2, _| {
		ctx.begin_path();
		ctx.move_to(n1.x() as f64, n1.y() as f64);
		ctx.line_to(n2.x() as f64, n2.y() as f64);
		ctx.stroke();
	});
}

fn draw_nodes(state: &FleetGraphState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	state.graph.visit_nodes(|node| {
		let attrs = &node.data.user_data;
		let (x, y) = (node.x() as f64, node.y() as f64);
		let size = GLYPH_SIZE * attrs.scale as f64;

		if state.hovered == Some(node.index()) {
			ctx.set_fill_style_str("rgba(0, 188, 212, 0.15)");
			ctx.begin_path();
			let _ = ctx.arc(x, y, size * 1.6, 0.0, 2.0 * std::f64::consts::PI);
			ctx.fill();
		}

		// Icon classification keys on the anchor name, not on node kind: a
		// train that happens to share the name would render as the hub too.
		if attrs.name == state.anchor_name {
			draw_hub_glyph(ctx, x, y, size);
		} else {
			draw_train_glyph(ctx, x, y, size);
		}

		ctx.set_fill_style_str(LABEL_COLOR);
		ctx.set_font(&format!("{}px sans-serif", 12.0 / k.max(0.5)));
		ctx.set_text_align("center");
		let _ = ctx.fill_text(&attrs.label, x, y + size + 14.0 / k.max(0.5));
	});
}

/// Host-style glyph for the fleet hub: a screen on a stand.
fn draw_hub_glyph(ctx: &CanvasRenderingContext2d, x: f64, y: f64, size: f64) {
	ctx.set_fill_style_str(NODE_COLOR);
	ctx.fill_rect(x - size, y - size * 0.8, size * 2.0, size * 1.2);
	ctx.set_fill_style_str(BACKGROUND_COLOR);
	ctx.fill_rect(
		x - size * 0.8,
		y - size * 0.6,
		size * 1.6,
		size * 0.8,
	);
	ctx.set_fill_style_str(NODE_COLOR);
	ctx.fill_rect(x - size * 0.15, y + size * 0.4, size * 0.3, size * 0.3);
	ctx.fill_rect(x - size * 0.5, y + size * 0.7, size, size * 0.15);
}

/// Locomotive glyph for train nodes: cab, boiler and two wheels.
fn draw_train_glyph(ctx: &CanvasRenderingContext2d, x: f64, y: f64, size: f64) {
	ctx.set_fill_style_str(NODE_COLOR);
	// boiler
	ctx.fill_rect(x - size, y - size * 0.35, size * 1.4, size * 0.7);
	// cab
	ctx.fill_rect(x + size * 0.4, y - size * 0.75, size * 0.6, size * 1.1);
	// chimney
	ctx.fill_rect(x - size * 0.8, y - size * 0.75, size * 0.25, size * 0.4);
	// wheels
	ctx.set_fill_style_str(NODE_DETAIL_COLOR);
	for wx in [x - size * 0.6, x + size * 0.6] {
		ctx.begin_path();
		let _ = ctx.arc(wx, y + size * 0.45, size * 0.28, 0.0, 2.0 * std::f64::consts::PI);
		ctx.fill();
	}
}
