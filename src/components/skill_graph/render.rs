use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::SkillGraphState;

/// The draw calls the skill graph needs from a 2D surface.
pub trait Surface {
	fn clear(&self, width: f64, height: f64);
	fn line(&self, from: (f64, f64), to: (f64, f64), color: &str, width: f64);
	fn disc(&self, center: (f64, f64), radius: f64, fill: &str, border: &str, border_width: f64);
	fn label(&self, text: &str, at: (f64, f64), color: &str, font: &str);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn line(&self, from: (f64, f64), to: (f64, f64), color: &str, width: f64) {
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.set_stroke_style_str(color);
		self.set_line_width(width);
		self.stroke();
	}

	fn disc(&self, center: (f64, f64), radius: f64, fill: &str, border: &str, border_width: f64) {
		self.begin_path();
		let _ = self.arc(center.0, center.1, radius, 0.0, 2.0 * PI);
		self.set_fill_style_str(fill);
		self.fill();
		self.set_stroke_style_str(border);
		self.set_line_width(border_width);
		self.stroke();
	}

	fn label(&self, text: &str, at: (f64, f64), color: &str, font: &str) {
		self.set_fill_style_str(color);
		self.set_font(font);
		self.set_text_align("center");
		let _ = self.fill_text(text, at.0, at.1);
	}
}

/// Visual constants for nodes, edges and labels.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderStyle {
	pub edge_rgb: (u8, u8, u8),
	pub edge_alpha: f64,
	pub edge_width: f64,
	pub hover_growth: f64,
	pub label_gap: f64,
	pub label_color: &'static str,
	pub font_family: &'static str,
	pub font_px: f64,
	pub hover_font_px: f64,
}

impl Default for RenderStyle {
	fn default() -> Self {
		Self {
			edge_rgb: (34, 197, 94),
			edge_alpha: 0.3,
			edge_width: 2.0,
			hover_growth: 5.0,
			label_gap: 20.0,
			label_color: "#ffffff",
			font_family: "monospace",
			font_px: 12.0,
			hover_font_px: 14.0,
		}
	}
}

pub fn render<S: Surface + ?Sized>(state: &SkillGraphState, style: &RenderStyle, surface: &S) {
	surface.clear(state.width, state.height);
	draw_edges(state, style, surface);
	draw_nodes(state, style, surface);
}

fn draw_edges<S: Surface + ?Sized>(state: &SkillGraphState, style: &RenderStyle, surface: &S) {
	let (r, g, b) = style.edge_rgb;
	for edge in state.edges() {
		let (Some(source), Some(target)) = (state.nodes.get(edge.source), state.nodes.get(edge.target))
		else {
			continue;
		};
		surface.line(
			(source.x, source.y),
			(target.x, target.y),
			&format!("rgba({r}, {g}, {b}, {})", edge.strength * style.edge_alpha),
			edge.strength * style.edge_width,
		);
	}
}

fn draw_nodes<S: Surface + ?Sized>(state: &SkillGraphState, style: &RenderStyle, surface: &S) {
	for (idx, node) in state.nodes.iter().enumerate() {
		let hovered = state.is_hovered(idx);
		let radius = if hovered {
			node.radius + style.hover_growth
		} else {
			node.radius
		};
		let (border, border_width) = if hovered {
			("#ffffff", 3.0)
		} else {
			("rgba(255, 255, 255, 0.3)", 1.0)
		};
		let font_px = if hovered {
			style.hover_font_px
		} else {
			style.font_px
		};

		surface.disc(
			(node.x, node.y),
			radius,
			state.palette.color(node.category),
			border,
			border_width,
		);
		surface.label(
			&node.label,
			(node.x, node.y + radius + style.label_gap),
			style.label_color,
			&format!("{}px {}", font_px, style.font_family),
		);
	}
}
