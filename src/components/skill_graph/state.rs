use std::collections::HashMap;

use log::{debug, warn};
use rand::Rng;

use super::category::{Category, CategoryPalette};
use super::types::SkillCatalog;

/// Physics and picking constants for one simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationParams {
	/// Per-tick velocity multiplier.
	pub damping: f64,
	/// Velocity multiplier applied on wall contact; negative to reflect.
	pub bounce: f64,
	/// Bound of each initial velocity component.
	pub initial_speed: f64,
	/// Extra pick distance beyond a node's radius.
	pub pick_tolerance: f64,
}

impl Default for SimulationParams {
	fn default() -> Self {
		Self {
			damping: 0.99,
			bounce: -0.8,
			initial_speed: 1.0,
			pick_tolerance: 10.0,
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct SkillNode {
	pub label: String,
	pub category: Category,
	pub radius: f64,
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
}

/// A connection with both endpoints resolved to node indices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
	pub source: usize,
	pub target: usize,
	pub strength: f64,
}

pub struct SkillGraphState {
	pub nodes: Vec<SkillNode>,
	pub params: SimulationParams,
	pub palette: CategoryPalette,
	pub width: f64,
	pub height: f64,
	edges: Vec<Edge>,
	hovered: Option<usize>,
}

/// Keeps `value` inside `[radius, extent - radius]`. An axis too short to
/// hold the node pins it to the centre.
fn clamp_axis(value: f64, radius: f64, extent: f64) -> f64 {
	if extent < 2.0 * radius {
		extent / 2.0
	} else {
		value.clamp(radius, extent - radius)
	}
}

impl SkillGraphState {
	pub fn new<R: Rng>(
		catalog: &SkillCatalog,
		params: SimulationParams,
		palette: CategoryPalette,
		width: f64,
		height: f64,
		rng: &mut R,
	) -> Self {
		let speed = params.initial_speed.abs();
		let mut index = HashMap::with_capacity(catalog.skills.len());
		let mut nodes = Vec::with_capacity(catalog.skills.len());

		for skill in &catalog.skills {
			let (x, y) = (
				rng.gen_range(0.0..1.0_f64) * width,
				rng.gen_range(0.0..1.0_f64) * height,
			);
			let (vx, vy) = (
				rng.gen_range(-speed..=speed),
				rng.gen_range(-speed..=speed),
			);
			let idx = nodes.len();
			if *index.entry(skill.label.clone()).or_insert(idx) != idx {
				warn!("duplicate skill label {:?}, keeping the first", skill.label);
			}
			nodes.push(SkillNode {
				label: skill.label.clone(),
				category: skill.category,
				radius: skill.radius,
				x: clamp_axis(x, skill.radius, width),
				y: clamp_axis(y, skill.radius, height),
				vx,
				vy,
			});
		}

		let mut edges = Vec::with_capacity(catalog.connections.len());
		for conn in &catalog.connections {
			match (index.get(&conn.source), index.get(&conn.target)) {
				(Some(&source), Some(&target)) => edges.push(Edge {
					source,
					target,
					strength: if conn.strength.is_finite() {
						conn.strength.clamp(0.0, 1.0)
					} else {
						0.0
					},
				}),
				_ => warn!(
					"skipping connection {} -> {}: unknown endpoint",
					conn.source, conn.target
				),
			}
		}

		Self {
			nodes,
			params,
			palette,
			width,
			height,
			edges,
			hovered: None,
		}
	}

	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// One explicit Euler step: damp, bounce, integrate, clamp.
	pub fn tick(&mut self) {
		let (width, height) = (self.width, self.height);
		let SimulationParams { damping, bounce, .. } = self.params;

		for node in &mut self.nodes {
			node.vx *= damping;
			node.vy *= damping;

			let (next_x, next_y) = (node.x + node.vx, node.y + node.vy);
			if next_x < node.radius || next_x > width - node.radius {
				node.vx *= bounce;
			}
			if next_y < node.radius || next_y > height - node.radius {
				node.vy *= bounce;
			}

			node.x = clamp_axis(node.x + node.vx, node.radius, width);
			node.y = clamp_axis(node.y + node.vy, node.radius, height);
		}
	}

	/// First node in catalog order within pick range of a canvas-local point.
	pub fn node_at_position(&self, x: f64, y: f64) -> Option<usize> {
		let tolerance = self.params.pick_tolerance;
		self.nodes.iter().position(|node| {
			let (dx, dy) = (x - node.x, y - node.y);
			(dx * dx + dy * dy).sqrt() < node.radius + tolerance
		})
	}

	/// Returns whether the hover target changed.
	pub fn set_hover(&mut self, node: Option<usize>) -> bool {
		if self.hovered == node {
			return false;
		}
		self.hovered = node;
		debug!("hover -> {:?}", self.hovered_label());
		true
	}

	pub fn hovered_label(&self) -> Option<&str> {
		self.hovered.map(|idx| self.nodes[idx].label.as_str())
	}

	pub fn is_hovered(&self, idx: usize) -> bool {
		self.hovered == Some(idx)
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	fn speed(node: &SkillNode) -> f64 {
		(node.vx * node.vx + node.vy * node.vy).sqrt()
	}

	fn state_with(catalog: &SkillCatalog, seed: u64, width: f64, height: f64) -> SkillGraphState {
		let mut rng = SmallRng::seed_from_u64(seed);
		SkillGraphState::new(
			catalog,
			SimulationParams::default(),
			CategoryPalette::default(),
			width,
			height,
			&mut rng,
		)
	}

	fn assert_in_bounds(state: &SkillGraphState) {
		for node in &state.nodes {
			assert!(
				node.x >= node.radius && node.x <= state.width - node.radius,
				"{} x={} out of bounds",
				node.label,
				node.x
			);
			assert!(
				node.y >= node.radius && node.y <= state.height - node.radius,
				"{} y={} out of bounds",
				node.label,
				node.y
			);
		}
	}

	#[test]
	fn positions_stay_clamped_every_frame() {
		let catalog = SkillCatalog::default();
		for seed in 0..8 {
			let mut state = state_with(&catalog, seed, 320.0, 240.0);
			assert_in_bounds(&state);
			for _ in 0..2_000 {
				state.tick();
				assert_in_bounds(&state);
			}
		}
	}

	#[test]
	fn extreme_velocity_is_clamped() {
		let catalog = SkillCatalog::empty().skill("Rust", Category::Language, 10.0);
		let mut state = state_with(&catalog, 1, 100.0, 100.0);
		state.nodes[0].vx = 1.0e6;
		state.nodes[0].vy = -1.0e6;
		state.tick();
		// Reflected before integrating, then clamped to the opposite walls.
		assert_eq!(state.nodes[0].x, 10.0);
		assert_eq!(state.nodes[0].y, 90.0);
	}

	#[test]
	fn bounce_reflects_and_attenuates() {
		let catalog = SkillCatalog::empty().skill("Rust", Category::Language, 10.0);
		let mut state = state_with(&catalog, 1, 100.0, 100.0);
		let node = &mut state.nodes[0];
		(node.x, node.y, node.vx, node.vy) = (11.0, 50.0, -5.0, 0.0);
		state.tick();
		let node = &state.nodes[0];
		assert!((node.vx - 5.0 * 0.99 * 0.8).abs() < 1e-9);
		assert!(node.x > 11.0);
	}

	#[test]
	fn speed_never_increases() {
		let catalog = SkillCatalog::default();
		let mut state = state_with(&catalog, 7, 800.0, 600.0);
		for _ in 0..500 {
			let before: Vec<f64> = state.nodes.iter().map(speed).collect();
			state.tick();
			for (node, prev) in state.nodes.iter().zip(before) {
				assert!(speed(node) <= prev + 1e-12, "{} sped up", node.label);
			}
		}
	}

	#[test]
	fn free_node_decays_geometrically() {
		let catalog = SkillCatalog::empty().skill("Rust", Category::Language, 5.0);
		let mut state = state_with(&catalog, 3, 1000.0, 1000.0);
		let node = &mut state.nodes[0];
		(node.x, node.y, node.vx, node.vy) = (500.0, 500.0, 1.0, -0.5);
		state.tick();
		assert!((state.nodes[0].vx - 0.99).abs() < 1e-12);
		assert!((state.nodes[0].vy + 0.495).abs() < 1e-12);
	}

	#[test]
	fn unknown_endpoints_are_skipped() {
		let catalog = SkillCatalog::empty()
			.skill("Rust", Category::Language, 10.0)
			.skill("Cargo", Category::Tool, 10.0)
			.link("Rust", "Cargo", 0.5)
			.link("Rust", "Missing", 0.9)
			.link("Ghost", "Cargo", 0.9);
		let state = state_with(&catalog, 0, 200.0, 200.0);
		assert_eq!(
			state.edges(),
			&[Edge {
				source: 0,
				target: 1,
				strength: 0.5
			}]
		);
	}

	#[test]
	fn strength_is_clamped_to_unit_range() {
		let catalog = SkillCatalog::empty()
			.skill("A", Category::Tool, 5.0)
			.skill("B", Category::Tool, 5.0)
			.link("A", "B", 3.0)
			.link("B", "A", -1.0)
			.link("A", "B", f64::NAN);
		let state = state_with(&catalog, 0, 200.0, 200.0);
		let strengths: Vec<f64> = state.edges().iter().map(|e| e.strength).collect();
		assert_eq!(strengths, vec![1.0, 0.0, 0.0]);
	}

	#[test]
	fn hover_prefers_catalog_order_over_distance() {
		let catalog = SkillCatalog::empty()
			.skill("First", Category::Language, 10.0)
			.skill("Second", Category::Framework, 10.0);
		let mut state = state_with(&catalog, 0, 400.0, 400.0);
		(state.nodes[0].x, state.nodes[0].y) = (100.0, 100.0);
		(state.nodes[1].x, state.nodes[1].y) = (110.0, 100.0);

		// Closer to Second, still within First's pick range.
		assert_eq!(state.node_at_position(109.0, 100.0), Some(0));
		// Out of First's range (10 + 10), inside Second's.
		assert_eq!(state.node_at_position(125.0, 100.0), Some(1));
		assert_eq!(state.node_at_position(300.0, 300.0), None);
	}

	#[test]
	fn pick_range_is_strict() {
		let catalog = SkillCatalog::empty().skill("Rust", Category::Language, 10.0);
		let mut state = state_with(&catalog, 0, 400.0, 400.0);
		(state.nodes[0].x, state.nodes[0].y) = (200.0, 200.0);
		assert_eq!(state.node_at_position(219.9, 200.0), Some(0));
		assert_eq!(state.node_at_position(220.0, 200.0), None);
	}

	#[test]
	fn set_hover_reports_changes_only() {
		let catalog = SkillCatalog::default();
		let mut state = state_with(&catalog, 0, 400.0, 400.0);
		assert!(state.set_hover(Some(2)));
		assert!(!state.set_hover(Some(2)));
		assert_eq!(state.hovered_label(), Some("React"));
		assert!(state.set_hover(None));
		assert_eq!(state.hovered_label(), None);
	}

	#[test]
	fn same_seed_replays_identically() {
		let catalog = SkillCatalog::default();
		let mut a = state_with(&catalog, 42, 640.0, 400.0);
		let mut b = state_with(&catalog, 42, 640.0, 400.0);
		for _ in 0..300 {
			a.tick();
			b.tick();
			assert_eq!(a.nodes, b.nodes);
		}
		let (fresh, other) = (
			state_with(&catalog, 42, 640.0, 400.0),
			state_with(&catalog, 43, 640.0, 400.0),
		);
		assert_ne!(fresh.nodes, other.nodes);
	}

	#[test]
	fn initial_velocity_within_range() {
		let catalog = SkillCatalog::default();
		let state = state_with(&catalog, 9, 640.0, 400.0);
		for node in &state.nodes {
			assert!(node.vx.abs() <= 1.0 && node.vy.abs() <= 1.0);
		}
	}

	#[test]
	fn narrow_canvas_pins_to_centre() {
		let catalog = SkillCatalog::empty().skill("Wide", Category::Cloud, 30.0);
		let mut state = state_with(&catalog, 5, 40.0, 400.0);
		state.tick();
		assert_eq!(state.nodes[0].x, 20.0);
	}

	#[test]
	fn duplicate_labels_resolve_to_first() {
		let catalog = SkillCatalog::empty()
			.skill("Rust", Category::Language, 10.0)
			.skill("Rust", Category::Tool, 12.0)
			.skill("Cargo", Category::Tool, 8.0)
			.link("Cargo", "Rust", 0.5);
		let state = state_with(&catalog, 0, 200.0, 200.0);
		assert_eq!(state.nodes.len(), 3);
		assert_eq!(state.edges()[0].target, 0);
	}

	#[test]
	fn shrinking_the_canvas_pulls_nodes_back_in() {
		let catalog = SkillCatalog::default();
		let mut state = state_with(&catalog, 11, 1200.0, 900.0);
		state.resize(300.0, 200.0);
		state.tick();
		assert_in_bounds(&state);
	}
}
