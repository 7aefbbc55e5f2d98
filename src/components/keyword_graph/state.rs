use super::layout::{Circle, DrawPlan, Point};

/// Extra slack around small item nodes so they can be hovered.
pub const HIT_PADDING: f64 = 4.0;

pub struct KeywordGraphState {
	pub plan: DrawPlan,
	pub hover: Option<usize>,
}

impl KeywordGraphState {
	pub fn new(plan: DrawPlan) -> Self {
		Self { plan, hover: None }
	}

	pub fn width(&self) -> f64 {
		self.plan.frame.width
	}

	pub fn height(&self) -> f64 {
		self.plan.frame.height
	}

	/// Index into `item_nodes()` of the topmost item under the point.
	pub fn node_at_position(&self, x: f64, y: f64) -> Option<usize> {
		let point = Point::new(x, y);
		let count = self.plan.item_nodes().count();
		self.plan
			.item_nodes()
			.rev()
			.position(|node| node.center.distance_to(point) <= node.radius + HIT_PADDING)
			.map(|from_top| count - 1 - from_top)
	}

	pub fn hovered_node(&self) -> Option<&Circle> {
		self.hover.and_then(|idx| self.plan.item_nodes().nth(idx))
	}

	/// Returns whether the hovered node changed.
	pub fn set_hover(&mut self, node: Option<usize>) -> bool {
		if self.hover == node {
			return false;
		}
		self.hover = node;
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::keyword_graph::layout::compute_layout;
	use crate::components::keyword_graph::types::{CategoryFilter, KeywordItem, ResultSet, Tier};

	fn state() -> KeywordGraphState {
		let set: ResultSet = [(
			"questions",
			vec![
				KeywordItem::new("is coffee healthy", Tier::Low),
				KeywordItem::new("why is coffee bitter", Tier::High),
			],
		)]
		.into_iter()
		.collect();
		KeywordGraphState::new(compute_layout(&set, "coffee", &CategoryFilter::All, 800.0, 600.0))
	}

	#[test]
	fn hit_test_finds_item_under_cursor() {
		let state = state();
		let target = state.plan.item_nodes().nth(1).unwrap().center;
		let mut state = state;
		let hit = state.node_at_position(target.x, target.y);
		assert_eq!(hit, Some(1));
		state.set_hover(hit);
		assert_eq!(
			state.hovered_node().and_then(|n| n.tooltip.as_deref()),
			Some("is coffee healthy (LOW)")
		);

		let first = state.plan.item_nodes().next().unwrap();
		let edge = first.center.x + first.radius + HIT_PADDING - 0.5;
		assert_eq!(state.node_at_position(edge, first.center.y), Some(0));
	}

	#[test]
	fn hit_test_misses_empty_space_and_non_items() {
		let state = state();
		assert_eq!(state.node_at_position(5.0, 5.0), None);
		let center = state.plan.frame.center;
		assert_eq!(state.node_at_position(center.x, center.y), None);
	}

	#[test]
	fn set_hover_reports_changes_only() {
		let mut state = state();
		assert!(state.set_hover(Some(0)));
		assert!(!state.set_hover(Some(0)));
		assert_eq!(
			state.hovered_node().and_then(|n| n.tooltip.as_deref()),
			Some("why is coffee bitter (HIGH)")
		);
		assert!(state.set_hover(None));
		assert!(state.hovered_node().is_none());
		assert_eq!((state.width(), state.height()), (800.0, 600.0));
	}
}
