use super::types::Tier;

/// Color for categories outside the known palette.
pub const FALLBACK_COLOR: &str = "#6b7280";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryStyle {
	pub name: &'static str,
	pub color: &'static str,
	pub icon: &'static str,
}

pub const PALETTE: &[CategoryStyle] = &[
	CategoryStyle {
		name: "questions",
		color: "#3b82f6",
		icon: "❓",
	},
	CategoryStyle {
		name: "prepositions",
		color: "#10b981",
		icon: "🔗",
	},
	CategoryStyle {
		name: "comparisons",
		color: "#8b5cf6",
		icon: "⚖️",
	},
	CategoryStyle {
		name: "alphabetical",
		color: "#f59e0b",
		icon: "🔤",
	},
];

pub fn category_style(name: &str) -> Option<&'static CategoryStyle> {
	PALETTE.iter().find(|style| style.name == name)
}

pub fn category_color(name: &str) -> &'static str {
	category_style(name).map_or(FALLBACK_COLOR, |style| style.color)
}

pub fn category_icon(name: &str) -> Option<&'static str> {
	category_style(name).map(|style| style.icon)
}

/// "long_tail" -> "LONG TAIL"
pub fn category_label(name: &str) -> String {
	name.replace('_', " ").to_uppercase()
}

/// Visual weight of an item node and its edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TierStyle {
	pub node_radius: f64,
	pub fill_opacity: f64,
	pub stroke: &'static str,
	pub stroke_width: f64,
	pub edge_width: f64,
	pub edge_opacity: f64,
	pub font_size: f64,
	pub bold: bool,
	pub icon: &'static str,
}

const HIGH: TierStyle = TierStyle {
	node_radius: 8.0,
	fill_opacity: 1.0,
	stroke: "#ff0000",
	stroke_width: 2.0,
	edge_width: 2.0,
	edge_opacity: 0.6,
	font_size: 11.0,
	bold: true,
	icon: "🔥",
};

const MEDIUM: TierStyle = TierStyle {
	node_radius: 6.0,
	fill_opacity: 0.8,
	stroke: "#ffa500",
	stroke_width: 1.0,
	edge_width: 1.0,
	edge_opacity: 0.4,
	font_size: 10.0,
	bold: false,
	icon: "🔸",
};

const LOW: TierStyle = TierStyle {
	node_radius: 4.0,
	fill_opacity: 0.6,
	stroke: "#808080",
	stroke_width: 1.0,
	edge_width: 1.0,
	edge_opacity: 0.4,
	font_size: 10.0,
	bold: false,
	icon: "🔹",
};

impl Tier {
	pub fn style(self) -> &'static TierStyle {
		match self {
			Tier::High => &HIGH,
			Tier::Medium => &MEDIUM,
			Tier::Low => &LOW,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn known_categories_have_fixed_colors() {
		assert_eq!(category_color("questions"), "#3b82f6");
		assert_eq!(category_color("prepositions"), "#10b981");
		assert_eq!(category_color("comparisons"), "#8b5cf6");
		assert_eq!(category_color("alphabetical"), "#f59e0b");
	}

	#[test]
	fn unknown_category_falls_back_to_gray_without_icon() {
		assert_eq!(category_color("related"), FALLBACK_COLOR);
		assert_eq!(category_icon("related"), None);
		assert!(category_icon("questions").is_some());
	}

	#[test]
	fn label_replaces_underscores_and_uppercases() {
		assert_eq!(category_label("long_tail_terms"), "LONG TAIL TERMS");
		assert_eq!(category_label("questions"), "QUESTIONS");
	}

	#[test]
	fn high_tier_outweighs_the_rest() {
		let (high, medium, low) = (Tier::High.style(), Tier::Medium.style(), Tier::Low.style());
		assert!(high.node_radius > medium.node_radius && medium.node_radius > low.node_radius);
		assert_eq!(high.stroke_width, 2.0);
		assert_eq!(medium.stroke_width, 1.0);
		assert_eq!(low.edge_opacity, 0.4);
		assert!(high.bold && !medium.bold);
	}
}
