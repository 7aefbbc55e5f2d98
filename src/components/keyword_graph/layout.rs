use std::f64::consts::{FRAC_PI_2, PI};

use log::debug;

use super::palette::{self, category_color};
use super::types::{CategoryFilter, KeywordItem, ResultSet, Tier};

pub const DEFAULT_WIDTH: f64 = 800.0;
pub const DEFAULT_HEIGHT: f64 = 600.0;
pub const VIEWPORT_MARGIN: f64 = 100.0;
/// Floor for the usable radius on viewports too small for the margin.
pub const MIN_RADIUS: f64 = 20.0;

pub const CENTER_RADIUS: f64 = 40.0;
pub const CATEGORY_RADIUS: f64 = 30.0;
pub const CATEGORY_ORBIT: f64 = 0.7;
/// Items orbit their category at a fixed distance, independent of the viewport.
pub const ITEM_ORBIT_RADIUS: f64 = 80.0;
pub const MAX_VISIBLE_ITEMS: usize = 8;
pub const LABEL_MAX_CHARS: usize = 15;

const CENTER_FILL: &str = "#1e3a8a";
const NODE_STROKE: &str = "#ffffff";
const ITEM_TEXT_COLOR: &str = "#374151";
const OVERFLOW_TEXT_COLOR: &str = "#6b7280";

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	fn polar(origin: Point, angle: f64, radius: f64) -> Self {
		Self {
			x: origin.x + angle.cos() * radius,
			y: origin.y + angle.sin() * radius,
		}
	}

	fn offset(self, dx: f64, dy: f64) -> Self {
		Self {
			x: self.x + dx,
			y: self.y + dy,
		}
	}

	pub fn distance_to(self, other: Point) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutFrame {
	pub width: f64,
	pub height: f64,
	pub center: Point,
	pub max_radius: f64,
}

impl LayoutFrame {
	pub fn new(width: f64, height: f64) -> Self {
		let available = width.min(height) / 2.0 - VIEWPORT_MARGIN;
		let max_radius = if available < MIN_RADIUS {
			debug!("viewport {width}x{height} too small, clamping radius to {MIN_RADIUS}");
			MIN_RADIUS
		} else {
			available
		};
		Self {
			width,
			height,
			center: Point::new(width / 2.0, height / 2.0),
			max_radius,
		}
	}
}

impl Default for LayoutFrame {
	fn default() -> Self {
		Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
	}
}

#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
	Center,
	Category(String),
	Item(Tier),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
	pub center: Point,
	pub radius: f64,
	pub fill: &'static str,
	pub fill_opacity: f64,
	pub stroke: &'static str,
	pub stroke_width: f64,
	pub kind: NodeKind,
	pub tooltip: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Line {
	pub from: Point,
	pub to: Point,
	pub stroke: &'static str,
	pub width: f64,
	pub opacity: f64,
}

/// Horizontally centered on `at`; `at.y` is the baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct Text {
	pub at: Point,
	pub text: String,
	pub fill: &'static str,
	pub font_size: f64,
	pub bold: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
	Line(Line),
	Circle(Circle),
	Text(Text),
}

/// Renderer-agnostic scene, in paint order.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawPlan {
	pub frame: LayoutFrame,
	pub primitives: Vec<Primitive>,
}

impl DrawPlan {
	pub fn circles(&self) -> impl DoubleEndedIterator<Item = &Circle> {
		self.primitives.iter().filter_map(|p| match p {
			Primitive::Circle(c) => Some(c),
			_ => None,
		})
	}

	pub fn category_nodes(&self) -> impl Iterator<Item = &Circle> {
		self.circles()
			.filter(|c| matches!(c.kind, NodeKind::Category(_)))
	}

	pub fn item_nodes(&self) -> impl DoubleEndedIterator<Item = &Circle> {
		self.circles().filter(|c| matches!(c.kind, NodeKind::Item(_)))
	}

	pub fn lines(&self) -> impl Iterator<Item = &Line> {
		self.primitives.iter().filter_map(|p| match p {
			Primitive::Line(l) => Some(l),
			_ => None,
		})
	}

	pub fn texts(&self) -> impl Iterator<Item = &Text> {
		self.primitives.iter().filter_map(|p| match p {
			Primitive::Text(t) => Some(t),
			_ => None,
		})
	}
}

/// Stable: items of equal tier keep their input order.
pub fn sort_by_popularity(items: &[KeywordItem]) -> Vec<&KeywordItem> {
	let mut sorted: Vec<&KeywordItem> = items.iter().collect();
	sorted.sort_by_key(|item| item.popularity);
	sorted
}

pub fn truncate_label(text: &str) -> String {
	match text.char_indices().nth(LABEL_MAX_CHARS) {
		Some((cut, _)) => format!("{}...", &text[..cut]),
		None => text.to_string(),
	}
}

pub fn compute_layout(
	results: &ResultSet,
	search_term: &str,
	filter: &CategoryFilter,
	width: f64,
	height: f64,
) -> DrawPlan {
	let frame = LayoutFrame::new(width, height);
	let mut primitives = Vec::new();

	let categories: Vec<(&str, &[KeywordItem])> = match filter {
		CategoryFilter::All => results.iter().collect(),
		CategoryFilter::Only(selected) => match results.get(selected) {
			Some(items) => vec![(selected.as_str(), items)],
			None => {
				debug!("category {selected:?} not in result set, drawing center only");
				Vec::new()
			}
		},
	};

	let angle_step = 2.0 * PI / categories.len().max(1) as f64;
	let category_orbit = frame.max_radius * CATEGORY_ORBIT;

	for (i, (name, items)) in categories.iter().enumerate() {
		let color = category_color(name);
		let category_angle = i as f64 * angle_step;
		let position = Point::polar(frame.center, category_angle - FRAC_PI_2, category_orbit);

		primitives.push(Primitive::Line(Line {
			from: frame.center,
			to: position,
			stroke: color,
			width: 2.0,
			opacity: 0.6,
		}));
		primitives.push(Primitive::Circle(Circle {
			center: position,
			radius: CATEGORY_RADIUS,
			fill: color,
			fill_opacity: 0.9,
			stroke: NODE_STROKE,
			stroke_width: 2.0,
			kind: NodeKind::Category(name.to_string()),
			tooltip: None,
		}));
		primitives.push(Primitive::Text(Text {
			at: position.offset(0.0, -45.0),
			text: palette::category_label(name),
			fill: color,
			font_size: 14.0,
			bold: true,
		}));

		let sorted = sort_by_popularity(items);
		let visible = &sorted[..sorted.len().min(MAX_VISIBLE_ITEMS)];
		let item_angle_step = 2.0 * PI / visible.len().max(1) as f64;

		for (j, item) in visible.iter().enumerate() {
			let style = item.popularity.style();
			let item_angle = category_angle + j as f64 * item_angle_step - FRAC_PI_2;
			let item_position = Point::polar(position, item_angle, ITEM_ORBIT_RADIUS);

			primitives.push(Primitive::Line(Line {
				from: position,
				to: item_position,
				stroke: color,
				width: style.edge_width,
				opacity: style.edge_opacity,
			}));
			primitives.push(Primitive::Circle(Circle {
				center: item_position,
				radius: style.node_radius,
				fill: color,
				fill_opacity: style.fill_opacity,
				stroke: style.stroke,
				stroke_width: style.stroke_width,
				kind: NodeKind::Item(item.popularity),
				tooltip: Some(item.tooltip()),
			}));
			primitives.push(Primitive::Text(Text {
				at: item_position.offset(0.0, -15.0),
				text: truncate_label(&item.text),
				fill: ITEM_TEXT_COLOR,
				font_size: style.font_size,
				bold: style.bold,
			}));
			primitives.push(Primitive::Text(Text {
				at: item_position.offset(12.0, -10.0),
				text: style.icon.to_string(),
				fill: ITEM_TEXT_COLOR,
				font_size: 10.0,
				bold: false,
			}));
		}

		let hidden = sorted.len() - visible.len();
		if hidden > 0 {
			primitives.push(Primitive::Text(Text {
				at: position.offset(0.0, 15.0),
				text: format!("+{hidden} more"),
				fill: OVERFLOW_TEXT_COLOR,
				font_size: 10.0,
				bold: false,
			}));
		}
	}

	primitives.push(Primitive::Circle(Circle {
		center: frame.center,
		radius: CENTER_RADIUS,
		fill: CENTER_FILL,
		fill_opacity: 1.0,
		stroke: NODE_STROKE,
		stroke_width: 3.0,
		kind: NodeKind::Center,
		tooltip: None,
	}));
	primitives.push(Primitive::Text(Text {
		at: frame.center.offset(0.0, 5.0),
		text: search_term.to_string(),
		fill: NODE_STROKE,
		font_size: 12.0,
		bold: true,
	}));

	let plan = DrawPlan { frame, primitives };
	debug!(
		"layout for {search_term:?}: {} categories, {} items, {} edges, {} labels",
		plan.category_nodes().count(),
		plan.item_nodes().count(),
		plan.lines().count(),
		plan.texts().count()
	);
	plan
}
