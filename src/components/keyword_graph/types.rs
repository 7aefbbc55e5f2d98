use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphDataError {
	#[error("Failed to parse search response: {0}")]
	Json(#[from] serde_json::Error),
}

/// Popularity classification of a suggestion. Variant order is sort priority.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
	High,
	#[default]
	Medium,
	Low,
}

impl Tier {
	pub fn as_str(self) -> &'static str {
		match self {
			Tier::High => "HIGH",
			Tier::Medium => "MEDIUM",
			Tier::Low => "LOW",
		}
	}

	/// Unknown labels fall back to MEDIUM.
	pub fn from_label(label: &str) -> Self {
		match label.trim().to_ascii_uppercase().as_str() {
			"HIGH" => Tier::High,
			"LOW" => Tier::Low,
			_ => Tier::Medium,
		}
	}
}

impl fmt::Display for Tier {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawKeywordItem {
	Plain(String),
	Rich {
		text: String,
		#[serde(default)]
		popularity: Option<serde_json::Value>,
	},
}

/// A suggestion with its popularity already resolved.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "RawKeywordItem")]
pub struct KeywordItem {
	pub text: String,
	pub popularity: Tier,
}

impl KeywordItem {
	pub fn new(text: impl Into<String>, popularity: Tier) -> Self {
		Self {
			text: text.into(),
			popularity,
		}
	}

	pub fn tooltip(&self) -> String {
		format!("{} ({})", self.text, self.popularity)
	}
}

impl From<RawKeywordItem> for KeywordItem {
	fn from(raw: RawKeywordItem) -> Self {
		match raw {
			RawKeywordItem::Plain(text) => Self::new(text, Tier::Medium),
			RawKeywordItem::Rich { text, popularity } => Self::new(
				text,
				popularity
					.as_ref()
					.and_then(serde_json::Value::as_str)
					.map(Tier::from_label)
					.unwrap_or_default(),
			),
		}
	}
}

/// Suggestions grouped by category, in document order.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "IndexMap<String, Option<Vec<KeywordItem>>>")]
pub struct ResultSet {
	categories: IndexMap<String, Vec<KeywordItem>>,
}

impl ResultSet {
	pub fn is_empty(&self) -> bool {
		self.categories.is_empty()
	}

	pub fn len(&self) -> usize {
		self.categories.len()
	}

	pub fn get(&self, category: &str) -> Option<&[KeywordItem]> {
		self.categories.get(category).map(Vec::as_slice)
	}

	pub fn category_names(&self) -> impl Iterator<Item = &str> {
		self.categories.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &[KeywordItem])> {
		self.categories
			.iter()
			.map(|(name, items)| (name.as_str(), items.as_slice()))
	}

	pub fn total_items(&self) -> usize {
		self.categories.values().map(Vec::len).sum()
	}
}

impl From<IndexMap<String, Option<Vec<KeywordItem>>>> for ResultSet {
	fn from(raw: IndexMap<String, Option<Vec<KeywordItem>>>) -> Self {
		Self {
			categories: raw
				.into_iter()
				.map(|(name, items)| (name, items.unwrap_or_default()))
				.collect(),
		}
	}
}

impl<K: Into<String>> FromIterator<(K, Vec<KeywordItem>)> for ResultSet {
	fn from_iter<T: IntoIterator<Item = (K, Vec<KeywordItem>)>>(iter: T) -> Self {
		Self {
			categories: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
		}
	}
}

/// Which categories are drawn. `"all"` is the wire sentinel for every category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
	#[default]
	All,
	Only(String),
}

impl CategoryFilter {
	pub const ALL: &'static str = "all";

	pub fn matches(&self, category: &str) -> bool {
		match self {
			CategoryFilter::All => true,
			CategoryFilter::Only(selected) => selected == category,
		}
	}
}

impl FromStr for CategoryFilter {
	type Err = std::convert::Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(if s == Self::ALL {
			CategoryFilter::All
		} else {
			CategoryFilter::Only(s.to_string())
		})
	}
}

impl fmt::Display for CategoryFilter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			CategoryFilter::All => f.write_str(Self::ALL),
			CategoryFilter::Only(category) => f.write_str(category),
		}
	}
}

/// Body returned by the search collaborator. Only `suggestions` feeds the graph.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SearchResponse {
	pub suggestions: ResultSet,
	#[serde(default)]
	pub total_suggestions: usize,
	#[serde(default)]
	pub processing_time_ms: f64,
	#[serde(default)]
	pub usage_info: Option<serde_json::Value>,
}

pub fn parse_search_response(body: &str) -> Result<SearchResponse, GraphDataError> {
	Ok(serde_json::from_str(body)?)
}

pub fn parse_result_set(body: &str) -> Result<ResultSet, GraphDataError> {
	Ok(serde_json::from_str(body)?)
}
