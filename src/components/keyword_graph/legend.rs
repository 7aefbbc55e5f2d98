use leptos::prelude::*;

use super::palette::{FALLBACK_COLOR, PALETTE, category_icon, category_label};
use super::types::CategoryFilter;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegendEntry {
	pub category: String,
	pub color: &'static str,
	pub icon: Option<&'static str>,
}

pub fn build_legend(filter: &CategoryFilter) -> Vec<LegendEntry> {
	let mut entries: Vec<LegendEntry> = PALETTE
		.iter()
		.filter(|style| filter.matches(style.name))
		.map(|style| LegendEntry {
			category: style.name.to_string(),
			color: style.color,
			icon: Some(style.icon),
		})
		.collect();

	// A filter outside the palette still gets its swatch.
	if let CategoryFilter::Only(selected) = filter {
		if entries.is_empty() {
			entries.push(LegendEntry {
				category: selected.clone(),
				color: FALLBACK_COLOR,
				icon: category_icon(selected),
			});
		}
	}
	entries
}

#[component]
pub fn CategoryLegend(#[prop(into)] selected_category: Signal<CategoryFilter>) -> impl IntoView {
	view! {
		<div class="category-legend">
			{move || {
				build_legend(&selected_category.get())
					.into_iter()
					.map(|entry| {
						view! {
							<span class="legend-entry">
								<span
									class="legend-swatch"
									style=format!("background-color: {};", entry.color)
								/>
								{entry.icon}
								<span>{category_label(&entry.category)}</span>
							</span>
						}
					})
					.collect_view()
			}}
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unfiltered_legend_lists_whole_palette() {
		let legend = build_legend(&CategoryFilter::All);
		let names: Vec<_> = legend.iter().map(|e| e.category.as_str()).collect();
		assert_eq!(names, vec!["questions", "prepositions", "comparisons", "alphabetical"]);
		assert!(legend.iter().all(|e| e.icon.is_some()));
	}

	#[test]
	fn filtered_legend_has_one_entry() {
		let legend = build_legend(&CategoryFilter::Only("comparisons".into()));
		assert_eq!(legend.len(), 1);
		assert_eq!(legend[0].category, "comparisons");
		assert_eq!(legend[0].color, "#8b5cf6");
	}

	#[test]
	fn unknown_filter_gets_fallback_swatch_without_icon() {
		let legend = build_legend(&CategoryFilter::Only("related_searches".into()));
		assert_eq!(
			legend,
			vec![LegendEntry {
				category: "related_searches".into(),
				color: FALLBACK_COLOR,
				icon: None,
			}]
		);
	}
}
