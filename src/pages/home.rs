use leptos::prelude::*;
use log::debug;

use crate::components::keyword_graph::{
	CategoryFilter, CategoryLegend, GraphDataError, KeywordGraphCanvas, PALETTE, ResultSet,
	SearchResponse, category_label, parse_result_set, parse_search_response,
};

const SAMPLE_RESPONSE: &str = r#"{
  "suggestions": {
    "questions": [
      {"text": "how to brew coffee", "popularity": "HIGH"},
      {"text": "is coffee bad for you", "popularity": "HIGH"},
      {"text": "why does coffee make me sleepy", "popularity": "MEDIUM"},
      {"text": "what is cold brew coffee", "popularity": "LOW"},
      {"text": "can coffee go bad"},
      {"text": "where to buy coffee beans", "popularity": "MEDIUM"},
      {"text": "when was coffee invented", "popularity": "LOW"},
      {"text": "which coffee has most caffeine", "popularity": "HIGH"},
      {"text": "who discovered coffee", "popularity": "LOW"},
      {"text": "are coffee grounds good for plants", "popularity": "MEDIUM"}
    ],
    "prepositions": [
      {"text": "coffee with milk", "popularity": "HIGH"},
      {"text": "coffee without caffeine", "popularity": "MEDIUM"},
      "coffee for weight loss",
      {"text": "coffee near me", "popularity": "HIGH"}
    ],
    "comparisons": [
      {"text": "coffee vs tea", "popularity": "HIGH"},
      {"text": "coffee vs energy drinks", "popularity": "LOW"},
      {"text": "coffee or matcha", "popularity": "MEDIUM"}
    ],
    "alphabetical": [
      "coffee arabica",
      {"text": "coffee beans", "popularity": "HIGH"},
      {"text": "coffee cake", "popularity": "MEDIUM"},
      {"text": "coffee grinder", "popularity": "HIGH"},
      {"text": "coffee maker", "popularity": "HIGH"},
      {"text": "coffee table", "popularity": "LOW"}
    ]
  },
  "total_suggestions": 23,
  "processing_time_ms": 184
}"#;

/// Accepts a full search response or just its `suggestions` object.
fn parse_input(body: &str) -> Result<SearchResponse, GraphDataError> {
	parse_search_response(body).or_else(|err| {
		parse_result_set(body)
			.map(|suggestions| SearchResponse {
				total_suggestions: suggestions.total_items(),
				suggestions,
				..Default::default()
			})
			.map_err(|_| err)
	})
}

/// Palette categories first, then any extra ones present in the data.
fn category_options(results: &ResultSet) -> Vec<String> {
	let mut names: Vec<String> = PALETTE.iter().map(|style| style.name.to_string()).collect();
	for name in results.category_names() {
		if !names.iter().any(|known| known == name) {
			names.push(name.to_string());
		}
	}
	names
}

/// Keyword graph explorer
#[component]
pub fn Home() -> impl IntoView {
	let (body, set_body) = signal(SAMPLE_RESPONSE.to_string());
	let (search_term, set_search_term) = signal("coffee".to_string());
	let (selected, set_selected) = signal(CategoryFilter::All);

	let results = Memo::new(move |_| {
		body.with(|b| parse_input(b))
			.map(|response| response.suggestions)
			.unwrap_or_default()
	});
	let options = Memo::new(move |_| results.with(category_options));

	let on_category = move |ev: leptos::ev::Event| {
		let filter = event_target_value(&ev)
			.parse::<CategoryFilter>()
			.unwrap_or_default();
		debug!("category filter set to {filter}");
		set_selected.set(filter);
	};

	view! {
		<div class="keyword-graph-page">
			<h1>"Keyword Graph"</h1>
			<div class="graph-controls">
				<label>
					"Search term"
					<input
						type="text"
						prop:value=search_term
						on:input=move |ev| set_search_term.set(event_target_value(&ev))
					/>
				</label>
				<label>
					"Category"
					<select on:change=on_category>
						<option value={CategoryFilter::ALL}>"All categories"</option>
						<For
							each=move || options.get()
							key=|name| name.clone()
							children=move |name| {
								let label = category_label(&name);
								view! { <option value=name>{label}</option> }
							}
						/>
					</select>
				</label>
			</div>
			<textarea
				class="response-input"
				prop:value=body
				on:input=move |ev| set_body.set(event_target_value(&ev))
			/>

			<ErrorBoundary fallback=|errors| {
				view! {
					<p>"Could not read the search response:"</p>
					<ul>
						{move || {
							errors
								.get()
								.into_iter()
								.map(|(_, e)| view! { <li>{e.to_string()}</li> })
								.collect_view()
						}}
					</ul>
				}
			}>
				{move || {
					body.with(|b| parse_input(b))
						.map(|response| {
							view! {
								<p class="graph-stats">
									{format!(
										"{} categories, {} suggestions ({} reported) in {} ms",
										response.suggestions.len(),
										response.suggestions.total_items(),
										response.total_suggestions,
										response.processing_time_ms,
									)}
								</p>
							}
						})
				}}
			</ErrorBoundary>

			<div class="keyword-graph-container">
				<KeywordGraphCanvas
					results=results
					search_term=search_term
					selected_category=selected
				/>
			</div>
			<CategoryLegend selected_category=selected />
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sample_response_parses() {
		let response = parse_input(SAMPLE_RESPONSE).unwrap();
		assert_eq!(response.suggestions.len(), 4);
		assert_eq!(response.suggestions.total_items(), response.total_suggestions);
	}

	#[test]
	fn bare_suggestions_are_accepted() {
		let response = parse_input(r#"{"questions": ["a", "b"], "related": ["c"]}"#).unwrap();
		assert_eq!(response.total_suggestions, 3);
		assert_eq!(response.processing_time_ms, 0.0);
	}

	#[test]
	fn garbage_reports_the_response_error() {
		let err = parse_input("not json").unwrap_err();
		assert!(err.to_string().starts_with("Failed to parse search response"));
	}

	#[test]
	fn extra_categories_follow_the_palette() {
		let response = parse_input(r#"{"related_searches": [], "questions": []}"#).unwrap();
		assert_eq!(
			category_options(&response.suggestions),
			vec!["questions", "prepositions", "comparisons", "alphabetical", "related_searches"]
		);
	}
}
