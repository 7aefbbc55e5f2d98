mod component;
mod layout;
mod legend;
mod palette;
mod render;
mod state;
mod types;

pub use component::KeywordGraphCanvas;
pub use legend::CategoryLegend;
pub use palette::{PALETTE, category_label};
pub use types::{
	CategoryFilter, GraphDataError, ResultSet, SearchResponse, parse_result_set,
	parse_search_response,
};
