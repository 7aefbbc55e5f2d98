use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, warn};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent};

use super::layout::{DEFAULT_HEIGHT, DEFAULT_WIDTH, compute_layout};
use super::render::{self, RenderError, context_2d};
use super::state::KeywordGraphState;
use super::types::{CategoryFilter, ResultSet};

/// Radial keyword graph. Draws nothing while `results` is empty.
#[component]
pub fn KeywordGraphCanvas(
	#[prop(into)] results: Signal<ResultSet>,
	#[prop(into)] search_term: Signal<String>,
	#[prop(into)] selected_category: Signal<CategoryFilter>,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = DEFAULT_HEIGHT)] height: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<KeywordGraphState>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (resize_tick, set_resize_tick) = signal(0u32);
	let (state_init, resize_cb_init) = (state.clone(), resize_cb.clone());

	Effect::new(move |_| {
		resize_tick.track();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let Some(window) = web_sys::window() else {
			error!("{}", RenderError::NoWindow);
			return;
		};

		if resize_cb_init.borrow().is_none() {
			let cb = Closure::<dyn FnMut()>::new(move || {
				set_resize_tick.update(|tick| *tick = tick.wrapping_add(1));
			});
			if let Err(e) =
				window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())
			{
				warn!("failed to watch window resize: {e:?}");
			}
			*resize_cb_init.borrow_mut() = Some(cb);
		}

		let results = results.get();
		if results.is_empty() {
			*state_init.borrow_mut() = None;
			return;
		}

		let w = resolve_width(width, &canvas);
		let plan = compute_layout(
			&results,
			&search_term.get(),
			&selected_category.get(),
			w,
			height,
		);
		canvas.set_width(w as u32);
		canvas.set_height(height as u32);

		let ctx = match context_2d(&canvas) {
			Ok(ctx) => ctx,
			Err(e) => {
				error!("{e}");
				return;
			}
		};
		render::render(&plan, &ctx);
		show_tooltip(&canvas, None);
		*state_init.borrow_mut() = Some(KeywordGraphState::new(plan));
	});

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut s) = *state_mm.borrow_mut() {
			let inside = (0.0..=s.width()).contains(&x) && (0.0..=s.height()).contains(&y);
			let hovered = if inside { s.node_at_position(x, y) } else { None };
			if s.set_hover(hovered) {
				show_tooltip(&canvas, s.hovered_node().and_then(|n| n.tooltip.as_deref()));
			}
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			if s.set_hover(None) {
				if let Some(canvas) = canvas_ref.get_untracked() {
					show_tooltip(&canvas, None);
				}
			}
		}
	};

	let display = move || {
		if results.with(ResultSet::is_empty) {
			"none"
		} else {
			"block"
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="keyword-graph-canvas"
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			style:display=display
		/>
	}
}

/// Container width, or the default when the container has not been laid out.
fn resolve_width(fixed: Option<f64>, canvas: &HtmlCanvasElement) -> f64 {
	fixed.unwrap_or_else(|| {
		let measured = canvas
			.parent_element()
			.map(|p| p.client_width() as f64)
			.unwrap_or(0.0);
		if measured > 0.0 { measured } else { DEFAULT_WIDTH }
	})
}

fn show_tooltip(canvas: &HtmlCanvasElement, tooltip: Option<&str>) {
	let updated = match tooltip {
		Some(text) => canvas.set_attribute("title", text),
		None => canvas.remove_attribute("title"),
	};
	if let Err(e) = updated {
		warn!("failed to update tooltip: {e:?}");
	}
	// Leptos' `ElementExt::style` shadows the web-sys getter on the element itself.
	let cursor = web_sys::HtmlElement::style(canvas).set_property("cursor", cursor_for(tooltip));
	if let Err(e) = cursor {
		warn!("failed to update cursor: {e:?}");
	}
}

fn cursor_for(tooltip: Option<&str>) -> &'static str {
	if tooltip.is_some() { "pointer" } else { "default" }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn pointer_cursor_only_over_items_with_tooltips() {
		assert_eq!(cursor_for(Some("cold brew (LOW)")), "pointer");
		assert_eq!(cursor_for(None), "default");
	}
}
