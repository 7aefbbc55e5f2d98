use std::f64::consts::PI;

use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::layout::{Circle, DrawPlan, Line, Primitive, Text};

#[derive(Debug, Error)]
pub enum RenderError {
	#[error("no browser window available")]
	NoWindow,
	#[error("canvas 2d context unavailable: {0}")]
	ContextUnavailable(String),
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, RenderError> {
	canvas
		.get_context("2d")
		.map_err(|e| RenderError::ContextUnavailable(format!("{e:?}")))?
		.ok_or_else(|| RenderError::ContextUnavailable("no context returned".into()))?
		.dyn_into::<CanvasRenderingContext2d>()
		.map_err(|_| RenderError::ContextUnavailable("not a 2d context".into()))
}

/// Full redraw; nothing from the previous frame survives.
pub fn render(plan: &DrawPlan, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, plan.frame.width, plan.frame.height);
	ctx.set_text_align("center");
	for primitive in &plan.primitives {
		match primitive {
			Primitive::Line(line) => draw_line(line, ctx),
			Primitive::Circle(circle) => draw_circle(circle, ctx),
			Primitive::Text(text) => draw_text(text, ctx),
		}
	}
	ctx.set_global_alpha(1.0);
}

fn draw_line(line: &Line, ctx: &CanvasRenderingContext2d) {
	ctx.set_global_alpha(line.opacity);
	ctx.set_stroke_style_str(line.stroke);
	ctx.set_line_width(line.width);
	ctx.begin_path();
	ctx.move_to(line.from.x, line.from.y);
	ctx.line_to(line.to.x, line.to.y);
	ctx.stroke();
}

fn draw_circle(circle: &Circle, ctx: &CanvasRenderingContext2d) {
	ctx.begin_path();
	let _ = ctx.arc(circle.center.x, circle.center.y, circle.radius, 0.0, 2.0 * PI);
	ctx.set_global_alpha(circle.fill_opacity);
	ctx.set_fill_style_str(circle.fill);
	ctx.fill();

	ctx.set_global_alpha(1.0);
	ctx.set_stroke_style_str(circle.stroke);
	ctx.set_line_width(circle.stroke_width);
	ctx.stroke();
}

fn draw_text(text: &Text, ctx: &CanvasRenderingContext2d) {
	ctx.set_global_alpha(1.0);
	ctx.set_fill_style_str(text.fill);
	let weight = if text.bold { "bold " } else { "" };
	ctx.set_font(&format!("{weight}{}px sans-serif", text.font_size));
	let _ = ctx.fill_text(&text.text, text.at.x, text.at.y);
}
