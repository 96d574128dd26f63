use craft_core::{DrawCmd, DrawList};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Executes core draw lists on a Canvas2D context.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { ctx })
    }

    pub fn paint(&self, list: &DrawList, video: &web::HtmlVideoElement, width: f64, height: f64) {
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, width, height);
        for cmd in list.iter() {
            match cmd {
                DrawCmd::MirroredVideo => {
                    ctx.save();
                    _ = ctx.scale(-1.0, 1.0);
                    _ = ctx.translate(-width, 0.0);
                    _ = ctx.draw_image_with_html_video_element_and_dw_and_dh(
                        video, 0.0, 0.0, width, height,
                    );
                    ctx.restore();
                }
                DrawCmd::Wash { color } => {
                    ctx.set_fill_style_str(color);
                    ctx.fill_rect(0.0, 0.0, width, height);
                }
                DrawCmd::Rect {
                    origin,
                    size,
                    color,
                } => {
                    ctx.set_fill_style_str(color);
                    ctx.fill_rect(
                        origin.x as f64,
                        origin.y as f64,
                        size.x as f64,
                        size.y as f64,
                    );
                }
                DrawCmd::PushClip { origin, size } => {
                    ctx.save();
                    ctx.begin_path();
                    ctx.rect(
                        origin.x as f64,
                        origin.y as f64,
                        size.x as f64,
                        size.y as f64,
                    );
                    ctx.clip();
                }
                DrawCmd::PopClip => ctx.restore(),
                DrawCmd::Line {
                    from,
                    to,
                    color,
                    width,
                } => {
                    ctx.set_stroke_style_str(color);
                    ctx.set_line_width(*width as f64);
                    ctx.begin_path();
                    ctx.move_to(from.x as f64, from.y as f64);
                    ctx.line_to(to.x as f64, to.y as f64);
                    ctx.stroke();
                }
                DrawCmd::Disc {
                    center,
                    radius,
                    color,
                    alpha,
                } => {
                    ctx.set_global_alpha(*alpha as f64);
                    ctx.set_fill_style_str(color);
                    ctx.begin_path();
                    _ = ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU);
                    ctx.fill();
                    ctx.set_global_alpha(1.0);
                }
                DrawCmd::Ring {
                    center,
                    radius,
                    color,
                    width,
                } => {
                    ctx.set_stroke_style_str(color);
                    ctx.set_line_width(*width as f64);
                    ctx.begin_path();
                    _ = ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU);
                    ctx.stroke();
                }
                DrawCmd::Glow {
                    center,
                    radius,
                    color,
                } => {
                    let (x, y, r) = (center.x as f64, center.y as f64, *radius as f64);
                    let Ok(gradient) = ctx.create_radial_gradient(x, y, 0.0, x, y, r) else {
                        continue;
                    };
                    _ = gradient.add_color_stop(0.0, color);
                    _ = gradient.add_color_stop(1.0, "transparent");
                    ctx.set_fill_style_canvas_gradient(&gradient);
                    ctx.begin_path();
                    _ = ctx.arc(x, y, r, 0.0, TAU);
                    ctx.fill();
                }
                DrawCmd::Label {
                    at,
                    text,
                    font,
                    color,
                } => {
                    ctx.set_fill_style_str(color);
                    ctx.set_font(font);
                    ctx.set_text_align("center");
                    ctx.set_text_baseline("middle");
                    _ = ctx.fill_text(text, at.x as f64, at.y as f64);
                }
            }
        }
    }
}
