use crate::constants::*;
use crate::sim::smoke::{SmokeField, SmokeParams};
use crate::sim::FrameView;
use glam::Vec2;
use std::f64::consts::PI;
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas 2D drawing of the cigarette: filter at the bottom, paper body whose
/// height is the visible length, ember on top, smoke above the ember.
pub struct CanvasRenderer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    smoke: SmokeField,
    last_draw: Option<Duration>,
}

fn smoke_params() -> SmokeParams {
    SmokeParams {
        max_puffs: SMOKE_PUFFS_MAX,
        spawn_per_sec: SMOKE_SPAWN_PER_SEC,
        lifetime_sec: SMOKE_LIFETIME_SEC,
        rise_px_per_sec: SMOKE_RISE_PX_PER_SEC,
        drift_px_per_sec: SMOKE_DRIFT_PX_PER_SEC,
        base_radius_px: SMOKE_BASE_RADIUS_PX,
        growth_px_per_sec: SMOKE_GROWTH_PX_PER_SEC,
    }
}

impl CanvasRenderer {
    pub fn new(canvas: &web::HtmlCanvasElement, seed: u64) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            canvas: canvas.clone(),
            ctx,
            smoke: SmokeField::new(smoke_params(), seed),
            last_draw: None,
        })
    }

    /// Forget smoke and frame timing, e.g. after a restart.
    pub fn reset(&mut self) {
        self.smoke.clear();
        self.last_draw = None;
    }

    pub fn draw(&mut self, view: &FrameView, now: Duration) {
        let dt_sec = self
            .last_draw
            .map(|last| now.saturating_sub(last).as_secs_f32())
            .unwrap_or(0.0);
        self.last_draw = Some(now);

        let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        let css_w = self.canvas.width() as f64 / dpr;
        let css_h = self.canvas.height() as f64 / dpr;
        let ctx = &self.ctx;
        _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        ctx.set_shadow_blur(0.0);
        ctx.set_fill_style_str(BACKGROUND);
        ctx.fill_rect(0.0, 0.0, css_w, css_h);

        let cx = css_w * 0.5;
        let filter_bottom = css_h - BOTTOM_MARGIN_PX;
        let filter_top = filter_bottom - FILTER_HEIGHT_PX;
        let length = view.length as f64;
        let body_top = filter_top - length;
        let burning = length > 0.0;

        // Filter, rounded at the bottom
        self.gradient_fill(filter_top, filter_bottom, FILTER_TOP, FILTER_BOTTOM);
        rounded_rect(
            ctx,
            cx - BODY_WIDTH_PX * 0.5,
            filter_top,
            BODY_WIDTH_PX,
            FILTER_HEIGHT_PX,
            CORNER_RADIUS_PX * 2.0,
        );
        ctx.fill();
        self.outline(FILTER_BOTTOM);

        if burning {
            // Paper body
            self.gradient_fill(body_top, filter_top, PAPER_TOP, PAPER_BOTTOM);
            rounded_rect(
                ctx,
                cx - BODY_WIDTH_PX * 0.5,
                body_top,
                BODY_WIDTH_PX,
                length,
                CORNER_RADIUS_PX.min(length * 0.5),
            );
            ctx.fill();
            self.outline(PAPER_EDGE);

            // Ember with glow
            let (ember, glow, blur) = if view.active {
                (EMBER_ACTIVE, GLOW_ACTIVE, GLOW_ACTIVE_BLUR_PX)
            } else {
                (EMBER_IDLE, GLOW_IDLE, GLOW_IDLE_BLUR_PX)
            };
            let ember_top = body_top - EMBER_HEIGHT_PX;
            ctx.set_shadow_color(glow);
            ctx.set_shadow_blur(blur);
            ctx.set_fill_style_str(ember);
            rounded_rect(
                ctx,
                cx - EMBER_WIDTH_PX * 0.5,
                ember_top,
                EMBER_WIDTH_PX,
                EMBER_HEIGHT_PX,
                CORNER_RADIUS_PX,
            );
            ctx.fill();
            ctx.set_shadow_blur(0.0);
            self.outline(ASH_EDGE);

            let origin = Vec2::new(cx as f32, ember_top as f32);
            self.smoke.step(dt_sec, view.active, origin);
        } else {
            self.smoke.clear();
        }

        self.draw_smoke();
        ctx.set_global_alpha(1.0);
    }

    fn gradient_fill(&self, y0: f64, y1: f64, top: &str, bottom: &str) {
        let gradient = self.ctx.create_linear_gradient(0.0, y0, 0.0, y1);
        _ = gradient.add_color_stop(0.0, top);
        _ = gradient.add_color_stop(1.0, bottom);
        self.ctx.set_fill_style_canvas_gradient(&gradient);
    }

    fn outline(&self, color: &str) {
        self.ctx.set_line_width(OUTLINE_WIDTH_PX);
        self.ctx.set_stroke_style_str(color);
        self.ctx.stroke();
    }

    fn draw_smoke(&self) {
        let (r, g, b) = SMOKE_RGB;
        self.ctx
            .set_fill_style_str(&format!("rgb({}, {}, {})", r, g, b));
        for puff in self.smoke.puffs() {
            let (radius, alpha) = self.smoke.appearance(puff);
            self.ctx.set_global_alpha(alpha as f64);
            self.ctx.begin_path();
            _ = self
                .ctx
                .arc(puff.pos.x as f64, puff.pos.y as f64, radius as f64, 0.0, 2.0 * PI);
            self.ctx.fill();
        }
    }
}

// Build (but do not fill) a rounded rectangle path
fn rounded_rect(ctx: &web::CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, r: f64) {
    let r = r.min(w * 0.5).min(h * 0.5).max(0.0);
    ctx.begin_path();
    ctx.move_to(x + r, y);
    _ = ctx.arc_to(x + w, y, x + w, y + h, r);
    _ = ctx.arc_to(x + w, y + h, x, y + h, r);
    _ = ctx.arc_to(x, y + h, x, y, r);
    _ = ctx.arc_to(x, y, x + w, y, r);
    ctx.close_path();
}
