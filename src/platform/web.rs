//! Browser host: canvas surface, animation frames, event listeners

use std::f64::consts::TAU;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::time_seed;
use crate::renderer::{Rgba, Surface};
use crate::scheduler::{Animation, FrameCallback, FrameScheduler};
use crate::settings::FieldSettings;
use crate::sim::ParticleField;

/// Canvas 2D context as a drawing surface
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// `None` if the canvas has no 2D context
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.stroke();
    }
}

/// `window.requestAnimationFrame`
pub struct AnimationFrameScheduler {
    window: Window,
}

impl AnimationFrameScheduler {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    fn request_frame(&self, callback: FrameCallback) {
        // once_into_js frees the closure after it fires
        let closure = Closure::once_into_js(move |_time: f64| callback());
        if self
            .window
            .request_animation_frame(closure.unchecked_ref())
            .is_err()
        {
            log::warn!("requestAnimationFrame failed, particle field loop ended");
        }
    }
}

/// Window inner size in CSS pixels
fn viewport_size(window: &Window) -> Option<(u32, u32)> {
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width as u32, height as u32))
}

/// Find the canvas, size it to the viewport and start the field.
///
/// Returns `None` (and starts nothing) when the page has no such canvas.
pub fn mount(selector: &str) -> Option<Animation<CanvasSurface>> {
    let window = web_sys::window()?;
    let document = window.document()?;

    let Some(canvas) = document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
    else {
        log::debug!("No canvas matches {}, skipping particle field", selector);
        return None;
    };

    let Some((width, height)) = viewport_size(&window) else {
        log::debug!("Viewport size unavailable, skipping particle field");
        return None;
    };
    canvas.set_width(width);
    canvas.set_height(height);

    let seed = time_seed();
    let field = ParticleField::with_settings(FieldSettings::load(), seed).unwrap_or_else(|e| {
        log::warn!("Invalid field settings ({}), using defaults", e);
        ParticleField::new(seed)
    });

    let scheduler = Rc::new(AnimationFrameScheduler::new(window.clone()));
    let animation = Animation::start(
        CanvasSurface::from_canvas(&canvas),
        field,
        (width, height),
        scheduler,
    )?;

    setup_listeners(&window, &canvas, &animation);
    Some(animation)
}

fn setup_listeners(window: &Window, canvas: &HtmlCanvasElement, animation: &Animation<CanvasSurface>) {
    // Pointer move, at native event rate
    {
        let animation = animation.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            animation.set_pointer(event.client_x() as f32, event.client_y() as f32);
        });
        let _ = window
            .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Viewport resize: canvas follows the window, particles are rebuilt
    {
        let animation = animation.clone();
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            if let Some((width, height)) = viewport_size(&window) {
                canvas.set_width(width);
                canvas.set_height(height);
                animation.resize(width, height);
                log::debug!("Viewport resized to {}x{}", width, height);
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
