use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use super::dom;
use crate::config::{ids, SiteConfig};
use crate::particles::{FieldConfig, Glow, ParticleField, Rgba, Surface, Viewport};

/// `Surface` over a 2D canvas context. Coordinates are CSS pixels; the
/// context transform takes care of the device pixel ratio.
struct CanvasSurface<'a>(&'a CanvasRenderingContext2d);

impl Surface for CanvasSurface<'_> {
    fn clear(&mut self, width: f64, height: f64) {
        self.0.clear_rect(0.0, 0.0, width, height);
    }

    fn glow(&mut self, glow: &Glow, width: f64, height: f64) {
        let (x, y, r) = glow.resolve(width, height);
        let Ok(gradient) = self.0.create_radial_gradient(x, y, 0.0, x, y, r) else {
            return;
        };
        let _ = gradient.add_color_stop(0.0, &glow.color.css());
        let _ = gradient.add_color_stop(1.0, &glow.color.with_alpha(0.0).css());
        self.0.set_fill_style_canvas_gradient(&gradient);
        self.0.fill_rect(0.0, 0.0, width, height);
    }

    fn line(&mut self, from: (f64, f64), to: (f64, f64), alpha: f64) {
        let ctx = self.0;
        ctx.set_stroke_style_str(&Rgba::new(255, 255, 255, alpha).css());
        ctx.set_line_width(1.0);
        ctx.begin_path();
        ctx.move_to(from.0, from.1);
        ctx.line_to(to.0, to.1);
        ctx.stroke();
    }

    fn dot(&mut self, x: f64, y: f64, radius: f64, color: Rgba) {
        let ctx = self.0;
        ctx.begin_path();
        ctx.set_fill_style_str(&color.css());
        let _ = ctx.arc(x, y, radius, 0.0, TAU);
        ctx.fill();
    }
}

struct Background {
    window: Window,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    field: RefCell<ParticleField>,
    rng: RefCell<SmallRng>,
    resize_timer: RefCell<Option<Timeout>>,
}

impl Background {
    fn measure(&self, config: &FieldConfig) -> Viewport {
        let width = self
            .window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let height = self
            .window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        config.viewport(width, height, self.window.device_pixel_ratio())
    }

    fn apply_viewport(&self, viewport: &Viewport) {
        let (w, h) = viewport.backing_size();
        self.canvas.set_width(w);
        self.canvas.set_height(h);
        let dpr = viewport.pixel_ratio;
        let _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    }

    /// Resize the backing store and spawn a fresh particle set.
    fn reinit(&self) {
        let mut field = self.field.borrow_mut();
        let viewport = self.measure(field.config());
        self.apply_viewport(&viewport);
        field.reset(viewport, &mut *self.rng.borrow_mut());
        log::debug!(
            "particle field reset: {} particles on {}x{}",
            field.particles().len(),
            viewport.width,
            viewport.height
        );
    }

    fn frame(&self) {
        self.field
            .borrow_mut()
            .frame(&mut CanvasSurface(&self.ctx));
    }
}

/// Start the animated background. Returns `Ok(false)` without arming any
/// callback when the visitor asked for reduced motion, the page has no
/// canvas, or the canvas cannot provide a 2D context.
pub fn start(window: &Window, document: &Document, config: &SiteConfig) -> Result<bool, JsValue> {
    if dom::prefers_reduced_motion(window) {
        log::debug!("reduced motion requested, background stays static");
        return Ok(false);
    }
    let Some(canvas) = dom::by_id::<HtmlCanvasElement>(document, ids::CANVAS) else {
        log::debug!("no #{} on this page", ids::CANVAS);
        return Ok(false);
    };
    let Some(ctx) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
    else {
        log::debug!("canvas has no 2d context");
        return Ok(false);
    };

    let mut rng = SmallRng::seed_from_u64((js_sys::Math::random() * u64::MAX as f64) as u64);
    let field_config = FieldConfig::default();
    let viewport = field_config.viewport(0.0, 0.0, 1.0);
    let field = ParticleField::new(field_config, viewport, &mut rng);
    let bg = Rc::new(Background {
        window: window.clone(),
        canvas,
        ctx,
        field: RefCell::new(field),
        rng: RefCell::new(rng),
        resize_timer: RefCell::new(None),
    });
    bg.reinit();

    // Collapse resize bursts into one reinitialisation. Replacing the
    // pending timeout drops, and thereby cancels, the previous one.
    let debounce_ms = config.resize_debounce_ms;
    let on_resize = Rc::clone(&bg);
    EventListener::new_with_options(
        window,
        "resize",
        EventListenerOptions::run_in_passive_mode(),
        move |_| {
            let target = Rc::clone(&on_resize);
            let timer = Timeout::new(debounce_ms, move || target.reinit());
            *on_resize.resize_timer.borrow_mut() = Some(timer);
        },
    )
    .forget();

    // Animation loop
    // `f` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let animated = Rc::clone(&bg);
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        animated.frame();

        // schedule next
        if let Some(next) = f.borrow().as_ref() {
            if let Err(err) = animated
                .window
                .request_animation_frame(next.as_ref().unchecked_ref())
            {
                log::warn!("animation stopped: {err:?}");
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(first) = g.borrow().as_ref() {
        window.request_animation_frame(first.as_ref().unchecked_ref())?;
    }
    Ok(true)
}
