//! Canvas driver for the decorative particle background.
//!
//! Owns a `requestAnimationFrame` redraw loop over a `ParticleField`: every
//! frame advances the field one step, clears the surface and redraws all
//! particles. The loop and the window resize listener are torn down with
//! the component; no draw is scheduled after drop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dioxus::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::particles::ParticleField;

/// Props for ParticleCanvas
#[derive(Props, Clone, PartialEq)]
pub struct ParticleCanvasProps {
    /// DOM id of the canvas element.
    #[props(default = String::from("particle-backdrop"))]
    pub id: String,
}

/// Full-surface translucent particle animation behind the page content.
#[component]
pub fn ParticleCanvas(props: ParticleCanvasProps) -> Element {
    // Shared with the frame closure: flipping this off stops the loop even
    // if a frame was already scheduled.
    let running = use_hook(|| Rc::new(Cell::new(false)));
    let frame_id = use_hook(|| Rc::new(Cell::new(None::<i32>)));
    let resize_cb = use_hook(|| Rc::new(RefCell::new(None::<Closure<dyn FnMut()>>)));

    let canvas_id = props.id.clone();
    {
        let running = running.clone();
        let frame_id = frame_id.clone();
        let resize_cb = resize_cb.clone();
        use_effect(move || {
            let Some(window) = web_sys::window() else {
                return;
            };
            let Some(document) = window.document() else {
                return;
            };
            let Some(element) = document.get_element_by_id(&canvas_id) else {
                log::warn!("particle canvas #{canvas_id} not found");
                return;
            };
            let Ok(canvas) = element.dyn_into::<web_sys::HtmlCanvasElement>() else {
                return;
            };

            let width = canvas.offset_width().max(1) as u32;
            let height = canvas.offset_height().max(1) as u32;
            canvas.set_width(width);
            canvas.set_height(height);

            let Some(ctx) = canvas
                .get_context("2d")
                .ok()
                .flatten()
                .and_then(|c| c.dyn_into::<web_sys::CanvasRenderingContext2d>().ok())
            else {
                return;
            };

            let mut rng = SmallRng::seed_from_u64(js_sys::Date::now() as u64);
            let field = Rc::new(RefCell::new(ParticleField::new(
                &mut rng,
                f64::from(width),
                f64::from(height),
            )));

            // Re-measure the surface whenever the host viewport resizes.
            {
                let canvas = canvas.clone();
                let field = field.clone();
                let cb = Closure::wrap(Box::new(move || {
                    let w = canvas.offset_width().max(1) as u32;
                    let h = canvas.offset_height().max(1) as u32;
                    canvas.set_width(w);
                    canvas.set_height(h);
                    field.borrow_mut().resize(f64::from(w), f64::from(h));
                }) as Box<dyn FnMut()>);
                let _ = window
                    .add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
                *resize_cb.borrow_mut() = Some(cb);
            }

            // The frame closure reschedules itself; the self-referencing Rc
            // keeps it alive for the lifetime of the loop.
            let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
            {
                let frame_handle = frame.clone();
                let running = running.clone();
                let frame_id = frame_id.clone();
                let window_loop = window.clone();
                let canvas = canvas.clone();
                *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                    if !running.get() {
                        return;
                    }
                    {
                        let mut field = field.borrow_mut();
                        field.step();
                        let w = f64::from(canvas.width());
                        let h = f64::from(canvas.height());
                        ctx.clear_rect(0.0, 0.0, w, h);
                        for p in field.particles() {
                            ctx.set_fill_style_str(&p.color);
                            ctx.begin_path();
                            let _ = ctx.arc(p.x, p.y, p.size, 0.0, std::f64::consts::TAU);
                            ctx.fill();
                        }
                    }
                    if let Some(next) = frame_handle.borrow().as_ref() {
                        if let Ok(id) = window_loop
                            .request_animation_frame(next.as_ref().unchecked_ref())
                        {
                            frame_id.set(Some(id));
                        }
                    }
                }) as Box<dyn FnMut()>));
            }

            running.set(true);
            {
                let frame_ref = frame.borrow();
                if let Some(first) = frame_ref.as_ref() {
                    if let Ok(id) = window.request_animation_frame(first.as_ref().unchecked_ref()) {
                        frame_id.set(Some(id));
                    }
                }
            }
        });
    }

    {
        let running = running.clone();
        let frame_id = frame_id.clone();
        let resize_cb = resize_cb.clone();
        use_drop(move || {
            running.set(false);
            if let Some(window) = web_sys::window() {
                if let Some(id) = frame_id.take() {
                    let _ = window.cancel_animation_frame(id);
                }
                if let Some(cb) = resize_cb.borrow_mut().take() {
                    let _ = window
                        .remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
                }
            }
        });
    }

    rsx! {
        canvas {
            id: "{props.id}",
            style: "position: absolute; inset: 0; width: 100%; height: 100%; opacity: 0.2;",
        }
    }
}
