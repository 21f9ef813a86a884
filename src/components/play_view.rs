use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, MouseEvent, TouchEvent};
use yew::prelude::*;

use super::{game_over_overlay::GameOverOverlay, stats_panel::StatsPanel};
use crate::config::GameConfig;
use crate::controller::{Counters, DragGestureController, DropReport, Outcome};
use crate::geometry::{Point, ScreenTransform};
use crate::host::GameOverSignal;
use crate::score::StorageScore;
use crate::state::{InputQueue, POINTER_ID, PrimaryTouch, Scene, TouchPhase, TouchSample};
use crate::util::{frame_dt_secs, now_ms};

/// Game-over signal that hands off to the view through a yew callback.
pub struct CallbackSignal(pub Callback<()>);

impl GameOverSignal for CallbackSignal {
    fn show(&mut self) {
        self.0.emit(());
    }
}

type WebController = DragGestureController<Scene, StorageScore, CallbackSignal>;

#[derive(Properties, PartialEq, Clone)]
pub struct PlayViewProps {
    pub config: GameConfig,
}

fn describe(report: &DropReport, config: &GameConfig) -> String {
    let name = &config.items[report.index].name;
    match report.outcome {
        Outcome::Success => format!("{name} is correct!"),
        Outcome::Fail => format!("{name} is not it."),
        Outcome::Miss => format!("{name} missed the target."),
    }
}

fn draw_scene(ctx: &CanvasRenderingContext2d, w: f64, h: f64, ctl: &WebController) {
    let cfg = ctl.config();
    let t = ctl.transform();
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).ok();
    ctx.set_fill_style_str("#0e1116");
    ctx.fill_rect(0.0, 0.0, w, h);
    ctx.set_transform(t.scale, 0.0, 0.0, t.scale, t.offset_x, t.offset_y)
        .ok();
    ctx.set_fill_style_str("#161b22");
    ctx.fill_rect(0.0, 0.0, cfg.stage_width, cfg.stage_height);
    let line_w = (2.0f64 / t.scale).max(0.001f64);
    ctx.set_line_width(line_w);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");

    // Target lights up while the live proxy overlaps it
    let hovering = ctl
        .host()
        .live_proxies()
        .iter()
        .any(|p| p.rect().overlaps(&cfg.drop_target));
    let target = cfg.drop_target;
    ctx.set_fill_style_str(if hovering { "#1f3a2a" } else { "#1c2128" });
    ctx.fill_rect(target.x, target.y, target.width, target.height);
    ctx.set_stroke_style_str(if hovering { "#2ea043" } else { "#555e6b" });
    ctx.stroke_rect(target.x, target.y, target.width, target.height);
    ctx.set_fill_style_str("#8b949e");
    ctx.set_font("24px sans-serif");
    let c = target.center();
    ctx.fill_text("Drop here", c.x, c.y).ok();

    ctx.set_font("bold 40px sans-serif");
    for item in &cfg.items {
        let r = item.region;
        ctx.set_fill_style_str(&item.color);
        ctx.fill_rect(r.x, r.y, r.width, r.height);
        ctx.set_stroke_style_str("#3a4455");
        ctx.stroke_rect(r.x, r.y, r.width, r.height);
        ctx.set_fill_style_str("#0e1116");
        let c = r.center();
        ctx.fill_text(&item.name, c.x, c.y).ok();
    }

    ctx.set_global_alpha(0.85);
    for p in ctl.host().live_proxies() {
        let r = p.rect();
        ctx.set_fill_style_str(&p.color);
        ctx.fill_rect(r.x, r.y, r.width, r.height);
        ctx.set_stroke_style_str("#f0f6fc");
        ctx.stroke_rect(r.x, r.y, r.width, r.height);
        ctx.set_fill_style_str("#0e1116");
        ctx.fill_text(&p.name, p.position.x, p.position.y).ok();
    }
    ctx.set_global_alpha(1.0);
}

#[function_component(PlayView)]
pub fn play_view(props: &PlayViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let counters = use_state(Counters::default);
    let game_over = use_state(|| false);
    let last_drop = use_state(|| None::<String>);
    let input = use_mut_ref(InputQueue::default);
    let primary = use_mut_ref(PrimaryTouch::default);
    let controller = {
        let config = props.config.clone();
        let game_over = game_over.clone();
        use_mut_ref(move || {
            let signal = CallbackSignal(Callback::from(move |()| game_over.set(true)));
            match DragGestureController::new(config, Scene::default(), StorageScore::default(), signal)
            {
                Ok(ctl) => Some(ctl),
                Err(e) => {
                    log::error!("controller setup failed: {e}");
                    None
                }
            }
        })
    };

    // Main mount effect (events, loop)
    {
        let canvas_ref = canvas_ref.clone();
        let controller = controller.clone();
        let input = input.clone();
        let primary = primary.clone();
        let counters = counters.clone();
        let last_drop = last_drop.clone();
        use_effect_with((), move |_| -> Box<dyn FnOnce()> {
            let Some(window) = web_sys::window() else {
                log::error!("no window");
                return Box::new(|| ());
            };
            let Some(document) = window.document() else {
                log::error!("no document");
                return Box::new(|| ());
            };
            let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
                log::error!("canvas_ref not attached to a canvas element");
                return Box::new(|| ());
            };
            let compute_and_apply_canvas_size = {
                let canvas = canvas.clone();
                let document = document.clone();
                let window = window.clone();
                let controller = controller.clone();
                move || {
                    let nav_height: f64 = document
                        .get_element_by_id("top-bar")
                        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                        .map(|el| el.client_height() as f64)
                        .unwrap_or(0.0);
                    let width = window
                        .inner_width()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(800.0);
                    let height = window
                        .inner_height()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(600.0)
                        - nav_height;
                    canvas.set_width(width.max(0.0) as u32);
                    canvas.set_height(height.max(0.0) as u32);
                    if let Some(ctl) = controller.borrow_mut().as_mut() {
                        let cfg = ctl.config();
                        let t = ScreenTransform::fit(
                            canvas.width() as f64,
                            canvas.height() as f64,
                            cfg.stage_width,
                            cfg.stage_height,
                        );
                        ctl.set_transform(t);
                    }
                }
            };
            compute_and_apply_canvas_size();

            let draw_closure: Rc<dyn Fn()> = {
                let canvas = canvas.clone();
                let controller = controller.clone();
                Rc::new(move || {
                    if !canvas.is_connected() {
                        return;
                    }
                    let Some(ctx) = canvas
                        .get_context("2d")
                        .ok()
                        .flatten()
                        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
                    else {
                        return;
                    };
                    let ctl_ref = controller.borrow();
                    let Some(ctl) = ctl_ref.as_ref() else {
                        return;
                    };
                    draw_scene(&ctx, canvas.width() as f64, canvas.height() as f64, ctl);
                })
            };

            // Frame tick: feed buffered input, advance the success delay, redraw
            let frame = {
                let controller = controller.clone();
                let input = input.clone();
                let counters = counters.clone();
                let last_drop = last_drop.clone();
                let draw = draw_closure.clone();
                let last_ms = Rc::new(RefCell::new(now_ms()));
                move || {
                    let now = now_ms();
                    let dt = frame_dt_secs(*last_ms.borrow(), now);
                    *last_ms.borrow_mut() = now;
                    let samples: Vec<TouchSample> = input.borrow_mut().drain().collect();
                    let (reports, fired, snapshot, text) = {
                        let mut ctl_ref = controller.borrow_mut();
                        let Some(ctl) = ctl_ref.as_mut() else {
                            return;
                        };
                        let reports: Vec<DropReport> =
                            samples.into_iter().filter_map(|s| ctl.handle(s)).collect();
                        let text = reports.last().map(|r| describe(r, ctl.config()));
                        let fired = ctl.tick(dt);
                        (reports, fired, ctl.counters(), text)
                    };
                    if !reports.is_empty() || fired {
                        counters.set(snapshot);
                    }
                    if text.is_some() {
                        last_drop.set(text);
                    }
                    draw();
                }
            };

            // RAF loop
            let raf_id = Rc::new(RefCell::new(None));
            let closure_cell: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
                Rc::new(RefCell::new(None));
            {
                let raf_id_clone = raf_id.clone();
                let window_loop = window.clone();
                let closure_cell_clone = closure_cell.clone();
                *closure_cell.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                    frame();
                    if let Some(cb) = closure_cell_clone.borrow().as_ref() {
                        if let Ok(id) =
                            window_loop.request_animation_frame(cb.as_ref().unchecked_ref())
                        {
                            *raf_id_clone.borrow_mut() = Some(id);
                        }
                    }
                }) as Box<dyn FnMut()>));
                if let Some(cb) = closure_cell.borrow().as_ref() {
                    if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                        *raf_id.borrow_mut() = Some(id);
                    }
                }
            }

            // Touch: only the primary finger reaches the queue
            let touch_handler = |phase: TouchPhase| {
                let canvas_tc = canvas.clone();
                let input_tc = input.clone();
                let primary_tc = primary.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    let rect = canvas_tc.get_bounding_client_rect();
                    let changed = e.changed_touches();
                    for i in 0..changed.length() {
                        let Some(t) = changed.item(i) else {
                            continue;
                        };
                        if !primary_tc.borrow_mut().accept(t.identifier(), phase) {
                            continue;
                        }
                        let position = Point::new(
                            t.client_x() as f64 - rect.left(),
                            t.client_y() as f64 - rect.top(),
                        );
                        input_tc.borrow_mut().push(TouchSample { phase, position });
                    }
                    e.prevent_default();
                }) as Box<dyn FnMut(_)>)
            };
            let touch_start_cb = touch_handler(TouchPhase::Began);
            let touch_move_cb = touch_handler(TouchPhase::Moved);
            let touch_end_cb = touch_handler(TouchPhase::Ended);
            canvas
                .add_event_listener_with_callback(
                    "touchstart",
                    touch_start_cb.as_ref().unchecked_ref(),
                )
                .ok();
            canvas
                .add_event_listener_with_callback(
                    "touchmove",
                    touch_move_cb.as_ref().unchecked_ref(),
                )
                .ok();
            canvas
                .add_event_listener_with_callback("touchend", touch_end_cb.as_ref().unchecked_ref())
                .ok();
            canvas
                .add_event_listener_with_callback(
                    "touchcancel",
                    touch_end_cb.as_ref().unchecked_ref(),
                )
                .ok();

            // Mouse drives the same gesture path as a single touch
            let mouse_handler = |phase: TouchPhase| {
                let canvas_mc = canvas.clone();
                let input_mc = input.clone();
                let primary_mc = primary.clone();
                Closure::wrap(Box::new(move |e: MouseEvent| {
                    if !primary_mc.borrow_mut().accept(POINTER_ID, phase) {
                        return;
                    }
                    let rect = canvas_mc.get_bounding_client_rect();
                    let position = Point::new(
                        e.client_x() as f64 - rect.left(),
                        e.client_y() as f64 - rect.top(),
                    );
                    input_mc.borrow_mut().push(TouchSample { phase, position });
                }) as Box<dyn FnMut(_)>)
            };
            let mousedown_cb = mouse_handler(TouchPhase::Began);
            let mousemove_cb = mouse_handler(TouchPhase::Moved);
            let mouseup_cb = mouse_handler(TouchPhase::Ended);
            canvas
                .add_event_listener_with_callback(
                    "mousedown",
                    mousedown_cb.as_ref().unchecked_ref(),
                )
                .ok();
            window
                .add_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                )
                .ok();
            window
                .add_event_listener_with_callback("mouseup", mouseup_cb.as_ref().unchecked_ref())
                .ok();

            let resize_cb = {
                let draw = draw_closure.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    compute_and_apply_canvas_size();
                    draw();
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
                .ok();

            // Cleanup
            let window_clone = window.clone();
            Box::new(move || {
                let _ = canvas.remove_event_listener_with_callback(
                    "touchstart",
                    touch_start_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "touchmove",
                    touch_move_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "touchend",
                    touch_end_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "touchcancel",
                    touch_end_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "mousedown",
                    mousedown_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "mouseup",
                    mouseup_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "resize",
                    resize_cb.as_ref().unchecked_ref(),
                );
                if let Some(id) = *raf_id.borrow() {
                    let _ = window_clone.cancel_animation_frame(id);
                }
                // Break the RAF closure's self-reference
                closure_cell.borrow_mut().take();
                let _keep_alive = (
                    &touch_start_cb,
                    &touch_move_cb,
                    &touch_end_cb,
                    &mousedown_cb,
                    &mousemove_cb,
                    &mouseup_cb,
                    &resize_cb,
                );
            })
        });
    }

    let restart_cb: Callback<()> = {
        let controller = controller.clone();
        let input = input.clone();
        let primary = primary.clone();
        let counters = counters.clone();
        let game_over = game_over.clone();
        let last_drop = last_drop.clone();
        Callback::from(move |()| {
            input.borrow_mut().drain().for_each(drop);
            primary.borrow_mut().clear();
            let snapshot = {
                let mut ctl_ref = controller.borrow_mut();
                let Some(ctl) = ctl_ref.as_mut() else {
                    return;
                };
                ctl.restart();
                ctl.counters()
            };
            counters.set(snapshot);
            last_drop.set(None);
            game_over.set(false);
        })
    };

    html! {<div style="position:relative; width:100vw; height:100vh;">
        <canvas ref={canvas_ref.clone()} id="game-canvas" style="display:block; width:100%; height:100%; touch-action:none;"></canvas>
        <StatsPanel score={counters.score} fail_count={counters.fail_count} fail_threshold={props.config.fail_threshold} last_drop={(*last_drop).clone()} />
        <GameOverOverlay show={*game_over} score={counters.score} fail_count={counters.fail_count} restart={restart_cb} />
    </div>}
}
