use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::animation::FrameLoop;
use super::category::CategoryPalette;
use super::render::RenderStyle;
use super::state::{SimulationParams, SkillGraphState};
use super::types::SkillCatalog;

type Shared<T> = Rc<RefCell<T>>;
type HoverCallback = Option<Callback<Option<String>>>;

/// Browser resources held by one mounted canvas.
struct CanvasRuntime {
	canvas: HtmlCanvasElement,
	frame_loop: Shared<FrameLoop>,
	animate: Shared<Option<Closure<dyn FnMut()>>>,
	pending_frame: Rc<Cell<Option<i32>>>,
	pointer_listeners: Vec<(&'static str, Closure<dyn FnMut(MouseEvent)>)>,
	resize_cb: Option<Closure<dyn FnMut()>>,
}

impl CanvasRuntime {
	fn teardown(self) {
		if !self.frame_loop.borrow_mut().stop() {
			return;
		}
		let window = web_sys::window();
		if let (Some(id), Some(win)) = (self.pending_frame.take(), &window) {
			let _ = win.cancel_animation_frame(id);
		}
		for (kind, cb) in &self.pointer_listeners {
			let _ = self
				.canvas
				.remove_event_listener_with_callback(kind, cb.as_ref().unchecked_ref());
		}
		if let (Some(cb), Some(win)) = (&self.resize_cb, &window) {
			let _ = win.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
		// Breaks the animate closure's reference to itself.
		self.animate.borrow_mut().take();
		info!(
			"skill graph stopped after {} frames",
			self.frame_loop.borrow().frames()
		);
	}
}

struct MountConfig {
	catalog: SkillCatalog,
	params: SimulationParams,
	render_style: RenderStyle,
	palette: CategoryPalette,
	seed: u64,
	fallback_height: f64,
	on_hover: HoverCallback,
}

fn css_size(canvas: &HtmlCanvasElement, fallback_height: f64) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	let width = if rect.width() > 0.0 {
		rect.width()
	} else {
		canvas
			.parent_element()
			.map(|p| p.client_width() as f64)
			.filter(|w| *w > 0.0)
			.unwrap_or(800.0)
	};
	let height = if rect.height() > 0.0 {
		rect.height()
	} else {
		fallback_height
	};
	(width, height)
}

/// Sizes the backing store for the device pixel ratio and scales drawing back
/// to CSS pixels.
fn fit_backing_store(
	window: &Window,
	canvas: &HtmlCanvasElement,
	ctx: &CanvasRenderingContext2d,
	width: f64,
	height: f64,
) -> Result<(), JsValue> {
	let ratio = window.device_pixel_ratio();
	canvas.set_width((width * ratio) as u32);
	canvas.set_height((height * ratio) as u32);
	ctx.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0)
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
	web_sys::window()?
		.request_animation_frame(cb.as_ref().unchecked_ref())
		.ok()
}

fn canvas_point(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

fn apply_hover(frame_loop: &RefCell<FrameLoop>, point: Option<(f64, f64)>, on_hover: HoverCallback) {
	let label = {
		let mut frames = frame_loop.borrow_mut();
		let state = frames.state_mut();
		let hit = point.and_then(|(x, y)| state.node_at_position(x, y));
		if !state.set_hover(hit) {
			return;
		}
		state.hovered_label().map(str::to_owned)
	};
	if let Some(cb) = on_hover {
		cb.run(label);
	}
}

fn mount(canvas: HtmlCanvasElement, config: MountConfig) -> Result<CanvasRuntime, JsValue> {
	let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
	let ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")?
		.ok_or_else(|| JsValue::from_str("2d context unavailable"))?
		.dyn_into()?;

	let (w, h) = css_size(&canvas, config.fallback_height);
	fit_backing_store(&window, &canvas, &ctx, w, h)?;

	let mut rng = SmallRng::seed_from_u64(config.seed);
	let state = SkillGraphState::new(&config.catalog, config.params, config.palette, w, h, &mut rng);
	let frame_loop = Rc::new(RefCell::new(FrameLoop::new(state, config.render_style)));
	{
		let frames = frame_loop.borrow();
		info!(
			"skill graph started: {} nodes, {} edges, {w}x{h}",
			frames.state().nodes.len(),
			frames.state().edges().len()
		);
	}

	let on_hover = config.on_hover;
	let (frames_mm, canvas_mm) = (frame_loop.clone(), canvas.clone());
	let on_mousemove = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
		apply_hover(&frames_mm, Some(canvas_point(&canvas_mm, &ev)), on_hover);
	});
	let frames_ml = frame_loop.clone();
	let on_mouseleave = Closure::<dyn FnMut(MouseEvent)>::new(move |_: MouseEvent| {
		apply_hover(&frames_ml, None, on_hover);
	});
	let pointer_listeners = vec![("mousemove", on_mousemove), ("mouseleave", on_mouseleave)];
	for (kind, cb) in &pointer_listeners {
		canvas.add_event_listener_with_callback(kind, cb.as_ref().unchecked_ref())?;
	}

	let (frames_rs, canvas_rs, ctx_rs) = (frame_loop.clone(), canvas.clone(), ctx.clone());
	let fallback_height = config.fallback_height;
	let resize_cb = Closure::<dyn FnMut()>::new(move || {
		let Some(win) = web_sys::window() else {
			return;
		};
		let (nw, nh) = css_size(&canvas_rs, fallback_height);
		if let Err(err) = fit_backing_store(&win, &canvas_rs, &ctx_rs, nw, nh) {
			warn!("failed to resize skill graph canvas: {err:?}");
		}
		frames_rs.borrow_mut().state_mut().resize(nw, nh);
	});
	window.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())?;

	let animate: Shared<Option<Closure<dyn FnMut()>>> = Rc::new(RefCell::new(None));
	let pending_frame = Rc::new(Cell::new(None));
	let (frames_anim, animate_inner, pending_inner) =
		(frame_loop.clone(), animate.clone(), pending_frame.clone());
	*animate.borrow_mut() = Some(Closure::new(move || {
		pending_inner.set(None);
		if !frames_anim.borrow_mut().frame(&ctx) {
			return;
		}
		if let Some(ref cb) = *animate_inner.borrow() {
			pending_inner.set(request_frame(cb));
		}
	}));
	if let Some(ref cb) = *animate.borrow() {
		pending_frame.set(request_frame(cb));
	}

	Ok(CanvasRuntime {
		canvas,
		frame_loop,
		animate,
		pending_frame,
		pointer_listeners,
		resize_cb: Some(resize_cb),
	})
}

/// Canvas rendering the skill network. Reports the hovered skill label
/// through `on_hover` whenever it changes.
#[component]
pub fn SkillGraphCanvas(
	#[prop(into)] catalog: Signal<SkillCatalog>,
	#[prop(optional)] params: SimulationParams,
	#[prop(optional)] render_style: RenderStyle,
	#[prop(optional)] palette: CategoryPalette,
	#[prop(optional)] seed: Option<u64>,
	#[prop(optional)] on_hover: Option<Callback<Option<String>>>,
	#[prop(default = 400.0)] height: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let runtime: Shared<Option<CanvasRuntime>> = Rc::new(RefCell::new(None));
	let runtime_init = runtime.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		if let Some(previous) = runtime_init.borrow_mut().take() {
			previous.teardown();
		}

		let config = MountConfig {
			catalog: catalog.get_untracked(),
			params: params.clone(),
			render_style: render_style.clone(),
			palette: palette.clone(),
			seed: seed.unwrap_or_else(|| (js_sys::Math::random() * u64::MAX as f64) as u64),
			fallback_height: height,
			on_hover,
		};
		match mount(canvas, config) {
			Ok(rt) => *runtime_init.borrow_mut() = Some(rt),
			Err(err) => warn!("skill graph disabled: {err:?}"),
		}
	});

	let runtime_cleanup = SendWrapper::new(runtime);
	on_cleanup(move || {
		if let Some(rt) = runtime_cleanup.borrow_mut().take() {
			rt.teardown();
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="skill-graph-canvas"
			style=format!("display: block; width: 100%; height: {height}px;")
		/>
	}
}
