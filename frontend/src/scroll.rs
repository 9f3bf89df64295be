use gloo_console::log;
use gloo_timers::future::TimeoutFuture;
use studio_data::view;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{
	AddEventListenerOptions,
	Element,
	IntersectionObserver,
	IntersectionObserverEntry,
	IntersectionObserverInit,
	ScrollBehavior,
	ScrollIntoViewOptions,
	ScrollLogicalPosition
};
use yew::prelude::*;

pub fn scroll_to(node: &NodeRef) {
	let Some(el) = node.cast::<Element>() else {
		log!("Tried to scroll to an element that isn't mounted");
		return;
	};

	let opts = ScrollIntoViewOptions::new();
	opts.set_behavior(ScrollBehavior::Smooth);
	opts.set_block(ScrollLogicalPosition::Start);
	el.scroll_into_view_with_scroll_into_view_options(&opts);
}

// Fire and forget. If another one gets scheduled before this fires, both just run; they always
// point at the same element so it doesn't matter.
pub fn scroll_to_later(node: NodeRef, delay_ms: u32) {
	wasm_bindgen_futures::spawn_local(async move {
		TimeoutFuture::new(delay_ms).await;
		scroll_to(&node);
	});
}

fn current_scroll_y() -> Option<f64> {
	web_sys::window().and_then(|win| win.scroll_y().ok())
}

/// Whether the page has been scrolled past [`view::SCROLL_THRESHOLD_PX`]
#[hook]
pub fn use_scrolled() -> bool {
	// `_eq` so that we only re-render when we actually cross the threshold, not on every scroll
	// event
	let scrolled = use_state_eq(|| current_scroll_y().is_some_and(view::is_scrolled));

	{
		let scrolled = scrolled.clone();
		use_effect_with((), move |()| {
			let listener = Closure::<dyn Fn()>::new(move || {
				if let Some(y) = current_scroll_y() {
					scrolled.set(view::is_scrolled(y));
				}
			});

			let window = web_sys::window();
			if let Some(win) = &window {
				let opts = AddEventListenerOptions::new();
				opts.set_passive(true);

				if let Err(e) = win.add_event_listener_with_callback_and_add_event_listener_options(
					"scroll",
					listener.as_ref().unchecked_ref(),
					&opts
				) {
					log!("Couldn't listen for scroll events: ", e);
				}
			}

			move || {
				if let Some(win) = window {
					_ = win.remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
				}
			}
		});
	}

	*scrolled
}

/// Whether at least `threshold` of `node` is inside the viewport
#[hook]
pub fn use_in_view(node: NodeRef, threshold: f64) -> bool {
	let visible = use_state_eq(|| false);

	{
		let visible = visible.clone();
		use_effect_with(node, move |node| {
			let callback = Closure::<dyn Fn(js_sys::Array)>::new(move |entries: js_sys::Array| {
				// we only ever observe one element, so the last entry is the newest news about it
				if let Some(entry) = entries.iter()
					.last()
					.and_then(|e| e.dyn_into::<IntersectionObserverEntry>().ok()) {
						visible.set(entry.is_intersecting());
					}
			});

			let opts = IntersectionObserverInit::new();
			opts.set_threshold(&JsValue::from_f64(threshold));

			let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts) {
				Ok(observer) => Some(observer),
				Err(e) => {
					log!("Couldn't create an intersection observer: ", e);
					None
				}
			};

			match (&observer, node.cast::<Element>()) {
				(Some(observer), Some(el)) => observer.observe(&el),
				(Some(_), None) => log!("Nothing mounted to watch for visibility"),
				(None, _) => ()
			}

			move || {
				if let Some(observer) = observer {
					observer.disconnect();
				}
				drop(callback);
			}
		});
	}

	*visible
}

/// Stops the page behind an overlay from scrolling while `locked`
#[hook]
pub fn use_body_scroll_lock(locked: bool) {
	use_effect_with(locked, |&locked| {
		set_body_overflow(if locked { "hidden" } else { "unset" });
		|| set_body_overflow("unset")
	});
}

fn set_body_overflow(value: &str) {
	let Some(body) = web_sys::window()
		.and_then(|win| win.document())
		.and_then(|doc| doc.body()) else {
			return;
		};

	if let Err(e) = body.style().set_property("overflow", value) {
		log!("Couldn't set body overflow: ", e);
	}
}
