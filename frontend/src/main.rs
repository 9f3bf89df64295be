use std::rc::Rc;

use gloo_console::log;
use studio_data::{
	Selection,
	SelectionAction,
	SelectionPatch,
	structured::studio_json_ld,
	view::{self, Anchor, ViewSignals, CONTACT_VISIBILITY_THRESHOLD, NAV_SCROLL_DELAY_MS, SELECTION_SCROLL_DELAY_MS}
};
use yew::prelude::*;

use about::About;
use booking::Booking;
use faq::Faq;
use footer::Footer;
use header::Header;
use hero::Hero;
use services::Services;
use shared::SharedStyle;

mod about;
mod booking;
mod faq;
mod footer;
mod handoff;
mod header;
mod hero;
mod scroll;
mod services;
mod shared;

const STYLE: &str = r#"
#floating-cta {
	position: fixed;
	bottom: 32px;
	left: 0;
	right: 0;
	z-index: 50;
	display: flex;
	justify-content: center;
	padding: 0 16px;
	pointer-events: none;
	animation: cta-in 0.3s ease-out;
}
@keyframes cta-in {
	from { opacity: 0; transform: translateY(100px); }
	to { opacity: 1; transform: translateY(0); }
}
#floating-cta > button {
	pointer-events: auto;
	width: 100%;
	max-width: 448px;
	padding: 16px 0;
	border-radius: 999px;
	background-color: var(--primary);
	color: white;
	font-size: 18px;
	font-weight: 500;
	box-shadow: 0 10px 40px -10px rgba(74, 59, 50, 0.5);
	transition: transform 0.3s ease;
}
#floating-cta > button:hover {
	transform: scale(1.02);
}
#booking {
	scroll-margin-top: 176px;
}
#faq {
	padding-bottom: 128px;
}
"#;

/// The only owner of the visitor's [`Selection`]. Everything below gets the current value and
/// callbacks that dispatch into here.
#[derive(Default, PartialEq)]
struct SelectionState(Selection);

impl Reducible for SelectionState {
	type Action = SelectionAction;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		Self(self.0.reduce(action)).into()
	}
}

#[function_component(App)]
fn app() -> Html {
	let selection = use_reducer(SelectionState::default);
	let menu_open = use_state(|| false);
	let scrolled = scroll::use_scrolled();

	let home_ref = use_node_ref();
	let services_ref = use_node_ref();
	let booking_ref = use_node_ref();
	let about_ref = use_node_ref();
	let faq_ref = use_node_ref();
	let contact_ref = use_node_ref();

	let contact_visible = scroll::use_in_view(contact_ref.clone(), CONTACT_VISIBILITY_THRESHOLD);

	let signals = ViewSignals { scrolled, menu_open: *menu_open, contact_visible };

	// picking a service (but not re-picking the same one) brings the booking panel into view
	{
		let booking_ref = booking_ref.clone();
		use_effect_with(selection.0.service_id.clone(), move |service_id| {
			if service_id.is_some() {
				scroll::scroll_to_later(booking_ref, SELECTION_SCROLL_DELAY_MS);
			}
			|| { }
		});
	}

	let json_ld = use_memo((), |_| studio_json_ld()
		.map_err(|e| log!(format!("Couldn't build structured data: {e}")))
		.ok()
	);

	let on_select = {
		let dispatcher = selection.dispatcher();
		Callback::from(move |id: &'static str| dispatcher.dispatch(SelectionAction::SelectService(id.into())))
	};

	let on_notes = {
		let dispatcher = selection.dispatcher();
		Callback::from(move |notes: String| dispatcher.dispatch(SelectionAction::Update(SelectionPatch::notes(notes))))
	};

	let on_confirm = {
		let selection = selection.clone();
		Callback::from(move |_: MouseEvent| handoff::open_handoff(&selection.0))
	};

	let on_menu_toggle = {
		let menu_open = menu_open.clone();
		Callback::from(move |open: bool| menu_open.set(open))
	};

	let on_navigate = {
		let menu_open = menu_open.clone();
		let refs = [home_ref.clone(), about_ref.clone(), faq_ref.clone(), contact_ref.clone()];
		Callback::from(move |anchor: Anchor| {
			menu_open.set(false);

			let [home, about, faq, contact] = &refs;
			let target = match anchor {
				Anchor::Home => home,
				Anchor::About => about,
				Anchor::Faq => faq,
				Anchor::Contact => contact
			};
			scroll::scroll_to_later(target.clone(), NAV_SCROLL_DELAY_MS);
		})
	};

	let on_hero_cta = {
		let services_ref = services_ref.clone();
		Callback::from(move |_: MouseEvent| scroll::scroll_to(&services_ref))
	};

	html! {
		<>
			<SharedStyle />
			<style>{ STYLE }</style>
			if let Some(json_ld) = (*json_ld).clone() {
				<script type="application/ld+json">{ json_ld }</script>
			}
			<Header
				visible={ view::show_header(signals) }
				menu_open={ *menu_open }
				{ on_menu_toggle }
				{ on_navigate }
			/>
			<main>
				<div id={ Anchor::Home.element_id() } ref={ home_ref }>
					<Hero on_cta={ on_hero_cta } />
				</div>
				<div id="services" ref={ services_ref }>
					<Services selected={ selection.0.service_id.clone() } { on_select } />
				</div>
				<div id="booking" ref={ booking_ref }>
					<Booking selection={ selection.0.clone() } { on_notes } />
				</div>
				<div id={ Anchor::About.element_id() } ref={ about_ref }>
					<About />
				</div>
				<div id={ Anchor::Faq.element_id() } ref={ faq_ref }>
					<Faq />
				</div>
			</main>
			<div id={ Anchor::Contact.element_id() } ref={ contact_ref }>
				<Footer />
			</div>
			if view::show_floating_cta(&selection.0, signals) {
				<div id="floating-cta">
					<button onclick={ on_confirm }>{ "Agendar via WhatsApp" }</button>
				</div>
			}
		</>
	}
}

fn main() {
	yew::Renderer::<App>::new().render();
}
