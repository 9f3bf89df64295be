use studio_data::{studio::VENUE, view::Anchor};
use yew::prelude::*;

use crate::scroll::use_body_scroll_lock;

const STYLE: &str = r#"
#site-header {
	position: fixed;
	top: 24px;
	left: 0;
	right: 0;
	z-index: 50;
	display: flex;
	justify-content: center;
	pointer-events: none;
	transform: translateY(-100px);
	opacity: 0;
	transition: transform 0.4s ease, opacity 0.4s ease;
}
#site-header.visible {
	transform: translateY(0);
	opacity: 1;
}
#header-bar {
	pointer-events: auto;
	width: 100%;
	max-width: 90%;
	display: flex;
	align-items: center;
	justify-content: space-between;
	padding: 12px 24px;
	border-radius: 999px;
	background-color: rgba(255, 255, 255, 0.8);
	backdrop-filter: blur(12px);
	border: 1px solid rgba(255, 255, 255, 0.5);
}
#logo {
	font-size: 20px;
	font-weight: 600;
	cursor: pointer;
}
#menu-toggle {
	padding: 8px;
	border-radius: 999px;
	width: 40px;
	height: 40px;
}
.menu-icon {
	display: flex;
	flex-direction: column;
	align-items: flex-end;
	gap: 6px;
}
.menu-icon > span {
	height: 1.5px;
	background-color: var(--primary);
	width: 24px;
}
.menu-icon > span:last-child {
	width: 16px;
}
#menu-overlay {
	position: fixed;
	inset: 0;
	z-index: 40;
	background-color: var(--white);
	display: flex;
	flex-direction: column;
	justify-content: center;
	align-items: center;
}
#menu-overlay > nav {
	display: flex;
	flex-direction: column;
	align-items: center;
	gap: 40px;
}
.menu-item {
	font-size: 36px;
}
#menu-footer {
	position: absolute;
	bottom: 48px;
	font-size: 12px;
	letter-spacing: 0.3em;
	text-transform: uppercase;
	color: var(--secondary);
}
@media (min-width: 768px) {
	#header-bar {
		max-width: 768px;
	}
}
"#;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
	pub visible: bool,
	pub menu_open: bool,
	pub on_menu_toggle: Callback<bool>,
	pub on_navigate: Callback<Anchor>
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
	use_body_scroll_lock(props.menu_open);

	let toggle = {
		let menu_open = props.menu_open;
		props.on_menu_toggle.reform(move |_: MouseEvent| !menu_open)
	};

	let go_home = props.on_navigate.reform(|_: MouseEvent| Anchor::Home);

	let toggle_icon = if props.menu_open {
		html! { <span class="close-icon">{ "✕" }</span> }
	} else {
		html! { <span class="menu-icon"><span /><span /></span> }
	};

	html! {
		<>
			<style>{ STYLE }</style>
			<header id="site-header" class={ classes!(props.visible.then_some("visible")) }>
				<div id="header-bar">
					<span id="logo" class="serif" onclick={ go_home }>{ VENUE }</span>
					<button id="menu-toggle" aria-label="Toggle menu" onclick={ toggle }>
						{ toggle_icon }
					</button>
				</div>
			</header>
			if props.menu_open {
				<div id="menu-overlay">
					<nav>
						{ for Anchor::MENU.into_iter().map(|anchor| {
							let onclick = props.on_navigate.reform(move |_: MouseEvent| anchor);
							html! {
								<button class="menu-item serif" { onclick }>{ anchor.label() }</button>
							}
						}) }
					</nav>
					<span id="menu-footer">{ VENUE }</span>
				</div>
			}
		</>
	}
}
