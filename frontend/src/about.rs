use studio_data::content::{ABOUT_FULL_MD, ABOUT_PREVIEW_MD, ARTIST, ARTIST_ROLE};
use yew::prelude::*;

use crate::{scroll::use_body_scroll_lock, shared::Markdown};

const STYLE: &str = r#"
#about-card {
	background-color: white;
	padding: 32px;
	border-radius: 32px;
	border: 1px solid rgba(140, 122, 107, 0.1);
	text-align: center;
	font-size: 15px;
	font-weight: 300;
}
#about-card p:last-child {
	opacity: 0.7;
}
#read-more {
	margin-top: 32px;
	background-color: rgba(140, 122, 107, 0.1);
	padding: 14px 32px;
	border-radius: 999px;
	font-size: 14px;
	font-weight: 500;
	text-transform: uppercase;
	letter-spacing: 0.05em;
}
#about-overlay {
	position: fixed;
	inset: 0;
	z-index: 60;
	background-color: var(--background);
	overflow-y: auto;
	animation: about-open 0.4s ease-out;
}
@keyframes about-open {
	from { transform: translateY(100%); }
	to { transform: translateY(0); }
}
#about-overlay-bar {
	position: sticky;
	top: 0;
	display: flex;
	justify-content: space-between;
	align-items: center;
	padding: 16px 24px;
	background-color: rgba(253, 252, 248, 0.9);
	backdrop-filter: blur(8px);
}
#about-overlay-bar > span {
	font-size: 20px;
}
.about-text {
	max-width: 672px;
	margin: 0 auto;
	padding: 24px;
	text-align: justify;
	font-weight: 300;
	line-height: 1.7;
}
.about-text blockquote {
	margin: 40px 0;
	padding: 24px;
	background-color: rgba(244, 239, 232, 0.6);
	border-radius: 16px;
	text-align: center;
	font-family: "Cormorant Garamond", Georgia, serif;
	font-size: 18px;
}
.about-text hr {
	width: 96px;
	border: none;
	height: 1px;
	background-color: rgba(74, 59, 50, 0.2);
	margin: 40px auto;
}
.about-text p:last-child {
	text-align: center;
}
#signature {
	display: flex;
	flex-direction: column;
	align-items: center;
	gap: 8px;
	margin: 48px 0;
	opacity: 0.6;
}
#signature > span:first-child {
	font-size: 24px;
}
#signature > span:last-child {
	font-size: 12px;
	text-transform: uppercase;
	letter-spacing: 0.3em;
}
"#;

#[function_component(About)]
pub fn about() -> Html {
	let full_open = use_state(|| false);
	use_body_scroll_lock(*full_open);

	let open = {
		let full_open = full_open.clone();
		Callback::from(move |_: MouseEvent| full_open.set(true))
	};
	let close = {
		let full_open = full_open.clone();
		Callback::from(move |_: MouseEvent| full_open.set(false))
	};

	html! {
		<div class="section">
			<style>{ STYLE }</style>
			<h2 class="section-title">{ "Sobre Mim" }</h2>
			<div id="about-card">
				<Markdown md={ ABOUT_PREVIEW_MD } />
				<button id="read-more" onclick={ open }>{ "Ler tudo →" }</button>
			</div>
			if *full_open {
				<div id="about-overlay">
					<div id="about-overlay-bar">
						<span class="serif">{ "Sobre Mim" }</span>
						<button aria-label="Fechar" onclick={ close }>{ "✕" }</button>
					</div>
					<Markdown md={ ABOUT_FULL_MD } class="about-text" />
					<div id="signature">
						<span class="serif">{ ARTIST }</span>
						<span>{ ARTIST_ROLE }</span>
					</div>
				</div>
			}
		</div>
	}
}
