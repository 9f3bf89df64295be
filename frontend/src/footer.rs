use studio_data::{
	handoff::inquiry_link,
	studio::{CITY, HOURS, HOURS_NOTE, INSTAGRAM_URL, NEIGHBORHOOD, REGION, VENUE}
};
use yew::prelude::*;

const STYLE: &str = r#"
#contact-footer {
	background-color: var(--primary);
	padding: 80px 24px 40px 24px;
	border-radius: 48px 48px 0 0;
	margin-top: -32px;
	position: relative;
	z-index: 20;
	box-shadow: 0 -10px 60px rgba(0, 0, 0, 0.3);
}
#contact-footer * {
	color: var(--white);
}
#footer-content {
	max-width: 1024px;
	margin: 0 auto;
	display: flex;
	flex-direction: column;
	align-items: center;
}
#footer-title {
	text-align: center;
	margin-bottom: 40px;
}
#footer-title > h2 {
	font-size: 40px;
	margin: 0 0 8px 0;
}
#footer-title > p {
	color: var(--accent);
	font-size: 14px;
	letter-spacing: 0.1em;
	text-transform: uppercase;
	margin: 0;
}
#footer-row {
	width: 100%;
	display: flex;
	flex-direction: column;
	gap: 32px;
	margin-bottom: 40px;
}
#inquiry-card {
	flex: 1;
	display: flex;
	justify-content: space-between;
	align-items: center;
	gap: 20px;
	padding: 28px 24px;
	border-radius: 40px;
	background-color: rgba(255, 255, 255, 0.05);
	border: 1px solid rgba(255, 255, 255, 0.1);
	transition: background-color 0.3s ease;
}
#inquiry-card:hover {
	background-color: rgba(255, 255, 255, 0.1);
}
#inquiry-text {
	display: flex;
	flex-direction: column;
	gap: 4px;
}
#online-now {
	font-size: 14px;
	text-transform: uppercase;
	color: var(--accent);
}
#inquiry-title {
	font-size: 24px;
}
#inquiry-hint {
	font-size: 14px;
	opacity: 0.5;
}
#inquiry-icon {
	width: 56px;
	height: 56px;
	border-radius: 999px;
	flex-shrink: 0;
	display: flex;
	align-items: center;
	justify-content: center;
	font-size: 24px;
	background-image: linear-gradient(to top right, #25d366, #60f589);
}
#info-grid {
	display: grid;
	grid-template-columns: 1fr 1fr;
	gap: 1px;
	background-color: rgba(255, 255, 255, 0.1);
	border-radius: 24px;
	overflow: hidden;
}
#info-grid > div {
	background-color: var(--primary);
	padding: 24px;
	text-align: center;
}
#info-grid h4 {
	font-family: Inter, Arial, sans-serif;
	font-size: 14px;
	margin: 0 0 4px 0;
}
#info-grid p {
	font-size: 11px;
	text-transform: uppercase;
	letter-spacing: 0.05em;
	opacity: 0.5;
	margin: 0;
}
#instagram-link {
	padding: 12px 24px;
	border-radius: 999px;
	background-color: rgba(255, 255, 255, 0.05);
	border: 1px solid rgba(255, 255, 255, 0.05);
	font-size: 14px;
	margin-bottom: 32px;
}
#copyright {
	font-size: 10px;
	text-transform: uppercase;
	letter-spacing: 0.2em;
	opacity: 0.3;
	text-align: center;
}
@media (min-width: 768px) {
	#footer-row {
		flex-direction: row;
	}
	#info-grid {
		min-width: 320px;
	}
}
"#;

#[function_component(Footer)]
pub fn footer() -> Html {
	let inquiry = inquiry_link().to_string();
	let year = js_sys::Date::new_0().get_full_year();

	html! {
		<footer id="contact-footer">
			<style>{ STYLE }</style>
			<div id="footer-content">
				<div id="footer-title">
					<h2>{ "Fale Comigo" }</h2>
					<p>{ VENUE }</p>
				</div>
				<div id="footer-row">
					<a id="inquiry-card" href={ inquiry } target="_blank" rel="noopener noreferrer">
						<span id="inquiry-text">
							<span id="online-now">{ "● Online agora" }</span>
							<span id="inquiry-title" class="serif">{ "Tirar Dúvidas" }</span>
							<span id="inquiry-hint">{ "Toque para iniciar conversa" }</span>
						</span>
						<span id="inquiry-icon">{ "💬" }</span>
					</a>
					<div id="info-grid">
						<div>
							<h4>{ "Localização" }</h4>
							<p>{ NEIGHBORHOOD }<br />{ format!("{CITY} - {REGION}") }</p>
						</div>
						<div>
							<h4>{ "Horários" }</h4>
							<p>{ HOURS }<br />{ HOURS_NOTE }</p>
						</div>
					</div>
				</div>
				<a id="instagram-link" href={ INSTAGRAM_URL } target="_blank" rel="noopener noreferrer">
					{ "Acompanhe no Instagram ↗" }
				</a>
				<p id="copyright">{ format!("© {year} {VENUE} • All rights reserved") }</p>
			</div>
		</footer>
	}
}
