use studio_data::{
	content::{FAQ, FAQ_INITIALLY_OPEN},
	view
};
use yew::prelude::*;

use crate::shared::Markdown;

const STYLE: &str = r#"
#faq-list {
	display: flex;
	flex-direction: column;
	gap: 16px;
	max-width: 768px;
	margin: 0 auto;
}
.faq-item {
	border: 1px solid transparent;
	border-radius: 16px;
	overflow: hidden;
	background-color: rgba(244, 239, 232, 0.3);
	transition: background-color 0.3s ease;
}
.faq-item.open {
	background-color: white;
	border-color: rgba(74, 59, 50, 0.1);
}
.faq-item > button {
	width: 100%;
	display: flex;
	align-items: center;
	justify-content: space-between;
	gap: 16px;
	padding: 20px;
	text-align: left;
	font-size: 18px;
	font-weight: 500;
}
.faq-sign {
	flex-shrink: 0;
	width: 32px;
	height: 32px;
	border-radius: 999px;
	border: 1px solid rgba(140, 122, 107, 0.2);
	line-height: 30px;
	text-align: center;
}
.open .faq-sign {
	background-color: var(--primary);
	color: white;
}
.faq-answer {
	padding: 0 20px 24px 20px;
	font-size: 15px;
	font-weight: 300;
	line-height: 1.6;
}
.faq-answer p {
	margin: 0;
}
.faq-answer a {
	font-weight: 500;
	text-decoration: underline;
}
#faq-divider {
	width: 64px;
	height: 2px;
	margin: 0 auto 40px auto;
	border-radius: 999px;
	background-color: rgba(74, 59, 50, 0.2);
}
"#;

#[function_component(Faq)]
pub fn faq() -> Html {
	let open = use_state(|| FAQ_INITIALLY_OPEN);

	html! {
		<div class="section">
			<style>{ STYLE }</style>
			<h2 class="section-title">{ "Informações Importantes" }</h2>
			<div id="faq-divider" />
			<div id="faq-list">
				{ for FAQ.iter().enumerate().map(|(idx, entry)| {
					let is_open = *open == Some(idx);
					let onclick = {
						let open = open.clone();
						Callback::from(move |_: MouseEvent| open.set(view::toggle(*open, idx)))
					};

					html! {
						<div class={ classes!("faq-item", is_open.then_some("open")) }>
							<button { onclick }>
								<span>{ entry.question }</span>
								<span class="faq-sign">{ if is_open { "−" } else { "+" } }</span>
							</button>
							if is_open {
								<Markdown md={ entry.answer_md } class="faq-answer" />
							}
						</div>
					}
				}) }
			</div>
		</div>
	}
}
