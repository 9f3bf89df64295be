use yew::prelude::*;

#[function_component(SharedStyle)]
pub fn shared_style() -> Html {
	html! { <style>{ studio_data::BASE_STYLE }</style> }
}

#[derive(Properties, PartialEq)]
pub struct MarkdownProps {
	pub md: &'static str,
	#[prop_or_default]
	pub class: Classes
}

/// Renders one of the compiled-in markdown blurbs. Only ever fed our own copy, never anything the
/// visitor typed.
#[function_component(Markdown)]
pub fn markdown(props: &MarkdownProps) -> Html {
	let md = props.md;
	let html = use_memo(md, |md| studio_data::md_to_html(md));

	html! {
		<div class={ props.class.clone() }>
			{ Html::from_html_unchecked(html.as_str().to_owned().into()) }
		</div>
	}
}
