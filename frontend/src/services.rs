use studio_data::{
	catalog::{Category, PACKAGES_ID, Variant, find_category, main_categories, package_category},
	view::{self, CATEGORY_SCROLL_DELAY_MS}
};
use yew::prelude::*;

use crate::scroll::scroll_to_later;

const STYLE: &str = r#"
#categories {
	display: flex;
	gap: 16px;
	overflow-x: auto;
	margin: 0 -16px;
	padding: 0 16px 32px 16px;
	scroll-snap-type: x mandatory;
	flex-wrap: wrap;
}
.category-card {
	position: relative;
	flex: 0 0 30%;
	min-width: 105px;
	aspect-ratio: 3 / 4;
	border-radius: 16px;
	overflow: hidden;
	padding: 0;
	scroll-snap-align: center;
	box-shadow: 0 0 0 1px rgba(0, 0, 0, 0.05);
	transition: opacity 0.3s ease, box-shadow 0.3s ease;
}
.category-card.wide {
	flex: 1 0 100%;
	aspect-ratio: 16 / 6;
	order: 10;
}
.category-card.active {
	box-shadow: 0 0 0 2px var(--background), 0 0 0 4px var(--primary);
}
.category-card.dimmed {
	opacity: 0.7;
}
.category-card > img {
	width: 100%;
	height: 100%;
	object-fit: cover;
	transition: transform 0.5s ease-out;
}
.category-card.active > img, .category-card:hover > img {
	transform: scale(1.05);
}
.category-card::after {
	content: "";
	position: absolute;
	inset: 0;
	background-image: linear-gradient(to top, rgba(0, 0, 0, 0.7), transparent);
}
.category-check {
	position: absolute;
	top: 10px;
	right: 10px;
	z-index: 20;
	width: 24px;
	height: 24px;
	border-radius: 999px;
	border: 1px solid rgba(255, 255, 255, 0.6);
	background-color: rgba(0, 0, 0, 0.2);
	font-size: 14px;
	line-height: 22px;
}
.active > .category-check {
	background-color: var(--mint);
	border-color: var(--mint);
}
.category-label {
	position: absolute;
	bottom: 0;
	left: 0;
	right: 0;
	z-index: 10;
	padding: 12px;
	text-align: center;
}
.category-label > span {
	display: block;
	color: white;
}
.category-title {
	font-size: 14px;
	font-weight: 500;
}
.wide .category-title {
	font-size: 24px;
	font-weight: 600;
}
.category-hint {
	font-size: 10px;
	opacity: 0.7;
	text-transform: uppercase;
	letter-spacing: 0.1em;
}
#variant-panel {
	scroll-margin-top: 112px;
}
#variant-panel > div {
	background-color: rgba(244, 239, 232, 0.3);
	border-radius: 32px;
	padding: 12px;
	border: 1px solid rgba(140, 122, 107, 0.1);
}
#variant-panel h4 {
	text-align: center;
	font-size: 18px;
	margin: 16px 0;
}
#variant-grid {
	display: flex;
	flex-direction: column;
	gap: 12px;
}
.variant-card {
	padding: 20px;
	border-radius: 19px;
	cursor: pointer;
	background-color: rgba(255, 255, 255, 0.4);
	display: flex;
	flex-direction: column;
	justify-content: space-between;
	transition: background-color 0.2s ease;
}
.variant-card:hover {
	background-color: rgba(255, 255, 255, 0.6);
}
.variant-card.selected {
	background-color: white;
	box-shadow: 0 0 0 1px rgba(74, 59, 50, 0.1);
}
.variant-head {
	display: flex;
	justify-content: space-between;
	align-items: flex-start;
	margin-bottom: 10px;
}
.variant-head > h3 {
	font-family: Inter, Arial, sans-serif;
	font-weight: 600;
	font-size: 18px;
	margin: 0;
}
.variant-radio {
	flex-shrink: 0;
	width: 24px;
	height: 24px;
	margin-left: 12px;
	border-radius: 999px;
	border: 1px solid rgba(140, 122, 107, 0.3);
	display: flex;
	align-items: center;
	justify-content: center;
}
.selected .variant-radio {
	background-color: var(--primary);
	border-color: var(--primary);
}
.variant-dot {
	width: 10px;
	height: 10px;
	border-radius: 999px;
	background-color: white;
}
.variant-description {
	font-size: 15px;
	font-weight: 300;
	color: var(--secondary);
	margin: 0 0 16px 0;
}
.variant-foot {
	display: flex;
	justify-content: space-between;
	align-items: center;
	padding-top: 8px;
	border-top: 1px solid rgba(74, 59, 50, 0.05);
}
.variant-duration {
	font-size: 12px;
	text-transform: uppercase;
	letter-spacing: 0.05em;
	opacity: 0.6;
}
.variant-price {
	font-weight: 700;
	font-size: 18px;
}
@media (min-width: 768px) {
	#categories {
		display: grid;
		grid-template-columns: repeat(4, 1fr);
		gap: 24px;
		margin: 0;
		padding: 0 0 32px 0;
	}
	.category-card.wide {
		aspect-ratio: 3 / 4;
	}
	#variant-grid {
		display: grid;
		grid-template-columns: repeat(2, 1fr);
		gap: 16px;
	}
}
@media (min-width: 1024px) {
	#variant-grid {
		grid-template-columns: repeat(3, 1fr);
	}
}
"#;

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
	pub selected: Option<String>,
	pub on_select: Callback<&'static str>
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
	// which category's variants are showing. This is the visitor's to toggle, except that a
	// selection always forces its own category open
	let expanded = use_state(|| None::<&'static str>);
	let variants_ref = use_node_ref();

	{
		let expanded = expanded.clone();
		use_effect_with(props.selected.clone(), move |selected| {
			let wanted = view::expanded_for_selection(selected.as_deref(), *expanded);
			if wanted != *expanded {
				expanded.set(wanted);
			}
			|| { }
		});
	}

	let on_category = {
		let expanded = expanded.clone();
		let variants_ref = variants_ref.clone();
		Callback::from(move |id: &'static str| {
			let next = view::toggle(*expanded, id);

			// only when something's being opened; closing leaves nothing to scroll to
			if next.is_some() {
				scroll_to_later(variants_ref.clone(), CATEGORY_SCROLL_DELAY_MS);
			}

			expanded.set(next);
		})
	};

	let variants_html = (*expanded)
		.and_then(find_category)
		.map(|cat| html! {
			<div key={ cat.id }>
				<h4>{ format!("{} - Selecione uma opção", cat.title) }</h4>
				<div id="variant-grid">
					{ for cat.variants.iter().map(|variant| variant_card(
						variant,
						props.selected.as_deref() == Some(variant.id),
						&props.on_select
					)) }
				</div>
			</div>
		})
		.unwrap_or_default();

	html! {
		<div class="section">
			<style>{ STYLE }</style>
			<h2 class="section-title">{ "Serviços Oferecidos" }</h2>
			<div id="categories">
				{ for main_categories().map(|cat| category_card(cat, *expanded, &on_category)) }
				{ for package_category().map(|cat| category_card(cat, *expanded, &on_category)) }
			</div>
			<div id="variant-panel" ref={ variants_ref }>
				{ variants_html }
			</div>
		</div>
	}
}

fn category_card(
	cat: &'static Category,
	expanded: Option<&'static str>,
	on_click: &Callback<&'static str>
) -> Html {
	let wide = cat.id == PACKAGES_ID;
	let active = expanded == Some(cat.id);
	// an open package card doesn't dim the others, since it sits on its own row on mobile
	let dimmed = expanded.is_some_and(|open| open != cat.id && (wide || open != PACKAGES_ID));
	let onclick = on_click.reform(move |_: MouseEvent| cat.id);

	html! {
		<button
			class={ classes!(
				"category-card",
				wide.then_some("wide"),
				active.then_some("active"),
				dimmed.then_some("dimmed")
			) }
			{ onclick }
		>
			<img src={ cat.image } alt={ cat.title } loading="lazy" decoding="async" />
			<span class="category-check">{ if active { "✓" } else { "" } }</span>
			<span class="category-label">
				<span class="category-title">{ cat.title }</span>
				if !active {
					<span class="category-hint">{ if wide { "Ver Combinações" } else { "Ver opções" } }</span>
				}
			</span>
		</button>
	}
}

fn variant_card(variant: &'static Variant, selected: bool, on_select: &Callback<&'static str>) -> Html {
	let onclick = on_select.reform(move |_: MouseEvent| variant.id);

	html! {
		<div class={ classes!("variant-card", selected.then_some("selected")) } { onclick }>
			<div>
				<div class="variant-head">
					<h3>{ variant.name }</h3>
					<span class="variant-radio">
						if selected {
							<span class="variant-dot" />
						}
					</span>
				</div>
				if let Some(description) = variant.description {
					<p class="variant-description">{ description }</p>
				}
			</div>
			<div class="variant-foot">
				<span class="variant-duration">{ "⏱ " }{ variant.duration }</span>
				<span class="variant-price">{ variant.price }</span>
			</div>
		</div>
	}
}
