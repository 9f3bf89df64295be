use studio_data::{
	content::{HERO_TAGLINE, HERO_TITLE, HERO_TITLE_EMPHASIS},
	studio::{HERO_IMAGE, VENUE}
};
use yew::prelude::*;

const STYLE: &str = r#"
#hero {
	position: relative;
	height: 100svh;
	width: 100%;
	display: flex;
	flex-direction: column;
	align-items: center;
	justify-content: flex-end;
	overflow: hidden;
	padding-bottom: 48px;
}
#hero > img {
	position: absolute;
	inset: 0;
	width: 100%;
	height: 100%;
	object-fit: cover;
	object-position: top;
}
#hero-shade {
	position: absolute;
	bottom: 0;
	left: 0;
	right: 0;
	height: 60vh;
	background-image: linear-gradient(to top, rgba(0, 0, 0, 0.9), rgba(0, 0, 0, 0.5), transparent);
}
#hero-text {
	position: relative;
	z-index: 10;
	text-align: center;
	padding: 0 24px;
	max-width: 576px;
	display: flex;
	flex-direction: column;
	align-items: center;
}
#hero-text * {
	color: var(--white);
}
#hero-text h1 {
	font-size: 48px;
	line-height: 1.1;
	margin: 0 0 12px 0;
}
#hero-text h1 em {
	color: var(--accent);
	font-weight: 300;
}
#hero-text p {
	font-size: 18px;
	font-weight: 300;
	margin: 0 0 24px 0;
}
#hero-cta {
	background-color: var(--white);
	color: var(--primary);
	padding: 14px 40px;
	border-radius: 999px;
	font-size: 14px;
	font-weight: 500;
	text-transform: uppercase;
	letter-spacing: 0.1em;
	transition: transform 0.3s ease;
}
#hero-cta:hover {
	transform: scale(1.05);
}
@media (min-width: 768px) {
	#hero-text h1 {
		font-size: 72px;
	}
	#hero {
		padding-bottom: 80px;
	}
}
"#;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
	pub on_cta: Callback<MouseEvent>
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
	html! {
		<section id="hero">
			<style>{ STYLE }</style>
			<img src={ HERO_IMAGE } alt={ format!("{VENUE} Ambiente") } loading="eager" decoding="sync" />
			<div id="hero-shade" />
			<div id="hero-text">
				<h1>{ HERO_TITLE }<br /><em>{ HERO_TITLE_EMPHASIS }</em></h1>
				<p>{ HERO_TAGLINE }</p>
				<button id="hero-cta" onclick={ props.on_cta.clone() }>{ "Agendar Horário" }</button>
			</div>
		</section>
	}
}
