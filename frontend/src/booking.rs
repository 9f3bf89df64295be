use gloo_console::log;
use studio_data::{Selection, catalog::find_variant, view};
use wasm_bindgen::JsCast;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

const STYLE: &str = r#"
#booking-panel {
	background-color: white;
	border-radius: 40px 40px 0 0;
	box-shadow: 0 -10px 40px -15px rgba(0, 0, 0, 0.05);
	margin-top: 16px;
	padding-bottom: 40px;
	animation: booking-open 0.5s ease-out;
}
@keyframes booking-open {
	from { opacity: 0; transform: translateY(20px); }
	to { opacity: 1; transform: translateY(0); }
}
#booking-head {
	display: flex;
	flex-direction: column;
	align-items: center;
	text-align: center;
	gap: 12px;
	margin-bottom: 32px;
}
#booking-head > h2 {
	font-size: 32px;
	margin: 0;
}
#booking-head > p {
	color: var(--secondary);
	font-size: 14px;
	max-width: 320px;
	margin: 0;
}
#selected-service {
	display: block;
	font-weight: 600;
	font-size: 18px;
	color: var(--primary);
	margin-top: 4px;
}
#schedule-note {
	background-color: rgba(244, 239, 232, 0.5);
	padding: 24px;
	border-radius: 24px;
	margin-bottom: 32px;
	border: 1px solid rgba(140, 122, 107, 0.1);
}
#schedule-note > h3 {
	font-size: 18px;
	margin: 0 0 8px 0;
}
#schedule-note > p {
	font-size: 14px;
	font-weight: 300;
	color: var(--secondary);
	text-align: justify;
	margin: 0;
}
#notes-label {
	display: block;
	font-size: 14px;
	font-weight: 500;
	text-transform: uppercase;
	letter-spacing: 0.05em;
	margin: 0 4px 12px 4px;
}
"#;

#[derive(Properties, PartialEq)]
pub struct BookingProps {
	pub selection: Selection,
	pub on_notes: Callback<String>
}

/// The "finish booking" panel. Only exists while something is selected.
#[function_component(Booking)]
pub fn booking(props: &BookingProps) -> Html {
	if !view::confirmation_visible(&props.selection) {
		return html! {};
	}

	// a selection that doesn't resolve still gets the panel, just without a name in it
	let service_name = find_variant(props.selection.service_id.as_deref())
		.map_or("", |(_, variant)| variant.name);

	if cfg!(debug_assertions) && service_name.is_empty() {
		log!("Selected service isn't in the catalog: ", props.selection.service_id.clone().unwrap_or_default());
	}

	let on_input = props.on_notes.clone();
	let oninput = Callback::from(move |e: InputEvent| {
		if let Some(area) = e.target().and_then(|t| t.dyn_into::<HtmlTextAreaElement>().ok()) {
			on_input.emit(area.value());
		}
	});

	html! {
		<div id="booking-panel">
			<style>{ STYLE }</style>
			<div class="section">
				<div id="booking-head">
					<h2>{ "Finalizar Agendamento" }</h2>
					<p>
						{ "Você selecionou: " }
						<span id="selected-service">{ service_name }</span>
					</p>
				</div>
				<div id="schedule-note">
					<h3>{ "Data e Horário" }</h3>
					<p>
						{ "Para garantir um atendimento personalizado e verificar a disponibilidade exata, " }
						<strong>{ "o dia e o horário serão combinados diretamente pelo WhatsApp" }</strong>
						{ " após você clicar em finalizar." }
					</p>
				</div>
				<label id="notes-label" for="booking-notes">{ "✎ Alguma observação?" }</label>
				<textarea
					id="booking-notes"
					value={ props.selection.notes.clone() }
					{ oninput }
					placeholder="Ex: Tenho alergia a algum produto, prefiro horário pela manhã..."
				/>
			</div>
		</div>
	}
}
