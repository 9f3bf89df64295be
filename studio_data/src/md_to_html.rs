use pulldown_cmark::{CowStr, Event, Tag, TagEnd};

// Everything that goes through here is copy we wrote ourselves and compiled in, so there's no
// sanitizing. Links always leave the page, so they all open in a new tab.
pub fn md_to_html(input: &str) -> String {
	let events = pulldown_cmark::Parser::new_ext(input, pulldown_cmark::Options::all())
		.map(|ev| match ev {
			Event::Start(Tag::Link { dest_url, .. }) => Event::InlineHtml(CowStr::from(format!(
				r#"<a href="{dest_url}" target="_blank" rel="noopener noreferrer">"#
			))),
			Event::End(TagEnd::Link) => Event::InlineHtml(CowStr::from("</a>")),
			e => e
		});

	let mut html = String::new();
	pulldown_cmark::html::push_html(&mut html, events);
	html
}

#[cfg(test)]
mod tests {
	use super::md_to_html;

	#[test]
	fn renders_emphasis() {
		assert_eq!(md_to_html("tolerância de **15 minutos**"), "<p>tolerância de <strong>15 minutos</strong></p>\n");
	}

	#[test]
	fn links_open_in_new_tab() {
		let html = md_to_html("via [WhatsApp](https://wa.me/5518997346052) depois");
		assert_eq!(
			html,
			"<p>via <a href=\"https://wa.me/5518997346052\" target=\"_blank\" rel=\"noopener noreferrer\">WhatsApp</a> depois</p>\n"
		);
	}
}
