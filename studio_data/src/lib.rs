pub mod catalog;
pub mod content;
pub mod handoff;
pub mod selection;
pub mod studio;
pub mod structured;
pub mod view;

mod md_to_html;
pub use md_to_html::md_to_html;

pub use catalog::{Category, Variant, CATALOG, find_variant};
pub use handoff::{HandoffError, HandoffLink, handoff_link};
pub use selection::{Selection, SelectionAction, SelectionPatch};

pub static BASE_STYLE: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Cormorant+Garamond:ital,wght@0,400;0,500;0,600;1,300&family=Inter:wght@300;400;500;600&display=swap');
* {
	--background: #fdfcf8;
	--surface: #f4efe8;
	--primary: #4a3b32;
	--secondary: #8c7a6b;
	--accent: #d8c3a5;
	--mint: #b4f5d1;
	--white: #fdfcf8;
	box-sizing: border-box;
	color: var(--primary);
	font-family: Inter, Arial, sans-serif;
}
html {
	scroll-behavior: smooth;
}
body {
	background-color: var(--background);
	margin: 0;
}
h1, h2, h3, h4, .serif {
	font-family: "Cormorant Garamond", Georgia, serif;
	font-weight: 500;
}
button {
	cursor: pointer;
	border: none;
	background: none;
	font: inherit;
}
a {
	text-decoration: none;
}
.section {
	width: 100%;
	max-width: 1024px;
	margin: 0 auto;
	padding: 32px 24px;
}
.section-title {
	text-align: center;
	font-size: 32px;
	margin: 0 0 12px 0;
}
textarea {
	width: 100%;
	height: 128px;
	resize: none;
	border: none;
	border-radius: 16px;
	padding: 20px;
	font-size: 16px;
	background-color: var(--surface);
}
"#;
