//! Static copy for the page. The longer bits are markdown and go through [`crate::md_to_html`]
//! before being rendered.

pub struct TimeSlot {
	pub id: &'static str,
	pub time: &'static str,
	pub available: bool
}

// Nothing in the booking flow reads this anymore (the day and time are agreed on over whatsapp)
// but it's the studio's usual schedule, so it stays around for when that changes.
pub static AVAILABLE_TIMES: &[TimeSlot] = &[
	TimeSlot { id: "09:00", time: "09:00", available: true },
	TimeSlot { id: "10:00", time: "10:00", available: true },
	TimeSlot { id: "11:00", time: "11:00", available: false },
	TimeSlot { id: "13:00", time: "13:00", available: true },
	TimeSlot { id: "14:30", time: "14:30", available: true },
	TimeSlot { id: "16:00", time: "16:00", available: true },
	TimeSlot { id: "17:00", time: "17:00", available: true },
];

pub fn open_time_slots() -> impl Iterator<Item = &'static TimeSlot> {
	AVAILABLE_TIMES.iter().filter(|slot| slot.available)
}

pub struct FaqEntry {
	pub question: &'static str,
	pub answer_md: &'static str
}

pub static FAQ: &[FaqEntry] = &[
	FaqEntry {
		question: "Onde fica o studio?",
		answer_md: "O Studio Müller está localizado na **Zona Sul de Marília**. Por se tratar de um \
			atendimento exclusivo, o endereço completo e a localização exata são enviados via \
			[WhatsApp](https://wa.me/5518997346052) após o contato inicial."
	},
	FaqEntry {
		question: "Quais são as formas de pagamento?",
		answer_md: "Pagamentos via **Pix**, **dinheiro** e **cartão de crédito ou débito** (Link de \
			pagamento ou aproximação)."
	},
	FaqEntry {
		question: "Qual a tolerância de atraso?",
		answer_md: "Para garantir que todas as clientes sejam atendidas com excelência e sem pressa, a \
			tolerância máxima é de **15 minutos**. Atrasos superiores podem exigir o reagendamento."
	},
	FaqEntry {
		question: "Como devo me preparar para o atendimento?",
		answer_md: "Para garantir um atendimento mais eficiente e um resultado impecável, recomenda-se \
			comparecer com a pele do rosto limpa e sem maquiagem, facilitando a realização dos \
			procedimentos de design de sobrancelhas e maquiagem. Para serviços que envolvem babyliss ou \
			chapinha, o cabelo deve estar limpo e completamente seco."
	},
	FaqEntry {
		question: "Posso levar acompanhante?",
		answer_md: "Como o espaço é compacto, o ideal é levar apenas 1 acompanhante. Caso haja \
			necessidade de levar mais pessoas, peço que entre em contato previamente para alinharmos."
	}
];

/// Which FAQ entry is open when the page loads
pub const FAQ_INITIALLY_OPEN: Option<usize> = Some(0);

pub const HERO_TITLE: &str = "Realce sua";
pub const HERO_TITLE_EMPHASIS: &str = "beleza natural";
pub const HERO_TAGLINE: &str = "Um espaço dedicado ao cuidado, autoestima e bem-estar.";

pub const ARTIST: &str = "Iris Müller";
pub const ARTIST_ROLE: &str = "Beauty Artist";

pub const ABOUT_PREVIEW_MD: &str = "\
Meu nome é **Iris Müller**, tenho 17 anos e atuo como maquiadora e designer de sobrancelhas.

Me formei em maquiagem profissional e design de sobrancelhas em 2024 e busco constantemente evoluir...
";

pub const ABOUT_FULL_MD: &str = "\
Meu nome é **Iris Müller**, tenho 17 anos e atuo como maquiadora e designer de sobrancelhas.

Me formei em maquiagem profissional e design de sobrancelhas em 2024 e, desde então, realizo \
atendimentos em meu studio em casa, oferecendo uma experiência personalizada, cuidadosa e focada em \
resultados que valorizam cada cliente de forma única.

Desde sempre fui apaixonada pela área da estética e simplesmente amo o que eu faço. Busco \
constantemente evoluir, aprimorar minhas técnicas e proporcionar, a cada atendimento, uma \
experiência ainda mais especial para as clientes que confiam em meu trabalho.

Todos os serviços que ofereço a vocês são guiados por técnica, sensibilidade e atenção aos detalhes.

> *\"Acredito que a beleza está no equilíbrio e na harmonia, e por isso tudo é pensado de acordo \
com o formato do rosto, respeitando traços e identidade individual.\"*

Mais do que procedimentos, meu propósito é elevar a autoestima, proporcionando segurança, conforto \
e confiança em cada atendimento. Aqui, nada é genérico: cada resultado é construído com intenção, \
precisão e responsabilidade profissional.

---

**Se você busca um atendimento próximo, elegante e feito por quem entende o que faz, será um prazer \
te receber!**
";
