//! Fixed facts about the studio that show up all over the page.

pub const VENUE: &str = "Studio Müller";

/// WhatsApp recipient, in the international format `wa.me` expects (no `+`, no spaces)
pub const WHATSAPP_RECIPIENT: &str = "5518997346052";
pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

pub const INSTAGRAM_URL: &str = "https://www.instagram.com/studiomullerr/";

pub const NEIGHBORHOOD: &str = "Zona Sul";
pub const CITY: &str = "Marília";
pub const REGION: &str = "SP";

pub const HOURS: &str = "Dom a Dom";
pub const HOURS_NOTE: &str = "Com agendamento";

pub const HERO_IMAGE: &str = "https://i.postimg.cc/QdnZZJ7M/ssa-fico.jpg";
