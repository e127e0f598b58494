mod access;
mod booking;
mod experience_menu;
mod faq;
mod footer;
mod hero;
mod icon;
mod link;
mod loading_screen;
mod nav;
mod promo_plan;
mod recommended;
mod reveal;
mod why_us;

pub use access::Access;
pub use booking::Booking;
pub use experience_menu::ExperienceMenu;
pub use faq::Faq;
pub use footer::Footer;
pub use hero::Hero;
pub use icon::IconSvg;
pub use link::ExternalLink;
pub use loading_screen::LoadingScreen;
pub use nav::Navbar;
pub use promo_plan::PromoPlan;
pub use recommended::RecommendedFor;
pub use reveal::Reveal;
pub use why_us::WhyUs;
