use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

use chrono::{Datelike, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::lifecycle::{RevealOptions, SplashTiming};

const SITE_JSON: &str = include_str!("../../content/site.json");

/// Kyoto is UTC+9 all year round.
const KYOTO_UTC_OFFSET_SECS: i32 = 9 * 3600;

/// A price in Japanese yen, tax included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Yen(pub u32);

impl fmt::Display for Yen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        write!(f, "¥{grouped}")
    }
}

/// Colour family used by an experience card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    Gold,
    Matcha,
}

impl Accent {
    pub fn class(&self) -> &'static str {
        match self {
            Accent::Gold => "accent-gold",
            Accent::Matcha => "accent-matcha",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Calendar,
    CheckCircle,
    ChevronDown,
    Clock,
    CloudRain,
    Crown,
    MapPin,
    Phone,
    Sparkles,
    Star,
    Users,
    Utensils,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
    pub location: String,
    /// Single glyph shown inside the loading spinner.
    pub mark: String,
}

impl Brand {
    /// Splits "Samurai Restaurant" into ("Samurai", "Restaurant") so the
    /// second half can be highlighted.
    pub fn name_parts(&self) -> (&str, &str) {
        self.name.split_once(' ').unwrap_or((self.name.as_str(), ""))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroContent {
    pub eyebrow: String,
    pub lead: String,
    pub background_image: String,
    pub background_alt: String,
    pub venue_label: String,
}

/// A bookable class on the experience menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub tagline: String,
    pub image: String,
    pub image_alt: String,
    pub highlights: Vec<String>,
    pub duration: String,
    pub price: Yen,
    pub booking_url: String,
    pub reserve_label: String,
    pub booking_label: String,
    pub accent: Accent,
    #[serde(default)]
    pub popular: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromotionGroup {
    pub heading: String,
    #[serde(default)]
    pub body: Vec<String>,
    #[serde(default)]
    pub items: Vec<String>,
}

/// Copy for a promotion's card in the booking section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingCardCopy {
    pub title: String,
    pub summary: String,
    pub icon: Icon,
}

/// A promotional dining plan, optionally limited to a date window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Promotion {
    pub id: String,
    pub badge: String,
    pub title: String,
    pub intro: Vec<String>,
    pub image: String,
    pub image_alt: String,
    pub banner_title: String,
    pub banner_subtitle: String,
    pub groups: Vec<PromotionGroup>,
    pub price: Yen,
    pub booking_label: String,
    pub booking_url: String,
    pub card: BookingCardCopy,
    #[serde(default)]
    pub available_from: Option<NaiveDate>,
    #[serde(default)]
    pub available_until: Option<NaiveDate>,
}

impl Promotion {
    /// Both ends of the window are inclusive; a missing end is open.
    pub fn is_available_on(&self, date: NaiveDate) -> bool {
        self.available_from.map_or(true, |from| date >= from)
            && self.available_until.map_or(true, |until| date <= until)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub icon: Icon,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessInfo {
    pub venue: String,
    pub address_lines: Vec<String>,
    pub note: String,
    pub venue_info: String,
    pub exterior_image: String,
    pub exterior_alt: String,
    pub map_embed_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingInfo {
    pub heading: String,
    pub cutoff_note: String,
    pub contact_note: String,
    pub tax_note: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FooterLinks {
    pub instagram_url: String,
    pub contact_url: String,
}

/// Everything the landing page displays, plus the timings of its
/// entrance animations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContent {
    pub brand: Brand,
    pub hero: HeroContent,
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub promotions: Vec<Promotion>,
    pub features: Vec<Feature>,
    pub recommended_for: Vec<String>,
    pub access: AccessInfo,
    pub faqs: Vec<Faq>,
    pub booking: BookingInfo,
    pub footer: FooterLinks,
    #[serde(default)]
    pub splash: SplashTiming,
    #[serde(default)]
    pub reveal: RevealOptions,
}

/// Visual treatment of a booking card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStyle {
    Popular,
    Standard(Accent),
    Premium,
}

/// One card in the booking section.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingOption<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub summary: &'a str,
    pub price: Yen,
    pub url: &'a str,
    pub label: &'a str,
    pub icon: Icon,
    pub style: CardStyle,
}

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("malformed site content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{0} must not be empty")]
    Empty(String),
    #[error("duplicate offering id: {0}")]
    DuplicateId(String),
    #[error("promotion {0} ends before it starts")]
    InvalidWindow(String),
    #[error("{field} has unsupported link {url:?}")]
    InvalidLink { field: String, url: String },
}

impl SiteContent {
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        require("brand.name", &self.brand.name)?;
        require("hero.lead", &self.hero.lead)?;
        require("booking.heading", &self.booking.heading)?;

        let mut ids = HashSet::new();
        for exp in &self.experiences {
            require("experience id", &exp.id)?;
            require(&format!("experience {} title", exp.id), &exp.title)?;
            check_link(&format!("experience {} booking_url", exp.id), &exp.booking_url)?;
            if !ids.insert(exp.id.as_str()) {
                return Err(ContentError::DuplicateId(exp.id.clone()));
            }
        }
        for promo in &self.promotions {
            require("promotion id", &promo.id)?;
            require(&format!("promotion {} title", promo.id), &promo.title)?;
            check_link(&format!("promotion {} booking_url", promo.id), &promo.booking_url)?;
            if !ids.insert(promo.id.as_str()) {
                return Err(ContentError::DuplicateId(promo.id.clone()));
            }
            if let (Some(from), Some(until)) = (promo.available_from, promo.available_until) {
                if from > until {
                    return Err(ContentError::InvalidWindow(promo.id.clone()));
                }
            }
        }
        for (i, faq) in self.faqs.iter().enumerate() {
            require(&format!("faq {i} question"), &faq.question)?;
            require(&format!("faq {i} answer"), &faq.answer)?;
        }

        check_link("access.map_embed_url", &self.access.map_embed_url)?;
        check_link("footer.instagram_url", &self.footer.instagram_url)?;
        check_link("footer.contact_url", &self.footer.contact_url)?;
        Ok(())
    }

    pub fn active_promotions(&self, today: NaiveDate) -> Vec<&Promotion> {
        self.promotions
            .iter()
            .filter(|p| p.is_available_on(today))
            .collect()
    }

    /// Cards for every experience, then for every promotion running today.
    pub fn booking_options(&self, today: NaiveDate) -> Vec<BookingOption<'_>> {
        let experiences = self.experiences.iter().map(|exp| BookingOption {
            id: &exp.id,
            title: &exp.title,
            summary: &exp.duration,
            price: exp.price,
            url: &exp.booking_url,
            label: &exp.booking_label,
            icon: Icon::Calendar,
            style: if exp.popular {
                CardStyle::Popular
            } else {
                CardStyle::Standard(exp.accent)
            },
        });
        let promotions = self.active_promotions(today).into_iter().map(|promo| BookingOption {
            id: &promo.id,
            title: &promo.card.title,
            summary: &promo.card.summary,
            price: promo.price,
            url: &promo.booking_url,
            label: &promo.booking_label,
            icon: promo.card.icon,
            style: CardStyle::Premium,
        });
        experiences.chain(promotions).collect()
    }
}

fn require(field: &str, value: &str) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        return Err(ContentError::Empty(field.to_string()));
    }
    Ok(())
}

fn check_link(field: &str, url: &str) -> Result<(), ContentError> {
    if url.starts_with("https://") || url.starts_with('#') {
        return Ok(());
    }
    Err(ContentError::InvalidLink {
        field: field.to_string(),
        url: url.to_string(),
    })
}

/// Links leaving the page open in a new tab.
pub fn is_external(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// The content compiled into the binary, parsed on first use.
pub fn bundled() -> Result<&'static SiteContent, &'static ContentError> {
    static CONTENT: OnceLock<Result<SiteContent, ContentError>> = OnceLock::new();
    CONTENT
        .get_or_init(|| SiteContent::from_json(SITE_JSON))
        .as_ref()
}

/// Today's date at the restaurant.
pub fn kyoto_today() -> NaiveDate {
    let now = Utc::now();
    match FixedOffset::east_opt(KYOTO_UTC_OFFSET_SECS) {
        Some(tz) => now.with_timezone(&tz).date_naive(),
        None => now.date_naive(),
    }
}

pub fn kyoto_year() -> i32 {
    kyoto_today().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn content() -> SiteContent {
        SiteContent::from_json(SITE_JSON).unwrap()
    }

    #[test]
    fn yen_groups_thousands() {
        assert_eq!(Yen(0).to_string(), "¥0");
        assert_eq!(Yen(950).to_string(), "¥950");
        assert_eq!(Yen(7700).to_string(), "¥7,700");
        assert_eq!(Yen(12500).to_string(), "¥12,500");
        assert_eq!(Yen(1_234_567).to_string(), "¥1,234,567");
    }

    #[test]
    fn bundled_content_is_valid() {
        let site = bundled().unwrap();
        assert_eq!(site.brand.name, "Samurai Restaurant");
        assert_eq!(site.experiences.len(), 2);
        assert_eq!(site.experiences[0].price, Yen(12500));
        assert_eq!(site.splash, SplashTiming::default());
        assert_eq!(site.reveal, RevealOptions::default());
    }

    #[test]
    fn brand_name_splits_for_highlight() {
        let site = content();
        assert_eq!(site.brand.name_parts(), ("Samurai", "Restaurant"));

        let single = Brand {
            name: "Samurai".into(),
            location: "Kyoto".into(),
            mark: "侍".into(),
        };
        assert_eq!(single.name_parts(), ("Samurai", ""));
    }

    #[test]
    fn seasonal_promotion_follows_its_window() {
        let site = content();
        let ids = |day: NaiveDate| {
            site.active_promotions(day)
                .iter()
                .map(|p| p.id.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(ids(date(2026, 1, 15)), vec!["premium", "new-year"]);
        assert_eq!(ids(date(2026, 1, 31)), vec!["premium", "new-year"]);
        assert_eq!(ids(date(2026, 2, 1)), vec!["premium"]);
        assert_eq!(ids(date(2025, 11, 30)), vec!["premium"]);
    }

    #[test]
    fn booking_cards_list_experiences_then_active_promotions() {
        let site = content();
        let options = site.booking_options(date(2026, 1, 2));
        let ids: Vec<_> = options.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec!["sushi", "matcha", "premium", "new-year"]);

        assert_eq!(options[0].style, CardStyle::Popular);
        assert_eq!(options[1].style, CardStyle::Standard(Accent::Matcha));
        assert_eq!(options[1].summary, "1 ~ 1.5 hrs");
        assert_eq!(options[3].icon, Icon::Sparkles);
        assert_eq!(options[3].price.to_string(), "¥15,000");

        let off_season = site.booking_options(date(2026, 6, 1));
        assert_eq!(off_season.len(), 3);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut site = content();
        site.promotions[0].id = "sushi".into();
        assert!(matches!(site.validate(), Err(ContentError::DuplicateId(id)) if id == "sushi"));
    }

    #[test]
    fn rejects_inverted_window() {
        let mut site = content();
        site.promotions[1].available_from = Some(date(2026, 2, 1));
        site.promotions[1].available_until = Some(date(2026, 1, 1));
        assert!(matches!(site.validate(), Err(ContentError::InvalidWindow(_))));
    }

    #[test]
    fn rejects_plain_http_and_empty_text() {
        let mut site = content();
        site.experiences[0].booking_url = "http://example.com/form".into();
        assert!(matches!(site.validate(), Err(ContentError::InvalidLink { .. })));

        let mut site = content();
        site.faqs[2].answer = "  ".into();
        assert!(matches!(site.validate(), Err(ContentError::Empty(field)) if field == "faq 2 answer"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            SiteContent::from_json("{\"brand\": 3}"),
            Err(ContentError::Parse(_))
        ));

        let bad_timing = SITE_JSON.replace("\"tick_ms\": 40", "\"tick_ms\": 0");
        assert!(matches!(
            SiteContent::from_json(&bad_timing),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn external_links_are_detected() {
        assert!(is_external("https://www.instagram.com/"));
        assert!(!is_external("#booking"));
    }
}
