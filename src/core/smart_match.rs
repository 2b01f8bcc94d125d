//! Smart-match cards: sessions, circles and digital content offered in place
//! of a free-text reply.
//!
//! Each generator fixes which optional fields are populated and which title and
//! price pools are used. Draw order matters for scripted tests and is kept
//! stable: variant coin flip, date, title, instructor, badge, rating, reviews,
//! kind-specific fields, description, match percentage, credits, favorite.

use std::fmt;

use serde::Serialize;

use crate::core::random::{pick, RandomSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchKind {
    Session,
    Circle,
    Digital,
}

impl MatchKind {
    pub const ALL: [MatchKind; 3] = [MatchKind::Session, MatchKind::Circle, MatchKind::Digital];

    pub fn label(self) -> &'static str {
        match self {
            MatchKind::Session => "Session",
            MatchKind::Circle => "Circle",
            MatchKind::Digital => "Digital Content",
        }
    }

    /// User-side text recorded when the request is sent.
    pub fn request_text(self) -> &'static str {
        match self {
            MatchKind::Session => "Find me a live session",
            MatchKind::Circle => "Find me a circle",
            MatchKind::Digital => "Find me digital content",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "session" | "live" | "live-session" => Some(MatchKind::Session),
            "circle" => Some(MatchKind::Circle),
            "digital" | "digital-content" | "content" => Some(MatchKind::Digital),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentCategory {
    LiveSession,
    FixedCircle,
    OngoingCircle,
    DigitalContent,
}

impl ContentCategory {
    pub fn label(self) -> &'static str {
        match self {
            ContentCategory::LiveSession => "Live Session",
            ContentCategory::FixedCircle => "Fixed Circle",
            ContentCategory::OngoingCircle => "Ongoing Circle",
            ContentCategory::DigitalContent => "Digital Content",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessKind {
    OneOnOne,
    Group,
    Public,
}

impl AccessKind {
    pub fn label(self) -> &'static str {
        match self {
            AccessKind::OneOnOne => "One on One",
            AccessKind::Group => "Group",
            AccessKind::Public => "Public",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InstructorTier {
    T1,
    T2,
    T3,
}

impl InstructorTier {
    pub const ALL: [InstructorTier; 3] =
        [InstructorTier::T1, InstructorTier::T2, InstructorTier::T3];
}

impl fmt::Display for InstructorTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InstructorTier::T1 => "T1",
            InstructorTier::T2 => "T2",
            InstructorTier::T3 => "T3",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchCard {
    pub category: ContentCategory,
    pub access: Option<AccessKind>,
    /// Live date for group sessions, date range for fixed circles.
    pub date: Option<String>,
    pub title: String,
    pub instructor_name: String,
    pub instructor_tier: InstructorTier,
    pub rating: f64,
    pub review_count: u32,
    pub duration_minutes: Option<u32>,
    pub attendees: Option<String>,
    pub access_period: Option<String>,
    pub member_count: Option<u32>,
    pub bought_count: Option<u32>,
    pub description: String,
    pub match_percentage: u8,
    pub credits: u32,
    pub favorited: bool,
}

impl MatchCard {
    /// Short label shown in the card corner ("1:1", "Group", "Fixed Circle"...).
    pub fn matching_label(&self) -> &'static str {
        match (self.category, self.access) {
            (ContentCategory::LiveSession, Some(AccessKind::OneOnOne)) => "1:1",
            (ContentCategory::LiveSession, _) => "Group",
            (ContentCategory::FixedCircle, _) => "Fixed Circle",
            (ContentCategory::OngoingCircle, _) => "Ongoing Circle",
            (ContentCategory::DigitalContent, _) => "Digital Content",
        }
    }
}

pub fn generate(kind: MatchKind, rng: &mut dyn RandomSource) -> MatchCard {
    match kind {
        MatchKind::Session => live_session(rng),
        MatchKind::Circle => circle(rng),
        MatchKind::Digital => digital_content(rng),
    }
}

fn live_session(rng: &mut dyn RandomSource) -> MatchCard {
    let one_on_one = rng.coin();
    let date = (!one_on_one).then(|| future_date(rng));
    let title = pick(rng, SESSION_TITLES).to_string();
    let instructor_name = pick(rng, INSTRUCTORS).to_string();
    let instructor_tier = *pick(rng, &InstructorTier::ALL);
    let rating = draw_rating(rng);
    let review_count = rng.int_in(45, 250) as u32;
    let (duration_minutes, attendees) = if one_on_one {
        (None, None)
    } else {
        let duration = *pick(rng, &[30u32, 45, 60, 90]);
        let joined = rng.int_in(5, 15);
        let capacity = rng.int_in(10, 20);
        (Some(duration), Some(format!("{joined}/{capacity} people")))
    };
    let description = pick(rng, DESCRIPTIONS).to_string();
    let match_percentage = draw_match_percentage(rng);
    let credits = *pick(rng, &[50u32, 75, 100, 125, 150]);
    let favorited = rng.coin();

    MatchCard {
        category: ContentCategory::LiveSession,
        access: Some(if one_on_one {
            AccessKind::OneOnOne
        } else {
            AccessKind::Group
        }),
        date,
        title,
        instructor_name,
        instructor_tier,
        rating,
        review_count,
        duration_minutes,
        attendees,
        access_period: None,
        member_count: None,
        bought_count: None,
        description,
        match_percentage,
        credits,
        favorited,
    }
}

fn circle(rng: &mut dyn RandomSource) -> MatchCard {
    let fixed = rng.coin();
    let date = fixed.then(|| date_range(rng));
    let title = pick(rng, CIRCLE_TITLES).to_string();
    let instructor_name = pick(rng, INSTRUCTORS).to_string();
    let instructor_tier = *pick(rng, &InstructorTier::ALL);
    let rating = draw_rating(rng);
    let review_count = rng.int_in(80, 300) as u32;
    let access_period = fixed.then(|| pick(rng, ACCESS_PERIODS).to_string());
    let member_count = rng.int_in(15, 150) as u32;
    let description = pick(rng, DESCRIPTIONS).to_string();
    let match_percentage = draw_match_percentage(rng);
    let credits = *pick(rng, &[75u32, 100, 125, 150, 200]);
    let favorited = rng.coin();

    MatchCard {
        category: if fixed {
            ContentCategory::FixedCircle
        } else {
            ContentCategory::OngoingCircle
        },
        access: Some(AccessKind::Public),
        date,
        title,
        instructor_name,
        instructor_tier,
        rating,
        review_count,
        duration_minutes: None,
        attendees: None,
        access_period,
        member_count: Some(member_count),
        bought_count: None,
        description,
        match_percentage,
        credits,
        favorited,
    }
}

fn digital_content(rng: &mut dyn RandomSource) -> MatchCard {
    let title = pick(rng, DIGITAL_TITLES).to_string();
    let instructor_name = pick(rng, INSTRUCTORS).to_string();
    let instructor_tier = *pick(rng, &InstructorTier::ALL);
    let rating = draw_rating(rng);
    let review_count = rng.int_in(100, 500) as u32;
    let bought_count = rng.int_in(25, 200) as u32;
    let description = pick(rng, DESCRIPTIONS).to_string();
    let match_percentage = draw_match_percentage(rng);
    let credits = *pick(rng, &[25u32, 50, 75, 100]);
    let favorited = rng.coin();

    MatchCard {
        category: ContentCategory::DigitalContent,
        access: None,
        date: None,
        title,
        instructor_name,
        instructor_tier,
        rating,
        review_count,
        duration_minutes: None,
        attendees: None,
        access_period: None,
        member_count: None,
        bought_count: Some(bought_count),
        description,
        match_percentage,
        credits,
        favorited,
    }
}

fn draw_rating(rng: &mut dyn RandomSource) -> f64 {
    // Rounding to one decimal makes the 4.9 upper end reachable.
    let raw = rng.float_in(4.3, 4.9);
    (raw * 10.0).round() / 10.0
}

fn draw_match_percentage(rng: &mut dyn RandomSource) -> u8 {
    rng.int_in(75, 98) as u8
}

fn future_date(rng: &mut dyn RandomSource) -> String {
    let day = rng.int_in(1, 28);
    let month = pick(rng, MONTHS);
    let hour = rng.int_in(8, 18);
    let suffix = if hour >= 12 { "pm" } else { "am" };
    let display_hour = if hour > 12 { hour - 12 } else { hour };
    format!("{month} {day}, 2025 at {display_hour}{suffix}")
}

fn date_range(rng: &mut dyn RandomSource) -> String {
    let start_month = pick(rng, MONTHS);
    let end_month = pick(rng, MONTHS);
    let start_day = rng.int_in(1, 28);
    let end_day = rng.int_in(1, 28);
    format!("{start_month} {start_day}, 2025 - {end_month} {end_day}, 2026")
}

const MONTHS: &[&str] = &[
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const ACCESS_PERIODS: &[&str] = &[
    "Two Months Access",
    "Three Months Access",
    "Four Months Access",
];

const SESSION_TITLES: &[&str] = &[
    "Personal Growth Journey Session",
    "Mindfulness & Meditation Practice",
    "Career Development Coaching",
    "Stress Management Workshop",
    "Life Balance Consultation",
    "Confidence Building Session",
    "Relationship Dynamics Discussion",
    "Creative Expression Workshop",
    "Goal Setting & Achievement",
    "Emotional Intelligence Training",
];

const CIRCLE_TITLES: &[&str] = &[
    "7 Day Breathwork Workbook",
    "Morning Meditation Circle",
    "Wellness Warriors Community",
    "Creative Writers Collective",
    "Mindful Movement Practice",
    "Personal Development Journey",
    "Gratitude & Positivity Circle",
    "Digital Detox Challenge",
    "Self-Care Sundays",
    "Entrepreneurial Minds Network",
];

const DIGITAL_TITLES: &[&str] = &[
    "Foundations of Mobility",
    "Complete Yoga Guide",
    "Meditation Masterclass",
    "Nutrition Essentials",
    "Sleep Optimization Course",
    "Stress Relief Techniques",
    "Energy Management System",
    "Mindful Communication Skills",
    "Building Resilience",
    "Work-Life Integration",
];

const INSTRUCTORS: &[&str] = &[
    "Sarah Chen",
    "Marcus Johnson",
    "Elena Rodriguez",
    "David Park",
    "Aisha Williams",
    "James O'Connor",
    "Priya Sharma",
    "Michael Anderson",
    "Sofia Martinez",
    "Alex Thompson",
];

const DESCRIPTIONS: &[&str] = &[
    "Transform your daily practice with evidence-based techniques designed to enhance your wellbeing and personal growth journey.",
    "Join a supportive community focused on sustainable change through mindful awareness and intentional action.",
    "Discover powerful tools and strategies that will help you navigate life's challenges with greater ease and confidence.",
    "An immersive experience combining ancient wisdom with modern science to optimize your mental and physical health.",
    "Connect with like-minded individuals while exploring proven methods for lasting transformation and fulfillment.",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::{ScriptedRandom, SeededRandom};

    #[test]
    fn one_on_one_session_leaves_group_fields_empty() {
        // First draw is the coin flip: < 0.5 means one-on-one.
        let mut rng = ScriptedRandom::new([0.1]).with_fallback(0.0);
        let card = generate(MatchKind::Session, &mut rng);
        assert_eq!(card.category, ContentCategory::LiveSession);
        assert_eq!(card.access, Some(AccessKind::OneOnOne));
        assert_eq!(card.matching_label(), "1:1");
        assert!(card.date.is_none());
        assert!(card.duration_minutes.is_none());
        assert!(card.attendees.is_none());
        assert!(card.member_count.is_none());
        assert!(card.bought_count.is_none());
        assert_eq!(card.title, SESSION_TITLES[0]);
        assert_eq!(card.rating, 4.3);
        assert_eq!(card.review_count, 45);
        assert_eq!(card.match_percentage, 75);
        assert_eq!(card.credits, 50);
        assert!(card.favorited);
    }

    #[test]
    fn group_session_has_date_duration_and_attendees() {
        let mut rng = ScriptedRandom::new([0.9]).with_fallback(0.0);
        let card = generate(MatchKind::Session, &mut rng);
        assert_eq!(card.access, Some(AccessKind::Group));
        assert_eq!(card.date.as_deref(), Some("Jan 1, 2025 at 8am"));
        assert_eq!(card.duration_minutes, Some(30));
        assert_eq!(card.attendees.as_deref(), Some("5/10 people"));
        assert_eq!(card.matching_label(), "Group");
    }

    #[test]
    fn afternoon_hours_use_twelve_hour_clock() {
        // day=0.0 -> 1, month=0.99 -> Dec, hour=0.99 -> 18 -> 6pm
        let mut rng = ScriptedRandom::new([0.0, 0.99, 0.99]);
        assert_eq!(future_date(&mut rng), "Dec 1, 2025 at 6pm");
        // hour 12 stays 12pm
        let mut noon = ScriptedRandom::new([0.0, 0.0, 4.0 / 11.0 + 0.01]);
        assert_eq!(future_date(&mut noon), "Jan 1, 2025 at 12pm");
    }

    #[test]
    fn fixed_circle_has_range_and_access_period() {
        let mut rng = ScriptedRandom::new([0.2]).with_fallback(0.0);
        let card = generate(MatchKind::Circle, &mut rng);
        assert_eq!(card.category, ContentCategory::FixedCircle);
        assert_eq!(card.access, Some(AccessKind::Public));
        assert_eq!(card.date.as_deref(), Some("Jan 1, 2025 - Jan 1, 2026"));
        assert_eq!(card.access_period.as_deref(), Some("Two Months Access"));
        assert_eq!(card.member_count, Some(15));
        assert_eq!(card.review_count, 80);
        assert_eq!(card.credits, 75);
    }

    #[test]
    fn ongoing_circle_has_no_date_or_period() {
        let mut rng = ScriptedRandom::new([0.8]).with_fallback(0.0);
        let card = generate(MatchKind::Circle, &mut rng);
        assert_eq!(card.category, ContentCategory::OngoingCircle);
        assert!(card.date.is_none());
        assert!(card.access_period.is_none());
        assert!(card.member_count.is_some());
    }

    #[test]
    fn digital_content_only_has_bought_count() {
        let mut rng = ScriptedRandom::constant(0.999);
        let card = generate(MatchKind::Digital, &mut rng);
        assert_eq!(card.category, ContentCategory::DigitalContent);
        assert!(card.access.is_none());
        assert!(card.date.is_none());
        assert_eq!(card.bought_count, Some(200));
        assert_eq!(card.review_count, 500);
        assert_eq!(card.credits, 100);
        assert_eq!(card.match_percentage, 98);
        assert_eq!(card.rating, 4.9);
        assert_eq!(card.title, "Work-Life Integration");
        assert!(!card.favorited);
    }

    #[test]
    fn seeded_cards_stay_inside_declared_ranges() {
        let mut rng = SeededRandom::from_seed(7);
        for _ in 0..200 {
            for kind in MatchKind::ALL {
                let card = generate(kind, &mut rng);
                assert!((4.3..=4.9).contains(&card.rating));
                assert_eq!((card.rating * 10.0).round() / 10.0, card.rating);
                assert!((75..=98).contains(&card.match_percentage));
                assert!(DESCRIPTIONS.contains(&card.description.as_str()));
                match kind {
                    MatchKind::Session => assert!((45..=250).contains(&card.review_count)),
                    MatchKind::Circle => assert!((80..=300).contains(&card.review_count)),
                    MatchKind::Digital => assert!((100..=500).contains(&card.review_count)),
                }
            }
        }
    }

    #[test]
    fn kind_names_parse() {
        assert_eq!(MatchKind::from_name("Session"), Some(MatchKind::Session));
        assert_eq!(MatchKind::from_name("circle"), Some(MatchKind::Circle));
        assert_eq!(MatchKind::from_name("digital"), Some(MatchKind::Digital));
        assert_eq!(MatchKind::from_name("podcast"), None);
    }

    #[test]
    fn cards_serialize_with_kebab_case_enums() {
        let mut rng = ScriptedRandom::new([0.9]).with_fallback(0.0);
        let card = generate(MatchKind::Circle, &mut rng);
        let json = serde_json::to_value(&card).expect("serialize");
        assert_eq!(json["category"], "ongoing-circle");
        assert_eq!(json["access"], "public");
        assert_eq!(json["instructor_tier"], "T1");
    }
}
