//! Smart-matching preferences collected by the quiz screen.

use crate::core::range::RangeSelection;

macro_rules! quiz_options {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }
    };
}

quiz_options!(Gender {
    Male => "Male",
    Female => "Female",
    NoPreference => "No Preference",
    Other => "Other",
});

quiz_options!(AgeBracket {
    From18To29 => "18-29",
    From30To39 => "30-39",
    From40To49 => "40-49",
    From50To59 => "50-59",
    SixtyPlus => "60+",
    NoPreference => "No Preference",
});

quiz_options!(ProviderTier {
    T1 => "T1 (entry-level, starting out)",
    T2 => "T2 (certified or formally trained)",
    T3 => "T3 (top-rated, highly experienced)",
    NoPreference => "No Preference",
});

quiz_options!(Language {
    Something => "Something",
    Something2 => "Something2",
    Spanish => "Spanish",
    English => "English",
    French => "French",
    Greek => "Greek",
    Something3 => "Something3",
});

quiz_options!(Country {
    Something => "Something",
    Morocco => "Morocco",
    Italy => "Italy",
    Usa => "USA",
    UnitedKingdom => "United Kingdom",
    Spain => "Spain",
    Germany => "Germany",
});

quiz_options!(TimeZone {
    Zone1 => "Time zone 1",
    Zone2 => "Time zone 2",
    Zone3 => "Time zone 3",
    Zone4 => "Time zone 4",
    Zone5 => "Time zone 5",
    Zone6 => "Time zone 6",
    Zone7 => "Time zone 7",
});

quiz_options!(ServiceType {
    OneOnOne => "1 on 1 session",
    Group => "Group session",
    Circle => "Circle",
    Digital => "Digital content",
    NoPreference => "No Preference",
});

pub const CREDIT_RANGE_MIN: f64 = 0.0;
pub const CREDIT_RANGE_MAX: f64 = 600.0;
pub const CREDIT_RANGE_STEP: f64 = 1.0;
pub const DEFAULT_MIN_PRICE: f64 = 143.0;
pub const DEFAULT_MAX_PRICE: f64 = 314.0;

/// Quiz questions in screen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Question {
    Gender,
    Age,
    ProviderTier,
    Language,
    Country,
    TimeZone,
    ServiceType,
    CreditRange,
}

impl Question {
    pub const ALL: [Question; 8] = [
        Question::Gender,
        Question::Age,
        Question::ProviderTier,
        Question::Language,
        Question::Country,
        Question::TimeZone,
        Question::ServiceType,
        Question::CreditRange,
    ];

    pub fn prompt(self) -> &'static str {
        match self {
            Question::Gender => "Your preferred provider gender:",
            Question::Age => "Your preferred provider age:",
            Question::ProviderTier => "Your preferred provider tier:",
            Question::Language => "Your preferred provider's language:",
            Question::Country => "Your provider's preferred country:",
            Question::TimeZone => "Your preferred time zone:",
            Question::ServiceType => "Your preferred service type:",
            Question::CreditRange => "Price range in credits:",
        }
    }

    /// Questions with a separate "No preference" checkbox.
    pub fn has_no_preference_flag(self) -> bool {
        matches!(
            self,
            Question::Language | Question::Country | Question::TimeZone | Question::CreditRange
        )
    }

    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|q| *q == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let index = Self::ALL.iter().position(|q| *q == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Preferences {
    pub gender: Option<Gender>,
    pub age: Option<AgeBracket>,
    pub provider_tier: Option<ProviderTier>,
    pub language: Language,
    pub country: Country,
    pub time_zone: TimeZone,
    pub service_type: Option<ServiceType>,
    pub credit_range: RangeSelection,
    pub no_language: bool,
    pub no_country: bool,
    pub no_time_zone: bool,
    pub no_credit_range: bool,
    saved: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            gender: None,
            age: None,
            provider_tier: None,
            language: Language::English,
            country: Country::Usa,
            time_zone: TimeZone::Zone4,
            service_type: None,
            credit_range: RangeSelection::from_valid_parts(
                CREDIT_RANGE_MIN,
                CREDIT_RANGE_MAX,
                CREDIT_RANGE_STEP,
                DEFAULT_MIN_PRICE,
                DEFAULT_MAX_PRICE,
            ),
            no_language: false,
            no_country: false,
            no_time_zone: false,
            no_credit_range: false,
            saved: false,
        }
    }
}

impl Preferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save(&mut self) {
        self.saved = true;
    }

    pub fn is_saved(&self) -> bool {
        self.saved
    }

    /// Steps the answer to `question` through its options. Unanswered
    /// questions start at the first (or last, going backwards) option.
    pub fn cycle(&mut self, question: Question, forward: bool) {
        match question {
            Question::Gender => self.gender = Some(step(Gender::ALL, self.gender, forward)),
            Question::Age => self.age = Some(step(AgeBracket::ALL, self.age, forward)),
            Question::ProviderTier => {
                self.provider_tier = Some(step(ProviderTier::ALL, self.provider_tier, forward))
            }
            Question::Language => {
                self.language = step(Language::ALL, Some(self.language), forward)
            }
            Question::Country => self.country = step(Country::ALL, Some(self.country), forward),
            Question::TimeZone => {
                self.time_zone = step(TimeZone::ALL, Some(self.time_zone), forward)
            }
            Question::ServiceType => {
                self.service_type = Some(step(ServiceType::ALL, self.service_type, forward))
            }
            Question::CreditRange => {}
        }
    }

    /// Flips the "No preference" checkbox. Returns the new state, or `None`
    /// when the question has no checkbox.
    pub fn toggle_no_preference(&mut self, question: Question) -> Option<bool> {
        let flag = match question {
            Question::Language => &mut self.no_language,
            Question::Country => &mut self.no_country,
            Question::TimeZone => &mut self.no_time_zone,
            Question::CreditRange => &mut self.no_credit_range,
            _ => return None,
        };
        *flag = !*flag;
        Some(*flag)
    }

    pub fn no_preference(&self, question: Question) -> bool {
        match question {
            Question::Language => self.no_language,
            Question::Country => self.no_country,
            Question::TimeZone => self.no_time_zone,
            Question::CreditRange => self.no_credit_range,
            _ => false,
        }
    }

    /// Display text for the current answer.
    pub fn answer(&self, question: Question) -> String {
        if self.no_preference(question) {
            return "No preference".to_string();
        }
        let label = match question {
            Question::Gender => self.gender.map(Gender::label),
            Question::Age => self.age.map(AgeBracket::label),
            Question::ProviderTier => self.provider_tier.map(ProviderTier::label),
            Question::Language => Some(self.language.label()),
            Question::Country => Some(self.country.label()),
            Question::TimeZone => Some(self.time_zone.label()),
            Question::ServiceType => self.service_type.map(ServiceType::label),
            Question::CreditRange => {
                return format!(
                    "{} - {} credits",
                    self.credit_range.lower(),
                    self.credit_range.upper()
                )
            }
        };
        label.unwrap_or("Not answered").to_string()
    }
}

fn step<T: Copy + PartialEq>(all: &[T], current: Option<T>, forward: bool) -> T {
    let len = all.len();
    let next = match current.and_then(|value| all.iter().position(|item| *item == value)) {
        Some(index) if forward => (index + 1) % len,
        Some(index) => (index + len - 1) % len,
        None if forward => 0,
        None => len - 1,
    };
    all[next]
}
