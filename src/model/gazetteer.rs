//! Entity gazetteers
//!
//! Lookup tables for the entity extractor. Everything is lowercase because
//! the transforms run over normalized text; matching is therefore
//! case-insensitive by construction and never relies on capitalization.

use rustc_hash::FxHashSet;

const GIVEN_NAMES: &[&str] = &[
    "james", "john", "robert", "michael", "william", "david", "richard", "joseph", "thomas",
    "charles", "christopher", "daniel", "matthew", "anthony", "mark", "donald", "steven",
    "paul", "andrew", "joshua", "kenneth", "kevin", "brian", "george", "edward", "ronald",
    "timothy", "jason", "jeffrey", "ryan", "jacob", "gary", "nicholas", "eric", "jonathan",
    "stephen", "larry", "justin", "scott", "brandon", "benjamin", "samuel", "gregory", "frank",
    "alexander", "patrick", "jack", "dennis", "jerry", "mary", "patricia", "jennifer", "linda",
    "elizabeth", "barbara", "susan", "jessica", "sarah", "karen", "nancy", "lisa", "betty",
    "margaret", "sandra", "ashley", "kimberly", "emily", "donna", "michelle", "dorothy",
    "carol", "amanda", "melissa", "deborah", "stephanie", "rebecca", "sharon", "laura",
    "cynthia", "kathleen", "amy", "shirley", "angela", "helen", "anna", "brenda", "pamela",
    "nicole", "emma", "olivia", "alice", "jane", "catherine", "victoria", "sophia", "grace",
    "hannah", "julia", "marie", "rose", "clara",
];

const TITLES: &[&str] = &["mr", "mrs", "ms", "dr", "prof", "sir", "lady", "lord", "captain"];

const LOCATIONS: &[&str] = &[
    "paris", "london", "berlin", "madrid", "rome", "vienna", "amsterdam", "brussels", "lisbon",
    "dublin", "moscow", "tokyo", "beijing", "shanghai", "delhi", "mumbai", "seoul", "bangkok",
    "singapore", "sydney", "melbourne", "auckland", "toronto", "vancouver", "montreal",
    "chicago", "boston", "seattle", "houston", "dallas", "miami", "atlanta", "denver",
    "philadelphia", "phoenix", "detroit", "washington", "cairo", "lagos", "nairobi",
    "johannesburg", "istanbul", "athens", "stockholm", "oslo", "copenhagen", "helsinki",
    "warsaw", "prague", "budapest", "zurich", "geneva", "munich", "hamburg", "barcelona",
    "milan", "naples", "venice", "florence", "dubai", "jerusalem", "baghdad", "tehran",
    "karachi", "jakarta", "manila", "hanoi", "lima", "bogota", "santiago", "caracas",
    "havana", "france", "germany", "spain", "italy", "portugal", "ireland", "england",
    "scotland", "wales", "russia", "china", "japan", "india", "korea", "thailand",
    "australia", "canada", "mexico", "brazil", "argentina", "chile", "peru", "egypt",
    "nigeria", "kenya", "turkey", "greece", "sweden", "norway", "denmark", "finland",
    "poland", "austria", "switzerland", "belgium", "netherlands", "ukraine", "america",
    "europe", "asia", "africa",
];

/// Locations spelled as two words; matched before single-token lookups.
const LOCATIONS_TWO_WORD: &[&str] = &[
    "new york", "los angeles", "san francisco", "las vegas", "san diego", "new orleans",
    "hong kong", "new delhi", "new zealand", "south africa", "south korea", "north korea",
    "saudi arabia", "sri lanka", "costa rica", "united states", "united kingdom",
    "great britain", "buenos aires", "mexico city", "cape town", "tel aviv", "abu dhabi",
    "kuala lumpur", "st petersburg",
];

const ORG_NAMES: &[&str] = &[
    "google", "microsoft", "nasa", "ibm", "intel", "unesco", "unicef", "nato", "interpol",
    "fbi", "cia", "bbc", "cnn", "reuters", "toyota", "samsung", "boeing", "airbus", "netflix",
    "spotify", "unilever", "nestle", "siemens", "volkswagen", "sony", "nokia", "oracle",
];

/// A word that marks the preceding noun as part of an organization name
/// ("acme corp", "first national bank").
const ORG_SUFFIXES: &[&str] = &[
    "corp", "corporation", "inc", "incorporated", "ltd", "limited", "llc", "plc", "co",
    "company", "bank", "university", "institute", "agency", "ministry", "association",
    "committee", "council", "commission", "department", "foundation", "laboratories",
    "industries", "holdings", "partners",
];

const MONTHS: &[&str] = &[
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december",
];

const WEEKDAYS: &[&str] = &[
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
];

const RELATIVE_DATES: &[&str] = &["today", "yesterday", "tomorrow", "tonight"];

/// Lowercase lookup tables for entity extraction.
#[derive(Debug, Clone)]
pub struct Gazetteer {
    given_names: FxHashSet<&'static str>,
    titles: FxHashSet<&'static str>,
    locations: FxHashSet<&'static str>,
    locations_two_word: FxHashSet<&'static str>,
    org_names: FxHashSet<&'static str>,
    org_suffixes: FxHashSet<&'static str>,
    months: FxHashSet<&'static str>,
    weekdays: FxHashSet<&'static str>,
    relative_dates: FxHashSet<&'static str>,
}

impl Default for Gazetteer {
    fn default() -> Self {
        Self::new()
    }
}

impl Gazetteer {
    pub fn new() -> Self {
        Self {
            given_names: GIVEN_NAMES.iter().copied().collect(),
            titles: TITLES.iter().copied().collect(),
            locations: LOCATIONS.iter().copied().collect(),
            locations_two_word: LOCATIONS_TWO_WORD.iter().copied().collect(),
            org_names: ORG_NAMES.iter().copied().collect(),
            org_suffixes: ORG_SUFFIXES.iter().copied().collect(),
            months: MONTHS.iter().copied().collect(),
            weekdays: WEEKDAYS.iter().copied().collect(),
            relative_dates: RELATIVE_DATES.iter().copied().collect(),
        }
    }

    pub fn is_given_name(&self, word: &str) -> bool {
        self.given_names.contains(word)
    }

    pub fn is_title(&self, word: &str) -> bool {
        self.titles.contains(word)
    }

    pub fn is_location(&self, word: &str) -> bool {
        self.locations.contains(word)
    }

    pub fn is_two_word_location(&self, pair: &str) -> bool {
        self.locations_two_word.contains(pair)
    }

    pub fn is_org_name(&self, word: &str) -> bool {
        self.org_names.contains(word)
    }

    pub fn is_org_suffix(&self, word: &str) -> bool {
        self.org_suffixes.contains(word)
    }

    pub fn is_month(&self, word: &str) -> bool {
        self.months.contains(word)
    }

    /// Weekdays and relative day words ("today") are date mentions on
    /// their own.
    pub fn is_standalone_date_word(&self, word: &str) -> bool {
        self.weekdays.contains(word) || self.relative_dates.contains(word)
    }

    /// Whether the word appears in any table (used to keep surnames from
    /// swallowing known locations or organizations).
    pub fn is_known(&self, word: &str) -> bool {
        self.is_given_name(word)
            || self.is_title(word)
            || self.is_location(word)
            || self.is_org_name(word)
            || self.is_org_suffix(word)
            || self.is_month(word)
            || self.is_standalone_date_word(word)
    }

    /// Total number of gazetteer entries, for provisioning checks.
    pub fn len(&self) -> usize {
        self.given_names.len()
            + self.titles.len()
            + self.locations.len()
            + self.locations_two_word.len()
            + self.org_names.len()
            + self.org_suffixes.len()
            + self.months.len()
            + self.weekdays.len()
            + self.relative_dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Four-digit year in the range the date extractor recognizes.
pub fn is_year(word: &str) -> bool {
    if word.len() != 4 || !word.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    matches!(word.as_bytes()[0], b'1' | b'2')
}
