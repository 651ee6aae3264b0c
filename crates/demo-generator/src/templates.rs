//! Static templates the generator draws from.
//!
//! Values are intentionally plausible rather than exhaustive; the generator
//! combines them with a seeded RNG to produce varied datasets.

/// Survey name templates. When more surveys are requested than templates
/// exist, names cycle with a numeric suffix.
pub const SURVEY_NAMES: &[&str] = &[
    "Customer Satisfaction Survey",
    "Employee Engagement Survey",
    "Product Feedback Survey",
    "Market Research Survey",
    "Website Usability Survey",
];

/// Rating question templates: (headline, range, left label, right label).
pub const RATING_QUESTIONS: &[(&str, u8, &str, &str)] = &[
    (
        "How satisfied are you with our service?",
        5,
        "Very Dissatisfied",
        "Very Satisfied",
    ),
    (
        "How likely are you to recommend us to others?",
        10,
        "Not at all likely",
        "Extremely likely",
    ),
    ("Rate the quality of our product", 7, "Poor", "Excellent"),
];

/// Multiple-choice question templates: (headline, choices).
pub const CHOICE_QUESTIONS: &[(&str, &[&str])] = &[
    (
        "Which features do you use most often?",
        &["Feature A", "Feature B", "Feature C", "Feature D"],
    ),
    (
        "How did you hear about us?",
        &[
            "Social Media",
            "Search Engine",
            "Friend/Colleague",
            "Advertisement",
            "Other",
        ],
    ),
    (
        "What is your primary role?",
        &[
            "Individual Contributor",
            "Manager",
            "Director",
            "Executive",
        ],
    ),
];

/// Open-text question templates: (headline, placeholder).
pub const OPEN_QUESTIONS: &[(&str, &str)] = &[
    ("What do you like most about our service?", "Your thoughts..."),
    ("What can we improve?", "Your suggestions..."),
    ("Additional comments or feedback?", "Any other feedback..."),
];

/// Thank-you card templates: (headline, subheader).
pub const THANK_YOU_CARDS: &[(&str, &str)] = &[
    ("Thank You!", "Your feedback helps us improve."),
    ("Survey Complete", "We appreciate you taking the time."),
    (
        "Thanks for your feedback!",
        "Your responses are valuable to us.",
    ),
];

pub const FIRST_NAMES: &[&str] = &[
    "Alex", "Jordan", "Taylor", "Morgan", "Casey", "Riley", "Quinn", "Avery", "Skyler", "Dakota",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith",
    "Johnson",
    "Williams",
    "Brown",
    "Jones",
    "Garcia",
    "Miller",
    "Davis",
    "Rodriguez",
    "Martinez",
];

pub const COMPANIES: &[&str] = &[
    "TechCorp",
    "InnovateInc",
    "DigitalSolutions",
    "FutureLabs",
    "CloudSystems",
];

pub const EMAIL_DOMAINS: &[&str] = &["com", "io", "co", "ai", "dev"];

/// Answer pool for open-text questions.
pub const OPEN_ANSWERS: &[&str] = &[
    "Great service, very satisfied with the overall experience.",
    "Could use some improvement in response time, but generally good.",
    "Excellent product, easy to use and intuitive interface.",
    "The interface could be more intuitive, but functionality is solid.",
    "Very helpful customer support team, very responsive.",
    "Some features are missing that would be really useful.",
    "Overall good experience, would recommend to colleagues.",
    "The product meets our needs effectively, good value for money.",
    "There's a learning curve but once you get used to it, it's powerful.",
    "Reliable service with good uptime and performance.",
];
