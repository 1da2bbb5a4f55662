// message screening - catches questions that need a human professional

/// Terms that suggest the user needs specialized medical, legal, financial,
/// or psychological help rather than general perspectives.
const RISK_TERMS: &[&str] = &[
    "depress",
    "depressed",
    "anxiety",
    "anxious",
    "crisis",
    "suicidal",
    "suicide",
    "harm",
    "abuse",
    "legal issue",
    "medical problem",
    "emergency",
    "financial trouble",
    "therapy",
    "counseling",
    "addiction",
    "divorce",
    "loss",
    "grief",
    "trauma",
];

pub struct Screen {
    pub intercept: bool,
    pub matched: Option<&'static str>,
}

impl Screen {
    /// Scan one message for risk terms. Case-insensitive, whole words only:
    /// "depress" hits but "depressionist" does not. Multi-word terms anchor
    /// the outer boundaries; inner spacing must match exactly.
    pub fn check(text: &str) -> Self {
        let lower = text.to_lowercase();

        for term in RISK_TERMS {
            if contains_term(&lower, term) {
                return Self {
                    intercept: true,
                    matched: Some(term),
                };
            }
        }

        Self {
            intercept: false,
            matched: None,
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

// substring search with word boundaries at both ends of the term
fn contains_term(text: &str, term: &str) -> bool {
    let mut from = 0;
    while let Some(offset) = text[from..].find(term) {
        let at = from + offset;
        let end = at + term.len();

        let bounded_left = !text[..at].chars().next_back().is_some_and(is_word_char);
        let bounded_right = !text[end..].chars().next().is_some_and(is_word_char);
        if bounded_left && bounded_right {
            return true;
        }

        // step past one char, not one byte
        from = at + text[at..].chars().next().map_or(1, char::len_utf8);
    }
    false
}
