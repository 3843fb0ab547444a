//! Selection of urban daytime routes by their title.
//!
//! Titles such as `30`, `34E`, `76U` or `41/58` are urban daytime lines,
//! `230`, `250` or `N5` are not.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDecision {
    /// Short title or express/urban flag
    Urban,
    /// Compound line such as `41/58`
    Compound,
    /// No title at all
    Missing,
    /// Known redundant line
    Excluded,
    /// Long title without `E` or `U`
    Suburban,
    /// Night line
    Night,
}

impl FilterDecision {
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Urban | Self::Compound)
    }
}

/// Classifies a route title. Pure function of its inputs.
pub fn classify(title: Option<&str>, excluded: &[String]) -> FilterDecision {
    let Some(title) = title.filter(|t| !t.is_empty()) else {
        return FilterDecision::Missing;
    };
    if excluded.iter().any(|e| e == title) {
        return FilterDecision::Excluded;
    }

    let mut decision = FilterDecision::Urban;
    if title.chars().count() > 2 && !title.contains('E') && !title.contains('U') {
        decision = FilterDecision::Suburban;
    }
    if title.contains('N') {
        decision = FilterDecision::Night;
    }
    if is_compound(title) {
        decision = FilterDecision::Compound;
    }
    decision
}

pub fn is_urban_daytime(title: Option<&str>, excluded: &[String]) -> bool {
    classify(title, excluded).is_accepted()
}

/// Titles worth a manual look: a compound line flagged as night service, or
/// characters outside of the usual line numbering.
pub fn is_ambiguous(title: &str) -> bool {
    (is_compound(title) && title.contains('N'))
        || !title.chars().all(|c| c.is_ascii_alphanumeric() || c == '/')
}

fn is_compound(title: &str) -> bool {
    let parts: Vec<&str> = title.split('/').collect();
    parts.len() == 2 && parts[1].chars().count() == 2
}
