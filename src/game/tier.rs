//! End-of-game rating

use std::fmt;

/// Rating awarded for a final score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    KeepPracticing,
    Good,
    Great,
    Fantastic,
}

impl Tier {
    /// Rate a score; boundaries are inclusive
    ///
    /// # Examples
    /// ```
    /// use battlewords::game::Tier;
    ///
    /// assert_eq!(Tier::from_score(42), Tier::Fantastic);
    /// assert_eq!(Tier::from_score(41).to_string(), "Great");
    /// ```
    #[must_use]
    pub const fn from_score(score: u32) -> Self {
        match score {
            42.. => Self::Fantastic,
            38..=41 => Self::Great,
            34..=37 => Self::Good,
            _ => Self::KeepPracticing,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fantastic => "Fantastic",
            Self::Great => "Great",
            Self::Good => "Good",
            Self::KeepPracticing => "Keep practicing",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
