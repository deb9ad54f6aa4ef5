use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("score {0} is outside 0..=100")]
pub struct ScoreError(pub u8);

// A category score, 0 to 100 inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Result<Self, ScoreError> {
        if value > Self::MAX {
            return Err(ScoreError(value));
        }
        Ok(Score(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Score {
    type Error = ScoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Score::new(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl From<Score> for f64 {
    fn from(score: Score) -> Self {
        f64::from(score.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// The four scored categories of an audit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreCategory {
    Performance,
    Seo,
    Accessibility,
    BestPractices,
}

impl ScoreCategory {
    pub const ALL: [ScoreCategory; 4] = [
        ScoreCategory::Performance,
        ScoreCategory::Seo,
        ScoreCategory::Accessibility,
        ScoreCategory::BestPractices,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ScoreCategory::Performance => "Performance",
            ScoreCategory::Seo => "SEO",
            ScoreCategory::Accessibility => "Accessibility",
            ScoreCategory::BestPractices => "Best Practices",
        }
    }
}

impl fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Scores for every category of one device profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scores {
    pub performance: Score,
    pub seo: Score,
    pub accessibility: Score,
    pub best_practices: Score,
}

impl Scores {
    pub fn new(
        performance: u8,
        seo: u8,
        accessibility: u8,
        best_practices: u8,
    ) -> Result<Self, ScoreError> {
        Ok(Scores {
            performance: Score::new(performance)?,
            seo: Score::new(seo)?,
            accessibility: Score::new(accessibility)?,
            best_practices: Score::new(best_practices)?,
        })
    }

    pub fn get(&self, category: ScoreCategory) -> Score {
        match category {
            ScoreCategory::Performance => self.performance,
            ScoreCategory::Seo => self.seo,
            ScoreCategory::Accessibility => self.accessibility,
            ScoreCategory::BestPractices => self.best_practices,
        }
    }

    /// Category/score pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (ScoreCategory, Score)> + '_ {
        ScoreCategory::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }
}
