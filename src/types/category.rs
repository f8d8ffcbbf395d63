use std::fmt;
use std::str::FromStr;

/// News category used to scope a source refresh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    General,
    Technology,
    Business,
    Entertainment,
    Sports,
    Science,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category `{0}`")]
pub struct UnknownCategory(pub String);

impl Category {
    pub const ALL: [Self; 6] = [
        Self::General,
        Self::Technology,
        Self::Business,
        Self::Entertainment,
        Self::Sports,
        Self::Science,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Technology => "technology",
            Self::Business => "business",
            Self::Entertainment => "entertainment",
            Self::Sports => "sports",
            Self::Science => "science",
        }
    }

    pub fn from_slug(s: &str) -> Option<Self> {
        match s {
            "general" => Some(Self::General),
            "technology" => Some(Self::Technology),
            "business" => Some(Self::Business),
            "entertainment" => Some(Self::Entertainment),
            "sports" => Some(Self::Sports),
            "science" => Some(Self::Science),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::General => "Общие",
            Self::Technology => "Технологии",
            Self::Business => "Бизнес",
            Self::Entertainment => "Развлечения",
            Self::Sports => "Спорт",
            Self::Science => "Наука",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slug(s).ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
