use serde::{Deserialize, Serialize};

/// Stable identifier of a category, suitable for deep links
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub String);

impl CategoryId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::borrow::Borrow<str> for CategoryId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CategoryId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Stable identifier of an entry, unique across the whole catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub String);

impl EntryId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::borrow::Borrow<str> for EntryId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Localized text fields of an entry that can be searched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum TextField {
    TitleNative,
    TitleSecondary,
    PrimaryScript,
    TransliterationPrimary,
    TransliterationSecondary,
    TranslationNative,
    TranslationSecondary,
}

impl TextField {
    /// Every searchable field, in declaration order
    pub const ALL: [TextField; 7] = [
        TextField::TitleNative,
        TextField::TitleSecondary,
        TextField::PrimaryScript,
        TextField::TransliterationPrimary,
        TextField::TransliterationSecondary,
        TextField::TranslationNative,
        TextField::TranslationSecondary,
    ];

    /// Field name as it appears in catalog JSON
    #[must_use]
    pub fn json_name(self) -> &'static str {
        match self {
            Self::TitleNative => "titleNative",
            Self::TitleSecondary => "titleSecondary",
            Self::PrimaryScript => "primaryScript",
            Self::TransliterationPrimary => "transliterationPrimary",
            Self::TransliterationSecondary => "transliterationSecondary",
            Self::TranslationNative => "translationNative",
            Self::TranslationSecondary => "translationSecondary",
        }
    }
}

impl std::fmt::Display for TextField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.json_name())
    }
}

/// Fields that must be present and non-blank for a record to be valid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RequiredField {
    Id,
    PrimaryScript,
    TranslationNative,
    TranslationSecondary,
    NameNative,
    NameSecondary,
}

impl std::fmt::Display for RequiredField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Id => "id",
            Self::PrimaryScript => "primaryScript",
            Self::TranslationNative => "translationNative",
            Self::TranslationSecondary => "translationSecondary",
            Self::NameNative => "nameNative",
            Self::NameSecondary => "nameSecondary",
        };
        write!(f, "{name}")
    }
}
