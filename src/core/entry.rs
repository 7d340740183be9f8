use serde::{Deserialize, Serialize};

use crate::core::types::{EntryId, RequiredField, TextField};
use crate::utils::text::is_blank;

/// A single supplication with its localized renderings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Catalog-wide unique identifier (e.g. "daily-7")
    #[serde(default)]
    pub id: EntryId,

    /// Short label in the principal display language
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_native: Option<String>,

    /// Short label in the second display language
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_secondary: Option<String>,

    /// Source-language text
    #[serde(default)]
    pub primary_script: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transliteration_primary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transliteration_secondary: Option<String>,

    /// Translation in the principal display language
    #[serde(default)]
    pub translation_native: String,

    /// Translation in the second display language
    #[serde(default)]
    pub translation_secondary: String,

    /// Provenance note, kept verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,
}

impl Entry {
    pub fn new(
        id: impl Into<String>,
        primary_script: impl Into<String>,
        translation_native: impl Into<String>,
        translation_secondary: impl Into<String>,
    ) -> Self {
        Self {
            id: EntryId::new(id),
            title_native: None,
            title_secondary: None,
            primary_script: primary_script.into(),
            transliteration_primary: None,
            transliteration_secondary: None,
            translation_native: translation_native.into(),
            translation_secondary: translation_secondary.into(),
            citation: None,
        }
    }

    #[must_use]
    pub fn with_titles(mut self, native: impl Into<String>, secondary: impl Into<String>) -> Self {
        self.title_native = Some(native.into());
        self.title_secondary = Some(secondary.into());
        self
    }

    #[must_use]
    pub fn with_transliterations(
        mut self,
        primary: impl Into<String>,
        secondary: Option<String>,
    ) -> Self {
        self.transliteration_primary = Some(primary.into());
        self.transliteration_secondary = secondary;
        self
    }

    #[must_use]
    pub fn with_citation(mut self, citation: impl Into<String>) -> Self {
        self.citation = Some(citation.into());
        self
    }

    /// Text of a searchable field, if the entry has it
    #[must_use]
    pub fn field(&self, field: TextField) -> Option<&str> {
        match field {
            TextField::TitleNative => self.title_native.as_deref(),
            TextField::TitleSecondary => self.title_secondary.as_deref(),
            TextField::PrimaryScript => Some(&self.primary_script),
            TextField::TransliterationPrimary => self.transliteration_primary.as_deref(),
            TextField::TransliterationSecondary => self.transliteration_secondary.as_deref(),
            TextField::TranslationNative => Some(&self.translation_native),
            TextField::TranslationSecondary => Some(&self.translation_secondary),
        }
    }

    /// Required fields that are empty after trimming, in declaration order
    #[must_use]
    pub fn blank_required_fields(&self) -> Vec<RequiredField> {
        let mut blank = Vec::new();
        if is_blank(&self.id.0) {
            blank.push(RequiredField::Id);
        }
        if is_blank(&self.primary_script) {
            blank.push(RequiredField::PrimaryScript);
        }
        if is_blank(&self.translation_native) {
            blank.push(RequiredField::TranslationNative);
        }
        if is_blank(&self.translation_secondary) {
            blank.push(RequiredField::TranslationSecondary);
        }
        blank
    }

    /// Display label, falling back from secondary title to native title to id
    #[must_use]
    pub fn label(&self) -> &str {
        self.title_secondary
            .as_deref()
            .or(self.title_native.as_deref())
            .unwrap_or(&self.id.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_required_fields() {
        let entry = Entry::new("e1", "  ", "terjemahan", "\t");
        assert_eq!(
            entry.blank_required_fields(),
            vec![RequiredField::PrimaryScript, RequiredField::TranslationSecondary]
        );

        let ok = Entry::new("e2", "بِسْمِ اللَّهِ", "Dengan nama Allah", "In the name of Allah");
        assert!(ok.blank_required_fields().is_empty());
    }

    #[test]
    fn test_field_access() {
        let entry = Entry::new("e1", "script", "native", "secondary").with_titles("Judul", "Title");
        assert_eq!(entry.field(TextField::TitleSecondary), Some("Title"));
        assert_eq!(entry.field(TextField::TransliterationPrimary), None);
        assert_eq!(entry.field(TextField::PrimaryScript), Some("script"));
    }

    #[test]
    fn test_json_uses_camel_case_and_skips_absent_optionals() {
        let entry = Entry::new("e1", "script", "native", "secondary").with_citation("Bukhari");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["primaryScript"], "script");
        assert_eq!(json["citation"], "Bukhari");
        assert!(json.get("titleNative").is_none());
    }

    #[test]
    fn test_label_fallback() {
        let bare = Entry::new("e1", "s", "n", "t");
        assert_eq!(bare.label(), "e1");
        let titled = bare.clone().with_titles("Judul", "Title");
        assert_eq!(titled.label(), "Title");
    }
}
