//! The [`Recipe`] record and the [`RecipeDraft`] payload it is built from.
//!
//! A draft carries only client-controlled content. The store turns a draft
//! into a recipe by assigning an id and a publication timestamp, and later
//! replaces the content of an existing recipe from another draft without
//! touching those two fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;
use crate::id::RecipeId;

/// A stored recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Store-assigned identifier, immutable after creation.
    pub id: RecipeId,
    /// Display name. Not unique.
    pub name: String,
    /// Free-text labels used for search. Case is kept as given.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub instructions: Vec<String>,
    /// Creation instant. Updates leave it unchanged.
    pub published_at: DateTime<Utc>,
}

/// Client-supplied recipe content, used by both create and update.
///
/// Unknown fields (including `id` and `publishedAt`) are ignored during
/// deserialization, so a full recipe body is accepted as a draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub instructions: Vec<String>,
}

impl RecipeDraft {
    /// Creates a draft with the given name and empty sequences.
    pub fn new(name: impl Into<String>) -> Self {
        RecipeDraft {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_instructions<I, S>(mut self, instructions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.instructions = instructions.into_iter().map(Into::into).collect();
        self
    }

    /// Checks the draft can be stored.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(())
    }
}

impl Recipe {
    /// Builds a recipe from a draft plus the store-assigned id and timestamp.
    pub fn from_draft(id: RecipeId, draft: RecipeDraft, published_at: DateTime<Utc>) -> Self {
        Recipe {
            id,
            name: draft.name,
            tags: draft.tags,
            ingredients: draft.ingredients,
            instructions: draft.instructions,
            published_at,
        }
    }

    /// Replaces all content fields with those of `draft`.
    ///
    /// `id` and `published_at` are left untouched.
    pub fn replace_content(&mut self, draft: RecipeDraft) {
        self.name = draft.name;
        self.tags = draft.tags;
        self.ingredients = draft.ingredients;
        self.instructions = draft.instructions;
    }

    /// True if any tag contains `query`, ignoring case.
    ///
    /// An empty query matches every recipe, including one with no tags.
    pub fn has_tag_matching(&self, query: &str) -> bool {
        self.has_tag_matching_folded(&fold_case(query))
    }

    /// Like [`has_tag_matching`](Self::has_tag_matching), for a query that
    /// has already been through [`fold_case`].
    pub fn has_tag_matching_folded(&self, folded_query: &str) -> bool {
        if folded_query.is_empty() {
            return true;
        }
        self.tags
            .iter()
            .any(|tag| fold_case(tag).contains(folded_query))
    }
}

/// Folds case one character at a time, without looking at neighbours.
///
/// Each character goes through its uppercase and then its lowercase mapping,
/// so `Σ`, `σ` and `ς` all fold to `σ`. Because no character's fold depends
/// on its context, the fold of a substring is always a substring of the
/// fold of the whole string.
pub fn fold_case(s: &str) -> String {
    s.chars()
        .flat_map(char::to_uppercase)
        .flat_map(char::to_lowercase)
        .collect()
}

// Seed files written by other tools encode empty sequences as `null`.
fn nullable_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn soup() -> Recipe {
        let draft = RecipeDraft::new("Soup")
            .with_tags(["Dinner", "Easy"])
            .with_ingredients(["Water"])
            .with_instructions(["Boil"]);
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        Recipe::from_draft(RecipeId::from("r1"), draft, at)
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_value(soup()).unwrap();
        assert_eq!(json["id"], "r1");
        assert_eq!(json["name"], "Soup");
        assert_eq!(json["tags"][1], "Easy");
        assert_eq!(json["publishedAt"], "2024-03-01T12:00:00Z");
        assert!(json.get("published_at").is_none());
    }

    #[test]
    fn draft_ignores_id_and_published_at() {
        let draft: RecipeDraft = serde_json::from_str(
            r#"{"id":"abc","name":"Soup","tags":["Dinner"],"publishedAt":"2020-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(draft.name, "Soup");
        assert_eq!(draft.tags, vec!["Dinner"]);
        assert!(draft.ingredients.is_empty());
    }

    #[test]
    fn null_sequences_decode_as_empty() {
        let recipe: Recipe = serde_json::from_str(
            r#"{"id":"x","name":"Toast","tags":null,"ingredients":null,"instructions":["Toast it"],"publishedAt":"2021-01-17T16:28:49.000000002+01:00"}"#,
        )
        .unwrap();
        assert!(recipe.tags.is_empty());
        assert!(recipe.ingredients.is_empty());
        assert_eq!(recipe.instructions.len(), 1);
        assert_eq!(
            recipe.published_at.naive_utc().date(),
            chrono::NaiveDate::from_ymd_opt(2021, 1, 17).unwrap()
        );
    }

    #[test]
    fn validate_rejects_blank_name() {
        assert_eq!(RecipeDraft::new("").validate(), Err(ValidationError::EmptyName));
        assert_eq!(RecipeDraft::new("  \t").validate(), Err(ValidationError::EmptyName));
        assert!(RecipeDraft::new("Soup").validate().is_ok());
    }

    #[test]
    fn replace_content_keeps_identity() {
        let mut recipe = soup();
        let published = recipe.published_at;
        recipe.replace_content(
            RecipeDraft::new("Soup v2")
                .with_tags(["Dinner"])
                .with_ingredients(["Water", "Salt"]),
        );
        assert_eq!(recipe.id, RecipeId::from("r1"));
        assert_eq!(recipe.published_at, published);
        assert_eq!(recipe.name, "Soup v2");
        assert_eq!(recipe.tags, vec!["Dinner"]);
        assert!(recipe.instructions.is_empty());
    }

    #[test]
    fn tag_search_is_case_insensitive() {
        let recipe = soup();
        assert!(recipe.has_tag_matching("easy"));
        assert!(recipe.has_tag_matching("DIN"));
        assert!(recipe.has_tag_matching("ne"));
        assert!(!recipe.has_tag_matching("lunch"));
    }

    #[test]
    fn word_final_sigma_matches_any_sigma() {
        let mut recipe = soup();
        recipe.tags = vec!["ΚΡΕΑΣ".to_string()];
        assert!(recipe.has_tag_matching("Σ"));
        assert!(recipe.has_tag_matching("σ"));
        assert!(recipe.has_tag_matching("ας"));
        assert!(recipe.has_tag_matching("ΕΑΣ"));
        assert!(!recipe.has_tag_matching("ψ"));

        recipe.tags = vec!["κρέας".to_string()];
        assert!(recipe.has_tag_matching("ΑΣ"));
    }

    #[test]
    fn fold_case_is_per_character() {
        assert_eq!(fold_case("ΚΡΕΑΣ"), "κρεασ");
        assert_eq!(fold_case("Straße"), "strasse");
        assert_eq!(fold_case("Easy"), "easy");
    }

    #[test]
    fn empty_query_matches_untagged_recipe() {
        let mut recipe = soup();
        recipe.tags.clear();
        assert!(recipe.has_tag_matching(""));
        assert!(!recipe.has_tag_matching("a"));
    }

    proptest! {
        #[test]
        fn any_substring_of_a_tag_matches(
            tag in "[a-zA-ZäöüÄÖÜßα-ωΑ-Ωа-яА-Я ]{1,16}",
            start in 0usize..16,
            len in 0usize..16,
            upper in any::<bool>(),
        ) {
            let chars: Vec<char> = tag.chars().collect();
            let start = start.min(chars.len());
            let end = (start + len).min(chars.len());
            let needle: String = chars[start..end].iter().collect();
            let needle = if upper { needle.to_uppercase() } else { needle.to_lowercase() };

            let mut recipe = soup();
            recipe.tags = vec![tag.clone()];
            prop_assert!(recipe.has_tag_matching(&needle));
        }
    }
}
