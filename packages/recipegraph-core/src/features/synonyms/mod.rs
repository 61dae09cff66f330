// Rule-based synonym generation
//
// Derives alternate names for recipe and ingredient display names from
// fixed alias tables, then classifies each candidate by language. Pure with
// respect to the tables: the same input always yields the same records.

mod tables;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::shared::models::SynonymRecord;
pub use tables::{COOKING_METHOD_ALIASES, INGREDIENT_ALIASES, REGIONAL_STYLE_ALIASES};

/// Suffix meaning "method of preparation"; stripped in recipe-name rule 1
const PREPARATION_SUFFIX: &str = "的做法";

/// Templated variants appended to the stripped base name
const PREPARATION_VARIANTS: [&str; 2] = ["制作方法", "烹饪方法"];

/// Fraction of Latin-script characters above which a term is tagged English
const ENGLISH_RATIO_THRESHOLD: f64 = 0.7;

static LATIN_CHAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z\s-]").unwrap());

/// Derives synonyms from fixed rule tables
#[derive(Debug, Default)]
pub struct SynonymGenerator;

impl SynonymGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Synonyms for a recipe display name
    ///
    /// 1. Strip a trailing 的做法 and add the base plus templated variants.
    /// 2. For each cooking-method table entry contained in the name,
    ///    substitute each alias at the first occurrence.
    /// 3. Apply the same substitution independently for the ingredient and
    ///    regional-style tables, always against the original name.
    /// 4. Deduplicate (first-seen order kept for deterministic output).
    /// 5. Classify each candidate's language.
    pub fn for_recipe_name(&self, name: &str) -> Vec<SynonymRecord> {
        let mut candidates: Vec<String> = Vec::new();

        if let Some(base) = name.strip_suffix(PREPARATION_SUFFIX) {
            if !base.is_empty() {
                candidates.push(base.to_string());
                for variant in PREPARATION_VARIANTS {
                    candidates.push(format!("{}{}", base, variant));
                }
            }
        }

        for table in [
            COOKING_METHOD_ALIASES,
            INGREDIENT_ALIASES,
            REGIONAL_STYLE_ALIASES,
        ] {
            candidates.extend(substitute_aliases(name, table));
        }

        dedup_preserving_order(candidates)
            .into_iter()
            .map(|term| classify(term))
            .collect()
    }

    /// Synonyms for an ingredient display name: pure table lookup,
    /// absent entries yield an empty list
    pub fn for_ingredient_name(&self, name: &str) -> Vec<SynonymRecord> {
        INGREDIENT_ALIASES
            .iter()
            .find(|(ingredient, _)| *ingredient == name)
            .map(|(_, aliases)| {
                aliases
                    .iter()
                    .map(|alias| classify(alias.to_string()))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Substring substitution: for every table entry contained in `name`,
/// replace its first occurrence with each alias distinct from the entry
fn substitute_aliases(name: &str, table: &[(&str, &[&str])]) -> Vec<String> {
    let mut out = Vec::new();
    for (original, aliases) in table {
        if !name.contains(original) {
            continue;
        }
        for alias in *aliases {
            if alias != original {
                out.push(name.replacen(original, alias, 1));
            }
        }
    }
    out
}

fn dedup_preserving_order(candidates: Vec<String>) -> Vec<String> {
    let mut seen = ahash::AHashSet::new();
    candidates
        .into_iter()
        .filter(|c| seen.insert(c.clone()))
        .collect()
}

/// Language classification
///
/// Latin ratio is computed over characters, not bytes; an empty term is
/// classified as Chinese to avoid dividing by zero.
fn classify(term: String) -> SynonymRecord {
    let total = term.chars().count();
    if total == 0 {
        return SynonymRecord::zh(term);
    }
    let latin = LATIN_CHAR.find_iter(&term).count();
    if latin as f64 / total as f64 > ENGLISH_RATIO_THRESHOLD {
        SynonymRecord::en(term)
    } else {
        // CJK or mixed below the threshold; Chinese is the default tag
        SynonymRecord::zh(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(records: &[SynonymRecord]) -> Vec<&str> {
        records.iter().map(|r| r.term.as_str()).collect()
    }

    #[test]
    fn test_preparation_suffix_stripped() {
        let generator = SynonymGenerator::new();
        let records = generator.for_recipe_name("红烧茄子的做法");
        let terms = terms(&records);

        assert!(terms.contains(&"红烧茄子"));
        assert!(terms.contains(&"红烧茄子制作方法"));
        assert!(terms.contains(&"红烧茄子烹饪方法"));
    }

    #[test]
    fn test_method_substitution_against_original_name() {
        let generator = SynonymGenerator::new();
        let records = generator.for_recipe_name("红烧茄子的做法");
        let terms = terms(&records);

        // 红烧 → braised substituted into the original name, not the base
        assert!(terms.contains(&"braised茄子的做法"));
        assert!(terms.contains(&"红焖茄子的做法"));
        // Ingredient table applies independently against the original name
        assert!(terms.contains(&"红烧eggplant的做法"));
    }

    #[test]
    fn test_mixed_script_candidate_below_threshold_is_chinese() {
        let generator = SynonymGenerator::new();
        let records = generator.for_recipe_name("红烧茄子的做法");

        // "braised茄子的做法": 7 Latin chars of 12 total = 0.583, not > 0.7
        let braised = records
            .iter()
            .find(|r| r.term == "braised茄子的做法")
            .unwrap();
        assert_eq!(braised.language, "zh");
        assert_eq!(braised.language_code, "zh-CN");
    }

    #[test]
    fn test_pure_latin_candidate_is_english() {
        // "green pepper" for 青椒: all chars match [A-Za-z\s-]
        let generator = SynonymGenerator::new();
        let records = generator.for_ingredient_name("青椒");
        let english = records.iter().find(|r| r.term == "green pepper").unwrap();
        assert_eq!(english.language, "en");
        assert_eq!(english.language_code, "en-US");
    }

    #[test]
    fn test_threshold_arithmetic_is_strict() {
        // "tofu五": 4 Latin of 5 chars = 0.8 > 0.7 → English despite the
        // trailing ideograph
        let record = classify("tofu五".to_string());
        assert_eq!(record.language, "en");

        // "egg蛋蛋": 3 of 5 = 0.6 → Chinese
        let record = classify("egg蛋蛋".to_string());
        assert_eq!(record.language, "zh");
    }

    #[test]
    fn test_empty_term_classified_without_panic() {
        let record = classify(String::new());
        assert_eq!(record.language, "zh");
        assert_eq!(record.language_code, "zh-CN");
    }

    #[test]
    fn test_ingredient_lookup_is_closed_world() {
        let generator = SynonymGenerator::new();
        assert!(generator.for_ingredient_name("不存在的食材").is_empty());

        let potato = generator.for_ingredient_name("土豆");
        let terms = terms(&potato);
        assert_eq!(terms, vec!["马铃薯", "potato", "洋芋"]);
    }

    #[test]
    fn test_generator_is_pure() {
        let generator = SynonymGenerator::new();
        let first = generator.for_ingredient_name("西红柿");
        let second = generator.for_ingredient_name("西红柿");
        assert_eq!(first, second);

        let first = generator.for_recipe_name("川味土豆炖牛肉");
        let second = generator.for_recipe_name("川味土豆炖牛肉");
        assert_eq!(first, second);
    }

    #[test]
    fn test_candidates_deduplicated() {
        let generator = SynonymGenerator::new();
        let records = generator.for_recipe_name("清炒土豆");
        let mut terms: Vec<&str> = records.iter().map(|r| r.term.as_str()).collect();
        let before = terms.len();
        terms.sort();
        terms.dedup();
        assert_eq!(terms.len(), before);
    }

    #[test]
    fn test_substring_over_matching_is_accepted() {
        // 蒸 inside 清蒸 or 炖 inside longer names: substitution happens on
        // plain substring containment, by contract
        let generator = SynonymGenerator::new();
        let records = generator.for_recipe_name("炖牛肉");
        let terms = terms(&records);
        assert!(terms.contains(&"stewed牛肉"));
        assert!(terms.contains(&"煲牛肉"));
        assert!(terms.contains(&"炖beef"));
    }

    #[test]
    fn test_no_rules_match_yields_empty() {
        let generator = SynonymGenerator::new();
        assert!(generator.for_recipe_name("一道无名菜").is_empty());
    }
}
