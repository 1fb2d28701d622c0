/// Dataset loading and one-time validation.
///
/// The catalog is constructed exactly once at startup, either from the
/// dataset embedded in the binary or from a JSON file of the same shape.
/// Validation happens here, not per-query:
/// - structural shape is enforced by serde (all fields mandatory),
/// - ids must be unique, lowercase URL slugs (hard error),
/// - empty display text is kept but logged (soft defect).
///
/// Category membership is deliberately NOT validated: the catalog groups
/// and filters on the literal category value, and unknown codes merely
/// display as themselves.
use std::collections::HashSet;
use std::path::Path;

use regex::Regex;
use sha2::{Digest, Sha256};
use tracing::warn;

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::model::{category_display_name, Category, Skill, CATEGORY_DISPLAY_NAMES};

const BUILTIN_DATASET: &str = include_str!("../data/skills.json");

/// Load the dataset embedded in the binary.
pub fn load_builtin() -> Result<Catalog, CatalogError> {
    load_catalog(BUILTIN_DATASET)
}

/// Load a dataset from a JSON file with the same shape as the embedded one.
pub fn load_from_path(path: &Path) -> Result<Catalog, CatalogError> {
    let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.display().to_string(),
        source,
    })?;
    load_catalog(&text)
}

/// Parse and validate a JSON skill list into a `Catalog`.
pub fn load_catalog(text: &str) -> Result<Catalog, CatalogError> {
    let id_re = Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("valid regex");

    let skills: Vec<Skill> = serde_json::from_str(text)?;

    let mut seen: HashSet<&str> = HashSet::with_capacity(skills.len());
    for skill in &skills {
        if !id_re.is_match(&skill.id) {
            return Err(CatalogError::InvalidId(skill.id.clone()));
        }
        if !seen.insert(skill.id.as_str()) {
            return Err(CatalogError::DuplicateId(skill.id.clone()));
        }
        if skill.name.is_empty() || skill.description.is_empty() {
            warn!(id = %skill.id, "skill has empty display text");
        }
        if !CATEGORY_DISPLAY_NAMES
            .iter()
            .any(|(code, _)| *code == skill.category)
        {
            warn!(
                id = %skill.id,
                category = %skill.category,
                "unknown category code, will display as-is"
            );
        }
    }

    // Distinct categories in first-occurrence order, counting as we go.
    let mut categories: Vec<Category> = Vec::new();
    for skill in &skills {
        match categories
            .iter_mut()
            .find(|category| category.code == skill.category)
        {
            Some(category) => category.skill_count += 1,
            None => categories.push(Category {
                code: skill.category.clone(),
                display_name: category_display_name(&skill.category).to_string(),
                skill_count: 1,
            }),
        }
    }

    let revision = dataset_revision(text);
    Ok(Catalog::new(skills, categories, revision))
}

/// SHA-256 hex digest of the raw dataset text, used as the catalog revision.
fn dataset_revision(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, category: &str) -> String {
        format!(
            r#"{{
                "id": "{id}",
                "name": "技能",
                "nameEn": "Skill",
                "description": "desc",
                "icon": "🧩",
                "category": "{category}",
                "scenarios": [],
                "features": [],
                "examples": [],
                "usageGuide": ""
            }}"#
        )
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = format!("[{},{}]", record("dup", "planning"), record("dup", "debugging"));
        let err = load_catalog(&json).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "dup"));
    }

    #[test]
    fn rejects_non_slug_ids() {
        for bad in ["Upper-Case", "has space", "trailing-", "-leading", "", "中文"] {
            let json = format!("[{}]", record(bad, "planning"));
            let err = load_catalog(&json).unwrap_err();
            assert!(
                matches!(err, CatalogError::InvalidId(_)),
                "expected InvalidId for {bad:?}"
            );
        }
    }

    #[test]
    fn rejects_missing_fields() {
        let err = load_catalog(r#"[{"id": "only-id"}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn keeps_unknown_categories_verbatim() {
        let json = format!("[{}]", record("odd-one", "tooling"));
        let catalog = load_catalog(&json).expect("unknown category is not an error");
        assert_eq!(catalog.categories().len(), 1);
        assert_eq!(catalog.categories()[0].code, "tooling");
        assert_eq!(catalog.categories()[0].display_name, "tooling");
    }

    #[test]
    fn revision_is_a_stable_sha256_digest() {
        let json = format!("[{}]", record("one", "planning"));
        let first = load_catalog(&json).unwrap();
        let second = load_catalog(&json).unwrap();
        assert_eq!(first.revision(), second.revision());
        assert_eq!(first.revision().len(), 64);
        assert!(first.revision().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn missing_file_surfaces_the_path() {
        let err = load_from_path(Path::new("/nonexistent/skills.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Read { path, .. } if path.contains("nonexistent")));
    }

    /// The dataset shipped in the binary must always load.
    #[test]
    fn builtin_dataset_loads_and_covers_all_categories() {
        let catalog = load_builtin().expect("embedded dataset is valid");
        assert!(catalog.len() >= 12, "expected at least 12 skills, got {}", catalog.len());

        let codes: Vec<&str> = catalog
            .categories()
            .iter()
            .map(|category| category.code.as_str())
            .collect();
        for expected in [
            "planning",
            "development",
            "optimization",
            "debugging",
            "integration",
            "documentation",
        ] {
            assert!(codes.contains(&expected), "missing category {expected}");
        }

        for skill in catalog.skills() {
            assert_eq!(catalog.get(&skill.id), Some(skill));
            assert!(!skill.name_en.is_empty(), "{} has no English name", skill.id);
            assert!(!skill.scenarios.is_empty(), "{} has no scenarios", skill.id);
        }

        let total: usize = catalog.category_stats().iter().map(|(_, n)| n).sum();
        assert_eq!(total, catalog.len());
    }
}
