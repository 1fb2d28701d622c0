/// The catalog query module.
///
/// A `Catalog` owns the validated skill collection and answers pure queries
/// over it. The collection is immutable for the lifetime of the process:
/// there is no insert, update, or delete anywhere on this type, and every
/// query returns identical results on repeated calls.
///
/// Absence is never an error: `get` returns `None`, the filtering queries
/// return empty vectors. Only loading (see `loader`) can fail.
use crate::model::{Category, Skill};

#[derive(Debug)]
pub struct Catalog {
    skills: Vec<Skill>,
    /// Distinct categories in first-occurrence order, with counts.
    categories: Vec<Category>,
    /// SHA-256 hex digest of the raw dataset text.
    revision: String,
}

impl Catalog {
    pub(crate) fn new(skills: Vec<Skill>, categories: Vec<Category>, revision: String) -> Self {
        Self {
            skills,
            categories,
            revision,
        }
    }

    /// The full collection, insertion order preserved.
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    /// Number of skills in the catalog.
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Look up a skill by id. Exact match, case-sensitive, no normalization:
    /// ids double as URL path segments and the site's router matched them
    /// byte-for-byte.
    pub fn get(&self, id: &str) -> Option<&Skill> {
        self.skills.iter().find(|skill| skill.id == id)
    }

    /// All skills whose category code equals `code` exactly, in insertion
    /// order. An unknown code yields an empty vec, not an error.
    pub fn by_category(&self, code: &str) -> Vec<&Skill> {
        self.skills
            .iter()
            .filter(|skill| skill.category == code)
            .collect()
    }

    /// Case-insensitive keyword search over name, description, and scenario
    /// text. The empty keyword matches every skill. Results keep insertion
    /// order; there is no relevance ranking.
    pub fn search(&self, keyword: &str) -> Vec<&Skill> {
        self.filter(None, keyword)
    }

    /// Combined category + keyword filter, the query behind the site's grid:
    /// `category` of `None` is the "all" selection and passes everything
    /// through, the keyword rule is the same as `search`. The two predicates
    /// are ANDed.
    pub fn filter(&self, category: Option<&str>, keyword: &str) -> Vec<&Skill> {
        let lowered = keyword.to_lowercase();
        self.skills
            .iter()
            .filter(|skill| category.is_none_or(|code| skill.category == code))
            .filter(|skill| matches_keyword(skill, &lowered))
            .collect()
    }

    /// Distinct categories in first-occurrence order, with display names
    /// and per-category counts.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Per-category skill counts. Categories with zero skills do not appear.
    /// The counts always sum to `len()`.
    pub fn category_stats(&self) -> Vec<(&str, usize)> {
        self.categories
            .iter()
            .map(|category| (category.code.as_str(), category.skill_count))
            .collect()
    }

    /// Other skills sharing the category of `id`, in insertion order, capped
    /// at `limit`. Empty when `id` is unknown. Backs the "related skills"
    /// strip on the detail page.
    pub fn related(&self, id: &str, limit: usize) -> Vec<&Skill> {
        let Some(skill) = self.get(id) else {
            return Vec::new();
        };
        self.skills
            .iter()
            .filter(|other| other.category == skill.category && other.id != skill.id)
            .take(limit)
            .collect()
    }

    /// SHA-256 hex digest of the dataset this catalog was loaded from.
    pub fn revision(&self) -> &str {
        &self.revision
    }
}

/// Keyword rule shared by `search` and `filter`: the lowercased keyword must
/// be a substring of the lowercased name, description, or any scenario.
/// `lowered` is pre-lowercased by the caller.
fn matches_keyword(skill: &Skill, lowered: &str) -> bool {
    skill.name.to_lowercase().contains(lowered)
        || skill.description.to_lowercase().contains(lowered)
        || skill
            .scenarios
            .iter()
            .any(|scenario| scenario.to_lowercase().contains(lowered))
}
