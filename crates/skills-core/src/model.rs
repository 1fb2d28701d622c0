use serde::{Deserialize, Serialize};

/// A single skill entry in the catalog (e.g. "component-scaffold: 组件脚手架").
///
/// Field names in the serialized form are camelCase, matching the dataset
/// shape the original site shipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    /// Stable identifier and URL slug, e.g. "component-scaffold"
    pub id: String,
    /// Primary display name
    pub name: String,
    /// English display name
    pub name_en: String,
    /// One-paragraph description; keyword-matched
    pub description: String,
    /// Opaque display token (the site renders it as an emoji)
    pub icon: String,
    /// Category code, e.g. "planning", "development"
    pub category: String,
    /// Typical usage scenarios; keyword-matched
    pub scenarios: Vec<String>,
    /// Core feature bullet points (display-only)
    pub features: Vec<String>,
    /// Example prompts / invocations (display-only)
    pub examples: Vec<String>,
    /// Free-text usage guide (display-only)
    pub usage_guide: String,
}

/// A skill category derived from the catalog at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category code, e.g. "planning"
    pub code: String,
    /// Display name, e.g. "规划"; falls back to the code for unknown categories
    pub display_name: String,
    /// Number of skills carrying this category code
    pub skill_count: usize,
}

/// Display names for the category codes the site ships with.
///
/// The catalog does not validate membership; a skill may carry any category
/// code, and unknown codes display as themselves.
pub const CATEGORY_DISPLAY_NAMES: &[(&str, &str)] = &[
    ("planning", "规划"),
    ("development", "开发"),
    ("optimization", "优化"),
    ("debugging", "调试"),
    ("integration", "集成"),
    ("documentation", "文档"),
];

/// Look up the display name for a category code, falling back to the code.
pub fn category_display_name(code: &str) -> &str {
    CATEGORY_DISPLAY_NAMES
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, name)| *name)
        .unwrap_or(code)
}
