use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListSkillsParams {
    /// Category code to filter by (e.g. "development"). Omit, or pass "all",
    /// to include every category.
    pub category: Option<String>,
    /// Keyword matched case-insensitively against skill names, descriptions,
    /// and usage scenarios. Omit to match everything.
    pub keyword: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetSkillParams {
    /// Stable skill id such as "component-generator".
    pub skill_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchSkillsParams {
    /// Keyword matched case-insensitively against skill names, descriptions,
    /// and usage scenarios.
    pub keyword: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListCategoryParams {
    /// Category code such as "planning" or "debugging".
    pub category: String,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillSummary {
    pub id: String,
    pub name: String,
    pub name_en: String,
    pub icon: String,
    pub category: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillDetailResponse {
    pub id: String,
    pub name: String,
    pub name_en: String,
    pub description: String,
    pub icon: String,
    pub category: String,
    pub category_display_name: String,
    pub scenarios: Vec<String>,
    pub features: Vec<String>,
    pub examples: Vec<String>,
    pub usage_guide: String,
    /// Up to three other skills from the same category.
    pub related: Vec<SkillSummary>,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillListResponse {
    pub total: usize,
    pub skills: Vec<SkillSummary>,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchSkillsResponse {
    pub results: Vec<SkillSummary>,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    pub code: String,
    pub display_name: String,
    pub skill_count: usize,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryListResponse {
    pub category: CategoryInfo,
    pub skills: Vec<SkillSummary>,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoriesResponse {
    pub categories: Vec<CategoryInfo>,
    pub total_skills: usize,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogInfoResponse {
    pub skill_count: usize,
    pub category_count: usize,
    /// SHA-256 digest of the dataset the catalog was loaded from.
    pub revision: String,
    pub server_version: String,
}
