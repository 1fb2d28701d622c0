/// MCP server implementation for the skills catalog.
///
/// Exposes six tools:
/// - `list_skills`: combined category + keyword filter (the site's grid query)
/// - `get_skill`: full detail for one skill by id
/// - `search_skills`: keyword search over names, descriptions, and scenarios
/// - `list_category`: all skills in a specific category
/// - `list_categories`: every category with display name and skill count
/// - `catalog_info`: dataset size and revision digest
use std::sync::Arc;

use rmcp::{
    Json, ServerHandler,
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::*,
    tool, tool_handler, tool_router,
};

use skills_core::catalog::Catalog;
use skills_core::model::{category_display_name, Skill};

use crate::api::{
    CatalogInfoResponse, CategoriesResponse, CategoryInfo, CategoryListResponse, GetSkillParams,
    ListCategoryParams, ListSkillsParams, SearchSkillsParams, SearchSkillsResponse,
    SkillDetailResponse, SkillListResponse, SkillSummary,
};

/// Number of related skills returned alongside a skill detail.
const RELATED_LIMIT: usize = 3;

#[derive(Clone)]
pub struct SkillsCatalogServer {
    catalog: Arc<Catalog>,
    tool_router: ToolRouter<SkillsCatalogServer>,
}

impl SkillsCatalogServer {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl SkillsCatalogServer {
    #[tool(description = "List skills, optionally filtered by category code and/or a case-insensitive keyword. Category 'all' (or omitting it) includes every category.")]
    async fn list_skills(
        &self,
        Parameters(params): Parameters<ListSkillsParams>,
    ) -> Result<Json<SkillListResponse>, String> {
        // "all" is the sentinel the site's category selector uses.
        let category = params
            .category
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty() && *code != "all");
        let keyword = params.keyword.as_deref().unwrap_or("");

        let skills: Vec<SkillSummary> = self
            .catalog
            .filter(category, keyword)
            .into_iter()
            .map(to_summary)
            .collect();

        Ok(Json(SkillListResponse {
            total: skills.len(),
            skills,
        }))
    }

    #[tool(description = "Get the full content of a skill by id (e.g. 'component-generator'), including scenarios, features, examples, usage guide, and related skills.")]
    async fn get_skill(
        &self,
        Parameters(params): Parameters<GetSkillParams>,
    ) -> Result<Json<SkillDetailResponse>, String> {
        let skill_id = params.skill_id.trim().to_string();
        if skill_id.is_empty() {
            return Err("skill_id must not be empty".to_string());
        }

        let skill = self
            .catalog
            .get(&skill_id)
            .ok_or_else(|| format!("skill not found: {skill_id}"))?;

        let related = self
            .catalog
            .related(&skill_id, RELATED_LIMIT)
            .into_iter()
            .map(to_summary)
            .collect();

        Ok(Json(to_detail(skill, related)))
    }

    #[tool(description = "Search skills by a case-insensitive keyword matched against names, descriptions, and usage scenarios.")]
    async fn search_skills(
        &self,
        Parameters(params): Parameters<SearchSkillsParams>,
    ) -> Result<Json<SearchSkillsResponse>, String> {
        let keyword = params.keyword.trim().to_string();
        if keyword.is_empty() {
            return Err("keyword must not be empty; use list_skills to browse everything".to_string());
        }

        let results = self
            .catalog
            .search(&keyword)
            .into_iter()
            .map(to_summary)
            .collect();

        Ok(Json(SearchSkillsResponse { results }))
    }

    #[tool(description = "List all skills in a specific category. Known codes: planning, development, optimization, debugging, integration, documentation.")]
    async fn list_category(
        &self,
        Parameters(params): Parameters<ListCategoryParams>,
    ) -> Result<Json<CategoryListResponse>, String> {
        let requested = params.category.trim().to_string();
        if requested.is_empty() {
            return Err("category must not be empty".to_string());
        }

        let category = self
            .catalog
            .categories()
            .iter()
            .find(|category| category.code.eq_ignore_ascii_case(&requested))
            .ok_or_else(|| {
                let available: Vec<&str> = self
                    .catalog
                    .categories()
                    .iter()
                    .map(|category| category.code.as_str())
                    .collect();
                format!(
                    "unknown category: '{requested}'. Available categories: {}",
                    available.join(", ")
                )
            })?;

        let skills = self
            .catalog
            .by_category(&category.code)
            .into_iter()
            .map(to_summary)
            .collect();

        Ok(Json(CategoryListResponse {
            category: to_category_info(category),
            skills,
        }))
    }

    #[tool(description = "List every skill category with its display name and skill count.")]
    async fn list_categories(&self) -> Result<Json<CategoriesResponse>, String> {
        let categories: Vec<CategoryInfo> = self
            .catalog
            .categories()
            .iter()
            .map(to_category_info)
            .collect();

        Ok(Json(CategoriesResponse {
            total_skills: self.catalog.len(),
            categories,
        }))
    }

    #[tool(description = "Report catalog metadata: skill count, category count, and the dataset revision digest.")]
    async fn catalog_info(&self) -> Result<Json<CatalogInfoResponse>, String> {
        Ok(Json(CatalogInfoResponse {
            skill_count: self.catalog.len(),
            category_count: self.catalog.categories().len(),
            revision: self.catalog.revision().to_string(),
            server_version: env!("CARGO_PKG_VERSION").to_string(),
        }))
    }
}

fn to_summary(skill: &Skill) -> SkillSummary {
    SkillSummary {
        id: skill.id.clone(),
        name: skill.name.clone(),
        name_en: skill.name_en.clone(),
        icon: skill.icon.clone(),
        category: skill.category.clone(),
        description: skill.description.clone(),
    }
}

fn to_detail(skill: &Skill, related: Vec<SkillSummary>) -> SkillDetailResponse {
    SkillDetailResponse {
        id: skill.id.clone(),
        name: skill.name.clone(),
        name_en: skill.name_en.clone(),
        description: skill.description.clone(),
        icon: skill.icon.clone(),
        category: skill.category.clone(),
        category_display_name: category_display_name(&skill.category).to_string(),
        scenarios: skill.scenarios.clone(),
        features: skill.features.clone(),
        examples: skill.examples.clone(),
        usage_guide: skill.usage_guide.clone(),
        related,
    }
}

fn to_category_info(category: &skills_core::model::Category) -> CategoryInfo {
    CategoryInfo {
        code: category.code.clone(),
        display_name: category.display_name.clone(),
        skill_count: category.skill_count,
    }
}

#[tool_handler]
impl ServerHandler for SkillsCatalogServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "skills-catalog".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Frontend skills catalog MCP server. Provides lookup and filtering over a \
                 fixed catalog of AI-assisted frontend development skills. Use list_skills \
                 to browse (optionally by category and keyword), get_skill for full detail \
                 by id, search_skills for keyword search, list_category / list_categories \
                 for category browsing, and catalog_info for dataset metadata."
                    .to_string(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rmcp::handler::server::wrapper::Parameters;

    use super::SkillsCatalogServer;
    use crate::api::{GetSkillParams, ListCategoryParams, ListSkillsParams, SearchSkillsParams};

    fn server() -> SkillsCatalogServer {
        let catalog = skills_core::loader::load_builtin().expect("embedded dataset loads");
        SkillsCatalogServer::new(Arc::new(catalog))
    }

    #[test]
    fn tools_publish_output_schemas() {
        let tools = SkillsCatalogServer::tool_router().list_all();
        for name in [
            "list_skills",
            "get_skill",
            "search_skills",
            "list_category",
            "list_categories",
            "catalog_info",
        ] {
            let tool = tools
                .iter()
                .find(|t| t.name == name)
                .unwrap_or_else(|| panic!("missing tool: {name}"));
            assert!(
                tool.output_schema.is_some(),
                "tool {name} should publish output_schema"
            );
        }
    }

    #[tokio::test]
    async fn get_skill_returns_detail_with_related() {
        let server = server();
        let response = server
            .get_skill(Parameters(GetSkillParams {
                skill_id: "  api-client  ".to_string(),
            }))
            .await
            .expect("skill exists");

        let detail = response.0;
        assert_eq!(detail.id, "api-client");
        assert_eq!(detail.category, "integration");
        assert_eq!(detail.category_display_name, "集成");
        assert!(!detail.scenarios.is_empty());
        assert!(detail.related.iter().all(|s| s.category == "integration"));
        assert!(detail.related.iter().all(|s| s.id != "api-client"));
    }

    #[tokio::test]
    async fn get_skill_ids_are_case_sensitive() {
        let server = server();
        let err = server
            .get_skill(Parameters(GetSkillParams {
                skill_id: "API-CLIENT".to_string(),
            }))
            .await
            .err().unwrap();
        assert!(err.contains("skill not found"));

        let err = server
            .get_skill(Parameters(GetSkillParams {
                skill_id: "   ".to_string(),
            }))
            .await
            .err().unwrap();
        assert!(err.contains("must not be empty"));
    }

    #[tokio::test]
    async fn list_skills_all_sentinel_matches_omitted_category() {
        let server = server();
        let everything = server
            .list_skills(Parameters(ListSkillsParams {
                category: None,
                keyword: None,
            }))
            .await
            .unwrap()
            .0;
        let all_sentinel = server
            .list_skills(Parameters(ListSkillsParams {
                category: Some("all".to_string()),
                keyword: None,
            }))
            .await
            .unwrap()
            .0;

        assert_eq!(everything.total, all_sentinel.total);
        assert_eq!(everything.total, everything.skills.len());
    }

    #[tokio::test]
    async fn list_skills_combines_category_and_keyword() {
        let server = server();
        let filtered = server
            .list_skills(Parameters(ListSkillsParams {
                category: Some("integration".to_string()),
                keyword: Some("OpenAPI".to_string()),
            }))
            .await
            .unwrap()
            .0;

        assert_eq!(filtered.total, 1);
        assert_eq!(filtered.skills[0].id, "api-client");
    }

    #[tokio::test]
    async fn search_is_case_insensitive_and_rejects_empty_keywords() {
        let server = server();
        let upper = server
            .search_skills(Parameters(SearchSkillsParams {
                keyword: "OPENAPI".to_string(),
            }))
            .await
            .unwrap()
            .0;
        let lower = server
            .search_skills(Parameters(SearchSkillsParams {
                keyword: "openapi".to_string(),
            }))
            .await
            .unwrap()
            .0;
        let upper_ids: Vec<&str> = upper.results.iter().map(|s| s.id.as_str()).collect();
        let lower_ids: Vec<&str> = lower.results.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(upper_ids, lower_ids);
        assert!(upper_ids.contains(&"api-client"));

        let err = server
            .search_skills(Parameters(SearchSkillsParams {
                keyword: "  ".to_string(),
            }))
            .await
            .err().unwrap();
        assert!(err.contains("must not be empty"));
    }

    #[tokio::test]
    async fn unknown_category_error_names_the_available_codes() {
        let server = server();
        let err = server
            .list_category(Parameters(ListCategoryParams {
                category: "tooling".to_string(),
            }))
            .await
            .err().unwrap();
        assert!(err.contains("unknown category"));
        assert!(err.contains("planning"));
    }

    #[tokio::test]
    async fn summaries_serialize_with_the_site_field_names() {
        let server = server();
        let listing = server
            .list_skills(Parameters(ListSkillsParams {
                category: Some("documentation".to_string()),
                keyword: None,
            }))
            .await
            .unwrap()
            .0;

        let json = serde_json::to_value(&listing).unwrap();
        let first = &json["skills"][0];
        assert!(first.get("nameEn").is_some());
        assert!(first.get("name_en").is_none());
    }
}
