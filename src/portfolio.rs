use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

const PORTFOLIO_FILE: &str = "portfolio.json";

/// Substrings that mark a concept as AI-related. Matching is case-sensitive.
const AI_MARKERS: [&str; 5] = ["LLM", "RAG", "AI", "Vector", "Prompt"];

pub static PORTFOLIO: LazyLock<Portfolio> =
    LazyLock::new(|| Portfolio::load().expect("Embedded portfolio data should parse"));

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("Portfolio data not found")]
    Missing,
    #[error("Couldn't parse portfolio data: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub personal: Person,
    pub experience: Vec<Experience>,
    pub skills: Skills,
    pub education: Vec<Education>,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub location: String,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub id: u32,
    pub company: String,
    pub role: String,
    pub duration: String,
    pub location: String,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub id: u32,
    pub institution: String,
    pub degree: String,
    pub duration: String,
    pub gpa: String,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skills {
    pub languages: Vec<String>,
    pub frameworks: Vec<String>,
    pub databases: Vec<String>,
    pub tools: Vec<String>,
    pub cloud: Vec<String>,
    pub concepts: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub impact: String,
}

impl Portfolio {
    pub fn load() -> Result<Self, PortfolioError> {
        let file = Content::get(PORTFOLIO_FILE).ok_or(PortfolioError::Missing)?;
        Self::from_json(&file.data)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, PortfolioError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

fn is_ai_concept(concept: &str) -> bool {
    AI_MARKERS.iter().any(|m| concept.contains(m))
}

/// A titled group of skill tags as rendered by the skills section.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillCategory<'a> {
    pub kind: CategoryKind,
    pub title: &'static str,
    pub description: &'static str,
    pub items: Vec<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    Languages,
    Frameworks,
    Databases,
    Cloud,
    Tools,
    Ai,
}

impl Skills {
    pub fn ai_concepts(&self) -> Vec<&str> {
        self.concepts
            .iter()
            .map(String::as_str)
            .filter(|c| is_ai_concept(c))
            .collect()
    }

    pub fn system_design_concepts(&self) -> Vec<&str> {
        self.concepts
            .iter()
            .map(String::as_str)
            .filter(|c| !is_ai_concept(c))
            .collect()
    }

    pub fn categories(&self) -> Vec<SkillCategory<'_>> {
        fn tags(v: &[String]) -> Vec<&str> {
            v.iter().map(String::as_str).collect()
        }
        vec![
            SkillCategory {
                kind: CategoryKind::Languages,
                title: "Programming Languages",
                description: "Core languages for backend development",
                items: tags(&self.languages),
            },
            SkillCategory {
                kind: CategoryKind::Frameworks,
                title: "Frameworks & Libraries",
                description: "Production-ready frameworks and tools",
                items: tags(&self.frameworks),
            },
            SkillCategory {
                kind: CategoryKind::Databases,
                title: "Databases & Storage",
                description: "Data management and storage solutions",
                items: tags(&self.databases),
            },
            SkillCategory {
                kind: CategoryKind::Cloud,
                title: "Cloud Platforms",
                description: "Enterprise cloud infrastructure",
                items: tags(&self.cloud),
            },
            SkillCategory {
                kind: CategoryKind::Tools,
                title: "Tools & Technologies",
                description: "Development and monitoring tools",
                items: tags(&self.tools),
            },
            SkillCategory {
                kind: CategoryKind::Ai,
                title: "AI & Advanced Concepts",
                description: "Cutting-edge AI and ML technologies",
                items: self.ai_concepts(),
            },
        ]
    }
}

/// Seniority bucket inferred from a role title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleTier {
    Lead,
    Senior,
    Associate,
    Other,
}

impl RoleTier {
    pub fn for_role(role: &str) -> Self {
        if role.contains("Technical Lead") {
            Self::Lead
        } else if role.contains("Senior") {
            Self::Senior
        } else if role.contains("Associate") {
            Self::Associate
        } else {
            Self::Other
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Lead => "🚀",
            Self::Senior => "⭐",
            Self::Associate => "🎯",
            Self::Other => "💼",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectKind {
    Agent,
    Platform,
    Service,
    Other,
}

impl ProjectKind {
    pub fn for_name(name: &str) -> Self {
        if name.contains("AI Agent") {
            Self::Agent
        } else if name.contains("CARGO") {
            Self::Platform
        } else if name.contains("Management") {
            Self::Service
        } else {
            Self::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_data_loads_in_authoring_order() {
        let p = Portfolio::load().expect("should load embedded data");
        assert_eq!(p.personal.name, "Kushmeet Singh Saluja");
        assert_eq!(p.experience.len(), 4);
        assert_eq!(p.experience[0].duration, "Jan 2024 - Present");
        let ids = p.experience.iter().map(|e| e.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(p.projects.len(), 3);
        assert_eq!(p.education[1].location.as_deref(), Some("India"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Portfolio::from_json(b"{\"personal\": 3}").unwrap_err();
        assert!(matches!(err, PortfolioError::Parse(_)));
    }

    #[test]
    fn education_location_is_optional() {
        let edu: Education = serde_json::from_str(
            r#"{"id": 9, "institution": "X", "degree": "Y", "duration": "Z", "gpa": "4.0"}"#,
        )
        .unwrap();
        assert!(edu.location.is_none());
    }

    #[test]
    fn concept_partition_is_a_disjoint_cover() {
        let skills = &PORTFOLIO.skills;
        let ai = skills.ai_concepts();
        let sd = skills.system_design_concepts();
        assert_eq!(ai.len() + sd.len(), skills.concepts.len());
        assert!(ai.iter().all(|c| !sd.contains(c)));
        assert_eq!(
            ai,
            vec!["LLMs", "RAG", "Vector Search", "Prompt Engineering", "AI Engineering"]
        );
        // "RESTful API Design" has no contiguous "AI"
        assert!(sd.contains(&"RESTful API Design"));
    }

    #[test]
    fn categories_keep_display_order() {
        let cats = PORTFOLIO.skills.categories();
        let kinds = cats.iter().map(|c| c.kind).collect::<Vec<_>>();
        assert_eq!(
            kinds,
            vec![
                CategoryKind::Languages,
                CategoryKind::Frameworks,
                CategoryKind::Databases,
                CategoryKind::Cloud,
                CategoryKind::Tools,
                CategoryKind::Ai,
            ]
        );
        assert_eq!(cats[0].items, vec!["Java", "Python", "GO"]);
    }

    #[test]
    fn role_tiers() {
        assert_eq!(RoleTier::for_role("Technical Lead (Backend)"), RoleTier::Lead);
        assert_eq!(
            RoleTier::for_role("Senior Software Engineer (Backend)"),
            RoleTier::Senior
        );
        assert_eq!(
            RoleTier::for_role("Associate Software Engineer (Backend)"),
            RoleTier::Associate
        );
        assert_eq!(RoleTier::for_role("Software Engineer"), RoleTier::Other);
    }

    #[test]
    fn project_kinds() {
        assert_eq!(ProjectKind::for_name("Ask Sirion AI Agent"), ProjectKind::Agent);
        assert_eq!(ProjectKind::for_name("CARGO Platform"), ProjectKind::Platform);
        assert_eq!(
            ProjectKind::for_name("Key Management Service"),
            ProjectKind::Service
        );
        assert_eq!(ProjectKind::for_name("Side Quest"), ProjectKind::Other);
    }
}
