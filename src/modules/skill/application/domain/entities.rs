use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Skill grouping. Declaration order is the order groups are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Design,
    Mobile,
    Uiux,
    Tools,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 6] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Design,
        SkillCategory::Mobile,
        SkillCategory::Uiux,
        SkillCategory::Tools,
    ];

    pub fn code(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Design => "design",
            SkillCategory::Mobile => "mobile",
            SkillCategory::Uiux => "uiux",
            SkillCategory::Tools => "tools",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Design => "Design",
            SkillCategory::Mobile => "Mobile",
            SkillCategory::Uiux => "UI/UX",
            SkillCategory::Tools => "Tools",
        }
    }

    /// Exact match on the stored code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, Deserialize, ToSchema)]
pub struct SkillView {
    pub id: Uuid,
    #[schema(example = "React")]
    pub name: String,
    pub category: SkillCategory,
    #[schema(example = "Frontend")]
    pub category_display: String,
    /// 1 to 5
    pub proficiency: i16,
    pub icon_name: String,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, Deserialize, ToSchema)]
pub struct ToolView {
    pub id: Uuid,
    #[schema(example = "Figma")]
    pub name: String,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillGroup {
    pub category: SkillCategory,
    pub skills: Vec<SkillView>,
}

/// Skills bucketed per category, serialized as an ordered map
/// `{ "<code>": { "name": "<display>", "skills": [...] } }`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillsByCategory {
    groups: Vec<SkillGroup>,
}

impl SkillsByCategory {
    /// Buckets `skills` (already ordered within category) into every category.
    pub fn from_skills(skills: Vec<SkillView>) -> Self {
        let mut groups: Vec<SkillGroup> = SkillCategory::ALL
            .into_iter()
            .map(|category| SkillGroup {
                category,
                skills: Vec::new(),
            })
            .collect();

        for skill in skills {
            if let Some(group) = groups.iter_mut().find(|g| g.category == skill.category) {
                group.skills.push(skill);
            }
        }

        Self { groups }
    }

    /// Drops categories without any skill.
    pub fn without_empty(mut self) -> Self {
        self.groups.retain(|g| !g.skills.is_empty());
        self
    }

    pub fn groups(&self) -> &[SkillGroup] {
        &self.groups
    }

    pub fn get(&self, category: SkillCategory) -> Option<&SkillGroup> {
        self.groups.iter().find(|g| g.category == category)
    }
}

/// Documentation shape of one `SkillsByCategory` entry.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct SkillGroupSchema {
    #[schema(example = "UI/UX")]
    name: String,
    skills: Vec<SkillView>,
}

#[derive(serde::Serialize)]
struct GroupBody<'a> {
    name: &'static str,
    skills: &'a [SkillView],
}

impl Serialize for SkillsByCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(
                group.category.code(),
                &GroupBody {
                    name: group.category.display_name(),
                    skills: &group.skills,
                },
            )?;
        }
        map.end()
    }
}
