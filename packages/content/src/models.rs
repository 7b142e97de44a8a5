//! # Display records for the portfolio sections
//!
//! [`Testimonial`] is the only record that crosses the server/client boundary,
//! so it owns its strings and derives `Serialize + Deserialize`. Everything else
//! is a literal compiled into the binary and borrows `&'static str`.
//!
//! | Type | Section |
//! |------|---------|
//! | [`Testimonial`] | Testimonials carousel, admin testimonials table |
//! | [`Project`] | Projects grid with category tabs |
//! | [`ExperienceItem`] | Experience timeline |
//! | [`EducationItem`] | Education list with kind tabs |
//! | [`Skill`] | About section skill bars |
//! | [`ServiceDetail`] | Services grid and detail dialog |

use serde::{Deserialize, Serialize};

/// A client testimonial as served by `GET /api/public/testimonials`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub company: String,
    /// Avatar of the person quoted.
    pub image: String,
    /// Logo of their company.
    pub company_logo: String,
    pub content: String,
    /// 1..=5
    pub rating: u8,
    #[serde(default)]
    pub sort_order: Option<i32>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl Testimonial {
    /// Rating clamped into the displayable 1..=5 range.
    pub fn stars(&self) -> u8 {
        self.rating.clamp(1, 5)
    }

    /// "Role at Company", or whichever half is present.
    pub fn byline(&self) -> String {
        match (self.role.trim(), self.company.trim()) {
            ("", "") => String::new(),
            (role, "") => role.to_string(),
            ("", company) => company.to_string(),
            (role, company) => format!("{role} at {company}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Web,
    Ai,
    Mobile,
    Systems,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 4] = [
        ProjectCategory::Web,
        ProjectCategory::Ai,
        ProjectCategory::Mobile,
        ProjectCategory::Systems,
    ];

    /// Wire/tab identifier: "web", "ai", "mobile", "systems".
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::Web => "web",
            ProjectCategory::Ai => "ai",
            ProjectCategory::Mobile => "mobile",
            ProjectCategory::Systems => "systems",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::Web => "Web",
            ProjectCategory::Ai => "AI & ML",
            ProjectCategory::Mobile => "Mobile",
            ProjectCategory::Systems => "Systems",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: ProjectCategory,
    pub tags: &'static [&'static str],
    pub image: &'static str,
    pub demo_url: Option<&'static str>,
    pub repo_url: Option<&'static str>,
    pub featured: bool,
}

impl Project {
    /// `None` is the "All" tab.
    pub fn matches(&self, filter: Option<ProjectCategory>) -> bool {
        filter.map_or(true, |c| self.category == c)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExperienceItem {
    pub id: u32,
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub summary: &'static str,
    pub highlights: &'static [&'static str],
    pub tech: &'static [&'static str],
    pub current: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EducationKind {
    Degree,
    Certification,
    Course,
}

impl EducationKind {
    pub const ALL: [EducationKind; 3] = [
        EducationKind::Degree,
        EducationKind::Certification,
        EducationKind::Course,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EducationKind::Degree => "Degrees",
            EducationKind::Certification => "Certifications",
            EducationKind::Course => "Courses",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EducationItem {
    pub id: u32,
    pub institution: &'static str,
    pub title: &'static str,
    pub period: &'static str,
    pub kind: EducationKind,
    pub description: &'static str,
    pub grade: Option<&'static str>,
}

impl EducationItem {
    pub fn matches(&self, filter: Option<EducationKind>) -> bool {
        filter.map_or(true, |k| self.kind == k)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkillGroup {
    Frontend,
    Backend,
    Infrastructure,
    Tooling,
}

impl SkillGroup {
    pub const ALL: [SkillGroup; 4] = [
        SkillGroup::Frontend,
        SkillGroup::Backend,
        SkillGroup::Infrastructure,
        SkillGroup::Tooling,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkillGroup::Frontend => "Frontend",
            SkillGroup::Backend => "Backend",
            SkillGroup::Infrastructure => "Infrastructure",
            SkillGroup::Tooling => "Tooling",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    /// Self-assessed proficiency, 0..=100.
    pub level: u8,
    pub group: SkillGroup,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceIcon {
    Code,
    Mobile,
    Server,
    Brain,
    Gauge,
    Compass,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ServiceDetail {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub icon: ServiceIcon,
    pub description: &'static str,
    pub deliverables: &'static [&'static str],
    pub timeline: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn testimonial(role: &str, company: &str, rating: u8) -> Testimonial {
        Testimonial {
            id: 1,
            name: "Sam".into(),
            role: role.into(),
            company: company.into(),
            image: String::new(),
            company_logo: String::new(),
            content: String::new(),
            rating,
            sort_order: None,
            is_active: None,
        }
    }

    #[test]
    fn test_byline() {
        assert_eq!(testimonial("CTO", "Acme", 5).byline(), "CTO at Acme");
        assert_eq!(testimonial("CTO", " ", 5).byline(), "CTO");
        assert_eq!(testimonial("", "Acme", 5).byline(), "Acme");
        assert_eq!(testimonial("", "", 5).byline(), "");
    }

    #[test]
    fn test_stars_clamped() {
        assert_eq!(testimonial("", "", 0).stars(), 1);
        assert_eq!(testimonial("", "", 9).stars(), 5);
        assert_eq!(testimonial("", "", 4).stars(), 4);
    }

    #[test]
    fn test_testimonial_json_optional_flags() {
        let json = r#"{
            "id": 7, "name": "Ada", "role": "Lead", "company": "Analytical",
            "image": "/a.png", "company_logo": "/b.png", "content": "Great", "rating": 5
        }"#;
        let t: Testimonial = serde_json::from_str(json).unwrap();
        assert_eq!(t.id, 7);
        assert!(t.sort_order.is_none());
        assert!(t.is_active.is_none());
    }

    #[test]
    fn test_category_parse_roundtrip() {
        for c in ProjectCategory::ALL {
            assert_eq!(ProjectCategory::parse(c.as_str()), Some(c));
        }
        assert_eq!(ProjectCategory::parse("games"), None);
    }
}
