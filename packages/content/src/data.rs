//! Literal content for every section of the site.
//!
//! These arrays are the single source of truth for the public pages and for the
//! read-only admin tables. They are never mutated at runtime.

use crate::models::{
    EducationItem, EducationKind, ExperienceItem, Project, ProjectCategory, ServiceDetail,
    ServiceIcon, Skill, SkillGroup, Testimonial,
};

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Ledgerline",
        description: "Multi-tenant invoicing platform with server-rendered dashboards, PDF exports and Stripe reconciliation.",
        category: ProjectCategory::Web,
        tags: &["Rust", "Axum", "PostgreSQL", "Tailwind"],
        image: "/assets/projects/ledgerline.webp",
        demo_url: Some("https://ledgerline.example.com"),
        repo_url: None,
        featured: true,
    },
    Project {
        id: 2,
        title: "Scribe Assist",
        description: "Meeting transcription service that summarizes calls and extracts action items with a fine-tuned language model.",
        category: ProjectCategory::Ai,
        tags: &["Python", "PyTorch", "Whisper", "FastAPI"],
        image: "/assets/projects/scribe-assist.webp",
        demo_url: Some("https://scribe.example.com"),
        repo_url: Some("https://github.com/alexmorgan/scribe-assist"),
        featured: true,
    },
    Project {
        id: 3,
        title: "Trailhead",
        description: "Offline-first hiking companion with GPX import, elevation profiles and shared trip planning.",
        category: ProjectCategory::Mobile,
        tags: &["Flutter", "SQLite", "Mapbox"],
        image: "/assets/projects/trailhead.webp",
        demo_url: None,
        repo_url: Some("https://github.com/alexmorgan/trailhead"),
        featured: false,
    },
    Project {
        id: 4,
        title: "Shelfie",
        description: "Visual product search for a furniture retailer: upload a photo, get the closest matches from a catalog of 40k items.",
        category: ProjectCategory::Ai,
        tags: &["Rust", "ONNX", "pgvector", "React"],
        image: "/assets/projects/shelfie.webp",
        demo_url: Some("https://shelfie.example.com"),
        repo_url: None,
        featured: false,
    },
    Project {
        id: 5,
        title: "Tidepool",
        description: "Log shipping agent that tails files, batches records and forwards them over HTTP with bounded memory.",
        category: ProjectCategory::Systems,
        tags: &["Rust", "Tokio", "OpenTelemetry"],
        image: "/assets/projects/tidepool.webp",
        demo_url: None,
        repo_url: Some("https://github.com/alexmorgan/tidepool"),
        featured: false,
    },
    Project {
        id: 6,
        title: "Studio Portfolio",
        description: "Headless CMS-backed portfolio for a photography studio with image pipelines and booking forms.",
        category: ProjectCategory::Web,
        tags: &["Dioxus", "Cloudinary", "PostgreSQL"],
        image: "/assets/projects/studio.webp",
        demo_url: Some("https://studio.example.com"),
        repo_url: None,
        featured: false,
    },
];

pub static EXPERIENCE: &[ExperienceItem] = &[
    ExperienceItem {
        id: 1,
        company: "Northwind Labs",
        role: "Senior Software Engineer",
        period: "2022 – Present",
        location: "Remote",
        summary: "Lead engineer on the customer data platform serving 300+ B2B tenants.",
        highlights: &[
            "Rewrote the ingestion pipeline in Rust, cutting p99 latency from 1.2s to 90ms.",
            "Introduced contract tests between 14 services and the public API.",
            "Mentored four engineers through their first on-call rotations.",
        ],
        tech: &["Rust", "Kafka", "PostgreSQL", "Kubernetes"],
        current: true,
    },
    ExperienceItem {
        id: 2,
        company: "Brightpath",
        role: "Full-Stack Developer",
        period: "2019 – 2022",
        location: "Lisbon, PT",
        summary: "Built the learner-facing web app and its reporting backend.",
        highlights: &[
            "Shipped the course player used by 2M monthly learners.",
            "Designed the permissions model for school administrators.",
        ],
        tech: &["TypeScript", "React", "Node.js", "Redis"],
        current: false,
    },
    ExperienceItem {
        id: 3,
        company: "Pixel & Pine",
        role: "Web Developer",
        period: "2017 – 2019",
        location: "Porto, PT",
        summary: "Agency work across e-commerce and marketing sites.",
        highlights: &[
            "Delivered 25+ client sites on fixed timelines.",
            "Built the agency's reusable component starter kit.",
        ],
        tech: &["JavaScript", "PHP", "Laravel", "MySQL"],
        current: false,
    },
];

pub static EDUCATION: &[EducationItem] = &[
    EducationItem {
        id: 1,
        institution: "University of Porto",
        title: "MSc Informatics Engineering",
        period: "2015 – 2017",
        kind: EducationKind::Degree,
        description: "Thesis on incremental view maintenance for document stores.",
        grade: Some("17/20"),
    },
    EducationItem {
        id: 2,
        institution: "University of Porto",
        title: "BSc Computer Science",
        period: "2012 – 2015",
        kind: EducationKind::Degree,
        description: "Focus on distributed systems and compilers.",
        grade: Some("16/20"),
    },
    EducationItem {
        id: 3,
        institution: "Cloud Native Computing Foundation",
        title: "Certified Kubernetes Application Developer",
        period: "2023",
        kind: EducationKind::Certification,
        description: "Designing, building and deploying cloud-native applications on Kubernetes.",
        grade: None,
    },
    EducationItem {
        id: 4,
        institution: "Amazon Web Services",
        title: "AWS Solutions Architect – Associate",
        period: "2021",
        kind: EducationKind::Certification,
        description: "Resilient, cost-aware architectures on AWS.",
        grade: None,
    },
    EducationItem {
        id: 5,
        institution: "fast.ai",
        title: "Practical Deep Learning for Coders",
        period: "2022",
        kind: EducationKind::Course,
        description: "Hands-on training of vision and language models.",
        grade: None,
    },
];

pub static SKILLS: &[Skill] = &[
    Skill { name: "Rust", level: 90, group: SkillGroup::Backend },
    Skill { name: "TypeScript", level: 88, group: SkillGroup::Frontend },
    Skill { name: "React", level: 85, group: SkillGroup::Frontend },
    Skill { name: "Dioxus", level: 75, group: SkillGroup::Frontend },
    Skill { name: "PostgreSQL", level: 85, group: SkillGroup::Backend },
    Skill { name: "Node.js", level: 80, group: SkillGroup::Backend },
    Skill { name: "Python", level: 70, group: SkillGroup::Backend },
    Skill { name: "Kubernetes", level: 72, group: SkillGroup::Infrastructure },
    Skill { name: "Terraform", level: 65, group: SkillGroup::Infrastructure },
    Skill { name: "AWS", level: 74, group: SkillGroup::Infrastructure },
    Skill { name: "Git", level: 92, group: SkillGroup::Tooling },
    Skill { name: "Figma", level: 60, group: SkillGroup::Tooling },
];

pub static SERVICES: &[ServiceDetail] = &[
    ServiceDetail {
        id: "web-apps",
        title: "Web Applications",
        summary: "Fast, accessible web apps from prototype to production.",
        icon: ServiceIcon::Code,
        description: "End-to-end delivery of customer-facing web applications: information architecture, component design, server rendering, and a deployment pipeline your team can own after handover.",
        deliverables: &[
            "Responsive UI built from a documented component library",
            "REST or GraphQL API with typed clients",
            "CI/CD pipeline and preview environments",
        ],
        timeline: "6–12 weeks",
    },
    ServiceDetail {
        id: "mobile",
        title: "Mobile Apps",
        summary: "Cross-platform apps that feel native on iOS and Android.",
        icon: ServiceIcon::Mobile,
        description: "Single-codebase mobile apps with offline support, push notifications and store submission handled for you.",
        deliverables: &[
            "iOS and Android builds from one codebase",
            "Offline data sync",
            "App Store and Play Store submission",
        ],
        timeline: "8–14 weeks",
    },
    ServiceDetail {
        id: "backend",
        title: "Backend & APIs",
        summary: "Reliable services with clear contracts and good observability.",
        icon: ServiceIcon::Server,
        description: "Service design, data modelling and API implementation with structured logging, metrics and alerting in place from day one.",
        deliverables: &[
            "Service and database schema design",
            "Load-tested API endpoints",
            "Dashboards and alert rules",
        ],
        timeline: "4–10 weeks",
    },
    ServiceDetail {
        id: "ai",
        title: "AI Integration",
        summary: "Put language and vision models to work on your data.",
        icon: ServiceIcon::Brain,
        description: "Scoping, prototyping and productionising model-backed features: retrieval over your documents, classification, summarisation and search.",
        deliverables: &[
            "Feasibility prototype on your data",
            "Evaluation set and quality metrics",
            "Production integration with cost controls",
        ],
        timeline: "3–8 weeks",
    },
    ServiceDetail {
        id: "performance",
        title: "Performance Audits",
        summary: "Find and fix what makes your product slow.",
        icon: ServiceIcon::Gauge,
        description: "Profiling of frontend and backend hot paths, with a prioritised report and hands-on fixes for the top findings.",
        deliverables: &[
            "Core Web Vitals and server latency baseline",
            "Prioritised findings report",
            "Implemented fixes for the top three issues",
        ],
        timeline: "2–3 weeks",
    },
    ServiceDetail {
        id: "consulting",
        title: "Technical Consulting",
        summary: "Architecture reviews and hiring support for growing teams.",
        icon: ServiceIcon::Compass,
        description: "Independent review of architecture, code quality and delivery process, plus support designing interviews for your next engineering hires.",
        deliverables: &[
            "Architecture review document",
            "Roadmap of recommended changes",
            "Interview loop design",
        ],
        timeline: "1–4 weeks",
    },
];

/// Projects shown under a tab. `None` is "All".
pub fn projects_by(filter: Option<ProjectCategory>) -> Vec<&'static Project> {
    PROJECTS.iter().filter(|p| p.matches(filter)).collect()
}

pub fn education_by(filter: Option<EducationKind>) -> Vec<&'static EducationItem> {
    EDUCATION.iter().filter(|e| e.matches(filter)).collect()
}

pub fn skills_in(group: SkillGroup) -> Vec<&'static Skill> {
    SKILLS.iter().filter(|s| s.group == group).collect()
}

pub fn service(id: &str) -> Option<&'static ServiceDetail> {
    SERVICES.iter().find(|s| s.id == id)
}

/// Substituted when the testimonials request fails.
pub fn fallback_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: 1,
            name: "Maria Santos".to_string(),
            role: "Product Manager".to_string(),
            company: "Brightpath".to_string(),
            image: "/assets/testimonials/maria.webp".to_string(),
            company_logo: "/assets/logos/brightpath.svg".to_string(),
            content: "Alex turned a vague brief into a product our learners love. Clear communication, realistic estimates, and code the rest of the team could pick up on day one.".to_string(),
            rating: 5,
            sort_order: Some(1),
            is_active: Some(true),
        },
        Testimonial {
            id: 2,
            name: "David Chen".to_string(),
            role: "CTO".to_string(),
            company: "Northwind Labs".to_string(),
            image: "/assets/testimonials/david.webp".to_string(),
            company_logo: "/assets/logos/northwind.svg".to_string(),
            content: "The ingestion rewrite paid for itself within a quarter. Alex is the engineer you want on the hardest problem on the roadmap.".to_string(),
            rating: 5,
            sort_order: Some(2),
            is_active: Some(true),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_projects_ai() {
        let ai = projects_by(Some(ProjectCategory::Ai));
        assert_eq!(ai.len(), 2);
        assert!(ai.iter().all(|p| p.category.as_str() == "ai"));
    }

    #[test]
    fn test_filter_projects_all() {
        assert_eq!(projects_by(None).len(), PROJECTS.len());
    }

    #[test]
    fn test_every_category_tab_has_projects() {
        for c in ProjectCategory::ALL {
            assert!(!projects_by(Some(c)).is_empty(), "empty tab {}", c.as_str());
        }
    }

    #[test]
    fn test_filter_education() {
        let certs = education_by(Some(EducationKind::Certification));
        assert_eq!(certs.len(), 2);
        assert_eq!(education_by(None).len(), EDUCATION.len());
    }

    #[test]
    fn test_fallback_testimonials() {
        let fallback = fallback_testimonials();
        assert_eq!(fallback.len(), 2);
        assert!(fallback.iter().all(|t| (1..=5).contains(&t.rating)));
    }

    #[test]
    fn test_ids_unique() {
        let mut ids: Vec<u32> = PROJECTS.iter().map(|p| p.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), PROJECTS.len());

        let mut service_ids: Vec<&str> = SERVICES.iter().map(|s| s.id).collect();
        service_ids.sort();
        service_ids.dedup();
        assert_eq!(service_ids.len(), SERVICES.len());
    }

    #[test]
    fn test_service_lookup() {
        assert_eq!(service("ai").map(|s| s.title), Some("AI Integration"));
        assert!(service("nope").is_none());
    }

    #[test]
    fn test_skill_levels_in_range() {
        assert!(SKILLS.iter().all(|s| s.level <= 100));
        let total: usize = SkillGroup::ALL.iter().map(|g| skills_in(*g).len()).sum();
        assert_eq!(total, SKILLS.len());
    }
}
