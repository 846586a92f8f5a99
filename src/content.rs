//! Literal page content. Order within every slice is display order.

use crate::style::ButtonVariant;

/// Where a link points and whether it opens a new browsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkTarget {
    pub href: &'static str,
    pub new_context: bool,
}

impl LinkTarget {
    pub const fn same_context(href: &'static str) -> Self {
        Self {
            href,
            new_context: false,
        }
    }

    pub const fn new_context(href: &'static str) -> Self {
        Self {
            href,
            new_context: true,
        }
    }

    pub fn target(&self) -> Option<&'static str> {
        self.new_context.then_some("_blank")
    }

    pub fn rel(&self) -> Option<&'static str> {
        self.new_context.then_some("noreferrer")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cta {
    pub href: &'static str,
}

impl Cta {
    pub const PLACEHOLDER: Cta = Cta { href: "#" };

    pub fn is_placeholder(&self) -> bool {
        self.href == Self::PLACEHOLDER.href
    }

    pub fn link(&self) -> LinkTarget {
        LinkTarget::new_context(self.href)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub stack: &'static str,
    pub bullets: &'static [&'static str],
    pub cta: Option<Cta>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillEntry {
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Mail,
    Phone,
    ExternalLink,
}

impl ContactKind {
    pub fn button_variant(self) -> ButtonVariant {
        match self {
            ContactKind::Mail => ButtonVariant::Default,
            ContactKind::Phone => ButtonVariant::Secondary,
            ContactKind::ExternalLink => ButtonVariant::Outline,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub target: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

impl ContactLink {
    pub fn link(&self) -> LinkTarget {
        match self.kind {
            ContactKind::ExternalLink => LinkTarget::new_context(self.target),
            ContactKind::Mail | ContactKind::Phone => LinkTarget::same_context(self.target),
        }
    }
}

/// A tile in the hero's skills preview panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewTile {
    pub label: &'static str,
    pub detail: &'static str,
    pub icon: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Role {
    pub title: &'static str,
    pub date: &'static str,
    pub bullets: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionCopy {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub summary: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Daniel Olanrewaju",
    tagline: "Data Analyst • Business Intelligence",
    summary: "I turn raw data into decisions. SQL, Excel, Power BI, Tableau. Dashboards, KPI models, and automation that cut reporting time and improve performance.",
};

pub const CONTACTS: &[ContactLink] = &[
    ContactLink {
        kind: ContactKind::Mail,
        target: "mailto:olanrewajutd@gmail.com",
        label: "Mail",
        icon: "extra-email",
    },
    ContactLink {
        kind: ContactKind::Phone,
        target: "tel:+447448113345",
        label: "Mobile",
        icon: "extra-phone",
    },
    ContactLink {
        kind: ContactKind::ExternalLink,
        target: "https://www.linkedin.com/in/tobisucre",
        label: "LinkedIn",
        icon: "devicon-linkedin-plain",
    },
    ContactLink {
        kind: ContactKind::ExternalLink,
        target: "https://github.com/Theblackgenius?tab=repositories",
        label: "Github",
        icon: "devicon-github-plain",
    },
];

pub const PREVIEW_TILES: &[PreviewTile] = &[
    PreviewTile {
        label: "Power BI",
        detail: "Dashboards and DAX",
        icon: Some("📊"),
    },
    PreviewTile {
        label: "SQL",
        detail: "Data modelling and ETL",
        icon: Some("🗄"),
    },
    PreviewTile {
        label: "Excel",
        detail: "Power Query, PivotTables",
        icon: None,
    },
    PreviewTile {
        label: "Python",
        detail: "pandas, matplotlib",
        icon: None,
    },
];

pub const PROJECTS_SECTION: SectionCopy = SectionCopy {
    id: "projects",
    title: "Projects",
    subtitle: "Selected work with clear problems, methods, and measurable outcomes.",
};

pub const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "Google Ads Performance Analytics",
        stack: "MySQL • Power BI • DAX",
        bullets: &[
            "Modelled two thousand plus campaign rows and unified metrics for ROI and ROAS.",
            "Visualised performance by device, day, and region; flagged wasted spend.",
            "Informed budget shifts that improved paid performance.",
        ],
        cta: Some(Cta {
            href: "https://github.com/Theblackgenius/google-ads-campaign-analysis",
        }),
    },
    ProjectEntry {
        title: "Laptop Market Analysis",
        stack: "SQL • Power BI • Excel",
        bullets: &[
            "Analysed one thousand two hundred plus product records to map price versus performance drivers.",
            "Built a four page dashboard with dynamic filters for brand, GPU, and OS.",
            "Highlighted top value models across tiers and key price drivers.",
        ],
        cta: Some(Cta {
            href: "https://github.com/Theblackgenius/laptop-market-analysis-dashboard",
        }),
    },
    ProjectEntry {
        title: "Customer Segmentation",
        stack: "Python • scikit-learn • pandas",
        bullets: &[
            "Clustered five thousand plus customers to reveal high retention segments.",
            "Built clean feature set and visuals to support marketing decisions.",
            "Improved engagement with targeted strategies.",
        ],
        cta: Some(Cta::PLACEHOLDER),
    },
    ProjectEntry {
        title: "Sales Performance Dashboard",
        stack: "SQL • Tableau • Excel",
        bullets: &[
            "Built a Tableau dashboard to visualise regional and product sales performance.",
            "Connected SQL data sources and automated refresh schedules for live updates.",
            "Revealed underperforming regions and products, driving a 10% improvement in quarterly profit.",
        ],
        cta: Some(Cta::PLACEHOLDER),
    },
];

pub const EXPERIENCE_SECTION: SectionCopy = SectionCopy {
    id: "experience",
    title: "Experience",
    subtitle: "Highlights that show momentum and impact.",
};

pub const ROLE: Role = Role {
    title: "Squareme Africa • Data Analyst Intern",
    date: "Jan 2025",
    bullets: &[
        "Automated reporting with SQL and Excel, saving thirty percent of manual time.",
        "Built KPI dashboards in Power BI to speed up decisions by twenty five percent.",
        "Analysed engagement trends that lifted activity by forty percent.",
        "Partnered with product and UX on accessibility and performance tracking.",
    ],
};

pub const SKILLS_SECTION: SectionCopy = SectionCopy {
    id: "skills",
    title: "Skills",
    subtitle: "The tools I use to get results.",
};

pub const SKILLS: &[SkillEntry] = &[
    SkillEntry {
        label: "SQL: PostgreSQL, MySQL, modelling, optimisation",
    },
    SkillEntry {
        label: "Power BI: DAX, Power Query, data modelling",
    },
    SkillEntry {
        label: "Excel: PivotTables, XLOOKUP, Power Query",
    },
    SkillEntry {
        label: "Tableau: interactive dashboards, calculated fields, storytelling",
    },
    SkillEntry {
        label: "Python: pandas, NumPy, matplotlib",
    },
    SkillEntry {
        label: "Analytics: KPI design, A/B logic, cohort views",
    },
];

// The contact block keeps the "resume" anchor used by existing links.
pub const CONTACT_SECTION: SectionCopy = SectionCopy {
    id: "resume",
    title: "Contact",
    subtitle: "Reach out for roles, collaborations, or a walkthrough of any project.",
};
