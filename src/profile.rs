//! Author profile shown around the project catalog.

pub struct Profile {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub portrait: &'static str,
    pub about: &'static [&'static str],
    /// Hero buttons, in display order.
    pub links: &'static [ProfileLink],
    /// Footer icons; not the same set or order as the hero.
    pub footer_links: &'static [ProfileLink],
    pub contact_email: &'static str,
    pub linkedin_url: &'static str,
    pub footer_roles: &'static str,
    pub copyright_year: u16,
}

pub struct ProfileLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub struct TechGroup {
    pub title: &'static str,
    pub items: &'static [&'static str],
    /// Rendered with the muted "in progress" badge style.
    pub learning: bool,
}

impl Profile {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

pub const PROFILE: Profile = Profile {
    first_name: "Justice",
    last_name: "Adeniji",
    headline: "AI Engineer & Machine Learning Expert",
    tagline: "Fullstack Developer passionate about building intelligent solutions that solve real-world problems.",
    portrait: "/placeholder.svg",
    about: &[
        "I'm Justice Adeniji, a second-year Software Engineering student at Veritas University with a passion for artificial intelligence and machine learning. I specialize in building intelligent systems that bridge the gap between complex algorithms and user-friendly applications.",
        "What drives me is the belief that technology should be simple, performant, and accessible to everyone. I love creating solutions that not only solve problems but also provide exceptional user experiences. Whether it's developing AI-powered applications or building robust fullstack systems, I focus on clean code, scalable architecture, and meaningful impact.",
        "I'm always eager to learn new technologies and collaborate on exciting projects. Currently open to internships and collaborative opportunities where I can contribute my skills while continuing to grow as a developer.",
    ],
    links: &[
        ProfileLink { label: "LinkedIn", href: "https://linkedin.com/in/justice-adeniji" },
        ProfileLink { label: "Email", href: "mailto:justice.adeniji@email.com" },
        ProfileLink { label: "Phone", href: "tel:+234 802 262 1675" },
        ProfileLink { label: "GitHub", href: "https://github.com/justice-adeniji" },
        ProfileLink { label: "Resume", href: "/resume.pdf" },
    ],
    footer_links: &[
        ProfileLink { label: "GitHub", href: "https://github.com/justice-adeniji" },
        ProfileLink { label: "LinkedIn", href: "https://linkedin.com/in/justice-adeniji" },
        ProfileLink { label: "Email", href: "mailto:justiceadeniji@email.com" },
        ProfileLink { label: "Phone", href: "tel:+234 802 262 1675" },
    ],
    contact_email: "justiceadeniji@email.com",
    linkedin_url: "https://www.linkedin.com/in/justice-adeniji/",
    footer_roles: "AI Engineer \u{2022} Machine Learning Expert \u{2022} Fullstack Developer",
    copyright_year: 2025,
};

pub const TECH_STACK: &[TechGroup] = &[
    TechGroup {
        title: "Languages",
        items: &["JavaScript", "Python", "TypeScript", "Java", "SQL"],
        learning: false,
    },
    TechGroup {
        title: "Frameworks & Libraries",
        items: &["React", "Next.js", "Node.js", "Flutter", "Flask", "Spring Boot"],
        learning: false,
    },
    TechGroup {
        title: "Tools & Platforms",
        items: &["Git", "Github", "Android Studio", "VS Code", "IntelliJ IDEA", "PosgreSQL", "Vercel", "Figma", "Canva"],
        learning: false,
    },
    TechGroup { title: "Currently Learning", items: &["AI", "Docker"], learning: true },
];
