//! Hard-coded site content: articles, features, navigation menus,
//! footer sections and social links. Everything is fixed at compile
//! time; the views only read these tables.

pub const SITE_NAME: &str = "SupplyHub";
pub const TAGLINE: &str = "Your Supply Chain Intelligence Platform";
pub const LOGO: &str = "assets/logo.svg";

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: u32,
    pub title: &'static str,
    pub image: &'static str,
    pub summary: &'static str,
}

/// Slides for the hero carousel, in presentation order. Ids are unique
/// and stable; the load-flag map in the carousel state is keyed on them.
pub const ARTICLES: &[Article] = &[
    Article {
        id: 1,
        title: "AI-Powered Analytics Revolutionizing Supply Chain",
        image: "assets/articles/ai-analytics.svg",
        summary: "Advanced AI analytics dashboards providing real-time insights into supply chain operations and performance metrics",
    },
    Article {
        id: 2,
        title: "Machine Learning Transforming Supply Chain Intelligence",
        image: "assets/articles/ai-brain.svg",
        summary: "How machine learning and artificial intelligence are creating smarter, more efficient supply chain networks",
    },
    Article {
        id: 3,
        title: "Digital Procurement Solutions",
        image: "assets/articles/procurement.svg",
        summary: "Modern procurement strategies leveraging digital transformation for better supplier relationships and cost management",
    },
    Article {
        id: 4,
        title: "Revenue Optimization Through Data",
        image: "assets/articles/revenue.svg",
        summary: "Data-driven approaches to maximize revenue and optimize supply chain financial performance",
    },
    Article {
        id: 5,
        title: "Strategic Procurement Management",
        image: "assets/articles/procurement-doc.svg",
        summary: "Best practices in procurement management for sustainable business growth",
    },
];

/// Brand accent applied to a feature card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Primary,
    Secondary,
    Tertiary,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Accent::Primary => "accent-primary",
            Accent::Secondary => "accent-secondary",
            Accent::Tertiary => "accent-tertiary",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub accent: Accent,
    pub items: &'static [&'static str],
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "STAY UP TO DATE",
        icon: "assets/icons/news.svg",
        description: "Get real-time updates on market trends, pricing, and supply chain disruptions",
        accent: Accent::Primary,
        items: &["News digests", "Events", "Associations and groups", "Customer stories"],
    },
    Feature {
        title: "EXPAND YOUR NETWORK",
        icon: "assets/icons/network.svg",
        description: "Connect with verified suppliers and buyers from around the globe",
        accent: Accent::Secondary,
        items: &["Tech Start-ups", "Top Tech Companies", "Diversity Companies"],
    },
    Feature {
        title: "MAXIMIZE VALUE",
        icon: "assets/icons/value.svg",
        description: "Optimize your supply chain with AI-powered insights and recommendations",
        accent: Accent::Tertiary,
        items: &["Concepts", "Templates", "Process Manuals", "Tools and SW directory", "AI Agents"],
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct MenuSection {
    pub title: &'static str,
    pub entries: &'static [&'static str],
}

/// Header dropdown menus. Entry links are derived with
/// [`crate::util::title_to_slug`].
pub const NAV_MENU: &[MenuSection] = &[
    MenuSection {
        title: "Stay up to date",
        entries: &["News digests", "Events", "Associations and groups", "Customer stories"],
    },
    MenuSection {
        title: "Network",
        entries: &["Tech Start-ups", "Top Tech Companies", "Diversity Companies"],
    },
    MenuSection {
        title: "Generate Value",
        entries: &["Concepts", "Templates", "Process Manuals", "Tools and SW directory", "AI Agents"],
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FooterSection {
    pub title: &'static str,
    pub links: &'static [FooterLink],
}

pub const FOOTER_SECTIONS: &[FooterSection] = &[
    FooterSection {
        title: "Company",
        links: &[
            FooterLink { label: "About Us", href: "/about" },
            FooterLink { label: "Careers", href: "/careers" },
            FooterLink { label: "Press", href: "/press" },
            FooterLink { label: "Blog", href: "/blog" },
        ],
    },
    FooterSection {
        title: "Resources",
        links: &[
            FooterLink { label: "Documentation", href: "/docs" },
            FooterLink { label: "Support", href: "/support" },
            FooterLink { label: "API", href: "/api" },
            FooterLink { label: "Partners", href: "/partners" },
        ],
    },
    FooterSection {
        title: "Legal",
        links: &[
            FooterLink { label: "Privacy Policy", href: "/privacy" },
            FooterLink { label: "Terms of Service", href: "/terms" },
            FooterLink { label: "Cookie Policy", href: "/cookies" },
            FooterLink { label: "Security", href: "/security" },
        ],
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct SocialLink {
    pub platform: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        platform: "LinkedIn",
        icon: "assets/icons/linkedin.svg",
        href: "https://linkedin.com/company/supplyhub",
    },
    SocialLink {
        platform: "Twitter",
        icon: "assets/icons/twitter.svg",
        href: "https://twitter.com/supplyhub",
    },
    SocialLink {
        platform: "GitHub",
        icon: "assets/icons/github.svg",
        href: "https://github.com/supplyhub/supplyhub",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_ids_are_unique() {
        let mut ids: Vec<u32> = ARTICLES.iter().map(|a| a.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), ARTICLES.len());
    }

    #[test]
    fn every_feature_has_items() {
        for feature in FEATURES {
            assert!(!feature.items.is_empty(), "{}", feature.title);
        }
    }
}
