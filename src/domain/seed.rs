//! Records installed on first run.

use chrono::{DateTime, TimeZone, Utc};

use super::entities::{
    ArticleSpecs, BillingCycle, Offers, Pricing, SeoRequirements, Website, WebsiteStatus,
    WordCountRange,
};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn seo(meta_description: bool, keywords: bool, heading_structure: bool) -> SeoRequirements {
    SeoRequirements {
        meta_description,
        keywords,
        heading_structure,
    }
}

/// The eight sample websites, newest `updated_at` last.
///
/// Every record passes [`crate::domain::schema::validate_form`].
pub fn seed_websites() -> Vec<Website> {
    vec![
        Website {
            id: "website-1".to_string(),
            name: "TechCrunch".to_string(),
            url: "https://techcrunch.com".to_string(),
            description: "Leading technology media property, dedicated to obsessively profiling startups, reviewing new Internet products, and breaking tech news.".to_string(),
            category: "News".to_string(),
            status: WebsiteStatus::Active,
            created_at: at(2024, 1, 15, 10, 30),
            updated_at: at(2024, 1, 20, 14, 45),
            offers: Offers {
                pricing: Pricing::Freemium,
                features: strings(&[
                    "Breaking Tech News",
                    "Startup Coverage",
                    "Product Reviews",
                    "Industry Analysis",
                ]),
                target_audience: strings(&[
                    "Tech Entrepreneurs",
                    "Investors",
                    "Tech Enthusiasts",
                    "Startup Founders",
                ]),
                unique_selling_points: strings(&[
                    "Exclusive Startup Scoops",
                    "Expert Analysis",
                    "Global Tech Coverage",
                ]),
            },
            article_specs: ArticleSpecs {
                content_types: strings(&[
                    "News Articles",
                    "Product Reviews",
                    "Startup Profiles",
                    "Industry Reports",
                ]),
                word_count_range: WordCountRange::new(800.0, 2500.0),
                tone_of_voice: strings(&["Professional", "Authoritative", "Engaging"]),
                required_sections: strings(&[
                    "Headline",
                    "Lead",
                    "Body",
                    "Conclusion",
                    "Related Links",
                ]),
                seo_requirements: seo(true, true, true),
                submission_guidelines: "Articles must be original, well-researched, and include credible sources. All claims must be fact-checked and verified.".to_string(),
            },
        },
        Website {
            id: "website-2".to_string(),
            name: "Shopify".to_string(),
            url: "https://shopify.com".to_string(),
            description: "Complete commerce platform that lets you start, grow, and manage a business. Build your online store with Shopify's ecommerce software.".to_string(),
            category: "E-commerce".to_string(),
            status: WebsiteStatus::Active,
            created_at: at(2024, 1, 10, 9, 15),
            updated_at: at(2024, 1, 22, 16, 20),
            offers: Offers {
                pricing: Pricing::Paid {
                    amount: 29.0,
                    currency: "USD".to_string(),
                    billing_cycle: BillingCycle::Monthly,
                },
                features: strings(&[
                    "Online Store Builder",
                    "Payment Processing",
                    "Inventory Management",
                    "Marketing Tools",
                    "Analytics Dashboard",
                ]),
                target_audience: strings(&[
                    "Small Business Owners",
                    "Entrepreneurs",
                    "E-commerce Managers",
                    "Retail Businesses",
                ]),
                unique_selling_points: strings(&[
                    "Easy Setup",
                    "Scalable Platform",
                    "Extensive App Store",
                    "24/7 Support",
                ]),
            },
            article_specs: ArticleSpecs {
                content_types: strings(&[
                    "How-to Guides",
                    "Case Studies",
                    "Feature Announcements",
                    "Best Practices",
                ]),
                word_count_range: WordCountRange::new(1000.0, 3000.0),
                tone_of_voice: strings(&["Helpful", "Professional", "Encouraging"]),
                required_sections: strings(&[
                    "Introduction",
                    "Step-by-step Instructions",
                    "Examples",
                    "Tips",
                    "Conclusion",
                ]),
                seo_requirements: seo(true, true, true),
                submission_guidelines: "Content should be actionable and help merchants grow their business. Include real examples and practical tips.".to_string(),
            },
        },
        Website {
            id: "website-3".to_string(),
            name: "Notion".to_string(),
            url: "https://notion.so".to_string(),
            description: "A new tool that blends your everyday work apps into one. It's the all-in-one workspace for you and your team.".to_string(),
            category: "SaaS".to_string(),
            status: WebsiteStatus::Active,
            created_at: at(2024, 1, 8, 11, 45),
            updated_at: at(2024, 1, 25, 13, 30),
            offers: Offers {
                pricing: Pricing::Freemium,
                features: strings(&[
                    "Note Taking",
                    "Database Management",
                    "Project Planning",
                    "Team Collaboration",
                    "Template Library",
                ]),
                target_audience: strings(&[
                    "Knowledge Workers",
                    "Students",
                    "Project Managers",
                    "Content Creators",
                ]),
                unique_selling_points: strings(&[
                    "All-in-one Workspace",
                    "Flexible Building Blocks",
                    "Powerful Databases",
                    "Beautiful Interface",
                ]),
            },
            article_specs: ArticleSpecs {
                content_types: strings(&[
                    "Tutorials",
                    "Templates",
                    "Productivity Tips",
                    "Use Cases",
                ]),
                word_count_range: WordCountRange::new(600.0, 2000.0),
                tone_of_voice: strings(&["Friendly", "Helpful", "Inspiring"]),
                required_sections: strings(&[
                    "Overview",
                    "Setup Instructions",
                    "Examples",
                    "Pro Tips",
                    "Resources",
                ]),
                seo_requirements: seo(true, true, true),
                submission_guidelines: "Focus on practical applications and real-world use cases. Include screenshots and step-by-step instructions.".to_string(),
            },
        },
        Website {
            id: "website-4".to_string(),
            name: "Dribbble".to_string(),
            url: "https://dribbble.com".to_string(),
            description: "Dribbble is the world's leading community for creatives to share, grow, and get hired. Discover and connect with designers worldwide.".to_string(),
            category: "Portfolio".to_string(),
            status: WebsiteStatus::Active,
            created_at: at(2024, 1, 12, 14, 20),
            updated_at: at(2024, 1, 23, 10, 15),
            offers: Offers {
                pricing: Pricing::Freemium,
                features: strings(&[
                    "Portfolio Showcase",
                    "Design Community",
                    "Job Board",
                    "Design Resources",
                    "Inspiration Feed",
                ]),
                target_audience: strings(&[
                    "Graphic Designers",
                    "UI/UX Designers",
                    "Creative Directors",
                    "Design Students",
                ]),
                unique_selling_points: strings(&[
                    "Premium Design Community",
                    "High-Quality Showcases",
                    "Networking Opportunities",
                    "Career Growth",
                ]),
            },
            article_specs: ArticleSpecs {
                content_types: strings(&[
                    "Design Showcases",
                    "Tutorials",
                    "Industry Insights",
                    "Designer Interviews",
                ]),
                word_count_range: WordCountRange::new(400.0, 1500.0),
                tone_of_voice: strings(&["Creative", "Inspiring", "Professional"]),
                required_sections: strings(&[
                    "Visual Introduction",
                    "Design Process",
                    "Key Features",
                    "Inspiration",
                ]),
                seo_requirements: seo(true, false, true),
                submission_guidelines: "Emphasize visual storytelling. Include high-quality images and focus on design process and inspiration.".to_string(),
            },
        },
        Website {
            id: "website-5".to_string(),
            name: "Medium".to_string(),
            url: "https://medium.com".to_string(),
            description: "Medium is an open platform where readers find dynamic thinking, and where expert and undiscovered voices can share their writing.".to_string(),
            category: "Blog".to_string(),
            status: WebsiteStatus::Active,
            created_at: at(2024, 1, 5, 16, 30),
            updated_at: at(2024, 1, 24, 12, 45),
            offers: Offers {
                pricing: Pricing::Freemium,
                features: strings(&[
                    "Publishing Platform",
                    "Reader Network",
                    "Monetization",
                    "Analytics",
                    "Community Engagement",
                ]),
                target_audience: strings(&[
                    "Writers",
                    "Thought Leaders",
                    "Content Creators",
                    "Professionals",
                ]),
                unique_selling_points: strings(&[
                    "Quality Content Focus",
                    "Built-in Audience",
                    "Clean Reading Experience",
                    "Writer-Friendly Tools",
                ]),
            },
            article_specs: ArticleSpecs {
                content_types: strings(&[
                    "Opinion Pieces",
                    "How-to Articles",
                    "Personal Stories",
                    "Industry Analysis",
                ]),
                word_count_range: WordCountRange::new(800.0, 4000.0),
                tone_of_voice: strings(&["Thoughtful", "Personal", "Engaging"]),
                required_sections: strings(&[
                    "Compelling Hook",
                    "Main Arguments",
                    "Supporting Evidence",
                    "Call to Action",
                ]),
                seo_requirements: seo(false, false, true),
                submission_guidelines: "Focus on original insights and personal experiences. Write in a conversational tone and engage with readers.".to_string(),
            },
        },
        Website {
            id: "website-6".to_string(),
            name: "Stripe".to_string(),
            url: "https://stripe.com".to_string(),
            description: "Stripe is a suite of payment APIs that powers commerce for online businesses of all sizes, including fraud prevention, and subscription management.".to_string(),
            category: "SaaS".to_string(),
            status: WebsiteStatus::Active,
            created_at: at(2024, 1, 3, 8, 45),
            updated_at: at(2024, 1, 26, 15, 20),
            offers: Offers {
                pricing: Pricing::Paid {
                    amount: 2.9,
                    currency: "USD".to_string(),
                    billing_cycle: BillingCycle::OneTime,
                },
                features: strings(&[
                    "Payment Processing",
                    "Subscription Management",
                    "Fraud Prevention",
                    "Global Payments",
                    "Developer APIs",
                ]),
                target_audience: strings(&[
                    "Developers",
                    "E-commerce Businesses",
                    "SaaS Companies",
                    "Marketplaces",
                ]),
                unique_selling_points: strings(&[
                    "Developer-First",
                    "Global Scale",
                    "Advanced Security",
                    "Comprehensive APIs",
                ]),
            },
            article_specs: ArticleSpecs {
                content_types: strings(&[
                    "Technical Documentation",
                    "Integration Guides",
                    "Best Practices",
                    "Case Studies",
                ]),
                word_count_range: WordCountRange::new(1200.0, 3500.0),
                tone_of_voice: strings(&["Technical", "Clear", "Authoritative"]),
                required_sections: strings(&[
                    "Overview",
                    "Implementation",
                    "Code Examples",
                    "Testing",
                    "Troubleshooting",
                ]),
                seo_requirements: seo(true, true, true),
                submission_guidelines: "Technical accuracy is paramount. Include working code examples and comprehensive testing instructions.".to_string(),
            },
        },
        Website {
            id: "website-7".to_string(),
            name: "Behance".to_string(),
            url: "https://behance.net".to_string(),
            description: "Behance is the world's largest creative network for showcasing and discovering creative work. Connect with creative professionals worldwide.".to_string(),
            category: "Portfolio".to_string(),
            status: WebsiteStatus::Pending,
            created_at: at(2024, 1, 18, 13, 15),
            updated_at: at(2024, 1, 27, 9, 30),
            offers: Offers {
                pricing: Pricing::Free,
                features: strings(&[
                    "Creative Portfolio",
                    "Project Showcase",
                    "Creative Community",
                    "Adobe Integration",
                    "Talent Discovery",
                ]),
                target_audience: strings(&[
                    "Creative Professionals",
                    "Art Directors",
                    "Photographers",
                    "Illustrators",
                ]),
                unique_selling_points: strings(&[
                    "Adobe Ecosystem",
                    "Professional Network",
                    "High-Quality Showcases",
                    "Industry Recognition",
                ]),
            },
            article_specs: ArticleSpecs {
                content_types: strings(&[
                    "Project Case Studies",
                    "Creative Process",
                    "Behind the Scenes",
                    "Industry Trends",
                ]),
                word_count_range: WordCountRange::new(500.0, 2000.0),
                tone_of_voice: strings(&["Creative", "Inspiring", "Visual"]),
                required_sections: strings(&[
                    "Project Overview",
                    "Creative Process",
                    "Visual Showcase",
                    "Results",
                ]),
                seo_requirements: seo(true, false, true),
                submission_guidelines: "Showcase the creative process with high-quality visuals. Focus on storytelling and inspiration.".to_string(),
            },
        },
        Website {
            id: "website-8".to_string(),
            name: "GitHub".to_string(),
            url: "https://github.com".to_string(),
            description: "GitHub is where over 100 million developers shape the future of software, together. Build, ship, and maintain your projects on GitHub.".to_string(),
            category: "SaaS".to_string(),
            status: WebsiteStatus::Inactive,
            created_at: at(2024, 1, 1, 12, 0),
            updated_at: at(2024, 1, 28, 11, 45),
            offers: Offers {
                pricing: Pricing::Freemium,
                features: strings(&[
                    "Version Control",
                    "Code Collaboration",
                    "Project Management",
                    "CI/CD",
                    "Security Features",
                ]),
                target_audience: strings(&[
                    "Software Developers",
                    "DevOps Engineers",
                    "Open Source Contributors",
                    "Development Teams",
                ]),
                unique_selling_points: strings(&[
                    "Largest Developer Community",
                    "Integrated DevOps",
                    "Open Source Hub",
                    "Enterprise Security",
                ]),
            },
            article_specs: ArticleSpecs {
                content_types: strings(&[
                    "Technical Tutorials",
                    "Open Source Guides",
                    "Best Practices",
                    "Feature Announcements",
                ]),
                word_count_range: WordCountRange::new(1000.0, 4000.0),
                tone_of_voice: strings(&["Technical", "Community-Focused", "Educational"]),
                required_sections: strings(&[
                    "Introduction",
                    "Prerequisites",
                    "Step-by-Step Guide",
                    "Code Examples",
                    "Next Steps",
                ]),
                seo_requirements: seo(true, true, true),
                submission_guidelines: "Provide clear, actionable technical content with working code examples. Focus on community best practices.".to_string(),
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema::validate_form;
    use std::collections::HashSet;

    #[test]
    fn test_seed_has_eight_unique_records() {
        let seed = seed_websites();
        let ids: HashSet<_> = seed.iter().map(|w| w.id.as_str()).collect();

        assert_eq!(seed.len(), 8);
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn test_seed_records_are_valid() {
        for website in seed_websites() {
            assert!(
                validate_form(&website.to_form_data()).is_ok(),
                "{} fails validation",
                website.id
            );
            assert!(website.updated_at >= website.created_at);
        }
    }

    #[test]
    fn test_seed_covers_every_status_and_pricing() {
        let seed = seed_websites();

        assert_eq!(seed.iter().filter(|w| w.is_paid()).count(), 2);
        assert_eq!(seed.iter().filter(|w| w.is_active()).count(), 6);
        assert!(seed.iter().any(|w| w.status == WebsiteStatus::Pending));
        assert!(seed.iter().any(|w| w.offers.pricing == Pricing::Free));
    }

    #[test]
    fn test_seed_timestamps() {
        let github = seed_websites().pop().unwrap();
        assert_eq!(github.created_at.to_rfc3339(), "2024-01-01T12:00:00+00:00");
    }
}
