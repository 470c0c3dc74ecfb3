//! Static site metadata served to the frontend.
//!
//! These values change at the pace of the marketing site, not of the data,
//! so they are compiled in rather than stored anywhere.

use serde::Serialize;
use utoipa::ToSchema;

/// Laboratory contact details.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Opening hours for one day or day range.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OpeningHours {
    pub day: String,
    pub hours: String,
}

/// Social media profile links.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SocialLinks {
    pub twitter: String,
    pub facebook: String,
    pub instagram: String,
    pub linkedin: String,
}

/// One entry in the site navigation.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NavLink {
    pub name: String,
    pub href: String,
}

/// Everything the frontend needs to render headers, footers and the
/// contact page.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SiteInfo {
    pub name: String,
    pub description: String,
    pub url: String,
    pub og_image: String,
    pub links: SocialLinks,
    pub contact: ContactInfo,
    pub hours: Vec<OpeningHours>,
    pub nav_links: Vec<NavLink>,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "SpringQuest Health Management Ltd".into(),
            description: "Accurate, reliable, and timely diagnostic testing for better \
                          healthcare outcomes. Our certified laboratory provides comprehensive \
                          testing services with fast results."
                .into(),
            url: "https://springhealthlabs.com".into(),
            og_image: "https://springhealthlabs.com/og-image.jpg".into(),
            links: SocialLinks {
                twitter: "https://twitter.com/springhealthlabs".into(),
                facebook: "https://facebook.com/springhealthlabs".into(),
                instagram: "https://instagram.com/springhealthlabs".into(),
                linkedin: "https://linkedin.com/company/springhealthlabs".into(),
            },
            contact: ContactInfo {
                email: "info@springhealthlabs.com".into(),
                phone: "+1 (555) 123-4567".into(),
                address: "123 Medical Center Drive, Suite 100, Anytown, ST 12345".into(),
            },
            hours: vec![
                OpeningHours {
                    day: "Monday - Friday".into(),
                    hours: "7:00 AM - 7:00 PM".into(),
                },
                OpeningHours {
                    day: "Saturday".into(),
                    hours: "8:00 AM - 2:00 PM".into(),
                },
                OpeningHours {
                    day: "Sunday".into(),
                    hours: "Closed".into(),
                },
            ],
            nav_links: vec![
                NavLink {
                    name: "Home".into(),
                    href: "/".into(),
                },
                NavLink {
                    name: "Services".into(),
                    href: "/services".into(),
                },
                NavLink {
                    name: "About Us".into(),
                    href: "/about".into(),
                },
                NavLink {
                    name: "Patient Resources".into(),
                    href: "/resources".into(),
                },
                NavLink {
                    name: "Contact".into(),
                    href: "/contact".into(),
                },
            ],
        }
    }
}
