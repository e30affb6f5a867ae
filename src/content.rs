//! Static copy for both pages. Views only iterate over these tables.

use crate::components::icon::Icon;

pub const NAV_SECTIONS: [&str; 4] = ["Home", "About", "Services", "Pricing"];

pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub desc: &'static str,
}

pub const FEATURES: [Feature; 4] = [
    Feature { icon: Icon::Dumbbell, title: "Pro Equipment", desc: "Train with the best Hammer Strength machinery." },
    Feature { icon: Icon::Zap, title: "HIIT Zones", desc: "Dedicated areas for high-intensity explosive workouts." },
    Feature { icon: Icon::Users, title: "Community", desc: "Join a tribe that motivates you to show up every day." },
    Feature { icon: Icon::Clock, title: "24/7 Access", desc: "Train on your schedule with round-the-clock access." },
];

pub struct Skill {
    pub label: &'static str,
    pub percent: u8,
}

pub const SKILLS: [Skill; 3] = [
    Skill { label: "Body Building", percent: 95 },
    Skill { label: "Cardio Fitness", percent: 98 },
    Skill { label: "Crossfit", percent: 92 },
];

pub struct Service {
    pub title: &'static str,
    pub image: &'static str,
}

pub const SERVICES: [Service; 4] = [
    Service { title: "Personal Training", image: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=800" },
    Service { title: "Group Fitness", image: "https://images.unsplash.com/photo-1574680096141-1cddd70fb668?w=800" },
    Service { title: "Body Building", image: "https://images.unsplash.com/photo-1534367507873-d2d7e24c797f?w=800" },
    Service { title: "Strength", image: "https://images.unsplash.com/photo-1517836357463-d25dfeac3438?w=800" },
];

pub const BASE_PERKS: [&str; 3] = ["Gym Access", "Locker Room", "Free WiFi"];
pub const FEATURED_PERK: &str = "1 PT Session";

pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    pub featured: bool,
}

impl PricingTier {
    pub fn perks(&self) -> Vec<&'static str> {
        let mut perks = BASE_PERKS.to_vec();
        if self.featured {
            perks.push(FEATURED_PERK);
        }
        perks
    }
}

pub const PRICING_TIERS: [PricingTier; 4] = [
    PricingTier { name: "Daily", price: "₦ 3,000", featured: false },
    PricingTier { name: "Bi-Weekly", price: "₦ 20,000", featured: false },
    PricingTier { name: "Monthly", price: "₦ 30,000", featured: true },
    PricingTier { name: "Quarterly", price: "₦ 75,000", featured: false },
];

pub const BENEFITS: [Feature; 3] = [
    Feature { icon: Icon::Zap, title: "Electric Atmosphere", desc: "Work somewhere you love coming to every day." },
    Feature { icon: Icon::Heart, title: "Real Impact", desc: "Change lives through health and wellness." },
    Feature { icon: Icon::Users, title: "Family Culture", desc: "We support each other to grow and succeed." },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Employment {
    FullTime,
    PartTime,
}

impl Employment {
    pub fn label(self) -> &'static str {
        match self {
            Employment::FullTime => "Full-Time",
            Employment::PartTime => "Part-Time",
        }
    }
}

pub struct Position {
    pub title: &'static str,
    pub location: &'static str,
    pub employment: Employment,
    pub desc: &'static str,
}

pub const POSITIONS: [Position; 4] = [
    Position {
        title: "Supervisor",
        location: "Kubwa, Abuja",
        employment: Employment::FullTime,
        desc: "Lead our team. Manage daily operations and ensure staff excellence.",
    },
    Position {
        title: "Fitness Coach",
        location: "Kubwa, Abuja",
        employment: Employment::PartTime,
        desc: "Lead high-energy HIIT, Spin, and Aerobics classes. Inspire the tribe.",
    },
    Position {
        title: "Manager",
        location: "Kubwa, Abuja",
        employment: Employment::FullTime,
        desc: "The captain of the ship. Ensure facility safety and member satisfaction.",
    },
    Position {
        title: "Cleaner",
        location: "Kubwa, Abuja",
        employment: Employment::FullTime,
        desc: "Maintain our 5-star hygiene standards. Create a welcoming environment.",
    },
];

/// Footer "Useful Links": label and the page id it navigates to.
/// Services and Pricing live on the home page.
pub const FOOTER_LINKS: [(&str, &str); 4] = [
    ("Home", "home"),
    ("Careers", "careers"),
    ("Services", "home"),
    ("Pricing", "home"),
];

pub const SUPPORT_LINKS: [&str; 4] = ["Login", "My Account", "Privacy Policy", "Terms"];

pub const SOCIAL_ICONS: [Icon; 3] = [Icon::Facebook, Icon::Twitter, Icon::Instagram];

pub const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1534438327276-14e5300c3a48?auto=format&fit=crop&w=1950&q=80";
pub const ABOUT_IMAGE: &str =
    "https://images.unsplash.com/photo-1571019614242-c5c5dee9f50b?auto=format&fit=crop&w=1350&q=80";
pub const CAREERS_IMAGE: &str =
    "https://images.unsplash.com/photo-1593079831268-3381b0db4a77?auto=format&fit=crop&w=1950&q=80";
pub const TEXTURE_IMAGE: &str = "https://www.transparenttextures.com/patterns/carbon-fibre.png";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Page;
    use pretty_assertions::assert_eq;

    #[test]
    fn exactly_one_tier_is_featured() {
        let featured: Vec<&str> = PRICING_TIERS.iter().filter(|t| t.featured).map(|t| t.name).collect();
        assert_eq!(featured, vec!["Monthly"]);
    }

    #[test]
    fn featured_tier_gets_the_extra_perk() {
        assert_eq!(
            PRICING_TIERS[2].perks(),
            vec!["Gym Access", "Locker Room", "Free WiFi", "1 PT Session"]
        );
        assert_eq!(PRICING_TIERS[0].perks(), BASE_PERKS.to_vec());
    }

    #[test]
    fn footer_links_point_at_real_pages() {
        let targets: Vec<Page> = FOOTER_LINKS
            .iter()
            .map(|(_, id)| id.parse::<Page>().unwrap())
            .collect();
        assert_eq!(targets, vec![Page::Home, Page::Careers, Page::Home, Page::Home]);
    }

    #[test]
    fn only_the_coach_role_is_part_time() {
        let part_time: Vec<&str> = POSITIONS
            .iter()
            .filter(|p| p.employment == Employment::PartTime)
            .map(|p| p.title)
            .collect();
        assert_eq!(part_time, vec!["Fitness Coach"]);
    }
}
