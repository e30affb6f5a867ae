use log::Level;

/// Share of an element that must be inside the viewport before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Delay added per sibling when a list of cards reveals one after another.
pub const STAGGER_STEP_MS: u32 = 100;

/// Window scroll offset (px) after which the navbar switches to its solid style.
pub const NAV_SCROLL_THRESHOLD: f64 = 20.0;

pub const ASSET_BASE_URL: &str = "https://aheadfitness.ng/img";
pub const ICON_BASE_URL: &str = "https://unpkg.com/lucide-static@0.468.0/icons";

pub const BRAND_NAME: &str = "Ahead Fitness";
pub const CONTACT_EMAIL: &str = "info@aheadfitness.ng";
pub const CONTACT_PHONE: &str = "0913 443 3612";
pub const CONTACT_ADDRESS: &str = "123 Fitness Ave, Kubwa, Abuja";

/// Reveal delay for the `index`-th item of a staggered list.
pub fn stagger_delay(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(STAGGER_STEP_MS)
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn asset_url(name: &str) -> String {
    format!("{}/{}", ASSET_BASE_URL, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_grows_by_step() {
        assert_eq!(stagger_delay(0), 0);
        assert_eq!(stagger_delay(1), 100);
        assert_eq!(stagger_delay(3), 300);
    }

    #[test]
    fn stagger_saturates_instead_of_overflowing() {
        assert_eq!(stagger_delay(usize::MAX), u32::MAX);
    }

    #[test]
    fn asset_url_joins_base_and_name() {
        assert_eq!(asset_url("logo2.png"), "https://aheadfitness.ng/img/logo2.png");
    }
}
