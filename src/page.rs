use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use yew::functional::Reducible;

use crate::error::PageError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Careers,
}

impl Page {
    pub fn id(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Careers => "careers",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Page {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(Page::Home),
            "careers" => Ok(Page::Careers),
            _ => Err(PageError::Unknown(s.to_string())),
        }
    }
}

/// Holds the page currently on screen. Lives in the app shell's reducer so
/// there is exactly one writer; children get the value and a callback.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageSelector {
    current: Page,
}

pub enum PageAction {
    Navigate(Page),
}

impl PageSelector {
    pub fn new(current: Page) -> Self {
        Self { current }
    }

    pub fn current(&self) -> Page {
        self.current
    }

    /// Returns true if the page actually changed.
    pub fn navigate(&mut self, page: Page) -> bool {
        if self.current == page {
            return false;
        }
        log::info!("Switching page: {} -> {}", self.current, page);
        self.current = page;
        true
    }
}

impl Reducible for PageSelector {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            PageAction::Navigate(page) => {
                if self.current == page {
                    // Same Rc back means no re-render.
                    return self;
                }
                let mut next = (*self).clone();
                next.navigate(page);
                Rc::new(next)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_on_home() {
        assert_eq!(PageSelector::default().current(), Page::Home);
    }

    #[test]
    fn navigate_switches_and_reports_change() {
        let mut selector = PageSelector::default();
        assert!(selector.navigate(Page::Careers));
        assert_eq!(selector.current(), Page::Careers);
        assert!(selector.navigate(Page::Home));
        assert_eq!(selector.current(), Page::Home);
    }

    #[test]
    fn navigating_to_current_page_is_idempotent() {
        let mut once = PageSelector::default();
        once.navigate(Page::Home);

        let mut twice = PageSelector::default();
        twice.navigate(Page::Home);
        assert!(!twice.navigate(Page::Home));

        assert_eq!(once, twice);
    }

    #[test]
    fn reducer_returns_same_state_for_repeat_navigation() {
        let state = Rc::new(PageSelector::new(Page::Careers));
        let next = state.clone().reduce(PageAction::Navigate(Page::Careers));
        assert!(Rc::ptr_eq(&state, &next));

        let next = next.reduce(PageAction::Navigate(Page::Home));
        assert_eq!(next.current(), Page::Home);
    }

    #[test]
    fn last_navigation_wins() {
        let state = Rc::new(PageSelector::default())
            .reduce(PageAction::Navigate(Page::Careers))
            .reduce(PageAction::Navigate(Page::Home))
            .reduce(PageAction::Navigate(Page::Careers));
        assert_eq!(state.current(), Page::Careers);
    }

    #[test]
    fn parses_known_ids() {
        assert_eq!("home".parse::<Page>(), Ok(Page::Home));
        assert_eq!(" Careers ".parse::<Page>(), Ok(Page::Careers));
        assert_eq!(Page::Careers.to_string(), "careers");
    }

    #[test]
    fn unknown_id_is_rejected_without_state_change() {
        let state = Rc::new(PageSelector::new(Page::Careers));
        let parsed = "blog".parse::<Page>();
        assert_eq!(parsed, Err(PageError::Unknown("blog".to_string())));

        let next = match parsed {
            Ok(page) => state.clone().reduce(PageAction::Navigate(page)),
            Err(_) => state.clone(),
        };
        assert!(Rc::ptr_eq(&state, &next));
        assert_eq!(next.current(), Page::Careers);
    }
}
