/// One tab per deck section. The order here is the order the navigation
/// renders in; the first entry is the section shown on page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSpec {
    pub id: &'static str,
    pub label: &'static str,
}

pub const DECK_TABS: [TabSpec; 12] = [
    TabSpec { id: "summary", label: "Summary" },
    TabSpec { id: "problem", label: "The Problem" },
    TabSpec { id: "solution", label: "Our Solution" },
    TabSpec { id: "market", label: "Market" },
    TabSpec { id: "investment", label: "Investment" },
    TabSpec { id: "financial", label: "Financials" },
    TabSpec { id: "impact", label: "Impact" },
    TabSpec { id: "timeline", label: "Timeline" },
    TabSpec { id: "risks", label: "Risks" },
    TabSpec { id: "team", label: "Team" },
    TabSpec { id: "regulatory", label: "Permits" },
    TabSpec { id: "faq", label: "FAQ" },
];

/// Tab selection state: exactly one section is active at any time. Selecting
/// a tab deactivates the previous one as a single transition, mirroring what
/// `deck.js` does to the DOM classes at runtime.
#[derive(Debug, Clone)]
pub struct TabBar {
    active: usize,
}

impl TabBar {
    pub fn new() -> Self {
        Self { active: 0 }
    }

    /// Switches to the tab with the given id. Unknown ids leave the current
    /// selection untouched.
    pub fn select(&mut self, id: &str) -> bool {
        match DECK_TABS.iter().position(|tab| tab.id == id) {
            Some(index) => {
                self.active = index;
                true
            }
            None => false,
        }
    }

    pub fn active(&self) -> TabSpec {
        DECK_TABS[self.active]
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active().id == id
    }
}

impl Default for TabBar {
    fn default() -> Self {
        Self::new()
    }
}
