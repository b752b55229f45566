pub mod use_cases;

pub use use_cases::faq::FaqToggles;
pub use use_cases::populators::populate_page;
pub use use_cases::tabs::{TabBar, TabSpec, DECK_TABS};
