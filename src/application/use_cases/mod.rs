pub mod faq;
pub mod format;
pub mod populators;
pub mod tabs;
