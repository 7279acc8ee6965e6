pub mod i18n;
pub mod navigation;
pub mod project;
