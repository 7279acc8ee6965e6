pub mod catalog;
pub mod entities;
pub mod ordering;
pub mod translation;
