//! Static site content. Strings only; nothing here carries behavior.

pub mod blog;
pub mod features;
pub mod portfolio;
pub mod services;
pub mod team;
pub mod testimonials;
