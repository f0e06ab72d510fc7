pub mod detail_panel;
pub mod features;
pub mod footer;
pub mod hero;
pub mod nav;
pub mod testimonials;
