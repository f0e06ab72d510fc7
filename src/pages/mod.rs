pub mod admin;
pub mod blog;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod portfolio;
pub mod services;
