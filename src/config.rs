//! Site-wide endpoints and asset constants.

/// Hosted form relay that forwards contact submissions as email.
pub const FORM_RELAY_URL: &str = "https://api.web3forms.com/submit";

/// Access key identifying this site to the form relay.
pub const FORM_RELAY_ACCESS_KEY: &str = "7f3c9a2e-5b14-4d6e-9c8a-1f2b3d4e5a6b";

/// Optional portfolio feed; the page falls back to built-in data when this
/// is unreachable.
pub const PORTFOLIO_DATA_URL: &str = "/api/portfolio.json";

/// Shown whenever a project or team image fails to load.
pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder.png";

pub fn get_contact_email() -> &'static str {
    "hello@sagittarius.ai"
}
