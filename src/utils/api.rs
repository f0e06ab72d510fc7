//! Outbound requests: the contact-form relay and the portfolio feed.

use gloo_console::{error, log};
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::data::portfolio::{fallback_projects, PortfolioItem};

/// Payload the hosted form relay turns into an email.
#[derive(Serialize)]
pub struct ContactSubmission<'a> {
    pub access_key: &'a str,
    pub subject: String,
    pub name: &'a str,
    pub email: &'a str,
    pub institution: &'a str,
    pub research_area: &'a str,
    pub project_type: &'a str,
    pub budget: &'a str,
    pub message: &'a str,
}

#[derive(Deserialize)]
struct RelayResponse {
    success: bool,
    #[serde(default)]
    message: String,
}

/// Sends a lead to the form relay. `Ok(true)` means the relay accepted it;
/// `Ok(false)` and `Err` are both surfaced to the user by the caller.
pub async fn submit_contact(submission: &ContactSubmission<'_>) -> Result<bool, gloo_net::Error> {
    let response = Request::post(config::FORM_RELAY_URL)
        .json(submission)?
        .send()
        .await?;
    let body: RelayResponse = response.json().await?;
    if !body.success {
        log!("form relay rejected submission:", body.message);
    }
    Ok(body.success)
}

#[derive(Deserialize)]
struct PortfolioDocument {
    #[serde(default)]
    projects: Vec<PortfolioItem>,
}

/// The feed is either a bare array or an object with a `projects` list.
pub fn decode_portfolio(raw: &str) -> Option<Vec<PortfolioItem>> {
    if let Ok(items) = serde_json::from_str::<Vec<PortfolioItem>>(raw) {
        return Some(items);
    }
    serde_json::from_str::<PortfolioDocument>(raw)
        .ok()
        .map(|doc| doc.projects)
}

/// Fetches the portfolio feed; any failure falls back to the built-in list
/// so the page always has projects to render.
pub async fn fetch_portfolio() -> Vec<PortfolioItem> {
    match Request::get(config::PORTFOLIO_DATA_URL).send().await {
        Ok(response) if response.ok() => match response.text().await {
            Ok(raw) => match decode_portfolio(&raw) {
                Some(items) => items,
                None => {
                    error!("portfolio feed was not decodable, using fallback");
                    fallback_projects()
                }
            },
            Err(err) => {
                error!("portfolio feed read failed:", err.to_string());
                fallback_projects()
            }
        },
        Ok(response) => {
            log!("portfolio feed returned status", response.status());
            fallback_projects()
        }
        Err(err) => {
            error!("portfolio fetch error:", err.to_string());
            fallback_projects()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_bare_array() {
        let raw = r#"[{
            "id": "x1",
            "title": "Demo",
            "category": "biology",
            "description": "d",
            "image": "/images/demo.png",
            "technologies": ["Rust"],
            "liveUrl": "https://example.org"
        }]"#;
        let items = decode_portfolio(raw).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "x1");
        assert_eq!(items[0].github_url, None);
        assert!(!items[0].featured);
    }

    #[test]
    fn decodes_a_projects_object() {
        let raw = r#"{"projects": [{
            "id": "x2",
            "title": "Demo",
            "category": "physics",
            "description": "d",
            "image": "/images/demo.png",
            "technologies": [],
            "liveUrl": "https://example.org",
            "githubUrl": "https://github.com/example/demo",
            "featured": true
        }]}"#;
        let items = decode_portfolio(raw).unwrap();
        assert_eq!(items.len(), 1);
        assert!(items[0].featured);
        assert!(items[0].github_url.is_some());
    }

    #[test]
    fn object_without_projects_decodes_to_empty() {
        assert_eq!(decode_portfolio(r#"{"foo": 1}"#).unwrap().len(), 0);
    }

    #[test]
    fn garbage_is_not_decodable_and_fallback_is_non_empty() {
        assert!(decode_portfolio("not json at all").is_none());
        assert_eq!(fallback_projects().len(), 3);
    }
}
