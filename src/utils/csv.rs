//! Client-side CSV export of captured leads.

use wasm_bindgen::{JsCast, JsValue};

use crate::admin::store::Lead;

const HEADERS: [&str; 8] = [
    "Name",
    "Email",
    "Institution",
    "Research Area",
    "Project Type",
    "Budget",
    "Message",
    "Submitted At",
];

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Header row followed by one row per lead. Only the free-text message field
/// is quoted; the other columns are constrained form values.
pub fn leads_to_csv(leads: &[Lead]) -> String {
    let mut rows = Vec::with_capacity(leads.len() + 1);
    rows.push(HEADERS.join(","));
    for lead in leads {
        let message = quote(&lead.message);
        rows.push(
            [
                lead.name.as_str(),
                lead.email.as_str(),
                lead.institution.as_str(),
                lead.research_area.as_str(),
                lead.project_type.as_str(),
                lead.budget.as_str(),
                message.as_str(),
                lead.submitted_at.as_str(),
            ]
            .join(","),
        );
    }
    rows.join("\n")
}

/// `sagittarius-leads-{YYYY-MM-DD}.csv` for today's date.
pub fn export_filename() -> String {
    let iso = js_sys::Date::new_0()
        .to_iso_string()
        .as_string()
        .unwrap_or_default();
    let day = iso.get(..10).unwrap_or("export");
    format!("sagittarius-leads-{}.csv", day)
}

/// Triggers a browser download of `csv` through a temporary object URL.
pub fn download_csv(filename: &str, csv: &str) {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };

    let parts = js_sys::Array::of1(&JsValue::from_str(csv));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv");
    let blob = match web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) {
        Ok(blob) => blob,
        Err(_) => return,
    };
    let url = match web_sys::Url::create_object_url_with_blob(&blob) {
        Ok(url) => url,
        Err(_) => return,
    };

    if let Ok(element) = document.create_element("a") {
        if let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() {
            anchor.set_href(&url);
            anchor.set_download(filename);
            if let Some(body) = document.body() {
                let _ = body.append_child(&anchor);
                anchor.click();
                let _ = body.remove_child(&anchor);
            }
        }
    }
    let _ = web_sys::Url::revoke_object_url(&url);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(message: &str) -> Lead {
        Lead {
            id: "1".into(),
            name: "Dr. Sarah Chen".into(),
            email: "sarah@stanford.edu".into(),
            institution: "Stanford University".into(),
            research_area: "biology".into(),
            project_type: "new-website".into(),
            budget: "25k-50k".into(),
            message: message.into(),
            submitted_at: "2025-01-25T10:30:00Z".into(),
        }
    }

    #[test]
    fn header_row_then_one_row_per_lead() {
        let csv = leads_to_csv(&[lead("hello"), lead("world")]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Name,Email,Institution"));
        assert!(lines[1].contains("\"hello\""));
    }

    #[test]
    fn message_commas_stay_inside_the_quoted_field() {
        let csv = leads_to_csv(&[lead("platform, portal, and pipeline")]);
        let row = csv.lines().nth(1).unwrap();
        assert!(row.contains("\"platform, portal, and pipeline\""));
        // Splitting on quotes isolates the message; the outer columns stay 7.
        assert_eq!(row.split('"').count(), 3);
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let csv = leads_to_csv(&[lead(r#"we need a "fast" portal"#)]);
        assert!(csv.contains(r#""we need a ""fast"" portal""#));
    }

    #[test]
    fn no_leads_is_just_the_header() {
        assert_eq!(leads_to_csv(&[]).lines().count(), 1);
    }
}
