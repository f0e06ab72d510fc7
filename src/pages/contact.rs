use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::utils::api::{submit_contact, ContactSubmission};

/// The contact form fields. Transitions are pure so the submit flow is
/// testable: a confirmed success resets the fields, anything else keeps them
/// for retry.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub institution: String,
    pub research_area: String,
    pub project_type: String,
    pub budget: String,
    pub message: String,
}

impl LeadForm {
    pub fn set(&mut self, field: &str, value: String) {
        match field {
            "name" => self.name = value,
            "email" => self.email = value,
            "institution" => self.institution = value,
            "research_area" => self.research_area = value,
            "project_type" => self.project_type = value,
            "budget" => self.budget = value,
            "message" => self.message = value,
            _ => {}
        }
    }

    /// Institution and budget are optional; everything else is required.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.research_area.is_empty()
            && !self.project_type.is_empty()
            && !self.message.trim().is_empty()
    }

    pub fn subject(&self) -> String {
        format!("New project inquiry from {}", self.name)
    }
}

/// Outcome of one submission attempt applied to the page state.
/// Returns the acknowledgment flag; on success the form is reset.
pub fn apply_outcome(form: &mut LeadForm, success: bool) -> bool {
    if success {
        *form = LeadForm::default();
    }
    success
}

/// `/contact?service={id}` pre-selects the matching research area.
#[derive(Deserialize, Serialize, Default, PartialEq)]
pub struct ContactQuery {
    #[serde(default)]
    pub service: String,
}

const RESEARCH_AREAS: &[(&str, &str)] = &[
    ("biology", "Biology"),
    ("chemistry", "Chemistry"),
    ("physics", "Physics"),
    ("interdisciplinary", "Interdisciplinary"),
];

const PROJECT_TYPES: &[(&str, &str)] = &[
    ("new-website", "New Website"),
    ("redesign", "Website Redesign"),
    ("data-platform", "Data Platform"),
    ("research-portal", "Research Portal"),
    ("collaboration-tool", "Collaboration Tool"),
];

const BUDGETS: &[(&str, &str)] = &[
    ("under-10k", "Under $10,000"),
    ("10k-25k", "$10,000 - $25,000"),
    ("25k-50k", "$25,000 - $50,000"),
    ("50k-100k", "$50,000 - $100,000"),
    ("over-100k", "Over $100,000"),
];

#[function_component(Contact)]
pub fn contact_page() -> Html {
    let form = use_state(LeadForm::default);
    let submitting = use_state(|| false);
    let submitted = use_state(|| false);
    let location = use_location();

    // Deep links from a service panel carry `?service={id}`.
    {
        let form = form.clone();
        let service = location
            .as_ref()
            .and_then(|l| l.query::<ContactQuery>().ok())
            .unwrap_or_default()
            .service;
        use_effect_with_deps(
            move |service: &String| {
                if !service.is_empty()
                    && RESEARCH_AREAS.iter().any(|(id, _)| *id == service.as_str())
                {
                    let mut next = (*form).clone();
                    if next.research_area.is_empty() {
                        next.research_area = service.clone();
                        form.set(next);
                    }
                }
                || ()
            },
            service,
        );
    }

    let set_field = {
        let form = form.clone();
        move |field: &'static str| {
            let form = form.clone();
            Callback::from(move |value: String| {
                let mut next = (*form).clone();
                next.set(field, value);
                form.set(next);
            })
        }
    };

    let text_input = |field: &'static str, label: &str, kind: &str, placeholder: &str, required: bool, value: String| {
        let on_value = set_field(field);
        let oninput = Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_value.emit(input.value());
        });
        html! {
            <div class="form-field">
                <label for={field}>{label}{ if required { " *" } else { "" } }</label>
                <input
                    id={field}
                    name={field}
                    type={kind.to_string()}
                    value={value}
                    placeholder={placeholder.to_string()}
                    required={required}
                    {oninput}
                />
            </div>
        }
    };

    let select_input = |field: &'static str, label: &str, options: &[(&str, &str)], required: bool, value: String| {
        let on_value = set_field(field);
        let onchange = Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_value.emit(select.value());
        });
        html! {
            <div class="form-field">
                <label for={field}>{label}{ if required { " *" } else { "" } }</label>
                <select id={field} name={field} required={required} {onchange}>
                    <option value="" selected={value.is_empty()}>{"Select"}</option>
                    { for options.iter().map(|(id, name)| html! {
                        <option value={id.to_string()} selected={value == *id}>{*name}</option>
                    }) }
                </select>
            </div>
        }
    };

    let onsubmit = {
        let form = form.clone();
        let submitting = submitting.clone();
        let submitted = submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting || !form.is_complete() {
                return;
            }
            submitting.set(true);

            let form = form.clone();
            let submitting = submitting.clone();
            let submitted = submitted.clone();
            spawn_local(async move {
                let current = (*form).clone();
                let submission = ContactSubmission {
                    access_key: config::FORM_RELAY_ACCESS_KEY,
                    subject: current.subject(),
                    name: &current.name,
                    email: &current.email,
                    institution: &current.institution,
                    research_area: &current.research_area,
                    project_type: &current.project_type,
                    budget: &current.budget,
                    message: &current.message,
                };
                let success = submit_contact(&submission).await.unwrap_or(false);

                let mut next = current.clone();
                if apply_outcome(&mut next, success) {
                    form.set(next);
                    submitted.set(true);
                } else if let Some(window) = web_sys::window() {
                    // Fields stay as entered so the visitor can retry.
                    let _ = window.alert_with_message(
                        "Sorry, we couldn't send your message. Please try again.",
                    );
                }
                submitting.set(false);
            });
        })
    };

    let reset_ack = {
        let submitted = submitted.clone();
        Callback::from(move |_| submitted.set(false))
    };

    let message_oninput = {
        let on_value = set_field("message");
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_value.emit(area.value());
        })
    };

    html! {
        <div class="page page-contact">
            <section class="page-hero">
                <div class="section-inner">
                    <span class="hero-tag">{"GET IN TOUCH"}</span>
                    <h1>
                        {"Let's Build Your"}
                        <br />
                        <span class="gradient-text">{"Scientific Website"}</span>
                    </h1>
                </div>
            </section>

            <section class="contact-body">
                <div class="section-inner contact-grid">
                    <div class="contact-form-card">
                        {
                            if *submitted {
                                html! {
                                    <div class="contact-thanks">
                                        <h3>{"Thank You!"}</h3>
                                        <p>{"We've received your message and will get back to you within 24 hours."}</p>
                                        <button class="btn-secondary" onclick={reset_ack}>
                                            {"Send Another Message"}
                                        </button>
                                    </div>
                                }
                            } else {
                                html! {
                                    <form {onsubmit}>
                                        <h2>{"Start Your Project"}</h2>
                                        <div class="form-row">
                                            { text_input("name", "Name", "text", "Dr. Jane Smith", true, form.name.clone()) }
                                            { text_input("email", "Email", "email", "jane@university.edu", true, form.email.clone()) }
                                        </div>
                                        { text_input("institution", "Institution/Company", "text", "Stanford University", false, form.institution.clone()) }
                                        <div class="form-row">
                                            { select_input("research_area", "Research Area", RESEARCH_AREAS, true, form.research_area.clone()) }
                                            { select_input("project_type", "Project Type", PROJECT_TYPES, true, form.project_type.clone()) }
                                        </div>
                                        { select_input("budget", "Budget Range", BUDGETS, false, form.budget.clone()) }
                                        <div class="form-field">
                                            <label for="message">{"Project Details *"}</label>
                                            <textarea
                                                id="message"
                                                name="message"
                                                rows="5"
                                                required=true
                                                value={form.message.clone()}
                                                placeholder="Tell us about your research, goals, and what kind of website or platform you need..."
                                                oninput={message_oninput}
                                            />
                                        </div>
                                        <button type="submit" class="btn-primary" disabled={*submitting}>
                                            { if *submitting { "Submitting..." } else { "Send Message" } }
                                        </button>
                                    </form>
                                }
                            }
                        }
                    </div>

                    <div class="contact-info">
                        <h2>{"Get in Touch"}</h2>
                        <p>
                            {"We're here to help you create AI-powered websites for your \
                              scientific research. Reach out using any of the methods below."}
                        </p>
                        <div class="contact-cards">
                            <div class="contact-card">
                                <h3>{"Email Us"}</h3>
                                <p>{config::get_contact_email()}</p>
                            </div>
                            <div class="contact-card">
                                <h3>{"Call Us"}</h3>
                                <p>{"+1 (555) 123-4567"}</p>
                            </div>
                            <div class="contact-card">
                                <h3>{"Visit Us"}</h3>
                                <p>{"San Francisco, CA"}</p>
                            </div>
                            <div class="contact-card">
                                <h3>{"Office Hours"}</h3>
                                <p>{"Mon-Fri: 9AM-6PM PST"}</p>
                            </div>
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> LeadForm {
        LeadForm {
            name: "Dr. Jane Smith".into(),
            email: "jane@university.edu".into(),
            institution: "Stanford University".into(),
            research_area: "biology".into(),
            project_type: "new-website".into(),
            budget: "25k-50k".into(),
            message: "We need a genomics portal.".into(),
        }
    }

    #[test]
    fn set_routes_values_to_the_named_field() {
        let mut form = LeadForm::default();
        form.set("email", "a@b.edu".into());
        form.set("message", "hello".into());
        form.set("unknown-field", "ignored".into());
        assert_eq!(form.email, "a@b.edu");
        assert_eq!(form.message, "hello");
    }

    #[test]
    fn completeness_requires_the_mandatory_fields_only() {
        let mut form = filled();
        form.institution.clear();
        form.budget.clear();
        assert!(form.is_complete());

        form.message = "   ".into();
        assert!(!form.is_complete());
    }

    #[test]
    fn successful_submission_resets_the_form() {
        let mut form = filled();
        assert!(apply_outcome(&mut form, true));
        assert_eq!(form, LeadForm::default());
    }

    #[test]
    fn failed_submission_keeps_every_field() {
        let mut form = filled();
        let before = form.clone();
        assert!(!apply_outcome(&mut form, false));
        assert_eq!(form, before);
    }

    #[test]
    fn subject_line_names_the_sender() {
        assert_eq!(filled().subject(), "New project inquiry from Dr. Jane Smith");
    }
}
