use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::admin::store::{ContentStore, InMemoryStore};
use crate::utils::csv::{download_csv, export_filename, leads_to_csv};

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Faq,
    Footer,
    Leads,
}

const TABS: &[(Tab, &str)] = &[
    (Tab::Faq, "FAQ Management"),
    (Tab::Footer, "Footer Content"),
    (Tab::Leads, "Lead Management"),
];

/// Local content editor. All edits live in this page's store instance; the
/// backing is swappable through `ContentStore` but currently in-memory only.
#[function_component(Admin)]
pub fn admin_page() -> Html {
    let store = use_state(InMemoryStore::with_sample_data);
    let tab = use_state(|| Tab::Faq);
    let editing_faq = use_state(|| None::<String>);
    let editing_footer = use_state(|| false);

    let add_faq = {
        let store = store.clone();
        let editing_faq = editing_faq.clone();
        Callback::from(move |_| {
            let mut next = (*store).clone();
            let id = next.add_faq();
            store.set(next);
            editing_faq.set(Some(id));
        })
    };

    let export_leads = {
        let store = store.clone();
        Callback::from(move |_| {
            let csv = leads_to_csv(store.leads());
            download_csv(&export_filename(), &csv);
        })
    };

    let faq_tab = {
        html! {
            <div class="admin-section">
                <div class="admin-section-head">
                    <h2>{"FAQ Management"}</h2>
                    <button class="btn-primary" onclick={add_faq}>{"Add New FAQ"}</button>
                </div>
                { for store.faqs().iter().map(|faq| {
                    let is_editing = editing_faq.as_deref() == Some(faq.id.as_str());

                    let toggle_edit = {
                        let editing_faq = editing_faq.clone();
                        let id = faq.id.clone();
                        Callback::from(move |_| {
                            editing_faq.set(if editing_faq.as_deref() == Some(id.as_str()) {
                                None
                            } else {
                                Some(id.clone())
                            });
                        })
                    };

                    let delete = {
                        let store = store.clone();
                        let id = faq.id.clone();
                        Callback::from(move |_| {
                            let mut next = (*store).clone();
                            next.delete_faq(&id);
                            store.set(next);
                        })
                    };

                    let on_question = {
                        let store = store.clone();
                        let id = faq.id.clone();
                        let answer = faq.answer.clone();
                        Callback::from(move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            let mut next = (*store).clone();
                            next.update_faq(&id, input.value(), answer.clone());
                            store.set(next);
                        })
                    };

                    let on_answer = {
                        let store = store.clone();
                        let id = faq.id.clone();
                        let question = faq.question.clone();
                        Callback::from(move |e: InputEvent| {
                            let area: HtmlTextAreaElement = e.target_unchecked_into();
                            let mut next = (*store).clone();
                            next.update_faq(&id, question.clone(), area.value());
                            store.set(next);
                        })
                    };

                    let done = {
                        let editing_faq = editing_faq.clone();
                        Callback::from(move |_| editing_faq.set(None))
                    };

                    html! {
                        <div class="admin-card">
                            <div class="admin-card-head">
                                <span class="muted">{format!("FAQ Item #{}", faq.id)}</span>
                                <div class="admin-card-actions">
                                    <button onclick={toggle_edit}>
                                        { if is_editing { "Cancel" } else { "Edit" } }
                                    </button>
                                    <button class="danger" onclick={delete}>{"Delete"}</button>
                                </div>
                            </div>
                            {
                                if is_editing {
                                    html! {
                                        <div class="admin-card-edit">
                                            <label>{"Question"}</label>
                                            <input value={faq.question.clone()} oninput={on_question} />
                                            <label>{"Answer"}</label>
                                            <textarea rows="3" value={faq.answer.clone()} oninput={on_answer} />
                                            <button class="btn-secondary" onclick={done}>{"Done"}</button>
                                        </div>
                                    }
                                } else {
                                    html! {
                                        <div class="admin-card-view">
                                            <p><strong>{"Q: "}</strong>{&faq.question}</p>
                                            <p><strong>{"A: "}</strong>{&faq.answer}</p>
                                        </div>
                                    }
                                }
                            }
                        </div>
                    }
                }) }
            </div>
        }
    };

    let footer_tab = {
        let footer = store.footer().clone();

        let toggle_edit = {
            let editing_footer = editing_footer.clone();
            Callback::from(move |_| editing_footer.set(!*editing_footer))
        };

        let field = |label: &str, value: String, apply: fn(&mut crate::admin::store::FooterContent, String)| {
            let store = store.clone();
            let oninput = Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let mut next = (*store).clone();
                let mut footer = next.footer().clone();
                apply(&mut footer, input.value());
                next.update_footer(footer);
                store.set(next);
            });
            html! {
                <div class="form-field">
                    <label>{label.to_string()}</label>
                    <input value={value} {oninput} />
                </div>
            }
        };

        html! {
            <div class="admin-section">
                <div class="admin-section-head">
                    <h2>{"Footer Content"}</h2>
                    <button class="btn-secondary" onclick={toggle_edit}>
                        { if *editing_footer { "Done" } else { "Edit" } }
                    </button>
                </div>
                {
                    if *editing_footer {
                        html! {
                            <div class="admin-card-edit">
                                { field("Company Description", footer.company_description.clone(), |f, v| f.company_description = v) }
                                { field("Contact Email", footer.contact_email.clone(), |f, v| f.contact_email = v) }
                                { field("Contact Phone", footer.contact_phone.clone(), |f, v| f.contact_phone = v) }
                                { field("Contact Address", footer.contact_address.clone(), |f, v| f.contact_address = v) }
                            </div>
                        }
                    } else {
                        html! {
                            <div class="admin-card-view">
                                <p>{&footer.company_description}</p>
                                <p>{&footer.contact_email}</p>
                                <p>{&footer.contact_phone}</p>
                                <p>{&footer.contact_address}</p>
                            </div>
                        }
                    }
                }
            </div>
        }
    };

    let leads_tab = html! {
        <div class="admin-section">
            <div class="admin-section-head">
                <h2>{"Lead Management"}</h2>
                <button class="btn-primary" onclick={export_leads}>{"Export CSV"}</button>
            </div>
            <table class="lead-table">
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"Email"}</th>
                        <th>{"Institution"}</th>
                        <th>{"Area"}</th>
                        <th>{"Type"}</th>
                        <th>{"Budget"}</th>
                        <th>{"Submitted"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for store.leads().iter().map(|lead| html! {
                        <tr>
                            <td>{&lead.name}</td>
                            <td>{&lead.email}</td>
                            <td>{&lead.institution}</td>
                            <td>{&lead.research_area}</td>
                            <td>{&lead.project_type}</td>
                            <td>{&lead.budget}</td>
                            <td>{&lead.submitted_at}</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    };

    html! {
        <div class="page page-admin">
            <section class="section-inner">
                <h1>{"Site Administration"}</h1>
                <div class="admin-tabs">
                    { for TABS.iter().map(|(id, name)| {
                        let select = {
                            let tab = tab.clone();
                            let id = *id;
                            Callback::from(move |_| tab.set(id))
                        };
                        html! {
                            <button
                                class={classes!("chip", (*tab == *id).then_some("active"))}
                                onclick={select}
                            >
                                {*name}
                            </button>
                        }
                    }) }
                </div>
                {
                    match *tab {
                        Tab::Faq => faq_tab,
                        Tab::Footer => footer_tab,
                        Tab::Leads => leads_tab,
                    }
                }
            </section>
        </div>
    }
}
