//! Editable site content behind a swappable store.
//!
//! The admin page talks to [`ContentStore`] only, so the in-memory backing
//! can later be replaced by a persistent one without touching the UI.

#[derive(Clone, PartialEq, Debug)]
pub struct FaqEntry {
    pub id: String,
    pub question: String,
    pub answer: String,
}

#[derive(Clone, PartialEq, Debug)]
pub struct FooterContent {
    pub company_description: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub contact_address: String,
}

impl Default for FooterContent {
    fn default() -> Self {
        Self {
            company_description: "Building the future of scientific research through AI-powered websites that help researchers in biology, chemistry, and physics share their discoveries more effectively.".into(),
            contact_email: "info@sagittarius.ai".into(),
            contact_phone: "+1 (555) 123-4567".into(),
            contact_address: "San Francisco, CA".into(),
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub email: String,
    pub institution: String,
    pub research_area: String,
    pub project_type: String,
    pub budget: String,
    pub message: String,
    pub submitted_at: String,
}

pub trait ContentStore {
    fn faqs(&self) -> &[FaqEntry];
    /// Appends a placeholder entry and returns its id so the caller can put
    /// it straight into edit mode.
    fn add_faq(&mut self) -> String;
    /// Unknown ids are a no-op; returns whether anything changed.
    fn update_faq(&mut self, id: &str, question: String, answer: String) -> bool;
    fn delete_faq(&mut self, id: &str) -> bool;
    fn footer(&self) -> &FooterContent;
    fn update_footer(&mut self, footer: FooterContent);
    fn leads(&self) -> &[Lead];
    fn add_lead(&mut self, lead: Lead);
}

#[derive(Clone, PartialEq)]
pub struct InMemoryStore {
    faqs: Vec<FaqEntry>,
    footer: FooterContent,
    leads: Vec<Lead>,
    next_faq_id: u32,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            faqs: Vec::new(),
            footer: FooterContent::default(),
            leads: Vec::new(),
            next_faq_id: 1,
        }
    }

    /// The seed content the admin page starts from.
    pub fn with_sample_data() -> Self {
        let faqs = vec![
            FaqEntry {
                id: "1".into(),
                question: "How long does a typical project take?".into(),
                answer: "Most projects take 6-12 weeks depending on complexity and requirements. We provide detailed timelines during our initial consultation.".into(),
            },
            FaqEntry {
                id: "2".into(),
                question: "Do you work with international research institutions?".into(),
                answer: "Yes, we work with research institutions worldwide. We have experience with different compliance requirements and can accommodate various time zones.".into(),
            },
            FaqEntry {
                id: "3".into(),
                question: "What makes Sagittarius different from other web development companies?".into(),
                answer: "We specialize exclusively in AI-powered websites for scientific research. Our team has deep expertise in biology, chemistry, and physics applications.".into(),
            },
            FaqEntry {
                id: "4".into(),
                question: "Can you integrate with our existing research systems?".into(),
                answer: "Absolutely. We have experience integrating with various research databases, lab equipment, and existing software systems used in scientific research.".into(),
            },
        ];
        let leads = vec![
            Lead {
                id: "1".into(),
                name: "Dr. Sarah Chen".into(),
                email: "sarah@stanford.edu".into(),
                institution: "Stanford University".into(),
                research_area: "biology".into(),
                project_type: "new-website".into(),
                budget: "25k-50k".into(),
                message: "Looking for a modern biology research platform...".into(),
                submitted_at: "2025-01-25T10:30:00Z".into(),
            },
            Lead {
                id: "2".into(),
                name: "Prof. Michael Rodriguez".into(),
                email: "mrodriguez@mit.edu".into(),
                institution: "MIT".into(),
                research_area: "chemistry".into(),
                project_type: "data-platform".into(),
                budget: "50k-100k".into(),
                message: "Need a comprehensive chemical data analysis platform...".into(),
                submitted_at: "2025-01-24T15:45:00Z".into(),
            },
        ];
        Self {
            next_faq_id: faqs.len() as u32 + 1,
            faqs,
            footer: FooterContent::default(),
            leads,
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentStore for InMemoryStore {
    fn faqs(&self) -> &[FaqEntry] {
        &self.faqs
    }

    fn add_faq(&mut self) -> String {
        let id = self.next_faq_id.to_string();
        self.next_faq_id += 1;
        self.faqs.push(FaqEntry {
            id: id.clone(),
            question: "New FAQ Question".into(),
            answer: "New FAQ answer...".into(),
        });
        id
    }

    fn update_faq(&mut self, id: &str, question: String, answer: String) -> bool {
        match self.faqs.iter_mut().find(|f| f.id == id) {
            Some(entry) => {
                entry.question = question;
                entry.answer = answer;
                true
            }
            None => false,
        }
    }

    fn delete_faq(&mut self, id: &str) -> bool {
        let before = self.faqs.len();
        self.faqs.retain(|f| f.id != id);
        self.faqs.len() != before
    }

    fn footer(&self) -> &FooterContent {
        &self.footer
    }

    fn update_footer(&mut self, footer: FooterContent) {
        self.footer = footer;
    }

    fn leads(&self) -> &[Lead] {
        &self.leads
    }

    fn add_lead(&mut self, lead: Lead) {
        self.leads.push(lead);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_data_is_seeded() {
        let store = InMemoryStore::with_sample_data();
        assert_eq!(store.faqs().len(), 4);
        assert_eq!(store.leads().len(), 2);
        assert!(!store.footer().contact_email.is_empty());
    }

    #[test]
    fn added_faq_gets_a_fresh_id_and_is_editable() {
        let mut store = InMemoryStore::with_sample_data();
        let id = store.add_faq();
        assert_eq!(id, "5");
        assert!(store.update_faq(&id, "Q?".into(), "A.".into()));
        let entry = store.faqs().iter().find(|f| f.id == id).unwrap();
        assert_eq!(entry.question, "Q?");
        assert_eq!(entry.answer, "A.");
    }

    #[test]
    fn updating_an_unknown_faq_is_a_no_op() {
        let mut store = InMemoryStore::with_sample_data();
        let before = store.faqs().to_vec();
        assert!(!store.update_faq("99", "Q?".into(), "A.".into()));
        assert_eq!(store.faqs(), before.as_slice());
    }

    #[test]
    fn delete_removes_exactly_the_named_entry() {
        let mut store = InMemoryStore::with_sample_data();
        assert!(store.delete_faq("2"));
        assert!(!store.delete_faq("2"));
        assert_eq!(store.faqs().len(), 3);
        assert!(store.faqs().iter().all(|f| f.id != "2"));
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = InMemoryStore::with_sample_data();
        store.delete_faq("4");
        assert_eq!(store.add_faq(), "5");
    }

    #[test]
    fn footer_update_replaces_content() {
        let mut store = InMemoryStore::new();
        let mut footer = store.footer().clone();
        footer.contact_email = "labs@sagittarius.ai".into();
        store.update_footer(footer.clone());
        assert_eq!(store.footer(), &footer);
    }

    #[test]
    fn leads_append_in_order() {
        let mut store = InMemoryStore::new();
        store.add_lead(Lead {
            id: "1".into(),
            name: "A".into(),
            email: "a@example.org".into(),
            institution: String::new(),
            research_area: "physics".into(),
            project_type: "redesign".into(),
            budget: String::new(),
            message: "hi".into(),
            submitted_at: "2025-02-01T00:00:00Z".into(),
        });
        assert_eq!(store.leads().len(), 1);
        assert_eq!(store.leads()[0].name, "A");
    }
}
