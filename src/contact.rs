use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::nav::use_active_section;
use crate::reveal::{use_reveal, REVEAL_THRESHOLD};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Outcome of a submission attempt. This form is local-feedback only; an
/// accepted submission is acknowledged and discarded, never sent anywhere.
#[derive(Clone, Debug, PartialEq)]
pub enum FormFeedback {
    MissingFields,
    Accepted { name: String },
}

impl FormFeedback {
    pub fn message(&self) -> String {
        match self {
            Self::MissingFields => "Please fill all fields.".to_string(),
            Self::Accepted { name } => {
                format!("Thanks {name}! Message noted (no backend configured).")
            }
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::MissingFields => "form-note warn",
            Self::Accepted { .. } => "form-note ok",
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Trims all three fields and rejects the submission if any ends up empty.
/// No email-format check, by design.
pub fn evaluate_submission(submission: &FormSubmission) -> FormFeedback {
    let name = submission.name.trim();
    let email = submission.email.trim();
    let message = submission.message.trim();
    if name.is_empty() || email.is_empty() || message.is_empty() {
        return FormFeedback::MissingFields;
    }
    FormFeedback::Accepted {
        name: name.to_string(),
    }
}

#[component]
pub fn ContactSection() -> Element {
    let config = use_context::<SiteConfig>();
    let reveal = use_reveal(REVEAL_THRESHOLD);
    let spy = use_active_section("contact");
    let mut form = use_signal(FormSubmission::default);
    let mut feedback = use_signal(|| None::<FormFeedback>);

    let note_class = feedback()
        .as_ref()
        .map(FormFeedback::css_class)
        .unwrap_or("form-note");
    let note_text = feedback()
        .as_ref()
        .map(FormFeedback::message)
        .unwrap_or_default();

    rsx! {
        section {
            id: "contact",
            class: if reveal.is_revealed() { "reveal" } else { "pre-reveal" },
            onmounted: move |event| {
                reveal.on_mounted(&event);
                spy.on_mounted(&event);
            },
            h2 { "Contact" }
            p { "Have a project in mind? Drop a line at {config.contact_email} or use the form." }
            form {
                id: "contactForm",
                class: "contact-form",
                onsubmit: move |event| {
                    event.prevent_default();
                    let verdict = evaluate_submission(&form());
                    tracing::debug!("contact: submission evaluated");
                    if verdict.is_accepted() {
                        form.set(FormSubmission::default());
                    }
                    feedback.set(Some(verdict));
                },
                label { r#for: "name", "Name" }
                input {
                    id: "name",
                    r#type: "text",
                    value: "{form().name}",
                    autocomplete: "name",
                    oninput: move |event| {
                        let mut next = form();
                        next.name = event.value();
                        form.set(next);
                    },
                }
                label { r#for: "email", "Email" }
                input {
                    id: "email",
                    r#type: "email",
                    value: "{form().email}",
                    autocomplete: "email",
                    oninput: move |event| {
                        let mut next = form();
                        next.email = event.value();
                        form.set(next);
                    },
                }
                label { r#for: "message", "Message" }
                textarea {
                    id: "message",
                    rows: "6",
                    value: "{form().message}",
                    oninput: move |event| {
                        let mut next = form();
                        next.message = event.value();
                        form.set(next);
                    },
                }
                button { r#type: "submit", class: "cta", "Send" }
                p { id: "formNote", class: "{note_class}", role: "status", "{note_text}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, email: &str, message: &str) -> FormSubmission {
        FormSubmission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn empty_name_is_rejected() {
        let verdict = evaluate_submission(&submission("", "a@b.com", "hi"));
        assert_eq!(verdict, FormFeedback::MissingFields);
        assert_eq!(verdict.message(), "Please fill all fields.");
    }

    #[test]
    fn whitespace_only_fields_are_rejected() {
        let verdict = evaluate_submission(&submission("Amol", "   ", "hi"));
        assert_eq!(verdict, FormFeedback::MissingFields);
        let verdict = evaluate_submission(&submission("Amol", "a@b.com", "\n\t"));
        assert_eq!(verdict, FormFeedback::MissingFields);
    }

    #[test]
    fn complete_submission_is_acknowledged_with_trimmed_name() {
        let verdict = evaluate_submission(&submission("  Amol ", "a@b.com", "hi"));
        assert_eq!(
            verdict,
            FormFeedback::Accepted { name: "Amol".to_string() }
        );
        assert_eq!(
            verdict.message(),
            "Thanks Amol! Message noted (no backend configured)."
        );
    }

    #[test]
    fn malformed_email_is_not_our_problem() {
        let verdict = evaluate_submission(&submission("Amol", "not-an-email", "hi"));
        assert!(verdict.is_accepted());
    }

    #[test]
    fn feedback_styles_match_outcomes() {
        assert_eq!(FormFeedback::MissingFields.css_class(), "form-note warn");
        let accepted = FormFeedback::Accepted { name: "A".to_string() };
        assert_eq!(accepted.css_class(), "form-note ok");
    }
}
