use gloo_timers::callback::Timeout;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::SiteConfig;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@\x{FEFF}]+@[^\s@\x{FEFF}]+\.[^\s@\x{FEFF}]+$").expect("email pattern compiles"));

pub const SUCCESS_MESSAGE: &str = "Opening your email client...";

/// Validation failures. The display text is what the visitor sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all fields.")]
    MissingField,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Trims the way browsers trim form input, which also strips U+FEFF.
fn trim_input(value: &str) -> String {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .to_string()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormFields {
    pub fn trimmed(&self) -> Self {
        Self {
            name: trim_input(&self.name),
            email: trim_input(&self.email),
            subject: trim_input(&self.subject),
            message: trim_input(&self.message),
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        let fields = [&self.name, &self.email, &self.subject, &self.message];
        if fields.iter().any(|field| field.is_empty()) {
            return Err(FormError::MissingField);
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }

    pub fn mailto_link(&self, address: &str) -> String {
        let body = format!(
            "Name: {}\nEmail: {}\n\n{}",
            self.name, self.email, self.message
        );
        format!(
            "mailto:{}?subject={}&body={}",
            address,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&body)
        )
    }
}

/// Result of an accepted submission: the link for the mail client and the
/// field values the form is left with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub link: String,
    pub fields: FormFields,
}

/// Trims and validates the raw input. On error the form keeps its values.
pub fn submit(raw: &FormFields, address: &str) -> Result<Submission, FormError> {
    let fields = raw.trimmed();
    fields.validate()?;
    Ok(Submission {
        link: fields.mailto_link(address),
        fields: FormFields::default(),
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Error,
    Success,
}

impl StatusKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Success => "success",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    pub fn success(text: &str) -> Self {
        Self {
            text: text.to_string(),
            kind: StatusKind::Success,
        }
    }
}

/// The status line plus a generation counter, so a clear scheduled for an
/// older message cannot wipe a newer one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusSlot {
    message: Option<StatusMessage>,
    generation: u64,
}

impl StatusSlot {
    pub fn message(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }

    /// Shows `message` and returns the generation its clear timer must present.
    pub fn show(&mut self, message: StatusMessage) -> u64 {
        self.generation += 1;
        self.message = Some(message);
        self.generation
    }

    /// Clears the line if `generation` is still the latest. Returns whether it cleared.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.message.is_none() {
            return false;
        }
        self.message = None;
        true
    }
}

impl From<FormError> for StatusMessage {
    fn from(error: FormError) -> Self {
        Self {
            text: error.to_string(),
            kind: StatusKind::Error,
        }
    }
}

fn input_value(e: &InputEvent) -> Option<String> {
    let target = e.target()?;
    match target.dyn_into::<HtmlInputElement>() {
        Ok(input) => Some(input.value()),
        Err(target) => target
            .dyn_into::<HtmlTextAreaElement>()
            .ok()
            .map(|area| area.value()),
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let fields = use_state(FormFields::default);
    let slot = use_mut_ref(StatusSlot::default);
    let status = use_state_eq(|| None::<StatusMessage>);

    let show_status = {
        let slot = slot.clone();
        let status = status.clone();
        let delay = config.status_clear_ms;
        Callback::from(move |next: StatusMessage| {
            let generation = slot.borrow_mut().show(next);
            status.set(slot.borrow().message().cloned());
            let slot = slot.clone();
            let status = status.clone();
            let timeout = Timeout::new(delay, move || {
                if slot.borrow_mut().expire(generation) {
                    status.set(slot.borrow().message().cloned());
                }
            });
            timeout.forget();
        })
    };

    let onsubmit = {
        let fields = fields.clone();
        let address = config.contact_address.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match submit(&fields, &address) {
                Ok(submission) => {
                    log::info!("Handing contact form to mail client");
                    if let Some(window) = web_sys::window() {
                        if let Err(e) = window.location().set_href(&submission.link) {
                            log::warn!("Failed to open mail link: {:?}", e);
                        }
                    }
                    show_status.emit(StatusMessage::success(SUCCESS_MESSAGE));
                    fields.set(submission.fields);
                }
                Err(error) => {
                    log::debug!("Contact form rejected: {}", error);
                    show_status.emit(error.into());
                }
            }
        })
    };

    let bind = |update: fn(&mut FormFields, String)| {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = input_value(&e) {
                let mut next = (*fields).clone();
                update(&mut next, value);
                fields.set(next);
            }
        })
    };

    let (status_text, status_class) = match &*status {
        Some(current) => (current.text.clone(), Some(current.kind.class())),
        None => (String::new(), None),
    };

    html! {
        <form id="contact-form" class="form" onsubmit={onsubmit} novalidate={true}>
            <style>
                {r#"
                    .form {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        max-width: 640px;
                    }
                    .form input,
                    .form textarea {
                        padding: 0.75rem 1rem;
                        border: 1px solid #444;
                        border-radius: 6px;
                        background: #1c1c1c;
                        color: #fff;
                        font: inherit;
                    }
                    .form__status {
                        min-height: 1.5em;
                    }
                    .form__status.error {
                        color: #ff6b6b;
                    }
                    .form__status.success {
                        color: #6bd98b;
                    }
                "#}
            </style>
            <input id="name" type="text" placeholder="Your name" value={fields.name.clone()} oninput={bind(|f, v| f.name = v)} />
            <input id="email" type="email" placeholder="Your email" value={fields.email.clone()} oninput={bind(|f, v| f.email = v)} />
            <input id="subject" type="text" placeholder="Subject" value={fields.subject.clone()} oninput={bind(|f, v| f.subject = v)} />
            <textarea id="message" rows="6" placeholder="Message" value={fields.message.clone()} oninput={bind(|f, v| f.message = v)}></textarea>
            <button type="submit" class="btn">{"Send message"}</button>
            <p id="form-status" class={classes!("form__status", status_class)}>{status_text}</p>
        </form>
    }
}
