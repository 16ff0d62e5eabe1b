//! Contact form with inline validation and an AJAX submit.

use leptos::prelude::*;
use leptos::task::spawn_local;

use sitelogic::validate::{self, FieldKind, Verdict};

use crate::net::api;
use crate::state::toast::{ToastKind, ToastState};

use super::toast_host::push_toast;

const MSG_FORM_INVALID: &str = "Iltimos, barcha maydonlarni to'g'ri to'ldiring.";
const LABEL_SEND: &str = "Yuborish";
const LABEL_SENDING: &str = "Yuborilmoqda...";

#[derive(Clone, Copy)]
struct Field {
    value: RwSignal<String>,
    error: RwSignal<Option<&'static str>>,
    kind: FieldKind,
    required: bool,
}

impl Field {
    fn new(kind: FieldKind, required: bool) -> Self {
        Self {
            value: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            kind,
            required,
        }
    }

    /// Re-runs validation and records the outcome. Returns whether the
    /// field is acceptable.
    fn check(self) -> bool {
        match validate::validate_field(&self.value.get_untracked(), self.kind, self.required) {
            Verdict::Ok => {
                self.error.set(None);
                true
            }
            Verdict::Invalid(text) => {
                self.error.set(Some(text));
                false
            }
        }
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let name = Field::new(FieldKind::Name, true);
    let email = Field::new(FieldKind::Email, true);
    let phone = Field::new(FieldKind::Phone, false);
    let service = Field::new(FieldKind::Text, false);
    let message = Field::new(FieldKind::Message, true);

    let sending = RwSignal::new(false);

    let reset = move || {
        for field in [name, email, phone, service, message] {
            field.value.set(String::new());
            field.error.set(None);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        // Evaluate every field so all errors surface at once.
        let mut ok = true;
        for field in [name, email, phone, service, message] {
            ok &= field.check();
        }
        if !ok {
            push_toast(toasts, ToastKind::Error, MSG_FORM_INVALID);
            return;
        }
        sending.set(true);
        spawn_local(async move {
            #[cfg(feature = "hydrate")]
            let outcome = {
                let form = build_form_data(name, email, phone, service, message);
                match form {
                    Ok(form) => api::submit_form("/contact", form).await,
                    Err(text) => Err(text),
                }
            };
            #[cfg(not(feature = "hydrate"))]
            let outcome: Result<crate::net::types::FormResponse, String> =
                Err(api::ERR_FORM.to_string());
            sending.set(false);
            match outcome {
                Ok(resp) if resp.success => {
                    let text = resp
                        .message
                        .unwrap_or_else(|| "Xabaringiz yuborildi!".to_string());
                    push_toast(toasts, ToastKind::Success, text);
                    reset();
                }
                Ok(resp) => {
                    let text = resp.message.unwrap_or_else(|| api::ERR_FORM.to_string());
                    push_toast(toasts, ToastKind::Error, text);
                }
                Err(text) => push_toast(toasts, ToastKind::Error, text),
            }
        });
    };

    view! {
        <form class="contact-form" id="contactForm" novalidate on:submit=on_submit>
            {text_input(name, "name", "text", "Ismingiz")}
            {text_input(email, "email", "email", "Email manzilingiz")}
            {phone_input(phone)}
            {service_select(service)}
            {message_area(message)}
            <button class="btn btn--primary" type="submit" disabled=move || sending.get()>
                {move || if sending.get() { LABEL_SENDING } else { LABEL_SEND }}
            </button>
        </form>
    }
}

fn text_input(field: Field, name: &'static str, kind: &'static str, placeholder: &'static str) -> impl IntoView {
    view! {
        <div class="form-group">
            <input
                class="form-control"
                class:is-invalid=move || field.error.get().is_some()
                type=kind
                name=name
                placeholder=placeholder
                prop:value=move || field.value.get()
                on:input=move |ev| {
                    field.value.set(event_target_value(&ev));
                    field.error.set(None);
                }
                on:blur=move |_| {
                    field.check();
                }
            />
            {field_error(field)}
        </div>
    }
}

fn phone_input(field: Field) -> impl IntoView {
    view! {
        <div class="form-group">
            <input
                class="form-control"
                class:is-invalid=move || field.error.get().is_some()
                type="tel"
                name="phone"
                placeholder="+998 90 123 45 67"
                prop:value=move || field.value.get()
                on:input=move |ev| {
                    field.value.set(sitelogic::phone::format(&event_target_value(&ev)));
                    field.error.set(None);
                }
                on:blur=move |_| {
                    field.check();
                }
            />
            {field_error(field)}
        </div>
    }
}

fn service_select(field: Field) -> impl IntoView {
    view! {
        <div class="form-group">
            <select
                class="form-control"
                name="service"
                prop:value=move || field.value.get()
                on:change=move |ev| field.value.set(event_target_value(&ev))
            >
                <option value="">"Xizmat turini tanlang"</option>
                <option value="telegram">"Telegram bot"</option>
                <option value="web">"Veb-sayt"</option>
                <option value="instagram">"Instagram marketing"</option>
                <option value="smm">"SMM xizmatlari"</option>
            </select>
        </div>
    }
}

fn message_area(field: Field) -> impl IntoView {
    view! {
        <div class="form-group">
            <textarea
                class="form-control"
                class:is-invalid=move || field.error.get().is_some()
                name="message"
                rows="5"
                placeholder="Xabaringiz"
                prop:value=move || field.value.get()
                on:input=move |ev| {
                    field.value.set(event_target_value(&ev));
                    field.error.set(None);
                }
                on:blur=move |_| {
                    field.check();
                }
            ></textarea>
            {field_error(field)}
        </div>
    }
}

fn field_error(field: Field) -> impl IntoView {
    view! {
        <Show when=move || field.error.get().is_some()>
            <div class="invalid-feedback">
                {move || field.error.get().unwrap_or_default()}
            </div>
        </Show>
    }
}

#[cfg(feature = "hydrate")]
fn build_form_data(
    name: Field,
    email: Field,
    phone: Field,
    service: Field,
    message: Field,
) -> Result<web_sys::FormData, String> {
    let form = web_sys::FormData::new().map_err(|_| api::ERR_FORM.to_string())?;
    let pairs = [
        ("name", name),
        ("email", email),
        ("phone", phone),
        ("service", service),
        ("message", message),
    ];
    for (key, field) in pairs {
        form.append_with_str(key, &field.value.get_untracked())
            .map_err(|_| api::ERR_FORM.to_string())?;
    }
    Ok(form)
}
