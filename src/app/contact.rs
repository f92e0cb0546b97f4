use leptos::{ev::SubmitEvent, html, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::clipboard::copy_text;
use super::reveal::{PageSection, Reveal, SectionHeading};
use crate::contact::{ContactForm, FormStatus, BANNER_TIMEOUT};
use crate::profile::PROFILE;

#[server]
pub async fn send_contact(form: ContactForm) -> Result<(), ServerFnError> {
    use std::sync::Arc;

    use crate::relay::EmailRelay;

    let form = form.trimmed();
    form.validate()
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    let relay = use_context::<Arc<EmailRelay>>()
        .ok_or_else(|| ServerFnError::new("the contact form is not configured"))?;
    relay.send(&form).await.map_err(|e| {
        tracing::error!("couldn't relay contact message: {e}");
        ServerFnError::new("couldn't deliver your message, please try again later")
    })
}

#[component]
fn CopyButton(label: &'static str, value: &'static str) -> impl IntoView {
    let (copied, set_copied) = signal(false);
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(move |_: ()| set_copied.set(false), 2000.0);

    view! {
        <button
            type="button"
            class="ml-2 rounded px-2 py-0.5 text-xs border border-slate-700 hover:border-teal-400"
            aria-label=format!("Copy {label}")
            on:click=move |_| {
                let start = start.clone();
                copy_text(value, move || {
                    set_copied.set(true);
                    start(());
                });
            }
        >
            {move || if copied.get() { "Copied!" } else { "Copy" }}
        </button>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let subject_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();

    let (error, set_error) = signal(None::<String>);
    let status = RwSignal::new(FormStatus::Idle);
    let send = ServerAction::<SendContact>::new();

    let UseTimeoutFnReturn {
        start: start_dismiss,
        stop: stop_dismiss,
        ..
    } = use_timeout_fn(
        move |_: ()| status.set(FormStatus::Idle),
        BANNER_TIMEOUT.as_millis() as f64,
    );

    let clear_fields = move || {
        for input in [name_ref, email_ref, subject_ref] {
            if let Some(el) = input.get_untracked() {
                el.set_value("");
            }
        }
        if let Some(el) = message_ref.get_untracked() {
            el.set_value("");
        }
    };

    Effect::new(move |_| {
        if send.pending().get() {
            // a banner left over from the last submit must not clear this one
            stop_dismiss();
            status.set(FormStatus::Sending);
            return;
        }
        match send.value().get() {
            Some(Ok(())) => {
                status.set(FormStatus::Sent);
                clear_fields();
            }
            Some(Err(e)) => {
                log::warn!("contact form failed: {e}");
                status.set(FormStatus::failed(&e.to_string()));
            }
            None => {}
        }
    });

    Effect::new(move |_| {
        if status.with(FormStatus::auto_dismiss) {
            start_dismiss(());
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let value = |input: NodeRef<html::Input>| {
            input.get_untracked().map(|el| el.value()).unwrap_or_default()
        };
        let form = ContactForm {
            name: value(name_ref),
            email: value(email_ref),
            subject: value(subject_ref),
            message: message_ref
                .get_untracked()
                .map(|el| el.value())
                .unwrap_or_default(),
        }
        .trimmed();
        match form.validate() {
            Ok(()) => {
                set_error.set(None);
                send.dispatch(SendContact { form });
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    let input_class = "w-full rounded-md border border-slate-700 bg-slate-900 px-4 py-2 focus:outline-none focus:ring-2 focus:ring-teal-400";

    view! {
        <PageSection id="contact" class="bg-slate-900/50">
            <SectionHeading title="Contact" subtitle="Have a question or an opportunity? Let's talk." />
            <div class="grid gap-10 md:grid-cols-5">
                <Reveal>
                    <div class="space-y-4 md:col-span-2">
                        <p>
                            <span class="text-slate-400">"Email: "</span>
                            <a href=PROFILE.mailto() class="text-teal-400 hover:underline">
                                {PROFILE.email}
                            </a>
                            <CopyButton label="email" value=PROFILE.email />
                        </p>
                        <p>
                            <span class="text-slate-400">"Phone: "</span>
                            <a href=PROFILE.phone_href() class="text-teal-400 hover:underline">
                                {PROFILE.phone}
                            </a>
                            <CopyButton label="phone number" value=PROFILE.phone />
                        </p>
                        <p>
                            <span class="text-slate-400">"Based in "</span>
                            {PROFILE.location}
                        </p>
                    </div>
                </Reveal>
                <form class="md:col-span-3 space-y-4" on:submit=on_submit novalidate=true>
                    {move || {
                        status
                            .get()
                            .banner()
                            .map(|text| {
                                let class = match status.get_untracked() {
                                    FormStatus::Sent => "rounded-md bg-emerald-500/15 text-emerald-300 px-4 py-3",
                                    FormStatus::Failed(_) => "rounded-md bg-red-500/15 text-red-300 px-4 py-3",
                                    _ => "rounded-md bg-sky-500/15 text-sky-300 px-4 py-3",
                                };
                                view! { <div role="status" class=class>{text}</div> }
                            })
                    }}
                    <div class="grid gap-4 sm:grid-cols-2">
                        <input node_ref=name_ref type="text" name="name" placeholder="Your name" class=input_class />
                        <input node_ref=email_ref type="email" name="email" placeholder="Your email" class=input_class />
                    </div>
                    <input node_ref=subject_ref type="text" name="subject" placeholder="Subject" class=input_class />
                    <textarea node_ref=message_ref name="message" rows="6" placeholder="Message" class=input_class></textarea>
                    {move || error.get().map(|e| view! { <p class="text-sm text-red-400">{e}</p> })}
                    <button
                        type="submit"
                        class="rounded-md bg-teal-500 px-6 py-3 font-semibold text-slate-950 hover:bg-teal-400 disabled:opacity-50 transition-colors"
                        disabled=move || send.pending().get()
                    >
                        {move || if send.pending().get() { "Sending..." } else { "Send message" }}
                    </button>
                </form>
            </div>
        </PageSection>
    }
}
