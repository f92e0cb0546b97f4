use std::sync::Arc;

use leptos::{ev::SubmitEvent, html, prelude::*};

use crate::chat::{
    ChatSession, Message, PendingReply, PendingTimers, QuickReply, ReplyEngine, REPLY_DELAY,
};

/// Floating chat popup in the bottom-right corner.
///
/// The session lives as long as the page does. Replies are delivered by
/// independent timers, so two quick messages can have their replies land
/// in either order.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let session = RwSignal::new(ChatSession::new(Arc::new(ReplyEngine::default())));
    let timers = StoredValue::new(PendingTimers::<TimeoutHandle>::default());
    let input_ref = NodeRef::<html::Input>::new();
    let log_ref = NodeRef::<html::Div>::new();

    let schedule = move |reply: PendingReply| {
        let ticket = reply.ticket;
        let delayed = reply.clone();
        let handle = set_timeout_with_handle(
            move || {
                timers.try_update_value(|t| t.fired(ticket));
                session.try_update(|s| s.deliver(delayed));
            },
            REPLY_DELAY,
        );
        match handle {
            Ok(handle) => timers.update_value(|t| t.insert(ticket, handle)),
            Err(_) => {
                log::warn!("couldn't schedule chat reply, delivering immediately");
                session.update(|s| {
                    s.deliver(reply);
                });
            }
        }
    };

    on_cleanup(move || {
        timers.try_update_value(|t| t.drain().for_each(|h| h.clear()));
        session.try_update(|s| s.cancel_all());
    });

    // keep the newest message in view
    Effect::new(move |_| {
        session.track();
        request_animation_frame(move || {
            if let Some(el) = log_ref.get_untracked() {
                el.set_scroll_top(el.scroll_height());
            }
        });
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let el = if let Some(el) = input_ref.get_untracked() {
            el
        } else {
            return;
        };
        let res = session.write().submit(&el.value());
        match res {
            Ok(reply) => {
                el.set_value("");
                schedule(reply);
            }
            Err(e) => log::debug!("ignoring chat input: {e}"),
        }
    };

    let quick_reply = move |quick: QuickReply| {
        let reply = session.write().quick_reply(quick);
        schedule(reply);
    };

    view! {
        <div class="fixed bottom-6 right-6 z-50 flex flex-col items-end gap-3">
            <Show when=move || session.with(|s| s.is_open())>
                <div class="flex h-[28rem] w-80 sm:w-96 flex-col overflow-hidden rounded-2xl border border-slate-700 bg-slate-900 shadow-2xl">
                    <div class="flex items-center justify-between bg-teal-500 px-4 py-3 text-slate-950">
                        <span class="font-semibold">"Chat with me"</span>
                        <button
                            type="button"
                            aria-label="Close chat"
                            on:click=move |_| session.update(|s| s.close())
                        >
                            "✕"
                        </button>
                    </div>
                    <div node_ref=log_ref class="flex-1 space-y-3 overflow-y-auto p-4">
                        <For
                            each=move || {
                                session
                                    .with(|s| s.messages().iter().cloned().enumerate().collect::<Vec<_>>())
                            }
                            key=|(i, _)| *i
                            children=move |(_, msg)| view! { <ChatBubble msg /> }
                        />
                        <Show when=move || session.with(|s| s.is_waiting())>
                            <div class="w-fit rounded-2xl bg-slate-800 px-4 py-2 text-slate-400 animate-pulse">
                                "..."
                            </div>
                        </Show>
                    </div>
                    <div class="flex flex-wrap gap-2 border-t border-slate-800 px-3 py-2">
                        {QuickReply::all()
                            .into_iter()
                            .map(|quick| {
                                view! {
                                    <button
                                        type="button"
                                        class="rounded-full border border-teal-400/50 px-3 py-1 text-xs text-teal-300 hover:bg-teal-400/10"
                                        on:click=move |_| quick_reply(quick)
                                    >
                                        {quick.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <form class="flex gap-2 border-t border-slate-800 p-3" on:submit=on_submit>
                        <input
                            node_ref=input_ref
                            type="text"
                            placeholder="Ask me something..."
                            autocomplete="off"
                            class="flex-1 rounded-md border border-slate-700 bg-slate-950 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-teal-400"
                        />
                        <button
                            type="submit"
                            class="rounded-md bg-teal-500 px-4 py-2 text-sm font-semibold text-slate-950 hover:bg-teal-400"
                        >
                            "Send"
                        </button>
                    </form>
                </div>
            </Show>
            <button
                type="button"
                aria-label="Toggle chat"
                class="flex h-14 w-14 items-center justify-center rounded-full bg-teal-500 text-2xl text-slate-950 shadow-xl hover:bg-teal-400 transition-colors"
                on:click=move |_| session.update(|s| s.toggle())
            >
                {move || if session.with(|s| s.is_open()) { "✕" } else { "💬" }}
            </button>
        </div>
    }
}

#[component]
fn ChatBubble(msg: Message) -> impl IntoView {
    let class = match msg {
        Message::Bot(_) => "w-fit max-w-[85%] rounded-2xl rounded-bl-sm bg-slate-800 px-4 py-2 text-sm whitespace-pre-line",
        Message::Visitor(_) => "ml-auto w-fit max-w-[85%] rounded-2xl rounded-br-sm bg-teal-500 px-4 py-2 text-sm text-slate-950 whitespace-pre-line",
    };
    view! { <div class=class>{msg.text().to_string()}</div> }
}
