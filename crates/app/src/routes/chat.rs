use dioxus::prelude::*;
use shared_ui::{Button, Card, CardContent, CardHeader, CardTitle};

/// Who wrote a chat line.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Author {
    Patient,
    CareTeam,
}

#[derive(Debug, Clone, PartialEq)]
struct ChatLine {
    author: Author,
    text: String,
}

const GREETING: &str = "Hi! How can we help you today?";
const AUTO_REPLY: &str = "Thanks for your message. A member of our care team will reply shortly.";

/// Append a patient message and the canned acknowledgement. Blank input is ignored.
fn push_message(lines: &mut Vec<ChatLine>, text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return false;
    }
    lines.push(ChatLine {
        author: Author::Patient,
        text: text.to_string(),
    });
    lines.push(ChatLine {
        author: Author::CareTeam,
        text: AUTO_REPLY.to_string(),
    });
    true
}

/// Chat view. Messages live only in this page's state; delivery to the
/// care team happens outside this app.
#[component]
pub fn Chat() -> Element {
    let mut lines = use_signal(|| {
        vec![ChatLine {
            author: Author::CareTeam,
            text: GREETING.to_string(),
        }]
    });
    let mut draft = use_signal(String::new);

    let mut send = move || {
        let text = draft();
        if push_message(&mut lines.write(), &text) {
            draft.set(String::new());
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }

        div { class: "chat-page",
            Card { class: "chat-card",
                CardHeader {
                    CardTitle { "Message the care team" }
                }
                CardContent {
                    ul { class: "chat-log",
                        for (i, line) in lines.read().iter().enumerate() {
                            li {
                                key: "{i}",
                                class: if line.author == Author::Patient { "chat-line chat-line-patient" } else { "chat-line chat-line-team" },
                                "{line.text}"
                            }
                        }
                    }
                    form {
                        class: "chat-compose",
                        onsubmit: move |evt: FormEvent| {
                            evt.prevent_default();
                            send();
                        },
                        input {
                            class: "chat-input",
                            r#type: "text",
                            placeholder: "Type your message",
                            value: draft(),
                            oninput: move |e: FormEvent| draft.set(e.value()),
                        }
                        Button { button_type: "submit", "Send" }
                    }
                }
            }
        }
    }
}
