//! Chat Popup
//!
//! A demo chat: the user's message is echoed as a bubble and a canned bot
//! answer follows after a short pause. There is no backend.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{Document, Element, Event, HtmlInputElement};

use crate::app::PageContext;
use crate::dom;

pub const BOT_REPLY: &str = "Sorry, I am just a demo bot! I can't provide real responses just yet.";

/// Who wrote a chat bubble
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Author {
    User,
    Bot,
}

impl Author {
    pub fn bubble_class(self) -> &'static str {
        match self {
            Author::User => "message-bubble user-message",
            Author::Bot => "message-bubble",
        }
    }
}

/// Trimmed outgoing message, `None` when there is nothing to send
pub fn outgoing_message(raw: &str) -> Option<&str> {
    let text = raw.trim();
    (!text.is_empty()).then_some(text)
}

struct ChatWindow {
    document: Document,
    messages: Element,
    input: HtmlInputElement,
    reply_delay_ms: u32,
}

impl ChatWindow {
    fn append(&self, text: &str, author: Author) {
        let bubble = match self.document.create_element("div") {
            Ok(bubble) => bubble,
            Err(e) => {
                log::error!("Could not create chat bubble: {:?}", e);
                return;
            }
        };
        bubble.set_class_name(author.bubble_class());
        bubble.set_text_content(Some(text));
        if let Err(e) = self.messages.append_child(&bubble) {
            log::error!("Could not append chat bubble: {:?}", e);
            return;
        }
        self.messages.set_scroll_top(self.messages.scroll_height());
    }

    fn submit(self: &Rc<Self>) {
        let value = self.input.value();
        let Some(text) = outgoing_message(&value) else {
            return;
        };
        self.append(text, Author::User);
        self.input.set_value("");

        let chat = Rc::clone(self);
        Timeout::new(self.reply_delay_ms, move || chat.append(BOT_REPLY, Author::Bot)).forget();
    }
}

pub fn bind(ctx: &PageContext) -> bool {
    let document = &ctx.document;
    let (Some(toggle), Some(popup)) = (
        dom::element(document, "chat-toggle-btn"),
        dom::element(document, "chat-popup"),
    ) else {
        return false;
    };

    dom::listen(&toggle, "click", move |_| {
        let _ = popup.class_list().toggle("show");
    });

    if let (Some(form), Some(input), Some(messages)) = (
        dom::element(document, "chat-input-form"),
        dom::input(document, "chat-input"),
        dom::element(document, "chat-messages"),
    ) {
        let chat = Rc::new(ChatWindow {
            document: document.clone(),
            messages,
            input,
            reply_delay_ms: ctx.config.chat_reply_delay_ms,
        });
        dom::listen(&form, "submit", move |event: Event| {
            event.prevent_default();
            chat.submit();
        });
    }

    true
}
