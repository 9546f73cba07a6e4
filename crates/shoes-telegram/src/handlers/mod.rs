//! Telegram update handlers.
//!
//! Text goes to the reconciliation engine, `/commands` to the command table,
//! and everything else gets a short liveness reply.

use std::sync::Arc;

use teloxide::{
    prelude::*,
    types::{CallbackQuery, Message},
};
use tracing::{info, warn};

use crate::router::AppState;

mod callback;
mod commands;
mod text;

/// Reply to messages that carry no text.
const ALIVE_TEXT: &str = "👋 Я здесь. Получаю апдейты.";

pub async fn handle_callback(q: CallbackQuery, state: Arc<AppState>) -> ResponseResult<()> {
    callback::handle_callback(q, state).await
}

/// What an incoming message is handled as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Route {
    Command,
    Report,
    NoText,
}

fn route(text: Option<&str>) -> Route {
    match text {
        Some(t) if t.starts_with('/') => Route::Command,
        Some(_) => Route::Report,
        None => Route::NoText,
    }
}

pub async fn handle_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    match route(msg.text()) {
        Route::Command => return commands::handle_command(msg, state).await,
        Route::Report => return text::handle_text(msg, state).await,
        Route::NoText => {}
    }

    info!(
        chat_id = msg.chat.id.0,
        kind = message_kind(&msg),
        "message without text"
    );
    if let Err(e) = state.messenger.send_text(msg.chat.id, ALIVE_TEXT).await {
        warn!(chat_id = msg.chat.id.0, error = %e, "reply failed");
    }

    Ok(())
}

fn message_kind(msg: &Message) -> &'static str {
    if msg.photo().is_some() {
        "photo"
    } else if msg.sticker().is_some() {
        "sticker"
    } else if msg.document().is_some() {
        "document"
    } else if msg.voice().is_some() {
        "voice"
    } else if msg.video().is_some() {
        "video"
    } else {
        "other"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slash_prefix_is_a_command() {
        assert_eq!(route(Some("/start")), Route::Command);
        assert_eq!(route(Some("/1 2 3")), Route::Command);
        assert_eq!(route(Some("/")), Route::Command);
    }

    #[test]
    fn other_text_is_a_report() {
        assert_eq!(route(Some("1 4 5")), Route::Report);
        assert_eq!(route(Some(" /start")), Route::Report);
        assert_eq!(route(Some("hello")), Route::Report);
        assert_eq!(route(Some("")), Route::Report);
    }

    #[test]
    fn missing_text_gets_alive_reply() {
        assert_eq!(route(None), Route::NoText);
        assert!(ALIVE_TEXT.starts_with("👋"));
    }
}
