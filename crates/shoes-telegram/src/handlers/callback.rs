use std::sync::Arc;

use teloxide::prelude::*;
use tracing::warn;

use crate::router::AppState;

use super::commands::{HELP_CALLBACK, HELP_TEXT};

/// HTML to send for a button press, if any.
fn callback_reply(data: &str) -> Option<&'static str> {
    match data {
        HELP_CALLBACK => Some(HELP_TEXT),
        _ => None,
    }
}

pub async fn handle_callback(q: CallbackQuery, state: Arc<AppState>) -> ResponseResult<()> {
    let data = q.data.as_deref().unwrap_or_default();
    let chat_id = q.message.as_ref().map(|m| m.chat.id);

    if let (Some(reply), Some(chat_id)) = (callback_reply(data), chat_id) {
        if let Err(e) = state.messenger.send_html(chat_id, reply, None).await {
            warn!(chat_id = chat_id.0, error = %e, "callback reply failed");
        }
    }

    // Always answer so the client stops showing the spinner.
    if let Err(e) = state.messenger.answer_callback_query(&q.id).await {
        warn!(error = %e, "answer_callback_query failed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_button_sends_help() {
        assert_eq!(callback_reply("help"), Some(HELP_TEXT));
    }

    #[test]
    fn other_data_sends_nothing() {
        assert_eq!(callback_reply(""), None);
        assert_eq!(callback_reply("HELP"), None);
        assert_eq!(callback_reply("askuser:1:0"), None);
    }
}
