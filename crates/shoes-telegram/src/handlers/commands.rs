use std::sync::Arc;

use teloxide::{
    prelude::*,
    types::{InlineKeyboardButton, InlineKeyboardMarkup},
};
use tracing::{debug, warn};

use crate::router::AppState;

/// Callback data of the inline "help" button.
pub(crate) const HELP_CALLBACK: &str = "help";

const START_TEXT: &str = "👋 Привет! Я <b>ShoesTracker</b> 👟 — бот для учёта тормозных башмаков.\n\n\
Я помогу тебе:\n\
• указывать снятые башмаки,\n\
• показывать, сколько осталось в стеллажах,\n\
• быстро находить нужный номер.\n\n\
ℹ️ Просто введи номера башмаков через пробел или запятую, например:\n\
<code>1 4 5 6 3</code>";

pub(crate) const HELP_TEXT: &str = "📖 <b>Инструкция по ShoesTracker:</b>\n\n\
• <code>/start</code> — приветствие и краткое руководство\n\
• <code>/help</code> — список команд\n\n\
👉 Просто вводи номера башмаков через пробел или запятую — я сам нормализую (001, 002...).";

fn parse_command(text: &str) -> String {
    // Telegram may send `/cmd@botname arg1 ...`
    let first = text.split_whitespace().next().unwrap_or("");

    first
        .trim_start_matches('/')
        .split('@')
        .next()
        .unwrap_or("")
        .to_lowercase()
}

fn start_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        "📖 Помощь",
        HELP_CALLBACK,
    )]])
}

/// Reply text and optional keyboard for a parsed command.
///
/// `/help` and unknown commands both get the help text.
fn command_reply(cmd: &str) -> (&'static str, Option<InlineKeyboardMarkup>) {
    match cmd {
        "start" => (START_TEXT, Some(start_keyboard())),
        _ => (HELP_TEXT, None),
    }
}

pub async fn handle_command(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let cmd = parse_command(text);
    debug!(chat_id = msg.chat.id.0, command = %cmd, "command");

    let (reply, keyboard) = command_reply(&cmd);
    if let Err(e) = state.messenger.send_html(msg.chat.id, reply, keyboard).await {
        warn!(chat_id = msg.chat.id.0, command = %cmd, error = %e, "command reply failed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use teloxide::types::InlineKeyboardButtonKind;

    use super::*;

    #[test]
    fn parses_plain_and_addressed_commands() {
        assert_eq!(parse_command("/start"), "start");
        assert_eq!(parse_command("  /Help@ShoesTrackerBot  me please "), "help");
        assert_eq!(parse_command("/"), "");
    }

    #[test]
    fn start_gets_greeting_with_keyboard() {
        let (text, keyboard) = command_reply("start");
        assert_eq!(text, START_TEXT);
        assert!(keyboard.is_some());
    }

    #[test]
    fn help_and_unknown_commands_get_help_text() {
        for cmd in ["help", "stats", "", "start2"] {
            let (text, keyboard) = command_reply(cmd);
            assert_eq!(text, HELP_TEXT, "command {cmd:?}");
            assert!(keyboard.is_none());
        }
        assert_eq!(command_reply(&parse_command("/whatever@bot 1 2 3")).0, HELP_TEXT);
    }

    #[test]
    fn start_keyboard_has_help_button() {
        let kb = start_keyboard();
        assert_eq!(kb.inline_keyboard.len(), 1);
        assert_eq!(kb.inline_keyboard[0].len(), 1);
        match &kb.inline_keyboard[0][0].kind {
            InlineKeyboardButtonKind::CallbackData(data) => assert_eq!(data, HELP_CALLBACK),
            other => panic!("unexpected button kind: {other:?}"),
        }
    }

    #[test]
    fn help_lists_commands() {
        assert!(HELP_TEXT.contains("/start"));
        assert!(HELP_TEXT.contains("/help"));
        assert!(START_TEXT.contains("1 4 5 6 3"));
    }
}
