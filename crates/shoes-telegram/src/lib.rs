//! Telegram adapter (teloxide).
//!
//! Thin front end over `shoes-core`: commands, the help button, and free text
//! routed to the reconciliation engine.

use teloxide::{
    prelude::*,
    types::{ChatId, InlineKeyboardMarkup, ParseMode},
};

use tokio::time::sleep;

pub mod handlers;
pub mod router;

use shoes_core::{errors::Error, formatting::split_message, Result};

#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
    safe_limit: usize,
}

impl TelegramMessenger {
    pub fn new(bot: Bot, safe_limit: usize) -> Self {
        Self { bot, safe_limit }
    }

    fn map_err(e: teloxide::RequestError) -> Error {
        Error::External(format!("telegram error: {e}"))
    }

    async fn with_retry<T, Fut>(&self, mut op: impl FnMut() -> Fut) -> Result<T>
    where
        Fut: std::future::IntoFuture<Output = std::result::Result<T, teloxide::RequestError>>,
        Fut::IntoFuture: Send,
    {
        const MAX_RETRIES: usize = 1;
        let mut attempts = 0usize;
        loop {
            match op().await {
                Ok(v) => return Ok(v),
                Err(e) => match e {
                    teloxide::RequestError::RetryAfter(d) if attempts < MAX_RETRIES => {
                        attempts += 1;
                        sleep(d).await;
                        continue;
                    }
                    other => return Err(Self::map_err(other)),
                },
            }
        }
    }

    /// Send plain text verbatim, split into several messages if it is too long.
    /// Blank chunks are skipped.
    pub async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<()> {
        // Telegram rejects empty messages.
        for chunk in split_message(text, self.safe_limit)
            .into_iter()
            .filter(|c| !c.trim().is_empty())
        {
            self.with_retry(|| self.bot.send_message(chat_id, chunk.clone()))
                .await?;
        }
        Ok(())
    }

    pub async fn send_html(
        &self,
        chat_id: ChatId,
        html: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> Result<()> {
        self.with_retry(|| {
            let req = self
                .bot
                .send_message(chat_id, html.to_string())
                .parse_mode(ParseMode::Html);
            match &keyboard {
                Some(markup) => req.reply_markup(markup.clone()),
                None => req,
            }
        })
        .await?;
        Ok(())
    }

    pub async fn answer_callback_query(&self, callback_id: &str) -> Result<()> {
        self.with_retry(|| self.bot.answer_callback_query(callback_id.to_string()))
            .await?;
        Ok(())
    }
}
