use std::sync::Arc;

use teloxide::{dispatching::Dispatcher, dptree, prelude::*};
use tracing::{info, warn};

use shoes_core::{config::Config, Catalog};

use crate::handlers;
use crate::TelegramMessenger;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub messenger: TelegramMessenger,
}

pub async fn run_polling(cfg: Arc<Config>, catalog: Arc<Catalog>) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.telegram_bot_token.clone());

    match bot.get_me().await {
        Ok(me) => info!(username = %me.username(), "bot started"),
        Err(e) => warn!(error = %e, "get_me failed; continuing with polling"),
    }
    info!(
        shelves = catalog.shelf_count(),
        items = catalog.len(),
        "serving catalog"
    );

    let state = Arc::new(AppState {
        catalog,
        messenger: TelegramMessenger::new(bot.clone(), cfg.telegram_safe_limit),
    });

    let handler = dptree::entry()
        .branch(Update::filter_callback_query().endpoint(handlers::handle_callback))
        .branch(Update::filter_message().endpoint(handlers::handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .default_handler(|upd| async move {
            info!(update_id = upd.id, "unhandled update");
        })
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
