use std::sync::Arc;

use teloxide::prelude::*;
use tracing::{debug, warn};

use crate::router::AppState;

/// Reconcile the message as a removal report and reply with the remainder.
pub async fn handle_text(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    let result = state.catalog.reconcile(text);
    debug!(
        chat_id = msg.chat.id.0,
        remaining = result.total_remaining,
        duplicates = result.duplicates.len(),
        invalid = result.invalid.len(),
        "reconciled report"
    );

    if let Err(e) = state
        .messenger
        .send_text(msg.chat.id, &result.to_string())
        .await
    {
        warn!(chat_id = msg.chat.id.0, error = %e, "report reply failed");
    }
    Ok(())
}
