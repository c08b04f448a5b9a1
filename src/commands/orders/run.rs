//! Implements the `!orders` summary command.

use chrono::{Datelike, NaiveDate, Utc};
use serenity::builder::{CreateEmbed, CreateMessage};
use serenity::model::channel::Message;
use serenity::prelude::*;
use tracing::error;

use super::ui;
use crate::AppState;
use crate::error::Result;

pub async fn run_prefix(ctx: &Context, msg: &Message) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    match summary_embed_for(&app_state).await {
        Ok(embed) => {
            let builder = CreateMessage::new().embed(embed);
            msg.author.direct_message(&ctx.http, builder).await.ok();
        }
        // A failed remote call aborts this command only; the bot stays up.
        Err(why) => error!("orders summary failed: {why}"),
    }
}

/// Fetches everything the summary needs, one call at a time: the open count,
/// the listing when anything is open, the closed count since the start of
/// the month, the balance, and a filler fact when the listing came up empty.
async fn summary_embed_for(app_state: &AppState) -> Result<CreateEmbed> {
    let open_count = app_state.shopify.open_order_count().await?;
    let listing = if open_count > 0 {
        app_state.shopify.list_open_orders().await?
    } else {
        Vec::new()
    };
    let closed_count = app_state
        .shopify
        .closed_order_count(month_start(Utc::now().date_naive()))
        .await?;
    let balance = app_state.shopify.balance().await?;
    let fact = if listing.is_empty() {
        Some(app_state.facts.random_fact().await?)
    } else {
        None
    };
    Ok(ui::summary_embed(
        open_count,
        &listing,
        fact.as_deref(),
        closed_count,
        balance,
    ))
}

fn month_start(today: NaiveDate) -> NaiveDate {
    today.with_day(1).unwrap_or(today)
}
