//! Implements the `!order <order number>` lookup command.

use serenity::builder::CreateMessage;
use serenity::model::channel::Message;
use serenity::prelude::*;
use tracing::error;

use super::ui;
use crate::AppState;

pub async fn run_prefix(ctx: &Context, msg: &Message, args: Vec<&str>) {
    let Some(order_number) = args.first().and_then(|arg| arg.parse::<i64>().ok()) else {
        msg.reply(&ctx.http, "Usage: `!order <order number>`")
            .await
            .ok();
        return;
    };
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let embed = match app_state.shopify.get_order(order_number).await {
        Ok(Some(order)) => ui::detail_embed(&order),
        // A miss is a normal outcome, answered like any other reply.
        Ok(None) => ui::not_found_embed(),
        Err(why) => {
            error!("order lookup for #{order_number} failed: {why}");
            return;
        }
    };
    let builder = CreateMessage::new().embed(embed);
    msg.author.direct_message(&ctx.http, builder).await.ok();
}
