//! Builds the summary text block and its embed.

use rust_decimal::Decimal;
use serenity::builder::CreateEmbed;

use crate::constants::EMBED_COLOR;
use crate::shopify::models::OrderSummary;

/// Assembles the summary in its fixed section order: order count header,
/// then either the per-order listing or the filler fact, then the closed
/// count and the balance. Deterministic for identical input.
pub fn summary_description(
    open_count: i64,
    orders: &[OrderSummary],
    fact: Option<&str>,
    closed_count: i64,
    balance: Decimal,
) -> String {
    let mut description = format!("**Orders: **{open_count}\n\n");
    if orders.is_empty() {
        description.push_str(&format!("{}\n\n", fact.unwrap_or_default()));
    } else {
        description.push_str("**Shopify:**\n");
        for order in orders {
            description.push_str(&order_line(order));
        }
        description.push('\n');
    }
    description.push_str(&format!("**Shopify Closed:** {closed_count}\n"));
    description.push_str(&format!("**Shopify Balance:** €{balance}\n"));
    description
}

pub fn summary_embed(
    open_count: i64,
    orders: &[OrderSummary],
    fact: Option<&str>,
    closed_count: i64,
    balance: Decimal,
) -> CreateEmbed {
    CreateEmbed::new()
        .description(summary_description(
            open_count,
            orders,
            fact,
            closed_count,
            balance,
        ))
        .color(EMBED_COLOR)
}

fn order_line(order: &OrderSummary) -> String {
    let country = order.country_code.as_deref().unwrap_or("N/A");
    format!(
        "**#{}** - {}/{}/{} - Time: **{}** - **{}**\n",
        order.order_number, order.day, order.month, order.year, order.time, country
    )
}
