//! Builds the order-detail text block and its embed.

use serenity::builder::CreateEmbed;

use crate::constants::EMBED_COLOR;
use crate::shopify::models::OrderDetail;

/// Reply text when an order number matches nothing open or recent.
pub const ORDER_NOT_FOUND: &str = "That order number doesn't exist.";

/// The full detail block, with products in their order of appearance.
pub fn detail_description(order: &OrderDetail) -> String {
    let mut products = String::new();
    for product in &order.products {
        products.push_str(&format!(
            "{} - **Quantity** {}\n",
            product.name, product.quantity
        ));
    }
    format!(
        "**{}**\n**Name: **{}\n**Email: **{}\n**Price: **€{}\n**Country: **{}\n\n**Products:**\n{products}",
        order.display_name, order.customer_name, order.email, order.price, order.country_code
    )
}

pub fn detail_embed(order: &OrderDetail) -> CreateEmbed {
    CreateEmbed::new()
        .description(detail_description(order))
        .color(EMBED_COLOR)
}

pub fn not_found_embed() -> CreateEmbed {
    CreateEmbed::new()
        .description(ORDER_NOT_FOUND)
        .color(EMBED_COLOR)
}
