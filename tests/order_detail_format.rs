//! Formatting properties of the order lookup reply.

use rust_decimal::Decimal;

use shopclerk_bot::commands::order::ui::{ORDER_NOT_FOUND, detail_description};
use shopclerk_bot::shopify::models::{OrderDetail, ProductLine};

fn sample_detail() -> OrderDetail {
    OrderDetail {
        display_name: "#1001".to_string(),
        customer_name: "Piet Jansen".to_string(),
        email: "piet@example.com".to_string(),
        price: Decimal::new(4990, 2),
        country_code: "NL".to_string(),
        products: vec![
            ProductLine {
                name: "Keycap Set".to_string(),
                quantity: 2,
            },
            ProductLine {
                name: "Switch Tester".to_string(),
                quantity: 1,
            },
        ],
    }
}

#[test]
fn detail_block_lists_every_field_and_product() {
    let text = detail_description(&sample_detail());

    assert_eq!(
        text,
        "**#1001**\n\
         **Name: **Piet Jansen\n\
         **Email: **piet@example.com\n\
         **Price: **€49.90\n\
         **Country: **NL\n\n\
         **Products:**\n\
         Keycap Set - **Quantity** 2\n\
         Switch Tester - **Quantity** 1\n"
    );
}

#[test]
fn product_lines_preserve_order_of_appearance() {
    let mut detail = sample_detail();
    detail.products.reverse();

    let text = detail_description(&detail);

    let tester = text.find("Switch Tester").unwrap();
    let keycaps = text.find("Keycap Set").unwrap();
    assert!(tester < keycaps);
}

#[test]
fn not_found_is_a_plain_sentence() {
    assert_eq!(ORDER_NOT_FOUND, "That order number doesn't exist.");
}
