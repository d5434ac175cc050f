pub(crate) const SELECT_MENU_ITEMS: &str = r#"
    SELECT id, name, price
    FROM menu_items
"#;

pub(crate) const INSERT_ORDER: &str = r#"
    INSERT INTO orders(table_number, total_amount, placed_at)
    VALUES ($1, $2, $3)
    RETURNING id
"#;

pub(crate) const INSERT_ORDER_ITEM: &str = r#"
    INSERT INTO order_items(order_id, menu_item_id, quantity, line_total)
    VALUES ($1, $2, $3, $4)
"#;
