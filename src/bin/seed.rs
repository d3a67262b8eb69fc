use rust_decimal::Decimal;
use std::str::FromStr;
use wishlist_service::{
    config::AppConfig,
    db::{create_pool, run_migrations},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url, 2).await?;
    // Ensure migrations are applied.
    run_migrations(&pool).await?;

    let home = ensure_wishlist(&pool, 1001, "home", true).await?;
    let birthday = ensure_wishlist(&pool, 1001, "birthday", false).await?;
    let office = ensure_wishlist(&pool, 2002, "office", false).await?;

    seed_items(
        &pool,
        home,
        &[
            (501, "Espresso Machine", "249.99", 1),
            (502, "Linen Sheets", "89.50", 2),
        ],
    )
    .await?;
    seed_items(&pool, birthday, &[(601, "Mechanical Keyboard", "129.00", 1)]).await?;
    seed_items(
        &pool,
        office,
        &[(701, "Desk Lamp", "39.95", 3), (702, "Monitor Arm", "74.00", 2)],
    )
    .await?;

    println!("Seed completed. Wishlist IDs: {home}, {birthday}, {office}");
    Ok(())
}

async fn ensure_wishlist(
    pool: &sqlx::PgPool,
    customer_id: i32,
    name: &str,
    is_public: bool,
) -> anyhow::Result<i32> {
    let row: (i32,) = sqlx::query_as(
        r#"
        INSERT INTO wishlists (customer_id, wishlist_name, is_public)
        VALUES ($1, $2, $3)
        ON CONFLICT (customer_id, wishlist_name) DO UPDATE SET is_public = EXCLUDED.is_public
        RETURNING id
        "#,
    )
    .bind(customer_id)
    .bind(name)
    .bind(is_public)
    .fetch_one(pool)
    .await?;

    println!("Ensured wishlist '{name}' for customer {customer_id}");
    Ok(row.0)
}

async fn seed_items(
    pool: &sqlx::PgPool,
    wishlist_id: i32,
    items: &[(i32, &str, &str, i32)],
) -> anyhow::Result<()> {
    for &(product_id, name, price, quantity) in items {
        let price = Decimal::from_str(price)?;
        sqlx::query(
            r#"
            INSERT INTO wishlist_items (wishlist_id, product_id, product_name, product_price, quantity)
            SELECT $1, $2, $3, $4, $5
            WHERE NOT EXISTS (
                SELECT 1 FROM wishlist_items WHERE wishlist_id = $1 AND product_id = $2
            )
            "#,
        )
        .bind(wishlist_id)
        .bind(product_id)
        .bind(name)
        .bind(price)
        .bind(quantity)
        .execute(pool)
        .await?;
    }

    println!("Seeded {} items into wishlist {wishlist_id}", items.len());
    Ok(())
}
