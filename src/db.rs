// src/db.rs

use rust_decimal::Decimal;
use sqlx::PgPool;

/// Applies the embedded migrations from `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
  sqlx::migrate!("./migrations").run(pool).await
}

/// Inserts a handful of sample products when the table is empty. Gated by
/// the `SEED_DB` configuration flag; a no-op on a populated table.
pub async fn seed_products(pool: &PgPool) -> Result<(), sqlx::Error> {
  let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
    .fetch_one(pool)
    .await?;
  if count > 0 {
    tracing::info!(existing = count, "Products table already populated, skipping seed.");
    return Ok(());
  }

  let samples: [(&str, &str, Decimal, i32, &str); 4] = [
    (
      "Laptop",
      "15-inch developer laptop",
      Decimal::new(1299_99, 2),
      12,
      "Electronics",
    ),
    (
      "Wireless Mouse",
      "Ergonomic 2.4GHz mouse",
      Decimal::new(24_50, 2),
      40,
      "Electronics",
    ),
    ("Desk Chair", "Adjustable office chair", Decimal::new(189_00, 2), 7, "Furniture"),
    ("Notebook", "A5 dotted notebook", Decimal::new(6_95, 2), 150, "Stationery"),
  ];

  for (name, description, price, quantity, category) in samples {
    sqlx::query("INSERT INTO products (name, description, price, quantity, category) VALUES ($1, $2, $3, $4, $5)")
      .bind(name)
      .bind(description)
      .bind(price)
      .bind(quantity)
      .bind(category)
      .execute(pool)
      .await?;
  }

  tracing::info!("Seeded sample products.");
  Ok(())
}
