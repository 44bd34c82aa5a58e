use anyhow::{Context, Result};
use shop_admin::config::AppConfig;
use shop_admin::web_app::api::{db, queries};
use shop_admin::web_app::model::{like_pattern, ManufacturersQueryVariables};

fn main() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async_main())
}

async fn async_main() -> Result<()> {
    let config = AppConfig::from_env()?;
    println!("Testing PostgreSQL connection to {}...", config.redacted_database_url());

    let pool = db::create_pool(&config)
        .await
        .context("could not connect to the database")?;

    println!("✓ Connected successfully!");

    println!("\nChecking indexes on shop.manufacturers:");
    let indexes: Vec<(String, String)> = sqlx::query_as(
        r#"
        SELECT indexname, indexdef
        FROM pg_indexes
        WHERE schemaname = 'shop' AND tablename = 'manufacturers'
        "#,
    )
    .fetch_all(&pool)
    .await?;

    if indexes.is_empty() {
        println!("  No indexes found on shop.manufacturers");
    } else {
        for (name, def) in indexes {
            println!("  - {}: {}", name, def);
        }
    }

    println!("\nFirst page, newest first:");
    match queries::fetch_manufacturers(&pool, &ManufacturersQueryVariables::initial()).await {
        Ok(page) => {
            println!(
                "✓ {} of {} manufacturers (page {} of {})",
                page.data.len(),
                page.paginator_info.total,
                page.paginator_info.current_page,
                page.paginator_info.last_page
            );
            for m in page.data {
                println!("  - ID: {}, Name: {}, Created: {}", m.id, m.name, m.created_at);
            }
        }
        Err(e) => println!("✗ List query failed: {}", e),
    }

    println!("\nFiltered by 'books':");
    let variables = ManufacturersQueryVariables {
        text: Some(like_pattern("books")),
        ..ManufacturersQueryVariables::initial()
    };
    match queries::fetch_manufacturers(&pool, &variables).await {
        Ok(page) => println!("✓ {} matches", page.paginator_info.total),
        Err(e) => println!("✗ Filtered query failed: {}", e),
    }

    Ok(())
}
