// tests/manufacturer_queries_test.rs
// Manufacturer list query against a live PostgreSQL (DATABASE_URL)

mod common;

use common::{create_test_pool, setup_test_db};
use shop_admin::fixtures::tables::manufacturers::{
    NEWEST_SEED_NAME, SEED_ROWS, SEED_ROWS_MATCHING_ACME, SEED_ROWS_MATCHING_BOOKS,
};
use shop_admin::web_app::api::queries::fetch_manufacturers;
use shop_admin::web_app::model::*;

fn filtered(search_text: &str, page: u32) -> ManufacturersQueryVariables {
    ManufacturersQueryVariables::initial().merge(&RefetchVariables {
        text: Some(like_pattern(search_text)),
        page: Some(page),
    })
}

#[tokio::test]
async fn test_first_page_is_newest_first() -> anyhow::Result<()> {
    let pool = create_test_pool().await?;
    setup_test_db(&pool).await?;

    let result = fetch_manufacturers(&pool, &ManufacturersQueryVariables::initial()).await?;

    assert_eq!(result.paginator_info.total, SEED_ROWS);
    assert_eq!(result.paginator_info.current_page, 1);
    assert_eq!(result.paginator_info.per_page, LIMIT);
    assert_eq!(result.data.len(), LIMIT as usize);
    assert_eq!(result.data[0].name, NEWEST_SEED_NAME);

    let dates: Vec<_> = result.data.iter().map(|m| m.created_at).collect();
    let mut sorted = dates.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(dates, sorted, "rows must be ordered by created_at DESC");

    Ok(())
}

#[tokio::test]
async fn test_second_page_holds_the_rest() -> anyhow::Result<()> {
    let pool = create_test_pool().await?;
    setup_test_db(&pool).await?;

    let vars = ManufacturersQueryVariables {
        page: 2,
        ..ManufacturersQueryVariables::initial()
    };
    let result = fetch_manufacturers(&pool, &vars).await?;

    assert_eq!(result.data.len() as i64, SEED_ROWS - LIMIT as i64);
    assert_eq!(result.paginator_info.last_page, 2);
    assert!(!result.paginator_info.has_more_pages);
    assert_eq!(result.paginator_info.first_item, Some(LIMIT as i64 + 1));
    assert_eq!(result.paginator_info.last_item, Some(SEED_ROWS));

    Ok(())
}

#[tokio::test]
async fn test_filter_is_case_insensitive_substring() -> anyhow::Result<()> {
    let pool = create_test_pool().await?;
    setup_test_db(&pool).await?;

    let books = fetch_manufacturers(&pool, &filtered("BOOKS", 1)).await?;
    assert_eq!(books.paginator_info.total, SEED_ROWS_MATCHING_BOOKS);
    assert!(books
        .data
        .iter()
        .all(|m| m.name.to_lowercase().contains("books")));

    let acme = fetch_manufacturers(&pool, &filtered("acme", 1)).await?;
    assert_eq!(acme.paginator_info.total, SEED_ROWS_MATCHING_ACME);
    assert_eq!(acme.data[0].name, "Acme Kitchen");
    assert_eq!(acme.data[1].name, "Acme Tools");

    Ok(())
}

#[tokio::test]
async fn test_empty_search_matches_everything() -> anyhow::Result<()> {
    let pool = create_test_pool().await?;
    setup_test_db(&pool).await?;

    let result = fetch_manufacturers(&pool, &filtered("", 1)).await?;
    assert_eq!(result.paginator_info.total, SEED_ROWS);

    Ok(())
}

#[tokio::test]
async fn test_filter_without_match() -> anyhow::Result<()> {
    let pool = create_test_pool().await?;
    setup_test_db(&pool).await?;

    let result = fetch_manufacturers(&pool, &filtered("zzz-no-such-maker", 1)).await?;
    assert!(result.data.is_empty());
    assert_eq!(result.paginator_info.total, 0);
    assert_eq!(result.paginator_info.first_item, None);

    Ok(())
}

#[tokio::test]
async fn test_page_past_the_end_keeps_total() -> anyhow::Result<()> {
    let pool = create_test_pool().await?;
    setup_test_db(&pool).await?;

    let result = fetch_manufacturers(&pool, &filtered("acme", 7)).await?;
    assert!(result.data.is_empty());
    assert_eq!(result.paginator_info.total, SEED_ROWS_MATCHING_ACME);
    assert_eq!(result.paginator_info.current_page, 7);

    Ok(())
}

#[tokio::test]
async fn test_order_by_name_ascending() -> anyhow::Result<()> {
    let pool = create_test_pool().await?;
    setup_test_db(&pool).await?;

    let vars = ManufacturersQueryVariables {
        order_by: vec![OrderByClause {
            column: QueryManufacturersOrderByColumn::Name,
            order: SortOrder::Asc,
        }],
        ..ManufacturersQueryVariables::initial()
    };
    let result = fetch_manufacturers(&pool, &vars).await?;

    assert_eq!(result.data[0].name, "Acme Kitchen");
    assert_eq!(result.data[1].name, "Acme Tools");

    Ok(())
}

#[tokio::test]
async fn test_oversized_page_is_clamped() -> anyhow::Result<()> {
    let pool = create_test_pool().await?;
    setup_test_db(&pool).await?;

    let vars = ManufacturersQueryVariables {
        first: 10_000,
        ..ManufacturersQueryVariables::initial()
    };
    let result = fetch_manufacturers(&pool, &vars).await?;

    assert_eq!(result.paginator_info.per_page, MAX_PAGE_SIZE);
    assert_eq!(result.data.len() as i64, SEED_ROWS);

    Ok(())
}
