// web_app/api/queries.rs - Manufacturer list query
//
// Pure functions that take a pool and the query variables and return typed
// results. The only dynamic SQL is the ORDER BY list, built from enum
// variants, never from request strings; the filter text is always bound.

use sqlx::PgPool;

use crate::fixtures::tables::manufacturers::SCHEMA;
use crate::web_app::model::*;

const FILTER_CLAUSE: &str = "($1::text IS NULL OR name ILIKE $1)";

/// ORDER BY list for the requested clauses
///
/// `id` is always appended so rows with equal sort keys keep a stable
/// order across pages.
pub fn order_by_sql(order_by: &[OrderByClause]) -> String {
    let mut parts: Vec<String> = order_by
        .iter()
        .map(|clause| format!("{} {}", clause.column.sql_column(), clause.order.as_sql()))
        .collect();

    if parts.is_empty() {
        parts.push(format!(
            "{} {}",
            QueryManufacturersOrderByColumn::default().sql_column(),
            SortOrder::default().as_sql()
        ));
    }
    parts.push("id DESC".to_string());
    parts.join(", ")
}

/// SELECT for one page; binds: $1 text pattern, $2 limit, $3 offset
pub fn page_sql(variables: &ManufacturersQueryVariables) -> String {
    format!(
        r#"
        SELECT
            id, name, slug, description, website, is_approved,
            products_count, created_at, updated_at
        FROM {}.manufacturers
        WHERE {}
        ORDER BY {}
        LIMIT $2 OFFSET $3
        "#,
        SCHEMA,
        FILTER_CLAUSE,
        order_by_sql(&variables.order_by)
    )
}

/// COUNT over the same filter as `page_sql`; binds: $1 text pattern
pub fn count_sql() -> String {
    format!(
        "SELECT COUNT(*) FROM {}.manufacturers WHERE {}",
        SCHEMA, FILTER_CLAUSE
    )
}

/// Load one page of manufacturers
pub async fn fetch_manufacturers(
    pool: &PgPool,
    variables: &ManufacturersQueryVariables,
) -> Result<ManufacturerConnection, sqlx::Error> {
    let per_page = variables.effective_first();
    let page = variables.effective_page();

    let (total,): (i64,) = sqlx::query_as(&count_sql())
        .bind(variables.text.as_deref())
        .fetch_one(pool)
        .await?;

    let data: Vec<Manufacturer> = sqlx::query_as(&page_sql(variables))
        .bind(variables.text.as_deref())
        .bind(per_page as i64)
        .bind(variables.offset())
        .fetch_all(pool)
        .await?;

    tracing::debug!(
        total,
        page,
        rows = data.len(),
        text = ?variables.text,
        "fetched manufacturers page"
    );

    let paginator_info = PaginatorInfo::new(total, page, per_page, data.len() as u32);
    Ok(ManufacturerConnection {
        data,
        paginator_info,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        let vars = ManufacturersQueryVariables::initial();
        assert_eq!(order_by_sql(&vars.order_by), "created_at DESC, id DESC");
    }

    #[test]
    fn test_multiple_order_clauses_keep_sequence() {
        let clauses = [
            OrderByClause {
                column: QueryManufacturersOrderByColumn::Name,
                order: SortOrder::Asc,
            },
            OrderByClause {
                column: QueryManufacturersOrderByColumn::UpdatedAt,
                order: SortOrder::Desc,
            },
        ];
        assert_eq!(order_by_sql(&clauses), "name ASC, updated_at DESC, id DESC");
    }

    #[test]
    fn test_empty_order_falls_back_to_newest() {
        assert_eq!(order_by_sql(&[]), "created_at DESC, id DESC");
    }

    #[test]
    fn test_page_sql_shape() {
        let sql = page_sql(&ManufacturersQueryVariables::initial());
        assert!(sql.contains("FROM shop.manufacturers"));
        assert!(sql.contains("name ILIKE $1"));
        assert!(sql.contains("ORDER BY created_at DESC, id DESC"));
        assert!(sql.contains("LIMIT $2 OFFSET $3"));
    }

    #[test]
    fn test_search_text_never_reaches_sql() {
        let vars = ManufacturersQueryVariables {
            text: Some("%'; DROP TABLE x; --%".to_string()),
            ..ManufacturersQueryVariables::initial()
        };
        assert!(!page_sql(&vars).contains("DROP TABLE"));
        assert!(!count_sql().contains("DROP TABLE"));
    }
}
