//! Parameterized statements for the `stocks` table.
//!
//! Building is pure: a [`StockCommand`] becomes SQL text with `$n`
//! placeholders plus the ordered values to bind. Nothing here touches the
//! database.

use crate::domain::requests::stock::{CreateStockRequest, QueryPagination, UpdateStockRequest};
use sea_query::{Expr, Iden, Order, PostgresQueryBuilder, Query, Values};
use shared::errors::RepositoryError;

#[derive(Iden)]
enum Stocks {
    Table,
    Stockid,
    Name,
    Price,
    Company,
}

const PROJECTION: [Stocks; 4] = [Stocks::Stockid, Stocks::Name, Stocks::Price, Stocks::Company];

#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub values: Values,
}

impl From<(String, Values)> for Statement {
    fn from((sql, values): (String, Values)) -> Self {
        Self { sql, values }
    }
}

#[derive(Debug, Clone)]
pub enum StockCommand<'a> {
    Insert(&'a CreateStockRequest),
    SelectOne(i64),
    /// Expects an already normalized window.
    SelectAll(QueryPagination),
    Update(i64, &'a UpdateStockRequest),
    Delete(i64),
}

impl StockCommand<'_> {
    pub fn build(&self) -> Result<Statement, RepositoryError> {
        let built = match self {
            StockCommand::Insert(req) => Query::insert()
                .into_table(Stocks::Table)
                .columns([Stocks::Name, Stocks::Price, Stocks::Company])
                .values([
                    req.name.as_str().into(),
                    req.price.into(),
                    req.company.as_str().into(),
                ])?
                .returning_col(Stocks::Stockid)
                .build(PostgresQueryBuilder),

            StockCommand::SelectOne(stock_id) => Query::select()
                .columns(PROJECTION)
                .from(Stocks::Table)
                .and_where(Expr::col(Stocks::Stockid).eq(*stock_id))
                .build(PostgresQueryBuilder),

            StockCommand::SelectAll(pagination) => Query::select()
                .columns(PROJECTION)
                .from(Stocks::Table)
                .order_by(Stocks::Stockid, Order::Asc)
                .limit(pagination.limit.max(0) as u64)
                .offset(pagination.offset.max(0) as u64)
                .build(PostgresQueryBuilder),

            StockCommand::Update(stock_id, req) => {
                let mut update = Query::update();
                update.table(Stocks::Table).value(Stocks::Price, req.price);

                if let Some(name) = &req.name {
                    update.value(Stocks::Name, name.as_str());
                }
                if let Some(company) = &req.company {
                    update.value(Stocks::Company, company.as_str());
                }

                update
                    .and_where(Expr::col(Stocks::Stockid).eq(*stock_id))
                    .build(PostgresQueryBuilder)
            }

            StockCommand::Delete(stock_id) => Query::delete()
                .from_table(Stocks::Table)
                .and_where(Expr::col(Stocks::Stockid).eq(*stock_id))
                .build(PostgresQueryBuilder),
        };

        Ok(built.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_query::Value;

    fn create_request() -> CreateStockRequest {
        CreateStockRequest {
            name: "Model S".into(),
            price: 250,
            company: "Tesla".into(),
        }
    }

    #[test]
    fn insert_returns_generated_key() {
        let req = create_request();
        let stmt = StockCommand::Insert(&req).build().unwrap();

        assert!(stmt.sql.starts_with(r#"INSERT INTO "stocks" ("name", "price", "company")"#));
        assert!(stmt.sql.contains("VALUES ($1, $2, $3)"));
        assert!(stmt.sql.ends_with(r#"RETURNING "stockid""#));
        assert_eq!(
            stmt.values.0,
            vec![Value::from("Model S"), Value::from(250i64), Value::from("Tesla")]
        );
    }

    #[test]
    fn select_one_filters_on_primary_key() {
        let stmt = StockCommand::SelectOne(42).build().unwrap();

        assert!(stmt.sql.starts_with(r#"SELECT "stockid", "name", "price", "company""#));
        assert!(stmt.sql.ends_with(r#"WHERE "stockid" = $1"#));
        assert_eq!(stmt.values.0, vec![Value::from(42i64)]);
    }

    #[test]
    fn select_all_is_ordered_then_windowed() {
        let stmt = StockCommand::SelectAll(QueryPagination::new(4, 2))
            .build()
            .unwrap();

        assert!(stmt.sql.contains(r#"ORDER BY "stockid" ASC"#));
        assert!(stmt.sql.contains("LIMIT $1"));
        assert!(stmt.sql.contains("OFFSET $2"));
        assert_eq!(stmt.values.0, vec![Value::from(2u64), Value::from(4u64)]);
    }

    #[test]
    fn update_with_only_price_sets_a_single_column() {
        let req = UpdateStockRequest {
            price: 99,
            ..Default::default()
        };
        let stmt = StockCommand::Update(7, &req).build().unwrap();

        assert!(stmt.sql.starts_with(r#"UPDATE "stocks" SET "price" = $1 WHERE"#));
        assert!(!stmt.sql.contains(r#""name""#));
        assert!(!stmt.sql.contains(r#""company""#));
        assert_eq!(stmt.values.0, vec![Value::from(99i64), Value::from(7i64)]);
    }

    #[test]
    fn update_includes_provided_fields_in_order() {
        let req = UpdateStockRequest {
            name: Some("Model 3".into()),
            price: 300,
            company: Some("Tesla Inc".into()),
        };
        let stmt = StockCommand::Update(7, &req).build().unwrap();

        assert!(stmt.sql.contains(r#"SET "price" = $1, "name" = $2, "company" = $3"#));
        assert!(stmt.sql.ends_with(r#"WHERE "stockid" = $4"#));
        assert_eq!(stmt.values.0.len(), 4);
    }

    #[test]
    fn update_skips_absent_fields() {
        let req = UpdateStockRequest {
            name: None,
            price: 300,
            company: Some("Tesla Inc".into()),
        };
        let stmt = StockCommand::Update(7, &req).build().unwrap();

        assert!(!stmt.sql.contains(r#""name""#));
        assert!(stmt.sql.contains(r#"SET "price" = $1, "company" = $2"#));
        assert_eq!(
            stmt.values.0,
            vec![Value::from(300i64), Value::from("Tesla Inc"), Value::from(7i64)]
        );
    }

    #[test]
    fn delete_by_primary_key() {
        let stmt = StockCommand::Delete(3).build().unwrap();

        assert_eq!(stmt.sql, r#"DELETE FROM "stocks" WHERE "stockid" = $1"#);
        assert_eq!(stmt.values.0, vec![Value::from(3i64)]);
    }
}
