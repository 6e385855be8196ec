//! Assembles normalized predicates into a single parameterized statement.

use sqlx::{QueryBuilder, Sqlite};

use super::filter::Predicate;
use super::{EntitySchema, Normalized};

/// A statement with its binds, ready to `build()` and execute.
pub type SqliteQuery = QueryBuilder<'static, Sqlite>;

fn select(schema: &EntitySchema) -> SqliteQuery {
    QueryBuilder::new(format!(
        "SELECT {} FROM {}",
        schema.columns.join(", "),
        schema.table
    ))
}

/// `SELECT <cols> FROM <table> [WHERE p1 AND p2 …] ORDER BY <field> <dir>`
pub fn build_list(schema: &EntitySchema, normalized: &Normalized) -> SqliteQuery {
    let mut query = select(schema);

    if !normalized.predicates.is_empty() {
        query.push(" WHERE ");
        let mut clauses = query.separated(" AND ");
        for predicate in &normalized.predicates {
            match predicate {
                Predicate::InSet { column, values } => {
                    clauses.push(column).push_unseparated(" IN (");
                    for (i, value) in values.iter().enumerate() {
                        if i > 0 {
                            clauses.push_unseparated(", ");
                        }
                        clauses.push_bind_unseparated(*value);
                    }
                    clauses.push_unseparated(")");
                }
                Predicate::Flag { column, value } => {
                    clauses
                        .push(column)
                        .push_unseparated(" = ")
                        .push_bind_unseparated(*value);
                }
                Predicate::Text { column, value } => {
                    clauses
                        .push(column)
                        .push_unseparated(" = ")
                        .push_bind_unseparated(value.clone());
                }
            }
        }
    }

    query
        .push(" ORDER BY ")
        .push(normalized.ordering.field)
        .push(" ")
        .push(normalized.ordering.direction.as_sql());
    query
}

/// Single-row lookup on the primary key.
pub fn build_by_id(schema: &EntitySchema, id: i64) -> SqliteQuery {
    let mut query = select(schema);
    query.push(" WHERE id = ").push_bind(id);
    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{RaceFilter, SportFilter};
    use crate::query::{normalize_races, normalize_sports, RACES, SPORTS};

    const RACE_SELECT: &str =
        "SELECT id, meeting_id, name, number, visible, advertised_start_time FROM races";

    #[test]
    fn test_no_predicates_has_no_where() {
        let query = build_list(&RACES, &normalize_races(None));
        assert_eq!(
            query.sql(),
            format!("{RACE_SELECT} ORDER BY advertised_start_time ASC")
        );
    }

    #[test]
    fn test_predicates_join_with_and_in_declaration_order() {
        let filter = RaceFilter {
            ids: vec![5, 6],
            meeting_ids: vec![1],
            visible_only: true,
            order_by: Some("number".to_string()),
            sort: Some("DESC".to_string()),
        };
        let query = build_list(&RACES, &normalize_races(Some(&filter)));
        assert_eq!(
            query.sql(),
            format!(
                "{RACE_SELECT} WHERE id IN (?, ?) AND meeting_id IN (?) AND visible = ? \
                 ORDER BY number DESC"
            )
        );
    }

    #[test]
    fn test_one_placeholder_per_bound_value() {
        let filter = SportFilter {
            ids: vec![1, 2, 3],
            sport: Some("Hockey".to_string()),
            ..Default::default()
        };
        let query = build_list(&SPORTS, &normalize_sports(Some(&filter)));
        assert_eq!(query.sql().matches('?').count(), 4);
        assert_eq!(query.sql().matches("ORDER BY").count(), 1);
        assert!(!query.sql().contains("AND ORDER"));
    }

    #[test]
    fn test_filter_values_never_reach_sql_text() {
        let filter = SportFilter {
            sport: Some("Soccer".to_string()),
            order_by: Some("name; DROP TABLE sports".to_string()),
            sort: Some("desc; --".to_string()),
            ..Default::default()
        };
        let query = build_list(&SPORTS, &normalize_sports(Some(&filter)));
        assert!(!query.sql().contains("Soccer"));
        assert!(!query.sql().contains("DROP"));
        assert!(query.sql().ends_with("WHERE sport = ? ORDER BY advertised_start_time ASC"));
    }

    #[test]
    fn test_by_id_statement() {
        let query = build_by_id(&SPORTS, 42);
        assert_eq!(
            query.sql(),
            "SELECT id, name, advertised_start_time, sport, current_score FROM sports WHERE id = ?"
        );
    }
}
