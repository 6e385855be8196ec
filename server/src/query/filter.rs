//! Filter normalization: allow-list gating for ORDER BY and predicate
//! construction from structured filters.

use super::{EntitySchema, RACES, SPORTS};
use crate::catalog::{RaceFilter, SportFilter, KNOWN_SPORTS};

/// One condition of a listing's `WHERE` clause. Columns are static schema
/// names; values are bound, never rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// `<column> IN (…)` with one bind per value. Never empty.
    InSet {
        column: &'static str,
        values: Vec<i64>,
    },
    /// `<column> = <bool>`
    Flag { column: &'static str, value: bool },
    /// `<column> = <text>`
    Text { column: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// A validated ORDER BY target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ordering {
    pub field: &'static str,
    pub direction: SortDirection,
}

/// Everything the builder needs besides the entity schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub predicates: Vec<Predicate>,
    pub ordering: Ordering,
}

/// Return the allow-listed column matching `requested` exactly, or the
/// entity's default order column.
///
/// The returned token always comes from the static schema, never from the
/// caller's string.
pub fn resolve_order_by(schema: &EntitySchema, requested: Option<&str>) -> &'static str {
    let sortable: &'static [&'static str] = schema.sortable;
    requested
        .and_then(|field| sortable.iter().find(|allowed| **allowed == field))
        .copied()
        .unwrap_or(schema.default_order)
}

/// `DESC` only for a case-insensitive "desc"; anything else sorts ascending.
pub fn resolve_direction(requested: Option<&str>) -> SortDirection {
    match requested {
        Some(sort) if sort.eq_ignore_ascii_case("desc") => SortDirection::Desc,
        _ => SortDirection::Asc,
    }
}

/// Set membership on `column`. `None` for an empty set.
fn in_set(column: &'static str, ids: &[i64]) -> Option<Predicate> {
    if ids.is_empty() {
        return None;
    }
    Some(Predicate::InSet {
        column,
        values: ids.to_vec(),
    })
}

fn is_known_sport(name: &str) -> bool {
    KNOWN_SPORTS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(name))
}

/// Predicates and ordering for a race listing.
pub fn normalize_races(filter: Option<&RaceFilter>) -> Normalized {
    let Some(filter) = filter else {
        return Normalized::unfiltered(&RACES);
    };

    let mut predicates = Vec::new();
    predicates.extend(in_set("id", &filter.ids));
    predicates.extend(in_set("meeting_id", &filter.meeting_ids));
    if filter.visible_only {
        predicates.push(Predicate::Flag {
            column: "visible",
            value: true,
        });
    }

    Normalized {
        predicates,
        ordering: Ordering {
            field: resolve_order_by(&RACES, filter.order_by.as_deref()),
            direction: resolve_direction(filter.sort.as_deref()),
        },
    }
}

/// Predicates and ordering for a sport event listing.
///
/// A sport name outside [`KNOWN_SPORTS`] is ignored rather than rejected.
pub fn normalize_sports(filter: Option<&SportFilter>) -> Normalized {
    let Some(filter) = filter else {
        return Normalized::unfiltered(&SPORTS);
    };

    let mut predicates = Vec::new();
    predicates.extend(in_set("id", &filter.ids));
    if let Some(sport) = filter.sport.as_deref().filter(|s| is_known_sport(s)) {
        // The sport column is NOCASE, so the caller's casing is bound as-is.
        predicates.push(Predicate::Text {
            column: "sport",
            value: sport.to_string(),
        });
    }

    Normalized {
        predicates,
        ordering: Ordering {
            field: resolve_order_by(&SPORTS, filter.order_by.as_deref()),
            direction: resolve_direction(filter.sort.as_deref()),
        },
    }
}

impl Normalized {
    fn unfiltered(schema: &EntitySchema) -> Self {
        Self {
            predicates: Vec::new(),
            ordering: Ordering {
                field: schema.default_order,
                direction: SortDirection::Asc,
            },
        }
    }
}
