//! Parsing functions from protobuf types to domain types

use catalog_proto::{racing, sports};

use crate::catalog::{RaceFilter, SportFilter};

/// Proto3 strings have no presence; treat empty as unset.
fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

pub fn parse_race_filter(filter: racing::ListRacesRequestFilter) -> RaceFilter {
    RaceFilter {
        ids: filter.ids,
        meeting_ids: filter.meeting_ids,
        visible_only: filter.visible_only,
        order_by: non_empty(filter.order_by),
        sort: non_empty(filter.sort),
    }
}

pub fn parse_sport_filter(filter: sports::ListEventsRequestFilter) -> SportFilter {
    SportFilter {
        ids: filter.ids,
        sport: non_empty(filter.sport),
        order_by: non_empty(filter.order_by),
        sort: non_empty(filter.sort),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_strings_become_none() {
        let filter = parse_race_filter(racing::ListRacesRequestFilter::default());
        assert_eq!(filter, RaceFilter::default());
    }

    #[test]
    fn test_parse_race_filter() {
        let filter = parse_race_filter(racing::ListRacesRequestFilter {
            meeting_ids: vec![1, 3],
            visible_only: true,
            order_by: "number".to_string(),
            sort: "desc".to_string(),
            ids: vec![9],
        });
        assert_eq!(filter.meeting_ids, vec![1, 3]);
        assert_eq!(filter.ids, vec![9]);
        assert!(filter.visible_only);
        assert_eq!(filter.order_by.as_deref(), Some("number"));
        assert_eq!(filter.sort.as_deref(), Some("desc"));
    }

    #[test]
    fn test_parse_sport_filter() {
        let filter = parse_sport_filter(sports::ListEventsRequestFilter {
            ids: vec![],
            sport: "afl".to_string(),
            order_by: String::new(),
            sort: "ASC".to_string(),
        });
        assert_eq!(filter.sport.as_deref(), Some("afl"));
        assert!(filter.order_by.is_none());
        assert_eq!(filter.sort.as_deref(), Some("ASC"));
    }
}
