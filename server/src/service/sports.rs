//! Sport event endpoints

use catalog_proto::sports::sports_server::Sports;
use catalog_proto::sports::{
    GetEventByIdRequest, GetEventByIdResponse, ListEventsRequest, ListEventsResponse,
};
use std::sync::Arc;
use tonic::{Request, Response, Status};

use super::{convert_persistence_error, convert_sport_event_to_proto, parse_sport_filter};
use crate::persistence::SportEventRepository;

/// Implementation of the `sports.Sports` gRPC service
pub struct SportsServiceImpl<S: SportEventRepository> {
    repo: Arc<S>,
}

impl<S: SportEventRepository> SportsServiceImpl<S> {
    pub fn new(repo: Arc<S>) -> Self {
        Self { repo }
    }
}

#[tonic::async_trait]
impl<S: SportEventRepository + 'static> Sports for SportsServiceImpl<S> {
    async fn list_events(
        &self,
        request: Request<ListEventsRequest>,
    ) -> Result<Response<ListEventsResponse>, Status> {
        let filter = request.into_inner().filter.map(parse_sport_filter);
        tracing::info!(filter = ?filter, "RPC list_events");

        let events = self
            .repo
            .list(filter.as_ref())
            .await
            .map_err(convert_persistence_error)?;

        tracing::debug!(count = events.len(), "list_events complete");
        Ok(Response::new(ListEventsResponse {
            events: events.into_iter().map(convert_sport_event_to_proto).collect(),
        }))
    }

    async fn get_event_by_id(
        &self,
        request: Request<GetEventByIdRequest>,
    ) -> Result<Response<GetEventByIdResponse>, Status> {
        let req = request.into_inner();
        tracing::info!(id = req.id, "RPC get_event_by_id");

        let event = self
            .repo
            .get_by_id(req.id)
            .await
            .map_err(convert_persistence_error)?;

        Ok(Response::new(GetEventByIdResponse {
            event: event.map(convert_sport_event_to_proto),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EventStatus, FixedClock, SportEvent};
    use crate::persistence::sqlite::{Database, SeedPlan, SqliteSportEventRepository};
    use catalog_proto::sports::ListEventsRequestFilter;
    use chrono::{Duration, TimeZone, Utc};

    async fn service() -> SportsServiceImpl<SqliteSportEventRepository<FixedClock>> {
        let now = Utc.with_ymd_and_hms(2024, 1, 20, 6, 0, 0).unwrap();
        let events = vec![
            ("Basketball", -60),
            ("soccer", 30),
            ("Soccer", 90),
            ("AFL", 10),
        ]
        .into_iter()
        .zip(1..)
        .map(|((sport, offset), id)| SportEvent {
            id,
            name: format!("Team {id}A VS Team {id}B"),
            advertised_start_time: now + Duration::minutes(offset),
            sport: sport.to_string(),
            current_score: format!("{id}-0"),
            status: EventStatus::Open,
        })
        .collect();
        let db = Database::new_in_memory().await.unwrap();
        let repo = SqliteSportEventRepository::with_clock(
            db.pool().clone(),
            SeedPlan::Records(events),
            FixedClock(now),
        );
        SportsServiceImpl::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_list_events_by_sport_desc() {
        let svc = service().await;
        let resp = svc
            .list_events(Request::new(ListEventsRequest {
                filter: Some(ListEventsRequestFilter {
                    sport: "SOCCER".to_string(),
                    sort: "desc".to_string(),
                    ..Default::default()
                }),
            }))
            .await
            .unwrap()
            .into_inner();

        let ids: Vec<i64> = resp.events.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[tokio::test]
    async fn test_list_events_statuses() {
        let svc = service().await;
        let resp = svc
            .list_events(Request::new(ListEventsRequest { filter: None }))
            .await
            .unwrap()
            .into_inner();

        assert_eq!(resp.events.len(), 4);
        assert_eq!(resp.events[0].id, 1);
        assert_eq!(resp.events[0].status, "CLOSED");
        assert!(resp.events[1..].iter().all(|e| e.status == "OPEN"));
    }

    #[tokio::test]
    async fn test_get_event_by_id() {
        let svc = service().await;
        let event = svc
            .get_event_by_id(Request::new(GetEventByIdRequest { id: 4 }))
            .await
            .unwrap()
            .into_inner()
            .event
            .unwrap();
        assert_eq!(event.sport, "AFL");
        assert_eq!(event.current_score, "4-0");

        let missing = svc
            .get_event_by_id(Request::new(GetEventByIdRequest { id: 9999 }))
            .await
            .unwrap()
            .into_inner();
        assert!(missing.event.is_none());
    }
}
