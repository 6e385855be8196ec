//! Conversion functions from domain types to protobuf types

use catalog_proto::{racing, sports};
use chrono::{DateTime, Utc};
use prost_types::Timestamp;
use tonic::Status;

use crate::catalog::{Race, SportEvent};
use crate::persistence::PersistenceError;

/// Convert a UTC instant into a protobuf `Timestamp`.
pub fn convert_timestamp(at: DateTime<Utc>) -> Timestamp {
    Timestamp {
        seconds: at.timestamp(),
        nanos: at.timestamp_subsec_nanos() as i32,
    }
}

pub fn convert_race_to_proto(race: Race) -> racing::Race {
    racing::Race {
        id: race.id,
        meeting_id: race.meeting_id,
        name: race.name,
        number: race.number,
        visible: race.visible,
        advertised_start_time: Some(convert_timestamp(race.advertised_start_time)),
        status: race.status.as_str().to_string(),
    }
}

pub fn convert_sport_event_to_proto(event: SportEvent) -> sports::SportEvent {
    sports::SportEvent {
        id: event.id,
        name: event.name,
        advertised_start_time: Some(convert_timestamp(event.advertised_start_time)),
        sport: event.sport,
        current_score: event.current_score,
        status: event.status.as_str().to_string(),
    }
}

/// Map a persistence failure onto the gRPC status the caller sees.
pub fn convert_persistence_error(err: PersistenceError) -> Status {
    match err {
        PersistenceError::Initialization(msg) => {
            Status::unavailable(format!("catalog not initialized: {msg}"))
        }
        PersistenceError::Mapping(msg) => Status::data_loss(msg),
        PersistenceError::Query(e) => Status::internal(format!("query failed: {e}")),
        PersistenceError::Io(e) => Status::internal(format!("io error: {e}")),
    }
}
