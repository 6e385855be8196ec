//! gRPC service implementations
//!
//! - racing: `racing.Racing` over a [`RaceRepository`](crate::persistence::RaceRepository)
//! - sports: `sports.Sports` over a [`SportEventRepository`](crate::persistence::SportEventRepository)
//! - converters: Domain model → Proto conversions, persistence errors → `Status`
//! - parsers: Proto → Domain model parsing

mod converters;
mod parsers;
mod racing;
mod sports;

pub use converters::{
    convert_persistence_error, convert_race_to_proto, convert_sport_event_to_proto,
};
pub use parsers::{parse_race_filter, parse_sport_filter};
pub use racing::RacingServiceImpl;
pub use sports::SportsServiceImpl;
