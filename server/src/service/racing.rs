//! Race endpoints

use catalog_proto::racing::racing_server::Racing;
use catalog_proto::racing::{
    GetRaceByIdRequest, GetRaceByIdResponse, ListRacesRequest, ListRacesResponse,
};
use std::sync::Arc;
use tonic::{Request, Response, Status};

use super::{convert_persistence_error, convert_race_to_proto, parse_race_filter};
use crate::persistence::RaceRepository;

/// Implementation of the `racing.Racing` gRPC service
pub struct RacingServiceImpl<R: RaceRepository> {
    repo: Arc<R>,
}

impl<R: RaceRepository> RacingServiceImpl<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[tonic::async_trait]
impl<R: RaceRepository + 'static> Racing for RacingServiceImpl<R> {
    async fn list_races(
        &self,
        request: Request<ListRacesRequest>,
    ) -> Result<Response<ListRacesResponse>, Status> {
        let filter = request.into_inner().filter.map(parse_race_filter);
        tracing::info!(filter = ?filter, "RPC list_races");

        let races = self
            .repo
            .list(filter.as_ref())
            .await
            .map_err(convert_persistence_error)?;

        tracing::debug!(count = races.len(), "list_races complete");
        Ok(Response::new(ListRacesResponse {
            races: races.into_iter().map(convert_race_to_proto).collect(),
        }))
    }

    async fn get_race_by_id(
        &self,
        request: Request<GetRaceByIdRequest>,
    ) -> Result<Response<GetRaceByIdResponse>, Status> {
        let req = request.into_inner();
        tracing::info!(id = req.id, "RPC get_race_by_id");

        let race = self
            .repo
            .get_by_id(req.id)
            .await
            .map_err(convert_persistence_error)?;

        Ok(Response::new(GetRaceByIdResponse {
            race: race.map(convert_race_to_proto),
        }))
    }
}
