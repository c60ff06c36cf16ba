//! gRPC service implementation for the race catalog
//!
//! - parsers: Proto → domain request values
//! - converters: Domain model → Proto conversions
//!
//! The service forwards arguments to the repository unmodified. A missing race
//! becomes `NOT_FOUND`, an invalid sort attribute `INVALID_ARGUMENT`, and any
//! other repository failure `INTERNAL`.

mod converters;
mod parsers;

use std::sync::Arc;

use catalog_proto::racing::racing_server::Racing;
use catalog_proto::racing::{GetRaceRequest, ListRacesRequest, ListRacesResponse};
use tonic::{Request, Response, Status};

use crate::persistence::RaceRepository;

pub use converters::convert_race_to_proto;
pub use parsers::{parse_race_filter, parse_sort_order};

/// Implementation of the Racing gRPC service
pub struct RacingServiceImpl<R: RaceRepository> {
    races: Arc<R>,
}

impl<R: RaceRepository> RacingServiceImpl<R> {
    pub fn new(races: Arc<R>) -> Self {
        Self { races }
    }
}

#[tonic::async_trait]
impl<R: RaceRepository + 'static> Racing for RacingServiceImpl<R> {
    async fn list_races(
        &self,
        request: Request<ListRacesRequest>,
    ) -> Result<Response<ListRacesResponse>, Status> {
        let req = request.into_inner();
        tracing::info!(filter = ?req.filter, sort = ?req.sort, "RPC list_races");

        let filter = req.filter.map(parse_race_filter);
        let sort = req.sort.map(parse_sort_order);

        let races = self.races.list(filter.as_ref(), sort.as_ref()).await?;

        Ok(Response::new(ListRacesResponse {
            races: races.into_iter().map(convert_race_to_proto).collect(),
        }))
    }

    async fn get_race(
        &self,
        request: Request<GetRaceRequest>,
    ) -> Result<Response<catalog_proto::racing::Race>, Status> {
        let req = request.into_inner();
        tracing::debug!(id = req.id, "RPC get_race");

        let race = self
            .races
            .get(req.id)
            .await?
            .ok_or_else(|| Status::not_found("race not found"))?;

        Ok(Response::new(convert_race_to_proto(race)))
    }
}
