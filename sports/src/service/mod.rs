//! gRPC service implementation for sporting events
//!
//! - parsers: Proto → domain request values
//! - converters: Domain model → Proto conversions

mod converters;
mod parsers;

use std::sync::Arc;

use catalog_proto::sports::sports_server::Sports;
use catalog_proto::sports::{
    GetEventRequest, ListEventsRequest, ListEventsResponse, UpdateScoreRequest,
};
use tonic::{Request, Response, Status};

use crate::persistence::EventRepository;

pub use converters::convert_event_to_proto;
pub use parsers::{parse_event_filter, parse_score_update, parse_sort_order};

/// Implementation of the Sports gRPC service
pub struct SportsServiceImpl<E: EventRepository> {
    events: Arc<E>,
}

impl<E: EventRepository> SportsServiceImpl<E> {
    pub fn new(events: Arc<E>) -> Self {
        Self { events }
    }
}

#[tonic::async_trait]
impl<E: EventRepository + 'static> Sports for SportsServiceImpl<E> {
    async fn list_events(
        &self,
        request: Request<ListEventsRequest>,
    ) -> Result<Response<ListEventsResponse>, Status> {
        let req = request.into_inner();
        tracing::info!(filter = ?req.filter, sort = ?req.sort, "RPC list_events");

        let filter = req.filter.map(parse_event_filter);
        let sort = req.sort.map(parse_sort_order);

        let events = self.events.list(filter.as_ref(), sort.as_ref()).await?;

        Ok(Response::new(ListEventsResponse {
            events: events.into_iter().map(convert_event_to_proto).collect(),
        }))
    }

    async fn get_event(
        &self,
        request: Request<GetEventRequest>,
    ) -> Result<Response<catalog_proto::sports::Event>, Status> {
        let req = request.into_inner();
        tracing::debug!(id = req.id, "RPC get_event");

        let event = self
            .events
            .get(req.id)
            .await?
            .ok_or_else(|| Status::not_found("event not found"))?;

        Ok(Response::new(convert_event_to_proto(event)))
    }

    async fn update_score(
        &self,
        request: Request<UpdateScoreRequest>,
    ) -> Result<Response<catalog_proto::sports::Event>, Status> {
        let req = request.into_inner();
        tracing::info!(
            id = req.id,
            home_score = req.home_score,
            away_score = req.away_score,
            finalised = req.finalised,
            "RPC update_score"
        );

        let (id, update) = parse_score_update(&req);
        let event = self
            .events
            .update_score(id, update)
            .await?
            .ok_or_else(|| Status::not_found("event not found"))?;

        Ok(Response::new(convert_event_to_proto(event)))
    }
}
