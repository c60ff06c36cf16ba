//! Conversion functions from domain types to protobuf types

use catalog_common::clock::to_proto_timestamp;
use catalog_proto::sports::Status as ProtoStatus;

use crate::persistence::{Event, Status};

pub fn convert_event_to_proto(event: Event) -> catalog_proto::sports::Event {
    let status = match event.status {
        Status::Open => ProtoStatus::Open,
        Status::Closed => ProtoStatus::Closed,
    };

    catalog_proto::sports::Event {
        id: event.id,
        name: event.name,
        competition: event.competition,
        home_team: event.home_team,
        away_team: event.away_team,
        home_score: event.home_score,
        away_score: event.away_score,
        advertised_start_time: Some(to_proto_timestamp(event.advertised_start_time)),
        score_finalised: event.score_finalised,
        status: status as i32,
    }
}
