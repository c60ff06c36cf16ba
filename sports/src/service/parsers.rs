//! Parsing functions from protobuf request values to domain types

use catalog_proto::sports::SortDirection as ProtoSortDirection;
use catalog_proto::sports::{ListEventsRequestFilter, ListEventsRequestSortOrder, UpdateScoreRequest};

use crate::persistence::{EventFilter, ScoreUpdate, SortDirection, SortOrder};

pub fn parse_event_filter(filter: ListEventsRequestFilter) -> EventFilter {
    EventFilter {
        score_finalised: filter.score_finalised,
    }
}

pub fn parse_sort_order(sort: ListEventsRequestSortOrder) -> SortOrder {
    let direction = match sort.sort_direction() {
        ProtoSortDirection::Desc => SortDirection::Desc,
        ProtoSortDirection::Asc => SortDirection::Asc,
    };

    SortOrder::new(sort.sort_attribute, direction)
}

pub fn parse_score_update(req: &UpdateScoreRequest) -> (i64, ScoreUpdate) {
    (
        req.id,
        ScoreUpdate {
            home_score: req.home_score,
            away_score: req.away_score,
            finalised: req.finalised,
        },
    )
}
