//! Conversion functions from domain types to protobuf types

use catalog_common::clock::to_proto_timestamp;
use catalog_proto::racing::Status as ProtoStatus;

use crate::persistence::{Race, Status};

pub fn convert_status_to_proto(status: Status) -> ProtoStatus {
    match status {
        Status::Open => ProtoStatus::Open,
        Status::Closed => ProtoStatus::Closed,
    }
}

pub fn convert_race_to_proto(race: Race) -> catalog_proto::racing::Race {
    catalog_proto::racing::Race {
        id: race.id,
        meeting_id: race.meeting_id,
        name: race.name,
        number: race.number,
        visible: race.visible,
        advertised_start_time: Some(to_proto_timestamp(race.advertised_start_time)),
        status: convert_status_to_proto(race.status) as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_convert_race() {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let proto = convert_race_to_proto(Race {
            id: 3,
            meeting_id: 5,
            name: "Golden Cup".to_string(),
            number: 4,
            visible: true,
            advertised_start_time: start,
            status: Status::Open,
        });

        assert_eq!(proto.id, 3);
        assert_eq!(proto.meeting_id, 5);
        assert_eq!(proto.name, "Golden Cup");
        assert_eq!(proto.number, 4);
        assert!(proto.visible);
        assert_eq!(proto.advertised_start_time.unwrap().seconds, start.timestamp());
        assert_eq!(proto.status(), ProtoStatus::Open);
    }

    #[test]
    fn test_convert_closed_status() {
        assert_eq!(convert_status_to_proto(Status::Closed), ProtoStatus::Closed);
    }
}
