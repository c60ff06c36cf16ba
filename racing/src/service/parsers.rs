//! Parsing functions from protobuf request values to domain types

use catalog_proto::racing::{ListRacesRequestFilter, ListRacesRequestSortOrder};
use catalog_proto::racing::SortDirection as ProtoSortDirection;

use crate::persistence::{RaceFilter, SortDirection, SortOrder};

pub fn parse_race_filter(filter: ListRacesRequestFilter) -> RaceFilter {
    RaceFilter {
        meeting_ids: filter.meeting_ids,
        visible: filter.visible,
    }
}

/// The attribute is passed through unvalidated; the repository owns the
/// whitelist. Anything other than an explicit `DESC` sorts ascending.
pub fn parse_sort_order(sort: ListRacesRequestSortOrder) -> SortOrder {
    let direction = match sort.sort_direction() {
        ProtoSortDirection::Desc => SortDirection::Desc,
        ProtoSortDirection::Asc => SortDirection::Asc,
    };

    SortOrder {
        attribute: sort.sort_attribute,
        direction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_keeps_unset_visibility() {
        let filter = parse_race_filter(ListRacesRequestFilter {
            meeting_ids: vec![1, 5],
            visible: None,
        });
        assert_eq!(filter.meeting_ids, vec![1, 5]);
        assert_eq!(filter.visible, None);

        let filter = parse_race_filter(ListRacesRequestFilter {
            meeting_ids: vec![],
            visible: Some(false),
        });
        assert_eq!(filter.visible, Some(false));
    }

    #[test]
    fn test_sort_direction_defaults_to_ascending() {
        let sort = parse_sort_order(ListRacesRequestSortOrder {
            sort_attribute: "visible".to_string(),
            sort_direction: 0,
        });
        assert_eq!(sort.direction, SortDirection::Asc);
        assert_eq!(sort.attribute, "visible");

        // Unknown enum values fall back to the default as well.
        let sort = parse_sort_order(ListRacesRequestSortOrder {
            sort_attribute: "visible".to_string(),
            sort_direction: 42,
        });
        assert_eq!(sort.direction, SortDirection::Asc);
    }

    #[test]
    fn test_sort_direction_desc() {
        let sort = parse_sort_order(ListRacesRequestSortOrder {
            sort_attribute: "meeting_id".to_string(),
            sort_direction: ProtoSortDirection::Desc as i32,
        });
        assert_eq!(sort.direction, SortDirection::Desc);
    }
}
