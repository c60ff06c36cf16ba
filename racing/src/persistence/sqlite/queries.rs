//! SQL text and the sortable-column whitelist for races.

use catalog_common::SortColumn;

pub const RACES_LIST: &str = "
    SELECT
        id,
        meeting_id,
        name,
        number,
        visible,
        advertised_start_time
    FROM races
";

pub const RACE_GET: &str = "
    SELECT
        id,
        meeting_id,
        name,
        number,
        visible,
        advertised_start_time
    FROM races
    WHERE id = ?
";

pub const MEETING_ID: &str = "meeting_id";
pub const VISIBLE: &str = "visible";

/// Columns a race list may be ordered by. Request attributes are the column
/// names themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaceSortColumn {
    Id,
    MeetingId,
    Name,
    Number,
    Visible,
    AdvertisedStartTime,
}

impl SortColumn for RaceSortColumn {
    fn parse(attribute: &str) -> Option<Self> {
        match attribute {
            "id" => Some(Self::Id),
            "meeting_id" => Some(Self::MeetingId),
            "name" => Some(Self::Name),
            "number" => Some(Self::Number),
            "visible" => Some(Self::Visible),
            "advertised_start_time" => Some(Self::AdvertisedStartTime),
            _ => None,
        }
    }

    fn column(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::MeetingId => MEETING_ID,
            Self::Name => "name",
            Self::Number => "number",
            Self::Visible => VISIBLE,
            Self::AdvertisedStartTime => "advertised_start_time",
        }
    }
}
