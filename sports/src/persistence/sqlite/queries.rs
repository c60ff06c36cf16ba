//! SQL text and the sortable-column whitelist for events.

use catalog_common::SortColumn;

/// Denormalized read of an event with its sport, competition and team names.
pub const EVENTS_LIST: &str = "
    SELECT
        e.id,
        s.name,
        c.name,
        ht.name,
        at.name,
        e.home_score,
        e.away_score,
        e.advertised_start_time,
        e.score_finalised
    FROM events e
    LEFT JOIN sports s ON e.sport_id = s.id
    LEFT JOIN competitions c ON e.competition_id = c.id
    LEFT JOIN teams ht ON e.home_team_id = ht.id
    LEFT JOIN teams at ON e.away_team_id = at.id
";

pub const EVENT_GET_BY_ID: &str = " WHERE e.id = ?";

/// Only unfinalised events match, so a finalised score is never rewritten.
pub const EVENT_UPDATE_SCORE: &str = "
    UPDATE events
    SET home_score = ?, away_score = ?, score_finalised = ?
    WHERE id = ? AND score_finalised = FALSE
";

pub const SCORE_FINALISED: &str = "e.score_finalised";

/// Columns an event list may be ordered by, keyed by the field names of the
/// `Event` message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSortColumn {
    Id,
    Name,
    Competition,
    HomeTeam,
    AwayTeam,
    HomeScore,
    AwayScore,
    AdvertisedStartTime,
    ScoreFinalised,
}

impl SortColumn for EventSortColumn {
    fn parse(attribute: &str) -> Option<Self> {
        match attribute {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "competition" => Some(Self::Competition),
            "home_team" => Some(Self::HomeTeam),
            "away_team" => Some(Self::AwayTeam),
            "home_score" => Some(Self::HomeScore),
            "away_score" => Some(Self::AwayScore),
            "advertised_start_time" => Some(Self::AdvertisedStartTime),
            "score_finalised" => Some(Self::ScoreFinalised),
            _ => None,
        }
    }

    fn column(self) -> &'static str {
        match self {
            Self::Id => "e.id",
            Self::Name => "s.name",
            Self::Competition => "c.name",
            Self::HomeTeam => "ht.name",
            Self::AwayTeam => "at.name",
            Self::HomeScore => "e.home_score",
            Self::AwayScore => "e.away_score",
            Self::AdvertisedStartTime => "e.advertised_start_time",
            Self::ScoreFinalised => SCORE_FINALISED,
        }
    }
}
