//! Event kinds.

use std::fmt;
use std::str::FromStr;

use crate::error::DayTallyError;

/// Category of counted event. Each page route increments exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Visit,
    Comment,
    Like,
}

impl EventKind {
    /// Every kind, in page display order.
    pub const ALL: [EventKind; 3] = [EventKind::Visit, EventKind::Comment, EventKind::Like];

    /// Stable discriminator stored in the `kind` column and used as a metric label.
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Visit => "visit",
            EventKind::Comment => "comment",
            EventKind::Like => "like",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = DayTallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "visit" => Ok(EventKind::Visit),
            "comment" => Ok(EventKind::Comment),
            "like" => Ok(EventKind::Like),
            other => Err(DayTallyError::BadRequest(format!("unknown event kind: {other}"))),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn discriminator_round_trips_through_from_str() {
        for kind in EventKind::ALL {
            assert_eq!(kind.as_str().parse::<EventKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_kind_is_bad_request() {
        let err = "share".parse::<EventKind>().unwrap_err();
        assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
    }

    #[test]
    fn display_matches_column_value() {
        assert_eq!(EventKind::Comment.to_string(), "comment");
    }
}
