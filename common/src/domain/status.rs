use serde::{Deserialize, Serialize};

/// A numeric status code outside the closed set of its content type.
///
/// Each content type owns an independent enumeration; the same code can mean
/// different things for an article and a show, so there is no shared decode.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidStatus {
    pub kind: &'static str,
    pub code: f64,
}

impl std::fmt::Display for InvalidStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {} status code {}", self.kind, self.code)
    }
}

impl std::error::Error for InvalidStatus {}

// ---------------------------------------------------------------------------
// Article
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(into = "i16", try_from = "i16")]
#[repr(i16)]
pub enum ArticleStatus {
    Draft = -2,
    Pending = -1,
    Published = 2,
}

impl ArticleStatus {
    pub fn code(self) -> i16 {
        self as i16
    }

    /// True when the change moves the item out of the approval queue into
    /// publication; that crossing re-stamps the item's date.
    pub fn crosses_publication(from: Self, to: Self) -> bool {
        from == Self::Pending && to == Self::Published
    }
}

impl From<ArticleStatus> for i16 {
    fn from(value: ArticleStatus) -> Self {
        value.code()
    }
}

impl TryFrom<i16> for ArticleStatus {
    type Error = InvalidStatus;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        match code {
            -2 => Ok(Self::Draft),
            -1 => Ok(Self::Pending),
            2 => Ok(Self::Published),
            other => Err(InvalidStatus { kind: "article", code: other as f64 }),
        }
    }
}

// ---------------------------------------------------------------------------
// Video
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(into = "i16", try_from = "i16")]
#[repr(i16)]
pub enum VideoStatus {
    Draft = -2,
    Pending = -1,
    Published = 2,
}

impl VideoStatus {
    pub fn code(self) -> i16 {
        self as i16
    }

    pub fn crosses_publication(from: Self, to: Self) -> bool {
        from == Self::Pending && to == Self::Published
    }
}

impl From<VideoStatus> for i16 {
    fn from(value: VideoStatus) -> Self {
        value.code()
    }
}

impl TryFrom<i16> for VideoStatus {
    type Error = InvalidStatus;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        match code {
            -2 => Ok(Self::Draft),
            -1 => Ok(Self::Pending),
            2 => Ok(Self::Published),
            other => Err(InvalidStatus { kind: "video", code: other as f64 }),
        }
    }
}

// ---------------------------------------------------------------------------
// Webradio show
// ---------------------------------------------------------------------------

/// Whether a broadcasting stage runs on the primary stream or a restream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamVariant {
    Primary,
    Restream,
}

/// Show lifecycle as a stage + stream-variant pair.
///
/// The stored representation stays the historical numeric code (the half
/// steps are the restream variants), but in the program the state space is
/// exhaustive: there is no way to hold a code like 1.5 that the sparse
/// numeric encoding would admit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
pub enum ShowStatus {
    Draft(StreamVariant),
    Waiting(StreamVariant),
    Live(StreamVariant),
    WaitingPodcast,
    Published,
}

/// Codes of every status counted as "currently occupying the antenna",
/// matching the current-show lookup set.
pub const LIVE_FAMILY_CODES: [f64; 4] = [-1.0, -1.5, 0.0, 0.5];

impl ShowStatus {
    pub fn code(self) -> f64 {
        use StreamVariant::*;
        match self {
            Self::Draft(Primary) => -2.0,
            Self::Draft(Restream) => -2.5,
            Self::Waiting(Primary) => -1.0,
            Self::Waiting(Restream) => -1.5,
            Self::Live(Primary) => 0.0,
            Self::Live(Restream) => 0.5,
            Self::WaitingPodcast => 1.0,
            Self::Published => 2.0,
        }
    }

    /// Waiting or Live, either variant: the statuses the mutual-exclusion
    /// rule and the current-show lookup cover.
    pub fn is_live_family(self) -> bool {
        matches!(self, Self::Waiting(_) | Self::Live(_))
    }

    /// Actively broadcasting right now.
    pub fn is_live(self) -> bool {
        matches!(self, Self::Live(_))
    }

    /// A show cannot go on air without a stream source configured.
    pub fn requires_stream(self) -> bool {
        self.is_live()
    }
}

impl From<ShowStatus> for f64 {
    fn from(value: ShowStatus) -> Self {
        value.code()
    }
}

impl TryFrom<f64> for ShowStatus {
    type Error = InvalidStatus;

    fn try_from(code: f64) -> Result<Self, Self::Error> {
        use StreamVariant::*;
        if code == -2.0 {
            Ok(Self::Draft(Primary))
        } else if code == -2.5 {
            Ok(Self::Draft(Restream))
        } else if code == -1.0 {
            Ok(Self::Waiting(Primary))
        } else if code == -1.5 {
            Ok(Self::Waiting(Restream))
        } else if code == 0.0 {
            Ok(Self::Live(Primary))
        } else if code == 0.5 {
            Ok(Self::Live(Restream))
        } else if code == 1.0 {
            Ok(Self::WaitingPodcast)
        } else if code == 2.0 {
            Ok(Self::Published)
        } else {
            Err(InvalidStatus { kind: "show", code })
        }
    }
}

impl sqlx::Type<sqlx::Postgres> for ShowStatus {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <f64 as sqlx::Type<sqlx::Postgres>>::type_info()
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Postgres> for ShowStatus {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let code = <f64 as sqlx::Decode<'r, sqlx::Postgres>>::decode(value)?;
        Ok(Self::try_from(code)?)
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Postgres> for ShowStatus {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <f64 as sqlx::Encode<'q, sqlx::Postgres>>::encode_by_ref(&self.code(), buf)
    }
}

// ---------------------------------------------------------------------------
// Authorization
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(into = "i16", try_from = "i16")]
#[repr(i16)]
pub enum AuthorizationStatus {
    Draft = -2,
    Submitted = -1,
    Rejected = 1,
    Approved = 2,
}

impl AuthorizationStatus {
    pub fn code(self) -> i16 {
        self as i16
    }

    /// Not yet answered by a manager. Negative codes are open.
    pub fn is_open(self) -> bool {
        self.code() < 0
    }

    pub fn is_decision(self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}

impl From<AuthorizationStatus> for i16 {
    fn from(value: AuthorizationStatus) -> Self {
        value.code()
    }
}

impl TryFrom<i16> for AuthorizationStatus {
    type Error = InvalidStatus;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        match code {
            -2 => Ok(Self::Draft),
            -1 => Ok(Self::Submitted),
            1 => Ok(Self::Rejected),
            2 => Ok(Self::Approved),
            other => Err(InvalidStatus { kind: "authorization", code: other as f64 }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use StreamVariant::*;

    #[test]
    fn article_codes_round_trip() {
        for status in [ArticleStatus::Draft, ArticleStatus::Pending, ArticleStatus::Published] {
            assert_eq!(ArticleStatus::try_from(status.code()), Ok(status));
        }
    }

    #[test]
    fn article_rejects_foreign_codes() {
        // 0 and 1 are valid show codes but mean nothing for an article
        assert!(ArticleStatus::try_from(0).is_err());
        assert!(ArticleStatus::try_from(1).is_err());
        assert!(ArticleStatus::try_from(3).is_err());
    }

    #[test]
    fn show_codes_round_trip() {
        let all = [
            ShowStatus::Draft(Primary),
            ShowStatus::Draft(Restream),
            ShowStatus::Waiting(Primary),
            ShowStatus::Waiting(Restream),
            ShowStatus::Live(Primary),
            ShowStatus::Live(Restream),
            ShowStatus::WaitingPodcast,
            ShowStatus::Published,
        ];
        for status in all {
            assert_eq!(ShowStatus::try_from(status.code()), Ok(status));
        }
    }

    #[test]
    fn show_rejects_codes_between_states() {
        assert!(ShowStatus::try_from(1.5).is_err());
        assert!(ShowStatus::try_from(0.25).is_err());
        assert!(ShowStatus::try_from(-3.0).is_err());
        assert!(ShowStatus::try_from(2.5).is_err());
    }

    #[test]
    fn live_family_matches_current_show_lookup() {
        let family: Vec<f64> = [
            ShowStatus::Waiting(Primary),
            ShowStatus::Waiting(Restream),
            ShowStatus::Live(Primary),
            ShowStatus::Live(Restream),
        ]
        .iter()
        .map(|s| s.code())
        .collect();
        assert_eq!(family, LIVE_FAMILY_CODES.to_vec());

        assert!(!ShowStatus::Draft(Primary).is_live_family());
        assert!(!ShowStatus::WaitingPodcast.is_live_family());
        assert!(!ShowStatus::Published.is_live_family());
    }

    #[test]
    fn only_live_stages_require_a_stream() {
        assert!(ShowStatus::Live(Primary).requires_stream());
        assert!(ShowStatus::Live(Restream).requires_stream());
        assert!(!ShowStatus::Waiting(Primary).requires_stream());
        assert!(!ShowStatus::Published.requires_stream());
    }

    #[test]
    fn publication_crossing() {
        assert!(ArticleStatus::crosses_publication(
            ArticleStatus::Pending,
            ArticleStatus::Published
        ));
        assert!(!ArticleStatus::crosses_publication(
            ArticleStatus::Draft,
            ArticleStatus::Published
        ));
        assert!(!ArticleStatus::crosses_publication(
            ArticleStatus::Published,
            ArticleStatus::Published
        ));
    }

    #[test]
    fn open_authorizations_are_negative() {
        assert!(AuthorizationStatus::Draft.is_open());
        assert!(AuthorizationStatus::Submitted.is_open());
        assert!(!AuthorizationStatus::Rejected.is_open());
        assert!(!AuthorizationStatus::Approved.is_open());
    }
}
