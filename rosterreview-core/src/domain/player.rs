use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Opaque player identifier
///
/// The backend may send it as a JSON string or a JSON number; it is always
/// routed and displayed as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        PlayerId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        PlayerId(id.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        PlayerId(id)
    }
}

impl<'de> Deserialize<'de> for PlayerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(id) => PlayerId(id),
            RawId::Number(id) => PlayerId(id.to_string()),
        })
    }
}

/// A professional football player as returned by the backend
///
/// Read-only copy held for the lifetime of a view. Fields the client does not
/// interpret (positions, seasons, draft picks, ...) are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    id: PlayerId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pfr_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    middle_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    suffix: Option<String>,
    /// Height in inches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    height: Option<u32>,
    /// Weight in pounds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    weight: Option<u32>,
    #[serde(
        default,
        deserialize_with = "deserialize_birth_date",
        skip_serializing_if = "Option::is_none"
    )]
    birth_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    college: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hof_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    age: Option<u32>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// Accepts `"1990-05-01"` as well as `[1990, 5, 1]`.
fn deserialize_birth_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawDate {
        Iso(NaiveDate),
        Parts(i32, u32, u32),
    }

    match Option::<RawDate>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawDate::Iso(date)) => Ok(Some(date)),
        Some(RawDate::Parts(year, month, day)) => NaiveDate::from_ymd_opt(year, month, day)
            .map(Some)
            .ok_or_else(|| {
                de::Error::custom(format!("invalid birth date {year}-{month}-{day}"))
            }),
    }
}

impl Player {
    /// Create a player with nothing but an id (for tests and fixtures)
    pub fn new(id: impl Into<PlayerId>) -> Self {
        Player {
            id: id.into(),
            pfr_id: None,
            nickname: None,
            first_name: None,
            middle_name: None,
            last_name: None,
            suffix: None,
            height: None,
            weight: None,
            birth_date: None,
            college: None,
            hof_year: None,
            age: None,
            extra: Map::new(),
        }
    }

    pub fn with_names(mut self, first_name: &str, last_name: &str) -> Self {
        self.first_name = Some(first_name.to_string());
        self.last_name = Some(last_name.to_string());
        self
    }

    pub fn with_nickname(mut self, nickname: &str) -> Self {
        self.nickname = Some(nickname.to_string());
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    // Getters

    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    pub fn pfr_id(&self) -> Option<&str> {
        self.pfr_id.as_deref()
    }

    pub fn nickname(&self) -> Option<&str> {
        self.nickname.as_deref()
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn middle_name(&self) -> Option<&str> {
        self.middle_name.as_deref()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    pub fn height(&self) -> Option<u32> {
        self.height
    }

    pub fn weight(&self) -> Option<u32> {
        self.weight
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }

    pub fn college(&self) -> Option<&str> {
        self.college.as_deref()
    }

    pub fn hof_year(&self) -> Option<i32> {
        self.hof_year
    }

    /// Backend fields this client does not model
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    // Derived values

    /// Age reported by the backend, or whole years since birth at `date`
    pub fn age_on(&self, date: NaiveDate) -> Option<u32> {
        if self.age.is_some() {
            return self.age;
        }
        date.years_since(self.birth_date?)
    }

    /// Age as of today
    pub fn age(&self) -> Option<u32> {
        self.age_on(chrono::Utc::now().date_naive())
    }

    /// Nickname when set, first name otherwise
    pub fn display_first_name(&self) -> &str {
        self.nickname
            .as_deref()
            .filter(|nickname| !nickname.is_empty())
            .or(self.first_name.as_deref())
            .unwrap_or("")
    }

    pub fn full_name(&self) -> String {
        [
            self.first_name.as_deref(),
            self.middle_name.as_deref(),
            self.last_name.as_deref(),
            self.suffix.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }

    /// Height as `feet-inches`, e.g. `6-2`
    pub fn height_display(&self) -> Option<String> {
        self.height
            .map(|inches| format!("{}-{}", inches / 12, inches % 12))
    }
}
