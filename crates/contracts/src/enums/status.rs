use crate::shared::text::fold_search;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Canonical record status shared by every catalog entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum StatusCode {
    #[default]
    Passive = 0,
    Active = 1,
    Draft = 2,
}

impl StatusCode {
    /// Numeric code used by the upstream API
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Display label (Aktif / Taslak / Pasif)
    pub fn label(&self) -> &'static str {
        match self {
            StatusCode::Active => "Aktif",
            StatusCode::Draft => "Taslak",
            StatusCode::Passive => "Pasif",
        }
    }

    pub fn all() -> [StatusCode; 3] {
        [StatusCode::Active, StatusCode::Draft, StatusCode::Passive]
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(StatusCode::Passive),
            1 => Some(StatusCode::Active),
            2 => Some(StatusCode::Draft),
            _ => None,
        }
    }

    /// Resolves any accepted representation, `None` when it is not recognized.
    ///
    /// Accepts 0/1/2 (numbers or their string forms), booleans and the
    /// Turkish/English labels in any case.
    pub fn from_value_strict(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(true) => Some(StatusCode::Active),
            Value::Bool(false) => Some(StatusCode::Passive),
            Value::Number(n) => match n.as_f64() {
                Some(v) if v == 0.0 => Some(StatusCode::Passive),
                Some(v) if v == 1.0 => Some(StatusCode::Active),
                Some(v) if v == 2.0 => Some(StatusCode::Draft),
                _ => None,
            },
            Value::String(s) => Self::from_label(s),
            _ => None,
        }
    }

    /// Same as [`from_value_strict`](Self::from_value_strict), falling back to
    /// `Passive`. A present but unrecognized value is reported with a warning.
    pub fn from_value(value: &Value) -> Self {
        match Self::from_value_strict(value) {
            Some(status) => status,
            None => {
                if !value.is_null() {
                    log::warn!("unrecognized status value {value}, treating as Pasif");
                }
                StatusCode::Passive
            }
        }
    }

    fn from_label(s: &str) -> Option<Self> {
        match fold_search(s.trim()).as_str() {
            "0" | "pasif" | "inactive" | "passive" => Some(StatusCode::Passive),
            "1" | "aktif" | "active" => Some(StatusCode::Active),
            "2" | "taslak" | "draft" => Some(StatusCode::Draft),
            _ => None,
        }
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl From<&Value> for StatusCode {
    fn from(value: &Value) -> Self {
        StatusCode::from_value(value)
    }
}

impl Serialize for StatusCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for StatusCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(StatusCode::from_value(&value))
    }
}

/// Status filter of the list toolbars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Draft,
    Passive,
    /// Explicit set chosen by the user
    Multiple,
}

impl StatusFilter {
    pub fn options() -> [StatusFilter; 5] {
        [
            StatusFilter::All,
            StatusFilter::Active,
            StatusFilter::Draft,
            StatusFilter::Passive,
            StatusFilter::Multiple,
        ]
    }

    pub fn value(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Draft => "draft",
            StatusFilter::Passive => "passive",
            StatusFilter::Multiple => "multiple",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "Tümü",
            StatusFilter::Active => "Aktif",
            StatusFilter::Draft => "Taslak",
            StatusFilter::Passive => "Pasif",
            StatusFilter::Multiple => "Çoklu seçim",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "active" => StatusFilter::Active,
            "draft" => StatusFilter::Draft,
            "passive" => StatusFilter::Passive,
            "multiple" => StatusFilter::Multiple,
            _ => StatusFilter::All,
        }
    }

    /// Concrete status for the single-status filters
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            StatusFilter::Active => Some(StatusCode::Active),
            StatusFilter::Draft => Some(StatusCode::Draft),
            StatusFilter::Passive => Some(StatusCode::Passive),
            StatusFilter::All | StatusFilter::Multiple => None,
        }
    }

    /// `selected` is only consulted for [`StatusFilter::Multiple`]; an empty
    /// selection accepts nothing.
    pub fn accepts(&self, status: StatusCode, selected: &[StatusCode]) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Multiple => selected.contains(&status),
            single => single.status() == Some(status),
        }
    }
}
