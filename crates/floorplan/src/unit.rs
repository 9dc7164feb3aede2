//! Units, buildings and their identifiers as delivered by the data source.
//!
//! All types here are plain values. The renderer never mutates a [`Unit`]; a
//! status change arrives as a fresh unit list.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, de::IgnoredAny};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(
    /// Identifier of a sellable unit.
    UnitId
);
define_id!(
    /// Identifier of a building.
    BuildingId
);
define_id!(
    /// Identifier of the sales company a booking is made through.
    CompanyId
);

/// Lifecycle status of a unit.
///
/// Unknown status strings deserialize to [`UnitStatus::Other`], which is
/// styled like [`UnitStatus::Available`] but never counted as available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitStatus {
    Available,
    Prebooked,
    Booked,
    Installment,
    Sold,
    #[serde(other)]
    Other,
}

impl UnitStatus {
    /// The statuses the data source is known to produce, in legend order.
    pub const KNOWN: [UnitStatus; 5] = [
        Self::Available,
        Self::Prebooked,
        Self::Booked,
        Self::Installment,
        Self::Sold,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Prebooked => "PREBOOKED",
            Self::Booked => "BOOKED",
            Self::Installment => "INSTALLMENT",
            Self::Sold => "SOLD",
            Self::Other => "OTHER",
        }
    }

    pub fn is_available(self) -> bool {
        self == Self::Available
    }

    /// True for statuses reported in the "booked" statistic.
    pub fn is_reserved(self) -> bool {
        matches!(self, Self::Booked | Self::Prebooked)
    }
}

impl fmt::Display for UnitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitStatus {
    type Err = String;

    /// Parses one of the known status names. Unlike deserialization, this is
    /// strict: it is used for configuration keys where a typo should be reported.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::KNOWN
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown unit status '{s}'"))
    }
}

/// Reads a status without ever failing the unit around it.
///
/// Known names map to their variant. Unknown names, numbers, `null` and any
/// other shape become [`UnitStatus::Other`].
fn lenient_status<'de, D>(deserializer: D) -> Result<UnitStatus, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawStatus {
        Named(UnitStatus),
        Malformed(#[allow(dead_code)] IgnoredAny),
    }

    Ok(match RawStatus::deserialize(deserializer)? {
        RawStatus::Named(status) => status,
        RawStatus::Malformed(_) => UnitStatus::Other,
    })
}

fn missing_status() -> UnitStatus {
    UnitStatus::Other
}

/// One sellable apartment on a floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    id: UnitId,
    building_id: BuildingId,
    floor: i32,
    #[serde(rename = "apartmentNumber")]
    label: String,
    #[serde(default)]
    rooms: u32,
    #[serde(default)]
    area_total: f64,
    #[serde(default)]
    area_living: Option<f64>,
    #[serde(default)]
    area_kitchen: Option<f64>,
    #[serde(default)]
    price_per_sqm: f64,
    #[serde(default)]
    total_price: f64,
    #[serde(default = "missing_status", deserialize_with = "lenient_status")]
    status: UnitStatus,
    #[serde(default)]
    layout_plan_url: Option<String>,
}

impl Unit {
    /// Creates a unit with the required fields; areas and prices start at zero.
    pub fn new(
        id: UnitId,
        building_id: BuildingId,
        floor: i32,
        label: impl Into<String>,
        status: UnitStatus,
    ) -> Self {
        Self {
            id,
            building_id,
            floor,
            label: label.into(),
            rooms: 0,
            area_total: 0.0,
            area_living: None,
            area_kitchen: None,
            price_per_sqm: 0.0,
            total_price: 0.0,
            status,
            layout_plan_url: None,
        }
    }

    pub fn with_rooms(mut self, rooms: u32) -> Self {
        self.rooms = rooms;
        self
    }

    /// Sets total, living and kitchen area in square meters.
    pub fn with_areas(mut self, total: f64, living: Option<f64>, kitchen: Option<f64>) -> Self {
        self.area_total = total;
        self.area_living = living;
        self.area_kitchen = kitchen;
        self
    }

    pub fn with_prices(mut self, total_price: f64, price_per_sqm: f64) -> Self {
        self.total_price = total_price;
        self.price_per_sqm = price_per_sqm;
        self
    }

    pub fn with_layout_plan_url(mut self, url: impl Into<String>) -> Self {
        self.layout_plan_url = Some(url.into());
        self
    }

    pub fn id(&self) -> UnitId {
        self.id
    }

    pub fn building_id(&self) -> BuildingId {
        self.building_id
    }

    pub fn floor(&self) -> i32 {
        self.floor
    }

    /// Human-facing unit number such as `"3-12"`.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn rooms(&self) -> u32 {
        self.rooms
    }

    pub fn area_total(&self) -> f64 {
        self.area_total
    }

    pub fn area_living(&self) -> Option<f64> {
        self.area_living
    }

    pub fn area_kitchen(&self) -> Option<f64> {
        self.area_kitchen
    }

    pub fn price_per_sqm(&self) -> f64 {
        self.price_per_sqm
    }

    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    pub fn status(&self) -> UnitStatus {
        self.status
    }

    pub fn layout_plan_url(&self) -> Option<&str> {
        self.layout_plan_url.as_deref()
    }

    /// Position of the unit along its floor, parsed from the label.
    ///
    /// The key is the leading integer of the segment after the first `-`
    /// (`"3-12"` gives 12, `"3-7b"` gives 7). Labels without such a segment,
    /// or whose segment does not start with a number, sort as 0.
    pub fn sort_key(&self) -> i64 {
        label_suffix(&self.label)
    }
}

fn label_suffix(label: &str) -> i64 {
    let Some(segment) = label.split('-').nth(1) else {
        return 0;
    };
    let segment = segment.trim_start();
    let (negative, digits) = match segment.as_bytes().first() {
        Some(b'-') => (true, &segment[1..]),
        Some(b'+') => (false, &segment[1..]),
        _ => (false, segment),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    match digits[..end].parse::<i64>() {
        Ok(value) if negative => -value,
        Ok(value) => value,
        Err(_) => 0,
    }
}

/// A residential building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    id: BuildingId,
    name: String,
    /// Zero means the data source did not report a floor count.
    #[serde(default)]
    total_floors: u32,
}

impl Building {
    pub fn new(id: BuildingId, name: impl Into<String>, total_floors: u32) -> Self {
        Self {
            id,
            name: name.into(),
            total_floors,
        }
    }

    pub fn id(&self) -> BuildingId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reported floor count, or `None` when unknown.
    pub fn total_floors(&self) -> Option<u32> {
        (self.total_floors > 0).then_some(self.total_floors)
    }
}
