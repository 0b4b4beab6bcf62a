//! Wire-format temporal codec
//!
//! Every timestamp field in the projected documents travels as a string of
//! the fixed pattern `yyyy-MM-dd HH:mm:ss`, interpreted at a fixed UTC+8
//! offset. No field carries its own time zone. Date-only fields (certificate
//! effective dates, birth dates) use the same pattern with a zero
//! time-of-day.
//!
//! The codec is shared by every temporal field rather than duplicated per
//! field, so the format invariant holds uniformly: `decode(encode(t)) == t`
//! for every representable `t`.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::FormatError;

/// strftime form of the wire pattern.
pub const WIRE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Human-readable name of the wire pattern, used in error messages.
pub const WIRE_PATTERN_NAME: &str = "yyyy-MM-dd HH:mm:ss";

const WIRE_OFFSET_SECONDS: i32 = 8 * 3600;

/// The fixed UTC+8 offset every document timestamp is interpreted in.
pub fn wire_offset() -> FixedOffset {
    FixedOffset::east_opt(WIRE_OFFSET_SECONDS).expect("static offset is in range")
}

fn parse_wire(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, WIRE_FORMAT).ok()
}

/// Encodes a date-time value as the wire pattern at UTC+8.
///
/// Values carrying a different offset are normalized to UTC+8 first; the
/// instant is unchanged.
pub fn encode_datetime(t: DateTime<FixedOffset>) -> String {
    t.with_timezone(&wire_offset()).format(WIRE_FORMAT).to_string()
}

/// Decodes a wire-pattern string back to a date-time at UTC+8.
///
/// `field` is the dotted path of the field being decoded and is carried in
/// the error when `raw` is malformed or out of range.
pub fn decode_datetime(field: &str, raw: &str) -> Result<DateTime<FixedOffset>, FormatError> {
    let naive = parse_wire(raw).ok_or_else(|| FormatError::new(field, raw))?;
    wire_offset()
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| FormatError::new(field, raw))
}

/// Encodes a calendar day as the wire pattern with a zero time-of-day.
pub fn encode_date(d: NaiveDate) -> String {
    format!("{} 00:00:00", d.format("%Y-%m-%d"))
}

/// Decodes a wire-pattern string to a calendar day.
///
/// The time-of-day portion is required by the pattern but discarded, so a
/// day round-trips with no offset drift.
pub fn decode_date(field: &str, raw: &str) -> Result<NaiveDate, FormatError> {
    parse_wire(raw)
        .map(|naive| naive.date())
        .ok_or_else(|| FormatError::new(field, raw))
}

/// A document timestamp carried at the fixed UTC+8 offset.
///
/// Wraps `DateTime<FixedOffset>` with the wire-pattern serialization.
/// Equality compares instants, so decoding the encoding of a value with any
/// source offset yields an equal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WireDateTime(DateTime<FixedOffset>);

impl WireDateTime {
    /// Wraps a date-time, normalizing it to the UTC+8 wire offset.
    pub fn new(t: DateTime<FixedOffset>) -> Self {
        Self(t.with_timezone(&wire_offset()))
    }

    /// Converts a UTC instant to the wire offset.
    pub fn from_utc(t: DateTime<Utc>) -> Self {
        Self(t.with_timezone(&wire_offset()))
    }

    /// Builds a wire timestamp from local (UTC+8) calendar parts.
    ///
    /// Returns `None` for out-of-range parts.
    pub fn from_wire_parts(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Option<Self> {
        wire_offset()
            .with_ymd_and_hms(y, mo, d, h, mi, s)
            .single()
            .map(Self)
    }

    /// Returns the underlying date-time at the wire offset.
    pub fn inner(&self) -> DateTime<FixedOffset> {
        self.0
    }

    /// Encodes this value as the wire pattern.
    pub fn encode(&self) -> String {
        encode_datetime(self.0)
    }

    /// Decodes a wire-pattern string, naming `field` on failure.
    pub fn decode(field: &str, raw: &str) -> Result<Self, FormatError> {
        decode_datetime(field, raw).map(Self)
    }
}

impl From<DateTime<FixedOffset>> for WireDateTime {
    fn from(t: DateTime<FixedOffset>) -> Self {
        Self::new(t)
    }
}

impl From<DateTime<Utc>> for WireDateTime {
    fn from(t: DateTime<Utc>) -> Self {
        Self::from_utc(t)
    }
}

impl fmt::Display for WireDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl Serialize for WireDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for WireDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        decode_datetime("<datetime>", &raw).map(Self).map_err(|_| {
            serde::de::Error::custom(format!(
                "malformed temporal value \"{}\": expected {}",
                raw, WIRE_PATTERN_NAME
            ))
        })
    }
}

/// A calendar-day field serialized through the shared wire pattern.
///
/// Date-only values keep day precision internally but travel as
/// `yyyy-MM-dd 00:00:00`; encoding then decoding yields the same day with no
/// timezone drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WireDate(NaiveDate);

impl WireDate {
    pub fn new(d: NaiveDate) -> Self {
        Self(d)
    }

    /// Builds a wire date from calendar parts, `None` if out of range.
    pub fn from_ymd(y: i32, mo: u32, d: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(y, mo, d).map(Self)
    }

    pub fn inner(&self) -> NaiveDate {
        self.0
    }

    pub fn encode(&self) -> String {
        encode_date(self.0)
    }

    pub fn decode(field: &str, raw: &str) -> Result<Self, FormatError> {
        decode_date(field, raw).map(Self)
    }
}

impl From<NaiveDate> for WireDate {
    fn from(d: NaiveDate) -> Self {
        Self(d)
    }
}

impl fmt::Display for WireDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl Serialize for WireDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for WireDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        decode_date("<date>", &raw).map(Self).map_err(|_| {
            serde::de::Error::custom(format!(
                "malformed temporal value \"{}\": expected {}",
                raw, WIRE_PATTERN_NAME
            ))
        })
    }
}
