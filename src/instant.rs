// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Instant payloads carried through the conversion graph.
//!
//! [`Instant`] is the value type every conversion edge consumes and
//! produces. Each timescale stores its readings in exactly one shape:
//!
//! | Variant | Payload | Carried by |
//! |---------|---------|------------|
//! | [`Instant::Civil`] | [`NaiveDateTime`] | tai, tt, tcg (offset-free scales) |
//! | [`Instant::Zoned`] | [`DateTime<FixedOffset>`] | utc, local |
//! | [`Instant::DayCount`] | [`Days`] | the jd/mjd encodings |
//!
//! The pairing between a scale and its shape is a convention the edge
//! functions rely on, not something the type system enforces: an edge handed
//! the wrong variant panics, which [`Time`](crate::Time) never causes as
//! long as it is constructed with a matching instant/scale pair.

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Utc};
use qtty::Days;

// ═══════════════════════════════════════════════════════════════════════════
// Instant
// ═══════════════════════════════════════════════════════════════════════════

/// A point in time, in one of the three payload shapes the graph moves
/// around. `Copy`, immutable, and comparable within a shape (two `Zoned`
/// values compare by the absolute instant they denote, as `chrono` does).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Instant {
    /// A civil date-time with no offset attached; the scale tag says which
    /// uniform timescale the reading belongs to.
    Civil(NaiveDateTime),
    /// A civil date-time carrying its UTC-or-local offset.
    Zoned(DateTime<FixedOffset>),
    /// A continuous day count (Julian or Modified Julian Date).
    DayCount(Days),
}

impl Instant {
    // ── inspection ────────────────────────────────────────────────────

    /// The civil payload, when this is a [`Instant::Civil`] value.
    #[inline]
    pub fn as_civil(self) -> Option<NaiveDateTime> {
        match self {
            Instant::Civil(datetime) => Some(datetime),
            _ => None,
        }
    }

    /// The offset-carrying payload, when this is a [`Instant::Zoned`] value.
    #[inline]
    pub fn as_zoned(self) -> Option<DateTime<FixedOffset>> {
        match self {
            Instant::Zoned(datetime) => Some(datetime),
            _ => None,
        }
    }

    /// The day-count payload, when this is a [`Instant::DayCount`] value.
    #[inline]
    pub fn as_day_count(self) -> Option<Days> {
        match self {
            Instant::DayCount(days) => Some(days),
            _ => None,
        }
    }

    // ── edge-function extractors ──────────────────────────────────────
    //
    // Edges know the shape of their source scale; any other variant means
    // the caller tagged an instant with the wrong scale, which is a
    // precondition violation rather than a recoverable error.

    pub(crate) fn civil(self) -> NaiveDateTime {
        match self {
            Instant::Civil(datetime) => datetime,
            other => panic!("expected an offset-free civil instant, got {other}"),
        }
    }

    pub(crate) fn zoned(self) -> DateTime<FixedOffset> {
        match self {
            Instant::Zoned(datetime) => datetime,
            other => panic!("expected an offset-tagged instant, got {other}"),
        }
    }

    pub(crate) fn day_count(self) -> Days {
        match self {
            Instant::DayCount(days) => days,
            other => panic!("expected a day-count instant, got {other}"),
        }
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl std::fmt::Display for Instant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Instant::Civil(datetime) => write!(f, "{datetime}"),
            Instant::Zoned(datetime) => write!(f, "{datetime}"),
            // Bare day count, no unit suffix.
            Instant::DayCount(days) => write!(f, "{}", days.value()),
        }
    }
}

// ── From the payload types ────────────────────────────────────────────────

impl From<NaiveDateTime> for Instant {
    #[inline]
    fn from(datetime: NaiveDateTime) -> Self {
        Instant::Civil(datetime)
    }
}

impl From<DateTime<FixedOffset>> for Instant {
    #[inline]
    fn from(datetime: DateTime<FixedOffset>) -> Self {
        Instant::Zoned(datetime)
    }
}

impl From<DateTime<Utc>> for Instant {
    #[inline]
    fn from(datetime: DateTime<Utc>) -> Self {
        Instant::Zoned(datetime.fixed_offset())
    }
}

impl From<DateTime<Local>> for Instant {
    #[inline]
    fn from(datetime: DateTime<Local>) -> Self {
        Instant::Zoned(datetime.fixed_offset())
    }
}

impl From<Days> for Instant {
    #[inline]
    fn from(days: Days) -> Self {
        Instant::DayCount(days)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
