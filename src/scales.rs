// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Timescale identifiers and the conversion edges between them.
//!
//! This module owns everything the graph engine is generic over: the
//! [`Scale`] identifiers, the edge functions with their constants and
//! leap-second table, and [`standard_graph`], which wires them together.
//!
//! # Registered edges
//!
//! | Edge | Conversion |
//! |------|------------|
//! | local ↔ utc | reinterpret through the host time zone |
//! | utc ↔ tai | 10 s base + one second per tabulated leap epoch |
//! | tai ↔ tt | fixed 32.184 s |
//! | tt → tcg | secular rate term `L_G` since 1977-01-01 TAI |
//! | {tai,tt,tcg} ↔ jd{scale} | civil ↔ Julian Date about J2000 |
//! | jd{scale} ↔ mjd{scale} | fixed 2 400 000.5 day offset |
//!
//! `tcg` has no edge back to `tt`, and the `tdb` family has no edges at
//! all — converting to them reports the missing route instead of guessing
//! at a formula.
//!
//! Sources: leap epochs from IERS Bulletin C (through the 2016-12-31
//! insertion); TT − TAI and `L_G` from IAU resolutions (1991 A4, 2000
//! B1.9); the TCG rate term is Eq. 3.27 of the *Explanatory Supplement to
//! the Astronomical Almanac*, 3rd ed.

use super::graph::ConversionGraph;
use super::instant::Instant;
use chrono::{Duration, Local, NaiveDate, NaiveDateTime, Utc};
use qtty::Days;

// ═══════════════════════════════════════════════════════════════════════════
// Scale
// ═══════════════════════════════════════════════════════════════════════════

/// Identifier of a timescale or day-count encoding.
///
/// Scales compare by identity and display as their lowercase names. The
/// `tdb` family is listed so requests for it can be expressed; no standard
/// edge reaches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    /// Host-zone civil time.
    Local,
    /// Coordinated Universal Time.
    Utc,
    /// International Atomic Time.
    Tai,
    /// Terrestrial Time, TAI + 32.184 s.
    Tt,
    /// Geocentric Coordinate Time.
    Tcg,
    /// Julian Date on the TAI axis.
    JdTai,
    /// Modified Julian Date on the TAI axis.
    MjdTai,
    /// Julian Date on the TT axis.
    JdTt,
    /// Modified Julian Date on the TT axis.
    MjdTt,
    /// Julian Date on the TCG axis.
    JdTcg,
    /// Modified Julian Date on the TCG axis.
    MjdTcg,
    /// Barycentric Dynamical Time — intentionally unreachable.
    Tdb,
    /// Julian Date on the TDB axis — intentionally unreachable.
    JdTdb,
    /// Modified Julian Date on the TDB axis — intentionally unreachable.
    MjdTdb,
}

impl Scale {
    /// Lowercase identifier, as printed by `Display` and the diagnostic CLI.
    pub const fn label(self) -> &'static str {
        match self {
            Scale::Local => "local",
            Scale::Utc => "utc",
            Scale::Tai => "tai",
            Scale::Tt => "tt",
            Scale::Tcg => "tcg",
            Scale::JdTai => "jdtai",
            Scale::MjdTai => "mjdtai",
            Scale::JdTt => "jdtt",
            Scale::MjdTt => "mjdtt",
            Scale::JdTcg => "jdtcg",
            Scale::MjdTcg => "mjdtcg",
            Scale::Tdb => "tdb",
            Scale::JdTdb => "jdtdb",
            Scale::MjdTdb => "mjdtdb",
        }
    }
}

impl std::fmt::Display for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The conversion graph instantiated for the timescale domain.
pub type TimescaleGraph = ConversionGraph<Scale, Instant>;

// ═══════════════════════════════════════════════════════════════════════════
// Constants and tables
// ═══════════════════════════════════════════════════════════════════════════

/// JD 2 451 545.0 ≡ 2000-01-01T12:00:00 in the scale of the operand.
const J2000_JD: f64 = 2_451_545.0;

/// The constant offset between the two day counts: `JD = MJD + MJD_EPOCH`.
const MJD_EPOCH: Days = Days::new(2_400_000.5);

/// d(TCG)/d(TT) − 1, the IAU 2000 Resolution B1.9 defining constant.
const L_G: f64 = 6.969_290_134e-10;

/// JD(TAI) of 1977 January 1.0, where TT and TCG read identically.
const TCG_EPOCH_JD_TAI: f64 = 2_443_144.5;

/// UTC dates whose final labelled second (23:59:59) was followed by an
/// inserted leap second. Ascending; IERS Bulletin C, 1972 through 2016.
const LEAP_SECOND_EPOCHS: [(i32, u32, u32); 27] = [
    (1972, 6, 30),
    (1972, 12, 31),
    (1973, 12, 31),
    (1974, 12, 31),
    (1975, 12, 31),
    (1976, 12, 31),
    (1977, 12, 31),
    (1978, 12, 31),
    (1979, 12, 31),
    (1981, 6, 30),
    (1982, 6, 30),
    (1983, 6, 30),
    (1985, 6, 30),
    (1987, 12, 31),
    (1989, 12, 31),
    (1990, 12, 31),
    (1992, 6, 30),
    (1993, 6, 30),
    (1994, 6, 30),
    (1995, 12, 31),
    (1997, 6, 30),
    (1998, 12, 31),
    (2005, 12, 31),
    (2008, 12, 31),
    (2012, 6, 30),
    (2015, 6, 30),
    (2016, 12, 31),
];

/// The tabulated leap epochs as civil date-times, in ascending order.
fn leap_epochs() -> impl Iterator<Item = NaiveDateTime> {
    LEAP_SECOND_EPOCHS.iter().map(|&(year, month, day)| {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(23, 59, 59))
            .expect("leap-second table entries are valid calendar dates")
    })
}

/// TT − TAI, exactly 32.184 s by definition (IAU 1991 Recommendation A4).
fn tt_minus_tai() -> Duration {
    Duration::milliseconds(32_184)
}

fn j2000() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2000, 1, 1)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .expect("the J2000 epoch is a valid calendar date")
}

// ═══════════════════════════════════════════════════════════════════════════
// Edge functions
// ═══════════════════════════════════════════════════════════════════════════

// ── local ↔ utc ───────────────────────────────────────────────────────────

fn local_to_utc(value: Instant) -> Instant {
    value.zoned().with_timezone(&Utc).into()
}

fn utc_to_local(value: Instant) -> Instant {
    value.zoned().with_timezone(&Local).into()
}

// ── utc ↔ tai ─────────────────────────────────────────────────────────────

/// TAI = UTC + 10 s + one second per leap epoch strictly before the
/// instant. The table is ascending, so the scan stops at the first epoch
/// that is not in the past.
fn utc_to_tai(value: Instant) -> Instant {
    let datetime = value.zoned().naive_local();
    let mut leaps: i64 = 0;
    for epoch in leap_epochs() {
        if epoch < datetime {
            leaps += 1;
        } else {
            break;
        }
    }
    Instant::Civil(datetime + Duration::seconds(10 + leaps))
}

/// Walks the leap table from the oldest epoch, paying back one second per
/// epoch the candidate still clears, then removes the 10 s base offset.
fn tai_to_utc(value: Instant) -> Instant {
    let mut datetime = value.civil();
    let second = Duration::seconds(1);
    for epoch in leap_epochs() {
        if datetime - second > epoch {
            datetime = datetime - second;
        } else {
            break;
        }
    }
    Instant::Zoned((datetime - Duration::seconds(10)).and_utc().fixed_offset())
}

// ── tai ↔ tt ──────────────────────────────────────────────────────────────

fn tai_to_tt(value: Instant) -> Instant {
    Instant::Civil(value.civil() + tt_minus_tai())
}

fn tt_to_tai(value: Instant) -> Instant {
    Instant::Civil(value.civil() - tt_minus_tai())
}

// ── tt → tcg ──────────────────────────────────────────────────────────────

/// TCG = TT + L_G × (JD_TAI − 1977 Jan 1.0 TAI) × 86 400 s, applied at
/// microsecond resolution (Explanatory Supplement, 3rd ed., Eq. 3.27).
///
/// The reverse direction is deliberately not provided; from TCG only its
/// own day-count encodings are reachable.
fn tt_to_tcg(value: Instant) -> Instant {
    let datetime = value.civil();
    let jd_tai = datetime_to_julian(datetime - tt_minus_tai());
    let seconds = L_G * (jd_tai.value() - TCG_EPOCH_JD_TAI) * 86_400.0;
    Instant::Civil(datetime + Duration::microseconds((seconds * 1e6).round() as i64))
}

// ── civil ↔ julian, shared by the tai/tt/tcg chains ───────────────────────

fn civil_to_julian(value: Instant) -> Instant {
    Instant::DayCount(datetime_to_julian(value.civil()))
}

fn julian_to_civil(value: Instant) -> Instant {
    let days = value.day_count().value() - J2000_JD;
    let microseconds = (days * 86_400.0 * 1e6).round() as i64;
    Instant::Civil(j2000() + Duration::microseconds(microseconds))
}

/// Julian Date of a civil reading, as elapsed days about the J2000 noon
/// epoch. Whole days, seconds, and sub-second parts are accumulated
/// separately to keep the fraction exact at chrono's resolution.
fn datetime_to_julian(datetime: NaiveDateTime) -> Days {
    let elapsed = datetime - j2000();
    let days = elapsed.num_days();
    let remainder = elapsed - Duration::days(days);
    Days::new(
        J2000_JD
            + days as f64
            + remainder.num_seconds() as f64 / 86_400.0
            + remainder.subsec_nanos() as f64 / (86_400.0 * 1e9),
    )
}

// ── jd ↔ mjd ──────────────────────────────────────────────────────────────

fn julian_to_modified(value: Instant) -> Instant {
    Instant::DayCount(value.day_count() - MJD_EPOCH)
}

fn modified_to_julian(value: Instant) -> Instant {
    Instant::DayCount(value.day_count() + MJD_EPOCH)
}

// ═══════════════════════════════════════════════════════════════════════════
// Graph assembly
// ═══════════════════════════════════════════════════════════════════════════

/// Build the conversion graph for the full timescale domain.
///
/// Call it once at startup and lend the value to every
/// [`Time`](crate::Time) built from it. The registration order below is
/// part of the behavior: when two routes have equal length, path search
/// prefers the edges registered earlier.
pub fn standard_graph() -> TimescaleGraph {
    let mut graph = ConversionGraph::new();
    graph.register(Scale::Local, Scale::Utc, local_to_utc);
    graph.register(Scale::Utc, Scale::Local, utc_to_local);
    graph.register(Scale::Utc, Scale::Tai, utc_to_tai);
    graph.register(Scale::Tai, Scale::Utc, tai_to_utc);
    graph.register(Scale::Tai, Scale::Tt, tai_to_tt);
    graph.register(Scale::Tt, Scale::Tai, tt_to_tai);
    graph.register(Scale::Tt, Scale::Tcg, tt_to_tcg);
    for (civil, julian, modified) in [
        (Scale::Tt, Scale::JdTt, Scale::MjdTt),
        (Scale::Tai, Scale::JdTai, Scale::MjdTai),
        (Scale::Tcg, Scale::JdTcg, Scale::MjdTcg),
    ] {
        graph.register(civil, julian, civil_to_julian);
        graph.register(julian, civil, julian_to_civil);
        graph.register(julian, modified, julian_to_modified);
        graph.register(modified, julian, modified_to_julian);
    }
    graph
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
