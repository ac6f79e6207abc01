// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The [`Time`] facade: an instant tagged with its current scale.
//!
//! `Time` is the user-facing surface of the crate. It pairs an
//! [`Instant`] with the [`Scale`] it is expressed in and borrows the graph
//! it converts through, so every accessor is a thin call into
//! [`ConversionGraph::convert`](crate::ConversionGraph::convert). Nothing is
//! cached: each access re-runs path search and edge application from the
//! current representation, which is cheap because the graph holds at most a
//! dozen nodes and every route is at most a handful of edges long.
//!
//! ```
//! use chrono::NaiveDate;
//! use tictoc::{standard_graph, Scale, Time};
//!
//! let graph = standard_graph();
//! let utc = NaiveDate::from_ymd_opt(2015, 6, 30).unwrap()
//!     .and_hms_opt(23, 59, 59).unwrap()
//!     .and_utc();
//! let time = Time::new(&graph, utc, Scale::Utc);
//!
//! // 25 leap epochs precede this one, so TAI reads 10 + 25 s ahead.
//! assert_eq!(time.tai()?.to_string(), "2015-07-01 00:00:34 @ tai");
//! # Ok::<(), tictoc::NoPathError<Scale>>(())
//! ```

use chrono::Utc;

use super::graph::NoPathError;
use super::instant::Instant;
use super::scales::{Scale, TimescaleGraph};

// ═══════════════════════════════════════════════════════════════════════════
// Time
// ═══════════════════════════════════════════════════════════════════════════

/// An immutable timestamp: an instant, the scale it is expressed in, and a
/// borrow of the conversion graph.
///
/// Converting produces a new `Time` in the target scale; the original is
/// untouched. Two values compare equal when their instants and scales do —
/// which graph they borrow does not take part.
#[derive(Debug, Clone, Copy)]
pub struct Time<'g> {
    graph: &'g TimescaleGraph,
    instant: Instant,
    scale: Scale,
}

impl<'g> Time<'g> {
    // ── construction ──────────────────────────────────────────────────

    /// Tag `instant` as a reading on `scale`.
    ///
    /// The pairing is taken on faith: the instant's payload shape must
    /// match the scale's convention (see [`Instant`]), or a later
    /// conversion panics when an edge extracts the wrong variant.
    pub fn new(graph: &'g TimescaleGraph, instant: impl Into<Instant>, scale: Scale) -> Self {
        Self {
            graph,
            instant: instant.into(),
            scale,
        }
    }

    /// The current instant, captured in UTC and presented in local civil
    /// time.
    ///
    /// Fallible only because the graph is caller-supplied; with
    /// [`standard_graph`](crate::standard_graph) the utc → local edge is
    /// always registered.
    pub fn now(graph: &'g TimescaleGraph) -> Result<Self, NoPathError<Scale>> {
        Self::new(graph, Utc::now(), Scale::Utc).local()
    }

    // ── inspection ────────────────────────────────────────────────────

    /// The instant payload, in whatever shape the current scale uses.
    pub fn instant(&self) -> Instant {
        self.instant
    }

    /// The scale the instant is currently expressed in.
    pub fn scale(&self) -> Scale {
        self.scale
    }

    // ── conversion ────────────────────────────────────────────────────

    /// This timestamp re-expressed on `target`.
    ///
    /// Already being there is the identity: the value comes back as-is
    /// with no path search. Otherwise the graph composes the shortest
    /// registered edge chain, or reports [`NoPathError`] when no route
    /// exists (the tdb family, or anything downstream of tcg).
    pub fn to_scale(&self, target: Scale) -> Result<Self, NoPathError<Scale>> {
        if self.scale == target {
            return Ok(*self);
        }
        let instant = self.graph.convert(self.scale, target, self.instant)?;
        Ok(Self {
            graph: self.graph,
            instant,
            scale: target,
        })
    }

    /// Host-zone civil time.
    pub fn local(&self) -> Result<Self, NoPathError<Scale>> {
        self.to_scale(Scale::Local)
    }

    /// Coordinated Universal Time.
    pub fn utc(&self) -> Result<Self, NoPathError<Scale>> {
        self.to_scale(Scale::Utc)
    }

    /// International Atomic Time.
    pub fn tai(&self) -> Result<Self, NoPathError<Scale>> {
        self.to_scale(Scale::Tai)
    }

    /// Terrestrial Time.
    pub fn tt(&self) -> Result<Self, NoPathError<Scale>> {
        self.to_scale(Scale::Tt)
    }

    /// Geocentric Coordinate Time.
    pub fn tcg(&self) -> Result<Self, NoPathError<Scale>> {
        self.to_scale(Scale::Tcg)
    }

    /// Julian Date on the TAI axis.
    pub fn jdtai(&self) -> Result<Self, NoPathError<Scale>> {
        self.to_scale(Scale::JdTai)
    }

    /// Modified Julian Date on the TAI axis.
    pub fn mjdtai(&self) -> Result<Self, NoPathError<Scale>> {
        self.to_scale(Scale::MjdTai)
    }

    /// Julian Date on the TT axis.
    pub fn jdtt(&self) -> Result<Self, NoPathError<Scale>> {
        self.to_scale(Scale::JdTt)
    }

    /// Modified Julian Date on the TT axis.
    pub fn mjdtt(&self) -> Result<Self, NoPathError<Scale>> {
        self.to_scale(Scale::MjdTt)
    }

    /// Julian Date on the TCG axis.
    pub fn jdtcg(&self) -> Result<Self, NoPathError<Scale>> {
        self.to_scale(Scale::JdTcg)
    }

    /// Modified Julian Date on the TCG axis.
    pub fn mjdtcg(&self) -> Result<Self, NoPathError<Scale>> {
        self.to_scale(Scale::MjdTcg)
    }
}

impl PartialEq for Time<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.scale == other.scale && self.instant == other.instant
    }
}

impl std::fmt::Display for Time<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ {}", self.instant, self.scale)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scales::standard_graph;
    use chrono::{DateTime, FixedOffset, NaiveDate};
    use qtty::Days;

    fn sample_utc() -> DateTime<FixedOffset> {
        NaiveDate::from_ymd_opt(2015, 6, 30)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap()
            .and_utc()
            .fixed_offset()
    }

    #[test]
    fn accessor_on_the_current_scale_is_identity() {
        let graph = standard_graph();
        let time = Time::new(&graph, sample_utc(), Scale::Utc);
        let same = time.utc().unwrap();
        assert_eq!(same, time);
        assert_eq!(same.instant(), time.instant());
    }

    #[test]
    fn conversion_leaves_the_original_untouched() {
        let graph = standard_graph();
        let time = Time::new(&graph, sample_utc(), Scale::Utc);
        let tai = time.tai().unwrap();
        assert_eq!(time.scale(), Scale::Utc);
        assert_eq!(time.instant(), Instant::from(sample_utc()));
        assert_eq!(tai.scale(), Scale::Tai);
        assert_ne!(tai, time);
    }

    #[test]
    fn chained_accessors_reach_the_day_count_encodings() {
        let graph = standard_graph();
        let time = Time::new(&graph, sample_utc(), Scale::Utc);
        let mjd = time.mjdtai().unwrap();
        assert_eq!(mjd.scale(), Scale::MjdTai);
        // The TAI reading is 2015-07-01T00:00:34, i.e. MJD 57204 + 34 s.
        let days = mjd.instant().as_day_count().unwrap();
        let expected = Days::new(57_204.0 + 34.0 / 86_400.0);
        assert!((days - expected).abs() < Days::new(1e-9));
    }

    #[test]
    fn now_presents_in_local_scale() {
        let graph = standard_graph();
        let now = Time::now(&graph).unwrap();
        assert_eq!(now.scale(), Scale::Local);
        assert!(now.instant().as_zoned().is_some());
    }

    #[test]
    fn unregistered_scales_report_no_path() {
        let graph = standard_graph();
        let time = Time::new(&graph, sample_utc(), Scale::Utc);
        for target in [Scale::Tdb, Scale::JdTdb, Scale::MjdTdb] {
            assert_eq!(
                time.to_scale(target).unwrap_err(),
                NoPathError {
                    from: Scale::Utc,
                    to: target
                }
            );
        }
    }

    #[test]
    fn display_pairs_instant_and_scale() {
        let graph = standard_graph();
        let time = Time::new(&graph, sample_utc(), Scale::Utc);
        assert_eq!(time.to_string(), "2015-06-30 23:59:59 +00:00 @ utc");
        assert_eq!(
            time.tai().unwrap().to_string(),
            "2015-07-01 00:00:34 @ tai"
        );
    }

    #[test]
    fn day_count_display_has_no_unit_suffix() {
        let graph = standard_graph();
        let mjd = Time::new(&graph, Days::new(57_204.5), Scale::MjdTai);
        assert_eq!(mjd.to_string(), "57204.5 @ mjdtai");
    }
}
