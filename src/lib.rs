// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Astronomical and civil timescale conversions over a conversion graph.
//!
//! `tictoc` converts a point in time between local civil time, UTC, TAI, TT,
//! TCG, and the Julian/Modified-Julian Date encodings of the uniform scales.
//! Rather than hand-writing every pairwise conversion, the crate registers
//! the handful of known adjacent conversions as edges in a directed graph
//! and composes them along the shortest registered route on demand.
//!
//! # Core types
//!
//! - [`ConversionGraph<S, V>`] — the generic engine: edge registry,
//!   breadth-first path discovery, chained application.
//! - [`Scale`] — the fixed set of timescale and encoding identifiers, and
//!   [`standard_graph`], which wires the domain edges between them.
//! - [`Instant`] — the value moved along the edges: a civil date-time, an
//!   offset-tagged date-time, or a day count.
//! - [`Time`] — the facade: an instant tagged with its scale, with one
//!   accessor per reachable scale.
//!
//! # The interesting edges
//!
//! Most edges are fixed offsets or epoch shifts. Two are not:
//!
//! - **utc ↔ tai** consults the leap-second table (27 inserted seconds,
//!   1972–2016, plus the 10 s base offset).
//! - **tt → tcg** applies the IAU 2000 secular rate term `L_G` accumulated
//!   since the 1977 epoch where the two scales agreed.
//!
//! The reverse tcg → tt conversion and the whole tdb family are
//! deliberately absent: asking for them reports [`NoPathError`] instead of
//! inventing a formula.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use tictoc::{standard_graph, Scale, Time};
//!
//! let graph = standard_graph();
//! let utc = NaiveDate::from_ymd_opt(2017, 1, 1).unwrap()
//!     .and_hms_opt(0, 0, 0).unwrap()
//!     .and_utc();
//! let time = Time::new(&graph, utc, Scale::Utc);
//!
//! // All 27 tabulated leap seconds have elapsed: TAI − UTC = 37 s.
//! assert_eq!(time.tai()?.to_string(), "2017-01-01 00:00:37 @ tai");
//! // TT sits exactly 32.184 s above TAI.
//! assert_eq!(time.tt()?.to_string(), "2017-01-01 00:01:09.184 @ tt");
//! # Ok::<(), tictoc::NoPathError<Scale>>(())
//! ```

mod graph;
mod instant;
mod scales;
mod time;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use graph::{ConversionGraph, Edge, NoPathError};
pub use instant::Instant;
pub use scales::{standard_graph, Scale, TimescaleGraph};
pub use time::Time;
