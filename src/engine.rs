//! Resolution and tagging engine.
//!
//! The engine is split into focused submodules under `src/engine/`:
//!
//! ```text
//! sentence ── Tagger::tag (tagger.rs)
//!               - split on single spaces
//!               - resolve every token, then every window (ascending size)
//!               - apply the overlap policy
//!                       │ one expression at a time
//!                       v
//!             Resolver::resolve (resolver.rs)
//!               - normalize: numerals -> digits, Turkish lowercase,
//!                 month spellings
//!               - Buckets::scan (buckets.rs) to skip impossible rules
//!               - first matching grammar rule wins
//!               - fallback parser on a total miss
//!                       │
//!                       v
//!             Tagger::spans: merge equal adjacent tags -> Vec<TaggedSpan>
//! ```
//!
//! ## Responsibilities by module
//!
//! - `buckets.rs`: the `Buckets` bitflags rules declare and the input scan
//!   that computes them.
//! - `resolver.rs`: normalization, rule evaluation and the fallback guard.
//! - `tagger.rs`: windowing, overlap handling and span merging.
//!
//! ## Debugging
//!
//! The resolver emits `tracing` events: `debug` for the rule (or fallback)
//! that resolved an expression, `trace` for construction failures, skipped
//! fallbacks and resolved windows. The CLI reads its filter from `TARIH_LOG`,
//! e.g. `TARIH_LOG=tarih=trace`.

#[path = "engine/buckets.rs"]
mod buckets;
#[path = "engine/resolver.rs"]
mod resolver;
#[path = "engine/tagger.rs"]
mod tagger;

pub use buckets::Buckets;
pub use resolver::Resolver;
pub use tagger::Tagger;
