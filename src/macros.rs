#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Declare one grammar entry.
///
/// The pattern is an owned `String` (usually built with `format!` from the
/// shared fragments in `rules::time::helpers::vocab`) and is compiled as a full-string
/// match by [`Rule::new`](crate::Rule::new).
///
/// ```text
/// rule! {
///     name: "n days before",
///     buckets: Buckets::HAS_DIGITS,
///     pattern: format!(r"([0-9]+) gün {BEFORE}"),
///     instant: at().dday(group(1).negated()),
/// }
/// ```
#[macro_export]
macro_rules! rule {
    (@buckets) => {
        $crate::engine::Buckets::empty()
    };
    (@buckets $buckets:expr) => {
        $buckets
    };
    (
        name: $name:expr,
        $(buckets: $buckets:expr,)?
        pattern: $pat:expr,
        instant: $at:expr
        $(,)?
    ) => {
        $crate::Rule::new($name, $pat, $crate::Action::Instant($at), $crate::rule!(@buckets $($buckets)?))
    };
    (
        name: $name:expr,
        $(buckets: $buckets:expr,)?
        pattern: $pat:expr,
        span: [$start:expr, $end:expr $(,)?]
        $(,)?
    ) => {
        $crate::Rule::new($name, $pat, $crate::Action::Span($start, $end), $crate::rule!(@buckets $($buckets)?))
    };
    (
        name: $name:expr,
        $(buckets: $buckets:expr,)?
        pattern: $pat:expr,
        period: ($unit:expr, $anchor:expr)
        $(,)?
    ) => {
        $crate::Rule::new(
            $name,
            $pat,
            $crate::Action::Period { unit: $unit, anchor: $anchor },
            $crate::rule!(@buckets $($buckets)?),
        )
    };
}
