use serde::Serialize;
use tarih::{DateValue, NumeralMatch, TaggedSpan};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            self.wrap(s.as_ref(), color)
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            self.wrap(s.as_ref(), BOLD)
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            self.wrap(s.as_ref(), DIM)
        }

        fn wrap(&self, s: &str, code: &str) -> String {
            if self.enabled { format!("{code}{s}{RESET}") } else { s.to_string() }
        }
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("error: failed to serialize output: {err}"),
    }
}

pub fn print_spans(input: &str, spans: &[TaggedSpan], color: bool) {
    let palette = ansi::Palette::new(color);
    print_header(input, &palette);

    println!("\n{}", palette.paint("━━━ Expressions ━━━", ansi::GRAY));
    if spans.is_empty() {
        println!("{}", palette.dim("  No date expressions found"));
        println!("\n{}", palette.dim("  Tip: set TARIH_LOG=tarih=trace to see which rules were tried"));
        println!();
        return;
    }

    for (idx, span) in spans.iter().enumerate() {
        println!(
            "  {} {} {} {}",
            palette.paint(format!("[{idx}]"), ansi::GRAY),
            palette.bold(palette.paint(&span.text, ansi::GREEN)),
            palette.dim("│"),
            palette.paint(format!("chars {}..{}", span.start_index, span.end_index), ansi::YELLOW),
        );
        println!(
            "      {} {}  {} {}",
            palette.dim("type:"),
            palette.paint(span.kind.as_str(), ansi::BLUE),
            palette.dim("│"),
            palette.paint(fmt_range(&span.start_date, &span.end_date), ansi::CYAN),
        );
    }
    println!();
}

pub fn print_numbers(input: &str, found: &[NumeralMatch], color: bool) {
    let palette = ansi::Palette::new(color);
    print_header(input, &palette);

    println!("\n{}", palette.paint("━━━ Numerals ━━━", ansi::GRAY));
    if found.is_empty() {
        println!("{}", palette.dim("  No numerals found"));
    }
    for (idx, num) in found.iter().enumerate() {
        println!(
            "  {} {} {} {} {}",
            palette.paint(format!("[{idx}]"), ansi::GRAY),
            palette.bold(palette.paint(&num.text, ansi::GREEN)),
            palette.dim("→"),
            palette.paint(num.value.to_string(), ansi::CYAN),
            palette.paint(format!("chars {}..{}", num.start_index, num.end_index), ansi::YELLOW),
        );
    }
    println!();
}

fn print_header(input: &str, palette: &ansi::Palette) {
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Tagging: \"{input}\""), ansi::CYAN)));
}

fn fmt_range(start: &DateValue, end: &DateValue) -> String {
    match (start, end) {
        (DateValue::Timestamp(start), DateValue::Timestamp(end)) if start == end => start.to_string(),
        (DateValue::Timestamp(start), DateValue::Timestamp(end)) => format!("{start} → {end}"),
        (DateValue::Period(period), _) | (_, DateValue::Period(period)) => {
            format!("every {} from {}", period.unit.as_str(), period.anchor)
        }
    }
}
