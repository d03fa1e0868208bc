//! Number formatting helpers for the human-readable report.

/// Format a nanosecond value with an SI unit chosen by magnitude.
pub fn time(ns: f64) -> String {
    if ns < 1.0 {
        format!("{:>6} ps", short(ns * 1e3))
    } else if ns < 10f64.powi(3) {
        format!("{:>6} ns", short(ns))
    } else if ns < 10f64.powi(6) {
        format!("{:>6} µs", short(ns / 1e3))
    } else if ns < 10f64.powi(9) {
        format!("{:>6} ms", short(ns / 1e6))
    } else {
        format!("{:>6} s", short(ns / 1e9))
    }
}

/// Format a ratio as a signed percentage, eg. `+3.5021%`.
pub fn change(pct: f64) -> String {
    format!("{:>+6}%", signed_short(pct * 1e2))
}

pub fn short(n: f64) -> String {
    if n < 10.0 {
        format!("{:.4}", n)
    } else if n < 100.0 {
        format!("{:.3}", n)
    } else if n < 1000.0 {
        format!("{:.2}", n)
    } else if n < 10000.0 {
        format!("{:.1}", n)
    } else {
        format!("{:.0}", n)
    }
}

fn signed_short(n: f64) -> String {
    let n_abs = n.abs();

    let sign = if n >= 0.0 { '+' } else { '\u{2212}' };
    if n_abs < 10.0 {
        format!("{}{:.4}", sign, n_abs)
    } else if n_abs < 100.0 {
        format!("{}{:.3}", sign, n_abs)
    } else if n_abs < 1000.0 {
        format!("{}{:.2}", sign, n_abs)
    } else if n_abs < 10000.0 {
        format!("{}{:.1}", sign, n_abs)
    } else {
        format!("{}{:.0}", sign, n_abs)
    }
}

/// Format a value as an integer, including thousands-separators.
// Based on the corresponding libtest functionality, see
// https://github.com/rust-lang/rust/blob/557359f92512ca88b62a602ebda291f17a953002/library/test/src/bench.rs#L87-L109
pub fn integer(mut n: u64) -> String {
    use std::fmt::Write;
    let mut output = String::new();
    let mut trailing = false;
    for &pow in &[18, 15, 12, 9, 6, 3, 0] {
        let base = 10_u64.pow(pow);
        if pow == 0 || trailing || n / base != 0 {
            if !trailing {
                write!(output, "{}", n / base).unwrap();
            } else {
                write!(output, "{:03}", n / base).unwrap();
            }
            if pow != 0 {
                output.push(',');
            }
            trailing = true;
        }
        n %= base;
    }

    output
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn short_max_len() {
        let mut float = 1.0;
        while float < 999_999.9 {
            let string = short(float);
            println!("{}", string);
            assert!(string.len() <= 6);
            float *= 2.0;
        }
    }

    #[test]
    fn signed_short_max_len() {
        let mut float = -1.0;
        while float > -999_999.9 {
            let string = signed_short(float);
            println!("{}", string);
            assert!(string.chars().count() <= 7);
            float *= 2.0;
        }
    }

    #[test]
    fn integer_thousands_sep() {
        assert_eq!(integer(140_352_319), "140,352,319");
        assert_eq!(integer(1_346_269), "1,346,269");
        assert_eq!(integer(89), "89");
        assert_eq!(integer(0), "0");
    }

    #[test]
    fn time_picks_si_unit() {
        assert!(time(0.5).ends_with("ps"));
        assert!(time(25.0).ends_with("ns"));
        assert!(time(25_000.0).ends_with("µs"));
        assert!(time(25_000_000.0).ends_with("ms"));
        assert!(time(25_000_000_000.0).ends_with(" s"));
    }
}
