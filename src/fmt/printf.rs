//! printf-style substitution for formatted log calls.
//!
//! Format strings arrive at runtime, so `format!` can't be used. Mistakes in a format
//! string never fail the log call: they are rendered inline as markers such as
//! `%!d(str=abc)`, `%!s(MISSING)`, `%!(BADWIDTH)` or `%!(EXTRA i64=1)`.
//!
//! Supported verbs: `%v %s %q %d %b %o %x %X %c %t %f %F %e %E %g %G %%`, with the flags
//! `- + # 0` and space, a width, and a precision.

use super::Arg;
use std::fmt::Write;
use std::iter::Peekable;
use std::str::Chars;

/// Widths above this are rejected with `%!(BADWIDTH)`.
pub const MAX_WIDTH: usize = 1_000_000;

/// Precisions above this are rejected with `%!(BADPREC)`. Bounded by what `format!` accepts.
pub const MAX_PRECISION: usize = 65_535;

/// Parsed flags, width and precision of one directive.
#[derive(Debug, Clone, Copy, Default)]
struct Directive {
    minus: bool,
    plus: bool,
    sharp: bool,
    zero: bool,
    space: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

impl Directive {
    fn rejection(&self) -> Option<&'static str> {
        if self.width.is_some_and(|w| w > MAX_WIDTH) {
            Some("%!(BADWIDTH)")
        } else if self.precision.is_some_and(|p| p > MAX_PRECISION) {
            Some("%!(BADPREC)")
        } else {
            None
        }
    }
}

/// Substitutes `args` into `format`.
#[must_use]
pub fn sprintf(format: &str, args: &[Arg]) -> String {
    let mut out = String::with_capacity(format.len() + args.len() * 8);
    let mut chars = format.chars().peekable();
    let mut next = 0;

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let directive = parse_directive(&mut chars);
        let Some(verb) = chars.next() else {
            out.push_str("%!(NOVERB)");
            break;
        };
        if verb == '%' {
            out.push('%');
            continue;
        }

        // The rejected directive still consumes its argument
        if let Some(marker) = directive.rejection() {
            out.push_str(marker);
            next = (next + 1).min(args.len());
            continue;
        }

        let Some(arg) = args.get(next) else {
            let _ = write!(out, "%!{verb}(MISSING)");
            continue;
        };
        next += 1;

        match format_arg(arg, verb, &directive) {
            Some(body) => out.push_str(&pad(body, &directive, arg.is_numeric())),
            None => {
                let _ = write!(out, "%!{verb}({}={arg})", arg.type_name());
            }
        }
    }

    if next < args.len() {
        let extra = args[next..]
            .iter()
            .map(|arg| format!("{}={arg}", arg.type_name()))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = write!(out, "%!(EXTRA {extra})");
    }

    out
}

fn parse_directive(chars: &mut Peekable<Chars<'_>>) -> Directive {
    let mut directive = Directive::default();

    while let Some(&flag) = chars.peek() {
        match flag {
            '-' => directive.minus = true,
            '+' => directive.plus = true,
            '#' => directive.sharp = true,
            '0' => directive.zero = true,
            ' ' => directive.space = true,
            _ => break,
        }
        chars.next();
    }

    directive.width = read_number(chars);
    if chars.peek() == Some(&'.') {
        chars.next();
        directive.precision = Some(read_number(chars).unwrap_or(0));
    }

    directive
}

/// Saturates, so an absurd digit run still compares above the caps.
fn read_number(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        let digit = usize::try_from(digit).unwrap_or(0);
        value = Some(
            value
                .unwrap_or(0)
                .saturating_mul(10)
                .saturating_add(digit),
        );
        chars.next();
    }
    value
}

/// `None` means the verb does not apply to this argument's type.
fn format_arg(arg: &Arg, verb: char, directive: &Directive) -> Option<String> {
    match (arg, verb) {
        (Arg::Str(s), 'v' | 's') => Some(truncate_chars(s, directive.precision)),
        (Arg::Str(s), 'q') => Some(format!("{s:?}")),
        (Arg::Str(s), 'x') => Some(hex_bytes(s.as_bytes(), false)),
        (Arg::Str(s), 'X') => Some(hex_bytes(s.as_bytes(), true)),
        (Arg::Bool(b), 'v' | 't') => Some(b.to_string()),
        (Arg::Char(c), 'v' | 'c') => Some(c.to_string()),
        (Arg::Char(c), 'q') => Some(format!("{c:?}")),
        (Arg::Char(c), 'd' | 'b' | 'o' | 'x' | 'X') => {
            format_int(i128::from(u32::from(*c)), verb, directive)
        }
        (Arg::Int(i), _) => format_int(i128::from(*i), verb, directive),
        (Arg::Uint(u), _) => format_int(i128::from(*u), verb, directive),
        (Arg::Float(x), _) => format_float(*x, verb, directive),
        _ => None,
    }
}

fn format_int(n: i128, verb: char, directive: &Directive) -> Option<String> {
    let magnitude = n.unsigned_abs();
    let digits = match verb {
        'v' | 'd' => magnitude.to_string(),
        'b' if directive.sharp => format!("0b{magnitude:b}"),
        'b' => format!("{magnitude:b}"),
        'o' if directive.sharp => format!("0{magnitude:o}"),
        'o' => format!("{magnitude:o}"),
        'x' if directive.sharp => format!("0x{magnitude:x}"),
        'x' => format!("{magnitude:x}"),
        'X' if directive.sharp => format!("0X{magnitude:X}"),
        'X' => format!("{magnitude:X}"),
        'c' => return to_char(n).map(String::from),
        'q' => return to_char(n).map(|c| format!("{c:?}")),
        _ => return None,
    };
    Some(with_sign(n < 0, digits, directive))
}

fn to_char(n: i128) -> Option<char> {
    u32::try_from(n).ok().and_then(char::from_u32)
}

fn format_float(x: f64, verb: char, directive: &Directive) -> Option<String> {
    if !matches!(verb, 'v' | 'f' | 'F' | 'e' | 'E' | 'g' | 'G') {
        return None;
    }
    if x.is_nan() {
        return Some("NaN".to_string());
    }
    if x.is_infinite() {
        return Some(if x > 0.0 { "+Inf" } else { "-Inf" }.to_string());
    }

    let magnitude = x.abs();
    let body = match verb {
        'f' | 'F' => format!("{magnitude:.prec$}", prec = directive.precision.unwrap_or(6)),
        'e' => format_exp(magnitude, directive.precision.unwrap_or(6)),
        'E' => format_exp(magnitude, directive.precision.unwrap_or(6)).to_uppercase(),
        'G' => format_general(magnitude, directive.precision).to_uppercase(),
        _ => format_general(magnitude, directive.precision),
    };
    Some(with_sign(x.is_sign_negative(), body, directive))
}

/// `%v` rendering of a float, shared with `Arg`'s `Display`.
pub(crate) fn format_value(x: f64) -> String {
    format_float(x, 'v', &Directive::default()).unwrap_or_default()
}

/// `1.234500e+00`: at least two exponent digits, always signed.
fn format_exp(x: f64, precision: usize) -> String {
    let sci = format!("{x:.precision$e}");
    let (mantissa, exp) = split_exp(&sci);
    join_exp(mantissa, exp)
}

/// `%g`: exponent form for very small or large magnitudes, plain decimals otherwise.
/// Without a precision the shortest round-tripping digits are used.
fn format_general(x: f64, precision: Option<usize>) -> String {
    let sci = match precision {
        Some(p) => format!("{x:.prec$e}", prec = p.max(1) - 1),
        None => format!("{x:e}"),
    };
    let (mantissa, exp) = split_exp(&sci);
    let limit = precision.map_or(21, |p| i32::try_from(p.max(1)).unwrap_or(i32::MAX));

    if exp < -4 || exp >= limit {
        return join_exp(&trim_zeros(mantissa), exp);
    }

    match precision {
        None => format!("{x}"),
        Some(_) => {
            let decimals = usize::try_from(limit - 1 - exp)
                .unwrap_or(0)
                .min(MAX_PRECISION);
            trim_zeros(&format!("{x:.decimals$}"))
        }
    }
}

fn split_exp(sci: &str) -> (&str, i32) {
    sci.split_once('e')
        .map_or((sci, 0), |(m, e)| (m, e.parse().unwrap_or(0)))
}

fn join_exp(mantissa: &str, exp: i32) -> String {
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
}

fn trim_zeros(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
    }
}

fn with_sign(negative: bool, body: String, directive: &Directive) -> String {
    if negative {
        format!("-{body}")
    } else if directive.plus {
        format!("+{body}")
    } else if directive.space {
        format!(" {body}")
    } else {
        body
    }
}

fn truncate_chars(s: &str, precision: Option<usize>) -> String {
    precision.map_or_else(|| s.to_string(), |p| s.chars().take(p).collect())
}

fn hex_bytes(bytes: &[u8], upper: bool) -> String {
    bytes.iter().fold(String::new(), |mut out, b| {
        let _ = if upper {
            write!(out, "{b:02X}")
        } else {
            write!(out, "{b:02x}")
        };
        out
    })
}

fn pad(body: String, directive: &Directive, numeric: bool) -> String {
    let Some(width) = directive.width else {
        return body;
    };
    let len = body.chars().count();
    if len >= width {
        return body;
    }

    let fill = width - len;
    if directive.minus {
        format!("{body}{}", " ".repeat(fill))
    } else if directive.zero && numeric {
        let (prefix, digits) = body.split_at(prefix_len(&body, directive.sharp));
        format!("{prefix}{}{digits}", "0".repeat(fill))
    } else {
        format!("{}{body}", " ".repeat(fill))
    }
}

/// Length of the sign and, with `#`, the radix prefix. Zero fill goes after both.
fn prefix_len(body: &str, sharp: bool) -> usize {
    let sign = usize::from(body.starts_with(['+', '-', ' ']));
    let radix = if sharp && ["0x", "0X", "0b"].iter().any(|p| body[sign..].starts_with(p)) {
        2
    } else {
        0
    };
    sign + radix
}
