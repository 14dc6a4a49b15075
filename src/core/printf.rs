//! printf-style template substitution
//!
//! Supported verbs: `%v %s %d %x %X %o %b %f %F %e %E %g %G %t %q %c %T`
//! and `%%`, with the `-`, `+`, `0` and `#` flags, a width and a
//! `.precision`. Problems are reported inline rather than failing:
//!
//! | case                | output            |
//! |---------------------|-------------------|
//! | verb/type mismatch  | `%!d(value)`      |
//! | missing argument    | `%!s(MISSING)`    |
//! | surplus arguments   | `%!(EXTRA a, b)`  |
//! | `%` at end of input | `%!(NOVERB)`      |
//! | width above 10^6    | `%!(BADWIDTH)`    |
//! | precision above 10^6| `%!(BADPREC)`     |

use super::message::Arg;
use std::fmt::Write;
use std::iter::Peekable;
use std::str::Chars;

/// Widths and precisions above this are rejected
const MAX_WIDTH: usize = 1_000_000;

#[derive(Debug, Default, Clone, Copy)]
struct Directive {
    left: bool,
    plus: bool,
    zero: bool,
    alt: bool,
    width: Option<usize>,
    precision: Option<usize>,
    bad_width: bool,
    bad_precision: bool,
}

/// Substitute `args` into `template`
pub(crate) fn sprintf(template: &str, args: &[Arg<'_>]) -> String {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut next_arg = 0;
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let directive = parse_directive(&mut chars);
        if directive.bad_width {
            out.push_str("%!(BADWIDTH)");
        }
        if directive.bad_precision {
            out.push_str("%!(BADPREC)");
        }
        let Some(verb) = chars.next() else {
            out.push_str("%!(NOVERB)");
            break;
        };
        if verb == '%' {
            out.push('%');
            continue;
        }

        let Some(arg) = args.get(next_arg) else {
            let _ = write!(out, "%!{}(MISSING)", verb);
            continue;
        };
        next_arg += 1;

        match render(verb, &directive, arg) {
            Some(rendered) => out.push_str(&rendered),
            None => {
                let _ = write!(out, "%!{}({})", verb, arg);
            }
        }
    }

    if next_arg < args.len() {
        out.push_str("%!(EXTRA ");
        for (idx, arg) in args[next_arg..].iter().enumerate() {
            if idx > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{}", arg);
        }
        out.push(')');
    }

    out
}

fn parse_directive(chars: &mut Peekable<Chars<'_>>) -> Directive {
    let mut directive = Directive::default();
    while let Some(&flag) = chars.peek() {
        match flag {
            '-' => directive.left = true,
            '+' => directive.plus = true,
            '0' => directive.zero = true,
            '#' => directive.alt = true,
            _ => break,
        }
        chars.next();
    }
    match parse_number(chars) {
        Some(width) if width > MAX_WIDTH => directive.bad_width = true,
        width => directive.width = width,
    }
    if chars.peek() == Some(&'.') {
        chars.next();
        match parse_number(chars).unwrap_or(0) {
            precision if precision > MAX_WIDTH => directive.bad_precision = true,
            precision => directive.precision = Some(precision),
        }
    }
    directive
}

fn parse_number(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        value = Some(value.unwrap_or(0).saturating_mul(10).saturating_add(digit as usize));
        chars.next();
    }
    value
}

fn render(verb: char, directive: &Directive, arg: &Arg<'_>) -> Option<String> {
    let rendered = match (verb, arg) {
        ('d' | 'v', Arg::Int(i)) => number(i.to_string(), directive),
        ('d' | 'v', Arg::Uint(u)) => number(u.to_string(), directive),
        ('x' | 'X' | 'o' | 'b', Arg::Int(i)) => {
            number(radix(i.unsigned_abs(), *i < 0, verb, directive), directive)
        }
        ('x' | 'X' | 'o' | 'b', Arg::Uint(u)) => number(radix(*u, false, verb, directive), directive),
        ('x' | 'X', Arg::Str(s) | Arg::Text(s)) => pad(hex_bytes(s, verb == 'X'), directive, false),
        ('f' | 'F', Arg::Float(f)) => number(format!("{:.*}", directive.precision.unwrap_or(6), f), directive),
        ('e' | 'E', Arg::Float(f)) => {
            number(exponent(*f, directive.precision.unwrap_or(6), verb == 'E'), directive)
        }
        ('g' | 'G' | 'v', Arg::Float(f)) => {
            let text = match directive.precision {
                Some(precision) => format!("{:.*}", precision, f),
                None => f.to_string(),
            };
            number(text, directive)
        }
        ('t' | 'v', Arg::Bool(b)) => pad(b.to_string(), directive, false),
        ('c' | 'v', Arg::Char(c)) => pad(c.to_string(), directive, false),
        ('c', Arg::Int(i)) => pad(
            u32::try_from(*i).ok().and_then(char::from_u32)?.to_string(),
            directive,
            false,
        ),
        ('c', Arg::Uint(u)) => pad(
            u32::try_from(*u).ok().and_then(char::from_u32)?.to_string(),
            directive,
            false,
        ),
        ('q', Arg::Str(s) | Arg::Text(s)) => pad(format!("{:?}", s), directive, false),
        ('q', Arg::Char(c)) => pad(format!("{:?}", c), directive, false),
        ('s' | 'v', Arg::Debug(d)) if directive.alt => pad(format!("{:#?}", d), directive, false),
        ('s' | 'v', other) => pad(truncate(other.to_string(), directive.precision), directive, false),
        ('T', other) => pad(other.type_name().to_string(), directive, false),
        _ => return None,
    };
    Some(rendered)
}

fn radix(magnitude: u64, negative: bool, verb: char, directive: &Directive) -> String {
    let (digits, prefix) = match verb {
        'x' => (format!("{:x}", magnitude), "0x"),
        'X' => (format!("{:X}", magnitude), "0X"),
        'o' => (format!("{:o}", magnitude), "0"),
        _ => (format!("{:b}", magnitude), "0b"),
    };
    let sign = if negative { "-" } else { "" };
    if directive.alt {
        format!("{}{}{}", sign, prefix, digits)
    } else {
        format!("{}{}", sign, digits)
    }
}

fn hex_bytes(s: &str, upper: bool) -> String {
    s.bytes()
        .map(|b| {
            if upper {
                format!("{:02X}", b)
            } else {
                format!("{:02x}", b)
            }
        })
        .collect()
}

/// Exponent notation with a signed, two digit exponent: `1.500000e+03`
fn exponent(value: f64, precision: usize, upper: bool) -> String {
    let raw = format!("{:.*e}", precision, value);
    let Some((mantissa, exp)) = raw.split_once('e') else {
        return raw;
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    format!(
        "{}{}{}{:02}",
        mantissa,
        if upper { 'E' } else { 'e' },
        if exp < 0 { '-' } else { '+' },
        exp.unsigned_abs()
    )
}

fn truncate(s: String, precision: Option<usize>) -> String {
    match precision {
        Some(max) if s.chars().count() > max => s.chars().take(max).collect(),
        _ => s,
    }
}

fn number(mut text: String, directive: &Directive) -> String {
    if directive.plus && !text.starts_with('-') {
        text.insert(0, '+');
    }
    pad(text, directive, true)
}

fn pad(text: String, directive: &Directive, numeric: bool) -> String {
    let len = text.chars().count();
    let Some(fill) = directive.width.and_then(|width| width.checked_sub(len)) else {
        return text;
    };
    if fill == 0 {
        return text;
    }

    if directive.left {
        format!("{}{}", text, " ".repeat(fill))
    } else if directive.zero && numeric {
        let split = if text.starts_with(['-', '+']) { 1 } else { 0 };
        let (sign, digits) = text.split_at(split);
        format!("{}{}{}", sign, "0".repeat(fill), digits)
    } else {
        format!("{}{}", " ".repeat(fill), text)
    }
}
