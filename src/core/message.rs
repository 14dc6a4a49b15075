//! Message arguments and message formatting
//!
//! A log call takes a list of loosely typed [`Arg`]s. The first argument
//! decides how the message is built:
//!
//! 1. `Str` is a template. With trailing arguments they are substituted
//!    printf-style (`"Hello %s"`); alone it is used verbatim.
//! 2. `Error` renders through its `Display` (the error message).
//! 3. Display-capable values (`Text`, numbers, `Display`) render through
//!    `Display`.
//! 4. `Debug` is the opaque fallback, rendered with `{:?}`.
//!
//! When the first argument is not a template, trailing arguments are
//! rendered independently and appended, separated by single spaces.

use super::printf;
use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

#[derive(Clone)]
pub enum Arg<'a> {
    /// Text that acts as a template when it is the first argument
    Str(Cow<'a, str>),
    /// Text that is never treated as a template
    Text(Cow<'a, str>),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Char(char),
    Error(&'a (dyn StdError + 'a)),
    Display(&'a (dyn fmt::Display + 'a)),
    Debug(&'a (dyn fmt::Debug + 'a)),
}

impl<'a> Arg<'a> {
    /// Plain text that is rendered as is, never substituted into
    pub fn text(text: impl Into<Cow<'a, str>>) -> Self {
        Arg::Text(text.into())
    }

    pub fn error(err: &'a (dyn StdError + 'a)) -> Self {
        Arg::Error(err)
    }

    pub fn display(value: &'a (dyn fmt::Display + 'a)) -> Self {
        Arg::Display(value)
    }

    pub fn debug(value: &'a (dyn fmt::Debug + 'a)) -> Self {
        Arg::Debug(value)
    }

    /// The same argument with template text demoted to plain text
    pub fn into_plain(self) -> Self {
        match self {
            Arg::Str(s) => Arg::Text(s),
            other => other,
        }
    }

    pub fn is_template(&self) -> bool {
        matches!(self, Arg::Str(_))
    }

    /// Name of the argument's kind, as shown by the `%T` verb
    pub fn type_name(&self) -> &'static str {
        match self {
            Arg::Str(_) | Arg::Text(_) => "string",
            Arg::Int(_) => "int",
            Arg::Uint(_) => "uint",
            Arg::Float(_) => "float64",
            Arg::Bool(_) => "bool",
            Arg::Char(_) => "char",
            Arg::Error(_) => "error",
            Arg::Display(_) => "display",
            Arg::Debug(_) => "debug",
        }
    }
}

impl fmt::Display for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Str(s) | Arg::Text(s) => f.write_str(s),
            Arg::Int(i) => write!(f, "{}", i),
            Arg::Uint(u) => write!(f, "{}", u),
            Arg::Float(fl) => write!(f, "{}", fl),
            Arg::Bool(b) => write!(f, "{}", b),
            Arg::Char(c) => write!(f, "{}", c),
            Arg::Error(e) => write!(f, "{}", e),
            Arg::Display(d) => write!(f, "{}", d),
            Arg::Debug(d) => write!(f, "{:?}", d),
        }
    }
}

impl fmt::Debug for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Arg::Text(s) => f.debug_tuple("Text").field(s).finish(),
            other => f
                .debug_tuple(other.type_name())
                .field(&format_args!("{}", other))
                .finish(),
        }
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(s: &'a str) -> Self {
        Arg::Str(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(s: &'a String) -> Self {
        Arg::Str(Cow::Borrowed(s.as_str()))
    }
}

impl From<String> for Arg<'_> {
    fn from(s: String) -> Self {
        Arg::Str(Cow::Owned(s))
    }
}

macro_rules! impl_from_int {
    ($variant:ident => $wide:ty: $($ty:ty),+) => {
        $(
            impl From<$ty> for Arg<'_> {
                fn from(value: $ty) -> Self {
                    Arg::$variant(value as $wide)
                }
            }
        )+
    };
}

impl_from_int!(Int => i64: i8, i16, i32, i64, isize);
impl_from_int!(Uint => u64: u8, u16, u32, u64, usize);

impl From<f32> for Arg<'_> {
    fn from(value: f32) -> Self {
        Arg::Float(value as f64)
    }
}

impl From<f64> for Arg<'_> {
    fn from(value: f64) -> Self {
        Arg::Float(value)
    }
}

impl From<bool> for Arg<'_> {
    fn from(value: bool) -> Self {
        Arg::Bool(value)
    }
}

impl From<char> for Arg<'_> {
    fn from(value: char) -> Self {
        Arg::Char(value)
    }
}

/// Build the final message string from a call's arguments.
///
/// # Examples
///
/// ```
/// use context_journal::{format_message, Arg};
///
/// assert_eq!(format_message(&["Hello %s".into(), "Bob".into()]), "Hello Bob");
/// assert_eq!(format_message(&[Arg::text("Hello"), "Bob".into()]), "Hello Bob");
/// assert_eq!(format_message(&["100%".into()]), "100%");
/// assert_eq!(format_message(&[]), "");
/// ```
pub fn format_message(args: &[Arg<'_>]) -> String {
    let Some((first, rest)) = args.split_first() else {
        return String::new();
    };

    match first {
        Arg::Str(template) if !rest.is_empty() => printf::sprintf(template, rest),
        Arg::Str(template) => template.clone().into_owned(),
        _ => {
            let mut msg = first.to_string();
            for arg in rest {
                msg.push(' ');
                msg.push_str(&arg.to_string());
            }
            msg
        }
    }
}
