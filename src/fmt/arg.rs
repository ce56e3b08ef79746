//! Log calls take a list of heterogeneous values; `Arg` is the closed set of shapes a
//! value can have once it reaches the formatter or an adapter.

use super::printf;
use std::fmt;

/// One argument of a log call, kept unformatted so adapters can re-render it.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Str(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Char(char),
}

impl Arg {
    /// Wraps anything printable as a string argument.
    #[must_use]
    pub fn display(value: impl fmt::Display) -> Self {
        Self::Str(value.to_string())
    }

    /// Name used inside `%!verb(type=value)` markers.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Str(_) => "str",
            Self::Int(_) => "i64",
            Self::Uint(_) => "u64",
            Self::Float(_) => "f64",
            Self::Bool(_) => "bool",
            Self::Char(_) => "char",
        }
    }

    /// Zero padding only makes sense for numbers.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Uint(_) | Self::Float(_))
    }
}

/// Renders the value the way `%v` does.
impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Uint(u) => write!(f, "{u}"),
            Self::Float(x) => f.write_str(&printf::format_value(*x)),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Char(c) => write!(f, "{c}"),
        }
    }
}

impl From<&str> for Arg {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Arg {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&String> for Arg {
    fn from(v: &String) -> Self {
        Self::Str(v.clone())
    }
}

macro_rules! from_lossless {
    ($variant:ident($inner:ty): $($ty:ty),+) => {
        $(
            impl From<$ty> for Arg {
                fn from(v: $ty) -> Self {
                    Self::$variant(<$inner>::from(v))
                }
            }
        )+
    };
}

from_lossless!(Int(i64): i8, i16, i32, i64);
from_lossless!(Uint(u64): u8, u16, u32, u64);
from_lossless!(Float(f64): f32, f64);

impl From<isize> for Arg {
    fn from(v: isize) -> Self {
        i64::try_from(v).map_or_else(|_| Self::Str(v.to_string()), Self::Int)
    }
}

impl From<usize> for Arg {
    fn from(v: usize) -> Self {
        u64::try_from(v).map_or_else(|_| Self::Str(v.to_string()), Self::Uint)
    }
}

impl From<bool> for Arg {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<char> for Arg {
    fn from(v: char) -> Self {
        Self::Char(v)
    }
}

/// Line-kind bodies: every argument in `%v` form, separated by single spaces.
#[must_use]
pub fn join(args: &[Arg]) -> String {
    args.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
