//! Value multiplicity of dictionary attributes.

use snafu::{ensure, Backtrace, ResultExt, Snafu};
use std::fmt;
use std::str::FromStr;

/// The number of values admitted by an attribute,
/// as declared in the data dictionary
/// (e.g. `1`, `1-3`, `1-n`, `2-2n`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueMultiplicity {
    /// Minimum number of values.
    pub min: u32,
    /// Maximum number of values, `u32::MAX` if unbounded.
    pub max: u32,
    /// The number of values must be a multiple of this
    /// (1 for most attributes, 2 in `2-2n`).
    pub multiple: u32,
}

/// An error returned when parsing an invalid value multiplicity.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ParseVmError {
    #[snafu(display("value multiplicity is empty"))]
    Empty { backtrace: Backtrace },
    #[snafu(display("invalid value multiplicity bound `{}`", text))]
    InvalidBound {
        text: String,
        backtrace: Backtrace,
        source: std::num::ParseIntError,
    },
    #[snafu(display("maximum {} is lower than minimum {}", max, min))]
    Inverted {
        min: u32,
        max: u32,
        backtrace: Backtrace,
    },
}

impl ValueMultiplicity {
    /// Exactly one value.
    pub const ONE: ValueMultiplicity = ValueMultiplicity::exactly(1);

    /// One or more values.
    pub const ONE_OR_MORE: ValueMultiplicity = ValueMultiplicity {
        min: 1,
        max: u32::MAX,
        multiple: 1,
    };

    /// Exactly `n` values.
    pub const fn exactly(n: u32) -> Self {
        ValueMultiplicity {
            min: n,
            max: n,
            multiple: 1,
        }
    }

    /// Between `min` and `max` values.
    pub const fn between(min: u32, max: u32) -> Self {
        ValueMultiplicity {
            min,
            max,
            multiple: 1,
        }
    }

    /// At least `min` values, in multiples of `multiple` (e.g. `2-2n`).
    pub const fn multiples_of(min: u32, multiple: u32) -> Self {
        ValueMultiplicity {
            min,
            max: u32::MAX,
            multiple,
        }
    }

    /// Whether the maximum number of values is unbounded.
    pub fn is_unbounded(&self) -> bool {
        self.max == u32::MAX
    }

    /// Whether the given number of values is within bounds.
    pub fn contains(&self, count: u32) -> bool {
        count >= self.min && count <= self.max
    }
}

impl Default for ValueMultiplicity {
    fn default() -> Self {
        ValueMultiplicity::ONE
    }
}

impl fmt::Display for ValueMultiplicity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.is_unbounded(), self.multiple) {
            (true, 1) => write!(f, "{}-n", self.min),
            (true, m) => write!(f, "{}-{}n", self.min, m),
            (false, _) if self.min == self.max => write!(f, "{}", self.min),
            (false, _) => write!(f, "{}-{}", self.min, self.max),
        }
    }
}

impl FromStr for ValueMultiplicity {
    type Err = ParseVmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ensure!(!s.is_empty(), EmptySnafu);

        let parse = |text: &str| text.parse::<u32>().context(InvalidBoundSnafu { text });

        let (min, max) = match s.split_once('-') {
            Some((min, max)) => (min, Some(max)),
            None => (s, None),
        };
        let min = parse(min)?;
        let vm = match max {
            None => ValueMultiplicity::exactly(min),
            Some(max) => match max.strip_suffix('n') {
                Some("") => ValueMultiplicity {
                    min,
                    max: u32::MAX,
                    multiple: 1,
                },
                Some(multiple) => ValueMultiplicity {
                    min,
                    max: u32::MAX,
                    multiple: parse(multiple)?,
                },
                None => {
                    let max = parse(max)?;
                    ensure!(max >= min, InvertedSnafu { min, max });
                    ValueMultiplicity::between(min, max)
                }
            },
        };
        Ok(vm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        for text in ["1", "1-3", "1-n", "2-2n", "3-3n", "0-1"] {
            let vm: ValueMultiplicity = text.parse().unwrap();
            assert_eq!(vm.to_string(), text);
        }
        let vm: ValueMultiplicity = "2-2n".parse().unwrap();
        assert_eq!(vm.min, 2);
        assert!(vm.is_unbounded());
        assert_eq!(vm.multiple, 2);
    }

    #[test]
    fn bounds() {
        let vm: ValueMultiplicity = "1-3".parse().unwrap();
        assert!(!vm.contains(0));
        assert!(vm.contains(1));
        assert!(vm.contains(3));
        assert!(!vm.contains(4));
        assert!(ValueMultiplicity::ONE_OR_MORE.contains(1000));
    }

    #[test]
    fn bad_multiplicity() {
        assert!(matches!(
            "".parse::<ValueMultiplicity>(),
            Err(ParseVmError::Empty { .. })
        ));
        assert!(matches!(
            "x-3".parse::<ValueMultiplicity>(),
            Err(ParseVmError::InvalidBound { .. })
        ));
        assert!(matches!(
            "3-1".parse::<ValueMultiplicity>(),
            Err(ParseVmError::Inverted { min: 3, max: 1, .. })
        ));
    }
}
