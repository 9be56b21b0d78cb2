//! Monetary amount formatting driven by a tenant's decimal-format pattern.
//!
//! Tenants store their currency presentation as a pattern string such as
//! `#,###,##0 XAF` or `$#,##0.00`. The supported grammar is the common subset
//! of decimal-format patterns:
//!
//! - literal prefix and suffix text, with `'...'` quoting (`''` is a quote);
//! - `#` and `0` integer digits, `,` grouping (the last group sets the size);
//! - an optional `.` followed by `0` (required) and `#` (optional) fraction
//!   digits;
//! - an optional `;negative` sub-pattern, which is ignored: negatives are the
//!   positive form with a leading `-`.
//!
//! Rounding is half-even, matching the platform's reference formatter.

use crate::error::{CoreError, CoreResult};

/// A parsed decimal-format pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonetaryFormat {
    prefix: String,
    suffix: String,
    /// Digits per group, `0` when the pattern has no grouping separator.
    grouping: usize,
    min_int: usize,
    min_frac: usize,
    max_frac: usize,
}

#[derive(Clone, Copy, PartialEq)]
enum Phase {
    Prefix,
    Number,
    Suffix,
}

impl MonetaryFormat {
    /// Parse a decimal-format pattern.
    pub fn parse(pattern: &str) -> CoreResult<Self> {
        let invalid = |reason: &str| CoreError::InvalidFormat(format!("{reason} in '{pattern}'"));

        let mut prefix = String::new();
        let mut number = String::new();
        let mut suffix = String::new();
        let mut phase = Phase::Prefix;
        let mut quoted = false;
        let mut chars = pattern.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '\'' {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    match phase {
                        Phase::Prefix => prefix.push('\''),
                        _ => {
                            phase = Phase::Suffix;
                            suffix.push('\'');
                        }
                    }
                } else {
                    quoted = !quoted;
                    if phase == Phase::Number {
                        phase = Phase::Suffix;
                    }
                }
                continue;
            }

            if quoted {
                match phase {
                    Phase::Prefix => prefix.push(c),
                    _ => suffix.push(c),
                }
                continue;
            }

            if c == ';' {
                break;
            }

            let special = matches!(c, '#' | '0' | ',' | '.');
            match phase {
                Phase::Prefix if special => {
                    phase = Phase::Number;
                    number.push(c);
                }
                Phase::Prefix => prefix.push(c),
                Phase::Number if special => number.push(c),
                Phase::Number => {
                    phase = Phase::Suffix;
                    suffix.push(c);
                }
                Phase::Suffix if special => {
                    return Err(invalid("digit pattern after suffix"));
                }
                Phase::Suffix => suffix.push(c),
            }
        }

        if quoted {
            return Err(invalid("unterminated quote"));
        }

        let (int_part, frac_part) = match number.split_once('.') {
            Some((_, frac)) if frac.contains('.') => {
                return Err(invalid("multiple decimal separators"));
            }
            Some((int, frac)) => (int, frac),
            None => (number.as_str(), ""),
        };

        if frac_part.contains(',') {
            return Err(invalid("grouping separator in fraction"));
        }
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid("no digit pattern"));
        }

        let grouping = match int_part.rfind(',') {
            Some(pos) => {
                let size = int_part.len() - pos - 1;
                if size == 0 {
                    return Err(invalid("empty grouping"));
                }
                size
            }
            None => 0,
        };

        Ok(Self {
            prefix,
            suffix,
            grouping,
            min_int: int_part.chars().filter(|c| *c == '0').count(),
            min_frac: frac_part.chars().filter(|c| *c == '0').count(),
            max_frac: frac_part.len(),
        })
    }

    /// Format `amount` according to the pattern.
    pub fn format(&self, amount: f64) -> String {
        if !amount.is_finite() {
            return format!("{}{amount}{}", self.prefix, self.suffix);
        }

        let scaled = round_half_even(amount.abs() * 10f64.powi(self.max_frac as i32));
        let mut digits = format!("{scaled:.0}");

        let (int_digits, frac_digits) = if self.max_frac > 0 {
            while digits.len() <= self.max_frac {
                digits.insert(0, '0');
            }
            let split = digits.len() - self.max_frac;
            let (int, frac) = digits.split_at(split);
            (int.to_string(), frac.to_string())
        } else {
            (digits, String::new())
        };

        let mut frac = frac_digits;
        while frac.len() > self.min_frac && frac.ends_with('0') {
            frac.pop();
        }

        let mut int = int_digits.trim_start_matches('0').to_string();
        while int.len() < self.min_int {
            int.insert(0, '0');
        }
        if int.is_empty() && frac.is_empty() {
            int.push('0');
        }

        let is_zero = int.chars().chain(frac.chars()).all(|c| c == '0');
        let sign = if amount < 0.0 && !is_zero { "-" } else { "" };

        let mut out = String::with_capacity(self.prefix.len() + int.len() + frac.len() + 8);
        out.push_str(sign);
        out.push_str(&self.prefix);
        out.push_str(&group(&int, self.grouping));
        if !frac.is_empty() {
            out.push('.');
            out.push_str(&frac);
        }
        out.push_str(&self.suffix);
        out
    }
}

fn round_half_even(x: f64) -> f64 {
    let floor = x.floor();
    let diff = x - floor;
    if diff > 0.5 {
        floor + 1.0
    } else if diff < 0.5 {
        floor
    } else if floor % 2.0 == 0.0 {
        floor
    } else {
        floor + 1.0
    }
}

fn group(int: &str, size: usize) -> String {
    if size == 0 || int.len() <= size {
        return int.to_string();
    }
    let mut out = String::with_capacity(int.len() + int.len() / size);
    let lead = int.len() % size;
    for (i, c) in int.chars().enumerate() {
        if i > 0 && (i + size - lead) % size == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
