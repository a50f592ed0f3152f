//! Digital root and the two core numbers derived from a birth date.
//!
//! Every derived number is an [`Ank`]: a single digit 1-9. A digit sum that
//! reduces to 0 is read as 9, so the arithmetic never leaves that range.

use sankhya_time::BirthDate;

/// A single numerology digit, always in 1..=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ank(u8);

/// All nine digits in ascending order.
pub const ALL_ANKS: [Ank; 9] = [
    Ank(1),
    Ank(2),
    Ank(3),
    Ank(4),
    Ank(5),
    Ank(6),
    Ank(7),
    Ank(8),
    Ank(9),
];

impl Ank {
    /// Wrap a value already known to be 1-9.
    pub const fn new(n: u8) -> Option<Self> {
        if n >= 1 && n <= 9 { Some(Self(n)) } else { None }
    }

    /// The digit value, 1-9.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// 0-based index for table lookups (1 → 0 .. 9 → 8).
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Cyclic successor: 9 wraps to 1.
    pub const fn successor(self) -> Self {
        Self(self.0 % 9 + 1)
    }
}

impl std::fmt::Display for Ank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Ank> for u8 {
    fn from(a: Ank) -> Self {
        a.0
    }
}

/// Reduce an integer to 1-9: absolute value mod 9, with 0 read as 9.
pub fn digital_root(n: i64) -> Ank {
    let r = (n.unsigned_abs() % 9) as u8;
    Ank(if r == 0 { 9 } else { r })
}

/// Sum of the base-10 digits of `|n|`.
pub fn sum_of_decimal_digits(n: i64) -> u64 {
    decimal_digits(n).map(u64::from).sum()
}

/// Base-10 digits of `|n|`, most significant first. `0` yields a single 0.
pub fn decimal_digits(n: i64) -> impl Iterator<Item = u8> {
    let mut v = n.unsigned_abs();
    let mut digits = Vec::with_capacity(20);
    loop {
        digits.push((v % 10) as u8);
        v /= 10;
        if v == 0 {
            break;
        }
    }
    digits.into_iter().rev()
}

/// Basic Number: digital root of the day of month.
pub fn basic_number(day: i32) -> Ank {
    digital_root(i64::from(day))
}

/// Destiny Number: digital root of every digit of day, month and full year.
pub fn destiny_number(day: i32, month: i32, year: i32) -> Ank {
    let total = sum_of_decimal_digits(i64::from(day))
        + sum_of_decimal_digits(i64::from(month))
        + sum_of_decimal_digits(i64::from(year));
    // Digit sums of three i32 values stay far below i64::MAX.
    digital_root(total as i64)
}

/// Lucky number: `(destiny + 1) mod 9`, with 0 read as 9.
pub fn lucky_number(destiny: Ank) -> Ank {
    digital_root(i64::from(destiny.get()) + 1)
}

/// Basic and Destiny numbers of one birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreNumbers {
    pub basic: Ank,
    pub destiny: Ank,
}

impl CoreNumbers {
    pub fn from_birth(birth: &BirthDate) -> Self {
        Self {
            basic: basic_number(birth.day),
            destiny: destiny_number(birth.day, birth.month, birth.year),
        }
    }

    /// Whether the person's core nature and life direction coincide.
    pub fn aligned(&self) -> bool {
        self.basic == self.destiny
    }
}
