//! Days of the week.

/// A day of the week.
///
/// Indexed from Sunday (0) to Saturday (6), the order used by the locale
/// weekday tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Returns the weekday for an index in `0..7`, wrapping larger values.
    pub const fn from_sunday_index(index: u8) -> Weekday {
        Self::ALL[(index % 7) as usize]
    }

    /// Returns the weekday for an index in `0..7`, or `None` if out of range.
    pub fn try_from_sunday_index(index: u8) -> Option<Weekday> {
        Self::ALL.get(index as usize).copied()
    }

    /// Returns the index of this weekday, Sunday being 0.
    pub const fn to_sunday_index(self) -> u8 {
        self as u8
    }

    /// Number of days from `self` forward to `other` (0-6).
    pub const fn days_until(self, other: Weekday) -> u8 {
        (other as u8 + 7 - self as u8) % 7
    }

    /// The following day.
    pub const fn next(self) -> Weekday {
        Self::from_sunday_index(self as u8 + 1)
    }

    /// The preceding day.
    pub const fn previous(self) -> Weekday {
        Self::from_sunday_index(self as u8 + 6)
    }
}
