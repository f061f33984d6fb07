//! Calendar time
//!
//! [`DateTime`] is the timestamp type used by the [RTC alarm](crate::rtc). The fields are
//! validated on construction, including leap years.
use crate::Error;

/// Calendar date and time of day
#[derive(Debug, Eq, Copy, Clone, PartialEq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateTime {
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    millisecond: u16,
}

#[inline]
pub const fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days of a month, `month` is in the range 1 to 12
pub const fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

impl DateTime {
    /// 1970-01-01 00:00:00
    pub const EPOCH: DateTime = DateTime {
        year: 1970,
        month: 1,
        day: 1,
        hour: 0,
        minute: 0,
        second: 0,
        millisecond: 0,
    };

    /// Create a new timestamp with a millisecond field of zero
    ///
    /// Returns [`Error::InvalidArgument`] if one of the fields is out of range
    pub const fn new(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, Error> {
        if month == 0 || month > 12 {
            return Err(Error::InvalidArgument);
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(Error::InvalidArgument);
        }
        if hour > 23 || minute > 59 || second > 59 {
            return Err(Error::InvalidArgument);
        }
        Ok(DateTime {
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond: 0,
        })
    }

    /// Like [`DateTime::new`], for a signed year as passed over the firmware interface
    ///
    /// Returns [`Error::InvalidArgument`] for negative years or years beyond `u16::MAX`
    pub fn from_fields(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, Error> {
        let year = u16::try_from(year).map_err(|_| Error::InvalidArgument)?;
        Self::new(year, month, day, hour, minute, second)
    }

    /// Returns [`Error::InvalidArgument`] if `millisecond` is larger than 999
    pub const fn with_millisecond(mut self, millisecond: u16) -> Result<Self, Error> {
        if millisecond > 999 {
            return Err(Error::InvalidArgument);
        }
        self.millisecond = millisecond;
        Ok(self)
    }

    /// Drop the sub-second part
    pub const fn truncate_subsec(mut self) -> Self {
        self.millisecond = 0;
        self
    }

    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    #[inline]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    #[inline]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    #[inline]
    pub const fn second(&self) -> u8 {
        self.second
    }

    #[inline]
    pub const fn millisecond(&self) -> u16 {
        self.millisecond
    }
}
