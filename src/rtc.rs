//! API for the RTC alarm
//!
//! The alarm wakes the device from sleep and from the EM4 modes. If the device has more than
//! one alarm, Alarm A is used.
//!
//! The alarm has a resolution of one second. The sub-second part of a [`DateTime`] is not
//! passed to the hardware and always reads back as zero.
use crate::{log, time::DateTime, Error};

/// RTC alarm interface of the platform
pub trait RtcAlarm {
    fn set_alarm(
        &mut self,
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<(), Error>;

    /// Currently configured alarm
    fn alarm(&mut self) -> DateTime;
}

/// RTC alarm driver
pub struct Rtc<R> {
    rtc: R,
}

impl<R: RtcAlarm> Rtc<R> {
    pub fn new(rtc: R) -> Self {
        Rtc { rtc }
    }

    pub fn free(self) -> R {
        self.rtc
    }

    /// Set the alarm time. The millisecond field of `time` is ignored
    pub fn set_alarm(&mut self, time: &DateTime) -> Result<(), Error> {
        log::debug!(
            "rtc alarm {}-{}-{} {}:{}:{}",
            time.year(),
            time.month(),
            time.day(),
            time.hour(),
            time.minute(),
            time.second()
        );
        self.rtc.set_alarm(
            time.year() as i32,
            time.month(),
            time.day(),
            time.hour(),
            time.minute(),
            time.second(),
        )
    }

    /// Get the time the alarm is set to
    pub fn alarm(&mut self) -> DateTime {
        self.rtc.alarm().truncate_subsec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock RTC storing the alarm fields as passed to the hardware
    #[derive(Default)]
    struct MockRtc {
        fields: Option<(i32, u8, u8, u8, u8, u8)>,
        sets: u32,
    }

    impl RtcAlarm for MockRtc {
        fn set_alarm(
            &mut self,
            year: i32,
            month: u8,
            day: u8,
            hour: u8,
            minute: u8,
            second: u8,
        ) -> Result<(), Error> {
            if year < 0 || year > u16::MAX as i32 {
                return Err(Error::InvalidArgument);
            }
            self.sets += 1;
            self.fields = Some((year, month, day, hour, minute, second));
            Ok(())
        }

        fn alarm(&mut self) -> DateTime {
            let (year, month, day, hour, minute, second) =
                self.fields.unwrap_or((2000, 1, 1, 0, 0, 0));
            DateTime::new(year as u16, month, day, hour, minute, second).unwrap()
        }
    }

    /// Backend which reports a sub-second part it should not have
    struct NoisyRtc;

    impl RtcAlarm for NoisyRtc {
        fn set_alarm(&mut self, _: i32, _: u8, _: u8, _: u8, _: u8, _: u8) -> Result<(), Error> {
            Ok(())
        }

        fn alarm(&mut self) -> DateTime {
            DateTime::new(2031, 7, 4, 6, 30, 15)
                .unwrap()
                .with_millisecond(999)
                .unwrap()
        }
    }

    #[test]
    fn test_alarm_roundtrip() {
        let mut rtc = Rtc::new(MockRtc::default());
        let time = DateTime::new(2025, 12, 31, 23, 59, 58)
            .unwrap()
            .with_millisecond(500)
            .unwrap();
        rtc.set_alarm(&time).unwrap();

        let read_back = rtc.alarm();
        assert_eq!(read_back, time.truncate_subsec());
        assert_eq!(read_back.millisecond(), 0);
        assert_eq!(rtc.free().fields, Some((2025, 12, 31, 23, 59, 58)));
    }

    #[test]
    fn test_subsec_zeroed_on_read() {
        let mut rtc = Rtc::new(NoisyRtc);
        let alarm = rtc.alarm();
        assert_eq!(alarm.millisecond(), 0);
        assert_eq!(alarm.second(), 15);
    }

    #[test]
    fn test_latest_alarm_wins() {
        let mut rtc = Rtc::new(MockRtc::default());
        rtc.set_alarm(&DateTime::new(2025, 1, 1, 0, 0, 0).unwrap())
            .unwrap();
        let second = DateTime::new(2025, 6, 15, 8, 45, 0).unwrap();
        rtc.set_alarm(&second).unwrap();
        assert_eq!(rtc.alarm(), second);
        assert_eq!(rtc.free().sets, 2);
    }
}
