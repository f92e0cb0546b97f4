use chrono::{DateTime, TimeZone, Timelike};

/// Colour scheme of the corner clock. Clicking the clock flips it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ClockTheme {
    #[default]
    Dark,
    Light,
}

impl ClockTheme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn style(self) -> &'static str {
        match self {
            Self::Dark => "background-color: #000000; color: #ffffff; border: none",
            Self::Light => "background-color: #ffffff; color: #000000; border: 1px solid #cccccc",
        }
    }
}

/// Zero-padded 12 hour time, `hh:mm:ss`. Midnight and noon read as 12.
pub fn format_time<Tz: TimeZone>(t: &DateTime<Tz>) -> String {
    let (_, hour) = t.hour12();
    format!("{hour:02}:{:02}:{:02}", t.minute(), t.second())
}

pub fn meridiem<Tz: TimeZone>(t: &DateTime<Tz>) -> &'static str {
    if t.hour12().0 {
        "PM"
    } else {
        "AM"
    }
}

/// `dd/mm/yy`
pub fn format_date<Tz: TimeZone>(t: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    t.format("%d/%m/%y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, h, m, s).unwrap()
    }

    #[test]
    fn test_time_is_zero_padded_twelve_hour() {
        assert_eq!(format_time(&at(0, 5, 9)), "12:05:09");
        assert_eq!(format_time(&at(12, 0, 0)), "12:00:00");
        assert_eq!(format_time(&at(15, 30, 1)), "03:30:01");
        assert_eq!(format_time(&at(9, 7, 0)), "09:07:00");
        assert_eq!(format_time(&at(23, 59, 59)), "11:59:59");
    }

    #[test]
    fn test_meridiem() {
        assert_eq!(meridiem(&at(0, 0, 0)), "AM");
        assert_eq!(meridiem(&at(11, 59, 59)), "AM");
        assert_eq!(meridiem(&at(12, 0, 0)), "PM");
        assert_eq!(meridiem(&at(23, 0, 0)), "PM");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&at(10, 0, 0)), "09/03/24");
        let new_year = Utc.with_ymd_and_hms(2031, 12, 31, 0, 0, 0).unwrap();
        assert_eq!(format_date(&new_year), "31/12/31");
    }

    #[test]
    fn test_click_toggles_theme() {
        let theme = ClockTheme::default();
        assert_eq!(theme, ClockTheme::Dark);
        assert_eq!(theme.toggled(), ClockTheme::Light);
        assert_eq!(theme.toggled().toggled(), ClockTheme::Dark);
        assert!(ClockTheme::Light.style().contains("#ffffff"));
    }
}
