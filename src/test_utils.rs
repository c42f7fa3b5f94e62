//! Shared constructors for tests, panicking on invalid fixtures.

use crate::{BillingPeriod, CivilDate, ClosingDay, Month, Year};

pub fn year(value: u16) -> Year {
    Year::new(value).expect("test fixture year should be valid")
}

pub fn month(value: u8) -> Month {
    Month::new(value).expect("test fixture month should be valid")
}

pub fn civil(y: u16, m: u8, d: u8) -> CivilDate {
    CivilDate::new(y, m, d).expect("test fixture date should be valid")
}

pub fn period(y: u16, m: u8) -> BillingPeriod {
    BillingPeriod::new(year(y), month(m))
}

pub fn closing(value: i32) -> Option<ClosingDay> {
    ClosingDay::from_raw(Some(value))
}
