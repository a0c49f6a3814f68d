//! Weekday sets for recurring time windows.

use std::fmt;

use chrono::Weekday;

/// The week in Sun..Sat order, matching the bit layout of [`DaySet`].
pub const WEEK: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// A set of active weekdays stored as a 7-bit mask (bit 0 = Sunday).
///
/// The mask representation makes the overlap test a single bitwise AND.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DaySet(u8);

impl DaySet {
    pub const fn empty() -> Self {
        Self(0)
    }

    /// All seven days.
    pub const fn full() -> Self {
        Self(0b0111_1111)
    }

    fn bit(day: Weekday) -> u8 {
        1u8 << day.num_days_from_sunday()
    }

    pub fn insert(&mut self, day: Weekday) {
        self.0 |= Self::bit(day);
    }

    /// Builder-style insert.
    pub fn with(mut self, day: Weekday) -> Self {
        self.insert(day);
        self
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & Self::bit(day) != 0
    }

    /// True when the two sets share at least one day.
    pub fn intersects(&self, other: DaySet) -> bool {
        self.0 & other.0 != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Days in Sun..Sat order.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> {
        let mask = *self;
        WEEK.into_iter().filter(move |day| mask.contains(*day))
    }
}

impl FromIterator<Weekday> for DaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = Self::empty();
        for day in iter {
            set.insert(day);
        }
        set
    }
}

pub(crate) fn short_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "Sun",
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
    }
}

impl fmt::Display for DaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for day in self.iter() {
            if !first {
                f.write_str(",")?;
            }
            f.write_str(short_name(day))?;
            first = false;
        }
        Ok(())
    }
}

impl fmt::Debug for DaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DaySet({self})")
    }
}

impl serde::Serialize for DaySet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(short_name))
    }
}

impl<'de> serde::Deserialize<'de> for DaySet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let names = Vec::<String>::deserialize(deserializer)?;
        let mut set = Self::empty();
        for name in &names {
            let day: Weekday = name
                .trim()
                .parse()
                .map_err(|_| serde::de::Error::custom(format!("invalid weekday: {name:?}")))?;
            set.insert(day);
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersects_requires_a_shared_day() {
        let mon_tue = DaySet::empty().with(Weekday::Mon).with(Weekday::Tue);
        let tue_wed = DaySet::empty().with(Weekday::Tue).with(Weekday::Wed);
        let wed = DaySet::empty().with(Weekday::Wed);
        assert!(mon_tue.intersects(tue_wed));
        assert!(!mon_tue.intersects(wed));
        assert!(!mon_tue.intersects(DaySet::empty()));
    }

    #[test]
    fn iterates_in_week_order() {
        let set: DaySet = [Weekday::Sat, Weekday::Sun, Weekday::Wed].into_iter().collect();
        let days: Vec<Weekday> = set.iter().collect();
        assert_eq!(days, vec![Weekday::Sun, Weekday::Wed, Weekday::Sat]);
        assert_eq!(set.to_string(), "Sun,Wed,Sat");
    }

    #[test]
    fn serde_round_trips_as_names() {
        let set = DaySet::empty().with(Weekday::Mon).with(Weekday::Fri);
        let json = serde_json::to_string(&set).expect("serialize");
        assert_eq!(json, r#"["Mon","Fri"]"#);
        let back: DaySet = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, set);
    }
}
