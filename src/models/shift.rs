use crate::errors::{AppError, AppResult};
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Production shift slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shift {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Shift {
    /// Canonical order, used for every rendering and export.
    pub const ALL: [Shift; 6] = [Shift::A, Shift::B, Shift::C, Shift::D, Shift::E, Shift::F];

    pub fn code(&self) -> &'static str {
        match self {
            Shift::A => "A",
            Shift::B => "B",
            Shift::C => "C",
            Shift::D => "D",
            Shift::E => "E",
            Shift::F => "F",
        }
    }

    /// Helper: convert input code from CLI or data files (lowercase or uppercase)
    pub fn from_code(code: &str) -> AppResult<Self> {
        match code.trim().to_uppercase().as_str() {
            "A" => Ok(Shift::A),
            "B" => Ok(Shift::B),
            "C" => Ok(Shift::C),
            "D" => Ok(Shift::D),
            "E" => Ok(Shift::E),
            "F" => Ok(Shift::F),
            _ => Err(AppError::UnknownShift(code.to_string())),
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Shift {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Shift {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Shift::from_code(&raw).map_err(de::Error::custom)
    }
}

/// Per-record schedule: one flag per shift, stored by slot rather than by key
/// so iteration is always A..F.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShiftSchedule {
    slots: [bool; 6],
}

impl ShiftSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_flags(flags: [bool; 6]) -> Self {
        Self { slots: flags }
    }

    /// Builder-style helper used by seed data and tests.
    pub fn with(mut self, shift: Shift, scheduled: bool) -> Self {
        self.set(shift, scheduled);
        self
    }

    pub fn set(&mut self, shift: Shift, scheduled: bool) {
        self.slots[shift.index()] = scheduled;
    }

    pub fn get(&self, shift: Shift) -> bool {
        self.slots[shift.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Shift, bool)> + '_ {
        Shift::ALL.into_iter().map(move |s| (s, self.get(s)))
    }

    pub fn scheduled_shifts(&self) -> Vec<Shift> {
        self.iter().filter(|(_, on)| *on).map(|(s, _)| s).collect()
    }
}

impl Serialize for ShiftSchedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Shift::ALL.len()))?;
        for (shift, on) in self.iter() {
            map.serialize_entry(shift.code(), &on)?;
        }
        map.end()
    }
}

struct ScheduleVisitor;

impl<'de> Visitor<'de> for ScheduleVisitor {
    type Value = ShiftSchedule;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object mapping shift symbols A-F to booleans")
    }

    // keys are the exact upper-case codes, each at most once
    fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Self::Value, M::Error> {
        const CODES: &[&str] = &["A", "B", "C", "D", "E", "F"];

        let mut schedule = ShiftSchedule::new();
        let mut seen = [false; 6];
        while let Some((key, value)) = access.next_entry::<String, bool>()? {
            let shift = Shift::ALL
                .into_iter()
                .find(|s| s.code() == key)
                .ok_or_else(|| de::Error::unknown_field(&key, CODES))?;
            let slot = shift.index();
            if seen[slot] {
                return Err(de::Error::duplicate_field(shift.code()));
            }
            seen[slot] = true;
            schedule.set(shift, value);
        }
        Ok(schedule)
    }
}

impl<'de> Deserialize<'de> for ShiftSchedule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ScheduleVisitor)
    }
}
