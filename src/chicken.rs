use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    calendar::{months_between, BirthWindow},
    rng::RandomSource,
};

/// Youngest age, in whole months, at which a hen lays.
pub const LAYING_AGE_MONTHS: i32 = 4;
/// Youngest age, in whole months, at which laid eggs can be fertilized.
pub const FERTILE_AGE_MONTHS: i32 = 8;
/// Eggs per day are drawn from `0..MAX_EGGS_PER_DAY`.
pub const MAX_EGGS_PER_DAY: u32 = 3;
/// A roll in `0..100` strictly above this fertilizes the egg.
pub const FERTILIZATION_THRESHOLD: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct ChickenId {
    born: NaiveDate,
    tag: u16,
}

impl ChickenId {
    fn draw(born: NaiveDate, rng: &mut impl RandomSource) -> Self {
        let tag = rng.below(u16::MAX as u32 + 1) as u16;
        Self { born, tag }
    }
}

impl fmt::Display for ChickenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:04x}", self.born.format("%Y%m%d"), self.tag)
    }
}

impl From<ChickenId> for String {
    fn from(value: ChickenId) -> Self {
        value.to_string()
    }
}

/// What one chicken did during one simulated day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayOutcome {
    pub laid: u32,
    pub fertilized: u32,
}

#[derive(Debug, Clone)]
pub struct Chicken {
    id: ChickenId,
    date_of_birth: NaiveDate,
    produced_eggs: u64,
    fertilized_eggs: u64,
    new_chickens: Vec<Chicken>,
}

impl Chicken {
    pub fn new(date_of_birth: NaiveDate, rng: &mut impl RandomSource) -> Self {
        Self {
            id: ChickenId::draw(date_of_birth, rng),
            date_of_birth,
            produced_eggs: 0,
            fertilized_eggs: 0,
            new_chickens: Vec::new(),
        }
    }

    /// A chicken born on a random day of `window`.
    pub fn born_in(window: BirthWindow, rng: &mut impl RandomSource) -> Self {
        let date_of_birth = window.draw(rng);
        Self::new(date_of_birth, rng)
    }

    /// Advances this chicken by one day.
    ///
    /// Draw order: the egg count, then for each egg its fertilization roll
    /// followed by the hatchling's id tag when the roll succeeds.
    pub fn simulate_day(&mut self, today: NaiveDate, rng: &mut impl RandomSource) -> DayOutcome {
        let age = self.age_in_months(today);
        if age < LAYING_AGE_MONTHS {
            return DayOutcome::default();
        }

        self.new_chickens.clear();
        let laid = rng.below(MAX_EGGS_PER_DAY);
        self.produced_eggs += laid as u64;

        if age < FERTILE_AGE_MONTHS {
            return DayOutcome {
                laid,
                fertilized: 0,
            };
        }

        let mut fertilized = 0;
        for _ in 0..laid {
            if rng.below(100) > FERTILIZATION_THRESHOLD {
                fertilized += 1;
                self.fertilized_eggs += 1;
                self.new_chickens.push(Chicken::new(today, rng));
            }
        }
        DayOutcome { laid, fertilized }
    }

    pub fn age_in_months(&self, today: NaiveDate) -> i32 {
        months_between(self.date_of_birth, today)
    }

    /// Hatchlings from the most recent [`Chicken::simulate_day`].
    pub fn new_chickens(&self) -> &[Chicken] {
        &self.new_chickens
    }

    pub fn produced_eggs(&self) -> u64 {
        self.produced_eggs
    }

    pub fn fertilized_eggs(&self) -> u64 {
        self.fertilized_eggs
    }

    pub fn id(&self) -> &ChickenId {
        &self.id
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }
}
