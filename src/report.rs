use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    chicken::{Chicken, ChickenId},
    flock::Flock,
    rng::RandomSource,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChickenSummary {
    pub id: ChickenId,
    pub date_of_birth: NaiveDate,
    pub produced_eggs: u64,
    pub fertilized_eggs: u64,
}

impl From<&Chicken> for ChickenSummary {
    fn from(chicken: &Chicken) -> Self {
        Self {
            id: chicken.id().clone(),
            date_of_birth: chicken.date_of_birth(),
            produced_eggs: chicken.produced_eggs(),
            fertilized_eggs: chicken.fertilized_eggs(),
        }
    }
}

/// End-of-run figures, printable as text or serializable as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlockReport {
    pub days: u64,
    pub final_date: NaiveDate,
    pub population: usize,
    pub total_produced_eggs: u64,
    pub total_fertilized_eggs: u64,
    pub max_produced: Option<ChickenSummary>,
    pub max_fertilized: Option<ChickenSummary>,
    pub revenue_cents: u64,
    pub revenue: String,
    pub total_new_born_chickens: u64,
}

impl FlockReport {
    pub fn from_flock<R: RandomSource>(flock: &Flock<R>, days: u64) -> Self {
        Self {
            days,
            final_date: flock.today(),
            population: flock.len(),
            total_produced_eggs: flock.total_produced_eggs(),
            total_fertilized_eggs: flock.total_fertilized_eggs(),
            max_produced: flock.max_produced_chicken().map(ChickenSummary::from),
            max_fertilized: flock.max_fertilized_chicken().map(ChickenSummary::from),
            revenue_cents: flock.revenue_cents(),
            revenue: flock.revenue(),
            total_new_born_chickens: flock.total_new_born_chickens(),
        }
    }
}

impl fmt::Display for FlockReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total eggs produced: {}", self.total_produced_eggs)?;
        writeln!(f, "Total eggs fertilized: {}", self.total_fertilized_eggs)?;
        match &self.max_produced {
            Some(top) => writeln!(
                f,
                "Most eggs produced: chicken {} with {} eggs",
                top.id, top.produced_eggs
            )?,
            None => writeln!(f, "Most eggs produced: none")?,
        }
        match &self.max_fertilized {
            Some(top) => writeln!(
                f,
                "Most eggs fertilized: chicken {} with {} eggs",
                top.id, top.fertilized_eggs
            )?,
            None => writeln!(f, "Most eggs fertilized: none")?,
        }
        writeln!(f, "Total revenue: {}", self.revenue)?;
        write!(f, "Total newborn chickens: {}", self.total_new_born_chickens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRandom;

    #[test]
    fn empty_run_reports_absent_holders() {
        let flock = Flock::new(0, ScriptedRandom::constant(0)).unwrap();
        let report = FlockReport::from_flock(&flock, 0);

        assert_eq!(
            report.to_string(),
            "Total eggs produced: 0\n\
             Total eggs fertilized: 0\n\
             Most eggs produced: none\n\
             Most eggs fertilized: none\n\
             Total revenue: €\u{a0}0,00\n\
             Total newborn chickens: 0"
        );
    }

    #[test]
    fn fertilized_line_shows_fertilized_count() {
        let mut flock = Flock::new(1, ScriptedRandom::constant(99)).unwrap();
        flock.simulate(365);
        let report = FlockReport::from_flock(&flock, 365);

        let top = report.max_fertilized.as_ref().unwrap();
        let line = format!(
            "Most eggs fertilized: chicken {} with {} eggs",
            top.id, top.fertilized_eggs
        );
        assert!(report.to_string().contains(&line));
    }

    #[test]
    fn serializes_ids_as_strings() {
        let mut flock = Flock::new(2, ScriptedRandom::constant(3)).unwrap();
        flock.simulate(1);
        let json = serde_json::to_value(FlockReport::from_flock(&flock, 1)).unwrap();

        assert_eq!(json["max_produced"]["id"], "20190604-0003");
        assert_eq!(json["population"], 2);
    }
}
