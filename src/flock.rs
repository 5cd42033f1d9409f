use chrono::NaiveDate;
use tracing::{debug, info};

use crate::{
    calendar::{next_day, BirthWindow},
    chicken::Chicken,
    currency,
    error::{FlockError, Result},
    rng::RandomSource,
};

/// Revenue per unfertilized egg, in euro cents.
pub const EGG_PRICE_CENTS: u64 = 25;

pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or(NaiveDate::MIN)
}

pub fn default_birth_window() -> BirthWindow {
    BirthWindow::new(2019, 6)
}

/// Statistics describing the final day of the latest `simulate` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct PeriodStats {
    produced_eggs: u64,
    fertilized_eggs: u64,
    /// (population index, produced count)
    top_producer: Option<(usize, u64)>,
    /// (population index, fertilized count)
    top_fertilizer: Option<(usize, u64)>,
}

impl PeriodStats {
    fn fold(&mut self, index: usize, chicken: &Chicken) {
        let produced = chicken.produced_eggs();
        let fertilized = chicken.fertilized_eggs();
        self.produced_eggs += produced;
        self.fertilized_eggs += fertilized;
        // a holder has to beat the zero baseline, so an idle day leaves both unset
        if produced > self.top_producer.map_or(0, |(_, best)| best) {
            self.top_producer = Some((index, produced));
        }
        if fertilized > self.top_fertilizer.map_or(0, |(_, best)| best) {
            self.top_fertilizer = Some((index, fertilized));
        }
    }
}

pub struct Flock<R> {
    chickens: Vec<Chicken>,
    today: NaiveDate,
    rng: R,
    stats: PeriodStats,
    total_new_born: u64,
}

impl<R: RandomSource> Flock<R> {
    pub fn new(initial: i64, rng: R) -> Result<Self> {
        Self::with_start_date(initial, default_start_date(), rng)
    }

    pub fn with_start_date(initial: i64, start: NaiveDate, mut rng: R) -> Result<Self> {
        let count = usize::try_from(initial).map_err(|_| {
            FlockError::InvalidArgument(format!(
                "initial chicken count must be non-negative, got {initial}"
            ))
        })?;
        let window = default_birth_window();
        let chickens = (0..count)
            .map(|_| Chicken::born_in(window, &mut rng))
            .collect();
        info!(chickens = count, start = %start, "flock created");
        Ok(Self {
            chickens,
            today: start,
            rng,
            stats: PeriodStats::default(),
            total_new_born: 0,
        })
    }

    /// Runs `days` full days. Period statistics are reset up front and then
    /// collected from the last day only; `simulate(0)` changes nothing.
    pub fn simulate(&mut self, days: u64) {
        if days == 0 {
            return;
        }
        self.stats = PeriodStats::default();
        for _ in 1..days {
            self.run_day(false);
        }
        self.run_day(true);
    }

    fn run_day(&mut self, collect: bool) {
        let today = self.today;
        let population_at_dawn = self.chickens.len();
        let mut hatched = 0;
        // Length is re-read every step: chicks hatched earlier today get their turn too.
        let mut index = 0;
        while index < self.chickens.len() {
            let chicken = &mut self.chickens[index];
            chicken.simulate_day(today, &mut self.rng);
            let newborns = chicken.new_chickens().to_vec();
            hatched += newborns.len();
            self.total_new_born += newborns.len() as u64;
            self.chickens.extend(newborns);
            if collect {
                self.stats.fold(index, &self.chickens[index]);
            }
            index += 1;
        }
        debug!(
            date = %today,
            population = population_at_dawn,
            hatched,
            "simulated day"
        );
        self.today = next_day(today);
    }

    pub fn total_produced_eggs(&self) -> u64 {
        self.stats.produced_eggs
    }

    pub fn total_fertilized_eggs(&self) -> u64 {
        self.stats.fertilized_eggs
    }

    pub fn max_produced_chicken(&self) -> Option<&Chicken> {
        self.stats
            .top_producer
            .and_then(|(index, _)| self.chickens.get(index))
    }

    pub fn max_fertilized_chicken(&self) -> Option<&Chicken> {
        self.stats
            .top_fertilizer
            .and_then(|(index, _)| self.chickens.get(index))
    }

    pub fn total_new_born_chickens(&self) -> u64 {
        self.total_new_born
    }

    /// Unfertilized eggs of the period times the egg price.
    pub fn revenue_cents(&self) -> u64 {
        self.stats
            .produced_eggs
            .saturating_sub(self.stats.fertilized_eggs)
            * EGG_PRICE_CENTS
    }

    pub fn revenue(&self) -> String {
        currency::format_euro_cents(self.revenue_cents() as i64)
    }

    pub fn chickens(&self) -> &[Chicken] {
        &self.chickens
    }

    pub fn len(&self) -> usize {
        self.chickens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chickens.is_empty()
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }
}
