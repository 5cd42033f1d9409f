use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use henhouse::{rng::seeded_rng, Chicken};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn under_four_months_nothing_happens(seed in any::<u64>(), days in 0i64..120) {
        let mut rng = seeded_rng(Some(seed));
        let born = date(2020, 1, 1);
        let mut chicken = Chicken::new(born, &mut rng);

        for offset in 0..=days {
            chicken.simulate_day(born + Duration::days(offset), &mut rng);
        }

        prop_assert_eq!(chicken.produced_eggs(), 0);
        prop_assert_eq!(chicken.fertilized_eggs(), 0);
        prop_assert!(chicken.new_chickens().is_empty());
    }

    #[test]
    fn pullets_never_fertilize(seed in any::<u64>()) {
        let mut rng = seeded_rng(Some(seed));
        let born = date(2020, 1, 1);
        let mut chicken = Chicken::new(born, &mut rng);

        // 1 May to 31 August: four to seven whole months old
        let mut today = date(2020, 5, 1);
        while today < date(2020, 9, 1) {
            let outcome = chicken.simulate_day(today, &mut rng);
            prop_assert!(outcome.laid < 3);
            prop_assert_eq!(outcome.fertilized, 0);
            prop_assert!(chicken.new_chickens().is_empty());
            today = today + Duration::days(1);
        }
        prop_assert_eq!(chicken.fertilized_eggs(), 0);
    }

    #[test]
    fn hens_hatch_what_they_fertilize(seed in any::<u64>()) {
        let mut rng = seeded_rng(Some(seed));
        let born = date(2019, 1, 1);
        let mut chicken = Chicken::new(born, &mut rng);

        let mut today = date(2020, 1, 1);
        for _ in 0..60 {
            let before = chicken.fertilized_eggs();
            let outcome = chicken.simulate_day(today, &mut rng);
            prop_assert!(outcome.fertilized <= outcome.laid);
            prop_assert_eq!(chicken.fertilized_eggs() - before, outcome.fertilized as u64);
            prop_assert_eq!(chicken.new_chickens().len(), outcome.fertilized as usize);
            prop_assert!(chicken.new_chickens().iter().all(|c| c.date_of_birth() == today));
            today = today + Duration::days(1);
        }
        prop_assert!(chicken.fertilized_eggs() <= chicken.produced_eggs());
    }
}

#[test]
fn id_is_stable() {
    let mut rng = seeded_rng(Some(11));
    let mut chicken = Chicken::new(date(2019, 1, 1), &mut rng);
    let id = chicken.id().clone();

    chicken.simulate_day(date(2020, 1, 1), &mut rng);

    assert_eq!(chicken.id(), &id);
    assert!(id.to_string().starts_with("20190101-"));
}
