use chrono::{Duration, NaiveDate, TimeZone, Utc};

use gameweek_threads::calendar::{generate_game_weeks, resolve_current_week, WEEKS_PER_SEASON};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn generates_eighteen_weeks_shifted_by_seven_days() {
    let weeks = generate_game_weeks(date(2021, 9, 9), date(2021, 9, 14));

    assert_eq!(weeks.len(), WEEKS_PER_SEASON as usize);
    assert_eq!(weeks.keys().copied().collect::<Vec<_>>(), (1..=18).collect::<Vec<_>>());
    assert_eq!(weeks[&1].first_day, date(2021, 9, 9));
    assert_eq!(weeks[&1].last_day, date(2021, 9, 14));
    for n in 2..=18 {
        assert_eq!(weeks[&n].week_number, n);
        assert_eq!(weeks[&n].first_day - weeks[&(n - 1)].first_day, Duration::days(7));
        assert_eq!(weeks[&n].last_day - weeks[&(n - 1)].last_day, Duration::days(7));
    }
    assert_eq!(weeks[&18].first_day, date(2022, 1, 6));
    assert_eq!(weeks[&18].last_day, date(2022, 1, 11));
}

#[test]
fn seven_day_anchors_give_contiguous_weeks() {
    let weeks = generate_game_weeks(date(2021, 10, 19), date(2021, 10, 26));

    for n in 1..=18 {
        let w = weeks[&n];
        assert_eq!(w.last_day - w.first_day, Duration::days(7));
        if n > 1 {
            // Each week starts where the previous one ends: no gap, no overlap.
            assert_eq!(weeks[&(n - 1)].last_day, w.first_day);
        }
    }
}

#[test]
fn resolves_first_week_ending_after_today() {
    let weeks = generate_game_weeks(date(2021, 9, 9), date(2021, 9, 14));

    assert_eq!(resolve_current_week(&weeks, date(2021, 9, 9)).unwrap().week_number, 1);
    assert_eq!(resolve_current_week(&weeks, date(2021, 9, 13)).unwrap().week_number, 1);
    // The last day itself already belongs to the next week.
    assert_eq!(resolve_current_week(&weeks, date(2021, 9, 14)).unwrap().week_number, 2);
    assert_eq!(resolve_current_week(&weeks, date(2021, 9, 23)).unwrap().week_number, 3);
    assert_eq!(resolve_current_week(&weeks, date(2022, 1, 10)).unwrap().week_number, 18);
}

#[test]
fn day_before_season_resolves_to_week_one() {
    let weeks = generate_game_weeks(date(2021, 9, 9), date(2021, 9, 14));
    let week = resolve_current_week(&weeks, date(2021, 9, 8)).unwrap();
    assert_eq!(week.week_number, 1);
    assert!(date(2021, 9, 8) < week.first_day);
}

#[test]
fn resolution_is_repeatable() {
    let weeks = generate_game_weeks(date(2021, 9, 9), date(2021, 9, 14));
    let today = date(2021, 11, 2);
    assert_eq!(resolve_current_week(&weeks, today), resolve_current_week(&weeks, today));
}

#[test]
fn no_week_after_season_end() {
    let weeks = generate_game_weeks(date(2021, 9, 9), date(2021, 9, 14));
    assert!(resolve_current_week(&weeks, date(2022, 1, 11)).is_none());
    assert!(resolve_current_week(&weeks, date(2022, 3, 1)).is_none());
}

#[test]
fn thread_name_omits_end_month_within_same_month() {
    let weeks = generate_game_weeks(date(2021, 9, 9), date(2021, 9, 14));

    assert_eq!(weeks[&1].thread_name("NFL"), "NFL Game Week 1 (Sep  9 - 14)");
    assert_eq!(weeks[&3].thread_name("NFL"), "NFL Game Week 3 (Sep 23 - 28)");
}

#[test]
fn thread_name_spells_end_month_across_months() {
    let weeks = generate_game_weeks(date(2021, 9, 9), date(2021, 9, 14));

    assert_eq!(weeks[&4].thread_name("NFL"), "NFL Game Week 4 (Sep 30 - Oct  5)");
    assert_eq!(weeks[&17].thread_name("NFL"), "NFL Game Week 17 (Dec 30 - Jan  4)");
}

#[test]
fn thread_name_is_stable_for_a_week() {
    let a = generate_game_weeks(date(2021, 9, 9), date(2021, 9, 14));
    let b = generate_game_weeks(date(2021, 9, 9), date(2021, 9, 14));
    assert_eq!(a[&7].thread_name("NBA"), b[&7].thread_name("NBA"));
}

#[test]
fn time_in_week_excludes_both_bounds() {
    let weeks = generate_game_weeks(date(2021, 9, 9), date(2021, 9, 14));
    let week = weeks[&1];

    assert!(!week.time_in_week(Utc.with_ymd_and_hms(2021, 9, 9, 0, 0, 0).unwrap()));
    assert!(week.time_in_week(Utc.with_ymd_and_hms(2021, 9, 9, 0, 0, 1).unwrap()));
    assert!(week.time_in_week(Utc.with_ymd_and_hms(2021, 9, 13, 23, 59, 59).unwrap()));
    assert!(!week.time_in_week(Utc.with_ymd_and_hms(2021, 9, 14, 0, 0, 0).unwrap()));
}
