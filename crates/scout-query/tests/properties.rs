//! Invariants of the filter engine and the aggregator over arbitrary rosters.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use scout_model::{Scout, ScoutId, Shift};
use scout_query::{RosterStats, ScoutFilter, Selection, newest_first};

fn shift_strategy() -> impl Strategy<Value = Option<Shift>> {
    prop_oneof![
        Just(None),
        Just(Some(Shift::Morning)),
        Just(Some(Shift::Afternoon)),
        Just(Some(Shift::Night)),
        Just(Some(Shift::Dawn)),
    ]
}

fn scout_strategy() -> impl Strategy<Value = Scout> {
    (
        prop::sample::select(vec!["LAB BICHEON", "LAB TOURO", "MYSTIC", "SNAKE"]),
        shift_strategy(),
        "[a-zA-Z]{1,8}",
        prop::sample::select(vec!["Alpha", "Beta", "alpha wolves", "Gamma"]),
        prop::sample::select(vec!["PT", "EN", "ES", "CN"]),
        prop::sample::select(vec!["", "tank", "Healer", "DPS"]),
        0i64..1_000_000,
    )
        .prop_map(|(location, shift, nickname, clan, language, role, secs)| Scout {
            id: ScoutId::generate(),
            location: location.to_string(),
            shift,
            nickname,
            power: String::new(),
            clan: clan.to_string(),
            language: language.to_string(),
            role: role.to_string(),
            created_at: Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap(),
        })
}

fn filter_strategy() -> impl Strategy<Value = ScoutFilter> {
    (
        prop::sample::select(vec!["", "alpha", "BETA", "wolves"]),
        prop::sample::select(vec!["all", "PT", "EN", "XX"]),
        prop::sample::select(vec!["all", "MYSTIC", "SNAKE"]),
        prop::sample::select(vec!["all", "Manhã", "Noite"]),
        prop::sample::select(vec!["", "tank", "heal"]),
        prop::sample::select(vec!["", "a", "lab", "zz"]),
    )
        .prop_map(|(clan, language, location, shift, role, search)| ScoutFilter {
            clan: clan.to_string(),
            language: Selection::from(language.to_string()),
            location: Selection::from(location.to_string()),
            shift: shift.parse().unwrap(),
            role: role.to_string(),
            search: search.to_string(),
        })
}

proptest! {
    #[test]
    fn filtered_is_ordered_subset(
        scouts in prop::collection::vec(scout_strategy(), 0..40),
        filter in filter_strategy(),
    ) {
        let filtered = filter.apply(&scouts);
        prop_assert!(filtered.len() <= scouts.len());
        let mut cursor = scouts.iter();
        for kept in filtered {
            prop_assert!(cursor.any(|s| std::ptr::eq(s, kept)));
        }
    }

    #[test]
    fn pass_through_filter_keeps_everything(
        scouts in prop::collection::vec(scout_strategy(), 0..40),
    ) {
        prop_assert_eq!(ScoutFilter::default().apply(&scouts).len(), scouts.len());
    }

    #[test]
    fn single_criterion_filters_agree_with_conjunction(
        scouts in prop::collection::vec(scout_strategy(), 0..40),
        filter in filter_strategy(),
    ) {
        let parts = [
            ScoutFilter { clan: filter.clan.clone(), ..ScoutFilter::default() },
            ScoutFilter { language: filter.language.clone(), ..ScoutFilter::default() },
            ScoutFilter { location: filter.location.clone(), ..ScoutFilter::default() },
            ScoutFilter { shift: filter.shift.clone(), ..ScoutFilter::default() },
            ScoutFilter { role: filter.role.clone(), ..ScoutFilter::default() },
            ScoutFilter { search: filter.search.clone(), ..ScoutFilter::default() },
        ];
        for scout in &scouts {
            let all_parts = parts.iter().all(|part| part.matches(scout));
            prop_assert_eq!(filter.matches(scout), all_parts);
        }
    }

    #[test]
    fn breakdown_sums(scouts in prop::collection::vec(scout_strategy(), 0..40)) {
        let stats = RosterStats::from_records(&scouts);
        prop_assert_eq!(stats.total, scouts.len());
        prop_assert_eq!(stats.by_language.values().sum::<usize>(), stats.total);
        prop_assert!(stats.by_shift.values().sum::<usize>() <= stats.total);
        for count in stats.by_language.values() {
            let share = stats.share(*count);
            prop_assert!((0.0..=1.0).contains(&share));
        }
    }

    #[test]
    fn timeline_is_sorted_descending(scouts in prop::collection::vec(scout_strategy(), 0..40)) {
        let ordered = newest_first(&scouts);
        prop_assert_eq!(ordered.len(), scouts.len());
        for pair in ordered.windows(2) {
            prop_assert!(pair[0].created_at >= pair[1].created_at);
        }
    }
}

#[test]
fn stats_snapshot() {
    let at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let make = |language: &str, shift: Option<Shift>, clan: &str, location: &str| Scout {
        id: ScoutId::generate(),
        location: location.to_string(),
        shift,
        nickname: "n".to_string(),
        power: String::new(),
        clan: clan.to_string(),
        language: language.to_string(),
        role: String::new(),
        created_at: at,
    };
    let scouts = vec![
        make("PT", Some(Shift::Afternoon), "Alpha", "LAB BICHEON"),
        make("PT", None, "Alpha", "MYSTIC"),
        make("EN", Some(Shift::Night), "Beta", "MYSTIC"),
    ];
    let stats = RosterStats::from_records(&scouts);
    insta::assert_json_snapshot!(stats, @r###"
    {
      "total": 3,
      "by_language": {
        "PT": 2,
        "EN": 1
      },
      "by_shift": {
        "Tarde": 1,
        "Noite": 1
      },
      "distinct_clans": 2,
      "distinct_locations": 2
    }
    "###);
}
