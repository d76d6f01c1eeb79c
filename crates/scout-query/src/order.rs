//! Timeline ordering.

use scout_model::Scout;

/// Records by creation time, newest first. Ties keep their input order.
pub fn newest_first<'a, I>(scouts: I) -> Vec<&'a Scout>
where
    I: IntoIterator<Item = &'a Scout>,
{
    let mut ordered: Vec<&Scout> = scouts.into_iter().collect();
    ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use scout_model::ScoutId;

    fn at(nickname: &str, hour: u32) -> Scout {
        Scout {
            id: ScoutId::generate(),
            location: "MYSTIC".to_string(),
            shift: None,
            nickname: nickname.to_string(),
            power: String::new(),
            clan: "Alpha".to_string(),
            language: "PT".to_string(),
            role: String::new(),
            created_at: Utc.with_ymd_and_hms(2025, 2, 10, hour, 0, 0).unwrap(),
        }
    }

    #[test]
    fn newest_first_with_stable_ties() {
        let scouts = vec![at("early", 8), at("late-a", 20), at("mid", 12), at("late-b", 20)];
        let names: Vec<&str> = newest_first(&scouts)
            .into_iter()
            .map(|s| s.nickname.as_str())
            .collect();
        assert_eq!(names, ["late-a", "late-b", "mid", "early"]);
    }

    #[test]
    fn accepts_filtered_views() {
        let scouts = vec![at("a", 1), at("b", 2)];
        let filtered: Vec<&Scout> = scouts.iter().filter(|s| s.nickname == "a").collect();
        assert_eq!(newest_first(filtered).len(), 1);
    }
}
