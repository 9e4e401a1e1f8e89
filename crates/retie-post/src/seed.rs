//! Fixed seed posts for first run
//!
//! When the store holds no posts, the controller seeds these two entries and
//! persists them immediately so the next session loads real data instead of
//! reseeding.

use crate::clock::{format_ko_kr, Clock};
use crate::post::Post;

/// Title of the first seed post
pub const FIRST_SEED_TITLE: &str = "나의 첫 번째 글";

/// Title of the second seed post
pub const SECOND_SEED_TITLE: &str = "정원 가꾸기에서 얻는 교훈";

const FIRST_SEED_CONTENT: &str = "은퇴 후 새로운 삶을 시작하며, 이곳 'retie'에 저의 작은 생각들을 기록해보려 합니다. 앞으로 많은 분들과 소통하고 싶습니다.";

const SECOND_SEED_CONTENT: &str = "작은 텃밭을 가꾸기 시작했습니다. 씨앗이 싹트고 자라나는 모습을 보며, 삶의 새로운 활력과 인내의 가치를 배웁니다. 자연은 언제나 최고의 스승입니다.";

/// Build the two fixed seed posts
///
/// The first is dated today, the second yesterday, both formatted at seed
/// time. Insertion order is first-then-second, so a newest-first display
/// shows the second seed above the first.
#[must_use]
pub fn seed_posts(clock: &dyn Clock) -> Vec<Post> {
    let today = clock.today();
    let yesterday = today.pred_opt().unwrap_or(today);

    vec![
        Post {
            title: FIRST_SEED_TITLE.to_string(),
            content: FIRST_SEED_CONTENT.to_string(),
            date: format_ko_kr(today),
        },
        Post {
            title: SECOND_SEED_TITLE.to_string(),
            content: SECOND_SEED_CONTENT.to_string(),
            date: format_ko_kr(yesterday),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[derive(Debug)]
    struct TestClock(NaiveDate);

    impl Clock for TestClock {
        fn today(&self) -> NaiveDate {
            self.0
        }
    }

    #[test]
    fn seeds_are_exactly_two_in_fixed_order() {
        let clock = TestClock(NaiveDate::from_ymd_opt(2026, 8, 30).unwrap());
        let seeds = seed_posts(&clock);
        assert_eq!(seeds.len(), 2);
        assert_eq!(seeds[0].title, FIRST_SEED_TITLE);
        assert_eq!(seeds[1].title, SECOND_SEED_TITLE);
    }

    #[test]
    fn second_seed_is_dated_yesterday() {
        let clock = TestClock(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        let seeds = seed_posts(&clock);
        assert_eq!(seeds[0].date, "2026. 3. 1.");
        assert_eq!(seeds[1].date, "2026. 2. 28.");
    }

    #[test]
    fn seed_bodies_are_non_empty() {
        let clock = TestClock(NaiveDate::from_ymd_opt(2026, 8, 30).unwrap());
        for seed in seed_posts(&clock) {
            assert!(!seed.content.trim().is_empty());
        }
    }
}
