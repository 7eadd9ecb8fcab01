//! Golden checks against the real solar provider and known almanac windows.

use chrono::{DateTime, NaiveDate, TimeZone, Timelike, Utc};
use chrono_tz::Asia::Kolkata;
use nazhika_astro::AyanamsaModel;
use nazhika_calendar::{find_sankranti, vedic_time};
use nazhika_solar::{GeoCoordinate, MeeusSolar};

fn chennai() -> GeoCoordinate {
    GeoCoordinate::new(13.0827, 80.2707).unwrap()
}

#[test]
fn mesha_sankranti_2026_is_mid_april() {
    let end = Utc.with_ymd_and_hms(2026, 4, 25, 0, 0, 0).unwrap();
    let sankranti = find_sankranti(0.0, end, AyanamsaModel::Linear).unwrap();
    let day = sankranti.with_timezone(&Kolkata).date_naive();
    assert!(
        (NaiveDate::from_ymd_opt(2026, 4, 12).unwrap()
            ..=NaiveDate::from_ymd_opt(2026, 4, 16).unwrap())
            .contains(&day),
        "mesha sankranti on {day}"
    );
}

#[test]
fn thai_sankranti_2026_is_mid_january() {
    let end = Utc.with_ymd_and_hms(2026, 1, 31, 0, 0, 0).unwrap();
    let sankranti = find_sankranti(270.0, end, AyanamsaModel::Linear).unwrap();
    let day = sankranti.with_timezone(&Kolkata).date_naive();
    assert!(
        (NaiveDate::from_ymd_opt(2026, 1, 12).unwrap()
            ..=NaiveDate::from_ymd_opt(2026, 1, 17).unwrap())
            .contains(&day),
        "thai sankranti on {day}"
    );
}

#[test]
fn twelve_ingresses_are_roughly_a_month_apart() {
    let mut previous: Option<DateTime<Utc>> = None;
    for k in 0..12 {
        let target = f64::from(k % 12) * 30.0;
        // Walk the year: each search window ends a month after the last hit
        let window_end = match previous {
            None => Utc.with_ymd_and_hms(2026, 4, 25, 0, 0, 0).unwrap(),
            Some(p) => p + chrono::Duration::days(33),
        };
        let hit = find_sankranti(target, window_end, AyanamsaModel::Linear).unwrap();
        if let Some(p) = previous {
            let gap = (hit - p).num_days();
            assert!((27..=33).contains(&gap), "ingress gap {gap} days at {target} deg");
        }
        previous = Some(hit);
    }
}

#[test]
fn real_provider_vedic_time_at_chennai_noon() {
    // Noon sits ~5.5 h after a ~06:35 sunrise: expect nazhigai in the low teens
    let t = Kolkata.with_ymd_and_hms(2026, 2, 2, 12, 0, 0).unwrap().to_utc();
    let vt = vedic_time(t, chennai(), &MeeusSolar, Kolkata);
    assert!(vt.is_daytime);
    assert!((12..=14).contains(&vt.nazhigai), "nazhigai = {}", vt.nazhigai);
    let rise_local = vt.sunrise.with_timezone(&Kolkata);
    assert_eq!(rise_local.hour(), 6);
}
