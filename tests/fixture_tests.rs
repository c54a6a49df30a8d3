use chrono::NaiveDate;
use match_day_notifier_lambda::date_key::DateKey;
use match_day_notifier_lambda::dispatcher::format_message;
use match_day_notifier_lambda::model::fixture::{extract_matches, MatchRecord, Side, UNKNOWN_TEAM, UNKNOWN_TIME};
use serde_json::json;

fn load_sample() -> serde_json::Value {
    let body = std::fs::read_to_string("tests/sample_response.json").expect("failed to read sample_response.json");
    serde_json::from_str(&body).expect("sample is valid json")
}

#[test]
fn extracts_only_consumed_fields_from_sample() {
    let matches = extract_matches(&load_sample()).expect("sample decodes");
    assert_eq!(matches.len(), 2);
    assert_eq!(
        matches[0],
        MatchRecord {
            home: Side::named("Manchester City"),
            away: Side::named("Newcastle United"),
            time: Some("15.01.2024 18:00".to_string()),
        }
    );
    assert_eq!(matches[1].home.display_name(), "Real Madrid");
}

#[test]
fn missing_or_odd_shapes_fall_back_to_empty() {
    let cases = [
        json!({}),
        json!({ "status": "success" }),
        json!({ "response": null }),
        json!({ "response": "unavailable" }),
        json!({ "response": {} }),
        json!({ "response": { "matches": null } }),
        json!({ "response": { "matches": [] } }),
        json!({ "response": { "matches": false } }),
        json!({ "response": { "matches": 0 } }),
        json!({ "response": { "matches": "" } }),
        json!([1, 2, 3]),
    ];
    for payload in cases {
        let matches = extract_matches(&payload).expect("fallback should not fail");
        assert!(matches.is_empty(), "payload was: {}", payload);
    }
}

#[test]
fn missing_time_renders_placeholder() {
    let payload = json!({ "response": { "matches": [
        { "home": { "name": "A" }, "away": { "name": "B" }, "time": "18:00" },
        { "home": { "name": "C" }, "away": { "name": "D" } }
    ] } });
    let matches = extract_matches(&payload).expect("one record without time still decodes");
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].display_time(), "18:00");
    assert_eq!(matches[1].time, None);
    assert_eq!(matches[1].display_time(), UNKNOWN_TIME);
}

#[test]
fn numeric_and_null_fields_are_rendered_as_text() {
    let payload = json!({ "response": { "matches": [
        { "home": { "name": null }, "away": { "name": 42 }, "time": 1800 },
        { "home": {}, "away": { "name": "B" }, "time": null }
    ] } });
    let matches = extract_matches(&payload).expect("lenient fields decode");

    assert_eq!(matches[0].home.display_name(), UNKNOWN_TEAM);
    assert_eq!(matches[0].away.display_name(), "42");
    assert_eq!(matches[0].display_time(), "1800");
    assert_eq!(matches[1].home.display_name(), UNKNOWN_TEAM);
    assert_eq!(matches[1].display_time(), UNKNOWN_TIME);

    let date = DateKey::from_date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    assert_eq!(
        format_message(&date, &matches),
        "Matches on 20240115:\nUnknown Team vs 42 at 1800\nUnknown Team vs B at TBD"
    );
}

#[test]
fn malformed_match_list_is_an_error() {
    let not_a_list = json!({ "response": { "matches": { "home": "x" } } });
    assert!(extract_matches(&not_a_list).is_err());

    let missing_away = json!({ "response": { "matches": [ { "home": { "name": "A" }, "time": "18:00" } ] } });
    assert!(extract_matches(&missing_away).is_err());

    let null_home = json!({ "response": { "matches": [ { "home": null, "away": { "name": "B" }, "time": "18:00" } ] } });
    assert!(extract_matches(&null_home).is_err());
}
