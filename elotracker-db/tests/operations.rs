use elotracker_core::{
    Event, EventRating, Federation, Member, MemberNewRating, MemberSupplementRating,
    MemberWinLoss, RatingAtPeriod, RatingCategory, WinLoss,
};
use elotracker_db::*;

fn test_member() -> Member {
    Member {
        id: "1503014".to_string(),
        name: "Magnus Carlsen".to_string(),
        country: "no".to_string(),
        gender: "M".to_string(),
        birthday: "1990".to_string(),
        fide_title: "Grandmaster".to_string(),
        regular_rating: "2830".to_string(),
        ..Default::default()
    }
}

#[test]
fn missing_key_is_none() {
    let part = Partition::open_memory(FIDE_MEMBERS).unwrap();
    assert_eq!(part.get("12345678").unwrap(), None);
    assert!(load_member(&part, "12345678").unwrap().is_none());
    assert!(load_supplement(&part, "12345678").unwrap().is_none());
}

#[test]
fn put_overwrites_value() {
    let part = Partition::open_memory("raw").unwrap();
    part.put("k", b"one").unwrap();
    part.put("k", b"two").unwrap();
    assert_eq!(part.get("k").unwrap().as_deref(), Some(&b"two"[..]));
    assert_eq!(part.entry_count().unwrap(), 1);
}

#[test]
fn store_and_load_member() {
    let part = Partition::open_memory(FIDE_MEMBERS).unwrap();
    let member = test_member();
    store_member(&part, &member).unwrap();

    let loaded = load_member(&part, "1503014").unwrap().unwrap();
    assert_eq!(loaded, member);
}

#[test]
fn store_and_load_supplement() {
    let part = Partition::open_memory(FIDE_MEMBER_SUPPLEMENT).unwrap();
    let mut history = MemberSupplementRating::new("1503014");
    history.merge_period(
        "202403",
        &RatingAtPeriod::new().with(RatingCategory::Regular, "2830"),
    );
    store_supplement(&part, &history).unwrap();

    let loaded = load_supplement(&part, "1503014").unwrap().unwrap();
    assert_eq!(loaded, history);
}

#[test]
fn event_records_round_trip_by_key() {
    let events = Partition::open_memory(USCF_EVENTS).unwrap();
    let new_ratings = Partition::open_memory(USCF_MEMBER_NEW_RATING).unwrap();
    let win_loss = Partition::open_memory(USCF_MEMBER_WIN_LOSS).unwrap();

    let event = Event {
        id: "202401070012".to_string(),
        name: "Winter Open".to_string(),
        date: "2024-01-07".to_string(),
        ..Default::default()
    };
    store_event(&events, &event).unwrap();
    assert_eq!(load_event(&events, "202401070012").unwrap(), Some(event));

    let mut ratings = MemberNewRating {
        member_id: "12345678".to_string(),
        ..Default::default()
    };
    ratings.upsert(EventRating {
        event_id: "202401070012".to_string(),
        section: "1".to_string(),
        rating_type: "R".to_string(),
        old_rating: "1500".to_string(),
        new_rating: "1532".to_string(),
    });
    store_new_rating(&new_ratings, &ratings).unwrap();
    assert_eq!(load_new_rating(&new_ratings, "12345678").unwrap(), Some(ratings));

    let results = MemberWinLoss {
        member_id: "12345678".to_string(),
        event_id: "202401070012".to_string(),
        results: vec![WinLoss {
            round: "1".to_string(),
            result: "W".to_string(),
            opponent_id: "87654321".to_string(),
        }],
    };
    store_win_loss(&win_loss, &results).unwrap();
    assert!(win_loss.get("12345678-202401070012").unwrap().is_some());
    assert_eq!(
        load_win_loss(&win_loss, "12345678", "202401070012").unwrap(),
        Some(results)
    );
}

#[test]
fn corrupt_value_is_decode_error() {
    let part = Partition::open_memory(USCF_MEMBERS).unwrap();
    part.put("1", b"not json").unwrap();
    let err = load_member(&part, "1").unwrap_err();
    assert!(matches!(err, StoreError::Decode { .. }));
}

#[test]
fn partition_names_per_federation() {
    assert_eq!(member_partition(Federation::Fide), "fide_members");
    assert_eq!(member_partition(Federation::Uscf), "uscf_members");
    assert_eq!(
        supplement_partition(Federation::Fide),
        "fide_member_supplement"
    );
    assert_eq!(
        supplement_partition(Federation::Uscf),
        "uscf_member_supplement"
    );
}

#[test]
fn open_creates_data_dir_and_file() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("nested").join("data");
    let part = Partition::open(&data_dir, FIDE_MEMBERS).unwrap();
    assert_eq!(part.path(), Some(data_dir.join("fide_members.db").as_path()));
    assert!(data_dir.join("fide_members.db").is_file());

    store_member(&part, &test_member()).unwrap();
    drop(part);

    let reopened = Partition::open(&data_dir, FIDE_MEMBERS).unwrap();
    assert_eq!(reopened.keys().unwrap(), vec!["1503014".to_string()]);
}
