use elotracker_core::{RatingAtPeriod, RatingCategory};
use elotracker_db::*;
use elotracker_import::*;

fn some(s: &str) -> Option<String> {
    Some(s.to_string())
}

#[test]
fn merge_into_unknown_member_starts_fresh() {
    let members = Partition::open_memory(FIDE_MEMBERS).unwrap();
    assert!(load_member(&members, "12345678").unwrap().is_none());

    let update = MemberUpdate {
        name: some("Doe, Jane"),
        country: some("us"),
        ..Default::default()
    };
    let member = merge_member(&members, "12345678", &update).unwrap();
    assert_eq!(member.id, "12345678");
    assert_eq!(member.name, "Jane Doe");
    assert_eq!(load_member(&members, "12345678").unwrap(), Some(member));
}

#[test]
fn merge_keeps_unsupplied_and_empty_fields() {
    let members = Partition::open_memory(FIDE_MEMBERS).unwrap();
    merge_member(
        &members,
        "1503014",
        &MemberUpdate {
            name: some("Carlsen, Magnus"),
            country: some("no"),
            birthday: some("1990"),
            fide_title: some("Grandmaster"),
            supp_ratings: vec![(RatingCategory::Regular, "2830".to_string())],
            ..Default::default()
        },
    )
    .unwrap();

    let member = merge_member(
        &members,
        "1503014",
        &MemberUpdate {
            country: some(""),
            gender: some("M"),
            supp_ratings: vec![
                (RatingCategory::Regular, String::new()),
                (RatingCategory::Quick, "2823".to_string()),
            ],
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(member.name, "Magnus Carlsen");
    assert_eq!(member.country, "no");
    assert_eq!(member.birthday, "1990");
    assert_eq!(member.gender, "M");
    assert_eq!(member.fide_title, "Grandmaster");
    assert_eq!(member.supp_regular_rating, "2830");
    assert_eq!(member.supp_quick_rating, "2823");
}

#[test]
fn online_categories_never_reach_supplement_fields() {
    let members = Partition::open_memory(USCF_MEMBERS).unwrap();
    let member = merge_member(
        &members,
        "12345678",
        &MemberUpdate {
            ratings: vec![(RatingCategory::OnlineBlitz, "1700".to_string())],
            supp_ratings: vec![(RatingCategory::OnlineBlitz, "1800".to_string())],
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(member.online_blitz_rating, "1700");
    assert!(member.supp_regular_rating.is_empty());
    assert!(member.supp_quick_rating.is_empty());
    assert!(member.supp_blitz_rating.is_empty());
}

#[test]
fn title_case_applies_only_when_asked() {
    let members = Partition::open_memory(USCF_MEMBERS).unwrap();
    let update = MemberUpdate {
        name: some("SMITH-JONES, MARY"),
        title_case_name: true,
        ..Default::default()
    };
    assert_eq!(
        merge_member(&members, "1", &update).unwrap().name,
        "Mary Smith-Jones"
    );

    let update = MemberUpdate {
        name: some("SMITH-JONES, MARY"),
        ..Default::default()
    };
    assert_eq!(
        merge_member(&members, "2", &update).unwrap().name,
        "MARY SMITH-JONES"
    );
}

#[test]
fn supplement_merge_overlays_one_period() {
    let supps = Partition::open_memory(USCF_MEMBER_SUPPLEMENT).unwrap();
    let full = RatingAtPeriod::new()
        .with(RatingCategory::Regular, "1500")
        .with(RatingCategory::Quick, "1400");
    merge_supplement(&supps, "12345678", "202403", &full).unwrap();
    merge_supplement(
        &supps,
        "12345678",
        "202402",
        &RatingAtPeriod::new().with(RatingCategory::Regular, "1490"),
    )
    .unwrap();

    let history = merge_supplement(
        &supps,
        "12345678",
        "202403",
        &RatingAtPeriod::new().with(RatingCategory::Quick, "1450"),
    )
    .unwrap();

    let row = &history.supplement_ratings["202403"];
    assert_eq!(row.get(RatingCategory::Regular), Some("1500"));
    assert_eq!(row.get(RatingCategory::Quick), Some("1450"));
    assert_eq!(
        history.supplement_ratings["202402"].get(RatingCategory::Regular),
        Some("1490")
    );
    assert_eq!(load_supplement(&supps, "12345678").unwrap(), Some(history));
}
