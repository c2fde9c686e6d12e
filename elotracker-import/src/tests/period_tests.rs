use super::*;

#[test]
fn fide_token_strips_prefix_and_suffix() {
    assert_eq!(fide_period_token("standard_mar24frl.txt"), "mar24");
    assert_eq!(fide_period_token("rapid_dec23frl.txt"), "dec23");
    assert_eq!(fide_period_token("blitz_JAN24FRL.txt"), "jan24frl");
    assert_eq!(fide_period_token("players_list.txt"), "players_list");
}

#[test]
fn fide_period_from_filename() {
    let token = fide_period_token("standard_mar24frl.txt");
    assert_eq!(fide_period(&token, "20").as_deref(), Some("202403"));

    let token = fide_period_token("rapid_dec23frl.txt");
    assert_eq!(fide_period(&token, "20").as_deref(), Some("202312"));
}

#[test]
fn fide_period_uses_supplied_century() {
    assert_eq!(fide_period("jul99", "19").as_deref(), Some("199907"));
}

#[test]
fn fide_period_without_month_or_year() {
    assert_eq!(fide_period("players_list", "20"), None);
    assert_eq!(fide_period("mar", "20"), None);
    assert_eq!(fide_period("mar2024", "20"), None);
}

#[test]
fn rating_list_period_from_directory() {
    assert_eq!(
        rating_list_period("./golden_uscf_supplements/ALLRTG2403/rtglist.txt").as_deref(),
        Some("202403")
    );
    assert_eq!(rating_list_period("./golden/rtglist.txt"), None);
    assert_eq!(rating_list_period("./ALLRTG/rtglist.txt"), None);
}

#[test]
fn supplement_markers() {
    let (marker, period) = supplement_period("./uscf_supplements/RSQ2401/RSQ2401.TXT").unwrap();
    assert_eq!(marker, SupplementMarker::Quick);
    assert_eq!(period, "202401");

    let (marker, period) = supplement_period("./uscf_supplements/RSB2312.txt").unwrap();
    assert_eq!(marker, SupplementMarker::Blitz);
    assert_eq!(period, "202312");

    let (marker, period) = supplement_period("./uscf_supplements/RS2402/RS2402.TXT").unwrap();
    assert_eq!(marker, SupplementMarker::All);
    assert_eq!(period, "202402");

    assert!(supplement_period("./uscf_supplements/notes.txt").is_none());
}

#[test]
fn marker_categories() {
    assert_eq!(SupplementMarker::Quick.categories(), [RatingCategory::Quick]);
    assert_eq!(SupplementMarker::Blitz.categories(), [RatingCategory::Blitz]);
    assert_eq!(SupplementMarker::All.categories().len(), 6);
}

#[test]
fn record_period_from_date_field() {
    assert_eq!(record_period("2023-11").as_deref(), Some("202311"));
    assert_eq!(record_period("2023-11-01").as_deref(), Some("202311"));
    assert_eq!(record_period(""), None);
    assert_eq!(record_period("Nov 2023"), None);
}

#[test]
fn period_validation() {
    assert!(validate_period("202508").is_ok());
    assert!(validate_period("202513").is_err());
    assert!(validate_period("2025-08").is_err());
    assert!(validate_period("").is_err());
}

#[test]
fn range_is_inclusive() {
    let range = PeriodRange::new("202508", Some("202512")).unwrap();
    assert!(range.contains("202508"));
    assert!(range.contains("202510"));
    assert!(range.contains("202512"));
    assert!(!range.contains("202507"));
    assert!(!range.contains("202601"));
    assert_eq!(range.century(), "20");
}

#[test]
fn single_month_range() {
    let range = PeriodRange::new("202403", None).unwrap();
    assert_eq!(range.end(), "202403");
    assert!(range.contains("202403"));
    assert!(!range.contains("202404"));
}
