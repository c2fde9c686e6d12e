use super::*;

/// Pad each cell to its width so columns line up under the header.
fn row(cells: &[(&str, usize)]) -> String {
    cells
        .iter()
        .map(|(text, width)| format!("{text:<width$}"))
        .collect()
}

const WIDTHS: [usize; 13] = [15, 34, 4, 4, 5, 5, 5, 4, 6, 5, 4, 6, 4];

fn fide_row(values: [&str; 13]) -> String {
    let cells: Vec<(&str, usize)> = values.iter().copied().zip(WIDTHS).collect();
    row(&cells)
}

fn fide_header() -> String {
    fide_row([
        "ID Number", "Name", "Fed", "Sex", "Tit", "WTit", "OTit", "FOA", "MAR24", "Gms", "K",
        "B-day", "Flag",
    ])
}

fn strings(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}

// ── Fixed-width ─────────────────────────────────────────────────────────────

#[test]
fn fide_header_columns() {
    let table = ColumnOffsetTable::from_header(&fide_header());
    let names: Vec<_> = table.columns().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "id_number", "name", "fed", "sex", "tit", "wtit", "otit", "foa", "mar24", "gms", "k",
            "b-day", "flag"
        ]
    );
}

#[test]
fn parses_fide_line() {
    let table = ColumnOffsetTable::from_header(&fide_header());
    let line = fide_row([
        "1503014", "Carlsen, Magnus", "NOR", "M", "GM", "", "", "", "2830", "9", "10", "1990", "",
    ]);
    let (record, skipped) = parse_fixed_width(&table, &line, "mar24");

    assert!(skipped.is_empty());
    assert_eq!(record.member_id, "1503014");
    assert_eq!(record.name, "Carlsen, Magnus");
    assert_eq!(record.federation, "NOR");
    assert_eq!(record.gender, "M");
    assert_eq!(record.rating, "2830");
    assert_eq!(record.games, "9");
    assert_eq!(record.birthday, "1990");
    assert_eq!(record.titles.joined().as_deref(), Some("Grandmaster"));
}

#[test]
fn repeated_titles_across_columns_collapse() {
    let table = ColumnOffsetTable::from_header(&fide_header());
    let line = fide_row([
        "4100000", "Doe, Jane", "USA", "F", "GM", "", "GM", "", "2500", "0", "20", "1985", "w",
    ]);
    let (record, _) = parse_fixed_width(&table, &line, "mar24");
    assert_eq!(record.titles.joined().as_deref(), Some("Grandmaster"));
    assert_eq!(record.flag, "w");
}

#[test]
fn distinct_titles_join_with_commas() {
    let table = ColumnOffsetTable::from_header(&fide_header());
    let line = fide_row([
        "4100001", "Roe, Ann", "ENG", "F", "IM", "WGM", "FT", "", "2400", "0", "20", "1980", "w",
    ]);
    let (record, _) = parse_fixed_width(&table, &line, "mar24");
    assert_eq!(
        record.titles.joined().as_deref(),
        Some("International Master,Woman Grandmaster,FT")
    );
}

#[test]
fn short_line_skips_trailing_fields_only() {
    let table = ColumnOffsetTable::from_header(&fide_header());
    let full = fide_row([
        "1503014", "Carlsen, Magnus", "NOR", "M", "GM", "", "", "", "2830", "9", "10", "1990", "",
    ]);
    // Cut the line inside the K column: birthday and flag start past its end.
    let cut = table.get("k").unwrap().start + 2;
    let line: String = full.chars().take(cut).collect();

    let (record, skipped) = parse_fixed_width(&table, &line, "mar24");
    assert_eq!(skipped, ["b-day", "flag"]);
    assert_eq!(record.birthday, "");
    assert_eq!(record.member_id, "1503014");
    assert_eq!(record.rating, "2830");
}

#[test]
fn repeated_games_column_does_not_widen_the_name() {
    let table = ColumnOffsetTable::from_header("name gms  gms");
    let (record, skipped) = parse_fixed_width(&table, "Ann  12   34", "mar24");
    assert!(skipped.is_empty());
    assert_eq!(record.name, "Ann");
    assert_eq!(record.games, "34");
}

#[test]
fn missing_rating_column_leaves_rating_empty() {
    let table = ColumnOffsetTable::from_header(&fide_header());
    let line = fide_row([
        "1503014", "Carlsen, Magnus", "NOR", "M", "GM", "", "", "", "2830", "9", "10", "1990", "",
    ]);
    let (record, _) = parse_fixed_width(&table, &line, "apr24");
    assert_eq!(record.rating, "");
    assert_eq!(record.member_id, "1503014");
}

#[test]
fn non_ascii_names_do_not_shift_columns() {
    let table = ColumnOffsetTable::from_header(&fide_header());
    let line = fide_row([
        "4600002", "Müller, Jörg", "GER", "M", "FM", "", "", "", "2301", "4", "20", "1975", "",
    ]);
    let (record, _) = parse_fixed_width(&table, &line, "mar24");
    assert_eq!(record.name, "Müller, Jörg");
    assert_eq!(record.federation, "GER");
    assert_eq!(record.rating, "2301");
}

// ── Delimited ───────────────────────────────────────────────────────────────

#[test]
fn rating_list_new_layout() {
    let fields = strings(&[
        "12345678", "SMITH, JOHN", "CA", "USA", "", "A", "2012345", "", "2023-11", "1850", "P",
        "1700", "", "1650", "", "1500", "", "", "", "1400",
    ]);
    let record = parse_rating_list(&fields, 19);
    assert_eq!(record.member_id, "12345678");
    assert_eq!(record.name, "SMITH, JOHN");
    assert_eq!(record.state, "CA");
    assert_eq!(record.country, "USA");
    assert_eq!(record.active_flag, "A");
    assert_eq!(record.fide_id, "2012345");
    assert_eq!(record.supplement_date.as_deref(), Some("2023-11"));
    assert_eq!(record.ratings.get(RatingCategory::Regular), Some("1850"));
    assert_eq!(record.ratings.get(RatingCategory::Quick), Some("1700"));
    assert_eq!(record.ratings.get(RatingCategory::Blitz), Some("1650"));
    assert_eq!(record.ratings.get(RatingCategory::OnlineRegular), Some("1500"));
    assert_eq!(record.ratings.get(RatingCategory::OnlineQuick), None);
    assert_eq!(record.ratings.get(RatingCategory::OnlineBlitz), Some("1400"));
}

#[test]
fn rating_list_legacy_layout() {
    let fields = strings(&[
        "12345678", "DOE, JANE", "NY", "USA", "", "A", "", "ENG", "", "1500", "1450", "1400",
        "1300", "", "1200",
    ]);
    let record = parse_rating_list(&fields, 19);
    assert_eq!(record.country, "ENG");
    assert_eq!(record.supplement_date.as_deref(), Some(""));
    assert_eq!(record.ratings.get(RatingCategory::Regular), Some("1500"));
    assert_eq!(record.ratings.get(RatingCategory::Quick), Some("1450"));
    assert_eq!(record.ratings.get(RatingCategory::Blitz), Some("1400"));
    assert_eq!(record.ratings.get(RatingCategory::OnlineRegular), Some("1300"));
    assert_eq!(record.ratings.get(RatingCategory::OnlineQuick), None);
    assert_eq!(record.ratings.get(RatingCategory::OnlineBlitz), Some("1200"));
}

#[test]
fn rating_list_threshold_is_configurable() {
    let fields = strings(&[
        "1", "A, B", "", "", "", "", "", "", "", "1500", "x", "1450", "y", "1400", "z",
    ]);
    let legacy = parse_rating_list(&fields, 19);
    assert_eq!(legacy.ratings.get(RatingCategory::Quick), Some("x"));
    let new = parse_rating_list(&fields, 15);
    assert_eq!(new.ratings.get(RatingCategory::Quick), Some("1450"));
}

#[test]
fn short_rating_list_line_has_no_supplement_date() {
    let record = parse_rating_list(&strings(&["1", "A, B", "TX"]), 19);
    assert_eq!(record.supplement_date, None);
    assert!(record.ratings.is_empty());
}

#[test]
fn rating_list_header_detection() {
    assert!(is_rating_list_header(&strings(&["rtglistdate", "2024-03"])));
    assert!(is_rating_list_header(&strings(&["id", "name", "rtgreg"])));
    assert!(!is_rating_list_header(&strings(&["12345678", "SMITH, JOHN"])));
}

#[test]
fn full_supplement_supplies_every_category() {
    let fields = strings(&[
        "", "12345678", "SMITH, JOHN", "CA", "1850", "1700", "1650", "1500", "1450", "1400",
    ]);
    let record = parse_supplement(&fields, SupplementMarker::All);
    assert_eq!(record.member_id, "12345678");
    for (category, expected) in RatingCategory::ALL
        .into_iter()
        .zip(["1850", "1700", "1650", "1500", "1450", "1400"])
    {
        assert_eq!(record.ratings.get(category), Some(expected));
    }
}

#[test]
fn quick_supplement_supplies_quick_only() {
    let fields = strings(&["", "12345678", "SMITH, JOHN", "CA", "1850", "1700", "1650"]);
    let record = parse_supplement(&fields, SupplementMarker::Quick);
    assert_eq!(record.ratings.get(RatingCategory::Quick), Some("1700"));
    assert_eq!(record.ratings.get(RatingCategory::Regular), None);
    assert_eq!(record.ratings.get(RatingCategory::Blitz), None);
}

#[test]
fn blitz_supplement_reads_blitz_from_quick_column() {
    let fields = strings(&["", "12345678", "SMITH, JOHN", "CA", "1850", "1620"]);
    let record = parse_supplement(&fields, SupplementMarker::Blitz);
    assert_eq!(record.ratings.get(RatingCategory::Blitz), Some("1620"));
    assert_eq!(record.ratings.get(RatingCategory::Quick), None);
    assert_eq!(record.ratings.get(RatingCategory::Regular), None);
}

// ── JSON lines ──────────────────────────────────────────────────────────────

#[test]
fn crawler_line_strings_and_numbers() {
    let line = r#"{"event_id": "202401070012", "member": "12345678", "old_rating": 1500, "new_rating": "1532", "section": "1"}"#;
    let parsed = parse_crawler_line(line).unwrap();
    assert_eq!(parsed.event_id.as_deref(), Some("202401070012"));
    assert_eq!(parsed.member_id.as_deref(), Some("12345678"));
    assert_eq!(parsed.old_rating.as_deref(), Some("1500"));
    assert_eq!(parsed.new_rating.as_deref(), Some("1532"));
    assert_eq!(parsed.result, None);
}

#[test]
fn crawler_line_null_becomes_empty() {
    let parsed = parse_crawler_line(r#"{"id": "1", "state": null, "gender": "F"}"#).unwrap();
    assert_eq!(parsed.state.as_deref(), Some(""));
    assert_eq!(parsed.gender.as_deref(), Some("F"));
}

#[test]
fn crawler_line_id_alias() {
    let parsed = parse_crawler_line(r#"{"id": "87654321"}"#).unwrap();
    assert_eq!(parsed.member_id.as_deref(), Some("87654321"));
}

#[test]
fn crawler_line_ignores_unknown_keys() {
    let parsed = parse_crawler_line(r#"{"member": "1", "crawl_meta": {"depth": 3}}"#).unwrap();
    assert_eq!(parsed.member_id.as_deref(), Some("1"));
}

#[test]
fn crawler_line_leaves_display_name_unread() {
    let parsed = parse_crawler_line(r#"{"member": "1", "name": ["Doe", "John"]}"#).unwrap();
    assert_eq!(parsed.member_id.as_deref(), Some("1"));
}

#[test]
fn crawler_line_rejects_bad_values() {
    let err = parse_crawler_line(r#"{"member": ["1"]}"#).unwrap_err();
    assert!(matches!(err, CrawlerLineError::BadValue(key) if key == "member"));
    assert!(matches!(
        parse_crawler_line("not json").unwrap_err(),
        CrawlerLineError::Json(_)
    ));
    assert!(matches!(
        parse_crawler_line(r#"["member"]"#).unwrap_err(),
        CrawlerLineError::NotObject
    ));
}
