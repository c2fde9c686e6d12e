use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use elotracker_core::{Federation, Member, MemberSupplementRating, RatingCategory};
use elotracker_db::{
    ReadReplica, load_member, load_supplement, member_partition, partition_path,
    supplement_partition,
};

use crate::error::CliError;
use crate::settings::Settings;

/// Print a member and their supplement history, read through replicas of
/// the primary partitions. The report goes to stdout so `--quiet` only
/// silences progress logging.
pub(crate) fn run_lookup(
    settings: &Settings,
    federation: Federation,
    id: &str,
) -> Result<(), CliError> {
    let data_dir = &settings.store.data_dir;
    let replica_dir = &settings.store.replica_dir;

    let members = ReadReplica::open(
        &partition_path(data_dir, member_partition(federation)),
        replica_dir,
    )?;
    let member = load_member(&members, id)?;

    let supplements = ReadReplica::open(
        &partition_path(data_dir, supplement_partition(federation)),
        replica_dir,
    )?;
    let history = load_supplement(&supplements, id)?;

    if member.is_none() && history.is_none() {
        log::warn!(
            "  {} No {} member with id {}",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            federation.short_name(),
            id,
        );
        return Ok(());
    }

    if let Some(member) = member {
        print_member(federation, &member);
    }
    if let Some(history) = history {
        print_history(&history);
    }
    Ok(())
}

fn print_member(federation: Federation, member: &Member) {
    println!(
        "{} {}",
        member.name.if_supports_color(Stdout, |t| t.bold()),
        format!("({}{})", federation.link_prefix(), member.id)
            .if_supports_color(Stdout, |t| t.dimmed()),
    );

    let fields = [
        ("Title", &member.fide_title),
        ("Country", &member.country),
        ("State", &member.state),
        ("Gender", &member.gender),
        ("Born", &member.birthday),
        ("Flag", &member.active_flag),
        ("FIDE id", &member.fide_id),
        ("Games", &member.supp_games),
    ];
    for (label, value) in fields {
        if !value.is_empty() {
            println!("  {:<10} {}", label, value);
        }
    }

    for category in RatingCategory::ALL {
        let rating = member.rating(category);
        let supp = member.supp_rating(category).unwrap_or_default();
        if rating.is_empty() && supp.is_empty() {
            continue;
        }
        let note = if supp.is_empty() {
            String::new()
        } else {
            format!("(last supplement {supp})")
        };
        println!(
            "  {:<15} {:>5} {}",
            category.label(),
            rating,
            note.if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
}

fn print_history(history: &MemberSupplementRating) {
    println!();
    println!(
        "{}",
        format!("Supplement history ({} periods)", history.supplement_ratings.len())
            .if_supports_color(Stdout, |t| t.bold()),
    );
    let header: Vec<String> = RatingCategory::ALL
        .iter()
        .map(|c| format!("{:>8}", abbreviation(*c)))
        .collect();
    println!("  {:<8}{}", "period", header.join(""));

    for (period, row) in &history.supplement_ratings {
        let cells: Vec<String> = RatingCategory::ALL
            .iter()
            .map(|c| format!("{:>8}", row.get(*c).unwrap_or("-")))
            .collect();
        println!("  {:<8}{}", period, cells.join(""));
    }
}

fn abbreviation(category: RatingCategory) -> &'static str {
    match category {
        RatingCategory::Regular => "reg",
        RatingCategory::Quick => "quick",
        RatingCategory::Blitz => "blitz",
        RatingCategory::OnlineRegular => "o-reg",
        RatingCategory::OnlineQuick => "o-quick",
        RatingCategory::OnlineBlitz => "o-blitz",
    }
}
