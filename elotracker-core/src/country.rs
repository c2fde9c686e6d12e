//! Three-letter federation/ISO country codes to two-letter lower-case codes.
//!
//! Rating lists carry IOC/FIDE-style codes (`GER`, `NED`, `ENG`) alongside
//! plain ISO-3166 alpha-3 codes; both spellings map to the same alpha-2 code.

/// (alpha-3, alpha-2) pairs. Several alpha-3 spellings may share one alpha-2.
#[rustfmt::skip]
const COUNTRY_CODES: &[(&str, &str)] = &[
    ("AFG", "af"), ("ALA", "ax"), ("ALB", "al"), ("DZA", "dz"), ("ASM", "as"), ("AND", "ad"),
    ("AGO", "ao"), ("AIA", "ai"), ("ATA", "aq"), ("ATG", "ag"), ("ARG", "ar"), ("ARM", "am"),
    ("ABW", "aw"), ("AUS", "au"), ("AUT", "at"), ("AZE", "az"), ("BHS", "bs"), ("BHR", "bh"),
    ("BGD", "bd"), ("BRB", "bb"), ("BLR", "by"), ("BEL", "be"), ("BLZ", "bz"), ("BEN", "bj"),
    ("BMU", "bm"), ("BTN", "bt"), ("BOL", "bo"), ("BES", "bq"), ("BIH", "ba"), ("BWA", "bw"),
    ("BVT", "bv"), ("BRA", "br"), ("VGB", "vg"), ("IOT", "io"), ("BRN", "bn"), ("BGR", "bg"),
    ("BUL", "bg"), ("BFA", "bf"), ("BDI", "bi"), ("KHM", "kh"), ("CMR", "cm"), ("CAN", "ca"),
    ("CPV", "cv"), ("CYM", "ky"), ("CAF", "cf"), ("TCD", "td"), ("CHL", "cl"), ("CHN", "cn"),
    ("HKG", "hk"), ("MAC", "mo"), ("CXR", "cx"), ("CCK", "cc"), ("COL", "co"), ("COM", "km"),
    ("COG", "cg"), ("COD", "cd"), ("COK", "ck"), ("CRI", "cr"), ("CIV", "ci"), ("HRV", "hr"),
    ("CUB", "cu"), ("CUW", "cw"), ("CYP", "cy"), ("CZE", "cz"), ("DNK", "dk"), ("DEN", "dk"),
    ("DJI", "dj"), ("DMA", "dm"), ("DOM", "do"), ("ECU", "ec"), ("EGY", "eg"), ("SLV", "sv"),
    ("SLO", "si"), ("GNQ", "gq"), ("ERI", "er"), ("EST", "ee"), ("ETH", "et"), ("FLK", "fk"),
    ("FRO", "fo"), ("FJI", "fj"), ("FIN", "fi"), ("FRA", "fr"), ("GUF", "gf"), ("PYF", "pf"),
    ("ATF", "tf"), ("GAB", "ga"), ("GMB", "gm"), ("GEO", "ge"), ("DEU", "de"), ("GER", "de"),
    ("GHA", "gh"), ("GIB", "gi"), ("GRC", "gr"), ("GRE", "gr"), ("GRL", "gl"), ("GRD", "gd"),
    ("GLP", "gp"), ("GUM", "gu"), ("GTM", "gt"), ("GGY", "gg"), ("GIN", "gn"), ("GNB", "gw"),
    ("GUY", "gy"), ("HTI", "ht"), ("HMD", "hm"), ("VAT", "va"), ("HND", "hn"), ("HUN", "hu"),
    ("ISL", "is"), ("IND", "in"), ("IDN", "id"), ("INA", "id"), ("IRN", "ir"), ("IRI", "ir"),
    ("IRQ", "iq"), ("IRL", "ie"), ("IMN", "im"), ("ISR", "il"), ("ITA", "it"), ("JAM", "jm"),
    ("JPN", "jp"), ("JEY", "je"), ("JOR", "jo"), ("KAZ", "kz"), ("KEN", "ke"), ("KIR", "ki"),
    ("PRK", "kp"), ("KOR", "kr"), ("KWT", "kw"), ("KGZ", "kg"), ("LAO", "la"), ("LVA", "lv"),
    ("LBN", "lb"), ("LSO", "ls"), ("LBR", "lr"), ("LBY", "ly"), ("LIE", "li"), ("LTU", "lt"),
    ("LUX", "lu"), ("MKD", "mk"), ("MDG", "mg"), ("MWI", "mw"), ("MYS", "my"), ("MDV", "mv"),
    ("MLI", "ml"), ("MLT", "mt"), ("MHL", "mh"), ("MTQ", "mq"), ("MRT", "mr"), ("MUS", "mu"),
    ("MYT", "yt"), ("MEX", "mx"), ("FSM", "fm"), ("FID", "ff"), ("MDA", "md"), ("MCO", "mc"),
    ("MNG", "mn"), ("MON", "mn"), ("MGL", "mn"), ("MNE", "me"), ("MSR", "ms"), ("MAR", "ma"),
    ("MOZ", "mz"), ("MMR", "mm"), ("NAM", "na"), ("NRU", "nr"), ("NPL", "np"), ("NLD", "nl"),
    ("NED", "nl"), ("ANT", "an"), ("NCL", "nc"), ("NZL", "nz"), ("NIC", "ni"), ("NER", "ne"),
    ("NGA", "ng"), ("NIU", "nu"), ("NFK", "nf"), ("MNP", "mp"), ("NOR", "no"), ("OMN", "om"),
    ("PAK", "pk"), ("PLW", "pw"), ("PSE", "ps"), ("PAN", "pa"), ("PNG", "pg"), ("PRY", "py"),
    ("PER", "pe"), ("PHL", "ph"), ("PCN", "pn"), ("POL", "pl"), ("PRT", "pt"), ("POR", "pt"),
    ("PRI", "pr"), ("QAT", "qa"), ("REU", "re"), ("ROU", "ro"), ("RUS", "ru"), ("RWA", "rw"),
    ("BLM", "bl"), ("SHN", "sh"), ("KNA", "kn"), ("LCA", "lc"), ("MAF", "mf"), ("SPM", "pm"),
    ("VCT", "vc"), ("WSM", "ws"), ("SMR", "sm"), ("STP", "st"), ("SAU", "sa"), ("SEN", "sn"),
    ("SRB", "rs"), ("SYC", "sc"), ("SLE", "sl"), ("SGP", "sg"), ("SXM", "sx"), ("SVK", "sk"),
    ("SVN", "si"), ("SLB", "sb"), ("SOM", "so"), ("ZAF", "za"), ("SGS", "gs"), ("SSD", "ss"),
    ("ESP", "es"), ("LKA", "lk"), ("SDN", "sd"), ("SUR", "sr"), ("SJM", "sj"), ("SWZ", "sz"),
    ("SWE", "se"), ("CHE", "ch"), ("SUI", "ch"), ("SYR", "sy"), ("TWN", "tw"), ("TJK", "tj"),
    ("TZA", "tz"), ("THA", "th"), ("TLS", "tl"), ("TGO", "tg"), ("TKL", "tk"), ("TON", "to"),
    ("TTO", "tt"), ("TUN", "tn"), ("TUR", "tr"), ("TKM", "tm"), ("TCA", "tc"), ("TUV", "tv"),
    ("UGA", "ug"), ("UKR", "ua"), ("ARE", "ae"), ("UAE", "ae"), ("GBR", "gb"), ("ENG", "gb"),
    ("USA", "us"), ("UMI", "um"), ("URY", "uy"), ("UZB", "uz"), ("VUT", "vu"), ("VEN", "ve"),
    ("VNM", "vn"), ("VIE", "vn"), ("VIR", "vi"), ("WLF", "wf"), ("ESH", "eh"), ("YEM", "ye"),
    ("ZMB", "zm"), ("ZWE", "zw"), ("XKX", "xk"),
];

/// Look up the two-letter, lower-cased code for a three-letter code.
///
/// Matching ignores case and surrounding whitespace.
pub fn lookup_alpha2(code: &str) -> Option<&'static str> {
    let upper = code.trim().to_ascii_uppercase();
    COUNTRY_CODES
        .iter()
        .find(|(alpha3, _)| *alpha3 == upper)
        .map(|(_, alpha2)| *alpha2)
}

/// Map a country code for storage: mapped codes become two-letter lower-case,
/// anything unmapped is returned unchanged.
pub fn normalize_country(code: &str) -> String {
    match lookup_alpha2(code) {
        Some(alpha2) => alpha2.to_string(),
        None => code.to_string(),
    }
}
