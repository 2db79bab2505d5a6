//! Keyword vocabularies shared by the classifier and the filters.
//!
//! Ads come from Dutch, German, Belgian, French, Polish and Czech
//! marketplaces, so each group mixes languages. All patterns are
//! case-insensitive and are matched against `Listing::search_text`.

use regex::Regex;
use std::sync::LazyLock;

/// Estate bodies: the T-model, chassis codes S123/S124 and
/// displacement codes with a T suffix (300T, 250TD, 230TE).
pub static STATION_WAGON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:combi|kombi|estate|touring|station\s?wag(?:on|en)|stationcar|station)\b|\bt-?modell?\b|\bs12[34]\b|\b\d{3}t(?:d|e|dt)?\b",
    )
    .unwrap()
});

pub static CABRIO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:cabrio(?:let)?|convertible|roadster)\b").unwrap());

/// `coupe` with or without the accent
pub static COUPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bcoup[eé]\b").unwrap());

pub static SEDAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:limousine|sedan|saloon)\b").unwrap());

/// Automatic gearbox (automatic, Automatik, automaat, automatique, aut.)
pub static AUTOMATIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bautoma(?:t|at)|\baut(?:om)?\.").unwrap()
});

/// Tow bar (trekhaak, Anhängerkupplung, AHK, attelage, hak)
pub static TOW_BAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\btrekhaak|anh(?:ä|ae)ngerkupplung|\bahk\b|\btow\s?(?:bar|hitch|hook)|\battelage|\bhak holowniczy|\btažné",
    )
    .unwrap()
});

/// Five and six cylinder diesels: 300D/300TD/250D/250TD, engine codes
/// OM617/OM602/OM603 and literal "5 cylinder", "6-Zylinder", "5/6 cil".
pub static FIVE_SIX_CYLINDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:300|250)\s?t?d(?:t)?\b|\bom\s?-?60[23]|\bom\s?-?617|\b[56](?:/[56])?[\s-]?(?:cyl|zyl|cil)",
    )
    .unwrap()
});
