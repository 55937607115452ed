//! Static data for the standard board: 75 territories, 34 supply centers,
//! and the 1901 opening unit placement.

use crate::board::territory::TerritoryKind::{Coastal, Land, Sea};
use crate::board::territory::{Coast, Territory, TerritoryKind, TerritoryMap};
use crate::board::unit::{PowerId, UnitKind};

pub const TERRITORY_COUNT: usize = 75;
pub const SUPPLY_CENTER_COUNT: usize = 34;

struct TerritoryDef {
    id: &'static str,
    name: &'static str,
    kind: TerritoryKind,
    supply_center: bool,
    home: Option<PowerId>,
    adjacent: &'static [&'static str],
    coasts: &'static [(&'static str, &'static [&'static str])],
}

static TERRITORY_DEFS: &[TerritoryDef] = &[
    TerritoryDef { id: "adr", name: "Adriatic Sea", kind: Sea, supply_center: false, home: None, adjacent: &["alb", "apu", "ion", "tri", "ven"], coasts: &[] },
    TerritoryDef { id: "aeg", name: "Aegean Sea", kind: Sea, supply_center: false, home: None, adjacent: &["bul/sc", "con", "eas", "gre", "ion", "smy"], coasts: &[] },
    TerritoryDef { id: "alb", name: "Albania", kind: Coastal, supply_center: false, home: None, adjacent: &["adr", "gre", "ion", "ser", "tri"], coasts: &[] },
    TerritoryDef { id: "ank", name: "Ankara", kind: Coastal, supply_center: true, home: Some(PowerId::Turkey), adjacent: &["arm", "bla", "con", "smy"], coasts: &[] },
    TerritoryDef { id: "apu", name: "Apulia", kind: Coastal, supply_center: false, home: None, adjacent: &["adr", "ion", "nap", "rom", "ven"], coasts: &[] },
    TerritoryDef { id: "arm", name: "Armenia", kind: Coastal, supply_center: false, home: None, adjacent: &["ank", "bla", "sev", "smy", "syr"], coasts: &[] },
    TerritoryDef { id: "bal", name: "Baltic Sea", kind: Sea, supply_center: false, home: None, adjacent: &["ber", "bot", "den", "kie", "lvn", "pru", "swe"], coasts: &[] },
    TerritoryDef { id: "bar", name: "Barents Sea", kind: Sea, supply_center: false, home: None, adjacent: &["nrg", "nwy", "stp/nc"], coasts: &[] },
    TerritoryDef { id: "bel", name: "Belgium", kind: Coastal, supply_center: true, home: None, adjacent: &["bur", "eng", "hol", "nth", "pic", "ruh"], coasts: &[] },
    TerritoryDef { id: "ber", name: "Berlin", kind: Coastal, supply_center: true, home: Some(PowerId::Germany), adjacent: &["bal", "kie", "mun", "pru", "sil"], coasts: &[] },
    TerritoryDef { id: "bla", name: "Black Sea", kind: Sea, supply_center: false, home: None, adjacent: &["ank", "arm", "bul/ec", "con", "rum", "sev"], coasts: &[] },
    TerritoryDef { id: "boh", name: "Bohemia", kind: Land, supply_center: false, home: None, adjacent: &["gal", "mun", "sil", "tyr", "vie"], coasts: &[] },
    TerritoryDef { id: "bot", name: "Gulf of Bothnia", kind: Sea, supply_center: false, home: None, adjacent: &["bal", "fin", "lvn", "stp/sc", "swe"], coasts: &[] },
    TerritoryDef { id: "bre", name: "Brest", kind: Coastal, supply_center: true, home: Some(PowerId::France), adjacent: &["eng", "gas", "mao", "par", "pic"], coasts: &[] },
    TerritoryDef { id: "bud", name: "Budapest", kind: Land, supply_center: true, home: Some(PowerId::Austria), adjacent: &["gal", "rum", "ser", "tri", "vie"], coasts: &[] },
    TerritoryDef { id: "bul", name: "Bulgaria", kind: Coastal, supply_center: true, home: None, adjacent: &["con", "gre", "rum", "ser"], coasts: &[("ec", &["bla", "con", "rum"]), ("sc", &["aeg", "con", "gre"])] },
    TerritoryDef { id: "bur", name: "Burgundy", kind: Land, supply_center: false, home: None, adjacent: &["bel", "gas", "mar", "mun", "par", "pic", "ruh"], coasts: &[] },
    TerritoryDef { id: "cly", name: "Clyde", kind: Coastal, supply_center: false, home: None, adjacent: &["edi", "lvp", "nao", "nrg"], coasts: &[] },
    TerritoryDef { id: "con", name: "Constantinople", kind: Coastal, supply_center: true, home: Some(PowerId::Turkey), adjacent: &["aeg", "ank", "bla", "bul", "bul/ec", "bul/sc", "smy"], coasts: &[] },
    TerritoryDef { id: "den", name: "Denmark", kind: Coastal, supply_center: true, home: None, adjacent: &["bal", "hel", "kie", "nth", "ska", "swe"], coasts: &[] },
    TerritoryDef { id: "eas", name: "Eastern Mediterranean", kind: Sea, supply_center: false, home: None, adjacent: &["aeg", "ion", "smy", "syr"], coasts: &[] },
    TerritoryDef { id: "edi", name: "Edinburgh", kind: Coastal, supply_center: true, home: Some(PowerId::England), adjacent: &["cly", "lvp", "nrg", "nth", "yor"], coasts: &[] },
    TerritoryDef { id: "eng", name: "English Channel", kind: Sea, supply_center: false, home: None, adjacent: &["bel", "bre", "iri", "lon", "mao", "nth", "pic", "wal"], coasts: &[] },
    TerritoryDef { id: "fin", name: "Finland", kind: Coastal, supply_center: false, home: None, adjacent: &["bot", "nwy", "stp", "stp/sc", "swe"], coasts: &[] },
    TerritoryDef { id: "gal", name: "Galicia", kind: Land, supply_center: false, home: None, adjacent: &["boh", "bud", "rum", "sil", "ukr", "vie", "war"], coasts: &[] },
    TerritoryDef { id: "gas", name: "Gascony", kind: Coastal, supply_center: false, home: None, adjacent: &["bre", "bur", "mao", "mar", "par", "spa", "spa/nc"], coasts: &[] },
    TerritoryDef { id: "gol", name: "Gulf of Lyon", kind: Sea, supply_center: false, home: None, adjacent: &["mar", "pie", "spa/sc", "tus", "tys", "wes"], coasts: &[] },
    TerritoryDef { id: "gre", name: "Greece", kind: Coastal, supply_center: true, home: None, adjacent: &["aeg", "alb", "bul", "bul/sc", "ion", "ser"], coasts: &[] },
    TerritoryDef { id: "hel", name: "Heligoland Bight", kind: Sea, supply_center: false, home: None, adjacent: &["den", "hol", "kie", "nth"], coasts: &[] },
    TerritoryDef { id: "hol", name: "Holland", kind: Coastal, supply_center: true, home: None, adjacent: &["bel", "hel", "nth", "ruh"], coasts: &[] },
    TerritoryDef { id: "ion", name: "Ionian Sea", kind: Sea, supply_center: false, home: None, adjacent: &["adr", "aeg", "alb", "apu", "eas", "gre", "nap", "tun", "tys"], coasts: &[] },
    TerritoryDef { id: "iri", name: "Irish Sea", kind: Sea, supply_center: false, home: None, adjacent: &["eng", "lvp", "mao", "nao", "wal"], coasts: &[] },
    TerritoryDef { id: "kie", name: "Kiel", kind: Coastal, supply_center: true, home: Some(PowerId::Germany), adjacent: &["bal", "ber", "den", "hel", "mun", "ruh"], coasts: &[] },
    TerritoryDef { id: "lon", name: "London", kind: Coastal, supply_center: true, home: Some(PowerId::England), adjacent: &["eng", "nth", "wal", "yor"], coasts: &[] },
    TerritoryDef { id: "lvn", name: "Livonia", kind: Coastal, supply_center: false, home: None, adjacent: &["bal", "bot", "mos", "pru", "stp", "stp/sc", "war"], coasts: &[] },
    TerritoryDef { id: "lvp", name: "Liverpool", kind: Coastal, supply_center: true, home: Some(PowerId::England), adjacent: &["cly", "edi", "iri", "nao", "wal", "yor"], coasts: &[] },
    TerritoryDef { id: "mao", name: "Mid-Atlantic Ocean", kind: Sea, supply_center: false, home: None, adjacent: &["bre", "eng", "gas", "iri", "naf", "nao", "por", "spa/nc", "spa/sc", "wes"], coasts: &[] },
    TerritoryDef { id: "mar", name: "Marseilles", kind: Coastal, supply_center: true, home: Some(PowerId::France), adjacent: &["bur", "gas", "gol", "pie", "spa", "spa/sc"], coasts: &[] },
    TerritoryDef { id: "mos", name: "Moscow", kind: Land, supply_center: true, home: Some(PowerId::Russia), adjacent: &["lvn", "sev", "stp", "ukr", "war"], coasts: &[] },
    TerritoryDef { id: "mun", name: "Munich", kind: Land, supply_center: true, home: Some(PowerId::Germany), adjacent: &["ber", "boh", "bur", "kie", "ruh", "sil", "tyr"], coasts: &[] },
    TerritoryDef { id: "naf", name: "North Africa", kind: Coastal, supply_center: false, home: None, adjacent: &["mao", "tun", "wes"], coasts: &[] },
    TerritoryDef { id: "nao", name: "North Atlantic Ocean", kind: Sea, supply_center: false, home: None, adjacent: &["cly", "iri", "lvp", "mao", "nrg"], coasts: &[] },
    TerritoryDef { id: "nap", name: "Naples", kind: Coastal, supply_center: true, home: Some(PowerId::Italy), adjacent: &["apu", "ion", "rom", "tys"], coasts: &[] },
    TerritoryDef { id: "nrg", name: "Norwegian Sea", kind: Sea, supply_center: false, home: None, adjacent: &["bar", "cly", "edi", "nao", "nth", "nwy"], coasts: &[] },
    TerritoryDef { id: "nth", name: "North Sea", kind: Sea, supply_center: false, home: None, adjacent: &["bel", "den", "edi", "eng", "hel", "hol", "lon", "nrg", "nwy", "ska", "yor"], coasts: &[] },
    TerritoryDef { id: "nwy", name: "Norway", kind: Coastal, supply_center: true, home: None, adjacent: &["bar", "fin", "nrg", "nth", "ska", "stp", "stp/nc", "swe"], coasts: &[] },
    TerritoryDef { id: "par", name: "Paris", kind: Land, supply_center: true, home: Some(PowerId::France), adjacent: &["bre", "bur", "gas", "pic"], coasts: &[] },
    TerritoryDef { id: "pic", name: "Picardy", kind: Coastal, supply_center: false, home: None, adjacent: &["bel", "bre", "bur", "eng", "par"], coasts: &[] },
    TerritoryDef { id: "pie", name: "Piedmont", kind: Coastal, supply_center: false, home: None, adjacent: &["gol", "mar", "tus", "tyr", "ven"], coasts: &[] },
    TerritoryDef { id: "por", name: "Portugal", kind: Coastal, supply_center: true, home: None, adjacent: &["mao", "spa", "spa/nc", "spa/sc"], coasts: &[] },
    TerritoryDef { id: "pru", name: "Prussia", kind: Coastal, supply_center: false, home: None, adjacent: &["bal", "ber", "lvn", "sil", "war"], coasts: &[] },
    TerritoryDef { id: "rom", name: "Rome", kind: Coastal, supply_center: true, home: Some(PowerId::Italy), adjacent: &["apu", "nap", "tus", "tys", "ven"], coasts: &[] },
    TerritoryDef { id: "ruh", name: "Ruhr", kind: Land, supply_center: false, home: None, adjacent: &["bel", "bur", "hol", "kie", "mun"], coasts: &[] },
    TerritoryDef { id: "rum", name: "Rumania", kind: Coastal, supply_center: true, home: None, adjacent: &["bla", "bud", "bul", "bul/ec", "gal", "ser", "sev", "ukr"], coasts: &[] },
    TerritoryDef { id: "ser", name: "Serbia", kind: Land, supply_center: true, home: None, adjacent: &["alb", "bud", "bul", "gre", "rum", "tri"], coasts: &[] },
    TerritoryDef { id: "sev", name: "Sevastopol", kind: Coastal, supply_center: true, home: Some(PowerId::Russia), adjacent: &["arm", "bla", "mos", "rum", "ukr"], coasts: &[] },
    TerritoryDef { id: "sil", name: "Silesia", kind: Land, supply_center: false, home: None, adjacent: &["ber", "boh", "gal", "mun", "pru", "war"], coasts: &[] },
    TerritoryDef { id: "ska", name: "Skagerrak", kind: Sea, supply_center: false, home: None, adjacent: &["den", "nth", "nwy", "swe"], coasts: &[] },
    TerritoryDef { id: "smy", name: "Smyrna", kind: Coastal, supply_center: true, home: Some(PowerId::Turkey), adjacent: &["aeg", "ank", "arm", "con", "eas", "syr"], coasts: &[] },
    TerritoryDef { id: "spa", name: "Spain", kind: Coastal, supply_center: true, home: None, adjacent: &["gas", "mar", "por"], coasts: &[("nc", &["gas", "mao", "por"]), ("sc", &["gol", "mao", "mar", "por", "wes"])] },
    TerritoryDef { id: "stp", name: "St. Petersburg", kind: Coastal, supply_center: true, home: Some(PowerId::Russia), adjacent: &["fin", "lvn", "mos", "nwy"], coasts: &[("nc", &["bar", "nwy"]), ("sc", &["bot", "fin", "lvn"])] },
    TerritoryDef { id: "swe", name: "Sweden", kind: Coastal, supply_center: true, home: None, adjacent: &["bal", "bot", "den", "fin", "nwy", "ska"], coasts: &[] },
    TerritoryDef { id: "syr", name: "Syria", kind: Coastal, supply_center: false, home: None, adjacent: &["arm", "eas", "smy"], coasts: &[] },
    TerritoryDef { id: "tri", name: "Trieste", kind: Coastal, supply_center: true, home: Some(PowerId::Austria), adjacent: &["adr", "alb", "bud", "ser", "tyr", "ven", "vie"], coasts: &[] },
    TerritoryDef { id: "tun", name: "Tunisia", kind: Coastal, supply_center: true, home: None, adjacent: &["ion", "naf", "tys", "wes"], coasts: &[] },
    TerritoryDef { id: "tus", name: "Tuscany", kind: Coastal, supply_center: false, home: None, adjacent: &["gol", "pie", "rom", "tys", "ven"], coasts: &[] },
    TerritoryDef { id: "tyr", name: "Tyrolia", kind: Land, supply_center: false, home: None, adjacent: &["boh", "mun", "pie", "tri", "ven", "vie"], coasts: &[] },
    TerritoryDef { id: "tys", name: "Tyrrhenian Sea", kind: Sea, supply_center: false, home: None, adjacent: &["gol", "ion", "nap", "rom", "tun", "tus", "wes"], coasts: &[] },
    TerritoryDef { id: "ukr", name: "Ukraine", kind: Land, supply_center: false, home: None, adjacent: &["gal", "mos", "rum", "sev", "war"], coasts: &[] },
    TerritoryDef { id: "ven", name: "Venice", kind: Coastal, supply_center: true, home: Some(PowerId::Italy), adjacent: &["adr", "apu", "pie", "rom", "tri", "tus", "tyr"], coasts: &[] },
    TerritoryDef { id: "vie", name: "Vienna", kind: Land, supply_center: true, home: Some(PowerId::Austria), adjacent: &["boh", "bud", "gal", "tri", "tyr"], coasts: &[] },
    TerritoryDef { id: "wal", name: "Wales", kind: Coastal, supply_center: false, home: None, adjacent: &["eng", "iri", "lon", "lvp", "yor"], coasts: &[] },
    TerritoryDef { id: "war", name: "Warsaw", kind: Land, supply_center: true, home: Some(PowerId::Russia), adjacent: &["gal", "lvn", "mos", "pru", "sil", "ukr"], coasts: &[] },
    TerritoryDef { id: "wes", name: "Western Mediterranean", kind: Sea, supply_center: false, home: None, adjacent: &["gol", "mao", "naf", "spa/sc", "tun", "tys"], coasts: &[] },
    TerritoryDef { id: "yor", name: "Yorkshire", kind: Coastal, supply_center: false, home: None, adjacent: &["edi", "lon", "lvp", "nth", "wal"], coasts: &[] },
];

/// Builds the standard territory map from the static tables.
pub fn standard_map() -> TerritoryMap {
    let territories = TERRITORY_DEFS
        .iter()
        .map(|def| Territory {
            id: def.id.to_string(),
            name: def.name.to_string(),
            kind: def.kind,
            supply_center: def.supply_center,
            home: def.home,
            adjacent: def.adjacent.iter().map(|s| s.to_string()).collect(),
            coasts: def
                .coasts
                .iter()
                .map(|(id, adj)| Coast {
                    id: id.to_string(),
                    adjacent: adj.iter().map(|s| s.to_string()).collect(),
                })
                .collect(),
        })
        .collect();
    TerritoryMap::new(territories)
}

/// The 1901 opening placement: (owner, kind, territory, coast).
pub(crate) static OPENING_UNITS: &[(PowerId, UnitKind, &str, Option<&str>)] = &[
    (PowerId::Austria, UnitKind::Army, "vie", None),
    (PowerId::Austria, UnitKind::Army, "bud", None),
    (PowerId::Austria, UnitKind::Fleet, "tri", None),
    (PowerId::England, UnitKind::Fleet, "lon", None),
    (PowerId::England, UnitKind::Fleet, "edi", None),
    (PowerId::England, UnitKind::Army, "lvp", None),
    (PowerId::France, UnitKind::Fleet, "bre", None),
    (PowerId::France, UnitKind::Army, "par", None),
    (PowerId::France, UnitKind::Army, "mar", None),
    (PowerId::Germany, UnitKind::Fleet, "kie", None),
    (PowerId::Germany, UnitKind::Army, "ber", None),
    (PowerId::Germany, UnitKind::Army, "mun", None),
    (PowerId::Italy, UnitKind::Fleet, "nap", None),
    (PowerId::Italy, UnitKind::Army, "rom", None),
    (PowerId::Italy, UnitKind::Army, "ven", None),
    (PowerId::Russia, UnitKind::Fleet, "stp", Some("sc")),
    (PowerId::Russia, UnitKind::Army, "mos", None),
    (PowerId::Russia, UnitKind::Army, "war", None),
    (PowerId::Russia, UnitKind::Fleet, "sev", None),
    (PowerId::Turkey, UnitKind::Fleet, "ank", None),
    (PowerId::Turkey, UnitKind::Army, "con", None),
    (PowerId::Turkey, UnitKind::Army, "smy", None),
];
