//! Scenario tests driving whole turns through the public API.

use std::collections::BTreeMap;

use entente::board::{
    GameState, Order, Phase, PowerId, RetreatOrder, SubmittedOrder, Unit, UnitKind,
};
use entente::resolve::{resolve, resolve_retreats};
use entente::TurnResult;

fn orders(pairs: Vec<(PowerId, Vec<Order>)>) -> BTreeMap<PowerId, Vec<Order>> {
    pairs.into_iter().collect()
}

fn place(state: &mut GameState, power: PowerId, kind: UnitKind, territory: &str) {
    state.powers.get_mut(&power).unwrap().units.push(Unit {
        kind,
        power,
        territory: territory.to_string(),
        coast: None,
    });
}

fn remove(state: &mut GameState, power: PowerId, territory: &str) {
    state
        .powers
        .get_mut(&power)
        .unwrap()
        .remove_unit_at(territory)
        .unwrap();
}

fn outcome<'a>(result: &'a TurnResult, location: &str) -> (bool, Option<&'a str>) {
    result
        .resolutions
        .iter()
        .find_map(|r| match &r.order {
            SubmittedOrder::Turn(o) if o.location == location => {
                Some((r.succeeded, r.reason.as_deref()))
            }
            _ => None,
        })
        .unwrap_or_else(|| panic!("no resolution for {location}"))
}

#[test]
fn resolution_is_pure_and_repeatable() {
    let state = GameState::standard();
    let before = serde_json::to_string(&state).unwrap();
    let submitted = orders(vec![
        (
            PowerId::France,
            vec![
                Order::mov(PowerId::France, UnitKind::Army, "par", "bur"),
                Order::mov(PowerId::France, UnitKind::Fleet, "bre", "mao"),
            ],
        ),
        (
            PowerId::Germany,
            vec![Order::mov(PowerId::Germany, UnitKind::Army, "mun", "bur")],
        ),
        (
            PowerId::Russia,
            vec![Order::mov(PowerId::Russia, UnitKind::Fleet, "stp", "bot")],
        ),
    ]);

    let first = resolve(&state, &submitted).unwrap();
    let second = resolve(&state, &submitted).unwrap();
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
    assert_eq!(serde_json::to_string(&state).unwrap(), before);
}

#[test]
fn unsupported_moves_to_same_place_stand_off() {
    let state = GameState::standard();
    let result = resolve(
        &state,
        &orders(vec![
            (
                PowerId::France,
                vec![Order::mov(PowerId::France, UnitKind::Army, "par", "bur")],
            ),
            (
                PowerId::Germany,
                vec![Order::mov(PowerId::Germany, UnitKind::Army, "mun", "bur")],
            ),
        ]),
    )
    .unwrap();
    assert_eq!(outcome(&result, "par"), (false, Some("standoff at bur")));
    assert_eq!(outcome(&result, "mun"), (false, Some("standoff at bur")));
    assert!(result.state.unit_at("bur").is_none());
    assert!(result.dislodged.is_empty());
}

#[test]
fn supported_attack_dislodges_lone_defender() {
    let mut state = GameState::standard();
    remove(&mut state, PowerId::France, "par");
    place(&mut state, PowerId::France, UnitKind::Army, "bur");
    place(&mut state, PowerId::Germany, UnitKind::Army, "ruh");

    let result = resolve(
        &state,
        &orders(vec![(
            PowerId::Germany,
            vec![
                Order::mov(PowerId::Germany, UnitKind::Army, "mun", "bur"),
                Order::support_move(PowerId::Germany, UnitKind::Army, "ruh", "mun", "bur"),
            ],
        )]),
    )
    .unwrap();
    assert_eq!(outcome(&result, "mun"), (true, None));
    assert_eq!(
        outcome(&result, "bur"),
        (false, Some("dislodged by attack from mun"))
    );
    assert_eq!(result.dislodged.len(), 1);
    let d = &result.dislodged[0];
    assert_eq!(d.from, "bur");
    assert_eq!(d.attacker_from, "mun");
    assert!(!d.retreat_options.contains(&"mun".to_string()));
    assert!(d.retreat_options.contains(&"gas".to_string()));
    assert_eq!(result.state.unit_at("bur").unwrap().power, PowerId::Germany);
}

#[test]
fn support_is_cut_even_when_the_cutting_attack_fails() {
    let mut state = GameState::standard();
    remove(&mut state, PowerId::France, "par");
    place(&mut state, PowerId::France, UnitKind::Army, "bur");
    place(&mut state, PowerId::France, UnitKind::Army, "bel");
    place(&mut state, PowerId::Germany, UnitKind::Army, "ruh");

    let result = resolve(
        &state,
        &orders(vec![
            (
                PowerId::Germany,
                vec![
                    Order::mov(PowerId::Germany, UnitKind::Army, "mun", "bur"),
                    Order::support_move(
                        PowerId::Germany,
                        UnitKind::Army,
                        "ruh",
                        "mun",
                        "bur",
                    ),
                ],
            ),
            (
                PowerId::France,
                vec![Order::mov(PowerId::France, UnitKind::Army, "bel", "ruh")],
            ),
        ]),
    )
    .unwrap();
    // The attack on the supporter bounces, yet the support is still cut.
    assert_eq!(
        outcome(&result, "bel"),
        (false, Some("defender holds with strength 1"))
    );
    assert_eq!(
        outcome(&result, "ruh"),
        (false, Some("cut by attack from bel"))
    );
    assert_eq!(
        outcome(&result, "mun"),
        (false, Some("defender holds with strength 1"))
    );
    assert!(result.dislodged.is_empty());
}

#[test]
fn units_cannot_swap_places_without_convoy() {
    let mut state = GameState::standard();
    place(&mut state, PowerId::Austria, UnitKind::Army, "gal");

    let result = resolve(
        &state,
        &orders(vec![(
            PowerId::Austria,
            vec![
                Order::mov(PowerId::Austria, UnitKind::Army, "vie", "bud"),
                Order::mov(PowerId::Austria, UnitKind::Army, "bud", "vie"),
                // Even a supported leg of the swap is reverted.
                Order::support_move(PowerId::Austria, UnitKind::Army, "gal", "vie", "bud"),
            ],
        )]),
    )
    .unwrap();
    assert_eq!(
        outcome(&result, "vie"),
        (false, Some("bounced by swap with bud"))
    );
    assert_eq!(
        outcome(&result, "bud"),
        (false, Some("bounced by swap with vie"))
    );
    assert_eq!(result.state.unit_at("vie").unwrap().power, PowerId::Austria);
    assert_eq!(result.state.unit_at("bud").unwrap().power, PowerId::Austria);
}

#[test]
fn bounce_cascades_down_a_chain_of_followers() {
    let state = GameState::standard();
    // Three equal attacks on Tyrolia stand off; Venice never leaves, so
    // Rome's follow-up bounces too.
    let result = resolve(
        &state,
        &orders(vec![
            (
                PowerId::Austria,
                vec![Order::mov(PowerId::Austria, UnitKind::Army, "vie", "tyr")],
            ),
            (
                PowerId::Germany,
                vec![Order::mov(PowerId::Germany, UnitKind::Army, "mun", "tyr")],
            ),
            (
                PowerId::Italy,
                vec![
                    Order::mov(PowerId::Italy, UnitKind::Army, "ven", "tyr"),
                    Order::mov(PowerId::Italy, UnitKind::Army, "rom", "ven"),
                ],
            ),
        ]),
    )
    .unwrap();
    assert_eq!(outcome(&result, "ven"), (false, Some("standoff at tyr")));
    assert_eq!(
        outcome(&result, "rom"),
        (false, Some("unit at ven failed to leave"))
    );
    assert!(result.state.unit_at("tyr").is_none());
    assert_eq!(result.state.unit_at("rom").unwrap().power, PowerId::Italy);
}

#[test]
fn supply_centers_change_hands_only_after_fall_orders() {
    let state = GameState::standard();
    // Spring: Marseilles walks into Spain. No capture yet.
    let spring = resolve(
        &state,
        &orders(vec![(
            PowerId::France,
            vec![Order::mov(PowerId::France, UnitKind::Army, "mar", "spa")],
        )]),
    )
    .unwrap();
    assert_eq!(outcome(&spring, "mar"), (true, None));
    assert_eq!(spring.state.power(PowerId::France).supply_centers.len(), 3);

    let after_retreats = resolve_retreats(&spring.state, &BTreeMap::new()).unwrap();
    assert_eq!(after_retreats.state.phase, Phase::FallOrders);

    let fall = resolve(&after_retreats.state, &BTreeMap::new()).unwrap();
    assert!(fall
        .state
        .power(PowerId::France)
        .supply_centers
        .contains("spa"));
    assert_eq!(fall.state.power(PowerId::France).supply_centers.len(), 4);
    assert_eq!(fall.state.phase, Phase::FallRetreats);
}

#[test]
fn elimination_is_checked_after_fall_and_never_reversed() {
    let mut state = GameState::standard();
    state.phase = Phase::FallOrders;
    let austria = state.powers.get_mut(&PowerId::Austria).unwrap();
    austria.supply_centers.clear();
    austria.units.clear();

    let fall = resolve(&state, &BTreeMap::new()).unwrap();
    assert!(fall.state.power(PowerId::Austria).eliminated);

    // The home centers fell to nobody; the flag stays set regardless.
    let retreats = resolve_retreats(&fall.state, &BTreeMap::new()).unwrap();
    assert!(retreats.state.power(PowerId::Austria).eliminated);
}

#[test]
fn tied_supported_attacks_report_exact_strengths() {
    let mut state = GameState::standard();
    place(&mut state, PowerId::Germany, UnitKind::Army, "ruh");

    let result = resolve(
        &state,
        &orders(vec![
            (
                PowerId::France,
                vec![Order::mov(PowerId::France, UnitKind::Army, "par", "bur")],
            ),
            (
                PowerId::Germany,
                vec![
                    Order::mov(PowerId::Germany, UnitKind::Army, "mun", "bur"),
                    Order::support_move(
                        PowerId::Germany,
                        UnitKind::Army,
                        "ruh",
                        "mun",
                        "bur",
                    ),
                ],
            ),
        ]),
    )
    .unwrap();
    assert_eq!(outcome(&result, "mun"), (true, None));
    assert_eq!(
        outcome(&result, "par"),
        (false, Some("strength 1 vs winner strength 2"))
    );
    assert_eq!(result.state.unit_at("bur").unwrap().power, PowerId::Germany);
}

#[test]
fn hold_support_raises_defender_strength() {
    let mut state = GameState::standard();
    place(&mut state, PowerId::Italy, UnitKind::Army, "tyr");

    let result = resolve(
        &state,
        &orders(vec![
            (
                PowerId::Italy,
                vec![Order::mov(PowerId::Italy, UnitKind::Army, "tyr", "vie")],
            ),
            (
                PowerId::Austria,
                vec![
                    Order::hold(PowerId::Austria, UnitKind::Army, "vie"),
                    Order::support_hold(PowerId::Austria, UnitKind::Army, "bud", "vie"),
                ],
            ),
        ]),
    )
    .unwrap();
    assert_eq!(
        outcome(&result, "tyr"),
        (false, Some("defender holds with strength 2"))
    );
    assert_eq!(outcome(&result, "bud"), (true, None));
    assert_eq!(result.state.unit_at("vie").unwrap().power, PowerId::Austria);
}

#[test]
fn convoyed_army_crosses_the_north_sea() {
    let mut state = GameState::standard();
    remove(&mut state, PowerId::England, "edi");
    place(&mut state, PowerId::England, UnitKind::Fleet, "nth");

    let result = resolve(
        &state,
        &orders(vec![(
            PowerId::England,
            vec![
                Order::convoyed_move(PowerId::England, "lon", "nwy"),
                Order::convoy(PowerId::England, "nth", "lon", "nwy"),
            ],
        )]),
    )
    .unwrap();
    assert_eq!(outcome(&result, "lon"), (true, None));
    assert_eq!(outcome(&result, "nth"), (true, None));
    assert_eq!(result.state.unit_at("nwy").unwrap().power, PowerId::England);
}

#[test]
fn convoy_without_a_matching_fleet_order_fails() {
    let state = GameState::standard();
    let result = resolve(
        &state,
        &orders(vec![(
            PowerId::England,
            vec![Order::convoyed_move(PowerId::England, "lon", "nwy")],
        )]),
    )
    .unwrap();
    assert_eq!(
        outcome(&result, "lon"),
        (false, Some("no valid convoy path from lon to nwy"))
    );
}

#[test]
fn dislodging_the_convoying_fleet_sinks_the_convoy() {
    let mut state = GameState::standard();
    remove(&mut state, PowerId::England, "edi");
    place(&mut state, PowerId::England, UnitKind::Fleet, "nth");
    place(&mut state, PowerId::Germany, UnitKind::Fleet, "den");
    place(&mut state, PowerId::Germany, UnitKind::Fleet, "hel");

    let result = resolve(
        &state,
        &orders(vec![
            (
                PowerId::England,
                vec![
                    Order::convoyed_move(PowerId::England, "lon", "nwy"),
                    Order::convoy(PowerId::England, "nth", "lon", "nwy"),
                ],
            ),
            (
                PowerId::Germany,
                vec![
                    Order::mov(PowerId::Germany, UnitKind::Fleet, "den", "nth"),
                    Order::support_move(
                        PowerId::Germany,
                        UnitKind::Fleet,
                        "hel",
                        "den",
                        "nth",
                    ),
                ],
            ),
        ]),
    )
    .unwrap();
    assert_eq!(
        outcome(&result, "lon"),
        (false, Some("convoyed army move failed"))
    );
    assert_eq!(
        outcome(&result, "nth"),
        (false, Some("convoying fleet dislodged"))
    );
    assert_eq!(result.dislodged.len(), 1);
    assert_eq!(result.dislodged[0].from, "nth");
    assert_eq!(result.state.unit_at("lon").unwrap().power, PowerId::England);
}

#[test]
fn retreat_into_a_standoff_territory_is_forbidden() {
    let mut state = GameState::standard();
    remove(&mut state, PowerId::France, "par");
    place(&mut state, PowerId::France, UnitKind::Army, "bur");
    place(&mut state, PowerId::France, UnitKind::Army, "pic");
    place(&mut state, PowerId::Germany, UnitKind::Army, "ruh");
    place(&mut state, PowerId::Germany, UnitKind::Army, "hol");

    // mun, supported by ruh, dislodges bur while pic and hol stand off
    // over Belgium; bel stays vacant but is off the retreat list.
    let result = resolve(
        &state,
        &orders(vec![
            (
                PowerId::Germany,
                vec![
                    Order::mov(PowerId::Germany, UnitKind::Army, "mun", "bur"),
                    Order::support_move(
                        PowerId::Germany,
                        UnitKind::Army,
                        "ruh",
                        "mun",
                        "bur",
                    ),
                    Order::mov(PowerId::Germany, UnitKind::Army, "hol", "bel"),
                ],
            ),
            (
                PowerId::France,
                vec![Order::mov(PowerId::France, UnitKind::Army, "pic", "bel")],
            ),
        ]),
    )
    .unwrap();
    assert_eq!(outcome(&result, "pic"), (false, Some("standoff at bel")));
    let d = &result.dislodged[0];
    assert_eq!(d.from, "bur");
    assert!(!d.retreat_options.contains(&"bel".to_string()));
    assert!(!d.retreat_options.contains(&"mun".to_string()));
    assert!(d.retreat_options.contains(&"gas".to_string()));
    assert!(d.retreat_options.contains(&"par".to_string()));

    // And the retreat resolver rejects it anyway.
    let mut retreat_orders = BTreeMap::new();
    retreat_orders.insert(
        PowerId::France,
        vec![RetreatOrder::to(PowerId::France, "bur", "bel")],
    );
    let retreats = resolve_retreats(&result.state, &retreat_orders).unwrap();
    assert!(!retreats.resolutions[0].succeeded);
    assert_eq!(
        retreats.resolutions[0].reason.as_deref(),
        Some("bel is not a valid retreat")
    );
}
