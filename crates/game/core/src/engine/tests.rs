use super::*;
use crate::catalogue::Catalogue;
use crate::rng::MwcRng;
use crate::state::{AttrKind, Attribute, Card, CardClass, CardTemplate};

fn catalogue() -> Catalogue {
    Catalogue::with_builtin_runes(vec![
        CardTemplate::new("Titan", 1, 1, 300, 1_000_000),
        CardTemplate::new("Warlock", 1, 1, 0, 1_000_000).with_attr(AttrKind::Curse, 1000),
        CardTemplate::new("Exiler", 1, 1, 300, 1_000_000).with_attr(AttrKind::Exile, 0),
        CardTemplate::new("Chainer", 1, 1, 100, 1_000_000).with_attr(AttrKind::ChainAttack, 150),
        CardTemplate::new("Leech", 1, 1, 300, 1_000_000).with_attr(AttrKind::WickedLeech, 10),
        CardTemplate::new("Brute", 1, 1, 300, 1_000_000).with_attr(AttrKind::Counterattack, 500),
        CardTemplate::new("Chaos", 1, 1, 250, 1_000_000)
            .with_attr(AttrKind::Trap, 2)
            .with_attr(AttrKind::Snipe, 150)
            .with_attr(AttrKind::FireGod, 40)
            .with_attr(AttrKind::Damnation, 20),
        CardTemplate::new("Sniper", 1, 1, 0, 1_000_000).with_attr(AttrKind::Snipe, 150),
        CardTemplate::new("Corruptor", 1, 1, 0, 1_000_000).with_attr(AttrKind::ManaCorrupt, 100),
        CardTemplate::new("Destroyer", 1, 1, 0, 1_000_000).with_attr(AttrKind::Destroy, 0),
        CardTemplate::new("Doom", 1, 1, 0, 1_000_000).with_attr(AttrKind::Damnation, 20),
        CardTemplate::new("Ripper", 1, 1, 100, 1_000_000).with_attr(AttrKind::Lacerate, 0),
        CardTemplate::new("Imp", 3, 2, 100, 400),
        CardTemplate::new("Ogre", 8, 4, 250, 900),
        CardTemplate::new("Stump", 1, 1, 0, 10_000),
        CardTemplate::new("Knight", 5, 2, 200, 1000),
        CardTemplate::new("Acrobat", 5, 2, 200, 1000).with_attr(AttrKind::Dexterity, 100),
        CardTemplate::new("Sentinel", 4, 2, 50, 300).with_attr(AttrKind::Guard, 0),
        CardTemplate::new("Necro", 6, 3, 0, 800).with_attr(AttrKind::Reanimate, 0),
        CardTemplate::new("Martyr", 4, 2, 100, 500).with_attr(AttrKind::DReincarnate, 1),
        CardTemplate::new("Assassin", 6, 0, 100, 600).with_attr(AttrKind::Backstab, 50),
        CardTemplate::new("Cultist", 6, 0, 200, 600).with_attr(AttrKind::Sacrifice, 50),
        CardTemplate::new("Elder", 6, 3, 150, 900)
            .with_attr(AttrKind::Forest, 0)
            .with_attr(AttrKind::ForestHp, 100)
            .with_attr(AttrKind::ForestAtk, 50),
        CardTemplate::new("Sprite", 3, 2, 80, 300).with_attr(AttrKind::Forest, 0),
        CardTemplate::new("Golem", 5, 3, 120, 700).with_attr(AttrKind::Mtn, 0),
        CardTemplate::new("Yeti", 5, 2, 0, 1000).with_attr(AttrKind::Tundra, 0),
        CardTemplate::new("Duelist", 7, 2, 240, 800)
            .with_attr(AttrKind::Dodge, 30)
            .with_attr(AttrKind::Concentrate, 80)
            .with_attr(AttrKind::Regenerate, 60),
    ])
}

fn state<'c>(catalogue: &'c Catalogue, boss: &str, entries: &[&str]) -> BattleState<'c> {
    let loadout = catalogue.resolve(boss, entries).unwrap();
    BattleState::new(&loadout, 8800, BattleConfig::default(), MwcRng::new(7, 11)).unwrap()
}

fn place<'c>(catalogue: &'c Catalogue, state: &mut BattleState<'c>, name: &str) {
    let template = catalogue.find_card(name).unwrap();
    state.field.push(Card::from_template(template)).unwrap();
}

fn in_hand<'c>(catalogue: &'c Catalogue, state: &mut BattleState<'c>, name: &str) {
    let template = catalogue.find_card(name).unwrap();
    let mut card = Card::from_template(template);
    card.timing = 0;
    state.hand.push(card).unwrap();
}

fn names(roster: &crate::state::Roster<'_>) -> Vec<String> {
    roster.iter().map(|card| card.name().to_owned()).collect()
}

// ============================================================================
// Terminal conditions
// ============================================================================

#[test]
fn harmless_field_dies_to_curse_in_bounded_rounds() {
    let catalogue = catalogue();
    let mut state = state(&catalogue, "Warlock", &[]);
    place(&catalogue, &mut state, "Stump");

    let outcome = BattleEngine::new(&mut state).run().unwrap();

    // Curses on rounds 5, 7, ... 21 take 9000 from 8800.
    assert_eq!(
        outcome,
        Outcome {
            damage: 0,
            rounds: 21,
            hit_milestone: false
        }
    );
    assert_eq!(state.hp, -200);
}

#[test]
fn empty_rosters_end_before_the_first_round() {
    let catalogue = catalogue();
    let mut state = state(&catalogue, "Titan", &[]);

    let outcome = BattleEngine::new(&mut state).run().unwrap();

    assert_eq!(outcome.rounds, 0);
    assert_eq!(outcome.damage, 0);
}

#[test]
fn round_ceiling_stops_the_battle_and_milestone_is_tracked() {
    let catalogue = catalogue();
    let mut state = state(&catalogue, "Warlock", &[]);
    state.boss.attrs.clear();
    state.rules = BattleConfig::default()
        .with_max_rounds(30)
        .with_milestone_round(20);
    place(&catalogue, &mut state, "Stump");

    let outcome = BattleEngine::new(&mut state).run().unwrap();

    assert_eq!(outcome.rounds, 30);
    assert!(outcome.hit_milestone);
    assert_eq!(state.hp, 8800);
}

#[test]
fn same_seed_gives_identical_outcomes() {
    let catalogue = catalogue();
    let template = state(
        &catalogue,
        "Chaos",
        &["Duelist", "Knight", "Imp", "Ogre", "Sentinel", "Martyr", "Leaf"],
    );

    let play = || {
        let mut state = template.clone();
        state.shuffle_deck();
        let outcome = BattleEngine::new(&mut state).run().unwrap();
        (outcome, state.rng)
    };

    let (first, first_rng) = play();
    let (second, second_rng) = play();
    assert_eq!(first, second);
    assert_eq!(first_rng, second_rng);
    assert!(first.damage > 0);
}

// ============================================================================
// Damage
// ============================================================================

#[test]
fn guard_absorbs_until_it_dies() {
    let catalogue = catalogue();
    let mut state = state(&catalogue, "Titan", &[]);
    place(&catalogue, &mut state, "Sentinel");
    place(&catalogue, &mut state, "Knight");
    let mut engine = BattleEngine::new(&mut state);

    engine.damage_player(100).unwrap();
    assert_eq!(engine.state.hp, 8800);
    assert_eq!(engine.state.field[0].hp, 200);

    engine.damage_player(500).unwrap();
    assert_eq!(engine.state.hp, 8500);
    assert!(engine.state.field[0].is_dead());
    assert_eq!(names(&engine.state.grave), vec!["Sentinel"]);
    assert_eq!(engine.state.field[1].hp, 1000);
}

#[test]
fn chain_attack_echoes_onto_same_named_cards() {
    let catalogue = catalogue();
    let mut state = state(&catalogue, "Chainer", &[]);
    for name in ["Imp", "Imp", "Ogre", "Imp"] {
        place(&catalogue, &mut state, name);
    }

    BattleEngine::new(&mut state).boss_attack(100).unwrap();

    let hps: Vec<_> = state.field.iter().map(|card| card.hp).collect();
    assert_eq!(hps, vec![300, 250, 900, 250]);
}

#[test]
fn counterattack_hits_front_card_unless_dexterous() {
    let catalogue = catalogue();
    let mut state = state(&catalogue, "Brute", &[]);
    state.round = 6;
    place(&catalogue, &mut state, "Knight");
    BattleEngine::new(&mut state).player_phase().unwrap();
    assert_eq!(state.damage_done, 200);
    assert_eq!(state.field[0].hp, 500);

    let mut state = self::state(&catalogue, "Brute", &[]);
    state.round = 6;
    place(&catalogue, &mut state, "Acrobat");
    BattleEngine::new(&mut state).player_phase().unwrap();
    assert_eq!(state.field[0].hp, 1000);
}

#[test]
fn wicked_leech_moves_attack_to_the_boss() {
    let catalogue = catalogue();
    let mut state = state(&catalogue, "Leech", &[]);
    state.round = 6;
    place(&catalogue, &mut state, "Knight");

    BattleEngine::new(&mut state).player_phase().unwrap();

    assert_eq!(state.damage_done, 200);
    assert_eq!(state.field[0].atk, 180);
    assert_eq!(state.field[0].base_atk, 180);
    assert_eq!(state.boss.atk, 320);
    assert_eq!(state.boss.base_atk, 320);
}

// ============================================================================
// Field entry & removal
// ============================================================================

#[test]
fn class_buffs_round_trip_exactly() {
    let catalogue = catalogue();
    let mut state = state(&catalogue, "Titan", &[]);
    for name in ["Elder", "Sprite", "Golem", "Sprite"] {
        place(&catalogue, &mut state, name);
    }
    let before: Vec<_> = state.field.iter().map(|c| (c.atk, c.hp, c.max_hp)).collect();

    let mut engine = BattleEngine::new(&mut state);
    let forest = Some(CardClass::Forest);
    engine.add_buff_to_field(0, forest, AttrKind::ForestHpBuff, 100).unwrap();
    engine.add_buff_to_field(0, forest, AttrKind::ForestAtkBuff, 50).unwrap();

    let buffed: Vec<_> = engine.state.field.iter().map(|c| (c.atk, c.hp, c.max_hp)).collect();
    assert_eq!(buffed[0], before[0]);
    assert_eq!(buffed[1], (130, 400, 400));
    assert_eq!(buffed[2], before[2]);

    engine.remove_buff_from_field(0, AttrKind::ForestAtkBuff, 50);
    engine.remove_buff_from_field(0, AttrKind::ForestHpBuff, 100);

    let after: Vec<_> = state.field.iter().map(|c| (c.atk, c.hp, c.max_hp)).collect();
    assert_eq!(after, before);
    assert!(state.field.iter().all(|c| !c.has(AttrKind::ForestHpBuff)));
}

#[test]
fn entering_card_receives_then_broadcasts() {
    let catalogue = catalogue();
    let mut state = state(&catalogue, "Titan", &[]);
    place(&catalogue, &mut state, "Elder");
    let mut engine = BattleEngine::new(&mut state);
    engine.card_played_to_field(0).unwrap();
    assert_eq!(engine.state.field[0].max_hp, 900);

    place_into(&catalogue, &mut engine, "Sprite");
    engine.card_played_to_field(1).unwrap();
    assert_eq!(engine.state.field[1].max_hp, 400);
    assert_eq!(engine.state.field[1].atk, 130);

    place_into(&catalogue, &mut engine, "Elder");
    engine.card_played_to_field(2).unwrap();
    // The second elder buffs the first and the sprite, and is buffed in turn.
    assert_eq!(engine.state.field[0].max_hp, 1000);
    assert_eq!(engine.state.field[1].max_hp, 500);
    assert_eq!(engine.state.field[2].max_hp, 1000);

    engine.remove_card(0, true).unwrap();
    assert_eq!(engine.state.field[1].max_hp, 400);
    assert_eq!(engine.state.field[1].atk, 130);
    assert_eq!(engine.state.field[2].max_hp, 900);
}

fn place_into<'c>(catalogue: &'c Catalogue, engine: &mut BattleEngine<'_, 'c>, name: &str) {
    place(catalogue, engine.state, name);
}

#[test]
fn exile_returns_card_to_deck_without_desperation() {
    let catalogue = catalogue();
    let mut state = state(&catalogue, "Exiler", &[]);
    state.round = 5;
    place(&catalogue, &mut state, "Martyr");
    let imp = catalogue.find_card("Imp").unwrap();
    state.grave.push(Card::from_template(imp)).unwrap();

    BattleEngine::new(&mut state).boss_phase().unwrap();

    assert_eq!(names(&state.deck), vec!["Martyr"]);
    assert_eq!(names(&state.grave), vec!["Imp"]);
    assert!(state.field.is_empty());
    // The empty front slot lets the attack through.
    assert_eq!(state.hp, 8500);
}

#[test]
fn desperation_reincarnate_fires_on_death() {
    let catalogue = catalogue();
    let mut state = state(&catalogue, "Titan", &[]);
    place(&catalogue, &mut state, "Martyr");
    let imp = catalogue.find_card("Imp").unwrap();
    state.grave.push(Card::from_template(imp)).unwrap();

    BattleEngine::new(&mut state).remove_card(0, true).unwrap();

    assert_eq!(names(&state.deck), vec!["Imp"]);
    assert_eq!(names(&state.grave), vec!["Martyr"]);
}

#[test]
fn resurrection_roll_sends_the_dead_card_to_hand() {
    let catalogue = catalogue();
    let mut state = state(&catalogue, "Titan", &[]);
    place(&catalogue, &mut state, "Imp");
    state.field[0]
        .add_attr(Attribute::new(AttrKind::Resurrection, 100))
        .unwrap();

    BattleEngine::new(&mut state).remove_card(0, true).unwrap();

    assert_eq!(names(&state.hand), vec!["Imp"]);
    assert!(state.grave.is_empty());
    assert!(state.field[0].is_dead());
}

#[test]
fn dirt_roll_falls_back_to_deck_when_hand_is_full() {
    let catalogue = catalogue();
    let mut state = state(&catalogue, "Titan", &[]);
    for _ in 0..BattleConfig::MAX_CARDS_IN_HAND {
        in_hand(&catalogue, &mut state, "Knight");
    }
    place(&catalogue, &mut state, "Imp");
    state.field[0]
        .add_attr(Attribute::new(AttrKind::Dirt, 100))
        .unwrap();

    BattleEngine::new(&mut state).remove_card(0, true).unwrap();

    assert_eq!(names(&state.deck), vec!["Imp"]);
    assert_eq!(state.hand.len(), BattleConfig::MAX_CARDS_IN_HAND);
    assert!(state.grave.is_empty());
}

#[test]
fn failed_resurrection_roll_goes_to_grave() {
    let catalogue = catalogue();
    let mut state = state(&catalogue, "Titan", &[]);
    place(&catalogue, &mut state, "Imp");
    state.field[0]
        .add_attr(Attribute::new(AttrKind::Resurrection, 0))
        .unwrap();

    BattleEngine::new(&mut state).remove_card(0, true).unwrap();

    assert!(state.hand.is_empty());
    assert_eq!(names(&state.grave), vec!["Imp"]);
}

#[test]
fn backstab_lasts_one_turn() {
    let catalogue = catalogue();
    let mut state = state(&catalogue, "Titan", &[]);
    state.round = 6;
    in_hand(&catalogue, &mut state, "Assassin");
    let mut engine = BattleEngine::new(&mut state);

    engine.deploy_from_hand().unwrap();
    assert_eq!(engine.state.field[0].atk, 150);
    engine.player_phase().unwrap();

    assert_eq!(state.damage_done, 150);
    assert_eq!(state.field[0].atk, 100);
    assert!(!state.field[0].has(AttrKind::BackstabBuff));
}

#[test]
fn sacrifice_consumes_another_card() {
    let catalogue = catalogue();
    let mut state = state(&catalogue, "Titan", &[]);
    place(&catalogue, &mut state, "Imp");
    in_hand(&catalogue, &mut state, "Cultist");

    BattleEngine::new(&mut state).deploy_from_hand().unwrap();

    assert_eq!(names(&state.field), vec!["Cultist"]);
    assert_eq!(state.field[0].atk, 300);
    assert_eq!(state.field[0].max_hp, 900);
    assert_eq!(names(&state.grave), vec!["Imp"]);
}

#[test]
fn reanimated_card_sits_out_its_first_turn() {
    let catalogue = catalogue();
    let mut state = state(&catalogue, "Titan", &[]);
    state.round = 6;
    place(&catalogue, &mut state, "Necro");
    let knight = catalogue.find_card("Knight").unwrap();
    state.grave.push(Card::from_template(knight)).unwrap();

    BattleEngine::new(&mut state).player_phase().unwrap();

    assert_eq!(names(&state.field), vec!["Necro", "Knight"]);
    assert!(state.grave.is_empty());
    assert_eq!(state.field[1].timing, 0);
    assert!(!state.field[1].has(AttrKind::ReanimSickness));
    assert_eq!(state.damage_done, 0);
}

// ============================================================================
// Turn flow
// ============================================================================

#[test]
fn trapped_card_skips_its_attack_once() {
    let catalogue = catalogue();
    let mut state = state(&catalogue, "Titan", &[]);
    state.round = 6;
    place(&catalogue, &mut state, "Knight");
    state.field[0]
        .add_attr(Attribute::flag(AttrKind::TrapBuff))
        .unwrap();

    let mut engine = BattleEngine::new(&mut state);
    engine.player_phase().unwrap();
    assert_eq!(engine.state.damage_done, 0);
    assert!(!engine.state.field[0].has(AttrKind::TrapBuff));

    engine.player_phase().unwrap();
    assert_eq!(state.damage_done, 200);
}

#[test]
fn draw_takes_from_deck_tail_and_respects_full_hand() {
    let catalogue = catalogue();
    let mut state = state(&catalogue, "Titan", &["Imp", "Ogre"]);
    let mut engine = BattleEngine::new(&mut state);

    engine.draw_from_deck().unwrap();
    assert_eq!(names(&engine.state.hand), vec!["Ogre"]);

    for _ in 0..4 {
        place_in_hand(&catalogue, &mut engine, "Knight");
    }
    engine.draw_from_deck().unwrap();
    assert_eq!(engine.state.hand.len(), 5);
    assert_eq!(names(&state.deck), vec!["Imp"]);
}

fn place_in_hand<'c>(catalogue: &'c Catalogue, engine: &mut BattleEngine<'_, 'c>, name: &str) {
    in_hand(catalogue, engine.state, name);
}

#[test]
fn leaf_rune_hits_boss_after_round_fourteen() {
    let catalogue = catalogue();
    let mut state = state(&catalogue, "Titan", &["Leaf"]);
    state.round = 14;
    BattleEngine::new(&mut state).player_phase().unwrap();
    assert_eq!(state.damage_done, 0);

    state.round = 16;
    BattleEngine::new(&mut state).player_phase().unwrap();
    assert_eq!(state.damage_done, 240);
    assert_eq!(state.runes[0].charges_used, 1);
    assert!(!state.runes[0].active);
}

#[test]
fn field_buff_rune_expires_next_round() {
    let catalogue = catalogue();
    let mut state = state(&catalogue, "Titan", &["Tsunami"]);
    state.round = 2;
    state.hp = 4000;
    place(&catalogue, &mut state, "Stump");

    BattleEngine::new(&mut state).player_phase().unwrap();
    assert!(state.field[0].has(AttrKind::Tsunami));
    assert!(state.runes[0].active);

    state.hp = 8800;
    state.round = 4;
    BattleEngine::new(&mut state).player_phase().unwrap();
    assert!(!state.field[0].has(AttrKind::Tsunami));
    assert!(!state.runes[0].active);
    assert_eq!(state.runes[0].charges_used, 1);
}

#[test]
fn spring_breeze_gives_back_its_hp_when_it_ends() {
    let catalogue = catalogue();
    let mut state = state(&catalogue, "Titan", &["Spring Breeze"]);
    state.round = 2;
    place(&catalogue, &mut state, "Stump");
    in_hand(&catalogue, &mut state, "Sprite");
    in_hand(&catalogue, &mut state, "Sprite");

    BattleEngine::new(&mut state).player_phase().unwrap();
    assert!(state.field[0].has(AttrKind::SpringBreeze));
    assert_eq!((state.field[0].hp, state.field[0].max_hp), (10_240, 10_240));

    state.hand.clear();
    state.field[0].hp = 10_100;
    state.round = 4;
    BattleEngine::new(&mut state).player_phase().unwrap();

    assert!(!state.field[0].has(AttrKind::SpringBreeze));
    assert_eq!((state.field[0].hp, state.field[0].max_hp), (10_000, 10_000));
    assert_eq!(state.runes[0].charges_used, 1);
    assert!(!state.runes[0].active);
}

#[test]
fn clear_spring_waits_for_a_damaged_card() {
    let catalogue = catalogue();
    let mut state = state(&catalogue, "Titan", &["Clear Spring"]);
    state.round = 2;
    place(&catalogue, &mut state, "Yeti");
    place(&catalogue, &mut state, "Yeti");

    BattleEngine::new(&mut state).player_phase().unwrap();
    assert_eq!(state.runes[0].charges_used, 0);

    state.field[1].hp = 500;
    state.round = 4;
    BattleEngine::new(&mut state).player_phase().unwrap();

    assert_eq!(state.runes[0].charges_used, 1);
    assert!(!state.runes[0].active);
    assert_eq!(state.field[0].hp, 1000);
    assert_eq!(state.field[1].hp, 725);
}

// ============================================================================
// Status damage & healing
// ============================================================================

#[test]
fn toxic_clouds_wears_off_and_hides_the_next_status_for_a_turn() {
    let catalogue = catalogue();
    let mut state = state(&catalogue, "Titan", &[]);
    state.round = 6;
    place(&catalogue, &mut state, "Stump");
    let card = &mut state.field[0];
    card.add_attr(Attribute::new(AttrKind::ToxicClouds, 10)).unwrap();
    card.add_attr(Attribute::new(AttrKind::FireGod, 20)).unwrap();

    BattleEngine::new(&mut state).player_phase().unwrap();
    assert_eq!(state.field[0].hp, 9990);
    assert!(!state.field[0].has(AttrKind::ToxicClouds));
    assert!(state.field[0].has(AttrKind::FireGod));

    state.round = 8;
    BattleEngine::new(&mut state).player_phase().unwrap();
    assert_eq!(state.field[0].hp, 9970);
    assert!(state.field[0].has(AttrKind::FireGod));
}

#[test]
fn fire_god_burns_a_card_to_the_grave() {
    let catalogue = catalogue();
    let mut state = state(&catalogue, "Titan", &[]);
    state.round = 6;
    place(&catalogue, &mut state, "Imp");
    state.field[0]
        .add_attr(Attribute::new(AttrKind::FireGod, 500))
        .unwrap();

    BattleEngine::new(&mut state).player_phase().unwrap();

    assert_eq!(state.damage_done, 100);
    assert!(state.field.is_empty());
    assert_eq!(names(&state.grave), vec!["Imp"]);
}

#[test]
fn lacerated_card_skips_its_end_of_turn_heal() {
    let catalogue = catalogue();
    let mut state = state(&catalogue, "Ripper", &[]);
    place(&catalogue, &mut state, "Knight");
    place(&catalogue, &mut state, "Knight");
    for card in state.field.iter_mut() {
        card.add_attr(Attribute::new(AttrKind::Rejuvenate, 100)).unwrap();
    }

    state.round = 5;
    BattleEngine::new(&mut state).boss_phase().unwrap();
    assert_eq!(state.field[0].hp, 900);
    assert!(state.field[0].has(AttrKind::LacerateBuff));
    assert!(!state.field[1].has(AttrKind::LacerateBuff));

    state.field[1].hp = 800;
    state.round = 6;
    BattleEngine::new(&mut state).player_phase().unwrap();

    assert_eq!(state.field[0].hp, 900);
    assert_eq!(state.field[1].hp, 900);
}

// ============================================================================
// Boss abilities
// ============================================================================

#[test]
fn snipe_hits_the_last_of_the_weakest_cards() {
    let catalogue = catalogue();
    let mut state = state(&catalogue, "Sniper", &[]);
    state.round = 5;
    for name in ["Knight", "Imp", "Ogre", "Imp"] {
        place(&catalogue, &mut state, name);
    }

    BattleEngine::new(&mut state).boss_phase().unwrap();

    let hps: Vec<_> = state.field.iter().map(|card| card.hp).collect();
    assert_eq!(hps, vec![1000, 400, 900, 250]);
    assert_eq!(state.hp, 8800);
}

#[test]
fn snipe_kills_a_card_it_brings_to_zero() {
    let catalogue = catalogue();
    let mut state = state(&catalogue, "Sniper", &[]);
    state.round = 5;
    place(&catalogue, &mut state, "Knight");
    place(&catalogue, &mut state, "Imp");
    state.field[1].hp = 150;

    BattleEngine::new(&mut state).boss_phase().unwrap();

    assert_eq!(names(&state.field), vec!["Knight"]);
    assert_eq!(names(&state.grave), vec!["Imp"]);
}

#[test]
fn mana_corrupt_triples_against_reflection_and_immunity() {
    let catalogue = catalogue();
    let mut state = state(&catalogue, "Corruptor", &[]);
    state.round = 5;
    place(&catalogue, &mut state, "Knight");
    BattleEngine::new(&mut state).boss_phase().unwrap();
    assert_eq!(state.field[0].hp, 900);

    for kind in [AttrKind::Reflection, AttrKind::Immunity] {
        let mut state = self::state(&catalogue, "Corruptor", &[]);
        state.round = 5;
        place(&catalogue, &mut state, "Knight");
        state.field[0].add_attr(Attribute::flag(kind)).unwrap();
        BattleEngine::new(&mut state).boss_phase().unwrap();
        assert_eq!(state.field[0].hp, 700, "{kind}");
    }
}

#[test]
fn destroy_removes_a_card_unless_it_resists() {
    let catalogue = catalogue();
    let mut state = state(&catalogue, "Destroyer", &[]);
    state.round = 5;
    place(&catalogue, &mut state, "Knight");
    BattleEngine::new(&mut state).boss_phase().unwrap();
    assert!(state.field.is_empty());
    assert_eq!(names(&state.grave), vec!["Knight"]);

    let mut state = self::state(&catalogue, "Destroyer", &[]);
    state.round = 5;
    place(&catalogue, &mut state, "Knight");
    state.field[0]
        .add_attr(Attribute::flag(AttrKind::Resistance))
        .unwrap();
    BattleEngine::new(&mut state).boss_phase().unwrap();
    assert_eq!(names(&state.field), vec!["Knight"]);
    assert_eq!(state.field[0].hp, 1000);
    assert!(state.grave.is_empty());
}

#[test]
fn damnation_scales_with_field_size() {
    let catalogue = catalogue();
    let mut state = state(&catalogue, "Doom", &[]);
    state.round = 5;
    for name in ["Knight", "Imp", "Ogre"] {
        place(&catalogue, &mut state, name);
    }

    BattleEngine::new(&mut state).boss_phase().unwrap();

    assert_eq!(state.hp, 8740);
    let hps: Vec<_> = state.field.iter().map(|card| card.hp).collect();
    assert_eq!(hps, vec![1000, 400, 900]);
}
