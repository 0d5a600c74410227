//! Plain-text simulation report.

use std::io::{self, Write};

use battle_core::Loadout;
use battle_runtime::RunReport;

/// Seconds of cooldown between fights for a deck of `cost`.
pub fn cooldown_seconds(cost: i32) -> i32 {
    60 + 2 * cost
}

/// Report header fields that do not come from the run itself.
#[derive(Clone, Debug)]
pub struct Header<'a> {
    pub demon: &'a str,
    pub level: i32,
    pub hp: i32,
    pub milestone_round: i32,
    /// Deck cards in file order.
    pub deck: Vec<&'a str>,
    pub runes: Vec<&'a str>,
    pub cost: i32,
}

impl<'a> Header<'a> {
    pub fn new(loadout: &Loadout<'a>, level: i32, hp: i32, milestone_round: i32) -> Self {
        Self {
            demon: loadout.boss.name(),
            level,
            hp,
            milestone_round,
            deck: loadout.deck.iter().map(|card| card.name()).collect(),
            runes: loadout.runes.iter().map(|rune| rune.name()).collect(),
            cost: loadout.deck_cost(),
        }
    }
}

/// One `Dmg done = D` line per fight.
pub fn write_damages(out: &mut impl Write, damages: &[i32]) -> io::Result<()> {
    for damage in damages {
        writeln!(out, "Dmg done = {damage}")?;
    }
    Ok(())
}

pub fn write_report(out: &mut impl Write, header: &Header<'_>, run: &RunReport) -> io::Result<()> {
    let cooldown = cooldown_seconds(header.cost);
    writeln!(out, "Demon: {}", header.demon)?;
    writeln!(
        out,
        "Deck : (level {}, {} initial hp, {} cost, {}:{:02} cooldown)\n",
        header.level,
        header.hp,
        header.cost,
        cooldown / 60,
        cooldown % 60
    )?;
    for (i, card) in header.deck.iter().enumerate() {
        writeln!(out, "{:>2}) {}", i + 1, card)?;
    }
    writeln!(out, "\nRunes:\n")?;
    for rune in &header.runes {
        writeln!(out, "{rune}")?;
    }

    let summary = &run.summary;
    writeln!(
        out,
        "\nResults of simulation ({} fights):\n",
        summary.battles()
    )?;

    let rounds = &summary.rounds;
    writeln!(
        out,
        "Lowest  number of rounds      : {}",
        rounds.min().unwrap_or_default()
    )?;
    writeln!(
        out,
        "Highest number of rounds      : {}",
        rounds.max().unwrap_or_default()
    )?;
    writeln!(
        out,
        "Average number of rounds      : {:4.1}",
        rounds.average().unwrap_or_default()
    )?;
    if summary.milestone_hits > 0 {
        writeln!(
            out,
            "Percent time hitting round {} : {:4.1}",
            header.milestone_round,
            summary.milestone_percent().unwrap_or_default()
        )?;
    }
    writeln!(out)?;

    let damage = &summary.damage;
    let average = damage.average().unwrap_or_default();
    writeln!(
        out,
        "Lowest  damage                : {}",
        damage.min().unwrap_or_default()
    )?;
    writeln!(
        out,
        "Highest damage                : {}",
        damage.max().unwrap_or_default()
    )?;
    writeln!(out, "Average dmg per fight         : {average:5.1}")?;
    writeln!(
        out,
        "Average dmg per minute        : {:5.1}",
        average * 60.0 / f64::from(cooldown)
    )?;
    writeln!(out, "\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::{CardTemplate, Catalogue, Outcome};
    use battle_runtime::Summary;

    fn run(outcomes: &[(i32, i32, bool)]) -> RunReport {
        RunReport {
            summary: outcomes
                .iter()
                .map(|&(damage, rounds, hit_milestone)| Outcome {
                    damage,
                    rounds,
                    hit_milestone,
                })
                .collect::<Summary>(),
            damages: Vec::new(),
        }
    }

    #[test]
    fn cooldown_grows_two_seconds_per_cost() {
        assert_eq!(cooldown_seconds(0), 60);
        assert_eq!(cooldown_seconds(95), 250);
    }

    #[test]
    fn renders_full_report() {
        let catalogue = Catalogue::with_builtin_runes(vec![
            CardTemplate::new("DarkTitan", 1, 1, 300, 1_000_000),
            CardTemplate::new("Imp", 3, 2, 100, 400),
            CardTemplate::new("Ogre", 8, 4, 250, 900),
        ]);
        let loadout = catalogue
            .resolve("darktitan", ["Ogre", "Imp", "Leaf"])
            .unwrap();
        let header = Header::new(&loadout, 61, 8800, 50);
        let report = run(&[(1000, 52, true), (3000, 40, false)]);

        let mut out = Vec::new();
        write_report(&mut out, &header, &report).unwrap();
        let text = String::from_utf8(out).unwrap();

        let expected = "\
Demon: DarkTitan
Deck : (level 61, 8800 initial hp, 11 cost, 1:22 cooldown)

 1) Ogre
 2) Imp

Runes:

Leaf

Results of simulation (2 fights):

Lowest  number of rounds      : 40
Highest number of rounds      : 52
Average number of rounds      : 46.0
Percent time hitting round 50 : 50.0

Lowest  damage                : 1000
Highest damage                : 3000
Average dmg per fight         : 2000.0
Average dmg per minute        : 1463.4


";
        assert_eq!(text, expected);
    }

    #[test]
    fn milestone_line_is_omitted_when_never_reached() {
        let catalogue =
            Catalogue::with_builtin_runes(vec![CardTemplate::new("DarkTitan", 1, 1, 300, 1000)]);
        let loadout = catalogue.resolve("DarkTitan", Vec::<&str>::new()).unwrap();
        let header = Header::new(&loadout, 1, 1000, 50);

        let mut out = Vec::new();
        write_report(&mut out, &header, &run(&[(5, 3, false)])).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains("Percent time hitting"));
        assert!(text.contains("Average number of rounds      :  3.0\n"));
        assert!(text.contains("Average dmg per fight         :   5.0\n"));
    }

    #[test]
    fn damage_lines() {
        let mut out = Vec::new();
        write_damages(&mut out, &[12, 0]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Dmg done = 12\nDmg done = 0\n");
    }
}
