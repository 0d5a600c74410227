//! Ordered fixed-capacity card containers and the selection helpers that
//! draw from them.

use core::ops::{Index, IndexMut};

use arrayvec::ArrayVec;

use crate::config::BattleConfig;
use crate::rng::RandomStream;
use crate::state::{AttrKind, CapacityError, Card, RosterKind};

/// Field indices returned by multi-target selection.
pub type Selection = ArrayVec<usize, { BattleConfig::MAX_CARDS_IN_SET }>;

/// Criterion for [`Roster::find_weakest`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Weakest {
    /// Lowest current hp. Ties resolve to the last tied card in roster order.
    LowestHp,
    /// Largest `max_hp - hp`. Ties resolve uniformly at random.
    MostDamaged,
}

/// One of deck, hand, field or graveyard.
///
/// Removal shifts later cards left; nothing else reorders the roster except
/// an explicit shuffle.
#[derive(Clone, Debug)]
pub struct Roster<'c> {
    kind: RosterKind,
    cards: ArrayVec<Card<'c>, { BattleConfig::MAX_CARDS_IN_SET }>,
}

impl<'c> Roster<'c> {
    pub fn new(kind: RosterKind) -> Self {
        Self {
            kind,
            cards: ArrayVec::new(),
        }
    }

    pub fn kind(&self) -> RosterKind {
        self.kind
    }

    fn full(&self) -> CapacityError {
        CapacityError::RosterFull {
            roster: self.kind,
            max: BattleConfig::MAX_CARDS_IN_SET,
        }
    }

    /// Appends at the end (the "top" for the deck, which deals from its tail).
    pub fn push(&mut self, card: Card<'c>) -> Result<(), CapacityError> {
        let err = self.full();
        self.cards.try_push(card).map_err(|_| err)
    }

    /// Inserts at a uniformly drawn position in `[0, len]`.
    pub fn insert_random(
        &mut self,
        rng: &mut impl RandomStream,
        card: Card<'c>,
    ) -> Result<(), CapacityError> {
        let pos = rng.below(self.cards.len() as u32 + 1) as usize;
        let err = self.full();
        self.cards.try_insert(pos, card).map_err(|_| err)
    }

    pub fn remove(&mut self, index: usize) -> Card<'c> {
        self.cards.remove(index)
    }

    pub fn pop(&mut self) -> Option<Card<'c>> {
        self.cards.pop()
    }

    pub fn get(&self, index: usize) -> Option<&Card<'c>> {
        self.cards.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Card<'c>> {
        self.cards.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.cards.is_full()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card<'c>> {
        self.cards.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Card<'c>> {
        self.cards.iter_mut()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Number of cards carrying `kind`.
    pub fn count_with(&self, kind: AttrKind) -> usize {
        self.cards.iter().filter(|card| card.has(kind)).count()
    }

    /// Drops dead placeholders, closing the gaps.
    pub fn compact_dead(&mut self) {
        self.cards.retain(|card| !card.is_dead());
    }

    /// Fisher-Yates pass driven by the battle's stream.
    pub fn shuffle(&mut self, rng: &mut impl RandomStream) {
        let len = self.cards.len();
        for i in 0..len.saturating_sub(1) {
            let r = rng.below((len - i) as u32) as usize;
            if r != 0 {
                self.cards.swap(i, i + r);
            }
        }
    }

    /// Index of a uniformly chosen living card.
    pub fn pick_alive(&self, rng: &mut impl RandomStream) -> Option<usize> {
        self.pick_where(rng, |_, card| card.is_alive())
    }

    /// Index of a uniformly chosen card accepted by `eligible`.
    ///
    /// Counts eligible cards first, draws once, then walks to the drawn one.
    /// Nothing is drawn when no card qualifies.
    pub fn pick_where(
        &self,
        rng: &mut impl RandomStream,
        eligible: impl Fn(usize, &Card<'c>) -> bool,
    ) -> Option<usize> {
        let candidates = || {
            self.cards
                .iter()
                .enumerate()
                .filter(|&(i, card)| eligible(i, card))
                .map(|(i, _)| i)
        };
        let count = candidates().count();
        if count == 0 {
            return None;
        }
        let r = rng.below(count as u32) as usize;
        candidates().nth(r)
    }

    /// Up to `n` distinct living cards, returned in ascending roster order.
    ///
    /// When every living card is requested no randomness is consumed.
    pub fn pick_n_alive(&self, rng: &mut impl RandomStream, n: usize) -> Selection {
        let mut picked: Selection = self
            .cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.is_alive())
            .map(|(i, _)| i)
            .collect();
        let alive = picked.len();
        let n = n.min(alive);
        if n == alive {
            return picked;
        }

        for i in 0..n {
            let r = rng.below((alive - i) as u32) as usize;
            if r != 0 {
                picked.swap(i, i + r);
            }
        }
        picked.truncate(n);
        picked.sort_unstable();
        picked
    }

    /// Living card with the lowest hp or the most missing hp.
    pub fn find_weakest(&self, rng: &mut impl RandomStream, mode: Weakest) -> Option<usize> {
        let score = |card: &Card<'c>| match mode {
            Weakest::LowestHp => -card.hp,
            Weakest::MostDamaged => card.missing_hp(),
        };
        let best = self
            .cards
            .iter()
            .filter(|card| card.is_alive())
            .map(score)
            .max()?;
        let tied = || {
            self.cards
                .iter()
                .enumerate()
                .filter(move |&(_, card)| card.is_alive() && score(card) == best)
                .map(|(i, _)| i)
        };
        let ties = tied().count();
        if ties == 1 {
            return tied().next();
        }
        let r = match mode {
            Weakest::LowestHp => ties - 1,
            Weakest::MostDamaged => rng.below(ties as u32) as usize,
        };
        tied().nth(r)
    }
}

impl<'c> Index<usize> for Roster<'c> {
    type Output = Card<'c>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cards[index]
    }
}

impl IndexMut<usize> for Roster<'_> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.cards[index]
    }
}
