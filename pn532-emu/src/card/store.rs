// pn532-emu/src/card/store.rs

use crate::card::{CardPresence, VirtualCard};
use crate::constants::VIRTUAL_CARD_SLOTS;
use crate::{Error, Result};

/// The two card slots of the emulated field. At most one card is present at
/// a time and `active` always points at it.
#[derive(Debug, Clone)]
pub struct CardStore {
    cards: [VirtualCard; VIRTUAL_CARD_SLOTS],
    active: Option<usize>,
}

impl CardStore {
    /// Takes ownership of the cards; every card starts outside the field.
    pub fn new(mut cards: [VirtualCard; VIRTUAL_CARD_SLOTS]) -> Self {
        for card in cards.iter_mut() {
            card.set_presence(CardPresence::Absent);
        }
        Self {
            cards,
            active: None,
        }
    }

    pub fn card(&self, slot: usize) -> Option<&VirtualCard> {
        self.cards.get(slot)
    }

    pub fn card_mut(&mut self, slot: usize) -> Option<&mut VirtualCard> {
        self.cards.get_mut(slot)
    }

    pub fn cards(&self) -> &[VirtualCard] {
        &self.cards
    }

    pub fn active_slot(&self) -> Option<usize> {
        self.active
    }

    pub fn active_card(&self) -> Option<&VirtualCard> {
        self.active
            .and_then(|i| self.cards.get(i))
            .filter(|c| c.is_present())
    }

    pub fn active_card_mut(&mut self) -> Option<&mut VirtualCard> {
        self.active
            .and_then(|i| self.cards.get_mut(i))
            .filter(|c| c.is_present())
    }

    /// Put the card of `slot` into the field, removing the other one.
    /// Returns `Ok(false)` when the card was already present.
    pub fn place(&mut self, slot: usize) -> Result<bool> {
        let card = self
            .cards
            .get(slot)
            .ok_or(Error::CardSlotOutOfRange(slot))?;
        if card.is_present() {
            return Ok(false);
        }
        for (i, card) in self.cards.iter_mut().enumerate() {
            let presence = if i == slot {
                CardPresence::Present
            } else {
                CardPresence::Absent
            };
            card.set_presence(presence);
        }
        self.active = Some(slot);
        log::info!(
            "card {} ({}) placed in field",
            slot + 1,
            self.cards[slot].uid()
        );
        Ok(true)
    }

    /// Remove every card from the field.
    pub fn remove_all(&mut self) {
        for card in self.cards.iter_mut() {
            card.set_presence(CardPresence::Absent);
        }
        self.active = None;
        log::info!("card field reset, all cards removed");
    }

    /// Number of cards currently in the field (0 or 1).
    pub fn present_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_present()).count()
    }
}
