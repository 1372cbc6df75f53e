use crate::game_state::chess_rules::{home_square, KING_SLOT};
use crate::game_state::chess_types::*;

/// Per-color, per-slot table of where each piece currently stands.
///
/// `None` marks a captured piece. Entries are only written by [`Board`], in
/// the same operation that changes the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoordinateIndex {
    slots: [[Option<Square>; SLOTS_PER_COLOR]; 2],
}

impl Default for CoordinateIndex {
    fn default() -> Self {
        Self {
            slots: [[None; SLOTS_PER_COLOR]; 2],
        }
    }
}

impl CoordinateIndex {
    /// Index for the opening position: every slot on its home square.
    pub fn starting() -> Self {
        let mut index = Self::default();
        for color in [Color::White, Color::Black] {
            for slot in 0..SLOTS_PER_COLOR as SlotId {
                index.set(color, slot, Some(home_square(color, slot)));
            }
        }
        index
    }

    #[inline]
    pub fn get(&self, color: Color, slot: SlotId) -> Option<Square> {
        self.slots[color.index()][slot as usize]
    }

    #[inline]
    pub(crate) fn set(&mut self, color: Color, slot: SlotId, square: Option<Square>) {
        self.slots[color.index()][slot as usize] = square;
    }

    #[inline]
    pub fn king(&self, color: Color) -> Option<Square> {
        self.get(color, KING_SLOT)
    }

    /// `(slot, square)` for every piece of `color` still on the board.
    pub fn live(&self, color: Color) -> impl Iterator<Item = (SlotId, Square)> + '_ {
        self.slots[color.index()]
            .iter()
            .enumerate()
            .filter_map(|(slot, entry)| entry.map(|sq| (slot as SlotId, sq)))
    }

    /// Slots of `color` whose entry is the captured sentinel.
    pub fn captured(&self, color: Color) -> impl Iterator<Item = SlotId> + '_ {
        self.slots[color.index()]
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.is_none())
            .map(|(slot, _)| slot as SlotId)
    }
}
