//! Focus management for the form's tab order.

use jobform::FieldId;

/// One focusable control on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusSlot {
    FullName,
    Email,
    Phone,
    Position,
    /// A single checkbox inside the skills group.
    Skill(usize),
    CoverLetter,
    Submit,
    Reset,
}

impl FocusSlot {
    /// The field whose live validation fires when focus leaves this slot.
    ///
    /// Only the text fields validate on blur; the selector and the skills
    /// group validate on change instead, and the buttons are not fields.
    pub fn blurs(&self) -> Option<FieldId> {
        match self {
            FocusSlot::FullName => Some(FieldId::FullName),
            FocusSlot::Email => Some(FieldId::Email),
            FocusSlot::Phone => Some(FieldId::Phone),
            FocusSlot::CoverLetter => Some(FieldId::CoverLetter),
            _ => None,
        }
    }
}

/// Tab-order state over the focusable slots.
#[derive(Debug)]
pub struct FocusState {
    slots: Vec<FocusSlot>,
    current: usize,
}

impl FocusState {
    /// Build the declared tab order for a form with `skill_count` checkboxes.
    pub fn new(skill_count: usize) -> Self {
        let mut slots = vec![
            FocusSlot::FullName,
            FocusSlot::Email,
            FocusSlot::Phone,
            FocusSlot::Position,
        ];
        slots.extend((0..skill_count).map(FocusSlot::Skill));
        slots.push(FocusSlot::CoverLetter);
        slots.push(FocusSlot::Submit);
        slots.push(FocusSlot::Reset);
        Self { slots, current: 0 }
    }

    /// The currently focused slot.
    pub fn current(&self) -> FocusSlot {
        self.slots[self.current]
    }

    pub fn is_focused(&self, slot: FocusSlot) -> bool {
        self.current() == slot
    }

    /// Move focus forward, wrapping; returns the slot that lost focus.
    pub fn next(&mut self) -> FocusSlot {
        let left = self.current();
        self.current = (self.current + 1) % self.slots.len();
        left
    }

    /// Move focus backward, wrapping; returns the slot that lost focus.
    pub fn prev(&mut self) -> FocusSlot {
        let left = self.current();
        self.current = if self.current == 0 {
            self.slots.len() - 1
        } else {
            self.current - 1
        };
        left
    }

    /// Jump focus to a slot; slots outside the tab order are ignored.
    pub fn set(&mut self, slot: FocusSlot) {
        if let Some(idx) = self.slots.iter().position(|s| *s == slot) {
            self.current = idx;
        }
    }

    pub fn slots(&self) -> &[FocusSlot] {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_order_covers_every_control() {
        let focus = FocusState::new(2);
        assert_eq!(
            focus.slots(),
            &[
                FocusSlot::FullName,
                FocusSlot::Email,
                FocusSlot::Phone,
                FocusSlot::Position,
                FocusSlot::Skill(0),
                FocusSlot::Skill(1),
                FocusSlot::CoverLetter,
                FocusSlot::Submit,
                FocusSlot::Reset,
            ]
        );
    }

    #[test]
    fn test_next_wraps_around() {
        let mut focus = FocusState::new(1);
        for _ in 0..focus.slots().len() {
            focus.next();
        }
        assert_eq!(focus.current(), FocusSlot::FullName);
    }

    #[test]
    fn test_prev_wraps_backward() {
        let mut focus = FocusState::new(1);
        focus.prev();
        assert_eq!(focus.current(), FocusSlot::Reset);
    }

    #[test]
    fn test_next_reports_the_slot_that_lost_focus() {
        let mut focus = FocusState::new(1);
        let left = focus.next();
        assert_eq!(left, FocusSlot::FullName);
        assert_eq!(left.blurs(), Some(FieldId::FullName));
    }

    #[test]
    fn test_set_ignores_unknown_slot() {
        let mut focus = FocusState::new(2);
        focus.set(FocusSlot::Skill(1));
        assert_eq!(focus.current(), FocusSlot::Skill(1));

        focus.set(FocusSlot::Skill(9));
        assert_eq!(focus.current(), FocusSlot::Skill(1));
    }

    #[test]
    fn test_only_text_fields_blur() {
        assert_eq!(FocusSlot::Position.blurs(), None);
        assert_eq!(FocusSlot::Skill(0).blurs(), None);
        assert_eq!(FocusSlot::Submit.blurs(), None);
        assert_eq!(FocusSlot::Email.blurs(), Some(FieldId::Email));
    }
}
