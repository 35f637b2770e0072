//! Reconciliation between caller button order and the native host's slots.
//!
//! Callers list the negative/cancel button of a confirm first. The native
//! host treats its *last* slot as cancel and reports the chosen slot as a
//! 1-based number, or nothing at all when the dialog was dismissed. Two named
//! steps bridge the conventions:
//!
//! - [`to_native_display_order`] rotates the first confirm button to the end
//!   before the dialog is shown.
//! - [`NativeLayout::from_native_index`] turns the host's report back into a
//!   0-based [`Settlement`].
//!
//! ```text
//! caller order     [Yes, No, Cancel]
//! display order    [No, Cancel, Yes]      native slots 1, 2, 3
//! slot 1           Resolved(0)            fires No
//! slot 2           Resolved(1)            fires Cancel
//! slot 3 / none    Rejected(2)            fires Yes
//! ```
//!
//! Indices reported to callers are display positions, so the button that
//! fires for `Resolved(i)` is the one shown in slot `i + 1`.

use crate::{Button, DialogKind, DialogRejection, DialogSettings};

/// Reorder buttons into the order the native host displays them.
///
/// A confirm moves its first button (the caller's cancel) to the end, where
/// the native host expects its cancel button. An alert is shown as is.
pub fn to_native_display_order<T>(kind: DialogKind, mut items: Vec<T>) -> Vec<T> {
    if kind == DialogKind::Confirm && !items.is_empty() {
        items.rotate_left(1);
    }
    items
}

/// Join button labels into the single string the native host expects.
pub fn join_labels(buttons: &[Button], separator: &str) -> String {
    buttons
        .iter()
        .map(Button::label)
        .collect::<Vec<_>>()
        .join(separator)
}

/// The settled outcome of a dialog as a 0-based display position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Settlement {
    /// A positive outcome.
    Resolved(usize),
    /// The designated cancel outcome.
    Rejected(usize),
}

impl Settlement {
    /// The settled display position.
    pub fn index(&self) -> usize {
        match self {
            Settlement::Resolved(index) | Settlement::Rejected(index) => *index,
        }
    }

    /// Whether this is a positive outcome.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Settlement::Resolved(_))
    }
}

impl From<Settlement> for Result<usize, DialogRejection> {
    fn from(settlement: Settlement) -> Self {
        match settlement {
            Settlement::Resolved(index) => Ok(index),
            Settlement::Rejected(index) => Err(DialogRejection::Cancelled { index }),
        }
    }
}

/// The slot arrangement of one native dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeLayout {
    kind: DialogKind,
    button_count: usize,
    visible_slots: usize,
}

impl NativeLayout {
    /// Describe a native dialog of `kind` showing `button_count` caller
    /// supplied buttons. Without custom buttons the host shows its default
    /// set, sized by `settings`.
    pub fn new(kind: DialogKind, button_count: usize, settings: &DialogSettings) -> Self {
        let defaults = match kind {
            DialogKind::Alert => settings.default_alert_buttons,
            DialogKind::Confirm => settings.default_confirm_buttons,
        };
        let visible_slots = if button_count > 0 {
            button_count
        } else {
            defaults.max(1)
        };

        Self {
            kind,
            button_count,
            visible_slots,
        }
    }

    /// The dialog flavour.
    pub fn kind(&self) -> DialogKind {
        self.kind
    }

    /// Number of caller supplied buttons.
    pub fn button_count(&self) -> usize {
        self.button_count
    }

    /// Number of slots the native host displays.
    pub fn visible_slots(&self) -> usize {
        self.visible_slots
    }

    /// Display position of the cancel button. Alerts have none.
    pub fn cancel_position(&self) -> Option<usize> {
        match self.kind {
            DialogKind::Alert => None,
            DialogKind::Confirm => Some(self.visible_slots - 1),
        }
    }

    /// Whether the button displayed at `position` is the cancel button.
    pub fn is_cancel_position(&self, position: usize) -> bool {
        self.cancel_position() == Some(position)
    }

    /// The 1-based native slot of the button displayed at `position`.
    pub fn to_native_slot(&self, position: usize) -> Option<u32> {
        if position < self.visible_slots {
            u32::try_from(position + 1).ok()
        } else {
            None
        }
    }

    /// The display position the user actually pressed, if any.
    ///
    /// `None`, `Some(0)` and slots the host never displayed all mean the
    /// dialog was dismissed without a choice.
    pub fn chosen_position(&self, raw: Option<u32>) -> Option<usize> {
        raw.map(|slot| slot as usize)
            .filter(|slot| (1..=self.visible_slots).contains(slot))
            .map(|slot| slot - 1)
    }

    /// Map the value reported by the native host to a settlement.
    ///
    /// A dismissed confirm settles exactly like its cancel button. A
    /// dismissed alert still resolves with position 0, but no button was
    /// pressed, so callers should consult [`NativeLayout::chosen_position`]
    /// before notifying buttons.
    pub fn from_native_index(&self, raw: Option<u32>) -> Settlement {
        let chosen = self.chosen_position(raw);

        match self.cancel_position() {
            None => Settlement::Resolved(chosen.unwrap_or(0)),
            Some(cancel) => match chosen {
                Some(position) if position != cancel => Settlement::Resolved(position),
                _ => Settlement::Rejected(cancel),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn layout(kind: DialogKind, button_count: usize) -> NativeLayout {
        NativeLayout::new(kind, button_count, &DialogSettings::default())
    }

    #[test]
    fn it_rotates_the_first_confirm_button_to_the_end() {
        let order = to_native_display_order(DialogKind::Confirm, vec!["Yes", "No", "Cancel"]);
        assert_eq!(order, vec!["No", "Cancel", "Yes"]);
    }

    #[test]
    fn it_keeps_alert_buttons_in_caller_order() {
        let order = to_native_display_order(DialogKind::Alert, vec!["A", "B", "C"]);
        assert_eq!(order, vec!["A", "B", "C"]);
    }

    #[test]
    fn it_rotates_empty_and_single_button_lists_as_no_ops() {
        assert_eq!(
            to_native_display_order::<&str>(DialogKind::Confirm, vec![]),
            Vec::<&str>::new()
        );
        assert_eq!(
            to_native_display_order(DialogKind::Confirm, vec!["Only"]),
            vec!["Only"]
        );
    }

    #[test]
    fn it_joins_labels_with_the_separator() {
        let buttons = vec![Button::new("No"), Button::default(), Button::new("Yes")];
        assert_eq!(join_labels(&buttons, ","), "No,,Yes");
        assert_eq!(join_labels(&[], ","), "");
    }

    #[test]
    fn it_rejects_when_the_last_displayed_slot_is_chosen() {
        let layout = layout(DialogKind::Confirm, 3);
        assert_eq!(layout.from_native_index(Some(3)), Settlement::Rejected(2));
    }

    #[test]
    fn it_resolves_with_the_display_position_of_other_slots() {
        let layout = layout(DialogKind::Confirm, 3);
        assert_eq!(layout.from_native_index(Some(1)), Settlement::Resolved(0));
        assert_eq!(layout.from_native_index(Some(2)), Settlement::Resolved(1));
    }

    #[test]
    fn it_rejects_the_default_cancel_slot_without_custom_buttons() {
        let layout = layout(DialogKind::Confirm, 0);
        assert_eq!(layout.visible_slots(), 2);
        assert_eq!(layout.from_native_index(Some(2)), Settlement::Rejected(1));
        assert_eq!(layout.from_native_index(Some(1)), Settlement::Resolved(0));
    }

    #[test]
    fn it_treats_dismissal_as_cancel_for_confirm() {
        let layout = layout(DialogKind::Confirm, 3);
        assert_eq!(layout.from_native_index(None), Settlement::Rejected(2));
        assert_eq!(layout.from_native_index(Some(0)), Settlement::Rejected(2));
        assert_eq!(layout.from_native_index(Some(9)), Settlement::Rejected(2));
    }

    #[test]
    fn it_rejects_a_single_button_confirm_on_that_button() {
        let layout = layout(DialogKind::Confirm, 1);
        assert_eq!(layout.from_native_index(Some(1)), Settlement::Rejected(0));
        assert_eq!(layout.from_native_index(None), Settlement::Rejected(0));
    }

    #[test]
    fn it_never_rejects_an_alert() {
        let layout = layout(DialogKind::Alert, 2);
        assert_eq!(layout.cancel_position(), None);
        assert_eq!(layout.from_native_index(Some(2)), Settlement::Resolved(1));
        assert_eq!(layout.from_native_index(None), Settlement::Resolved(0));
        assert_eq!(layout.from_native_index(Some(0)), Settlement::Resolved(0));
    }

    #[test]
    fn it_reports_no_choice_for_a_dismissal() {
        let layout = layout(DialogKind::Alert, 2);
        assert_eq!(layout.chosen_position(Some(1)), Some(0));
        assert_eq!(layout.chosen_position(Some(2)), Some(1));
        assert_eq!(layout.chosen_position(None), None);
        assert_eq!(layout.chosen_position(Some(0)), None);
        assert_eq!(layout.chosen_position(Some(7)), None);
    }

    #[test]
    fn it_honours_a_configured_default_button_count() {
        let settings = DialogSettings {
            default_confirm_buttons: 3,
            ..DialogSettings::default()
        };
        let layout = NativeLayout::new(DialogKind::Confirm, 0, &settings);

        assert_eq!(layout.from_native_index(Some(2)), Settlement::Resolved(1));
        assert_eq!(layout.from_native_index(Some(3)), Settlement::Rejected(2));
    }

    #[test]
    fn it_converts_settlements_into_results() {
        let resolved: Result<usize, DialogRejection> = Settlement::Resolved(1).into();
        let rejected: Result<usize, DialogRejection> = Settlement::Rejected(2).into();

        assert_eq!(resolved, Ok(1));
        assert_eq!(rejected, Err(DialogRejection::Cancelled { index: 2 }));
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn choosing_the_cancel_slot_rejects_with_the_last_position(count in 0usize..32) {
                let layout = layout(DialogKind::Confirm, count);
                let cancel = (if count > 0 { count } else { 2 }) - 1;
                let slot = u32::try_from(cancel + 1).unwrap();

                prop_assert_eq!(layout.from_native_index(Some(slot)), Settlement::Rejected(cancel));
                prop_assert_eq!(layout.from_native_index(None), Settlement::Rejected(cancel));
            }

            #[test]
            fn choosing_any_other_slot_resolves_with_its_position(
                (count, position) in (2usize..32).prop_flat_map(|count| (Just(count), 0..count - 1))
            ) {
                let layout = layout(DialogKind::Confirm, count);
                let slot = layout.to_native_slot(position);

                prop_assert_eq!(slot, Some(u32::try_from(position + 1).unwrap()));
                prop_assert_eq!(
                    layout.from_native_index(slot),
                    Settlement::Resolved(position)
                );
            }

            #[test]
            fn alerts_always_resolve_within_the_visible_slots(
                count in 0usize..32,
                raw in proptest::option::of(0u32..64),
            ) {
                let layout = layout(DialogKind::Alert, count);
                let settlement = layout.from_native_index(raw);

                prop_assert!(settlement.is_resolved());
                prop_assert!(settlement.index() < count.max(1));
            }

            #[test]
            fn rotation_moves_exactly_the_first_item(items in proptest::collection::vec(any::<u8>(), 1..16)) {
                let order = to_native_display_order(DialogKind::Confirm, items.clone());

                prop_assert_eq!(order.last(), items.first());
                prop_assert_eq!(&order[..order.len() - 1], &items[1..]);
            }
        }
    }
}
