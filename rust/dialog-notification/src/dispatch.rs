//! Per-button callbacks keyed by the settlement that fires them.
//!
//! A dialog settles once. The service hands that single settlement to
//! [`ButtonDispatch::fire`], which invokes the one callback registered for
//! the settled side and position, if any.

use crate::{Button, NativeLayout, Settlement};
use dialog_common::SharedFn;
use std::fmt::{Debug, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Success,
    Error,
}

impl From<&Settlement> for Side {
    fn from(settlement: &Settlement) -> Self {
        if settlement.is_resolved() {
            Side::Success
        } else {
            Side::Error
        }
    }
}

struct Target {
    position: usize,
    side: Side,
    callback: SharedFn<usize>,
}

#[derive(Default)]
pub(crate) struct ButtonDispatch {
    targets: Vec<Target>,
}

impl ButtonDispatch {
    /// Targets for a native dialog. `display` is in native display order;
    /// the button in the cancel slot of a confirm fires on rejection, every
    /// other button fires on resolution.
    pub(crate) fn native(layout: &NativeLayout, display: &[Button]) -> Self {
        let targets = display
            .iter()
            .enumerate()
            .filter_map(|(position, button)| {
                let callback = button.callback()?.clone();
                let side = if layout.is_cancel_position(position) {
                    Side::Error
                } else {
                    Side::Success
                };
                Some(Target {
                    position,
                    side,
                    callback,
                })
            })
            .collect();

        Self { targets }
    }

    /// Targets for a browser alert, which always resolves with 0: only the
    /// first button can fire.
    pub(crate) fn host_alert(buttons: &[Button]) -> Self {
        let mut dispatch = Self::default();
        dispatch.push(buttons, 0, Side::Success);
        dispatch
    }

    /// Targets for a browser confirm, which resolves with 1 when accepted and
    /// rejects with 0 when declined. The second button fires on accept, the
    /// first on decline.
    pub(crate) fn host_confirm(buttons: &[Button]) -> Self {
        let mut dispatch = Self::default();
        dispatch.push(buttons, 1, Side::Success);
        dispatch.push(buttons, 0, Side::Error);
        dispatch
    }

    fn push(&mut self, buttons: &[Button], position: usize, side: Side) {
        if let Some(callback) = buttons.get(position).and_then(Button::callback) {
            self.targets.push(Target {
                position,
                side,
                callback: callback.clone(),
            });
        }
    }

    /// Fire the callback registered for `settlement`, returning the position
    /// that fired.
    pub(crate) fn fire(&self, settlement: &Settlement) -> Option<usize> {
        let side = Side::from(settlement);
        let index = settlement.index();
        let target = self
            .targets
            .iter()
            .find(|target| target.side == side && target.position == index)?;

        (target.callback)(index);
        Some(index)
    }
}

impl Debug for ButtonDispatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(
                self.targets
                    .iter()
                    .map(|target| (target.position, target.side)),
            )
            .finish()
    }
}
