//! Chart Model
//!
//! This module defines the `Chart` entity, the single source of truth shared
//! by both chart views. It owns the [`ChartState`] (series, viewport,
//! markers) and funnels every mutation through [`ChartState::apply`].
//!
//! As a GPUI Entity, it notifies its observers (both `ChartView`s and the
//! container) after every command that changed something, so the two charts
//! always repaint from the same viewport.

use crate::data_types::{ChartCommand, ChartState};
use crate::theme::ChartTheme;
use gpui::*;

pub struct Chart {
    pub state: ChartState,
    pub theme: ChartTheme,
}

impl Chart {
    pub fn new(state: ChartState) -> Self {
        Self {
            state,
            theme: ChartTheme::default(),
        }
    }

    pub fn with_theme(mut self, theme: ChartTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Applies one command and notifies observers if it changed the state.
    pub fn dispatch(&mut self, command: ChartCommand, cx: &mut Context<Self>) -> bool {
        let changed = self.state.apply(command);
        if changed {
            cx.notify();
        }
        changed
    }

    pub fn dispatch_all(
        &mut self,
        commands: impl IntoIterator<Item = ChartCommand>,
        cx: &mut Context<Self>,
    ) -> bool {
        let mut changed = false;
        for command in commands {
            changed |= self.state.apply(command);
        }
        if changed {
            cx.notify();
        }
        changed
    }

    pub fn set_theme(&mut self, theme: ChartTheme, cx: &mut Context<Self>) {
        self.theme = theme;
        cx.notify();
    }
}
