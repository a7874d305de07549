use crate::calculator::{CalculatorIntent, CalculatorReducer, CalculatorState, OperandFormatter};
use crate::config::Config;
use crate::mvi::Reducer;
use crate::ui::keypad::{button_at, KeypadButton};
use crate::ui::layout::layout_regions;
use ratatui::layout::Rect;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    /// Calculator state (MVI pattern).
    calculator: CalculatorState,
    formatter: OperandFormatter,
    show_keypad: bool,
    /// Keypad button to highlight until the next tick.
    pressed: Option<KeypadButton>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            size: None,
            calculator: CalculatorState::default(),
            formatter: config.formatter(),
            show_keypad: config.ui.show_keypad,
            pressed: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn state(&self) -> &CalculatorState {
        &self.calculator
    }

    pub fn show_keypad(&self) -> bool {
        self.show_keypad
    }

    pub fn pressed(&self) -> Option<KeypadButton> {
        self.pressed
    }

    /// Upper display line.
    pub fn previous_display(&self) -> String {
        self.calculator.previous_display(&self.formatter)
    }

    /// Lower display line.
    pub fn current_display(&self) -> String {
        self.calculator.current_display(&self.formatter)
    }

    pub fn dispatch(&mut self, intent: CalculatorIntent) {
        dispatch_mvi!(self, calculator, CalculatorReducer, intent);
        tracing::debug!(?intent, state = ?self.calculator, "Dispatched");
    }

    pub fn on_tick(&mut self) {
        self.pressed = None;
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    /// Left click at terminal cell (`column`, `row`). Presses the keypad
    /// button under the cursor, if any.
    pub fn on_click(&mut self, column: u16, row: u16) {
        if !self.show_keypad {
            return;
        }
        let Some((cols, rows)) = self.size else {
            return;
        };
        let regions = layout_regions(Rect::new(0, 0, cols, rows), self.show_keypad);
        let Some(button) = button_at(regions.keypad, column, row) else {
            return;
        };
        if let Some(intent) = button.intent() {
            self.pressed = Some(button);
            self.dispatch(intent);
        }
    }
}
