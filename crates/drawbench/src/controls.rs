//! Keyboard control panel.
//!
//! | key        | effect                              |
//! |------------|-------------------------------------|
//! | ↑ / ↓      | draw count ×10 / ÷10 (0 → 1 on ↑)   |
//! | → / ←      | draw count +100 / −100              |
//! | 0          | draw count 0                        |
//! | I          | toggle direct / indirect            |
//! | T / B      | next palette color for top / bottom |
//! | Esc        | quit                                |

use drawbench_engine::input::Key;
use drawbench_engine::paint::{Rgb, PALETTE};
use drawbench_engine::timing::MAX_DRAW_COUNT;

const STEP: u32 = 100;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Control {
    ScaleUp,
    ScaleDown,
    StepUp,
    StepDown,
    Zero,
    ToggleMode,
    CycleTop,
    CycleBottom,
    Exit,
}

pub fn control_for(key: Key) -> Option<Control> {
    Some(match key {
        Key::ArrowUp => Control::ScaleUp,
        Key::ArrowDown => Control::ScaleDown,
        Key::ArrowRight => Control::StepUp,
        Key::ArrowLeft => Control::StepDown,
        Key::Digit0 => Control::Zero,
        Key::I => Control::ToggleMode,
        Key::T => Control::CycleTop,
        Key::B => Control::CycleBottom,
        Key::Escape => Control::Exit,
        _ => return None,
    })
}

/// New draw count for a draw-count control; other controls leave it unchanged.
pub fn step_draw_count(count: u32, control: Control) -> u32 {
    let next = match control {
        Control::ScaleUp if count == 0 => 1,
        Control::ScaleUp => count.saturating_mul(10),
        Control::ScaleDown => count / 10,
        Control::StepUp => count.saturating_add(STEP),
        Control::StepDown => count.saturating_sub(STEP),
        Control::Zero => 0,
        _ => count,
    };
    next.min(MAX_DRAW_COUNT)
}

/// Position in [`PALETTE`] for one gradient stop.
#[derive(Debug, Default, Clone)]
pub struct PaletteCursor {
    index: Option<usize>,
}

impl PaletteCursor {
    /// Moves to the next palette entry and returns it.
    pub fn advance(&mut self) -> Rgb {
        let next = self.index.map_or(0, |i| (i + 1) % PALETTE.len());
        self.index = Some(next);
        PALETTE[next]
    }
}
