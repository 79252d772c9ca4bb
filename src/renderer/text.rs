//! HUD string formatting

use crate::consts::TICKS_PER_SECOND;
use crate::sim::Pole;

/// Fixed-point thousandths as `"int.frac"`, e.g. `12345 -> "12.345"`
pub fn milli(value: i64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    let v = value.unsigned_abs();
    format!("{sign}{}.{:03}", v / 1000, v % 1000)
}

/// Remaining play time in seconds, two decimals
pub fn seconds(ticks: u32) -> String {
    format!("{:.2}", ticks as f64 / TICKS_PER_SECOND as f64)
}

/// Whole seconds left for a countdown `remaining` ticks from its end
pub fn countdown_digit(remaining_ticks: u32) -> u32 {
    remaining_ticks.div_ceil(TICKS_PER_SECOND)
}

/// Hint telling the player which key flips the pole
pub fn guide(pole: Pole) -> &'static str {
    match pole {
        Pole::N => "Press S Key",
        Pole::S => "Press N Key",
    }
}

pub const PRESS_SPACE: &str = "Press Space Key";
pub const TITLE_PROMPT: &str = "Press S or N Key";
pub const LOGO_LINES: [&str; 4] = ["Manual", "Linear", "Motor", "Car"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_milli() {
        assert_eq!(milli(0), "0.000");
        assert_eq!(milli(12_345), "12.345");
        assert_eq!(milli(7), "0.007");
        assert_eq!(milli(-1_500), "-1.500");
    }

    #[test]
    fn test_seconds() {
        assert_eq!(seconds(600), "10.00");
        assert_eq!(seconds(45), "0.75");
    }

    #[test]
    fn test_countdown_digit() {
        assert_eq!(countdown_digit(180), 3);
        assert_eq!(countdown_digit(121), 3);
        assert_eq!(countdown_digit(120), 2);
        assert_eq!(countdown_digit(1), 1);
        assert_eq!(countdown_digit(0), 0);
    }

    #[test]
    fn test_guide_names_opposite_pole() {
        assert_eq!(guide(Pole::N), "Press S Key");
        assert_eq!(guide(Pole::S), "Press N Key");
    }
}
