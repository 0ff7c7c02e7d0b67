use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Counter animations
pub const ESTIMATE_ANIMATION_MS: f64 = 500.0;
pub const PLAN_PRICE_ANIMATION_MS: f64 = 300.0;

// Plan card pulse on billing toggle
pub const CARD_PULSE_SCALE: f64 = 0.98;
pub const CARD_PULSE_BASE_DELAY_MS: u32 = 100;
pub const CARD_PULSE_STAGGER_MS: u32 = 50;

// Call-to-action press feedback
pub const CTA_PRESS_SCALE: f64 = 0.95;
pub const CTA_PRESS_MS: u32 = 150;

// Navigation
pub const NAV_HEIGHT_PX: f64 = 70.0;
pub const NAV_SCROLLED_THRESHOLD_PX: f64 = 50.0;

// Reveal on scroll
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Delay before a plan card springs back after the toggle pulse.
pub fn card_pulse_delay_ms(index: usize) -> u32 {
    CARD_PULSE_BASE_DELAY_MS + CARD_PULSE_STAGGER_MS * index as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulse_delays_stagger_by_card_index() {
        assert_eq!(card_pulse_delay_ms(0), 100);
        assert_eq!(card_pulse_delay_ms(1), 150);
        assert_eq!(card_pulse_delay_ms(2), 200);
    }
}
