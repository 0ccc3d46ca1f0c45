// Frame pacing for the cooperative main loop. The loop polls input for this
// long, then ticks the active real-time game with the measured elapsed time,
// so the effective tick rate tracks the terminal's refresh ability.
pub const FRAME_INTERVAL_MS: u64 = 16;

// Age range served by the arcade catalog.
pub const MIN_AGE: u8 = 5;
pub const MAX_AGE: u8 = 9;
pub const DEFAULT_AGE: u8 = 7;
