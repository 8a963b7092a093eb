// Tick and timing
pub const PHYSICS_TICK_MS: u64 = 16;
/// Longest frame a single `advance` call will simulate; longer gaps (pauses, lag) are dropped.
pub const MAX_FRAME_MS: u64 = 100;
pub const WARNING_COOLDOWN_MS: u64 = 500;

// Play area, in world units with y growing downward
pub const PLAY_WIDTH: f64 = 800.0;
pub const PLAY_HEIGHT: f64 = 600.0;
/// One hundredth of the play height. Gap placement is rolled in these units.
pub const VH: f64 = PLAY_HEIGHT / 100.0;

// Bird
pub const GRAVITY: f64 = 0.5;
pub const ASCEND_IMPULSE: f64 = -7.6;
pub const BIRD_X: f64 = 160.0;
pub const BIRD_START_Y: f64 = 40.0 * VH;
pub const BIRD_WIDTH: f64 = 40.0;
pub const BIRD_HEIGHT: f64 = 30.0;
pub const DANGER_ZONE: f64 = 60.0;

// Obstacles
pub const OBSTACLE_WIDTH: f64 = 52.0;
pub const OBSTACLE_LENGTH: f64 = 70.0 * VH;
pub const GAP_HEIGHT: f64 = 35.0 * VH;
pub const GAP_OFFSET_MIN: u32 = 8;
pub const GAP_OFFSET_MAX: u32 = 50;
pub const GAP_SAFETY_BUFFER: f64 = 20.0;

// Difficulty
pub const BASE_SPEED: f64 = 3.0;
pub const MAX_SPEED: f64 = 20.0;
pub const SPEED_STEP: f64 = 2.0;
pub const BASE_SPAWN_INTERVAL: u32 = 145;
pub const MIN_SPAWN_INTERVAL: u32 = 50;
pub const SPAWN_INTERVAL_STEP: u32 = 10;
pub const LEVEL_UP_EVERY: u32 = 5;

// Persistence
pub const HIGH_SCORE_KEY: &str = "High Score";
pub const CONFIG_FILENAME: &str = "config.json";
pub const STORAGE_FILENAME: &str = "storage.json";
pub const LOG_FILENAME: &str = "skyward.log";
