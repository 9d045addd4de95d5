//! Reference tuning values for the default match configuration.
//!
//! Nothing in the engine reads these directly — they only seed
//! `MatchConfig::default()`. Hosts that want different rules build their
//! own `MatchConfig`.

/// Arena width in pixels.
pub const ARENA_WIDTH: f64 = 800.0;

/// Arena height in pixels (the lane runs along the vertical midline).
pub const ARENA_HEIGHT: f64 = 600.0;

// --- Towers ---

/// Distance of each tower's center from its arena edge.
pub const TOWER_MARGIN: f64 = 50.0;

/// Half-width of a tower footprint.
pub const TOWER_HALF_WIDTH: f64 = 25.0;

/// Starting (and maximum) health of both towers.
pub const TOWER_HEALTH: i32 = 300;

// --- Economy ---

/// Gold the player starts with.
pub const STARTING_GOLD: u32 = 100;

/// Gold added on each accrual period.
pub const GOLD_INCREMENT: u32 = 10;

/// Gold accrual period in milliseconds.
pub const GOLD_PERIOD_MS: u64 = 100;

// --- Combat ---

/// Minimum time between two tower attacks by the same unit (ms).
pub const ATTACK_DELAY_MS: u64 = 1200;

/// Gap between a unit's leading edge and the opposing tower's edge at
/// which the unit halts; doubles as the tower attack range.
pub const STOP_DISTANCE: f64 = 35.0;

/// How long a unit stays paused after spawning or after a mutual-moving
/// collision (ms).
pub const PAUSE_DURATION_MS: u64 = 500;

/// Displacement applied when a unit's health crosses below half.
pub const RETREAT_DISTANCE: f64 = 30.0;

// --- Units ---

/// Half-width of a unit body; two units overlap when their centers are
/// closer than twice this.
pub const UNIT_HALF_WIDTH: f64 = 15.0;

/// Distance a moving unit advances per tick (pixels).
pub const UNIT_SPEED: f64 = 2.0;

/// Period between enemy spawns in milliseconds.
pub const ENEMY_SPAWN_PERIOD_MS: u64 = 2000;

// --- Archetype catalog (index-aligned) ---

/// Gold cost per archetype.
pub const UNIT_COSTS: [u32; 6] = [15, 45, 50, 70, 90, 120];

/// Maximum health per archetype.
pub const UNIT_HEALTH: [i32; 6] = [15, 70, 35, 60, 95, 120];

/// Attack damage per archetype.
pub const UNIT_ATTACK: [i32; 6] = [15, 10, 35, 60, 95, 100];
