// Player start
pub const STARTING_HEALTH: u32 = 6;
pub const STARTING_DAMAGE_PERCENT: u32 = 100;
pub const STARTING_ROUND: u32 = 1;

// Die
pub const DIE_FACES: u8 = 6;
/// Presentation delay between the roll request and the exchange being applied.
pub const ROLL_DELAY_MS: u64 = 1000;

// Monster spawn: base health in [min, max], plus (round - 1) * growth in [min, max]
pub const MONSTER_BASE_HEALTH_MIN: u32 = 6;
pub const MONSTER_BASE_HEALTH_MAX: u32 = 11;
pub const MONSTER_HEALTH_GROWTH_MIN: u32 = 2;
pub const MONSTER_HEALTH_GROWTH_MAX: u32 = 4;
pub const MONSTER_PATTERN_HEIGHT_MIN: usize = 3;
pub const MONSTER_PATTERN_HEIGHT_MAX: usize = 4;
pub const MONSTER_PATTERN_WIDTH_MIN: usize = 5;
pub const MONSTER_PATTERN_WIDTH_MAX: usize = 7;

// Monster counterattack: 1 on the first round, else 1 + [0, bonus]
pub const MONSTER_BASE_DAMAGE: u32 = 1;
pub const MONSTER_DAMAGE_BONUS_MAX: u32 = 2;

// Loot magnitude curves. Rounds below the threshold use the early ranges.
pub const EARLY_GAME_ROUND_LIMIT: u32 = 5;
pub const EARLY_FLAT_MIN: u32 = 1;
pub const EARLY_FLAT_MAX: u32 = 5;
pub const EARLY_PERCENT_MIN: u32 = 3;
pub const EARLY_PERCENT_MAX: u32 = 10;
pub const LATE_FLAT_BASE: u32 = 1;
pub const LATE_FLAT_SPREAD: u32 = 4;
pub const LATE_PERCENT_BASE: u32 = 5;
pub const LATE_PERCENT_PER_ROUND: u32 = 2;
pub const LATE_PERCENT_SPREAD: u32 = 9;

// Loot pool
pub const EFFECTS_PER_POOL: usize = 10;
pub const OFFER_SIZE: usize = 3;

// Combat gates
pub const EXECUTE_HEALTH_THRESHOLD: f64 = 0.3;
pub const LUCKY_BONUS_MIN: u32 = 2;
pub const LUCKY_BONUS_MAX: u32 = 4;
pub const CHAIN_LIGHTNING_CHANCE: f64 = 0.3;
pub const ARMOR_FAILURE_CHANCE: f64 = 0.2;
pub const MIN_MONSTER_DAMAGE_AFTER_ARMOR: u32 = 1;
