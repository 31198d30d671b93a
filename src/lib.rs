//! CFOP phase segmentation for Rubik's Cube reconstructions.
//!
//! Replays a solution against a virtual cube, measures solve progress after
//! every move, and groups the moves into conventionally named phases
//! (cross, pairs, OLL, PLL and their composite variants).
//!
//! - [`cube`]: facelet model, move notation, move metrics
//! - [`analysis`]: progress predicates, classifier, phase naming, replay
pub mod analysis;
pub mod cube;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Solve duration in seconds.
pub type Seconds = f32;
/// Move counts in any metric.
pub type Count = usize;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// NOTATION PARAMETERS
// ============================================================================
/// Length of generated random-move scrambles.
pub const SCRAMBLE_LENGTH: usize = 25;
/// Metric used when none is requested explicitly.
pub const DEFAULT_METRIC: cube::Metric = cube::Metric::Htm;
/// Label printed for phases whose boundary levels have no conventional name.
pub const UNNAMED_PHASE: &str = "unknown";
/// Separator between a phase's moves and its name in formatted solutions.
pub const PHASE_SEPARATOR: &str = " // ";
/// Decimal places kept when reporting turns per second.
pub const TPS_PRECISION: i32 = 2;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Environment variable overriding the terminal log level.
#[cfg(feature = "cli")]
pub const LOG_LEVEL_VAR: &str = "CFOP_LOG";

/// Terminal log level named by `CFOP_LOG` ("warn", "debug", "off", ...),
/// case-insensitive. Unset or unparseable values fall back to INFO.
#[cfg(feature = "cli")]
fn level(var: Option<&str>) -> log::LevelFilter {
    var.and_then(|s| s.trim().parse::<log::LevelFilter>().ok())
        .unwrap_or(log::LevelFilter::Info)
}

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO (or the
/// level named by `CFOP_LOG`) to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let level = level(std::env::var(LOG_LEVEL_VAR).ok().as_deref());
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
