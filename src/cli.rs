use clap::{Parser, ValueEnum};
use glam::DVec3;
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Parse a vector written as "x,y,z"
pub fn parse_vec3(s: &str) -> Result<DVec3, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected three comma-separated numbers, got '{}'", s));
    }

    let mut xyz = [0.0; 3];
    for (slot, part) in xyz.iter_mut().zip(&parts) {
        *slot = part
            .parse::<f64>()
            .map_err(|e| format!("invalid component '{}': {}", part, e))?;
    }
    Ok(DVec3::from_array(xyz))
}

/// Command line arguments structure using clap derive macros
#[derive(Parser, Debug)]
#[command(name = "raysphere")]
#[command(about = "Cast rays against a sphere scene and report the hits")]
pub struct Args {
    /// Scene file (JSON); the built-in scene is used when omitted
    #[arg(short, long, help = "Scene file (JSON); the built-in scene is used when omitted")]
    pub scene: Option<String>,

    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Ray origin as x,y,z
    #[arg(long, default_value = "13,2,3", value_parser = parse_vec3, allow_hyphen_values = true)]
    pub origin: DVec3,

    /// Ray direction as x,y,z (need not be normalized, must not be zero)
    #[arg(
        long,
        default_value = "-13,-1,-3",
        value_parser = parse_vec3,
        allow_hyphen_values = true
    )]
    pub direction: DVec3,

    /// Time stamp of the ray, used by moving spheres
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub time: f64,

    /// Lower bound of the accepted ray parameter range (exclusive)
    #[arg(long, default_value = "0.001", allow_hyphen_values = true)]
    pub t_min: f64,

    /// Upper bound of the accepted ray parameter range (exclusive)
    #[arg(long, default_value = "inf", allow_hyphen_values = true)]
    pub t_max: f64,

    /// Cast this many random rays over the hemisphere around the direction
    #[arg(long, short = 'b')]
    pub batch: Option<u64>,

    /// Seed for the batch ray generator (per worker thread)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the bounding box of every object and of the whole scene
    #[arg(long)]
    pub bounds: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_vectors() {
        assert_eq!(parse_vec3("1, -2.5,3").unwrap(), DVec3::new(1.0, -2.5, 3.0));
        assert!(parse_vec3("1,2").is_err());
        assert!(parse_vec3("1,x,3").is_err());
    }

    #[test]
    fn parses_arguments() {
        let args = Args::try_parse_from([
            "raysphere",
            "--origin",
            "0,0,5",
            "--direction",
            "0,0,-1",
            "--t-max",
            "10",
            "--batch",
            "100",
        ])
        .unwrap();
        assert_eq!(args.origin, DVec3::new(0.0, 0.0, 5.0));
        assert_eq!(args.direction, DVec3::new(0.0, 0.0, -1.0));
        assert_eq!(args.t_min, 0.001);
        assert_eq!(args.t_max, 10.0);
        assert_eq!(args.batch, Some(100));
        assert!(args.scene.is_none());
    }

    #[test]
    fn accepts_negative_time_and_bounds() {
        let args = Args::try_parse_from([
            "raysphere",
            "--time",
            "-0.5",
            "--t-min",
            "-10",
            "--t-max",
            "-1",
        ])
        .unwrap();
        assert_eq!(args.time, -0.5);
        assert_eq!(args.t_min, -10.0);
        assert_eq!(args.t_max, -1.0);
    }

    #[test]
    fn defaults_accept_infinite_t_max() {
        let args = Args::try_parse_from(["raysphere"]).unwrap();
        assert!(args.t_max.is_infinite());
        assert!(!args.bounds);
    }
}
