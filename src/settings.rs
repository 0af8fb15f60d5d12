use std::path::PathBuf;

pub const DEFAULT_CONFIG_DIR: &str = "./Config";
pub const CONFIG_DIR_ENV: &str = "CHIP_CONFIG_DIR";
pub const AUTO_FLAG: &str = "-a";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub config_dir: PathBuf,
    /// Batch mode: accept every value and print a summary at the end.
    pub auto: bool,
}

impl Settings {
    /// `args` is the full argument vector, program name included.
    pub fn from_args<I>(args: I, config_dir: Option<String>) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let auto = args.into_iter().nth(1).is_some_and(|a| a == AUTO_FLAG);
        let config_dir = config_dir
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CONFIG_DIR.to_string());

        Self {
            config_dir: PathBuf::from(config_dir),
            auto,
        }
    }

    pub fn from_env() -> Self {
        Self::from_args(std::env::args(), std::env::var(CONFIG_DIR_ENV).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn auto_only_with_dash_a_first() {
        assert!(Settings::from_args(args(&["check", "-a"]), None).auto);
        assert!(!Settings::from_args(args(&["check"]), None).auto);
        assert!(!Settings::from_args(args(&["check", "-x", "-a"]), None).auto);
        assert!(!Settings::from_args(args(&["check", "--auto"]), None).auto);
    }

    #[test]
    fn config_dir_defaults_and_overrides() {
        let s = Settings::from_args(args(&["check"]), None);
        assert_eq!(s.config_dir, PathBuf::from("./Config"));

        let s = Settings::from_args(args(&["check"]), Some("/opt/chips".into()));
        assert_eq!(s.config_dir, PathBuf::from("/opt/chips"));

        let s = Settings::from_args(args(&["check"]), Some("  ".into()));
        assert_eq!(s.config_dir, PathBuf::from("./Config"));
    }
}
