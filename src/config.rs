use std::path::PathBuf;

use crate::mode::ModeArg;

#[derive(clap::Parser, Debug)]
#[clap(about = "Mean and sample standard deviation of number columns")]
pub struct AppConfig {
    #[clap(long, env = "COLUMN1_PATH", default_value = "column1.txt")]
    pub column1: PathBuf,

    #[clap(long, env = "COLUMN2_PATH", default_value = "column2.txt")]
    pub column2: PathBuf,

    #[clap(long, env = "STATS_MODE", value_enum, default_value_t = ModeArg::Auto)]
    pub mode: ModeArg,

    #[clap(long, env, default_value = "warn")]
    pub log_level: String,

    #[clap(long, env)]
    pub log_json: bool,
}

#[cfg(test)]
mod test {
    use std::path::Path;

    use clap::Parser;

    use super::AppConfig;
    use crate::mode::ModeArg;

    #[test]
    fn runs_without_arguments() {
        let config = AppConfig::try_parse_from(["column-stats"]).unwrap();
        assert_eq!(config.column1, Path::new("column1.txt"));
        assert_eq!(config.column2, Path::new("column2.txt"));
        assert_eq!(config.mode, ModeArg::Auto);
    }

    #[test]
    fn flags_override_defaults() {
        let config = AppConfig::try_parse_from([
            "column-stats",
            "--column1",
            "/tmp/a.txt",
            "--mode",
            "web",
        ])
        .unwrap();
        assert_eq!(config.column1, Path::new("/tmp/a.txt"));
        assert_eq!(config.mode, ModeArg::Web);
    }
}
