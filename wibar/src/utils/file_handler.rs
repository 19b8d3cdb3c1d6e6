use crate::Config;
use anyhow::Result;
use ron::{
    Options,
    extensions::Extensions,
    ser::{PrettyConfig, to_string_pretty},
};
use std::{
    ffi::OsStr,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use xdg::BaseDirectories;

const COMMENT_HEADER: &str = r#"// wibar configuration
// `screens` lists the outputs bars can live on, `bars` the bars to dock.
// A bar's `position` is one of top, bottom, left or right. Sizes are
// pixels (24) or percentages of the screen ("40%").

"#;

/// Loads configuration from `path` if given, otherwise from
/// `$XDG_CONFIG_HOME/wibar/config.ron` falling back to `config.toml`.
/// Writes and returns the default config when neither exists.
///
/// # Errors
///
/// Errors if the XDG directories are unavailable, if the file cannot be
/// read or written, or if its contents are malformed.
pub fn load_config_file(path: Option<&Path>) -> Result<Config> {
    let config_filename = if let Some(path) = path {
        PathBuf::from(path)
    } else {
        let base = BaseDirectories::with_prefix("wibar")?;
        let ron_file = base.place_config_file("config.ron")?;
        let toml_file = base.place_config_file("config.toml")?;
        if ron_file.exists() {
            ron_file
        } else if toml_file.exists() {
            toml_file
        } else {
            tracing::debug!("Config file not found. Using default config file.");
            let config = Config::default();
            write_to_file(&ron_file, &config)?;
            return Ok(config);
        }
    };

    tracing::debug!("Config file '{}' found.", config_filename.display());
    let contents = fs::read_to_string(&config_filename)?;
    parse_config(&contents, &config_filename)
}

/// Parses `contents` as TOML when `path` ends in `.toml` and as RON otherwise.
///
/// # Errors
///
/// Errors if the contents are malformed.
pub fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    if path.extension() == Some(OsStr::new("toml")) {
        Ok(toml::from_str(contents)?)
    } else {
        let ron = Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        Ok(ron.from_str(contents)?)
    }
}

/// # Errors
/// This function errors when:
/// - serialization of the config fails
/// - writing to file fails
pub fn write_to_file(ron_file: &Path, config: &Config) -> Result<()> {
    let ron_pretty_conf = PrettyConfig::new()
        .depth_limit(4)
        .extensions(Extensions::IMPLICIT_SOME);
    let ron = to_string_pretty(&config, ron_pretty_conf)?;
    let ron_with_header = String::from(COMMENT_HEADER) + &ron;
    let mut file = File::create(ron_file)?;
    file.write_all(ron_with_header.as_bytes())?;
    Ok(())
}
