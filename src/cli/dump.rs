//! `blogconf dump`: print the validated records.

use crate::cli::{DumpFormat, expand};
use anyhow::{Context, Result};
use blogconf::config::{BlogConfig, LoadOptions};
use std::path::Path;

pub fn run(config: &Path, format: DumpFormat, pretty: bool) -> Result<()> {
    let loaded = BlogConfig::load(&LoadOptions::new(expand(config)))?;
    blogconf::debug!("dump"; "{} warning(s) not shown", loaded.diagnostics.warnings().len());

    let output = render(&loaded.config, format, pretty)?;
    println!("{}", output.trim_end());
    Ok(())
}

/// Serialize the records in the requested format.
pub fn render(config: &BlogConfig, format: DumpFormat, pretty: bool) -> Result<String> {
    let output = match (format, pretty) {
        (DumpFormat::Json, false) => serde_json::to_string(config)?,
        (DumpFormat::Json, true) => serde_json::to_string_pretty(config)?,
        (DumpFormat::Toml, false) => toml::to_string(config).context("Failed to render TOML")?,
        (DumpFormat::Toml, true) => {
            toml::to_string_pretty(config).context("Failed to render TOML")?
        }
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = r#"
title = "Fuwari"
subtitle = "Demo Site"
lang = "ja"

[themeColor]
hue = 345
fixed = true

[banner]
enable = true
src = "/banner.png"

[banner.credit]
enable = true
text = "Artist"
url = "https://www.pixiv.net/artworks/108916539"

[toc]
enable = false
depth = 3

[navBar]
links = ["home", { name = "UselessTools", url = "http://tools.dl-am.cn/", external = true }]

[profile]
avatar = "assets/images/demo-avatar.png"
name = "Lorem Ipsum"
bio = ""

[license]
enable = false
name = "CC BY-NC-SA 4.0"
url = "https://creativecommons.org/licenses/by-nc-sa/4.0/"

[expressiveCode]
theme = "dracula"
"#;

    #[test]
    fn test_dump_json_reloads_equal() {
        let config = BlogConfig::from_str(SOURCE).unwrap();
        for pretty in [false, true] {
            let json = render(&config, DumpFormat::Json, pretty).unwrap();
            assert_eq!(BlogConfig::from_json(&json).unwrap(), config);
        }
    }

    #[test]
    fn test_dump_toml_reloads_equal() {
        let config = BlogConfig::from_str(SOURCE).unwrap();
        for pretty in [false, true] {
            let toml = render(&config, DumpFormat::Toml, pretty).unwrap();
            assert_eq!(BlogConfig::from_str(&toml).unwrap(), config);
        }
    }

    #[test]
    fn test_dump_json_shape() {
        let config = BlogConfig::from_str(SOURCE).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&render(&config, DumpFormat::Json, false).unwrap()).unwrap();

        assert_eq!(value["title"], "Fuwari");
        assert_eq!(value["themeColor"]["hue"], 345);
        assert_eq!(value["banner"]["position"], "center");
        assert_eq!(value["navBar"]["links"][0], "home");
        assert_eq!(value["navBar"]["links"][1]["url"], "http://tools.dl-am.cn/");
        assert_eq!(value["expressiveCode"]["theme"], "dracula");
    }
}
