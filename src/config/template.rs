//! Starter `blog.toml` written by `blogconf init`.
//!
//! Assembled from the doc comments and `#[config(default = ...)]` values of
//! each record, so the file always matches the schema it is checked against.

use super::{
    ExpressiveCodeConfig, Favicon, LicenseConfig, NavBarConfig, ProfileConfig, SiteConfig,
};

const HEADER: &str = "\
# Blog configuration.
#
# Paths starting with `/` are served from `public/`, other relative paths
# are resolved against `src/`.

";

/// Render the commented starter config.
pub fn generate() -> String {
    let mut out = String::from(HEADER);
    out.push_str(&SiteConfig::template());

    for section in [
        NavBarConfig::template_with_header(),
        ProfileConfig::template_with_links(),
        LicenseConfig::template_with_header(),
        ExpressiveCodeConfig::template_with_header(),
    ] {
        out.push('\n');
        out.push_str(&section);
    }

    out.push_str("\n# Favicons: replace `favicon = []` above with entries like\n");
    out.push_str(&comment_out(&Favicon::template_with_header()));
    out
}

/// Comment out every key and header, leaving doc lines as they are.
fn comment_out(block: &str) -> String {
    block
        .lines()
        .map(|line| {
            if line.is_empty() || line.starts_with('#') {
                format!("{line}\n")
            } else {
                format!("# {line}\n")
            }
        })
        .collect()
}
