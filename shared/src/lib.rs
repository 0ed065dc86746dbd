use strum_macros::EnumIter;

pub const OCTAL_URL: &str = "https://octal.school";
pub const LOGO_ALT: &str = "Octal logo";
pub const LOGO_CLASS: &str = "logo";
pub const HEADING: &str = "React + Octal";

/// Files bundled with the frontend and copied to `/assets` by the bundler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Asset {
    OctalLogo,
}

impl Asset {
    /// Servable path of the asset once the bundler has copied it.
    pub fn path(&self) -> &'static str {
        match self {
            Asset::OctalLogo => "/assets/octal.svg",
        }
    }

    /// Name of the file inside `frontend/assets`.
    pub fn file_name(&self) -> &'static str {
        let path = self.path();
        path.rsplit_once('/').map_or(path, |(_, name)| name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn asset_paths_live_under_assets() {
        for asset in Asset::iter() {
            assert_eq!(asset.path(), format!("/assets/{}", asset.file_name()));
        }
    }

    #[test]
    fn logo_file_name() {
        assert_eq!(Asset::OctalLogo.file_name(), "octal.svg");
    }

    #[test]
    fn link_target_is_https() {
        assert!(OCTAL_URL.starts_with("https://"));
        assert!(!OCTAL_URL.ends_with('/'));
    }
}
