use serde::Deserialize;
use thiserror::Error;

/// Id of the optional `<script type="application/json">` block in `index.html`.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("gallery must contain at least one image")]
    EmptyGallery,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

impl GalleryImage {
    fn new(src: &str, alt: &str) -> Self {
        Self {
            src: src.to_string(),
            alt: alt.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub contact_address: String,
    /// Scroll offset in px past which the header switches to its compact look.
    pub header_threshold: f64,
    pub nav_section_offset: f64,
    pub nav_probe_offset: f64,
    pub fade_in_threshold: f64,
    pub status_clear_ms: u32,
    pub gallery: Vec<GalleryImage>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_address: "peroge.ex@gmail.com".to_string(),
            header_threshold: 60.0,
            nav_section_offset: 80.0,
            nav_probe_offset: 100.0,
            fade_in_threshold: 0.15,
            status_clear_ms: 5_000,
            gallery: vec![
                GalleryImage::new("/assets/gallery/workshop.jpg", "Workshop floor"),
                GalleryImage::new("/assets/gallery/detail.jpg", "Finished detail"),
                GalleryImage::new("/assets/gallery/install.jpg", "On-site installation"),
                GalleryImage::new("/assets/gallery/team.jpg", "The team at work"),
                GalleryImage::new("/assets/gallery/materials.jpg", "Raw materials"),
                GalleryImage::new("/assets/gallery/result.jpg", "Delivered project"),
            ],
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        if config.gallery.is_empty() {
            return Err(ConfigError::EmptyGallery);
        }
        Ok(config)
    }

    /// Reads the config block from the host page, falling back to defaults.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|element| element.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => match Self::from_json(&raw) {
                Ok(config) => {
                    log::info!("Loaded site config for {}", config.contact_address);
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring site config: {}", e);
                    Self::default()
                }
            },
            _ => {
                log::debug!("No site config block, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config = SiteConfig::from_json(r#"{ "contact_address": "hello@studio.test" }"#).unwrap();
        assert_eq!(config.contact_address, "hello@studio.test");
        assert_eq!(config.header_threshold, 60.0);
        assert_eq!(config.status_clear_ms, 5_000);
        assert_eq!(config.gallery, SiteConfig::default().gallery);
    }

    #[test]
    fn gallery_alt_text_is_optional() {
        let config = SiteConfig::from_json(r#"{ "gallery": [{ "src": "/a.jpg" }] }"#).unwrap();
        assert_eq!(config.gallery.len(), 1);
        assert_eq!(config.gallery[0].alt, "");
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(
            SiteConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn empty_gallery_is_rejected() {
        assert!(matches!(
            SiteConfig::from_json(r#"{ "gallery": [] }"#),
            Err(ConfigError::EmptyGallery)
        ));
    }
}
