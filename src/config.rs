/// Selectors and localized tokens used to extract an article.
///
/// The defaults describe the ynet article template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `property` of the `<meta>` holding the fallback title.
    title_meta_property: String,
    /// Class of the `<div>` holding the on-page title.
    title_class: String,
    /// Class of the `<span>` holding the byline and date.
    byline_class: String,
    /// Class of the optional subtitle `<div>`.
    subtitle_class: String,
    /// Class of the `<div>` containing the article body.
    body_class: String,
    /// Class of embedded video blocks.
    video_class: String,
    /// Class of embedded image blocks.
    image_class: String,
    /// Class of internal cross-link widgets.
    side_link_class: String,
    /// Class of advertisement blocks.
    advertisement_class: String,
    /// Text that replaces a video.
    video_placeholder: String,
    /// Text that replaces an image.
    image_placeholder: String,
    /// Text that replaces an advertisement, kept inline.
    advertisement_placeholder: String,
}

impl Config {
    pub const DEFAULT_TITLE_META_PROPERTY: &'static str = "og:title";
    pub const DEFAULT_TITLE_CLASS: &'static str = "art_header_title";
    pub const DEFAULT_BYLINE_CLASS: &'static str = "art_header_footer_author";
    pub const DEFAULT_SUBTITLE_CLASS: &'static str = "art_header_sub_title";
    pub const DEFAULT_BODY_CLASS: &'static str = "art_body";
    pub const DEFAULT_VIDEO_CLASS: &'static str = "art_video";
    pub const DEFAULT_IMAGE_CLASS: &'static str = "citv_image";
    pub const DEFAULT_SIDE_LINK_CLASS: &'static str = "arttvgenlink";
    pub const DEFAULT_ADVERTISEMENT_CLASS: &'static str = "CAATVcompAdvertiseTv";
    /// "(video)"
    pub const DEFAULT_VIDEO_PLACEHOLDER: &'static str = "(סרטון)";
    /// "(image)"
    pub const DEFAULT_IMAGE_PLACEHOLDER: &'static str = "(תמונה)";
    /// " (advertisement) "
    pub const DEFAULT_ADVERTISEMENT_PLACEHOLDER: &'static str = " (פרסומת) ";

    /// Convenience method to create a [`ConfigBuilder`]
    #[inline]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn title_meta_property(&self) -> &str {
        &self.title_meta_property
    }

    pub fn title_class(&self) -> &str {
        &self.title_class
    }

    pub fn byline_class(&self) -> &str {
        &self.byline_class
    }

    pub fn subtitle_class(&self) -> &str {
        &self.subtitle_class
    }

    pub fn body_class(&self) -> &str {
        &self.body_class
    }

    pub fn video_class(&self) -> &str {
        &self.video_class
    }

    pub fn image_class(&self) -> &str {
        &self.image_class
    }

    pub fn side_link_class(&self) -> &str {
        &self.side_link_class
    }

    pub fn advertisement_class(&self) -> &str {
        &self.advertisement_class
    }

    pub fn video_placeholder(&self) -> &str {
        &self.video_placeholder
    }

    pub fn image_placeholder(&self) -> &str {
        &self.image_placeholder
    }

    pub fn advertisement_placeholder(&self) -> &str {
        &self.advertisement_placeholder
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::builder().build()
    }
}

#[derive(Debug, Default)]
pub struct ConfigBuilder {
    title_meta_property: Option<String>,
    title_class: Option<String>,
    byline_class: Option<String>,
    subtitle_class: Option<String>,
    body_class: Option<String>,
    video_class: Option<String>,
    image_class: Option<String>,
    side_link_class: Option<String>,
    advertisement_class: Option<String>,
    video_placeholder: Option<String>,
    image_placeholder: Option<String>,
    advertisement_placeholder: Option<String>,
}

impl ConfigBuilder {
    pub fn title_meta_property<T: ToString>(mut self, title_meta_property: T) -> Self {
        self.title_meta_property = Some(title_meta_property.to_string());
        self
    }

    pub fn title_class<T: ToString>(mut self, title_class: T) -> Self {
        self.title_class = Some(title_class.to_string());
        self
    }

    pub fn byline_class<T: ToString>(mut self, byline_class: T) -> Self {
        self.byline_class = Some(byline_class.to_string());
        self
    }

    pub fn subtitle_class<T: ToString>(mut self, subtitle_class: T) -> Self {
        self.subtitle_class = Some(subtitle_class.to_string());
        self
    }

    pub fn body_class<T: ToString>(mut self, body_class: T) -> Self {
        self.body_class = Some(body_class.to_string());
        self
    }

    pub fn video_class<T: ToString>(mut self, video_class: T) -> Self {
        self.video_class = Some(video_class.to_string());
        self
    }

    pub fn image_class<T: ToString>(mut self, image_class: T) -> Self {
        self.image_class = Some(image_class.to_string());
        self
    }

    pub fn side_link_class<T: ToString>(mut self, side_link_class: T) -> Self {
        self.side_link_class = Some(side_link_class.to_string());
        self
    }

    pub fn advertisement_class<T: ToString>(mut self, advertisement_class: T) -> Self {
        self.advertisement_class = Some(advertisement_class.to_string());
        self
    }

    pub fn video_placeholder<T: ToString>(mut self, video_placeholder: T) -> Self {
        self.video_placeholder = Some(video_placeholder.to_string());
        self
    }

    pub fn image_placeholder<T: ToString>(mut self, image_placeholder: T) -> Self {
        self.image_placeholder = Some(image_placeholder.to_string());
        self
    }

    pub fn advertisement_placeholder<T: ToString>(mut self, advertisement_placeholder: T) -> Self {
        self.advertisement_placeholder = Some(advertisement_placeholder.to_string());
        self
    }

    pub fn build(self) -> Config {
        fn or(value: Option<String>, default: &str) -> String {
            value.unwrap_or_else(|| default.to_string())
        }

        Config {
            title_meta_property: or(self.title_meta_property, Config::DEFAULT_TITLE_META_PROPERTY),
            title_class: or(self.title_class, Config::DEFAULT_TITLE_CLASS),
            byline_class: or(self.byline_class, Config::DEFAULT_BYLINE_CLASS),
            subtitle_class: or(self.subtitle_class, Config::DEFAULT_SUBTITLE_CLASS),
            body_class: or(self.body_class, Config::DEFAULT_BODY_CLASS),
            video_class: or(self.video_class, Config::DEFAULT_VIDEO_CLASS),
            image_class: or(self.image_class, Config::DEFAULT_IMAGE_CLASS),
            side_link_class: or(self.side_link_class, Config::DEFAULT_SIDE_LINK_CLASS),
            advertisement_class: or(self.advertisement_class, Config::DEFAULT_ADVERTISEMENT_CLASS),
            video_placeholder: or(self.video_placeholder, Config::DEFAULT_VIDEO_PLACEHOLDER),
            image_placeholder: or(self.image_placeholder, Config::DEFAULT_IMAGE_PLACEHOLDER),
            advertisement_placeholder: or(
                self.advertisement_placeholder,
                Config::DEFAULT_ADVERTISEMENT_PLACEHOLDER,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_ynet() {
        let config = Config::default();
        assert_eq!(config.body_class(), "art_body");
        assert_eq!(config.title_meta_property(), "og:title");
        assert_eq!(config.advertisement_placeholder(), " (פרסומת) ");
    }

    #[test]
    fn builder_overrides() {
        let config = Config::builder()
            .body_class("story")
            .video_placeholder("(video)")
            .build();
        assert_eq!(config.body_class(), "story");
        assert_eq!(config.video_placeholder(), "(video)");
        assert_eq!(config.image_placeholder(), Config::DEFAULT_IMAGE_PLACEHOLDER);
    }
}
