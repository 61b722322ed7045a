//! Site content model, canonical defaults, reconciliation and validation

mod defaults;
mod icons;
mod model;
mod reconcile;
mod validate;

pub use defaults::default_content;
pub use defaults::default_document;
pub use icons::Icon;
pub use model::{
    AboutStat, ContactInfo, GalleryItem, HeroCtas, ImageRef, InfoCard, InstagramReel, NavLink,
    PlatformLink, SiteContent, Testimonial, TourDate, YoutubeVideo,
};
pub use reconcile::reconcile;
pub use validate::{validate_document, Violation};

/// Fixed identifier of the single content document
pub const CONTENT_ID: &str = "main_content";

/// Required length of the fixed-size card lists
pub const INFO_CARD_COUNT: usize = 3;
pub const ABOUT_STAT_COUNT: usize = 3;
