//! Site Content document model
//!
//! The single structured record holding all editable text, links and media
//! references for the public site. Field names serialize in camelCase, which
//! is the shape stored in the database and exchanged with the admin editor.

use serde::{Deserialize, Serialize};

/// A reference to a hosted image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    /// Where the image lives (the upload widget hands back a secure URL)
    pub image_url: String,

    /// Short alt-text style hint
    #[serde(default)]
    pub image_hint: String,
}

/// Anchor targets for the two hero call-to-action buttons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroCtas {
    pub listen_now: String,
    pub upcoming_shows: String,
}

/// A small label/value card shown under the hero
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoCard {
    pub label: String,
    pub value: String,
    pub icon: String,
}

/// A statistic shown in the about section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutStat {
    pub label: String,
    pub value: String,
    pub icon: String,
}

/// A link to a music or social platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformLink {
    pub platform: String,
    pub url: String,
    pub icon: String,
}

/// An in-page navigation link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub href: String,
    pub label: String,
}

/// A scheduled performance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourDate {
    /// Display text, not parsed as a date
    pub date: String,
    pub venue: String,
    pub city: String,
    pub ticket_url: String,
}

/// A titled gallery photo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: ImageRef,
}

/// A press quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub quote: String,
    pub author: String,
    pub source: String,
}

/// An embedded YouTube video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YoutubeVideo {
    pub id: String,
    pub url: String,
    pub title: String,
}

/// An embedded Instagram reel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstagramReel {
    pub id: String,
    pub url: String,
    pub caption: String,
}

/// Booking contact details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub location: String,
}

/// The Site Content document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub artist_name: String,
    pub artist_tagline: String,
    pub artist_bio: String,

    pub hero_image: ImageRef,
    pub hero_ctas: HeroCtas,

    /// Exactly three cards
    pub info_cards: Vec<InfoCard>,

    pub music_links: Vec<PlatformLink>,
    pub featured_video_url: String,
    pub start_listening_url: String,
    pub youtube_videos: Vec<YoutubeVideo>,
    pub instagram_reels: Vec<InstagramReel>,

    pub gallery_items: Vec<GalleryItem>,

    pub artist_image: ImageRef,

    /// Exactly three stats
    pub about_stats: Vec<AboutStat>,
    pub press_kit_url: String,

    pub social_links: Vec<PlatformLink>,
    pub nav_links: Vec<NavLink>,

    pub tour_dates: Vec<TourDate>,
    pub tour_image: ImageRef,

    pub testimonials: Vec<Testimonial>,

    pub contact: ContactInfo,
}

#[cfg(test)]
mod tests {
    use crate::content::default_content;

    #[test]
    fn test_document_field_names_are_camel_case() {
        let value = serde_json::to_value(default_content()).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("artistName"));
        assert!(obj.contains_key("heroImage"));
        assert!(obj.contains_key("tourDates"));
        assert!(obj["heroImage"].get("imageUrl").is_some());
        assert!(obj["tourDates"][0].get("ticketUrl").is_some());
    }

    #[test]
    fn test_round_trip() {
        let content = default_content();
        let value = serde_json::to_value(&content).unwrap();
        let back: super::SiteContent = serde_json::from_value(value).unwrap();
        assert_eq!(content, back);
    }
}
