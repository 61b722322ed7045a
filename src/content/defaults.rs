//! Canonical default content
//!
//! The always-valid content structure used both as the seed document on
//! first run and as the fallback when storage is unreachable. Callers get a
//! fresh value on every call; nothing hands out a shared mutable instance.

use serde_json::Value;

use super::model::*;

/// Build the canonical default Site Content document
pub fn default_content() -> SiteContent {
    SiteContent {
        artist_name: "Aniruddh Aithal".to_string(),
        artist_tagline: "Hindustani Classical Musician".to_string(),
        artist_bio: "Aniruddh Aithal is a 24-year-old Hindustani classical musician with \
            expertise in vocal music. He started formal training at 10 years old and has \
            trained for 8 years with Smt. Geetha Garud Prithviraj, and now receives training \
            from Dr. Ashok Huggannavar. He's an award-winning artist and a graded artist of \
            All India Radio, and has received scholarships from CCRT and the Karnataka \
            Sangeetha Nritya academy."
            .to_string(),

        hero_image: ImageRef {
            image_url: "https://picsum.photos/seed/hero/1920/1080".to_string(),
            image_hint: "musician stage".to_string(),
        },

        hero_ctas: HeroCtas {
            listen_now: "#music".to_string(),
            upcoming_shows: "#tour".to_string(),
        },

        info_cards: vec![
            InfoCard {
                label: "Latest Album".to_string(),
                value: "Now Streaming".to_string(),
                icon: "Headphones".to_string(),
            },
            InfoCard {
                label: "Live Shows".to_string(),
                value: "World Tour 2025".to_string(),
                icon: "Radio".to_string(),
            },
            InfoCard {
                label: "Platforms".to_string(),
                value: "All Major Services".to_string(),
                icon: "Volume2".to_string(),
            },
        ],

        music_links: vec![
            PlatformLink {
                platform: "Spotify".to_string(),
                url: "https://open.spotify.com".to_string(),
                icon: "spotify".to_string(),
            },
            PlatformLink {
                platform: "Apple Music".to_string(),
                url: "https://music.apple.com".to_string(),
                icon: "apple".to_string(),
            },
            PlatformLink {
                platform: "Youtube".to_string(),
                url: "https://youtube.com".to_string(),
                icon: "youtube".to_string(),
            },
            PlatformLink {
                platform: "SoundCloud".to_string(),
                url: "https://soundcloud.com".to_string(),
                icon: "soundcloud".to_string(),
            },
        ],

        featured_video_url:
            "https://www.youtube.com/embed/videoseries?list=PLx0sYbCqOb8TBPRdmBHs5Iftvv9TPboYG"
                .to_string(),
        start_listening_url: "#music".to_string(),

        youtube_videos: vec![
            YoutubeVideo {
                id: "yt-1".to_string(),
                url: "https://www.youtube.com/embed/LXb3EKWsInQ".to_string(),
                title: "Classical Rendition".to_string(),
            },
            YoutubeVideo {
                id: "yt-2".to_string(),
                url: "https://www.youtube.com/embed/LXb3EKWsInQ".to_string(),
                title: "Live Performance Clip".to_string(),
            },
            YoutubeVideo {
                id: "yt-3".to_string(),
                url: "https://www.youtube.com/embed/LXb3EKWsInQ".to_string(),
                title: "Studio Session".to_string(),
            },
            YoutubeVideo {
                id: "yt-4".to_string(),
                url: "https://www.youtube.com/embed/LXb3EKWsInQ".to_string(),
                title: "Acoustic Cover".to_string(),
            },
        ],

        instagram_reels: vec![
            InstagramReel {
                id: "ig-1".to_string(),
                url: "https://www.instagram.com/p/C2-b_j_r_qW/".to_string(),
                caption: "Quick jam session".to_string(),
            },
            InstagramReel {
                id: "ig-2".to_string(),
                url: "https://www.instagram.com/p/C2-b_j_r_qW/".to_string(),
                caption: "Behind the scenes".to_string(),
            },
            InstagramReel {
                id: "ig-3".to_string(),
                url: "https://www.instagram.com/p/C2-b_j_r_qW/".to_string(),
                caption: "From the tour bus".to_string(),
            },
        ],

        gallery_items: vec![
            GalleryItem {
                id: "gallery-1".to_string(),
                title: "Live at The Acropolis".to_string(),
                description: "An unforgettable night under the stars in Athens.".to_string(),
                image: ImageRef {
                    image_url: "https://picsum.photos/seed/gallery1/600/400".to_string(),
                    image_hint: "concert hall".to_string(),
                },
            },
            GalleryItem {
                id: "gallery-2".to_string(),
                title: "Studio Sessions".to_string(),
                description: "Crafting the new album.".to_string(),
                image: ImageRef {
                    image_url: "https://picsum.photos/seed/gallery2/600/400".to_string(),
                    image_hint: "playing instrument".to_string(),
                },
            },
            GalleryItem {
                id: "gallery-3".to_string(),
                title: "Backstage Moments".to_string(),
                description: "The calm before the storm.".to_string(),
                image: ImageRef {
                    image_url: "https://picsum.photos/seed/gallery3/600/400".to_string(),
                    image_hint: "artist backstage".to_string(),
                },
            },
            GalleryItem {
                id: "gallery-4".to_string(),
                title: "The Crowd".to_string(),
                description: "Connecting with fans.".to_string(),
                image: ImageRef {
                    image_url: "https://picsum.photos/seed/gallery4/600/400".to_string(),
                    image_hint: "concert crowd".to_string(),
                },
            },
            GalleryItem {
                id: "gallery-5".to_string(),
                title: "In the Zone".to_string(),
                description: "Recording new sounds.".to_string(),
                image: ImageRef {
                    image_url: "https://picsum.photos/seed/gallery5/600/400".to_string(),
                    image_hint: "recording studio".to_string(),
                },
            },
            GalleryItem {
                id: "gallery-6".to_string(),
                title: "Urban Explorer".to_string(),
                description: "Finding inspiration in the city.".to_string(),
                image: ImageRef {
                    image_url: "https://picsum.photos/seed/gallery6/600/400".to_string(),
                    image_hint: "artist urban".to_string(),
                },
            },
        ],

        artist_image: ImageRef {
            image_url: "https://picsum.photos/seed/about/600/800".to_string(),
            image_hint: "artist portrait".to_string(),
        },

        about_stats: vec![
            AboutStat {
                label: "Awards".to_string(),
                value: "12+".to_string(),
                icon: "Award".to_string(),
            },
            AboutStat {
                label: "Countries".to_string(),
                value: "30+".to_string(),
                icon: "Globe".to_string(),
            },
            AboutStat {
                label: "Albums".to_string(),
                value: "8".to_string(),
                icon: "Music2".to_string(),
            },
        ],

        press_kit_url: "/press-kit.pdf".to_string(),

        social_links: vec![
            PlatformLink {
                platform: "Instagram".to_string(),
                url: "https://instagram.com".to_string(),
                icon: "instagram".to_string(),
            },
            PlatformLink {
                platform: "Twitter".to_string(),
                url: "https://twitter.com".to_string(),
                icon: "twitter".to_string(),
            },
            PlatformLink {
                platform: "Facebook".to_string(),
                url: "https://facebook.com".to_string(),
                icon: "facebook".to_string(),
            },
        ],

        nav_links: vec![
            NavLink {
                href: "#tour".to_string(),
                label: "Tour".to_string(),
            },
            NavLink {
                href: "#music".to_string(),
                label: "Music".to_string(),
            },
            NavLink {
                href: "#gallery".to_string(),
                label: "Gallery".to_string(),
            },
            NavLink {
                href: "#about".to_string(),
                label: "About".to_string(),
            },
            NavLink {
                href: "#contact".to_string(),
                label: "Contact".to_string(),
            },
        ],

        tour_dates: vec![
            TourDate {
                date: "OCT 25, 2024".to_string(),
                venue: "The Grand Hall".to_string(),
                city: "Berlin".to_string(),
                ticket_url: "https://www.example.com".to_string(),
            },
            TourDate {
                date: "NOV 02, 2024".to_string(),
                venue: "Symphony House".to_string(),
                city: "London".to_string(),
                ticket_url: "https://www.example.com".to_string(),
            },
            TourDate {
                date: "NOV 15, 2024".to_string(),
                venue: "Le Trianon".to_string(),
                city: "Paris".to_string(),
                ticket_url: "https://www.example.com".to_string(),
            },
            TourDate {
                date: "DEC 01, 2024".to_string(),
                venue: "Carnegie Hall".to_string(),
                city: "New York".to_string(),
                ticket_url: "https://www.example.com".to_string(),
            },
        ],

        tour_image: ImageRef {
            image_url: "https://picsum.photos/seed/map/1200/800".to_string(),
            image_hint: "tour map".to_string(),
        },

        testimonials: vec![
            Testimonial {
                id: "t-1".to_string(),
                quote: "A breathtaking performance that reimagines what classical music can \
                    be. A true innovator."
                    .to_string(),
                author: "Jane Doe".to_string(),
                source: "Music Critic, The Times".to_string(),
            },
            Testimonial {
                id: "t-2".to_string(),
                quote: "An absolute master of the craft. The live show is an experience you \
                    won't forget."
                    .to_string(),
                author: "John Smith".to_string(),
                source: "Acoustic Magazine".to_string(),
            },
            Testimonial {
                id: "t-3".to_string(),
                quote: "The new album is a masterpiece of composition and technical skill."
                    .to_string(),
                author: "Emily White".to_string(),
                source: "Classical Today".to_string(),
            },
        ],

        contact: ContactInfo {
            email: "booking@acousticedge.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            location: "New York, NY".to_string(),
        },
    }
}

/// The default content as a JSON document (the persisted shape)
pub fn default_document() -> Value {
    serde_json::to_value(default_content()).expect("default content serializes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{validate_document, ABOUT_STAT_COUNT, INFO_CARD_COUNT};

    #[test]
    fn test_fixed_list_lengths() {
        let content = default_content();
        assert_eq!(content.info_cards.len(), INFO_CARD_COUNT);
        assert_eq!(content.about_stats.len(), ABOUT_STAT_COUNT);
    }

    #[test]
    fn test_defaults_are_valid() {
        let doc = default_document();
        let validated = validate_document(&doc);
        assert!(validated.is_ok(), "violations: {:?}", validated.err());
    }

    #[test]
    fn test_defaults_are_deterministic() {
        assert_eq!(default_document(), default_document());
    }
}
