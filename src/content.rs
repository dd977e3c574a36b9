// SPDX-License-Identifier: MPL-2.0
//! Static page content.
//!
//! Everything here is fixed at compile time. Human-readable text lives in the
//! translation files; the entries below carry the translation keys plus the
//! locale-independent data (numbers, URLs, file names).

use crate::app::variant::Variant;

// =============================================================================
// Outbound links
// =============================================================================

pub const WHATSAPP_URL: &str = "https://wa.me/972546436659";
pub const EMAIL_URL: &str = "mailto:Gabiaharon@gmail.com";
pub const INSTAGRAM_URL: &str = "https://instagram.com/gabi.aharon";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/gabi-aharon";

// =============================================================================
// Lecture gallery
// =============================================================================

/// A photo from a past lecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LecturePhoto {
    /// File name looked up in the assets directory.
    pub file_name: &'static str,
}

pub const LECTURE_PHOTOS: [LecturePhoto; 4] = [
    LecturePhoto {
        file_name: "IMG-20241209-WA0055.jpg",
    },
    LecturePhoto {
        file_name: "IMG-20250109-WA0062.jpg",
    },
    LecturePhoto {
        file_name: "IMG-20250511-WA0122.jpg",
    },
    LecturePhoto {
        file_name: "IMG-20260113-WA0016.jpg",
    },
];

/// Portrait shown in the hero section.
pub const PROFILE_PHOTO_FILE: &str = "profile.png";

// =============================================================================
// Statistics
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: u32,
    pub suffix: &'static str,
    pub label_key: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat {
        value: 10,
        suffix: "+",
        label_key: "stat-years",
    },
    Stat {
        value: 200,
        suffix: "+",
        label_key: "stat-lectures",
    },
    Stat {
        value: 5000,
        suffix: "+",
        label_key: "stat-participants",
    },
    Stat {
        value: 98,
        suffix: "%",
        label_key: "stat-satisfaction",
    },
];

/// Badges shown beside the about text.
pub const ABOUT_BADGE_KEYS: [&str; 4] = [
    "about-badge-years",
    "about-badge-people",
    "about-badge-talks",
    "about-badge-satisfaction",
];

pub const ABOUT_PARAGRAPH_KEYS: [&str; 3] =
    ["about-paragraph-1", "about-paragraph-2", "about-paragraph-3"];

// =============================================================================
// Services and flyers
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub title_key: &'static str,
    pub description_key: &'static str,
    pub tag_keys: [&'static str; 4],
}

pub const SERVICES: [Service; 2] = [
    Service {
        title_key: "service-body-title",
        description_key: "service-body-desc",
        tag_keys: [
            "service-body-tag-1",
            "service-body-tag-2",
            "service-body-tag-3",
            "service-body-tag-4",
        ],
    },
    Service {
        title_key: "service-speaking-title",
        description_key: "service-speaking-desc",
        tag_keys: [
            "service-speaking-tag-1",
            "service-speaking-tag-2",
            "service-speaking-tag-3",
            "service-speaking-tag-4",
        ],
    },
];

/// Downloadable lecture flyer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flyer {
    BodyLanguage,
    PublicSpeaking,
}

impl Flyer {
    pub const ALL: [Flyer; 2] = [Flyer::BodyLanguage, Flyer::PublicSpeaking];

    /// File name inside the assets directory.
    #[must_use]
    pub const fn source_file(self) -> &'static str {
        match self {
            Flyer::BodyLanguage => "lectureflyer2.jpg",
            Flyer::PublicSpeaking => "lectureflyer1.jpg",
        }
    }

    /// Name suggested in the save dialog.
    #[must_use]
    pub const fn download_name(self, variant: Variant) -> &'static str {
        let [body, speaking] = variant.flyer_file_names();
        match self {
            Flyer::BodyLanguage => body,
            Flyer::PublicSpeaking => speaking,
        }
    }

    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Flyer::BodyLanguage => "flyer-body-download",
            Flyer::PublicSpeaking => "flyer-speaking-download",
        }
    }
}

// =============================================================================
// Testimonials
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name_key: &'static str,
    pub role_key: &'static str,
    pub quote_key: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name_key: "testimonial-1-name",
        role_key: "testimonial-1-role",
        quote_key: "testimonial-1-quote",
    },
    Testimonial {
        name_key: "testimonial-2-name",
        role_key: "testimonial-2-role",
        quote_key: "testimonial-2-quote",
    },
    Testimonial {
        name_key: "testimonial-3-name",
        role_key: "testimonial-3-role",
        quote_key: "testimonial-3-quote",
    },
];

/// Every testimonial is rated five stars.
pub const TESTIMONIAL_STARS: usize = 5;

// =============================================================================
// Recommended talks
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Talk {
    pub speaker: &'static str,
    pub views: &'static str,
    pub url: &'static str,
    pub title_key: &'static str,
}

pub const TALKS: [Talk; 3] = [
    Talk {
        speaker: "Amy Cuddy",
        views: "71M+",
        url: "https://www.ted.com/talks/amy_cuddy_your_body_language_may_shape_who_you_are",
        title_key: "talk-1-title",
    },
    Talk {
        speaker: "Julian Treasure",
        views: "50M+",
        url: "https://www.ted.com/talks/julian_treasure_how_to_speak_so_that_people_want_to_listen",
        title_key: "talk-2-title",
    },
    Talk {
        speaker: "Brene Brown",
        views: "62M+",
        url: "https://www.ted.com/talks/brene_brown_the_power_of_vulnerability",
        title_key: "talk-3-title",
    },
];
