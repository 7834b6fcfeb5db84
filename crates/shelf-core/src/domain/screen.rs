//! Screen kinds and their static empty-state metadata.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the five content list contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenKind {
    /// The full, filterable catalogue.
    Library,
    /// Content stored on the device.
    Downloads,
    /// Courses the user has started.
    InProgress,
    /// Courses the user has finished.
    Completed,
    /// Content the user bookmarked.
    Bookmarked,
}

impl ScreenKind {
    /// Every screen, in tab order.
    pub const ALL: [Self; 5] = [
        Self::Library,
        Self::Downloads,
        Self::InProgress,
        Self::Completed,
        Self::Bookmarked,
    ];

    /// Stable lowercase name, matching the serde representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Library => "library",
            Self::Downloads => "downloads",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Bookmarked => "bookmarked",
        }
    }
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScreenKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "library" => Ok(Self::Library),
            "downloads" => Ok(Self::Downloads),
            "in_progress" | "inprogress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "bookmarked" | "bookmarks" => Ok(Self::Bookmarked),
            other => Err(format!("unknown screen: {other}")),
        }
    }
}

/// Static empty-state metadata for a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScreenDescriptor {
    /// Whether the screen shows user-curated content.
    pub is_personal_collection: bool,
    /// Empty-state headline.
    pub title: &'static str,
    /// Empty-state explanation.
    pub detail: &'static str,
    /// Label of the empty-state call to action, if any.
    pub cta_label: Option<&'static str>,
    /// Asset key of the empty-state artwork.
    pub empty_image_key: &'static str,
}

const EXPLORE_LABEL: &str = "Explore Tutorials";
const RELOAD_LABEL: &str = "Reload";

const LIBRARY: ScreenDescriptor = ScreenDescriptor {
    is_personal_collection: false,
    title: "We couldn't find anything with that search criteria.",
    detail: "Try removing some filters or checking your WiFi settings.",
    cta_label: Some(RELOAD_LABEL),
    empty_image_key: "emojiCrying",
};

const DOWNLOADS: ScreenDescriptor = ScreenDescriptor {
    is_personal_collection: false,
    title: "You haven't downloaded any tutorials yet.",
    detail: "Tap the download icon to download a video course or episode to watch offline.",
    cta_label: Some(EXPLORE_LABEL),
    empty_image_key: "artworkEmptySuitcase",
};

const IN_PROGRESS: ScreenDescriptor = ScreenDescriptor {
    is_personal_collection: true,
    title: "You don't have any tutorials in progress yet.",
    detail: "When you start a video course you can quickly resume it from here.",
    cta_label: Some(EXPLORE_LABEL),
    empty_image_key: "artworkInProgress",
};

const COMPLETED: ScreenDescriptor = ScreenDescriptor {
    is_personal_collection: true,
    title: "You haven't completed any tutorials yet.",
    detail: "Watch all the episodes of a video course or screencast to complete it.",
    cta_label: Some(EXPLORE_LABEL),
    empty_image_key: "artworkCompleted",
};

const BOOKMARKED: ScreenDescriptor = ScreenDescriptor {
    is_personal_collection: true,
    title: "You haven't bookmarked any tutorials yet.",
    detail: "Tap the bookmark icon to bookmark a video course or screencast.",
    cta_label: Some(EXPLORE_LABEL),
    empty_image_key: "artworkBookmarks",
};

/// Look up the static metadata for `screen`.
pub const fn describe(screen: ScreenKind) -> &'static ScreenDescriptor {
    match screen {
        ScreenKind::Library => &LIBRARY,
        ScreenKind::Downloads => &DOWNLOADS,
        ScreenKind::InProgress => &IN_PROGRESS,
        ScreenKind::Completed => &COMPLETED,
        ScreenKind::Bookmarked => &BOOKMARKED,
    }
}

/// True for screens scoped to user-curated content.
pub const fn is_personal_collection(screen: ScreenKind) -> bool {
    describe(screen).is_personal_collection
}

/// Copy shown when the data source reports a failure, on any screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FailedDescriptor {
    pub title: &'static str,
    pub detail: &'static str,
    pub image_key: &'static str,
    pub retry_label: &'static str,
}

pub const FAILED_DESCRIPTOR: FailedDescriptor = FailedDescriptor {
    title: "Something went wrong.",
    detail: "Please try again.",
    image_key: "emojiCrying",
    retry_label: RELOAD_LABEL,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_personal_collection_screens() {
        assert!(is_personal_collection(ScreenKind::Bookmarked));
        assert!(is_personal_collection(ScreenKind::InProgress));
        assert!(is_personal_collection(ScreenKind::Completed));
        assert!(!is_personal_collection(ScreenKind::Library));
        assert!(!is_personal_collection(ScreenKind::Downloads));
    }

    #[test]
    fn test_every_screen_has_cta() {
        for screen in ScreenKind::ALL {
            assert!(describe(screen).cta_label.is_some(), "{screen}");
        }
        assert_eq!(describe(ScreenKind::Library).cta_label, Some("Reload"));
        assert_eq!(
            describe(ScreenKind::Completed).cta_label,
            Some("Explore Tutorials")
        );
    }

    #[test]
    fn test_empty_images() {
        assert_eq!(
            describe(ScreenKind::Downloads).empty_image_key,
            "artworkEmptySuitcase"
        );
        assert_eq!(describe(ScreenKind::Library).empty_image_key, "emojiCrying");
    }

    #[test]
    fn test_screen_parse_roundtrips_display() {
        for screen in ScreenKind::ALL {
            assert_eq!(screen.to_string().parse::<ScreenKind>(), Ok(screen));
        }
        assert_eq!("In-Progress".parse::<ScreenKind>(), Ok(ScreenKind::InProgress));
        assert!("settings".parse::<ScreenKind>().is_err());
    }
}
