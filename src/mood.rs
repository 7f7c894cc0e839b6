//! Static mood table.
//!
//! Each supported mood fixes its own audio-feature targets, a tempo hint and
//! three seed genres for the recommendations endpoint. The table is built at
//! compile time and never changes. Lookups are case-insensitive and total:
//! anything that is not a known mood resolves to [`Mood::Happy`].

use std::{fmt, str::FromStr};

use serde::Serialize;

/// The moods the backend knows how to map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Energetic,
    Chill,
    Romantic,
    Angry,
}

impl Mood {
    /// All moods in table order.
    pub const ALL: [Mood; 6] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Energetic,
        Mood::Chill,
        Mood::Romantic,
        Mood::Angry,
    ];

    /// Mood used for anything that is not in the table.
    pub const FALLBACK: Mood = Mood::Happy;

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Energetic => "energetic",
            Mood::Chill => "chill",
            Mood::Romantic => "romantic",
            Mood::Angry => "angry",
        }
    }

    pub fn profile(self) -> &'static MoodProfile {
        // PROFILES is laid out in the same order as `Mood::ALL`
        &PROFILES[self as usize]
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Mood::ALL
            .into_iter()
            .find(|m| m.as_str() == normalized)
            .ok_or_else(|| format!("unknown mood '{}'", s.trim()))
    }
}

/// Target audio features sent to the recommendations endpoint.
///
/// All values are on Spotify's 0..=1 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureTargets {
    pub valence: f64,
    pub energy: f64,
    pub danceability: f64,
    pub acousticness: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodProfile {
    pub mood: Mood,
    #[serde(flatten)]
    pub features: FeatureTargets,
    /// Beats per minute. Informational only, never sent upstream.
    pub tempo: u32,
    pub genres: [&'static str; 3],
}

impl MoodProfile {
    /// Seed genres in the comma separated form the API expects.
    pub fn seed_genres(&self) -> String {
        self.genres.join(",")
    }
}

static PROFILES: [MoodProfile; 6] = [
    MoodProfile {
        mood: Mood::Happy,
        features: FeatureTargets {
            valence: 0.8,
            energy: 0.7,
            danceability: 0.7,
            acousticness: None,
        },
        tempo: 120,
        genres: ["pop", "dance", "funk"],
    },
    MoodProfile {
        mood: Mood::Sad,
        features: FeatureTargets {
            valence: 0.2,
            energy: 0.3,
            danceability: 0.3,
            acousticness: None,
        },
        tempo: 80,
        genres: ["indie", "alternative", "folk"],
    },
    MoodProfile {
        mood: Mood::Energetic,
        features: FeatureTargets {
            valence: 0.7,
            energy: 0.9,
            danceability: 0.8,
            acousticness: None,
        },
        tempo: 140,
        genres: ["electronic", "rock", "hip-hop"],
    },
    MoodProfile {
        mood: Mood::Chill,
        features: FeatureTargets {
            valence: 0.5,
            energy: 0.3,
            danceability: 0.4,
            acousticness: None,
        },
        tempo: 90,
        genres: ["ambient", "jazz", "indie"],
    },
    MoodProfile {
        mood: Mood::Romantic,
        features: FeatureTargets {
            valence: 0.6,
            energy: 0.4,
            danceability: 0.5,
            acousticness: Some(0.7),
        },
        tempo: 100,
        genres: ["r-n-b", "soul", "indie"],
    },
    MoodProfile {
        mood: Mood::Angry,
        features: FeatureTargets {
            valence: 0.2,
            energy: 0.9,
            danceability: 0.6,
            acousticness: None,
        },
        tempo: 150,
        genres: ["metal", "rock", "punk"],
    },
];

/// Resolves a free-form mood string to its profile.
///
/// Never fails; unknown input gets the [`Mood::FALLBACK`] profile.
pub fn resolve(mood: &str) -> &'static MoodProfile {
    mood.parse::<Mood>()
        .unwrap_or(Mood::FALLBACK)
        .profile()
}

/// Every profile in table order.
pub fn profiles() -> &'static [MoodProfile] {
    &PROFILES
}
