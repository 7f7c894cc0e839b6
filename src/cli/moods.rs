use tabled::Table;

use crate::{
    mood::{self, MoodProfile},
    types::MoodTableRow,
};

pub fn moods() {
    let table = Table::new(mood::profiles().iter().map(MoodTableRow::from));
    println!("{}", table);
}

impl From<&MoodProfile> for MoodTableRow {
    fn from(profile: &MoodProfile) -> Self {
        MoodTableRow {
            mood: profile.mood.to_string(),
            valence: profile.features.valence,
            energy: profile.features.energy,
            danceability: profile.features.danceability,
            acousticness: profile
                .features
                .acousticness
                .map(|a| a.to_string())
                .unwrap_or_else(|| "-".to_string()),
            tempo: profile.tempo,
            genres: profile.genres.join(", "),
        }
    }
}
