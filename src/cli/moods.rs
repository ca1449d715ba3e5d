use tabled::Table;

use crate::{config::Settings, types::MoodTableRow};

pub fn moods(settings: &Settings) {
    let rows: Vec<MoodTableRow> = settings
        .catalog
        .moods()
        .iter()
        .map(|mood| MoodTableRow {
            mood: mood.label().to_string(),
            source: settings.catalog.source(*mood).to_string(),
        })
        .collect();

    println!("{}", Table::new(rows));
}
