//! Shared test utilities and fixtures for station loader tests

use crate::config::LoaderConfig;
use serde_json::{Value, json};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;


/// A small raw payload: two valid stations, one duplicate and one without coordinates
pub fn sample_payload() -> Value {
    json!([
        {
            "place_id": "p1",
            "name": "Posto Shell Centro",
            "address": "Av. Rio Branco, 156",
            "latitude": -22.9035,
            "longitude": -43.1770,
            "rating": 4.5,
            "reviews": [
                {
                    "author_name": "Ana",
                    "rating": 5,
                    "text": "Ótimo",
                    "time": 1709510400,
                    "language": "pt"
                },
                {"author_name": "Rui", "rating": 4, "text": "Bom"}
            ]
        },
        {
            "place_id": "p2",
            "name": "Auto Posto Ipiranga",
            "latitude": -23.55,
            "longitude": -46.63,
            "rating": 3.5,
            "reviews": []
        },
        {
            "place_id": "p1",
            "name": "Posto Shell Centro (copy)",
            "latitude": -22.9035,
            "longitude": -43.1770
        },
        {
            "place_id": "p3",
            "name": "Sem Coordenadas"
        }
    ])
}

/// Write `contents` to a file inside `temp_dir`
pub fn write_payload(temp_dir: &TempDir, file_name: &str, contents: &str) -> PathBuf {
    let path = temp_dir.path().join(file_name);
    fs::write(&path, contents).unwrap();
    path
}

/// Loader configuration pointing at `source` with short timeouts
pub fn loader_config(source: impl Into<String>) -> LoaderConfig {
    LoaderConfig {
        source: source.into(),
        timeout_secs: 5,
        connect_timeout_secs: 2,
        ..Default::default()
    }
}
