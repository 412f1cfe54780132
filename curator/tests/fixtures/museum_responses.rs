//! Canned museum API payloads
//!
//! Every payload carries one religious candidate so tests can check that it
//! never gets through.

#![allow(dead_code)]

use serde_json::{json, Value};

pub const RELIGIOUS_TITLE: &str = "Madonna and Child";

/// ARTIC search response with a religious, a landscape and a portrait candidate
pub fn artic_search_response() -> Value {
    json!({
        "pagination": { "total": 3, "limit": 40, "current_page": 1 },
        "data": [
            {
                "id": 16568,
                "title": RELIGIOUS_TITLE,
                "artist_display": "Unknown Italian\nFlorence",
                "date_display": "c. 1450",
                "image_id": "aaaa-1111",
                "style_title": "Renaissance",
                "department_title": "Painting and Sculpture of Europe",
                "thumbnail": { "width": 3000, "height": 2000 }
            },
            {
                "id": 20684,
                "title": "Paris Street; Rainy Day",
                "artist_display": "Gustave Caillebotte\nFrench, 1848-1894",
                "date_display": "1877",
                "image_id": "bbbb-2222",
                "style_title": "Impressionism",
                "department_title": "Painting and Sculpture of Europe",
                "thumbnail": { "width": 4000, "height": 2800 }
            },
            {
                "id": 27992,
                "title": "A Sunday on La Grande Jatte",
                "artist_display": "Georges Seurat",
                "date_display": "1884-86",
                "image_id": "cccc-3333",
                "style_title": "Post-Impressionism",
                "department_title": "Textiles",
                "thumbnail": { "width": 1800, "height": 2700 }
            },
            {
                "id": 11111,
                "title": "Study Without Image",
                "artist_display": "Anonymous",
                "date_display": null,
                "image_id": null,
                "style_title": null,
                "department_title": "Painting and Sculpture of Europe",
                "thumbnail": null
            }
        ]
    })
}

/// ARTIC response whose only candidate is religious
pub fn artic_religious_only_response() -> Value {
    json!({
        "data": [{
            "id": 16568,
            "title": RELIGIOUS_TITLE,
            "artist_display": "Unknown Italian",
            "date_display": "c. 1450",
            "image_id": "aaaa-1111",
            "style_title": "Renaissance",
            "department_title": "Painting and Sculpture of Europe",
            "thumbnail": { "width": 3000, "height": 2000 }
        }]
    })
}

pub fn met_search_response(ids: &[u64]) -> Value {
    json!({ "total": ids.len(), "objectIDs": ids })
}

pub fn met_empty_search_response() -> Value {
    json!({ "total": 0, "objectIDs": null })
}

pub fn met_object(id: u64, title: &str, width: f64, height: f64) -> Value {
    json!({
        "objectID": id,
        "title": title,
        "artistDisplayName": "Vincent van Gogh",
        "objectDate": "1889",
        "primaryImage": format!("https://images.metmuseum.org/original/{id}.jpg"),
        "primaryImageSmall": format!("https://images.metmuseum.org/web-large/{id}.jpg"),
        "classification": "Paintings",
        "measurements": [
            {
                "elementName": "Frame",
                "elementMeasurements": { "Depth": 5.1 }
            },
            {
                "elementName": "Overall",
                "elementMeasurements": { "Height": height, "Width": width }
            }
        ]
    })
}

/// Met object with no small image and string-free measurements
pub fn met_object_without_small_image(id: u64) -> Value {
    json!({
        "objectID": id,
        "title": "Wheat Field with Cypresses",
        "artistDisplayName": "",
        "objectDate": "1889",
        "primaryImage": format!("https://images.metmuseum.org/original/{id}.jpg"),
        "primaryImageSmall": "",
        "classification": "Paintings",
        "measurements": [
            { "elementName": "Overall", "elementMeasurements": { "Height": 73.2, "Width": 93.4 } }
        ]
    })
}

/// Cleveland response with string and numeric dimensions
pub fn cleveland_search_response() -> Value {
    json!({
        "info": { "total": 3 },
        "data": [
            {
                "id": 135382,
                "title": RELIGIOUS_TITLE,
                "creation_date": "c. 1500",
                "creators": [{ "description": "Workshop of Giovanni Bellini (Italian, 1430-1516)" }],
                "type": "Painting",
                "images": { "web": { "url": "https://openaccess-cdn.clevelandart.org/135382/web.jpg", "width": "1500", "height": "1000" } }
            },
            {
                "id": 135501,
                "title": "Water Lilies (Agapanthus)",
                "creation_date": "1915-26",
                "creators": [{ "description": "Claude Monet (French, 1840-1926)" }],
                "type": "Painting",
                "images": { "web": { "url": "https://openaccess-cdn.clevelandart.org/135501/web.jpg", "width": "1263", "height": "654" } }
            },
            {
                "id": 142829,
                "title": "Portrait of a Woman",
                "creation_date": "1660",
                "creators": [],
                "type": "Painting",
                "images": { "web": { "url": "https://openaccess-cdn.clevelandart.org/142829/web.jpg", "width": 700, "height": 1000 } }
            },
            {
                "id": 99,
                "title": "Fragment",
                "creation_date": null,
                "creators": [],
                "type": "Textile",
                "images": null
            }
        ]
    })
}
