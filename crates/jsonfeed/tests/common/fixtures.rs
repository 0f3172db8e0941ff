use jsonfeed::{parse, Feed, JsonFeedError};

pub const ATLAS_FEED: &str = include_str!("../fixtures/atlas.json");

pub const FEED_WITHOUT_VERSION: &str = r#"{
    "title": "No version",
    "items": []
}"#;

pub const FEED_WITHOUT_TITLE: &str = r#"{
    "version": "https://jsonfeed.org/version/1.1",
    "items": []
}"#;

pub const FEED_WITH_EMPTY_TITLE: &str = r#"{
    "version": "https://jsonfeed.org/version/1.1",
    "title": "",
    "items": []
}"#;

pub const FEED_WITHOUT_ITEMS: &str = r#"{
    "version": "https://jsonfeed.org/version/1.1",
    "title": "No items"
}"#;

pub const FEED_WITH_NULL_ITEMS: &str = r#"{
    "version": "https://jsonfeed.org/version/1.1",
    "title": "Null items",
    "items": null
}"#;

pub const FEED_WITH_EMPTY_ITEMS: &str = r#"{
    "version": "https://jsonfeed.org/version/1.1",
    "title": "Empty items",
    "items": []
}"#;

pub const FEED_WITH_EMPTY_HUBS: &str = r#"{
    "version": "https://jsonfeed.org/version/1.1",
    "title": "Empty hubs",
    "hubs": [],
    "items": []
}"#;

pub const FEED_WITH_INVALID_HUBS: &str = r#"{
    "version": "https://jsonfeed.org/version/1.1",
    "title": "Invalid hubs",
    "hubs": [
        {"type": "WebSub", "url": "https://hub.example.org/"},
        {"type": "WebSub"}
    ],
    "items": []
}"#;

pub const FEED_WITH_INVALID_ITEMS: &str = r#"{
    "version": "https://jsonfeed.org/version/1.1",
    "title": "Invalid items",
    "items": [
        {"id": "1"},
        {"id": "2"},
        {"content_text": "I have no id"}
    ]
}"#;

pub const FEED_WITH_INVALID_ATTACHMENTS: &str = r#"{
    "version": "https://jsonfeed.org/version/1.1",
    "title": "Invalid attachments",
    "items": [
        {"id": "1"},
        {
            "id": "2",
            "attachments": [
                {"url": "https://example.org/a.mp3"}
            ]
        }
    ]
}"#;

pub fn parse_str(data: &str) -> Result<Feed, JsonFeedError> {
    parse(data.as_bytes())
}

pub fn atlas() -> Feed {
    parse_str(ATLAS_FEED).expect("atlas fixture is a valid feed")
}
