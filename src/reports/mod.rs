// Synthetic reports for exercising the report service

pub mod client;
pub mod config;
pub mod generator;
pub mod pusher;

use serde::{Deserialize, Serialize};

pub use client::{Delivery, ReportClient};
pub use config::PushConfig;
pub use generator::ReportGenerator;
pub use pusher::{run_push, PushSummary};

pub const DEFAULT_SEVERITIES: &[&str] = &["low", "medium", "high", "critical"];

pub const LOCATIONS: &[&str] = &[
    "5th Ave and Pine St",
    "Main St near the library",
    "Central Park entrance",
    "Station Road underpass",
    "Riverside bike lane",
    "Market district block C",
];

pub const TITLE_NOUNS: &[&str] = &[
    "streetlight",
    "pothole",
    "traffic signal",
    "sidewalk",
    "drain",
    "crosswalk",
    "bus stop",
    "bridge",
    "tree",
];

pub const TITLE_ADJECTIVES: &[&str] = &[
    "broken",
    "damaged",
    "blocked",
    "flooded",
    "missing",
    "unsafe",
    "flickering",
    "collapsed",
    "overgrown",
];

pub const DESCRIPTION_WORDS: &[&str] = &[
    "resident",
    "reported",
    "issue",
    "causing",
    "danger",
    "traffic",
    "slow",
    "visibility",
    "hazard",
    "night",
    "morning",
    "urgent",
    "needs",
    "repair",
    "cleanup",
    "inspection",
    "area",
    "community",
    "safety",
];

/// Body of one `POST /reports` request. Field order is the wire order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Report {
    pub title: String,
    pub description: String,
    pub location: String,
    pub severity: String,
    pub report_categories_id: i64,
    pub is_public: bool,
    pub is_anon: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_json_field_order() {
        let report = Report {
            title: "Broken bridge".to_string(),
            description: "Urgent repair.".to_string(),
            location: "Riverside bike lane".to_string(),
            severity: "high".to_string(),
            report_categories_id: 3,
            is_public: true,
            is_anon: false,
        };

        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"title":"Broken bridge","description":"Urgent repair.","location":"Riverside bike lane","severity":"high","report_categories_id":3,"is_public":true,"is_anon":false}"#
        );
    }
}
