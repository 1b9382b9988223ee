pub mod formats;

use crate::export::formats::counts::CountsExport;
use crate::export::formats::pfm::PfmExport;
use chrono::{DateTime, Utc};
use serde::ser::Serializer;
use serde::Serialize;

pub const RECORD_TYPE: &str = "srna.tools.analysis";
pub const EXPORT_VERSION: &str = "1.0";

/// Root structure for JSON reports
#[derive(Debug, Serialize)]
pub struct AnalysisExport {
    #[serde(rename = "$type")]
    pub record_type: String,

    pub version: String,
    #[serde(serialize_with = "serialize_datetime")]
    pub created_at: DateTime<Utc>,
    pub tool_version: String,

    #[serde(flatten)]
    pub data: AnalysisData,

    pub metadata: ExportMetadata,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum AnalysisData {
    MirnaCounts(CountsExport),
    PositionFrequency(PfmExport),
}

#[derive(Debug, Default, Serialize)]
pub struct ExportMetadata {
    pub inputs: Vec<String>,
    pub records_processed: u64,
}

fn serialize_datetime<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.to_rfc3339())
}

impl AnalysisExport {
    pub fn new(data: AnalysisData, metadata: ExportMetadata) -> Self {
        Self {
            record_type: RECORD_TYPE.to_string(),
            version: EXPORT_VERSION.to_string(),
            created_at: Utc::now(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            data,
            metadata,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
