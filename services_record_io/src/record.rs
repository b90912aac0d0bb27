//! Detection record loading and write-back

use std::fs;
use std::path::Path;

use fragment_core::{BoundingBox, Fragment, FragmentId, FragmentStore};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{RecordError, RecordResult};

const DETECTED_TEXT: &str = "DetectedText";

#[derive(Debug, Deserialize)]
struct DetectionEntry {
    #[serde(rename = "DetectedText")]
    detected_text: String,
    #[serde(rename = "Geometry")]
    geometry: GeometryEntry,
}

#[derive(Debug, Deserialize)]
struct GeometryEntry {
    #[serde(rename = "BoundingBox")]
    bounding_box: BoundingBoxEntry,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct BoundingBoxEntry {
    left: f32,
    top: f32,
    width: f32,
    height: f32,
}

impl From<BoundingBoxEntry> for BoundingBox {
    fn from(entry: BoundingBoxEntry) -> Self {
        BoundingBox::new(entry.left, entry.top, entry.width, entry.height)
    }
}

/// A loaded detection record
///
/// Keeps the whole JSON document so that metadata and any per-detection
/// fields the editor does not understand survive [`apply`](Self::apply).
#[derive(Debug, Clone)]
pub struct DetectionRecord {
    root: Map<String, Value>,
    metadata_key: String,
    detections_key: String,
    /// Detection entries as loaded, indexed by `FragmentId`
    originals: Vec<Value>,
    fragments: Vec<Fragment>,
}

impl DetectionRecord {
    /// Read and parse a record file
    pub fn from_path(path: impl AsRef<Path>) -> RecordResult<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| RecordError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let record = Self::from_slice(&bytes)?;
        log::info!(
            "loaded {} detections from {}",
            record.fragments.len(),
            path.display()
        );
        Ok(record)
    }

    /// Parse a record from JSON bytes
    pub fn from_slice(bytes: &[u8]) -> RecordResult<Self> {
        let root = match serde_json::from_slice::<Value>(bytes)? {
            Value::Object(map) => map,
            _ => return Err(RecordError::NotAnObject),
        };

        let mut keys = root.keys();
        let (metadata_key, detections_key) = match (keys.next(), keys.next()) {
            (Some(metadata), Some(detections)) => (metadata.clone(), detections.clone()),
            _ => return Err(RecordError::MissingEntries(root.len())),
        };

        let originals = match &root[&detections_key] {
            Value::Array(entries) => entries.clone(),
            _ => return Err(RecordError::DetectionsNotArray(detections_key)),
        };
        if originals.is_empty() {
            return Err(RecordError::NoDetections);
        }

        let fragments = originals
            .iter()
            .enumerate()
            .map(|(index, entry)| parse_fragment(index, entry))
            .collect::<RecordResult<Vec<_>>>()?;

        log::debug!(
            "record entries: metadata '{}', detections '{}'",
            metadata_key,
            detections_key
        );

        Ok(Self {
            root,
            metadata_key,
            detections_key,
            originals,
            fragments,
        })
    }

    /// The opaque first entry
    pub fn metadata(&self) -> &Value {
        &self.root[&self.metadata_key]
    }

    pub fn detections_key(&self) -> &str {
        &self.detections_key
    }

    /// Fragments as loaded, in record order
    pub fn fragments(&self) -> Vec<Fragment> {
        self.fragments.clone()
    }

    /// Current detection entries, reflecting the last [`apply`](Self::apply)
    pub fn detections(&self) -> &[Value] {
        match &self.root[&self.detections_key] {
            Value::Array(entries) => entries,
            _ => &[],
        }
    }

    /// Write the store's texts back into the record.
    ///
    /// Detections whose fragment was deleted are dropped; surviving ones keep
    /// all of their other fields and follow the store's order.
    pub fn apply(&mut self, store: &FragmentStore) {
        let entries: Vec<Value> = store
            .iter()
            .filter_map(|fragment| {
                let mut entry = self.originals.get(fragment.id().index())?.clone();
                if let Value::Object(fields) = &mut entry {
                    fields.insert(
                        DETECTED_TEXT.to_string(),
                        Value::String(fragment.text().to_string()),
                    );
                }
                Some(entry)
            })
            .collect();

        log::info!(
            "applied review: {} of {} detections kept",
            entries.len(),
            self.originals.len()
        );
        self.root
            .insert(self.detections_key.clone(), Value::Array(entries));
    }

    /// Pretty JSON of the in-memory record
    pub fn to_json_string(&self) -> RecordResult<String> {
        Ok(serde_json::to_string_pretty(&self.root)?)
    }
}

fn parse_fragment(index: usize, entry: &Value) -> RecordResult<Fragment> {
    let parsed: DetectionEntry =
        serde_json::from_value(entry.clone()).map_err(|e| RecordError::MalformedDetection {
            index,
            message: e.to_string(),
        })?;

    Ok(Fragment::new(
        FragmentId::new(index),
        parsed.detected_text,
        parsed.geometry.bounding_box.into(),
    ))
}
