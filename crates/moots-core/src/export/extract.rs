//! Mutual extraction from a parsed export document.

use serde_json::Value;

use crate::record::MutualRecord;
use crate::url_model;

use super::traverse::{Cursor, TraversalError};

/// Entry type marking a single renderable user row (as opposed to cursor or
/// module markers that also live in `entries`).
const TIMELINE_ITEM: &str = "TimelineTimelineItem";

/// Walks the document and returns every mutual in traversal order.
///
/// The spine `data.user.result.timeline.timeline.instructions` must match
/// exactly; any deviation on it fails the whole document. Below the spine the
/// scan is lenient: instructions without an `entries` array and entries that
/// do not look like user rows are skipped.
pub fn mutuals_from_value(doc: &Value) -> Result<Vec<MutualRecord>, TraversalError> {
    let instructions = Cursor::root(doc)
        .member("data")?
        .member("user")?
        .member("result")?
        .member("timeline")?
        .member("timeline")?
        .member("instructions")?
        .array()?;

    let mut mutuals = Vec::new();
    for instruction in instructions {
        let Some(entries) = instruction.get("entries").and_then(Value::as_array) else {
            continue;
        };
        for entry in entries {
            if let Some(record) = mutual_from_entry(entry) {
                mutuals.push(record);
            }
        }
    }
    Ok(mutuals)
}

/// One entry → one record, or `None` when the entry is not a user row, is not
/// a mutual, or lacks the fields needed to build the record. Malformed entries
/// are skipped rather than failing the document; the spine check above is the
/// only hard shape requirement.
fn mutual_from_entry(entry: &Value) -> Option<MutualRecord> {
    let content = entry.get("content")?;
    if content.get("entryType").and_then(Value::as_str) != Some(TIMELINE_ITEM) {
        return None;
    }

    let Some(legacy) = content
        .get("itemContent")
        .and_then(|v| v.get("user_results"))
        .and_then(|v| v.get("result"))
        .and_then(|v| v.get("legacy"))
    else {
        tracing::debug!("skipping timeline item without legacy user attributes");
        return None;
    };

    let followed_by = legacy.get("followed_by").and_then(Value::as_bool);
    let following = legacy.get("following").and_then(Value::as_bool);
    let (Some(followed_by), Some(following)) = (followed_by, following) else {
        tracing::debug!("skipping timeline item without relationship flags");
        return None;
    };
    if !(followed_by && following) {
        return None;
    }

    let handle = legacy.get("screen_name").and_then(Value::as_str);
    let thumbnail = legacy.get("profile_image_url_https").and_then(Value::as_str);
    let (Some(handle), Some(thumbnail)) = (handle, thumbnail) else {
        tracing::debug!("skipping mutual without screen_name or profile image URL");
        return None;
    };

    Some(MutualRecord {
        handle: handle.to_string(),
        image_url: url_model::full_size_url(thumbnail),
    })
}
