use regex::Regex;
use std::sync::OnceLock;

use crate::domain::models::SignatureRecord;
use crate::infrastructure::wire::SignatureInfo;

static MEMO_LENGTH_MARKER: OnceLock<Regex> = OnceLock::new();

/// Removes the `"[<byte length>] "` marker the node puts in front of memos.
///
/// Only a marker at the very start is stripped, and only once.
pub fn strip_memo_marker(memo: &str) -> &str {
    let marker = MEMO_LENGTH_MARKER
        .get_or_init(|| Regex::new(r"^\[\d+\] ").expect("memo marker pattern is valid"));
    match marker.find(memo) {
        Some(found) => &memo[found.end()..],
        None => memo,
    }
}

impl From<SignatureInfo> for SignatureRecord {
    fn from(info: SignatureInfo) -> Self {
        SignatureRecord {
            signature: info.signature,
            slot: info.slot,
            err: info.err,
            memo: info.memo.map(|memo| strip_memo_marker(&memo).to_string()),
            block_time: info.block_time,
            confirmation_status: info.confirmation_status,
        }
    }
}
