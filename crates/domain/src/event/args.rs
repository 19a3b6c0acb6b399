//! Argument/result mapping that crosses the scripting boundary.
//!
//! Every value is the `serde_json` encoding of one field, keyed by field name.
//! All key names live in [`keys`]; every resource variant decodes through
//! [`sole_entry`], so the "only a single-entry result is applied" rule is
//! enforced in one place.

use std::collections::BTreeMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{DecodeError, EncodeError, HooklineError};

/// Field name → JSON bytes. Ordered so that iteration is deterministic.
pub type Args = BTreeMap<String, Vec<u8>>;

/// Key names used in argument and result mappings.
pub mod keys {
    /// Generic return value of a script; applied to the primary resource.
    pub const RESULT: &str = "result";
    pub const INVOKER: &str = "invoker";

    pub const NAMESPACE: &str = "namespace";
    pub const OLD_NAMESPACE: &str = "oldNamespace";

    pub const MODULE: &str = "module";

    pub const RECORD: &str = "record";
    pub const OLD_RECORD: &str = "oldRecord";

    pub const ROLE: &str = "role";
    pub const OLD_ROLE: &str = "oldRole";

    pub const USER: &str = "user";
    pub const OLD_USER: &str = "oldUser";
}

/// Serialize `value` and store it under `key`.
///
/// # Errors
///
/// Returns [`EncodeError`] naming `key` when serialization fails; `args` is
/// left untouched in that case.
pub fn put<T: Serialize + ?Sized>(
    args: &mut Args,
    key: &'static str,
    value: &T,
) -> Result<(), EncodeError> {
    let bytes = serde_json::to_vec(value).map_err(|source| EncodeError { key, source })?;
    args.insert(key.to_string(), bytes);
    Ok(())
}

/// The only entry of `results`, or `None` when it holds zero or several entries.
#[must_use]
pub fn sole_entry(results: &Args) -> Option<(&str, &[u8])> {
    if results.len() != 1 {
        return None;
    }
    results
        .iter()
        .next()
        .map(|(key, raw)| (key.as_str(), raw.as_slice()))
}

/// Overlay the JSON document `raw` onto `target`.
///
/// Objects are merged key by key (recursively, member names matched
/// case-insensitively when there is no exact match); any other JSON value
/// replaces what was there. A top-level `null` leaves `target` as it is. A
/// nested `null` clears a slot that can hold it (an `Option`); on any other
/// slot it is ignored and the rest of the document still applies. The merge
/// is built on a scratch copy and only written back once it deserializes, so
/// on error `target` is unchanged.
///
/// # Errors
///
/// Returns [`DecodeError`] naming `key` when `raw` is not JSON or the merged
/// document no longer fits `T`.
pub fn merge_into<T>(target: &mut T, key: &str, raw: &[u8]) -> Result<(), DecodeError>
where
    T: Serialize + DeserializeOwned,
{
    if let Some(merged) = merged(target, key, raw)? {
        *target = merged;
    }
    Ok(())
}

/// [`merge_into`], then run `validate` on the merged value before it is
/// written back.
///
/// # Errors
///
/// Returns [`HooklineError::Decode`] as [`merge_into`] does, or whatever
/// `validate` returns; `target` is unchanged in both cases.
pub fn merge_validated<T, F>(
    target: &mut T,
    key: &str,
    raw: &[u8],
    validate: F,
) -> Result<(), HooklineError>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce(&T) -> Result<(), HooklineError>,
{
    if let Some(merged) = merged(target, key, raw)? {
        validate(&merged)?;
        *target = merged;
    }
    Ok(())
}

fn merged<T>(target: &T, key: &str, raw: &[u8]) -> Result<Option<T>, DecodeError>
where
    T: Serialize + DeserializeOwned,
{
    let decode_err = |source| DecodeError {
        key: key.to_string(),
        source,
    };

    let patch: Value = serde_json::from_slice(raw).map_err(decode_err)?;
    if patch.is_null() {
        return Ok(None);
    }
    let base = serde_json::to_value(target).map_err(decode_err)?;

    // Nulls first clear what they land on; if that no longer fits `T`, the
    // ones landing on a present value are dropped and the merge retried.
    let mut scratch = base.clone();
    merge(&mut scratch, patch.clone(), Nulls::Replace);
    if let Ok(value) = serde_json::from_value(scratch) {
        return Ok(Some(value));
    }
    let mut scratch = base;
    merge(&mut scratch, patch, Nulls::SkipPresent);
    serde_json::from_value(scratch).map(Some).map_err(decode_err)
}

#[derive(Clone, Copy)]
enum Nulls {
    Replace,
    SkipPresent,
}

fn merge(base: &mut Value, patch: Value, nulls: Nulls) {
    match (base, patch) {
        (Value::Object(base), Value::Object(patch)) => {
            for (k, v) in patch {
                let existing = if base.contains_key(&k) {
                    Some(k.clone())
                } else {
                    base.keys().find(|b| b.eq_ignore_ascii_case(&k)).cloned()
                };
                let slot = match existing {
                    Some(name) => base.get_mut(&name),
                    None => None,
                };
                let Some(slot) = slot else {
                    base.insert(k, v);
                    continue;
                };
                if v.is_null() && !slot.is_null() && matches!(nulls, Nulls::SkipPresent) {
                    continue;
                }
                merge(slot, v, nulls);
            }
        }
        (slot, patch) => *slot = patch,
    }
}
