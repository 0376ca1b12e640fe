//! Protobuf decode/encode of the pprof payload
//!
//! Only `string_table` (field 6) is decoded into owned text. Every other
//! top-level field is kept as the exact bytes it was read from, so fields this
//! crate does not model, at any nesting depth, come back out unchanged.

use log::debug;
use prost::encoding::{decode_key, skip_field, string, DecodeContext};
use prost::Message;

use super::proto;
use crate::domain::ReplacerError;

const STRING_TABLE_TAG: u32 = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Field {
    /// One `string_table` entry
    Entry(String),
    /// Any other field, key included, as read from the input
    Opaque(Vec<u8>),
}

/// A decoded profile, in input field order.
///
/// The string table can be read and rewritten in place but not resized, so
/// the indices held by samples, functions and mappings stay valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    fields: Vec<Field>,
}

impl Profile {
    pub fn string_table(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().filter_map(|field| match field {
            Field::Entry(value) => Some(value.as_str()),
            Field::Opaque(_) => None,
        })
    }

    pub fn strings_mut(&mut self) -> impl Iterator<Item = &mut String> {
        self.fields.iter_mut().filter_map(|field| match field {
            Field::Entry(value) => Some(value),
            Field::Opaque(_) => None,
        })
    }

    pub fn encoded_len(&self) -> usize {
        self.fields
            .iter()
            .map(|field| match field {
                Field::Entry(value) => string::encoded_len(STRING_TABLE_TAG, value),
                Field::Opaque(raw) => raw.len(),
            })
            .sum()
    }
}

/// Decode an uncompressed pprof payload.
///
/// # Errors
/// `MalformedProfile` if the bytes are truncated, carry an invalid tag or wire
/// type, a bad varint, or a string field that is not UTF-8.
pub fn decode(payload: &[u8]) -> Result<Profile, ReplacerError> {
    // Checks every modelled field at any depth; the walk below only frames
    // top-level fields.
    let schema = proto::Profile::decode(payload)?;

    let mut fields = Vec::new();
    let mut buf = payload;
    while !buf.is_empty() {
        let start = payload.len() - buf.len();
        let (tag, wire_type) = decode_key(&mut buf)?;
        if tag == STRING_TABLE_TAG {
            let mut value = String::new();
            string::merge(wire_type, &mut value, &mut buf, DecodeContext::default())?;
            fields.push(Field::Entry(value));
        } else {
            skip_field(wire_type, tag, &mut buf, DecodeContext::default())?;
            let end = payload.len() - buf.len();
            fields.push(Field::Opaque(payload[start..end].to_vec()));
        }
    }

    debug!(
        "decoded profile: {} bytes, {} strings, {} samples",
        payload.len(),
        schema.string_table.len(),
        schema.sample.len()
    );
    Ok(Profile { fields })
}

/// Encode a profile, re-emitting opaque fields byte for byte.
///
/// # Errors
/// `Encode` if the bytes written disagree with `encoded_len`, which means a
/// defect in this module rather than bad input.
pub fn encode(profile: &Profile) -> Result<Vec<u8>, ReplacerError> {
    let expected = profile.encoded_len();
    let mut buf = Vec::with_capacity(expected);
    for field in &profile.fields {
        match field {
            Field::Entry(value) => string::encode(STRING_TABLE_TAG, value, &mut buf),
            Field::Opaque(raw) => buf.extend_from_slice(raw),
        }
    }
    if buf.len() != expected {
        return Err(ReplacerError::Encode { expected, written: buf.len() });
    }
    debug!("encoded profile: {} bytes", buf.len());
    Ok(buf)
}
