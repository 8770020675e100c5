use std::borrow::Cow;

use super::map::FuriganaMap;

/// Assign each block the part of `reading` it accounts for.
///
/// Rules, first match wins:
/// 1. a learned key keeps its learned reading;
/// 2. a block the unconsumed reading starts with is already phonetic;
/// 3. a block found inside the previous block's reading is split off it
///    (kanji followed by kana);
/// 4. if the next block is a learned key, take the reading up to that key's
///    reading (kanji followed by kanji);
/// 5. otherwise take all of the unconsumed reading.
///
/// The result has exactly one entry per block; entries may be empty.
pub fn align_blocks(blocks: &[String], reading: &str, map: &FuriganaMap) -> Vec<String> {
    let mut acc: Vec<String> = Vec::with_capacity(blocks.len());

    for (i, block) in blocks.iter().enumerate() {
        if let Some(known) = map.get(block) {
            acc.push(known.to_string());
            continue;
        }

        let consumed = acc.concat();
        let rest = remainder(reading, &consumed);

        if rest.starts_with(block.as_str()) {
            acc.push(block.clone());
            continue;
        }

        if let Some(prev) = acc.last_mut() {
            if let Some(at) = prev.find(block.as_str()) {
                prev.truncate(at);
                acc.push(block.clone());
                continue;
            }
        }

        let next_reading = blocks.get(i + 1).and_then(|next| map.get(next));
        if let Some(at) = next_reading.and_then(|r| rest.find(r)) {
            acc.push(rest[..at].to_string());
            continue;
        }

        acc.push(rest.into_owned());
    }

    acc
}

/// `reading` with the first occurrence of `consumed` cut out.
/// When `consumed` is empty or absent the whole reading remains.
fn remainder<'a>(reading: &'a str, consumed: &str) -> Cow<'a, str> {
    if consumed.is_empty() {
        return Cow::Borrowed(reading);
    }
    match reading.find(consumed) {
        Some(at) => {
            let mut rest = String::with_capacity(reading.len() - consumed.len());
            rest.push_str(&reading[..at]);
            rest.push_str(&reading[at + consumed.len()..]);
            Cow::Owned(rest)
        }
        None => Cow::Borrowed(reading),
    }
}
