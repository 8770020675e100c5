
use super::FuriganaMap;

pub(super) fn map_of(pairs: &[(&str, &str)]) -> FuriganaMap {
    pairs.iter().copied().collect()
}
