use kana_core::furigana::{align, update_mapping, FuriganaMap};
use serde::Serialize;

#[derive(Serialize)]
struct AlignReport<'a> {
    input: &'a str,
    reading: &'a str,
    blocks: Vec<BlockReport<'a>>,
    map: FuriganaMap,
}

#[derive(Serialize)]
struct BlockReport<'a> {
    block: &'a str,
    reading: &'a str,
}

pub fn align_cmd(input: &str, reading: &str, json: bool) {
    let empty = FuriganaMap::new();
    let alignment = align(input, reading, &empty);
    let map = update_mapping(input, reading, &empty);

    if json {
        let report = AlignReport {
            input,
            reading,
            blocks: alignment
                .pairs()
                .map(|(block, reading)| BlockReport { block, reading })
                .collect(),
            map,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("Error serializing report: {e}"),
        }
        return;
    }

    let segs: Vec<String> = alignment
        .pairs()
        .map(|(block, reading)| format!("{block}({reading})"))
        .collect();
    println!("{}", segs.join(" | "));
    for (key, value) in map.iter() {
        println!("  {key} -> {value}");
    }
}
