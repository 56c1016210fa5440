use anyhow::Result;
use clap::ArgMatches;
use log::debug;
use serde_json::json;

use spantok_tokenizers::{Tokenizer, parse_token_ids};

use crate::common::{JSON_ARG, read_text, train_tokenizer};

pub fn run_decode(matches: &ArgMatches) -> Result<()> {
    let text = read_text(matches)?;
    let ids = matches
        .get_one::<String>("ids")
        .expect("A list of token ids is required.");
    let ids = parse_token_ids(ids)?;

    let mut tokenizer = train_tokenizer(matches, &text)?;
    let decoded = decode_against(&mut tokenizer, &text, &ids);

    if matches.get_flag(JSON_ARG) {
        println!("{}", json!({ "ids": ids, "text": decoded }));
    } else {
        println!("{decoded}");
    }

    Ok(())
}

///
/// Encode `text` first so that decoding sees the spacing of that text, then decode `ids`.
///
fn decode_against(tokenizer: &mut Tokenizer, text: &str, ids: &[u32]) -> String {
    let encoding = tokenizer.encode(text);
    debug!("Encoded reference text into {} ids", encoding.len());
    tokenizer.decode(ids)
}
