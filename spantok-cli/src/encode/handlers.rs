use anyhow::Result;
use clap::ArgMatches;

use spantok_tokenizers::{Encoding, Highlight, Tokenizer, format_token_ids};

use crate::common::{JSON_ARG, read_text, train_tokenizer};

pub fn run_encode(matches: &ArgMatches) -> Result<()> {
    let text = read_text(matches)?;
    let mut tokenizer = train_tokenizer(matches, &text)?;

    let encoding = encode_input(&mut tokenizer, &text);
    if encoding.is_empty() {
        return Ok(());
    }

    if matches.get_flag(JSON_ARG) {
        println!("{}", serde_json::to_string_pretty(&encoding)?);
        return Ok(());
    }

    println!("{}", format_token_ids(&encoding.ids));

    if matches.get_flag("spans") {
        print!("{}", render_spans(&encoding));
    }

    if matches.get_flag("highlight") {
        println!("{}", render_highlight(&encoding.highlight(&text)));
    }

    Ok(())
}

///
/// Blank input (empty or whitespace only) produces no encoding at all.
///
fn encode_input(tokenizer: &mut Tokenizer, text: &str) -> Encoding {
    if text.trim().is_empty() {
        return Encoding::default();
    }
    tokenizer.encode(text)
}

///
/// One `start\tend\tid\ttext` line per span.
///
fn render_spans(encoding: &Encoding) -> String {
    encoding
        .spans
        .iter()
        .enumerate()
        .map(|(index, span)| {
            let id = encoding.ids.get(index + 1).copied().unwrap_or_default();
            format!("{}\t{}\t{}\t{:?}\n", span.start, span.end, id, span.text)
        })
        .collect()
}

fn render_highlight(pieces: &[Highlight]) -> String {
    pieces
        .iter()
        .map(|piece| match piece.token_id {
            Some(id) => format!("[{}|{}]", piece.text, id),
            None => piece.text.clone(),
        })
        .collect()
}
