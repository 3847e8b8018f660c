use std::fs;
use std::io::{self, BufRead};
use std::process;

use sitelen_core::{Lexicon, LexiconConfigError};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Debug, thiserror::Error)]
pub enum TableLoadError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Config(#[from] LexiconConfigError),
}

/// Install a custom lexicon table before any conversion runs.
pub fn load_table(path: &str) -> Result<(), TableLoadError> {
    let toml = fs::read_to_string(path)?;
    Lexicon::init_custom(toml)?;
    Ok(())
}

pub fn convert_cmd(text: Option<&str>, json: bool) {
    match text {
        Some(text) => print_conversion(text, json),
        None => {
            // No argument: convert stdin line by line.
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = die!(line, "Error reading stdin: {}");
                print_conversion(&line, json);
            }
        }
    }
}

fn print_conversion(input: &str, json: bool) {
    let output = Lexicon::global().convert(input);
    if json {
        println!(
            "{}",
            serde_json::json!({ "input": input, "output": output })
        );
    } else {
        println!("{output}");
    }
}

pub fn lookup_cmd(token: &str) {
    match Lexicon::global().glyph_for(token) {
        Some(glyph) => println!("{token}\tU+{:X}\t{glyph}", glyph as u32),
        None => {
            eprintln!("{token}: not in lexicon");
            process::exit(1);
        }
    }
}

pub fn table_cmd(json: bool) {
    let lex = Lexicon::global();
    if json {
        let map: serde_json::Map<String, serde_json::Value> = lex
            .entries()
            .map(|(token, glyph)| {
                (
                    token.to_owned(),
                    serde_json::Value::String(format!("U+{:X}", glyph as u32)),
                )
            })
            .collect();
        println!(
            "{}",
            die!(
                serde_json::to_string_pretty(&serde_json::Value::Object(map)),
                "Error serializing table: {}"
            )
        );
    } else {
        for (token, glyph) in lex.entries() {
            println!("{token}\tU+{:X}", glyph as u32);
        }
    }
}
