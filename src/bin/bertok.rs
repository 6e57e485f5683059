//! Encodes a sequence of bytes as a BER OCTET STRING token.
//!
//! Two modes of operation: given an input and an output file name, the
//! input file is read in binary mode and the raw encoded token is written
//! to the output file. Given a single `-`, one line is read from standard
//! input and the encoded token is rendered as spaced hex pairs on standard
//! output.

use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use anyhow::{anyhow, Context};
use clap::Parser;
use bertok::{Class, Pc, Token, ValueKind};

#[derive(Parser)]
#[command(version, about = "\
Encodes a given sequence of bytes into an octet string with a universal \
tag following the ASN.1 Basic Encoding Rules.")]
struct Args {
    /// Input file, or '-' to read a single line from standard input.
    input: PathBuf,

    /// Output file for the raw encoded token.
    ///
    /// Required unless the input is '-', in which case the token is
    /// written to standard output as hex text instead.
    output: Option<PathBuf>,
}

fn encode(source: &[u8]) -> Result<Token, bertok::Error> {
    Token::encode(
        ValueKind::OctetString, Class::Universal, Pc::Primitive, source
    )
}

fn encode_stdin() -> Result<(), anyhow::Error> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).context(
        "cannot read from standard input"
    )?;
    let line = line.trim_end_matches(['\r', '\n']);

    let token = encode(line.as_bytes())?;
    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    token.write_hex(&mut stdout)?;
    writeln!(&mut stdout)?;
    Ok(())
}

fn encode_file(input: &Path, output: &Path) -> Result<(), anyhow::Error> {
    let source = std::fs::read(input).with_context(|| {
        format!("cannot open {} for reading", input.display())
    })?;

    let token = encode(&source)?;
    let mut file = File::create(output).with_context(|| {
        format!("cannot open {} for writing", output.display())
    })?;
    token.write_encoded(&mut file).with_context(|| {
        format!("cannot write to {}", output.display())
    })?;
    Ok(())
}

fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();

    if args.input.as_os_str() == "-" {
        encode_stdin()
    }
    else {
        let output = args.output.as_ref().ok_or_else(|| {
            anyhow!("an output file is required when encoding from a file")
        })?;
        encode_file(&args.input, output)
    }
}
