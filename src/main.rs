use anyhow::{Context, Result};
use clap::Parser;
use json_guess::{
    codec_words, guess_fields, parse_reader, underscore_to_camelcase, KnownDecoders,
    TypeDescriptor, JSON_DECODE, JSON_ENCODE,
};
use serde_json::Value;
use std::fs::File;
use std::io::{stdin, BufReader, Read};
use tracing_subscriber::EnvFilter;

/// Guesses a type signature for each field of an example JSON value
#[derive(Parser)]
#[command(name = "json-guess", version)]
struct Cli {
    /// Where to read the example from. Dash (hyphen) indicates stdin
    #[arg(default_value = "-")]
    input: String,

    /// Print field names in camelCase instead of as they appear in the input
    #[arg(long)]
    camel_case: bool,

    /// Also print the decoder and encoder names each field would use
    #[arg(long)]
    codecs: bool,

    /// Flag guesses that a single example couldn't pin down (null, empty
    /// list, nested object)
    #[arg(long)]
    mark_placeholders: bool,

    /// Prefix for decoders of custom types
    #[arg(long, default_value = "decode")]
    decoder_prefix: String,

    /// Prefix for encoders of custom types
    #[arg(long, default_value = "encode")]
    encoder_prefix: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let reader = BufReader::new(match cli.input.as_str() {
        "-" => Box::new(stdin()) as Box<dyn Read>,
        file => Box::new(File::open(file).with_context(|| format!("opening {}", file))?)
            as Box<dyn Read>,
    });

    let value = parse_reader(reader).context("reading input")?;

    for line in render(&cli, &KnownDecoders::default(), &value) {
        println!("{}", line);
    }

    Ok(())
}

/// One line per field for an object, or a single bare guess for anything else.
fn render(cli: &Cli, known: &KnownDecoders, value: &Value) -> Vec<String> {
    match value {
        Value::Object(obj) => {
            tracing::debug!(fields = obj.len(), "guessing field types");

            guess_fields(obj)
                .into_iter()
                .map(|(name, guess)| {
                    let name = if cli.camel_case {
                        underscore_to_camelcase(name)
                    } else {
                        name.to_owned()
                    };

                    render_line(cli, known, &name, &guess)
                })
                .collect()
        }
        other => {
            let guess = TypeDescriptor::guess(other);
            vec![with_marker(cli, guess.to_string(), &guess)]
        }
    }
}

fn render_line(cli: &Cli, known: &KnownDecoders, name: &str, guess: &TypeDescriptor) -> String {
    let line = if cli.codecs {
        let words = codec_words(guess);
        format!(
            "{} : {} ({} / {})",
            name,
            guess,
            known.prefix_codec(&cli.decoder_prefix, &words, JSON_DECODE),
            known.prefix_codec(&cli.encoder_prefix, &words, JSON_ENCODE),
        )
    } else {
        format!("{} : {}", name, guess)
    };

    with_marker(cli, line, guess)
}

fn with_marker(cli: &Cli, line: String, guess: &TypeDescriptor) -> String {
    if cli.mark_placeholders && guess.is_placeholder() {
        format!("{} -- placeholder", line)
    } else {
        line
    }
}
