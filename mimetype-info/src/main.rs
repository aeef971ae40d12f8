use std::fs;

use clap::Parser;
use mimetype::codec::{ALL_CODECS, require_codec};
use mimetype::format::MediaFormat;
use mimetype::mime::{Classification, classify};

#[derive(Parser)]
#[command(name = "mimetype-info", about = "Classify media MIME types as audio or video")]
struct Args {
    /// MIME types to classify (e.g. video/avc)
    #[arg(required_unless_present_any = ["format", "list", "schema", "version"])]
    mime_types: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Fail if any MIME type is not a known codec
    #[arg(long)]
    strict: bool,

    /// List known codecs and exit
    #[arg(long)]
    list: bool,

    /// Print stream values for a JSON track format description
    #[arg(short = 'f', long = "format", value_name = "FILE")]
    format: Option<String>,

    /// Print JSON schema for the output format and exit
    #[arg(long)]
    schema: bool,

    /// Display version and quit
    #[arg(long)]
    version: bool,
}

fn main() {
    // Reset SIGPIPE to default so piped output (e.g. head/tail) exits cleanly
    #[cfg(unix)]
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    if args.version {
        mimetype::version::print_cli_version_banner(
            "MIME Type Info Tool",
            env!("CARGO_PKG_VERSION"),
            env!("RELEASE_VERSION"),
            env!("GIT_COMMIT"),
        );
        return Ok(());
    }

    if args.schema {
        let schema = schemars::schema_for!(Vec<Classification>);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    if args.list {
        print_codecs();
        return Ok(());
    }

    if let Some(path) = &args.format {
        let text = fs::read_to_string(path)?;
        let format: MediaFormat = serde_json::from_str(&text)?;
        log::debug!("Loaded track format from {}: {:?}", path, format);
        for value in format.stream_values() {
            println!("{value}");
        }
        return Ok(());
    }

    let results: Vec<Classification> = args.mime_types.iter().map(|m| classify(m)).collect();
    for c in &results {
        log::debug!("{} -> {:?} (codec id {:?})", c.mime_type, c.category, c.codec_id);
    }

    if args.json {
        println!("{}", serde_json::to_string(&results)?);
    } else {
        print_table(&results);
    }

    if args.strict {
        let mut unknown = 0;
        for c in &results {
            if let Err(e) = require_codec(&c.mime_type) {
                log::warn!("{}", e);
                unknown += 1;
            }
        }
        if unknown > 0 {
            return Err(format!("{} of {} MIME types are not known codecs", unknown, results.len()).into());
        }
    }

    Ok(())
}

fn print_table(results: &[Classification]) {
    println!("{:>4} {:>16} {:>10}  {}", "Type", "Codec ID", "Known", "MIME type");
    for c in results {
        let known = c.codec.map_or("-", |info| info.codec_name);
        println!("{:>4} {:>16} {:>10}  {}", c.type_char(), c.codec_id, known, c.mime_type);
    }
}

fn print_codecs() {
    println!("{:>4} {:>10}  {}", "Type", "Codec", "MIME type");
    for info in ALL_CODECS {
        let type_char = if info.is_video() { 'V' } else { 'A' };
        println!("{:>4} {:>10}  {}", type_char, info.codec_name, info.mime_type);
    }
}
