//! fbwire - decode Firebird wire values from the command line
//!
//! - `fbwire decode --type LONG --scale -2 00003039` - decode one value
//! - `fbwire types` - print the type catalog
//! - `fbwire charsets` - print the registered character sets
//! - `fbwire timezones` - print the timezone id table

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use fbwire::protocol::charset;
use fbwire::protocol::timezone::{TimezoneTable, MAX_OFFSET_ID};
use fbwire::{ColumnDescriptor, Config, DecodeContext, RowDecoder, SqlType, Value};

#[derive(Parser)]
#[command(name = "fbwire", version)]
#[command(about = "Decode Firebird wire-format column values", long_about = None)]
struct Cli {
    /// Config file (default: <config dir>/fbwire/config.toml).
    #[arg(long, global = true, env = "FBWIRE_CONFIG")]
    config: Option<PathBuf>,

    /// Log at debug level (overrides RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode one hex-encoded column value.
    Decode {
        /// Type code (e.g. 496) or name (e.g. LONG, DECFLOAT(16)).
        #[arg(short = 't', long = "type")]
        sql_type: String,

        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        scale: i32,

        /// 0 = text, 1 = octets.
        #[arg(long, default_value_t = 0)]
        subtype: i32,

        /// Declared length (text types); defaults to the value length.
        #[arg(long)]
        length: Option<i32>,

        /// Session timezone; overrides the config file.
        #[arg(long)]
        timezone: Option<String>,

        /// Session charset; overrides the config file.
        #[arg(long)]
        charset: Option<String>,

        /// Print the result as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Raw value bytes as hex (optional 0x prefix).
        hex: String,
    },
    /// Print the type descriptor catalog.
    Types,
    /// Print the registered character sets.
    Charsets,
    /// Print the timezone id table.
    Timezones,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load(cli.config.as_deref()).context("Failed to load config")?;

    match cli.command {
        Command::Decode {
            sql_type,
            scale,
            subtype,
            length,
            timezone,
            charset,
            json,
            hex,
        } => {
            let code = parse_type(&sql_type)?;
            let raw = parse_hex(&hex)?;
            let timezone = timezone.unwrap_or_else(|| config.session.timezone.clone());
            let charset = charset.unwrap_or_else(|| config.session.charset.clone());

            let column = ColumnDescriptor::new(code)
                .scale(scale)
                .subtype(subtype)
                .length(length.unwrap_or(raw.len() as i32));
            let ctx = DecodeContext::new(&timezone, &charset)
                .with_timezones(Arc::new(config.timezone_table()?));

            decode(column, ctx, &raw, json)
        }
        Command::Types => {
            list_types();
            Ok(())
        }
        Command::Charsets => {
            list_charsets();
            Ok(())
        }
        Command::Timezones => list_timezones(&config),
    }
}

/// Numeric code or catalog/constant name.
fn parse_type(input: &str) -> Result<i32> {
    if let Ok(code) = input.trim().parse::<i32>() {
        return Ok(code);
    }
    SqlType::from_name(input)
        .map(SqlType::code)
        .ok_or_else(|| anyhow::anyhow!("Unknown type: {}. Run `fbwire types` for the list", input))
}

fn parse_hex(input: &str) -> Result<Vec<u8>> {
    let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let digits = cleaned
        .strip_prefix("0x")
        .or_else(|| cleaned.strip_prefix("0X"))
        .unwrap_or(&cleaned);
    hex::decode(digits).map_err(|e| anyhow::anyhow!("Invalid hex value: {}", e))
}

fn decode(column: ColumnDescriptor, ctx: DecodeContext, raw: &[u8], as_json: bool) -> Result<()> {
    let type_name = match column.type_name() {
        "" => column.sql_type.to_string(),
        name => name.to_string(),
    };
    let kind = column.value_kind(ctx.charset());
    let decoder = RowDecoder::new(vec![column.clone()], ctx);
    let row = decoder.decode_row(&[Some(raw)])?;
    let value = row.get(0).cloned().unwrap_or(Value::Null);

    if as_json {
        let out = json!({
            "type": type_name,
            "code": column.sql_type,
            "scale": column.scale,
            "kind": kind.map(|k| format!("{:?}", k)),
            "value": value_to_json(&value),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let scale = if column.has_precision_scale() {
        format!(" (scale {})", column.scale)
    } else {
        String::new()
    };
    println!("{} {}{} {} {}", "✓".green(), type_name.cyan(), scale, "→".dimmed(), value.to_string().yellow());
    Ok(())
}

fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Text(s) => json!(s),
        Value::Bytes(b) => json!(hex::encode(b)),
        Value::SmallInt(v) => json!(v),
        Value::Int(v) => json!(v),
        Value::BigInt(v) => json!(v),
        Value::Boolean(b) => json!(b),
        Value::Float(v) => json!(v),
        Value::Double(v) => json!(v),
        Value::Date(z) => json!({ "value": z.value.to_string(), "zone": z.zone.to_string() }),
        Value::Time(z) | Value::TimeTz(z) => {
            json!({ "value": z.value.to_string(), "zone": z.zone.to_string() })
        }
        Value::Timestamp(z) | Value::TimestampTz(z) => {
            json!({ "value": z.value.to_string(), "zone": z.zone.to_string() })
        }
        // exact values stay strings to keep every digit
        other => json!(other.to_string()),
    }
}

fn list_types() {
    println!(
        "{:>6}  {:<14} {:<24} {:>8} {:>8}",
        "CODE".bold(),
        "CONSTANT".bold(),
        "NAME".bold(),
        "LENGTH".bold(),
        "DISPLAY".bold()
    );
    for ty in SqlType::ALL {
        println!(
            "{:>6}  {:<14} {:<24} {:>8} {:>8}",
            ty.code(),
            ty.constant_name().cyan(),
            ty.name(),
            ty.length().to_string(),
            ty.display_width().to_string()
        );
    }
}

fn list_charsets() {
    for name in charset::names() {
        let encoding = charset::lookup(name).encoding_name();
        println!("{:<12} {}", name.cyan(), encoding);
    }
}

fn list_timezones(config: &Config) -> Result<()> {
    let table = config.timezone_table()?;
    let builtin = TimezoneTable::shared();
    println!("{} 0..={}: fixed offsets (id - 1439 minutes)", "•".cyan(), MAX_OFFSET_ID);
    for (id, name) in table.regions() {
        let marker = if builtin.resolve(id) != table.resolve(id) {
            " (config)".dimmed().to_string()
        } else {
            String::new()
        };
        println!("{} {:>5}: {}{}", "•".cyan(), id, name.yellow(), marker);
    }
    Ok(())
}
