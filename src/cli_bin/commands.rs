//! CLI command handlers that bridge CLI arguments to library operations

use crate::cli_bin::args::*;
use crate::cli_bin::callbacks::{NamedFilter, NamedMap};
use dotlist::{
    parse_value, Config, DotListError, PathMap, Result, Sequence, SetPolicy, StringifyOptions,
    ValueType,
};
use log::{debug, info, warn};
use regex::Regex;
use serde_yaml::Value;
use std::io::Read;

/// Execute the get command
pub fn get_command(args: GetArgs, config: &Config) -> Result<()> {
    debug!("Executing get command with args: {:?}", args);

    let map = load_map(&args.input, config)?;
    let path = args.path.as_deref();
    let default = match args.default.as_deref() {
        Some(raw) => parse_value(raw, None)?,
        None => Value::Null,
    };

    let value = if args.first {
        map.get_first_or(path, &default)
    } else {
        map.get_or(path, &default)
    };

    if value.is_null() {
        info!("No value found at '{}'", path.unwrap_or_default());
        return Ok(());
    }
    output_value(value, args.format)
}

/// Execute the set command
pub fn set_command(args: SetArgs, config: &Config) -> Result<()> {
    debug!("Executing set command with args: {:?}", args);

    let mut map = load_map(&args.input, config)?;
    if args.strict {
        map = map.with_set_policy(SetPolicy::Strict);
    }

    let type_hint = args.type_.as_deref().map(value_type).transpose()?;
    let value = parse_value(&args.value, type_hint)?;
    map.set(args.path.as_str(), value)?;
    info!("Updated: {}", args.path);

    output_value(&Value::Mapping(map.into_inner()), args.format)
}

/// Execute the list command
pub fn list_command(args: ListArgs, config: &Config) -> Result<()> {
    debug!("Executing list command with args: {:?}", args);

    let mut seq: Sequence<String> = args.items.iter().cloned().collect();

    if let Some(prefix) = &args.prefix {
        seq.prefix(prefix);
    }
    if let Some(suffix) = &args.suffix {
        seq.suffix(suffix);
    }
    if let Some(surround) = &args.surround {
        seq.surround(surround);
    }

    for name in &args.maps {
        let transform = NamedMap::from_name(name)?;
        seq = seq.map(|item| transform.apply(item));
    }
    for name in &args.filters {
        let test = NamedFilter::from_name(name)?;
        seq = seq.filter(|item| test.accepts(item));
    }
    if let Some(pattern) = &args.matching {
        let re = Regex::new(pattern)?;
        seq = seq.filter(|item| re.is_match(item));
    }
    if let Some(raw) = &args.take {
        seq = seq.take(parse_value(raw, None)?)?;
    }

    let output = match &args.human {
        Some(ending) => {
            let ending = ending.as_deref().unwrap_or(config.human.ending.as_str());
            seq.human(ending)
        }
        None => seq.stringify_with(&stringify_options(&args, &config.stringify)),
    };

    match output {
        Some(text) => println!("{}", text),
        None => warn!("List is empty, nothing to print"),
    }
    Ok(())
}

fn stringify_options(args: &ListArgs, defaults: &StringifyOptions) -> StringifyOptions {
    StringifyOptions {
        delimiter: args
            .delimiter
            .clone()
            .unwrap_or_else(|| defaults.delimiter.clone()),
        prefix: args
            .item_prefix
            .clone()
            .unwrap_or_else(|| defaults.prefix.clone()),
        suffix: args
            .item_suffix
            .clone()
            .unwrap_or_else(|| defaults.suffix.clone()),
    }
}

fn value_type(name: &str) -> Result<ValueType> {
    ValueType::from_name(name).ok_or_else(|| {
        DotListError::invalid_argument("--type", format!("unknown value type '{}'", name))
    })
}

fn load_map(input: &InputOptions, config: &Config) -> Result<PathMap> {
    let content = match &input.file {
        Some(path) => {
            debug!("Reading {}", path.display());
            std::fs::read_to_string(path)?
        }
        None => {
            debug!("Reading stdin");
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    Ok(PathMap::from_yaml_str(&content)?.with_config(config.path_map.clone()))
}

fn output_value(value: &Value, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(value)?);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(value)?);
        }
    }
    Ok(())
}
