//! keypress - inspect key-event normalization from the command line

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use keypress::keymap::{
    load_keymap_file, load_user_keymap, FixedLayout, KeyRecord, KeyboardLayout, LoadPolicy,
    SystemLayout,
};
use keypress::{KeyEvent, Keymap, ModifierState};

use cli::{CliArgs, CliCommand};

#[derive(Serialize)]
struct Described<'a> {
    input: &'a str,
    #[serde(flatten)]
    record: KeyRecord,
}

fn print_event(input: &str, event: &KeyEvent) {
    println!("{}\t{}\t{}", input, event.tuple_string(), event);
}

fn describe(bindings: &[String], json: bool) -> Result<()> {
    let mut described = Vec::with_capacity(bindings.len());
    for descr in bindings {
        let event = KeyEvent::from_descr(descr)
            .with_context(|| format!("Failed to parse binding '{}'", descr))?;
        described.push((descr.as_str(), event));
    }

    if json {
        let records: Vec<Described> = described
            .iter()
            .map(|(input, event)| Described {
                input: *input,
                record: event.to_record(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for (input, event) in &described {
            print_event(input, event);
        }
    }
    Ok(())
}

fn raw(ch: &str, state: u32, keycode: u32, json: bool) -> Result<()> {
    let event = KeyEvent::from_raw_event(ch, state, keycode).with_context(|| {
        format!(
            "Failed to decode raw event ({:?}, {:#x}, {:#x})",
            ch, state, keycode
        )
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&event.to_record())?);
    } else {
        print_event(&format!("{:?}", ch), &event);
    }
    Ok(())
}

fn layout(ch: char, us: bool) -> Result<()> {
    let layout: Box<dyn KeyboardLayout> = if us {
        Box::new(FixedLayout::us_qwerty())
    } else {
        Box::new(SystemLayout)
    };

    let event = KeyEvent::from_char(layout.as_ref(), ch, ModifierState::NONE, "")
        .with_context(|| format!("Failed to map {:?} through the keyboard layout", ch))?;
    print_event(&format!("{:?}", ch), &event);
    Ok(())
}

fn check(path: Option<std::path::PathBuf>, skip_invalid: bool) -> Result<()> {
    let policy = if skip_invalid {
        LoadPolicy::Skip
    } else {
        LoadPolicy::Strict
    };

    let (path, keymap) = match path {
        Some(path) => {
            let keymap = Keymap::with_bindings(load_keymap_file(&path, policy)?);
            (path, keymap)
        }
        None => {
            let path = keypress::config_paths::keymap_file()
                .context("No keymap path given and no config directory available")?;
            let keymap = load_user_keymap(policy)?
                .with_context(|| format!("No user keymap at {}", path.display()))?;
            (path, keymap)
        }
    };

    let mut lines: Vec<String> = keymap
        .bindings()
        .map(|(key, command)| format!("{}\t{}", key, command))
        .collect();
    lines.sort();
    for line in &lines {
        println!("{}", line);
    }

    println!("{}: {} bindings", path.display(), keymap.len());
    Ok(())
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    keypress::tracing::init(args.verbose, !args.no_log_file);
    tracing::debug!(?args, "starting");

    match args.command {
        CliCommand::Describe { bindings, json } => describe(&bindings, json),
        CliCommand::Raw {
            ch,
            state,
            keycode,
            json,
        } => raw(&ch, state, keycode, json),
        CliCommand::Layout { ch, us } => layout(ch, us),
        CliCommand::Check { path, skip_invalid } => check(path, skip_invalid),
    }
}
