// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galene-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galene and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Galene CLI entrypoint.
//!
//! Runs one interactive selection session over the positional items (or a
//! built-in demo list) and prints the resolved selection. Cancellation with
//! ESC or Ctrl-C exits with status 1 and leaves the terminal untouched.

use std::error::Error;

use galene::{run_selection_session, MarkSnapshot, SelectOptions};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--index <n>] [--check <n>]... [--single] [<item>...]\n\nRenders an interactive selection list. Up/down move the focus, space\ntoggles a mark, return confirms, ESC or Ctrl-C cancels.\n\n--index <n>  initial focus (out of range falls back to 0)\n--check <n>  seed mark at index n (repeatable)\n--single     single-mark mode; the first --check seeds the mark\n\nWithout items a built-in demo list is used."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    index: Option<usize>,
    checks: Vec<usize>,
    single: bool,
    items: Vec<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--index" => {
                if options.index.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let index: usize = raw.parse().map_err(|_| ())?;
                options.index = Some(index);
            }
            "--check" => {
                let raw = args.next().ok_or(())?;
                let check: usize = raw.parse().map_err(|_| ())?;
                options.checks.push(check);
            }
            "--single" => {
                if options.single {
                    return Err(());
                }
                options.single = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => options.items.push(arg),
        }
    }

    if options.single && options.checks.len() > 1 {
        return Err(());
    }

    Ok(options)
}

fn demo_items() -> Vec<String> {
    ["oceanid", "nereid", "naiad", "potamide"].map(str::to_owned).to_vec()
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "galene".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let items = if options.items.is_empty() { demo_items() } else { options.items.clone() };

        let mut select = SelectOptions::<String>::new();
        if let Some(index) = options.index {
            select = select.with_index(index);
        }
        select = if options.single {
            select.with_single_check(options.checks.first().copied())
        } else {
            select.with_checks(options.checks.clone())
        };

        let outcome = run_selection_session(&items, select)?;

        println!("index: {}", outcome.index);
        match outcome.checks {
            MarkSnapshot::Multiple(checks) => {
                let picked: Vec<&str> =
                    checks.iter().filter_map(|&i| items.get(i)).map(String::as_str).collect();
                println!("checks: {checks:?} {picked:?}");
            }
            MarkSnapshot::Single(check) => match check {
                Some(check) => {
                    let picked = items.get(check).map(String::as_str).unwrap_or("?");
                    println!("check: {check} ({picked})");
                }
                None => println!("check: none"),
            },
        }

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("galene: {err}");
        std::process::exit(1);
    }
}
