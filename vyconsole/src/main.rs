use anyhow::{bail, Context, Result};
use clap::Parser;
use line_diff_core::{diff_with_options, format_json, load_file, write_export, DiffOptions};
use vyconsole::profile::{default_profile, load_profile};
use vyconsole::report::{render_summary, render_text};
use vyconsole::validate::{
    is_valid_address, is_valid_ipv4, is_valid_ipv6, is_valid_mac, is_valid_port_spec,
    normalize_mac, AddressRules,
};

mod cli;

use cli::{CheckArgs, CheckKind, Cli, Command, DiffArgs, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Diff(args) => run_diff(args),
        Command::Check(args) => run_check(args),
    }
}

fn run_diff(args: DiffArgs) -> Result<()> {
    let old = load_file(&args.old)
        .with_context(|| format!("failed to read {}", args.old.display()))?;
    let new = load_file(&args.new)
        .with_context(|| format!("failed to read {}", args.new.display()))?;

    let mut ignore_prefixes = Vec::new();
    if !args.no_default_ignores {
        ignore_prefixes.extend(default_profile().ignore_prefixes);
    }
    if let Some(path) = &args.profile {
        let profile = load_profile(path)
            .with_context(|| format!("failed to load profile {}", path.display()))?;
        ignore_prefixes.extend(profile.ignore_prefixes);
    }
    ignore_prefixes.extend(args.ignore);

    let opts = DiffOptions { ignore_prefixes };
    let lines = diff_with_options(&old, &new, &opts);

    if let Some(dir) = &args.export_dir {
        let path = write_export(dir, &lines)
            .with_context(|| format!("failed to export diff to {}", dir.display()))?;
        eprintln!("exported {}", path.display());
    }

    if args.summary {
        println!("{}", render_summary(&lines));
        return Ok(());
    }

    match args.format {
        OutputFormat::Text => println!("{}", render_text(&lines)),
        OutputFormat::Json => println!("{}", format_json(&lines)),
    }

    Ok(())
}

fn run_check(args: CheckArgs) -> Result<()> {
    let value = args.value.as_str();

    let valid = match args.kind {
        CheckKind::Ipv4 => is_valid_ipv4(value),
        CheckKind::Ipv6 => is_valid_ipv6(value),
        CheckKind::Address => is_valid_address(
            value,
            &AddressRules {
                allow_cidr: args.cidr,
                ipv6: args.ipv6,
            },
        ),
        CheckKind::Mac => is_valid_mac(value),
        CheckKind::Port => is_valid_port_spec(value, args.range),
    };

    if !valid {
        bail!("{value} is not a valid {}", kind_name(args.kind));
    }

    match args.kind {
        CheckKind::Mac if !value.is_empty() => {
            println!("valid: {}", normalize_mac(value));
        }
        _ => println!("valid"),
    }

    Ok(())
}

fn kind_name(kind: CheckKind) -> &'static str {
    match kind {
        CheckKind::Ipv4 => "IPv4 address",
        CheckKind::Ipv6 => "IPv6 address",
        CheckKind::Address => "address",
        CheckKind::Mac => "MAC address",
        CheckKind::Port => "port",
    }
}
