use std::io::Write;

use clap::Parser;

use crate::options::Options;

const DEFAULT_COUNTDOWN: u32 = 5;

/// Lightweight screen recorder
#[derive(Parser, Debug)]
#[command(about, long_about = None, disable_help_flag = true)]
struct Args {
    /// Write data to <OUTFILE> instead of "Untitled Recording.html"
    #[arg(short, long, value_name = "OUTFILE", overrides_with = "out")]
    out: Option<String>,
    /// Use the image format with extension <EXT>
    #[arg(
        short = 'c',
        long,
        value_name = "EXT",
        overrides_with = "image_extension"
    )]
    image_extension: Option<String>,
    /// Do not print to stdout
    #[arg(short, long, overrides_with_all = ["quiet", "verbose"])]
    quiet: bool,
    /// Print detailed information to stdout
    #[arg(short, long, overrides_with_all = ["verbose", "quiet"])]
    verbose: bool,
    /// Show usage and exit
    #[arg(short, long)]
    help: bool,
    /// Seconds to wait before recording starts, value attached with '='
    #[arg(
        long,
        value_name = "SEC",
        num_args = 0..=1,
        require_equals = true,
        overrides_with = "countdown"
    )]
    countdown: Option<Option<String>>,
    /// Output file, overrides --out
    #[arg(value_name = "OUTFILE")]
    outfile: Vec<String>,
}

/// Resolve the process argument list into recording options.
///
/// `args` is the full argument vector including the program name. Returns
/// the populated options together with a "stop now" flag, true when usage
/// text was requested or an unrecognized option was seen. Diagnostics go
/// to stderr; nothing is ever written to stdout.
pub fn resolve<I, T>(args: I) -> (Options, bool)
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    resolve_from(args, &mut std::io::stderr())
}

fn resolve_from<I, T, W>(args: I, diag: &mut W) -> (Options, bool)
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
    W: Write,
{
    let argv: Vec<String> = args.into_iter().map(Into::into).collect();
    let progname = argv.first().map(String::as_str).unwrap_or("xsr");

    // An unrecognized option behaves exactly like an explicit --help.
    let args = match Args::try_parse_from(&argv) {
        Ok(args) => args,
        Err(_) => {
            show_help(progname, diag);
            return (Options::default(), true);
        }
    };
    if args.help {
        show_help(progname, diag);
        return (Options::default(), true);
    }

    let mut options = Options {
        quiet: args.quiet,
        verbose: args.verbose,
        ..Options::default()
    };
    if let Some(out) = args.out {
        options.outfile = Some(out);
    }
    if let Some(ext) = args.image_extension {
        options.image_ext = ext;
    }
    options.countdown = match args.countdown {
        None | Some(None) => DEFAULT_COUNTDOWN,
        Some(Some(raw)) => raw.parse().unwrap_or_else(|_| {
            if !options.quiet {
                let _ = writeln!(
                    diag,
                    "Warning: invalid --countdown value \"{}\", defaulting to {} seconds",
                    raw, DEFAULT_COUNTDOWN
                );
            }
            DEFAULT_COUNTDOWN
        }),
    };

    // A trailing non-option argument wins over --out. More than one is
    // suspicious but not fatal.
    if let Some(outfile) = args.outfile.last() {
        options.outfile = Some(outfile.clone());
    }
    if args.outfile.len() > 1 && !options.quiet {
        let _ = writeln!(diag, "Warning: One or more spurious non-option arguments!");
    }

    (options, false)
}

fn show_help<W: Write>(progname: &str, diag: &mut W) {
    let _ = writeln!(
        diag,
        "Usage: {progname} [options] [outfile]\n\
         where options are:\n\n\
         --out|-o outfile\t\tWrite data to outfile instead of\n\
         \t\t\t\t\"Untitled Recording.html\"\n\n\
         --image-extension|-c ext\tUse the image format with extension ext.\n\
         \t\t\t\tDefault: png; supported: png\n\n\
         --quiet|-q\t\t\tDo not print to stdout. Implied by \"-o -\"\n\n\
         --verbose|-v\t\t\tPrint detailed information to stdout\n\n\
         --countdown[=sec]\t\tWait sec seconds before beginning to record.\n\
         \t\t\t\tDefault 5\n\n\
         https://github.com/nonnymoose/xsr"
    );
}
