// SPDX-License-Identifier: MPL-2.0
use shopfront::app::{self, Flags};

const HELP: &str = "\
Shopfront - product page with image gallery and subscription card

USAGE:
  shopfront [OPTIONS]

OPTIONS:
  --lang <LOCALE>            Display language (e.g. en-US, fr)
  --gallery-url <URL>        Gallery endpoint (JSON array of {url})
  --subscription-url <URL>   Subscription endpoint (product JSON)
  --config-dir <DIR>         Directory holding settings.toml
  -h, --help                 Print this help

ENVIRONMENT:
  SHOPFRONT_GALLERY_URL, SHOPFRONT_SUBSCRIPTION_URL, SHOPFRONT_CONFIG_DIR
  RUST_LOG                   Log filter (default: info)
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let unused = args.finish();
    if !unused.is_empty() {
        tracing::warn!(?unused, "ignoring unrecognized arguments");
    }

    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        gallery_url: args.opt_value_from_str("--gallery-url")?,
        subscription_url: args.opt_value_from_str("--subscription-url")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}
