// SPDX-License-Identifier: MPL-2.0
use webgrab::app::{self, paths, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    paths::init_cli_overrides(args.opt_value_from_str("--config-dir").unwrap_or(None));

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        endpoint: args.opt_value_from_str("--endpoint").unwrap_or(None),
        start_url: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    app::run(flags)
}
