// SPDX-License-Identifier: MPL-2.0
use clip_lens::app::{self, Flags};
use std::path::PathBuf;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        media_url: args.opt_value_from_str("--media-url").unwrap_or(None),
        touch: args.contains("--touch"),
        album_path: args
            .finish()
            .into_iter()
            .next()
            .map(PathBuf::from),
    };

    app::run(flags)
}
