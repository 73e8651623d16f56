// crates/cli/src/config.rs
use crate::args::{SequenceArgs, StampArgs};
pub use rename_media_engine::config::{
    Config, ConfigBuilder, SequenceOptions, SequenceOptionsBuilder,
};

impl From<StampArgs> for Config {
    fn from(args: StampArgs) -> Self {
        let mut builder = ConfigBuilder::default();
        builder
            .root(args.dir)
            .dry_run(args.dry_run)
            .strict(args.strict)
            .no_metadata(args.no_metadata)
            .format(args.format);

        // An empty --ext means "the supported set" (the builder default).
        if !args.ext.is_empty() {
            let extensions: Vec<String> = args
                .ext
                .iter()
                .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
                .collect();
            builder.extensions(extensions);
        }

        builder.build().expect("Failed to build config")
    }
}

impl From<SequenceArgs> for SequenceOptions {
    fn from(args: SequenceArgs) -> Self {
        SequenceOptionsBuilder::default()
            .source(args.source)
            .dest(args.dest)
            .image_format(args.image_format.trim_start_matches('.').to_ascii_lowercase())
            .dry_run(args.dry_run)
            .build()
            .expect("Failed to build sequence options")
    }
}
